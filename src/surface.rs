//! The collaborators that the game draws onto and reports its score to
use crate::geometry::{PixelRect, Segment};
use ratatui::style::Color;

/// A 24-bit color
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) struct Rgb {
    pub(crate) r: u8,
    pub(crate) g: u8,
    pub(crate) b: u8,
}

impl Rgb {
    pub(crate) const fn new(r: u8, g: u8, b: u8) -> Rgb {
        Rgb { r, g, b }
    }

    /// Composite `top` over `self` at the given opacity.  `alpha` is clamped
    /// to `0.0..=1.0`.
    pub(crate) fn blend(self, top: Rgb, alpha: f64) -> Rgb {
        let alpha = alpha.clamp(0.0, 1.0);
        Rgb {
            r: mix(self.r, top.r, alpha),
            g: mix(self.g, top.g, alpha),
            b: mix(self.b, top.b, alpha),
        }
    }
}

impl From<Rgb> for Color {
    fn from(value: Rgb) -> Color {
        Color::Rgb(value.r, value.g, value.b)
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn mix(below: u8, above: u8, alpha: f64) -> u8 {
    let v = f64::from(above).mul_add(alpha, f64::from(below) * (1.0 - alpha));
    v.round().clamp(0.0, 255.0) as u8
}

/// A pixel-addressed drawing surface
pub(crate) trait Surface {
    /// Erase everything drawn so far
    fn clear(&mut self);

    /// Fill `rect` with `color` at opacity `alpha` (`0.0..=1.0`)
    fn fill_rect(&mut self, rect: PixelRect, color: Rgb, alpha: f64);

    /// Draw each of `lines` as an opaque stroke `width` pixels wide
    fn stroke_lines(&mut self, lines: &[Segment], color: Rgb, width: f64);
}

/// Somewhere to show the current score.  Called each time the score changes.
pub(crate) trait ScoreSink {
    fn show_score(&mut self, score: u32);
}
