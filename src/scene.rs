//! A display list that the game draws into, and the widgets that put it (and
//! the score) on the terminal
use crate::consts;
use crate::geometry::{PixelRect, Point, Segment};
use crate::surface::{Rgb, ScoreSink, Surface};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::Line,
    widgets::Widget,
};
use std::ops::Range;

/// A single recorded drawing operation
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum DrawOp {
    Fill {
        rect: PixelRect,
        color: Rgb,
        alpha: f64,
    },
    Stroke {
        lines: Vec<Segment>,
        color: Rgb,
        width: f64,
    },
}

/// A [`Surface`] that records what is drawn on it so that it can be rendered
/// to the terminal as often as needed.
///
/// When rendered, each terminal cell shows two pixels, one above the other,
/// so a `w`×`h` cell area holds a `w`×`2h` pixel image.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Scene {
    ops: Vec<DrawOp>,
    background: Rgb,
}

impl Scene {
    pub(crate) fn new() -> Scene {
        Scene {
            ops: Vec::new(),
            background: consts::BACKGROUND_COLOR,
        }
    }

    #[cfg(test)]
    pub(crate) fn ops(&self) -> &[DrawOp] {
        &self.ops
    }
}

impl Surface for Scene {
    fn clear(&mut self) {
        self.ops.clear();
    }

    fn fill_rect(&mut self, rect: PixelRect, color: Rgb, alpha: f64) {
        self.ops.push(DrawOp::Fill { rect, color, alpha });
    }

    fn stroke_lines(&mut self, lines: &[Segment], color: Rgb, width: f64) {
        self.ops.push(DrawOp::Stroke {
            lines: lines.to_vec(),
            color,
            width,
        });
    }
}

impl Widget for &Scene {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut raster = Raster::new(area.width, area.height, self.background);
        for op in &self.ops {
            match op {
                DrawOp::Fill { rect, color, alpha } => raster.fill(*rect, *color, *alpha),
                DrawOp::Stroke {
                    lines,
                    color,
                    width,
                } => {
                    for seg in lines {
                        raster.stroke(*seg, *color, *width);
                    }
                }
            }
        }
        for row in 0..area.height {
            for col in 0..area.width {
                let Some(x) = area.x.checked_add(col) else {
                    continue;
                };
                let Some(y) = area.y.checked_add(row) else {
                    continue;
                };
                let (top, bottom) = raster.cell_pixels(col, row);
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_char(consts::HALF_BLOCK)
                        .set_fg(top.into())
                        .set_bg(bottom.into());
                }
            }
        }
    }
}

/// An RGB pixel buffer
#[derive(Clone, Debug, Eq, PartialEq)]
struct Raster {
    width: usize,
    height: usize,
    pixels: Vec<Rgb>,
}

impl Raster {
    /// Create a raster covering `cols`×`rows` terminal cells
    fn new(cols: u16, rows: u16, background: Rgb) -> Raster {
        let width = usize::from(cols);
        let height = usize::from(rows) * 2;
        Raster {
            width,
            height,
            pixels: vec![background; width * height],
        }
    }

    /// Return the upper & lower pixels shown in the terminal cell at
    /// (`col`, `row`)
    fn cell_pixels(&self, col: u16, row: u16) -> (Rgb, Rgb) {
        let x = usize::from(col);
        let y = usize::from(row) * 2;
        (
            self.pixels[y * self.width + x],
            self.pixels[(y + 1) * self.width + x],
        )
    }

    /// Blend `color` into every pixel whose center lies within `rect`
    fn fill(&mut self, rect: PixelRect, color: Rgb, alpha: f64) {
        let xs = pixel_span(rect.x, rect.right(), self.width);
        for y in pixel_span(rect.y, rect.bottom(), self.height) {
            for x in xs.clone() {
                let px = &mut self.pixels[y * self.width + x];
                *px = px.blend(color, alpha);
            }
        }
    }

    fn stroke(&mut self, seg: Segment, color: Rgb, width: f64) {
        let half = width / 2.0;
        let Segment { start, end } = seg;
        let bounds = PixelRect::new(
            start.x.min(end.x) - half,
            start.y.min(end.y) - half,
            (start.x - end.x).abs() + width,
            (start.y - end.y).abs() + width,
        );
        if (start.x - end.x).abs() < f64::EPSILON || (start.y - end.y).abs() < f64::EPSILON {
            self.fill(bounds, color, 1.0);
            return;
        }
        let xs = pixel_span(bounds.x, bounds.right(), self.width);
        for y in pixel_span(bounds.y, bounds.bottom(), self.height) {
            for x in xs.clone() {
                let center = Point::new(to_f64(x) + 0.5, to_f64(y) + 0.5);
                if seg.distance_to(center) <= half {
                    self.pixels[y * self.width + x] = color;
                }
            }
        }
    }
}

/// Return the indices of the pixels, out of `0..limit`, whose centers lie in
/// `start..end`
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn pixel_span(start: f64, end: f64, limit: usize) -> Range<usize> {
    let limit_f = to_f64(limit);
    let lo = (start - 0.5).ceil().clamp(0.0, limit_f) as usize;
    let hi = (end - 0.5).ceil().clamp(0.0, limit_f) as usize;
    lo..hi.max(lo)
}

#[allow(clippy::cast_precision_loss)]
fn to_f64(n: usize) -> f64 {
    // Rasters are at most 65535×131070 pixels, which f64 represents exactly.
    n as f64
}

/// The line at the top of the screen showing the current score
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct ScoreBar {
    score: u32,
}

impl ScoreSink for ScoreBar {
    fn show_score(&mut self, score: u32) {
        self.score = score;
    }
}

impl Widget for &ScoreBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Line::styled(format!(" Score: {}", self.score), consts::SCORE_BAR_STYLE).render(area, buf);
    }
}
