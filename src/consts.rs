//! Assorted constants & hard-coded configuration
use crate::surface::Rgb;
use ratatui::style::{Modifier, Style};
use std::time::Duration;

/// Default number of game ticks per second
pub(crate) const SPEED: u32 = 12;

/// Default number of cells along each side of the (square) board
pub(crate) const BOARD_LENGTH: u16 = 17;

/// Default cell at which the snake starts, and restarts after dying
pub(crate) const ORIGIN: (i32, i32) = (2, 13);

/// Time between display frames.  The tick driver is re-armed once per frame.
pub(crate) const FRAME_PERIOD: Duration = Duration::from_millis(16);

/// Color of the snake's head and trail
pub(crate) const SNAKE_COLOR: Rgb = Rgb::new(0x0F, 0x9D, 0x58);

/// Color of the food and its auras
pub(crate) const FOOD_COLOR: Rgb = Rgb::new(0xDB, 0x44, 0x37);

/// Color of the decorative background grid
pub(crate) const GRID_COLOR: Rgb = Rgb::new(0x3C, 0x40, 0x43);

/// Color that a cleared surface is filled with
pub(crate) const BACKGROUND_COLOR: Rgb = Rgb::new(0x00, 0x00, 0x00);

/// Width, in pixels, of the background grid lines
pub(crate) const GRID_LINE_WIDTH: f64 = 1.0;

/// Fraction of a cell covered by the solid center of the food
pub(crate) const FOOD_CORE_SCALE: f64 = 0.55;

/// Default `(max, opacity)` pairs for the food's two aura oscillators
pub(crate) const AURAS: [(f64, f64); 2] = [(0.65, 0.3), (1.0, 0.2)];

/// Smallest value an aura oscillator swings down to, in hundredths of a cell
pub(crate) const AURA_MIN_PCT: u16 = 50;

/// Amount by which an aura oscillator changes per drawn frame, in hundredths
/// of a cell
pub(crate) const AURA_STEP_PCT: u16 = 10;

/// Opacity of the last trail segment when the trail is long
pub(crate) const TRAIL_MIN_OPACITY_LONG: f64 = 0.25;

/// Opacity of the last trail segment when the trail has at most
/// [`SHORT_TRAIL_LEN`] segments
pub(crate) const TRAIL_MIN_OPACITY_SHORT: f64 = 0.5;

/// Longest trail that still fades out to [`TRAIL_MIN_OPACITY_SHORT`]
pub(crate) const SHORT_TRAIL_LEN: usize = 3;

/// Style for the score bar at the top of the screen
pub(crate) const SCORE_BAR_STYLE: Style = Style::new().add_modifier(Modifier::REVERSED);

/// Glyph used to pack two vertically-stacked pixels into one terminal cell
pub(crate) const HALF_BLOCK: char = '▀';
