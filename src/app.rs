use crate::command::Command;
use crate::consts;
use crate::game::{Game, Tick};
use crate::geometry::Geometry;
use crate::options::Options;
use crate::scene::{Scene, ScoreBar};
use crate::tick::TickDriver;
use crate::util::center_rect;
use crossterm::event::{poll, read, Event};
use log::{debug, info, trace};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Layout, Position, Rect, Size},
    Frame, Terminal,
};
use std::io;
use std::time::Instant;

#[derive(Clone, Debug)]
pub(crate) struct App {
    game: Game,
    driver: TickDriver,
    board_length: u16,
    viewport: Option<Viewport>,
    scene: Scene,
    score_bar: ScoreBar,
    deaths: u32,
    quitting: bool,
}

impl App {
    pub(crate) fn new(options: Options) -> App {
        App {
            game: Game::new(options),
            driver: TickDriver::new(options.speed),
            board_length: options.board_length,
            viewport: None,
            scene: Scene::new(),
            score_bar: ScoreBar::default(),
            deaths: 0,
            quitting: false,
        }
    }

    pub(crate) fn run<B: Backend>(mut self, mut terminal: Terminal<B>) -> io::Result<()> {
        self.resize(terminal.size()?);
        debug!("Ticking every {:?}", self.driver.period());
        while !self.quitting {
            let frame_start = Instant::now();
            if self.driver.frame_at(frame_start) {
                self.tick();
            }
            terminal.draw(|frame| self.draw(frame))?;
            let next_frame = frame_start + consts::FRAME_PERIOD;
            while !self.quitting {
                let wait = next_frame.saturating_duration_since(Instant::now());
                if wait.is_zero() || !poll(wait)? {
                    break;
                }
                self.handle_event(read()?);
            }
        }
        info!(
            "Exiting with a score of {} after {} deaths",
            self.game.score(),
            self.deaths
        );
        Ok(())
    }

    /// Advance the game by one tick.  Nothing happens while the terminal is
    /// too small to show the board.
    fn tick(&mut self) {
        let Some(viewport) = self.viewport else {
            return;
        };
        let outcome = self
            .game
            .update(&viewport.geometry, &mut self.scene, &mut self.score_bar);
        if let Tick::Died(_) = outcome {
            self.deaths += 1;
        }
    }

    fn draw(&self, frame: &mut Frame<'_>) {
        let [score_area, _] = screen_layout(frame.area());
        frame.render_widget(&self.score_bar, score_area);
        if let Some(viewport) = self.viewport {
            frame.render_widget(&self.scene, viewport.area);
        }
    }

    fn handle_event(&mut self, event: Event) {
        if let Event::Resize(width, height) = event {
            self.resize(Size { width, height });
            return;
        }
        let Some(cmd) = event.as_key_press_event().and_then(Command::from_key_event) else {
            return;
        };
        match cmd {
            Command::Quit => self.quitting = true,
            Command::Steer(intent) => {
                if !self.game.steer(intent) {
                    trace!("Ignoring turn {intent:?}");
                }
            }
        }
    }

    fn resize(&mut self, size: Size) {
        self.viewport = Viewport::for_terminal(size, self.board_length);
        match self.viewport {
            Some(vp) => debug!(
                "Terminal is {}x{}; board is {} pixels across with {}-pixel cells",
                size.width,
                size.height,
                vp.geometry.width(),
                vp.geometry.cell_size()
            ),
            None => debug!(
                "Terminal is {}x{}, too small to show the board; pausing",
                size.width, size.height
            ),
        }
    }
}

/// Split the screen into the score bar and the area below it
fn screen_layout(area: Rect) -> [Rect; 2] {
    Layout::vertical([Constraint::Length(1), Constraint::Fill(1)]).areas(area)
}

/// Where on the terminal the board is drawn, and the pixel geometry of that
/// region
#[derive(Clone, Copy, Debug, PartialEq)]
struct Viewport {
    area: Rect,
    geometry: Geometry,
}

impl Viewport {
    /// Place the board below the score bar of a terminal of the given size.
    /// The board is the largest square, in pixels, that fits there with a
    /// whole number of pixels per cell.  Each terminal cell is one pixel wide
    /// and two tall.
    ///
    /// Returns `None` if not even one pixel per cell fits.
    fn for_terminal(size: Size, board_length: u16) -> Option<Viewport> {
        let [_, below] = screen_layout(Rect::from((Position::ORIGIN, size)));
        let side = below.width.min(below.height.saturating_mul(2));
        let side = side - side.checked_rem(board_length)?;
        let geometry = Geometry::new(f64::from(side), f64::from(side), board_length)?;
        let area = center_rect(below, Size::new(side, side.div_ceil(2)));
        Some(Viewport { area, geometry })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::Intent;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::backend::TestBackend;
    use rstest::rstest;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[rstest]
    #[case(Size::new(80, 24), 17, 34, 17)]
    #[case(Size::new(40, 10), 17, 17, 9)]
    #[case(Size::new(20, 80), 17, 17, 9)]
    #[case(Size::new(100, 50), 10, 90, 45)]
    fn test_viewport(
        #[case] size: Size,
        #[case] board_length: u16,
        #[case] side: u16,
        #[case] rows: u16,
    ) {
        let vp = Viewport::for_terminal(size, board_length).unwrap();
        assert_eq!(vp.area.width, side);
        assert_eq!(vp.area.height, rows);
        assert!(vp.area.y >= 1, "board overlaps score bar");
        assert_eq!(
            vp.geometry,
            Geometry::new(f64::from(side), f64::from(side), board_length).unwrap()
        );
    }

    #[rstest]
    #[case(Size::new(16, 24))]
    #[case(Size::new(80, 8))]
    #[case(Size::new(80, 1))]
    #[case(Size::new(0, 0))]
    fn test_viewport_too_small(#[case] size: Size) {
        assert_eq!(Viewport::for_terminal(size, 17), None);
    }

    #[test]
    fn quit_keys() {
        for ev in [
            key(KeyCode::Char('q')),
            key(KeyCode::Esc),
            Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
        ] {
            let mut app = App::new(Options::default());
            app.handle_event(ev.clone());
            assert!(app.quitting, "{ev:?} should quit");
        }
    }

    #[test]
    fn steering() {
        let mut app = App::new(Options::default());
        app.handle_event(key(KeyCode::Up));
        assert!(!app.quitting);
        assert!(!app.game.steer(Intent::Down));
        assert!(app.game.steer(Intent::Left));
    }

    #[test]
    fn unmapped_key() {
        let mut app = App::new(Options::default());
        app.handle_event(key(KeyCode::Char('x')));
        assert!(!app.quitting);
        assert!(app.game.steer(Intent::Down));
    }

    #[test]
    fn resize_event() {
        let mut app = App::new(Options::default());
        assert_eq!(app.viewport, None);
        app.handle_event(Event::Resize(80, 24));
        assert_eq!(app.viewport.map(|vp| vp.area.width), Some(34));
        app.handle_event(Event::Resize(10, 5));
        assert_eq!(app.viewport, None);
    }

    #[test]
    fn no_tick_without_viewport() {
        let mut app = App::new(Options::default());
        app.tick();
        assert!(app.scene.ops().is_empty());
        app.resize(Size::new(80, 24));
        app.tick();
        assert!(!app.scene.ops().is_empty());
    }

    #[test]
    fn draw_score_and_board() {
        let mut app = App::new(Options::default());
        app.resize(Size::new(40, 10));
        app.tick();
        let mut terminal = Terminal::new(TestBackend::new(40, 10)).unwrap();
        terminal.draw(|frame| app.draw(frame)).unwrap();
        let buffer = terminal.backend().buffer();
        let top = (0..40)
            .map(|x| buffer[(x, 0)].symbol())
            .collect::<String>();
        assert_eq!(top.trim_end(), " Score: 0");
        let area = app.viewport.unwrap().area;
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                assert_eq!(buffer[(x, y)].symbol(), "▀", "cell ({x}, {y})");
            }
        }
    }
}
