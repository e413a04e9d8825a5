mod cell;
mod food;
mod snake;
pub(crate) use self::cell::{Cell, Heading};
use self::food::Food;
use self::snake::Snake;
use crate::command::Intent;
use crate::consts;
use crate::geometry::Geometry;
use crate::options::Options;
use crate::surface::{ScoreSink, Surface};
use log::{debug, warn};
use rand::Rng;
use std::collections::HashSet;
use std::fmt;

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Game<R = rand::rngs::ThreadRng> {
    rng: R,
    score: u32,
    snake: Snake,
    food: Food,
    options: Options,
}

impl Game<rand::rngs::ThreadRng> {
    pub(crate) fn new(options: Options) -> Self {
        Game::new_with_rng(options, rand::rng())
    }
}

impl<R: Rng> Game<R> {
    pub(crate) fn new_with_rng(options: Options, rng: R) -> Game<R> {
        let mut game = Game {
            rng,
            score: 0,
            snake: Snake::new(options.origin),
            food: Food::new(options.auras),
            options,
        };
        game.place_food();
        game
    }

    /// Run one tick of the game: draw the current state on `surface`, move
    /// the snake, then either start over (if the snake left the board or hit
    /// itself) or eat the food (if the snake reached it).  `scores` is told
    /// about every change to the score.
    pub(crate) fn update<S: Surface, K: ScoreSink>(
        &mut self,
        geometry: &Geometry,
        surface: &mut S,
        scores: &mut K,
    ) -> Tick {
        self.draw(geometry, surface);
        self.snake.advance();
        let head = self.snake.head();
        let death = if !head.within(self.options.board_length) {
            Some(Death::OutOfBounds)
        } else if !self.snake.is_alive() {
            Some(Death::SelfCollision)
        } else {
            None
        };
        if let Some(death) = death {
            debug!(
                "Snake died at ({}, {}) with score {}: {death}",
                head.x, head.y, self.score
            );
            self.reset(scores);
            return Tick::Died(death);
        }
        if self.food.position() == Some(head) {
            self.score += 1;
            scores.show_score(self.score);
            self.snake.grow();
            self.place_food();
            debug!("Snake ate at ({}, {}); score is now {}", head.x, head.y, self.score);
            return Tick::Ate;
        }
        Tick::Moved
    }

    /// Start the game over: zero score, snake back at the origin, food
    /// somewhere new
    fn reset<K: ScoreSink>(&mut self, scores: &mut K) {
        self.score = 0;
        self.snake.reset(self.options.origin);
        self.place_food();
        scores.show_score(self.score);
    }

    fn place_food(&mut self) {
        let occupied = self.snake.cells().collect::<HashSet<_>>();
        if self
            .food
            .reset(&mut self.rng, &occupied, self.options.board_length)
            .is_none()
        {
            warn!("No free cell left to place the food in");
        }
    }
}

impl<R> Game<R> {
    /// Ask the snake to head in the direction of `intent`.  Returns whether
    /// the snake's heading changed.
    pub(crate) fn steer(&mut self, intent: Intent) -> bool {
        self.snake.set_heading(Heading::from(intent))
    }

    pub(crate) fn score(&self) -> u32 {
        self.score
    }

    /// Draw the board, food, and snake on `surface`.  This steps the food's
    /// aura animation but otherwise leaves the game untouched.
    pub(crate) fn draw<S: Surface>(&mut self, geometry: &Geometry, surface: &mut S) {
        surface.clear();
        surface.stroke_lines(
            &geometry.grid_lines(),
            consts::GRID_COLOR,
            consts::GRID_LINE_WIDTH,
        );
        self.food.draw(geometry, surface, consts::FOOD_COLOR);
        self.draw_snake(geometry, surface);
    }

    /// Draw the head solid and the trail fading away behind it
    #[allow(clippy::cast_precision_loss)]
    fn draw_snake<S: Surface>(&self, geometry: &Geometry, surface: &mut S) {
        surface.fill_rect(
            geometry.cell_rect(self.snake.head()),
            consts::SNAKE_COLOR,
            1.0,
        );
        let trail = self.snake.trail();
        if trail.is_empty() {
            return;
        }
        let min_opacity = if trail.len() > consts::SHORT_TRAIL_LEN {
            consts::TRAIL_MIN_OPACITY_LONG
        } else {
            consts::TRAIL_MIN_OPACITY_SHORT
        };
        let fade = (1.0 - min_opacity) / trail.len() as f64;
        let mut opacity = 1.0;
        for &cell in trail {
            opacity -= fade;
            surface.fill_rect(geometry.cell_rect(cell), consts::SNAKE_COLOR, opacity);
        }
    }
}

/// What happened during a tick
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Tick {
    /// The snake moved (or stayed still) without incident
    Moved,
    /// The snake ate the food
    Ate,
    /// The snake died and the game started over
    Died(Death),
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Death {
    OutOfBounds,
    SelfCollision,
}

impl fmt::Display for Death {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Death::OutOfBounds => write!(f, "left the board"),
            Death::SelfCollision => write!(f, "ran into its own trail"),
        }
    }
}
