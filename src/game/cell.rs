use crate::command::Intent;
use std::ops::Add;

/// A cell on the board.
///
/// Coordinates are signed so that a head which has just stepped off the top
/// or left edge can be represented before the boundary check sees it.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub(crate) struct Cell {
    pub(crate) x: i32,
    pub(crate) y: i32,
}

impl Cell {
    pub(crate) const fn new(x: i32, y: i32) -> Cell {
        Cell { x, y }
    }

    /// Is the cell on a board with `length` cells on a side?
    pub(crate) fn within(self, length: u16) -> bool {
        let length = i32::from(length);
        (0..length).contains(&self.x) && (0..length).contains(&self.y)
    }
}

impl From<(i32, i32)> for Cell {
    fn from((x, y): (i32, i32)) -> Cell {
        Cell { x, y }
    }
}

impl Add<Heading> for Cell {
    type Output = Cell;

    fn add(self, heading: Heading) -> Cell {
        Cell {
            x: self.x + i32::from(heading.dx),
            y: self.y + i32::from(heading.dy),
        }
    }
}

/// The distance the snake moves each tick.  At most one axis is nonzero.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub(crate) struct Heading {
    pub(crate) dx: i8,
    pub(crate) dy: i8,
}

impl Heading {
    /// The heading of a snake that hasn't started moving yet
    pub(crate) const STILL: Heading = Heading { dx: 0, dy: 0 };

    pub(crate) const fn new(dx: i8, dy: i8) -> Heading {
        Heading { dx, dy }
    }

    pub(crate) fn is_still(self) -> bool {
        self == Heading::STILL
    }
}

impl From<Intent> for Heading {
    fn from(intent: Intent) -> Heading {
        match intent {
            Intent::Left => Heading::new(-1, 0),
            Intent::Right => Heading::new(1, 0),
            Intent::Up => Heading::new(0, -1),
            Intent::Down => Heading::new(0, 1),
        }
    }
}
