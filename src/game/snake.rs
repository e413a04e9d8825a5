use super::cell::{Cell, Heading};
use std::collections::VecDeque;

/// The snake: a head, the trail behind it, and where it is going.
///
/// All positions are relative to the top-left corner of the board.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(super) struct Snake {
    /// The position of the snake's head
    pub(super) head: Cell,

    /// The cells of the snake's trail, with the one nearest the head first.
    /// There is one segment per point scored.
    pub(super) trail: VecDeque<Cell>,

    /// How far the snake moves each tick
    pub(super) heading: Heading,

    /// The cell the snake moved out of on the last call to `advance()`, if
    /// any
    vacated: Option<Cell>,
}

impl Snake {
    /// Create a new snake sitting still at `origin` with an empty trail
    pub(super) fn new(origin: Cell) -> Snake {
        Snake {
            head: origin,
            trail: VecDeque::new(),
            heading: Heading::STILL,
            vacated: None,
        }
    }

    /// Put the snake back at `origin`, sitting still, with no trail
    pub(super) fn reset(&mut self, origin: Cell) {
        *self = Snake::new(origin);
    }

    /// Return the position of the snake's head
    pub(super) fn head(&self) -> Cell {
        self.head
    }

    /// Return the cells of the snake's trail, nearest the head first
    pub(super) fn trail(&self) -> &VecDeque<Cell> {
        &self.trail
    }

    /// Return every cell the snake occupies, head first
    pub(super) fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        std::iter::once(self.head).chain(self.trail.iter().copied())
    }

    /// Try to change the snake's heading.  A change is only accepted if it
    /// sets a nonzero component on an axis along which the snake is not
    /// currently moving; thus the snake can turn but never reverse in place.
    /// Returns whether the heading was changed.
    pub(super) fn set_heading(&mut self, heading: Heading) -> bool {
        if (self.heading.dx == 0 && heading.dx != 0) || (self.heading.dy == 0 && heading.dy != 0) {
            self.heading = heading;
            true
        } else {
            false
        }
    }

    /// Is the head clear of the trail?
    pub(super) fn is_alive(&self) -> bool {
        !self.trail.contains(&self.head)
    }

    /// Move the snake one step along its heading.  The trail follows along
    /// behind the head, keeping its length.
    pub(super) fn advance(&mut self) {
        let old_head = self.head;
        self.head = old_head + self.heading;
        self.vacated = if self.heading.is_still() {
            None
        } else if let Some(tail) = self.trail.pop_back() {
            self.trail.push_front(old_head);
            Some(tail)
        } else {
            Some(old_head)
        };
    }

    /// Lengthen the trail by one segment, placed in the cell the snake last
    /// moved out of
    pub(super) fn grow(&mut self) {
        let segment = self
            .vacated
            .take()
            .or_else(|| self.trail.back().copied())
            .unwrap_or(self.head);
        self.trail.push_back(segment);
    }
}
