//! This module defines the `Turtle` struct, the state machine that walks the board. It
//! tracks the turtle's position and heading and handles rotation, movement, mine
//! collisions and board boundaries.

use crate::types::{Board, Heading, MoveResult, Position, StartState};
use tracing::trace;

/// A turtle on the board.
///
/// The position and heading can only change through [`Turtle::rotate_right`] and
/// [`Turtle::move_forward`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turtle {
    position: Position,
    heading: Heading,
}

impl Turtle {
    /// Creates a new `Turtle` standing on the start cell and facing the start heading.
    pub fn new(start: &StartState) -> Self {
        Self {
            position: start.position,
            heading: start.heading,
        }
    }

    /// Turns the turtle 90 degrees clockwise.
    pub fn rotate_right(&mut self) {
        self.heading = self.heading.next_clockwise();
        trace!(heading = %self.heading, "rotated");
    }

    /// Tries to step one cell in the current heading.
    ///
    /// The mine check comes first, so a mine placed outside the bounds is still hit.
    /// The turtle only changes cell when the result is `MoveResult::Moved`.
    ///
    /// # Returns
    ///
    /// * `MoveResult::Mine` if the next cell holds a mine.
    /// * `MoveResult::Blocked` if the next cell is off the board or past the `i32` range.
    /// * `MoveResult::Moved` otherwise.
    pub fn move_forward(&mut self, board: &Board) -> MoveResult {
        let Some(next) = self.position.step(self.heading) else {
            trace!(from = %self.position, heading = %self.heading, "move out of range");
            return MoveResult::Blocked;
        };

        let result = if board.is_mine(next) {
            MoveResult::Mine
        } else if board.contains(next) {
            self.position = next;
            MoveResult::Moved
        } else {
            MoveResult::Blocked
        };

        trace!(from = %self.position, to = %next, ?result, "move");
        result
    }

    /// Checks whether the turtle stands on `exit`.
    pub fn is_at(&self, exit: Position) -> bool {
        self.position == exit
    }

    /// Returns the current position.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Returns the current heading.
    pub fn heading(&self) -> Heading {
        self.heading
    }
}
