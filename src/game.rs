//! This module defines the `Game` struct, which replays one move sequence against a fresh
//! turtle and decides its outcome. A game can be stepped one character at a time or run
//! to completion.

use crate::turtle::Turtle;
use crate::types::{Command, GameSettings, MoveResult, MoveSequence, Outcome, Step};
use tracing::{debug, trace};

/// One move sequence being played on a given set of settings.
pub struct Game<'a> {
    settings: &'a GameSettings,
    moves: Vec<char>,
    turtle: Turtle,
    cursor: usize,
    outcome: Option<Outcome>,
}

impl<'a> Game<'a> {
    /// Creates a new `Game` with the turtle on its start cell.
    ///
    /// # Arguments
    ///
    /// * `settings` - The shared, read-only game settings.
    /// * `sequence` - The moves to replay.
    pub fn new(settings: &'a GameSettings, sequence: &MoveSequence) -> Self {
        Self {
            settings,
            moves: sequence.chars(),
            turtle: Turtle::new(&settings.start),
            cursor: 0,
            outcome: None,
        }
    }

    /// Processes the next character of the sequence.
    ///
    /// `m` moves the turtle: hitting a mine ends the game with `Outcome::MineHit`, and
    /// landing on the exit ends it with `Outcome::Success`. A move blocked by the board
    /// edge changes nothing. `r` turns the turtle right. Other characters are skipped.
    /// Once the sequence is exhausted the game ends with `Outcome::Success` if the
    /// turtle is on the exit and `Outcome::StillInDanger` otherwise.
    ///
    /// # Returns
    ///
    /// * `Step::Continue` if characters remain.
    /// * `Step::Done(_)` once the game is over. Further calls return the same outcome.
    pub fn step(&mut self) -> Step {
        if let Some(outcome) = self.outcome {
            return Step::Done(outcome);
        }

        let Some(&c) = self.moves.get(self.cursor) else {
            return self.finish(if self.turtle.is_at(self.settings.exit) {
                Outcome::Success
            } else {
                Outcome::StillInDanger
            });
        };
        self.cursor += 1;

        match Command::from_char(c) {
            Some(Command::Move) => match self.turtle.move_forward(&self.settings.board) {
                MoveResult::Mine => return self.finish(Outcome::MineHit),
                MoveResult::Moved if self.turtle.is_at(self.settings.exit) => {
                    return self.finish(Outcome::Success)
                }
                MoveResult::Moved | MoveResult::Blocked => {}
            },
            Some(Command::RotateRight) => self.turtle.rotate_right(),
            None => trace!(command = ?c, "ignored"),
        }

        Step::Continue
    }

    /// Steps the game until it is over and returns the outcome.
    pub fn run(&mut self) -> Outcome {
        loop {
            if let Step::Done(outcome) = self.step() {
                return outcome;
            }
        }
    }

    /// Returns the turtle in its current state.
    pub fn turtle(&self) -> &Turtle {
        &self.turtle
    }

    /// Returns the number of characters processed so far.
    pub fn step_count(&self) -> usize {
        self.cursor
    }

    /// Returns the character processed by the most recent step, if any.
    pub fn last_command(&self) -> Option<char> {
        self.cursor.checked_sub(1).and_then(|i| self.moves.get(i).copied())
    }

    /// Returns the outcome if the game is over.
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    fn finish(&mut self, outcome: Outcome) -> Step {
        debug!(
            %outcome,
            steps = self.cursor,
            position = %self.turtle.position(),
            "game over"
        );
        self.outcome = Some(outcome);
        Step::Done(outcome)
    }
}

/// Plays `sequence` on `settings` and returns its outcome.
pub fn play(settings: &GameSettings, sequence: &MoveSequence) -> Outcome {
    Game::new(settings, sequence).run()
}
