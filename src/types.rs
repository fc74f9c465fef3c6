//! This module defines the core data structures and types used throughout the turtle
//! simulator, including board and settings representation, headings, move commands,
//! outcomes, and error types.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use thiserror::Error;

use crate::Rule;

/// A cell on the board, addressed by column `x` and row `y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the neighbouring cell one step towards `heading`, or `None` if that cell
    /// cannot be addressed with `i32` coordinates.
    ///
    /// North decreases `y`, South increases it. East increases `x`, West decreases it.
    pub fn step(self, heading: Heading) -> Option<Self> {
        match heading {
            Heading::North => Some(Self::new(self.x, self.y.checked_sub(1)?)),
            Heading::East => Some(Self::new(self.x.checked_add(1)?, self.y)),
            Heading::South => Some(Self::new(self.x, self.y.checked_add(1)?)),
            Heading::West => Some(Self::new(self.x.checked_sub(1)?, self.y)),
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// The cardinal direction the turtle is facing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Heading {
    North,
    East,
    South,
    West,
}

impl Heading {
    /// All headings in clockwise order, starting from North.
    pub const ALL: [Heading; 4] = [Heading::North, Heading::East, Heading::South, Heading::West];

    /// Returns the heading reached by turning 90 degrees clockwise.
    pub fn next_clockwise(self) -> Self {
        match self {
            Heading::North => Heading::East,
            Heading::East => Heading::South,
            Heading::South => Heading::West,
            Heading::West => Heading::North,
        }
    }

    /// Looks up a heading by name, ignoring ASCII case.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|heading| heading.name().eq_ignore_ascii_case(name))
    }

    pub fn name(self) -> &'static str {
        match self {
            Heading::North => "North",
            Heading::East => "East",
            Heading::South => "South",
            Heading::West => "West",
        }
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The board the turtle walks on, together with its mines.
///
/// `n` and `m` are the two numbers from the first line of the settings file, in
/// that order. A cell `(x, y)` is on the board when `0 <= x <= m` and `0 <= y < n`.
/// The `x` bound is inclusive while the `y` bound is exclusive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub n: i32,
    pub m: i32,
    pub mines: BTreeSet<Position>,
}

impl Board {
    pub fn new(n: i32, m: i32, mines: impl IntoIterator<Item = Position>) -> Self {
        Self {
            n,
            m,
            mines: mines.into_iter().collect(),
        }
    }

    /// Checks whether `position` lies within the board bounds.
    pub fn contains(&self, position: Position) -> bool {
        (0..=self.m).contains(&position.x) && (0..self.n).contains(&position.y)
    }

    /// Checks whether a mine sits on `position`. Mines outside the bounds still count.
    pub fn is_mine(&self, position: Position) -> bool {
        self.mines.contains(&position)
    }
}

/// Where the turtle starts and which way it faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartState {
    pub position: Position,
    pub heading: Heading,
}

/// Everything read from a game settings file. Read-only once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSettings {
    pub board: Board,
    pub start: StartState,
    pub exit: Position,
}

/// A single line of the moves file.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MoveSequence(String);

impl MoveSequence {
    pub fn new(moves: impl Into<String>) -> Self {
        Self(moves.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the raw characters of the sequence, recognised or not.
    pub fn chars(&self) -> Vec<char> {
        self.0.chars().collect()
    }
}

impl From<&str> for MoveSequence {
    fn from(moves: &str) -> Self {
        Self::new(moves)
    }
}

/// An instruction understood by the turtle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// `m`: step one cell forward.
    Move,
    /// `r`: turn 90 degrees clockwise.
    RotateRight,
}

impl Command {
    /// Decodes a move character. Anything other than `m` or `r` has no meaning.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'm' => Some(Command::Move),
            'r' => Some(Command::RotateRight),
            _ => None,
        }
    }
}

/// Result of a single move attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveResult {
    /// The turtle entered the next cell.
    Moved,
    /// The next cell is off the board or past the `i32` range; the turtle stayed where it was.
    Blocked,
    /// The next cell holds a mine; the turtle stayed where it was.
    Mine,
}

impl MoveResult {
    /// Returns `true` only when the turtle actually changed cell.
    pub fn moved(self) -> bool {
        self == MoveResult::Moved
    }
}

/// Final classification of one move sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Success,
    MineHit,
    StillInDanger,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Outcome::Success => "Success!",
            Outcome::MineHit => "Mine hit!",
            Outcome::StillInDanger => "Still in danger!",
        })
    }
}

/// Represents the outcome of a single game step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// The command was processed and more remain.
    Continue,
    /// The game is over.
    Done(Outcome),
}

/// Represents various errors that can occur while loading or reporting a game.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TurtleError {
    /// Indicates malformed content in a game settings file.
    #[error("Settings parsing error: {0}")]
    ParseError(#[from] Box<pest::error::Error<Rule>>),
    /// Indicates a failure to read a settings or moves file.
    #[error("File error: {0}")]
    FileError(String),
    /// Indicates a failure to write an outcome.
    #[error("Output error: {0}")]
    OutputError(String),
}
