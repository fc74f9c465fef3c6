//! This crate provides the core logic for a turtle minefield simulator.
//! It includes modules for parsing game settings, moving the turtle across the board,
//! replaying move sequences, and reporting their outcomes.

pub mod analyzer;
pub mod game;
pub mod io;
pub mod loader;
pub mod parser;
pub mod turtle;
pub mod types;

/// Re-exports the `Rule` enum from the parser module, used by the `pest` grammar.
pub use crate::parser::Rule;
/// Re-exports the `analyze` function and `Warning` enum from the analyzer module.
pub use analyzer::{analyze, Warning};
/// Re-exports the `Game` struct and `play` function from the game module.
pub use game::{play, Game};
/// Re-exports the I/O adapter traits, implementations and `run` from the io module.
pub use io::{run, FileSource, JsonReporter, Reporter, Source, StringSource, TextReporter};
/// Re-exports the `GameLoader` struct from the loader module.
pub use loader::GameLoader;
/// Re-exports the parsing functions from the parser module.
pub use parser::{parse_moves, parse_settings};
/// Re-exports the `Turtle` struct from the turtle module.
pub use turtle::Turtle;
/// Re-exports the model types from the types module.
pub use types::{
    Board, Command, GameSettings, Heading, MoveResult, MoveSequence, Outcome, Position,
    StartState, Step, TurtleError,
};
