//! This module inspects parsed game settings for suspicious but legal layouts, such as a
//! start cell off the board or a mine sitting on the exit. Findings never reject the
//! settings; the loader only logs them.

use crate::types::{GameSettings, Position};
use std::fmt;

/// A questionable detail found in otherwise valid settings.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Warning {
    /// The turtle starts outside the board bounds.
    StartOffBoard(Position),
    /// The exit lies outside the board bounds and can never be reached by moving.
    ExitOffBoard(Position),
    /// A mine lies outside the board bounds.
    MineOffBoard(Position),
    /// A mine shares the turtle's start cell.
    MineOnStart(Position),
    /// A mine shares the exit cell, making success impossible unless the turtle starts there.
    MineOnExit(Position),
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::StartOffBoard(p) => write!(f, "Start position {p} is outside the board"),
            Warning::ExitOffBoard(p) => write!(f, "Exit {p} is outside the board"),
            Warning::MineOffBoard(p) => write!(f, "Mine {p} is outside the board"),
            Warning::MineOnStart(p) => write!(f, "Mine {p} is on the start position"),
            Warning::MineOnExit(p) => write!(f, "Mine {p} is on the exit"),
        }
    }
}

/// Analyzes `settings` and returns every warning found, in check order.
///
/// # Arguments
///
/// * `settings` - A reference to the `GameSettings` to be analyzed.
///
/// # Returns
///
/// * An empty vector when nothing looks off.
pub fn analyze(settings: &GameSettings) -> Vec<Warning> {
    [check_start, check_exit, check_mines]
        .iter()
        .flat_map(|f| f(settings))
        .collect()
}

fn check_start(settings: &GameSettings) -> Vec<Warning> {
    let start = settings.start.position;
    let mut warnings = Vec::new();

    if !settings.board.contains(start) {
        warnings.push(Warning::StartOffBoard(start));
    }
    if settings.board.is_mine(start) {
        warnings.push(Warning::MineOnStart(start));
    }

    warnings
}

fn check_exit(settings: &GameSettings) -> Vec<Warning> {
    let exit = settings.exit;
    let mut warnings = Vec::new();

    if !settings.board.contains(exit) {
        warnings.push(Warning::ExitOffBoard(exit));
    }
    if settings.board.is_mine(exit) {
        warnings.push(Warning::MineOnExit(exit));
    }

    warnings
}

fn check_mines(settings: &GameSettings) -> Vec<Warning> {
    settings
        .board
        .mines
        .iter()
        .filter(|&&mine| !settings.board.contains(mine))
        .map(|&mine| Warning::MineOffBoard(mine))
        .collect()
}
