//! This module provides the `GameLoader` struct, responsible for reading game settings and
//! move sequences from files or strings.

use crate::analyzer::analyze;
use crate::parser::{parse_moves, parse_settings};
use crate::types::{GameSettings, MoveSequence, TurtleError};
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// `GameLoader` is a utility struct for loading game settings and move sequences.
pub struct GameLoader;

impl GameLoader {
    /// Loads game settings from the specified file path.
    ///
    /// Parsed settings are passed through the analyzer and every warning is logged.
    ///
    /// # Returns
    ///
    /// * `Ok(GameSettings)` if the file is read and parsed.
    /// * `Err(TurtleError::FileError)` if the file cannot be read.
    /// * `Err(TurtleError::ParseError)` if the content is malformed.
    pub fn load_settings(path: &Path) -> Result<GameSettings, TurtleError> {
        let content = read(path)?;
        Self::load_settings_from_string(&content)
    }

    /// Loads game settings from string content.
    pub fn load_settings_from_string(content: &str) -> Result<GameSettings, TurtleError> {
        let settings = parse_settings(content)?;

        debug!(
            n = settings.board.n,
            m = settings.board.m,
            mines = settings.board.mines.len(),
            start = %settings.start.position,
            heading = %settings.start.heading,
            exit = %settings.exit,
            "loaded game settings"
        );
        for warning in analyze(&settings) {
            warn!("{warning}");
        }

        Ok(settings)
    }

    /// Loads move sequences from the specified file path, one per line.
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<MoveSequence>)` if the file is read.
    /// * `Err(TurtleError::FileError)` if the file cannot be read.
    pub fn load_sequences(path: &Path) -> Result<Vec<MoveSequence>, TurtleError> {
        let content = read(path)?;
        Ok(Self::load_sequences_from_string(&content))
    }

    /// Loads move sequences from string content.
    pub fn load_sequences_from_string(content: &str) -> Vec<MoveSequence> {
        let sequences = parse_moves(content);
        debug!(count = sequences.len(), "loaded move sequences");
        sequences
    }
}

fn read(path: &Path) -> Result<String, TurtleError> {
    fs::read_to_string(path).map_err(|e| {
        TurtleError::FileError(format!("Failed to read file {}: {}", path.display(), e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Position;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_load_valid_settings() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("game-settings.txt");

        let mut file = File::create(&file_path).unwrap();
        file.write_all(b"5 5\n0 0 East\n4 4\n1 0\n").unwrap();

        let settings = GameLoader::load_settings(&file_path).unwrap();
        assert_eq!(settings.exit, Position::new(4, 4));
        assert!(settings.board.is_mine(Position::new(1, 0)));
    }

    #[test]
    fn test_load_invalid_settings() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("game-settings.txt");

        let mut file = File::create(&file_path).unwrap();
        file.write_all(b"This is not a valid board").unwrap();

        let result = GameLoader::load_settings(&file_path);
        assert!(matches!(result, Err(TurtleError::ParseError(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("missing.txt");

        let result = GameLoader::load_settings(&file_path);
        assert!(matches!(result, Err(TurtleError::FileError(_))));
        assert!(GameLoader::load_sequences(&file_path).is_err());
    }

    #[test]
    fn test_load_sequences() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("moves.txt");

        let mut file = File::create(&file_path).unwrap();
        file.write_all(b"mmrm\n\nrrr\n").unwrap();

        let sequences = GameLoader::load_sequences(&file_path).unwrap();
        assert_eq!(sequences.len(), 3);
        assert_eq!(sequences[0].as_str(), "mmrm");
        assert!(sequences[1].is_empty());
    }
}
