//! This module separates the simulator from the outside world. A `Source` provides settings
//! and move sequences, a `Reporter` receives one outcome per sequence, and `run` plays a
//! whole batch from one to the other.

use crate::game::play;
use crate::loader::GameLoader;
use crate::types::{GameSettings, MoveSequence, Outcome, TurtleError};
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;

/// Supplies the game settings and the move sequences to play.
pub trait Source {
    fn settings(&self) -> Result<GameSettings, TurtleError>;
    fn sequences(&self) -> Result<Vec<MoveSequence>, TurtleError>;
}

/// Receives the outcome of each sequence, numbered from 1 in input order.
pub trait Reporter {
    fn report(&mut self, sequence: usize, outcome: Outcome) -> Result<(), TurtleError>;
}

/// Reads a settings file and a moves file from disk.
#[derive(Debug, Clone)]
pub struct FileSource {
    pub settings_path: PathBuf,
    pub moves_path: PathBuf,
}

impl FileSource {
    pub fn new(settings_path: impl Into<PathBuf>, moves_path: impl Into<PathBuf>) -> Self {
        Self {
            settings_path: settings_path.into(),
            moves_path: moves_path.into(),
        }
    }
}

impl Source for FileSource {
    fn settings(&self) -> Result<GameSettings, TurtleError> {
        GameLoader::load_settings(&self.settings_path)
    }

    fn sequences(&self) -> Result<Vec<MoveSequence>, TurtleError> {
        GameLoader::load_sequences(&self.moves_path)
    }
}

/// Holds settings and moves content in memory.
#[derive(Debug, Clone)]
pub struct StringSource {
    pub settings: String,
    pub moves: String,
}

impl StringSource {
    pub fn new(settings: impl Into<String>, moves: impl Into<String>) -> Self {
        Self {
            settings: settings.into(),
            moves: moves.into(),
        }
    }
}

impl Source for StringSource {
    fn settings(&self) -> Result<GameSettings, TurtleError> {
        GameLoader::load_settings_from_string(&self.settings)
    }

    fn sequences(&self) -> Result<Vec<MoveSequence>, TurtleError> {
        Ok(GameLoader::load_sequences_from_string(&self.moves))
    }
}

/// Writes `Sequence <k>: <outcome>` lines.
pub struct TextReporter<W: Write> {
    out: W,
}

impl<W: Write> TextReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Reporter for TextReporter<W> {
    fn report(&mut self, sequence: usize, outcome: Outcome) -> Result<(), TurtleError> {
        writeln!(self.out, "Sequence {sequence}: {outcome}").map_err(output_error)
    }
}

/// Writes one JSON object per line, e.g. `{"sequence":1,"outcome":"Success"}`.
pub struct JsonReporter<W: Write> {
    out: W,
}

#[derive(Serialize)]
struct Record {
    sequence: usize,
    outcome: Outcome,
}

impl<W: Write> JsonReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Reporter for JsonReporter<W> {
    fn report(&mut self, sequence: usize, outcome: Outcome) -> Result<(), TurtleError> {
        serde_json::to_writer(&mut self.out, &Record { sequence, outcome })
            .map_err(|e| TurtleError::OutputError(e.to_string()))?;
        writeln!(self.out).map_err(output_error)
    }
}

fn output_error(e: std::io::Error) -> TurtleError {
    TurtleError::OutputError(e.to_string())
}

/// Plays every sequence from `source` and reports each outcome.
///
/// Settings and sequences are both loaded before the first game, so a malformed input
/// fails the run without any outcome being reported.
pub fn run<S, R>(source: &S, reporter: &mut R) -> Result<(), TurtleError>
where
    S: Source + ?Sized,
    R: Reporter + ?Sized,
{
    let settings = source.settings()?;
    let sequences = source.sequences()?;

    for (i, sequence) in sequences.iter().enumerate() {
        reporter.report(i + 1, play(&settings, sequence))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    const SETTINGS: &str = "5 5\n0 0 East\n4 4\n1 0\n";

    fn run_text(source: &impl Source) -> Result<String, TurtleError> {
        let mut reporter = TextReporter::new(Vec::new());
        run(source, &mut reporter)?;
        Ok(String::from_utf8(reporter.into_inner()).unwrap())
    }

    #[test]
    fn test_run_reports_each_sequence() {
        let source = StringSource::new(SETTINGS, "rmmmmrrrmmmm\nmm\n\n");

        assert_eq!(
            run_text(&source).unwrap(),
            "Sequence 1: Success!\nSequence 2: Mine hit!\nSequence 3: Still in danger!\n"
        );
    }

    #[test]
    fn test_run_with_no_sequences() {
        let source = StringSource::new(SETTINGS, "");
        assert_eq!(run_text(&source).unwrap(), "");
    }

    #[test]
    fn test_run_stops_on_bad_settings() {
        let source = StringSource::new("5 5\n0 0 Sideways\n4 4\n", "mm\n");

        let error = run_text(&source).unwrap_err();
        assert!(matches!(error, TurtleError::ParseError(_)));
    }

    #[test]
    fn test_json_reporter() {
        let source = StringSource::new(SETTINGS, "mm\nr\n");
        let mut reporter = JsonReporter::new(Vec::new());
        run(&source, &mut reporter).unwrap();

        let output = String::from_utf8(reporter.into_inner()).unwrap();
        let records: Vec<serde_json::Value> = output
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();

        assert_eq!(
            records,
            vec![
                serde_json::json!({"sequence": 1, "outcome": "MineHit"}),
                serde_json::json!({"sequence": 2, "outcome": "StillInDanger"}),
            ]
        );
    }

    #[test]
    fn test_demo_files() {
        let source = StringSource::new(
            include_str!("../demos/game-settings.txt"),
            include_str!("../demos/moves.txt"),
        );

        assert_eq!(
            run_text(&source).unwrap(),
            "Sequence 1: Mine hit!\n\
             Sequence 2: Success!\n\
             Sequence 3: Still in danger!\n\
             Sequence 4: Still in danger!\n\
             Sequence 5: Still in danger!\n"
        );
    }

    #[test]
    fn test_file_source() {
        let dir = tempdir().unwrap();
        let settings_path = dir.path().join("game-settings.txt");
        let moves_path = dir.path().join("moves.txt");
        fs::write(&settings_path, "5 5\n0 0 East\n4 4\n").unwrap();
        fs::write(&moves_path, "mmmmrmmmm\n").unwrap();

        let source = FileSource::new(&settings_path, &moves_path);
        assert_eq!(run_text(&source).unwrap(), "Sequence 1: Success!\n");
    }

    #[test]
    fn test_file_source_missing_moves() {
        let dir = tempdir().unwrap();
        let settings_path = dir.path().join("game-settings.txt");
        fs::write(&settings_path, SETTINGS).unwrap();

        let source = FileSource::new(&settings_path, dir.path().join("moves.txt"));
        let error = run_text(&source).unwrap_err();
        assert!(matches!(error, TurtleError::FileError(_)));
    }
}
