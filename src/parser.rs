//! This module provides the parser for game settings files, utilizing the `pest` crate,
//! and the line splitter for moves files.

use crate::types::{Board, GameSettings, Heading, MoveSequence, Position, StartState, TurtleError};
use pest::{
    error::{Error, ErrorVariant},
    iterators::{Pair, Pairs},
    Parser as PestParser, Span,
};
use pest_derive::Parser as PestParser;

/// Derives a `PestParser` for the settings grammar defined in `grammar.pest`.
#[derive(PestParser)]
#[grammar = "grammar.pest"]
pub struct SettingsParser;

/// Parses the given input string into a `GameSettings` struct.
///
/// The first line holds the board bounds, the second the start position and heading,
/// the third the exit cell. Every remaining line places one mine.
///
/// # Arguments
///
/// * `input` - A string slice containing the game settings.
///
/// # Returns
///
/// * `Ok(GameSettings)` if the input is well formed.
/// * `Err(TurtleError::ParseError)` on a missing or extra token, a non-integer
///   coordinate, or an unknown heading.
pub fn parse_settings(input: &str) -> Result<GameSettings, TurtleError> {
    let root = SettingsParser::parse(Rule::settings, input)
        .map_err(|e| TurtleError::ParseError(e.into()))?
        .next()
        .unwrap();

    let mut board: Option<(i32, i32)> = None;
    let mut start: Option<StartState> = None;
    let mut exit: Option<Position> = None;
    let mut mines = Vec::new();

    for p in root.into_inner() {
        match p.as_rule() {
            Rule::board => {
                let mut pairs = p.into_inner();
                board = Some((parse_integer(&mut pairs)?, parse_integer(&mut pairs)?));
            }
            Rule::start => start = Some(parse_start(p)?),
            Rule::exit => exit = Some(parse_position(p)?),
            Rule::mine => mines.push(parse_position(p)?),
            _ => {} // SOI, EOI
        }
    }

    // The grammar guarantees the three header lines.
    let (n, m) = board.unwrap();

    Ok(GameSettings {
        board: Board::new(n, m, mines),
        start: start.unwrap(),
        exit: exit.unwrap(),
    })
}

/// Splits a moves file into one `MoveSequence` per line.
///
/// Empty lines are kept as empty sequences. A trailing newline does not add one.
pub fn parse_moves(input: &str) -> Vec<MoveSequence> {
    input.lines().map(MoveSequence::from).collect()
}

/// Parses the start line: two coordinates followed by a heading name.
fn parse_start(pair: Pair<Rule>) -> Result<StartState, TurtleError> {
    let mut pairs = pair.into_inner();
    let position = Position::new(parse_integer(&mut pairs)?, parse_integer(&mut pairs)?);
    let heading = parse_heading(pairs.next().unwrap())?;

    Ok(StartState { position, heading })
}

/// Parses a coordinate pair from an `exit` or `mine` line.
fn parse_position(pair: Pair<Rule>) -> Result<Position, TurtleError> {
    let mut pairs = pair.into_inner();
    Ok(Position::new(
        parse_integer(&mut pairs)?,
        parse_integer(&mut pairs)?,
    ))
}

/// Parses a heading name, case-insensitively.
fn parse_heading(pair: Pair<Rule>) -> Result<Heading, TurtleError> {
    Heading::from_name(pair.as_str()).ok_or_else(|| {
        parse_error(
            &format!("Unsupported direction: {}", pair.as_str()),
            pair.as_span(),
        )
    })
}

/// Parses the next `integer` pair, rejecting values that do not fit in an `i32`.
fn parse_integer(pairs: &mut Pairs<Rule>) -> Result<i32, TurtleError> {
    let pair = pairs.next().unwrap();
    pair.as_str().parse::<i32>().map_err(|e| {
        parse_error(
            &format!("Invalid integer {}: {}", pair.as_str(), e),
            pair.as_span(),
        )
    })
}

/// Creates a `TurtleError::ParseError` from a message and a `Span`.
fn parse_error(msg: &str, span: Span) -> TurtleError {
    TurtleError::ParseError(Box::new(Error::new_from_span(
        ErrorVariant::CustomError {
            message: msg.to_string(),
        },
        span,
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_settings_with_mines() {
        let input = "5 4\n0 1 North\n4 2\n1 1\n3 3\n";

        let settings = parse_settings(input).unwrap();
        assert_eq!(settings.board.n, 5);
        assert_eq!(settings.board.m, 4);
        assert_eq!(settings.start.position, Position::new(0, 1));
        assert_eq!(settings.start.heading, Heading::North);
        assert_eq!(settings.exit, Position::new(4, 2));
        assert_eq!(settings.board.mines.len(), 2);
        assert!(settings.board.is_mine(Position::new(1, 1)));
        assert!(settings.board.is_mine(Position::new(3, 3)));
    }

    #[test]
    fn test_parse_settings_without_mines() {
        let settings = parse_settings("5 5\n0 0 East\n4 4").unwrap();
        assert!(settings.board.mines.is_empty());
        assert_eq!(settings.exit, Position::new(4, 4));
    }

    #[test]
    fn test_parse_settings_heading_is_case_insensitive() {
        let settings = parse_settings("3 3\n0 0 sOUTH\n2 2\n").unwrap();
        assert_eq!(settings.start.heading, Heading::South);
    }

    #[test]
    fn test_parse_settings_with_crlf_line_endings() {
        let settings = parse_settings("3 3\r\n1 1 west\r\n2 2\r\n0 1\r\n").unwrap();
        assert_eq!(settings.start.heading, Heading::West);
        assert!(settings.board.is_mine(Position::new(0, 1)));
    }

    #[test]
    fn test_parse_settings_negative_coordinates() {
        let settings = parse_settings("3 3\n0 0 North\n2 2\n-1 -1\n").unwrap();
        assert!(settings.board.is_mine(Position::new(-1, -1)));
    }

    #[test]
    fn test_parse_settings_duplicate_mines_collapse() {
        let settings = parse_settings("3 3\n0 0 North\n2 2\n1 1\n1 1\n").unwrap();
        assert_eq!(settings.board.mines.len(), 1);
    }

    #[test]
    fn test_parse_unsupported_direction() {
        let result = parse_settings("3 3\n0 0 Up\n2 2\n");
        assert!(result.is_err());
        let error = result.unwrap_err();
        assert!(matches!(error, TurtleError::ParseError(_)));
        assert!(error.to_string().contains("Unsupported direction: Up"));
    }

    #[test]
    fn test_parse_missing_token() {
        let result = parse_settings("3\n0 0 North\n2 2\n");
        assert!(matches!(result, Err(TurtleError::ParseError(_))));
    }

    #[test]
    fn test_parse_extra_token() {
        let result = parse_settings("3 3\n0 0 North\n2 2\n1 1 1\n");
        assert!(matches!(result, Err(TurtleError::ParseError(_))));
    }

    #[test]
    fn test_parse_non_integer() {
        let result = parse_settings("3 x\n0 0 North\n2 2\n");
        assert!(matches!(result, Err(TurtleError::ParseError(_))));
    }

    #[test]
    fn test_parse_missing_exit_line() {
        let result = parse_settings("3 3\n0 0 North\n");
        assert!(matches!(result, Err(TurtleError::ParseError(_))));
    }

    #[test]
    fn test_parse_integer_overflow() {
        let result = parse_settings("99999999999 3\n0 0 North\n2 2\n");
        let error = result.unwrap_err();
        assert!(matches!(error, TurtleError::ParseError(_)));
        assert!(error.to_string().contains("Invalid integer 99999999999"));
    }

    #[test]
    fn test_parse_moves_one_sequence_per_line() {
        let sequences = parse_moves("mmr\n\nrrm\n");
        assert_eq!(
            sequences,
            vec![
                MoveSequence::from("mmr"),
                MoveSequence::from(""),
                MoveSequence::from("rrm"),
            ]
        );
    }

    #[test]
    fn test_parse_moves_crlf() {
        let sequences = parse_moves("mm\r\nrm\r\n");
        assert_eq!(
            sequences,
            vec![MoveSequence::from("mm"), MoveSequence::from("rm")]
        );
    }

    #[test]
    fn test_parse_moves_empty_file() {
        assert!(parse_moves("").is_empty());
    }
}
