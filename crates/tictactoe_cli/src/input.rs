//! Parsing of typed human input.
//!
//! Malformed text never reaches the engine. Well-formed coordinates are
//! passed through as-is and the engine decides whether the cell is playable.

use crate::render::Icon;
use derive_more::Display;
use tictactoe_engine::Move;
use tracing::instrument;

/// Why a line of input could not be turned into an answer.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum InputError {
    /// Nothing was typed.
    #[display("Please enter a move")]
    Empty,

    /// A token was not a non-negative integer.
    #[display("{:?} is not a number", _0)]
    NotANumber(String),

    /// A single number outside the keypad range.
    #[display("Cell {} is out of range (1-9)", _0)]
    CellOutOfRange(usize),

    /// Neither one cell number nor a row and a column.
    #[display("Expected a cell 1-9 or a row and column, got {} values", _0)]
    WrongTokenCount(usize),

    /// Setup answer not among the offered choices.
    #[display("Unrecognised answer {:?}", _0)]
    UnknownChoice(String),
}

impl std::error::Error for InputError {}

/// Parses a move typed as a keypad cell (`5`) or as `row col` (`1 2`).
///
/// Commas are accepted as separators: `1,2` and `1, 2` both work.
#[instrument]
pub fn parse_move(line: &str) -> Result<Move, InputError> {
    let tokens: Vec<&str> = line
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
        .collect();

    let numbers = tokens
        .iter()
        .map(|t| {
            t.parse::<usize>()
                .map_err(|_| InputError::NotANumber((*t).to_string()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    match numbers.as_slice() {
        [] => Err(InputError::Empty),
        [cell] => Move::from_cell(*cell).ok_or(InputError::CellOutOfRange(*cell)),
        [row, col] => Ok(Move::new(*row, *col)),
        more => Err(InputError::WrongTokenCount(more.len())),
    }
}

/// Parses the human's icon choice, `x` or `o` in any case.
#[instrument]
pub fn parse_icon(line: &str) -> Result<Icon, InputError> {
    match line.trim().to_ascii_lowercase().as_str() {
        "x" => Ok(Icon::X),
        "o" => Ok(Icon::O),
        "" => Err(InputError::Empty),
        other => Err(InputError::UnknownChoice(other.to_string())),
    }
}

/// Parses a yes/no answer.
#[instrument]
pub fn parse_yes_no(line: &str) -> Result<bool, InputError> {
    match line.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => Ok(true),
        "n" | "no" => Ok(false),
        "" => Err(InputError::Empty),
        other => Err(InputError::UnknownChoice(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_cell_number() {
        assert_eq!(parse_move("1"), Ok(Move::new(0, 0)));
        assert_eq!(parse_move(" 6 \n"), Ok(Move::new(1, 2)));
        assert_eq!(parse_move("9"), Ok(Move::new(2, 2)));
    }

    #[test]
    fn test_row_and_column() {
        assert_eq!(parse_move("1 2"), Ok(Move::new(1, 2)));
        assert_eq!(parse_move("2,0"), Ok(Move::new(2, 0)));
        assert_eq!(parse_move("0, 1"), Ok(Move::new(0, 1)));
    }

    #[test]
    fn test_out_of_range_pair_passes_through() {
        // The engine rejects it, not the parser.
        assert_eq!(parse_move("4 4"), Ok(Move::new(4, 4)));
    }

    #[test]
    fn test_malformed_input() {
        assert_eq!(parse_move(""), Err(InputError::Empty));
        assert_eq!(parse_move("   "), Err(InputError::Empty));
        assert_eq!(
            parse_move("a b"),
            Err(InputError::NotANumber("a".to_string()))
        );
        assert_eq!(
            parse_move("-1 2"),
            Err(InputError::NotANumber("-1".to_string()))
        );
        assert_eq!(parse_move("0"), Err(InputError::CellOutOfRange(0)));
        assert_eq!(parse_move("10"), Err(InputError::CellOutOfRange(10)));
        assert_eq!(parse_move("1 2 3"), Err(InputError::WrongTokenCount(3)));
    }

    #[test]
    fn test_setup_answers() {
        assert_eq!(parse_icon("X"), Ok(Icon::X));
        assert_eq!(parse_icon(" o\n"), Ok(Icon::O));
        assert!(parse_icon("z").is_err());
        assert_eq!(parse_yes_no("Yes"), Ok(true));
        assert_eq!(parse_yes_no("n"), Ok(false));
        assert_eq!(parse_yes_no(""), Err(InputError::Empty));
    }
}
