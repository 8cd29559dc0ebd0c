//! Newtype wrappers shared by boards and learners.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::game::Cell;

/// Flattened, order-preserving encoding of a board's cells.
///
/// One character per cell (`.`, `X`, `O`) in row-major order. Two boards with
/// identical contents always produce the same key, whatever move order led to
/// them. No symmetry reduction is applied.
///
/// # Examples
///
/// ```
/// use gridgames::{game::GameBoard, tictactoe::TicTacToeBoard, types::StateKey};
///
/// let board: TicTacToeBoard = "X...O....".parse().unwrap();
/// assert_eq!(board.state_key().as_str(), "X...O....");
///
/// let key = StateKey::parse("X...O....").unwrap();
/// assert_eq!(key, board.state_key());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StateKey(String);

impl StateKey {
    /// Encode a cell sequence.
    pub fn from_cells(cells: &[Cell]) -> Self {
        StateKey(cells.iter().map(|&c| c.to_char()).collect())
    }

    /// Parse and validate a key from its string form.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidBoard`] if any character is outside the
    /// `.XO` alphabet or the string is empty.
    pub fn parse(s: &str) -> Result<Self, crate::Error> {
        if s.is_empty() {
            return Err(crate::Error::InvalidBoard {
                input: s.to_string(),
                reason: "state key is empty".to_string(),
            });
        }
        if let Some((position, character)) = s
            .chars()
            .enumerate()
            .find(|&(_, c)| !matches!(c, '.' | 'X' | 'O'))
        {
            return Err(crate::Error::InvalidBoard {
                input: s.to_string(),
                reason: format!("invalid character '{character}' at position {position}"),
            });
        }
        Ok(StateKey(s.to_string()))
    }

    /// Decode back into cells.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.0.chars().filter_map(Cell::from_char)
    }

    /// Number of cells encoded by this key.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for StateKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cells_is_row_major() {
        let cells = [Cell::X, Cell::Empty, Cell::O];
        assert_eq!(StateKey::from_cells(&cells).as_str(), "X.O");
    }

    #[test]
    fn test_parse_rejects_unknown_characters() {
        assert!(StateKey::parse("X.O").is_ok());
        assert!(StateKey::parse("X.Z").is_err());
        assert!(StateKey::parse("").is_err());
    }

    #[test]
    fn test_cells_roundtrip() {
        let key = StateKey::parse("XO..").unwrap();
        let cells: Vec<Cell> = key.cells().collect();
        assert_eq!(cells, vec![Cell::X, Cell::O, Cell::Empty, Cell::Empty]);
        assert_eq!(StateKey::from_cells(&cells), key);
    }
}
