//! The board contract every game implements

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::player::{Cell, Player};
use crate::{Error, Result, types::StateKey};

/// Result of checking a board for a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    Ongoing,
    Win(Player),
    Draw,
}

impl Verdict {
    pub fn is_terminal(self) -> bool {
        !matches!(self, Verdict::Ongoing)
    }

    pub fn winner(self) -> Option<Player> {
        match self {
            Verdict::Win(player) => Some(player),
            _ => None,
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Ongoing => write!(f, "ongoing"),
            Verdict::Win(player) => write!(f, "{player} wins"),
            Verdict::Draw => write!(f, "draw"),
        }
    }
}

/// The cell a move landed in.
///
/// For Tic-Tac-Toe the row and column are derived from the cell index; for
/// Connect Four the row is the landing row resolved by gravity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Placement {
    pub cell: usize,
    pub row: usize,
    pub col: usize,
    pub player: Player,
}

/// Which game a board, table or config belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GameKind {
    TicTacToe,
    ConnectFour,
}

impl GameKind {
    pub fn name(self) -> &'static str {
        match self {
            GameKind::TicTacToe => "tictactoe",
            GameKind::ConnectFour => "connect-four",
        }
    }

    /// Length of a Q-value vector for this game
    pub fn actions(self) -> usize {
        match self {
            GameKind::TicTacToe => 9,
            GameKind::ConnectFour => 7,
        }
    }
}

impl fmt::Display for GameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GameKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "tictactoe" | "tic-tac-toe" | "ttt" => Ok(GameKind::TicTacToe),
            "connect-four" | "connectfour" | "connect4" | "c4" => Ok(GameKind::ConnectFour),
            _ => Err(Error::InvalidConfiguration {
                message: format!("unknown game '{s}' (expected tictactoe or connect-four)"),
            }),
        }
    }
}

/// Fixed-size board with apply/undo and win detection.
///
/// Moves are plain indices: a cell (0-8) for Tic-Tac-Toe, a column (0-6) for
/// Connect Four. `apply` never mutates the board when it fails, and `undo`
/// only removes a mark that is actually present, so the number of marks on the
/// board always equals moves applied minus moves undone.
pub trait GameBoard: Clone + fmt::Debug + fmt::Display + Send + Sync + 'static {
    /// Which game this board plays
    const KIND: GameKind;
    /// Number of addressable moves (length of a Q-value vector)
    const ACTIONS: usize;
    /// Number of cells on the board
    const CELLS: usize;

    /// An empty board
    fn new() -> Self;

    /// All cells in row-major order
    fn cells(&self) -> &[Cell];

    fn cell(&self, index: usize) -> Cell {
        self.cells()[index]
    }

    /// True iff `mv` addresses a cell/column that still has room
    fn is_legal(&self, mv: usize) -> bool;

    /// Legal moves in ascending order
    fn legal_moves(&self) -> Vec<usize> {
        (0..Self::ACTIONS).filter(|&mv| self.is_legal(mv)).collect()
    }

    /// Place `player`'s mark.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IllegalMove`] and leaves the board untouched when
    /// `is_legal(mv)` is false.
    fn apply(&mut self, mv: usize, player: Player) -> Result<Placement>;

    /// Remove the most recent mark placed by `mv`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvariantViolation`] when there is no mark to remove.
    fn undo(&mut self, mv: usize) -> Result<()>;

    /// True iff no legal move remains
    fn is_full(&self) -> bool {
        (0..Self::ACTIONS).all(|mv| !self.is_legal(mv))
    }

    /// Whether `player` owns a complete line anywhere on the board
    fn has_won(&self, player: Player) -> bool;

    /// Exhaustive verdict over every line.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvariantViolation`] if both players own a winning
    /// line, which no legal sequence of moves can produce.
    fn verdict(&self) -> Result<Verdict> {
        match (self.has_won(Player::X), self.has_won(Player::O)) {
            (true, true) => Err(Error::invariant(format!(
                "both players have a winning line on\n{self}"
            ))),
            (true, false) => Ok(Verdict::Win(Player::X)),
            (false, true) => Ok(Verdict::Win(Player::O)),
            (false, false) if self.is_full() => Ok(Verdict::Draw),
            (false, false) => Ok(Verdict::Ongoing),
        }
    }

    /// Verdict computed only from the lines through the last placement.
    ///
    /// Valid as long as the board was not already terminal before that
    /// placement, which holds for every position reached by play.
    fn verdict_after(&self, placement: &Placement) -> Verdict;

    /// Order used by agents that need a deterministic fallback move
    fn preferred_order(&self) -> &'static [usize];

    /// Copy of the board with every X swapped for O and vice versa
    #[must_use]
    fn swap_players(&self) -> Self;

    fn state_key(&self) -> StateKey {
        StateKey::from_cells(self.cells())
    }

    /// Number of marks on the board
    fn mark_count(&self) -> usize {
        self.cells().iter().filter(|&&c| c != Cell::Empty).count()
    }

    /// The player to move assuming X opened the game
    fn next_player(&self) -> Player {
        let x = self.cells().iter().filter(|&&c| c == Cell::X).count();
        let o = self.cells().iter().filter(|&&c| c == Cell::O).count();
        if x > o { Player::O } else { Player::X }
    }
}

/// Parse board text in the `.XO` alphabet into exactly `expected` cells.
///
/// Whitespace and `|` separators are ignored so multi-line and pipe-drawn
/// boards parse the same as a flat state key.
pub(crate) fn parse_cells(input: &str, expected: usize) -> Result<Vec<Cell>> {
    let mut cells = Vec::with_capacity(expected);
    for (position, c) in input
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '|')
        .enumerate()
    {
        let cell = Cell::from_char(c).ok_or_else(|| Error::InvalidBoard {
            input: input.to_string(),
            reason: format!("invalid character '{c}' at position {position}"),
        })?;
        cells.push(cell);
    }
    if cells.len() != expected {
        return Err(Error::InvalidBoard {
            input: input.to_string(),
            reason: format!("expected {expected} cells, got {}", cells.len()),
        });
    }
    Ok(cells)
}
