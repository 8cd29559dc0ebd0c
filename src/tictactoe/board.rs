//! Board state representation and basic operations

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::lines::LineAnalyzer;
use crate::{
    Error, Result,
    game::{Cell, GameBoard, GameKind, Placement, Player, Verdict, board::parse_cells},
};

/// Center first, then corners, then edges
const PREFERRED_ORDER: [usize; 9] = [4, 0, 2, 6, 8, 1, 3, 5, 7];

/// 3x3 Tic-Tac-Toe board, cells indexed 0-8 in row-major order.
///
/// This type implements `Copy` since it's only 9 bytes. The board does not
/// track whose turn it is; callers pass the player to [`GameBoard::apply`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TicTacToeBoard {
    cells: [Cell; 9],
}

impl TicTacToeBoard {
    pub fn from_cells(cells: [Cell; 9]) -> Self {
        Self { cells }
    }

    /// Check if a position is empty
    pub fn is_empty(&self, pos: usize) -> bool {
        self.cells[pos] == Cell::Empty
    }
}

impl Default for TicTacToeBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl GameBoard for TicTacToeBoard {
    const KIND: GameKind = GameKind::TicTacToe;
    const ACTIONS: usize = 9;
    const CELLS: usize = 9;

    fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
        }
    }

    fn cells(&self) -> &[Cell] {
        &self.cells
    }

    fn is_legal(&self, mv: usize) -> bool {
        mv < Self::CELLS && self.is_empty(mv)
    }

    fn apply(&mut self, mv: usize, player: Player) -> Result<Placement> {
        if mv >= Self::CELLS {
            return Err(Error::illegal_move(mv, "cell is off the board"));
        }
        if !self.is_empty(mv) {
            return Err(Error::illegal_move(mv, "cell is occupied"));
        }
        self.cells[mv] = player.to_cell();
        Ok(Placement {
            cell: mv,
            row: mv / 3,
            col: mv % 3,
            player,
        })
    }

    fn undo(&mut self, mv: usize) -> Result<()> {
        if mv >= Self::CELLS || self.is_empty(mv) {
            return Err(Error::invariant(format!("undo of cell {mv} with no mark")));
        }
        self.cells[mv] = Cell::Empty;
        Ok(())
    }

    fn is_full(&self) -> bool {
        !self.cells.contains(&Cell::Empty)
    }

    fn has_won(&self, player: Player) -> bool {
        LineAnalyzer::has_won(&self.cells, player)
    }

    fn verdict_after(&self, placement: &Placement) -> Verdict {
        if LineAnalyzer::completes_line(&self.cells, placement.player, placement.cell) {
            Verdict::Win(placement.player)
        } else if self.is_full() {
            Verdict::Draw
        } else {
            Verdict::Ongoing
        }
    }

    fn preferred_order(&self) -> &'static [usize] {
        &PREFERRED_ORDER
    }

    fn swap_players(&self) -> Self {
        Self {
            cells: self.cells.map(Cell::swapped),
        }
    }
}

impl FromStr for TicTacToeBoard {
    type Err = Error;

    /// Parse nine `.XO` characters; whitespace and `|` are ignored.
    fn from_str(s: &str) -> Result<Self> {
        let parsed = parse_cells(s, Self::CELLS)?;
        let mut cells = [Cell::Empty; 9];
        cells.copy_from_slice(&parsed);
        Ok(Self { cells })
    }
}

impl fmt::Display for TicTacToeBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &cell) in self.cells.iter().enumerate() {
            write!(f, "{}", cell.to_char())?;
            if (i + 1).is_multiple_of(3) && i < 8 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(moves: &[usize]) -> TicTacToeBoard {
        let mut board = TicTacToeBoard::new();
        let mut player = Player::X;
        for &mv in moves {
            board.apply(mv, player).unwrap();
            player = player.opponent();
        }
        board
    }

    #[test]
    fn test_new_board() {
        let board = TicTacToeBoard::new();
        assert_eq!(board.mark_count(), 0);
        assert_eq!(board.legal_moves(), (0..9).collect::<Vec<_>>());
        assert_eq!(board.verdict().unwrap(), Verdict::Ongoing);
    }

    #[test]
    fn test_apply_and_undo() {
        let mut board = TicTacToeBoard::new();
        let placement = board.apply(5, Player::X).unwrap();
        assert_eq!((placement.row, placement.col), (1, 2));
        assert_eq!(board.cell(5), Cell::X);

        let err = board.apply(5, Player::O).unwrap_err();
        assert!(err.to_string().contains("occupied"));
        assert_eq!(board.cell(5), Cell::X);

        board.undo(5).unwrap();
        assert_eq!(board.cell(5), Cell::Empty);
        assert!(matches!(
            board.undo(5),
            Err(Error::InvariantViolation { .. })
        ));
    }

    #[test]
    fn test_out_of_range_move_is_illegal() {
        let mut board = TicTacToeBoard::new();
        assert!(!board.is_legal(9));
        assert!(matches!(
            board.apply(9, Player::X),
            Err(Error::IllegalMove { mv: 9, .. })
        ));
    }

    #[test]
    fn test_legal_moves() {
        let board = play(&[0, 4]);
        assert_eq!(board.legal_moves(), vec![1, 2, 3, 5, 6, 7, 8]);
    }

    #[test]
    fn test_win_detection_vertical() {
        // O wins on middle column (1, 4, 7)
        let board = play(&[0, 1, 2, 4, 5, 7]);
        assert_eq!(board.verdict().unwrap(), Verdict::Win(Player::O));
    }

    #[test]
    fn test_verdict_after_matches_verdict() {
        let mut board = play(&[0, 3, 4, 5]);
        let placement = board.apply(8, Player::X).unwrap();
        assert_eq!(board.verdict_after(&placement), Verdict::Win(Player::X));
        assert_eq!(board.verdict().unwrap(), Verdict::Win(Player::X));
    }

    #[test]
    fn test_draw_detection() {
        let mut board = play(&[0, 1, 2, 4, 3, 6, 5, 8]);
        let placement = board.apply(7, Player::X).unwrap();
        assert!(board.is_full());
        assert_eq!(board.verdict_after(&placement), Verdict::Draw);
        assert_eq!(board.verdict().unwrap(), Verdict::Draw);
        assert!(matches!(
            board.apply(0, Player::O),
            Err(Error::IllegalMove { .. })
        ));
    }

    #[test]
    fn test_both_players_winning_is_rejected() {
        let board: TicTacToeBoard = "XXX OOO ...".parse().unwrap();
        assert!(matches!(
            board.verdict(),
            Err(Error::InvariantViolation { .. })
        ));
    }

    #[test]
    fn test_parse_and_display() {
        let board: TicTacToeBoard = "X.O|.X.|..O".parse().unwrap();
        assert_eq!(board.to_string(), "X.O\n.X.\n..O");
        assert_eq!(board.state_key().as_str(), "X.O.X...O");
        assert_eq!(board.to_string().parse::<TicTacToeBoard>().unwrap(), board);
        assert!("XO".parse::<TicTacToeBoard>().is_err());
    }

    #[test]
    fn test_swap_players() {
        let board: TicTacToeBoard = "X.O......".parse().unwrap();
        let swapped = board.swap_players();
        assert_eq!(swapped.state_key().as_str(), "O.X......");
        assert_eq!(swapped.swap_players(), board);
    }

    #[test]
    fn test_next_player_from_counts() {
        assert_eq!(play(&[]).next_player(), Player::X);
        assert_eq!(play(&[4]).next_player(), Player::O);
        assert_eq!(play(&[4, 0]).next_player(), Player::X);
    }
}
