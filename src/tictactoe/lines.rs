//! Winning line analysis for Tic-Tac-Toe

use crate::game::{Cell, Player};

/// Winning line indices on the 3x3 board
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Utility for analyzing winning lines in Tic-Tac-Toe
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// Check if a player has three in a row anywhere on the board
    pub fn has_won(cells: &[Cell; 9], player: Player) -> bool {
        WINNING_LINES
            .iter()
            .any(|line| Self::owns_line(cells, player, line))
    }

    /// Check only the lines passing through `cell`
    pub fn completes_line(cells: &[Cell; 9], player: Player, cell: usize) -> bool {
        Self::lines_through(cell).any(|line| Self::owns_line(cells, player, line))
    }

    /// The lines (2 to 4 of them) that contain `cell`
    pub fn lines_through(cell: usize) -> impl Iterator<Item = &'static [usize; 3]> {
        WINNING_LINES.iter().filter(move |line| line.contains(&cell))
    }

    fn owns_line(cells: &[Cell; 9], player: Player, line: &[usize; 3]) -> bool {
        let target = player.to_cell();
        line.iter().all(|&idx| cells[idx] == target)
    }

}
