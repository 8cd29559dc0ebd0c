//! Static evaluation of Connect Four positions by 4-cell windows

use super::board::{ConnectFourBoard, windows};
use crate::game::{Cell, GameBoard, Player};

/// Score of one window for a player.
///
/// Any opposing mark in the window makes it worthless to the player.
pub fn score_window(own: usize, empty: usize) -> i64 {
    match (own, empty) {
        (4, _) => 1_000_000,
        (3, 1) => 100,
        (2, 2) => 10,
        (1, 3) => 1,
        _ => 0,
    }
}

/// Sum of window scores for `player` over rows, columns and both diagonals
pub fn player_score(board: &ConnectFourBoard, player: Player) -> i64 {
    let own_cell = player.to_cell();
    let cells = board.cells();
    windows()
        .map(|window| {
            let mut own = 0;
            let mut empty = 0;
            for &i in &window {
                match cells[i] {
                    c if c == own_cell => own += 1,
                    Cell::Empty => empty += 1,
                    _ => return 0,
                }
            }
            score_window(own, empty)
        })
        .sum()
}

/// Window score of `player` minus that of the opponent.
///
/// Antisymmetric under swapping the marks on the board:
/// `evaluate(b, X) == -evaluate(b.swap_players(), X)`.
pub fn evaluate(board: &ConnectFourBoard, player: Player) -> i64 {
    player_score(board, player) - player_score(board, player.opponent())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heuristic_empty_board_is_zero() {
        let board = ConnectFourBoard::new();
        assert_eq!(evaluate(&board, Player::X), 0);
        assert_eq!(evaluate(&board, Player::O), 0);
    }

    #[test]
    fn single_center_mark_counts_every_window_through_it() {
        let mut board = ConnectFourBoard::new();
        board.apply(3, Player::X).unwrap();
        // Bottom center sits in 4 horizontal, 1 vertical and 2 diagonal windows
        assert_eq!(player_score(&board, Player::X), 7);
        assert_eq!(evaluate(&board, Player::X), 7);
        assert_eq!(evaluate(&board, Player::O), -7);
    }

    #[test]
    fn blocked_window_scores_nothing() {
        assert_eq!(score_window(3, 1), 100);
        assert_eq!(score_window(2, 2), 10);
        assert_eq!(score_window(0, 4), 0);

        let board: ConnectFourBoard = "
            .......
            .......
            .......
            .......
            .......
            XXXO..."
            .parse()
            .unwrap();
        // The only window holding all three X marks also holds the O
        assert!(player_score(&board, Player::X) < 100);
    }

    #[test]
    fn three_in_a_row_outweighs_scattered_marks() {
        let board: ConnectFourBoard = "
            .......
            .......
            .......
            .......
            .......
            XXX..OO"
            .parse()
            .unwrap();
        assert!(evaluate(&board, Player::X) > 100);
    }

    #[test]
    fn swapping_marks_negates_score() {
        let board: ConnectFourBoard = "
            .......
            .......
            .......
            ...O...
            ..XX...
            .OXXO.."
            .parse()
            .unwrap();
        let swapped = board.swap_players();
        assert_eq!(evaluate(&board, Player::X), -evaluate(&swapped, Player::X));
        assert_eq!(evaluate(&board, Player::X), evaluate(&swapped, Player::O));
    }
}
