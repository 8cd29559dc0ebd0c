//! Common test utilities for the gridgames test suite.
//!
//! Exhaustive enumeration of Tic-Tac-Toe positions and a line-by-line
//! reference verdict to check the engine against.

#![allow(dead_code)]

use std::collections::HashSet;

use gridgames::{
    StateKey,
    game::{Cell, GameBoard, Player, Verdict},
    tictactoe::TicTacToeBoard,
};

const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Every position reachable from the empty board with X moving first,
/// terminal positions included, each listed once.
pub fn reachable_boards() -> Vec<TicTacToeBoard> {
    let mut seen = HashSet::new();
    let mut boards = Vec::new();
    visit(TicTacToeBoard::new(), Player::X, &mut seen, &mut boards);
    boards
}

fn visit(
    board: TicTacToeBoard,
    to_move: Player,
    seen: &mut HashSet<StateKey>,
    boards: &mut Vec<TicTacToeBoard>,
) {
    if !seen.insert(board.state_key()) {
        return;
    }
    boards.push(board);
    if brute_force_verdict(&board).is_terminal() {
        return;
    }
    for mv in board.legal_moves() {
        let mut next = board;
        next.apply(mv, to_move).unwrap();
        visit(next, to_move.opponent(), seen, boards);
    }
}

/// Verdict from a plain scan of all eight lines
pub fn brute_force_verdict(board: &TicTacToeBoard) -> Verdict {
    for player in [Player::X, Player::O] {
        let mark = player.to_cell();
        if LINES
            .iter()
            .any(|line| line.iter().all(|&i| board.cell(i) == mark))
        {
            return Verdict::Win(player);
        }
    }
    if board.cells().iter().all(|&c| c != Cell::Empty) {
        Verdict::Draw
    } else {
        Verdict::Ongoing
    }
}
