//! Leaf scoring for minimax search

use crate::{
    connect_four::{ConnectFourBoard, heuristic},
    game::{GameBoard, Player, Verdict},
    tictactoe::TicTacToeBoard,
};

/// Score of a leaf reached by search, from the maximizer's point of view.
///
/// Called when the verdict is terminal or the depth budget is exhausted
/// (`verdict == Ongoing`, `remaining == 0`).
pub trait Evaluator<B: GameBoard>: Send {
    /// # Parameters
    ///
    /// * `ply` - Plies played since the search root
    /// * `remaining` - Depth left when the leaf was reached
    fn score(&self, board: &B, verdict: Verdict, maximizer: Player, ply: u32, remaining: u32)
    -> i64;
}

/// Exact scoring for boards small enough to search to the end.
///
/// Wins are worth `10 - ply` so faster wins and slower losses are preferred;
/// draws and unfinished leaves are 0. The magnitude never drops below 1, so a
/// win deeper than ply 9 on a larger board still outranks a draw.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalScorer;

impl<B: GameBoard> Evaluator<B> for TerminalScorer {
    fn score(&self, _board: &B, verdict: Verdict, maximizer: Player, ply: u32, _remaining: u32) -> i64 {
        let magnitude = (10 - i64::from(ply)).max(1);
        match verdict {
            Verdict::Win(winner) if winner == maximizer => magnitude,
            Verdict::Win(_) => -magnitude,
            Verdict::Draw | Verdict::Ongoing => 0,
        }
    }
}

/// Window heuristic for Connect Four with depth-adjusted win scores
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowHeuristic;

impl WindowHeuristic {
    pub const WIN_SCORE: i64 = 1_000_000_000;
}

impl Evaluator<ConnectFourBoard> for WindowHeuristic {
    fn score(
        &self,
        board: &ConnectFourBoard,
        verdict: Verdict,
        maximizer: Player,
        _ply: u32,
        remaining: u32,
    ) -> i64 {
        match verdict {
            Verdict::Win(winner) if winner == maximizer => Self::WIN_SCORE + i64::from(remaining),
            Verdict::Win(_) => -(Self::WIN_SCORE + i64::from(remaining)),
            Verdict::Draw => 0,
            Verdict::Ongoing => heuristic::evaluate(board, maximizer),
        }
    }
}

/// Boards that know which evaluator searches them by default
pub trait Searchable: GameBoard {
    type Evaluator: Evaluator<Self> + Default + Clone + std::fmt::Debug + 'static;
}

impl Searchable for TicTacToeBoard {
    type Evaluator = TerminalScorer;
}

impl Searchable for ConnectFourBoard {
    type Evaluator = WindowHeuristic;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_scorer_prefers_fast_wins() {
        let board = TicTacToeBoard::new();
        let scorer = TerminalScorer;
        let fast = scorer.score(&board, Verdict::Win(Player::X), Player::X, 1, 8);
        let slow = scorer.score(&board, Verdict::Win(Player::X), Player::X, 5, 4);
        assert!(fast > slow);
        assert_eq!(scorer.score(&board, Verdict::Win(Player::O), Player::X, 1, 8), -9);
        assert_eq!(scorer.score(&board, Verdict::Draw, Player::X, 9, 0), 0);
    }

    #[test]
    fn terminal_scorer_keeps_deep_wins_positive() {
        let board = ConnectFourBoard::new();
        let scorer = TerminalScorer;
        let win = scorer.score(&board, Verdict::Win(Player::X), Player::X, 21, 0);
        assert_eq!(win, 1);
        assert_eq!(scorer.score(&board, Verdict::Win(Player::O), Player::X, 21, 0), -1);
        assert!(win > scorer.score(&board, Verdict::Draw, Player::X, 42, 0));
    }

    #[test]
    fn window_heuristic_wins_dominate_positions() {
        let board = ConnectFourBoard::new();
        let heuristic = WindowHeuristic;
        let win = heuristic.score(&board, Verdict::Win(Player::O), Player::O, 3, 1);
        assert_eq!(win, WindowHeuristic::WIN_SCORE + 1);
        let loss = heuristic.score(&board, Verdict::Win(Player::X), Player::O, 3, 1);
        assert_eq!(loss, -win);
        assert_eq!(heuristic.score(&board, Verdict::Ongoing, Player::X, 4, 0), 0);
    }
}
