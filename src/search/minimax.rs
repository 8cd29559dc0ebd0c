//! Depth-limited minimax with optional alpha-beta pruning

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use tracing::instrument;

use super::evaluator::Evaluator;
use crate::{
    Error, Result,
    game::{GameBoard, MoveGuard, Player, Verdict},
};

/// Best move found by a search, with its cost
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchOutcome {
    pub best_move: usize,
    pub score: i64,
    /// Nodes visited, root included
    pub nodes: u64,
    pub elapsed: Duration,
}

/// Minimax searcher over boards of type `B`
///
/// Moves are tried in ascending order and the first move reaching the best
/// score wins ties. The caller's board is cloned once; the search then
/// applies and undoes moves on that private copy through [`MoveGuard`].
#[derive(Debug, Clone, Default)]
pub struct Searcher<E> {
    evaluator: E,
}

impl<E> Searcher<E> {
    pub fn new(evaluator: E) -> Self {
        Self { evaluator }
    }

    pub fn evaluator(&self) -> &E {
        &self.evaluator
    }
}

impl<E> Searcher<E> {
    /// Find the best move for `player`.
    ///
    /// `max_depth` is capped at the number of empty cells.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSearchRequest`] when `max_depth < 1` or the
    /// board is already decided.
    #[instrument(level = "debug", skip(self, board))]
    pub fn best_move<B>(
        &self,
        board: &B,
        player: Player,
        max_depth: i32,
        use_alpha_beta: bool,
    ) -> Result<SearchOutcome>
    where
        B: GameBoard,
        E: Evaluator<B>,
    {
        if max_depth < 1 {
            return Err(Error::invalid_search(format!(
                "depth must be at least 1, got {max_depth}"
            )));
        }
        let verdict = board.verdict()?;
        if verdict.is_terminal() {
            return Err(Error::invalid_search(format!(
                "board is already decided ({verdict})"
            )));
        }

        let empty = B::CELLS - board.mark_count();
        let depth = u32::try_from(max_depth)
            .unwrap_or(u32::MAX)
            .min(u32::try_from(empty).unwrap_or(u32::MAX));

        let started = Instant::now();
        let mut run = SearchRun {
            evaluator: &self.evaluator,
            maximizer: player,
            use_alpha_beta,
            nodes: 1,
        };
        let mut scratch = board.clone();

        let mut alpha = i64::MIN + 1;
        let beta = i64::MAX;
        let mut best: Option<(usize, i64)> = None;

        for mv in board.legal_moves() {
            let mut guard = MoveGuard::apply(&mut scratch, mv, player)?;
            let placement = guard.placement();
            let verdict = guard.verdict_after(&placement);
            let score = run.node(&mut *guard, verdict, depth - 1, 1, false, alpha, beta)?;

            if best.is_none_or(|(_, best_score)| score > best_score) {
                best = Some((mv, score));
            }
            if use_alpha_beta {
                alpha = alpha.max(score);
            }
        }

        let (best_move, score) = best.ok_or(Error::NoLegalMoves)?;
        let outcome = SearchOutcome {
            best_move,
            score,
            nodes: run.nodes,
            elapsed: started.elapsed(),
        };
        tracing::debug!(
            best_move,
            score,
            nodes = outcome.nodes,
            elapsed_us = outcome.elapsed.as_micros() as u64,
            depth,
            use_alpha_beta,
            "search complete"
        );
        Ok(outcome)
    }
}

struct SearchRun<'e, E> {
    evaluator: &'e E,
    maximizer: Player,
    use_alpha_beta: bool,
    nodes: u64,
}

impl<E> SearchRun<'_, E> {
    /// Score of `board`, reached with `verdict`, with the side to move given
    /// by `maximizing`
    #[allow(clippy::too_many_arguments)]
    fn node<B>(
        &mut self,
        board: &mut B,
        verdict: Verdict,
        remaining: u32,
        ply: u32,
        maximizing: bool,
        mut alpha: i64,
        mut beta: i64,
    ) -> Result<i64>
    where
        B: GameBoard,
        E: Evaluator<B>,
    {
        self.nodes += 1;
        if verdict.is_terminal() || remaining == 0 {
            return Ok(self
                .evaluator
                .score(board, verdict, self.maximizer, ply, remaining));
        }

        let mover = if maximizing {
            self.maximizer
        } else {
            self.maximizer.opponent()
        };
        let mut best = if maximizing { i64::MIN } else { i64::MAX };

        for mv in board.legal_moves() {
            let mut guard = MoveGuard::apply(board, mv, mover)?;
            let placement = guard.placement();
            let child_verdict = guard.verdict_after(&placement);
            let score = self.node(
                &mut *guard,
                child_verdict,
                remaining - 1,
                ply + 1,
                !maximizing,
                alpha,
                beta,
            )?;

            if maximizing {
                best = best.max(score);
                if self.use_alpha_beta {
                    alpha = alpha.max(score);
                }
            } else {
                best = best.min(score);
                if self.use_alpha_beta {
                    beta = beta.min(score);
                }
            }
            if self.use_alpha_beta && beta <= alpha {
                break;
            }
        }

        Ok(best)
    }
}
