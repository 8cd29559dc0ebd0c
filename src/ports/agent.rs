//! Agent port - abstraction for everything that can choose a move
//!
//! Implemented by the baseline agents (random, heuristic), the minimax
//! searcher and the Q-learning agent, so the game loop and the CLI can pit
//! any two of them against each other.

use crate::{
    Result,
    game::{GameBoard, GameRecord, Player},
};

/// Unified interface for all move-choosing strategies on board `B`
///
/// Agents receive the controller's board by shared reference and return a
/// move; they never mutate it. Agents that look ahead clone the board and
/// work on the private copy.
///
/// # Examples
///
/// ```no_run
/// use gridgames::{
///     game::{GameBoard, Player},
///     ports::Agent,
///     tictactoe::TicTacToeBoard,
/// };
///
/// fn opening<A: Agent<TicTacToeBoard>>(agent: &mut A) -> gridgames::Result<usize> {
///     agent.select_move(&TicTacToeBoard::new(), Player::X)
/// }
/// ```
pub trait Agent<B: GameBoard>: Send {
    /// Select a move for `player` on the given board.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::NoLegalMoves`] when the board is full.
    fn select_move(&mut self, board: &B, player: Player) -> Result<usize>;

    /// Update the agent after a game completes.
    ///
    /// # Default Implementation
    ///
    /// Does nothing, suitable for non-adaptive agents.
    fn learn(&mut self, _record: &GameRecord, _role: Player) -> Result<()> {
        Ok(())
    }

    /// Get the agent's name.
    fn name(&self) -> &str;

    /// Reset agent state to initial conditions.
    fn reset(&mut self) -> Result<()> {
        Ok(())
    }

    /// Enable downcasting to concrete types (e.g. to save a learned table).
    fn as_any(&self) -> &dyn std::any::Any;

    /// Per-move values for a board, if the agent keeps any.
    ///
    /// # Returns
    ///
    /// * `Some(Vec<(move, value)>)` - For agents with explicit values
    /// * `None` - For agents without them (e.g., heuristic or minimax)
    fn move_values(&self, _board: &B) -> Option<Vec<(usize, f64)>> {
        None
    }
}
