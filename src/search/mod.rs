//! Adversarial search
//!
//! Depth-limited minimax over any [`crate::game::GameBoard`], with optional
//! alpha-beta pruning. Leaves are scored by an [`Evaluator`]: exact terminal
//! scores for Tic-Tac-Toe, the window heuristic for Connect Four.

pub mod agent;
pub mod evaluator;
pub mod minimax;

pub use agent::MinimaxAgent;
pub use evaluator::{Evaluator, Searchable, TerminalScorer, WindowHeuristic};
pub use minimax::{SearchOutcome, Searcher};
