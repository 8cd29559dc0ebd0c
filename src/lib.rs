//! Game engines and agents for Tic-Tac-Toe and Connect Four
//!
//! This crate provides:
//! - Tic-Tac-Toe (3×3) and Connect Four (6×7) boards behind one
//!   [`game::GameBoard`] trait, with incremental win/draw detection
//! - A win-then-block heuristic agent and a uniformly random baseline
//! - Depth-limited minimax with optional alpha-beta pruning
//! - Tabular Q-learning with a MessagePack persistence hook
//! - A game loop, a dependency injection container and a CLI
//!
//! # Example
//!
//! ```
//! use gridgames::{
//!     game::{GameBoard, Player},
//!     search::{Searcher, TerminalScorer},
//!     tictactoe::TicTacToeBoard,
//! };
//!
//! let board: TicTacToeBoard = "XX.OO....".parse()?;
//! let outcome = Searcher::new(TerminalScorer).best_move(&board, Player::X, 9, true)?;
//! assert_eq!(outcome.best_move, 2);
//! # Ok::<(), gridgames::Error>(())
//! ```

pub mod adapters;
pub mod agents;
pub mod app;
pub mod cli;
pub mod connect_four;
pub mod error;
pub mod game;
pub mod pipeline;
pub mod ports;
pub mod q_learning;
pub mod search;
pub mod tictactoe;
pub mod types;
pub mod utils;

pub use error::{Error, Result};
pub use types::StateKey;
