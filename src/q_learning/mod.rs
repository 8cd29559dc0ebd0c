//! Tabular Q-learning
//!
//! Temporal difference (TD) control that bootstraps value estimates from the
//! best value of the successor state:
//!
//! Q(s,a) ← Q(s,a) + α[r + γ max_a' Q(s',a') - Q(s,a)]
//!
//! States are the flattened cell strings of [`crate::types::StateKey`]; no
//! symmetry reduction is applied, so mirrored positions are learned
//! separately.
//!
//! ## Usage Example
//!
//! ```no_run
//! use gridgames::{q_learning::QLearningAgent, tictactoe::TicTacToeBoard};
//!
//! let agent = QLearningAgent::<TicTacToeBoard>::new(
//!     0.1, // learning_rate
//!     0.9, // discount_factor
//!     0.1, // epsilon (exploration)
//! )
//! .with_epsilon_decay(0.995, 0.01)
//! .with_seed(42);
//! ```

pub mod agent;
pub mod q_table;
pub mod serialization;

pub use agent::{
    DEFAULT_DISCOUNT_FACTOR, DEFAULT_EPSILON, DEFAULT_LEARNING_RATE, QLearningAgent, RewardScheme,
};
pub use q_table::QTable;
pub use serialization::SavedQTable;
