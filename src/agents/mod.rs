//! Baseline agents: uniformly random and win-then-block

pub mod heuristic;
pub mod random;

pub use heuristic::{HeuristicAgent, TieBreak};
pub use random::RandomAgent;
