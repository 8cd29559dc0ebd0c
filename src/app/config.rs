//! Configuration types for agent creation.

use std::{fmt, fs, path::Path, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    Error, Result,
    agents::TieBreak,
    game::GameKind,
    q_learning::{DEFAULT_DISCOUNT_FACTOR, DEFAULT_EPSILON, DEFAULT_LEARNING_RATE},
};

/// Which agent implementation a configuration builds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AgentKind {
    #[default]
    Random,
    Heuristic,
    Minimax,
    QLearning,
}

impl AgentKind {
    pub fn name(self) -> &'static str {
        match self {
            AgentKind::Random => "random",
            AgentKind::Heuristic => "heuristic",
            AgentKind::Minimax => "minimax",
            AgentKind::QLearning => "q-learning",
        }
    }
}

impl fmt::Display for AgentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AgentKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "random" => Ok(AgentKind::Random),
            "heuristic" => Ok(AgentKind::Heuristic),
            "minimax" | "search" => Ok(AgentKind::Minimax),
            "q-learning" | "qlearning" | "q" => Ok(AgentKind::QLearning),
            other => Err(Error::InvalidConfiguration {
                message: format!(
                    "unknown agent '{other}' (expected random, heuristic, minimax or q-learning)"
                ),
            }),
        }
    }
}

/// Configuration for creating an agent.
///
/// Every field has a default, so a JSON file only needs the keys it changes.
///
/// # Examples
///
/// ```
/// use gridgames::app::{AgentConfig, AgentKind};
///
/// let config = AgentConfig::new(AgentKind::Minimax)
///     .with_depth(4)
///     .with_alpha_beta(true)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    pub kind: AgentKind,
    /// Random seed for reproducibility
    pub seed: Option<u64>,
    /// Search depth; `None` picks a per-game default
    pub depth: Option<i32>,
    pub alpha_beta: bool,
    pub tie_break: TieBreak,
    pub learning_rate: f64,
    pub discount_factor: f64,
    pub epsilon: f64,
    /// Multiplicative ε decay per episode (1.0 disables decay)
    pub epsilon_decay: f64,
    pub min_epsilon: f64,
}

impl AgentConfig {
    /// Default search depth for Tic-Tac-Toe (the whole game tree)
    pub const TICTACTOE_DEPTH: i32 = 9;
    /// Default search depth for Connect Four
    pub const CONNECT_FOUR_DEPTH: i32 = 4;

    pub fn new(kind: AgentKind) -> Self {
        Self {
            kind,
            seed: None,
            depth: None,
            alpha_beta: true,
            tie_break: TieBreak::default(),
            learning_rate: DEFAULT_LEARNING_RATE,
            discount_factor: DEFAULT_DISCOUNT_FACTOR,
            epsilon: DEFAULT_EPSILON,
            epsilon_decay: 1.0,
            min_epsilon: 0.0,
        }
    }

    /// Load a configuration from a JSON file.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| Error::Io {
            operation: format!("read agent config {path:?}"),
            source,
        })?;
        let config: Self = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Set the random seed for deterministic behavior.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_depth(mut self, depth: i32) -> Self {
        self.depth = Some(depth);
        self
    }

    pub fn with_alpha_beta(mut self, alpha_beta: bool) -> Self {
        self.alpha_beta = alpha_beta;
        self
    }

    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    /// Set α, γ and ε at once.
    pub fn with_learning(mut self, learning_rate: f64, discount_factor: f64, epsilon: f64) -> Self {
        self.learning_rate = learning_rate;
        self.discount_factor = discount_factor;
        self.epsilon = epsilon;
        self
    }

    pub fn with_epsilon_decay(mut self, epsilon_decay: f64, min_epsilon: f64) -> Self {
        self.epsilon_decay = epsilon_decay;
        self.min_epsilon = min_epsilon;
        self
    }

    /// Search depth to use for `game`
    pub fn depth_for(&self, game: GameKind) -> i32 {
        self.depth.unwrap_or(match game {
            GameKind::TicTacToe => Self::TICTACTOE_DEPTH,
            GameKind::ConnectFour => Self::CONNECT_FOUR_DEPTH,
        })
    }

    /// Check depth and rates.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] when the depth is below 1 or any
    /// rate lies outside `[0, 1]`.
    pub fn validate(&self) -> Result<()> {
        if let Some(depth) = self.depth
            && depth < 1
        {
            return Err(Error::InvalidConfiguration {
                message: format!("depth must be at least 1, got {depth}"),
            });
        }
        let rates = [
            ("learning_rate", self.learning_rate),
            ("discount_factor", self.discount_factor),
            ("epsilon", self.epsilon),
            ("epsilon_decay", self.epsilon_decay),
            ("min_epsilon", self.min_epsilon),
        ];
        for (name, value) in rates {
            if !(0.0..=1.0).contains(&value) {
                return Err(Error::InvalidConfiguration {
                    message: format!("{name} must lie in [0, 1], got {value}"),
                });
            }
        }
        Ok(())
    }
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self::new(AgentKind::default())
    }
}
