//! Dependency injection container for the gridgames application.
//!
//! The container owns infrastructure dependencies (the Q-table repository and
//! a default seed) and builds agents from [`AgentConfig`]s.

use std::{path::Path, sync::Arc};

use super::config::{AgentConfig, AgentKind};
use crate::{
    Result,
    adapters::MsgPackRepository,
    agents::{HeuristicAgent, RandomAgent},
    ports::{Agent, QTableRepository},
    q_learning::{QLearningAgent, QTable},
    search::{MinimaxAgent, Searchable},
};

/// Application with dependency injection.
///
/// # Examples
///
/// ## Production usage
///
/// ```
/// use gridgames::app::{AgentConfig, AgentKind, App};
/// use gridgames::tictactoe::TicTacToeBoard;
///
/// let app = App::new();
/// let config = AgentConfig::new(AgentKind::Minimax).with_seed(42);
/// let agent = app.create_agent::<TicTacToeBoard>(&config, None)?;
/// assert_eq!(agent.name(), "Minimax (alpha-beta)");
/// # Ok::<(), gridgames::Error>(())
/// ```
///
/// ## Testing with dependency injection
///
/// ```
/// use gridgames::adapters::InMemoryRepository;
/// use gridgames::app::App;
///
/// let app = App::for_testing()
///     .with_repository(InMemoryRepository::new())
///     .with_default_seed(42)
///     .build();
/// ```
pub struct App {
    /// Repository for Q-table persistence
    repository: Arc<dyn QTableRepository + Send + Sync>,
    /// Default random seed (None = non-deterministic)
    default_seed: Option<u64>,
}

impl App {
    /// Create a new app with production defaults.
    ///
    /// Uses:
    /// - `MsgPackRepository` for Q-table persistence
    /// - No default seed (non-deterministic RNG)
    pub fn new() -> Self {
        Self {
            repository: Arc::new(MsgPackRepository::new()),
            default_seed: None,
        }
    }

    /// Create a builder for constructing app with custom dependencies.
    pub fn for_testing() -> AppBuilder {
        AppBuilder::new()
    }

    /// Get the Q-table repository.
    pub fn repository(&self) -> Arc<dyn QTableRepository + Send + Sync> {
        Arc::clone(&self.repository)
    }

    /// Build an agent for boards of type `B`.
    ///
    /// A Q-learning agent starts from the table stored at `q_table`, or from
    /// an empty table when the path is absent or holds nothing yet. Other
    /// kinds ignore `q_table`.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or a stored table
    /// cannot be loaded.
    pub fn create_agent<B: Searchable>(
        &self,
        config: &AgentConfig,
        q_table: Option<&Path>,
    ) -> Result<Box<dyn Agent<B>>> {
        config.validate()?;
        let seed = config.seed.or(self.default_seed);

        let agent: Box<dyn Agent<B>> = match config.kind {
            AgentKind::Random => Box::new(match seed {
                Some(seed) => RandomAgent::with_seed(seed),
                None => RandomAgent::new(),
            }),
            AgentKind::Heuristic => {
                let agent = HeuristicAgent::new(config.tie_break);
                Box::new(match seed {
                    Some(seed) => agent.with_seed(seed),
                    None => agent,
                })
            }
            AgentKind::Minimax => Box::new(MinimaxAgent::<B>::new(
                config.depth_for(B::KIND),
                config.alpha_beta,
            )),
            AgentKind::QLearning => {
                let table = match q_table {
                    Some(path) => self.repository.load_or_empty(B::KIND, path)?,
                    None => QTable::new(B::ACTIONS),
                };
                let agent = QLearningAgent::<B>::with_table(
                    table,
                    config.learning_rate,
                    config.discount_factor,
                    config.epsilon,
                )?
                .with_epsilon_decay(config.epsilon_decay, config.min_epsilon);
                Box::new(match seed {
                    Some(seed) => agent.with_seed(seed),
                    None => agent,
                })
            }
        };

        let game = B::KIND;
        tracing::debug!(%game, agent = agent.name(), ?seed, "created agent");
        Ok(agent)
    }

    /// Save the table of a Q-learning agent.
    ///
    /// Returns `false` without touching storage when `agent` keeps no table.
    pub fn save_q_table<B: Searchable>(&self, agent: &dyn Agent<B>, path: &Path) -> Result<bool> {
        match agent.as_any().downcast_ref::<QLearningAgent<B>>() {
            Some(learner) => {
                self.repository.save(B::KIND, learner.q_table(), path)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for constructing app with custom dependencies.
///
/// Primarily used for testing to inject in-memory repositories and control
/// randomness.
pub struct AppBuilder {
    repository: Option<Arc<dyn QTableRepository + Send + Sync>>,
    default_seed: Option<u64>,
}

impl AppBuilder {
    pub fn new() -> Self {
        Self {
            repository: None,
            default_seed: None,
        }
    }

    /// Set a custom Q-table repository.
    pub fn with_repository<R: QTableRepository + Send + Sync + 'static>(mut self, repo: R) -> Self {
        self.repository = Some(Arc::new(repo));
        self
    }

    /// Set a default random seed for all agents created by this container.
    pub fn with_default_seed(mut self, seed: u64) -> Self {
        self.default_seed = Some(seed);
        self
    }

    /// Build the app with the configured dependencies.
    ///
    /// If no repository was specified, uses `MsgPackRepository` by default.
    pub fn build(self) -> App {
        App {
            repository: self
                .repository
                .unwrap_or_else(|| Arc::new(MsgPackRepository::new())),
            default_seed: self.default_seed,
        }
    }
}

impl Default for AppBuilder {
    fn default() -> Self {
        Self::new()
    }
}
