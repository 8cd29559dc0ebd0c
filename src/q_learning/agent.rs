//! Tabular Q-learning agent

use std::marker::PhantomData;

use rand::{Rng, SeedableRng, rngs::StdRng, seq::IndexedRandom};

use crate::{
    error::{Error, Result},
    game::{GameBoard, GameRecord, Player, Verdict},
    ports::Agent,
    q_learning::q_table::QTable,
    types::StateKey,
    utils::build_rng,
};

pub const DEFAULT_LEARNING_RATE: f64 = 0.1;
pub const DEFAULT_DISCOUNT_FACTOR: f64 = 0.9;
pub const DEFAULT_EPSILON: f64 = 0.1;

/// Rewards handed out when replaying an episode
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RewardScheme {
    pub win: f64,
    pub loss: f64,
    pub draw: f64,
    pub step: f64,
}

impl Default for RewardScheme {
    fn default() -> Self {
        Self {
            win: 1.0,
            loss: -1.0,
            draw: 0.0,
            step: 0.0,
        }
    }
}

impl RewardScheme {
    /// Reward for `role` given a verdict; ongoing boards earn the step reward
    pub fn reward(&self, verdict: Verdict, role: Player) -> f64 {
        match verdict {
            Verdict::Win(winner) if winner == role => self.win,
            Verdict::Win(_) => self.loss,
            Verdict::Draw => self.draw,
            Verdict::Ongoing => self.step,
        }
    }
}

/// Q-learning agent (off-policy TD control) for board `B`
///
/// Greedy selection breaks ties uniformly at random among the legal actions
/// sharing the maximal value, so a fresh all-zero table explores every legal
/// move instead of always opening in the lowest index.
#[derive(Debug, Clone)]
pub struct QLearningAgent<B: GameBoard> {
    q_table: QTable,
    learning_rate: f64,
    discount_factor: f64,
    epsilon: f64,
    initial_epsilon: f64,
    epsilon_decay: f64,
    min_epsilon: f64,
    rewards: RewardScheme,
    rng: StdRng,
    rng_seed: Option<u64>,
    _board: PhantomData<fn() -> B>,
}

impl<B: GameBoard> Default for QLearningAgent<B> {
    fn default() -> Self {
        Self::new(DEFAULT_LEARNING_RATE, DEFAULT_DISCOUNT_FACTOR, DEFAULT_EPSILON)
    }
}

impl<B: GameBoard> QLearningAgent<B> {
    /// Create an agent with an empty table
    ///
    /// # Arguments
    ///
    /// * `learning_rate` - α parameter (0.0 to 1.0)
    /// * `discount_factor` - γ parameter (0.0 to 1.0)
    /// * `epsilon` - Exploration rate
    pub fn new(learning_rate: f64, discount_factor: f64, epsilon: f64) -> Self {
        Self::from_parts(QTable::new(B::ACTIONS), learning_rate, discount_factor, epsilon)
    }

    /// Create an agent around a pre-populated table
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` when the table does not have one value
    /// per action of the game.
    pub fn with_table(
        q_table: QTable,
        learning_rate: f64,
        discount_factor: f64,
        epsilon: f64,
    ) -> Result<Self> {
        if q_table.actions() != B::ACTIONS {
            return Err(Error::InvalidConfiguration {
                message: format!(
                    "Q-table has {} actions per state, {} needs {}",
                    q_table.actions(),
                    B::KIND,
                    B::ACTIONS
                ),
            });
        }
        Ok(Self::from_parts(q_table, learning_rate, discount_factor, epsilon))
    }

    fn from_parts(
        q_table: QTable,
        learning_rate: f64,
        discount_factor: f64,
        epsilon: f64,
    ) -> Self {
        Self {
            q_table,
            learning_rate,
            discount_factor,
            epsilon,
            initial_epsilon: epsilon,
            epsilon_decay: 1.0,
            min_epsilon: 0.0,
            rewards: RewardScheme::default(),
            rng: build_rng(None),
            rng_seed: None,
            _board: PhantomData,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self.rng_seed = Some(seed);
        self
    }

    /// Multiplicative ε decay per finished episode, floored at `min_epsilon`
    pub fn with_epsilon_decay(mut self, epsilon_decay: f64, min_epsilon: f64) -> Self {
        self.epsilon_decay = epsilon_decay;
        self.min_epsilon = min_epsilon;
        self
    }

    pub fn with_rewards(mut self, rewards: RewardScheme) -> Self {
        self.rewards = rewards;
        self
    }

    pub fn q_table(&self) -> &QTable {
        &self.q_table
    }

    pub fn into_q_table(self) -> QTable {
        self.q_table
    }

    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    pub fn discount_factor(&self) -> f64 {
        self.discount_factor
    }

    /// ε-greedy action selection over the board's legal moves
    pub fn select_action(&mut self, board: &B) -> Result<usize> {
        let legal_moves = board.legal_moves();
        if legal_moves.is_empty() {
            return Err(Error::NoLegalMoves);
        }

        if self.rng.random::<f64>() < self.epsilon {
            return legal_moves.choose(&mut self.rng).copied().ok_or(Error::NoLegalMoves);
        }

        let values = self.q_table.values(&board.state_key());
        let best = legal_moves
            .iter()
            .map(|&action| values[action])
            .fold(f64::NEG_INFINITY, f64::max);
        let candidates: Vec<usize> = legal_moves
            .into_iter()
            .filter(|&action| values[action] == best)
            .collect();
        candidates.choose(&mut self.rng).copied().ok_or(Error::NoLegalMoves)
    }

    /// One temporal-difference step with the agent's α and γ
    pub fn update(
        &mut self,
        state: &StateKey,
        action: usize,
        reward: f64,
        next_state: &StateKey,
        terminal: bool,
    ) -> Result<f64> {
        let value = self.q_table.update(
            state,
            action,
            reward,
            next_state,
            terminal,
            self.learning_rate,
            self.discount_factor,
        )?;
        tracing::trace!(%state, action, reward, terminal, value, "td update");
        Ok(value)
    }

    /// Replay a finished game and update every move `role` made.
    ///
    /// The successor of each move is the board after the opponent's reply,
    /// the next state in which this agent acts. The step that ends the game
    /// earns the outcome reward and is treated as terminal. Returns the number
    /// of updates applied.
    pub fn learn_episode(&mut self, record: &GameRecord, role: Player) -> Result<usize> {
        let mut board = B::new();
        let moves = &record.moves;
        let mut updates = 0;
        let mut i = 0;

        while i < moves.len() {
            let step = &moves[i];
            i += 1;
            if step.player != role {
                board.apply(step.mv, step.player)?;
                continue;
            }

            let state = board.state_key();
            let placement = board.apply(step.mv, role)?;
            let mut verdict = board.verdict_after(&placement);

            if !verdict.is_terminal()
                && let Some(reply) = moves.get(i)
            {
                let placement = board.apply(reply.mv, reply.player)?;
                verdict = board.verdict_after(&placement);
                i += 1;
            }

            let terminal = verdict.is_terminal() || i >= moves.len();
            let reward = if terminal {
                let outcome = if verdict.is_terminal() { verdict } else { record.verdict };
                self.rewards.reward(outcome, role)
            } else {
                self.rewards.step
            };

            self.update(&state, step.mv, reward, &board.state_key(), terminal)?;
            updates += 1;
        }

        self.decay_epsilon();
        tracing::debug!(
            updates,
            %role,
            verdict = %record.verdict,
            epsilon = self.epsilon,
            states = self.q_table.len(),
            "learned from episode"
        );
        Ok(updates)
    }

    /// Decay epsilon after episode
    fn decay_epsilon(&mut self) {
        self.epsilon = (self.epsilon * self.epsilon_decay).max(self.min_epsilon);
    }

    fn reset_rng(&mut self) {
        self.rng = build_rng(self.rng_seed);
    }
}

impl<B: GameBoard> Agent<B> for QLearningAgent<B> {
    fn select_move(&mut self, board: &B, _player: Player) -> Result<usize> {
        self.select_action(board)
    }

    fn learn(&mut self, record: &GameRecord, role: Player) -> Result<()> {
        self.learn_episode(record, role).map(|_| ())
    }

    fn name(&self) -> &str {
        "Q-Learning"
    }

    fn reset(&mut self) -> Result<()> {
        self.q_table.clear();
        self.epsilon = self.initial_epsilon;
        self.reset_rng();
        Ok(())
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }

    fn move_values(&self, board: &B) -> Option<Vec<(usize, f64)>> {
        let values = self.q_table.values(&board.state_key());
        Some(
            board
                .legal_moves()
                .into_iter()
                .map(|action| (action, values[action]))
                .collect(),
        )
    }
}
