//! Q-table implementation for temporal difference learning

use std::{borrow::Cow, collections::HashMap};

use serde::{Deserialize, Serialize};

use crate::{Error, Result, types::StateKey};

/// Q-table mapping each state key to one value per action
///
/// Entries are created lazily: reading an unseen state yields all zeros
/// without inserting anything, and the first write to a state allocates its
/// full zero vector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QTable {
    /// Length of every value vector (9 or 7)
    actions: usize,
    /// Q-values: state -> value per action
    values: HashMap<StateKey, Vec<f64>>,
}

impl QTable {
    /// Create an empty Q-table
    pub fn new(actions: usize) -> Self {
        Self {
            actions,
            values: HashMap::new(),
        }
    }

    /// Build a table from existing entries, rejecting wrong-length vectors
    pub fn from_entries(
        actions: usize,
        entries: impl IntoIterator<Item = (StateKey, Vec<f64>)>,
    ) -> Result<Self> {
        let table = Self {
            actions,
            values: entries.into_iter().collect(),
        };
        table.validate()?;
        Ok(table)
    }

    pub fn actions(&self) -> usize {
        self.actions
    }

    /// Value vector for a state, zeros when the state is unseen
    pub fn values(&self, state: &StateKey) -> Cow<'_, [f64]> {
        match self.values.get(state) {
            Some(values) => Cow::Borrowed(values.as_slice()),
            None => Cow::Owned(vec![0.0; self.actions]),
        }
    }

    /// Get Q-value for a state-action pair
    pub fn get(&self, state: &StateKey, action: usize) -> f64 {
        self.values
            .get(state)
            .and_then(|values| values.get(action))
            .copied()
            .unwrap_or(0.0)
    }

    /// Set Q-value for a state-action pair
    pub fn set(&mut self, state: StateKey, action: usize, value: f64) -> Result<()> {
        self.check_action(action)?;
        let actions = self.actions;
        self.values
            .entry(state)
            .or_insert_with(|| vec![0.0; actions])[action] = value;
        Ok(())
    }

    /// Maximum over all actions of a state, 0 when the state is unseen
    pub fn max_value(&self, state: &StateKey) -> f64 {
        self.values
            .get(state)
            .map(|values| values.iter().copied().fold(f64::NEG_INFINITY, f64::max))
            .filter(|max| max.is_finite())
            .unwrap_or(0.0)
    }

    /// Q-learning update: off-policy TD control
    ///
    /// Q(s,a) ← Q(s,a) + α[r + γ max_a' Q(s',a') - Q(s,a)]
    ///
    /// The bootstrap term is zero when `terminal` is set or `next_state` has
    /// never been seen. Returns the new value of Q(s,a).
    #[allow(clippy::too_many_arguments)]
    pub fn update(
        &mut self,
        state: &StateKey,
        action: usize,
        reward: f64,
        next_state: &StateKey,
        terminal: bool,
        learning_rate: f64,
        discount_factor: f64,
    ) -> Result<f64> {
        self.check_action(action)?;
        let max_next_q = if terminal {
            0.0
        } else {
            self.max_value(next_state)
        };
        let current_q = self.get(state, action);
        let td_target = reward + discount_factor * max_next_q;
        let new_q = current_q + learning_rate * (td_target - current_q);
        self.set(state.clone(), action, new_q)?;
        Ok(new_q)
    }

    /// Number of states stored
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Drop every learned value
    pub fn clear(&mut self) {
        self.values.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (&StateKey, &[f64])> {
        self.values.iter().map(|(key, values)| (key, values.as_slice()))
    }

    /// Check every stored vector has exactly `actions` entries
    pub fn validate(&self) -> Result<()> {
        if let Some((key, values)) = self.values.iter().find(|(_, v)| v.len() != self.actions) {
            return Err(Error::invariant(format!(
                "Q-table entry '{key}' has {} values, expected {}",
                values.len(),
                self.actions
            )));
        }
        Ok(())
    }

    /// Encode as MessagePack
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        rmp_serde::to_vec(self).map_err(|e| Error::SerializationContext {
            operation: "encode Q-table".to_string(),
            message: e.to_string(),
        })
    }

    /// Decode from MessagePack and validate vector lengths
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let table: Self = rmp_serde::from_slice(bytes).map_err(|e| Error::SerializationContext {
            operation: "decode Q-table".to_string(),
            message: e.to_string(),
        })?;
        table.validate()?;
        Ok(table)
    }

    fn check_action(&self, action: usize) -> Result<()> {
        if action >= self.actions {
            return Err(Error::illegal_move(
                action,
                format!("action out of range for a {}-action Q-table", self.actions),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(s: &str) -> StateKey {
        StateKey::parse(s).unwrap()
    }

    #[test]
    fn test_qtable_initialization() {
        let qtable = QTable::new(9);
        let state = key(".........");
        assert_eq!(qtable.get(&state, 0), 0.0);
        assert_eq!(qtable.values(&state).as_ref(), &[0.0; 9]);
        assert_eq!(qtable.max_value(&state), 0.0);
        assert!(qtable.is_empty());
    }

    #[test]
    fn test_qtable_set_get() {
        let mut qtable = QTable::new(9);
        let state = key(".........");
        qtable.set(state.clone(), 4, 1.5).unwrap();
        assert_eq!(qtable.get(&state, 4), 1.5);
        assert_eq!(qtable.values(&state).len(), 9);
        assert_eq!(qtable.len(), 1);
        assert!(qtable.set(state, 9, 1.0).is_err());
    }

    #[test]
    fn test_max_value_includes_negative_only_rows() {
        let mut qtable = QTable::new(3);
        let state = key("...");
        qtable.set(state.clone(), 1, -0.5).unwrap();
        // Untouched actions stay at zero
        assert_eq!(qtable.max_value(&state), 0.0);
        qtable.set(state.clone(), 2, 0.8).unwrap();
        assert_eq!(qtable.max_value(&state), 0.8);
    }

    #[test]
    fn test_q_learning_update() {
        let mut qtable = QTable::new(9);
        let state = key(".........");
        let next_state = key("X...O....");

        qtable.set(next_state.clone(), 1, 1.0).unwrap();
        qtable.set(next_state.clone(), 2, 2.0).unwrap();

        // Q(s,4) = 0.0 + 0.5 * (0.0 + 0.9 * 2.0 - 0.0) = 0.9
        let updated = qtable
            .update(&state, 4, 0.0, &next_state, false, 0.5, 0.9)
            .unwrap();
        assert!((updated - 0.9).abs() < 1e-12);
        assert_eq!(qtable.get(&state, 4), updated);
    }

    #[test]
    fn test_terminal_update_ignores_successor() {
        let mut qtable = QTable::new(9);
        let state = key("XX.OO....");
        let next_state = key("XXXOO....");
        qtable.set(next_state.clone(), 0, 5.0).unwrap();

        let updated = qtable
            .update(&state, 2, 1.0, &next_state, true, 0.1, 0.9)
            .unwrap();
        assert!((updated - 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_bytes_roundtrip() {
        let mut qtable = QTable::new(7);
        qtable.set(key(&".".repeat(42)), 3, 0.25).unwrap();
        let bytes = qtable.to_bytes().unwrap();
        assert_eq!(QTable::from_bytes(&bytes).unwrap(), qtable);
    }

    #[test]
    fn test_wrong_length_vector_is_rejected() {
        let result = QTable::from_entries(9, [(key("........."), vec![0.0; 7])]);
        assert!(matches!(result, Err(Error::InvariantViolation { .. })));

        let bad = QTable {
            actions: 9,
            values: HashMap::from([(key("........."), vec![0.0; 3])]),
        };
        let bytes = rmp_serde::to_vec(&bad).unwrap();
        assert!(QTable::from_bytes(&bytes).is_err());
    }
}
