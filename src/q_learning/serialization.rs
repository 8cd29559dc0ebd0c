//! Versioned envelope for saved Q-tables.

use serde::{Deserialize, Serialize};

use crate::{Error, Result, game::GameKind, q_learning::QTable};

/// A Q-table tagged with the game it was learned for
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedQTable {
    pub version: u32,
    pub game: GameKind,
    pub table: QTable,
}

/// Borrowing twin of [`SavedQTable`] with the same encoding
#[derive(Serialize)]
struct SavedQTableRef<'a> {
    version: u32,
    game: GameKind,
    table: &'a QTable,
}

impl SavedQTable {
    pub const VERSION: u32 = 1;

    pub fn new(game: GameKind, table: QTable) -> Self {
        Self {
            version: Self::VERSION,
            game,
            table,
        }
    }

    /// Unwrap the table after checking version, game and vector lengths
    pub fn into_table(self, expected: GameKind) -> Result<QTable> {
        if self.version != Self::VERSION {
            return Err(Error::SerializationContext {
                operation: "load Q-table".to_string(),
                message: format!(
                    "unsupported save format version {}, expected {}",
                    self.version,
                    Self::VERSION
                ),
            });
        }
        if self.game != expected {
            return Err(Error::InvalidConfiguration {
                message: format!("Q-table was learned for {}, not {expected}", self.game),
            });
        }
        if self.table.actions() != expected.actions() {
            return Err(Error::invariant(format!(
                "{expected} Q-table declares {} actions, expected {}",
                self.table.actions(),
                expected.actions()
            )));
        }
        self.table.validate()?;
        Ok(self.table)
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Self::encode(self.game, &self.table)
    }

    /// Encode a table in the envelope format without cloning it
    pub fn encode(game: GameKind, table: &QTable) -> Result<Vec<u8>> {
        let envelope = SavedQTableRef {
            version: Self::VERSION,
            game,
            table,
        };
        rmp_serde::to_vec(&envelope).map_err(|e| Error::SerializationContext {
            operation: "encode saved Q-table".to_string(),
            message: e.to_string(),
        })
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        rmp_serde::from_slice(bytes).map_err(|e| Error::SerializationContext {
            operation: "decode saved Q-table".to_string(),
            message: e.to_string(),
        })
    }
}
