//! MessagePack implementation of the Q-table repository.
//!
//! This adapter implements the QTableRepository port using rmp_serde for
//! compact binary serialization.

use std::{fs, path::Path};

use crate::{
    Result,
    error::Error,
    game::GameKind,
    ports::QTableRepository,
    q_learning::{QTable, SavedQTable},
};

/// MessagePack-based Q-table repository.
///
/// Each file holds one [`SavedQTable`] envelope: format version, game and
/// table.
///
/// # Examples
///
/// ```no_run
/// use gridgames::adapters::MsgPackRepository;
/// use gridgames::game::GameKind;
/// use gridgames::ports::QTableRepository;
/// use gridgames::q_learning::QTable;
/// use std::path::Path;
///
/// let repo = MsgPackRepository;
/// let table = QTable::new(9);
///
/// repo.save(GameKind::TicTacToe, &table, Path::new("ttt.msgpack"))?;
/// let loaded = repo.load(GameKind::TicTacToe, Path::new("ttt.msgpack"))?;
/// # Ok::<(), gridgames::Error>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct MsgPackRepository;

impl MsgPackRepository {
    /// Create a new MessagePack repository.
    pub fn new() -> Self {
        Self
    }
}

impl QTableRepository for MsgPackRepository {
    fn save(&self, game: GameKind, table: &QTable, path: &Path) -> Result<()> {
        let bytes = SavedQTable::encode(game, table)?;
        fs::write(path, bytes).map_err(|source| Error::Io {
            operation: format!("write Q-table to {path:?}"),
            source,
        })?;
        tracing::debug!(path = %path.display(), states = table.len(), "saved Q-table");
        Ok(())
    }

    fn load(&self, game: GameKind, path: &Path) -> Result<QTable> {
        let bytes = fs::read(path).map_err(|source| Error::Io {
            operation: format!("read Q-table from {path:?}"),
            source,
        })?;
        let table = SavedQTable::from_bytes(&bytes)?.into_table(game)?;
        tracing::debug!(path = %path.display(), states = table.len(), "loaded Q-table");
        Ok(table)
    }

    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }
}
