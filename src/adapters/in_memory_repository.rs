//! In-memory Q-table repository for testing.
//!
//! This adapter provides a pure in-memory implementation of QTableRepository,
//! enabling fast tests without any file system I/O.

use std::{
    collections::HashMap,
    path::Path,
    sync::{Arc, Mutex, MutexGuard},
};

use crate::{
    Result,
    error::Error,
    game::GameKind,
    ports::QTableRepository,
    q_learning::{QTable, SavedQTable},
};

type Storage = HashMap<String, Vec<u8>>;

/// In-memory repository for testing.
///
/// Stores encoded tables in a shared HashMap keyed by path. The bytes are the
/// same envelope the file adapter writes.
///
/// # Examples
///
/// ```
/// use gridgames::adapters::InMemoryRepository;
/// use gridgames::game::GameKind;
/// use gridgames::ports::QTableRepository;
/// use gridgames::q_learning::QTable;
/// use std::path::Path;
///
/// let repo = InMemoryRepository::new();
/// let table = QTable::new(9);
///
/// repo.save(GameKind::TicTacToe, &table, Path::new("ttt"))?;
/// let loaded = repo.load(GameKind::TicTacToe, Path::new("ttt"))?;
/// assert_eq!(loaded, table);
/// # Ok::<(), gridgames::Error>(())
/// ```
///
/// # Thread Safety
///
/// All clones share the same underlying storage.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    storage: Arc<Mutex<Storage>>,
}

impl InMemoryRepository {
    /// Create a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of tables currently stored.
    pub fn count(&self) -> usize {
        self.storage().map(|s| s.len()).unwrap_or(0)
    }

    /// Clear all stored tables.
    pub fn clear(&self) {
        if let Ok(mut storage) = self.storage() {
            storage.clear();
        }
    }

    fn storage(&self) -> Result<MutexGuard<'_, Storage>> {
        self.storage
            .lock()
            .map_err(|_| Error::invariant("in-memory repository lock poisoned"))
    }

    fn key(path: &Path) -> String {
        path.to_string_lossy().to_string()
    }
}

impl QTableRepository for InMemoryRepository {
    fn save(&self, game: GameKind, table: &QTable, path: &Path) -> Result<()> {
        let bytes = SavedQTable::encode(game, table)?;
        self.storage()?.insert(Self::key(path), bytes);
        Ok(())
    }

    fn load(&self, game: GameKind, path: &Path) -> Result<QTable> {
        let storage = self.storage()?;
        let bytes = storage.get(&Self::key(path)).ok_or_else(|| Error::Io {
            operation: format!("load Q-table from in-memory storage at {path:?}"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "key not found in memory"),
        })?;
        SavedQTable::from_bytes(bytes)?.into_table(game)
    }

    fn exists(&self, path: &Path) -> bool {
        self.storage()
            .map(|s| s.contains_key(&Self::key(path)))
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::StateKey;

    fn sample_table() -> QTable {
        let mut table = QTable::new(7);
        table.set(StateKey::parse(&".".repeat(42)).unwrap(), 3, 0.5).unwrap();
        table
    }

    #[test]
    fn test_in_memory_save_and_load() {
        let repo = InMemoryRepository::new();
        let path = Path::new("c4");

        assert_eq!(repo.count(), 0);
        assert!(!repo.exists(path));

        repo.save(GameKind::ConnectFour, &sample_table(), path).unwrap();
        assert_eq!(repo.count(), 1);
        assert!(repo.exists(path));

        let loaded = repo.load(GameKind::ConnectFour, path).unwrap();
        assert_eq!(loaded, sample_table());
    }

    #[test]
    fn test_load_nonexistent_returns_error() {
        let repo = InMemoryRepository::new();
        let result = repo.load(GameKind::TicTacToe, Path::new("nonexistent"));
        assert!(result.is_err());
    }

    #[test]
    fn test_clear_removes_all() {
        let repo = InMemoryRepository::new();
        repo.save(GameKind::ConnectFour, &sample_table(), Path::new("a"))
            .unwrap();
        repo.save(GameKind::ConnectFour, &sample_table(), Path::new("b"))
            .unwrap();
        assert_eq!(repo.count(), 2);

        repo.clear();
        assert_eq!(repo.count(), 0);
    }

    #[test]
    fn test_clone_shares_storage() {
        let repo1 = InMemoryRepository::new();
        let repo2 = repo1.clone();
        let path = Path::new("shared");

        repo1.save(GameKind::ConnectFour, &sample_table(), path).unwrap();
        assert_eq!(repo2.load(GameKind::ConnectFour, path).unwrap(), sample_table());
        assert_eq!(repo2.count(), 1);
    }
}
