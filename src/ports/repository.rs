//! Repository port for Q-table persistence.
//!
//! This module defines the trait boundary between the domain and infrastructure
//! layers for learned-table storage and retrieval.

use std::path::Path;

use crate::{Result, game::GameKind, q_learning::QTable};

/// Port for persisting and loading Q-tables.
///
/// The bytes behind an implementation are opaque to callers.
///
/// # Examples
///
/// ```no_run
/// use gridgames::{game::GameKind, ports::QTableRepository, q_learning::QTable};
/// use std::path::Path;
///
/// fn save_table<R: QTableRepository>(
///     repo: &R,
///     table: &QTable,
///     path: &Path,
/// ) -> gridgames::Result<()> {
///     repo.save(GameKind::TicTacToe, table, path)
/// }
/// ```
pub trait QTableRepository: Send {
    /// Save a table learned for `game`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The path cannot be created or written to
    /// - Serialization fails
    fn save(&self, game: GameKind, table: &QTable, path: &Path) -> Result<()>;

    /// Load a table saved for `game`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Nothing is stored at `path`
    /// - The stored table was saved for a different game or format version
    /// - A value vector has the wrong length
    fn load(&self, game: GameKind, path: &Path) -> Result<QTable>;

    /// Whether anything is stored at `path`
    fn exists(&self, path: &Path) -> bool;

    /// Load a table, or start an empty one when nothing is stored yet.
    fn load_or_empty(&self, game: GameKind, path: &Path) -> Result<QTable> {
        if self.exists(path) {
            self.load(game, path)
        } else {
            tracing::warn!(path = %path.display(), "no saved Q-table, starting empty");
            Ok(QTable::new(game.actions()))
        }
    }
}
