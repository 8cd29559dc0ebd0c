//! Scoped apply/undo for searching in place

use std::ops::{Deref, DerefMut};

use super::{
    board::{GameBoard, Placement},
    player::Player,
};
use crate::Result;

/// A hypothetical move that is undone when the guard drops.
///
/// Search and look-ahead code applies a move through the guard, recurses via
/// `DerefMut`, and lets the guard undo the move on every exit path, including
/// early returns and pruning breaks. Nested guards borrow the board mutably, so
/// they always drop before their parent.
///
/// ```
/// use gridgames::game::{GameBoard, MoveGuard, Player};
/// use gridgames::connect_four::ConnectFourBoard;
///
/// let mut board = ConnectFourBoard::new();
/// {
///     let guard = MoveGuard::apply(&mut board, 3, Player::X).unwrap();
///     assert_eq!(guard.placement().row, 5);
///     assert_eq!(guard.mark_count(), 1);
/// }
/// assert_eq!(board.mark_count(), 0);
/// ```
pub struct MoveGuard<'a, B: GameBoard> {
    board: &'a mut B,
    mv: usize,
    placement: Placement,
}

impl<'a, B: GameBoard> MoveGuard<'a, B> {
    /// Apply `mv` for `player`; the board is untouched on error.
    pub fn apply(board: &'a mut B, mv: usize, player: Player) -> Result<Self> {
        let placement = board.apply(mv, player)?;
        Ok(Self {
            board,
            mv,
            placement,
        })
    }

    pub fn placement(&self) -> Placement {
        self.placement
    }

    pub fn mv(&self) -> usize {
        self.mv
    }
}

impl<B: GameBoard> Deref for MoveGuard<'_, B> {
    type Target = B;

    fn deref(&self) -> &B {
        self.board
    }
}

impl<B: GameBoard> DerefMut for MoveGuard<'_, B> {
    fn deref_mut(&mut self) -> &mut B {
        self.board
    }
}

impl<B: GameBoard> Drop for MoveGuard<'_, B> {
    fn drop(&mut self) {
        if let Err(err) = self.board.undo(self.mv) {
            tracing::error!(mv = self.mv, %err, "failed to undo guarded move");
            debug_assert!(false, "guarded undo of move {} failed: {err}", self.mv);
        }
    }
}
