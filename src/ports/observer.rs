//! Observer port - abstraction for watching games as they are played

use crate::{
    Result,
    game::{GameBoard, GameRecord, MoveRecord, Player, Verdict},
};

/// Observer trait for monitoring games
///
/// # Event Sequence
///
/// 1. `on_game_start(first_player)`
/// 2. `on_move(board, step, verdict)` after every applied move
/// 3. `on_game_end(record)` once the verdict is terminal
///
/// # Examples
///
/// ```no_run
/// use gridgames::{
///     game::GameRecord,
///     ports::Observer,
///     tictactoe::TicTacToeBoard,
/// };
///
/// struct GameCounter {
///     games: usize,
/// }
///
/// impl Observer<TicTacToeBoard> for GameCounter {
///     fn on_game_end(&mut self, _record: &GameRecord) -> gridgames::Result<()> {
///         self.games += 1;
///         Ok(())
///     }
/// }
/// ```
pub trait Observer<B: GameBoard>: Send {
    /// Called before the first move.
    fn on_game_start(&mut self, _first_player: Player) -> Result<()> {
        Ok(())
    }

    /// Called after each applied move.
    ///
    /// # Parameters
    ///
    /// * `board` - Board after the move
    /// * `step` - The move just applied, with its timing
    /// * `verdict` - Verdict of the board after the move
    fn on_move(&mut self, _board: &B, _step: &MoveRecord, _verdict: Verdict) -> Result<()> {
        Ok(())
    }

    /// Called when the game ends.
    fn on_game_end(&mut self, _record: &GameRecord) -> Result<()> {
        Ok(())
    }
}
