//! Move-by-move record of a finished (or abandoned) game

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::{
    board::{GameBoard, Placement, Verdict},
    player::Player,
};
use crate::Result;

/// One applied move and how long the agent took to choose it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub player: Player,
    pub mv: usize,
    pub placement: Placement,
    pub elapsed: Duration,
}

/// The trajectory handed to learners and observers after a game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub first_player: Player,
    pub moves: Vec<MoveRecord>,
    pub verdict: Verdict,
}

impl GameRecord {
    pub fn new(first_player: Player) -> Self {
        Self {
            first_player,
            moves: Vec::new(),
            verdict: Verdict::Ongoing,
        }
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Moves in play order
    pub fn move_sequence(&self) -> Vec<usize> {
        self.moves.iter().map(|m| m.mv).collect()
    }

    /// Mean decision time of `player`, `None` if they never moved
    pub fn average_move_time(&self, player: Player) -> Option<Duration> {
        let times: Vec<Duration> = self
            .moves
            .iter()
            .filter(|m| m.player == player)
            .map(|m| m.elapsed)
            .collect();
        let count = u32::try_from(times.len()).ok().filter(|&n| n > 0)?;
        Some(times.iter().sum::<Duration>() / count)
    }

    /// Rebuild the final board by replaying every move from empty
    pub fn replay<B: GameBoard>(&self) -> Result<B> {
        let mut board = B::new();
        for step in &self.moves {
            board.apply(step.mv, step.player)?;
        }
        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::TicTacToeBoard;

    fn record(moves: &[(Player, usize, u64)]) -> GameRecord {
        let mut board = TicTacToeBoard::new();
        let mut record = GameRecord::new(Player::X);
        for &(player, mv, millis) in moves {
            let placement = board.apply(mv, player).unwrap();
            record.moves.push(MoveRecord {
                player,
                mv,
                placement,
                elapsed: Duration::from_millis(millis),
            });
        }
        record
    }

    #[test]
    fn test_average_move_time() {
        let record = record(&[(Player::X, 4, 10), (Player::O, 0, 2), (Player::X, 8, 30)]);
        assert_eq!(
            record.average_move_time(Player::X),
            Some(Duration::from_millis(20))
        );
        assert_eq!(
            record.average_move_time(Player::O),
            Some(Duration::from_millis(2))
        );
        assert_eq!(GameRecord::new(Player::X).average_move_time(Player::O), None);
    }

    #[test]
    fn test_replay_rebuilds_board() {
        let record = record(&[(Player::X, 4, 0), (Player::O, 0, 0)]);
        let board: TicTacToeBoard = record.replay().unwrap();
        assert_eq!(board.state_key().as_str(), "O...X....");
        assert_eq!(record.move_sequence(), vec![4, 0]);
    }
}
