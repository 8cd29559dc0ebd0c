//! Uniformly random baseline

use rand::{SeedableRng, rngs::StdRng, seq::IndexedRandom};

use crate::{
    Error, Result,
    game::{GameBoard, Player},
    ports::Agent,
    utils::build_rng,
};

/// Plays a uniformly random legal move
#[derive(Debug, Clone)]
pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    pub fn new() -> Self {
        Self { rng: build_rng(None) }
    }

    /// Create a random agent with a deterministic seed
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn choose_move<B: GameBoard>(&mut self, board: &B) -> Result<usize> {
        board
            .legal_moves()
            .choose(&mut self.rng)
            .copied()
            .ok_or(Error::NoLegalMoves)
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: GameBoard> Agent<B> for RandomAgent {
    fn select_move(&mut self, board: &B, _player: Player) -> Result<usize> {
        self.choose_move(board)
    }

    fn name(&self) -> &str {
        "Random"
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }

    fn move_values(&self, board: &B) -> Option<Vec<(usize, f64)>> {
        let moves = board.legal_moves();
        if moves.is_empty() {
            return None;
        }
        let weight = 1.0 / moves.len() as f64;
        Some(moves.into_iter().map(|mv| (mv, weight)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{agents::HeuristicAgent, connect_four::ConnectFourBoard, tictactoe::TicTacToeBoard};

    #[test]
    fn test_random_agent_only_plays_legal_moves() {
        let mut agent = RandomAgent::with_seed(9);
        let board: TicTacToeBoard = "XOX.O.X..".parse().unwrap();
        for _ in 0..50 {
            let mv = agent.choose_move(&board).unwrap();
            assert!(board.is_legal(mv));
        }
    }

    #[test]
    fn test_same_seed_same_moves() {
        let board = ConnectFourBoard::new();
        let mut a = RandomAgent::with_seed(42);
        let mut b = RandomAgent::with_seed(42);
        for _ in 0..10 {
            assert_eq!(a.choose_move(&board).unwrap(), b.choose_move(&board).unwrap());
        }
    }

    #[test]
    fn test_move_values_are_uniform_over_legal_moves() {
        let agent = RandomAgent::with_seed(5);
        let board: TicTacToeBoard = "XOX.O.X..".parse().unwrap();
        let values = Agent::<TicTacToeBoard>::move_values(&agent, &board).unwrap();
        assert_eq!(values, vec![(3, 0.25), (5, 0.25), (7, 0.25), (8, 0.25)]);

        let full: TicTacToeBoard = "XOXXOOOXX".parse().unwrap();
        assert!(Agent::<TicTacToeBoard>::move_values(&agent, &full).is_none());
        assert!(Agent::<TicTacToeBoard>::move_values(&HeuristicAgent::default(), &board).is_none());
    }

    #[test]
    fn test_full_board_is_an_error() {
        let mut agent = RandomAgent::with_seed(1);
        let board: TicTacToeBoard = "XOXXOOOXX".parse().unwrap();
        assert!(matches!(agent.choose_move(&board), Err(Error::NoLegalMoves)));
    }
}
