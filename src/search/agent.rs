//! Minimax search exposed as an agent

use crate::{
    Result,
    game::Player,
    ports::Agent,
    search::{SearchOutcome, Searchable, Searcher},
};

/// Agent that plays the searcher's best move at a fixed depth
#[derive(Debug, Clone)]
pub struct MinimaxAgent<B: Searchable> {
    searcher: Searcher<B::Evaluator>,
    depth: i32,
    use_alpha_beta: bool,
    last_outcome: Option<SearchOutcome>,
}

impl<B: Searchable> MinimaxAgent<B> {
    pub fn new(depth: i32, use_alpha_beta: bool) -> Self {
        Self::with_evaluator(B::Evaluator::default(), depth, use_alpha_beta)
    }

    pub fn with_evaluator(evaluator: B::Evaluator, depth: i32, use_alpha_beta: bool) -> Self {
        Self {
            searcher: Searcher::new(evaluator),
            depth,
            use_alpha_beta,
            last_outcome: None,
        }
    }

    pub fn depth(&self) -> i32 {
        self.depth
    }

    pub fn use_alpha_beta(&self) -> bool {
        self.use_alpha_beta
    }

    /// Result of the most recent search, if any
    pub fn last_outcome(&self) -> Option<&SearchOutcome> {
        self.last_outcome.as_ref()
    }
}

impl<B: Searchable> Agent<B> for MinimaxAgent<B> {
    fn select_move(&mut self, board: &B, player: Player) -> Result<usize> {
        let outcome = self
            .searcher
            .best_move(board, player, self.depth, self.use_alpha_beta)?;
        self.last_outcome = Some(outcome);
        Ok(outcome.best_move)
    }

    fn name(&self) -> &str {
        if self.use_alpha_beta {
            "Minimax (alpha-beta)"
        } else {
            "Minimax"
        }
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        connect_four::ConnectFourBoard,
        game::GameBoard,
        tictactoe::TicTacToeBoard,
    };

    #[test]
    fn minimax_agent_records_last_search() {
        let mut agent = MinimaxAgent::<TicTacToeBoard>::new(9, true);
        let board: TicTacToeBoard = "OO.XX....".parse().unwrap();
        assert_eq!(agent.select_move(&board, Player::X).unwrap(), 5);
        let outcome = agent.last_outcome().unwrap();
        assert_eq!(outcome.best_move, 5);
        assert!(outcome.nodes >= 1);
    }

    #[test]
    fn minimax_agent_plays_connect_four() {
        let mut agent = MinimaxAgent::<ConnectFourBoard>::new(4, true);
        let board = ConnectFourBoard::new();
        let mv = agent.select_move(&board, Player::X).unwrap();
        assert!(board.is_legal(mv));
    }
}
