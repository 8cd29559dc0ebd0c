//! Controller that plays one game between two agents

use std::time::Instant;

use crate::{
    Result,
    game::{GameBoard, GameRecord, MoveRecord, Player},
    ports::{Agent, Observer},
};

/// Alternates two agents on a fresh board until the game is decided.
///
/// The loop owns the board and only ever hands agents a shared reference.
/// An illegal move from an agent ends the game with
/// [`crate::Error::IllegalMove`]; no move is ever substituted.
pub struct GameLoop<B: GameBoard> {
    first_player: Player,
    learn: bool,
    observers: Vec<Box<dyn Observer<B>>>,
}

impl<B: GameBoard> Default for GameLoop<B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: GameBoard> GameLoop<B> {
    pub fn new() -> Self {
        Self {
            first_player: Player::X,
            learn: false,
            observers: Vec::new(),
        }
    }

    /// Which player opens (X by default)
    pub fn with_first_player(mut self, first_player: Player) -> Self {
        self.first_player = first_player;
        self
    }

    /// Call [`Agent::learn`] on both agents once the game ends
    pub fn with_learning(mut self, learn: bool) -> Self {
        self.learn = learn;
        self
    }

    pub fn with_observer(mut self, observer: Box<dyn Observer<B>>) -> Self {
        self.observers.push(observer);
        self
    }

    pub fn add_observer(&mut self, observer: Box<dyn Observer<B>>) {
        self.observers.push(observer);
    }

    /// Play a full game with `x` as X and `o` as O.
    pub fn play(&mut self, x: &mut dyn Agent<B>, o: &mut dyn Agent<B>) -> Result<GameRecord> {
        for observer in &mut self.observers {
            observer.on_game_start(self.first_player)?;
        }
        tracing::info!(
            game = %B::KIND,
            x = x.name(),
            o = o.name(),
            first = %self.first_player,
            "game started"
        );

        let mut board = B::new();
        let mut record = GameRecord::new(self.first_player);
        let mut player = self.first_player;

        loop {
            let agent: &mut dyn Agent<B> = match player {
                Player::X => &mut *x,
                Player::O => &mut *o,
            };

            let started = Instant::now();
            let mv = agent.select_move(&board, player)?;
            let elapsed = started.elapsed();

            let placement = board.apply(mv, player)?;
            let verdict = board.verdict_after(&placement);
            let step = MoveRecord {
                player,
                mv,
                placement,
                elapsed,
            };
            record.moves.push(step);

            for observer in &mut self.observers {
                observer.on_move(&board, &step, verdict)?;
            }

            if verdict.is_terminal() {
                record.verdict = verdict;
                break;
            }
            player = player.opponent();
        }

        tracing::info!(
            game = %B::KIND,
            verdict = %record.verdict,
            moves = record.len(),
            "game finished"
        );

        if self.learn {
            x.learn(&record, Player::X)?;
            o.learn(&record, Player::O)?;
        }

        for observer in &mut self.observers {
            observer.on_game_end(&record)?;
        }

        Ok(record)
    }
}
