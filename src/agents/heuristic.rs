//! Win-then-block heuristic player

use std::{fmt, str::FromStr};

use rand::{SeedableRng, rngs::StdRng, seq::IndexedRandom};
use serde::{Deserialize, Serialize};

use crate::{
    Error, Result,
    game::{GameBoard, MoveGuard, Player, Verdict},
    ports::Agent,
    utils::build_rng,
};

/// What the heuristic agent plays when nothing wins or blocks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TieBreak {
    /// First legal move in the board's preferred order (center first)
    #[default]
    Preference,
    /// Uniform among legal moves
    Random,
}

impl fmt::Display for TieBreak {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TieBreak::Preference => write!(f, "preference"),
            TieBreak::Random => write!(f, "random"),
        }
    }
}

impl FromStr for TieBreak {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "preference" | "preferred" => Ok(TieBreak::Preference),
            "random" => Ok(TieBreak::Random),
            _ => Err(Error::InvalidConfiguration {
                message: format!("unknown tie-break '{s}' (expected preference or random)"),
            }),
        }
    }
}

/// Heuristic policy
///
/// 1. Play a move that wins immediately
/// 2. Otherwise block the opponent's immediate win
/// 3. Otherwise fall back according to [`TieBreak`]
///
/// Both scans try legal moves in ascending order on a private copy of the
/// board, so the caller's board is never touched.
#[derive(Debug, Clone)]
pub struct HeuristicAgent {
    tie_break: TieBreak,
    rng: StdRng,
}

impl HeuristicAgent {
    pub fn new(tie_break: TieBreak) -> Self {
        Self {
            tie_break,
            rng: build_rng(None),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn tie_break(&self) -> TieBreak {
        self.tie_break
    }

    pub fn choose_move<B: GameBoard>(
        &mut self,
        board: &B,
        me: Player,
        opponent: Player,
    ) -> Result<usize> {
        let legal_moves = board.legal_moves();
        if legal_moves.is_empty() {
            return Err(Error::NoLegalMoves);
        }

        let mut scratch = board.clone();
        if let Some(mv) = Self::find_winning_move(&mut scratch, &legal_moves, me)? {
            return Ok(mv);
        }
        if let Some(mv) = Self::find_winning_move(&mut scratch, &legal_moves, opponent)? {
            tracing::trace!(mv, %me, "blocking opponent win");
            return Ok(mv);
        }

        let fallback = match self.tie_break {
            TieBreak::Preference => board
                .preferred_order()
                .iter()
                .copied()
                .find(|&mv| board.is_legal(mv)),
            TieBreak::Random => legal_moves.choose(&mut self.rng).copied(),
        };
        fallback.ok_or(Error::NoLegalMoves)
    }

    /// First move in `moves` that completes a line for `player`
    fn find_winning_move<B: GameBoard>(
        scratch: &mut B,
        moves: &[usize],
        player: Player,
    ) -> Result<Option<usize>> {
        for &mv in moves {
            let guard = MoveGuard::apply(scratch, mv, player)?;
            if guard.verdict_after(&guard.placement()) == Verdict::Win(player) {
                return Ok(Some(mv));
            }
        }
        Ok(None)
    }
}

impl Default for HeuristicAgent {
    fn default() -> Self {
        Self::new(TieBreak::default())
    }
}

impl<B: GameBoard> Agent<B> for HeuristicAgent {
    fn select_move(&mut self, board: &B, player: Player) -> Result<usize> {
        self.choose_move(board, player, player.opponent())
    }

    fn name(&self) -> &str {
        "Heuristic"
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}
