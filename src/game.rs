//! Board abstractions shared by both games

pub mod board;
pub mod guard;
pub mod player;
pub mod record;

pub use board::{GameBoard, GameKind, Placement, Verdict};
pub use guard::MoveGuard;
pub use player::{Cell, Player};
pub use record::{GameRecord, MoveRecord};
