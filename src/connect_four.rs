//! Connect Four game implementation

pub mod board;
pub mod heuristic;

pub use board::{COLS, CONNECT, ConnectFourBoard, ROWS, windows};
pub use heuristic::evaluate;
