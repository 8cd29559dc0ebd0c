//! Game-playing pipeline
//!
//! The [`GameLoop`] controller alternates two [`Agent`]s on a board, reports
//! every move to [`Observer`]s and hands the finished [`GameRecord`] back to
//! learners.

pub mod game_loop;

pub use game_loop::GameLoop;

pub use crate::{
    game::{GameRecord, MoveRecord},
    ports::{Agent, Observer},
};
