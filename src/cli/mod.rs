//! CLI infrastructure for gridgames
//!
//! This module provides the command-line interface for pitting agents against
//! each other on Tic-Tac-Toe and Connect Four.

pub mod commands;
pub mod output;
