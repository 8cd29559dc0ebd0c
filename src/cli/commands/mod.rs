//! Subcommands of the `gridgames` binary

pub mod play;
