//! gridgames CLI - Play Tic-Tac-Toe and Connect Four between agents
//!
//! Agents: random, heuristic (win-then-block), minimax with optional
//! alpha-beta pruning, and tabular Q-learning with a saved table.
//!
//! Set `RUST_LOG` (e.g. `RUST_LOG=gridgames=debug`) to see search and
//! learning diagnostics on stderr.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "gridgames")]
#[command(version, about = "Game engines and agents for Tic-Tac-Toe and Connect Four", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play one game between two agents
    Play(gridgames::cli::commands::play::PlayArgs),
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Play(args) => gridgames::cli::commands::play::execute(args),
    }
}
