//! Play command - Pit two agents against each other in a single game

use std::path::{Path, PathBuf};

use anyhow::{Result, anyhow};
use clap::Parser;

use crate::{
    app::{AgentConfig, AgentKind, App},
    cli::output::{format_millis, format_number, print_board, print_kv, print_section},
    connect_four::ConnectFourBoard,
    game::{GameKind, GameRecord, MoveRecord, Player, Verdict},
    pipeline::GameLoop,
    ports::{Agent, Observer},
    search::{MinimaxAgent, Searchable},
    tictactoe::TicTacToeBoard,
};

#[derive(Parser, Debug)]
#[command(about = "Play one game between two agents")]
pub struct PlayArgs {
    /// Game to play (`tictactoe` or `connect-four`)
    #[arg(long, short = 'g', default_value = "tictactoe")]
    pub game: String,

    /// Agent playing X (random, heuristic, minimax, q-learning)
    #[arg(long, default_value = "minimax")]
    pub x: String,

    /// Agent playing O (random, heuristic, minimax, q-learning)
    #[arg(long, default_value = "heuristic")]
    pub o: String,

    /// Which token makes the first move (`x` or `o`)
    #[arg(long = "first-player", default_value = "x")]
    pub first_player: String,

    /// Search depth for minimax agents (defaults per game)
    #[arg(long, short = 'd')]
    pub depth: Option<i32>,

    /// Disable alpha-beta pruning for minimax agents
    #[arg(long)]
    pub no_alpha_beta: bool,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Q-table file used by Q-learning agents
    #[arg(long = "q-table")]
    pub q_table: Option<PathBuf>,

    /// Let learning agents learn from the game and save their table
    #[arg(long)]
    pub learn: bool,

    /// JSON agent configuration applied to both players
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Only print the final result
    #[arg(long, short = 'q')]
    pub quiet: bool,
}

pub(crate) fn parse_player_token(value: &str, flag: &str) -> Result<Player> {
    match value.trim().to_ascii_lowercase().as_str() {
        "x" | "first" | "player1" | "p1" => Ok(Player::X),
        "o" | "second" | "player2" | "p2" => Ok(Player::O),
        other => Err(anyhow!(
            "Invalid value '{other}' for {flag} (expected 'x' or 'o')"
        )),
    }
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let game: GameKind = args.game.parse()?;
    let base = match &args.config {
        Some(path) => AgentConfig::from_json_file(path)?,
        None => AgentConfig::default(),
    };
    let x_config = participant_config(&base, &args, &args.x, 0)?;
    let o_config = participant_config(&base, &args, &args.o, 1)?;
    let first_player = parse_player_token(&args.first_player, "--first-player")?;

    if args.learn && args.q_table.is_none() {
        tracing::warn!("--learn without --q-table: learned values will not be saved");
    }

    let app = App::new();
    match game {
        GameKind::TicTacToe => {
            play::<TicTacToeBoard>(&app, &args, &x_config, &o_config, first_player)
        }
        GameKind::ConnectFour => {
            play::<ConnectFourBoard>(&app, &args, &x_config, &o_config, first_player)
        }
    }
}

/// Configuration for one seat: the shared base with command-line overrides
fn participant_config(
    base: &AgentConfig,
    args: &PlayArgs,
    agent: &str,
    seat: u64,
) -> Result<AgentConfig> {
    let mut config = base.clone();
    config.kind = agent.parse::<AgentKind>()?;
    if let Some(depth) = args.depth {
        config.depth = Some(depth);
    }
    if args.no_alpha_beta {
        config.alpha_beta = false;
    }
    // Offset the seat so two agents of the same kind do not mirror each other
    if let Some(seed) = args.seed.or(base.seed) {
        config.seed = Some(seed.wrapping_add(seat));
    }
    config.validate()?;
    Ok(config)
}

fn play<B: Searchable>(
    app: &App,
    args: &PlayArgs,
    x_config: &AgentConfig,
    o_config: &AgentConfig,
    first_player: Player,
) -> Result<()> {
    let q_table = args.q_table.as_deref();
    let mut x = app.create_agent::<B>(x_config, q_table)?;
    let mut o = app.create_agent::<B>(o_config, q_table)?;

    print_section(&format!("{}: {} (X) vs {} (O)", B::KIND, x.name(), o.name()));

    let mut game_loop = GameLoop::<B>::new()
        .with_first_player(first_player)
        .with_learning(args.learn);
    if !args.quiet {
        game_loop.add_observer(Box::new(BoardPrinter));
    }

    let record = game_loop.play(x.as_mut(), o.as_mut())?;
    report(&record, x.as_ref(), o.as_ref());

    if args.learn
        && let Some(path) = q_table
    {
        save_learned(app, x.as_ref(), path)?;
        save_learned(app, o.as_ref(), path)?;
    }
    Ok(())
}

fn save_learned<B: Searchable>(app: &App, agent: &dyn Agent<B>, path: &Path) -> Result<()> {
    if app.save_q_table(agent, path)? {
        print_kv("Saved Q-table", &path.display().to_string());
    }
    Ok(())
}

fn report<B: Searchable>(record: &GameRecord, x: &dyn Agent<B>, o: &dyn Agent<B>) {
    print_section("Result");
    let result = match record.verdict {
        Verdict::Win(Player::X) => format!("{} (X) wins", x.name()),
        Verdict::Win(Player::O) => format!("{} (O) wins", o.name()),
        other => other.to_string(),
    };
    print_kv("Outcome", &result);
    print_kv("Moves", &record.len().to_string());

    for (player, agent) in [(Player::X, x), (Player::O, o)] {
        if let Some(average) = record.average_move_time(player) {
            print_kv(&format!("{player} avg move time"), &format_millis(average));
        }
        if let Some(minimax) = agent.as_any().downcast_ref::<MinimaxAgent<B>>()
            && let Some(outcome) = minimax.last_outcome()
        {
            print_kv(
                &format!("{player} last search"),
                &format!("{} nodes", format_number(outcome.nodes)),
            );
        }
    }
}

/// Observer printing the board after every move
struct BoardPrinter;

impl<B: Searchable> Observer<B> for BoardPrinter {
    fn on_move(&mut self, board: &B, step: &MoveRecord, verdict: Verdict) -> crate::Result<()> {
        let target = match B::KIND {
            GameKind::TicTacToe => format!("cell {}", step.mv),
            GameKind::ConnectFour => format!("column {}", step.mv),
        };
        println!(
            "\n{} plays {target} ({})",
            step.player,
            format_millis(step.elapsed)
        );
        print_board(board);
        if verdict.is_terminal() {
            println!("  -> {verdict}");
        }
        Ok(())
    }
}
