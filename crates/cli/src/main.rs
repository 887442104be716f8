mod config;
mod game;
mod selfplay;
mod ui;

use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use num_format::{Locale, ToFormattedString};
use reversi_core::perft::perft_root;
use tracing_subscriber::EnvFilter;

use crate::config::{GameParams, parse_board_size};

#[derive(Parser, Debug)]
#[command(name = "reversi", version, about = "Play Reversi against the computer")]
struct Cli {
    #[command(subcommand)]
    command: Option<SubCommands>,

    #[command(flatten)]
    game_params: GameParams,

    /// Log filter such as "debug" or "reversi_core=trace" (overrides RUST_LOG)
    #[arg(long, global = true)]
    log_level: Option<String>,
}

#[derive(Debug, Subcommand)]
enum SubCommands {
    /// Count move-generation nodes from the initial position
    Perft {
        #[arg(long, default_value_t = 8, value_parser = parse_board_size)]
        size: usize,

        #[arg(long, default_value_t = 6)]
        depth: u32,
    },
    /// Let the engine play complete games against an opponent
    Selfplay {
        #[command(flatten)]
        game_params: GameParams,

        /// Number of games to play
        #[arg(long, default_value_t = 1)]
        games: u32,

        /// Print the final board of every game
        #[arg(short, long)]
        verbose: bool,
    },
}

fn main() -> Result<()> {
    let args = Cli::parse();
    init_logging(args.log_level.as_deref())?;

    match args.command {
        Some(SubCommands::Perft { size, depth }) => run_perft(size, depth),
        Some(SubCommands::Selfplay {
            game_params,
            games,
            verbose,
        }) => selfplay::run(&game_params, games, verbose),
        None => ui::ui_loop(&args.game_params),
    }
}

/// Installs the stderr log subscriber.
///
/// `--log-level` wins over `RUST_LOG`; with neither, only warnings are shown.
fn init_logging(level: Option<&str>) -> Result<()> {
    let filter = match level {
        Some(level) => {
            EnvFilter::try_new(level).with_context(|| format!("invalid log filter '{level}'"))?
        }
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

fn run_perft(size: usize, depth: u32) -> Result<()> {
    println!("depth |          nodes |   time (ms)");
    println!("--------------------------------------");
    for d in 1..=depth {
        let start = Instant::now();
        let nodes = perft_root(size, d)?;
        let elapsed = start.elapsed();
        println!(
            "{d:>5} | {:>14} | {:>11}",
            nodes.to_formatted_string(&Locale::en),
            elapsed.as_millis()
        );
    }
    Ok(())
}
