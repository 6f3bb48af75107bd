//! CLI frontend for the Farkle fact-log engine.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "farkle",
    about = "Farkle: score dice, simulate games, and replay fact logs",
    version,
    propagate_version = true
)]
struct Cli {
    /// Log engine decisions to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score a set of dice and show which melds fired
    Score {
        /// One to six die faces, 1-6
        #[arg(required = true)]
        dice: Vec<u32>,
    },

    /// Roll dice and score the result
    Roll {
        /// Number of dice to roll
        #[arg(short, long, default_value = "6", value_parser = clap::value_parser!(u8).range(1..=6))]
        count: u8,

        /// RNG seed for a reproducible roll (default: OS entropy)
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Let bots play a full game and emit its fact log
    Simulate {
        /// Number of players
        #[arg(short, long, default_value = "2", allow_negative_numbers = true)]
        players: i64,

        /// RNG seed for deterministic games
        #[arg(short, long, default_value = "42")]
        seed: u64,

        /// Turn score at which bots bank
        #[arg(long, default_value = "300")]
        bank: u32,

        /// Banked total that wins the game
        #[arg(long, default_value = "10000")]
        target: u32,

        /// Turns before the game is abandoned
        #[arg(long, default_value = "500")]
        max_turns: u32,

        /// Write the JSON fact log here and print a summary (default: log to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Load a JSON fact log and report the derived game state
    Replay {
        /// Fact log file
        file: PathBuf,

        /// Number of players (default: from the last GameStarted)
        #[arg(short, long, allow_negative_numbers = true)]
        players: Option<i64>,
    },
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Score { dice } => commands::score::run(&dice),
        Commands::Roll { count, seed } => commands::roll::run(usize::from(count), seed),
        Commands::Simulate {
            players,
            seed,
            bank,
            target,
            max_turns,
            output,
        } => commands::simulate::run(
            commands::simulate::Options {
                players,
                seed,
                bank,
                target,
                max_turns,
            },
            output.as_deref(),
        ),
        Commands::Replay { file, players } => commands::replay::run(&file, players),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
