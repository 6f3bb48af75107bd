use std::fs;
use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use farkle_core::{FarkleConfig, PlayerCount, Table as GameTable};

pub struct Options {
    pub players: i64,
    pub seed: u64,
    pub bank: u32,
    pub target: u32,
    pub max_turns: u32,
}

pub fn run(opts: Options, output: Option<&Path>) -> Result<(), String> {
    let players = PlayerCount::new(opts.players).map_err(|e| e.to_string())?;
    let config = FarkleConfig::default()
        .with_seed(opts.seed)
        .with_players(players)
        .with_bank_threshold(opts.bank)
        .with_winning_score(opts.target)
        .with_max_turns(opts.max_turns);

    let mut game = GameTable::new(config);
    let outcome = game
        .play()
        .map_err(|e| format!("simulation failed: {e}"))?;
    let log = game.into_log();
    let json = log.to_json().map_err(|e| e.to_string())?;

    let Some(path) = output else {
        println!("{json}");
        return Ok(());
    };

    fs::write(path, format!("{json}\n"))
        .map_err(|e| format!("cannot write {}: {e}", path.display()))?;

    println!(
        "  {} {}",
        "Simulation".bold(),
        format!(
            "({players} players, seed={}, bank at {}, target {})",
            opts.seed, opts.bank, opts.target
        )
        .dimmed()
    );
    println!("  {} turns played, {} facts logged", outcome.turns, log.len());
    println!();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Player", "Score"]);
    for (i, score) in outcome.scores.iter().enumerate() {
        let label = format!("Player {}", i + 1);
        if outcome.winner == Some(i + 1) {
            table.add_row(vec![format!("{label} (winner)"), score.to_string()]);
        } else {
            table.add_row(vec![label, score.to_string()]);
        }
    }
    println!("{table}");
    println!();

    match outcome.winner {
        Some(winner) => println!(
            "  {} player {winner} wins with {}",
            "Winner:".green().bold(),
            outcome.final_score.unwrap_or_default()
        ),
        None => println!("  {} turn cap reached", "No winner:".yellow().bold()),
    }
    println!("  Fact log written to {}", path.display());
    Ok(())
}
