use std::fs;
use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use farkle_core::{FactLog, PlayerCount};

pub fn run(file: &Path, players: Option<i64>) -> Result<(), String> {
    let text =
        fs::read_to_string(file).map_err(|e| format!("cannot read {}: {e}", file.display()))?;
    let log = FactLog::from_json(&text).map_err(|e| format!("{}: {e}", file.display()))?;

    let player_count = match players {
        Some(n) => PlayerCount::new(n).map_err(|e| e.to_string())?,
        None => log
            .declared_player_count()
            .ok_or("log has no GameStarted fact; pass --players")?,
    };
    tracing::debug!(facts = log.len(), players = %player_count, "replaying log");

    let snapshot = log.snapshot(player_count);
    let attempts = log.luck_tried_by_player(player_count);

    println!(
        "  {} {}",
        "Replay".bold(),
        format!("({} facts, {player_count} players)", log.len()).dimmed()
    );
    let state = if snapshot.active {
        "in progress".green()
    } else {
        "not running".yellow()
    };
    println!("  Game: {state}");
    println!("  Turns completed: {}", snapshot.turns_completed);
    println!();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Player", "Score", "Attempts"]);
    for (i, score) in snapshot.scores.iter().enumerate() {
        let seat = i + 1;
        let label = if snapshot.active && seat == snapshot.current_player {
            format!("Player {seat} (to move)")
        } else {
            format!("Player {seat}")
        };
        let tries = attempts.get(i).map_or(0, Vec::len);
        table.add_row(vec![label, score.to_string(), tries.to_string()]);
    }
    println!("{table}");
    println!();

    if snapshot.active {
        println!(
            "  {} {} points over {} attempts",
            "Turn in progress:".bold(),
            snapshot.turn_score,
            snapshot.current_turn.len()
        );
        if !snapshot.hot_dice_indexes.is_empty() {
            println!(
                "  {} at attempts {:?}",
                "Hot dice".yellow().bold(),
                snapshot.hot_dice_indexes
            );
        }
    }
    if let Some(winner) = snapshot.last_winner {
        println!("  {} player {winner}", "Last winner:".green().bold());
    }
    Ok(())
}
