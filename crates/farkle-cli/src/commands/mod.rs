pub mod replay;
pub mod roll;
pub mod score;
pub mod simulate;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use farkle_core::DiceScore;

/// Render dice as `[1, 5, 5]`.
fn format_dice(dice: &[u32]) -> String {
    let faces: Vec<String> = dice.iter().map(u32::to_string).collect();
    format!("[{}]", faces.join(", "))
}

/// Print the melds that fired for a scored roll, plus the verdict line.
fn print_score(result: &DiceScore) {
    if result.is_farkle() {
        println!("  {} nothing scores", "Farkle!".red().bold());
        return;
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Meld", "Dice", "Points"]);
    for meld in &result.melds {
        table.add_row(vec![
            meld.kind.to_string(),
            format_dice(&meld.dice),
            meld.points.to_string(),
        ]);
    }
    println!("{table}");

    println!("  {} {}", "Score:".bold(), result.score.to_string().green().bold());
    if result.all_dice_score() {
        println!("  {} every die scores, roll all six again", "Hot dice!".yellow().bold());
    } else {
        println!(
            "  {} {}",
            "Unscorable:".dimmed(),
            format_dice(&result.unscorable_dice)
        );
    }
}
