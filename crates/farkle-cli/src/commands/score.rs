use colored::Colorize;

use farkle_core::dice::is_valid_roll;

pub fn run(dice: &[u32]) -> Result<(), String> {
    if !is_valid_roll(dice) {
        println!(
            "  {}",
            "not a valid roll (1-6 dice, faces 1-6), scoring as 0".dimmed()
        );
    }

    let result = farkle_core::score(dice);
    println!("  {} {}", "Dice".bold(), super::format_dice(dice));
    super::print_score(&result);
    Ok(())
}
