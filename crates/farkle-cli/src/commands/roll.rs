use colored::Colorize;

use farkle_core::DiceRoller;

pub fn run(count: usize, seed: Option<u64>) -> Result<(), String> {
    let mut roller = match seed {
        Some(seed) => DiceRoller::seeded(seed),
        None => DiceRoller::from_os_entropy(),
    };
    let dice = roller.roll(count);

    println!("  {} {}", "Rolled".bold(), super::format_dice(&dice));
    super::print_score(&farkle_core::score(&dice));
    Ok(())
}
