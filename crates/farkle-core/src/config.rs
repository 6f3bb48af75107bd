//! Configuration for an autoplayed game.

use crate::fact::PlayerCount;

/// Configuration for a [`Table`](crate::table::Table).
#[derive(Debug, Clone)]
pub struct FarkleConfig {
    /// RNG seed for reproducible rolls.
    pub seed: u64,
    /// Players seated at the table.
    pub player_count: PlayerCount,
    /// Turn score at which the bot banks (at least 50).
    pub bank_threshold: u32,
    /// Banked total that wins the game (at least 50).
    pub winning_score: u32,
    /// Turns played before the game is abandoned without a winner.
    pub max_turns: u32,
}

impl Default for FarkleConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            player_count: PlayerCount::TWO,
            bank_threshold: 300,
            winning_score: 10_000,
            max_turns: 500,
        }
    }
}

impl FarkleConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the number of players.
    pub fn with_players(mut self, player_count: PlayerCount) -> Self {
        self.player_count = player_count;
        self
    }

    /// Set the bank threshold (clamped to at least 50).
    pub fn with_bank_threshold(mut self, points: u32) -> Self {
        self.bank_threshold = points.max(50);
        self
    }

    /// Set the winning score (clamped to at least 50).
    pub fn with_winning_score(mut self, points: u32) -> Self {
        self.winning_score = points.max(50);
        self
    }

    /// Set the turn cap (clamped to at least 1).
    pub fn with_max_turns(mut self, turns: u32) -> Self {
        self.max_turns = turns.max(1);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = FarkleConfig::default();
        assert_eq!(cfg.seed, 42);
        assert_eq!(cfg.player_count, PlayerCount::TWO);
        assert_eq!(cfg.player_count, PlayerCount::new(2).unwrap());
        assert_eq!(cfg.bank_threshold, 300);
        assert_eq!(cfg.winning_score, 10_000);
        assert_eq!(cfg.max_turns, 500);
    }

    #[test]
    fn builder_methods() {
        let cfg = FarkleConfig::default()
            .with_seed(123)
            .with_players(PlayerCount::new(4).unwrap())
            .with_bank_threshold(500)
            .with_winning_score(2_000)
            .with_max_turns(50);
        assert_eq!(cfg.seed, 123);
        assert_eq!(cfg.player_count.get(), 4);
        assert_eq!(cfg.bank_threshold, 500);
        assert_eq!(cfg.winning_score, 2_000);
        assert_eq!(cfg.max_turns, 50);
    }

    #[test]
    fn thresholds_clamped() {
        let cfg = FarkleConfig::default()
            .with_bank_threshold(0)
            .with_winning_score(10)
            .with_max_turns(0);
        assert_eq!(cfg.bank_threshold, 50);
        assert_eq!(cfg.winning_score, 50);
        assert_eq!(cfg.max_turns, 1);
    }
}
