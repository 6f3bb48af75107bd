//! Autoplay: seat greedy bots at a table and let them play out a game.
//!
//! The table keeps no counters of its own. Whose turn it is, what is at
//! stake, and who is winning are all read back from the fact log through
//! the projections, and every fact goes through [`FactLog::try_append`].
//! A log produced here is therefore also a consistency check of the
//! projections against the rules the bot plays by.

use crate::config::FarkleConfig;
use crate::dice::{DICE_PER_TURN, DiceRoller};
use crate::error::FarkleResult;
use crate::fact::Fact;
use crate::log::FactLog;
use crate::scoring;

/// How a single turn ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The player kept dice until the bank threshold and banked.
    Banked {
        /// 1-based player.
        player: usize,
        /// Points added to the player's total.
        points: u32,
    },
    /// A roll scored nothing and the turn's points were lost.
    Farkle {
        /// 1-based player.
        player: usize,
        /// Points that were at stake when the farkle hit.
        lost: u32,
    },
}

impl TurnOutcome {
    /// The player whose turn it was.
    pub fn player(&self) -> usize {
        match *self {
            Self::Banked { player, .. } | Self::Farkle { player, .. } => player,
        }
    }
}

/// Result of a finished game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOutcome {
    /// 1-based winner, or `None` if the turn cap was hit first.
    pub winner: Option<usize>,
    /// The winner's banked total.
    pub final_score: Option<u32>,
    /// Turns played.
    pub turns: u32,
    /// Banked totals per player at the end.
    pub scores: Vec<u32>,
}

/// A game table with bots in every seat.
#[derive(Debug, Clone)]
pub struct Table {
    config: FarkleConfig,
    roller: DiceRoller,
    log: FactLog,
}

impl Table {
    /// Seat `config.player_count` bots with dice seeded from `config.seed`.
    pub fn new(config: FarkleConfig) -> Self {
        let roller = DiceRoller::seeded(config.seed);
        Self {
            config,
            roller,
            log: FactLog::new(),
        }
    }

    /// Use a different dice source.
    pub fn with_roller(mut self, roller: DiceRoller) -> Self {
        self.roller = roller;
        self
    }

    /// Get the configuration.
    pub fn config(&self) -> &FarkleConfig {
        &self.config
    }

    /// Get the fact log.
    pub fn log(&self) -> &FactLog {
        &self.log
    }

    /// Consume the table and keep its log.
    pub fn into_log(self) -> FactLog {
        self.log
    }

    /// Start a game, if one is not already running.
    pub fn start(&mut self) -> FarkleResult<()> {
        if self.log.is_game_active() {
            return Ok(());
        }
        self.log.try_append(Fact::GameStarted {
            player_count: self.config.player_count,
        })?;
        tracing::debug!(players = %self.config.player_count, "game started");
        Ok(())
    }

    /// Play one turn for the current player.
    ///
    /// The bot keeps every scorable die from each roll. It rolls all six
    /// again after hot dice, otherwise only what it did not keep, and banks
    /// once the turn is worth at least the bank threshold.
    pub fn play_turn(&mut self) -> FarkleResult<TurnOutcome> {
        self.start()?;
        let player = self.log.current_player(self.config.player_count);
        let mut dice_left = DICE_PER_TURN;

        loop {
            let dice = self.roller.roll(dice_left);
            self.log.try_append(Fact::roll_generated(dice.clone()))?;
            let scored = scoring::score(&dice);

            if scored.is_farkle() {
                let lost = self.log.current_turn_score();
                self.log.try_append(Fact::luck_tried(dice, Vec::<u32>::new(), true))?;
                tracing::debug!(player, lost, "farkle");
                return Ok(TurnOutcome::Farkle { player, lost });
            }

            let at_stake = self.log.current_turn_score() + scored.score;
            let bank = at_stake >= self.config.bank_threshold;
            for meld in &scored.melds {
                tracing::trace!(player, kind = %meld.kind, points = meld.points, "kept meld");
            }
            self.log.try_append(Fact::luck_tried(
                dice,
                scored.scorable_dice.clone(),
                bank,
            ))?;

            if bank {
                tracing::debug!(player, points = at_stake, "banked");
                return Ok(TurnOutcome::Banked {
                    player,
                    points: at_stake,
                });
            }

            dice_left = if scored.all_dice_score() {
                tracing::debug!(player, at_stake, "hot dice");
                DICE_PER_TURN
            } else {
                scored.unscorable_dice.len()
            };
        }
    }

    /// Play turns until someone reaches the winning score or the turn cap
    /// is hit, then end the game.
    pub fn play(&mut self) -> FarkleResult<GameOutcome> {
        self.start()?;
        let players = self.config.player_count;
        let mut turns = 0;

        while turns < self.config.max_turns {
            let outcome = self.play_turn()?;
            turns += 1;

            let scores = self.log.player_scores(players);
            let total = scores[outcome.player() - 1];
            if total >= self.config.winning_score {
                let winner = outcome.player();
                self.log
                    .try_append(Fact::game_ended(Some(winner), Some(total)))?;
                tracing::info!(winner, score = total, turns, "game won");
                return Ok(GameOutcome {
                    winner: Some(winner),
                    final_score: Some(total),
                    turns,
                    scores,
                });
            }
        }

        self.log.try_append(Fact::game_ended(None, None))?;
        tracing::info!(turns, "turn cap reached without a winner");
        Ok(GameOutcome {
            winner: None,
            final_score: None,
            turns,
            scores: self.log.player_scores(players),
        })
    }
}
