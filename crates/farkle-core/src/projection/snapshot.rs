//! A bundle of every projection, evaluated once.

use serde::{Deserialize, Serialize};

use crate::fact::{Fact, LuckTried, PlayerCount};

/// Derived game state at the end of a fact log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Player count the projections were evaluated with.
    pub player_count: PlayerCount,
    /// Whether a game is in progress.
    pub active: bool,
    /// 1-based player to move.
    pub current_player: usize,
    /// Turns closed since the last game start.
    pub turns_completed: usize,
    /// Banked points per player, player 1 first.
    pub scores: Vec<u32>,
    /// Attempts of the turn in progress.
    pub current_turn: Vec<LuckTried>,
    /// Positions within `current_turn` where all dice were kept.
    pub hot_dice_indexes: Vec<usize>,
    /// Points at stake in the turn in progress.
    pub turn_score: u32,
    /// Winner recorded by the last game end.
    pub last_winner: Option<usize>,
}

impl GameSnapshot {
    /// Evaluate every projection over `facts`.
    pub fn from_facts(player_count: PlayerCount, facts: &[Fact]) -> Self {
        Self {
            player_count,
            active: super::is_game_active(facts),
            current_player: super::current_player(player_count, facts),
            turns_completed: super::turns_completed_since_last_start(facts),
            scores: super::player_scores(player_count, facts),
            current_turn: super::facts_since_last_turn_start(facts)
                .into_iter()
                .cloned()
                .collect(),
            hot_dice_indexes: super::hot_dice_indexes_in_current_turn(facts),
            turn_score: super::current_turn_score(facts),
            last_winner: super::last_winner(facts),
        }
    }

    /// The 1-based player with the highest banked total, first seat on ties.
    pub fn leader(&self) -> Option<(usize, u32)> {
        self.scores
            .iter()
            .copied()
            .enumerate()
            .fold(None, |best: Option<(usize, u32)>, (i, s)| match best {
                Some((_, top)) if top >= s => best,
                _ => Some((i + 1, s)),
            })
    }
}

impl std::fmt::Display for GameSnapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = if self.active { "in progress" } else { "not running" };
        writeln!(f, "game: {state}")?;
        writeln!(
            f,
            "current player: {} of {}",
            self.current_player, self.player_count
        )?;
        writeln!(f, "turns completed: {}", self.turns_completed)?;
        let scores: Vec<String> = self
            .scores
            .iter()
            .enumerate()
            .map(|(i, s)| format!("{}={s}", i + 1))
            .collect();
        writeln!(f, "scores: {}", scores.join(" "))?;
        write!(
            f,
            "turn in progress: {} points over {} attempts",
            self.turn_score,
            self.current_turn.len()
        )?;
        if !self.hot_dice_indexes.is_empty() {
            write!(f, ", hot dice at {:?}", self.hot_dice_indexes)?;
        }
        writeln!(f)?;
        match self.last_winner {
            Some(p) => write!(f, "last winner: player {p}"),
            None => write!(f, "last winner: none"),
        }
    }
}
