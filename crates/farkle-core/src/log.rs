//! Fact log storage and serialization.

use serde::{Deserialize, Serialize};

use crate::error::{FarkleError, FarkleResult};
use crate::fact::{Fact, LuckTried, PlayerCount};
use crate::projection::{self, GameSnapshot};

/// An append-only, chronological log of facts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FactLog {
    facts: Vec<Fact>,
}

impl FactLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a fact without any checks.
    pub fn append(&mut self, fact: Fact) {
        tracing::trace!(kind = %fact.kind(), index = self.facts.len(), "appended fact");
        self.facts.push(fact);
    }

    /// Append a fact after checking its payload and the game lifecycle.
    ///
    /// A game may only start when none is running, and roll, pick, attempt
    /// and end facts need a running game. Rejected facts are not appended.
    pub fn try_append(&mut self, fact: Fact) -> FarkleResult<()> {
        if let Err(err) = self.check(&fact) {
            tracing::warn!(kind = %fact.kind(), %err, "rejected fact");
            return Err(err);
        }
        self.append(fact);
        Ok(())
    }

    fn check(&self, fact: &Fact) -> FarkleResult<()> {
        fact.validate()?;
        let active = self.is_game_active();
        match fact {
            Fact::HelloFarkle { .. } => Ok(()),
            Fact::GameStarted { .. } if active => Err(FarkleError::GameAlreadyActive),
            Fact::GameStarted { .. } => Ok(()),
            _ if !active => Err(FarkleError::NoActiveGame),
            _ => Ok(()),
        }
    }

    /// Get all facts.
    pub fn facts(&self) -> &[Fact] {
        &self.facts
    }

    /// Number of facts.
    pub fn len(&self) -> usize {
        self.facts.len()
    }

    /// Whether the log is empty.
    pub fn is_empty(&self) -> bool {
        self.facts.is_empty()
    }

    /// Serialize the log as a pretty-printed JSON array.
    pub fn to_json(&self) -> FarkleResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse a log from a JSON array of facts.
    pub fn from_json(json: &str) -> FarkleResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// See [`projection::is_game_active`].
    pub fn is_game_active(&self) -> bool {
        projection::is_game_active(&self.facts)
    }

    /// See [`projection::last_game_start_index`].
    pub fn last_game_start_index(&self) -> Option<usize> {
        projection::last_game_start_index(&self.facts)
    }

    /// See [`projection::last_game_end_index`].
    pub fn last_game_end_index(&self) -> Option<usize> {
        projection::last_game_end_index(&self.facts)
    }

    /// See [`projection::turns_completed_since_last_start`].
    pub fn turns_completed(&self) -> usize {
        projection::turns_completed_since_last_start(&self.facts)
    }

    /// See [`projection::current_player`].
    pub fn current_player(&self, player_count: PlayerCount) -> usize {
        projection::current_player(player_count, &self.facts)
    }

    /// See [`projection::facts_since_last_turn_start`].
    pub fn current_turn(&self) -> Vec<&LuckTried> {
        projection::facts_since_last_turn_start(&self.facts)
    }

    /// See [`projection::hot_dice_indexes_in_current_turn`].
    pub fn hot_dice_indexes(&self) -> Vec<usize> {
        projection::hot_dice_indexes_in_current_turn(&self.facts)
    }

    /// See [`projection::current_turn_score`].
    pub fn current_turn_score(&self) -> u32 {
        projection::current_turn_score(&self.facts)
    }

    /// See [`projection::luck_tried_facts_by_player`].
    pub fn luck_tried_by_player(&self, player_count: PlayerCount) -> Vec<Vec<&LuckTried>> {
        projection::luck_tried_facts_by_player(player_count, &self.facts)
    }

    /// See [`projection::player_scores`].
    pub fn player_scores(&self, player_count: PlayerCount) -> Vec<u32> {
        projection::player_scores(player_count, &self.facts)
    }

    /// Player count of the most recent game, if one was ever started.
    pub fn declared_player_count(&self) -> Option<PlayerCount> {
        projection::declared_player_count(&self.facts)
    }

    /// Evaluate every projection at once.
    pub fn snapshot(&self, player_count: PlayerCount) -> GameSnapshot {
        GameSnapshot::from_facts(player_count, &self.facts)
    }
}

impl From<Vec<Fact>> for FactLog {
    fn from(facts: Vec<Fact>) -> Self {
        Self { facts }
    }
}

impl Extend<Fact> for FactLog {
    fn extend<I: IntoIterator<Item = Fact>>(&mut self, iter: I) {
        for fact in iter {
            self.append(fact);
        }
    }
}
