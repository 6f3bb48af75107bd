//! Projections: point-in-time truths derived by replaying a fact log.
//!
//! Every function here is a pure fold over `&[Fact]`. Nothing is cached;
//! call again after appending to get the new answer. Projections do not
//! validate facts: malformed logs give deterministic, if meaningless,
//! results.
//!
//! Turns rotate round-robin. The Nth [`LuckTried`] with `turn_ended` since
//! the last [`Fact::GameStarted`] closes the turn of player
//! `(N - 1) % player_count + 1`, and the attempt after it belongs to the
//! next player. A log without any `GameStarted` has no completed turns and
//! player 1 to move.

pub mod snapshot;

pub use snapshot::GameSnapshot;

use crate::fact::{Fact, LuckTried, PlayerCount};

/// Index of the most recent [`Fact::GameStarted`], if any.
pub fn last_game_start_index(facts: &[Fact]) -> Option<usize> {
    facts
        .iter()
        .rposition(|f| matches!(f, Fact::GameStarted { .. }))
}

/// Index of the most recent [`Fact::GameEnded`], if any.
pub fn last_game_end_index(facts: &[Fact]) -> Option<usize> {
    facts
        .iter()
        .rposition(|f| matches!(f, Fact::GameEnded { .. }))
}

/// A game is active if the last start comes after the last end.
pub fn is_game_active(facts: &[Fact]) -> bool {
    last_game_start_index(facts)
        .is_some_and(|start| last_game_end_index(facts).is_none_or(|end| start > end))
}

/// Facts after the most recent game start; empty when no game ever started.
fn since_last_start(facts: &[Fact]) -> &[Fact] {
    match last_game_start_index(facts) {
        Some(start) => &facts[start + 1..],
        None => &[],
    }
}

/// Turns closed since the most recent game start.
pub fn turns_completed_since_last_start(facts: &[Fact]) -> usize {
    since_last_start(facts)
        .iter()
        .filter(|f| f.ends_turn())
        .count()
}

/// The 1-based player whose turn it is.
pub fn current_player(player_count: PlayerCount, facts: &[Fact]) -> usize {
    turns_completed_since_last_start(facts) % player_count.get() + 1
}

/// The attempts of the turn in progress.
///
/// These are the [`LuckTried`] facts after both the last game start and
/// the last turn-ending attempt.
pub fn facts_since_last_turn_start(facts: &[Fact]) -> Vec<&LuckTried> {
    let last_turn_end = facts.iter().rposition(Fact::ends_turn);
    let boundary = last_game_start_index(facts).max(last_turn_end);
    let turn = boundary.map_or(facts, |i| &facts[i + 1..]);
    turn.iter().filter_map(Fact::as_luck_tried).collect()
}

/// Positions, within [`facts_since_last_turn_start`], of hot-dice attempts.
pub fn hot_dice_indexes_in_current_turn(facts: &[Fact]) -> Vec<usize> {
    facts_since_last_turn_start(facts)
        .iter()
        .enumerate()
        .filter(|(_, luck)| luck.is_hot_dice())
        .map(|(i, _)| i)
        .collect()
}

/// Points kept so far in the turn in progress, before banking.
pub fn current_turn_score(facts: &[Fact]) -> u32 {
    facts_since_last_turn_start(facts)
        .iter()
        .map(|luck| luck.meld_score())
        .sum()
}

/// Forward-pass turn counter shared by the per-player folds.
///
/// Equivalent to evaluating [`current_player`] on every prefix, in one pass.
#[derive(Debug, Clone, Copy)]
struct TurnCursor {
    player_count: usize,
    started: bool,
    turns: usize,
}

impl TurnCursor {
    fn new(player_count: PlayerCount) -> Self {
        Self {
            player_count: player_count.get(),
            started: false,
            turns: 0,
        }
    }

    fn start_game(&mut self) {
        self.started = true;
        self.turns = 0;
    }

    /// 0-based seat of the player to move.
    fn seat(&self) -> usize {
        self.turns % self.player_count
    }

    fn end_turn(&mut self) {
        if self.started {
            self.turns += 1;
        }
    }
}

/// Every [`LuckTried`] in the log, bucketed by the player who made it.
///
/// Bucket `i` holds player `i + 1`'s attempts. Each attempt goes to the
/// player whose turn was current at its position, across all games in the
/// log.
pub fn luck_tried_facts_by_player(player_count: PlayerCount, facts: &[Fact]) -> Vec<Vec<&LuckTried>> {
    let mut buckets = vec![Vec::new(); player_count.get()];
    let mut cursor = TurnCursor::new(player_count);
    for fact in facts {
        match fact {
            Fact::GameStarted { .. } => cursor.start_game(),
            Fact::LuckTried(luck) => {
                buckets[cursor.seat()].push(luck);
                if luck.turn_ended {
                    cursor.end_turn();
                }
            }
            _ => {}
        }
    }
    buckets
}

/// Banked points per player in the most recent game.
///
/// A completed turn banks the sum of its melds unless it ended in a farkle.
/// Turns still in progress bank nothing. Totals reset at every game start
/// and stop changing once the game ends.
pub fn player_scores(player_count: PlayerCount, facts: &[Fact]) -> Vec<u32> {
    let mut scores = vec![0u32; player_count.get()];
    let mut cursor = TurnCursor::new(player_count);
    let mut in_game = false;
    let mut pending = 0u32;

    for fact in facts {
        match fact {
            Fact::GameStarted { .. } => {
                scores.fill(0);
                cursor.start_game();
                in_game = true;
                pending = 0;
            }
            Fact::GameEnded { .. } => {
                in_game = false;
                pending = 0;
            }
            Fact::LuckTried(luck) if in_game => {
                pending = pending.saturating_add(luck.meld_score());
                if luck.turn_ended {
                    if !luck.is_farkle() {
                        let seat = cursor.seat();
                        scores[seat] = scores[seat].saturating_add(pending);
                    }
                    pending = 0;
                    cursor.end_turn();
                }
            }
            _ => {}
        }
    }
    scores
}

/// The winner recorded by the most recent [`Fact::GameEnded`], if any.
pub fn last_winner(facts: &[Fact]) -> Option<usize> {
    facts.iter().rev().find_map(|f| match f {
        Fact::GameEnded { winner, .. } => Some(*winner),
        _ => None,
    })?
}

/// The player count declared by the most recent [`Fact::GameStarted`].
pub fn declared_player_count(facts: &[Fact]) -> Option<PlayerCount> {
    facts.iter().rev().find_map(|f| match f {
        Fact::GameStarted { player_count } => Some(*player_count),
        _ => None,
    })
}
