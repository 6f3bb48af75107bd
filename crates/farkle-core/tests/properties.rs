//! Property-based tests for the scorer and the log projections.

use proptest::prelude::*;

use farkle_core::dice::is_sub_multiset;
use farkle_core::projection::{current_player, luck_tried_facts_by_player, player_scores};
use farkle_core::{Fact, PlayerCount, score};

/// Strategy: one to six valid dice.
fn roll_strategy() -> impl Strategy<Value = Vec<u32>> {
    prop::collection::vec(1..=6u32, 1..=6)
}

/// Strategy: a turn-ending or continuing attempt on a random roll.
fn attempt_strategy() -> impl Strategy<Value = Fact> {
    (roll_strategy(), any::<bool>()).prop_map(|(dice, turn_ended)| {
        let kept = score(&dice).scorable_dice;
        Fact::luck_tried(dice, kept, turn_ended)
    })
}

proptest! {
    // 1. Every die is classified exactly once
    #[test]
    fn dice_are_partitioned(dice in roll_strategy()) {
        let result = score(&dice);
        prop_assert_eq!(result.scorable_dice.len() + result.unscorable_dice.len(), dice.len());
        prop_assert!(is_sub_multiset(&result.scorable_dice, &dice));
        prop_assert!(is_sub_multiset(&result.unscorable_dice, &dice));
    }

    // 2. Scoring is deterministic and leaves its input alone
    #[test]
    fn score_is_idempotent(dice in prop::collection::vec(0..=8u32, 0..=8)) {
        let before = dice.clone();
        let first = score(&dice);
        let second = score(&dice);
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(&dice, &before);
        prop_assert_eq!(first.roll, before);
    }

    // 3. Scoring the scorable dice again changes nothing
    #[test]
    fn scorable_dice_score_the_same(dice in roll_strategy()) {
        let first = score(&dice);
        let again = score(&first.scorable_dice);
        prop_assert_eq!(again.score, first.score);
        prop_assert!(again.unscorable_dice.is_empty());
    }

    // 4. Order of the dice never matters
    #[test]
    fn score_ignores_order(mut dice in roll_strategy()) {
        let before = score(&dice).score;
        dice.reverse();
        prop_assert_eq!(score(&dice).score, before);
    }

    // 5. Points come in multiples of 50
    #[test]
    fn score_is_multiple_of_fifty(dice in roll_strategy()) {
        prop_assert_eq!(score(&dice).score % 50, 0);
    }

    // 6. Out-of-range faces or counts score nothing
    #[test]
    fn invalid_input_scores_zero(
        mut dice in prop::collection::vec(1..=6u32, 0..=6),
        bad in 7..100u32,
        extra in prop::collection::vec(1..=6u32, 7..12),
    ) {
        dice.push(bad);
        prop_assert_eq!(score(&dice).score, 0);
        prop_assert_eq!(score(&extra).score, 0);
    }

    // 7. The current player cycles with period player_count
    #[test]
    fn current_player_is_periodic(n in 1..8i64, turns in 0..40usize) {
        let pc = PlayerCount::new(n).unwrap();
        let mut facts = vec![Fact::game_started(n).unwrap()];
        facts.extend((0..turns).map(|_| Fact::luck_tried(vec![1], vec![1], true)));
        let expected = turns % pc.get() + 1;
        prop_assert_eq!(current_player(pc, &facts), expected);

        facts.extend((0..pc.get()).map(|_| Fact::luck_tried(vec![5], vec![5], true)));
        prop_assert_eq!(current_player(pc, &facts), expected);
    }

    // 8. Partitioning loses no attempts
    #[test]
    fn partition_keeps_every_attempt(
        n in 1..5i64,
        attempts in prop::collection::vec(attempt_strategy(), 0..30),
    ) {
        let pc = PlayerCount::new(n).unwrap();
        let mut facts = vec![Fact::game_started(n).unwrap()];
        facts.extend(attempts);
        let total: usize = luck_tried_facts_by_player(pc, &facts).iter().map(Vec::len).sum();
        prop_assert_eq!(total, facts.len() - 1);
    }

    // 9. Banked totals never exceed the sum of every kept meld
    #[test]
    fn scores_bounded_by_melds(
        n in 1..5i64,
        attempts in prop::collection::vec(attempt_strategy(), 0..30),
    ) {
        let pc = PlayerCount::new(n).unwrap();
        let mut facts = vec![Fact::game_started(n).unwrap()];
        facts.extend(attempts);
        let ceiling: u32 = facts
            .iter()
            .filter_map(Fact::as_luck_tried)
            .map(|l| l.meld_score())
            .sum();
        let banked: u32 = player_scores(pc, &facts).iter().sum();
        prop_assert!(banked <= ceiling);
    }
}
