//! Snapshot tests for rendered scores and game snapshots.

use farkle_core::{Fact, FactLog, PlayerCount, score};

fn render_melds(dice: &[u32]) -> String {
    score(dice)
        .melds
        .iter()
        .map(|m| format!("{} {:?} = {}", m.kind, m.dice, m.points))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn melds_in_rule_order() {
    insta::assert_snapshot!(render_melds(&[5, 1, 6, 6, 6, 1]), @r"
    three of a kind [6, 6, 6] = 600
    single ones [1, 1] = 200
    single fives [5] = 50
    ");
}

#[test]
fn four_of_a_kind_beats_pairs() {
    insta::assert_snapshot!(render_melds(&[2, 2, 2, 2, 3, 3]), @"four of a kind [2, 2, 2, 2] = 1000");
}

#[test]
fn game_snapshot_mid_turn() {
    let log = FactLog::from(vec![
        Fact::game_started(2).unwrap(),
        Fact::luck_tried(vec![1, 2, 3, 4, 6, 6], vec![1], false),
        Fact::luck_tried(vec![5, 5, 5, 2, 3], vec![5, 5, 5], true),
        Fact::luck_tried(vec![2, 2, 3, 3, 4, 4], vec![2, 2, 3, 3, 4, 4], false),
        Fact::luck_tried(vec![1, 3, 4, 6, 6, 2], vec![1], false),
    ]);
    let snapshot = log.snapshot(PlayerCount::new(2).unwrap());
    insta::assert_snapshot!(snapshot.to_string(), @r"
    game: in progress
    current player: 2 of 2
    turns completed: 1
    scores: 1=600 2=0
    turn in progress: 1600 points over 2 attempts, hot dice at [0]
    last winner: none
    ");
}

#[test]
fn game_snapshot_after_win() {
    let log = FactLog::from(vec![
        Fact::game_started(3).unwrap(),
        Fact::luck_tried(vec![1, 1, 1, 1, 1, 1], vec![1, 1, 1, 1, 1, 1], true),
        Fact::game_ended(Some(1), Some(3000)),
    ]);
    let snapshot = log.snapshot(PlayerCount::new(3).unwrap());
    insta::assert_snapshot!(snapshot.to_string(), @r"
    game: not running
    current player: 2 of 3
    turns completed: 1
    scores: 1=3000 2=0 3=0
    turn in progress: 0 points over 0 attempts
    last winner: player 1
    ");
}
