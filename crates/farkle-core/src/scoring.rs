//! Dice scoring.
//!
//! Scoring consumes dice from a per-face tally, one rule at a time, in a
//! fixed priority order:
//!
//! 1. six of a kind (3000)
//! 2. five of a kind (2000)
//! 3. four of a kind (1000)
//! 4. three pairs (1500), or else one of each face (2500)
//! 5. three of a kind, per face (ones 1000, any other face × 100)
//! 6. single ones (100 each)
//! 7. single fives (50 each)
//!
//! Dice consumed by one rule are unavailable to later rules. Whatever is
//! left in the tally afterwards is unscorable.

use serde::{Deserialize, Serialize};

use crate::dice::{FaceCounts, MAX_FACE, MIN_FACE, is_valid_roll};

/// The combination a group of dice was scored as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MeldKind {
    /// All six dice show the same face.
    SixOfAKind,
    /// Five dice show the same face.
    FiveOfAKind,
    /// Four dice show the same face.
    FourOfAKind,
    /// Three distinct faces, two dice each.
    ThreePairs,
    /// One die of every face, 1 through 6.
    Straight,
    /// Exactly three dice show the same face.
    ThreeOfAKind,
    /// Leftover ones.
    SingleOnes,
    /// Leftover fives.
    SingleFives,
}

impl std::fmt::Display for MeldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SixOfAKind => write!(f, "six of a kind"),
            Self::FiveOfAKind => write!(f, "five of a kind"),
            Self::FourOfAKind => write!(f, "four of a kind"),
            Self::ThreePairs => write!(f, "three pairs"),
            Self::Straight => write!(f, "straight"),
            Self::ThreeOfAKind => write!(f, "three of a kind"),
            Self::SingleOnes => write!(f, "single ones"),
            Self::SingleFives => write!(f, "single fives"),
        }
    }
}

/// One scoring rule that fired, with the dice it consumed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meld {
    /// Which combination was recognised.
    pub kind: MeldKind,
    /// The dice consumed, in face order.
    pub dice: Vec<u32>,
    /// Points awarded.
    pub points: u32,
}

/// The outcome of scoring a set of dice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceScore {
    /// The dice as given.
    pub roll: Vec<u32>,
    /// Every die consumed by a rule, in the order the rules fired.
    pub scorable_dice: Vec<u32>,
    /// Every die no rule consumed.
    pub unscorable_dice: Vec<u32>,
    /// Sum of all meld points.
    pub score: u32,
    /// The rules that fired, in order.
    pub melds: Vec<Meld>,
}

impl DiceScore {
    /// A zero score with every die unscorable.
    fn nothing(dice: &[u32]) -> Self {
        Self {
            roll: dice.to_vec(),
            scorable_dice: Vec::new(),
            unscorable_dice: dice.to_vec(),
            score: 0,
            melds: Vec::new(),
        }
    }

    /// True if the dice score nothing at all.
    pub fn is_farkle(&self) -> bool {
        self.score == 0
    }

    /// True if every die scored, which lets the player re-roll all six.
    pub fn all_dice_score(&self) -> bool {
        !self.roll.is_empty() && self.unscorable_dice.is_empty()
    }
}

/// Score a set of dice.
///
/// Input must be one to six dice with faces 1..=6. Anything else scores 0
/// with every die unscorable; this function never fails.
pub fn score(dice: &[u32]) -> DiceScore {
    if !is_valid_roll(dice) {
        return DiceScore::nothing(dice);
    }

    let mut counts = FaceCounts::from_dice(dice);
    let mut melds = Vec::new();

    for (size, kind, points) in [
        (6, MeldKind::SixOfAKind, 3000),
        (5, MeldKind::FiveOfAKind, 2000),
        (4, MeldKind::FourOfAKind, 1000),
    ] {
        let found = counts.faces().find(|&f| counts.get(f) == size);
        if let Some(face) = found {
            counts.take(face, size);
            melds.push(Meld {
                kind,
                dice: vec![face; size as usize],
                points,
            });
        }
    }

    let pairs: Vec<u32> = counts.faces().filter(|&f| counts.get(f) == 2).collect();
    if pairs.len() == 3 {
        for &face in &pairs {
            counts.take(face, 2);
        }
        melds.push(Meld {
            kind: MeldKind::ThreePairs,
            dice: pairs.iter().flat_map(|&f| [f, f]).collect(),
            points: 1500,
        });
    } else if counts.distinct() == 6 {
        for face in MIN_FACE..=MAX_FACE {
            counts.take(face, 1);
        }
        melds.push(Meld {
            kind: MeldKind::Straight,
            dice: (MIN_FACE..=MAX_FACE).collect(),
            points: 2500,
        });
    }

    for face in MIN_FACE..=MAX_FACE {
        if counts.get(face) == 3 {
            counts.take(face, 3);
            melds.push(Meld {
                kind: MeldKind::ThreeOfAKind,
                dice: vec![face; 3],
                points: if face == 1 { 1000 } else { face * 100 },
            });
        }
    }

    for (face, kind, each) in [(1, MeldKind::SingleOnes, 100), (5, MeldKind::SingleFives, 50)] {
        let n = counts.take(face, u8::MAX);
        if n > 0 {
            melds.push(Meld {
                kind,
                dice: vec![face; n as usize],
                points: each * u32::from(n),
            });
        }
    }

    let scorable_dice: Vec<u32> = melds.iter().flat_map(|m| m.dice.iter().copied()).collect();
    let score = melds.iter().map(|m| m.points).sum();
    tracing::trace!(?dice, score, melds = melds.len(), "scored dice");

    DiceScore {
        roll: dice.to_vec(),
        scorable_dice,
        unscorable_dice: counts.to_dice(),
        score,
        melds,
    }
}
