//! Facts: the immutable records a game log is made of.
//!
//! A log is an ordered `Vec<Fact>`; a fact's position is its only
//! timestamp (apart from [`Fact::HelloFarkle`], which records wall-clock
//! time for the humans reading the log). Facts are never edited or
//! removed once appended.

use std::num::NonZeroUsize;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::dice::{DICE_PER_TURN, is_sub_multiset, is_valid_face};
use crate::error::{FarkleError, FarkleResult};
use crate::scoring;

/// Number of players seated at a game. Always at least one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "usize")]
pub struct PlayerCount(NonZeroUsize);

impl PlayerCount {
    /// Two players, the usual table.
    pub const TWO: Self = match NonZeroUsize::new(2) {
        Some(n) => Self(n),
        None => unreachable!(),
    };

    /// Validate a raw player count.
    pub fn new(count: i64) -> FarkleResult<Self> {
        usize::try_from(count)
            .ok()
            .and_then(NonZeroUsize::new)
            .map(Self)
            .ok_or(FarkleError::InvalidPlayerCount(count))
    }

    /// The count as a plain number.
    pub fn get(self) -> usize {
        self.0.get()
    }
}

impl TryFrom<i64> for PlayerCount {
    type Error = FarkleError;

    fn try_from(count: i64) -> FarkleResult<Self> {
        Self::new(count)
    }
}

impl From<PlayerCount> for usize {
    fn from(count: PlayerCount) -> usize {
        count.get()
    }
}

impl From<NonZeroUsize> for PlayerCount {
    fn from(count: NonZeroUsize) -> Self {
        Self(count)
    }
}

impl std::fmt::Display for PlayerCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One attempt at pushing your luck: the dice rolled and the meld kept.
///
/// `turn_ended` marks the last attempt of a turn, either a bank (meld kept)
/// or a farkle (nothing kept).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LuckTried {
    /// The dice that came up.
    pub dice_rolled: Vec<u32>,
    /// The dice the player set aside for scoring.
    pub meld_kept: Vec<u32>,
    /// Whether this attempt ended the player's turn.
    #[serde(default)]
    pub turn_ended: bool,
}

impl LuckTried {
    /// Every rolled die was kept: the player may re-roll all six.
    pub fn is_hot_dice(&self) -> bool {
        self.meld_kept.len() == self.dice_rolled.len()
    }

    /// The turn ended with nothing kept, so nothing is banked.
    pub fn is_farkle(&self) -> bool {
        self.turn_ended && self.meld_kept.is_empty()
    }

    /// Points for the kept meld.
    pub fn meld_score(&self) -> u32 {
        scoring::score(&self.meld_kept).score
    }

    /// Check faces, dice counts, and that the meld came out of the roll.
    pub fn validate(&self) -> FarkleResult<()> {
        validate_dice(&self.dice_rolled)?;
        validate_dice(&self.meld_kept)?;
        if !is_sub_multiset(&self.meld_kept, &self.dice_rolled) {
            return Err(FarkleError::MeldNotInRoll {
                meld: self.meld_kept.clone(),
                roll: self.dice_rolled.clone(),
            });
        }
        Ok(())
    }
}

fn validate_dice(dice: &[u32]) -> FarkleResult<()> {
    if dice.len() > DICE_PER_TURN {
        return Err(FarkleError::TooManyDice(dice.len()));
    }
    match dice.iter().find(|&&f| !is_valid_face(f)) {
        Some(&face) => Err(FarkleError::InvalidFace(face)),
        None => Ok(()),
    }
}

/// Something that happened at the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Fact {
    /// The log was opened.
    HelloFarkle {
        /// When the log was opened.
        at: DateTime<Utc>,
    },
    /// A new game began.
    GameStarted {
        /// How many players take turns in this game.
        player_count: PlayerCount,
    },
    /// Dice were rolled.
    RollGenerated {
        /// The faces that came up.
        dice_values: Vec<u32>,
    },
    /// A single die was selected or put back.
    DiePicked {
        /// Position of the die; not validated.
        die_index: i32,
        /// True if picked from the roll, false if returned from the meld.
        from_roll: bool,
    },
    /// A roll attempt and the meld kept from it.
    LuckTried(LuckTried),
    /// The game finished.
    GameEnded {
        /// 1-based winning player, if one was declared.
        #[serde(default)]
        winner: Option<usize>,
        /// The winner's final score, if recorded.
        #[serde(default)]
        final_score: Option<u32>,
    },
}

/// The variant of a [`Fact`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FactKind {
    /// [`Fact::HelloFarkle`].
    HelloFarkle,
    /// [`Fact::GameStarted`].
    GameStarted,
    /// [`Fact::RollGenerated`].
    RollGenerated,
    /// [`Fact::DiePicked`].
    DiePicked,
    /// [`Fact::LuckTried`].
    LuckTried,
    /// [`Fact::GameEnded`].
    GameEnded,
}

impl std::fmt::Display for FactKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::HelloFarkle => write!(f, "hello farkle"),
            Self::GameStarted => write!(f, "game started"),
            Self::RollGenerated => write!(f, "roll generated"),
            Self::DiePicked => write!(f, "die picked"),
            Self::LuckTried => write!(f, "luck tried"),
            Self::GameEnded => write!(f, "game ended"),
        }
    }
}

impl Fact {
    /// A log-opened marker stamped with `at`.
    pub fn hello_farkle(at: DateTime<Utc>) -> Self {
        Self::HelloFarkle { at }
    }

    /// Start a game, rejecting player counts below one.
    pub fn game_started(player_count: i64) -> FarkleResult<Self> {
        Ok(Self::GameStarted {
            player_count: PlayerCount::new(player_count)?,
        })
    }

    /// Record a roll.
    pub fn roll_generated(dice_values: impl Into<Vec<u32>>) -> Self {
        Self::RollGenerated {
            dice_values: dice_values.into(),
        }
    }

    /// Record a die selection.
    pub fn die_picked(die_index: i32, from_roll: bool) -> Self {
        Self::DiePicked {
            die_index,
            from_roll,
        }
    }

    /// Record a roll attempt.
    pub fn luck_tried(
        dice_rolled: impl Into<Vec<u32>>,
        meld_kept: impl Into<Vec<u32>>,
        turn_ended: bool,
    ) -> Self {
        Self::LuckTried(LuckTried {
            dice_rolled: dice_rolled.into(),
            meld_kept: meld_kept.into(),
            turn_ended,
        })
    }

    /// End the current game.
    pub fn game_ended(winner: Option<usize>, final_score: Option<u32>) -> Self {
        Self::GameEnded {
            winner,
            final_score,
        }
    }

    /// Which variant this is.
    pub fn kind(&self) -> FactKind {
        match self {
            Self::HelloFarkle { .. } => FactKind::HelloFarkle,
            Self::GameStarted { .. } => FactKind::GameStarted,
            Self::RollGenerated { .. } => FactKind::RollGenerated,
            Self::DiePicked { .. } => FactKind::DiePicked,
            Self::LuckTried(_) => FactKind::LuckTried,
            Self::GameEnded { .. } => FactKind::GameEnded,
        }
    }

    /// The payload of a [`Fact::LuckTried`], if this is one.
    pub fn as_luck_tried(&self) -> Option<&LuckTried> {
        match self {
            Self::LuckTried(luck) => Some(luck),
            _ => None,
        }
    }

    /// True for a [`Fact::LuckTried`] that ended its turn.
    pub fn ends_turn(&self) -> bool {
        self.as_luck_tried().is_some_and(|l| l.turn_ended)
    }

    /// Shape checks for facts that carry dice.
    ///
    /// The projections never call this; it is for whoever produces facts.
    pub fn validate(&self) -> FarkleResult<()> {
        match self {
            Self::RollGenerated { dice_values } => validate_dice(dice_values),
            Self::LuckTried(luck) => luck.validate(),
            Self::HelloFarkle { .. }
            | Self::GameStarted { .. }
            | Self::DiePicked { .. }
            | Self::GameEnded { .. } => Ok(()),
        }
    }
}
