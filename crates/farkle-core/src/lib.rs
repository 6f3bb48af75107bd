//! Fact-log engine for the dice game Farkle.
//!
//! A game is an append-only log of [`Fact`]s. Nothing else is stored:
//! whose turn it is, what is at stake, and every player's banked total are
//! recomputed from the log by the pure functions in [`projection`].
//! Provides the scorer, a seeded roll generator, the log container, and an
//! autoplay [`Table`] that drives bots through a full game.

pub mod config;
pub mod dice;
pub mod error;
pub mod fact;
pub mod log;
pub mod projection;
pub mod scoring;
pub mod table;

pub use config::FarkleConfig;
pub use dice::{DiceRoller, generate_roll};
pub use error::{FarkleError, FarkleResult};
pub use fact::{Fact, FactKind, LuckTried, PlayerCount};
pub use log::FactLog;
pub use projection::GameSnapshot;
pub use scoring::{DiceScore, Meld, MeldKind, score};
pub use table::{GameOutcome, Table, TurnOutcome};
