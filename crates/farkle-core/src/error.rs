//! Error types for the Farkle engine.

/// Errors raised at the boundaries of the engine.
///
/// Scoring and projections never fail; these variants describe contract
/// violations caught while building facts or appending them to a log.
#[derive(Debug, thiserror::Error)]
pub enum FarkleError {
    /// A player count below one was supplied.
    #[error("invalid player count: {0} (a game needs at least one player)")]
    InvalidPlayerCount(i64),

    /// A die face outside 1..=6.
    #[error("invalid die face: {0}")]
    InvalidFace(u32),

    /// More than six dice in a roll or meld.
    #[error("too many dice: {0} (at most 6)")]
    TooManyDice(usize),

    /// The kept meld contains dice that were not rolled.
    #[error("meld {meld:?} is not part of roll {roll:?}")]
    MeldNotInRoll {
        /// The dice the player claimed to keep.
        meld: Vec<u32>,
        /// The dice that were actually rolled.
        roll: Vec<u32>,
    },

    /// A game-scoped fact was appended while no game is running.
    #[error("no game in progress")]
    NoActiveGame,

    /// A game was started while another one is still running.
    #[error("a game is already in progress")]
    GameAlreadyActive,

    /// The fact log could not be encoded or decoded.
    #[error("fact log serialization: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience result type for engine operations.
pub type FarkleResult<T> = Result<T, FarkleError>;
