//! Error types.
//!
//! - `ConfigError`: a `GameConfig` the controller refuses to build from.
//! - `InvalidMove`: why a flip was ignored. Never fatal; it travels inside
//!   `FlipOutcome::Rejected` and the event log rather than as an `Err`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cards::CardId;

/// Rejected game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A game needs at least one pair.
    #[error("pair count must be at least 1")]
    NoPairs,

    /// More pairs than there are distinct card symbols.
    #[error("pair count {requested} exceeds the {max} available symbols")]
    TooManyPairs { requested: usize, max: usize },

    /// Layout hint must have at least one column.
    #[error("column count must be at least 1")]
    NoColumns,
}

/// Why a flip request was ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
pub enum InvalidMove {
    /// No card with this id is on the board.
    #[error("{0} is not on the board")]
    UnknownCard(CardId),

    /// The card is already face up and waiting to be resolved.
    #[error("{0} is already flipped")]
    AlreadyFlipped(CardId),

    /// The card belongs to a completed pair.
    #[error("{0} is already matched")]
    AlreadyMatched(CardId),
}

impl InvalidMove {
    /// The card the rejected flip referred to.
    #[must_use]
    pub fn card(self) -> CardId {
        match self {
            InvalidMove::UnknownCard(id)
            | InvalidMove::AlreadyFlipped(id)
            | InvalidMove::AlreadyMatched(id) => id,
        }
    }
}
