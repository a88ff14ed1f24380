//! Game events and flip outcomes.
//!
//! The controller never pushes updates. Instead every mutation leaves a
//! trail of `GameEvent`s that a presentation layer (or a test) drains after
//! each call, and `flip_card` returns a `FlipOutcome` describing what that
//! single flip did.

use serde::{Deserialize, Serialize};

use crate::cards::{CardId, CardValue};
use crate::core::InvalidMove;

/// Something that happened during a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A flip request was ignored; state is unchanged.
    InvalidMove(InvalidMove),

    /// A hidden card was turned face up.
    CardFlipped { card: CardId },

    /// Two face-up cards share a value and are now matched.
    Matched {
        first: CardId,
        second: CardId,
        value: CardValue,
    },

    /// Two face-up cards differ; they flip back at `flip_back_at_ms`.
    Mismatched {
        first: CardId,
        second: CardId,
        flip_back_at_ms: u64,
    },

    /// A mismatched pair turned face down again.
    FlippedBack { first: CardId, second: CardId },

    /// Every pair is matched.
    Won { moves: u32 },

    /// A fresh deck was dealt.
    Restarted { generation: u64 },
}

impl GameEvent {
    /// Is this a diagnostic for a rejected flip?
    #[must_use]
    pub fn is_invalid_move(&self) -> bool {
        matches!(self, GameEvent::InvalidMove(_))
    }
}

/// Result of a single `flip_card` call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlipOutcome {
    /// Nothing changed.
    Rejected(InvalidMove),

    /// First card of a pair is up; waiting for the second.
    FirstCard(CardId),

    /// The pair matched and the game goes on.
    Matched { first: CardId, second: CardId },

    /// The pair differs and is scheduled to flip back.
    Mismatched { first: CardId, second: CardId },

    /// The pair matched and completed the board.
    Won { moves: u32 },
}

impl FlipOutcome {
    /// Was the flip ignored?
    #[must_use]
    pub fn is_rejected(&self) -> bool {
        matches!(self, FlipOutcome::Rejected(_))
    }

    /// Did this flip complete a move (the second card of a pair)?
    #[must_use]
    pub fn completes_move(&self) -> bool {
        matches!(
            self,
            FlipOutcome::Matched { .. } | FlipOutcome::Mismatched { .. } | FlipOutcome::Won { .. }
        )
    }

    /// Did this flip produce a match?
    #[must_use]
    pub fn is_match(&self) -> bool {
        matches!(self, FlipOutcome::Matched { .. } | FlipOutcome::Won { .. })
    }
}
