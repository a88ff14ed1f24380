//! # memory-match
//!
//! A memory-matching card game engine.
//!
//! `N` pairs of lettered cards are shuffled into a grid. The player turns
//! over two cards per move; matching pairs stay face up, mismatched pairs
//! flip back after a delay. The game is won when every pair is matched.
//!
//! ## Design Principles
//!
//! 1. **Pull, don't push**: The controller never calls out. Presentation
//!    layers re-read `cards()` and `moves()` after every call, and drain
//!    `GameEvent`s for notifications.
//!
//! 2. **Deterministic**: All randomness comes from an injected, seedable
//!    `GameRng`. Time is a logical clock advanced by the host.
//!
//! 3. **Invalid input is not an error**: Bad flips are reported as
//!    `FlipOutcome::Rejected` and leave the game untouched.
//!
//! ## Modules
//!
//! - `core`: RNG, configuration, error types
//! - `cards`: Card ids/values, deck generation and shuffling
//! - `game`: The controller, events, flip-back timer, snapshots

pub mod cards;
pub mod core;
pub mod game;

// Re-export commonly used types
pub use crate::core::{ConfigError, GameConfig, GameRng, GameRngState, InvalidMove};

pub use crate::cards::{deal, generate_deck, shuffle_deck, Card, CardId, CardValue, MAX_PAIRS};

pub use crate::game::{
    FlipBack, FlipOutcome, GameController, GameEvent, GameSnapshot, EVENT_LOG_CAPACITY,
};
