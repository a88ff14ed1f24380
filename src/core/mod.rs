//! Core engine types: RNG, configuration, errors.
//!
//! These carry no game rules of their own. The controller in `game`
//! composes them.

pub mod config;
pub mod error;
pub mod rng;

pub use config::{GameConfig, DEFAULT_COLUMNS, DEFAULT_FLIP_BACK_DELAY_MS, DEFAULT_PAIR_COUNT};
pub use error::{ConfigError, InvalidMove};
pub use rng::{GameRng, GameRngState};
