//! Game configuration.
//!
//! A `GameConfig` fixes everything about a game that survives a restart:
//! how many pairs are dealt, how long a mismatched pair stays face up, how
//! the deck is seeded, and how wide the presentation grid is.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use crate::cards::MAX_PAIRS;

/// Pairs dealt when no count is given.
pub const DEFAULT_PAIR_COUNT: usize = 6;

/// How long a mismatched pair stays visible before flipping back.
pub const DEFAULT_FLIP_BACK_DELAY_MS: u64 = 1000;

/// Default grid width for presentation layers.
pub const DEFAULT_COLUMNS: usize = 3;

/// Configuration for a single game session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Number of distinct values; the deck holds twice as many cards.
    pub pair_count: usize,

    /// Delay before a mismatched pair flips back, in milliseconds.
    pub flip_back_delay_ms: u64,

    /// Shuffle seed. `None` draws one from OS entropy.
    pub seed: Option<u64>,

    /// Grid width hint (cards per row).
    pub columns: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            pair_count: DEFAULT_PAIR_COUNT,
            flip_back_delay_ms: DEFAULT_FLIP_BACK_DELAY_MS,
            seed: None,
            columns: DEFAULT_COLUMNS,
        }
    }
}

impl GameConfig {
    /// Create a configuration with the given pair count and defaults elsewhere.
    #[must_use]
    pub fn new(pair_count: usize) -> Self {
        Self {
            pair_count,
            ..Self::default()
        }
    }

    /// Fix the shuffle seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the flip-back delay.
    #[must_use]
    pub fn with_flip_back_delay(mut self, delay: Duration) -> Self {
        self.flip_back_delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Set the grid width hint.
    #[must_use]
    pub fn with_columns(mut self, columns: usize) -> Self {
        self.columns = columns;
        self
    }

    /// Flip-back delay as a `Duration`.
    #[must_use]
    pub fn flip_back_delay(&self) -> Duration {
        Duration::from_millis(self.flip_back_delay_ms)
    }

    /// Number of cards on the board.
    ///
    /// Saturates for unvalidated, oversized pair counts.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.pair_count.saturating_mul(2)
    }

    /// Check the configuration.
    ///
    /// Pair counts outside `1..=MAX_PAIRS` are rejected rather than clamped.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.pair_count == 0 {
            return Err(ConfigError::NoPairs);
        }
        if self.pair_count > MAX_PAIRS {
            return Err(ConfigError::TooManyPairs {
                requested: self.pair_count,
                max: MAX_PAIRS,
            });
        }
        if self.columns == 0 {
            return Err(ConfigError::NoColumns);
        }
        Ok(())
    }
}
