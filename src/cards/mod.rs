//! Card system: ids, values, and deck construction.
//!
//! ## Key Types
//!
//! - `CardId`: Stable per-game identifier
//! - `CardValue`: Symbol to match (`A`..`Z`)
//! - `Card`: Board entry with flipped/matched flags
//!
//! Decks are built by `generate_deck` and shuffled by `shuffle_deck`.

pub mod card;
pub mod deck;

pub use card::{Card, CardId, CardValue, HIDDEN_FACE, MAX_PAIRS, SYMBOLS};
pub use deck::{deal, generate_deck, shuffle_deck};
