//! Deck generation and shuffling.
//!
//! A fresh deck for `N` pairs is the value list `A..` followed by itself,
//! with ids numbered over that unshuffled order:
//!
//! ```
//! use memory_match::cards::{generate_deck, CardId};
//!
//! let deck = generate_deck(3).unwrap();
//! let faces: String = deck.iter().map(|c| c.value.symbol()).collect();
//!
//! assert_eq!(faces, "ABCABC");
//! assert_eq!(deck[4].id, CardId(4));
//! ```

use super::card::{Card, CardId, CardValue, MAX_PAIRS};
use crate::core::{ConfigError, GameRng};

/// Build the unshuffled deck for `pair_count` pairs.
///
/// Fails for zero pairs or more pairs than there are symbols.
pub fn generate_deck(pair_count: usize) -> Result<Vec<Card>, ConfigError> {
    if pair_count == 0 {
        return Err(ConfigError::NoPairs);
    }
    if pair_count > MAX_PAIRS {
        return Err(ConfigError::TooManyPairs {
            requested: pair_count,
            max: MAX_PAIRS,
        });
    }

    let values: Vec<CardValue> = (0..pair_count).filter_map(CardValue::nth).collect();

    Ok(values
        .iter()
        .chain(values.iter())
        .enumerate()
        .map(|(index, &value)| Card::new(CardId(index as u32), value))
        .collect())
}

/// Shuffle a deck in place with the injected RNG.
pub fn shuffle_deck(cards: &mut [Card], rng: &mut GameRng) {
    rng.shuffle(cards);
}

/// Generate and shuffle in one step.
pub fn deal(pair_count: usize, rng: &mut GameRng) -> Result<Vec<Card>, ConfigError> {
    let mut deck = generate_deck(pair_count)?;
    shuffle_deck(&mut deck, rng);
    Ok(deck)
}
