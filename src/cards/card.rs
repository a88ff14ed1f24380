//! Cards on the board.
//!
//! A `Card` pairs a stable `CardId` with a `CardValue` and two flags.
//! Exactly two cards in a deck share each value.
//!
//! ## Face States
//!
//! | flipped | matched | state                        |
//! |---------|---------|------------------------------|
//! | false   | false   | hidden                       |
//! | true    | false   | face up, awaiting resolution |
//! | true    | true    | matched (terminal)           |
//!
//! `matched` without `flipped` never occurs.

use serde::{Deserialize, Serialize};

/// Symbols available for card values, in enumeration order.
pub const SYMBOLS: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Largest pair count a deck can be generated for.
pub const MAX_PAIRS: usize = SYMBOLS.len();

/// Placeholder shown for a face-down card.
pub const HIDDEN_FACE: char = '?';

/// Unique identifier for a card within one game.
///
/// Ids are assigned `0..2N` before the deck is shuffled and stay fixed
/// until the next restart.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// The id as an index into an id-ordered table.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl From<u32> for CardId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// The symbol printed on a card.
///
/// Value `n` is the `n`th uppercase letter, so `CardValue(0)` is `A`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardValue(pub u8);

impl CardValue {
    /// The `index`th value, or `None` past the end of the alphabet.
    #[must_use]
    pub fn nth(index: usize) -> Option<Self> {
        if index < MAX_PAIRS {
            Some(Self(index as u8))
        } else {
            None
        }
    }

    /// The letter for this value.
    #[must_use]
    pub fn symbol(self) -> char {
        SYMBOLS
            .get(self.0 as usize)
            .map_or(HIDDEN_FACE, |&b| char::from(b))
    }
}

impl std::fmt::Display for CardValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A card on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Stable identity for this game.
    pub id: CardId,

    /// Value to match.
    pub value: CardValue,

    /// Is the card face up?
    pub flipped: bool,

    /// Has the card been paired? Implies `flipped`.
    pub matched: bool,
}

impl Card {
    /// Create a face-down, unmatched card.
    #[must_use]
    pub const fn new(id: CardId, value: CardValue) -> Self {
        Self {
            id,
            value,
            flipped: false,
            matched: false,
        }
    }

    /// Face down and unmatched.
    #[must_use]
    pub fn is_hidden(&self) -> bool {
        !self.flipped && !self.matched
    }

    /// Showing its value (flipped or matched).
    ///
    /// Presentation layers should disable interaction on these cards.
    #[must_use]
    pub fn is_face_up(&self) -> bool {
        self.flipped || self.matched
    }

    /// What a player sees: the symbol when face up, `?` otherwise.
    #[must_use]
    pub fn face(&self) -> char {
        if self.is_face_up() {
            self.value.symbol()
        } else {
            HIDDEN_FACE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_id() {
        let id = CardId::new(7);
        assert_eq!(id.raw(), 7);
        assert_eq!(id.index(), 7);
        assert_eq!(CardId::from(7), id);
        assert_eq!(format!("{}", id), "Card(7)");
    }

    #[test]
    fn test_value_symbols() {
        assert_eq!(CardValue(0).symbol(), 'A');
        assert_eq!(CardValue(2).symbol(), 'C');
        assert_eq!(CardValue(25).symbol(), 'Z');
        assert_eq!(format!("{}", CardValue(1)), "B");
    }

    #[test]
    fn test_value_nth_bounds() {
        assert_eq!(CardValue::nth(0), Some(CardValue(0)));
        assert_eq!(CardValue::nth(MAX_PAIRS - 1), Some(CardValue(25)));
        assert_eq!(CardValue::nth(MAX_PAIRS), None);
    }

    #[test]
    fn test_new_card_is_hidden() {
        let card = Card::new(CardId(0), CardValue(0));

        assert!(card.is_hidden());
        assert!(!card.is_face_up());
        assert_eq!(card.face(), HIDDEN_FACE);
    }

    #[test]
    fn test_face_up_shows_symbol() {
        let mut card = Card::new(CardId(3), CardValue(1));
        card.flipped = true;
        assert_eq!(card.face(), 'B');

        card.matched = true;
        assert!(card.is_face_up());
        assert!(!card.is_hidden());
        assert_eq!(card.face(), 'B');
    }

    #[test]
    fn test_card_serialization() {
        let card = Card::new(CardId(5), CardValue(2));
        let json = serde_json::to_string(&card).unwrap();
        let deserialized: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(card, deserialized);
    }
}
