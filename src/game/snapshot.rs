//! Owned, serializable view of a game for presentation layers.

use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// Everything a renderer needs to draw one frame.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Board in display order.
    pub cards: Vec<Card>,
    pub moves: u32,
    pub matches: usize,
    pub pair_count: usize,
    /// All pairs matched; show the win banner.
    pub won: bool,
    /// Grid width hint.
    pub columns: usize,
    pub generation: u64,
}

impl GameSnapshot {
    /// Board split into rows of `columns` cards; the last row may be short.
    pub fn rows(&self) -> impl Iterator<Item = &[Card]> {
        self.cards.chunks(self.columns.max(1))
    }

    /// The board as text, one line per row, `?` for hidden cards.
    #[must_use]
    pub fn render_faces(&self) -> String {
        self.rows()
            .map(|row| row.iter().map(Card::face).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
