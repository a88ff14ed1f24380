//! Deferred flip-back scheduling.
//!
//! A mismatched pair is not turned back immediately. The controller
//! schedules a `FlipBack` naming exactly those two cards, stamped with the
//! game generation it belongs to, and fires it once the logical clock
//! passes `due_ms`.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::cards::CardId;

/// A scheduled flip-back for one mismatched pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlipBack {
    /// The two cards to turn face down, in flip order.
    pub cards: [CardId; 2],

    /// Logical time (ms) at which the flip-back fires.
    pub due_ms: u64,

    /// Game generation that scheduled it.
    pub generation: u64,
}

/// Flip-backs ordered by due time.
///
/// Entries with equal due times fire in scheduling order.
#[derive(Clone, Debug, Default)]
pub struct FlipBackQueue {
    entries: VecDeque<FlipBack>,
}

impl FlipBackQueue {
    /// Create an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule a flip-back.
    pub fn schedule(&mut self, flip_back: FlipBack) {
        let at = self
            .entries
            .partition_point(|entry| entry.due_ms <= flip_back.due_ms);
        self.entries.insert(at, flip_back);
    }

    /// Remove and return the earliest flip-back due at or before `now_ms`.
    pub fn pop_due(&mut self, now_ms: u64) -> Option<FlipBack> {
        if self.entries.front()?.due_ms <= now_ms {
            self.entries.pop_front()
        } else {
            None
        }
    }

    /// Remove and return everything, earliest first.
    pub fn take_all(&mut self) -> Vec<FlipBack> {
        self.entries.drain(..).collect()
    }

    /// Drop every scheduled flip-back.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Due time of the next flip-back.
    #[must_use]
    pub fn next_due(&self) -> Option<u64> {
        self.entries.front().map(|entry| entry.due_ms)
    }

    /// Number of scheduled flip-backs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Is nothing scheduled?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flip_back(a: u32, b: u32, due_ms: u64) -> FlipBack {
        FlipBack {
            cards: [CardId(a), CardId(b)],
            due_ms,
            generation: 0,
        }
    }

    #[test]
    fn test_pop_due_respects_time() {
        let mut queue = FlipBackQueue::new();
        queue.schedule(flip_back(0, 1, 1000));

        assert_eq!(queue.pop_due(999), None);
        assert_eq!(queue.pop_due(1000), Some(flip_back(0, 1, 1000)));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_orders_by_due_time() {
        let mut queue = FlipBackQueue::new();
        queue.schedule(flip_back(4, 5, 3000));
        queue.schedule(flip_back(0, 1, 1000));
        queue.schedule(flip_back(2, 3, 2000));

        assert_eq!(queue.next_due(), Some(1000));
        let order: Vec<_> = queue.take_all().into_iter().map(|fb| fb.due_ms).collect();
        assert_eq!(order, vec![1000, 2000, 3000]);
    }

    #[test]
    fn test_equal_due_times_keep_schedule_order() {
        let mut queue = FlipBackQueue::new();
        queue.schedule(flip_back(0, 1, 1000));
        queue.schedule(flip_back(2, 3, 1000));

        assert_eq!(queue.pop_due(1000).map(|fb| fb.cards[0]), Some(CardId(0)));
        assert_eq!(queue.pop_due(1000).map(|fb| fb.cards[0]), Some(CardId(2)));
    }

    #[test]
    fn test_clear() {
        let mut queue = FlipBackQueue::new();
        queue.schedule(flip_back(0, 1, 10));
        queue.schedule(flip_back(2, 3, 20));
        assert_eq!(queue.len(), 2);

        queue.clear();
        assert!(queue.is_empty());
        assert_eq!(queue.next_due(), None);
        assert_eq!(queue.pop_due(u64::MAX), None);
    }
}
