//! The memory game controller.
//!
//! Owns the board, the pending pair, and the move/match counters. All
//! mutation goes through `flip_card`, `advance`, `settle` and `restart`,
//! on the caller's thread.
//!
//! ## Timing
//!
//! The controller keeps a logical clock in milliseconds. Hosts call
//! `advance` with the time elapsed since the last call (typically once per
//! frame); any flip-back that has come due fires inside that call.

use std::collections::VecDeque;
use std::time::Duration;

use smallvec::SmallVec;
use tracing::{debug, info, warn};

use super::event::{FlipOutcome, GameEvent};
use super::snapshot::GameSnapshot;
use super::timer::{FlipBack, FlipBackQueue};
use crate::cards::{generate_deck, shuffle_deck, Card, CardId};
use crate::core::{ConfigError, GameConfig, GameRng, InvalidMove};

/// Most events kept between drains; older ones are dropped first.
pub const EVENT_LOG_CAPACITY: usize = 64;

/// Memory game state machine.
#[derive(Clone, Debug)]
pub struct GameController {
    config: GameConfig,
    rng: GameRng,
    /// Unshuffled deck, reshuffled into `cards` on every deal.
    template: Vec<Card>,
    /// Board in display order.
    cards: Vec<Card>,
    /// Board index of each card, indexed by `CardId`.
    positions: Vec<usize>,
    /// Face-up cards awaiting comparison, in flip order.
    pending: SmallVec<[CardId; 2]>,
    moves: u32,
    matches: usize,
    generation: u64,
    now_ms: u64,
    flip_backs: FlipBackQueue,
    /// Undrained events, oldest first, at most `EVENT_LOG_CAPACITY`.
    events: VecDeque<GameEvent>,
}

impl GameController {
    /// Create a controller and deal the first game.
    ///
    /// Seeds from `config.seed`, or from OS entropy when it is `None`.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        let rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        Self::with_rng(config, rng)
    }

    /// Create a controller with `pair_count` pairs and default settings.
    pub fn with_pairs(pair_count: usize) -> Result<Self, ConfigError> {
        Self::new(GameConfig::new(pair_count))
    }

    /// Create a controller that shuffles with the given RNG.
    ///
    /// `config.seed` is ignored.
    pub fn with_rng(config: GameConfig, rng: GameRng) -> Result<Self, ConfigError> {
        config.validate()?;
        let template = generate_deck(config.pair_count)?;

        let mut controller = Self {
            config,
            rng,
            cards: Vec::with_capacity(template.len()),
            positions: vec![0; template.len()],
            template,
            pending: SmallVec::new(),
            moves: 0,
            matches: 0,
            generation: 0,
            now_ms: 0,
            flip_backs: FlipBackQueue::new(),
            events: VecDeque::with_capacity(EVENT_LOG_CAPACITY),
        };
        controller.deal();
        Ok(controller)
    }

    // === Operations ===

    /// Flip a card face up.
    ///
    /// Unknown, face-up or matched cards are ignored: the outcome is
    /// `Rejected` and nothing changes. The second card of a pair counts a
    /// move and is compared against the first immediately.
    pub fn flip_card(&mut self, id: CardId) -> FlipOutcome {
        if let Err(invalid) = self.check_flippable(id) {
            warn!(card = %id, reason = %invalid, "invalid move");
            self.record(GameEvent::InvalidMove(invalid));
            return FlipOutcome::Rejected(invalid);
        }

        if let Some(card) = self.card_mut(id) {
            card.flipped = true;
        }
        self.pending.push(id);
        self.record(GameEvent::CardFlipped { card: id });
        debug!(card = %id, pending = self.pending.len(), "card flipped");

        if self.pending.len() < 2 {
            return FlipOutcome::FirstCard(id);
        }

        self.moves += 1;
        self.resolve_pending()
    }

    /// Move the logical clock forward and fire due flip-backs.
    ///
    /// Returns the number of pairs turned face down.
    pub fn advance(&mut self, elapsed: Duration) -> usize {
        let elapsed_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);
        self.now_ms = self.now_ms.saturating_add(elapsed_ms);

        let mut reverted = 0;
        while let Some(flip_back) = self.flip_backs.pop_due(self.now_ms) {
            if self.apply_flip_back(flip_back) {
                reverted += 1;
            }
        }
        reverted
    }

    /// Fire every scheduled flip-back now, regardless of due time.
    ///
    /// The clock does not move. Returns the number of pairs turned face down.
    pub fn settle(&mut self) -> usize {
        self.flip_backs
            .take_all()
            .into_iter()
            .filter(|&flip_back| self.apply_flip_back(flip_back))
            .count()
    }

    /// Deal a fresh game with the same pair count.
    ///
    /// Scheduled flip-backs and undrained events from the previous game are
    /// dropped; neither can touch the new board.
    pub fn restart(&mut self) {
        self.generation += 1;
        self.flip_backs.clear();
        self.events.clear();
        self.deal();
        self.record(GameEvent::Restarted {
            generation: self.generation,
        });
        info!(generation = self.generation, pairs = self.config.pair_count, "game restarted");
    }

    /// Take every event recorded since the last drain (or restart).
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.events.drain(..).collect()
    }

    // === Accessors ===

    /// The board in display order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Look up a card by id.
    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.position(id).map(|index| &self.cards[index])
    }

    /// Completed pair comparisons.
    #[must_use]
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Pairs matched so far.
    #[must_use]
    pub fn matches(&self) -> usize {
        self.matches
    }

    /// Pairs on the board.
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.config.pair_count
    }

    /// Is every pair matched?
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.matches == self.config.pair_count
    }

    /// Face-up cards waiting for a partner (0 or 1 between calls).
    #[must_use]
    pub fn pending(&self) -> &[CardId] {
        &self.pending
    }

    /// Restart counter; 0 for the first game.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Logical clock in milliseconds.
    #[must_use]
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Is any mismatched pair still waiting to flip back?
    #[must_use]
    pub fn has_pending_flip_backs(&self) -> bool {
        !self.flip_backs.is_empty()
    }

    /// Number of mismatched pairs waiting to flip back.
    #[must_use]
    pub fn scheduled_flip_backs(&self) -> usize {
        self.flip_backs.len()
    }

    /// Time until the next flip-back fires, if any is scheduled.
    ///
    /// Hosts without a frame loop can sleep this long before calling
    /// `advance`. Returns `Duration::ZERO` when one is already due.
    #[must_use]
    pub fn next_flip_back_in(&self) -> Option<Duration> {
        self.flip_backs
            .next_due()
            .map(|due_ms| Duration::from_millis(due_ms.saturating_sub(self.now_ms)))
    }

    /// The configuration this controller was built from.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Events recorded since the last drain, oldest first.
    #[must_use]
    pub fn events(&self) -> &VecDeque<GameEvent> {
        &self.events
    }

    /// Owned view of the current state.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            cards: self.cards.clone(),
            moves: self.moves,
            matches: self.matches,
            pair_count: self.config.pair_count,
            won: self.is_won(),
            columns: self.config.columns,
            generation: self.generation,
        }
    }

    // === Internals ===

    fn record(&mut self, event: GameEvent) {
        if self.events.len() == EVENT_LOG_CAPACITY {
            self.events.pop_front();
        }
        self.events.push_back(event);
    }

    fn deal(&mut self) {
        self.cards.clone_from(&self.template);
        shuffle_deck(&mut self.cards, &mut self.rng);

        for (index, card) in self.cards.iter().enumerate() {
            self.positions[card.id.index()] = index;
        }

        self.pending.clear();
        self.moves = 0;
        self.matches = 0;
    }

    fn position(&self, id: CardId) -> Option<usize> {
        self.positions.get(id.index()).copied()
    }

    fn card_mut(&mut self, id: CardId) -> Option<&mut Card> {
        let index = self.position(id)?;
        self.cards.get_mut(index)
    }

    fn check_flippable(&self, id: CardId) -> Result<(), InvalidMove> {
        let card = self.card(id).ok_or(InvalidMove::UnknownCard(id))?;
        if card.matched {
            return Err(InvalidMove::AlreadyMatched(id));
        }
        if card.flipped {
            return Err(InvalidMove::AlreadyFlipped(id));
        }
        Ok(())
    }

    /// Compare the two pending cards and clear the pending list.
    fn resolve_pending(&mut self) -> FlipOutcome {
        let (first, second) = (self.pending[0], self.pending[1]);
        self.pending.clear();

        let first_value = self.card(first).map(|card| card.value);
        let second_value = self.card(second).map(|card| card.value);

        match (first_value, second_value) {
            (Some(value), Some(other)) if value == other => {
                for id in [first, second] {
                    if let Some(card) = self.card_mut(id) {
                        card.matched = true;
                    }
                }
                self.matches += 1;
                self.record(GameEvent::Matched { first, second, value });
                info!(%first, %second, %value, matches = self.matches, "match found");

                if self.is_won() {
                    self.record(GameEvent::Won { moves: self.moves });
                    info!(moves = self.moves, "game won");
                    return FlipOutcome::Won { moves: self.moves };
                }
                FlipOutcome::Matched { first, second }
            }
            _ => {
                let due_ms = self.now_ms.saturating_add(self.config.flip_back_delay_ms);
                self.flip_backs.schedule(FlipBack {
                    cards: [first, second],
                    due_ms,
                    generation: self.generation,
                });
                self.record(GameEvent::Mismatched {
                    first,
                    second,
                    flip_back_at_ms: due_ms,
                });
                debug!(%first, %second, due_ms, "no match, flip-back scheduled");
                FlipOutcome::Mismatched { first, second }
            }
        }
    }

    /// Turn a mismatched pair face down if it still belongs to this game.
    ///
    /// Cards that have since been matched or re-entered the pending list
    /// are left alone. Returns whether any card was turned.
    fn apply_flip_back(&mut self, flip_back: FlipBack) -> bool {
        if flip_back.generation != self.generation {
            debug!(
                generation = flip_back.generation,
                current = self.generation,
                "stale flip-back skipped"
            );
            return false;
        }

        let mut reverted = false;
        for id in flip_back.cards {
            let pending = self.pending.contains(&id);
            if let Some(card) = self.card_mut(id) {
                if card.flipped && !card.matched && !pending {
                    card.flipped = false;
                    reverted = true;
                }
            }
        }

        if reverted {
            let [first, second] = flip_back.cards;
            self.record(GameEvent::FlippedBack { first, second });
            debug!(%first, %second, "cards flipped back");
        }
        reverted
    }
}
