//! Memory game: controller, events, flip-back timing, snapshots.
//!
//! ## Flow
//!
//! 1. `GameController::new` deals a shuffled board.
//! 2. Each `flip_card` returns a `FlipOutcome`; the second card of a pair
//!    counts a move and is compared at once.
//! 3. Mismatched pairs stay face up until `advance` moves the clock past
//!    their flip-back time.
//! 4. `restart` deals again; older flip-backs are discarded.
//!
//! ```
//! use std::time::Duration;
//! use memory_match::{FlipOutcome, GameConfig, GameController};
//!
//! let mut game = GameController::new(GameConfig::new(2).with_seed(1)).unwrap();
//! let first = game.cards()[0];
//! let other = game.cards().iter().find(|c| c.value != first.value).unwrap().id;
//!
//! game.flip_card(first.id);
//! assert!(matches!(game.flip_card(other), FlipOutcome::Mismatched { .. }));
//! assert_eq!(game.moves(), 1);
//!
//! game.advance(Duration::from_secs(1));
//! assert!(game.cards().iter().all(|c| !c.flipped));
//! ```

pub mod controller;
pub mod event;
pub mod snapshot;
pub mod timer;

pub use controller::{GameController, EVENT_LOG_CAPACITY};
pub use event::{FlipOutcome, GameEvent};
pub use snapshot::GameSnapshot;
pub use timer::{FlipBack, FlipBackQueue};
