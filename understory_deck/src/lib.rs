// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_deck --heading-base-level=0

//! Understory Deck: a Kurbo-native, swipeable card deck.
//!
//! Understory Deck is the headless core of a "swipe left / swipe right" card stack.
//!
//! - Keeps the dismissed set, the current card, and a "swiped at least once" flag in sync.
//! - Turns pointer samples into drag, commit, and cancel decisions via [`understory_swipe`].
//! - Plans a target transform for every card from the state and the in‑flight drag.
//! - Optionally tracks card content heights and reports the deck height, with resizes debounced.
//!
//! ## Not an animation engine
//!
//! This crate never animates, draws, or captures input. The host renders each card with the
//! [`CardTransform`] returned by [`Deck::layout`] (or [`Deck::render`]) and lets its own animation
//! layer interpolate towards it. Because planning is a pure function of the state, the host may
//! recompute the layout at any time; [`Deck::revision`] tells it when something changed.
//!
//! ## Time
//!
//! There is no timer inside the crate. Resizes are reported with [`Deck::notify_resize`] and the
//! debounce is driven by [`Deck::tick`], both taking a caller-supplied [`Timestamp`].
//!
//! ## API overview
//!
//! - [`Deck`]: the controller; owns the item list and every piece of derived state.
//! - [`DeckHandler`]: callbacks for dismissals, drag start/end, and height changes.
//! - [`DeckConfig`]: construction-time options, checked by [`DeckConfig::validate`].
//! - [`Layout`] / [`CardTransform`] / [`CardFlags`]: planner output.
//! - [`DeckState`](state::DeckState) and [`plan`](planner::plan): the building blocks, usable on their own.
//!
//! Key operations:
//! - [`Deck::swipe_left`] / [`Deck::swipe_right`] → [`Swiped`]
//! - [`Deck::swipe_back`] restores the most recent dismissal.
//! - [`Deck::jump_to_card_index`] dismisses every card before an index and restores the rest.
//! - [`Deck::update_card`] and [`Deck::replace`] edit one card or the whole list.
//! - [`Deck::pointer`] feeds drag input; [`Deck::measure`] feeds content heights.
//!
//! ### Minimal usage
//!
//! ```
//! use understory_deck::{Deck, DeckConfig, PointerSample, SwipeDirection};
//!
//! let config = DeckConfig::default().with_viewport_width(400.0);
//! let mut deck = Deck::new(vec!["A", "B", "C"], config).unwrap();
//!
//! // Drag the front card left past the threshold and let go.
//! let _ = deck.pointer(0, PointerSample::moving(-20.0));
//! let _ = deck.pointer(0, PointerSample::moving(-90.0));
//! assert_eq!(deck.layout().label, Some(SwipeDirection::Left));
//! let _ = deck.pointer(0, PointerSample::released(-90.0));
//!
//! assert_eq!(deck.current_index(), 1);
//! let layout = deck.layout();
//! assert_eq!(layout.cards[0].x(), -600.0);
//! assert_eq!(layout.cards[1].y(), 0.0);
//! assert_eq!(layout.cards[2].y(), 13.0);
//! ```
//!
//! This crate is `no_std` and uses `alloc`. Enable either the `std` (default) or `libm` feature.

#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub mod config;
pub mod deck;
pub mod error;
pub mod height;
pub mod planner;
pub mod state;
pub mod time;
pub mod types;

pub use config::DeckConfig;
pub use deck::{Deck, DeckHandler};
pub use error::ConfigError;
pub use time::Timestamp;
pub use types::{CardFlags, CardTransform, DeckHeight, DeckPhase, Layout, Swiped};

pub use understory_swipe::interpreter::GestureEvent;
pub use understory_swipe::types::{DragPhase, DragSample, Heading, PointerSample, SwipeDirection};
