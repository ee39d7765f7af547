// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_swipe --heading-base-level=0

//! Understory Swipe: a deterministic, `no_std` interpreter for horizontal swipe gestures.
//!
//! ## Overview
//!
//! This crate turns raw pointer samples for a draggable card into drag, commit, and cancel decisions.
//! It does not capture pointer input and it does not animate anything.
//! Instead, feed it [`PointerSample`](crate::types::PointerSample) values in arrival order, and it emits
//! [`GestureEvent`](crate::interpreter::GestureEvent)s you can apply to your layout.
//!
//! ## Tap filtering
//!
//! A press only becomes a drag once its displacement leaves the tap filter
//! ([`SwipeConfig::tap_slop`](crate::types::SwipeConfig::tap_slop)). Presses and releases that never
//! leave it produce no events, so taps on a card keep working as clicks.
//!
//! ## Release rule
//!
//! A release commits when the displacement reaches the threshold and the most recent movement
//! does not point back towards the origin. See [`release_decision`](crate::types::release_decision).
//! The same rule is exposed as a free function so layout code can preview the outcome of an
//! in‑flight drag.
//!
//! ## Ordering
//!
//! One gesture is tracked at a time. Samples for other cards are ignored until the active drag ends.
//! Headings depend on the step between consecutive samples, so samples must not be reordered.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod interpreter;
pub mod types;
