// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Adaptive height: track measured card content and report the tallest.
//!
//! ## Overview
//!
//! The host measures each card's rendered content and reports it with
//! [`HeightMeasurer::record`]. Once every card of the deck has a measurement,
//! the measurer reports the maximum whenever it changes.
//!
//! Resizes are coalesced: [`HeightMeasurer::notify_resize`] arms a trailing
//! debounce, measurements that arrive while it is pending are stored without
//! reporting, and [`HeightMeasurer::poll`] recomputes once the window has
//! passed.
//!
//! ```
//! use core::time::Duration;
//! use understory_deck::height::HeightMeasurer;
//! use understory_deck::time::Timestamp;
//!
//! let mut m = HeightMeasurer::new(true, 3, Duration::from_millis(1000));
//! assert_eq!(m.record(0, 100.0), None);
//! assert_eq!(m.record(1, 150.0), None);
//! assert_eq!(m.record(2, 120.0), Some(150.0));
//!
//! m.notify_resize(Timestamp(0));
//! assert_eq!(m.record(1, 90.0), None);
//! assert_eq!(m.poll(Timestamp(999)), None);
//! assert_eq!(m.poll(Timestamp(1000)), Some(120.0));
//! ```

use alloc::vec;
use alloc::vec::Vec;
use core::time::Duration;

use crate::config::DeckConfig;
use crate::time::{Debounce, Timestamp};

/// Per-card content heights and the last reported maximum.
#[derive(Clone, Debug, PartialEq)]
pub struct HeightMeasurer {
    enabled: bool,
    heights: Vec<Option<f64>>,
    measured: usize,
    last_emitted: Option<f64>,
    debounce: Debounce,
}

impl HeightMeasurer {
    /// Create a measurer for a deck of `len` cards.
    ///
    /// A disabled measurer keeps no bookkeeping and never reports.
    pub fn new(enabled: bool, len: usize, resize_debounce: Duration) -> Self {
        Self {
            enabled,
            heights: if enabled { vec![None; len] } else { Vec::new() },
            measured: 0,
            last_emitted: None,
            debounce: Debounce::new(resize_debounce),
        }
    }

    /// True if adaptive height is on.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Forget all measurements for a new deck of `len` cards.
    pub fn reset(&mut self, len: usize) {
        self.heights.clear();
        if self.enabled {
            self.heights.resize(len, None);
        }
        self.measured = 0;
        self.last_emitted = None;
        self.debounce.cancel();
    }

    /// Store the content height of card `index`.
    ///
    /// Returns the new maximum if this completes the measurement set and the
    /// maximum differs from the last report. Non-finite or negative heights
    /// count as zero; out-of-range indices are ignored.
    pub fn record(&mut self, index: usize, height: f64) -> Option<f64> {
        let slot = self.heights.get_mut(index)?;
        if slot.is_none() {
            self.measured += 1;
        }
        *slot = Some(sanitize(height));
        if self.debounce.is_pending() {
            tracing::trace!(index, "measurement deferred until resize settles");
            return None;
        }
        self.recompute()
    }

    /// Drop the measurement of card `index`, e.g. after its content changed.
    ///
    /// Reporting resumes once the card is measured again. Returns whether a
    /// measurement was dropped.
    pub fn forget(&mut self, index: usize) -> bool {
        match self.heights.get_mut(index) {
            Some(slot) if slot.is_some() => {
                *slot = None;
                self.measured -= 1;
                true
            }
            _ => false,
        }
    }

    /// Note a host resize at `now`, arming or re-arming the debounce.
    pub fn notify_resize(&mut self, now: Timestamp) {
        if self.enabled {
            self.debounce.schedule(now);
        }
    }

    /// Recompute if the resize debounce has elapsed by `now`.
    ///
    /// Returns the new maximum if it changed.
    pub fn poll(&mut self, now: Timestamp) -> Option<f64> {
        if !self.debounce.poll(now) {
            return None;
        }
        self.recompute()
    }

    /// True while a resize recomputation is pending.
    pub fn is_resize_pending(&self) -> bool {
        self.debounce.is_pending()
    }

    /// True once every card has a measurement.
    pub fn is_complete(&self) -> bool {
        self.enabled && !self.heights.is_empty() && self.measured == self.heights.len()
    }

    /// Number of cards with a measurement.
    pub fn measured_count(&self) -> usize {
        self.measured
    }

    /// Last reported maximum, or zero before the first report.
    pub fn content_height(&self) -> f64 {
        self.last_emitted.unwrap_or(0.0)
    }

    fn recompute(&mut self) -> Option<f64> {
        if !self.is_complete() {
            return None;
        }
        let max = self.heights.iter().flatten().fold(0.0_f64, |a, &b| a.max(b));
        if self.last_emitted == Some(max) {
            return None;
        }
        tracing::debug!(height = max, "deck content height changed");
        self.last_emitted = Some(max);
        Some(max)
    }
}

/// Height of the deck container for a given content height.
///
/// A single card needs just its content. Larger decks add one `shift_y` per
/// stacked card, up to `max_visible_stack` of them. Never negative.
pub fn container_height(content: f64, len: usize, config: &DeckConfig) -> f64 {
    let stacked = if len <= 1 {
        0.0
    } else {
        len.min(config.max_visible_stack) as f64 * config.shift_y
    };
    sanitize(content + stacked)
}

fn sanitize(height: f64) -> f64 {
    if height.is_finite() && height > 0.0 {
        height
    } else {
        0.0
    }
}
