// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host-supplied time and a trailing-edge debounce timer.
//!
//! The deck never reads a clock. Hosts pass a [`Timestamp`] with each resize
//! notification and poll the timer from their frame or event loop.

use core::fmt;
use core::time::Duration;

/// A point in time as monotonic milliseconds from an arbitrary host epoch.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Timestamp(pub u64);

impl Timestamp {
    /// Creates a timestamp from a millisecond count.
    #[inline]
    #[must_use]
    pub const fn from_millis(millis: u64) -> Self {
        Self(millis)
    }

    /// Returns the millisecond count.
    #[inline]
    #[must_use]
    pub const fn millis(self) -> u64 {
        self.0
    }

    /// Adds a duration, saturating at the end of time.
    #[inline]
    #[must_use]
    pub fn saturating_add(self, duration: Duration) -> Self {
        let millis = u64::try_from(duration.as_millis()).unwrap_or(u64::MAX);
        Self(self.0.saturating_add(millis))
    }

    /// Returns the duration since an earlier time, or zero if `earlier` is after `self`.
    #[inline]
    #[must_use]
    pub const fn saturating_duration_since(self, earlier: Self) -> Duration {
        Duration::from_millis(self.0.saturating_sub(earlier.0))
    }
}

impl fmt::Debug for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Timestamp({}ms)", self.0)
    }
}

/// A cancellable trailing-edge debounce timer.
///
/// Each [`schedule`](Self::schedule) pushes the deadline to `now + window`,
/// replacing any pending one. [`poll`](Self::poll) fires once when the
/// deadline has passed and disarms the timer.
///
/// ```
/// use core::time::Duration;
/// use understory_deck::time::{Debounce, Timestamp};
///
/// let mut d = Debounce::new(Duration::from_millis(1000));
/// d.schedule(Timestamp(0));
/// d.schedule(Timestamp(600));
/// assert!(!d.poll(Timestamp(1000)));
/// assert!(d.poll(Timestamp(1600)));
/// assert!(!d.poll(Timestamp(5000)));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Debounce {
    window: Duration,
    deadline: Option<Timestamp>,
}

impl Debounce {
    /// Create a disarmed timer with the given window.
    pub const fn new(window: Duration) -> Self {
        Self {
            window,
            deadline: None,
        }
    }

    /// Debounce window.
    pub const fn window(&self) -> Duration {
        self.window
    }

    /// Pending deadline, if armed.
    pub const fn deadline(&self) -> Option<Timestamp> {
        self.deadline
    }

    /// True while a deadline is pending.
    pub const fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Arm or re-arm the timer relative to `now`.
    pub fn schedule(&mut self, now: Timestamp) {
        self.deadline = Some(now.saturating_add(self.window));
    }

    /// Disarm the timer. Returns whether a deadline was pending.
    pub fn cancel(&mut self) -> bool {
        self.deadline.take().is_some()
    }

    /// Fire if the deadline has passed. Fires at most once per schedule.
    pub fn poll(&mut self, now: Timestamp) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}
