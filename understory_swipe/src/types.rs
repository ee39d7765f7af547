// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types for the interpreter: directions, samples, configuration, and the release rule.
//!
//! ## Overview
//!
//! These types describe the gesture protocol and its inputs/outputs.
//! They are consumed by the [`interpreter`](crate::interpreter) and by downstream deck widgets.

/// Side a card is swiped towards.
///
/// Derived from the sign of the accumulated horizontal movement: negative is
/// [`Left`](Self::Left), zero and positive are [`Right`](Self::Right).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum SwipeDirection {
    /// Towards negative x.
    Left,
    /// Towards positive x.
    Right,
}

impl SwipeDirection {
    /// Direction named by the sign of a horizontal displacement.
    #[inline]
    #[must_use]
    pub fn from_delta(delta_x: f64) -> Self {
        if delta_x < 0.0 { Self::Left } else { Self::Right }
    }

    /// `-1.0` for [`Left`](Self::Left), `1.0` for [`Right`](Self::Right).
    #[inline]
    #[must_use]
    pub const fn sign(self) -> f64 {
        match self {
            Self::Left => -1.0,
            Self::Right => 1.0,
        }
    }

    /// The other side.
    #[inline]
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Lowercase label, as shown by swipe hints.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

/// Direction of the most recent movement between two samples.
///
/// Unlike [`SwipeDirection`], this tracks where the pointer was *heading*
/// rather than where it is relative to the start. A drag can sit left of its
/// origin while heading right (a flick-back).
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum Heading {
    /// Last movement went towards negative x.
    Left,
    /// Last movement went towards positive x.
    Right,
    /// No horizontal movement has been observed.
    #[default]
    Still,
}

impl Heading {
    /// Heading named by the sign of a step; a zero step is [`Still`](Self::Still).
    #[inline]
    #[must_use]
    pub fn from_step(step_x: f64) -> Self {
        if step_x < 0.0 {
            Self::Left
        } else if step_x > 0.0 {
            Self::Right
        } else {
            Self::Still
        }
    }

    /// True unless the heading points away from `direction`.
    ///
    /// [`Still`](Self::Still) agrees with both sides.
    #[inline]
    #[must_use]
    pub fn agrees_with(self, direction: SwipeDirection) -> bool {
        !matches!(
            (self, direction),
            (Self::Left, SwipeDirection::Right) | (Self::Right, SwipeDirection::Left)
        )
    }
}

/// Phase of a drag sample.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum DragPhase {
    /// Pointer is held and moving.
    Moving,
    /// Pointer was released; this is the last sample of the gesture.
    Released,
}

/// A raw pointer sample for one card, as captured by the host.
///
/// `movement_x` is the horizontal displacement since the press started, not
/// the step since the previous sample.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct PointerSample {
    /// Horizontal displacement from the press origin.
    pub movement_x: f64,
    /// Whether the pointer is still held.
    pub pressed: bool,
}

impl PointerSample {
    /// A held pointer displaced by `movement_x`.
    #[must_use]
    pub const fn moving(movement_x: f64) -> Self {
        Self {
            movement_x,
            pressed: true,
        }
    }

    /// A release at displacement `movement_x`.
    #[must_use]
    pub const fn released(movement_x: f64) -> Self {
        Self {
            movement_x,
            pressed: false,
        }
    }
}

/// An interpreted drag sample for the active card.
///
/// Produced by [`SwipeInterpreter::handle`](crate::interpreter::SwipeInterpreter::handle)
/// and consumed by layout code that positions the dragged card.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DragSample {
    /// Card index under the pointer.
    pub index: usize,
    /// Horizontal displacement from the press origin.
    pub delta_x: f64,
    /// Direction of the most recent observed movement.
    pub heading: Heading,
    /// Whether the pointer is still held.
    pub phase: DragPhase,
}

impl DragSample {
    /// Side the card currently sits on, relative to its origin.
    #[inline]
    #[must_use]
    pub fn direction(&self) -> SwipeDirection {
        SwipeDirection::from_delta(self.delta_x)
    }

    /// True if the sample is past `threshold` in either direction.
    #[inline]
    #[must_use]
    pub fn past_threshold(&self, threshold: f64) -> bool {
        self.delta_x.abs() >= threshold
    }

    /// Outcome of this sample if it were a release.
    ///
    /// See [`release_decision`].
    #[inline]
    #[must_use]
    pub fn decide(&self, threshold: f64) -> Decision {
        release_decision(self.delta_x, self.heading, threshold)
    }
}

/// Outcome of a released drag.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Decision {
    /// Dismiss the card towards the given side.
    Commit(SwipeDirection),
    /// Snap the card back to its resting place.
    Cancel,
}

/// Decide whether a release at `delta_x` commits a dismissal.
///
/// A release commits when the displacement reaches `threshold` and the last
/// observed heading does not point back towards the origin. A quick flick
/// back at release time therefore cancels even when the card is still past
/// the threshold.
///
/// ```
/// use understory_swipe::types::{Decision, Heading, SwipeDirection, release_decision};
///
/// assert_eq!(release_decision(-80.0, Heading::Left, 70.0), Decision::Commit(SwipeDirection::Left));
/// assert_eq!(release_decision(-80.0, Heading::Right, 70.0), Decision::Cancel);
/// assert_eq!(release_decision(40.0, Heading::Right, 70.0), Decision::Cancel);
/// ```
#[must_use]
pub fn release_decision(delta_x: f64, heading: Heading, threshold: f64) -> Decision {
    let direction = SwipeDirection::from_delta(delta_x);
    if delta_x.abs() >= threshold && heading.agrees_with(direction) {
        Decision::Commit(direction)
    } else {
        Decision::Cancel
    }
}

/// Thresholds used by the [`SwipeInterpreter`](crate::interpreter::SwipeInterpreter).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SwipeConfig {
    /// Minimum displacement for a release to commit.
    pub threshold: f64,
    /// Displacement below which a press is still considered a tap.
    pub tap_slop: f64,
}

impl SwipeConfig {
    /// Default commit distance.
    pub const DEFAULT_THRESHOLD: f64 = 70.0;
    /// Default tap filter distance.
    pub const DEFAULT_TAP_SLOP: f64 = 3.0;
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            threshold: Self::DEFAULT_THRESHOLD,
            tap_slop: Self::DEFAULT_TAP_SLOP,
        }
    }
}
