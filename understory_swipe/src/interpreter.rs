// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Swipe interpreter: classify raw pointer samples into drag, commit, and cancel events.
//!
//! ## Usage
//!
//! 1) Bind pointer input for the front card and convert each pointer event into a [`PointerSample`].
//! 2) Call [`SwipeInterpreter::handle`] with the card index and the sample.
//! 3) Apply the returned [`GestureEvent`]s in order: move the card on `Drag`, dismiss it on `Commit`,
//!    snap it back on `Cancel`.
//!
//! ## Minimal example
//!
//! ```
//! use understory_swipe::interpreter::{GestureEvent, SwipeInterpreter};
//! use understory_swipe::types::{PointerSample, SwipeConfig, SwipeDirection};
//!
//! let mut s = SwipeInterpreter::new(SwipeConfig::default());
//! // Taps never start a drag.
//! assert!(s.handle(0, PointerSample::moving(1.0)).is_empty());
//! let ev = s.handle(0, PointerSample::moving(-40.0));
//! assert!(matches!(ev[0], GestureEvent::Start { index: 0, direction: SwipeDirection::Left }));
//! let _ = s.handle(0, PointerSample::moving(-90.0));
//! let ev = s.handle(0, PointerSample::released(-90.0));
//! assert!(matches!(ev[0], GestureEvent::Commit { direction: SwipeDirection::Left, .. }));
//! assert!(s.is_idle());
//! ```

use alloc::vec;
use alloc::vec::Vec;

use crate::types::{
    Decision, DragPhase, DragSample, Heading, PointerSample, SwipeConfig, SwipeDirection,
};

/// State of the interpreter.
///
/// Commit and cancel are transient: a release yields the corresponding event
/// and the interpreter is [`Idle`](Self::Idle) again when `handle` returns.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub enum GestureState {
    /// No gesture in progress.
    #[default]
    Idle,
    /// A card is being dragged.
    Dragging {
        /// Card index owning the gesture.
        index: usize,
        /// Displacement of the latest sample.
        delta_x: f64,
        /// Direction of the latest observed movement.
        heading: Heading,
    },
}

/// An interpreted gesture event.
///
/// Returned by [`SwipeInterpreter::handle`] in the order they happen.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum GestureEvent {
    /// A press left the tap filter and became a drag.
    Start {
        /// Card index owning the gesture.
        index: usize,
        /// Side of the first movement.
        direction: SwipeDirection,
    },
    /// The dragged card moved.
    Drag(DragSample),
    /// The release dismisses the card towards `direction`.
    Commit {
        /// The release sample.
        sample: DragSample,
        /// Side the card leaves by.
        direction: SwipeDirection,
    },
    /// The release snaps the card back.
    Cancel(DragSample),
}

impl GestureEvent {
    /// Card index the event concerns.
    #[must_use]
    pub fn index(&self) -> usize {
        match self {
            Self::Start { index, .. } => *index,
            Self::Drag(s) | Self::Cancel(s) | Self::Commit { sample: s, .. } => s.index,
        }
    }

    /// True for the events that end a gesture.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Commit { .. } | Self::Cancel(_))
    }
}

/// A swipe gesture state machine for a single pointer.
///
/// Tracks at most one dragged card. Samples must be fed in arrival order:
/// headings are derived from the step between consecutive samples, and a
/// zero step keeps the previous heading.
///
/// Samples for any other card while a drag is active are ignored, as are
/// presses that never leave the tap filter.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SwipeInterpreter {
    config: SwipeConfig,
    state: GestureState,
}

impl SwipeInterpreter {
    /// Create an idle interpreter.
    pub fn new(config: SwipeConfig) -> Self {
        Self {
            config,
            state: GestureState::Idle,
        }
    }

    /// Thresholds in use.
    pub fn config(&self) -> &SwipeConfig {
        &self.config
    }

    /// Replace the thresholds. An active drag keeps going with the new values.
    pub fn set_config(&mut self, config: SwipeConfig) {
        self.config = config;
    }

    /// Current state.
    pub fn state(&self) -> GestureState {
        self.state
    }

    /// True if no drag is in progress.
    pub fn is_idle(&self) -> bool {
        matches!(self.state, GestureState::Idle)
    }

    /// Index of the dragged card, if any.
    pub fn active_index(&self) -> Option<usize> {
        match self.state {
            GestureState::Idle => None,
            GestureState::Dragging { index, .. } => Some(index),
        }
    }

    /// The in‑flight drag as a [`DragPhase::Moving`] sample, if any.
    pub fn active_sample(&self) -> Option<DragSample> {
        match self.state {
            GestureState::Idle => None,
            GestureState::Dragging {
                index,
                delta_x,
                heading,
            } => Some(DragSample {
                index,
                delta_x,
                heading,
                phase: DragPhase::Moving,
            }),
        }
    }

    /// Drop any in‑flight drag without emitting events.
    ///
    /// Returns the discarded drag, if there was one.
    pub fn cancel(&mut self) -> Option<DragSample> {
        let dropped = self.active_sample();
        if let Some(s) = dropped {
            tracing::trace!(index = s.index, "discarding in-flight drag");
        }
        self.state = GestureState::Idle;
        dropped
    }

    /// Feed one pointer sample for card `index` and return the resulting events.
    ///
    /// Samples with a non-finite displacement are dropped without changing state.
    pub fn handle(&mut self, index: usize, sample: PointerSample) -> Vec<GestureEvent> {
        if !sample.movement_x.is_finite() {
            tracing::trace!(index, "ignoring non-finite sample");
            return Vec::new();
        }
        match self.state {
            GestureState::Idle => self.handle_idle(index, sample),
            GestureState::Dragging {
                index: active,
                delta_x,
                heading,
            } => {
                if index != active {
                    tracing::trace!(index, active, "ignoring sample for non-active card");
                    return Vec::new();
                }
                let step = sample.movement_x - delta_x;
                let heading = match Heading::from_step(step) {
                    Heading::Still => heading,
                    moved => moved,
                };
                if sample.pressed {
                    self.state = GestureState::Dragging {
                        index,
                        delta_x: sample.movement_x,
                        heading,
                    };
                    vec![GestureEvent::Drag(DragSample {
                        index,
                        delta_x: sample.movement_x,
                        heading,
                        phase: DragPhase::Moving,
                    })]
                } else {
                    self.state = GestureState::Idle;
                    let release = DragSample {
                        index,
                        delta_x: sample.movement_x,
                        heading,
                        phase: DragPhase::Released,
                    };
                    match release.decide(self.config.threshold) {
                        Decision::Commit(direction) => {
                            tracing::trace!(index, ?direction, "release commits");
                            vec![GestureEvent::Commit {
                                sample: release,
                                direction,
                            }]
                        }
                        Decision::Cancel => {
                            tracing::trace!(index, delta_x = release.delta_x, "release cancels");
                            vec![GestureEvent::Cancel(release)]
                        }
                    }
                }
            }
        }
    }

    fn handle_idle(&mut self, index: usize, sample: PointerSample) -> Vec<GestureEvent> {
        let distance = sample.movement_x.abs();
        if !sample.pressed || distance == 0.0 || distance < self.config.tap_slop {
            tracing::trace!(index, movement_x = sample.movement_x, "filtered tap sample");
            return Vec::new();
        }
        let heading = Heading::from_step(sample.movement_x);
        self.state = GestureState::Dragging {
            index,
            delta_x: sample.movement_x,
            heading,
        };
        vec![
            GestureEvent::Start {
                index,
                direction: SwipeDirection::from_delta(sample.movement_x),
            },
            GestureEvent::Drag(DragSample {
                index,
                delta_x: sample.movement_x,
                heading,
                phase: DragPhase::Moving,
            }),
        ]
    }
}
