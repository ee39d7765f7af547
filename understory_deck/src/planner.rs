// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Motion planning: the target transform of every card.
//!
//! ## Overview
//!
//! [`plan`] is a pure function of the deck state, the configuration, and an
//! optional drag sample. It is the single source of truth for layout; the
//! caller animates towards its output and never needs to remember per-card
//! targets between calls.
//!
//! ## Rules
//!
//! - Dismissed cards are parked offscreen on the side they left by, rotated
//!   away from the stack, and hidden.
//! - Stacked cards are offset by their depth in the ungone order: `y` grows
//!   by `shift_y` and `z` by `translate_z` per level.
//! - Cards more than `max_visible_stack` positions past the current index are
//!   hidden but keep their place in the stack.
//! - A moving drag overrides the dragged card: `x` follows the pointer and the
//!   card tilts one degree per ten units of travel.
//! - A released drag either parks the card (commit) or puts it back at rest
//!   (cancel), per [`release_decision`](understory_swipe::types::release_decision).

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::Vec2;
use understory_swipe::types::{Decision, DragPhase, DragSample, SwipeDirection};

use crate::config::DeckConfig;
use crate::state::DeckState;
use crate::types::{CardFlags, CardTransform, Layout};

/// Compute the target transform of every card.
///
/// `drag` is the sample of the card under the pointer, if any. Samples for
/// out-of-range indices are ignored.
///
/// ```
/// use understory_deck::{DeckConfig, planner::plan, state::DeckState};
///
/// let state = DeckState::new(vec!["A", "B", "C"], 0);
/// let layout = plan(&state, &DeckConfig::default(), None);
/// assert_eq!(layout.cards[1].y(), 13.0);
/// assert_eq!(layout.cards[2].depth, -60.0);
/// ```
pub fn plan<T>(state: &DeckState<T>, config: &DeckConfig, drag: Option<&DragSample>) -> Layout {
    let drag = drag.filter(|d| d.index < state.len());
    let current = state.current_index();
    let visible_limit = current.saturating_add(config.max_visible_stack);

    let mut cards = alloc::vec::Vec::with_capacity(state.len());
    let mut depth = 0_usize;
    for i in 0..state.len() {
        let dragged = drag.filter(|d| d.index == i);
        let gone = state.gone().side(i);

        let leaving = dragged.and_then(|d| match (d.phase, d.decide(config.threshold)) {
            (DragPhase::Released, Decision::Commit(side)) => Some(side),
            _ => None,
        });

        let mut t = match (leaving, gone, dragged) {
            (Some(side), _, _) => parked(config, side),
            (None, Some(side), None) => parked(config, side),
            _ => stacked(config, depth),
        };

        if leaving.is_none() && gone.is_none() {
            depth += 1;
            if i <= visible_limit {
                t.flags |= CardFlags::VISIBLE;
            }
        }

        if let Some(d) = dragged
            && d.phase == DragPhase::Moving
        {
            t.offset.x = d.delta_x;
            t.rotation = -(d.delta_x / 10.0).floor();
            t.flags |= CardFlags::VISIBLE | CardFlags::DRAGGING;
            t.flags.remove(CardFlags::DISMISSED);
        }

        if i == current {
            t.flags |= CardFlags::FRONT;
        }
        t.stack_order = stack_order(i, current);
        cards.push(t);
    }

    let label = drag
        .filter(|d| d.phase == DragPhase::Moving && d.past_threshold(config.threshold))
        .map(DragSample::direction);

    Layout { cards, label }
}

/// Target of a card parked offscreen after leaving towards `side`.
pub fn parked(config: &DeckConfig, side: SwipeDirection) -> CardTransform {
    CardTransform {
        offset: Vec2::new(side.sign() * config.park_distance(), 0.0),
        depth: 0.0,
        rotation: -side.sign() * config.dismiss_rotation,
        stack_order: 0,
        flags: CardFlags::DISMISSED,
    }
}

/// Target of a card resting at `depth` in the stack.
///
/// Visibility is decided by [`plan`]; the returned flags are empty.
pub fn stacked(config: &DeckConfig, depth: usize) -> CardTransform {
    let level = depth as f64;
    CardTransform {
        offset: Vec2::new(0.0, level * config.shift_y),
        depth: level * config.translate_z,
        rotation: 0.0,
        stack_order: 0,
        flags: CardFlags::empty(),
    }
}

// The front card paints at 0 and later cards recede by index.
fn stack_order(index: usize, current: usize) -> i32 {
    if index > current {
        i32::try_from(index).map_or(i32::MIN, |i| -i)
    } else {
        0
    }
}
