// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the deck: card flags, layout targets, and operation results.

use alloc::vec::Vec;
use kurbo::{Affine, Vec2};
use understory_swipe::types::SwipeDirection;

bitflags::bitflags! {
    /// Per-card flags computed by the planner.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct CardFlags: u8 {
        /// Card should be drawn.
        const VISIBLE   = 0b0000_0001;
        /// Card is the current (front) card.
        const FRONT     = 0b0000_0010;
        /// Card is dismissed and parked offscreen.
        const DISMISSED = 0b0000_0100;
        /// Card is following an active drag.
        const DRAGGING  = 0b0000_1000;
    }
}

/// Target placement for one card.
///
/// This is a target, not an animated value: an external animation engine
/// interpolates from whatever is on screen towards it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardTransform {
    /// Horizontal and vertical offset from the resting place.
    pub offset: Vec2,
    /// Depth offset, applied by the renderer as a perspective translation.
    pub depth: f64,
    /// Rotation in degrees, positive clockwise on a y-down canvas.
    pub rotation: f64,
    /// Paint order among siblings; higher is drawn on top.
    pub stack_order: i32,
    /// Visibility and role flags.
    pub flags: CardFlags,
}

impl CardTransform {
    /// Resting place with no offsets.
    pub const IDENTITY: Self = Self {
        offset: Vec2::ZERO,
        depth: 0.0,
        rotation: 0.0,
        stack_order: 0,
        flags: CardFlags::VISIBLE,
    };

    /// Horizontal offset.
    #[inline]
    pub fn x(&self) -> f64 {
        self.offset.x
    }

    /// Vertical offset.
    #[inline]
    pub fn y(&self) -> f64 {
        self.offset.y
    }

    /// True if the card should be drawn.
    #[inline]
    pub fn is_visible(&self) -> bool {
        self.flags.contains(CardFlags::VISIBLE)
    }

    /// Planar part of the transform: translate by `offset`, then rotate.
    ///
    /// The depth is left to the renderer's perspective projection.
    pub fn to_affine(&self) -> Affine {
        Affine::translate(self.offset) * Affine::rotate(self.rotation.to_radians())
    }
}

impl Default for CardTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Targets for every card in the deck, plus the swipe hint.
///
/// Produced by [`plan`](crate::planner::plan); owned by the caller's render layer.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Layout {
    /// One target per card, in deck order.
    pub cards: Vec<CardTransform>,
    /// Side the active drag would dismiss towards, once past the threshold.
    pub label: Option<SwipeDirection>,
}

impl Layout {
    /// Target for `index`.
    pub fn get(&self, index: usize) -> Option<&CardTransform> {
        self.cards.get(index)
    }

    /// Number of targets.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// True for an empty deck.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Indices of visible cards, in deck order.
    pub fn visible(&self) -> impl Iterator<Item = usize> + '_ {
        self.cards
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_visible())
            .map(|(i, _)| i)
    }
}

/// Height report for the deck container.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DeckHeight {
    /// Tallest measured card content.
    pub content: f64,
    /// Content plus the room taken by the stacked cards below the front one.
    pub container: f64,
}

/// A card removed or restored by an operation.
///
/// Returned by [`Deck::swipe_left`](crate::Deck::swipe_left),
/// [`Deck::swipe_right`](crate::Deck::swipe_right) and
/// [`Deck::swipe_back`](crate::Deck::swipe_back). Operations that do nothing
/// return `None` instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Swiped<'a, T> {
    /// The card's item.
    pub item: &'a T,
    /// The card's index.
    pub index: usize,
}

/// Lifecycle phase of a deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DeckPhase {
    /// Freshly (re)initialized; nothing has changed yet.
    Fresh,
    /// The current index points at a card.
    Active,
    /// The current index is past the last card.
    Exhausted,
}
