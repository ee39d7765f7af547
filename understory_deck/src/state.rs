// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Deck bookkeeping: items, dismissed cards, and the current index.

use alloc::vec::Vec;

use understory_swipe::types::SwipeDirection;

use crate::types::DeckPhase;

/// The set of dismissed card indices.
///
/// Membership is a per-slot table so lookups are O(1); insertion order is kept
/// separately so the most recent dismissal can be undone first. Each member
/// remembers the side it left by.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GoneSet {
    sides: Vec<Option<SwipeDirection>>,
    order: Vec<usize>,
}

impl GoneSet {
    fn with_len(len: usize) -> Self {
        Self {
            sides: alloc::vec![None; len],
            order: Vec::new(),
        }
    }

    /// Number of dismissed cards.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// True if no card is dismissed.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// True if `index` is dismissed.
    pub fn contains(&self, index: usize) -> bool {
        self.side(index).is_some()
    }

    /// Side the card at `index` left by, if dismissed.
    pub fn side(&self, index: usize) -> Option<SwipeDirection> {
        self.sides.get(index).copied().flatten()
    }

    /// Most recently dismissed index.
    pub fn last(&self) -> Option<usize> {
        self.order.last().copied()
    }

    /// Dismissed indices in dismissal order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.order.iter().copied()
    }

    // Re-inserting a member keeps its original position in the order.
    fn insert(&mut self, index: usize, side: SwipeDirection) -> bool {
        match self.sides.get_mut(index) {
            Some(slot) if slot.is_none() => {
                *slot = Some(side);
                self.order.push(index);
                true
            }
            _ => false,
        }
    }

    fn remove(&mut self, index: usize) -> bool {
        match self.sides.get_mut(index) {
            Some(slot) if slot.is_some() => {
                *slot = None;
                self.order.retain(|&i| i != index);
                true
            }
            _ => false,
        }
    }
}

/// Owned deck state: the item list, dismissed set, current index, and the
/// "swiped at least once" flag.
///
/// Mutators keep the dismissed set in range of the item list. Pairing a
/// mutation with a layout recompute is the job of [`Deck`](crate::Deck).
///
/// ```
/// use understory_deck::state::DeckState;
///
/// let state = DeckState::new(vec!['A', 'B', 'C', 'D'], 2);
/// assert_eq!(state.current_index(), 2);
/// assert_eq!(state.gone().iter().collect::<Vec<_>>(), [0, 1]);
/// assert_eq!(state.ungone_order(), [2, 3]);
/// assert!(state.is_card_swiped());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct DeckState<T> {
    items: Vec<T>,
    gone: GoneSet,
    current_index: usize,
    swiped: bool,
    init_index: usize,
    fresh: bool,
}

impl<T> DeckState<T> {
    /// Create a deck whose cards before `init_index` start dismissed.
    pub fn new(items: Vec<T>, init_index: usize) -> Self {
        let mut state = Self {
            items: Vec::new(),
            gone: GoneSet::default(),
            current_index: 0,
            swiped: false,
            init_index,
            fresh: true,
        };
        state.initialize(items, init_index);
        state
    }

    /// Reset to `items`, dismissing every card before `init_index`.
    ///
    /// Indices past the end are clamped to the deck length.
    pub fn initialize(&mut self, items: Vec<T>, init_index: usize) {
        let init = init_index.min(items.len());
        let mut gone = GoneSet::with_len(items.len());
        for i in 0..init {
            gone.insert(i, SwipeDirection::Left);
        }
        self.items = items;
        self.swiped = !gone.is_empty();
        self.gone = gone;
        self.current_index = init;
        self.init_index = init_index;
        self.fresh = true;
    }

    /// Replace the item list if it differs by value from the current one.
    ///
    /// Performs the same reset as [`initialize`](Self::initialize) with the
    /// configured initial index. Returns whether a reset happened.
    pub fn replace(&mut self, items: Vec<T>) -> bool
    where
        T: PartialEq,
    {
        if items == self.items {
            return false;
        }
        self.initialize(items, self.init_index);
        true
    }

    /// Replace the item at `index` with the result of `mutator`.
    ///
    /// Out-of-range indices and `None` results leave the deck untouched.
    /// Returns whether the item changed.
    pub fn update_item(&mut self, index: usize, mutator: impl FnOnce(&T) -> Option<T>) -> bool {
        let Some(slot) = self.items.get_mut(index) else {
            return false;
        };
        match mutator(slot) {
            Some(next) => {
                *slot = next;
                true
            }
            None => false,
        }
    }

    /// Dismiss `index` towards `side`. Idempotent; returns whether it was newly dismissed.
    pub fn mark_gone(&mut self, index: usize, side: SwipeDirection) -> bool {
        let inserted = self.gone.insert(index, side);
        self.fresh &= !inserted;
        inserted
    }

    /// Restore `index` to the stack. Idempotent; returns whether it was dismissed.
    pub fn unmark_gone(&mut self, index: usize) -> bool {
        let removed = self.gone.remove(index);
        self.fresh &= !removed;
        removed
    }

    /// True if `index` is dismissed.
    pub fn is_gone(&self, index: usize) -> bool {
        self.gone.contains(index)
    }

    /// The dismissed set.
    pub fn gone(&self) -> &GoneSet {
        &self.gone
    }

    /// Indices still on the stack, ascending.
    pub fn ungone_order(&self) -> Vec<usize> {
        (0..self.items.len())
            .filter(|&i| !self.gone.contains(i))
            .collect()
    }

    /// Stack depth of `index`: its position in [`ungone_order`](Self::ungone_order).
    ///
    /// `None` for dismissed or out-of-range indices.
    pub fn depth_of(&self, index: usize) -> Option<usize> {
        if index >= self.items.len() || self.gone.contains(index) {
            return None;
        }
        Some((0..index).filter(|&i| !self.gone.contains(i)).count())
    }

    /// Index of the front card.
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Point the current index at `index`, clamped to the deck length.
    pub fn set_current_index(&mut self, index: usize) {
        let index = index.min(self.items.len());
        if index != self.current_index {
            self.fresh = false;
        }
        self.current_index = index;
    }

    /// Initial index this deck resets to.
    pub fn init_index(&self) -> usize {
        self.init_index
    }

    /// True if any card was dismissed since the last reset (and not all undone).
    pub fn is_card_swiped(&self) -> bool {
        self.swiped
    }

    /// Set the swiped flag.
    pub fn set_swiped(&mut self, swiped: bool) {
        self.swiped = swiped;
    }

    /// Lifecycle phase.
    pub fn phase(&self) -> DeckPhase {
        if self.current_index >= self.items.len() {
            DeckPhase::Exhausted
        } else if self.fresh {
            DeckPhase::Fresh
        } else {
            DeckPhase::Active
        }
    }

    /// All items in deck order.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Item at `index`.
    pub fn item(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Number of cards.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True if the deck holds no cards.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn abcde() -> DeckState<char> {
        DeckState::new(vec!['A', 'B', 'C', 'D', 'E'], 0)
    }

    #[test]
    fn initialize_without_init_index() {
        let s = abcde();
        assert_eq!(s.current_index(), 0);
        assert!(s.gone().is_empty());
        assert!(!s.is_card_swiped());
        assert_eq!(s.phase(), DeckPhase::Fresh);
        assert_eq!(s.ungone_order(), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn init_index_past_end_clamps() {
        let s = DeckState::new(vec![1, 2, 3], 10);
        assert_eq!(s.current_index(), 3);
        assert_eq!(s.gone().len(), 3);
        assert_eq!(s.phase(), DeckPhase::Exhausted);
        // The configured value survives for later resets.
        assert_eq!(s.init_index(), 10);
    }

    #[test]
    fn mark_and_unmark_are_idempotent() {
        let mut s = abcde();
        assert!(s.mark_gone(2, SwipeDirection::Right));
        assert!(!s.mark_gone(2, SwipeDirection::Left));
        assert_eq!(s.gone().side(2), Some(SwipeDirection::Right));
        assert!(s.unmark_gone(2));
        assert!(!s.unmark_gone(2));
        assert!(!s.mark_gone(99, SwipeDirection::Left));
        assert!(s.gone().is_empty());
    }

    #[test]
    fn dismissal_order_is_insertion_order() {
        let mut s = abcde();
        s.mark_gone(3, SwipeDirection::Left);
        s.mark_gone(0, SwipeDirection::Right);
        s.mark_gone(3, SwipeDirection::Right);
        s.mark_gone(1, SwipeDirection::Left);
        assert_eq!(s.gone().iter().collect::<Vec<_>>(), vec![3, 0, 1]);
        assert_eq!(s.gone().last(), Some(1));
        s.unmark_gone(1);
        assert_eq!(s.gone().last(), Some(0));
    }

    #[test]
    fn depth_counts_ungone_predecessors() {
        let mut s = abcde();
        s.mark_gone(1, SwipeDirection::Left);
        assert_eq!(s.depth_of(0), Some(0));
        assert_eq!(s.depth_of(1), None);
        assert_eq!(s.depth_of(2), Some(1));
        assert_eq!(s.depth_of(4), Some(3));
        assert_eq!(s.depth_of(5), None);
        assert_eq!(s.ungone_order(), vec![0, 2, 3, 4]);
    }

    #[test]
    fn update_item_respects_range_and_none() {
        let mut s = abcde();
        assert!(s.update_item(1, |_| Some('b')));
        assert_eq!(s.item(1), Some(&'b'));
        assert!(!s.update_item(1, |_| None));
        assert_eq!(s.item(1), Some(&'b'));
        assert!(!s.update_item(5, |_| Some('z')));
        s.mark_gone(0, SwipeDirection::Left);
        s.set_current_index(1);
        assert!(s.update_item(0, |c| Some(c.to_ascii_lowercase())));
        assert_eq!(s.current_index(), 1);
        assert!(s.is_gone(0));
    }

    #[test]
    fn replace_uses_value_equality() {
        let mut s = DeckState::new(vec![1, 2, 3], 1);
        s.mark_gone(1, SwipeDirection::Right);
        s.set_current_index(2);
        assert!(!s.replace(vec![1, 2, 3]));
        assert_eq!(s.current_index(), 2);
        assert!(s.replace(vec![1, 2, 3, 4]));
        assert_eq!(s.current_index(), 1);
        assert_eq!(s.gone().iter().collect::<Vec<_>>(), vec![0]);
        assert_eq!(s.phase(), DeckPhase::Fresh);
    }

    #[test]
    fn phase_transitions() {
        let mut s = DeckState::new(vec!['x', 'y'], 0);
        assert_eq!(s.phase(), DeckPhase::Fresh);
        s.mark_gone(0, SwipeDirection::Left);
        s.set_current_index(1);
        assert_eq!(s.phase(), DeckPhase::Active);
        s.mark_gone(1, SwipeDirection::Left);
        s.set_current_index(2);
        assert_eq!(s.phase(), DeckPhase::Exhausted);
        s.set_current_index(10);
        assert_eq!(s.current_index(), 2);
    }

    #[test]
    fn empty_deck_is_exhausted() {
        let s: DeckState<u8> = DeckState::new(Vec::new(), 0);
        assert!(s.is_empty());
        assert_eq!(s.phase(), DeckPhase::Exhausted);
        assert!(s.ungone_order().is_empty());
    }
}
