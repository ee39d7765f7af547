// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The deck controller: public operations over state, gestures, and height.

use alloc::vec::Vec;

use understory_swipe::interpreter::{GestureEvent, SwipeInterpreter};
use understory_swipe::types::{DragSample, PointerSample, SwipeDirection};

use crate::config::DeckConfig;
use crate::error::ConfigError;
use crate::height::{HeightMeasurer, container_height};
use crate::planner::plan;
use crate::state::DeckState;
use crate::time::Timestamp;
use crate::types::{CardTransform, DeckHeight, DeckPhase, Layout, Swiped};

/// Callbacks fired by a [`Deck`] at its decision points.
///
/// Every method has an empty default, so implement only the ones you need.
/// `()` implements the trait with no callbacks at all.
pub trait DeckHandler<T> {
    /// A card was dismissed to the left.
    fn on_swipe_left(&mut self, _item: &T, _index: usize) {}

    /// A card was dismissed to the right.
    fn on_swipe_right(&mut self, _item: &T, _index: usize) {}

    /// A drag started moving towards `direction`.
    fn on_swipe_start(&mut self, _direction: SwipeDirection) {}

    /// A drag ended, committed or not, on the `direction` side.
    fn on_swipe_end(&mut self, _direction: SwipeDirection) {}

    /// The measured deck height changed.
    fn on_deck_height_change(&mut self, _height: DeckHeight) {}
}

impl<T> DeckHandler<T> for () {}

/// A swipeable card deck.
///
/// Owns the [`DeckState`], the gesture interpreter, and the height measurer,
/// and pairs every state mutation with the bookkeeping it implies. All input
/// is expected on one thread of control, in arrival order.
///
/// Invalid input never panics or errors: out-of-range indices are ignored and
/// reported as `None`/`false`.
///
/// ```
/// use understory_deck::{Deck, DeckConfig};
///
/// let mut deck = Deck::new(vec!['A', 'B', 'C', 'D', 'E'], DeckConfig::default()).unwrap();
/// let swiped = deck.swipe_left(None).unwrap();
/// assert_eq!((*swiped.item, swiped.index), ('A', 0));
/// assert_eq!(deck.current_index(), 1);
///
/// let back = deck.swipe_back().unwrap();
/// assert_eq!(back.index, 0);
/// assert_eq!(deck.current_index(), 0);
/// assert!(!deck.is_card_swiped());
/// ```
pub struct Deck<T, H = ()> {
    config: DeckConfig,
    state: DeckState<T>,
    swipe: SwipeInterpreter,
    height: HeightMeasurer,
    handler: H,
    revision: u64,
}

impl<T, H> core::fmt::Debug for Deck<T, H> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Deck")
            .field("len", &self.state.len())
            .field("current_index", &self.state.current_index())
            .field("gone", &self.state.gone().len())
            .field("dragging", &self.swipe.active_index())
            .field("revision", &self.revision)
            .finish_non_exhaustive()
    }
}

impl<T> Deck<T, ()> {
    /// Create a deck without callbacks.
    pub fn new(items: Vec<T>, config: DeckConfig) -> Result<Self, ConfigError> {
        Self::with_handler(items, config, ())
    }
}

impl<T, H: DeckHandler<T>> Deck<T, H> {
    /// Create a deck that reports to `handler`.
    pub fn with_handler(
        items: Vec<T>,
        config: DeckConfig,
        handler: H,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let height =
            HeightMeasurer::new(config.adaptive_height, items.len(), config.resize_debounce);
        let state = DeckState::new(items, config.init_index);
        Ok(Self {
            swipe: SwipeInterpreter::new(config.swipe()),
            config,
            state,
            height,
            handler,
            revision: 0,
        })
    }

    /// Options in use.
    pub fn config(&self) -> &DeckConfig {
        &self.config
    }

    /// Read-only view of the deck state.
    pub fn state(&self) -> &DeckState<T> {
        &self.state
    }

    /// The callback handler.
    pub fn handler(&self) -> &H {
        &self.handler
    }

    /// Mutable access to the callback handler.
    pub fn handler_mut(&mut self) -> &mut H {
        &mut self.handler
    }

    /// All items in deck order.
    pub fn items(&self) -> &[T] {
        self.state.items()
    }

    /// Number of cards.
    pub fn len(&self) -> usize {
        self.state.len()
    }

    /// True if the deck holds no cards.
    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    /// Index of the front card.
    pub fn current_index(&self) -> usize {
        self.state.current_index()
    }

    /// True if a card has been dismissed since the last reset.
    pub fn is_card_swiped(&self) -> bool {
        self.state.is_card_swiped()
    }

    /// Lifecycle phase.
    pub fn phase(&self) -> DeckPhase {
        self.state.phase()
    }

    /// Counter bumped by every change that affects the layout.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// The in‑flight drag, if any.
    pub fn active_drag(&self) -> Option<DragSample> {
        self.swipe.active_sample()
    }

    /// Target transforms for the current state and drag.
    pub fn layout(&self) -> Layout {
        plan(&self.state, &self.config, self.swipe.active_sample().as_ref())
    }

    /// Feed every card and its target to `render_item`, in deck order.
    ///
    /// The renderables are returned untouched; the deck never inspects them.
    pub fn render<R>(&self, mut render_item: impl FnMut(&T, usize, &CardTransform) -> R) -> Vec<R> {
        let layout = self.layout();
        self.state
            .items()
            .iter()
            .zip(&layout.cards)
            .enumerate()
            .map(|(i, (item, t))| render_item(item, i, t))
            .collect()
    }

    /// Dismiss card `index` (default: the current card) to the left.
    pub fn swipe_left(&mut self, index: Option<usize>) -> Option<Swiped<'_, T>> {
        self.swipe_towards(SwipeDirection::Left, index)
    }

    /// Dismiss card `index` (default: the current card) to the right.
    pub fn swipe_right(&mut self, index: Option<usize>) -> Option<Swiped<'_, T>> {
        self.swipe_towards(SwipeDirection::Right, index)
    }

    /// Dismiss card `index` (default: the current card) towards `side`.
    ///
    /// Behaves like a committed drag: the card is marked gone, the current
    /// index advances if it pointed at this card, and the directional
    /// callback fires. Returns `None` for an out-of-range index.
    pub fn swipe_towards(
        &mut self,
        side: SwipeDirection,
        index: Option<usize>,
    ) -> Option<Swiped<'_, T>> {
        let index = index.unwrap_or(self.state.current_index());
        if index >= self.state.len() {
            tracing::trace!(index, len = self.state.len(), "swipe ignored: index out of range");
            return None;
        }
        if self.swipe.active_index() == Some(index) {
            let _ = self.swipe.cancel();
        }
        self.commit(index, side);
        self.state.item(index).map(|item| Swiped { item, index })
    }

    /// Restore the most recently dismissed card.
    ///
    /// The current index steps back by one (never below zero). Returns `None`
    /// when nothing is dismissed.
    pub fn swipe_back(&mut self) -> Option<Swiped<'_, T>> {
        let Some(index) = self.state.gone().last() else {
            tracing::trace!("swipe back ignored: nothing dismissed");
            return None;
        };
        self.state.unmark_gone(index);
        let current = self.state.current_index().saturating_sub(1);
        self.state.set_current_index(current);
        if self.state.gone().is_empty() {
            self.state.set_swiped(false);
        }
        self.bump();
        tracing::debug!(index, current, "card restored");
        self.state.item(index).map(|item| Swiped { item, index })
    }

    /// Make `index` the front card: dismiss everything before it and restore
    /// everything from it on.
    ///
    /// Skipped cards park on the left. An active drag is discarded. Returns
    /// `false` for an out-of-range index.
    pub fn jump_to_card_index(&mut self, index: usize) -> bool {
        if index >= self.state.len() {
            tracing::trace!(index, len = self.state.len(), "jump ignored: index out of range");
            return false;
        }
        let _ = self.swipe.cancel();
        let mut dismissed = false;
        for i in 0..self.state.len() {
            if i < index {
                dismissed |= self.state.mark_gone(i, SwipeDirection::Left);
            } else {
                self.state.unmark_gone(i);
            }
        }
        self.state.set_current_index(index);
        if dismissed {
            self.state.set_swiped(true);
        }
        self.bump();
        tracing::debug!(index, "jumped to card");
        true
    }

    /// Replace the item at `index` with `mutator`'s result.
    ///
    /// `None` results and out-of-range indices change nothing. Dismissal
    /// state is untouched; with adaptive height on, the card's measurement is
    /// dropped so the next report waits for it to be re-measured.
    pub fn update_card(&mut self, index: usize, mutator: impl FnOnce(&T) -> Option<T>) -> bool {
        if !self.state.update_item(index, mutator) {
            return false;
        }
        if self.height.forget(index) {
            tracing::trace!(index, "card content changed; awaiting remeasure");
        }
        self.bump();
        true
    }

    /// Replace the whole deck if `items` differs by value from the current list.
    ///
    /// An in‑flight drag is discarded before any callback runs. Dismissal
    /// state, the current index, and height measurements are reset together,
    /// and with adaptive height on the reset height is reported if it differs
    /// from the last one. Returns whether the deck was replaced.
    pub fn replace(&mut self, items: Vec<T>) -> bool
    where
        T: PartialEq,
    {
        let before = self.deck_height();
        if !self.state.replace(items) {
            return false;
        }
        let _ = self.swipe.cancel();
        self.height.reset(self.state.len());
        self.bump();
        tracing::debug!(len = self.state.len(), "deck replaced");
        if self.height.is_enabled() {
            let after = self.deck_height();
            if after != before {
                self.handler.on_deck_height_change(after);
            }
        }
        true
    }

    /// Feed a pointer sample for card `index`.
    ///
    /// Samples for dismissed or out-of-range cards cannot start a drag.
    /// Returns the interpreted events, already applied to the deck.
    pub fn pointer(&mut self, index: usize, sample: PointerSample) -> Vec<GestureEvent> {
        if self.swipe.is_idle() && (index >= self.state.len() || self.state.is_gone(index)) {
            tracing::trace!(index, "pointer ignored: card not on the stack");
            return Vec::new();
        }
        let events = self.swipe.handle(index, sample);
        for event in &events {
            match *event {
                GestureEvent::Start { direction, .. } => {
                    self.handler.on_swipe_start(direction);
                }
                GestureEvent::Drag(_) => self.bump(),
                GestureEvent::Commit { sample, direction } => {
                    self.commit(sample.index, direction);
                    self.handler.on_swipe_end(direction);
                }
                GestureEvent::Cancel(sample) => {
                    self.bump();
                    self.handler.on_swipe_end(sample.direction());
                }
            }
        }
        events
    }

    /// Discard an in‑flight drag without committing it.
    pub fn cancel_drag(&mut self) -> bool {
        let dropped = self.swipe.cancel().is_some();
        if dropped {
            self.bump();
        }
        dropped
    }

    /// Report the measured content height of card `index`.
    ///
    /// Fires [`DeckHandler::on_deck_height_change`] and returns the new height
    /// if the tallest card changed. Ignored unless adaptive height is on.
    pub fn measure(&mut self, index: usize, height: f64) -> Option<DeckHeight> {
        let content = self.height.record(index, height)?;
        Some(self.emit_height(content))
    }

    /// Note a host resize at `now`. Height is recomputed by [`tick`](Self::tick)
    /// once the debounce window passes without further resizes.
    pub fn notify_resize(&mut self, now: Timestamp) {
        self.height.notify_resize(now);
    }

    /// Drive the resize debounce.
    pub fn tick(&mut self, now: Timestamp) -> Option<DeckHeight> {
        let content = self.height.poll(now)?;
        Some(self.emit_height(content))
    }

    /// Update the viewport width used to park dismissed cards.
    ///
    /// Negative or non-finite widths are ignored.
    pub fn set_viewport_width(&mut self, width: f64) {
        if !width.is_finite() || width < 0.0 {
            tracing::trace!(width, "viewport width ignored");
            return;
        }
        if width != self.config.viewport_width {
            self.config.viewport_width = width;
            self.bump();
        }
    }

    /// Current height report.
    pub fn deck_height(&self) -> DeckHeight {
        let content = self.height.content_height();
        DeckHeight {
            content,
            container: container_height(content, self.state.len(), &self.config),
        }
    }

    /// The height measurer.
    pub fn heights(&self) -> &HeightMeasurer {
        &self.height
    }

    fn commit(&mut self, index: usize, side: SwipeDirection) {
        self.state.mark_gone(index, side);
        let current = self.state.current_index();
        if index == current {
            self.state.set_current_index(current + 1);
        }
        self.state.set_swiped(true);
        self.bump();
        tracing::debug!(
            index,
            ?side,
            current = self.state.current_index(),
            "card dismissed"
        );
        if let Some(item) = self.state.item(index) {
            match side {
                SwipeDirection::Left => self.handler.on_swipe_left(item, index),
                SwipeDirection::Right => self.handler.on_swipe_right(item, index),
            }
        }
    }

    fn emit_height(&mut self, content: f64) -> DeckHeight {
        let height = DeckHeight {
            content,
            container: container_height(content, self.state.len(), &self.config),
        };
        self.handler.on_deck_height_change(height);
        height
    }

    fn bump(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::String;
    use alloc::vec;
    use understory_swipe::types::Heading;

    #[derive(Default)]
    struct Log(Vec<String>);

    impl DeckHandler<char> for Log {
        fn on_swipe_left(&mut self, item: &char, index: usize) {
            self.0.push(alloc::format!("left {item} {index}"));
        }
        fn on_swipe_right(&mut self, item: &char, index: usize) {
            self.0.push(alloc::format!("right {item} {index}"));
        }
        fn on_swipe_start(&mut self, direction: SwipeDirection) {
            self.0.push(alloc::format!("start {}", direction.as_str()));
        }
        fn on_swipe_end(&mut self, direction: SwipeDirection) {
            self.0.push(alloc::format!("end {}", direction.as_str()));
        }
        fn on_deck_height_change(&mut self, height: DeckHeight) {
            self.0.push(alloc::format!("height {}", height.content));
        }
    }

    fn deck() -> Deck<char, Log> {
        Deck::with_handler(
            vec!['A', 'B', 'C', 'D', 'E'],
            DeckConfig::default().with_viewport_width(300.0),
            Log::default(),
        )
        .unwrap()
    }

    #[test]
    fn invalid_config_is_rejected() {
        let err = Deck::new(vec![1], DeckConfig::default().with_max_visible_stack(0)).unwrap_err();
        assert_eq!(err, ConfigError::ZeroVisibleStack);
    }

    #[test]
    fn swipe_out_of_range_is_noop() {
        let mut d = deck();
        assert!(d.swipe_left(Some(5)).is_none());
        assert!(d.swipe_right(Some(100)).is_none());
        assert_eq!(d.revision(), 0);
        assert!(d.handler().0.is_empty());
    }

    #[test]
    fn swiping_a_non_current_card_keeps_current() {
        let mut d = deck();
        let s = d.swipe_right(Some(3)).unwrap();
        assert_eq!((*s.item, s.index), ('D', 3));
        assert_eq!(d.current_index(), 0);
        assert!(d.is_card_swiped());
        assert_eq!(d.handler().0, vec!["right D 3"]);
        let l = d.layout();
        assert_eq!(l.cards[3].x(), 500.0);
        assert_eq!(l.cards[4].y(), 39.0);
    }

    #[test]
    fn swipe_past_the_end_stops_at_len() {
        let mut d = deck();
        for _ in 0..5 {
            assert!(d.swipe_left(None).is_some());
        }
        assert_eq!(d.current_index(), 5);
        assert_eq!(d.phase(), DeckPhase::Exhausted);
        assert!(d.swipe_left(None).is_none());
        assert_eq!(d.current_index(), 5);
        assert!(d.layout().visible().next().is_none());
    }

    #[test]
    fn swipe_back_is_lifo_and_clears_flag() {
        let mut d = deck();
        let _ = d.swipe_left(None);
        let _ = d.swipe_right(None);
        assert_eq!(d.current_index(), 2);
        assert_eq!(d.swipe_back().unwrap().index, 1);
        assert!(d.is_card_swiped());
        assert_eq!(d.swipe_back().unwrap().index, 0);
        assert!(!d.is_card_swiped());
        assert!(d.swipe_back().is_none());
        assert_eq!(d.current_index(), 0);
    }

    #[test]
    fn jump_dismisses_before_and_restores_after() {
        let mut d = deck();
        assert!(d.jump_to_card_index(3));
        assert_eq!(d.state().gone().iter().collect::<Vec<_>>(), vec![0, 1, 2]);
        assert_eq!(d.current_index(), 3);
        assert!(d.jump_to_card_index(1));
        assert_eq!(d.state().gone().iter().collect::<Vec<_>>(), vec![0]);
        assert_eq!(d.current_index(), 1);
        assert!(!d.jump_to_card_index(5));
        assert_eq!(d.current_index(), 1);
    }

    #[test]
    fn jump_to_zero_keeps_flag_semantics() {
        let mut d = deck();
        assert!(d.jump_to_card_index(0));
        assert!(!d.is_card_swiped());
        assert!(d.jump_to_card_index(2));
        assert!(d.is_card_swiped());
    }

    #[test]
    fn update_card_replaces_only_on_some() {
        let mut d = deck();
        let _ = d.swipe_left(None);
        assert!(d.update_card(1, |c| Some(c.to_ascii_lowercase())));
        assert_eq!(d.items()[1], 'b');
        assert!(!d.update_card(1, |_| None));
        assert!(!d.update_card(9, |_| Some('z')));
        assert_eq!(d.current_index(), 1);
        assert_eq!(d.state().gone().len(), 1);
    }

    #[test]
    fn drag_commit_fires_callbacks_in_order() {
        let mut d = deck();
        let _ = d.pointer(0, PointerSample::moving(-10.0));
        let _ = d.pointer(0, PointerSample::moving(-85.0));
        assert_eq!(d.layout().label, Some(SwipeDirection::Left));
        assert_eq!(d.layout().cards[0].x(), -85.0);
        let ev = d.pointer(0, PointerSample::released(-85.0));
        assert!(matches!(ev[0], GestureEvent::Commit { .. }));
        assert_eq!(d.handler().0, vec!["start left", "left A 0", "end left"]);
        assert_eq!(d.current_index(), 1);
        assert!(d.state().is_gone(0));
        assert_eq!(d.layout().label, None);
    }

    #[test]
    fn drag_cancel_snaps_back_without_mutation() {
        let mut d = deck();
        let _ = d.pointer(0, PointerSample::moving(20.0));
        let _ = d.pointer(0, PointerSample::moving(50.0));
        let _ = d.pointer(0, PointerSample::released(50.0));
        assert_eq!(d.handler().0, vec!["start right", "end right"]);
        assert_eq!(d.current_index(), 0);
        assert!(d.state().gone().is_empty());
        assert_eq!(d.layout().cards[0].x(), 0.0);
    }

    #[test]
    fn drag_on_dismissed_card_is_ignored() {
        let mut d = deck();
        let _ = d.swipe_left(None);
        assert!(d.pointer(0, PointerSample::moving(-50.0)).is_empty());
        assert!(d.active_drag().is_none());
    }

    #[test]
    fn replace_mid_drag_discards_the_drag() {
        let mut d = deck();
        let _ = d.swipe_left(None);
        let _ = d.pointer(1, PointerSample::moving(40.0));
        assert!(d.active_drag().is_some());
        assert!(d.replace(vec!['F', 'G']));
        assert!(d.active_drag().is_none());
        assert_eq!(d.current_index(), 0);
        assert!(d.state().gone().is_empty());
        assert!(!d.is_card_swiped());
        // The stale release is dropped rather than committing on the new deck.
        assert!(d.pointer(1, PointerSample::released(120.0)).is_empty());
        assert_eq!(d.current_index(), 0);
    }

    #[test]
    fn jump_mid_drag_discards_the_drag() {
        let mut d = deck();
        let _ = d.pointer(0, PointerSample::moving(-40.0));
        let _ = d.pointer(0, PointerSample::moving(-90.0));
        assert!(d.jump_to_card_index(2));
        assert!(d.active_drag().is_none());
        // The release belongs to the abandoned drag and commits nothing.
        assert!(d.pointer(0, PointerSample::released(-90.0)).is_empty());
        assert_eq!(d.current_index(), 2);
        assert_eq!(d.state().gone().iter().collect::<Vec<_>>(), vec![0, 1]);
        assert_eq!(d.handler().0, vec!["start left"]);
    }

    #[test]
    fn non_finite_pointer_samples_leave_the_layout_alone() {
        let mut d = deck();
        assert!(d.pointer(0, PointerSample::moving(f64::NAN)).is_empty());
        assert!(d.active_drag().is_none());
        assert!(d.handler().0.is_empty());
        let front = d.layout().cards[0];
        assert_eq!((front.x(), front.rotation), (0.0, 0.0));
        assert!(front.is_visible());
    }

    #[test]
    fn replace_reports_the_reset_height() {
        let config = DeckConfig::default().with_adaptive_height(true);
        let mut d = Deck::with_handler(vec!['x', 'y', 'z'], config, Log::default()).unwrap();
        for (i, h) in [100.0, 150.0, 120.0].into_iter().enumerate() {
            let _ = d.measure(i, h);
        }
        assert!(d.replace(vec!['p', 'q']));
        assert_eq!(d.handler().0, vec!["height 150", "height 0"]);
        assert_eq!(d.deck_height().container, 26.0);
        // An identical list changes nothing and reports nothing.
        assert!(!d.replace(vec!['p', 'q']));
        assert_eq!(d.handler().0.len(), 2);
    }

    #[test]
    fn replace_without_adaptive_height_is_silent() {
        let mut d = deck();
        assert!(d.replace(vec!['F']));
        assert!(d.handler().0.is_empty());
    }

    #[test]
    fn replace_with_equal_list_is_noop() {
        let mut d = deck();
        let _ = d.swipe_left(None);
        assert!(!d.replace(vec!['A', 'B', 'C', 'D', 'E']));
        assert_eq!(d.current_index(), 1);
    }

    #[test]
    fn programmatic_swipe_of_dragged_card_drops_the_drag() {
        let mut d = deck();
        let _ = d.pointer(0, PointerSample::moving(30.0));
        let _ = d.swipe_right(None);
        assert!(d.active_drag().is_none());
        assert_eq!(d.handler().0, vec!["start right", "right A 0"]);
    }

    #[test]
    fn adaptive_height_reports_through_handler() {
        let mut d = Deck::with_handler(
            vec!['x', 'y', 'z'],
            DeckConfig::default().with_adaptive_height(true),
            Log::default(),
        )
        .unwrap();
        assert_eq!(d.measure(0, 100.0), None);
        assert_eq!(d.measure(1, 150.0), None);
        let h = d.measure(2, 120.0).unwrap();
        assert_eq!(h.content, 150.0);
        assert_eq!(h.container, 150.0 + 3.0 * 13.0);
        assert_eq!(d.handler().0, vec!["height 150"]);

        d.notify_resize(Timestamp(0));
        assert_eq!(d.measure(1, 90.0), None);
        assert_eq!(d.tick(Timestamp(500)), None);
        assert_eq!(d.tick(Timestamp(1000)).unwrap().content, 120.0);
    }

    #[test]
    fn update_card_waits_for_remeasure() {
        let config = DeckConfig::default().with_adaptive_height(true);
        let mut d = Deck::new(vec![1, 2], config).unwrap();
        let _ = d.measure(0, 10.0);
        let _ = d.measure(1, 20.0);
        assert!(d.update_card(1, |v| Some(v * 10)));
        assert!(!d.heights().is_complete());
        assert_eq!(d.measure(0, 30.0), None);
        assert_eq!(d.measure(1, 40.0).unwrap().content, 40.0);
    }

    #[test]
    fn viewport_width_moves_parked_cards() {
        let mut d = deck();
        let _ = d.swipe_left(None);
        assert_eq!(d.layout().cards[0].x(), -500.0);
        d.set_viewport_width(1000.0);
        assert_eq!(d.layout().cards[0].x(), -1200.0);
        d.set_viewport_width(f64::NAN);
        assert_eq!(d.config().viewport_width, 1000.0);
    }

    #[test]
    fn render_passes_items_and_targets() {
        let mut d = deck();
        let _ = d.swipe_left(None);
        let out = d.render(|item, i, t| (*item, i, t.is_visible()));
        assert_eq!(out[0], ('A', 0, false));
        assert_eq!(out[1], ('B', 1, true));
        assert_eq!(out.len(), 5);
    }

    #[test]
    fn heading_is_tracked_across_samples() {
        let mut d = deck();
        let _ = d.pointer(0, PointerSample::moving(-30.0));
        let _ = d.pointer(0, PointerSample::moving(-20.0));
        assert_eq!(d.active_drag().unwrap().heading, Heading::Right);
    }
}
