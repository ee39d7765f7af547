// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Deck drag.
//!
//! Feed synthetic pointer traces to the deck: a tap, a short drag that snaps
//! back, a flick-back past the threshold, and a committed swipe.
//!
//! Run:
//! - `RUST_LOG=trace cargo run -p understory_deck_demos --example deck_drag`

use kurbo::Point;
use tracing_subscriber::EnvFilter;
use understory_deck::{Deck, DeckConfig, DeckHandler, PointerSample, SwipeDirection};

#[derive(Default)]
struct Gestures {
    log: Vec<String>,
}

impl DeckHandler<&'static str> for Gestures {
    fn on_swipe_left(&mut self, item: &&'static str, index: usize) {
        self.log.push(format!("left {item}@{index}"));
    }

    fn on_swipe_right(&mut self, item: &&'static str, index: usize) {
        self.log.push(format!("right {item}@{index}"));
    }

    fn on_swipe_start(&mut self, direction: SwipeDirection) {
        self.log.push(format!("start {}", direction.as_str()));
    }

    fn on_swipe_end(&mut self, direction: SwipeDirection) {
        self.log.push(format!("end {}", direction.as_str()));
    }
}

fn trace(deck: &mut Deck<&'static str, Gestures>, label: &str, xs: &[f64]) {
    let index = deck.current_index();
    println!("{label}:");
    for &x in xs {
        let _ = deck.pointer(index, PointerSample::moving(x));
        let layout = deck.layout();
        let card = layout.cards[index];
        // Where the card's top-left corner lands on screen.
        let corner = card.to_affine() * Point::ORIGIN;
        println!(
            "  x={x:>6.1} rot={:>5.1} corner=({:>6.1}, {:>5.1}) label={}",
            card.rotation,
            corner.x,
            corner.y,
            layout.label.map_or("-", SwipeDirection::as_str)
        );
    }
    if let Some(&last) = xs.last() {
        for event in deck.pointer(index, PointerSample::released(last)) {
            println!("  release -> {event:?}");
        }
    }
    println!("  current={} log={:?}", deck.current_index(), deck.handler().log);
    deck.handler_mut().log.clear();
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .without_time()
        .init();

    let config = DeckConfig::default().with_viewport_width(390.0);
    let mut deck = Deck::with_handler(vec!["A", "B", "C"], config, Gestures::default())
        .expect("default config is valid");

    trace(&mut deck, "tap", &[1.0, 2.0]);
    trace(&mut deck, "short drag", &[10.0, 35.0, 50.0]);
    trace(&mut deck, "flick back", &[-20.0, -60.0, -95.0, -85.0]);
    trace(&mut deck, "commit", &[-20.0, -60.0, -95.0]);
    trace(&mut deck, "commit right", &[15.0, 45.0, 80.0]);
}
