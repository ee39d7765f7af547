// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Adaptive deck height.
//!
//! Report card content heights, simulate a burst of resizes, and watch the
//! debounced height reports arrive.
//!
//! Run:
//! - `RUST_LOG=understory_deck=debug cargo run -p understory_deck_demos --example deck_adaptive_height`

use tracing_subscriber::EnvFilter;
use understory_deck::{Deck, DeckConfig, DeckHandler, DeckHeight, Timestamp};

struct Container;

impl DeckHandler<u32> for Container {
    fn on_deck_height_change(&mut self, height: DeckHeight) {
        println!(
            "onDeckHeightChange content={} container={}",
            height.content, height.container
        );
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .without_time()
        .init();

    let config = DeckConfig::default().with_adaptive_height(true);
    let mut deck =
        Deck::with_handler(vec![100_u32, 150, 120], config, Container).expect("valid config");

    // Content heights arrive one by one; nothing is reported until all are in.
    for (i, h) in [100.0, 150.0, 120.0].into_iter().enumerate() {
        let _ = deck.measure(i, h);
    }

    // A burst of resizes shrinks the text; the report waits for it to settle.
    for t in [0_u64, 200, 400] {
        deck.notify_resize(Timestamp::from_millis(t));
        let _ = deck.measure(1, 150.0 - t as f64 / 10.0);
    }
    for t in (0..=1600).step_by(200) {
        if let Some(h) = deck.tick(Timestamp::from_millis(t)) {
            println!("settled at t={t}ms: {h:?}");
        }
    }

    // Appending cards starts measurement over.
    assert!(deck.replace(vec![100, 150, 120, 80]));
    for (i, h) in [100.0, 90.0, 120.0, 80.0].into_iter().enumerate() {
        let _ = deck.measure(i, h);
    }
    println!("final height: {:?}", deck.deck_height());
}
