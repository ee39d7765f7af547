// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Deck basics.
//!
//! Swipe cards programmatically, undo, jump, rename a card, and append more
//! cards, printing the layout after each step.
//!
//! Run:
//! - `RUST_LOG=understory_deck=debug cargo run -p understory_deck_demos --example deck_basics`

use tracing_subscriber::EnvFilter;
use understory_deck::{Deck, DeckConfig, DeckHandler};

#[derive(Clone, Debug, PartialEq)]
struct Card {
    id: u32,
    name: String,
}

fn cards(first_id: u32, names: &[&str]) -> Vec<Card> {
    names
        .iter()
        .zip(first_id..)
        .map(|(name, id)| Card {
            id,
            name: (*name).to_owned(),
        })
        .collect()
}

struct Console;

impl DeckHandler<Card> for Console {
    fn on_swipe_left(&mut self, item: &Card, index: usize) {
        tracing::info!(id = item.id, name = %item.name, index, "onSwipeLeft");
    }

    fn on_swipe_right(&mut self, item: &Card, index: usize) {
        tracing::info!(id = item.id, name = %item.name, index, "onSwipeRight");
    }
}

fn print_stack(deck: &Deck<Card, Console>) {
    let rows = deck.render(|card, i, t| {
        format!(
            "  [{i}] {:<2} x={:>6.1} y={:>5.1} z={:>6.1} rot={:>5.1} visible={}",
            card.name,
            t.x(),
            t.y(),
            t.depth,
            t.rotation,
            t.is_visible()
        )
    });
    println!(
        "current={} swiped={} phase={:?}",
        deck.current_index(),
        deck.is_card_swiped(),
        deck.phase()
    );
    for row in rows {
        println!("{row}");
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .without_time()
        .init();

    let config = DeckConfig::default().with_viewport_width(390.0);
    let mut deck = Deck::with_handler(cards(1, &["A", "B", "C", "D", "E"]), config, Console)
        .expect("default config is valid");
    print_stack(&deck);

    if let Some(s) = deck.swipe_left(None) {
        println!("swipeLeft -> {} at {}", s.item.name, s.index);
    }
    if let Some(s) = deck.swipe_right(None) {
        println!("swipeRight -> {} at {}", s.item.name, s.index);
    }
    print_stack(&deck);

    if let Some(s) = deck.swipe_back() {
        println!("swipeBack -> {} at {}", s.item.name, s.index);
    }
    print_stack(&deck);

    let current = deck.current_index();
    let renamed = deck.update_card(current, |card| {
        Some(Card {
            name: "B*".to_owned(),
            ..card.clone()
        })
    });
    println!("renamed current card: {renamed}");

    assert!(deck.jump_to_card_index(3));
    println!("jumpToCardIndex(3)");
    print_stack(&deck);

    // Appending resets the deck to its initial index.
    let mut more = deck.items().to_vec();
    more.extend(cards(6, &["F", "G", "H", "I", "J"]));
    assert!(deck.replace(more));
    println!("added cards");
    print_stack(&deck);
}
