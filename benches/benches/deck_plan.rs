// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use understory_deck::planner::plan;
use understory_deck::state::DeckState;
use understory_deck::{Deck, DeckConfig, DragPhase, DragSample, Heading, PointerSample};
use understory_swipe::interpreter::SwipeInterpreter;
use understory_swipe::types::{SwipeConfig, SwipeDirection};

// Every third card dismissed, alternating sides.
fn scattered_state(n: usize) -> DeckState<u64> {
    let mut state = DeckState::new((0..n as u64).collect(), 0);
    for i in (0..n).step_by(3) {
        let side = if i % 2 == 0 {
            SwipeDirection::Left
        } else {
            SwipeDirection::Right
        };
        state.mark_gone(i, side);
    }
    state.set_current_index(1);
    state
}

fn bench_plan(c: &mut Criterion) {
    let config = DeckConfig::default().with_viewport_width(390.0);
    let mut group = c.benchmark_group("plan");
    for &n in &[8_usize, 64, 1024] {
        let state = scattered_state(n);
        let drag = DragSample {
            index: 1,
            delta_x: -55.0,
            heading: Heading::Left,
            phase: DragPhase::Moving,
        };
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("rest/{n}"), |b| {
            b.iter(|| black_box(plan(black_box(&state), &config, None)));
        });
        group.bench_function(format!("dragging/{n}"), |b| {
            b.iter(|| black_box(plan(black_box(&state), &config, Some(&drag))));
        });
    }
    group.finish();
}

fn bench_swipe_cycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("deck");
    for &n in &[8_usize, 256] {
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("swipe_all_then_back/{n}"), |b| {
            b.iter_batched(
                || Deck::new((0..n as u64).collect(), DeckConfig::default()).unwrap(),
                |mut deck| {
                    while deck.swipe_left(None).is_some() {}
                    while deck.swipe_back().is_some() {}
                    black_box(deck.current_index())
                },
                BatchSize::SmallInput,
            );
        });
        group.bench_function(format!("jump_back_and_forth/{n}"), |b| {
            b.iter_batched(
                || Deck::new((0..n as u64).collect(), DeckConfig::default()).unwrap(),
                |mut deck| {
                    let _ = deck.jump_to_card_index(n - 1);
                    let _ = deck.jump_to_card_index(n / 2);
                    let _ = deck.jump_to_card_index(0);
                    black_box(deck.revision())
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_interpreter(c: &mut Criterion) {
    let samples: Vec<f64> = (1..=60).map(|i| -f64::from(i) * 1.5).collect();
    let mut group = c.benchmark_group("interpreter");
    group.throughput(Throughput::Elements(samples.len() as u64 + 1));
    group.bench_function("drag_and_release", |b| {
        b.iter(|| {
            let mut s = SwipeInterpreter::new(SwipeConfig::default());
            for &x in &samples {
                black_box(s.handle(0, PointerSample::moving(x)));
            }
            black_box(s.handle(0, PointerSample::released(-90.0)))
        });
    });
    group.finish();
}

criterion_group!(benches, bench_plan, bench_swipe_cycle, bench_interpreter);
criterion_main!(benches);
