// Copyright 2025 the Swipedeck Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use swipedeck_deck::{Deck, StackLayout};
use swipedeck_gesture::session::DragSession;
use swipedeck_gesture::types::{PointerEvent, PointerId, SwipeConfig};

fn make_deck(n: usize) -> Deck<usize> {
    (0..n).collect()
}

fn bench_layout(c: &mut Criterion) {
    let layout = StackLayout {
        visible_count: 4,
        card_height: 220.0,
        ..Default::default()
    };
    let mut group = c.benchmark_group("stack_layout");
    for n in [4_usize, 32, 256] {
        let deck = make_deck(n);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("slots_{n}"), |b| {
            b.iter(|| black_box(layout.slots(black_box(&deck), 42.0)));
        });
    }
    group.finish();
}

fn bench_drag_session(c: &mut Criterion) {
    let config = SwipeConfig {
        threshold: 100.0,
        offscreen_target: 600.0,
    };
    let p = PointerId(1);
    c.bench_function("drag_session_feed_256_moves", |b| {
        b.iter_batched(
            || {
                let mut s = DragSession::new(config);
                let _ = s.handle_pointer(PointerEvent::Down { pointer: p });
                s
            },
            |mut s| {
                for _ in 0..256 {
                    black_box(s.handle_pointer(PointerEvent::Move { pointer: p, dx: 0.25 }));
                }
                s
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, bench_layout, bench_drag_session);
criterion_main!(benches);
