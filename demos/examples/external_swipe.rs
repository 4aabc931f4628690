// Copyright 2025 the Swipedeck Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Programmatic swipes through the assembled card stack.
//!
//! Builds a [`CardStack`], requests a right-swipe without any pointer input,
//! and ticks until the deck advances — the state snapshot only changes once
//! the fly-off animation has completed.
//!
//! Run:
//! - `cargo run -p swipedeck_demos --example external_swipe`

use swipedeck_deck::{CardStack, DeckViewModel, StackLayout, Viewport};
use swipedeck_gesture::session::SessionPhase;
use swipedeck_gesture::types::SwipeDirection;

fn main() {
    let vm = DeckViewModel::new(["ace", "king", "queen"].into_iter().collect());
    let viewport = Viewport {
        width_dip: 411.0,
        density: 2.625,
    };
    let mut stack = CardStack::new(vm, viewport, StackLayout::default());

    println!("before: {:?} (revision {})", stack.state().cards, stack.state().revision);
    stack.request_swipe(SwipeDirection::Right).unwrap();

    let frame_nanos = 16_000_000;
    for frame in 0.. {
        stack.tick(frame * frame_nanos);
        if stack.session().phase() == SessionPhase::Idle {
            println!("fly-off completed after ~{}ms", frame * 16);
            break;
        }
    }
    println!("after:  {:?} (revision {})", stack.state().cards, stack.state().revision);
}
