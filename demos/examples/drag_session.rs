// Copyright 2025 the Swipedeck Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A scripted drag from pointer-down to fly-off.
//!
//! Feeds a fixed sequence of pointer events into a raw [`DragSession`] and
//! ticks it frame by frame, printing every classification and the terminal
//! swipe event as it falls out of the animation.
//!
//! Run:
//! - `cargo run -p swipedeck_demos --example drag_session`

use swipedeck_gesture::session::{DragSession, SessionPhase};
use swipedeck_gesture::types::{PointerEvent, PointerId, SwipeConfig};
use swipedeck_geometry::{DEFAULT_THRESHOLD_FRACTION, offscreen_target, swipe_threshold};

fn main() {
    let (width_dip, density) = (360.0, 2.625);
    let config = SwipeConfig {
        threshold: swipe_threshold(width_dip, density, DEFAULT_THRESHOLD_FRACTION),
        offscreen_target: offscreen_target(width_dip, density),
    };
    println!(
        "threshold = {:.1}px, off-screen target = {:.1}px",
        config.threshold, config.offscreen_target
    );

    let mut session = DragSession::new(config);
    let p = PointerId(1);

    println!("== Dragging ==");
    let mut events = session.handle_pointer(PointerEvent::Down { pointer: p });
    for dx in [40.0, 80.0, 120.0, 90.0] {
        events.extend(session.handle_pointer(PointerEvent::Move { pointer: p, dx }));
        println!("  offset={:+.1} -> {:?}", session.offset(), events.last());
    }
    let _ = session.handle_pointer(PointerEvent::Up { pointer: p });

    println!("== Settling ==");
    let frame_nanos = 16_000_000;
    for frame in 0.. {
        let terminal = session.tick(frame * frame_nanos);
        println!("  t={:>3}ms offset={:+.1}", frame * 16, session.offset());
        if let Some(event) = terminal {
            println!("== Terminal: {event:?} ==");
        }
        if session.phase() == SessionPhase::Idle {
            break;
        }
    }
}
