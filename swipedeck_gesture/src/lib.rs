// Copyright 2025 the Swipedeck Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Swipedeck Gesture: a deterministic drag/settle engine for swipeable cards.
//!
//! ## Overview
//!
//! This crate models one horizontal drag gesture at a time as an explicit
//! state machine — Idle → Dragging → Settling → Idle — driven entirely by the
//! host: feed it [`PointerEvent`](crate::types::PointerEvent)s as they arrive
//! and call [`DragSession::tick`](crate::session::DragSession::tick) once per
//! rendering frame. It performs no hit testing, owns no clock, and touches no
//! platform input; in return, every call yields an ordered, reproducible
//! sequence of [`GestureEvent`](crate::types::GestureEvent)s.
//!
//! ## Sessions
//!
//! A session begins at pointer-down. The first pointer seen is captured;
//! other pointers are ignored until the session ends. Each move accumulates
//! into a single horizontal offset and emits a threshold classification —
//! on *every* move, not just on crossings, so hosts can drive per-frame
//! feedback like a highlight color without edge-detection of their own.
//!
//! At release the session decides once: past the threshold the offset
//! animates to the off-screen target and the matching terminal event
//! (`SwipeLeft`/`SwipeRight`) fires *after* the animation completes; short of
//! it the offset settles back to zero and no terminal event fires.
//!
//! ## Dispatch
//!
//! The [`SwipeHandler`](crate::handler::SwipeHandler) trait is the capability
//! contract presentation layers implement; [`dispatch`](crate::handler::dispatch)
//! maps an event sequence onto it. Keeping events as plain values first means
//! the machine stays testable without any handler wired up.
//!
//! ## Example
//!
//! ```rust
//! use swipedeck_gesture::session::DragSession;
//! use swipedeck_gesture::types::{GestureEvent, PointerEvent, PointerId, SwipeConfig};
//!
//! let config = SwipeConfig { threshold: 100.0, offscreen_target: 600.0 };
//! let mut session = DragSession::new(config);
//! let p = PointerId(1);
//!
//! session.handle_pointer(PointerEvent::Down { pointer: p });
//! let events = session.handle_pointer(PointerEvent::Move { pointer: p, dx: 120.0 });
//! assert_eq!(events, vec![GestureEvent::RightThresholdReached]);
//!
//! session.handle_pointer(PointerEvent::Up { pointer: p });
//! // The terminal event fires only once the fly-off animation has run its course.
//! let mut terminal = None;
//! for frame in 0..20u64 {
//!     if let Some(ev) = session.tick(frame * 16_000_000) {
//!         terminal = Some(ev);
//!     }
//! }
//! assert_eq!(terminal, Some(GestureEvent::SwipeRight));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod handler;
pub mod session;
pub mod tween;
pub mod types;
