// Copyright 2025 the Swipedeck Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The swipe capability contract and event dispatch.
//!
//! ## Overview
//!
//! [`SwipeHandler`] is the interface a presentation layer implements to react
//! to a gesture session: two terminal swipe completions and three threshold
//! classifications. The session itself emits plain
//! [`GestureEvent`](crate::types::GestureEvent) values; [`dispatch`] walks a
//! sequence of them and invokes the matching capability method for each, in
//! order. Splitting the two keeps the state machine testable without a
//! handler and lets hosts interpose on the raw event stream.

use crate::types::GestureEvent;

/// Capability interface for reacting to a card's gesture session.
///
/// Terminal methods fire once per completed fly-off, strictly after the
/// animation finishes. Threshold methods fire on every move of a drag —
/// repeats included — so implementations should be cheap and idempotent.
pub trait SwipeHandler {
    /// A rightward fly-off completed.
    fn on_swipe_right(&mut self);

    /// A leftward fly-off completed.
    fn on_swipe_left(&mut self);

    /// The drag offset is at or past the right threshold.
    fn on_right_threshold_reached(&mut self);

    /// The drag offset is at or past the left threshold.
    fn on_left_threshold_reached(&mut self);

    /// The drag offset is inside both thresholds.
    fn on_no_threshold_reached(&mut self);
}

/// Deliver a sequence of gesture events to a handler, in order.
pub fn dispatch<H: SwipeHandler>(events: &[GestureEvent], handler: &mut H) {
    for event in events {
        match event {
            GestureEvent::SwipeRight => handler.on_swipe_right(),
            GestureEvent::SwipeLeft => handler.on_swipe_left(),
            GestureEvent::RightThresholdReached => handler.on_right_threshold_reached(),
            GestureEvent::LeftThresholdReached => handler.on_left_threshold_reached(),
            GestureEvent::NoThresholdReached => handler.on_no_threshold_reached(),
        }
    }
}
