// Copyright 2025 the Swipedeck Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag session state machine: Idle → Dragging → Settling → Idle.
//!
//! ## Overview
//!
//! A [`DragSession`] tracks one horizontal drag at a time over a single
//! scalar offset. Pointer events move it between phases; per-frame ticks
//! advance the settle animation after release. All outputs are plain
//! [`GestureEvent`](crate::types::GestureEvent) values, strictly ordered with
//! the inputs that produced them.
//!
//! ## Release decision
//!
//! Exactly one check happens, at release time, with no hysteresis: an offset
//! at or past the threshold flies off screen and emits its terminal event
//! once the animation finishes; anything short settles back to zero silently.
//!
//! ## Interrupted settles
//!
//! A pointer-down while a settle animation is in flight cancels the
//! animation at its last ticked value and resumes dragging from there. The
//! cancelled fly-off's terminal event is never emitted. After a *completed*
//! session the next pointer-down starts from an offset of zero.

use alloc::vec::Vec;

use crate::tween::{Easing, Tween, TweenSpec};
use crate::types::{
    GestureEvent, PointerEvent, PointerId, SessionError, SwipeConfig, SwipeDirection,
};

/// Duration of the fly-off and settle-back animations after an organic release.
pub const RELEASE_ANIMATION_MILLIS: u64 = 150;

/// Duration of the fly-off animation for a programmatic swipe request.
pub const EXTERNAL_SWIPE_MILLIS: u64 = 400;

/// Phase of a drag session.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum SessionPhase {
    /// No pointer captured, no animation in flight.
    Idle,
    /// A pointer is captured and accumulating offset.
    Dragging,
    /// The offset is animating toward its resolution.
    Settling,
}

/// What a settle animation resolves to once it completes.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum SettleOutcome {
    FlyLeft,
    FlyRight,
    Rest,
}

impl SettleOutcome {
    fn terminal_event(self) -> Option<GestureEvent> {
        match self {
            Self::FlyLeft => Some(GestureEvent::SwipeLeft),
            Self::FlyRight => Some(GestureEvent::SwipeRight),
            Self::Rest => None,
        }
    }
}

#[derive(Copy, Clone, Debug)]
struct Settle {
    tween: Tween,
    outcome: SettleOutcome,
}

/// State machine for one card's horizontal drag gesture.
///
/// ## Usage
///
/// - Construct with [`DragSession::new`] from a [`SwipeConfig`] (threshold
///   and off-screen target, typically derived via `swipedeck_geometry`).
/// - Feed [`DragSession::handle_pointer`] every pointer event; each call
///   returns the classification events it produced, in order.
/// - Call [`DragSession::tick`] once per frame with a monotonic timestamp;
///   it returns the terminal swipe event when a fly-off completes.
/// - Read [`DragSession::offset`] when rendering the front card.
///
/// Exactly one session is active per card stack; the session itself enforces
/// single-pointer capture.
#[derive(Clone, Debug)]
pub struct DragSession {
    config: SwipeConfig,
    phase: SessionPhase,
    pointer: Option<PointerId>,
    offset: f64,
    settle: Option<Settle>,
}

impl DragSession {
    /// Create an idle session with the given distances.
    pub fn new(config: SwipeConfig) -> Self {
        Self {
            config,
            phase: SessionPhase::Idle,
            pointer: None,
            offset: 0.0,
            settle: None,
        }
    }

    /// The session's current distances.
    pub fn config(&self) -> SwipeConfig {
        self.config
    }

    /// Replace the session's distances (e.g. after a viewport change).
    ///
    /// Takes effect at the next classification or release decision; an
    /// animation already in flight keeps its original target.
    pub fn set_config(&mut self, config: SwipeConfig) {
        self.config = config;
    }

    /// Current phase, for introspection.
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// Current horizontal offset of the card, in pixels.
    ///
    /// During a settle this is the value of the most recent
    /// [`DragSession::tick`]; once a session completes it is back at `0.0`.
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Feed one pointer event and collect the events it produced.
    ///
    /// Classifications fire on every move of the captured pointer — repeats
    /// included. Releases return no events; the terminal swipe event (if any)
    /// comes from [`DragSession::tick`] once the animation completes.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> Vec<GestureEvent> {
        let mut out = Vec::new();
        match event {
            PointerEvent::Down { pointer } => match self.phase {
                SessionPhase::Idle => {
                    self.pointer = Some(pointer);
                    self.offset = 0.0;
                    self.phase = SessionPhase::Dragging;
                }
                SessionPhase::Settling => {
                    // Cancel the animation at its last ticked value and
                    // resume dragging from there. The pending terminal
                    // event is dropped along with the tween.
                    self.settle = None;
                    self.pointer = Some(pointer);
                    self.phase = SessionPhase::Dragging;
                }
                SessionPhase::Dragging => {}
            },
            PointerEvent::Move { pointer, dx } => {
                if self.phase == SessionPhase::Dragging && self.pointer == Some(pointer) {
                    self.offset += dx;
                    out.push(self.classify());
                }
            }
            PointerEvent::Up { pointer } | PointerEvent::Cancel { pointer } => {
                if self.phase == SessionPhase::Dragging && self.pointer == Some(pointer) {
                    self.release();
                }
            }
        }
        out
    }

    /// Advance the settle animation to `frame_time_nanos`.
    ///
    /// Returns the terminal swipe event when a fly-off finishes on this tick.
    /// Settle-backs finish silently. Idle and dragging sessions ignore ticks.
    ///
    /// A completed fly-off also returns the offset to rest: the swiped card
    /// no longer occupies the session, and whatever card becomes front next
    /// must not inherit its off-screen offset.
    pub fn tick(&mut self, frame_time_nanos: u64) -> Option<GestureEvent> {
        let Some(settle) = self.settle.as_mut() else {
            return None;
        };
        self.offset = settle.tween.sample(frame_time_nanos);
        if !settle.tween.is_finished(frame_time_nanos) {
            return None;
        }
        let outcome = settle.outcome;
        self.settle = None;
        self.phase = SessionPhase::Idle;
        self.offset = 0.0;
        outcome.terminal_event()
    }

    /// Request a programmatic swipe of the card without user input.
    ///
    /// Starts the longer fly-off animation toward the off-screen target; the
    /// terminal event fires from [`DragSession::tick`] as usual.
    /// [`SwipeDirection::None`] is a no-op. Fails with
    /// [`SessionError::Busy`] while a drag or settle is in flight.
    pub fn request_swipe(&mut self, direction: SwipeDirection) -> Result<(), SessionError> {
        let outcome = match direction {
            SwipeDirection::None => return Ok(()),
            SwipeDirection::Left => SettleOutcome::FlyLeft,
            SwipeDirection::Right => SettleOutcome::FlyRight,
        };
        if self.phase != SessionPhase::Idle {
            return Err(SessionError::Busy);
        }
        let target = match outcome {
            SettleOutcome::FlyLeft => -self.config.offscreen_target,
            _ => self.config.offscreen_target,
        };
        self.offset = 0.0;
        self.settle = Some(Settle {
            tween: Tween::new(
                self.offset,
                target,
                TweenSpec::tween(EXTERNAL_SWIPE_MILLIS, Easing::EaseInOutCubic),
            ),
            outcome,
        });
        self.phase = SessionPhase::Settling;
        Ok(())
    }

    /// Classify the current offset against the threshold.
    ///
    /// Left wins when both sides match (possible only with a degenerate zero
    /// threshold), mirroring the release decision.
    fn classify(&self) -> GestureEvent {
        if self.offset <= -self.config.threshold {
            GestureEvent::LeftThresholdReached
        } else if self.offset >= self.config.threshold {
            GestureEvent::RightThresholdReached
        } else {
            GestureEvent::NoThresholdReached
        }
    }

    /// Run the single release-time decision and enter the settling phase.
    fn release(&mut self) {
        let (target, outcome, millis) = if self.offset <= -self.config.threshold {
            (
                -self.config.offscreen_target,
                SettleOutcome::FlyLeft,
                RELEASE_ANIMATION_MILLIS,
            )
        } else if self.offset >= self.config.threshold {
            (
                self.config.offscreen_target,
                SettleOutcome::FlyRight,
                RELEASE_ANIMATION_MILLIS,
            )
        } else {
            (0.0, SettleOutcome::Rest, RELEASE_ANIMATION_MILLIS)
        };
        self.pointer = None;
        self.settle = Some(Settle {
            tween: Tween::new(
                self.offset,
                target,
                TweenSpec::tween(millis, Easing::EaseInOutCubic),
            ),
            outcome,
        });
        self.phase = SessionPhase::Settling;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use alloc::vec::Vec;

    const CONFIG: SwipeConfig = SwipeConfig {
        threshold: 100.0,
        offscreen_target: 600.0,
    };

    const FRAME_NANOS: u64 = 16_000_000;

    fn ticked_to_completion(session: &mut DragSession) -> Vec<GestureEvent> {
        let mut out = Vec::new();
        for frame in 0..64 {
            if let Some(ev) = session.tick(frame * FRAME_NANOS) {
                out.push(ev);
            }
            if session.phase() == SessionPhase::Idle {
                break;
            }
        }
        out
    }

    #[test]
    fn classification_fires_on_every_move() {
        let mut s = DragSession::new(CONFIG);
        let p = PointerId(1);
        let _ = s.handle_pointer(PointerEvent::Down { pointer: p });
        // Three short moves, three identical classifications — level-triggered.
        for _ in 0..3 {
            let ev = s.handle_pointer(PointerEvent::Move { pointer: p, dx: 10.0 });
            assert_eq!(ev, vec![GestureEvent::NoThresholdReached]);
        }
    }

    #[test]
    fn crossing_classifies_on_that_move() {
        let mut s = DragSession::new(CONFIG);
        let p = PointerId(1);
        let _ = s.handle_pointer(PointerEvent::Down { pointer: p });
        let _ = s.handle_pointer(PointerEvent::Move { pointer: p, dx: -60.0 });
        let ev = s.handle_pointer(PointerEvent::Move { pointer: p, dx: -40.0 });
        // Exactly at the threshold counts.
        assert_eq!(ev, vec![GestureEvent::LeftThresholdReached]);
        assert_eq!(s.offset(), -100.0);
    }

    #[test]
    fn release_past_threshold_flies_off_then_emits() {
        let mut s = DragSession::new(CONFIG);
        let p = PointerId(1);
        let _ = s.handle_pointer(PointerEvent::Down { pointer: p });
        let _ = s.handle_pointer(PointerEvent::Move { pointer: p, dx: 101.0 });
        let release = s.handle_pointer(PointerEvent::Up { pointer: p });
        // No terminal event at release time; it follows the animation.
        assert!(release.is_empty());
        assert_eq!(s.phase(), SessionPhase::Settling);

        let events = ticked_to_completion(&mut s);
        assert_eq!(events, vec![GestureEvent::SwipeRight]);
        assert_eq!(s.offset(), 0.0, "a finished fly-off leaves the session at rest");
        assert_eq!(s.phase(), SessionPhase::Idle);
    }

    #[test]
    fn release_short_of_threshold_settles_back_silently() {
        let mut s = DragSession::new(CONFIG);
        let p = PointerId(1);
        let _ = s.handle_pointer(PointerEvent::Down { pointer: p });
        let _ = s.handle_pointer(PointerEvent::Move { pointer: p, dx: 99.0 });
        let _ = s.handle_pointer(PointerEvent::Up { pointer: p });

        let events = ticked_to_completion(&mut s);
        assert!(events.is_empty(), "settle-back must not emit a swipe");
        assert_eq!(s.offset(), 0.0);
        assert_eq!(s.phase(), SessionPhase::Idle);
    }

    #[test]
    fn exact_threshold_at_release_swipes_left() {
        let mut s = DragSession::new(CONFIG);
        let p = PointerId(1);
        let _ = s.handle_pointer(PointerEvent::Down { pointer: p });
        let ev = s.handle_pointer(PointerEvent::Move { pointer: p, dx: -100.0 });
        assert_eq!(ev, vec![GestureEvent::LeftThresholdReached]);
        let _ = s.handle_pointer(PointerEvent::Up { pointer: p });
        let events = ticked_to_completion(&mut s);
        assert_eq!(events, vec![GestureEvent::SwipeLeft]);
        assert_eq!(s.offset(), 0.0);
    }

    #[test]
    fn cancel_behaves_like_release() {
        let mut s = DragSession::new(CONFIG);
        let p = PointerId(1);
        let _ = s.handle_pointer(PointerEvent::Down { pointer: p });
        let _ = s.handle_pointer(PointerEvent::Move { pointer: p, dx: 150.0 });
        let _ = s.handle_pointer(PointerEvent::Cancel { pointer: p });
        let events = ticked_to_completion(&mut s);
        assert_eq!(events, vec![GestureEvent::SwipeRight]);
    }

    #[test]
    fn only_the_first_pointer_is_tracked() {
        let mut s = DragSession::new(CONFIG);
        let first = PointerId(1);
        let second = PointerId(2);
        let _ = s.handle_pointer(PointerEvent::Down { pointer: first });
        // A second down and its moves are ignored entirely.
        assert!(s.handle_pointer(PointerEvent::Down { pointer: second }).is_empty());
        assert!(
            s.handle_pointer(PointerEvent::Move { pointer: second, dx: 500.0 })
                .is_empty()
        );
        assert_eq!(s.offset(), 0.0);
        // The foreign pointer lifting does not end the session.
        let _ = s.handle_pointer(PointerEvent::Up { pointer: second });
        assert_eq!(s.phase(), SessionPhase::Dragging);
        // The captured pointer still drives the session.
        let ev = s.handle_pointer(PointerEvent::Move { pointer: first, dx: 120.0 });
        assert_eq!(ev, vec![GestureEvent::RightThresholdReached]);
    }

    #[test]
    fn down_during_settle_resumes_from_frozen_offset() {
        let mut s = DragSession::new(CONFIG);
        let p = PointerId(1);
        let _ = s.handle_pointer(PointerEvent::Down { pointer: p });
        let _ = s.handle_pointer(PointerEvent::Move { pointer: p, dx: 150.0 });
        let _ = s.handle_pointer(PointerEvent::Up { pointer: p });

        // Advance the fly-off partway.
        let _ = s.tick(0);
        let _ = s.tick(75_000_000);
        let frozen = s.offset();
        assert!(frozen > 150.0 && frozen < 600.0);

        // A fresh down cancels the animation; the drag resumes mid-flight.
        let _ = s.handle_pointer(PointerEvent::Down { pointer: p });
        assert_eq!(s.phase(), SessionPhase::Dragging);
        assert_eq!(s.offset(), frozen);

        // The cancelled fly-off's terminal event never fires.
        assert_eq!(s.tick(1_000_000_000), None);

        // Dragging back inside the threshold and releasing settles silently.
        let _ = s.handle_pointer(PointerEvent::Move { pointer: p, dx: -frozen + 10.0 });
        let _ = s.handle_pointer(PointerEvent::Up { pointer: p });
        let events = ticked_to_completion(&mut s);
        assert!(events.is_empty());
        assert_eq!(s.offset(), 0.0);
    }

    #[test]
    fn fresh_session_after_completion_starts_at_zero() {
        let mut s = DragSession::new(CONFIG);
        let p = PointerId(1);
        let _ = s.handle_pointer(PointerEvent::Down { pointer: p });
        let _ = s.handle_pointer(PointerEvent::Move { pointer: p, dx: 200.0 });
        let _ = s.handle_pointer(PointerEvent::Up { pointer: p });
        let _ = ticked_to_completion(&mut s);
        assert_eq!(s.offset(), 0.0);

        let _ = s.handle_pointer(PointerEvent::Down { pointer: p });
        assert_eq!(s.offset(), 0.0);
    }

    // The fly-off travels the full distance while animating, but a completed
    // session never leaves the departed card's offset behind for the next one.
    #[test]
    fn completed_fly_off_does_not_leak_its_offset() {
        let mut s = DragSession::new(CONFIG);
        let p = PointerId(1);
        let _ = s.handle_pointer(PointerEvent::Down { pointer: p });
        let _ = s.handle_pointer(PointerEvent::Move { pointer: p, dx: 150.0 });
        let _ = s.handle_pointer(PointerEvent::Up { pointer: p });

        let _ = s.tick(0);
        let mid = s.tick(75_000_000);
        assert_eq!(mid, None);
        assert!(s.offset() > 150.0, "mid-flight offset moves toward the target");

        let terminal = s.tick(RELEASE_ANIMATION_MILLIS * 1_000_000);
        assert_eq!(terminal, Some(GestureEvent::SwipeRight));
        assert_eq!(s.offset(), 0.0, "the swiped card took its offset with it");
        assert_eq!(s.phase(), SessionPhase::Idle);
    }

    #[test]
    fn external_swipe_uses_longer_animation_then_emits() {
        let mut s = DragSession::new(CONFIG);
        s.request_swipe(SwipeDirection::Right).unwrap();
        assert_eq!(s.phase(), SessionPhase::Settling);

        // Still in flight at the organic-release duration.
        let _ = s.tick(0);
        assert_eq!(s.tick(RELEASE_ANIMATION_MILLIS * 1_000_000), None);
        assert_eq!(s.phase(), SessionPhase::Settling);

        // Completes at the external duration and returns to rest.
        let ev = s.tick(EXTERNAL_SWIPE_MILLIS * 1_000_000);
        assert_eq!(ev, Some(GestureEvent::SwipeRight));
        assert_eq!(s.offset(), 0.0);
    }

    #[test]
    fn external_swipe_none_is_a_noop() {
        let mut s = DragSession::new(CONFIG);
        assert_eq!(s.request_swipe(SwipeDirection::None), Ok(()));
        assert_eq!(s.phase(), SessionPhase::Idle);
    }

    #[test]
    fn external_swipe_while_busy_is_rejected() {
        let mut s = DragSession::new(CONFIG);
        let p = PointerId(1);
        let _ = s.handle_pointer(PointerEvent::Down { pointer: p });
        assert_eq!(s.request_swipe(SwipeDirection::Left), Err(SessionError::Busy));
        let _ = s.handle_pointer(PointerEvent::Up { pointer: p });
        assert_eq!(s.request_swipe(SwipeDirection::Left), Err(SessionError::Busy));
        // None stays a no-op even while busy.
        assert_eq!(s.request_swipe(SwipeDirection::None), Ok(()));
    }

    #[test]
    fn moves_outside_a_drag_are_ignored() {
        let mut s = DragSession::new(CONFIG);
        let p = PointerId(1);
        assert!(s.handle_pointer(PointerEvent::Move { pointer: p, dx: 50.0 }).is_empty());
        assert!(s.handle_pointer(PointerEvent::Up { pointer: p }).is_empty());
        assert_eq!(s.phase(), SessionPhase::Idle);
        assert_eq!(s.offset(), 0.0);
    }

    #[test]
    fn ticks_are_ignored_while_idle_or_dragging() {
        let mut s = DragSession::new(CONFIG);
        assert_eq!(s.tick(123), None);
        let _ = s.handle_pointer(PointerEvent::Down { pointer: PointerId(1) });
        assert_eq!(s.tick(456), None);
        assert_eq!(s.phase(), SessionPhase::Dragging);
    }
}
