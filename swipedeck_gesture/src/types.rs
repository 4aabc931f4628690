// Copyright 2025 the Swipedeck Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types for gesture sessions: pointers, events, directions, and config.

/// Opaque identifier for a pointer (finger, stylus, mouse button).
///
/// The session captures the first pointer that goes down and ignores every
/// other id until that session ends. The meaning of the inner value is up to
/// the host; the session only compares ids for equality.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct PointerId(pub u64);

/// A pointer input event, as delivered by the host input pipeline.
///
/// Only horizontal motion is modeled; `dx` is the position delta since the
/// previous move of the same pointer, in physical pixels.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PointerEvent {
    /// A pointer made contact.
    Down {
        /// The pointer that went down.
        pointer: PointerId,
    },
    /// A captured or foreign pointer moved.
    Move {
        /// The pointer that moved.
        pointer: PointerId,
        /// Horizontal position delta since its previous move, in pixels.
        dx: f64,
    },
    /// A pointer lifted.
    Up {
        /// The pointer that lifted.
        pointer: PointerId,
    },
    /// The host cancelled the pointer stream (e.g. the gesture was stolen).
    ///
    /// Treated exactly like [`PointerEvent::Up`]: the release decision still
    /// runs against the offset accumulated so far.
    Cancel {
        /// The pointer that was cancelled.
        pointer: PointerId,
    },
}

/// Direction of a programmatic swipe request.
///
/// `None` means "no swipe requested" and makes
/// [`DragSession::request_swipe`](crate::session::DragSession::request_swipe)
/// a no-op, so hosts can store a direction in state and feed it through
/// unconditionally.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum SwipeDirection {
    /// Fly the card off to the left.
    Left,
    /// Fly the card off to the right.
    Right,
    /// No swipe in progress.
    #[default]
    None,
}

/// An event produced by a gesture session.
///
/// Threshold classifications are emitted synchronously from
/// [`DragSession::handle_pointer`](crate::session::DragSession::handle_pointer)
/// on every move — repeats included. Terminal swipe events are emitted from
/// [`DragSession::tick`](crate::session::DragSession::tick) only after the
/// fly-off animation completes.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum GestureEvent {
    /// The drag offset is at or past the left threshold.
    LeftThresholdReached,
    /// The drag offset is at or past the right threshold.
    RightThresholdReached,
    /// The drag offset is inside both thresholds.
    NoThresholdReached,
    /// A leftward fly-off animation completed.
    SwipeLeft,
    /// A rightward fly-off animation completed.
    SwipeRight,
}

/// Distances that parameterize a session, in physical pixels.
///
/// Typically derived from the viewport via `swipedeck_geometry`:
/// `swipe_threshold` and `offscreen_target`. Both are cosmetic quantities; a
/// zero threshold merely means every release counts as a swipe.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct SwipeConfig {
    /// Drag distance beyond which a release becomes a swipe.
    pub threshold: f64,
    /// Offset magnitude a fly-off animates to.
    pub offscreen_target: f64,
}

/// Errors from programmatic swipe requests.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum SessionError {
    /// A drag or settle animation is already in flight.
    Busy,
}

impl core::fmt::Display for SessionError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Busy => write!(f, "a gesture session is already in flight"),
        }
    }
}

impl core::error::Error for SessionError {}
