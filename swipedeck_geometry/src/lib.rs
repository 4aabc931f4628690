// Copyright 2025 the Swipedeck Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Swipedeck Geometry: pure math for a swipeable card deck.
//!
//! This crate is the arithmetic layer under the deck: it knows how far a drag
//! must travel before a release becomes a swipe, where "fully off screen" is,
//! and how each stacked card shrinks and lifts behind the front card.
//!
//! - [`swipe`] — swipe thresholds, off-screen targets, and drag rotation,
//!   all derived from screen width and a density scale factor.
//! - [`slot`] — per-slot scale and vertical lift for the layered stack
//!   illusion, with geometry capped at the last visible slot.
//!
//! Everything here is a pure function of its inputs. Inputs are cosmetic UI
//! values, so out-of-range arguments degrade to zeros instead of erroring;
//! there is no failure path in this crate.
//!
//! # Example
//!
//! ```rust
//! use swipedeck_geometry::{swipe_threshold, offscreen_target, slot_scale};
//!
//! // A 360dp-wide screen at 3x density with the default threshold fraction.
//! let threshold = swipe_threshold(360.0, 3.0, swipedeck_geometry::DEFAULT_THRESHOLD_FRACTION);
//! assert!((threshold - 360.0 * 3.0 * 0.33).abs() < 1e-9);
//!
//! // The off-screen target always clears the threshold.
//! assert!(offscreen_target(360.0, 3.0) > threshold);
//!
//! // Each card behind the front shrinks by 10%.
//! assert_eq!(slot_scale(0), 1.0);
//! assert_eq!(slot_scale(1), 0.9);
//! ```
//!
//! This crate is `no_std` and has no dependencies.

#![no_std]

pub mod slot;
pub mod swipe;

pub use slot::{SLOT_SCALE_FACTOR, base_lift, capped_slot, slot_lift, slot_scale};
pub use swipe::{
    DEFAULT_ROTATION_INVERSE_RATIO, DEFAULT_THRESHOLD_FRACTION, OFFSCREEN_FACTOR, offscreen_target,
    rotation_degrees, swipe_threshold,
};
