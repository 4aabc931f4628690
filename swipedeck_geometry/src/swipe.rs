// Copyright 2025 the Swipedeck Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Swipe thresholds, off-screen targets, and drag rotation.
//!
//! ## Overview
//!
//! All quantities are horizontal distances in physical pixels, derived from a
//! density-independent screen width and a density scale factor. A drag whose
//! final offset magnitude meets [`swipe_threshold`] flies off toward
//! [`offscreen_target`]; anything shorter settles back to rest.
//!
//! Inputs are cosmetic. Non-positive widths, densities, or fractions clamp
//! the result to `0.0` rather than erroring.

/// Fraction of the screen width a drag must cover to count as a swipe.
pub const DEFAULT_THRESHOLD_FRACTION: f64 = 0.33;

/// Multiple of the screen width used as the fly-off target.
///
/// Two screen widths guarantees the card's travel distance exceeds any normal
/// screen bound regardless of where the drag released.
pub const OFFSCREEN_FACTOR: f64 = 2.0;

/// Default inverse ratio between drag offset and card rotation.
///
/// Higher values rotate less; at `1.0` the card rotates one degree per pixel.
pub const DEFAULT_ROTATION_INVERSE_RATIO: f64 = 60.0;

/// Horizontal drag distance (px) beyond which a release triggers a swipe.
///
/// `width_dip` is the density-independent screen width and `density` the
/// physical-pixels-per-dip scale factor. Returns
/// `width_dip * density * fraction`, or `0.0` when any input is non-positive.
pub fn swipe_threshold(width_dip: f64, density: f64, fraction: f64) -> f64 {
    if width_dip <= 0.0 || density <= 0.0 || fraction <= 0.0 {
        return 0.0;
    }
    width_dip * density * fraction
}

/// Offset magnitude (px) guaranteed to move a card fully off screen.
///
/// Returns `width_dip * density * 2`, or `0.0` when either input is
/// non-positive. Always at least [`swipe_threshold`] for the same inputs
/// (fractions above `2.0` make no sense and are not defended against).
pub fn offscreen_target(width_dip: f64, density: f64) -> f64 {
    if width_dip <= 0.0 || density <= 0.0 {
        return 0.0;
    }
    width_dip * density * OFFSCREEN_FACTOR
}

/// Tilt (degrees) of the front card for a given drag offset.
///
/// The card rotates in the drag direction by `offset_px / inverse_ratio`
/// degrees. A non-positive `inverse_ratio` disables rotation entirely.
pub fn rotation_degrees(offset_px: f64, inverse_ratio: f64) -> f64 {
    if inverse_ratio <= 0.0 {
        return 0.0;
    }
    offset_px / inverse_ratio
}
