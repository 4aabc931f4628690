// Copyright 2025 the Swipedeck Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-slot scale and lift for the layered stack illusion.
//!
//! ## Overview
//!
//! Stack slots are indexed from the front: slot 0 is the interactive card,
//! higher slots recede behind it. Each slot shrinks by
//! [`SLOT_SCALE_FACTOR`] relative to the previous one and lifts upward by a
//! fixed per-slot amount plus a correction that compensates for the scale
//! transform's implicit re-centering, so cards stack against a consistent
//! visual anchor instead of drifting with their shrinking bounding boxes.
//!
//! Slots beyond the last visible one reuse the last visible slot's geometry;
//! they still render, stacked invisibly at the back, so removal of the front
//! card lets every survivor animate into its new slot.

/// Ratio between a slot's scale and the scale of the slot in front of it.
pub const SLOT_SCALE_FACTOR: f64 = 0.9;

/// Lift table in density-independent units, tuned for a four-card stack.
const BASE_LIFT: [f64; 4] = [0.0, -16.0, -28.0, -36.0];

/// Scale factor for a stack slot: `0.9^slot`.
///
/// Computed by repeated multiplication so the crate stays free of `std` float
/// intrinsics; slot indices are small by construction.
pub fn slot_scale(slot: usize) -> f64 {
    let mut scale = 1.0;
    for _ in 0..slot {
        scale *= SLOT_SCALE_FACTOR;
    }
    scale
}

/// Fixed vertical lift (density-independent units) for a stack slot.
///
/// Slots past the end of the table reuse the last entry.
pub fn base_lift(slot: usize) -> f64 {
    BASE_LIFT[slot.min(BASE_LIFT.len() - 1)]
}

/// Total vertical lift for a slot, given the card height in the same units.
///
/// Combines [`base_lift`] with `-card_height * (1 - 0.9^slot) / 2`: scaling a
/// card about its center pulls its top edge down by half the lost height, and
/// this correction cancels that drift.
pub fn slot_lift(card_height: f64, slot: usize) -> f64 {
    base_lift(slot) - card_height * (1.0 - slot_scale(slot)) / 2.0
}

/// Clamp a card index to the last visible slot.
///
/// Cards past `visible_count - 1` share the back slot's geometry. A
/// `visible_count` of zero is degenerate and maps everything to slot 0.
pub fn capped_slot(index: usize, visible_count: usize) -> usize {
    index.min(visible_count.saturating_sub(1))
}
