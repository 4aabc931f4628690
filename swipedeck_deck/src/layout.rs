// Copyright 2025 the Swipedeck Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stack-slot layout: z-order, scale, lift, and transforms per card.
//!
//! ## Overview
//!
//! [`StackLayout`] turns a deck into per-card [`SlotGeometry`]: the front
//! card at full size, each card behind it scaled by 0.9 relative to its
//! predecessor and lifted toward a shared visual anchor. Geometry is capped
//! at the last visible slot — cards past it still render (there is no
//! virtualization cutoff, which callers must not assume is performant for
//! large decks) but share the back slot's geometry, so they are visually
//! indistinguishable until cards ahead of them are swiped away.
//!
//! Only the front slot carries the drag offset, rotation, and the
//! [`SlotFlags::INTERACTIVE`] flag; every other slot is decorative.

use alloc::vec::Vec;
use kurbo::{Affine, Point, Size, Vec2};

use swipedeck_geometry::{
    DEFAULT_ROTATION_INVERSE_RATIO, capped_slot, rotation_degrees, slot_lift, slot_scale,
};

use crate::deck::Deck;
use crate::types::{CardKey, SlotFlags};

/// Layout parameters for a card stack.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct StackLayout {
    /// How many slots get distinct geometry. Cards past `visible_count - 1`
    /// reuse the last slot's geometry.
    pub visible_count: usize,
    /// Card height in density-independent units, used for the lift's
    /// re-centering correction. Zero disables the correction.
    pub card_height: f64,
    /// Inverse ratio between the front card's drag offset and its tilt.
    pub rotation_inverse_ratio: f64,
}

impl Default for StackLayout {
    fn default() -> Self {
        Self {
            visible_count: 4,
            card_height: 0.0,
            rotation_inverse_ratio: DEFAULT_ROTATION_INVERSE_RATIO,
        }
    }
}

impl StackLayout {
    /// Compute slot geometry for every card in the deck, front to back.
    ///
    /// `drag_offset_px` is the front card's current horizontal offset (from
    /// the drag session); it lands on slot 0 only. All cards are returned —
    /// re-keyed by card identity so hosts can animate survivors into their
    /// new slots after a removal.
    pub fn slots<T>(&self, deck: &Deck<T>, drag_offset_px: f64) -> Vec<SlotGeometry> {
        let len = deck.len();
        deck.iter()
            .enumerate()
            .map(|(index, (key, _))| {
                let slot = capped_slot(index, self.visible_count);
                let front = index == 0;
                let flags = if front {
                    SlotFlags::VISIBLE | SlotFlags::INTERACTIVE
                } else {
                    SlotFlags::VISIBLE
                };
                SlotGeometry {
                    key,
                    index,
                    slot,
                    z_order: len - index,
                    scale: slot_scale(slot),
                    lift: slot_lift(self.card_height, slot),
                    drag_offset: if front { drag_offset_px } else { 0.0 },
                    rotation: if front {
                        rotation_degrees(drag_offset_px, self.rotation_inverse_ratio)
                    } else {
                        0.0
                    },
                    flags,
                }
            })
            .collect()
    }
}

/// Rendering geometry for one card's slot.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SlotGeometry {
    /// Identity of the card occupying this slot.
    pub key: CardKey,
    /// Position of the card in the deck (0 is the front).
    pub index: usize,
    /// Geometry slot after capping at the last visible slot.
    pub slot: usize,
    /// Stacking order: `deck_len - index`, so the front card is topmost.
    pub z_order: usize,
    /// Uniform scale factor, `0.9^slot`.
    pub scale: f64,
    /// Vertical lift in density-independent units, including the
    /// re-centering correction.
    pub lift: f64,
    /// Horizontal drag offset in pixels. Non-zero only on the front slot.
    pub drag_offset: f64,
    /// Tilt in degrees. Non-zero only on the front slot while dragging.
    pub rotation: f64,
    /// Visibility and interactivity flags.
    pub flags: SlotFlags,
}

impl SlotGeometry {
    /// Compose the slot's transform for a card of `card_size` physical pixels.
    ///
    /// Scale and rotation pivot about the card's center (the lift correction
    /// assumes a center pivot); the drag offset and density-scaled lift apply
    /// last, in pixels.
    pub fn transform(&self, card_size: Size, density: f64) -> Affine {
        let center = Point::new(card_size.width / 2.0, card_size.height / 2.0);
        let radians = self.rotation * core::f64::consts::PI / 180.0;
        Affine::translate(Vec2::new(self.drag_offset, self.lift * density))
            * Affine::rotate_about(radians, center)
            * Affine::scale_about(self.scale, center)
    }
}
