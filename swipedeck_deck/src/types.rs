// Copyright 2025 the Swipedeck Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the deck: card keys, slot flags, highlights, errors.

use bitflags::bitflags;

/// Stable identity of a card within a deck.
///
/// Keys are assigned by [`Deck::push`](crate::deck::Deck::push) from a
/// monotonically increasing counter and are never reused, so a key stays
/// unique for the lifetime of the deck. Hosts use keys to carry animation
/// state across list mutations: when the front card is removed, each
/// surviving card keeps its key and can animate into its new slot instead of
/// popping.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct CardKey(pub(crate) u64);

bitflags! {
    /// Slot flags controlling rendering and interactivity.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct SlotFlags: u8 {
        /// Slot renders (every slot does; there is no virtualization cutoff).
        const VISIBLE     = 0b0000_0001;
        /// Slot is wired to the drag session. Only the front slot carries this.
        const INTERACTIVE = 0b0000_0010;
    }
}

impl Default for SlotFlags {
    fn default() -> Self {
        Self::VISIBLE
    }
}

/// Highlight state of the front card while a drag is in progress.
///
/// Recomputed on every drag move and reset to [`Highlight::Neutral`] when a
/// session ends or the next card becomes front. Hosts map the variants to
/// whatever visual marker they use (the archetypal mapping is a neutral,
/// "reject", and "accept" card color).
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum Highlight {
    /// The drag offset is inside both thresholds, or no drag is in progress.
    #[default]
    Neutral,
    /// The drag offset is at or past the left threshold.
    Left,
    /// The drag offset is at or past the right threshold.
    Right,
}

impl Highlight {
    /// Descriptive label for the highlight.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Neutral => "",
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

/// Screen metrics a stack derives its swipe distances from.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Viewport {
    /// Screen width in density-independent units.
    pub width_dip: f64,
    /// Physical pixels per density-independent unit.
    pub density: f64,
}

/// Errors from deck mutations.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum DeckError {
    /// The deck has no cards left to remove.
    Empty,
}

impl core::fmt::Display for DeckError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Empty => write!(f, "cannot remove the front card of an empty deck"),
        }
    }
}

impl core::error::Error for DeckError {}
