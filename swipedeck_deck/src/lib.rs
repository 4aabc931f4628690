// Copyright 2025 the Swipedeck Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Swipedeck Deck: a keyed, swipeable card stack with layered slot layout.
//!
//! Swipedeck Deck assembles the widget model: an ordered, keyed card list, a
//! drag session wired to the front card, per-slot stack geometry, and a
//! replace-not-mutate presentation state holder.
//!
//! - [`Deck`]: the card list. Keys are deck-assigned, unique, and never
//!   reused, so hosts can animate cards across list mutations.
//! - [`StackLayout`] / [`SlotGeometry`]: decreasing scale and vertical lift
//!   per slot for the layered-stack illusion; only the front slot is
//!   interactive.
//! - [`DeckViewModel`] / [`DeckState`]: single-writer snapshots of
//!   `{cards, highlight}`; every change installs a whole new state value.
//! - [`CardStack`]: the assembled controller — viewport-derived thresholds,
//!   pointer and tick plumbing, and programmatic swipes.
//!
//! ## Not a renderer
//!
//! This crate computes geometry and state; it draws nothing and reads no
//! platform input. Hosts feed [`PointerEvent`](swipedeck_gesture::types::PointerEvent)s
//! and frame timestamps in, and render from [`CardStack::slots`] and
//! [`CardStack::state`] — typically keying their visual elements on
//! [`SlotGeometry::key`] so survivors animate into their new slots after a
//! swipe.
//!
//! ## Minimal usage
//!
//! ```
//! use swipedeck_deck::{CardStack, DeckViewModel, StackLayout, Viewport};
//! use swipedeck_gesture::types::{PointerEvent, PointerId};
//!
//! let vm = DeckViewModel::new(["one", "two", "three"].into_iter().collect());
//! let viewport = Viewport { width_dip: 100.0, density: 1.0 };
//! let mut stack = CardStack::new(vm, viewport, StackLayout::default());
//!
//! // Drag the front card past the threshold (33 px here) and release.
//! let p = PointerId(1);
//! stack.pointer(PointerEvent::Down { pointer: p });
//! stack.pointer(PointerEvent::Move { pointer: p, dx: 40.0 });
//! stack.pointer(PointerEvent::Up { pointer: p });
//!
//! // Tick frames until the fly-off completes; then the deck has advanced.
//! for frame in 0..32 {
//!     stack.tick(frame * 16_000_000);
//! }
//! assert_eq!(stack.state().cards, vec!["two", "three"]);
//! ```
//!
//! This crate is `no_std` capable: disable default features and enable
//! `libm` to forward Kurbo's `no_std` math.

#![no_std]

extern crate alloc;

pub mod deck;
pub mod layout;
pub mod stack;
pub mod state;
pub mod types;

pub use deck::Deck;
pub use layout::{SlotGeometry, StackLayout};
pub use stack::CardStack;
pub use state::{DeckState, DeckViewModel};
pub use types::{CardKey, DeckError, Highlight, SlotFlags, Viewport};
