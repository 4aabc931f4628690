// Copyright 2025 the Swipedeck Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Presentation state: immutable snapshots and the view model behind them.
//!
//! ## Overview
//!
//! [`DeckViewModel`] owns the deck and the current UI state and implements
//! the [`SwipeHandler`] capability set. Every transition replaces the whole
//! [`DeckState`] snapshot — never a field in place — so readers always
//! observe a consistent `{cards, highlight}` pair, and the bumped revision
//! tells them something changed. This is single-writer, multi-reader by
//! construction: the view model is the only writer, and readers clone or
//! borrow whole snapshots.
//!
//! Threshold classifications arrive on every drag move, repeats included;
//! the view model republishes only when the highlight actually changes, so
//! observers keyed on the revision are not spammed.

use alloc::vec::Vec;

use swipedeck_gesture::handler::SwipeHandler;

use crate::deck::Deck;
use crate::types::Highlight;

/// An immutable snapshot of the deck's presentation state.
#[derive(Clone, Debug, PartialEq)]
pub struct DeckState<T> {
    /// The cards, front first.
    pub cards: Vec<T>,
    /// Highlight of the front card.
    pub highlight: Highlight,
    /// Monotonic change counter. Strictly increases with each new snapshot.
    pub revision: u64,
}

/// Owns the card list and UI state; reacts to gesture events.
///
/// ## Usage
///
/// - Construct with [`DeckViewModel::new`] from a populated
///   [`Deck`](crate::deck::Deck).
/// - Wire it to a drag session as its [`SwipeHandler`] (or let
///   [`CardStack`](crate::stack::CardStack) do the wiring).
/// - Read [`DeckViewModel::state`] each frame; compare
///   [`DeckState::revision`] to skip unchanged frames.
#[derive(Clone, Debug)]
pub struct DeckViewModel<T: Clone> {
    deck: Deck<T>,
    state: DeckState<T>,
}

impl<T: Clone> DeckViewModel<T> {
    /// Create a view model over `deck` with a neutral highlight.
    pub fn new(deck: Deck<T>) -> Self {
        let state = DeckState {
            cards: deck.iter().map(|(_, c)| c.clone()).collect(),
            highlight: Highlight::Neutral,
            revision: 0,
        };
        Self { deck, state }
    }

    /// The current snapshot.
    pub fn state(&self) -> &DeckState<T> {
        &self.state
    }

    /// The underlying keyed deck (for layout).
    pub fn deck(&self) -> &Deck<T> {
        &self.deck
    }

    /// Build and install a fresh snapshot.
    fn publish(&mut self, highlight: Highlight) {
        self.state = DeckState {
            cards: self.deck.iter().map(|(_, c)| c.clone()).collect(),
            highlight,
            revision: self.state.revision + 1,
        };
    }

    /// Set the highlight, publishing only if it differs from the current one.
    fn set_highlight(&mut self, highlight: Highlight) {
        if self.state.highlight != highlight {
            self.publish(highlight);
        }
    }

    /// Drop the front card and reset the highlight.
    ///
    /// A swipe completion on an empty deck violates the session's
    /// precondition; it is absorbed as a guarded no-op (the highlight still
    /// resets) because the capability methods have no error channel. Direct
    /// callers who need the signal use [`Deck::advance`].
    fn complete_swipe(&mut self) {
        match self.deck.advance() {
            Ok(_) => self.publish(Highlight::Neutral),
            Err(_) => self.set_highlight(Highlight::Neutral),
        }
    }
}

impl<T: Clone> SwipeHandler for DeckViewModel<T> {
    fn on_swipe_right(&mut self) {
        self.complete_swipe();
    }

    fn on_swipe_left(&mut self) {
        self.complete_swipe();
    }

    fn on_right_threshold_reached(&mut self) {
        self.set_highlight(Highlight::Right);
    }

    fn on_left_threshold_reached(&mut self) {
        self.set_highlight(Highlight::Left);
    }

    fn on_no_threshold_reached(&mut self) {
        self.set_highlight(Highlight::Neutral);
    }
}
