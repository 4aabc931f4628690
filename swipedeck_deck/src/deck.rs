// Copyright 2025 the Swipedeck Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The keyed card list.
//!
//! ## Overview
//!
//! A [`Deck`] is an ordered sequence of cards, each paired with a
//! [`CardKey`](crate::types::CardKey) assigned at insertion. The front card
//! (index 0) is the only interactive one, and removal always happens at the
//! front via [`Deck::advance`]. Keys are never reused, which upholds the
//! uniqueness invariant the slot layout relies on.

use alloc::vec::Vec;

use crate::types::{CardKey, DeckError};

/// Ordered, keyed card list. The front card is index 0.
#[derive(Clone, Debug)]
pub struct Deck<T> {
    cards: Vec<(CardKey, T)>,
    next_key: u64,
}

impl<T> Default for Deck<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Deck<T> {
    /// Create an empty deck.
    pub fn new() -> Self {
        Self {
            cards: Vec::new(),
            next_key: 0,
        }
    }

    /// Append a card at the back and return its key.
    pub fn push(&mut self, item: T) -> CardKey {
        let key = CardKey(self.next_key);
        self.next_key += 1;
        self.cards.push((key, item));
        key
    }

    /// Append every card from an iterator, in order.
    pub fn extend<I: IntoIterator<Item = T>>(&mut self, items: I) {
        for item in items {
            let _ = self.push(item);
        }
    }

    /// Remove and return the front card.
    ///
    /// An empty deck is a precondition violation on the swipe path; this
    /// surfaces it as [`DeckError::Empty`] instead of panicking.
    pub fn advance(&mut self) -> Result<(CardKey, T), DeckError> {
        if self.cards.is_empty() {
            return Err(DeckError::Empty);
        }
        Ok(self.cards.remove(0))
    }

    /// The front card, if any.
    pub fn front(&self) -> Option<(CardKey, &T)> {
        self.cards.first().map(|(k, item)| (*k, item))
    }

    /// Number of cards in the deck.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the deck has no cards.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate the cards front-to-back with their keys.
    pub fn iter(&self) -> impl Iterator<Item = (CardKey, &T)> {
        self.cards.iter().map(|(k, item)| (*k, item))
    }
}

impl<T> FromIterator<T> for Deck<T> {
    fn from_iter<I: IntoIterator<Item = T>>(items: I) -> Self {
        let mut deck = Self::new();
        deck.extend(items);
        deck
    }
}
