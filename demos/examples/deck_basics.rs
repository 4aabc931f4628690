// Copyright 2025 the Swipedeck Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Deck basics.
//!
//! This minimal example builds a keyed deck, lays out the stack slots, and
//! prints each card's geometry and transform.
//!
//! Run:
//! - `cargo run -p swipedeck_demos --example deck_basics`

use kurbo::Size;
use swipedeck_deck::{Deck, DeckViewModel, SlotFlags, StackLayout};

fn main() {
    let deck: Deck<&str> = ["one", "two", "three", "four", "five", "six"]
        .into_iter()
        .collect();
    let vm = DeckViewModel::new(deck);

    let layout = StackLayout {
        visible_count: 4,
        card_height: 220.0,
        ..Default::default()
    };
    let density = 2.0;
    let card_size = Size::new(300.0 * density, 220.0 * density);

    println!("== Stack slots (front to back) ==");
    for slot in layout.slots(vm.deck(), 0.0) {
        let interactive = slot.flags.contains(SlotFlags::INTERACTIVE);
        println!(
            "  {:?} slot={} z={} scale={:.3} lift={:+.1}dip interactive={}",
            slot.key, slot.slot, slot.z_order, slot.scale, slot.lift, interactive
        );
        println!("    transform: {:?}", slot.transform(card_size, density));
    }
}
