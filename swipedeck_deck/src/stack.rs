// Copyright 2025 the Swipedeck Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The card stack controller: one deck, one drag session, one viewport.
//!
//! ## Overview
//!
//! [`CardStack`] is the assembled widget model. It derives the session's
//! swipe distances from the viewport, feeds pointer events and frame ticks
//! into the front card's [`DragSession`], and dispatches the resulting
//! gesture events into the [`DeckViewModel`]. Hosts render from
//! [`CardStack::slots`] and [`CardStack::state`].
//!
//! Only the front card is interactive; when the deck is empty, pointer
//! input and swipe requests are inert.

use alloc::vec::Vec;

use swipedeck_gesture::handler::dispatch;
use swipedeck_gesture::session::DragSession;
use swipedeck_gesture::types::{PointerEvent, SessionError, SwipeConfig, SwipeDirection};
use swipedeck_geometry::{DEFAULT_THRESHOLD_FRACTION, offscreen_target, swipe_threshold};

use crate::layout::{SlotGeometry, StackLayout};
use crate::state::{DeckState, DeckViewModel};
use crate::types::Viewport;

/// A swipeable card stack bound to a viewport.
#[derive(Clone, Debug)]
pub struct CardStack<T: Clone> {
    view_model: DeckViewModel<T>,
    session: DragSession,
    layout: StackLayout,
    viewport: Viewport,
    threshold_fraction: f64,
}

impl<T: Clone> CardStack<T> {
    /// Create a stack with the default threshold fraction.
    pub fn new(view_model: DeckViewModel<T>, viewport: Viewport, layout: StackLayout) -> Self {
        Self::with_threshold_fraction(view_model, viewport, layout, DEFAULT_THRESHOLD_FRACTION)
    }

    /// Create a stack with an explicit threshold fraction of the screen width.
    pub fn with_threshold_fraction(
        view_model: DeckViewModel<T>,
        viewport: Viewport,
        layout: StackLayout,
        threshold_fraction: f64,
    ) -> Self {
        let session = DragSession::new(swipe_config(viewport, threshold_fraction));
        Self {
            view_model,
            session,
            layout,
            viewport,
            threshold_fraction,
        }
    }

    /// The current presentation snapshot.
    pub fn state(&self) -> &DeckState<T> {
        self.view_model.state()
    }

    /// The drag session, for rendering the front card's offset or phase.
    pub fn session(&self) -> &DragSession {
        &self.session
    }

    /// Update the viewport, rederiving the session's swipe distances.
    ///
    /// An animation already in flight keeps its original target.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.session
            .set_config(swipe_config(viewport, self.threshold_fraction));
    }

    /// Feed a pointer event into the front card's session.
    ///
    /// Classification events dispatch into the view model synchronously, in
    /// the order the session produced them. Inert when the deck is empty.
    pub fn pointer(&mut self, event: PointerEvent) {
        if self.view_model.deck().is_empty() {
            return;
        }
        let events = self.session.handle_pointer(event);
        dispatch(&events, &mut self.view_model);
    }

    /// Advance animations to `frame_time_nanos`.
    ///
    /// When a fly-off completes, the terminal swipe event dispatches into the
    /// view model here — strictly after the animation, never before.
    pub fn tick(&mut self, frame_time_nanos: u64) {
        if let Some(event) = self.session.tick(frame_time_nanos) {
            dispatch(&[event], &mut self.view_model);
        }
    }

    /// Programmatically swipe the front card off screen.
    ///
    /// Uses the longer external-swipe animation. A no-op when the deck is
    /// empty or the direction is [`SwipeDirection::None`]; fails with
    /// [`SessionError::Busy`] while a gesture is in flight.
    pub fn request_swipe(&mut self, direction: SwipeDirection) -> Result<(), SessionError> {
        if self.view_model.deck().is_empty() {
            return Ok(());
        }
        self.session.request_swipe(direction)
    }

    /// Slot geometry for every card, front to back.
    pub fn slots(&self) -> Vec<SlotGeometry> {
        self.layout
            .slots(self.view_model.deck(), self.session.offset())
    }
}

fn swipe_config(viewport: Viewport, fraction: f64) -> SwipeConfig {
    SwipeConfig {
        threshold: swipe_threshold(viewport.width_dip, viewport.density, fraction),
        offscreen_target: offscreen_target(viewport.width_dip, viewport.density),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Highlight;
    use alloc::vec;
    use swipedeck_gesture::session::SessionPhase;
    use swipedeck_gesture::types::PointerId;

    const VIEWPORT: Viewport = Viewport {
        width_dip: 100.0,
        density: 1.0,
    };

    fn stack(cards: &[&'static str]) -> CardStack<&'static str> {
        let vm = DeckViewModel::new(cards.iter().copied().collect());
        // threshold = 33 px, offscreen = 200 px
        CardStack::new(vm, VIEWPORT, StackLayout::default())
    }

    fn run_to_idle(stack: &mut CardStack<&'static str>) {
        for frame in 0..64 {
            stack.tick(frame * 16_000_000);
            if stack.session().phase() == SessionPhase::Idle {
                break;
            }
        }
    }

    #[test]
    fn drag_past_threshold_swipes_and_shifts_the_deck() {
        let mut s = stack(&["a", "b", "c", "d", "e"]);
        let p = PointerId(1);
        s.pointer(PointerEvent::Down { pointer: p });
        s.pointer(PointerEvent::Move { pointer: p, dx: 34.0 });
        assert_eq!(s.state().highlight, Highlight::Right);

        s.pointer(PointerEvent::Up { pointer: p });
        // Nothing changes until the fly-off completes.
        assert_eq!(s.state().cards, vec!["a", "b", "c", "d", "e"]);

        run_to_idle(&mut s);
        assert_eq!(s.state().cards, vec!["b", "c", "d", "e"]);
        assert_eq!(s.state().highlight, Highlight::Neutral);
    }

    #[test]
    fn short_drag_settles_without_mutating_the_deck() {
        let mut s = stack(&["a", "b"]);
        let p = PointerId(1);
        s.pointer(PointerEvent::Down { pointer: p });
        s.pointer(PointerEvent::Move { pointer: p, dx: 20.0 });
        assert_eq!(s.state().highlight, Highlight::Neutral);
        s.pointer(PointerEvent::Up { pointer: p });
        run_to_idle(&mut s);
        assert_eq!(s.state().cards, vec!["a", "b"]);
        assert_eq!(s.session().offset(), 0.0);
    }

    #[test]
    fn external_swipe_right_animates_then_shifts() {
        let mut s = stack(&["a", "b", "c"]);
        s.request_swipe(SwipeDirection::Right).unwrap();
        assert_eq!(s.state().cards, vec!["a", "b", "c"]);

        // Completes only after the longer external duration.
        s.tick(0);
        s.tick(150 * 1_000_000);
        assert_eq!(s.state().cards, vec!["a", "b", "c"]);
        s.tick(400 * 1_000_000);
        assert_eq!(s.state().cards, vec!["b", "c"]);
        assert_eq!(s.state().highlight, Highlight::Neutral);
    }

    #[test]
    fn empty_stack_ignores_input_and_requests() {
        let mut s = stack(&[]);
        let p = PointerId(1);
        s.pointer(PointerEvent::Down { pointer: p });
        s.pointer(PointerEvent::Move { pointer: p, dx: 100.0 });
        assert_eq!(s.session().phase(), SessionPhase::Idle);
        assert_eq!(s.request_swipe(SwipeDirection::Left), Ok(()));
        assert!(s.state().cards.is_empty());
    }

    #[test]
    fn viewport_change_rescales_the_threshold() {
        let mut s = stack(&["a"]);
        assert_eq!(s.session().config().threshold, 33.0);
        s.set_viewport(Viewport {
            width_dip: 100.0,
            density: 2.0,
        });
        assert_eq!(s.session().config().threshold, 66.0);
        assert_eq!(s.session().config().offscreen_target, 400.0);
    }

    #[test]
    fn front_slot_rests_after_a_completed_swipe() {
        let mut s = stack(&["a", "b", "c"]);
        let p = PointerId(1);
        s.pointer(PointerEvent::Down { pointer: p });
        s.pointer(PointerEvent::Move { pointer: p, dx: 34.0 });
        s.pointer(PointerEvent::Up { pointer: p });
        run_to_idle(&mut s);
        assert_eq!(s.state().cards, vec!["b", "c"]);

        // The swiped card took its drag offset and tilt with it; the card
        // that shifted into the front slot renders in place.
        let slots = s.slots();
        assert_eq!(slots[0].drag_offset, 0.0, "the new front card starts at rest");
        assert_eq!(slots[0].rotation, 0.0);
        assert_eq!(s.session().offset(), 0.0);
    }

    #[test]
    fn slots_follow_the_drag_offset() {
        let mut s = stack(&["a", "b"]);
        let p = PointerId(1);
        s.pointer(PointerEvent::Down { pointer: p });
        s.pointer(PointerEvent::Move { pointer: p, dx: 12.0 });
        let slots = s.slots();
        assert_eq!(slots[0].drag_offset, 12.0);
        assert_eq!(slots[1].drag_offset, 0.0);
    }
}
