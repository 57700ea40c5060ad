use std::cell::RefCell;
use std::rc::{Rc, Weak};

use swipedeck_animation::{Animatable, AnimationEnd};
use swipedeck_core::RuntimeHandle;
use swipedeck_foundation::{DragGesture, DragUpdate, PointerEvent, PointerEventKind};
use swipedeck_ui_graphics::Point;

use crate::config::DeckConfig;
use crate::error::DeckError;
use crate::item::DeckItem;
use crate::outcome::{SwipeDirection, SwipeOutcome};
use crate::props::DeckProps;
use crate::render::{build_frame, DeckFrame};
use crate::state::{DeckPhase, DeckSnapshot, DeckState};

struct DeckInner<T, V> {
    config: DeckConfig,
    props: DeckProps<T, V>,
    items: Rc<[T]>,
    state: DeckState,
    drag: DragGesture,
}

struct DeckShared<T, V> {
    inner: RefCell<DeckInner<T, V>>,
    /// Live offset of the top card. Kept outside the `RefCell` so animation
    /// callbacks can run while the deck is not borrowed.
    offset: Animatable<Point>,
}

/// Swipeable card deck.
///
/// All methods must be called from the thread that owns the runtime. Caller
/// callbacks run with no internal borrow held and may call back into the deck,
/// for example to replace the data from `on_swipe_right`.
pub struct Deck<T: DeckItem + 'static, V: 'static> {
    shared: Rc<DeckShared<T, V>>,
}

impl<T: DeckItem + 'static, V: 'static> Deck<T, V> {
    pub fn new(
        runtime: RuntimeHandle,
        config: DeckConfig,
        props: DeckProps<T, V>,
        items: impl Into<Rc<[T]>>,
    ) -> Self {
        let items = items.into();
        let state = DeckState::new(items.len());
        log::debug!("deck created with {} items", items.len());
        Self {
            shared: Rc::new(DeckShared {
                inner: RefCell::new(DeckInner {
                    config,
                    props,
                    items,
                    state,
                    drag: DragGesture::new(),
                }),
                offset: Animatable::new(Point::ZERO, runtime),
            }),
        }
    }

    pub fn config(&self) -> DeckConfig {
        self.shared.inner.borrow().config.clone()
    }

    pub fn items(&self) -> Rc<[T]> {
        Rc::clone(&self.shared.inner.borrow().items)
    }

    pub fn top_index(&self) -> usize {
        self.shared.inner.borrow().state.top_index()
    }

    pub fn top_key(&self) -> Option<T::Key> {
        let inner = self.shared.inner.borrow();
        inner.items.get(inner.state.top_index()).map(DeckItem::key)
    }

    pub fn phase(&self) -> DeckPhase {
        self.shared.inner.borrow().state.phase()
    }

    pub fn is_exhausted(&self) -> bool {
        self.shared.inner.borrow().state.is_exhausted()
    }

    pub fn live_offset(&self) -> Point {
        self.shared.offset.value()
    }

    pub fn snapshot(&self) -> DeckSnapshot {
        let live_offset = self.live_offset();
        self.shared.inner.borrow().state.snapshot(live_offset)
    }

    /// Replace the data set.
    ///
    /// Passing the `Rc` the deck already holds is a no-op. Any other sequence,
    /// even one with equal contents, restarts at the first card and abandons
    /// whatever animation was in flight.
    pub fn set_data(&self, items: impl Into<Rc<[T]>>) {
        let items = items.into();
        {
            let mut inner = self.shared.inner.borrow_mut();
            if Rc::ptr_eq(&inner.items, &items) {
                return;
            }
            log::debug!(
                "deck data replaced ({} -> {} items) during {:?}",
                inner.items.len(),
                items.len(),
                inner.state.phase()
            );
            inner.state.replace_data(items.len());
            inner.items = items;
            inner.drag.reset();
        }
        self.shared.offset.snap_to(Point::ZERO);
    }

    pub fn on_gesture_start(&self) {
        let previous = self.shared.inner.borrow_mut().state.begin_drag();
        match previous {
            Some(DeckPhase::SnappingBack) => {
                log::debug!("drag resumed during snap-back");
                self.shared.offset.stop();
            }
            Some(_) => log::trace!("drag started"),
            None => log::debug!("gesture start ignored in phase {:?}", self.phase()),
        }
    }

    /// O(1): records the displacement and nothing else.
    pub fn on_gesture_move(&self, dx: f32, dy: f32) {
        if self.phase() != DeckPhase::Dragging {
            return;
        }
        let offset = Point::new(dx, dy);
        if !offset.is_finite() {
            log::warn!("ignoring non-finite drag offset ({}, {})", dx, dy);
            return;
        }
        self.shared.offset.snap_to(offset);
    }

    pub fn on_gesture_end(&self, dx: f32, dy: f32) {
        let released = Point::new(dx, dy);
        let released = if released.is_finite() {
            released
        } else {
            log::warn!("non-finite release offset ({}, {}), using last", dx, dy);
            self.live_offset()
        };

        let phase = {
            let mut inner = self.shared.inner.borrow_mut();
            if inner.state.phase() != DeckPhase::Dragging {
                return;
            }
            let outcome = SwipeOutcome::decide(released.x, inner.config.swipe_threshold());
            log::debug!("released at {:?}: {:?}", released, outcome);
            inner.state.release(outcome)
        };
        self.shared.offset.snap_to(released);
        self.start_phase_animation(phase);
    }

    /// The gesture was taken away (by the platform or a parent); snap back.
    pub fn on_gesture_cancel(&self) {
        let phase = {
            let mut inner = self.shared.inner.borrow_mut();
            inner.drag.reset();
            inner.state.release(SwipeOutcome::Reset)
        };
        if phase.is_some() {
            log::debug!("gesture cancelled, snapping back");
        }
        self.start_phase_animation(phase);
    }

    /// Route a pointer event to the top card's gesture tracker.
    ///
    /// Returns `true` and consumes the event when the deck acted on it.
    pub fn handle_pointer_event(&self, event: &PointerEvent) -> bool {
        if event.is_consumed() {
            return false;
        }
        let update = {
            let mut inner = self.shared.inner.borrow_mut();
            if event.kind == PointerEventKind::Down && !inner.state.accepts_gesture() {
                return false;
            }
            inner.drag.on_event(event)
        };
        let Some(update) = update else {
            return false;
        };
        match update {
            DragUpdate::Started => self.on_gesture_start(),
            DragUpdate::Moved { delta } => self.on_gesture_move(delta.x, delta.y),
            DragUpdate::Ended { delta } => self.on_gesture_end(delta.x, delta.y),
            DragUpdate::Cancelled => self.on_gesture_cancel(),
        }
        event.consume();
        true
    }

    /// Fly the top card off screen without a gesture.
    pub fn force_swipe(&self, direction: SwipeDirection) -> Result<(), DeckError> {
        {
            let mut inner = self.shared.inner.borrow_mut();
            inner.state.force_swipe(direction)?;
            inner.drag.reset();
        }
        log::debug!("forced swipe {:?}", direction);
        self.start_phase_animation(Some(DeckPhase::SwipingOut(direction)));
        Ok(())
    }

    /// Spring the top card back to rest without a gesture.
    pub fn reset_position(&self) -> Result<(), DeckError> {
        {
            let mut inner = self.shared.inner.borrow_mut();
            inner.state.force_reset()?;
            inner.drag.reset();
        }
        self.start_phase_animation(Some(DeckPhase::SnappingBack));
        Ok(())
    }

    /// Describe the cards to paint for the current state.
    pub fn render(&self) -> DeckFrame<T::Key, V> {
        let offset = self.live_offset();
        let (items, top_index, transform, config, render_card, render_empty) = {
            let inner = self.shared.inner.borrow();
            (
                Rc::clone(&inner.items),
                inner.state.top_index(),
                inner.config.transform_mapper().map_offset_to_style(offset),
                inner.config.clone(),
                Rc::clone(&inner.props.render_card),
                Rc::clone(&inner.props.render_no_more_cards),
            )
        };
        build_frame(
            &items,
            top_index,
            transform,
            &config,
            render_card.as_ref(),
            render_empty.as_ref(),
        )
    }

    fn start_phase_animation(&self, phase: Option<DeckPhase>) {
        match phase {
            Some(DeckPhase::SwipingOut(direction)) => Self::start_swipe_out(&self.shared, direction),
            Some(DeckPhase::SnappingBack) => Self::start_snap_back(&self.shared),
            _ => {}
        }
    }

    fn start_swipe_out(shared: &Rc<DeckShared<T, V>>, direction: SwipeDirection) {
        let (target, animation, generation) = {
            let inner = shared.inner.borrow();
            (
                Point::new(direction.sign() * inner.config.viewport_width(), 0.0),
                inner.config.swipe_out_animation(),
                inner.state.generation(),
            )
        };
        let weak = Rc::downgrade(shared);
        shared.offset.animate_to(target, animation, move |end| {
            Self::on_swipe_out_end(&weak, direction, generation, end);
        });
    }

    fn start_snap_back(shared: &Rc<DeckShared<T, V>>) {
        let (animation, generation) = {
            let inner = shared.inner.borrow();
            (inner.config.reset_animation(), inner.state.generation())
        };
        let weak = Rc::downgrade(shared);
        shared.offset.animate_to(Point::ZERO, animation, move |end| {
            Self::on_snap_back_end(&weak, generation, end);
        });
    }

    fn on_snap_back_end(weak: &Weak<DeckShared<T, V>>, generation: u64, end: AnimationEnd) {
        if end == AnimationEnd::Interrupted {
            log::trace!("snap-back interrupted");
            return;
        }
        let Some(shared) = weak.upgrade() else {
            return;
        };
        let mut inner = shared.inner.borrow_mut();
        if inner.state.generation() == generation && inner.state.finish_snap_back() {
            log::debug!("card {} back at rest", inner.state.top_index());
        }
    }

    fn on_swipe_out_end(
        weak: &Weak<DeckShared<T, V>>,
        direction: SwipeDirection,
        generation: u64,
        end: AnimationEnd,
    ) {
        if end == AnimationEnd::Interrupted {
            log::debug!("swipe-out interrupted");
            return;
        }
        let Some(shared) = weak.upgrade() else {
            return;
        };

        let pending = {
            let inner = shared.inner.borrow();
            match inner.state.swipe_in_flight() {
                Some((in_flight, index))
                    if in_flight == direction && inner.state.generation() == generation =>
                {
                    Some((
                        Rc::clone(&inner.items),
                        index,
                        inner.props.swipe_callback(direction),
                    ))
                }
                _ => None,
            }
        };
        let Some((items, index, callback)) = pending else {
            return;
        };

        log::debug!("card {} swiped {:?}", index, direction);
        callback(&items[index]);

        // The callback may have replaced the data, which already reset us.
        let still_current = {
            let inner = shared.inner.borrow();
            inner.state.generation() == generation
                && inner.state.swipe_in_flight() == Some((direction, index))
        };
        if !still_current {
            return;
        }
        shared.offset.snap_to(Point::ZERO);
        shared.inner.borrow_mut().state.advance();
    }
}

impl<T: DeckItem + 'static, V: 'static> Clone for Deck<T, V> {
    fn clone(&self) -> Self {
        Self {
            shared: Rc::clone(&self.shared),
        }
    }
}

#[cfg(test)]
#[path = "tests/deck_tests.rs"]
mod tests;
