//! Headless robot for driving a deck frame by frame.
//!
//! The robot owns the runtime, plays the role of the host's event loop, and
//! feeds pointer events to the deck the way a platform shell would.

use swipedeck::{Deck, DeckConfig, DeckFrame, DeckItem, DeckProps};
use swipedeck_core::Runtime;
use swipedeck_foundation::{PointerEvent, PointerId};
use swipedeck_ui_graphics::Point;

/// ~60 FPS.
pub const FRAME_INTERVAL_NANOS: u64 = 16_666_667;

/// Upper bound used by [`DeckRobot::settle`]; far longer than any deck animation.
pub const SETTLE_FRAME_LIMIT: usize = 600;

const ROBOT_POINTER: PointerId = 1;

pub struct DeckRobot<T: DeckItem + 'static, V: 'static> {
    runtime: Runtime,
    deck: Deck<T, V>,
    frame_time_nanos: u64,
    frames_drawn: usize,
    pointer: Option<Point>,
    origin: Point,
}

impl<T: DeckItem + 'static, V: 'static> DeckRobot<T, V> {
    pub fn new(config: DeckConfig, props: DeckProps<T, V>, items: impl Into<std::rc::Rc<[T]>>) -> Self {
        let runtime = Runtime::new();
        let origin = Point::new(config.viewport_width() / 2.0, config.viewport_width() / 2.0);
        let deck = Deck::new(runtime.handle(), config, props, items);
        Self {
            runtime,
            deck,
            frame_time_nanos: 0,
            frames_drawn: 0,
            pointer: None,
            origin,
        }
    }

    pub fn deck(&self) -> &Deck<T, V> {
        &self.deck
    }

    pub fn runtime(&self) -> &Runtime {
        &self.runtime
    }

    pub fn frame_time_nanos(&self) -> u64 {
        self.frame_time_nanos
    }

    pub fn frames_drawn(&self) -> usize {
        self.frames_drawn
    }

    pub fn render(&self) -> DeckFrame<T::Key, V> {
        self.deck.render()
    }

    /// Press on the top card. Returns whether the deck took the pointer.
    pub fn press(&mut self) -> bool {
        let origin = self.origin;
        self.pointer = Some(origin);
        self.deck
            .handle_pointer_event(&PointerEvent::down(ROBOT_POINTER, origin.x, origin.y))
    }

    /// Move the held pointer so that it sits `(dx, dy)` from where it was pressed.
    pub fn drag_to(&mut self, dx: f32, dy: f32) -> bool {
        let position = self.origin + Point::new(dx, dy);
        self.pointer = Some(position);
        self.deck
            .handle_pointer_event(&PointerEvent::moved(ROBOT_POINTER, position.x, position.y))
    }

    /// Move toward `(dx, dy)` in `steps` evenly spaced events, drawing a frame
    /// between each, like a real finger on a 60Hz display.
    pub fn drag_smoothly(&mut self, dx: f32, dy: f32, steps: usize) {
        let steps = steps.max(1);
        let start = self.pointer.unwrap_or(self.origin) - self.origin;
        for step in 1..=steps {
            let fraction = step as f32 / steps as f32;
            self.drag_to(
                start.x + (dx - start.x) * fraction,
                start.y + (dy - start.y) * fraction,
            );
            self.advance_frame();
        }
    }

    /// Lift the pointer where it currently is.
    pub fn release(&mut self) -> bool {
        let position = self.pointer.take().unwrap_or(self.origin);
        self.deck
            .handle_pointer_event(&PointerEvent::up(ROBOT_POINTER, position.x, position.y))
    }

    pub fn cancel(&mut self) -> bool {
        self.pointer = None;
        self.deck
            .handle_pointer_event(&PointerEvent::cancel(ROBOT_POINTER))
    }

    /// Press, drag to `(dx, dy)` and release in one go.
    pub fn fling(&mut self, dx: f32, dy: f32) {
        self.press();
        self.drag_smoothly(dx, dy, 4);
        self.release();
    }

    pub fn advance_frame(&mut self) {
        self.frame_time_nanos += FRAME_INTERVAL_NANOS;
        self.frames_drawn += 1;
        self.runtime.drain_frame_callbacks(self.frame_time_nanos);
    }

    pub fn advance_frames(&mut self, frames: usize) {
        for _ in 0..frames {
            self.advance_frame();
        }
    }

    pub fn advance_millis(&mut self, millis: u64) {
        let frames = (millis * 1_000_000).div_ceil(FRAME_INTERVAL_NANOS);
        self.advance_frames(frames as usize);
    }

    /// Draw frames until nothing is waiting for one. Returns the frame count.
    ///
    /// Panics if the deck is still animating after [`SETTLE_FRAME_LIMIT`] frames.
    pub fn settle(&mut self) -> usize {
        let mut frames = 0;
        while self.runtime.needs_frame() {
            assert!(
                frames < SETTLE_FRAME_LIMIT,
                "deck still animating after {} frames",
                SETTLE_FRAME_LIMIT
            );
            self.advance_frame();
            frames += 1;
        }
        log::trace!("settled after {} frames", frames);
        frames
    }
}

#[cfg(test)]
#[path = "tests/robot_tests.rs"]
mod tests;
