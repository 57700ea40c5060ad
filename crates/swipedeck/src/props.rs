use std::rc::Rc;

use crate::outcome::SwipeDirection;

/// Caller-supplied callbacks.
///
/// Rendering callbacks are required. Swipe callbacks default to no-ops.
pub struct DeckProps<T, V> {
    pub(crate) render_card: Rc<dyn Fn(&T) -> V>,
    pub(crate) render_no_more_cards: Rc<dyn Fn() -> V>,
    pub(crate) on_swipe_left: Rc<dyn Fn(&T)>,
    pub(crate) on_swipe_right: Rc<dyn Fn(&T)>,
}

impl<T, V> DeckProps<T, V> {
    pub fn new(
        render_card: impl Fn(&T) -> V + 'static,
        render_no_more_cards: impl Fn() -> V + 'static,
    ) -> Self {
        Self {
            render_card: Rc::new(render_card),
            render_no_more_cards: Rc::new(render_no_more_cards),
            on_swipe_left: Rc::new(|_| {}),
            on_swipe_right: Rc::new(|_| {}),
        }
    }

    pub fn on_swipe_left(mut self, callback: impl Fn(&T) + 'static) -> Self {
        self.on_swipe_left = Rc::new(callback);
        self
    }

    pub fn on_swipe_right(mut self, callback: impl Fn(&T) + 'static) -> Self {
        self.on_swipe_right = Rc::new(callback);
        self
    }

    pub(crate) fn swipe_callback(&self, direction: SwipeDirection) -> Rc<dyn Fn(&T)> {
        match direction {
            SwipeDirection::Left => Rc::clone(&self.on_swipe_left),
            SwipeDirection::Right => Rc::clone(&self.on_swipe_right),
        }
    }
}

impl<T, V> Clone for DeckProps<T, V> {
    fn clone(&self) -> Self {
        Self {
            render_card: Rc::clone(&self.render_card),
            render_no_more_cards: Rc::clone(&self.render_no_more_cards),
            on_swipe_left: Rc::clone(&self.on_swipe_left),
            on_swipe_right: Rc::clone(&self.on_swipe_right),
        }
    }
}
