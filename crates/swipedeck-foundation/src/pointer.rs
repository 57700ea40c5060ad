use std::cell::Cell;

use swipedeck_ui_graphics::Point;

pub type PointerId = u64;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    Cancel,
}

/// Pointer event with consumption tracking.
///
/// A handler that acts on an event consumes it so that handlers further along
/// the dispatch path can skip it.
#[derive(Clone, Debug)]
pub struct PointerEvent {
    pub id: PointerId,
    pub kind: PointerEventKind,
    pub position: Point,
    consumed: Cell<bool>,
}

impl PointerEvent {
    pub fn new(id: PointerId, kind: PointerEventKind, position: Point) -> Self {
        Self {
            id,
            kind,
            position,
            consumed: Cell::new(false),
        }
    }

    pub fn down(id: PointerId, x: f32, y: f32) -> Self {
        Self::new(id, PointerEventKind::Down, Point::new(x, y))
    }

    pub fn moved(id: PointerId, x: f32, y: f32) -> Self {
        Self::new(id, PointerEventKind::Move, Point::new(x, y))
    }

    pub fn up(id: PointerId, x: f32, y: f32) -> Self {
        Self::new(id, PointerEventKind::Up, Point::new(x, y))
    }

    pub fn cancel(id: PointerId) -> Self {
        Self::new(id, PointerEventKind::Cancel, Point::ZERO)
    }

    pub fn consume(&self) {
        self.consumed.set(true);
    }

    pub fn is_consumed(&self) -> bool {
        self.consumed.get()
    }
}
