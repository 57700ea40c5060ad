//! Drag gesture recogniser.
//!
//! Turns a pointer's absolute positions into a displacement from where it was
//! pressed. Only one pointer is tracked at a time; events from other pointers
//! are ignored until the tracked one lifts or is cancelled.

use swipedeck_ui_graphics::Point;

use crate::pointer::{PointerEvent, PointerEventKind, PointerId};

/// What a pointer event meant for the drag in progress.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DragUpdate {
    Started,
    Moved { delta: Point },
    Ended { delta: Point },
    Cancelled,
}

#[derive(Clone, Copy, Debug)]
struct ActiveDrag {
    pointer: PointerId,
    origin: Point,
    delta: Point,
}

#[derive(Default, Debug, Clone, Copy)]
pub struct DragGesture {
    active: Option<ActiveDrag>,
}

impl DragGesture {
    pub fn new() -> Self {
        Self { active: None }
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Displacement of the tracked pointer, or zero when idle.
    pub fn delta(&self) -> Point {
        self.active.map(|drag| drag.delta).unwrap_or(Point::ZERO)
    }

    pub fn reset(&mut self) {
        self.active = None;
    }

    /// Feed one pointer event. Returns `None` when the event is not part of
    /// the tracked drag.
    pub fn on_event(&mut self, event: &PointerEvent) -> Option<DragUpdate> {
        match (event.kind, self.active) {
            (PointerEventKind::Down, None) => {
                self.active = Some(ActiveDrag {
                    pointer: event.id,
                    origin: event.position,
                    delta: Point::ZERO,
                });
                Some(DragUpdate::Started)
            }
            (PointerEventKind::Down, Some(drag)) => {
                log::debug!(
                    "ignoring pointer {} down while pointer {} is dragging",
                    event.id,
                    drag.pointer
                );
                None
            }
            (PointerEventKind::Move, Some(mut drag)) if drag.pointer == event.id => {
                drag.delta = event.position - drag.origin;
                self.active = Some(drag);
                Some(DragUpdate::Moved { delta: drag.delta })
            }
            (PointerEventKind::Up, Some(drag)) if drag.pointer == event.id => {
                let delta = event.position - drag.origin;
                self.active = None;
                Some(DragUpdate::Ended { delta })
            }
            (PointerEventKind::Cancel, Some(drag)) if drag.pointer == event.id => {
                self.active = None;
                Some(DragUpdate::Cancelled)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "../tests/drag_tests.rs"]
mod tests;
