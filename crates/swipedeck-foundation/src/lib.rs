//! Pointer input types and gesture recognisers for SwipeDeck

pub mod gesture_constants;
pub mod gestures;
pub mod pointer;

pub use gestures::{DragGesture, DragUpdate};
pub use pointer::{PointerEvent, PointerEventKind, PointerId};
