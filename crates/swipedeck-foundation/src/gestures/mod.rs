pub mod drag;

pub use drag::{DragGesture, DragUpdate};
