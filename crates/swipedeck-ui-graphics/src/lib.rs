//! Pure math/data for SwipeDeck
//!
//! Geometry primitives and the per-card transform record. Nothing in this
//! crate knows about animation or gestures.

mod geometry;
mod transform;

pub use geometry::*;
pub use transform::*;

pub mod prelude {
    pub use crate::geometry::{Point, Size};
    pub use crate::transform::CardTransform;
}
