//! Animation system for SwipeDeck
//!
//! [`Animatable`] holds a value that can be snapped or animated toward a
//! target on the runtime's frame clock. [`Interpolation`] maps a value through
//! piecewise-linear control points, the way a card's drag offset is turned
//! into a rotation.

mod animation;
mod interpolation;

pub use animation::*;
pub use interpolation::*;
