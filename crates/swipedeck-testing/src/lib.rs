//! Testing utilities and harness for SwipeDeck

pub mod robot;
pub mod robot_assertions;
pub mod swipe_recorder;

pub use robot::*;
pub use robot_assertions::*;
pub use swipe_recorder::*;

pub mod prelude {
    pub use crate::robot::*;
    pub use crate::robot_assertions;
    pub use crate::swipe_recorder::*;
}
