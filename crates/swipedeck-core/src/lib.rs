//! Core runtime for SwipeDeck
//!
//! Everything here runs on the UI thread. The host drives the runtime by
//! calling [`Runtime::drain_frame_callbacks`] once per display frame; animations
//! and other frame-synchronised work register one-shot callbacks through the
//! [`FrameClock`].

mod frame_clock;
mod runtime;

pub use frame_clock::{FrameCallbackRegistration, FrameClock};
pub use runtime::{Runtime, RuntimeHandle};

pub type FrameCallbackId = u64;
