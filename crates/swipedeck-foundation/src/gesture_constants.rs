//! Shared constants for the swipe gesture.
//!
//! Distances are in logical pixels and are expressed relative to the viewport
//! width wherever the value has to scale with the screen.

/// Fraction of the viewport width a release must pass to commit a swipe.
///
/// The comparison is strict: a release exactly at the threshold snaps back.
pub const SWIPE_THRESHOLD_FRACTION: f32 = 0.25;

/// Duration of the fly-off animation after a committed swipe.
pub const SWIPE_OUT_DURATION_MILLIS: u64 = 250;

/// Horizontal drag, in viewport widths, at which rotation reaches its maximum.
pub const ROTATION_INPUT_WIDTHS: f32 = 1.5;

/// Rotation at `ROTATION_INPUT_WIDTHS` of drag, in degrees.
pub const MAX_ROTATION_DEG: f32 = 120.0;

/// Vertical offset between a stacked card and the one above it.
pub const STACK_OFFSET: f32 = 10.0;
