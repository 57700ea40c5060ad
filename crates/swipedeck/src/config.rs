use std::fmt;

use swipedeck_animation::{AnimationSpec, AnimationType, Easing, InterpolateError, SpringSpec};
use swipedeck_foundation::gesture_constants::{
    MAX_ROTATION_DEG, STACK_OFFSET, SWIPE_OUT_DURATION_MILLIS, SWIPE_THRESHOLD_FRACTION,
};
use swipedeck_ui_graphics::Size;

use crate::transform::TransformMapper;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DeckConfigError {
    InvalidViewportWidth(f32),
    InvalidThresholdFraction(f32),
    InvalidStackOffset(f32),
    InvalidRotation(f32),
    InvalidResetSpring(SpringSpec),
    Rotation(InterpolateError),
}

impl fmt::Display for DeckConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeckConfigError::InvalidViewportWidth(width) => {
                write!(f, "viewport width must be positive and finite, got {}", width)
            }
            DeckConfigError::InvalidThresholdFraction(fraction) => write!(
                f,
                "swipe threshold fraction must be in (0, 1], got {}",
                fraction
            ),
            DeckConfigError::InvalidStackOffset(offset) => write!(
                f,
                "stack offset must be non-negative and finite, got {}",
                offset
            ),
            DeckConfigError::InvalidRotation(degrees) => {
                write!(f, "maximum rotation must be finite, got {}", degrees)
            }
            DeckConfigError::InvalidResetSpring(spring) => write!(
                f,
                "reset spring needs finite, positive stiffness, damping and thresholds, got {:?}",
                spring
            ),
            DeckConfigError::Rotation(err) => write!(f, "rotation mapping: {}", err),
        }
    }
}

impl std::error::Error for DeckConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DeckConfigError::Rotation(err) => Some(err),
            _ => None,
        }
    }
}

impl From<InterpolateError> for DeckConfigError {
    fn from(err: InterpolateError) -> Self {
        DeckConfigError::Rotation(err)
    }
}

/// Validated deck settings.
///
/// Built once when the deck is created; the swipe threshold and the rotation
/// mapping are derived from the viewport width at that point and never change.
#[derive(Debug, Clone)]
pub struct DeckConfig {
    viewport_width: f32,
    swipe_threshold_fraction: f32,
    swipe_threshold: f32,
    swipe_out_duration_millis: u64,
    swipe_out_easing: Easing,
    reset_spring: SpringSpec,
    stack_offset: f32,
    max_rotation_deg: f32,
    max_stacked_cards: Option<usize>,
    mapper: TransformMapper,
}

impl DeckConfig {
    /// Default settings for a viewport `viewport_width` logical pixels wide.
    pub fn new(viewport_width: f32) -> Result<Self, DeckConfigError> {
        Self::builder(viewport_width).build()
    }

    pub fn from_viewport(size: Size) -> Result<Self, DeckConfigError> {
        Self::new(size.width)
    }

    pub fn builder(viewport_width: f32) -> DeckConfigBuilder {
        DeckConfigBuilder::new(viewport_width)
    }

    pub fn viewport_width(&self) -> f32 {
        self.viewport_width
    }

    pub fn swipe_threshold_fraction(&self) -> f32 {
        self.swipe_threshold_fraction
    }

    /// Horizontal release distance that commits a swipe.
    pub fn swipe_threshold(&self) -> f32 {
        self.swipe_threshold
    }

    pub fn swipe_out_duration_millis(&self) -> u64 {
        self.swipe_out_duration_millis
    }

    pub fn stack_offset(&self) -> f32 {
        self.stack_offset
    }

    pub fn max_rotation_deg(&self) -> f32 {
        self.max_rotation_deg
    }

    pub fn max_stacked_cards(&self) -> Option<usize> {
        self.max_stacked_cards
    }

    pub fn transform_mapper(&self) -> &TransformMapper {
        &self.mapper
    }

    pub fn swipe_out_animation(&self) -> AnimationType {
        AnimationType::Tween(AnimationSpec::tween(
            self.swipe_out_duration_millis,
            self.swipe_out_easing,
        ))
    }

    pub fn reset_animation(&self) -> AnimationType {
        AnimationType::Spring(self.reset_spring)
    }
}

#[derive(Debug, Clone)]
pub struct DeckConfigBuilder {
    viewport_width: f32,
    swipe_threshold_fraction: f32,
    swipe_out_duration_millis: u64,
    swipe_out_easing: Easing,
    reset_spring: SpringSpec,
    stack_offset: f32,
    max_rotation_deg: f32,
    max_stacked_cards: Option<usize>,
}

impl DeckConfigBuilder {
    pub fn new(viewport_width: f32) -> Self {
        Self {
            viewport_width,
            swipe_threshold_fraction: SWIPE_THRESHOLD_FRACTION,
            swipe_out_duration_millis: SWIPE_OUT_DURATION_MILLIS,
            swipe_out_easing: Easing::FastOutSlowIn,
            reset_spring: SpringSpec::default(),
            stack_offset: STACK_OFFSET,
            max_rotation_deg: MAX_ROTATION_DEG,
            max_stacked_cards: None,
        }
    }

    pub fn with_swipe_threshold_fraction(mut self, fraction: f32) -> Self {
        self.swipe_threshold_fraction = fraction;
        self
    }

    pub fn with_swipe_out_duration_millis(mut self, millis: u64) -> Self {
        self.swipe_out_duration_millis = millis;
        self
    }

    pub fn with_swipe_out_easing(mut self, easing: Easing) -> Self {
        self.swipe_out_easing = easing;
        self
    }

    pub fn with_reset_spring(mut self, spring: SpringSpec) -> Self {
        self.reset_spring = spring;
        self
    }

    pub fn with_stack_offset(mut self, offset: f32) -> Self {
        self.stack_offset = offset;
        self
    }

    pub fn with_max_rotation_deg(mut self, degrees: f32) -> Self {
        self.max_rotation_deg = degrees;
        self
    }

    /// Cap the number of cards rendered beneath the top card.
    pub fn with_max_stacked_cards(mut self, count: usize) -> Self {
        self.max_stacked_cards = Some(count);
        self
    }

    pub fn build(self) -> Result<DeckConfig, DeckConfigError> {
        if !(self.viewport_width.is_finite() && self.viewport_width > 0.0) {
            return Err(DeckConfigError::InvalidViewportWidth(self.viewport_width));
        }
        let fraction = self.swipe_threshold_fraction;
        if !(fraction > 0.0 && fraction <= 1.0) {
            return Err(DeckConfigError::InvalidThresholdFraction(fraction));
        }
        if !(self.stack_offset.is_finite() && self.stack_offset >= 0.0) {
            return Err(DeckConfigError::InvalidStackOffset(self.stack_offset));
        }
        if !self.max_rotation_deg.is_finite() {
            return Err(DeckConfigError::InvalidRotation(self.max_rotation_deg));
        }
        if !self.reset_spring.is_valid() {
            return Err(DeckConfigError::InvalidResetSpring(self.reset_spring));
        }

        let mapper = TransformMapper::new(self.viewport_width, self.max_rotation_deg)?;
        let config = DeckConfig {
            viewport_width: self.viewport_width,
            swipe_threshold_fraction: fraction,
            swipe_threshold: fraction * self.viewport_width,
            swipe_out_duration_millis: self.swipe_out_duration_millis,
            swipe_out_easing: self.swipe_out_easing,
            reset_spring: self.reset_spring,
            stack_offset: self.stack_offset,
            max_rotation_deg: self.max_rotation_deg,
            max_stacked_cards: self.max_stacked_cards,
            mapper,
        };
        log::debug!(
            "deck config: width {} threshold {} swipe-out {}ms",
            config.viewport_width,
            config.swipe_threshold,
            config.swipe_out_duration_millis
        );
        Ok(config)
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
