use swipedeck_animation::{Extrapolate, InterpolateError, Interpolation};
use swipedeck_foundation::gesture_constants::ROTATION_INPUT_WIDTHS;
use swipedeck_ui_graphics::{CardTransform, Point};

/// Maps the top card's drag offset to its visual transform.
///
/// Translation follows the offset directly. Rotation is interpolated from the
/// horizontal offset: zero at rest, `±max_rotation_deg` at
/// `±1.5 × viewport_width`, clamped beyond that.
#[derive(Debug, Clone, PartialEq)]
pub struct TransformMapper {
    rotation: Interpolation,
}

impl TransformMapper {
    pub fn new(viewport_width: f32, max_rotation_deg: f32) -> Result<Self, InterpolateError> {
        let reach = ROTATION_INPUT_WIDTHS * viewport_width;
        let rotation = Interpolation::new(
            &[-reach, 0.0, reach],
            &[-max_rotation_deg, 0.0, max_rotation_deg],
            Extrapolate::Clamp,
        )?;
        Ok(Self { rotation })
    }

    pub fn map_offset_to_style(&self, offset: Point) -> CardTransform {
        CardTransform {
            translate_x: offset.x,
            translate_y: offset.y,
            rotate_deg: self.rotation.map(offset.x),
        }
    }
}

#[cfg(test)]
#[path = "tests/transform_tests.rs"]
mod tests;
