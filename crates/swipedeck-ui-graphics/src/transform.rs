//! Visual transform applied to the card under the pointer.

/// Translation plus rotation, in logical pixels and degrees.
///
/// Rotation is about the card's center; positive values turn clockwise.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct CardTransform {
    pub translate_x: f32,
    pub translate_y: f32,
    pub rotate_deg: f32,
}

impl CardTransform {
    pub const IDENTITY: CardTransform = CardTransform {
        translate_x: 0.0,
        translate_y: 0.0,
        rotate_deg: 0.0,
    };

    pub const fn new(translate_x: f32, translate_y: f32, rotate_deg: f32) -> Self {
        Self {
            translate_x,
            translate_y,
            rotate_deg,
        }
    }

    pub fn rotate_radians(&self) -> f32 {
        self.rotate_deg.to_radians()
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }
}
