//! Piecewise-linear mapping between two ranges of control points.

use std::cmp::Ordering;
use std::fmt;

use smallvec::SmallVec;

/// Behaviour for values outside the input range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Extrapolate {
    /// Pin to the nearest endpoint's output.
    #[default]
    Clamp,
    /// Continue the slope of the outermost segment.
    Extend,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterpolateError {
    LengthMismatch { inputs: usize, outputs: usize },
    TooFewPoints(usize),
    NotAscending { index: usize },
}

impl fmt::Display for InterpolateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InterpolateError::LengthMismatch { inputs, outputs } => write!(
                f,
                "input range has {} points but output range has {}",
                inputs, outputs
            ),
            InterpolateError::TooFewPoints(count) => {
                write!(f, "interpolation needs at least 2 points, got {}", count)
            }
            InterpolateError::NotAscending { index } => write!(
                f,
                "input range must be strictly ascending (violated at index {})",
                index
            ),
        }
    }
}

impl std::error::Error for InterpolateError {}

/// Validated control points, ready for repeated lookups.
///
/// `map` allocates nothing and walks at most `len - 1` segments, so it is safe
/// to call on every pointer move.
#[derive(Debug, Clone, PartialEq)]
pub struct Interpolation {
    inputs: SmallVec<[f32; 4]>,
    outputs: SmallVec<[f32; 4]>,
    extrapolate: Extrapolate,
}

impl Interpolation {
    pub fn new(
        inputs: &[f32],
        outputs: &[f32],
        extrapolate: Extrapolate,
    ) -> Result<Self, InterpolateError> {
        if inputs.len() != outputs.len() {
            return Err(InterpolateError::LengthMismatch {
                inputs: inputs.len(),
                outputs: outputs.len(),
            });
        }
        if inputs.len() < 2 {
            return Err(InterpolateError::TooFewPoints(inputs.len()));
        }
        for (index, pair) in inputs.windows(2).enumerate() {
            if pair[0].partial_cmp(&pair[1]) != Some(Ordering::Less) {
                return Err(InterpolateError::NotAscending { index: index + 1 });
            }
        }
        Ok(Self {
            inputs: SmallVec::from_slice(inputs),
            outputs: SmallVec::from_slice(outputs),
            extrapolate,
        })
    }

    pub fn extrapolate(&self) -> Extrapolate {
        self.extrapolate
    }

    /// Map `value` through the control points. NaN maps to NaN.
    pub fn map(&self, value: f32) -> f32 {
        if value.is_nan() {
            return f32::NAN;
        }
        let last = self.inputs.len() - 1;

        if value <= self.inputs[0] {
            return match self.extrapolate {
                Extrapolate::Clamp => self.outputs[0],
                Extrapolate::Extend => self.segment(0, value),
            };
        }
        if value >= self.inputs[last] {
            return match self.extrapolate {
                Extrapolate::Clamp => self.outputs[last],
                Extrapolate::Extend => self.segment(last - 1, value),
            };
        }

        let segment = self
            .inputs
            .windows(2)
            .position(|pair| value <= pair[1])
            .unwrap_or(last - 1);
        self.segment(segment, value)
    }

    fn segment(&self, index: usize, value: f32) -> f32 {
        let (in_lo, in_hi) = (self.inputs[index], self.inputs[index + 1]);
        let (out_lo, out_hi) = (self.outputs[index], self.outputs[index + 1]);
        let fraction = (value - in_lo) / (in_hi - in_lo);
        out_lo + (out_hi - out_lo) * fraction
    }
}

/// One-shot clamped interpolation of `value` from `inputs` onto `outputs`.
pub fn interpolate(value: f32, inputs: &[f32], outputs: &[f32]) -> Result<f32, InterpolateError> {
    Interpolation::new(inputs, outputs, Extrapolate::Clamp).map(|lookup| lookup.map(value))
}

#[cfg(test)]
#[path = "tests/interpolation_tests.rs"]
mod tests;
