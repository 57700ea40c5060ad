#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwipeDirection {
    Left,
    Right,
}

impl SwipeDirection {
    /// `-1.0` for left, `1.0` for right.
    pub fn sign(self) -> f32 {
        match self {
            SwipeDirection::Left => -1.0,
            SwipeDirection::Right => 1.0,
        }
    }
}

/// Result of releasing the top card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeOutcome {
    Swipe(SwipeDirection),
    Reset,
}

impl SwipeOutcome {
    /// Classify a release at horizontal displacement `dx`.
    ///
    /// Both comparisons are strict, so `dx == ±threshold` resets. NaN resets.
    pub fn decide(dx: f32, threshold: f32) -> Self {
        if dx > threshold {
            SwipeOutcome::Swipe(SwipeDirection::Right)
        } else if dx < -threshold {
            SwipeOutcome::Swipe(SwipeDirection::Left)
        } else {
            SwipeOutcome::Reset
        }
    }
}
