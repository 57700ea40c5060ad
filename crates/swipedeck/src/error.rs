use std::fmt;

/// Rejected programmatic deck operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeckError {
    /// Every card has been swiped.
    Exhausted,
    /// The top card is already flying off screen.
    AlreadySwiping,
}

impl fmt::Display for DeckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeckError::Exhausted => write!(f, "deck has no cards left"),
            DeckError::AlreadySwiping => write!(f, "top card is already swiping out"),
        }
    }
}

impl std::error::Error for DeckError {}
