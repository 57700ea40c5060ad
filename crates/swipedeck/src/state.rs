//! Deck state machine.
//!
//! ```text
//! Idle ──start──▶ Dragging ──release──▶ decide ─┬─▶ SwipingOut(dir) ──done──▶ Idle (index + 1)
//!   ▲                 ▲                         └─▶ SnappingBack ─────done──▶ Idle (same index)
//!   │                 └────────────start─────────────────┘
//!   └──────────── data replaced (from any phase, index reset to 0)
//! ```
//!
//! `DeckState` only records transitions; starting the matching animation is
//! the deck's job.

use swipedeck_ui_graphics::Point;

use crate::error::DeckError;
use crate::outcome::{SwipeDirection, SwipeOutcome};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeckPhase {
    Idle,
    Dragging,
    SnappingBack,
    SwipingOut(SwipeDirection),
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeckState {
    top_index: usize,
    len: usize,
    phase: DeckPhase,
    generation: u64,
}

/// Point-in-time view of the deck for callers and tests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeckSnapshot {
    pub top_index: usize,
    pub len: usize,
    pub phase: DeckPhase,
    pub live_offset: Point,
}

impl DeckState {
    pub fn new(len: usize) -> Self {
        Self {
            top_index: 0,
            len,
            phase: DeckPhase::Idle,
            generation: 0,
        }
    }

    pub fn top_index(&self) -> usize {
        self.top_index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn phase(&self) -> DeckPhase {
        self.phase
    }

    /// Bumped each time the data set is replaced.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_exhausted(&self) -> bool {
        self.top_index >= self.len
    }

    /// Whether a new gesture would attach to the top card.
    pub fn accepts_gesture(&self) -> bool {
        !self.is_exhausted() && matches!(self.phase, DeckPhase::Idle | DeckPhase::SnappingBack)
    }

    /// `Idle | SnappingBack → Dragging`. Returns the phase that was left.
    pub fn begin_drag(&mut self) -> Option<DeckPhase> {
        if !self.accepts_gesture() {
            return None;
        }
        let previous = self.phase;
        self.phase = DeckPhase::Dragging;
        Some(previous)
    }

    /// `Dragging → SwipingOut | SnappingBack`, chosen by `outcome`.
    pub fn release(&mut self, outcome: SwipeOutcome) -> Option<DeckPhase> {
        if self.phase != DeckPhase::Dragging {
            return None;
        }
        self.phase = match outcome {
            SwipeOutcome::Swipe(direction) => DeckPhase::SwipingOut(direction),
            SwipeOutcome::Reset => DeckPhase::SnappingBack,
        };
        Some(self.phase)
    }

    pub fn force_swipe(&mut self, direction: SwipeDirection) -> Result<(), DeckError> {
        self.check_programmatic()?;
        self.phase = DeckPhase::SwipingOut(direction);
        Ok(())
    }

    pub fn force_reset(&mut self) -> Result<(), DeckError> {
        self.check_programmatic()?;
        self.phase = DeckPhase::SnappingBack;
        Ok(())
    }

    fn check_programmatic(&self) -> Result<(), DeckError> {
        if self.is_exhausted() {
            return Err(DeckError::Exhausted);
        }
        if matches!(self.phase, DeckPhase::SwipingOut(_)) {
            return Err(DeckError::AlreadySwiping);
        }
        Ok(())
    }

    /// `SnappingBack → Idle`, index unchanged.
    pub fn finish_snap_back(&mut self) -> bool {
        if self.phase != DeckPhase::SnappingBack {
            return false;
        }
        self.phase = DeckPhase::Idle;
        true
    }

    /// Direction and index of the card currently flying off, if any.
    pub fn swipe_in_flight(&self) -> Option<(SwipeDirection, usize)> {
        match self.phase {
            DeckPhase::SwipingOut(direction) if !self.is_exhausted() => {
                Some((direction, self.top_index))
            }
            _ => None,
        }
    }

    /// `SwipingOut → Idle` with the index advanced by exactly one.
    pub fn advance(&mut self) -> bool {
        if self.swipe_in_flight().is_none() {
            return false;
        }
        self.top_index += 1;
        self.phase = DeckPhase::Idle;
        true
    }

    /// New data set: back to the first card, whatever was in flight.
    pub fn replace_data(&mut self, len: usize) {
        self.top_index = 0;
        self.len = len;
        self.phase = DeckPhase::Idle;
        self.generation += 1;
    }

    pub fn snapshot(&self, live_offset: Point) -> DeckSnapshot {
        DeckSnapshot {
            top_index: self.top_index,
            len: self.len,
            phase: self.phase,
            live_offset,
        }
    }
}

#[cfg(test)]
#[path = "tests/state_tests.rs"]
mod tests;
