//! Swipeable card deck
//!
//! A [`Deck`] shows an ordered list of items as a stack of cards. The top card
//! follows the user's drag; releasing it past the swipe threshold flies it off
//! screen and reports the item through `on_swipe_left` / `on_swipe_right`,
//! anything shorter springs it back.
//!
//! The deck never draws. [`Deck::render`] returns a [`DeckFrame`] describing
//! which cards to paint, in what order, where, and with which transform; the
//! views themselves come from the caller's `render_card` callback.

mod config;
mod deck;
mod error;
mod item;
mod outcome;
mod props;
mod render;
mod state;
mod transform;

pub use config::{DeckConfig, DeckConfigBuilder, DeckConfigError};
pub use deck::Deck;
pub use error::DeckError;
pub use item::DeckItem;
pub use outcome::{SwipeDirection, SwipeOutcome};
pub use props::DeckProps;
pub use render::{CardPlacement, CardRole, DeckFrame, RenderedCard};
pub use state::{DeckPhase, DeckSnapshot, DeckState};
pub use transform::TransformMapper;

pub use swipedeck_foundation::{PointerEvent, PointerEventKind};
pub use swipedeck_ui_graphics::{CardTransform, Point, Size};

pub mod prelude {
    pub use crate::{
        Deck, DeckConfig, DeckFrame, DeckItem, DeckPhase, DeckProps, SwipeDirection,
    };
    pub use swipedeck_core::Runtime;
}
