use std::fmt::Debug;
use std::hash::Hash;

/// An entry in the deck.
///
/// The key identifies the item across renders and must be unique within one
/// data set; debug builds assert this whenever a frame is built.
pub trait DeckItem {
    type Key: Clone + Eq + Hash + Debug;

    fn key(&self) -> Self::Key;
}
