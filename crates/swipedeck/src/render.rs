//! Stack rendering: which cards to paint, where, and in which order.

use swipedeck_ui_graphics::CardTransform;

use crate::config::DeckConfig;
use crate::item::DeckItem;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardRole {
    /// Top card: follows the drag and receives gestures.
    Active,
    /// Static card beneath the top one.
    Stacked,
}

/// Absolute position of a card inside the deck's box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardPlacement {
    pub top: f32,
    pub width: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderedCard<K, V> {
    pub key: K,
    pub index: usize,
    pub role: CardRole,
    pub placement: CardPlacement,
    /// Present only for the active card.
    pub transform: Option<CardTransform>,
    /// Higher values paint above lower ones.
    pub z_index: i32,
    pub interactive: bool,
    pub view: V,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DeckFrame<K, V> {
    /// Cards in paint order, farthest first. The active card is last.
    Cards(Vec<RenderedCard<K, V>>),
    /// Every card is consumed; holds the "no more cards" view.
    Exhausted(V),
}

impl<K, V> DeckFrame<K, V> {
    pub fn is_exhausted(&self) -> bool {
        matches!(self, DeckFrame::Exhausted(_))
    }

    pub fn cards(&self) -> &[RenderedCard<K, V>] {
        match self {
            DeckFrame::Cards(cards) => cards,
            DeckFrame::Exhausted(_) => &[],
        }
    }

    pub fn active(&self) -> Option<&RenderedCard<K, V>> {
        self.cards()
            .last()
            .filter(|card| card.role == CardRole::Active)
    }
}

pub(crate) fn build_frame<T: DeckItem, V>(
    items: &[T],
    top_index: usize,
    active_transform: CardTransform,
    config: &DeckConfig,
    render_card: &dyn Fn(&T) -> V,
    render_no_more_cards: &dyn Fn() -> V,
) -> DeckFrame<T::Key, V> {
    if top_index >= items.len() {
        return DeckFrame::Exhausted(render_no_more_cards());
    }

    let remaining = items.len() - top_index;
    let visible = match config.max_stacked_cards() {
        Some(stacked) => remaining.min(stacked.saturating_add(1)),
        None => remaining,
    };
    let last = top_index + visible - 1;
    let width = config.viewport_width();

    let cards = (top_index..=last)
        .rev()
        .map(|index| {
            let item = &items[index];
            let depth = index - top_index;
            let active = depth == 0;
            RenderedCard {
                key: item.key(),
                index,
                role: if active {
                    CardRole::Active
                } else {
                    CardRole::Stacked
                },
                placement: CardPlacement {
                    top: if active {
                        0.0
                    } else {
                        config.stack_offset() * depth as f32
                    },
                    width,
                },
                transform: active.then_some(active_transform),
                z_index: (last - index) as i32,
                interactive: active,
                view: render_card(item),
            }
        })
        .collect::<Vec<_>>();

    #[cfg(debug_assertions)]
    {
        let mut seen = rustc_hash::FxHashSet::default();
        for card in &cards {
            assert!(
                seen.insert(card.key.clone()),
                "duplicate deck item key {:?}",
                card.key
            );
        }
    }

    DeckFrame::Cards(cards)
}

#[cfg(test)]
#[path = "tests/render_tests.rs"]
mod tests;
