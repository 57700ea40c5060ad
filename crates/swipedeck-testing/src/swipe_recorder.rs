//! Records swipe callbacks so tests can assert on them afterwards.

use std::cell::RefCell;
use std::rc::Rc;

use swipedeck::{DeckItem, DeckProps, SwipeDirection};

#[derive(Debug, Clone, PartialEq)]
pub struct SwipeRecord<K> {
    pub direction: SwipeDirection,
    pub key: K,
}

pub struct SwipeRecorder<K> {
    records: Rc<RefCell<Vec<SwipeRecord<K>>>>,
}

impl<K: Clone + 'static> SwipeRecorder<K> {
    pub fn new() -> Self {
        Self {
            records: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Install left and right callbacks on `props` that log into this recorder.
    pub fn attach<T, V>(&self, props: DeckProps<T, V>) -> DeckProps<T, V>
    where
        T: DeckItem<Key = K> + 'static,
        V: 'static,
    {
        let left = Rc::clone(&self.records);
        let right = Rc::clone(&self.records);
        props
            .on_swipe_left(move |item: &T| {
                left.borrow_mut().push(SwipeRecord {
                    direction: SwipeDirection::Left,
                    key: item.key(),
                })
            })
            .on_swipe_right(move |item: &T| {
                right.borrow_mut().push(SwipeRecord {
                    direction: SwipeDirection::Right,
                    key: item.key(),
                })
            })
    }

    pub fn records(&self) -> Vec<SwipeRecord<K>> {
        self.records.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.records.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.borrow().is_empty()
    }

    pub fn clear(&self) {
        self.records.borrow_mut().clear();
    }
}

impl<K: Clone + 'static> Default for SwipeRecorder<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Clone for SwipeRecorder<K> {
    fn clone(&self) -> Self {
        Self {
            records: Rc::clone(&self.records),
        }
    }
}
