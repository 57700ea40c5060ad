//! Assertion helpers for deck robot tests.

use std::fmt::Debug;

use swipedeck::{CardRole, DeckFrame};
use swipedeck_ui_graphics::Point;

/// Assert that `actual` is within `tolerance` of `expected`.
pub fn assert_approx_eq(actual: f32, expected: f32, tolerance: f32, msg: &str) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "{}: expected {} (±{}), got {} (diff: {})",
        msg,
        expected,
        tolerance,
        actual,
        diff
    );
}

pub fn assert_point_approx_eq(actual: Point, expected: Point, tolerance: f32, msg: &str) {
    assert_approx_eq(actual.x, expected.x, tolerance, &format!("{} - x", msg));
    assert_approx_eq(actual.y, expected.y, tolerance, &format!("{} - y", msg));
}

/// Assert the keys of the rendered cards, listed from the top card down.
pub fn assert_stack_keys<K: PartialEq + Debug + Clone, V>(
    frame: &DeckFrame<K, V>,
    top_down: &[K],
    msg: &str,
) {
    let mut keys: Vec<K> = frame.cards().iter().map(|card| card.key.clone()).collect();
    keys.reverse();
    assert_eq!(keys.as_slice(), top_down, "{}: rendered stack", msg);
    if let Some(first) = frame.cards().last() {
        assert_eq!(
            first.role,
            CardRole::Active,
            "{}: top of paint order must be the active card",
            msg
        );
    }
}

pub fn assert_exhausted<K: Debug, V: Debug>(frame: &DeckFrame<K, V>, msg: &str) {
    assert!(
        frame.is_exhausted(),
        "{}: expected the no-more-cards view, got {:?}",
        msg,
        frame
    );
}
