use super::*;

#[test]
fn drag_release_swipe_advances_by_one() {
    let mut state = DeckState::new(3);
    assert_eq!(state.begin_drag(), Some(DeckPhase::Idle));
    assert_eq!(
        state.release(SwipeOutcome::Swipe(SwipeDirection::Right)),
        Some(DeckPhase::SwipingOut(SwipeDirection::Right))
    );
    assert_eq!(state.swipe_in_flight(), Some((SwipeDirection::Right, 0)));
    assert!(state.advance());
    assert_eq!(state.top_index(), 1);
    assert_eq!(state.phase(), DeckPhase::Idle);
    assert!(!state.advance(), "advance only once per swipe");
    assert_eq!(state.top_index(), 1);
}

#[test]
fn reset_outcome_keeps_index() {
    let mut state = DeckState::new(3);
    state.begin_drag();
    assert_eq!(
        state.release(SwipeOutcome::Reset),
        Some(DeckPhase::SnappingBack)
    );
    assert!(!state.advance());
    assert!(state.finish_snap_back());
    assert_eq!(state.top_index(), 0);
    assert_eq!(state.phase(), DeckPhase::Idle);
}

#[test]
fn release_requires_dragging() {
    let mut state = DeckState::new(1);
    assert_eq!(state.release(SwipeOutcome::Reset), None);
    assert_eq!(state.phase(), DeckPhase::Idle);
}

#[test]
fn gestures_are_ignored_while_swiping_out() {
    let mut state = DeckState::new(2);
    state.force_swipe(SwipeDirection::Left).expect("idle deck");
    assert!(!state.accepts_gesture());
    assert_eq!(state.begin_drag(), None);
    assert_eq!(
        state.force_swipe(SwipeDirection::Right),
        Err(DeckError::AlreadySwiping)
    );
    assert_eq!(state.force_reset(), Err(DeckError::AlreadySwiping));
}

#[test]
fn drag_can_resume_during_snap_back() {
    let mut state = DeckState::new(2);
    state.force_reset().expect("idle deck");
    assert_eq!(state.begin_drag(), Some(DeckPhase::SnappingBack));
    assert_eq!(state.phase(), DeckPhase::Dragging);
    assert!(!state.finish_snap_back());
}

#[test]
fn exhausted_deck_refuses_everything() {
    let mut state = DeckState::new(1);
    state.force_swipe(SwipeDirection::Right).expect("one card");
    state.advance();
    assert!(state.is_exhausted());
    assert!(!state.accepts_gesture());
    assert_eq!(state.begin_drag(), None);
    assert_eq!(
        state.force_swipe(SwipeDirection::Left),
        Err(DeckError::Exhausted)
    );
    assert_eq!(state.force_reset(), Err(DeckError::Exhausted));
    assert_eq!(state.swipe_in_flight(), None);
}

#[test]
fn empty_deck_starts_exhausted() {
    let state = DeckState::new(0);
    assert!(state.is_empty());
    assert!(state.is_exhausted());
}

#[test]
fn replacing_data_resets_from_any_phase() {
    let mut state = DeckState::new(3);
    state.force_swipe(SwipeDirection::Right).expect("idle deck");
    state.advance();
    state.begin_drag();
    state.release(SwipeOutcome::Swipe(SwipeDirection::Left));
    let generation = state.generation();

    state.replace_data(5);
    assert_eq!(state.top_index(), 0);
    assert_eq!(state.len(), 5);
    assert_eq!(state.phase(), DeckPhase::Idle);
    assert_eq!(state.generation(), generation + 1);
    assert_eq!(state.swipe_in_flight(), None);
}

#[test]
fn snapshot_carries_offset() {
    let state = DeckState::new(2);
    let snapshot = state.snapshot(Point::new(4.0, 2.0));
    assert_eq!(snapshot.top_index, 0);
    assert_eq!(snapshot.len, 2);
    assert_eq!(snapshot.phase, DeckPhase::Idle);
    assert_eq!(snapshot.live_offset, Point::new(4.0, 2.0));
}

#[test]
fn decision_uses_strict_threshold() {
    assert_eq!(
        SwipeOutcome::decide(100.1, 100.0),
        SwipeOutcome::Swipe(SwipeDirection::Right)
    );
    assert_eq!(
        SwipeOutcome::decide(-100.1, 100.0),
        SwipeOutcome::Swipe(SwipeDirection::Left)
    );
    assert_eq!(SwipeOutcome::decide(100.0, 100.0), SwipeOutcome::Reset);
    assert_eq!(SwipeOutcome::decide(-100.0, 100.0), SwipeOutcome::Reset);
    assert_eq!(SwipeOutcome::decide(0.0, 100.0), SwipeOutcome::Reset);
    assert_eq!(SwipeOutcome::decide(f32::NAN, 100.0), SwipeOutcome::Reset);
}
