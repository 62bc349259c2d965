use gpui_stacked_bar::{SelectionMode, SelectionState};

#[test]
fn test_initial_state() {
    let state = SelectionState::new();
    assert_eq!(state.mode(), SelectionMode::Aggregate);
    assert_eq!(state.selected(), None);
    assert!(!state.is_animating());
}

#[test]
fn test_select_then_close_round_trip() {
    let mut state = SelectionState::new();

    let t = state.select(2, 5, true).expect("selection should be accepted");
    assert_eq!(t.from, SelectionMode::Aggregate);
    assert_eq!(t.to, SelectionMode::Expanded(2));
    assert!(state.is_animating());
    assert!(state.finish_transition(t.generation));
    assert!(!state.is_animating());
    assert_eq!(state.mode(), SelectionMode::Expanded(2));

    let t = state.close().expect("close should be accepted");
    assert_eq!(t.from, SelectionMode::Expanded(2));
    assert_eq!(t.to, SelectionMode::Aggregate);
    assert!(state.finish_transition(t.generation));
    assert_eq!(state.mode(), SelectionMode::Aggregate);
    assert!(!state.is_animating());
}

#[test]
fn test_select_while_animating_is_ignored() {
    let mut state = SelectionState::new();
    state.select(0, 3, true).unwrap();
    state.close();
    let before = state.clone();

    assert!(state.select(1, 3, true).is_none());
    assert!(state.close().is_none());
    assert_eq!(state, before);
}

#[test]
fn test_no_direct_switch_between_bars() {
    let mut state = SelectionState::new();
    let t = state.select(0, 3, true).unwrap();
    state.finish_transition(t.generation);

    assert!(state.select(1, 3, true).is_none());
    assert_eq!(state.mode(), SelectionMode::Expanded(0));
}

#[test]
fn test_non_interactive_and_out_of_range() {
    let mut state = SelectionState::new();
    assert!(state.select(0, 3, false).is_none());
    assert!(state.select(3, 3, true).is_none());
    assert!(state.select(0, 0, true).is_none());
    assert_eq!(state, SelectionState::new());
}

#[test]
fn test_close_in_aggregate_does_nothing() {
    let mut state = SelectionState::new();
    assert!(state.close().is_none());
    assert!(!state.is_animating());
}

#[test]
fn test_stale_completion_is_ignored() {
    let mut state = SelectionState::new();
    let first = state.select(1, 3, true).unwrap();
    assert!(!state.finish_transition(first.generation + 1));
    assert!(state.is_animating());
    assert!(state.finish_transition(first.generation));
    assert!(!state.finish_transition(first.generation));
}

#[test]
fn test_accepts_input() {
    let mut state = SelectionState::new();
    assert!(state.accepts_input(true));
    assert!(!state.accepts_input(false));

    let t = state.select(0, 1, true).unwrap();
    assert!(!state.accepts_input(true));
    state.finish_transition(t.generation);
    assert!(!state.accepts_input(true), "expanded state has no bar row to click");
}

#[test]
fn test_reconcile_drops_vanished_selection() {
    let mut state = SelectionState::new();
    let t = state.select(4, 5, true).unwrap();
    state.finish_transition(t.generation);

    state.reconcile(5);
    assert_eq!(state.selected(), Some(4));

    state.reconcile(3);
    assert_eq!(state.mode(), SelectionMode::Aggregate);
    assert!(!state.is_animating());
}
