use std::sync::Arc;

use ib_bridge::core::state::IndexState;

#[test]
fn starts_uninitialized() {
    let state = IndexState::<String>::new();
    assert!(!state.is_initialized());
    assert!(state.snapshot().is_none());
    assert_eq!(state.generation(), 0);
}

#[test]
fn install_swaps_the_whole_snapshot() {
    let state = IndexState::new();
    assert_eq!(state.install("first".to_string()), 1);
    assert_eq!(state.snapshot().as_deref().map(String::as_str), Some("first"));

    assert_eq!(state.install("second".to_string()), 2);
    assert_eq!(state.snapshot().as_deref().map(String::as_str), Some("second"));
    assert_eq!(state.generation(), 2);
}

#[test]
fn in_flight_readers_keep_their_snapshot() {
    let state = IndexState::new();
    state.install(vec![1, 2, 3]);
    let held = state.snapshot().expect("installed");

    state.install(vec![9]);

    assert_eq!(*held, vec![1, 2, 3]);
    assert_eq!(*state.snapshot().expect("installed"), vec![9]);
    assert_eq!(Arc::strong_count(&held), 1);
}

#[test]
fn clear_returns_to_the_sentinel_but_keeps_generation() {
    let state = IndexState::new();
    state.install(1u32);
    state.clear();

    assert!(!state.is_initialized());
    assert!(state.snapshot().is_none());
    assert_eq!(state.generation(), 1);
}
