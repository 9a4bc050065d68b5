use super::*;
use crate::net::types::Publisher;

fn sample_hero(id: &str) -> Hero {
    Hero {
        id: id.to_owned(),
        superhero: "Batman".to_owned(),
        publisher: Publisher::DcComics,
        ..Hero::default()
    }
}

#[test]
fn begin_fetch_bumps_generation_and_clears_record() {
    let mut state = DetailState::default();
    let first = state.begin_fetch();
    assert!(state.apply(first, sample_hero("dc-batman")));
    assert!(state.hero().is_some());

    let second = state.begin_fetch();
    assert!(second > first);
    assert!(state.hero().is_none());
}

#[test]
fn apply_accepts_current_generation() {
    let mut state = DetailState::default();
    let generation = state.begin_fetch();
    assert!(state.apply(generation, sample_hero("dc-batman")));
    assert_eq!(state.hero(), Some(&sample_hero("dc-batman")));
}

#[test]
fn apply_rejects_stale_generation() {
    let mut state = DetailState::default();
    let stale = state.begin_fetch();
    let current = state.begin_fetch();

    // The older fetch completes after the newer one.
    assert!(state.apply(current, sample_hero("dc-flash")));
    assert!(!state.apply(stale, sample_hero("dc-batman")));
    assert_eq!(state.hero(), Some(&sample_hero("dc-flash")));
}

#[test]
fn apply_on_default_state_rejects_unstarted_fetch() {
    let mut state = DetailState::default();
    assert!(!state.apply(1, sample_hero("dc-batman")));
    assert!(state.hero().is_none());
}
