use std::cell::RefCell;

use futures::executor::block_on;

use super::*;
use crate::flow::{ConfirmOutcome, ConfirmPrompt, HeroStore, Toaster};
use crate::net::types::Publisher;

/// Shared chronological log so tests can assert ordering across the
/// navigator, toaster, and store seams.
#[derive(Default)]
struct EventLog(RefCell<Vec<String>>);

impl EventLog {
    fn push(&self, event: impl Into<String>) {
        self.0.borrow_mut().push(event.into());
    }

    fn events(&self) -> Vec<String> {
        self.0.borrow().clone()
    }
}

impl Toaster for &EventLog {
    fn show(&self, message: &str, _action_label: &str, _duration_ms: u32) {
        self.push(format!("toast:{message}"));
    }
}

struct StubStore<'a> {
    log: &'a EventLog,
    fetch_result: Result<Option<Hero>, ApiError>,
    add_result: Result<Hero, ApiError>,
    update_result: Result<Hero, ApiError>,
    delete_result: Result<bool, ApiError>,
}

impl<'a> StubStore<'a> {
    fn new(log: &'a EventLog) -> Self {
        StubStore {
            log,
            fetch_result: Err(ApiError::Unavailable),
            add_result: Err(ApiError::Unavailable),
            update_result: Err(ApiError::Unavailable),
            delete_result: Err(ApiError::Unavailable),
        }
    }
}

impl HeroStore for StubStore<'_> {
    async fn fetch_by_id(&self, id: &str) -> Result<Option<Hero>, ApiError> {
        self.log.push(format!("fetch:{id}"));
        self.fetch_result.clone()
    }

    async fn fetch_all(&self) -> Result<Vec<Hero>, ApiError> {
        self.log.push("fetch_all");
        Err(ApiError::Unavailable)
    }

    async fn add(&self, hero: &Hero) -> Result<Hero, ApiError> {
        self.log.push(format!("add:{}", hero.superhero));
        self.add_result.clone()
    }

    async fn update(&self, hero: &Hero) -> Result<Hero, ApiError> {
        self.log.push(format!("update:{}", hero.id));
        self.update_result.clone()
    }

    async fn delete_by_id(&self, id: &str) -> Result<bool, ApiError> {
        self.log.push(format!("delete:{id}"));
        self.delete_result.clone()
    }
}

struct FixedPrompt<'a> {
    log: &'a EventLog,
    outcome: ConfirmOutcome,
}

impl ConfirmPrompt for FixedPrompt<'_> {
    async fn confirm(&self, seed: &Hero) -> ConfirmOutcome {
        self.log.push(format!("confirm:{}", seed.superhero));
        self.outcome
    }
}

fn logging_nav(log: &EventLog) -> impl Fn(&str) + '_ {
    move |to: &str| log.push(format!("nav:{to}"))
}

fn create_draft() -> HeroDraft {
    HeroDraft {
        superhero: "Batman".to_owned(),
        publisher: Publisher::DcComics,
        alter_ego: "Bruce Wayne".to_owned(),
        ..HeroDraft::default()
    }
}

fn edit_draft(id: &str) -> HeroDraft {
    HeroDraft {
        id: id.to_owned(),
        ..create_draft()
    }
}

// =============================================================
// load_for_edit
// =============================================================

#[test]
fn load_for_edit_not_found_redirects_to_root() {
    let log = EventLog::default();
    let mut store = StubStore::new(&log);
    store.fetch_result = Ok(None);

    let result = block_on(load_for_edit(&store, &logging_nav(&log), "missing"));

    assert_eq!(result, Ok(None));
    assert_eq!(log.events(), vec!["fetch:missing", "nav:/"]);
}

#[test]
fn load_for_edit_returns_record_without_navigation() {
    let log = EventLog::default();
    let mut store = StubStore::new(&log);
    let hero = edit_draft("dc-batman").to_hero();
    store.fetch_result = Ok(Some(hero.clone()));

    let result = block_on(load_for_edit(&store, &logging_nav(&log), "dc-batman"));

    assert_eq!(result, Ok(Some(hero)));
    assert_eq!(log.events(), vec!["fetch:dc-batman"]);
}

// =============================================================
// submit_hero
// =============================================================

#[test]
fn invalid_draft_produces_no_calls_navigations_or_toasts() {
    let log = EventLog::default();
    let store = StubStore::new(&log);
    let draft = HeroDraft::default();

    let result = block_on(submit_hero(&store, &logging_nav(&log), &&log, &draft));

    assert_eq!(result, Ok(SubmitOutcome::Invalid));
    assert!(log.events().is_empty());
}

#[test]
fn create_navigates_to_edit_view_then_toasts_once() {
    let log = EventLog::default();
    let mut store = StubStore::new(&log);
    let mut assigned = create_draft().to_hero();
    assigned.id = "dc-batman".to_owned();
    store.add_result = Ok(assigned);

    let result = block_on(submit_hero(&store, &logging_nav(&log), &&log, &create_draft()));

    assert_eq!(
        result,
        Ok(SubmitOutcome::Created {
            id: "dc-batman".to_owned()
        })
    );
    // Navigation strictly before the acknowledgment.
    assert_eq!(
        log.events(),
        vec![
            "add:Batman",
            "nav:/heroes/edit/dc-batman",
            "toast:Batman created!"
        ]
    );
}

#[test]
fn update_toasts_once_without_navigation() {
    let log = EventLog::default();
    let mut store = StubStore::new(&log);
    let draft = edit_draft("dc-batman");
    store.update_result = Ok(draft.to_hero());

    let result = block_on(submit_hero(&store, &logging_nav(&log), &&log, &draft));

    assert_eq!(result, Ok(SubmitOutcome::Updated));
    assert_eq!(log.events(), vec!["update:dc-batman", "toast:Batman updated!"]);
}

#[test]
fn create_failure_surfaces_error_with_no_navigation_or_toast() {
    let log = EventLog::default();
    let mut store = StubStore::new(&log);
    store.add_result = Err(ApiError::Http { status: 500 });

    let result = block_on(submit_hero(&store, &logging_nav(&log), &&log, &create_draft()));

    assert_eq!(result, Err(ApiError::Http { status: 500 }));
    assert_eq!(log.events(), vec!["add:Batman"]);
}

// =============================================================
// delete_hero
// =============================================================

#[test]
fn declined_confirmation_never_invokes_delete() {
    let log = EventLog::default();
    let store = StubStore::new(&log);
    let prompt = FixedPrompt {
        log: &log,
        outcome: ConfirmOutcome::Cancelled,
    };

    let result = block_on(delete_hero(
        &store,
        &prompt,
        &logging_nav(&log),
        &edit_draft("dc-batman"),
    ));

    assert_eq!(result, Ok(DeleteOutcome::Cancelled));
    assert_eq!(log.events(), vec!["confirm:Batman"]);
}

#[test]
fn unperformed_delete_does_not_navigate() {
    let log = EventLog::default();
    let mut store = StubStore::new(&log);
    store.delete_result = Ok(false);
    let prompt = FixedPrompt {
        log: &log,
        outcome: ConfirmOutcome::Confirmed,
    };

    let result = block_on(delete_hero(
        &store,
        &prompt,
        &logging_nav(&log),
        &edit_draft("dc-batman"),
    ));

    assert_eq!(result, Ok(DeleteOutcome::NotDeleted));
    assert_eq!(log.events(), vec!["confirm:Batman", "delete:dc-batman"]);
}

#[test]
fn confirmed_delete_navigates_to_heroes_exactly_once() {
    let log = EventLog::default();
    let mut store = StubStore::new(&log);
    store.delete_result = Ok(true);
    let prompt = FixedPrompt {
        log: &log,
        outcome: ConfirmOutcome::Confirmed,
    };

    let result = block_on(delete_hero(
        &store,
        &prompt,
        &logging_nav(&log),
        &edit_draft("dc-batman"),
    ));

    assert_eq!(result, Ok(DeleteOutcome::Deleted));
    assert_eq!(
        log.events(),
        vec!["confirm:Batman", "delete:dc-batman", "nav:/heroes"]
    );
}

#[test]
fn delete_failure_surfaces_error_without_navigation() {
    let log = EventLog::default();
    let mut store = StubStore::new(&log);
    store.delete_result = Err(ApiError::Network("offline".to_owned()));
    let prompt = FixedPrompt {
        log: &log,
        outcome: ConfirmOutcome::Confirmed,
    };

    let result = block_on(delete_hero(
        &store,
        &prompt,
        &logging_nav(&log),
        &edit_draft("dc-batman"),
    ));

    assert_eq!(result, Err(ApiError::Network("offline".to_owned())));
    assert_eq!(log.events(), vec!["confirm:Batman", "delete:dc-batman"]);
}

#[test]
#[should_panic(expected = "delete requires a persisted hero id")]
fn delete_without_working_identifier_fails_fast() {
    let log = EventLog::default();
    let store = StubStore::new(&log);
    let prompt = FixedPrompt {
        log: &log,
        outcome: ConfirmOutcome::Confirmed,
    };

    let _ = block_on(delete_hero(
        &store,
        &prompt,
        &logging_nav(&log),
        &create_draft(),
    ));
}
