use std::cell::RefCell;

use super::*;

struct RecordingToaster(RefCell<Vec<(String, String, u32)>>);

impl Toaster for RecordingToaster {
    fn show(&self, message: &str, action_label: &str, duration_ms: u32) {
        self.0
            .borrow_mut()
            .push((message.to_owned(), action_label.to_owned(), duration_ms));
    }
}

#[test]
fn notify_failure_names_operation_and_error() {
    let toaster = RecordingToaster(RefCell::new(Vec::new()));
    notify_failure(
        &toaster,
        "Could not save hero",
        &ApiError::Http { status: 500 },
    );

    let shown = toaster.0.borrow();
    assert_eq!(shown.len(), 1);
    assert_eq!(
        shown[0].0,
        "Could not save hero: request failed with status 500"
    );
    assert_eq!(shown[0].1, ERROR_ACTION_LABEL);
    assert_eq!(shown[0].2, SNACKBAR_DURATION_MS);
}

#[test]
fn closures_implement_navigator() {
    let seen = RefCell::new(Vec::new());
    let nav = |to: &str| seen.borrow_mut().push(to.to_owned());
    nav.navigate("/heroes/list");
    assert_eq!(*seen.borrow(), vec!["/heroes/list".to_owned()]);
}

#[test]
fn confirm_outcome_variants_are_distinct() {
    assert_ne!(ConfirmOutcome::Confirmed, ConfirmOutcome::Cancelled);
}
