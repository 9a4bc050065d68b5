use super::*;

#[test]
fn push_assigns_increasing_ids() {
    let mut state = ToastState::default();
    let first = state.push("Batman created!", "DONE", SNACKBAR_DURATION_MS);
    let second = state.push("Batman updated!", "DONE", SNACKBAR_DURATION_MS);
    assert!(second > first);
    assert_eq!(state.toasts.len(), 2);
    assert_eq!(state.high_water_mark(), second);
}

#[test]
fn dismiss_removes_only_the_matching_toast() {
    let mut state = ToastState::default();
    let first = state.push("one", "DONE", 1000);
    let second = state.push("two", "DONE", 1000);

    state.dismiss(first);
    assert_eq!(state.toasts.len(), 1);
    assert_eq!(state.toasts[0].id, second);

    // Dismissing an already-gone id is a no-op.
    state.dismiss(first);
    assert_eq!(state.toasts.len(), 1);
}

#[test]
fn push_records_message_action_and_duration() {
    let mut state = ToastState::default();
    state.push("Batman created!", "DONE", 2500);
    let toast = &state.toasts[0];
    assert_eq!(toast.message, "Batman created!");
    assert_eq!(toast.action_label, "DONE");
    assert_eq!(toast.duration_ms, 2500);
}
