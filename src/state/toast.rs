//! Toast queue backing the snackbar host.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

/// Default display duration for acknowledgment toasts.
pub const SNACKBAR_DURATION_MS: u32 = 2500;

/// A single queued notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    /// Monotonically increasing id so auto-dismiss removes the right entry.
    pub id: u64,
    pub message: String,
    pub action_label: String,
    pub duration_ms: u32,
}

/// Queue of visible toasts, newest last.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastState {
    next_id: u64,
    pub toasts: Vec<Toast>,
}

impl ToastState {
    /// Queue a toast and return its id.
    pub fn push(&mut self, message: &str, action_label: &str, duration_ms: u32) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.toasts.push(Toast {
            id,
            message: message.to_owned(),
            action_label: action_label.to_owned(),
            duration_ms,
        });
        id
    }

    /// Remove the toast with `id`, if it is still queued.
    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|toast| toast.id != id);
    }

    /// Highest id handed out so far; used by the host to schedule dismissal
    /// only for toasts it has not yet seen.
    pub fn high_water_mark(&self) -> u64 {
        self.next_id
    }
}
