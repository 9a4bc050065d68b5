//! Orchestration flows: guard, login, detail resolution, and form submission.
//!
//! ARCHITECTURE
//! ============
//! Each flow is an async function generic over the service seams below, so
//! the sequencing and branching rules can be unit tested natively with hand
//! mocks while pages wire in the live `net::api::Api` handle. Flows return
//! `Result`; pages funnel every `Err` through [`notify_failure`] so no
//! service failure is dropped silently.

// Flows run on the single-threaded browser executor; a Send bound on the
// returned futures would be wrong for closure-captured signals.
#![allow(async_fn_in_trait)]

pub mod detail;
pub mod edit;
pub mod guard;
pub mod login;

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

use crate::net::api::ApiError;
use crate::net::types::{Hero, User};
use crate::state::toast::SNACKBAR_DURATION_MS;

/// Auth-service seam: session check and credential login.
pub trait AuthGateway {
    async fn check_authentication(&self) -> Result<bool, ApiError>;
    async fn login(&self, email: &str, secret: &str) -> Result<User, ApiError>;
}

/// Record-service seam for hero records.
pub trait HeroStore {
    async fn fetch_by_id(&self, id: &str) -> Result<Option<Hero>, ApiError>;
    async fn fetch_all(&self) -> Result<Vec<Hero>, ApiError>;
    async fn add(&self, hero: &Hero) -> Result<Hero, ApiError>;
    async fn update(&self, hero: &Hero) -> Result<Hero, ApiError>;
    async fn delete_by_id(&self, id: &str) -> Result<bool, ApiError>;
}

/// Navigation seam. Blanket-implemented for closures so pages can pass a
/// `use_navigate` adapter and tests can pass a recording closure.
pub trait Navigator {
    fn navigate(&self, to: &str);
}

impl<F: Fn(&str)> Navigator for F {
    fn navigate(&self, to: &str) {
        self(to);
    }
}

/// Fire-and-forget notification seam (the snackbar).
pub trait Toaster {
    fn show(&self, message: &str, action_label: &str, duration_ms: u32);
}

/// Resolution of a confirmation dialog. A dedicated type rather than a bare
/// boolean: "no answer yet" is simply the unresolved future.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfirmOutcome {
    Confirmed,
    Cancelled,
}

/// Confirmation-dialog seam: opens seeded with the current draft and resolves
/// exactly once when the dialog closes.
pub trait ConfirmPrompt {
    async fn confirm(&self, seed: &Hero) -> ConfirmOutcome;
}

/// Action label on error toasts.
pub const ERROR_ACTION_LABEL: &str = "DISMISS";

/// Uniform error-notification policy: one visible toast per failed service
/// call, with the failing operation named. State is left untouched by the
/// caller so the user can retry.
pub fn notify_failure<T: Toaster>(toast: &T, context: &str, err: &ApiError) {
    toast.show(
        &format!("{context}: {err}"),
        ERROR_ACTION_LABEL,
        SNACKBAR_DURATION_MS,
    );
}
