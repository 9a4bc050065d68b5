//! Hero edit flow: create, update, and delete with confirmation.
//!
//! SYSTEM CONTEXT
//! ==============
//! The form page owns a `HeroDraft`; these functions own the sequencing
//! rules around it. The presence of a working identifier in the draft is
//! what distinguishes create mode from edit mode.

#[cfg(test)]
#[path = "edit_test.rs"]
mod edit_test;

use super::{ConfirmOutcome, ConfirmPrompt, HeroStore, Navigator, Toaster};
use crate::net::api::ApiError;
use crate::net::types::Hero;
use crate::state::hero_form::HeroDraft;
use crate::state::toast::SNACKBAR_DURATION_MS;

/// Action label on create/update acknowledgment toasts.
pub const ACK_ACTION_LABEL: &str = "DONE";

/// How a submit attempt resolved.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The draft failed validation; nothing was called, shown, or navigated.
    Invalid,
    /// A record was created under the service-assigned id.
    Created { id: String },
    /// The existing record was updated in place.
    Updated,
}

/// How a delete attempt resolved. Every non-`Deleted` outcome ends the
/// sequence silently with no navigation and no notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The confirmation dialog was declined or dismissed.
    Cancelled,
    /// Confirmed, but the record service reported nothing was deleted.
    NotDeleted,
    /// Confirmed and deleted; one navigation to the list view occurred.
    Deleted,
}

/// Resolve the record backing an edit-context form.
///
/// Not-found navigates to the application root and yields `None`; the caller
/// resets the whole draft from a returned record (replace, not merge).
///
/// # Errors
///
/// Propagates the record service's [`ApiError`]; the draft is untouched.
pub async fn load_for_edit<S: HeroStore, N: Navigator>(
    store: &S,
    nav: &N,
    id: &str,
) -> Result<Option<Hero>, ApiError> {
    match store.fetch_by_id(id).await? {
        None => {
            nav.navigate("/");
            Ok(None)
        }
        Some(hero) => Ok(Some(hero)),
    }
}

/// Submit the draft: create when the working identifier is empty, update
/// otherwise.
///
/// Create navigates to the edit view for the assigned id and *then* shows
/// the acknowledgment toast; update only shows the toast. An invalid draft
/// produces zero service calls, navigations, and notifications.
///
/// # Errors
///
/// Propagates the record service's [`ApiError`]; nothing was navigated or
/// shown, and the draft is untouched for retry.
pub async fn submit_hero<S, N, T>(
    store: &S,
    nav: &N,
    toast: &T,
    draft: &HeroDraft,
) -> Result<SubmitOutcome, ApiError>
where
    S: HeroStore,
    N: Navigator,
    T: Toaster,
{
    if draft.validate().is_err() {
        return Ok(SubmitOutcome::Invalid);
    }

    let hero = draft.to_hero();
    if hero.id.is_empty() {
        let created = store.add(&hero).await?;
        nav.navigate(&format!("/heroes/edit/{}", created.id));
        toast.show(
            &format!("{} created!", created.superhero),
            ACK_ACTION_LABEL,
            SNACKBAR_DURATION_MS,
        );
        Ok(SubmitOutcome::Created { id: created.id })
    } else {
        let updated = store.update(&hero).await?;
        toast.show(
            &format!("{} updated!", updated.superhero),
            ACK_ACTION_LABEL,
            SNACKBAR_DURATION_MS,
        );
        Ok(SubmitOutcome::Updated)
    }
}

/// Delete the draft's record after dialog confirmation.
///
/// Gate one: the dialog must resolve [`ConfirmOutcome::Confirmed`], or the
/// record service is never called. Gate two: the service must report the
/// deletion happened, or no navigation occurs. Passing both gates navigates
/// to `/heroes` exactly once.
///
/// # Errors
///
/// Propagates the record service's [`ApiError`]; no navigation occurs.
///
/// # Panics
///
/// Deleting a draft without a working identifier is a programming error in
/// the caller and fails fast.
pub async fn delete_hero<S, P, N>(
    store: &S,
    prompt: &P,
    nav: &N,
    draft: &HeroDraft,
) -> Result<DeleteOutcome, ApiError>
where
    S: HeroStore,
    P: ConfirmPrompt,
    N: Navigator,
{
    assert!(
        !draft.id.is_empty(),
        "delete requires a persisted hero id"
    );

    match prompt.confirm(&draft.to_hero()).await {
        ConfirmOutcome::Cancelled => Ok(DeleteOutcome::Cancelled),
        ConfirmOutcome::Confirmed => {
            if store.delete_by_id(&draft.id).await? {
                nav.navigate("/heroes");
                Ok(DeleteOutcome::Deleted)
            } else {
                Ok(DeleteOutcome::NotDeleted)
            }
        }
    }
}
