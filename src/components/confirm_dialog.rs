//! Delete-confirmation dialog and its flow-facing prompt adapter.
//!
//! DESIGN
//! ======
//! The dialog closes through a typed [`ConfirmOutcome`], never a bare
//! boolean, and resolves exactly once: the prompt adapter hands the edit
//! flow a oneshot receiver whose sender is consumed by the first close
//! event. A dropped sender (dialog unmounted mid-flight) reads as cancelled.

#[cfg(test)]
#[path = "confirm_dialog_test.rs"]
mod confirm_dialog_test;

use futures::channel::oneshot;
use leptos::prelude::*;

use crate::flow::{ConfirmOutcome, ConfirmPrompt};
use crate::net::types::Hero;

/// Await a dialog close event; a dropped sender counts as cancelled.
pub(crate) async fn await_outcome(rx: oneshot::Receiver<ConfirmOutcome>) -> ConfirmOutcome {
    rx.await.unwrap_or(ConfirmOutcome::Cancelled)
}

/// [`ConfirmPrompt`] implementation backed by the rendered dialog.
///
/// `confirm` seeds the dialog signal (which mounts [`ConfirmDialog`]) and
/// suspends until the close callback fires the oneshot sender.
#[derive(Clone, Copy)]
pub struct DialogPrompt {
    pub seed: RwSignal<Option<Hero>>,
    pub resolver: RwSignal<Option<oneshot::Sender<ConfirmOutcome>>>,
}

impl ConfirmPrompt for DialogPrompt {
    async fn confirm(&self, seed: &Hero) -> ConfirmOutcome {
        let (tx, rx) = oneshot::channel();
        self.resolver.set(Some(tx));
        self.seed.set(Some(seed.clone()));
        await_outcome(rx).await
    }
}

impl DialogPrompt {
    /// Close the dialog and deliver `outcome` to the suspended flow, if one
    /// is still waiting.
    pub fn resolve(&self, outcome: ConfirmOutcome) {
        self.seed.set(None);
        let mut taken = None;
        self.resolver.update(|slot| taken = slot.take());
        if let Some(tx) = taken {
            let _ = tx.send(outcome);
        }
    }
}

/// Modal confirmation dialog seeded with the draft under deletion.
#[component]
pub fn ConfirmDialog(seed: Hero, on_close: Callback<ConfirmOutcome>) -> impl IntoView {
    let superhero = seed.superhero.clone();
    let alter_ego = seed.alter_ego.clone();
    let publisher = seed.publisher.description();

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(ConfirmOutcome::Cancelled)>
            <div class="dialog dialog--confirm" on:click=move |ev| ev.stop_propagation()>
                <h2>"Delete Hero"</h2>
                <p>
                    "Are you sure you want to delete "
                    <strong>{superhero}</strong>
                    "?"
                </p>
                <div class="dialog__seed">
                    <span class="dialog__seed-label">"Publisher"</span>
                    <span class="dialog__seed-value">{publisher}</span>
                    <Show when={
                        let alter_ego = alter_ego.clone();
                        move || !alter_ego.is_empty()
                    }>
                        <span class="dialog__seed-label">"Alter ego"</span>
                        <span class="dialog__seed-value">{alter_ego.clone()}</span>
                    </Show>
                </div>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_close.run(ConfirmOutcome::Cancelled)>
                        "No"
                    </button>
                    <button
                        class="btn btn--danger"
                        on:click=move |_| on_close.run(ConfirmOutcome::Confirmed)
                    >
                        "Yes, delete"
                    </button>
                </div>
            </div>
        </div>
    }
}
