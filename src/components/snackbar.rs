//! Snackbar host rendering the toast queue, plus the flow-facing toaster.

use leptos::prelude::*;

use crate::flow::Toaster;
use crate::state::toast::ToastState;

/// [`Toaster`] implementation writing into the shared toast queue.
#[derive(Clone, Copy)]
pub struct Snackbar(pub RwSignal<ToastState>);

impl Toaster for Snackbar {
    fn show(&self, message: &str, action_label: &str, duration_ms: u32) {
        self.0.update(|state| {
            state.push(message, action_label, duration_ms);
        });
    }
}

/// Renders queued toasts and schedules their auto-dismissal.
#[component]
pub fn SnackbarHost() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    // Schedule dismissal once per toast; ids are monotonic, so a high-water
    // mark is enough to tell new entries from already-scheduled ones.
    let scheduled_through = RwSignal::new(0_u64);
    Effect::new(move || {
        let state = toasts.get();
        for toast in &state.toasts {
            if toast.id <= scheduled_through.get_untracked() {
                continue;
            }
            scheduled_through.set(toast.id);
            #[cfg(feature = "hydrate")]
            {
                let id = toast.id;
                let duration = u64::from(toast.duration_ms);
                leptos::task::spawn_local(async move {
                    gloo_timers::future::sleep(std::time::Duration::from_millis(duration)).await;
                    toasts.update(|state| state.dismiss(id));
                });
            }
        }
    });

    view! {
        <div class="snackbar-host">
            {move || {
                toasts
                    .get()
                    .toasts
                    .into_iter()
                    .map(|toast| {
                        let id = toast.id;
                        view! {
                            <div class="snackbar">
                                <span class="snackbar__message">{toast.message}</span>
                                <button
                                    class="btn snackbar__action"
                                    on:click=move |_| toasts.update(|state| state.dismiss(id))
                                >
                                    {toast.action_label}
                                </button>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
