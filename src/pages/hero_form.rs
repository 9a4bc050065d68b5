//! Hero create/edit form page.
//!
//! ARCHITECTURE
//! ============
//! The page owns the working draft; whether the draft carries an identifier
//! decides create vs. update on submit. An edit-context route (path includes
//! `edit`) loads the backing record and fully resets the draft from it.
//! Delete goes through the confirmation dialog before the record service is
//! ever called.

use futures::channel::oneshot;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_params_map};

use crate::components::confirm_dialog::{ConfirmDialog, DialogPrompt};
use crate::components::snackbar::Snackbar;
use crate::flow::edit::{SubmitOutcome, delete_hero, load_for_edit, submit_hero};
use crate::flow::{ConfirmOutcome, notify_failure};
use crate::net::api::Api;
use crate::net::types::{Hero, Publisher};
use crate::state::auth::AuthState;
use crate::state::hero_form::HeroDraft;
use crate::state::toast::ToastState;

#[component]
pub fn HeroFormPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let params = use_params_map();
    let location = use_location();

    let draft = RwSignal::new(HeroDraft::default());
    let busy = RwSignal::new(false);
    let confirm_seed = RwSignal::new(None::<Hero>);
    let confirm_resolver = RwSignal::new(None::<oneshot::Sender<ConfirmOutcome>>);
    let prompt = DialogPrompt {
        seed: confirm_seed,
        resolver: confirm_resolver,
    };

    // Redirect to login if not authenticated.
    let navigate_login = leptos_router::hooks::use_navigate();
    Effect::new(move || {
        let state = auth.get();
        if !state.loading && !state.authenticated {
            navigate_login("/login", NavigateOptions::default());
        }
    });

    // Edit context: load the backing record and reset the draft from it.
    let navigate_load = leptos_router::hooks::use_navigate();
    let loaded_id = RwSignal::new(None::<String>);
    Effect::new(move || {
        if !location.pathname.read().contains("edit") {
            return;
        }
        let Some(id) = params.read().get("id") else {
            return;
        };
        if loaded_id.get_untracked().as_deref() == Some(id.as_str()) {
            return;
        }
        loaded_id.set(Some(id.clone()));

        let navigate = navigate_load.clone();
        leptos::task::spawn_local(async move {
            let nav = move |to: &str| navigate(to, NavigateOptions::default());
            match load_for_edit(&Api, &nav, &id).await {
                Ok(Some(hero)) => draft.update(|d| d.reset_from(&hero)),
                Ok(None) => {}
                Err(err) => notify_failure(&Snackbar(toasts), "Could not load hero", &err),
            }
        });
    });

    let navigate_submit = leptos_router::hooks::use_navigate();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let current = draft.get();
        busy.set(true);

        let navigate = navigate_submit.clone();
        leptos::task::spawn_local(async move {
            let nav = move |to: &str| navigate(to, NavigateOptions::default());
            let snackbar = Snackbar(toasts);
            match submit_hero(&Api, &nav, &snackbar, &current).await {
                // Keep the assigned id so further submits become updates.
                Ok(SubmitOutcome::Created { id }) => draft.update(|d| d.id = id),
                Ok(SubmitOutcome::Updated | SubmitOutcome::Invalid) => {}
                Err(err) => notify_failure(&snackbar, "Could not save hero", &err),
            }
            busy.set(false);
        });
    };

    let navigate_delete = leptos_router::hooks::use_navigate();
    let on_delete = Callback::new(move |()| {
        if busy.get() {
            return;
        }
        let current = draft.get();
        busy.set(true);

        let navigate = navigate_delete.clone();
        leptos::task::spawn_local(async move {
            let nav = move |to: &str| navigate(to, NavigateOptions::default());
            match delete_hero(&Api, &prompt, &nav, &current).await {
                Ok(_) => {}
                Err(err) => notify_failure(&Snackbar(toasts), "Could not delete hero", &err),
            }
            busy.set(false);
        });
    });

    let on_confirm_close = Callback::new(move |outcome: ConfirmOutcome| {
        prompt.resolve(outcome);
    });

    view! {
        <div class="hero-form-page">
            <h1>
                {move || {
                    if draft.with(HeroDraft::is_edit_mode) { "Edit Hero" } else { "New Hero" }
                }}
            </h1>
            <form class="hero-form" on:submit=on_submit>
                <label class="hero-form__label">
                    "Superhero"
                    <input
                        class="hero-form__input"
                        type="text"
                        prop:value=move || draft.with(|d| d.superhero.clone())
                        on:input=move |ev| draft.update(|d| d.superhero = event_target_value(&ev))
                    />
                </label>
                <label class="hero-form__label">
                    "Publisher"
                    <select
                        class="hero-form__input"
                        prop:value=move || draft.with(|d| d.publisher.label().to_owned())
                        on:change=move |ev| {
                            if let Some(publisher) = Publisher::from_label(&event_target_value(&ev)) {
                                draft.update(|d| d.publisher = publisher);
                            }
                        }
                    >
                        {Publisher::all()
                            .into_iter()
                            .map(|publisher| {
                                view! {
                                    <option value=publisher.label()>{publisher.description()}</option>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </select>
                </label>
                <label class="hero-form__label">
                    "Alter ego"
                    <input
                        class="hero-form__input"
                        type="text"
                        prop:value=move || draft.with(|d| d.alter_ego.clone())
                        on:input=move |ev| draft.update(|d| d.alter_ego = event_target_value(&ev))
                    />
                </label>
                <label class="hero-form__label">
                    "First appearance"
                    <input
                        class="hero-form__input"
                        type="text"
                        prop:value=move || draft.with(|d| d.first_appearance.clone())
                        on:input=move |ev| {
                            draft.update(|d| d.first_appearance = event_target_value(&ev));
                        }
                    />
                </label>
                <label class="hero-form__label">
                    "Characters"
                    <input
                        class="hero-form__input"
                        type="text"
                        prop:value=move || draft.with(|d| d.characters.clone())
                        on:input=move |ev| draft.update(|d| d.characters = event_target_value(&ev))
                    />
                </label>
                <label class="hero-form__label">
                    "Alternate image URL"
                    <input
                        class="hero-form__input"
                        type="text"
                        prop:value=move || draft.with(|d| d.alt_img.clone())
                        on:input=move |ev| draft.update(|d| d.alt_img = event_target_value(&ev))
                    />
                </label>
                <div class="hero-form__actions">
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || {
                            if draft.with(HeroDraft::is_edit_mode) { "Update" } else { "Create" }
                        }}
                    </button>
                    <Show when=move || draft.with(HeroDraft::is_edit_mode)>
                        <button
                            class="btn btn--danger"
                            type="button"
                            disabled=move || busy.get()
                            on:click=move |_| on_delete.run(())
                        >
                            "Delete"
                        </button>
                    </Show>
                </div>
            </form>
            {move || {
                confirm_seed
                    .get()
                    .map(|seed| view! { <ConfirmDialog seed=seed on_close=on_confirm_close /> })
            }}
        </div>
    }
}
