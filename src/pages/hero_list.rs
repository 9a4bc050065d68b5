//! Hero list page — the authenticated landing route.

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::components::hero_card::HeroCard;
use crate::components::snackbar::Snackbar;
use crate::flow::notify_failure;
use crate::net::api;
use crate::net::types::Hero;
use crate::state::auth::AuthState;
use crate::state::toast::ToastState;

#[component]
pub fn HeroListPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    // None = still loading.
    let heroes = RwSignal::new(None::<Vec<Hero>>);
    let requested = RwSignal::new(false);

    // Redirect to login if not authenticated.
    let navigate_login = leptos_router::hooks::use_navigate();
    Effect::new(move || {
        let state = auth.get();
        if !state.loading && !state.authenticated {
            navigate_login("/login", NavigateOptions::default());
        }
    });

    Effect::new(move || {
        if requested.get() {
            return;
        }
        requested.set(true);
        leptos::task::spawn_local(async move {
            match api::fetch_heroes().await {
                Ok(list) => heroes.set(Some(list)),
                Err(err) => {
                    notify_failure(&Snackbar(toasts), "Could not load heroes", &err);
                    heroes.set(Some(Vec::new()));
                }
            }
        });
    });

    let navigate_new = leptos_router::hooks::use_navigate();
    let on_new = move |_| navigate_new("/heroes/new", NavigateOptions::default());

    view! {
        <div class="hero-list-page">
            <header class="hero-list-page__header toolbar">
                <span class="toolbar__title">"Heroes"</span>
                <span class="toolbar__spacer"></span>
                <button class="btn toolbar__new-hero" on:click=on_new>
                    "+ New Hero"
                </button>
            </header>
            <Show
                when=move || heroes.get().is_some()
                fallback=|| view! { <p>"Loading heroes..."</p> }
            >
                <div class="hero-list-page__grid">
                    {move || {
                        heroes
                            .get()
                            .unwrap_or_default()
                            .into_iter()
                            .map(|hero| view! { <HeroCard hero=hero /> })
                            .collect::<Vec<_>>()
                    }}
                </div>
            </Show>
        </div>
    }
}
