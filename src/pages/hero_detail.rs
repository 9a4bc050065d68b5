//! Hero detail page: resolves a record from the route parameter.
//!
//! ARCHITECTURE
//! ============
//! Route-parameter changes re-trigger the fetch without a remount. Each new
//! parameter starts a fresh generation in `DetailState`, so a stale response
//! that arrives after in-place navigation is discarded rather than applied.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_params_map;

use crate::components::snackbar::Snackbar;
use crate::flow::detail::load_hero_detail;
use crate::flow::notify_failure;
use crate::net::api::Api;
use crate::state::auth::AuthState;
use crate::state::hero_detail::DetailState;
use crate::state::toast::ToastState;

#[component]
pub fn HeroDetailPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let params = use_params_map();
    let detail = RwSignal::new(DetailState::default());
    let last_id = RwSignal::new(None::<String>);

    // Redirect to login if not authenticated.
    let navigate_login = leptos_router::hooks::use_navigate();
    Effect::new(move || {
        let state = auth.get();
        if !state.loading && !state.authenticated {
            navigate_login("/login", NavigateOptions::default());
        }
    });

    // Fetch on every new route parameter; stale completions are dropped by
    // the generation check inside `DetailState::apply`.
    let navigate_fetch = leptos_router::hooks::use_navigate();
    Effect::new(move || {
        let Some(id) = params.read().get("id") else {
            return;
        };
        if last_id.get_untracked().as_deref() == Some(id.as_str()) {
            return;
        }
        last_id.set(Some(id.clone()));

        let mut generation = 0;
        detail.update(|state| generation = state.begin_fetch());

        let navigate = navigate_fetch.clone();
        leptos::task::spawn_local(async move {
            let nav = move |to: &str| navigate(to, NavigateOptions::default());
            let result = load_hero_detail(&Api, &nav, &id, generation, |generation, hero| {
                let mut applied = false;
                detail.update(|state| applied = state.apply(generation, hero));
                applied
            })
            .await;
            if let Err(err) = result {
                notify_failure(&Snackbar(toasts), "Could not load hero", &err);
            }
        });
    });

    let navigate_back = leptos_router::hooks::use_navigate();
    let on_back = move |_| navigate_back("/heroes/list", NavigateOptions::default());

    view! {
        <div class="hero-detail-page">
            <Show
                when=move || detail.with(|state| state.hero().is_some())
                fallback=|| view! { <p class="hero-detail-page__loading">"Loading hero..."</p> }
            >
                {move || {
                    detail
                        .with(|state| state.hero().cloned())
                        .map(|hero| {
                            let edit_href = format!("/heroes/edit/{}", hero.id);
                            view! {
                                <article class="hero-detail">
                                    <img
                                        class="hero-detail__image"
                                        src=hero.image_url()
                                        alt=hero.superhero.clone()
                                    />
                                    <div class="hero-detail__body">
                                        <h1>{hero.superhero.clone()}</h1>
                                        <p class="hero-detail__publisher">
                                            {hero.publisher.description()}
                                        </p>
                                        <dl class="hero-detail__facts">
                                            <dt>"Alter ego"</dt>
                                            <dd>{hero.alter_ego.clone()}</dd>
                                            <dt>"First appearance"</dt>
                                            <dd>{hero.first_appearance.clone()}</dd>
                                            <dt>"Characters"</dt>
                                            <dd>{hero.characters.clone()}</dd>
                                        </dl>
                                        <a class="btn" href=edit_href>
                                            "Edit"
                                        </a>
                                    </div>
                                </article>
                            }
                        })
                }}
            </Show>
            <button class="btn hero-detail-page__back" on:click=on_back>
                "Back to list"
            </button>
        </div>
    }
}
