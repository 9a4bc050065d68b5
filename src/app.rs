//! Application shell: router, shared context, and session bootstrap.
//!
//! SYSTEM CONTEXT
//! ==============
//! `/login` is a public-only route: the guard redirects authenticated
//! callers to the root. Every hero route redirects unauthenticated callers
//! to `/login`. The same guard decision backs both the route-entry check
//! here and any route-matching check a host shell performs.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::NavigateOptions;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;

use crate::components::snackbar::SnackbarHost;
use crate::flow::guard::check_public_route;
use crate::net::api;
use crate::net::api::Api;
use crate::pages::hero_detail::HeroDetailPage;
use crate::pages::hero_form::HeroFormPage;
use crate::pages::hero_list::HeroListPage;
use crate::pages::login::LoginPage;
use crate::state::auth::AuthState;
use crate::state::toast::ToastState;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    provide_context(auth);
    let toasts = RwSignal::new(ToastState::default());
    provide_context(toasts);

    // Resolve the session fact once on mount; until then `loading` keeps the
    // authenticated routes from redirecting prematurely.
    Effect::new(move || {
        if !auth.get_untracked().loading {
            return;
        }
        leptos::task::spawn_local(async move {
            let authenticated = match api::check_authentication().await {
                Ok(value) => value,
                Err(_err) => {
                    #[cfg(feature = "hydrate")]
                    log::warn!("session check failed: {_err}");
                    false
                }
            };
            auth.update(|state| state.resolve_check(authenticated));
        });
    });

    view! {
        <Title text="Herodex" />
        <Stylesheet id="leptos" href="/pkg/herodex.css" />
        <Router>
            <main class="app-shell">
                <Routes fallback=|| view! { <Redirect path="/heroes/list" /> }>
                    <Route path=path!("/") view=|| view! { <Redirect path="/heroes/list" /> } />
                    <Route path=path!("/login") view=LoginScreen />
                    <Route path=path!("/heroes") view=HeroListPage />
                    <Route path=path!("/heroes/list") view=HeroListPage />
                    <Route path=path!("/heroes/new") view=HeroFormPage />
                    <Route path=path!("/heroes/edit/:id") view=HeroFormPage />
                    <Route path=path!("/heroes/:id") view=HeroDetailPage />
                </Routes>
                <SnackbarHost />
            </main>
        </Router>
    }
}

/// Public-only wrapper for the login route: evaluates the guard against the
/// auth service on entry and only renders the form when entry is allowed.
/// A denied caller has already been redirected to the root by the guard.
#[component]
fn LoginScreen() -> impl IntoView {
    let allowed = RwSignal::new(false);
    let navigate = leptos_router::hooks::use_navigate();

    Effect::new(move || {
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let nav = move |to: &str| navigate(to, NavigateOptions::default());
            if check_public_route(&Api, &nav).await {
                allowed.set(true);
            }
        });
    });

    view! {
        <Show
            when=move || allowed.get()
            fallback=|| view! { <p class="route-guard__pending">"Checking session..."</p> }
        >
            <LoginPage />
        </Show>
    }
}
