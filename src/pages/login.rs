//! Login page: credential form submitting to the auth service.
//!
//! SYSTEM CONTEXT
//! ==============
//! Credentials are user-supplied form input; nothing here is hard-coded. A
//! `busy` signal suppresses double submission while a login is in flight.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::flow::login::submit_login;
use crate::net::api::Api;
use crate::state::auth::AuthState;

/// Trim and require both credential fields before calling the auth service.
fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    let password = password.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter both email and password.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let navigate = leptos_router::hooks::use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value) =
            match validate_login_input(&email.get(), &password.get()) {
                Ok(values) => values,
                Err(message) => {
                    info.set(message.to_owned());
                    return;
                }
            };
        busy.set(true);
        info.set(String::new());

        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let nav = move |to: &str| navigate(to, NavigateOptions::default());
            match submit_login(&Api, &nav, &email_value, &password_value).await {
                Ok(user) => auth.update(|state| state.establish(user)),
                Err(e) => {
                    info.set(format!("Login failed: {e}"));
                    busy.set(false);
                }
            }
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Herodex"</h1>
                <p class="login-card__subtitle">"Sign in to manage heroes"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign In"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
