//! Login page with the email + password form.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::net::types::Credentials;
use crate::state::auth::AuthState;

/// Checks run before a sign-in request goes out.
fn validate_credentials(email: &str, password: &str) -> Result<(), String> {
    if email.trim().is_empty() || password.is_empty() {
        return Err("Enter both email and password.".to_owned());
    }
    Ok(())
}

/// Login page.
///
/// On success the user lands in state straight from the response; the gate
/// then bounces this page to the preserved destination or `/sandbox`.
#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let email_value = email.get().trim().to_owned();
        let password_value = password.get();
        if let Err(message) = validate_credentials(&email_value, &password_value) {
            error.set(message);
            return;
        }
        busy.set(true);
        error.set(String::new());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let credentials = Credentials {
                email: email_value,
                password: password_value,
            };
            match crate::net::api::login(&credentials).await {
                Ok(user) => auth.update(|state| state.apply(Some(user))),
                Err(message) => error.set(message),
            }
            busy.set(false);
        });

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email_value, password_value);
            let _ = auth;
        }
    };

    view! {
        <div class="entry-page">
            <div class="entry-card">
                <h1>"Satchel"</h1>
                <p class="entry-card__subtitle">"Sign in"</p>
                <form class="entry-form" on:submit=on_submit>
                    <input
                        class="entry-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="entry-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="entry-button" type="submit" disabled=move || busy.get()>
                        "Sign in"
                    </button>
                </form>
                <Show when=move || !error.get().is_empty()>
                    <p class="entry-message entry-message--error">{move || error.get()}</p>
                </Show>
                <p class="entry-card__links">
                    <a href="/signup">"Create account"</a>
                    <a href="/forgot-password">"Forgot password?"</a>
                </p>
            </div>
        </div>
    }
}
