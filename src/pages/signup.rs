//! Signup page with the account creation form.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::net::types::Credentials;
use crate::state::auth::AuthState;

/// Checks run before a registration request goes out.
fn validate_signup(email: &str, password: &str, confirm: &str) -> Result<(), String> {
    if !email.contains('@') {
        return Err("Enter a valid email address.".to_owned());
    }
    if password.chars().count() < 8 {
        return Err("Password must be at least 8 characters.".to_owned());
    }
    if password != confirm {
        return Err("Passwords do not match.".to_owned());
    }
    Ok(())
}

/// Signup page. A successful registration comes back already signed in, so
/// the user lands in state and the gate moves on from the entry flow.
#[component]
pub fn SignupPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let email_value = email.get().trim().to_owned();
        let password_value = password.get();
        if let Err(message) = validate_signup(&email_value, &password_value, &confirm.get()) {
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
            match crate::net::api::signup(&credentials).await {
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
                <p class="entry-card__subtitle">"Create account"</p>
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
                        placeholder="Password (8+ characters)"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <input
                        class="entry-input"
                        type="password"
                        placeholder="Confirm password"
                        prop:value=move || confirm.get()
                        on:input=move |ev| confirm.set(event_target_value(&ev))
                    />
                    <button class="entry-button" type="submit" disabled=move || busy.get()>
                        "Create account"
                    </button>
                </form>
                <Show when=move || !error.get().is_empty()>
                    <p class="entry-message entry-message--error">{move || error.get()}</p>
                </Show>
                <p class="entry-card__links">
                    <a href="/login">"Already have an account? Sign in"</a>
                </p>
            </div>
        </div>
    }
}
