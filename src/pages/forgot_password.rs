//! Password reset request page.

use leptos::prelude::*;

/// Forgot-password page. Takes an email address and reports the outcome in
/// place; the actual reset flow happens over email.
#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let email_value = email.get().trim().to_owned();
        if !email_value.contains('@') {
            message.set("Enter a valid email address.".to_owned());
            return;
        }
        busy.set(true);
        message.set(String::new());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::request_password_reset(&email_value).await {
                Ok(()) => {
                    message.set("If that address has an account, a reset link is on its way.".to_owned());
                }
                Err(detail) => message.set(detail),
            }
            busy.set(false);
        });

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = email_value;
        }
    };

    view! {
        <div class="entry-page">
            <div class="entry-card">
                <h1>"Satchel"</h1>
                <p class="entry-card__subtitle">"Reset password"</p>
                <form class="entry-form" on:submit=on_submit>
                    <input
                        class="entry-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <button class="entry-button" type="submit" disabled=move || busy.get()>
                        "Send reset link"
                    </button>
                </form>
                <Show when=move || !message.get().is_empty()>
                    <p class="entry-message">{move || message.get()}</p>
                </Show>
                <p class="entry-card__links">
                    <a href="/login">"Back to sign in"</a>
                </p>
            </div>
        </div>
    }
}
