//! Subscription section.

use leptos::prelude::*;

/// Subscription placeholder. Every account is on the free plan for now.
#[component]
pub fn SubscriptionPage() -> impl IntoView {
    view! {
        <section class="settings-section settings-section--subscription">
            <h2>"Subscription"</h2>
            <p class="settings-section__plan">"Free plan"</p>
            <p>"Paid plans are not available yet."</p>
        </section>
    }
}
