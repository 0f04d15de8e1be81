//! Error view for paths no route covers.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

/// Shown when no route matches the current path. Non-fatal: the app stays
/// up, the offending path is displayed, and the view links back to safe
/// ground.
#[component]
pub fn RouteErrorPage() -> impl IntoView {
    let location = use_location();
    let path = move || location.pathname.get();

    view! {
        <section class="route-error">
            <h1>"Page not found"</h1>
            <p class="route-error__path">
                <code>{path}</code>
            </p>
            <p class="route-error__detail">"No screen is registered for this path."</p>
            <a class="btn" href="/sandbox">"Back to sandbox"</a>
        </section>
    }
}
