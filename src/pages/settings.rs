//! Settings layout shell and the section index.

use leptos::prelude::*;
use leptos_router::components::Outlet;

/// Chrome around the settings routes: a way back to the sandbox plus the
/// section navigation. Child routes render into the outlet.
#[component]
pub fn SettingsShell() -> impl IntoView {
    view! {
        <div class="settings-shell">
            <header class="settings-shell__bar">
                <a class="settings-shell__back" href="/sandbox">"Back to sandbox"</a>
                <h1>"Settings"</h1>
            </header>
            <nav class="settings-shell__nav">
                <a href="/settings/profile">"Profile"</a>
                <a href="/settings/subscription">"Subscription"</a>
                <a href="/settings/preferences">"Preferences"</a>
            </nav>
            <main class="settings-shell__content">
                <Outlet/>
            </main>
        </div>
    }
}

/// Settings index.
#[component]
pub fn SettingsHome() -> impl IntoView {
    view! {
        <div class="settings-home">
            <p>"Choose a section."</p>
        </div>
    }
}
