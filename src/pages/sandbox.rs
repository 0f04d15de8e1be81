//! Sandbox layout shell and the module home grid.

use leptos::prelude::*;
use leptos_router::components::Outlet;

use crate::components::module_card::ModuleCard;
use crate::state::auth::AuthState;

/// Persistent chrome around the sandbox routes: brand, module links, the
/// signed-in user, and the sign-out control. Child routes render into the
/// outlet.
#[component]
pub fn SandboxShell() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    #[cfg(feature = "hydrate")]
    let navigate = leptos_router::hooks::use_navigate();

    let user_name = move || auth.get().user.map_or_else(String::new, |u| u.name);

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                crate::net::api::logout().await;
                auth.update(|state| state.apply(None));
                // Clearing the back stack keeps signed-out Back presses from
                // replaying protected locations.
                crate::util::history::reset_to(&navigate, "/login");
            });
        }
    };

    view! {
        <div class="sandbox-shell">
            <header class="sandbox-shell__bar">
                <a class="sandbox-shell__brand" href="/sandbox">"Satchel"</a>
                <nav class="sandbox-shell__nav">
                    <a href="/sandbox/calendar">"Calendar"</a>
                    <a href="/sandbox/todo">"Todo"</a>
                    <a href="/sandbox/notes">"Notes"</a>
                    <a href="/sandbox/whiteboard">"Whiteboard"</a>
                    <a href="/sandbox/cards">"Cards"</a>
                </nav>
                <span class="sandbox-shell__spacer"></span>
                <span class="sandbox-shell__user">{user_name}</span>
                <a class="sandbox-shell__settings" href="/settings">"Settings"</a>
                <button class="btn" on:click=on_logout>
                    "Sign out"
                </button>
            </header>
            <main class="sandbox-shell__content">
                <Outlet/>
            </main>
        </div>
    }
}

/// The module registry backing the home grid.
const MODULES: &[(&str, &str, &str)] = &[
    ("/sandbox/calendar", "Calendar", "Events and scheduling"),
    ("/sandbox/todo", "Todo", "Lists and reminders"),
    ("/sandbox/notes", "Notes", "Quick capture and review"),
    ("/sandbox/whiteboard", "Whiteboard", "Freeform sketching"),
    ("/sandbox/cards", "Flashcards", "Decks and review sessions"),
];

/// Sandbox index: one card per module.
#[component]
pub fn SandboxHome() -> impl IntoView {
    view! {
        <div class="sandbox-home">
            <h2>"Your modules"</h2>
            <div class="sandbox-home__grid">
                {MODULES
                    .iter()
                    .map(|(href, name, blurb)| {
                        view! { <ModuleCard href=*href name=*name blurb=*blurb/> }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}
