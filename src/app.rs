//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    OptionalParamSegment, StaticSegment,
    components::{ParentRoute, Route, Router, Routes},
};

use crate::components::auth_gate::AuthGate;
use crate::pages::{
    calendar::CalendarPage, cards::CardsPage, forgot_password::ForgotPasswordPage,
    login::LoginPage, notes::NotesPage, preferences::PreferencesPage, profile::ProfilePage,
    route_error::RouteErrorPage, sandbox::{SandboxHome, SandboxShell}, settings::{SettingsHome, SettingsShell},
    signup::SignupPage, splash::SplashPage, subscription::SubscriptionPage, todo::TodoPage,
    whiteboard::WhiteboardPage,
};
use crate::state::{auth::AuthState, prefs::PrefsState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared state contexts, subscribes to the session event
/// stream, and declares the full route tree. The declarations here mirror
/// `nav::table::app_routes` segment for segment; the table's tests pin the
/// published path list so the two cannot drift silently.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let prefs = RwSignal::new(PrefsState::default());

    provide_context(auth);
    provide_context(prefs);

    #[cfg(feature = "hydrate")]
    {
        let dark = crate::util::dark_mode::read_preference();
        crate::util::dark_mode::apply(dark);
        prefs.update(|p| p.dark_mode = dark);

        // The identity subscription lives as long as the app; unmounting the
        // root drops the handle, which cancels the stream.
        let session = crate::net::session::spawn_session_watch(auth);
        on_cleanup(move || drop(session));
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/satchel.css"/>
        <Title text="Satchel"/>

        <Router>
            <AuthGate>
                <Routes fallback=|| view! { <RouteErrorPage/> }>
                    <Route path=StaticSegment("") view=SplashPage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("signup") view=SignupPage/>
                    <Route path=StaticSegment("forgot-password") view=ForgotPasswordPage/>
                    <ParentRoute path=StaticSegment("sandbox") view=SandboxShell>
                        <Route path=StaticSegment("") view=SandboxHome/>
                        <Route
                            path=(StaticSegment("calendar"), OptionalParamSegment("eventId"))
                            view=CalendarPage
                        />
                        <Route
                            path=(StaticSegment("todo"), OptionalParamSegment("listId"))
                            view=TodoPage
                        />
                        <Route
                            path=(StaticSegment("notes"), OptionalParamSegment("noteId"))
                            view=NotesPage
                        />
                        <Route
                            path=(StaticSegment("whiteboard"), OptionalParamSegment("boardId"))
                            view=WhiteboardPage
                        />
                        <Route
                            path=(StaticSegment("cards"), OptionalParamSegment("deckId"))
                            view=CardsPage
                        />
                    </ParentRoute>
                    <ParentRoute path=StaticSegment("settings") view=SettingsShell>
                        <Route path=StaticSegment("") view=SettingsHome/>
                        <Route path=StaticSegment("profile") view=ProfilePage/>
                        <Route path=StaticSegment("subscription") view=SubscriptionPage/>
                        <Route path=StaticSegment("preferences") view=PreferencesPage/>
                    </ParentRoute>
                </Routes>
            </AuthGate>
        </Router>
    }
}

/// WASM entry point: hydrate the server-rendered document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(App);
}
