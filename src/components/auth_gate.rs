//! Auth gate wrapped around the routed content.
//!
//! Every location change is resolved through [`nav::resolve`] against the
//! current auth status. Routed children render only on a `Serve` decision;
//! otherwise the gate holds the loading screen, applying any redirect with a
//! history replace so interim hops never pile up on the back stack.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use nav::path::NavRequest;
use nav::resolve::{Decision, resolve};
use nav::table::app_routes;

use crate::components::loading::LoadingScreen;
use crate::state::auth::AuthState;

/// Wraps the route outlet and enforces the redirect policy.
///
/// Must be rendered inside a `Router`; it reads the reactive location and
/// navigates through the router's own history integration.
#[component]
pub fn AuthGate(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let location = use_location();
    let navigate = use_navigate();

    let request = Memo::new(move |_| {
        NavRequest::from_parts(&location.pathname.get(), &location.search.get())
    });
    let decision = Memo::new(move |_| resolve(auth.get().status(), &request.get()));

    // Redirects replace the current history entry, so Back never lands on an
    // interim hop.
    Effect::new(move || {
        if let Decision::Redirect(target) = decision.get() {
            navigate(
                &target,
                NavigateOptions {
                    replace: true,
                    ..NavigateOptions::default()
                },
            );
        }
    });

    let table = app_routes();
    let title = Memo::new(move |_| match table.match_path(&request.get().path) {
        Some(hit) => hit.screen.title(),
        None => "Not found",
    });

    view! {
        <Title text=move || title.get()/>
        {move || match decision.get() {
            Decision::Serve => children().into_any(),
            Decision::Hold | Decision::Redirect(_) => view! { <LoadingScreen/> }.into_any(),
        }}
    }
}
