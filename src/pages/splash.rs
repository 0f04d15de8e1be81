//! Splash view for the bare root path.

use leptos::prelude::*;

use crate::components::loading::LoadingScreen;

/// The `/` route renders nothing of its own. The gate resolves the root to
/// `/sandbox` or `/login` as soon as auth status is known, so all there is
/// to show is the loading treatment.
#[component]
pub fn SplashPage() -> impl IntoView {
    view! { <LoadingScreen/> }
}
