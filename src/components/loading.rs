//! Full-viewport loading indicator.

use leptos::prelude::*;

/// Centered spinner covering the viewport.
///
/// The gate shows this while auth status is still unresolved and during the
/// frame it takes a redirect to land, so protected content never flashes.
#[component]
pub fn LoadingScreen() -> impl IntoView {
    view! {
        <div class="loading-screen">
            <div class="loading-screen__spinner" aria-hidden="true"></div>
            <p class="loading-screen__label">"Loading..."</p>
        </div>
    }
}
