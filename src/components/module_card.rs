//! Reusable card component for the sandbox module grid.

use leptos::prelude::*;

/// A clickable card linking to one sandbox module.
///
/// The module set is fixed at compile time, so the props are static strings
/// and the card stays a plain anchor the router intercepts.
#[component]
pub fn ModuleCard(
    href: &'static str,
    name: &'static str,
    blurb: &'static str,
) -> impl IntoView {
    view! {
        <a class="module-card" href=href>
            <span class="module-card__name">{name}</span>
            <span class="module-card__blurb">{blurb}</span>
        </a>
    }
}
