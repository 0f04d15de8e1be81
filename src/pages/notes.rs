//! Notes module placeholder with sample note links.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use nav::table::app_routes;

/// Sample notes demonstrating parameterized links built through the route
/// table rather than hardcoded path strings.
const SAMPLE_NOTES: &[&str] = &["Reading list", "Week plan", "Sketch ideas"];

/// Notes module. The optional `noteId` segment selects one note.
#[component]
pub fn NotesPage() -> impl IntoView {
    let params = use_params_map();
    let note_id = move || params.read().get("noteId").filter(|id| !id.is_empty());

    let table = app_routes();
    let links: Vec<_> = SAMPLE_NOTES
        .iter()
        .filter_map(|&title| {
            table
                .path_for("note", &[("noteId", title)])
                .map(|href| (href, title))
        })
        .collect();

    view! {
        <section class="module-page module-page--notes">
            <h2>"Notes"</h2>
            {move || match note_id() {
                Some(id) => view! { <p class="module-page__detail">"Note " {id}</p> }.into_any(),
                None => view! { <p class="module-page__detail">"Select a note."</p> }.into_any(),
            }}
            <ul class="module-page__list">
                {links
                    .into_iter()
                    .map(|(href, title)| view! { <li><a href=href>{title}</a></li> })
                    .collect::<Vec<_>>()}
            </ul>
        </section>
    }
}
