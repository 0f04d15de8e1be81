//! Flashcards module placeholder.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

/// Flashcards module. The optional `deckId` segment selects one deck.
#[component]
pub fn CardsPage() -> impl IntoView {
    let params = use_params_map();
    let deck_id = move || params.read().get("deckId").filter(|id| !id.is_empty());

    view! {
        <section class="module-page module-page--cards">
            <h2>"Flashcards"</h2>
            {move || match deck_id() {
                Some(id) => view! { <p class="module-page__detail">"Deck " {id}</p> }.into_any(),
                None => view! { <p class="module-page__detail">"No deck selected."</p> }.into_any(),
            }}
        </section>
    }
}
