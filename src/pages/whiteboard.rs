//! Whiteboard module placeholder.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

/// Whiteboard module. The optional `boardId` segment selects one board.
#[component]
pub fn WhiteboardPage() -> impl IntoView {
    let params = use_params_map();
    let board_id = move || params.read().get("boardId").filter(|id| !id.is_empty());

    view! {
        <section class="module-page module-page--whiteboard">
            <h2>"Whiteboard"</h2>
            {move || match board_id() {
                Some(id) => view! { <p class="module-page__detail">"Board " {id}</p> }.into_any(),
                None => view! { <p class="module-page__detail">"No board selected."</p> }.into_any(),
            }}
        </section>
    }
}
