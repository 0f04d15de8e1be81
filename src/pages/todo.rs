//! Todo module placeholder.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

/// Todo module. The optional `listId` segment selects one list.
#[component]
pub fn TodoPage() -> impl IntoView {
    let params = use_params_map();
    let list_id = move || params.read().get("listId").filter(|id| !id.is_empty());

    view! {
        <section class="module-page module-page--todo">
            <h2>"Todo"</h2>
            {move || match list_id() {
                Some(id) => view! { <p class="module-page__detail">"List " {id}</p> }.into_any(),
                None => view! { <p class="module-page__detail">"No list selected."</p> }.into_any(),
            }}
        </section>
    }
}
