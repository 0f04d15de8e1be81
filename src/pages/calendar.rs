//! Calendar module placeholder.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

/// Calendar module. The optional `eventId` segment selects one event.
#[component]
pub fn CalendarPage() -> impl IntoView {
    let params = use_params_map();
    let event_id = move || params.read().get("eventId").filter(|id| !id.is_empty());

    view! {
        <section class="module-page module-page--calendar">
            <h2>"Calendar"</h2>
            {move || match event_id() {
                Some(id) => view! { <p class="module-page__detail">"Event " {id}</p> }.into_any(),
                None => view! { <p class="module-page__detail">"No event selected."</p> }.into_any(),
            }}
        </section>
    }
}
