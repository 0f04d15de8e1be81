//! Profile section showing the signed-in account.

use leptos::prelude::*;

use crate::state::auth::AuthState;

/// Account details straight from auth state. The gate keeps this behind
/// sign-in, but the signed-out arm stays total for the sign-out window.
#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    view! {
        <section class="settings-section settings-section--profile">
            <h2>"Profile"</h2>
            {move || match auth.get().user {
                Some(user) => {
                    view! {
                        <div class="settings-section__card">
                            {user
                                .avatar_url
                                .map(|url| view! { <img class="settings-section__avatar" src=url alt="Avatar"/> })}
                            <dl class="settings-section__facts">
                                <dt>"Name"</dt>
                                <dd>{user.name}</dd>
                                <dt>"Email"</dt>
                                <dd>{user.email}</dd>
                            </dl>
                        </div>
                    }
                        .into_any()
                }
                None => view! { <p>"Not signed in."</p> }.into_any(),
            }}
        </section>
    }
}
