//! Preferences section with the theme controls.

use leptos::prelude::*;

use crate::state::prefs::PrefsState;

/// Theme preference controls. The toggle stores an explicit choice; the
/// reset forgets it and follows the system again.
#[component]
pub fn PreferencesPage() -> impl IntoView {
    let prefs = expect_context::<RwSignal<PrefsState>>();

    let on_toggle = move |_| {
        let next = crate::util::dark_mode::toggle(prefs.get().dark_mode);
        prefs.update(|p| p.dark_mode = next);
    };

    let on_reset = move |_| {
        let system = crate::util::dark_mode::reset_to_system();
        prefs.update(|p| p.dark_mode = system);
    };

    let mode_label = move || if prefs.get().dark_mode { "Dark" } else { "Light" };

    view! {
        <section class="settings-section settings-section--preferences">
            <h2>"Preferences"</h2>
            <div class="settings-section__row">
                <span class="settings-section__label">"Theme: " {mode_label}</span>
                <button class="btn" on:click=on_toggle>
                    "Toggle dark mode"
                </button>
                <button class="btn" on:click=on_reset>
                    "Use system theme"
                </button>
            </div>
        </section>
    }
}
