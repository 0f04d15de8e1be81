//! Theme preference: explicit choice first, system preference as fallback.
//!
//! The resolved value is mirrored into [`crate::state::prefs::PrefsState`];
//! this module owns the `localStorage` record and the `.theme-dark` class on
//! the `<html>` element. Requires a browser environment; on the server every
//! function degrades to the light theme.

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "satchel:theme";

/// The user's stored choice, if they ever made one.
pub fn stored_preference() -> Option<bool> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window()?.local_storage().ok()??;
        match storage.get_item(STORAGE_KEY).ok()?.as_deref() {
            Some("dark") => Some(true),
            Some("light") => Some(false),
            _ => None,
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Whether the operating system asks for a dark UI right now.
pub fn system_prefers_dark() -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok())
            .flatten()
            .map_or(false, |mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// The value to start with: the stored choice when present, the system
/// preference otherwise.
pub fn read_preference() -> bool {
    stored_preference().unwrap_or_else(system_prefers_dark)
}

/// Apply or remove the `.theme-dark` class on the `<html>` element.
pub fn apply(enabled: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        {
            let class_list = el.class_list();
            if enabled {
                let _ = class_list.add_1("theme-dark");
            } else {
                let _ = class_list.remove_1("theme-dark");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = enabled;
    }
}

/// Flip the theme, persist the choice, and apply it. Returns the new value.
pub fn toggle(current: bool) -> bool {
    let next = !current;
    apply(next);
    #[cfg(feature = "hydrate")]
    {
        if let Ok(Some(storage)) = web_sys::window().map_or(Ok(None), |w| w.local_storage()) {
            let _ = storage.set_item(STORAGE_KEY, if next { "dark" } else { "light" });
        }
    }
    next
}

/// Forget the stored choice and fall back to the system preference.
/// Returns the value now in effect.
pub fn reset_to_system() -> bool {
    #[cfg(feature = "hydrate")]
    {
        if let Ok(Some(storage)) = web_sys::window().map_or(Ok(None), |w| w.local_storage()) {
            let _ = storage.remove_item(STORAGE_KEY);
        }
    }
    let system = system_prefers_dark();
    apply(system);
    system
}
