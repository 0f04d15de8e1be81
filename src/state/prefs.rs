#[cfg(test)]
#[path = "prefs_test.rs"]
mod prefs_test;

/// Presentation preferences that follow the user across screens.
///
/// Persisted bits (dark mode) are read from `localStorage` on startup by the
/// root component; this struct is only the in-memory mirror.
#[derive(Clone, Copy, Debug, Default)]
pub struct PrefsState {
    pub dark_mode: bool,
}
