//! Programmatic navigation that does not leave a trail.
//!
//! DESIGN
//! ======
//! Auth transitions (sign-in, sign-out) must not be reachable through the
//! Back button. Browsers refuse to empty `window.history` outright, so these
//! helpers navigate with `replace`: the entry being left is overwritten, and
//! Back cannot cross the transition. Both take the navigation function as a
//! parameter so tests can drive them with a recording closure.

#[cfg(test)]
#[path = "history_test.rs"]
mod history_test;

use leptos_router::NavigateOptions;
use nav::table::RouteTable;

/// Navigate to `path`, replacing the current history entry.
pub fn reset_to<F>(navigate: &F, path: &str)
where
    F: Fn(&str, NavigateOptions),
{
    navigate(path, NavigateOptions { replace: true, ..NavigateOptions::default() });
}

/// Navigate to the route named `name` with `params` substituted, replacing
/// the current history entry.
///
/// An unknown name or a missing parameter logs a warning and stays put —
/// a bad link must not strand the user on a half-navigated screen.
pub fn reset_to_named<F>(navigate: &F, table: &RouteTable, name: &str, params: &[(&str, &str)])
where
    F: Fn(&str, NavigateOptions),
{
    match table.path_for(name, params) {
        Some(path) => reset_to(navigate, &path),
        None => {
            leptos::logging::warn!("no route named {name:?} for params {params:?}");
        }
    }
}
