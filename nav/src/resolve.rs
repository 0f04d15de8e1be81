//! Auth-gated redirect policy.
//!
//! DESIGN
//! ======
//! One pure function owns every redirect decision in the app. Pages never
//! navigate on their own behalf when they learn about auth state; the shell
//! resolves each location change through [`resolve`] and applies the outcome.
//! That keeps the policy testable line by line and makes "where does this
//! path go when signed out" a question with exactly one answer.

#[cfg(test)]
#[path = "resolve_test.rs"]
mod resolve_test;

use crate::path::{NavRequest, encode_component};

/// Authentication status snapshot consumed by [`resolve`].
///
/// `Loading` means the identity stream has not emitted yet. No redirect may
/// be committed from this state, only a rendering hold.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthStatus {
    Loading,
    SignedIn,
    SignedOut,
}

/// What to do with a navigation request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Decision {
    /// Auth status is still unknown: keep the loading view up and leave the
    /// location untouched.
    Hold,
    /// Serve the requested route unchanged.
    Serve,
    /// Replace the current location with this one.
    Redirect(String),
}

/// Decide whether `request` may be served under `status`.
///
/// Pure and total: the same inputs always yield the same decision and every
/// input yields one. Rules apply in order:
///
/// 1. Unknown status holds rendering.
/// 2. The bare root splits on status: `/sandbox` when signed in, `/login`
///    otherwise.
/// 3. Signed-out visitors outside the entry flow go to `/login`, carrying
///    the path they asked for in a `redirect` parameter.
/// 4. Signed-in visitors inside the entry flow bounce to the preserved
///    destination, or `/sandbox` when there is none.
/// 5. Everything else is served as requested.
#[must_use]
pub fn resolve(status: AuthStatus, request: &NavRequest) -> Decision {
    if status == AuthStatus::Loading {
        return Decision::Hold;
    }
    let signed_in = status == AuthStatus::SignedIn;

    if request.path == "/" {
        let target = if signed_in { "/sandbox" } else { "/login" };
        return Decision::Redirect(target.to_owned());
    }

    let in_entry_flow = is_entry_flow(&request.path);
    if !signed_in && !in_entry_flow {
        return Decision::Redirect(login_target(&request.path));
    }
    if signed_in && in_entry_flow {
        let preserved = request.query.get("redirect").filter(|target| !target.is_empty());
        return Decision::Redirect(preserved.map_or_else(|| "/sandbox".to_owned(), str::to_owned));
    }

    Decision::Serve
}

/// Whether `path` belongs to the unauthenticated entry flow.
#[must_use]
pub fn is_entry_flow(path: &str) -> bool {
    path.starts_with("/login") || path.starts_with("/signup") || path.starts_with("/forgot-password")
}

/// The login location carrying `path` as the preserved destination. `/login`
/// itself never gets a self-referential `redirect` parameter.
fn login_target(path: &str) -> String {
    if path == "/login" {
        "/login".to_owned()
    } else {
        format!("/login?redirect={}", encode_component(path))
    }
}
