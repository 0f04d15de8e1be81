//! Identity-stream adaptation into a pollable auth status.
//!
//! The identity provider hands the app an async stream of session snapshots.
//! The redirect policy wants a plain value it can read at any moment, plus a
//! nudge whenever that value may have changed. [`watch`] bridges the two.

#[cfg(test)]
#[path = "observer_test.rs"]
mod observer_test;

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicU8, Ordering};

use futures::future::{AbortHandle, Abortable};
use futures::{Stream, StreamExt};

use crate::resolve::AuthStatus;

const STATUS_LOADING: u8 = 0;
const STATUS_SIGNED_IN: u8 = 1;
const STATUS_SIGNED_OUT: u8 = 2;

/// Handle to a running identity subscription, created by [`watch`].
///
/// Exposes the latest known [`AuthStatus`] and cancels the subscription when
/// dropped.
#[derive(Debug)]
pub struct AuthObserver {
    status: Arc<AtomicU8>,
    abort: AbortHandle,
}

impl AuthObserver {
    /// The latest status: `Loading` until the stream's first emission.
    #[must_use]
    pub fn status(&self) -> AuthStatus {
        match self.status.load(Ordering::Acquire) {
            STATUS_SIGNED_IN => AuthStatus::SignedIn,
            STATUS_SIGNED_OUT => AuthStatus::SignedOut,
            _ => AuthStatus::Loading,
        }
    }
}

impl Drop for AuthObserver {
    fn drop(&mut self) {
        self.abort.abort();
    }
}

/// Subscribe to an identity stream.
///
/// Each emission carries whatever the provider knows about the current user:
/// `Some` while a session exists, `None` when there is none. The observer
/// records the derived [`AuthStatus`] before `on_change` runs, and
/// `on_change` runs exactly once per emission.
///
/// The returned future is the subscription itself; the caller decides where
/// it runs (`spawn_local` in the browser, a test executor elsewhere). It
/// completes when the stream ends or the [`AuthObserver`] is dropped. A
/// stream that ends on its own reads as a final signed-out emission, since
/// the client can no longer prove a session exists. Dropping the observer
/// stops the subscription without running `on_change` again.
pub fn watch<S, T, F>(updates: S, mut on_change: F) -> (AuthObserver, impl Future<Output = ()>)
where
    S: Stream<Item = Option<T>> + Unpin,
    F: FnMut(Option<T>),
{
    let status = Arc::new(AtomicU8::new(STATUS_LOADING));
    let (abort, registration) = AbortHandle::new_pair();
    let shared = Arc::clone(&status);

    let subscription = async move {
        let mut updates = Abortable::new(updates, registration);
        while let Some(user) = updates.next().await {
            let next = if user.is_some() { STATUS_SIGNED_IN } else { STATUS_SIGNED_OUT };
            shared.store(next, Ordering::Release);
            on_change(user);
        }
        if !updates.is_aborted() {
            shared.store(STATUS_SIGNED_OUT, Ordering::Release);
            on_change(None);
        }
    };

    (AuthObserver { status, abort }, subscription)
}
