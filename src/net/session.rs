//! Live session event stream.
//!
//! The server publishes session changes over a WebSocket at
//! `/api/session/events`: one JSON [`SessionEvent`] per change, carrying the
//! current user or `null` once the session ends. This module keeps that
//! socket alive (reconnecting with exponential backoff), funnels emissions
//! into `nav::observer`, and applies each one to the shared auth signal.
//!
//! All WebSocket logic is gated behind `#[cfg(feature = "hydrate")]` since it
//! requires a browser environment.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

#[cfg(any(test, feature = "hydrate"))]
use crate::net::types::{SessionEvent, User};

#[cfg(feature = "hydrate")]
use crate::state::auth::AuthState;

/// Decode one socket message into an identity emission.
///
/// Returns `None` for frames that are not session events; the stream skips
/// them rather than treating garbage as a sign-out.
#[cfg(any(test, feature = "hydrate"))]
fn parse_session_event(text: &str) -> Option<Option<User>> {
    serde_json::from_str::<SessionEvent>(text)
        .ok()
        .map(|event| event.user)
}

/// Subscribe the auth signal to the server's session events.
///
/// Seeds the stream with a one-shot `/api/auth/me` probe so the first status
/// arrives without waiting for the socket, then forwards every socket
/// emission. The returned observer owns the subscription: drop it and the
/// stream stops updating the signal.
#[cfg(feature = "hydrate")]
pub fn spawn_session_watch(auth: leptos::prelude::RwSignal<AuthState>) -> nav::observer::AuthObserver {
    use leptos::prelude::Update;

    let (tx, rx) = futures::channel::mpsc::unbounded::<Option<User>>();
    let (observer, subscription) = nav::observer::watch(rx, move |user| {
        auth.update(|state| state.apply(user));
    });

    leptos::task::spawn_local(subscription);
    leptos::task::spawn_local(session_loop(tx));

    observer
}

/// Main stream loop with reconnect logic.
#[cfg(feature = "hydrate")]
async fn session_loop(tx: futures::channel::mpsc::UnboundedSender<Option<User>>) {
    let mut backoff_ms: u32 = 1000;
    let max_backoff_ms: u32 = 10_000;

    // One-shot probe so routing can settle before the socket is up.
    if tx.unbounded_send(crate::net::api::fetch_current_user().await).is_err() {
        return;
    }

    loop {
        match connect_and_forward(&tx).await {
            Ok(()) => {
                leptos::logging::log!("session stream closed cleanly");
            }
            Err(e) => {
                leptos::logging::warn!("session stream error: {e}");
            }
        }

        if tx.is_closed() {
            return;
        }

        // Exponential backoff before reconnect.
        gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(backoff_ms))).await;
        backoff_ms = (backoff_ms * 2).min(max_backoff_ms);
    }
}

/// Connect to the event socket and forward emissions until disconnect.
#[cfg(feature = "hydrate")]
async fn connect_and_forward(
    tx: &futures::channel::mpsc::UnboundedSender<Option<User>>,
) -> Result<(), String> {
    use futures::StreamExt;
    use gloo_net::websocket::Message;
    use gloo_net::websocket::futures::WebSocket;

    let mut ws = WebSocket::open(&session_events_url()).map_err(|e| e.to_string())?;

    while let Some(msg) = ws.next().await {
        match msg {
            Ok(Message::Text(text)) => {
                if let Some(user) = parse_session_event(&text) {
                    if tx.unbounded_send(user).is_err() {
                        // Observer gone; stop forwarding for good.
                        return Ok(());
                    }
                }
            }
            Ok(Message::Bytes(_)) => {}
            Err(e) => return Err(e.to_string()),
        }
    }

    Ok(())
}

/// Derive the WebSocket URL from the page location.
#[cfg(feature = "hydrate")]
fn session_events_url() -> String {
    let location = web_sys::window()
        .and_then(|w| w.location().href().ok())
        .unwrap_or_default();
    let ws_proto = if location.starts_with("https") { "wss" } else { "ws" };
    let host = web_sys::window()
        .and_then(|w| w.location().host().ok())
        .unwrap_or_else(|| "localhost:3000".to_owned());
    format!("{ws_proto}://{host}/api/session/events")
}
