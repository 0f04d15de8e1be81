//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain so individual components can depend on small
//! focused models. Each model is a plain struct stored in an `RwSignal`
//! provided from the root component.

pub mod auth;
pub mod prefs;
