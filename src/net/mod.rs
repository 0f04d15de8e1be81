//! Networking modules for the auth/session boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles the REST calls behind the entry forms, `session` maintains
//! the live session event stream, and `types` defines the wire schema both
//! share.

pub mod api;
pub mod session;
pub mod types;
