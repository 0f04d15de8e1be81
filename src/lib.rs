//! # satchel
//!
//! Leptos + WASM client for Satchel, a personal organizer with calendar,
//! todo, notes, whiteboard, and flashcard modules.
//!
//! This crate is the application shell: pages, components, client state,
//! and the network layer. Every decision about where a visitor may go is
//! made by the `nav` crate; this one wires browser events into those
//! decisions and renders the outcome.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;
