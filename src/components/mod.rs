//! Shared UI components used across pages.

pub mod auth_gate;
pub mod loading;
pub mod module_card;
