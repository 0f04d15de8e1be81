//! Navigation core for the Satchel client: pure routing logic, no DOM.
//!
//! Everything the app needs to answer "what renders at this location, and is
//! the visitor allowed to see it" lives here, testable with plain `#[test]`
//! functions. The Leptos layer in the root crate only wires browser events to
//! these functions and renders the outcome.
//!
//! | Module       | Role                                                  |
//! |--------------|-------------------------------------------------------|
//! | [`path`]     | Location snapshots, query parsing, percent encoding   |
//! | [`table`]    | Declarative route tree, matching, reverse lookup      |
//! | [`resolve`]  | Auth-gated redirect policy                            |
//! | [`observer`] | Identity-stream adaptation into a pollable status     |

pub mod observer;
pub mod path;
pub mod resolve;
pub mod table;
