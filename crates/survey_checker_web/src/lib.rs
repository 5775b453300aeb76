//! Wires the survey checker bootstrap into a real browser page.
//!
//! Everything DOM-facing sits behind the `web` feature on wasm32; any other
//! build gets an empty crate, so `cargo test` at the workspace root only needs
//! a host toolchain.

/// Keeps the crate non-empty outside wasm32 + `web`.
#[cfg(not(all(feature = "web", target_arch = "wasm32")))]
pub fn placeholder() {}

#[cfg(all(feature = "web", target_arch = "wasm32"))]
mod web;

#[cfg(all(feature = "web", target_arch = "wasm32"))]
pub use web::{start, CheckerApp, DomFocus, WebHost};
