//! Task management frontend.
//!
//! The crate is split along the target boundary: everything that touches the
//! DOM, `leptos`, or `gloo` is compiled for wasm only, while the auth session
//! state machine and the wire types build on any target so `cargo test` can
//! exercise them natively with fake collaborators.

#[cfg(target_arch = "wasm32")]
pub mod app;
#[path = "lib/mod.rs"]
pub mod app_lib;
#[cfg(target_arch = "wasm32")]
pub mod components;
pub mod features;
#[cfg(target_arch = "wasm32")]
pub mod routes;
