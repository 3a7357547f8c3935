//! Auth feature: the session state machine, token persistence, and the
//! endpoint client behind it. The session is the only holder of token
//! material in the app; everything else reads identity and role through the
//! context and passes the access token into its own requests. This module
//! touches security boundaries and must avoid logging secrets or tokens.
//!
//! Flow overview: on mount the provider restores a session from the two
//! persisted tokens (validating the access token against `/auth/me`), login
//! persists both tokens and hydrates the identity, and logout clears
//! everything locally regardless of whether the server call succeeds.

#[cfg(target_arch = "wasm32")]
pub mod client;
#[cfg(target_arch = "wasm32")]
mod guards;
pub mod session;
#[cfg(target_arch = "wasm32")]
pub mod state;
pub mod storage;
pub mod types;

#[cfg(target_arch = "wasm32")]
pub use guards::{RequireAdmin, RequireAuth};
