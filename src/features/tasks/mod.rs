//! Tasks feature: payload types and endpoint wrappers. Task views are plain
//! consumers of the session; they read identity and role through the auth
//! context and pass the access token into each request.

#[cfg(target_arch = "wasm32")]
pub mod client;
pub mod types;
