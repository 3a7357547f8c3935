//! Shared frontend utilities for API access, configuration, and errors.
//!
//! Feature clients go through the helpers in [`api`] so every request gets the
//! same timeout policy and error mapping, and every authenticated call attaches
//! its bearer token the same way. Centralizing this keeps endpoint wrappers and
//! route code free of request plumbing.

#[cfg(target_arch = "wasm32")]
pub mod api;
pub mod build_info;
pub mod config;
pub mod errors;

#[cfg(target_arch = "wasm32")]
pub use api::{
    delete_with_bearer, get_json_with_bearer, post_json, post_json_response, post_json_with_bearer,
    post_json_with_bearer_response, put_json_with_bearer,
};
pub use errors::AppError;
