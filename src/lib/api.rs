//! HTTP helpers for JSON APIs with consistent timeouts and error handling.
//! Feature clients use these helpers to avoid duplicating request setup and to
//! enforce a predictable timeout policy. The helpers never persist tokens;
//! callers pass the bearer token for each authenticated request.

use super::{config::AppConfig, errors::AppError};
use gloo_net::http::{Request, RequestBuilder};
use gloo_timers::callback::Timeout;
use serde::{Serialize, de::DeserializeOwned};
use serde_json::to_string;
use web_sys::AbortController;

/// Default request timeout (milliseconds) applied to all HTTP helpers.
const DEFAULT_TIMEOUT_MS: u32 = 10_000;
/// Maximum number of error body characters surfaced to the UI.
const MAX_ERROR_CHARS: usize = 200;

/// Fetches JSON from an authenticated endpoint.
pub async fn get_json_with_bearer<T: DeserializeOwned>(
    path: &str,
    access_token: &str,
) -> Result<T, AppError> {
    let url = build_url(path);
    let token = access_token.to_string();
    let response = send_with_timeout(move |signal| {
        authorize(Request::get(&url), &token)
            .abort_signal(Some(signal))
            .build()
            .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
    })
    .await?;

    handle_json_response(response).await
}

/// Posts JSON without authentication and expects an empty response body.
pub async fn post_json<B: Serialize>(path: &str, body: &B) -> Result<(), AppError> {
    let response = send_json(path, body, None, "POST").await?;
    handle_empty_response(response).await
}

/// Posts JSON without authentication and parses a JSON response.
pub async fn post_json_response<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, AppError> {
    let response = send_json(path, body, None, "POST").await?;
    handle_json_response(response).await
}

/// Posts JSON to an authenticated endpoint and expects an empty response body.
pub async fn post_json_with_bearer<B: Serialize>(
    path: &str,
    body: &B,
    access_token: &str,
) -> Result<(), AppError> {
    let response = send_json(path, body, Some(access_token), "POST").await?;
    handle_empty_response(response).await
}

/// Posts JSON to an authenticated endpoint and parses a JSON response.
pub async fn post_json_with_bearer_response<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
    access_token: &str,
) -> Result<T, AppError> {
    let response = send_json(path, body, Some(access_token), "POST").await?;
    handle_json_response(response).await
}

/// Puts JSON to an authenticated endpoint and expects an empty response body.
pub async fn put_json_with_bearer<B: Serialize>(
    path: &str,
    body: &B,
    access_token: &str,
) -> Result<(), AppError> {
    let response = send_json(path, body, Some(access_token), "PUT").await?;
    handle_empty_response(response).await
}

/// Deletes an authenticated resource and expects an empty response body.
pub async fn delete_with_bearer(path: &str, access_token: &str) -> Result<(), AppError> {
    let url = build_url(path);
    let token = access_token.to_string();
    let response = send_with_timeout(move |signal| {
        authorize(Request::delete(&url), &token)
            .abort_signal(Some(signal))
            .build()
            .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
    })
    .await?;

    handle_empty_response(response).await
}

/// Attaches an `Authorization: Bearer` header to the request.
fn authorize(builder: RequestBuilder, access_token: &str) -> RequestBuilder {
    builder.header("Authorization", &format!("Bearer {access_token}"))
}

/// Sends a JSON body with an optional bearer token.
async fn send_json<B: Serialize>(
    path: &str,
    body: &B,
    access_token: Option<&str>,
    method: &str,
) -> Result<gloo_net::http::Response, AppError> {
    let url = build_url(path);
    let payload = to_string(body)
        .map_err(|err| AppError::Serialization(format!("Failed to encode request: {err}")))?;
    let token = access_token.map(str::to_string);
    let method = method.to_string();

    send_with_timeout(move |signal| {
        let mut builder = match method.as_str() {
            "PUT" => Request::put(&url),
            _ => Request::post(&url),
        }
        .header("Content-Type", "application/json")
        .abort_signal(Some(signal));

        if let Some(token) = &token {
            builder = authorize(builder, token);
        }

        builder
            .body(payload)
            .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
    })
    .await
}

/// Builds a URL from the configured API base URL and the provided path.
fn build_url(path: &str) -> String {
    let config = AppConfig::load();
    let base = config.api_base_url.trim().trim_end_matches('/');
    let path = path.trim();

    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}

/// Maps network errors into user-facing `AppError` variants with timeout detection.
fn map_request_error(err: gloo_net::Error) -> AppError {
    let message = err.to_string();
    let lowered = message.to_lowercase();

    if lowered.contains("timeout") || lowered.contains("abort") {
        AppError::Timeout("Request timed out. Please try again.".to_string())
    } else {
        AppError::Network(format!("Unable to reach the server: {message}"))
    }
}

/// Sends a request with an abort timeout to avoid hanging UI state.
async fn send_with_timeout(
    build_request: impl FnOnce(&web_sys::AbortSignal) -> Result<gloo_net::http::Request, AppError>,
) -> Result<gloo_net::http::Response, AppError> {
    let controller = AbortController::new()
        .map_err(|_| AppError::Config("Failed to initialize request timeout.".to_string()))?;
    let signal = controller.signal();
    let timeout_controller = controller.clone();
    let _timeout = Timeout::new(DEFAULT_TIMEOUT_MS, move || timeout_controller.abort());

    let request = build_request(&signal)?;
    request.send().await.map_err(map_request_error)
}

/// Parses JSON responses and surfaces HTTP errors with sanitized bodies.
async fn handle_json_response<T: DeserializeOwned>(
    response: gloo_net::http::Response,
) -> Result<T, AppError> {
    if response.ok() {
        response
            .json::<T>()
            .await
            .map_err(|err| AppError::Parse(format!("Failed to decode response: {err}")))
    } else {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Err(AppError::Http {
            status,
            message: sanitize_body(body),
        })
    }
}

/// Handles empty responses and returns sanitized HTTP errors when needed.
async fn handle_empty_response(response: gloo_net::http::Response) -> Result<(), AppError> {
    if response.ok() {
        Ok(())
    } else {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Err(AppError::Http {
            status,
            message: sanitize_body(body),
        })
    }
}

/// Sanitizes HTTP error bodies for user-facing messages by trimming and truncating.
fn sanitize_body(body: String) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        "Request failed.".to_string()
    } else {
        trimmed.chars().take(MAX_ERROR_CHARS).collect()
    }
}
