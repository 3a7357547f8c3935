use serde::Deserialize;
use std::fmt;

#[derive(Clone, Debug, PartialEq)]
pub enum AppError {
    Config(String),
    Network(String),
    Timeout(String),
    Http { status: u16, message: String },
    Parse(String),
    Serialization(String),
}

/// Error body shape shared by every failing API endpoint.
#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

impl AppError {
    /// Returns the message to render inline for a failed operation.
    ///
    /// HTTP failures carry the raw response body; when that body is the API's
    /// `{"error": "..."}` shape the server-provided reason wins. Local
    /// validation errors (`Config`) pass through unchanged. Everything else
    /// collapses to the caller's fallback, so transient network trouble reads
    /// the same as a rejected request.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            AppError::Config(message) => message.clone(),
            AppError::Http { message, .. } => serde_json::from_str::<ErrorBody>(message)
                .map(|body| body.error)
                .unwrap_or_else(|_| fallback.to_string()),
            _ => fallback.to_string(),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(message) => write!(formatter, "Config error: {message}"),
            AppError::Network(message) => write!(formatter, "Network error: {message}"),
            AppError::Timeout(message) => write!(formatter, "Timeout: {message}"),
            AppError::Http { status, message } => {
                write!(formatter, "Request failed ({status}): {message}")
            }
            AppError::Parse(message) => write!(formatter, "Response error: {message}"),
            AppError::Serialization(message) => {
                write!(formatter, "Request error: {message}")
            }
        }
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::AppError;

    #[test]
    fn user_message_prefers_server_error_field() {
        let err = AppError::Http {
            status: 401,
            message: r#"{"error":"Invalid credentials"}"#.to_string(),
        };
        assert_eq!(err.user_message("Login failed"), "Invalid credentials");
    }

    #[test]
    fn user_message_falls_back_on_non_json_body() {
        let err = AppError::Http {
            status: 502,
            message: "Bad Gateway".to_string(),
        };
        assert_eq!(err.user_message("Login failed"), "Login failed");
    }

    #[test]
    fn user_message_falls_back_on_network_errors() {
        let err = AppError::Network("Unable to reach the server".to_string());
        assert_eq!(err.user_message("Search failed"), "Search failed");
    }

    #[test]
    fn user_message_passes_validation_errors_through() {
        let err = AppError::Config("Passwords do not match".to_string());
        assert_eq!(err.user_message("Registration failed"), "Passwords do not match");
    }

    #[test]
    fn display_includes_status_for_http_errors() {
        let err = AppError::Http {
            status: 404,
            message: "missing".to_string(),
        };
        assert_eq!(err.to_string(), "Request failed (404): missing");
    }
}
