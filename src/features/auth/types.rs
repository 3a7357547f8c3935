//! Request and response types for auth API calls. Login payloads carry
//! credentials and tokens, so they must never be logged.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    User,
    Admin,
}

impl Role {
    /// Wire spelling of the role, also used for display.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::User => "USER",
            Role::Admin => "ADMIN",
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
/// The authenticated user's identity as reported by the API.
pub struct Identity {
    pub email: String,
    pub role: Role,
}

impl Identity {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub user: Identity,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogoutRequest {
    pub refresh_token: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
/// Envelope returned by the identity lookup endpoint.
pub struct IdentityResponse {
    pub user: Identity,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_response_uses_camel_case_wire_names() {
        let json = r#"{
            "accessToken": "T1",
            "refreshToken": "R1",
            "user": { "email": "a@b.com", "role": "USER" }
        }"#;

        let response: LoginResponse = serde_json::from_str(json).expect("Failed to deserialize");
        assert_eq!(response.access_token, "T1");
        assert_eq!(response.refresh_token, "R1");
        assert_eq!(response.user.email, "a@b.com");
        assert_eq!(response.user.role, Role::User);
        assert!(!response.user.is_admin());
    }

    #[test]
    fn role_round_trips_in_uppercase() {
        let json = serde_json::to_string(&Role::Admin).expect("Failed to serialize");
        assert_eq!(json, r#""ADMIN""#);

        let role: Role = serde_json::from_str(r#""ADMIN""#).expect("Failed to deserialize");
        assert_eq!(role, Role::Admin);
    }

    #[test]
    fn identity_response_unwraps_user_envelope() {
        let json = r#"{ "user": { "email": "root@example.com", "role": "ADMIN" } }"#;

        let response: IdentityResponse = serde_json::from_str(json).expect("Failed to deserialize");
        assert!(response.user.is_admin());
    }

    #[test]
    fn logout_request_serializes_refresh_token_field() {
        let request = LogoutRequest {
            refresh_token: "R1".to_string(),
        };
        let json = serde_json::to_string(&request).expect("Failed to serialize");
        assert_eq!(json, r#"{"refreshToken":"R1"}"#);
    }
}
