//! Client wrappers for the auth API endpoints. These keep endpoint paths and
//! header handling in one place; the session state machine talks to them
//! through the [`AuthApi`] trait and never builds requests itself.

use crate::app_lib::{
    AppError, get_json_with_bearer, post_json, post_json_response, post_json_with_bearer,
};
use crate::features::auth::session::AuthApi;
use crate::features::auth::types::{
    Identity, IdentityResponse, LoginRequest, LoginResponse, LogoutRequest, RegisterRequest,
};
use async_trait::async_trait;

/// `gloo-net`-backed [`AuthApi`] used by the running app.
pub struct HttpAuthApi;

#[async_trait(?Send)]
impl AuthApi for HttpAuthApi {
    async fn identity(&self, access_token: &str) -> Result<Identity, AppError> {
        let response: IdentityResponse = get_json_with_bearer("/auth/me", access_token).await?;
        Ok(response.user)
    }

    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, AppError> {
        post_json_response("/auth/login", request).await
    }

    async fn register(&self, request: &RegisterRequest) -> Result<(), AppError> {
        post_json("/auth/register", request).await
    }

    async fn logout(&self, refresh_token: &str) -> Result<(), AppError> {
        let request = LogoutRequest {
            refresh_token: refresh_token.to_string(),
        };
        post_json("/auth/logout", &request).await
    }
}

/// Provisions a new administrator account. Admin-gated on the server; the
/// caller passes the current access token.
pub async fn create_admin(request: &RegisterRequest, access_token: &str) -> Result<(), AppError> {
    post_json_with_bearer("/auth/create-admin", request, access_token).await
}
