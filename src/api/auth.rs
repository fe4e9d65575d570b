//! Authentication endpoints

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::AppResult;

use super::AuthenticatedUser;

/// Login request
#[derive(Deserialize, ToSchema)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Login response
#[derive(Serialize, ToSchema)]
pub struct LoginResponse {
    /// Signed JWT for the Authorization header
    pub token: String,
    pub token_type: String,
    /// Expiration (unix timestamp)
    pub expires_at: i64,
}

/// Current session info
#[derive(Serialize, ToSchema)]
pub struct SessionInfo {
    pub email: String,
    /// Expiration (unix timestamp)
    pub expires_at: i64,
}

/// Log in as the configured admin
#[utoipa::path(
    post,
    path = "/auth/login",
    tag = "auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 401, description = "Invalid credentials")
    )
)]
pub async fn login(
    State(state): State<crate::AppState>,
    Json(request): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let (token, expires_at) = state.services.auth.login(&request.email, &request.password)?;
    Ok(Json(LoginResponse {
        token,
        token_type: "Bearer".to_string(),
        expires_at,
    }))
}

/// Get the current session
#[utoipa::path(
    get,
    path = "/auth/me",
    tag = "auth",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Current session", body = SessionInfo),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn me(AuthenticatedUser(claims): AuthenticatedUser) -> Json<SessionInfo> {
    Json(SessionInfo {
        email: claims.sub,
        expires_at: claims.exp,
    })
}
