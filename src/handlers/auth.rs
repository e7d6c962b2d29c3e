use axum::extract::State;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use serde::Serialize;
use utoipa::ToSchema;

use crate::auth::{AuthRouterExt, AuthUser, LoginCredentials, TokenResponse};
use crate::errors::ServiceError;
use crate::services::users::UserResponse;
use crate::{ApiResponse, ApiResult, AppState};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/me", get(me))
        .with_auth()
        .merge(Router::new().route("/login", post(login)))
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    pub user: UserResponse,
    pub access_token: String,
    pub token_type: String,
    pub expires_in: u64,
}

#[utoipa::path(
    post,
    path = "/api/v1/auth/login",
    responses(
        (status = 200, description = "Authenticated", body = LoginResponse),
        (status = 401, description = "Invalid credentials", body = crate::errors::ErrorResponse)
    ),
    tag = "auth"
)]
pub async fn login(
    State(state): State<AppState>,
    Json(credentials): Json<LoginCredentials>,
) -> ApiResult<LoginResponse> {
    let (account, token) = state
        .services
        .auth
        .login(&credentials)
        .await
        .map_err(|e| ServiceError::AuthError(e.to_string()))?;

    let TokenResponse {
        access_token,
        token_type,
        expires_in,
    } = token;

    Ok(Json(ApiResponse::success(LoginResponse {
        user: account.into(),
        access_token,
        token_type,
        expires_in,
    })))
}

#[utoipa::path(
    get,
    path = "/api/v1/auth/me",
    responses(
        (status = 200, description = "Current account", body = UserResponse),
        (status = 401, description = "Unauthorized", body = crate::errors::ErrorResponse)
    ),
    tag = "auth"
)]
pub async fn me(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
) -> ApiResult<UserResponse> {
    let account = state.services.users.get(auth_user.id).await?;
    Ok(Json(ApiResponse::success(account)))
}
