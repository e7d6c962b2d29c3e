use axum::extract::{Path, Query, State};
use axum::routing::{get, put};
use axum::{Extension, Json, Router};
use serde::Deserialize;
use utoipa::IntoParams;
use uuid::Uuid;

use crate::auth::AuthUser;
use crate::entities::notification;
use crate::{ApiResponse, ApiResult, AppState};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_notifications))
        .route("/unread-count", get(unread_count))
        .route("/read-all", put(mark_all_read))
        .route("/:id/read", put(mark_read))
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct NotificationFilters {
    #[serde(default)]
    pub unread_only: bool,
}

#[utoipa::path(
    get,
    path = "/api/v1/notifications",
    params(NotificationFilters),
    responses((status = 200, description = "Current user's notifications")),
    tag = "notifications"
)]
pub async fn list_notifications(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Query(filters): Query<NotificationFilters>,
) -> ApiResult<Vec<notification::Model>> {
    let rows = state
        .services
        .notifications
        .list_for_user(auth_user.id, filters.unread_only)
        .await?;
    Ok(Json(ApiResponse::success(rows)))
}

#[utoipa::path(
    get,
    path = "/api/v1/notifications/unread-count",
    responses((status = 200, description = "Number of unread notifications")),
    tag = "notifications"
)]
pub async fn unread_count(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
) -> ApiResult<u64> {
    let count = state.services.notifications.unread_count(auth_user.id).await?;
    Ok(Json(ApiResponse::success(count)))
}

#[utoipa::path(
    put,
    path = "/api/v1/notifications/{id}/read",
    params(("id" = Uuid, Path, description = "Notification ID")),
    responses(
        (status = 200, description = "Notification marked read", body = notification::Model),
        (status = 404, description = "Not found or not yours", body = crate::errors::ErrorResponse)
    ),
    tag = "notifications"
)]
pub async fn mark_read(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> ApiResult<notification::Model> {
    let updated = state
        .services
        .notifications
        .mark_read(auth_user.id, id)
        .await?;
    Ok(Json(ApiResponse::success(updated)))
}

#[utoipa::path(
    put,
    path = "/api/v1/notifications/read-all",
    responses((status = 200, description = "All notifications marked read")),
    tag = "notifications"
)]
pub async fn mark_all_read(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
) -> ApiResult<u64> {
    let affected = state
        .services
        .notifications
        .mark_all_read(auth_user.id)
        .await?;
    Ok(Json(ApiResponse::success(affected)))
}
