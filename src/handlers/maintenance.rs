use axum::extract::{Path, Query, State};
use axum::routing::{get, put};
use axum::{Extension, Json, Router};
use serde::Deserialize;
use utoipa::IntoParams;
use uuid::Uuid;

use crate::auth::AuthUser;
use crate::entities::maintenance_request::{self, MaintenanceStatus};
use crate::services::maintenance::{
    CreateMaintenanceInput, MaintenanceDetail, UpdateMaintenanceStatusInput,
};
use crate::{ApiResponse, ApiResult, AppState};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_requests).post(create_request))
        .route("/:id", get(get_request))
        .route("/:id/status", put(update_status))
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct MaintenanceFilters {
    pub status: Option<MaintenanceStatus>,
    pub project_id: Option<Uuid>,
}

#[utoipa::path(
    get,
    path = "/api/v1/maintenance",
    params(MaintenanceFilters),
    responses((status = 200, description = "List maintenance requests")),
    tag = "maintenance"
)]
pub async fn list_requests(
    State(state): State<AppState>,
    Query(filters): Query<MaintenanceFilters>,
) -> ApiResult<Vec<maintenance_request::Model>> {
    let requests = state
        .services
        .maintenance
        .list(filters.status, filters.project_id)
        .await?;
    Ok(Json(ApiResponse::success(requests)))
}

#[utoipa::path(
    post,
    path = "/api/v1/maintenance",
    request_body = CreateMaintenanceInput,
    responses(
        (status = 200, description = "Ticket opened", body = MaintenanceDetail),
        (status = 400, description = "Project not delivered", body = crate::errors::ErrorResponse)
    ),
    tag = "maintenance"
)]
pub async fn create_request(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Json(input): Json<CreateMaintenanceInput>,
) -> ApiResult<MaintenanceDetail> {
    let created = state.services.maintenance.create(&auth_user, input).await?;
    Ok(Json(ApiResponse::success(created)))
}

#[utoipa::path(
    get,
    path = "/api/v1/maintenance/{id}",
    params(("id" = Uuid, Path, description = "Maintenance request ID")),
    responses(
        (status = 200, description = "Ticket with history", body = MaintenanceDetail),
        (status = 404, description = "Not found", body = crate::errors::ErrorResponse)
    ),
    tag = "maintenance"
)]
pub async fn get_request(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<MaintenanceDetail> {
    let found = state.services.maintenance.get(id).await?;
    Ok(Json(ApiResponse::success(found)))
}

#[utoipa::path(
    put,
    path = "/api/v1/maintenance/{id}/status",
    params(("id" = Uuid, Path, description = "Maintenance request ID")),
    request_body = UpdateMaintenanceStatusInput,
    responses(
        (status = 200, description = "Status updated with history", body = MaintenanceDetail),
        (status = 400, description = "Transition not allowed", body = crate::errors::ErrorResponse)
    ),
    tag = "maintenance"
)]
pub async fn update_status(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
    Json(input): Json<UpdateMaintenanceStatusInput>,
) -> ApiResult<MaintenanceDetail> {
    let updated = state
        .services
        .maintenance
        .update_status(id, &auth_user, input)
        .await?;
    Ok(Json(ApiResponse::success(updated)))
}
