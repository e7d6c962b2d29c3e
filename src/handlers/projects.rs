use axum::extract::{Path, Query, State};
use axum::routing::{get, post, put};
use axum::{Extension, Json, Router};
use serde::Deserialize;
use utoipa::IntoParams;
use uuid::Uuid;

use crate::auth::AuthUser;
use crate::entities::project::{self, ProjectStage};
use crate::entities::project_attachment;
use crate::services::projects::{AddAttachmentInput, ProjectDetail, UpdateStageInput};
use crate::{ApiResponse, ApiResult, AppState, PaginatedResponse};

/// Read-only surface, open to everyone who works with projects.
pub fn read_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_projects))
        .route("/:id", get(get_project))
}

/// Mutating surface, restricted to the installation side.
pub fn write_routes() -> Router<AppState> {
    Router::new()
        .route("/:id/stage", put(update_stage))
        .route("/:id/team", put(assign_team))
        .route("/:id/attachments", post(add_attachment))
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct ProjectFilters {
    pub stage: Option<ProjectStage>,
    pub client_id: Option<Uuid>,
    #[serde(default = "crate::default_page")]
    pub page: u64,
    #[serde(default = "crate::default_limit")]
    pub limit: u64,
}

#[utoipa::path(
    get,
    path = "/api/v1/projects",
    params(ProjectFilters),
    responses((status = 200, description = "List projects")),
    tag = "projects"
)]
pub async fn list_projects(
    State(state): State<AppState>,
    Query(filters): Query<ProjectFilters>,
) -> ApiResult<PaginatedResponse<project::Model>> {
    let (items, total) = state
        .services
        .projects
        .list(filters.stage, filters.client_id, filters.page, filters.limit)
        .await?;
    Ok(Json(ApiResponse::success(PaginatedResponse::new(
        items,
        total,
        filters.page,
        filters.limit,
    ))))
}

#[utoipa::path(
    get,
    path = "/api/v1/projects/{id}",
    params(("id" = Uuid, Path, description = "Project ID")),
    responses(
        (status = 200, description = "Project with attachments", body = ProjectDetail),
        (status = 404, description = "Not found", body = crate::errors::ErrorResponse)
    ),
    tag = "projects"
)]
pub async fn get_project(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<ProjectDetail> {
    let found = state.services.projects.get(id).await?;
    Ok(Json(ApiResponse::success(found)))
}

#[utoipa::path(
    put,
    path = "/api/v1/projects/{id}/stage",
    params(("id" = Uuid, Path, description = "Project ID")),
    request_body = UpdateStageInput,
    responses(
        (status = 200, description = "Stage updated", body = project::Model),
        (status = 400, description = "Missing reason or delivery proof", body = crate::errors::ErrorResponse),
        (status = 403, description = "Backward move without admin rights", body = crate::errors::ErrorResponse)
    ),
    tag = "projects"
)]
pub async fn update_stage(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
    Json(input): Json<UpdateStageInput>,
) -> ApiResult<project::Model> {
    let updated = state
        .services
        .projects
        .update_stage(id, &auth_user, input)
        .await?;
    Ok(Json(ApiResponse::success(updated)))
}

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct AssignTeamRequest {
    pub team: Option<String>,
}

#[utoipa::path(
    put,
    path = "/api/v1/projects/{id}/team",
    params(("id" = Uuid, Path, description = "Project ID")),
    request_body = AssignTeamRequest,
    responses(
        (status = 200, description = "Team assigned", body = project::Model),
        (status = 404, description = "Not found", body = crate::errors::ErrorResponse)
    ),
    tag = "projects"
)]
pub async fn assign_team(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<AssignTeamRequest>,
) -> ApiResult<project::Model> {
    let updated = state.services.projects.assign_team(id, body.team).await?;
    Ok(Json(ApiResponse::success(updated)))
}

#[utoipa::path(
    post,
    path = "/api/v1/projects/{id}/attachments",
    params(("id" = Uuid, Path, description = "Project ID")),
    request_body = AddAttachmentInput,
    responses(
        (status = 200, description = "Attachment added", body = project_attachment::Model),
        (status = 404, description = "Not found", body = crate::errors::ErrorResponse)
    ),
    tag = "projects"
)]
pub async fn add_attachment(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
    Json(input): Json<AddAttachmentInput>,
) -> ApiResult<project_attachment::Model> {
    let attachment = state
        .services
        .projects
        .add_attachment(id, &auth_user, input)
        .await?;
    Ok(Json(ApiResponse::success(attachment)))
}
