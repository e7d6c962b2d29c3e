use axum::extract::{Path, Query, State};
use axum::routing::{delete, get, put};
use axum::{Extension, Json, Router};
use chrono::NaiveDate;
use serde::Deserialize;
use utoipa::IntoParams;
use uuid::Uuid;

use crate::auth::AuthUser;
use crate::entities::sales_visit;
use crate::services::visits::{CreateVisitInput, RecordVisitOutcomeInput};
use crate::{ApiResponse, ApiResult, AppState};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_visits).post(create_visit))
        .route("/:id", delete(delete_visit))
        .route("/:id/outcome", put(record_outcome))
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct VisitFilters {
    pub sales_rep_id: Option<Uuid>,
    pub date: Option<NaiveDate>,
}

#[utoipa::path(
    get,
    path = "/api/v1/visits",
    params(VisitFilters),
    responses((status = 200, description = "Visits filtered by rep or date")),
    tag = "visits"
)]
pub async fn list_visits(
    State(state): State<AppState>,
    Query(filters): Query<VisitFilters>,
) -> ApiResult<Vec<sales_visit::Model>> {
    let visits = state
        .services
        .visits
        .list(filters.sales_rep_id, filters.date)
        .await?;
    Ok(Json(ApiResponse::success(visits)))
}

#[utoipa::path(
    post,
    path = "/api/v1/visits",
    request_body = CreateVisitInput,
    responses(
        (status = 200, description = "Visit planned", body = sales_visit::Model),
        (status = 404, description = "Unknown client", body = crate::errors::ErrorResponse)
    ),
    tag = "visits"
)]
pub async fn create_visit(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Json(input): Json<CreateVisitInput>,
) -> ApiResult<sales_visit::Model> {
    let created = state.services.visits.create(auth_user.id, input).await?;
    Ok(Json(ApiResponse::success(created)))
}

#[utoipa::path(
    put,
    path = "/api/v1/visits/{id}/outcome",
    params(("id" = Uuid, Path, description = "Visit ID")),
    request_body = RecordVisitOutcomeInput,
    responses(
        (status = 200, description = "Outcome recorded", body = sales_visit::Model),
        (status = 400, description = "Visit already closed", body = crate::errors::ErrorResponse)
    ),
    tag = "visits"
)]
pub async fn record_outcome(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(input): Json<RecordVisitOutcomeInput>,
) -> ApiResult<sales_visit::Model> {
    let updated = state.services.visits.record_outcome(id, input).await?;
    Ok(Json(ApiResponse::success(updated)))
}

#[utoipa::path(
    delete,
    path = "/api/v1/visits/{id}",
    params(("id" = Uuid, Path, description = "Visit ID")),
    responses(
        (status = 200, description = "Visit removed"),
        (status = 404, description = "Not found", body = crate::errors::ErrorResponse)
    ),
    tag = "visits"
)]
pub async fn delete_visit(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<serde_json::Value> {
    state.services.visits.delete(id).await?;
    Ok(Json(ApiResponse::success(serde_json::json!({ "deleted": id }))))
}
