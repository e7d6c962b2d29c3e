use axum::extract::{Path, Query, State};
use axum::routing::{get, post, put};
use axum::{Extension, Json, Router};
use serde::Deserialize;
use utoipa::IntoParams;
use uuid::Uuid;

use crate::auth::AuthUser;
use crate::entities::quotation::{self, QuotationStatus};
use crate::services::quotations::{
    AcceptOutcome, CreateQuotationInput, QuotationDetail, UpdateQuotationInput,
};
use crate::{ApiResponse, ApiResult, AppState, PaginatedResponse};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_quotations).post(create_quotation))
        .route("/:id", get(get_quotation).put(update_quotation))
        .route("/:id/status", put(update_status))
        .route("/:id/accept", post(accept_quotation))
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct QuotationFilters {
    pub status: Option<QuotationStatus>,
    pub client_id: Option<Uuid>,
    #[serde(default = "crate::default_page")]
    pub page: u64,
    #[serde(default = "crate::default_limit")]
    pub limit: u64,
}

#[utoipa::path(
    get,
    path = "/api/v1/quotations",
    params(QuotationFilters),
    responses((status = 200, description = "List quotations")),
    tag = "quotations"
)]
pub async fn list_quotations(
    State(state): State<AppState>,
    Query(filters): Query<QuotationFilters>,
) -> ApiResult<PaginatedResponse<quotation::Model>> {
    let (items, total) = state
        .services
        .quotations
        .list(filters.status, filters.client_id, filters.page, filters.limit)
        .await?;
    Ok(Json(ApiResponse::success(PaginatedResponse::new(
        items,
        total,
        filters.page,
        filters.limit,
    ))))
}

#[utoipa::path(
    post,
    path = "/api/v1/quotations",
    request_body = CreateQuotationInput,
    responses(
        (status = 200, description = "Quotation created", body = QuotationDetail),
        (status = 400, description = "Invalid input", body = crate::errors::ErrorResponse)
    ),
    tag = "quotations"
)]
pub async fn create_quotation(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Json(input): Json<CreateQuotationInput>,
) -> ApiResult<QuotationDetail> {
    let created = state.services.quotations.create(&auth_user, input).await?;
    Ok(Json(ApiResponse::success(created)))
}

#[utoipa::path(
    get,
    path = "/api/v1/quotations/{id}",
    params(("id" = Uuid, Path, description = "Quotation ID")),
    responses(
        (status = 200, description = "Quotation with items", body = QuotationDetail),
        (status = 404, description = "Not found", body = crate::errors::ErrorResponse)
    ),
    tag = "quotations"
)]
pub async fn get_quotation(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<QuotationDetail> {
    let found = state.services.quotations.get(id).await?;
    Ok(Json(ApiResponse::success(found)))
}

#[utoipa::path(
    put,
    path = "/api/v1/quotations/{id}",
    params(("id" = Uuid, Path, description = "Quotation ID")),
    request_body = UpdateQuotationInput,
    responses(
        (status = 200, description = "Quotation updated", body = QuotationDetail),
        (status = 400, description = "Quotation not editable", body = crate::errors::ErrorResponse)
    ),
    tag = "quotations"
)]
pub async fn update_quotation(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(input): Json<UpdateQuotationInput>,
) -> ApiResult<QuotationDetail> {
    let updated = state.services.quotations.update(id, input).await?;
    Ok(Json(ApiResponse::success(updated)))
}

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct UpdateStatusRequest {
    pub status: QuotationStatus,
}

#[utoipa::path(
    put,
    path = "/api/v1/quotations/{id}/status",
    params(("id" = Uuid, Path, description = "Quotation ID")),
    request_body = UpdateStatusRequest,
    responses(
        (status = 200, description = "Status updated", body = quotation::Model),
        (status = 400, description = "Transition not allowed", body = crate::errors::ErrorResponse)
    ),
    tag = "quotations"
)]
pub async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateStatusRequest>,
) -> ApiResult<quotation::Model> {
    let updated = state.services.quotations.update_status(id, body.status).await?;
    Ok(Json(ApiResponse::success(updated)))
}

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct AcceptQuotationRequest {
    /// Reference to the signed contract file
    pub contract_file: String,
}

#[utoipa::path(
    post,
    path = "/api/v1/quotations/{id}/accept",
    params(("id" = Uuid, Path, description = "Quotation ID")),
    request_body = AcceptQuotationRequest,
    responses(
        (status = 200, description = "Quotation converted to a project", body = AcceptOutcome),
        (status = 400, description = "Missing contract", body = crate::errors::ErrorResponse),
        (status = 409, description = "Insufficient stock or already converted", body = crate::errors::ErrorResponse)
    ),
    tag = "quotations"
)]
pub async fn accept_quotation(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
    Json(body): Json<AcceptQuotationRequest>,
) -> ApiResult<AcceptOutcome> {
    let outcome = state
        .services
        .quotations
        .accept(id, &auth_user, &body.contract_file)
        .await?;
    Ok(Json(ApiResponse::success(outcome)))
}

/// Reversal lives on its own router so route gating can restrict it to
/// administrators.
pub fn revert_routes() -> Router<AppState> {
    Router::new().route("/:id/revert", post(revert_quotation))
}

#[utoipa::path(
    post,
    path = "/api/v1/quotations/{id}/revert",
    params(("id" = Uuid, Path, description = "Quotation ID")),
    responses(
        (status = 200, description = "Conversion reverted", body = quotation::Model),
        (status = 400, description = "Quotation not converted", body = crate::errors::ErrorResponse),
        (status = 403, description = "Admin only", body = crate::errors::ErrorResponse)
    ),
    tag = "quotations"
)]
pub async fn revert_quotation(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<quotation::Model> {
    let restored = state.services.quotations.revert(id).await?;
    Ok(Json(ApiResponse::success(restored)))
}
