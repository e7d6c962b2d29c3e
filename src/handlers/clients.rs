use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use utoipa::IntoParams;
use uuid::Uuid;

use crate::entities::client;
use crate::services::clients::{CreateClientInput, UpdateClientInput};
use crate::{ApiResponse, ApiResult, AppState, PaginatedResponse};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_clients).post(create_client))
        .route(
            "/:id",
            get(get_client).put(update_client).delete(delete_client),
        )
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct ClientFilters {
    pub search: Option<String>,
    #[serde(default = "crate::default_page")]
    pub page: u64,
    #[serde(default = "crate::default_limit")]
    pub limit: u64,
}

#[utoipa::path(
    get,
    path = "/api/v1/clients",
    params(ClientFilters),
    responses((status = 200, description = "List clients")),
    tag = "clients"
)]
pub async fn list_clients(
    State(state): State<AppState>,
    Query(filters): Query<ClientFilters>,
) -> ApiResult<PaginatedResponse<client::Model>> {
    let (items, total) = state
        .services
        .clients
        .list(filters.search, filters.page, filters.limit)
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
    path = "/api/v1/clients",
    request_body = CreateClientInput,
    responses(
        (status = 200, description = "Client created", body = client::Model),
        (status = 409, description = "Duplicate email", body = crate::errors::ErrorResponse)
    ),
    tag = "clients"
)]
pub async fn create_client(
    State(state): State<AppState>,
    Json(input): Json<CreateClientInput>,
) -> ApiResult<client::Model> {
    let created = state.services.clients.create(input).await?;
    Ok(Json(ApiResponse::success(created)))
}

#[utoipa::path(
    get,
    path = "/api/v1/clients/{id}",
    params(("id" = Uuid, Path, description = "Client ID")),
    responses(
        (status = 200, description = "Client details", body = client::Model),
        (status = 404, description = "Not found", body = crate::errors::ErrorResponse)
    ),
    tag = "clients"
)]
pub async fn get_client(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<client::Model> {
    let found = state.services.clients.get(id).await?;
    Ok(Json(ApiResponse::success(found)))
}

#[utoipa::path(
    put,
    path = "/api/v1/clients/{id}",
    params(("id" = Uuid, Path, description = "Client ID")),
    request_body = UpdateClientInput,
    responses(
        (status = 200, description = "Client updated", body = client::Model),
        (status = 404, description = "Not found", body = crate::errors::ErrorResponse)
    ),
    tag = "clients"
)]
pub async fn update_client(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(input): Json<UpdateClientInput>,
) -> ApiResult<client::Model> {
    let updated = state.services.clients.update(id, input).await?;
    Ok(Json(ApiResponse::success(updated)))
}

#[utoipa::path(
    delete,
    path = "/api/v1/clients/{id}",
    params(("id" = Uuid, Path, description = "Client ID")),
    responses(
        (status = 200, description = "Client removed"),
        (status = 404, description = "Not found", body = crate::errors::ErrorResponse),
        (status = 409, description = "Client has quotations", body = crate::errors::ErrorResponse)
    ),
    tag = "clients"
)]
pub async fn delete_client(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<serde_json::Value> {
    state.services.clients.delete(id).await?;
    Ok(Json(ApiResponse::success(serde_json::json!({ "deleted": id }))))
}
