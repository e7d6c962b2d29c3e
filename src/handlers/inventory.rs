use axum::extract::{Path, State};
use axum::routing::{get, put};
use axum::{Json, Router};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::entities::{inventory_item, product_type};
use crate::{ApiResponse, ApiResult, AppState};

pub fn read_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_inventory))
        .route("/low-stock", get(low_stock))
}

pub fn write_routes() -> Router<AppState> {
    Router::new().route("/:product_type_id", put(set_stock))
}

#[derive(Debug, serde::Serialize, utoipa::ToSchema)]
pub struct StockLevel {
    pub item: inventory_item::Model,
    pub product: Option<product_type::Model>,
}

fn stock_levels(
    rows: Vec<(inventory_item::Model, Option<product_type::Model>)>,
) -> Vec<StockLevel> {
    rows.into_iter()
        .map(|(item, product)| StockLevel { item, product })
        .collect()
}

#[utoipa::path(
    get,
    path = "/api/v1/inventory",
    responses((status = 200, description = "Stock levels with product details")),
    tag = "inventory"
)]
pub async fn list_inventory(State(state): State<AppState>) -> ApiResult<Vec<StockLevel>> {
    let rows = state.services.inventory.list_inventory().await?;
    Ok(Json(ApiResponse::success(stock_levels(rows))))
}

#[utoipa::path(
    get,
    path = "/api/v1/inventory/low-stock",
    responses((status = 200, description = "Items at or below the low-stock threshold")),
    tag = "inventory"
)]
pub async fn low_stock(State(state): State<AppState>) -> ApiResult<Vec<StockLevel>> {
    let rows = state.services.inventory.low_stock().await?;
    Ok(Json(ApiResponse::success(stock_levels(rows))))
}

#[derive(Debug, serde::Deserialize, utoipa::ToSchema)]
pub struct SetStockRequest {
    pub stock: Decimal,
}

#[utoipa::path(
    put,
    path = "/api/v1/inventory/{product_type_id}",
    params(("product_type_id" = Uuid, Path, description = "Product type ID")),
    request_body = SetStockRequest,
    responses(
        (status = 200, description = "Stock level updated", body = inventory_item::Model),
        (status = 400, description = "Invalid stock level", body = crate::errors::ErrorResponse),
        (status = 404, description = "Unknown product type", body = crate::errors::ErrorResponse)
    ),
    tag = "inventory"
)]
pub async fn set_stock(
    State(state): State<AppState>,
    Path(product_type_id): Path<Uuid>,
    Json(body): Json<SetStockRequest>,
) -> ApiResult<inventory_item::Model> {
    let updated = state
        .services
        .inventory
        .set_stock(product_type_id, body.stock)
        .await?;
    Ok(Json(ApiResponse::success(updated)))
}
