use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use uuid::Uuid;

use crate::entities::{inventory_item, product_type};
use crate::services::inventory::CreateProductTypeInput;
use crate::{ApiResponse, ApiResult, AppState};

/// Catalog browsing, shared by sales and warehouse.
pub fn read_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_products))
        .route("/:id", get(get_product))
}

/// Catalog changes, warehouse only.
pub fn write_routes() -> Router<AppState> {
    Router::new().route("/", axum::routing::post(create_product))
}

#[derive(Debug, serde::Serialize, utoipa::ToSchema)]
pub struct CreatedProduct {
    pub product: product_type::Model,
    pub inventory: inventory_item::Model,
}

#[utoipa::path(
    get,
    path = "/api/v1/product-types",
    responses((status = 200, description = "List product types")),
    tag = "products"
)]
pub async fn list_products(
    State(state): State<AppState>,
) -> ApiResult<Vec<product_type::Model>> {
    let products = state.services.inventory.list_product_types().await?;
    Ok(Json(ApiResponse::success(products)))
}

#[utoipa::path(
    post,
    path = "/api/v1/product-types",
    request_body = CreateProductTypeInput,
    responses(
        (status = 200, description = "Product type created", body = CreatedProduct),
        (status = 400, description = "Invalid input", body = crate::errors::ErrorResponse)
    ),
    tag = "products"
)]
pub async fn create_product(
    State(state): State<AppState>,
    Json(input): Json<CreateProductTypeInput>,
) -> ApiResult<CreatedProduct> {
    let (product, inventory) = state.services.inventory.create_product_type(input).await?;
    Ok(Json(ApiResponse::success(CreatedProduct {
        product,
        inventory,
    })))
}

#[utoipa::path(
    get,
    path = "/api/v1/product-types/{id}",
    params(("id" = Uuid, Path, description = "Product type ID")),
    responses(
        (status = 200, description = "Product type details", body = product_type::Model),
        (status = 404, description = "Not found", body = crate::errors::ErrorResponse)
    ),
    tag = "products"
)]
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<product_type::Model> {
    let found = state.services.inventory.get_product_type(id).await?;
    Ok(Json(ApiResponse::success(found)))
}
