use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Extension, Json, Router};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tower_http::trace::TraceLayer;
use utoipa::ToSchema;

pub mod auth;
pub mod config;
pub mod db;
pub mod entities;
pub mod errors;
pub mod events;
pub mod handlers;
pub mod migrator;
pub mod openapi;
pub mod request_context;
pub mod services;

use auth::AuthRouterExt;
use entities::user::UserRole;

/// Shared application state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<db::DbPool>,
    pub config: Arc<config::AppConfig>,
    pub event_sender: events::EventSender,
    pub services: handlers::AppServices,
}

pub fn default_page() -> u64 {
    1
}

pub fn default_limit() -> u64 {
    20
}

#[derive(Serialize, ToSchema)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<ResponseMeta>,
}

#[derive(Serialize, ToSchema)]
pub struct ResponseMeta {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    pub timestamp: String,
}

impl ResponseMeta {
    fn capture() -> Self {
        Self {
            request_id: request_context::current_request_id().map(|rid| rid.as_str().to_string()),
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
            meta: Some(ResponseMeta::capture()),
        }
    }

    pub fn error(message: String) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message),
            meta: Some(ResponseMeta::capture()),
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct PaginatedResponse<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u64,
    pub limit: u64,
    pub total_pages: u64,
}

impl<T> PaginatedResponse<T> {
    pub fn new(items: Vec<T>, total: u64, page: u64, limit: u64) -> Self {
        let total_pages = if limit == 0 { 0 } else { total.div_ceil(limit) };
        Self {
            items,
            total,
            page,
            limit,
            total_pages,
        }
    }
}

/// Standard API result type for JSON responses.
pub type ApiResult<T> = Result<Json<ApiResponse<T>>, errors::ServiceError>;

/// All versioned routes, with role gates applied per surface. Admins pass
/// every gate.
pub fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", handlers::auth::routes())
        .nest("/users", handlers::users::routes().with_roles(&[]))
        .nest(
            "/clients",
            handlers::clients::routes().with_roles(&[UserRole::Sales]),
        )
        .nest(
            "/product-types",
            handlers::products::read_routes()
                .with_roles(&[UserRole::Sales, UserRole::InstallationTeam, UserRole::Warehouse])
                .merge(handlers::products::write_routes().with_roles(&[UserRole::Warehouse])),
        )
        .nest(
            "/inventory",
            handlers::inventory::read_routes()
                .with_roles(&[UserRole::InstallationTeam, UserRole::Warehouse])
                .merge(handlers::inventory::write_routes().with_roles(&[UserRole::Warehouse])),
        )
        .nest(
            "/quotations",
            handlers::quotations::routes()
                .with_roles(&[UserRole::Sales])
                .merge(handlers::quotations::revert_routes().with_roles(&[])),
        )
        .nest(
            "/projects",
            handlers::projects::read_routes()
                .with_roles(&[UserRole::Sales, UserRole::InstallationTeam, UserRole::Warehouse])
                .merge(
                    handlers::projects::write_routes().with_roles(&[UserRole::InstallationTeam]),
                ),
        )
        .nest(
            "/maintenance",
            handlers::maintenance::routes().with_roles(&[
                UserRole::Sales,
                UserRole::InstallationTeam,
                UserRole::Warehouse,
            ]),
        )
        .nest("/notifications", handlers::notifications::routes().with_auth())
        .nest(
            "/visits",
            handlers::visits::routes().with_roles(&[UserRole::Sales]),
        )
        .nest(
            "/hr",
            handlers::hr::routes().with_roles(&[UserRole::Hr, UserRole::Finance]),
        )
        .route("/status", get(api_status))
        .route("/health", get(health_check))
}

/// Builds the full application router. Shared by the binary and the tests.
pub fn app_router(state: AppState) -> Router {
    let auth_service = state.services.auth.clone();

    Router::new()
        .nest("/api/v1", api_v1_routes())
        .merge(openapi::swagger_ui())
        .with_state(state)
        .layer(Extension(auth_service))
        .layer(axum::middleware::from_fn(
            request_context::request_id_middleware,
        ))
        .layer(TraceLayer::new_for_http())
}

async fn api_status() -> Result<Json<ApiResponse<Value>>, errors::ServiceError> {
    let status_data = json!({
        "status": "ok",
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
    });
    Ok(Json(ApiResponse::success(status_data)))
}

async fn health_check(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Value>>, errors::ServiceError> {
    let db_status = match state.db.ping().await {
        Ok(_) => "healthy",
        Err(_) => "unhealthy",
    };

    let health_data = json!({
        "status": db_status,
        "components": {
            "database": db_status,
        },
        "timestamp": Utc::now().to_rfc3339(),
    });
    Ok(Json(ApiResponse::success(health_data)))
}
