use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Extension, Json, Router};
use uuid::Uuid;

use crate::auth::AuthUser;
use crate::entities::employee;
use crate::services::hr::{CreateCustodyEntryInput, CreateEmployeeInput, CustodyStatement};
use crate::{ApiResponse, ApiResult, AppState};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/employees", get(list_employees).post(create_employee))
        .route("/employees/:id", get(get_employee))
        .route(
            "/employees/:id/custody",
            get(custody_statement).post(add_custody_entry),
        )
}

#[utoipa::path(
    get,
    path = "/api/v1/hr/employees",
    responses((status = 200, description = "List employees")),
    tag = "hr"
)]
pub async fn list_employees(State(state): State<AppState>) -> ApiResult<Vec<employee::Model>> {
    let employees = state.services.hr.list_employees().await?;
    Ok(Json(ApiResponse::success(employees)))
}

#[utoipa::path(
    post,
    path = "/api/v1/hr/employees",
    request_body = CreateEmployeeInput,
    responses(
        (status = 200, description = "Employee created", body = employee::Model),
        (status = 400, description = "Invalid input", body = crate::errors::ErrorResponse)
    ),
    tag = "hr"
)]
pub async fn create_employee(
    State(state): State<AppState>,
    Json(input): Json<CreateEmployeeInput>,
) -> ApiResult<employee::Model> {
    let created = state.services.hr.create_employee(input).await?;
    Ok(Json(ApiResponse::success(created)))
}

#[utoipa::path(
    get,
    path = "/api/v1/hr/employees/{id}",
    params(("id" = Uuid, Path, description = "Employee ID")),
    responses(
        (status = 200, description = "Employee details", body = employee::Model),
        (status = 404, description = "Not found", body = crate::errors::ErrorResponse)
    ),
    tag = "hr"
)]
pub async fn get_employee(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<employee::Model> {
    let found = state.services.hr.get_employee(id).await?;
    Ok(Json(ApiResponse::success(found)))
}

#[utoipa::path(
    get,
    path = "/api/v1/hr/employees/{id}/custody",
    params(("id" = Uuid, Path, description = "Employee ID")),
    responses(
        (status = 200, description = "Custody ledger with derived balance", body = CustodyStatement),
        (status = 404, description = "Not found", body = crate::errors::ErrorResponse)
    ),
    tag = "hr"
)]
pub async fn custody_statement(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<CustodyStatement> {
    let statement = state.services.hr.custody_statement(id).await?;
    Ok(Json(ApiResponse::success(statement)))
}

#[utoipa::path(
    post,
    path = "/api/v1/hr/employees/{id}/custody",
    params(("id" = Uuid, Path, description = "Employee ID")),
    request_body = CreateCustodyEntryInput,
    responses(
        (status = 200, description = "Entry recorded", body = CustodyStatement),
        (status = 400, description = "Debit exceeds balance", body = crate::errors::ErrorResponse)
    ),
    tag = "hr"
)]
pub async fn add_custody_entry(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
    Json(input): Json<CreateCustodyEntryInput>,
) -> ApiResult<CustodyStatement> {
    let statement = state
        .services
        .hr
        .add_custody_entry(id, &auth_user, input)
        .await?;
    Ok(Json(ApiResponse::success(statement)))
}
