use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "BeyondSmart ERP API",
        version = "0.1.0",
        description = r#"
Backend for a smart-home installation business: client quotations, the
project pipeline they convert into, warehouse stock, maintenance tickets,
sales visits and HR custody records.

## Authentication

All endpoints except login require a bearer token:

```
Authorization: Bearer <your-jwt-token>
```

Access is gated by role; administrators pass every gate.
        "#
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development")
    ),
    tags(
        (name = "auth", description = "Login and current account"),
        (name = "users", description = "Account administration"),
        (name = "clients", description = "Client directory"),
        (name = "products", description = "Product catalog"),
        (name = "inventory", description = "Warehouse stock levels"),
        (name = "quotations", description = "Quotation lifecycle and conversion"),
        (name = "projects", description = "Project pipeline"),
        (name = "maintenance", description = "Post-delivery service tickets"),
        (name = "notifications", description = "Per-user notifications"),
        (name = "visits", description = "Sales visit planning"),
        (name = "hr", description = "Employees and custody ledger")
    ),
    paths(
        crate::handlers::auth::login,
        crate::handlers::auth::me,

        crate::handlers::users::list_users,
        crate::handlers::users::create_user,
        crate::handlers::users::get_user,
        crate::handlers::users::update_user,
        crate::handlers::users::delete_user,
        crate::handlers::users::set_role,

        crate::handlers::clients::list_clients,
        crate::handlers::clients::create_client,
        crate::handlers::clients::get_client,
        crate::handlers::clients::update_client,
        crate::handlers::clients::delete_client,

        crate::handlers::products::list_products,
        crate::handlers::products::create_product,
        crate::handlers::products::get_product,

        crate::handlers::inventory::list_inventory,
        crate::handlers::inventory::low_stock,
        crate::handlers::inventory::set_stock,

        crate::handlers::quotations::list_quotations,
        crate::handlers::quotations::create_quotation,
        crate::handlers::quotations::get_quotation,
        crate::handlers::quotations::update_quotation,
        crate::handlers::quotations::update_status,
        crate::handlers::quotations::accept_quotation,
        crate::handlers::quotations::revert_quotation,

        crate::handlers::projects::list_projects,
        crate::handlers::projects::get_project,
        crate::handlers::projects::update_stage,
        crate::handlers::projects::assign_team,
        crate::handlers::projects::add_attachment,

        crate::handlers::maintenance::list_requests,
        crate::handlers::maintenance::create_request,
        crate::handlers::maintenance::get_request,
        crate::handlers::maintenance::update_status,

        crate::handlers::notifications::list_notifications,
        crate::handlers::notifications::unread_count,
        crate::handlers::notifications::mark_read,
        crate::handlers::notifications::mark_all_read,

        crate::handlers::visits::list_visits,
        crate::handlers::visits::create_visit,
        crate::handlers::visits::record_outcome,
        crate::handlers::visits::delete_visit,

        crate::handlers::hr::list_employees,
        crate::handlers::hr::create_employee,
        crate::handlers::hr::get_employee,
        crate::handlers::hr::custody_statement,
        crate::handlers::hr::add_custody_entry,
    ),
    components(
        schemas(
            crate::ApiResponse<serde_json::Value>,
            crate::PaginatedResponse<serde_json::Value>,
            crate::errors::ErrorResponse,

            crate::entities::client::Model,
            crate::entities::product_type::Model,
            crate::entities::inventory_item::Model,
            crate::entities::quotation::Model,
            crate::entities::quotation_item::Model,
            crate::entities::project::Model,
            crate::entities::project_attachment::Model,
            crate::entities::maintenance_request::Model,
            crate::entities::maintenance_status_log::Model,
            crate::entities::notification::Model,
            crate::entities::sales_visit::Model,
            crate::entities::employee::Model,
            crate::entities::custody_entry::Model,

            crate::entities::user::UserRole,
            crate::entities::product_type::ProductCategory,
            crate::entities::product_type::UnitOfMeasure,
            crate::entities::quotation::QuotationStatus,
            crate::entities::quotation::AdjustmentMode,
            crate::entities::project::ProjectStage,
            crate::entities::project_attachment::AttachmentKind,
            crate::entities::maintenance_request::MaintenanceStatus,
            crate::entities::notification::NotificationKind,
            crate::entities::sales_visit::VisitOutcome,
            crate::entities::custody_entry::CustodyEntryType,

            crate::auth::LoginCredentials,
            crate::handlers::auth::LoginResponse,
            crate::services::users::UserResponse,
            crate::services::users::CreateUserInput,
            crate::services::users::UpdateUserInput,
            crate::services::clients::CreateClientInput,
            crate::services::clients::UpdateClientInput,
            crate::services::inventory::CreateProductTypeInput,
            crate::services::quotations::CreateQuotationInput,
            crate::services::quotations::UpdateQuotationInput,
            crate::services::quotations::QuotationItemInput,
            crate::services::projects::UpdateStageInput,
            crate::services::projects::AddAttachmentInput,
            crate::services::maintenance::CreateMaintenanceInput,
            crate::services::maintenance::UpdateMaintenanceStatusInput,
            crate::services::visits::CreateVisitInput,
            crate::services::visits::RecordVisitOutcomeInput,
            crate::services::hr::CreateEmployeeInput,
            crate::services::hr::CreateCustodyEntryInput,
        )
    )
)]
pub struct ApiDocV1;

pub fn swagger_ui() -> SwaggerUi {
    SwaggerUi::new("/swagger-ui")
        .url("/api-docs/openapi.json", ApiDocV1::openapi())
        .config(utoipa_swagger_ui::Config::from("/api-docs/openapi.json").try_it_out_enabled(true))
}
