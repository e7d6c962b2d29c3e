mod common;

use chrono::{Duration, Utc};
use rust_decimal_macros::dec;

use beyondsmart_api::auth::AuthUser;
use beyondsmart_api::entities::maintenance_request::MaintenanceStatus;
use beyondsmart_api::entities::product_type::UnitOfMeasure;
use beyondsmart_api::entities::project;
use beyondsmart_api::entities::user::UserRole;
use beyondsmart_api::errors::ServiceError;
use beyondsmart_api::services::maintenance::{CreateMaintenanceInput, UpdateMaintenanceStatusInput};
use beyondsmart_api::services::projects::UpdateStageInput;
use beyondsmart_api::services::quotations::{CreateQuotationInput, QuotationItemInput};
use beyondsmart_api::AppState;

/// Quotation accepted and walked to delivery, so tickets can be opened
/// against the resulting project.
async fn delivered_project(state: &AppState, warranty_years: i32) -> (project::Model, AuthUser) {
    let (_, sales) = common::seed_user(state, "aftercare", UserRole::Sales, "pw-sales-123").await;
    let customer = common::seed_client(state, "warranty").await;
    let product = common::seed_product(
        state,
        "Motorized blind",
        UnitOfMeasure::Pcs,
        warranty_years,
        dec!(50),
    )
    .await;

    let created = state
        .services
        .quotations
        .create(
            &sales,
            CreateQuotationInput {
                client_id: customer.id,
                project_name: "Aftercare".to_string(),
                items: vec![QuotationItemInput {
                    product_type_id: product.id,
                    quantity: dec!(3),
                    unit_price: dec!(120),
                    width: None,
                    height: None,
                }],
                discount: None,
                discount_mode: None,
                tax: None,
                tax_mode: None,
            },
        )
        .await
        .unwrap();

    let accepted = state
        .services
        .quotations
        .accept(created.quotation.id, &sales, "contracts/aftercare.pdf")
        .await
        .unwrap();

    let delivered = state
        .services
        .projects
        .update_stage(
            accepted.project.id,
            &sales,
            UpdateStageInput {
                stage: beyondsmart_api::entities::project::ProjectStage::Delivered,
                reason: None,
                attachment_ref: Some("files/pod-aftercare.pdf".to_string()),
            },
        )
        .await
        .unwrap();

    (delivered, sales)
}

fn ticket_input(project_id: uuid::Uuid) -> CreateMaintenanceInput {
    CreateMaintenanceInput {
        project_id: Some(project_id),
        client_name: None,
        title: "Blind stuck halfway".to_string(),
        description: "Left living-room blind stops at 40%".to_string(),
    }
}

#[tokio::test]
async fn ticket_opens_with_a_history_entry() {
    let state = common::test_state().await;
    let (delivered, sales) = delivered_project(&state, 2).await;

    let detail = state
        .services
        .maintenance
        .create(&sales, ticket_input(delivered.id))
        .await
        .unwrap();

    assert_eq!(detail.request.ticket_number, "MNT-00001");
    assert_eq!(detail.request.status, MaintenanceStatus::Open);
    assert_eq!(detail.history.len(), 1);
    assert!(detail.history[0].from_status.is_none());
    assert_eq!(detail.history[0].to_status, MaintenanceStatus::Open);
}

#[tokio::test]
async fn tickets_need_a_delivered_project() {
    let state = common::test_state().await;
    let (_, sales) = common::seed_user(&state, "early", UserRole::Sales, "pw-sales-123").await;
    let customer = common::seed_client(&state, "undelivered").await;
    let product =
        common::seed_product(&state, "Curtain rail", UnitOfMeasure::Pcs, 1, dec!(20)).await;

    let created = state
        .services
        .quotations
        .create(
            &sales,
            CreateQuotationInput {
                client_id: customer.id,
                project_name: "Still building".to_string(),
                items: vec![QuotationItemInput {
                    product_type_id: product.id,
                    quantity: dec!(1),
                    unit_price: dec!(80),
                    width: None,
                    height: None,
                }],
                discount: None,
                discount_mode: None,
                tax: None,
                tax_mode: None,
            },
        )
        .await
        .unwrap();
    let accepted = state
        .services
        .quotations
        .accept(created.quotation.id, &sales, "contracts/early.pdf")
        .await
        .unwrap();

    let err = state
        .services
        .maintenance
        .create(&sales, ticket_input(accepted.project.id))
        .await
        .expect_err("project not delivered yet");
    assert!(matches!(err, ServiceError::InvalidOperation(_)));
}

#[tokio::test]
async fn every_status_change_is_logged() {
    let state = common::test_state().await;
    let (delivered, sales) = delivered_project(&state, 2).await;

    let detail = state
        .services
        .maintenance
        .create(&sales, ticket_input(delivered.id))
        .await
        .unwrap();

    let detail = state
        .services
        .maintenance
        .update_status(
            detail.request.id,
            &sales,
            UpdateMaintenanceStatusInput {
                status: MaintenanceStatus::InProgress,
                note: Some("technician dispatched".to_string()),
                scheduled_for: None,
            },
        )
        .await
        .unwrap();
    assert_eq!(detail.request.status, MaintenanceStatus::InProgress);
    assert_eq!(detail.history.len(), 2);
    assert_eq!(detail.history[1].from_status, Some(MaintenanceStatus::Open));
    assert_eq!(detail.history[1].to_status, MaintenanceStatus::InProgress);
    assert_eq!(detail.history[1].note.as_deref(), Some("technician dispatched"));

    let detail = state
        .services
        .maintenance
        .update_status(
            detail.request.id,
            &sales,
            UpdateMaintenanceStatusInput {
                status: MaintenanceStatus::Completed,
                note: None,
                scheduled_for: None,
            },
        )
        .await
        .unwrap();
    assert_eq!(detail.history.len(), 3);
}

#[tokio::test]
async fn scheduling_requires_a_date() {
    let state = common::test_state().await;
    let (delivered, sales) = delivered_project(&state, 1).await;

    let detail = state
        .services
        .maintenance
        .create(&sales, ticket_input(delivered.id))
        .await
        .unwrap();

    let err = state
        .services
        .maintenance
        .update_status(
            detail.request.id,
            &sales,
            UpdateMaintenanceStatusInput {
                status: MaintenanceStatus::Scheduled,
                note: None,
                scheduled_for: None,
            },
        )
        .await
        .expect_err("no date given");
    assert!(matches!(err, ServiceError::ValidationError(_)));

    let when = Utc::now() + Duration::days(2);
    let detail = state
        .services
        .maintenance
        .update_status(
            detail.request.id,
            &sales,
            UpdateMaintenanceStatusInput {
                status: MaintenanceStatus::Scheduled,
                note: None,
                scheduled_for: Some(when),
            },
        )
        .await
        .unwrap();
    assert_eq!(detail.request.status, MaintenanceStatus::Scheduled);
    assert_eq!(
        detail.request.scheduled_for.map(|d| d.timestamp()),
        Some(when.timestamp())
    );
}

#[tokio::test]
async fn completed_tickets_are_frozen() {
    let state = common::test_state().await;
    let (delivered, sales) = delivered_project(&state, 1).await;

    let detail = state
        .services
        .maintenance
        .create(&sales, ticket_input(delivered.id))
        .await
        .unwrap();
    state
        .services
        .maintenance
        .update_status(
            detail.request.id,
            &sales,
            UpdateMaintenanceStatusInput {
                status: MaintenanceStatus::Completed,
                note: Some("fixed on site".to_string()),
                scheduled_for: None,
            },
        )
        .await
        .unwrap();

    let err = state
        .services
        .maintenance
        .update_status(
            detail.request.id,
            &sales,
            UpdateMaintenanceStatusInput {
                status: MaintenanceStatus::Open,
                note: None,
                scheduled_for: None,
            },
        )
        .await
        .expect_err("reopening a completed ticket");
    assert!(matches!(err, ServiceError::InvalidOperation(_)));
}

#[tokio::test]
async fn warranty_flag_follows_product_warranty() {
    let state = common::test_state().await;

    let (covered_project, sales) = delivered_project(&state, 2).await;
    let covered = state
        .services
        .maintenance
        .create(&sales, ticket_input(covered_project.id))
        .await
        .unwrap();
    assert!(covered.request.under_warranty);

    let customer = common::seed_client(&state, "no-warranty").await;
    let bare = common::seed_product(&state, "Bare cable", UnitOfMeasure::Pcs, 0, dec!(30)).await;
    let created = state
        .services
        .quotations
        .create(
            &sales,
            CreateQuotationInput {
                client_id: customer.id,
                project_name: "No cover".to_string(),
                items: vec![QuotationItemInput {
                    product_type_id: bare.id,
                    quantity: dec!(2),
                    unit_price: dec!(10),
                    width: None,
                    height: None,
                }],
                discount: None,
                discount_mode: None,
                tax: None,
                tax_mode: None,
            },
        )
        .await
        .unwrap();
    let accepted = state
        .services
        .quotations
        .accept(created.quotation.id, &sales, "contracts/no-cover.pdf")
        .await
        .unwrap();
    state
        .services
        .projects
        .update_stage(
            accepted.project.id,
            &sales,
            UpdateStageInput {
                stage: beyondsmart_api::entities::project::ProjectStage::Delivered,
                reason: None,
                attachment_ref: Some("files/pod-no-cover.pdf".to_string()),
            },
        )
        .await
        .unwrap();

    let uncovered = state
        .services
        .maintenance
        .create(&sales, ticket_input(accepted.project.id))
        .await
        .unwrap();
    assert!(!uncovered.request.under_warranty);
    assert_eq!(uncovered.request.ticket_number, "MNT-00002");
}

#[tokio::test]
async fn walk_in_tickets_take_a_manual_client() {
    let state = common::test_state().await;
    let (_, sales) = common::seed_user(&state, "walkin", UserRole::Sales, "pw-sales-123").await;

    let detail = state
        .services
        .maintenance
        .create(
            &sales,
            CreateMaintenanceInput {
                project_id: None,
                client_name: Some("Al Rajhi Villa".to_string()),
                title: "Gate motor grinding".to_string(),
                description: "Installed years ago by a third party".to_string(),
            },
        )
        .await
        .unwrap();

    assert!(detail.request.project_id.is_none());
    assert_eq!(detail.request.client_name.as_deref(), Some("Al Rajhi Villa"));
    // no project means no warranty to measure against
    assert!(!detail.request.under_warranty);
    assert_eq!(detail.history.len(), 1);
}

#[tokio::test]
async fn a_ticket_needs_a_project_or_a_client() {
    let state = common::test_state().await;
    let (_, sales) = common::seed_user(&state, "anon", UserRole::Sales, "pw-sales-123").await;

    let err = state
        .services
        .maintenance
        .create(
            &sales,
            CreateMaintenanceInput {
                project_id: None,
                client_name: Some("   ".to_string()),
                title: "Mystery fault".to_string(),
                description: "No client attached".to_string(),
            },
        )
        .await
        .expect_err("neither project nor client");
    assert!(matches!(err, ServiceError::ValidationError(_)));
}
