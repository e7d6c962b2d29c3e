mod common;

use rust_decimal_macros::dec;
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};

use beyondsmart_api::entities::notification::{self, NotificationKind};
use beyondsmart_api::entities::product_type::UnitOfMeasure;
use beyondsmart_api::entities::project::{self, ProjectStage};
use beyondsmart_api::entities::quotation::QuotationStatus;
use beyondsmart_api::entities::user::UserRole;
use beyondsmart_api::errors::ServiceError;
use beyondsmart_api::services::quotations::{CreateQuotationInput, QuotationItemInput};

fn item(
    product_type_id: uuid::Uuid,
    quantity: rust_decimal::Decimal,
    width: Option<rust_decimal::Decimal>,
    height: Option<rust_decimal::Decimal>,
) -> QuotationItemInput {
    QuotationItemInput {
        product_type_id,
        quantity,
        unit_price: dec!(100),
        width,
        height,
    }
}

fn quote_input(client_id: uuid::Uuid, items: Vec<QuotationItemInput>) -> CreateQuotationInput {
    CreateQuotationInput {
        client_id,
        project_name: "Villa automation".to_string(),
        items,
        discount: None,
        discount_mode: None,
        tax: None,
        tax_mode: None,
    }
}

#[tokio::test]
async fn accepting_deducts_stock_and_creates_the_project() {
    let state = common::test_state().await;
    let (_, sales) = common::seed_user(&state, "sales", UserRole::Sales, "pw-sales-123").await;
    common::seed_user(&state, "stock", UserRole::Warehouse, "pw-wh-12345").await;
    let customer = common::seed_client(&state, "acme").await;
    let glass = common::seed_product(&state, "Smart glass", UnitOfMeasure::Sqm, 2, dec!(20)).await;

    // 2 panels of 1.5 x 2.0 consume 6 sqm
    let created = state
        .services
        .quotations
        .create(
            &sales,
            quote_input(
                customer.id,
                vec![item(glass.id, dec!(2), Some(dec!(1.5)), Some(dec!(2)))],
            ),
        )
        .await
        .expect("create quotation");

    let outcome = state
        .services
        .quotations
        .accept(created.quotation.id, &sales, "contracts/villa.pdf")
        .await
        .expect("accept quotation");

    assert_eq!(common::stock_of(&state, glass.id).await, dec!(14));
    assert_eq!(outcome.quotation.status, QuotationStatus::ConvertedToProject);
    assert_eq!(outcome.quotation.previous_status, Some(QuotationStatus::Draft));
    assert_eq!(
        outcome.quotation.contract_file.as_deref(),
        Some("contracts/villa.pdf")
    );
    assert_eq!(outcome.project.stage, ProjectStage::Measurements);
    assert_eq!(outcome.project.progress, 20);
    assert_eq!(outcome.project.quotation_id, created.quotation.id);
    assert!(outcome.project.project_number.starts_with("PRJ-"));
}

#[tokio::test]
async fn accepting_fans_out_notifications() {
    let state = common::test_state().await;
    let (_, sales) = common::seed_user(&state, "rep", UserRole::Sales, "pw-sales-123").await;
    let (warehouse_user, _) =
        common::seed_user(&state, "keeper", UserRole::Warehouse, "pw-wh-12345").await;
    let customer = common::seed_client(&state, "fanout").await;
    // stock lands on 14 after acceptance, below the threshold of 15
    let glass = common::seed_product(&state, "Panels", UnitOfMeasure::Sqm, 2, dec!(20)).await;

    let created = state
        .services
        .quotations
        .create(
            &sales,
            quote_input(
                customer.id,
                vec![item(glass.id, dec!(2), Some(dec!(1.5)), Some(dec!(2)))],
            ),
        )
        .await
        .unwrap();
    state
        .services
        .quotations
        .accept(created.quotation.id, &sales, "contracts/fanout.pdf")
        .await
        .unwrap();

    let warehouse_inbox = state
        .services
        .notifications
        .list_for_user(warehouse_user.id, false)
        .await
        .unwrap();
    assert!(warehouse_inbox
        .iter()
        .any(|n| n.kind == NotificationKind::LowStock));
    assert!(warehouse_inbox
        .iter()
        .any(|n| n.kind == NotificationKind::ProjectCreated));

    let sales_inbox = state
        .services
        .notifications
        .list_for_user(sales.id, false)
        .await
        .unwrap();
    assert!(sales_inbox
        .iter()
        .any(|n| n.kind == NotificationKind::ProjectCreated));
    // the shortage alert goes to the warehouse side only
    assert!(!sales_inbox
        .iter()
        .any(|n| n.kind == NotificationKind::LowStock));
}

#[tokio::test]
async fn low_stock_alerts_only_below_the_threshold() {
    let state = common::test_state().await;
    let (_, sales) = common::seed_user(&state, "edge", UserRole::Sales, "pw-sales-123").await;
    let (warehouse_user, _) =
        common::seed_user(&state, "counter", UserRole::Warehouse, "pw-wh-12345").await;
    let customer = common::seed_client(&state, "edge").await;
    // acceptance leaves stock at exactly 15, which is not low yet
    let glass = common::seed_product(&state, "Edge panels", UnitOfMeasure::Sqm, 2, dec!(21)).await;

    let created = state
        .services
        .quotations
        .create(
            &sales,
            quote_input(
                customer.id,
                vec![item(glass.id, dec!(2), Some(dec!(1.5)), Some(dec!(2)))],
            ),
        )
        .await
        .unwrap();
    state
        .services
        .quotations
        .accept(created.quotation.id, &sales, "contracts/edge.pdf")
        .await
        .unwrap();
    assert_eq!(common::stock_of(&state, glass.id).await, dec!(15));

    let inbox = state
        .services
        .notifications
        .list_for_user(warehouse_user.id, false)
        .await
        .unwrap();
    assert!(!inbox.iter().any(|n| n.kind == NotificationKind::LowStock));

    // a recount at the threshold stays quiet; one unit lower raises the alert
    state
        .services
        .inventory
        .set_stock(glass.id, dec!(15))
        .await
        .unwrap();
    let inbox = state
        .services
        .notifications
        .list_for_user(warehouse_user.id, false)
        .await
        .unwrap();
    assert!(!inbox.iter().any(|n| n.kind == NotificationKind::LowStock));

    state
        .services
        .inventory
        .set_stock(glass.id, dec!(14))
        .await
        .unwrap();
    let inbox = state
        .services
        .notifications
        .list_for_user(warehouse_user.id, false)
        .await
        .unwrap();
    assert!(inbox.iter().any(|n| n.kind == NotificationKind::LowStock));
}

#[tokio::test]
async fn insufficient_stock_rolls_everything_back() {
    let state = common::test_state().await;
    let (_, sales) = common::seed_user(&state, "sales2", UserRole::Sales, "pw-sales-123").await;
    let customer = common::seed_client(&state, "short").await;
    let glass = common::seed_product(&state, "Thin stock", UnitOfMeasure::Sqm, 2, dec!(4)).await;

    let created = state
        .services
        .quotations
        .create(
            &sales,
            quote_input(
                customer.id,
                vec![item(glass.id, dec!(2), Some(dec!(1.5)), Some(dec!(2)))],
            ),
        )
        .await
        .unwrap();

    let err = state
        .services
        .quotations
        .accept(created.quotation.id, &sales, "contracts/short.pdf")
        .await
        .expect_err("must fail on shortage");
    assert!(matches!(err, ServiceError::InsufficientStock(_)));

    // nothing changed
    assert_eq!(common::stock_of(&state, glass.id).await, dec!(4));
    let reloaded = state.services.quotations.get(created.quotation.id).await.unwrap();
    assert_eq!(reloaded.quotation.status, QuotationStatus::Draft);
    assert!(reloaded.quotation.contract_file.is_none());
    let projects = project::Entity::find().count(state.db.as_ref()).await.unwrap();
    assert_eq!(projects, 0);

    // a failed acceptance can be retried once stock arrives
    state
        .services
        .inventory
        .set_stock(glass.id, dec!(50))
        .await
        .unwrap();
    state
        .services
        .quotations
        .accept(created.quotation.id, &sales, "contracts/short.pdf")
        .await
        .expect("accept after restock");
    assert_eq!(common::stock_of(&state, glass.id).await, dec!(44));
}

#[tokio::test]
async fn duplicate_product_lines_are_checked_as_one() {
    let state = common::test_state().await;
    let (_, sales) = common::seed_user(&state, "sales3", UserRole::Sales, "pw-sales-123").await;
    let customer = common::seed_client(&state, "dup").await;
    // each line alone fits, the combined 6 pcs does not
    let switches = common::seed_product(&state, "Switches", UnitOfMeasure::Pcs, 1, dec!(5)).await;

    let created = state
        .services
        .quotations
        .create(
            &sales,
            quote_input(
                customer.id,
                vec![
                    item(switches.id, dec!(3), None, None),
                    item(switches.id, dec!(3), None, None),
                ],
            ),
        )
        .await
        .unwrap();

    let err = state
        .services
        .quotations
        .accept(created.quotation.id, &sales, "contracts/dup.pdf")
        .await
        .expect_err("aggregated demand exceeds stock");
    assert!(matches!(err, ServiceError::InsufficientStock(_)));
    assert_eq!(common::stock_of(&state, switches.id).await, dec!(5));
}

#[tokio::test]
async fn acceptance_requires_a_contract() {
    let state = common::test_state().await;
    let (_, sales) = common::seed_user(&state, "sales4", UserRole::Sales, "pw-sales-123").await;
    let customer = common::seed_client(&state, "nocontract").await;
    let product = common::seed_product(&state, "Hubs", UnitOfMeasure::Pcs, 1, dec!(50)).await;

    let created = state
        .services
        .quotations
        .create(
            &sales,
            quote_input(customer.id, vec![item(product.id, dec!(1), None, None)]),
        )
        .await
        .unwrap();

    let err = state
        .services
        .quotations
        .accept(created.quotation.id, &sales, "   ")
        .await
        .expect_err("blank contract must be rejected");
    assert!(matches!(err, ServiceError::ValidationError(_)));
    assert_eq!(common::stock_of(&state, product.id).await, dec!(50));
}

#[tokio::test]
async fn accepting_twice_is_a_conflict() {
    let state = common::test_state().await;
    let (_, sales) = common::seed_user(&state, "sales5", UserRole::Sales, "pw-sales-123").await;
    let customer = common::seed_client(&state, "twice").await;
    let product = common::seed_product(&state, "Sensors", UnitOfMeasure::Pcs, 1, dec!(100)).await;

    let created = state
        .services
        .quotations
        .create(
            &sales,
            quote_input(customer.id, vec![item(product.id, dec!(4), None, None)]),
        )
        .await
        .unwrap();

    state
        .services
        .quotations
        .accept(created.quotation.id, &sales, "contracts/a.pdf")
        .await
        .unwrap();
    let err = state
        .services
        .quotations
        .accept(created.quotation.id, &sales, "contracts/b.pdf")
        .await
        .expect_err("second acceptance must fail");
    assert!(matches!(err, ServiceError::Conflict(_)));
    // the first deduction stands, no double deduction
    assert_eq!(common::stock_of(&state, product.id).await, dec!(96));
}

#[tokio::test]
async fn revert_restores_stock_status_and_removes_the_project() {
    let state = common::test_state().await;
    let (_, sales) = common::seed_user(&state, "sales6", UserRole::Sales, "pw-sales-123").await;
    let customer = common::seed_client(&state, "revert").await;
    let glass = common::seed_product(&state, "Facade glass", UnitOfMeasure::Sqm, 2, dec!(20)).await;

    let created = state
        .services
        .quotations
        .create(
            &sales,
            quote_input(
                customer.id,
                vec![item(glass.id, dec!(2), Some(dec!(1.5)), Some(dec!(2)))],
            ),
        )
        .await
        .unwrap();
    let quotation_id = created.quotation.id;

    // move the quotation forward before converting so the revert has a
    // non-default status to restore
    state
        .services
        .quotations
        .update_status(quotation_id, QuotationStatus::Sent)
        .await
        .unwrap();

    state
        .services
        .quotations
        .accept(quotation_id, &sales, "contracts/revert.pdf")
        .await
        .unwrap();
    assert_eq!(common::stock_of(&state, glass.id).await, dec!(14));

    let restored = state
        .services
        .quotations
        .revert(quotation_id)
        .await
        .expect("revert");

    assert_eq!(restored.status, QuotationStatus::Sent);
    assert!(restored.previous_status.is_none());
    assert!(restored.contract_file.is_none());
    assert_eq!(common::stock_of(&state, glass.id).await, dec!(20));
    let projects = project::Entity::find()
        .filter(project::Column::QuotationId.eq(quotation_id))
        .count(state.db.as_ref())
        .await
        .unwrap();
    assert_eq!(projects, 0);

    // reverting an unconverted quotation is invalid
    let err = state
        .services
        .quotations
        .revert(quotation_id)
        .await
        .expect_err("nothing to revert");
    assert!(matches!(err, ServiceError::InvalidOperation(_)));
}

#[tokio::test]
async fn pricing_is_persisted_on_creation() {
    let state = common::test_state().await;
    let (_, sales) = common::seed_user(&state, "sales7", UserRole::Sales, "pw-sales-123").await;
    let customer = common::seed_client(&state, "priced").await;
    let product = common::seed_product(&state, "Cabling", UnitOfMeasure::Pcs, 0, dec!(500)).await;

    let mut input = quote_input(
        customer.id,
        vec![QuotationItemInput {
            product_type_id: product.id,
            quantity: dec!(4),
            unit_price: dec!(25),
            width: None,
            height: None,
        }],
    );
    input.discount = Some(dec!(20));
    input.discount_mode = Some(beyondsmart_api::entities::quotation::AdjustmentMode::Fixed);
    input.tax = Some(dec!(10));
    input.tax_mode = Some(beyondsmart_api::entities::quotation::AdjustmentMode::Percentage);

    let created = state.services.quotations.create(&sales, input).await.unwrap();
    assert_eq!(created.quotation.subtotal, dec!(100));
    // (100 - 20) * 1.10
    assert_eq!(created.quotation.total, dec!(88));
    assert!(created.quotation.quotation_number.starts_with("QT-"));
    assert_eq!(created.items.len(), 1);

    // creation never touches stock and sends no notifications
    assert_eq!(common::stock_of(&state, product.id).await, dec!(500));
    let total_notifications = notification::Entity::find()
        .count(state.db.as_ref())
        .await
        .unwrap();
    assert_eq!(total_notifications, 0);
}
