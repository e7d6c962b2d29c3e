mod common;

use chrono::NaiveDate;
use rust_decimal_macros::dec;

use beyondsmart_api::auth::LoginCredentials;
use beyondsmart_api::entities::product_type::UnitOfMeasure;
use beyondsmart_api::entities::user::UserRole;
use beyondsmart_api::errors::ServiceError;
use beyondsmart_api::services::quotations::{CreateQuotationInput, QuotationItemInput};
use beyondsmart_api::services::users::UpdateUserInput;
use beyondsmart_api::services::visits::CreateVisitInput;

fn no_changes() -> UpdateUserInput {
    UpdateUserInput {
        name: None,
        email: None,
        password: None,
        role: None,
    }
}

#[tokio::test]
async fn account_updates_cover_email_and_password() {
    let state = common::test_state().await;
    let (account, _) = common::seed_user(&state, "renate", UserRole::Sales, "pw-sales-123").await;

    let updated = state
        .services
        .users
        .update(
            account.id,
            UpdateUserInput {
                name: Some("Renate K".to_string()),
                email: Some("renate.k@example.com".to_string()),
                password: Some("pw-fresh-9876".to_string()),
                ..no_changes()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.name, "Renate K");
    assert_eq!(updated.email, "renate.k@example.com");

    // the new credentials work end to end
    state
        .services
        .auth
        .login(&LoginCredentials {
            email: "renate.k@example.com".to_string(),
            password: "pw-fresh-9876".to_string(),
        })
        .await
        .expect("login with updated credentials");
}

#[tokio::test]
async fn account_email_stays_unique_on_update() {
    let state = common::test_state().await;
    common::seed_user(&state, "first", UserRole::Sales, "pw-sales-123").await;
    let (second, _) = common::seed_user(&state, "second", UserRole::Sales, "pw-sales-123").await;

    let err = state
        .services
        .users
        .update(
            second.id,
            UpdateUserInput {
                email: Some("first@example.com".to_string()),
                ..no_changes()
            },
        )
        .await
        .expect_err("email is taken");
    assert!(matches!(err, ServiceError::Conflict(_)));
}

#[tokio::test]
async fn deleting_an_account_removes_it() {
    let state = common::test_state().await;
    let (account, _) = common::seed_user(&state, "leaver", UserRole::Hr, "pw-hr-12345").await;

    state.services.users.delete(account.id).await.unwrap();

    let err = state
        .services
        .users
        .get(account.id)
        .await
        .expect_err("gone");
    assert!(matches!(err, ServiceError::NotFound(_)));
}

#[tokio::test]
async fn accounts_owning_quotations_cannot_be_deleted() {
    let state = common::test_state().await;
    let (account, sales) = common::seed_user(&state, "author", UserRole::Sales, "pw-sales-123").await;
    let customer = common::seed_client(&state, "held").await;
    let product = common::seed_product(&state, "Dimmer", UnitOfMeasure::Pcs, 1, dec!(40)).await;

    state
        .services
        .quotations
        .create(
            &sales,
            CreateQuotationInput {
                client_id: customer.id,
                project_name: "Held".to_string(),
                items: vec![QuotationItemInput {
                    product_type_id: product.id,
                    quantity: dec!(1),
                    unit_price: dec!(60),
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

    let err = state
        .services
        .users
        .delete(account.id)
        .await
        .expect_err("quotation history pins the account");
    assert!(matches!(err, ServiceError::Conflict(_)));
}

#[tokio::test]
async fn clients_with_quotations_cannot_be_deleted() {
    let state = common::test_state().await;
    let (_, sales) = common::seed_user(&state, "seller", UserRole::Sales, "pw-sales-123").await;
    let quoted = common::seed_client(&state, "quoted").await;
    let fresh = common::seed_client(&state, "fresh").await;
    let product = common::seed_product(&state, "Relay", UnitOfMeasure::Pcs, 1, dec!(40)).await;

    state
        .services
        .quotations
        .create(
            &sales,
            CreateQuotationInput {
                client_id: quoted.id,
                project_name: "Pinned".to_string(),
                items: vec![QuotationItemInput {
                    product_type_id: product.id,
                    quantity: dec!(2),
                    unit_price: dec!(30),
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

    let err = state
        .services
        .clients
        .delete(quoted.id)
        .await
        .expect_err("quotations pin the client");
    assert!(matches!(err, ServiceError::Conflict(_)));

    // a client with no history goes away cleanly
    state.services.clients.delete(fresh.id).await.unwrap();
    let err = state
        .services
        .clients
        .get(fresh.id)
        .await
        .expect_err("gone");
    assert!(matches!(err, ServiceError::NotFound(_)));
}

#[tokio::test]
async fn deleting_a_visit_clears_it_from_the_log() {
    let state = common::test_state().await;
    let (rep, _) = common::seed_user(&state, "rover", UserRole::Sales, "pw-sales-123").await;
    let customer = common::seed_client(&state, "visited").await;

    let visit = state
        .services
        .visits
        .create(
            rep.id,
            CreateVisitInput {
                client_id: customer.id,
                visit_date: NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(),
                purpose: "Showroom follow-up".to_string(),
            },
        )
        .await
        .unwrap();

    state.services.visits.delete(visit.id).await.unwrap();

    let remaining = state
        .services
        .visits
        .list(Some(rep.id), None)
        .await
        .unwrap();
    assert!(remaining.is_empty());

    let err = state
        .services
        .visits
        .delete(visit.id)
        .await
        .expect_err("already gone");
    assert!(matches!(err, ServiceError::NotFound(_)));
}
