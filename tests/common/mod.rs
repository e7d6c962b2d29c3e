#![allow(dead_code)]

use std::sync::Arc;

use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, Set};
use tokio::sync::mpsc;
use uuid::Uuid;

use beyondsmart_api::auth::{AuthConfig, AuthService, AuthUser};
use beyondsmart_api::config::AppConfig;
use beyondsmart_api::db;
use beyondsmart_api::entities::product_type::{ProductCategory, UnitOfMeasure};
use beyondsmart_api::entities::user::UserRole;
use beyondsmart_api::entities::{client, inventory_item, product_type, user};
use beyondsmart_api::events::{process_events, EventSender};
use beyondsmart_api::handlers::AppServices;
use beyondsmart_api::AppState;

pub const TEST_JWT_SECRET: &str = "test_secret_that_is_long_enough_for_validation_1234";

/// Fresh in-memory database with migrations applied and all services wired.
pub async fn test_state() -> AppState {
    let pool = db::establish_connection("sqlite::memory:")
        .await
        .expect("in-memory database");
    db::run_migrations(&pool).await.expect("migrations");
    let db_pool = Arc::new(pool);

    let (tx, rx) = mpsc::channel(256);
    tokio::spawn(process_events(rx));
    let event_sender = EventSender::new(tx);

    let config = AppConfig::new("sqlite::memory:", TEST_JWT_SECRET, "127.0.0.1", 0, "test");
    let auth_service = Arc::new(AuthService::new(
        AuthConfig::new(TEST_JWT_SECRET, 3600),
        db_pool.clone(),
    ));
    let services = AppServices::new(db_pool.clone(), event_sender.clone(), auth_service);

    AppState {
        db: db_pool,
        config: Arc::new(config),
        event_sender,
        services,
    }
}

/// Inserts a user with the given role and returns both the row and the
/// identity the way middleware would present it.
pub async fn seed_user(
    state: &AppState,
    name: &str,
    role: UserRole,
    password: &str,
) -> (user::Model, AuthUser) {
    let email = format!("{}@example.com", name);
    let model = user::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(name.to_string()),
        email: Set(email.clone()),
        password_hash: Set(AuthService::hash_password(password).expect("hash")),
        role: Set(role),
        created_at: Set(Utc::now()),
    }
    .insert(state.db.as_ref())
    .await
    .expect("seed user");

    let auth_user = AuthUser {
        id: model.id,
        name: model.name.clone(),
        email,
        role,
    };
    (model, auth_user)
}

pub async fn seed_client(state: &AppState, name: &str) -> client::Model {
    client::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(name.to_string()),
        phone: Set("0550000000".to_string()),
        email: Set(format!("{}@clients.example.com", name)),
        city: Set("Riyadh".to_string()),
        created_at: Set(Utc::now()),
    }
    .insert(state.db.as_ref())
    .await
    .expect("seed client")
}

/// Inserts a product type together with its stock row.
pub async fn seed_product(
    state: &AppState,
    name: &str,
    unit: UnitOfMeasure,
    warranty_years: i32,
    stock: Decimal,
) -> product_type::Model {
    let product = product_type::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(name.to_string()),
        category: Set(ProductCategory::Material),
        unit: Set(unit),
        warranty_years: Set(warranty_years),
        created_at: Set(Utc::now()),
    }
    .insert(state.db.as_ref())
    .await
    .expect("seed product");

    inventory_item::ActiveModel {
        id: Set(Uuid::new_v4()),
        product_type_id: Set(product.id),
        stock: Set(stock),
        updated_at: Set(Utc::now()),
    }
    .insert(state.db.as_ref())
    .await
    .expect("seed stock");

    product
}

pub async fn stock_of(state: &AppState, product_type_id: Uuid) -> Decimal {
    use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};
    inventory_item::Entity::find()
        .filter(inventory_item::Column::ProductTypeId.eq(product_type_id))
        .one(state.db.as_ref())
        .await
        .expect("query stock")
        .map(|row| row.stock)
        .unwrap_or(Decimal::ZERO)
}
