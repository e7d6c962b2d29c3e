use std::sync::Arc;

use chrono::Utc;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};
use serde::Deserialize;
use tracing::{instrument, warn};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::db::DbPool;
use crate::entities::inventory_item;
use crate::entities::notification::NotificationKind;
use crate::entities::product_type::{self, ProductCategory, UnitOfMeasure};
use crate::entities::user::UserRole;
use crate::errors::ServiceError;
use crate::events::{Event, EventSender};
use crate::services::notifications::NotificationService;

/// Stock strictly below this level triggers a low-stock alert.
pub const LOW_STOCK_THRESHOLD: Decimal = dec!(15);

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateProductTypeInput {
    #[validate(length(min = 1, max = 120))]
    pub name: String,
    pub category: ProductCategory,
    pub unit: UnitOfMeasure,
    #[validate(range(min = 0, max = 50))]
    pub warranty_years: i32,
    pub initial_stock: Option<Decimal>,
}

/// Warehouse catalog and stock levels. Stock arithmetic for quotation
/// acceptance lives in the quotation workflow; this service covers manual
/// warehouse operations.
#[derive(Clone)]
pub struct InventoryService {
    db_pool: Arc<DbPool>,
    event_sender: EventSender,
    notifications: NotificationService,
}

impl InventoryService {
    pub fn new(
        db_pool: Arc<DbPool>,
        event_sender: EventSender,
        notifications: NotificationService,
    ) -> Self {
        Self {
            db_pool,
            event_sender,
            notifications,
        }
    }

    #[instrument(skip(self, input))]
    pub async fn create_product_type(
        &self,
        input: CreateProductTypeInput,
    ) -> Result<(product_type::Model, inventory_item::Model), ServiceError> {
        input.validate()?;

        if let Some(stock) = input.initial_stock {
            if stock < Decimal::ZERO {
                return Err(ServiceError::ValidationError(
                    "Initial stock cannot be negative".to_string(),
                ));
            }
        }

        let now = Utc::now();
        let product = product_type::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(input.name),
            category: Set(input.category),
            unit: Set(input.unit),
            warranty_years: Set(input.warranty_years),
            created_at: Set(now),
        }
        .insert(self.db_pool.as_ref())
        .await?;

        let item = inventory_item::ActiveModel {
            id: Set(Uuid::new_v4()),
            product_type_id: Set(product.id),
            stock: Set(input.initial_stock.unwrap_or(Decimal::ZERO)),
            updated_at: Set(now),
        }
        .insert(self.db_pool.as_ref())
        .await?;

        Ok((product, item))
    }

    pub async fn list_product_types(&self) -> Result<Vec<product_type::Model>, ServiceError> {
        Ok(product_type::Entity::find()
            .order_by_asc(product_type::Column::Name)
            .all(self.db_pool.as_ref())
            .await?)
    }

    pub async fn get_product_type(&self, id: Uuid) -> Result<product_type::Model, ServiceError> {
        product_type::Entity::find_by_id(id)
            .one(self.db_pool.as_ref())
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Product type {} not found", id)))
    }

    /// Stock levels joined with their product descriptions.
    pub async fn list_inventory(
        &self,
    ) -> Result<Vec<(inventory_item::Model, Option<product_type::Model>)>, ServiceError> {
        Ok(inventory_item::Entity::find()
            .find_also_related(product_type::Entity)
            .all(self.db_pool.as_ref())
            .await?)
    }

    pub async fn low_stock(
        &self,
    ) -> Result<Vec<(inventory_item::Model, Option<product_type::Model>)>, ServiceError> {
        Ok(inventory_item::Entity::find()
            .filter(inventory_item::Column::Stock.lt(LOW_STOCK_THRESHOLD))
            .find_also_related(product_type::Entity)
            .all(self.db_pool.as_ref())
            .await?)
    }

    /// Overwrites the stock level after a physical count. Emits an
    /// adjustment event and alerts warehouse staff when the new level falls
    /// below the threshold.
    #[instrument(skip(self))]
    pub async fn set_stock(
        &self,
        product_type_id: Uuid,
        stock: Decimal,
    ) -> Result<inventory_item::Model, ServiceError> {
        if stock < Decimal::ZERO {
            return Err(ServiceError::ValidationError(
                "Stock cannot be negative".to_string(),
            ));
        }

        let product = self.get_product_type(product_type_id).await?;
        let existing = inventory_item::Entity::find()
            .filter(inventory_item::Column::ProductTypeId.eq(product_type_id))
            .one(self.db_pool.as_ref())
            .await?;

        let old_stock = existing.as_ref().map_or(Decimal::ZERO, |i| i.stock);
        let updated = match existing {
            Some(item) => {
                let mut active: inventory_item::ActiveModel = item.into();
                active.stock = Set(stock);
                active.updated_at = Set(Utc::now());
                active.update(self.db_pool.as_ref()).await?
            }
            None => {
                inventory_item::ActiveModel {
                    id: Set(Uuid::new_v4()),
                    product_type_id: Set(product_type_id),
                    stock: Set(stock),
                    updated_at: Set(Utc::now()),
                }
                .insert(self.db_pool.as_ref())
                .await?
            }
        };

        if let Err(e) = self
            .event_sender
            .send(Event::InventoryAdjusted {
                product_type_id,
                old_stock,
                new_stock: stock,
            })
            .await
        {
            warn!(error = %e, "failed to publish inventory adjustment event");
        }

        if stock < LOW_STOCK_THRESHOLD {
            let _ = self
                .event_sender
                .send(Event::LowStock {
                    product_type_id,
                    stock,
                })
                .await;
            self.notifications
                .notify_roles(
                    &[UserRole::Admin, UserRole::Warehouse],
                    NotificationKind::LowStock,
                    "Low stock",
                    &format!("{} is down to {}", product.name, stock),
                    Some(product_type_id),
                )
                .await?;
        }

        Ok(updated)
    }
}
