use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, ModelTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Set, TransactionTrait,
};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::auth::AuthUser;
use crate::db::DbPool;
use crate::entities::inventory_item;
use crate::entities::notification::NotificationKind;
use crate::entities::product_type;
use crate::entities::project::{self, ProjectStage};
use crate::entities::project_attachment::{self, AttachmentKind};
use crate::entities::quotation::{self, AdjustmentMode, QuotationStatus};
use crate::entities::quotation_item;
use crate::entities::user::UserRole;
use crate::errors::ServiceError;
use crate::events::{Event, EventSender};
use crate::services::inventory::LOW_STOCK_THRESHOLD;
use crate::services::notifications::NotificationService;
use crate::services::pricing::{self, Adjustment, LineInput};

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct QuotationItemInput {
    pub product_type_id: Uuid,
    pub quantity: Decimal,
    pub unit_price: Decimal,
    pub width: Option<Decimal>,
    pub height: Option<Decimal>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateQuotationInput {
    pub client_id: Uuid,
    #[validate(length(min = 1, max = 200))]
    pub project_name: String,
    #[validate(length(min = 1))]
    pub items: Vec<QuotationItemInput>,
    pub discount: Option<Decimal>,
    pub discount_mode: Option<AdjustmentMode>,
    pub tax: Option<Decimal>,
    pub tax_mode: Option<AdjustmentMode>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateQuotationInput {
    #[validate(length(min = 1, max = 200))]
    pub project_name: Option<String>,
    pub items: Option<Vec<QuotationItemInput>>,
    pub discount: Option<Decimal>,
    pub discount_mode: Option<AdjustmentMode>,
    pub tax: Option<Decimal>,
    pub tax_mode: Option<AdjustmentMode>,
}

#[derive(Debug, Clone, serde::Serialize, ToSchema)]
pub struct QuotationDetail {
    pub quotation: quotation::Model,
    pub items: Vec<quotation_item::Model>,
}

/// Outcome of accepting a quotation: the converted quotation and the
/// project it spawned.
#[derive(Debug, Clone, serde::Serialize, ToSchema)]
pub struct AcceptOutcome {
    pub quotation: quotation::Model,
    pub project: project::Model,
}

struct StockPlan {
    /// Required quantity per product, aggregated across lines.
    required: BTreeMap<Uuid, Decimal>,
    products: BTreeMap<Uuid, product_type::Model>,
}

/// Quotation lifecycle, including the check-then-commit conversion into a
/// project and its admin-only reversal.
#[derive(Clone)]
pub struct QuotationService {
    db_pool: Arc<DbPool>,
    event_sender: EventSender,
    notifications: NotificationService,
}

impl QuotationService {
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

    fn adjustments(
        discount: Option<Decimal>,
        discount_mode: Option<AdjustmentMode>,
        tax: Option<Decimal>,
        tax_mode: Option<AdjustmentMode>,
    ) -> Result<(Adjustment, Adjustment), ServiceError> {
        let discount = Adjustment {
            amount: discount.unwrap_or(Decimal::ZERO),
            mode: discount_mode.unwrap_or(AdjustmentMode::Fixed),
        };
        let tax = Adjustment {
            amount: tax.unwrap_or(Decimal::ZERO),
            mode: tax_mode.unwrap_or(AdjustmentMode::Fixed),
        };
        if discount.amount < Decimal::ZERO || tax.amount < Decimal::ZERO {
            return Err(ServiceError::ValidationError(
                "Discount and tax cannot be negative".to_string(),
            ));
        }
        Ok((discount, tax))
    }

    fn validate_items(items: &[QuotationItemInput]) -> Result<(), ServiceError> {
        for item in items {
            if item.quantity <= Decimal::ZERO {
                return Err(ServiceError::ValidationError(
                    "Item quantity must be positive".to_string(),
                ));
            }
            if item.unit_price < Decimal::ZERO {
                return Err(ServiceError::ValidationError(
                    "Item unit price cannot be negative".to_string(),
                ));
            }
        }
        Ok(())
    }

    #[instrument(skip(self, input))]
    pub async fn create(
        &self,
        owner: &AuthUser,
        input: CreateQuotationInput,
    ) -> Result<QuotationDetail, ServiceError> {
        input.validate()?;
        Self::validate_items(&input.items)?;
        let (discount, tax) = Self::adjustments(
            input.discount,
            input.discount_mode,
            input.tax,
            input.tax_mode,
        )?;

        let lines: Vec<LineInput> = input
            .items
            .iter()
            .map(|item| LineInput {
                quantity: item.quantity,
                unit_price: item.unit_price,
            })
            .collect();
        let breakdown = pricing::price_quotation(&lines, discount, tax);

        let txn = self.db_pool.begin().await?;

        let existing = quotation::Entity::find().count(&txn).await?;
        let now = Utc::now();
        let quotation_id = Uuid::new_v4();

        let created = quotation::ActiveModel {
            id: Set(quotation_id),
            quotation_number: Set(format!("QT-{:05}", existing + 1)),
            client_id: Set(input.client_id),
            owner_id: Set(owner.id),
            project_name: Set(input.project_name),
            status: Set(QuotationStatus::Draft),
            previous_status: Set(None),
            discount: Set(discount.amount),
            discount_mode: Set(discount.mode),
            tax: Set(tax.amount),
            tax_mode: Set(tax.mode),
            subtotal: Set(breakdown.subtotal),
            total: Set(breakdown.grand_total),
            contract_file: Set(None),
            created_at: Set(now),
            version: Set(1),
        }
        .insert(&txn)
        .await?;

        let rows: Vec<quotation_item::ActiveModel> = input
            .items
            .iter()
            .enumerate()
            .map(|(position, item)| quotation_item::ActiveModel {
                id: Set(Uuid::new_v4()),
                quotation_id: Set(quotation_id),
                product_type_id: Set(item.product_type_id),
                quantity: Set(item.quantity),
                unit_price: Set(item.unit_price),
                width: Set(item.width),
                height: Set(item.height),
                position: Set(position as i32),
            })
            .collect();
        quotation_item::Entity::insert_many(rows).exec(&txn).await?;

        txn.commit().await?;

        if let Err(e) = self
            .event_sender
            .send(Event::QuotationCreated(quotation_id))
            .await
        {
            warn!(error = %e, "failed to publish quotation created event");
        }

        let items = self.items_of(quotation_id).await?;
        Ok(QuotationDetail {
            quotation: created,
            items,
        })
    }

    async fn items_of(&self, quotation_id: Uuid) -> Result<Vec<quotation_item::Model>, ServiceError> {
        Ok(quotation_item::Entity::find()
            .filter(quotation_item::Column::QuotationId.eq(quotation_id))
            .order_by_asc(quotation_item::Column::Position)
            .all(self.db_pool.as_ref())
            .await?)
    }

    pub async fn get(&self, id: Uuid) -> Result<QuotationDetail, ServiceError> {
        let found = quotation::Entity::find_by_id(id)
            .one(self.db_pool.as_ref())
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Quotation {} not found", id)))?;
        let items = self.items_of(id).await?;
        Ok(QuotationDetail {
            quotation: found,
            items,
        })
    }

    pub async fn list(
        &self,
        status: Option<QuotationStatus>,
        client_id: Option<Uuid>,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<quotation::Model>, u64), ServiceError> {
        let mut query = quotation::Entity::find().order_by_desc(quotation::Column::CreatedAt);
        if let Some(status) = status {
            query = query.filter(quotation::Column::Status.eq(status));
        }
        if let Some(client_id) = client_id {
            query = query.filter(quotation::Column::ClientId.eq(client_id));
        }

        let total = query.clone().count(self.db_pool.as_ref()).await?;
        let page = page.max(1);
        let rows = query
            .offset((page - 1) * per_page)
            .limit(per_page)
            .all(self.db_pool.as_ref())
            .await?;
        Ok((rows, total))
    }

    /// Edits a quotation that has not yet reached a terminal state. Item
    /// replacement reprices the whole quotation.
    #[instrument(skip(self, input))]
    pub async fn update(
        &self,
        id: Uuid,
        input: UpdateQuotationInput,
    ) -> Result<QuotationDetail, ServiceError> {
        input.validate()?;
        if let Some(items) = &input.items {
            if items.is_empty() {
                return Err(ServiceError::ValidationError(
                    "A quotation needs at least one item".to_string(),
                ));
            }
            Self::validate_items(items)?;
        }

        let txn = self.db_pool.begin().await?;

        let found = quotation::Entity::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Quotation {} not found", id)))?;

        if matches!(
            found.status,
            QuotationStatus::ConvertedToProject | QuotationStatus::Rejected
        ) {
            return Err(ServiceError::InvalidOperation(format!(
                "Quotation in status {} cannot be edited",
                found.status
            )));
        }

        let (discount, tax) = Self::adjustments(
            input.discount.or(Some(found.discount)),
            input.discount_mode.or(Some(found.discount_mode)),
            input.tax.or(Some(found.tax)),
            input.tax_mode.or(Some(found.tax_mode)),
        )?;

        let lines: Vec<LineInput> = match &input.items {
            Some(items) => items
                .iter()
                .map(|item| LineInput {
                    quantity: item.quantity,
                    unit_price: item.unit_price,
                })
                .collect(),
            None => quotation_item::Entity::find()
                .filter(quotation_item::Column::QuotationId.eq(id))
                .all(&txn)
                .await?
                .iter()
                .map(|item| LineInput {
                    quantity: item.quantity,
                    unit_price: item.unit_price,
                })
                .collect(),
        };
        let breakdown = pricing::price_quotation(&lines, discount, tax);

        if let Some(items) = &input.items {
            quotation_item::Entity::delete_many()
                .filter(quotation_item::Column::QuotationId.eq(id))
                .exec(&txn)
                .await?;
            let rows: Vec<quotation_item::ActiveModel> = items
                .iter()
                .enumerate()
                .map(|(position, item)| quotation_item::ActiveModel {
                    id: Set(Uuid::new_v4()),
                    quotation_id: Set(id),
                    product_type_id: Set(item.product_type_id),
                    quantity: Set(item.quantity),
                    unit_price: Set(item.unit_price),
                    width: Set(item.width),
                    height: Set(item.height),
                    position: Set(position as i32),
                })
                .collect();
            quotation_item::Entity::insert_many(rows).exec(&txn).await?;
        }

        let version = found.version;
        let mut active: quotation::ActiveModel = found.into();
        if let Some(project_name) = input.project_name {
            active.project_name = Set(project_name);
        }
        active.discount = Set(discount.amount);
        active.discount_mode = Set(discount.mode);
        active.tax = Set(tax.amount);
        active.tax_mode = Set(tax.mode);
        active.subtotal = Set(breakdown.subtotal);
        active.total = Set(breakdown.grand_total);
        active.version = Set(version + 1);
        let updated = active.update(&txn).await?;

        txn.commit().await?;

        let items = self.items_of(id).await?;
        Ok(QuotationDetail {
            quotation: updated,
            items,
        })
    }

    fn can_transition(from: QuotationStatus, to: QuotationStatus) -> bool {
        if from == to {
            return false;
        }
        match to {
            // conversion happens only through acceptance
            QuotationStatus::ConvertedToProject => false,
            // any live quotation can be rejected
            QuotationStatus::Rejected => from.flow_rank().is_some(),
            _ => match (from.flow_rank(), to.flow_rank()) {
                (Some(a), Some(b)) => b > a,
                _ => false,
            },
        }
    }

    /// Moves a quotation along the sales flow. Backward moves, re-entry of
    /// terminal states and direct conversion are rejected.
    #[instrument(skip(self))]
    pub async fn update_status(
        &self,
        id: Uuid,
        new_status: QuotationStatus,
    ) -> Result<quotation::Model, ServiceError> {
        let found = quotation::Entity::find_by_id(id)
            .one(self.db_pool.as_ref())
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Quotation {} not found", id)))?;

        let old_status = found.status;
        if !Self::can_transition(old_status, new_status) {
            return Err(ServiceError::InvalidOperation(format!(
                "Cannot move quotation from {} to {}",
                old_status, new_status
            )));
        }

        let version = found.version;
        let mut active: quotation::ActiveModel = found.into();
        active.status = Set(new_status);
        active.version = Set(version + 1);
        let updated = active.update(self.db_pool.as_ref()).await?;

        if let Err(e) = self
            .event_sender
            .send(Event::QuotationStatusChanged {
                quotation_id: id,
                old_status,
                new_status,
            })
            .await
        {
            warn!(error = %e, "failed to publish status change event");
        }

        Ok(updated)
    }

    async fn stock_plan(
        txn: &sea_orm::DatabaseTransaction,
        items: &[quotation_item::Model],
    ) -> Result<StockPlan, ServiceError> {
        let product_ids: Vec<Uuid> = items.iter().map(|i| i.product_type_id).collect();
        let products: BTreeMap<Uuid, product_type::Model> = product_type::Entity::find()
            .filter(product_type::Column::Id.is_in(product_ids))
            .all(txn)
            .await?
            .into_iter()
            .map(|p| (p.id, p))
            .collect();

        // Aggregate per product so a quotation listing the same product
        // twice checks and deducts the combined quantity once.
        let mut required: BTreeMap<Uuid, Decimal> = BTreeMap::new();
        for item in items {
            let product = products.get(&item.product_type_id).ok_or_else(|| {
                ServiceError::ValidationError(format!(
                    "Unknown product type {}",
                    item.product_type_id
                ))
            })?;
            let needed =
                pricing::required_quantity(product.unit, item.quantity, item.width, item.height);
            *required.entry(item.product_type_id).or_insert(Decimal::ZERO) += needed;
        }

        Ok(StockPlan { required, products })
    }

    /// Accepts a quotation: verifies stock for every line, deducts it,
    /// creates the project with its contract attachment and marks the
    /// quotation converted. All of it commits atomically; any shortage
    /// rolls the whole operation back.
    #[instrument(skip(self, contract_file))]
    pub async fn accept(
        &self,
        id: Uuid,
        actor: &AuthUser,
        contract_file: &str,
    ) -> Result<AcceptOutcome, ServiceError> {
        if contract_file.trim().is_empty() {
            return Err(ServiceError::ValidationError(
                "A signed contract is required to accept a quotation".to_string(),
            ));
        }

        let txn = self.db_pool.begin().await?;

        let found = quotation::Entity::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Quotation {} not found", id)))?;

        match found.status {
            QuotationStatus::ConvertedToProject => {
                return Err(ServiceError::Conflict(format!(
                    "Quotation {} is already converted",
                    found.quotation_number
                )));
            }
            QuotationStatus::Rejected => {
                return Err(ServiceError::InvalidOperation(
                    "A rejected quotation cannot be accepted".to_string(),
                ));
            }
            _ => {}
        }

        let items = quotation_item::Entity::find()
            .filter(quotation_item::Column::QuotationId.eq(id))
            .order_by_asc(quotation_item::Column::Position)
            .all(&txn)
            .await?;
        if items.is_empty() {
            return Err(ServiceError::InvalidOperation(
                "A quotation without items cannot be accepted".to_string(),
            ));
        }

        let plan = Self::stock_plan(&txn, &items).await?;

        let stock_rows: BTreeMap<Uuid, inventory_item::Model> = inventory_item::Entity::find()
            .filter(
                inventory_item::Column::ProductTypeId
                    .is_in(plan.required.keys().copied().collect::<Vec<_>>()),
            )
            .lock_exclusive()
            .all(&txn)
            .await?
            .into_iter()
            .map(|row| (row.product_type_id, row))
            .collect();

        // Check everything before touching anything.
        let mut shortages = Vec::new();
        for (product_id, needed) in &plan.required {
            let available = stock_rows
                .get(product_id)
                .map_or(Decimal::ZERO, |row| row.stock);
            if available < *needed {
                let name = plan
                    .products
                    .get(product_id)
                    .map_or_else(|| product_id.to_string(), |p| p.name.clone());
                shortages.push(format!("{} (need {}, have {})", name, needed, available));
            }
        }
        if !shortages.is_empty() {
            return Err(ServiceError::InsufficientStock(shortages.join(", ")));
        }

        let now = Utc::now();
        let mut remaining: Vec<(Uuid, Decimal)> = Vec::new();
        for (product_id, needed) in &plan.required {
            let row = stock_rows
                .get(product_id)
                .cloned()
                .ok_or_else(|| ServiceError::InternalError("stock row vanished".to_string()))?;
            let new_stock = row.stock - *needed;
            remaining.push((*product_id, new_stock));
            let mut active: inventory_item::ActiveModel = row.into();
            active.stock = Set(new_stock);
            active.updated_at = Set(now);
            active.update(&txn).await?;
        }

        let project_count = project::Entity::find().count(&txn).await?;
        let created_project = project::ActiveModel {
            id: Set(Uuid::new_v4()),
            project_number: Set(format!("PRJ-{:05}", project_count + 1)),
            quotation_id: Set(found.id),
            client_id: Set(found.client_id),
            name: Set(found.project_name.clone()),
            stage: Set(ProjectStage::Measurements),
            progress: Set(ProjectStage::Measurements.progress_percent().unwrap_or(0)),
            assigned_team: Set(None),
            postpone_reason: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
            version: Set(1),
        }
        .insert(&txn)
        .await?;

        project_attachment::ActiveModel {
            id: Set(Uuid::new_v4()),
            project_id: Set(created_project.id),
            kind: Set(AttachmentKind::Contract),
            file_ref: Set(contract_file.to_string()),
            uploaded_by: Set(actor.id),
            created_at: Set(now),
        }
        .insert(&txn)
        .await?;

        let old_status = found.status;
        let version = found.version;
        let mut active: quotation::ActiveModel = found.into();
        active.status = Set(QuotationStatus::ConvertedToProject);
        active.previous_status = Set(Some(old_status));
        active.contract_file = Set(Some(contract_file.to_string()));
        active.version = Set(version + 1);
        let converted = active.update(&txn).await?;

        txn.commit().await?;

        info!(
            quotation = %converted.quotation_number,
            project = %created_project.project_number,
            "quotation accepted"
        );

        self.after_accept(&converted, &created_project, &plan, &remaining)
            .await;

        Ok(AcceptOutcome {
            quotation: converted,
            project: created_project,
        })
    }

    /// Post-commit side effects. Failures here are logged, never surfaced;
    /// the conversion already committed.
    async fn after_accept(
        &self,
        converted: &quotation::Model,
        created_project: &project::Model,
        plan: &StockPlan,
        remaining: &[(Uuid, Decimal)],
    ) {
        if let Err(e) = self
            .event_sender
            .send(Event::QuotationConverted {
                quotation_id: converted.id,
                project_id: created_project.id,
            })
            .await
        {
            warn!(error = %e, "failed to publish conversion event");
        }

        for (product_id, stock) in remaining {
            if *stock < LOW_STOCK_THRESHOLD {
                let _ = self
                    .event_sender
                    .send(Event::LowStock {
                        product_type_id: *product_id,
                        stock: *stock,
                    })
                    .await;
                let name = plan
                    .products
                    .get(product_id)
                    .map_or_else(|| product_id.to_string(), |p| p.name.clone());
                if let Err(e) = self
                    .notifications
                    .notify_roles(
                        &[UserRole::Admin, UserRole::Warehouse],
                        NotificationKind::LowStock,
                        "Low stock",
                        &format!("{} is down to {}", name, stock),
                        Some(*product_id),
                    )
                    .await
                {
                    warn!(error = %e, "failed to fan out low-stock notification");
                }
            }
        }

        if let Err(e) = self
            .notifications
            .notify_roles(
                &[UserRole::Admin, UserRole::Sales, UserRole::Warehouse],
                NotificationKind::ProjectCreated,
                "New project",
                &format!(
                    "Quotation {} became project {}",
                    converted.quotation_number, created_project.project_number
                ),
                Some(created_project.id),
            )
            .await
        {
            warn!(error = %e, "failed to fan out project notification");
        }
    }

    /// Undoes a conversion: removes the project and its attachments,
    /// returns the deducted stock and restores the pre-conversion status.
    /// Route gating restricts this to administrators.
    #[instrument(skip(self))]
    pub async fn revert(&self, id: Uuid) -> Result<quotation::Model, ServiceError> {
        let txn = self.db_pool.begin().await?;

        let found = quotation::Entity::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Quotation {} not found", id)))?;

        if found.status != QuotationStatus::ConvertedToProject {
            return Err(ServiceError::InvalidOperation(
                "Only a converted quotation can be reverted".to_string(),
            ));
        }

        let existing_project = project::Entity::find()
            .filter(project::Column::QuotationId.eq(id))
            .one(&txn)
            .await?;
        let project_id = existing_project.as_ref().map(|p| p.id);

        if let Some(p) = existing_project {
            project_attachment::Entity::delete_many()
                .filter(project_attachment::Column::ProjectId.eq(p.id))
                .exec(&txn)
                .await?;
            p.delete(&txn).await?;
        }

        let items = quotation_item::Entity::find()
            .filter(quotation_item::Column::QuotationId.eq(id))
            .all(&txn)
            .await?;
        let plan = Self::stock_plan(&txn, &items).await?;

        let now = Utc::now();
        for (product_id, quantity) in &plan.required {
            let row = inventory_item::Entity::find()
                .filter(inventory_item::Column::ProductTypeId.eq(*product_id))
                .lock_exclusive()
                .one(&txn)
                .await?;
            match row {
                Some(row) => {
                    let new_stock = row.stock + *quantity;
                    let mut active: inventory_item::ActiveModel = row.into();
                    active.stock = Set(new_stock);
                    active.updated_at = Set(now);
                    active.update(&txn).await?;
                }
                None => {
                    inventory_item::ActiveModel {
                        id: Set(Uuid::new_v4()),
                        product_type_id: Set(*product_id),
                        stock: Set(*quantity),
                        updated_at: Set(now),
                    }
                    .insert(&txn)
                    .await?;
                }
            }
        }

        let restored_status = found.previous_status.unwrap_or(QuotationStatus::Open);
        let version = found.version;
        let quotation_id = found.id;
        let mut active: quotation::ActiveModel = found.into();
        active.status = Set(restored_status);
        active.previous_status = Set(None);
        active.contract_file = Set(None);
        active.version = Set(version + 1);
        let restored = active.update(&txn).await?;

        txn.commit().await?;

        if let Some(project_id) = project_id {
            if let Err(e) = self
                .event_sender
                .send(Event::QuotationReverted {
                    quotation_id,
                    project_id,
                })
                .await
            {
                warn!(error = %e, "failed to publish revert event");
            }
        }

        Ok(restored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transitions_follow_the_sales_flow() {
        use QuotationStatus::*;
        assert!(QuotationService::can_transition(Draft, Open));
        assert!(QuotationService::can_transition(Draft, Sent));
        assert!(QuotationService::can_transition(Open, Accepted));
        assert!(QuotationService::can_transition(Sent, Rejected));
        assert!(!QuotationService::can_transition(Accepted, Draft));
        assert!(!QuotationService::can_transition(Open, Draft));
        assert!(!QuotationService::can_transition(Draft, Draft));
    }

    #[test]
    fn conversion_never_happens_via_status_update() {
        use QuotationStatus::*;
        for from in [Draft, Open, Sent, Accepted, Rejected] {
            assert!(!QuotationService::can_transition(from, ConvertedToProject));
        }
    }

    #[test]
    fn terminal_states_stay_terminal() {
        use QuotationStatus::*;
        assert!(!QuotationService::can_transition(Rejected, Open));
        assert!(!QuotationService::can_transition(ConvertedToProject, Accepted));
        assert!(!QuotationService::can_transition(ConvertedToProject, Rejected));
    }
}
