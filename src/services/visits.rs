use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, ModelTrait, QueryFilter, QueryOrder, Set};
use serde::Deserialize;
use tracing::instrument;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::db::DbPool;
use crate::entities::client;
use crate::entities::sales_visit::{self, VisitOutcome};
use crate::errors::ServiceError;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateVisitInput {
    pub client_id: Uuid,
    pub visit_date: NaiveDate,
    #[validate(length(min = 1, max = 300))]
    pub purpose: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RecordVisitOutcomeInput {
    pub outcome: VisitOutcome,
    #[validate(length(max = 2000))]
    pub notes: Option<String>,
}

/// Sales visit planning and logging. The same records serve the daily plan
/// view (by date) and the per-rep log (by rep).
#[derive(Clone)]
pub struct VisitService {
    db_pool: Arc<DbPool>,
}

impl VisitService {
    pub fn new(db_pool: Arc<DbPool>) -> Self {
        Self { db_pool }
    }

    #[instrument(skip(self, input))]
    pub async fn create(
        &self,
        sales_rep_id: Uuid,
        input: CreateVisitInput,
    ) -> Result<sales_visit::Model, ServiceError> {
        input.validate()?;

        client::Entity::find_by_id(input.client_id)
            .one(self.db_pool.as_ref())
            .await?
            .ok_or_else(|| {
                ServiceError::NotFound(format!("Client {} not found", input.client_id))
            })?;

        Ok(sales_visit::ActiveModel {
            id: Set(Uuid::new_v4()),
            sales_rep_id: Set(sales_rep_id),
            client_id: Set(input.client_id),
            visit_date: Set(input.visit_date),
            purpose: Set(input.purpose),
            outcome: Set(VisitOutcome::Planned),
            notes: Set(None),
            created_at: Set(Utc::now()),
        }
        .insert(self.db_pool.as_ref())
        .await?)
    }

    pub async fn list(
        &self,
        sales_rep_id: Option<Uuid>,
        date: Option<NaiveDate>,
    ) -> Result<Vec<sales_visit::Model>, ServiceError> {
        let mut query = sales_visit::Entity::find()
            .order_by_desc(sales_visit::Column::VisitDate)
            .order_by_asc(sales_visit::Column::CreatedAt);
        if let Some(rep) = sales_rep_id {
            query = query.filter(sales_visit::Column::SalesRepId.eq(rep));
        }
        if let Some(date) = date {
            query = query.filter(sales_visit::Column::VisitDate.eq(date));
        }
        Ok(query.all(self.db_pool.as_ref()).await?)
    }

    /// Records how a planned visit went. Only planned visits can be closed.
    #[instrument(skip(self, input))]
    pub async fn record_outcome(
        &self,
        id: Uuid,
        input: RecordVisitOutcomeInput,
    ) -> Result<sales_visit::Model, ServiceError> {
        input.validate()?;

        if input.outcome == VisitOutcome::Planned {
            return Err(ServiceError::ValidationError(
                "A visit outcome cannot be set back to planned".to_string(),
            ));
        }

        let found = sales_visit::Entity::find_by_id(id)
            .one(self.db_pool.as_ref())
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Visit {} not found", id)))?;

        if found.outcome != VisitOutcome::Planned {
            return Err(ServiceError::InvalidOperation(format!(
                "Visit already closed as {}",
                found.outcome
            )));
        }

        let mut active: sales_visit::ActiveModel = found.into();
        active.outcome = Set(input.outcome);
        active.notes = Set(input.notes);
        Ok(active.update(self.db_pool.as_ref()).await?)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: Uuid) -> Result<(), ServiceError> {
        let found = sales_visit::Entity::find_by_id(id)
            .one(self.db_pool.as_ref())
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Visit {} not found", id)))?;
        found.delete(self.db_pool.as_ref()).await?;
        Ok(())
    }
}
