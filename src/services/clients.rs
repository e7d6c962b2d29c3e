use std::sync::Arc;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, ModelTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};
use serde::Deserialize;
use tracing::instrument;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::db::DbPool;
use crate::entities::{client, quotation};
use crate::errors::ServiceError;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateClientInput {
    #[validate(length(min = 1, max = 120))]
    pub name: String,
    #[validate(length(min = 5, max = 30))]
    pub phone: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1, max = 80))]
    pub city: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateClientInput {
    #[validate(length(min = 1, max = 120))]
    pub name: Option<String>,
    #[validate(length(min = 5, max = 30))]
    pub phone: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    #[validate(length(min = 1, max = 80))]
    pub city: Option<String>,
}

#[derive(Clone)]
pub struct ClientService {
    db_pool: Arc<DbPool>,
}

impl ClientService {
    pub fn new(db_pool: Arc<DbPool>) -> Self {
        Self { db_pool }
    }

    #[instrument(skip(self, input))]
    pub async fn create(&self, input: CreateClientInput) -> Result<client::Model, ServiceError> {
        input.validate()?;

        let duplicate = client::Entity::find()
            .filter(client::Column::Email.eq(input.email.as_str()))
            .one(self.db_pool.as_ref())
            .await?;
        if duplicate.is_some() {
            return Err(ServiceError::Conflict(format!(
                "A client with email {} already exists",
                input.email
            )));
        }

        Ok(client::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(input.name),
            phone: Set(input.phone),
            email: Set(input.email),
            city: Set(input.city),
            created_at: Set(Utc::now()),
        }
        .insert(self.db_pool.as_ref())
        .await?)
    }

    pub async fn get(&self, id: Uuid) -> Result<client::Model, ServiceError> {
        client::Entity::find_by_id(id)
            .one(self.db_pool.as_ref())
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Client {} not found", id)))
    }

    pub async fn list(
        &self,
        search: Option<String>,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<client::Model>, u64), ServiceError> {
        let mut query = client::Entity::find().order_by_asc(client::Column::Name);
        if let Some(term) = search.filter(|t| !t.trim().is_empty()) {
            query = query.filter(client::Column::Name.contains(term.trim()));
        }

        let total = query.clone().count(self.db_pool.as_ref()).await?;
        let page = page.max(1);
        let rows = query
            .paginate(self.db_pool.as_ref(), per_page)
            .fetch_page(page - 1)
            .await?;
        Ok((rows, total))
    }

    #[instrument(skip(self, input))]
    pub async fn update(
        &self,
        id: Uuid,
        input: UpdateClientInput,
    ) -> Result<client::Model, ServiceError> {
        input.validate()?;

        let found = self.get(id).await?;
        let mut active: client::ActiveModel = found.into();
        if let Some(name) = input.name {
            active.name = Set(name);
        }
        if let Some(phone) = input.phone {
            active.phone = Set(phone);
        }
        if let Some(email) = input.email {
            active.email = Set(email);
        }
        if let Some(city) = input.city {
            active.city = Set(city);
        }
        Ok(active.update(self.db_pool.as_ref()).await?)
    }

    /// Removes a client. Clients with quotations on record stay, so the
    /// commercial history keeps its counterparty.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: Uuid) -> Result<(), ServiceError> {
        let found = self.get(id).await?;

        let quoted = quotation::Entity::find()
            .filter(quotation::Column::ClientId.eq(id))
            .count(self.db_pool.as_ref())
            .await?;
        if quoted > 0 {
            return Err(ServiceError::Conflict(format!(
                "Client {} has {} quotation(s) on record and cannot be deleted",
                found.name, quoted
            )));
        }

        found.delete(self.db_pool.as_ref()).await?;
        Ok(())
    }
}
