use std::sync::Arc;

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, ModelTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};
use serde::{Deserialize, Serialize};
use tracing::instrument;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::auth::AuthService;
use crate::db::DbPool;
use crate::entities::quotation;
use crate::entities::user::{self, UserRole};
use crate::errors::ServiceError;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateUserInput {
    #[validate(length(min = 1, max = 120))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 8, max = 128))]
    pub password: String,
    pub role: UserRole,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateUserInput {
    #[validate(length(min = 1, max = 120))]
    pub name: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    #[validate(length(min = 8, max = 128))]
    pub password: Option<String>,
    pub role: Option<UserRole>,
}

/// Account representation without the password hash.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UserResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
}

impl From<user::Model> for UserResponse {
    fn from(model: user::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            email: model.email,
            role: model.role,
            created_at: model.created_at,
        }
    }
}

#[derive(Clone)]
pub struct UserService {
    db_pool: Arc<DbPool>,
}

impl UserService {
    pub fn new(db_pool: Arc<DbPool>) -> Self {
        Self { db_pool }
    }

    #[instrument(skip(self, input))]
    pub async fn create(&self, input: CreateUserInput) -> Result<UserResponse, ServiceError> {
        input.validate()?;

        let duplicate = user::Entity::find()
            .filter(user::Column::Email.eq(input.email.as_str()))
            .one(self.db_pool.as_ref())
            .await?;
        if duplicate.is_some() {
            return Err(ServiceError::Conflict(format!(
                "An account with email {} already exists",
                input.email
            )));
        }

        let password_hash = AuthService::hash_password(&input.password)
            .map_err(|e| ServiceError::InternalError(e.to_string()))?;

        let created = user::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(input.name),
            email: Set(input.email),
            password_hash: Set(password_hash),
            role: Set(input.role),
            created_at: Set(Utc::now()),
        }
        .insert(self.db_pool.as_ref())
        .await?;

        Ok(created.into())
    }

    pub async fn get(&self, id: Uuid) -> Result<UserResponse, ServiceError> {
        user::Entity::find_by_id(id)
            .one(self.db_pool.as_ref())
            .await?
            .map(UserResponse::from)
            .ok_or_else(|| ServiceError::NotFound(format!("User {} not found", id)))
    }

    pub async fn list(&self, role: Option<UserRole>) -> Result<Vec<UserResponse>, ServiceError> {
        let mut query = user::Entity::find().order_by_asc(user::Column::Name);
        if let Some(role) = role {
            query = query.filter(user::Column::Role.eq(role));
        }
        Ok(query
            .all(self.db_pool.as_ref())
            .await?
            .into_iter()
            .map(UserResponse::from)
            .collect())
    }

    #[instrument(skip(self, input))]
    pub async fn update(
        &self,
        id: Uuid,
        input: UpdateUserInput,
    ) -> Result<UserResponse, ServiceError> {
        input.validate()?;

        let found = user::Entity::find_by_id(id)
            .one(self.db_pool.as_ref())
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("User {} not found", id)))?;

        if let Some(email) = input.email.as_deref() {
            let taken = user::Entity::find()
                .filter(user::Column::Email.eq(email))
                .filter(user::Column::Id.ne(id))
                .one(self.db_pool.as_ref())
                .await?;
            if taken.is_some() {
                return Err(ServiceError::Conflict(format!(
                    "An account with email {} already exists",
                    email
                )));
            }
        }

        let mut active: user::ActiveModel = found.into();
        if let Some(name) = input.name {
            active.name = Set(name);
        }
        if let Some(email) = input.email {
            active.email = Set(email);
        }
        if let Some(password) = input.password {
            let hash = AuthService::hash_password(&password)
                .map_err(|e| ServiceError::InternalError(e.to_string()))?;
            active.password_hash = Set(hash);
        }
        if let Some(role) = input.role {
            active.role = Set(role);
        }
        Ok(active.update(self.db_pool.as_ref()).await?.into())
    }

    /// Removes an account. Accounts that own quotations stay, so the
    /// commercial history keeps its author.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: Uuid) -> Result<(), ServiceError> {
        let found = user::Entity::find_by_id(id)
            .one(self.db_pool.as_ref())
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("User {} not found", id)))?;

        let owned = quotation::Entity::find()
            .filter(quotation::Column::OwnerId.eq(id))
            .count(self.db_pool.as_ref())
            .await?;
        if owned > 0 {
            return Err(ServiceError::Conflict(format!(
                "User {} owns {} quotation(s) and cannot be deleted",
                found.email, owned
            )));
        }

        found.delete(self.db_pool.as_ref()).await?;
        Ok(())
    }

    /// Changes an account's role; the closed role set makes this the only
    /// permission mutation in the system.
    #[instrument(skip(self))]
    pub async fn set_role(&self, id: Uuid, role: UserRole) -> Result<UserResponse, ServiceError> {
        let found = user::Entity::find_by_id(id)
            .one(self.db_pool.as_ref())
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("User {} not found", id)))?;

        let mut active: user::ActiveModel = found.into();
        active.role = Set(role);
        Ok(active.update(self.db_pool.as_ref()).await?.into())
    }
}
