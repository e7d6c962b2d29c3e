use std::collections::BTreeSet;
use std::sync::Arc;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};
use tracing::{instrument, warn};
use uuid::Uuid;

use crate::db::DbPool;
use crate::entities::notification::{self, NotificationKind};
use crate::entities::user::{self, UserRole};
use crate::errors::ServiceError;
use crate::events::{Event, EventSender};

/// Creates and queries per-user notifications. Fan-out writes one row per
/// recipient so read state never leaks between users.
#[derive(Clone)]
pub struct NotificationService {
    db_pool: Arc<DbPool>,
    event_sender: EventSender,
}

impl NotificationService {
    pub fn new(db_pool: Arc<DbPool>, event_sender: EventSender) -> Self {
        Self {
            db_pool,
            event_sender,
        }
    }

    /// Delivers one notification to every user holding any of the given
    /// roles. Users matching several roles still receive a single copy.
    /// Returns the number of recipients.
    #[instrument(skip(self, title, body))]
    pub async fn notify_roles(
        &self,
        roles: &[UserRole],
        kind: NotificationKind,
        title: &str,
        body: &str,
        entity_id: Option<Uuid>,
    ) -> Result<usize, ServiceError> {
        let roles: BTreeSet<String> = roles.iter().map(|r| r.to_string()).collect();
        if roles.is_empty() {
            return Ok(0);
        }

        let recipients = user::Entity::find()
            .filter(user::Column::Role.is_in(roles))
            .all(self.db_pool.as_ref())
            .await?;

        if recipients.is_empty() {
            return Ok(0);
        }

        let now = Utc::now();
        let rows: Vec<notification::ActiveModel> = recipients
            .iter()
            .map(|recipient| notification::ActiveModel {
                id: Set(Uuid::new_v4()),
                user_id: Set(recipient.id),
                kind: Set(kind),
                title: Set(title.to_string()),
                body: Set(body.to_string()),
                entity_id: Set(entity_id),
                read: Set(false),
                created_at: Set(now),
            })
            .collect();

        let count = rows.len();
        notification::Entity::insert_many(rows)
            .exec(self.db_pool.as_ref())
            .await?;

        if let Err(e) = self
            .event_sender
            .send(Event::NotificationsFanned {
                kind: kind.to_string(),
                recipients: count,
                at: now,
            })
            .await
        {
            warn!(error = %e, "failed to publish fan-out event");
        }

        Ok(count)
    }

    pub async fn list_for_user(
        &self,
        user_id: Uuid,
        unread_only: bool,
    ) -> Result<Vec<notification::Model>, ServiceError> {
        let mut query = notification::Entity::find()
            .filter(notification::Column::UserId.eq(user_id))
            .order_by_desc(notification::Column::CreatedAt);
        if unread_only {
            query = query.filter(notification::Column::Read.eq(false));
        }
        Ok(query.all(self.db_pool.as_ref()).await?)
    }

    pub async fn unread_count(&self, user_id: Uuid) -> Result<u64, ServiceError> {
        Ok(notification::Entity::find()
            .filter(notification::Column::UserId.eq(user_id))
            .filter(notification::Column::Read.eq(false))
            .count(self.db_pool.as_ref())
            .await?)
    }

    /// Marks one notification read. Only the owner can flip the flag.
    pub async fn mark_read(
        &self,
        user_id: Uuid,
        notification_id: Uuid,
    ) -> Result<notification::Model, ServiceError> {
        let found = notification::Entity::find_by_id(notification_id)
            .filter(notification::Column::UserId.eq(user_id))
            .one(self.db_pool.as_ref())
            .await?
            .ok_or_else(|| {
                ServiceError::NotFound(format!("Notification {} not found", notification_id))
            })?;

        let mut active: notification::ActiveModel = found.into();
        active.read = Set(true);
        Ok(active.update(self.db_pool.as_ref()).await?)
    }

    pub async fn mark_all_read(&self, user_id: Uuid) -> Result<u64, ServiceError> {
        let result = notification::Entity::update_many()
            .col_expr(notification::Column::Read, sea_orm::sea_query::Expr::value(true))
            .filter(notification::Column::UserId.eq(user_id))
            .filter(notification::Column::Read.eq(false))
            .exec(self.db_pool.as_ref())
            .await?;
        Ok(result.rows_affected)
    }
}
