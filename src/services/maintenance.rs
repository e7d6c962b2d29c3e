use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};
use serde::Deserialize;
use tracing::{instrument, warn};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::auth::AuthUser;
use crate::db::DbPool;
use crate::entities::maintenance_request::{self, MaintenanceStatus};
use crate::entities::maintenance_status_log;
use crate::entities::notification::NotificationKind;
use crate::entities::product_type;
use crate::entities::project::{self, ProjectStage};
use crate::entities::quotation_item;
use crate::entities::user::UserRole;
use crate::errors::ServiceError;
use crate::events::{Event, EventSender};
use crate::services::notifications::NotificationService;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateMaintenanceInput {
    /// Either a delivered project or a manually entered client is required
    pub project_id: Option<Uuid>,
    #[validate(length(min = 1, max = 120))]
    pub client_name: Option<String>,
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    #[validate(length(min = 1, max = 2000))]
    pub description: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateMaintenanceStatusInput {
    pub status: MaintenanceStatus,
    #[validate(length(max = 1000))]
    pub note: Option<String>,
    pub scheduled_for: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, serde::Serialize, ToSchema)]
pub struct MaintenanceDetail {
    pub request: maintenance_request::Model,
    pub history: Vec<maintenance_status_log::Model>,
}

/// Service tickets with an append-only status history. Tickets are raised
/// against a delivered project, or against a manually entered client for
/// work outside the project pipeline.
#[derive(Clone)]
pub struct MaintenanceService {
    db_pool: Arc<DbPool>,
    event_sender: EventSender,
    notifications: NotificationService,
}

impl MaintenanceService {
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

    /// Longest warranty among the products on the project's quotation, used
    /// to decide whether the ticket is covered.
    async fn warranty_covers(
        &self,
        parent: &project::Model,
        opened_at: DateTime<Utc>,
    ) -> Result<bool, ServiceError> {
        let items = quotation_item::Entity::find()
            .filter(quotation_item::Column::QuotationId.eq(parent.quotation_id))
            .all(self.db_pool.as_ref())
            .await?;
        let product_ids: Vec<Uuid> = items.iter().map(|i| i.product_type_id).collect();
        if product_ids.is_empty() {
            return Ok(false);
        }

        let max_years = product_type::Entity::find()
            .filter(product_type::Column::Id.is_in(product_ids))
            .all(self.db_pool.as_ref())
            .await?
            .iter()
            .map(|p| p.warranty_years)
            .max()
            .unwrap_or(0);

        Ok(opened_at - parent.created_at < Duration::days(365 * i64::from(max_years)))
    }

    #[instrument(skip(self, input))]
    pub async fn create(
        &self,
        actor: &AuthUser,
        input: CreateMaintenanceInput,
    ) -> Result<MaintenanceDetail, ServiceError> {
        input.validate()?;

        let now = Utc::now();
        let (parent_id, client_name, under_warranty) = match input.project_id {
            Some(project_id) => {
                let parent = project::Entity::find_by_id(project_id)
                    .one(self.db_pool.as_ref())
                    .await?
                    .ok_or_else(|| {
                        ServiceError::NotFound(format!("Project {} not found", project_id))
                    })?;

                if parent.stage != ProjectStage::Delivered {
                    return Err(ServiceError::InvalidOperation(
                        "Maintenance can only be requested for delivered projects".to_string(),
                    ));
                }

                let covered = self.warranty_covers(&parent, now).await?;
                (Some(parent.id), None, covered)
            }
            // walk-in ticket: no project, the client is entered by hand and
            // warranty never applies
            None => {
                let name = input
                    .client_name
                    .as_deref()
                    .map(str::trim)
                    .unwrap_or_default();
                if name.is_empty() {
                    return Err(ServiceError::ValidationError(
                        "A ticket without a project requires a client name".to_string(),
                    ));
                }
                (None, Some(name.to_string()), false)
            }
        };

        let txn = self.db_pool.begin().await?;

        let existing = maintenance_request::Entity::find().count(&txn).await?;
        let request_id = Uuid::new_v4();
        let created = maintenance_request::ActiveModel {
            id: Set(request_id),
            ticket_number: Set(format!("MNT-{:05}", existing + 1)),
            project_id: Set(parent_id),
            client_name: Set(client_name),
            title: Set(input.title),
            description: Set(input.description),
            status: Set(MaintenanceStatus::Open),
            under_warranty: Set(under_warranty),
            scheduled_for: Set(None),
            created_by: Set(actor.id),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&txn)
        .await?;

        let first_log = maintenance_status_log::ActiveModel {
            id: Set(Uuid::new_v4()),
            maintenance_request_id: Set(request_id),
            from_status: Set(None),
            to_status: Set(MaintenanceStatus::Open),
            note: Set(None),
            changed_by: Set(actor.id),
            changed_at: Set(now),
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;

        if let Err(e) = self
            .event_sender
            .send(Event::MaintenanceRequestCreated(request_id))
            .await
        {
            warn!(error = %e, "failed to publish maintenance created event");
        }

        if let Err(e) = self
            .notifications
            .notify_roles(
                &[UserRole::Admin, UserRole::InstallationTeam],
                NotificationKind::Maintenance,
                "New maintenance request",
                &format!("Ticket {} opened", created.ticket_number),
                Some(request_id),
            )
            .await
        {
            warn!(error = %e, "failed to fan out maintenance notification");
        }

        Ok(MaintenanceDetail {
            request: created,
            history: vec![first_log],
        })
    }

    pub async fn get(&self, id: Uuid) -> Result<MaintenanceDetail, ServiceError> {
        let request = maintenance_request::Entity::find_by_id(id)
            .one(self.db_pool.as_ref())
            .await?
            .ok_or_else(|| {
                ServiceError::NotFound(format!("Maintenance request {} not found", id))
            })?;
        let history = maintenance_status_log::Entity::find()
            .filter(maintenance_status_log::Column::MaintenanceRequestId.eq(id))
            .order_by_asc(maintenance_status_log::Column::ChangedAt)
            .all(self.db_pool.as_ref())
            .await?;
        Ok(MaintenanceDetail { request, history })
    }

    pub async fn list(
        &self,
        status: Option<MaintenanceStatus>,
        project_id: Option<Uuid>,
    ) -> Result<Vec<maintenance_request::Model>, ServiceError> {
        let mut query = maintenance_request::Entity::find()
            .order_by_desc(maintenance_request::Column::CreatedAt);
        if let Some(status) = status {
            query = query.filter(maintenance_request::Column::Status.eq(status));
        }
        if let Some(project_id) = project_id {
            query = query.filter(maintenance_request::Column::ProjectId.eq(project_id));
        }
        Ok(query.all(self.db_pool.as_ref()).await?)
    }

    /// Moves a ticket to a new status and appends the transition to its
    /// history in the same transaction.
    #[instrument(skip(self, input))]
    pub async fn update_status(
        &self,
        id: Uuid,
        actor: &AuthUser,
        input: UpdateMaintenanceStatusInput,
    ) -> Result<MaintenanceDetail, ServiceError> {
        input.validate()?;

        let txn = self.db_pool.begin().await?;

        let found = maintenance_request::Entity::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or_else(|| {
                ServiceError::NotFound(format!("Maintenance request {} not found", id))
            })?;

        let old_status = found.status;
        if old_status == MaintenanceStatus::Completed {
            return Err(ServiceError::InvalidOperation(
                "A completed ticket cannot change status".to_string(),
            ));
        }
        if old_status == input.status {
            return Err(ServiceError::InvalidOperation(format!(
                "Ticket is already {}",
                input.status
            )));
        }
        if input.status == MaintenanceStatus::Scheduled && input.scheduled_for.is_none() {
            return Err(ServiceError::ValidationError(
                "Scheduling a ticket requires a date".to_string(),
            ));
        }

        let now = Utc::now();
        let mut active: maintenance_request::ActiveModel = found.into();
        active.status = Set(input.status);
        if let Some(scheduled_for) = input.scheduled_for {
            active.scheduled_for = Set(Some(scheduled_for));
        }
        active.updated_at = Set(now);
        active.update(&txn).await?;

        maintenance_status_log::ActiveModel {
            id: Set(Uuid::new_v4()),
            maintenance_request_id: Set(id),
            from_status: Set(Some(old_status)),
            to_status: Set(input.status),
            note: Set(input.note.clone()),
            changed_by: Set(actor.id),
            changed_at: Set(now),
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;

        if let Err(e) = self
            .event_sender
            .send(Event::MaintenanceStatusChanged {
                request_id: id,
                old_status,
                new_status: input.status,
            })
            .await
        {
            warn!(error = %e, "failed to publish maintenance status event");
        }

        self.get(id).await
    }
}
