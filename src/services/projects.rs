use std::sync::Arc;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Set, TransactionTrait,
};
use serde::Deserialize;
use tracing::{instrument, warn};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::auth::AuthUser;
use crate::db::DbPool;
use crate::entities::notification::NotificationKind;
use crate::entities::project::{self, ProjectStage};
use crate::entities::project_attachment::{self, AttachmentKind};
use crate::entities::user::UserRole;
use crate::errors::ServiceError;
use crate::events::{Event, EventSender};
use crate::services::notifications::NotificationService;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateStageInput {
    pub stage: ProjectStage,
    /// Required when moving into the postponed state
    #[validate(length(max = 500))]
    pub reason: Option<String>,
    /// Proof-of-delivery reference, required when moving to delivered
    #[validate(length(max = 500))]
    pub attachment_ref: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct AddAttachmentInput {
    pub kind: AttachmentKind,
    #[validate(length(min = 1, max = 500))]
    pub file_ref: String,
}

#[derive(Debug, Clone, serde::Serialize, ToSchema)]
pub struct ProjectDetail {
    pub project: project::Model,
    pub attachments: Vec<project_attachment::Model>,
}

/// Project pipeline: stage progression, team assignment and attachments.
/// Projects are only ever created by quotation acceptance.
#[derive(Clone)]
pub struct ProjectService {
    db_pool: Arc<DbPool>,
    event_sender: EventSender,
    notifications: NotificationService,
}

impl ProjectService {
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

    pub async fn get(&self, id: Uuid) -> Result<ProjectDetail, ServiceError> {
        let found = project::Entity::find_by_id(id)
            .one(self.db_pool.as_ref())
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Project {} not found", id)))?;
        let attachments = project_attachment::Entity::find()
            .filter(project_attachment::Column::ProjectId.eq(id))
            .order_by_asc(project_attachment::Column::CreatedAt)
            .all(self.db_pool.as_ref())
            .await?;
        Ok(ProjectDetail {
            project: found,
            attachments,
        })
    }

    pub async fn list(
        &self,
        stage: Option<ProjectStage>,
        client_id: Option<Uuid>,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<project::Model>, u64), ServiceError> {
        let mut query = project::Entity::find().order_by_desc(project::Column::CreatedAt);
        if let Some(stage) = stage {
            query = query.filter(project::Column::Stage.eq(stage));
        }
        if let Some(client_id) = client_id {
            query = query.filter(project::Column::ClientId.eq(client_id));
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

    fn stage_change_allowed(
        actor: &AuthUser,
        current: &project::Model,
        target: ProjectStage,
    ) -> Result<(), ServiceError> {
        if current.stage == target {
            return Err(ServiceError::InvalidOperation(format!(
                "Project is already in stage {}",
                target
            )));
        }
        // administrators may move anywhere, backward and out of delivered
        // included
        if actor.is_admin() {
            return Ok(());
        }
        if current.stage == ProjectStage::Delivered {
            return Err(ServiceError::InvalidOperation(
                "A delivered project cannot change stage".to_string(),
            ));
        }

        match (current.stage.sequence_index(), target.sequence_index()) {
            // postponing is allowed from any live stage
            (_, None) => Ok(()),
            // resuming from postponed may land on any ordered stage
            (None, Some(_)) => Ok(()),
            (Some(from), Some(to)) if to > from => Ok(()),
            _ => Err(ServiceError::Forbidden(format!(
                "Only an administrator can move a project from {} back to {}",
                current.stage, target
            ))),
        }
    }

    /// Advances the project stage. Ordered stages only move forward for
    /// non-administrators; postponing requires a reason and keeps the earned
    /// progress; delivery requires a proof attachment and notifies the sales
    /// side.
    #[instrument(skip(self, input))]
    pub async fn update_stage(
        &self,
        id: Uuid,
        actor: &AuthUser,
        input: UpdateStageInput,
    ) -> Result<project::Model, ServiceError> {
        input.validate()?;

        let found = project::Entity::find_by_id(id)
            .one(self.db_pool.as_ref())
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Project {} not found", id)))?;

        Self::stage_change_allowed(actor, &found, input.stage)?;

        if input.stage == ProjectStage::Postponed
            && input.reason.as_deref().map_or(true, |r| r.trim().is_empty())
        {
            return Err(ServiceError::ValidationError(
                "Postponing a project requires a reason".to_string(),
            ));
        }

        let delivery_proof = if input.stage == ProjectStage::Delivered {
            let proof = input
                .attachment_ref
                .as_deref()
                .map(str::trim)
                .unwrap_or_default();
            if proof.is_empty() {
                return Err(ServiceError::ValidationError(
                    "Delivery requires a proof-of-delivery attachment".to_string(),
                ));
            }
            Some(proof.to_string())
        } else {
            None
        };

        let old_stage = found.stage;
        let progress = input.stage.progress_percent().unwrap_or(found.progress);
        let project_number = found.project_number.clone();
        let version = found.version;
        let now = Utc::now();

        let txn = self.db_pool.begin().await?;

        let mut active: project::ActiveModel = found.into();
        active.stage = Set(input.stage);
        active.progress = Set(progress);
        active.postpone_reason = Set(if input.stage == ProjectStage::Postponed {
            input.reason.clone()
        } else {
            None
        });
        active.updated_at = Set(now);
        active.version = Set(version + 1);
        let updated = active.update(&txn).await?;

        if let Some(file_ref) = delivery_proof {
            project_attachment::ActiveModel {
                id: Set(Uuid::new_v4()),
                project_id: Set(id),
                kind: Set(AttachmentKind::DeliveryProof),
                file_ref: Set(file_ref),
                uploaded_by: Set(actor.id),
                created_at: Set(now),
            }
            .insert(&txn)
            .await?;
        }

        txn.commit().await?;

        if let Err(e) = self
            .event_sender
            .send(Event::ProjectStageChanged {
                project_id: id,
                old_stage,
                new_stage: input.stage,
                progress,
            })
            .await
        {
            warn!(error = %e, "failed to publish stage change event");
        }

        if input.stage == ProjectStage::Delivered {
            let _ = self.event_sender.send(Event::ProjectDelivered(id)).await;
            if let Err(e) = self
                .notifications
                .notify_roles(
                    &[UserRole::Admin, UserRole::Sales],
                    NotificationKind::ProjectDelivered,
                    "Project delivered",
                    &format!("Project {} has been delivered", project_number),
                    Some(id),
                )
                .await
            {
                warn!(error = %e, "failed to fan out delivery notification");
            }
        }

        Ok(updated)
    }

    #[instrument(skip(self))]
    pub async fn assign_team(
        &self,
        id: Uuid,
        team: Option<String>,
    ) -> Result<project::Model, ServiceError> {
        let found = project::Entity::find_by_id(id)
            .one(self.db_pool.as_ref())
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Project {} not found", id)))?;

        let version = found.version;
        let mut active: project::ActiveModel = found.into();
        active.assigned_team = Set(team);
        active.updated_at = Set(Utc::now());
        active.version = Set(version + 1);
        Ok(active.update(self.db_pool.as_ref()).await?)
    }

    pub async fn add_attachment(
        &self,
        project_id: Uuid,
        actor: &AuthUser,
        input: AddAttachmentInput,
    ) -> Result<project_attachment::Model, ServiceError> {
        input.validate()?;

        project::Entity::find_by_id(project_id)
            .one(self.db_pool.as_ref())
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Project {} not found", project_id)))?;

        Ok(project_attachment::ActiveModel {
            id: Set(Uuid::new_v4()),
            project_id: Set(project_id),
            kind: Set(input.kind),
            file_ref: Set(input.file_ref),
            uploaded_by: Set(actor.id),
            created_at: Set(Utc::now()),
        }
        .insert(self.db_pool.as_ref())
        .await?)
    }
}
