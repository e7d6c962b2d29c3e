use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::sea_query::StringLen;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Execution stage of a project. The ordered stages form a strict forward
/// progression; `Postponed` is a side state that keeps the previously earned
/// progress.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    EnumIter,
    DeriveActiveEnum,
    Serialize,
    Deserialize,
    ToSchema,
    strum::Display,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ProjectStage {
    #[sea_orm(string_value = "measurements")]
    Measurements,
    #[sea_orm(string_value = "manufacturing")]
    Manufacturing,
    #[sea_orm(string_value = "installation_start")]
    InstallationStart,
    #[sea_orm(string_value = "final_installation")]
    FinalInstallation,
    #[sea_orm(string_value = "delivered")]
    Delivered,
    #[sea_orm(string_value = "postponed")]
    Postponed,
}

impl ProjectStage {
    /// Forward progression, excluding the `Postponed` side state.
    pub const ORDERED: [ProjectStage; 5] = [
        ProjectStage::Measurements,
        ProjectStage::Manufacturing,
        ProjectStage::InstallationStart,
        ProjectStage::FinalInstallation,
        ProjectStage::Delivered,
    ];

    /// Index within the ordered progression; `None` for `Postponed`.
    pub fn sequence_index(&self) -> Option<usize> {
        Self::ORDERED.iter().position(|s| s == self)
    }

    /// Progress earned on entering this stage; `None` for `Postponed`, which
    /// keeps whatever was earned before.
    pub fn progress_percent(&self) -> Option<i32> {
        match self {
            Self::Measurements => Some(20),
            Self::Manufacturing => Some(45),
            Self::InstallationStart => Some(65),
            Self::FinalInstallation => Some(85),
            Self::Delivered => Some(100),
            Self::Postponed => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize, ToSchema)]
#[schema(as = Project)]
#[sea_orm(table_name = "projects")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub project_number: String,
    #[sea_orm(unique)]
    pub quotation_id: Uuid,
    pub client_id: Uuid,
    pub name: String,
    pub stage: ProjectStage,
    pub progress: i32,
    pub assigned_team: Option<String>,
    pub postpone_reason: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub version: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::quotation::Entity",
        from = "Column::QuotationId",
        to = "super::quotation::Column::Id"
    )]
    Quotation,
    #[sea_orm(
        belongs_to = "super::client::Entity",
        from = "Column::ClientId",
        to = "super::client::Column::Id"
    )]
    Client,
    #[sea_orm(has_many = "super::project_attachment::Entity")]
    Attachments,
    #[sea_orm(has_many = "super::maintenance_request::Entity")]
    MaintenanceRequests,
}

impl Related<super::quotation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Quotation.def()
    }
}

impl Related<super::client::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Client.def()
    }
}

impl Related<super::project_attachment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Attachments.def()
    }
}

impl Related<super::maintenance_request::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MaintenanceRequests.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordered_stages_map_to_increasing_progress() {
        let mut last = 0;
        for stage in ProjectStage::ORDERED {
            let pct = stage.progress_percent().unwrap();
            assert!(pct > last, "{stage} should advance progress");
            last = pct;
        }
        assert_eq!(last, 100);
    }

    #[test]
    fn measurements_is_the_entry_stage() {
        assert_eq!(ProjectStage::Measurements.sequence_index(), Some(0));
        assert_eq!(ProjectStage::Measurements.progress_percent(), Some(20));
    }

    #[test]
    fn postponed_sits_outside_the_progression() {
        assert_eq!(ProjectStage::Postponed.sequence_index(), None);
        assert_eq!(ProjectStage::Postponed.progress_percent(), None);
    }
}
