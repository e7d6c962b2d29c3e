use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// HR record; distinct from the login user so non-system staff can be
/// tracked. `user_id` links the two when the employee has an account.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize, ToSchema)]
#[schema(as = Employee)]
#[sea_orm(table_name = "employees")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub job_title: String,
    pub department: String,
    pub salary: Decimal,
    pub hired_on: NaiveDate,
    pub user_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::custody_entry::Entity")]
    CustodyEntries,
}

impl Related<super::custody_entry::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CustodyEntries.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
