use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};
use serde::Deserialize;
use tracing::instrument;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::auth::AuthUser;
use crate::db::DbPool;
use crate::entities::custody_entry::{self, CustodyEntryType};
use crate::entities::employee;
use crate::errors::ServiceError;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateEmployeeInput {
    #[validate(length(min = 1, max = 120))]
    pub name: String,
    #[validate(length(min = 1, max = 120))]
    pub job_title: String,
    #[validate(length(min = 1, max = 120))]
    pub department: String,
    pub salary: Decimal,
    pub hired_on: NaiveDate,
    pub user_id: Option<Uuid>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateCustodyEntryInput {
    pub entry_type: CustodyEntryType,
    pub amount: Decimal,
    #[validate(length(min = 1, max = 300))]
    pub reason: String,
}

/// Custody ledger with its derived balance; the balance is never stored.
#[derive(Debug, Clone, serde::Serialize, ToSchema)]
pub struct CustodyStatement {
    pub employee: employee::Model,
    pub entries: Vec<custody_entry::Model>,
    pub balance: Decimal,
}

/// Sums credits minus debits.
pub fn custody_balance(entries: &[custody_entry::Model]) -> Decimal {
    entries
        .iter()
        .map(|entry| match entry.entry_type {
            CustodyEntryType::Credit => entry.amount,
            CustodyEntryType::Debit => -entry.amount,
        })
        .sum()
}

#[derive(Clone)]
pub struct HrService {
    db_pool: Arc<DbPool>,
}

impl HrService {
    pub fn new(db_pool: Arc<DbPool>) -> Self {
        Self { db_pool }
    }

    #[instrument(skip(self, input))]
    pub async fn create_employee(
        &self,
        input: CreateEmployeeInput,
    ) -> Result<employee::Model, ServiceError> {
        input.validate()?;
        if input.salary < Decimal::ZERO {
            return Err(ServiceError::ValidationError(
                "Salary cannot be negative".to_string(),
            ));
        }

        Ok(employee::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(input.name),
            job_title: Set(input.job_title),
            department: Set(input.department),
            salary: Set(input.salary),
            hired_on: Set(input.hired_on),
            user_id: Set(input.user_id),
            created_at: Set(Utc::now()),
        }
        .insert(self.db_pool.as_ref())
        .await?)
    }

    pub async fn list_employees(&self) -> Result<Vec<employee::Model>, ServiceError> {
        Ok(employee::Entity::find()
            .order_by_asc(employee::Column::Name)
            .all(self.db_pool.as_ref())
            .await?)
    }

    pub async fn get_employee(&self, id: Uuid) -> Result<employee::Model, ServiceError> {
        employee::Entity::find_by_id(id)
            .one(self.db_pool.as_ref())
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Employee {} not found", id)))
    }

    /// Appends a ledger entry. Debits may not push the derived balance
    /// below zero.
    #[instrument(skip(self, input))]
    pub async fn add_custody_entry(
        &self,
        employee_id: Uuid,
        actor: &AuthUser,
        input: CreateCustodyEntryInput,
    ) -> Result<CustodyStatement, ServiceError> {
        input.validate()?;
        if input.amount <= Decimal::ZERO {
            return Err(ServiceError::ValidationError(
                "Custody amounts must be positive".to_string(),
            ));
        }

        let holder = self.get_employee(employee_id).await?;
        let entries = self.entries_of(employee_id).await?;
        let balance = custody_balance(&entries);

        if input.entry_type == CustodyEntryType::Debit && input.amount > balance {
            return Err(ServiceError::InvalidOperation(format!(
                "Debit of {} exceeds custody balance of {}",
                input.amount, balance
            )));
        }

        custody_entry::ActiveModel {
            id: Set(Uuid::new_v4()),
            employee_id: Set(employee_id),
            entry_type: Set(input.entry_type),
            amount: Set(input.amount),
            reason: Set(input.reason),
            recorded_by: Set(actor.id),
            created_at: Set(Utc::now()),
        }
        .insert(self.db_pool.as_ref())
        .await?;

        self.custody_statement_for(holder).await
    }

    async fn entries_of(
        &self,
        employee_id: Uuid,
    ) -> Result<Vec<custody_entry::Model>, ServiceError> {
        Ok(custody_entry::Entity::find()
            .filter(custody_entry::Column::EmployeeId.eq(employee_id))
            .order_by_asc(custody_entry::Column::CreatedAt)
            .all(self.db_pool.as_ref())
            .await?)
    }

    pub async fn custody_statement(&self, employee_id: Uuid) -> Result<CustodyStatement, ServiceError> {
        let holder = self.get_employee(employee_id).await?;
        self.custody_statement_for(holder).await
    }

    async fn custody_statement_for(
        &self,
        holder: employee::Model,
    ) -> Result<CustodyStatement, ServiceError> {
        let entries = self.entries_of(holder.id).await?;
        let balance = custody_balance(&entries);
        Ok(CustodyStatement {
            employee: holder,
            entries,
            balance,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn entry(entry_type: CustodyEntryType, amount: Decimal) -> custody_entry::Model {
        custody_entry::Model {
            id: Uuid::new_v4(),
            employee_id: Uuid::new_v4(),
            entry_type,
            amount,
            reason: "test".to_string(),
            recorded_by: Uuid::new_v4(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn balance_is_credits_minus_debits() {
        let entries = vec![
            entry(CustodyEntryType::Credit, dec!(500)),
            entry(CustodyEntryType::Debit, dec!(120)),
            entry(CustodyEntryType::Credit, dec!(80)),
        ];
        assert_eq!(custody_balance(&entries), dec!(460));
    }

    #[test]
    fn empty_ledger_balances_to_zero() {
        assert_eq!(custody_balance(&[]), Decimal::ZERO);
    }
}
