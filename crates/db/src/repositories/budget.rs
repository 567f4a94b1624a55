//! Budget repository.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set,
};
use uuid::Uuid;

use super::RepoError;
use crate::entities::{budgets, sea_orm_active_enums::SpendingCategory};

/// Fields accepted when upserting a budget.
#[derive(Debug, Clone)]
pub struct BudgetInput {
    /// Present for updates.
    pub id: Option<Uuid>,
    /// Spending category this budget covers.
    pub category: SpendingCategory,
    /// Amount allocated for the period.
    pub allocated_amount: Decimal,
    /// Amount spent so far.
    pub spent_amount: Decimal,
    /// Period start.
    pub period_start: NaiveDate,
    /// Period end (inclusive).
    pub period_end: NaiveDate,
}

/// Budget repository.
#[derive(Debug, Clone)]
pub struct BudgetRepository {
    db: DatabaseConnection,
}

impl BudgetRepository {
    /// Creates a new budget repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates or updates a budget.
    ///
    /// # Errors
    ///
    /// Returns `Invalid` for an inverted period, `NotFound`/`TenantMismatch`
    /// for a bad `id`, or a database error.
    pub async fn upsert(
        &self,
        profile_id: Uuid,
        input: BudgetInput,
    ) -> Result<budgets::Model, RepoError> {
        if input.period_end < input.period_start {
            return Err(RepoError::Invalid {
                entity: "budget",
                reason: "period_end is before period_start".to_string(),
            });
        }

        match input.id {
            Some(id) => {
                let existing = budgets::Entity::find_by_id(id)
                    .one(&self.db)
                    .await?
                    .ok_or_else(|| RepoError::not_found("budget", id))?;
                if existing.business_profile_id != profile_id {
                    return Err(RepoError::tenant_mismatch("budget"));
                }

                let mut model: budgets::ActiveModel = existing.into();
                model.category = Set(input.category);
                model.allocated_amount = Set(input.allocated_amount);
                model.spent_amount = Set(input.spent_amount);
                model.period_start = Set(input.period_start);
                model.period_end = Set(input.period_end);
                model.updated_at = Set(chrono::Utc::now().into());

                Ok(model.update(&self.db).await?)
            }
            None => {
                let now = chrono::Utc::now().into();
                let model = budgets::ActiveModel {
                    id: Set(Uuid::new_v4()),
                    business_profile_id: Set(profile_id),
                    category: Set(input.category),
                    allocated_amount: Set(input.allocated_amount),
                    spent_amount: Set(input.spent_amount),
                    period_start: Set(input.period_start),
                    period_end: Set(input.period_end),
                    created_at: Set(now),
                    updated_at: Set(now),
                };

                Ok(model.insert(&self.db).await?)
            }
        }
    }

    /// Lists all budgets for a profile, newest period first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list(&self, profile_id: Uuid) -> Result<Vec<budgets::Model>, DbErr> {
        budgets::Entity::find()
            .filter(budgets::Column::BusinessProfileId.eq(profile_id))
            .order_by_desc(budgets::Column::PeriodStart)
            .all(&self.db)
            .await
    }

    /// Deletes a budget after checking ownership.
    ///
    /// # Errors
    ///
    /// Returns `NotFound`/`TenantMismatch` for a bad `id`.
    pub async fn delete(&self, profile_id: Uuid, id: Uuid) -> Result<budgets::Model, RepoError> {
        let existing = budgets::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| RepoError::not_found("budget", id))?;
        if existing.business_profile_id != profile_id {
            return Err(RepoError::tenant_mismatch("budget"));
        }

        budgets::Entity::delete_by_id(id).exec(&self.db).await?;

        Ok(existing)
    }
}
