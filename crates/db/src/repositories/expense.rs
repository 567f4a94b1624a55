//! Expense category and expense repositories.
//!
//! Expenses are scoped to their category; the category carries the tenant,
//! so every expense ownership check goes through its category row.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set,
};
use uuid::Uuid;

use super::RepoError;
use crate::entities::{
    expense_categories, expenses,
    sea_orm_active_enums::{ExpenseFrequency, RecordStatus, SpendingCategory},
};

/// Fields accepted when upserting an expense category.
#[derive(Debug, Clone)]
pub struct ExpenseCategoryInput {
    /// Present for updates.
    pub id: Option<Uuid>,
    /// One of the fixed spending categories.
    pub name: SpendingCategory,
    /// Lifecycle status.
    pub status: RecordStatus,
}

/// Fields accepted when upserting an expense.
#[derive(Debug, Clone)]
pub struct ExpenseInput {
    /// Present for updates.
    pub id: Option<Uuid>,
    /// Owning category; must belong to the caller's profile.
    pub expense_category_id: Uuid,
    /// Expense name.
    pub name: String,
    /// Recurrence.
    pub frequency: ExpenseFrequency,
    /// Lifecycle status.
    pub status: RecordStatus,
}

/// An expense with its category row for display.
#[derive(Debug, Clone)]
pub struct ExpenseWithCategory {
    /// The expense.
    pub expense: expenses::Model,
    /// Its owning category.
    pub category: expense_categories::Model,
}

/// Repository for expense categories and their expenses.
#[derive(Debug, Clone)]
pub struct ExpenseRepository {
    db: DatabaseConnection,
}

impl ExpenseRepository {
    /// Creates a new expense repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    // ------------------------------------------------------------------
    // Categories
    // ------------------------------------------------------------------

    /// Creates or updates an expense category.
    ///
    /// # Errors
    ///
    /// Returns `NotFound`/`TenantMismatch` for a bad `id`, or a database
    /// error.
    pub async fn upsert_category(
        &self,
        profile_id: Uuid,
        input: ExpenseCategoryInput,
    ) -> Result<expense_categories::Model, RepoError> {
        match input.id {
            Some(id) => {
                let existing = self.owned_category(profile_id, id).await?;

                let mut model: expense_categories::ActiveModel = existing.into();
                model.name = Set(input.name);
                model.status = Set(input.status);
                model.updated_at = Set(chrono::Utc::now().into());

                Ok(model.update(&self.db).await?)
            }
            None => {
                let now = chrono::Utc::now().into();
                let model = expense_categories::ActiveModel {
                    id: Set(Uuid::new_v4()),
                    business_profile_id: Set(profile_id),
                    name: Set(input.name),
                    status: Set(input.status),
                    created_at: Set(now),
                    updated_at: Set(now),
                };

                Ok(model.insert(&self.db).await?)
            }
        }
    }

    /// Lists all expense categories for a profile.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list_categories(
        &self,
        profile_id: Uuid,
    ) -> Result<Vec<expense_categories::Model>, DbErr> {
        expense_categories::Entity::find()
            .filter(expense_categories::Column::BusinessProfileId.eq(profile_id))
            .order_by_asc(expense_categories::Column::Name)
            .all(&self.db)
            .await
    }

    /// Deletes an expense category; its expenses go with it (cascade).
    ///
    /// # Errors
    ///
    /// Returns `NotFound`/`TenantMismatch` for a bad `id`.
    pub async fn delete_category(
        &self,
        profile_id: Uuid,
        id: Uuid,
    ) -> Result<expense_categories::Model, RepoError> {
        let existing = self.owned_category(profile_id, id).await?;

        expense_categories::Entity::delete_by_id(id)
            .exec(&self.db)
            .await?;

        Ok(existing)
    }

    // ------------------------------------------------------------------
    // Expenses
    // ------------------------------------------------------------------

    /// Creates or updates an expense.
    ///
    /// Both the target category and (for updates) the current category must
    /// belong to the caller's profile.
    ///
    /// # Errors
    ///
    /// Returns `NotFound`/`TenantMismatch` for a bad expense or category id.
    pub async fn upsert_expense(
        &self,
        profile_id: Uuid,
        input: ExpenseInput,
    ) -> Result<expenses::Model, RepoError> {
        // The category the expense is being attached to.
        self.owned_category(profile_id, input.expense_category_id)
            .await?;

        match input.id {
            Some(id) => {
                let existing = self.owned_expense(profile_id, id).await?;

                let mut model: expenses::ActiveModel = existing.into();
                model.expense_category_id = Set(input.expense_category_id);
                model.name = Set(input.name);
                model.frequency = Set(input.frequency);
                model.status = Set(input.status);
                model.updated_at = Set(chrono::Utc::now().into());

                Ok(model.update(&self.db).await?)
            }
            None => {
                let now = chrono::Utc::now().into();
                let model = expenses::ActiveModel {
                    id: Set(Uuid::new_v4()),
                    expense_category_id: Set(input.expense_category_id),
                    name: Set(input.name),
                    frequency: Set(input.frequency),
                    status: Set(input.status),
                    created_at: Set(now),
                    updated_at: Set(now),
                };

                Ok(model.insert(&self.db).await?)
            }
        }
    }

    /// Lists all expenses for a profile joined to their categories.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list_expenses(
        &self,
        profile_id: Uuid,
    ) -> Result<Vec<ExpenseWithCategory>, DbErr> {
        let rows = expenses::Entity::find()
            .find_also_related(expense_categories::Entity)
            .filter(expense_categories::Column::BusinessProfileId.eq(profile_id))
            .order_by_asc(expenses::Column::Name)
            .all(&self.db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(expense, category)| {
                category.map(|category| ExpenseWithCategory { expense, category })
            })
            .collect())
    }

    /// Deletes an expense after checking ownership through its category.
    ///
    /// # Errors
    ///
    /// Returns `NotFound`/`TenantMismatch` for a bad `id`.
    pub async fn delete_expense(
        &self,
        profile_id: Uuid,
        id: Uuid,
    ) -> Result<expenses::Model, RepoError> {
        let existing = self.owned_expense(profile_id, id).await?;

        expenses::Entity::delete_by_id(id).exec(&self.db).await?;

        Ok(existing)
    }

    // ------------------------------------------------------------------
    // Ownership helpers
    // ------------------------------------------------------------------

    async fn owned_category(
        &self,
        profile_id: Uuid,
        id: Uuid,
    ) -> Result<expense_categories::Model, RepoError> {
        let category = expense_categories::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| RepoError::not_found("expense category", id))?;
        if category.business_profile_id != profile_id {
            return Err(RepoError::tenant_mismatch("expense category"));
        }
        Ok(category)
    }

    async fn owned_expense(
        &self,
        profile_id: Uuid,
        id: Uuid,
    ) -> Result<expenses::Model, RepoError> {
        let expense = expenses::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| RepoError::not_found("expense", id))?;

        // Tenant lives on the category row.
        self.owned_category(profile_id, expense.expense_category_id)
            .await
            .map_err(|e| match e {
                RepoError::TenantMismatch { .. } => RepoError::tenant_mismatch("expense"),
                other => other,
            })?;

        Ok(expense)
    }
}
