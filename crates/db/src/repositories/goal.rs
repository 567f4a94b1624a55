//! Goal repository.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set,
};
use uuid::Uuid;

use super::RepoError;
use crate::entities::{goals, sea_orm_active_enums::GoalStatus};

/// Fields accepted when upserting a goal.
#[derive(Debug, Clone)]
pub struct GoalInput {
    /// Present for updates.
    pub id: Option<Uuid>,
    /// Goal title.
    pub title: String,
    /// Target amount.
    pub target_amount: Decimal,
    /// Progress so far.
    pub current_amount: Decimal,
    /// Optional deadline.
    pub deadline: Option<NaiveDate>,
    /// Lifecycle status.
    pub status: GoalStatus,
    /// Free-form grouping label.
    pub category: Option<String>,
}

/// Goal repository.
#[derive(Debug, Clone)]
pub struct GoalRepository {
    db: DatabaseConnection,
}

impl GoalRepository {
    /// Creates a new goal repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates or updates a goal.
    ///
    /// # Errors
    ///
    /// Returns `NotFound`/`TenantMismatch` for a bad `id`, or a database
    /// error.
    pub async fn upsert(
        &self,
        profile_id: Uuid,
        input: GoalInput,
    ) -> Result<goals::Model, RepoError> {
        match input.id {
            Some(id) => {
                let existing = goals::Entity::find_by_id(id)
                    .one(&self.db)
                    .await?
                    .ok_or_else(|| RepoError::not_found("goal", id))?;
                if existing.business_profile_id != profile_id {
                    return Err(RepoError::tenant_mismatch("goal"));
                }

                let mut model: goals::ActiveModel = existing.into();
                model.title = Set(input.title);
                model.target_amount = Set(input.target_amount);
                model.current_amount = Set(input.current_amount);
                model.deadline = Set(input.deadline);
                model.status = Set(input.status);
                model.category = Set(input.category);
                model.updated_at = Set(chrono::Utc::now().into());

                Ok(model.update(&self.db).await?)
            }
            None => {
                let now = chrono::Utc::now().into();
                let model = goals::ActiveModel {
                    id: Set(Uuid::new_v4()),
                    business_profile_id: Set(profile_id),
                    title: Set(input.title),
                    target_amount: Set(input.target_amount),
                    current_amount: Set(input.current_amount),
                    deadline: Set(input.deadline),
                    status: Set(input.status),
                    category: Set(input.category),
                    created_at: Set(now),
                    updated_at: Set(now),
                };

                Ok(model.insert(&self.db).await?)
            }
        }
    }

    /// Lists all goals for a profile, nearest deadline first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list(&self, profile_id: Uuid) -> Result<Vec<goals::Model>, DbErr> {
        goals::Entity::find()
            .filter(goals::Column::BusinessProfileId.eq(profile_id))
            .order_by_asc(goals::Column::Deadline)
            .all(&self.db)
            .await
    }

    /// Deletes a goal after checking ownership.
    ///
    /// # Errors
    ///
    /// Returns `NotFound`/`TenantMismatch` for a bad `id`.
    pub async fn delete(&self, profile_id: Uuid, id: Uuid) -> Result<goals::Model, RepoError> {
        let existing = goals::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| RepoError::not_found("goal", id))?;
        if existing.business_profile_id != profile_id {
            return Err(RepoError::tenant_mismatch("goal"));
        }

        goals::Entity::delete_by_id(id).exec(&self.db).await?;

        Ok(existing)
    }
}
