//! Balance sheet item repository.

use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set,
};
use uuid::Uuid;

use super::RepoError;
use crate::entities::{balance_sheet_items, sea_orm_active_enums::BalanceItemType};

/// Fields accepted when upserting a balance sheet item.
#[derive(Debug, Clone)]
pub struct BalanceSheetItemInput {
    /// Present for updates.
    pub id: Option<Uuid>,
    /// Item title.
    pub title: String,
    /// Longer description.
    pub description: Option<String>,
    /// Item amount; may be negative for contra items.
    pub amount: Decimal,
    /// Asset, liability, or equity.
    pub item_type: BalanceItemType,
}

/// Balance sheet item repository.
#[derive(Debug, Clone)]
pub struct BalanceSheetRepository {
    db: DatabaseConnection,
}

impl BalanceSheetRepository {
    /// Creates a new balance sheet repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates or updates a balance sheet item.
    ///
    /// # Errors
    ///
    /// Returns `NotFound`/`TenantMismatch` for a bad `id`, or a database
    /// error.
    pub async fn upsert(
        &self,
        profile_id: Uuid,
        input: BalanceSheetItemInput,
    ) -> Result<balance_sheet_items::Model, RepoError> {
        match input.id {
            Some(id) => {
                let existing = balance_sheet_items::Entity::find_by_id(id)
                    .one(&self.db)
                    .await?
                    .ok_or_else(|| RepoError::not_found("balance sheet item", id))?;
                if existing.business_profile_id != profile_id {
                    return Err(RepoError::tenant_mismatch("balance sheet item"));
                }

                let mut model: balance_sheet_items::ActiveModel = existing.into();
                model.title = Set(input.title);
                model.description = Set(input.description);
                model.amount = Set(input.amount);
                model.item_type = Set(input.item_type);
                model.updated_at = Set(chrono::Utc::now().into());

                Ok(model.update(&self.db).await?)
            }
            None => {
                let now = chrono::Utc::now().into();
                let model = balance_sheet_items::ActiveModel {
                    id: Set(Uuid::new_v4()),
                    business_profile_id: Set(profile_id),
                    title: Set(input.title),
                    description: Set(input.description),
                    amount: Set(input.amount),
                    item_type: Set(input.item_type),
                    created_at: Set(now),
                    updated_at: Set(now),
                };

                Ok(model.insert(&self.db).await?)
            }
        }
    }

    /// Lists all balance sheet items for a profile, grouped by type.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list(&self, profile_id: Uuid) -> Result<Vec<balance_sheet_items::Model>, DbErr> {
        balance_sheet_items::Entity::find()
            .filter(balance_sheet_items::Column::BusinessProfileId.eq(profile_id))
            .order_by_asc(balance_sheet_items::Column::ItemType)
            .order_by_asc(balance_sheet_items::Column::Title)
            .all(&self.db)
            .await
    }

    /// Deletes a balance sheet item after checking ownership.
    ///
    /// # Errors
    ///
    /// Returns `NotFound`/`TenantMismatch` for a bad `id`.
    pub async fn delete(
        &self,
        profile_id: Uuid,
        id: Uuid,
    ) -> Result<balance_sheet_items::Model, RepoError> {
        let existing = balance_sheet_items::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| RepoError::not_found("balance sheet item", id))?;
        if existing.business_profile_id != profile_id {
            return Err(RepoError::tenant_mismatch("balance sheet item"));
        }

        balance_sheet_items::Entity::delete_by_id(id)
            .exec(&self.db)
            .await?;

        Ok(existing)
    }
}
