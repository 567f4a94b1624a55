//! Supplier repository.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set,
};
use uuid::Uuid;

use super::RepoError;
use crate::entities::{sea_orm_active_enums::RecordStatus, suppliers};

/// Fields accepted when upserting a supplier.
#[derive(Debug, Clone)]
pub struct SupplierInput {
    /// Present for updates.
    pub id: Option<Uuid>,
    /// Supplier company name.
    pub name: String,
    /// Contact person.
    pub contact_name: Option<String>,
    /// Email address.
    pub email: Option<String>,
    /// Phone number.
    pub phone: Option<String>,
    /// Lifecycle status.
    pub status: RecordStatus,
}

/// Supplier repository.
#[derive(Debug, Clone)]
pub struct SupplierRepository {
    db: DatabaseConnection,
}

impl SupplierRepository {
    /// Creates a new supplier repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates or updates a supplier.
    ///
    /// # Errors
    ///
    /// Returns `NotFound`/`TenantMismatch` for a bad `id`, or a database
    /// error.
    pub async fn upsert(
        &self,
        profile_id: Uuid,
        input: SupplierInput,
    ) -> Result<suppliers::Model, RepoError> {
        match input.id {
            Some(id) => {
                let existing = suppliers::Entity::find_by_id(id)
                    .one(&self.db)
                    .await?
                    .ok_or_else(|| RepoError::not_found("supplier", id))?;
                if existing.business_profile_id != profile_id {
                    return Err(RepoError::tenant_mismatch("supplier"));
                }

                let mut model: suppliers::ActiveModel = existing.into();
                model.name = Set(input.name);
                model.contact_name = Set(input.contact_name);
                model.email = Set(input.email);
                model.phone = Set(input.phone);
                model.status = Set(input.status);
                model.updated_at = Set(chrono::Utc::now().into());

                Ok(model.update(&self.db).await?)
            }
            None => {
                let now = chrono::Utc::now().into();
                let model = suppliers::ActiveModel {
                    id: Set(Uuid::new_v4()),
                    business_profile_id: Set(profile_id),
                    name: Set(input.name),
                    contact_name: Set(input.contact_name),
                    email: Set(input.email),
                    phone: Set(input.phone),
                    status: Set(input.status),
                    created_at: Set(now),
                    updated_at: Set(now),
                };

                Ok(model.insert(&self.db).await?)
            }
        }
    }

    /// Lists all suppliers for a profile by name.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list(&self, profile_id: Uuid) -> Result<Vec<suppliers::Model>, DbErr> {
        suppliers::Entity::find()
            .filter(suppliers::Column::BusinessProfileId.eq(profile_id))
            .order_by_asc(suppliers::Column::Name)
            .all(&self.db)
            .await
    }

    /// Deletes a supplier after checking ownership.
    ///
    /// # Errors
    ///
    /// Returns `NotFound`/`TenantMismatch` for a bad `id`.
    pub async fn delete(&self, profile_id: Uuid, id: Uuid) -> Result<suppliers::Model, RepoError> {
        let existing = suppliers::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| RepoError::not_found("supplier", id))?;
        if existing.business_profile_id != profile_id {
            return Err(RepoError::tenant_mismatch("supplier"));
        }

        suppliers::Entity::delete_by_id(id).exec(&self.db).await?;

        Ok(existing)
    }
}
