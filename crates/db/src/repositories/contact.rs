//! Business contact repository.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set,
};
use uuid::Uuid;

use super::RepoError;
use crate::entities::business_contacts;

/// Fields accepted when upserting a contact.
#[derive(Debug, Clone, Default)]
pub struct ContactInput {
    /// Present for updates.
    pub id: Option<Uuid>,
    /// Contact name.
    pub name: String,
    /// Role at the business, e.g. "accountant".
    pub role: Option<String>,
    /// Email address.
    pub email: Option<String>,
    /// Phone number.
    pub phone: Option<String>,
    /// Whether this is the primary contact.
    pub is_primary: bool,
    /// Whether this contact is active.
    pub is_active: bool,
}

/// Business contact repository.
#[derive(Debug, Clone)]
pub struct ContactRepository {
    db: DatabaseConnection,
}

impl ContactRepository {
    /// Creates a new contact repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates or updates a contact.
    ///
    /// # Errors
    ///
    /// Returns `NotFound`/`TenantMismatch` for a bad `id`, or a database
    /// error.
    pub async fn upsert(
        &self,
        profile_id: Uuid,
        input: ContactInput,
    ) -> Result<business_contacts::Model, RepoError> {
        match input.id {
            Some(id) => {
                let existing = business_contacts::Entity::find_by_id(id)
                    .one(&self.db)
                    .await?
                    .ok_or_else(|| RepoError::not_found("contact", id))?;
                if existing.business_profile_id != profile_id {
                    return Err(RepoError::tenant_mismatch("contact"));
                }

                let mut model: business_contacts::ActiveModel = existing.into();
                model.name = Set(input.name);
                model.role = Set(input.role);
                model.email = Set(input.email);
                model.phone = Set(input.phone);
                model.is_primary = Set(input.is_primary);
                model.is_active = Set(input.is_active);
                model.updated_at = Set(chrono::Utc::now().into());

                Ok(model.update(&self.db).await?)
            }
            None => {
                let now = chrono::Utc::now().into();
                let model = business_contacts::ActiveModel {
                    id: Set(Uuid::new_v4()),
                    business_profile_id: Set(profile_id),
                    name: Set(input.name),
                    role: Set(input.role),
                    email: Set(input.email),
                    phone: Set(input.phone),
                    is_primary: Set(input.is_primary),
                    is_active: Set(input.is_active),
                    created_at: Set(now),
                    updated_at: Set(now),
                };

                Ok(model.insert(&self.db).await?)
            }
        }
    }

    /// Lists all contacts for a profile, primary first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list(&self, profile_id: Uuid) -> Result<Vec<business_contacts::Model>, DbErr> {
        business_contacts::Entity::find()
            .filter(business_contacts::Column::BusinessProfileId.eq(profile_id))
            .order_by_desc(business_contacts::Column::IsPrimary)
            .order_by_asc(business_contacts::Column::Name)
            .all(&self.db)
            .await
    }

    /// Deletes a contact after checking ownership.
    ///
    /// # Errors
    ///
    /// Returns `NotFound`/`TenantMismatch` for a bad `id`.
    pub async fn delete(
        &self,
        profile_id: Uuid,
        id: Uuid,
    ) -> Result<business_contacts::Model, RepoError> {
        let existing = business_contacts::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| RepoError::not_found("contact", id))?;
        if existing.business_profile_id != profile_id {
            return Err(RepoError::tenant_mismatch("contact"));
        }

        business_contacts::Entity::delete_by_id(id)
            .exec(&self.db)
            .await?;

        Ok(existing)
    }
}
