//! Business location repository.
//!
//! Locations are the one entity with explicit soft-delete/reactivate
//! operations in addition to the standard contract.

use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set,
};
use uuid::Uuid;

use super::RepoError;
use crate::entities::business_locations;

/// Fields accepted when upserting a location.
#[derive(Debug, Clone, Default)]
pub struct LocationInput {
    /// Present for updates.
    pub id: Option<Uuid>,
    /// Display label, e.g. "Warehouse".
    pub label: Option<String>,
    /// Address line 1.
    pub address_line1: String,
    /// Address line 2.
    pub address_line2: Option<String>,
    /// City.
    pub city: String,
    /// State or province.
    pub state: Option<String>,
    /// Postal code.
    pub postal_code: Option<String>,
    /// Country.
    pub country: String,
    /// Latitude in decimal degrees.
    pub latitude: Option<Decimal>,
    /// Longitude in decimal degrees.
    pub longitude: Option<Decimal>,
    /// Whether this is the headquarters.
    pub is_headquarters: bool,
}

/// Business location repository.
#[derive(Debug, Clone)]
pub struct LocationRepository {
    db: DatabaseConnection,
}

impl LocationRepository {
    /// Creates a new location repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates or updates a location.
    ///
    /// # Errors
    ///
    /// Returns `NotFound`/`TenantMismatch` for a bad `id`, or a database
    /// error.
    pub async fn upsert(
        &self,
        profile_id: Uuid,
        input: LocationInput,
    ) -> Result<business_locations::Model, RepoError> {
        match input.id {
            Some(id) => {
                let existing = self.owned(profile_id, id).await?;

                let mut model: business_locations::ActiveModel = existing.into();
                model.label = Set(input.label);
                model.address_line1 = Set(input.address_line1);
                model.address_line2 = Set(input.address_line2);
                model.city = Set(input.city);
                model.state = Set(input.state);
                model.postal_code = Set(input.postal_code);
                model.country = Set(input.country);
                model.latitude = Set(input.latitude);
                model.longitude = Set(input.longitude);
                model.is_headquarters = Set(input.is_headquarters);
                model.updated_at = Set(chrono::Utc::now().into());

                Ok(model.update(&self.db).await?)
            }
            None => {
                let now = chrono::Utc::now().into();
                let model = business_locations::ActiveModel {
                    id: Set(Uuid::new_v4()),
                    business_profile_id: Set(profile_id),
                    label: Set(input.label),
                    address_line1: Set(input.address_line1),
                    address_line2: Set(input.address_line2),
                    city: Set(input.city),
                    state: Set(input.state),
                    postal_code: Set(input.postal_code),
                    country: Set(input.country),
                    latitude: Set(input.latitude),
                    longitude: Set(input.longitude),
                    is_headquarters: Set(input.is_headquarters),
                    is_active: Set(true),
                    created_at: Set(now),
                    updated_at: Set(now),
                };

                Ok(model.insert(&self.db).await?)
            }
        }
    }

    /// Lists all locations for a profile, headquarters first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list(&self, profile_id: Uuid) -> Result<Vec<business_locations::Model>, DbErr> {
        business_locations::Entity::find()
            .filter(business_locations::Column::BusinessProfileId.eq(profile_id))
            .order_by_desc(business_locations::Column::IsHeadquarters)
            .order_by_asc(business_locations::Column::City)
            .all(&self.db)
            .await
    }

    /// Soft-deletes a location.
    ///
    /// # Errors
    ///
    /// Returns `NotFound`/`TenantMismatch` for a bad `id`.
    pub async fn deactivate(
        &self,
        profile_id: Uuid,
        id: Uuid,
    ) -> Result<business_locations::Model, RepoError> {
        self.set_active(profile_id, id, false).await
    }

    /// Re-activates a soft-deleted location.
    ///
    /// # Errors
    ///
    /// Returns `NotFound`/`TenantMismatch` for a bad `id`.
    pub async fn reactivate(
        &self,
        profile_id: Uuid,
        id: Uuid,
    ) -> Result<business_locations::Model, RepoError> {
        self.set_active(profile_id, id, true).await
    }

    /// Hard-deletes a location after checking ownership.
    ///
    /// # Errors
    ///
    /// Returns `NotFound`/`TenantMismatch` for a bad `id`.
    pub async fn delete(
        &self,
        profile_id: Uuid,
        id: Uuid,
    ) -> Result<business_locations::Model, RepoError> {
        let existing = self.owned(profile_id, id).await?;

        business_locations::Entity::delete_by_id(id)
            .exec(&self.db)
            .await?;

        Ok(existing)
    }

    async fn set_active(
        &self,
        profile_id: Uuid,
        id: Uuid,
        active: bool,
    ) -> Result<business_locations::Model, RepoError> {
        let existing = self.owned(profile_id, id).await?;

        let mut model: business_locations::ActiveModel = existing.into();
        model.is_active = Set(active);
        model.updated_at = Set(chrono::Utc::now().into());

        Ok(model.update(&self.db).await?)
    }

    async fn owned(
        &self,
        profile_id: Uuid,
        id: Uuid,
    ) -> Result<business_locations::Model, RepoError> {
        let existing = business_locations::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| RepoError::not_found("location", id))?;
        if existing.business_profile_id != profile_id {
            return Err(RepoError::tenant_mismatch("location"));
        }
        Ok(existing)
    }
}
