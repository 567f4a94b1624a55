//! Business profile repository.
//!
//! The profile is the tenant root: every other repository scopes its queries
//! to a profile id resolved through `find_or_create_for_user`.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
};
use uuid::Uuid;

use super::RepoError;
use crate::entities::business_profiles;

/// Fields accepted when upserting a business profile.
#[derive(Debug, Clone, Default)]
pub struct BusinessProfileInput {
    /// Present for updates; must be the caller's own profile.
    pub id: Option<Uuid>,
    /// Company display name.
    pub company_name: String,
    /// Contact email.
    pub email: Option<String>,
    /// Contact phone.
    pub phone: Option<String>,
    /// Public website.
    pub website: Option<String>,
    /// Address line 1.
    pub address_line1: Option<String>,
    /// Address line 2.
    pub address_line2: Option<String>,
    /// City.
    pub city: Option<String>,
    /// State or province.
    pub state: Option<String>,
    /// Postal code.
    pub postal_code: Option<String>,
    /// Country.
    pub country: Option<String>,
    /// Branding logo URL.
    pub logo_url: Option<String>,
}

/// Business profile repository.
#[derive(Debug, Clone)]
pub struct BusinessProfileRepository {
    db: DatabaseConnection,
}

impl BusinessProfileRepository {
    /// Creates a new business profile repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Resolves the profile for a user, creating a minimal one on first
    /// access.
    ///
    /// The unique index on `user_id` makes the concurrent-first-call race
    /// safe: the insert loser re-reads the winner's row.
    ///
    /// # Errors
    ///
    /// Returns an error if the database round trips fail.
    pub async fn find_or_create_for_user(
        &self,
        user_id: Uuid,
    ) -> Result<business_profiles::Model, DbErr> {
        if let Some(profile) = self.find_by_user(user_id).await? {
            return Ok(profile);
        }

        let now = chrono::Utc::now().into();
        let fresh = business_profiles::ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(user_id),
            company_name: Set(String::new()),
            is_active: Set(true),
            is_verified: Set(false),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        match fresh.insert(&self.db).await {
            Ok(profile) => {
                tracing::info!(user_id = %user_id, profile_id = %profile.id, "Created business profile on first access");
                Ok(profile)
            }
            // Lost the race against a concurrent first call.
            Err(_) => self
                .find_by_user(user_id)
                .await?
                .ok_or_else(|| DbErr::RecordNotFound("business profile".to_string())),
        }
    }

    /// Finds a profile by its owning user.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_user(
        &self,
        user_id: Uuid,
    ) -> Result<Option<business_profiles::Model>, DbErr> {
        business_profiles::Entity::find()
            .filter(business_profiles::Column::UserId.eq(user_id))
            .one(&self.db)
            .await
    }

    /// Creates or updates the caller's profile.
    ///
    /// With an `id` the row must be the caller's own profile; without one the
    /// user must not already have a profile (one tenant per user).
    ///
    /// # Errors
    ///
    /// Returns `TenantMismatch` for someone else's profile id and `Invalid`
    /// when a second profile would be created.
    pub async fn upsert(
        &self,
        user_id: Uuid,
        input: BusinessProfileInput,
    ) -> Result<business_profiles::Model, RepoError> {
        let existing = self.find_by_user(user_id).await?;

        match input.id {
            Some(id) => {
                let Some(profile) = existing else {
                    return Err(RepoError::not_found("business profile", id));
                };
                if profile.id != id {
                    return Err(RepoError::tenant_mismatch("business profile"));
                }

                let mut model: business_profiles::ActiveModel = profile.into();
                model.company_name = Set(input.company_name);
                model.email = Set(input.email);
                model.phone = Set(input.phone);
                model.website = Set(input.website);
                model.address_line1 = Set(input.address_line1);
                model.address_line2 = Set(input.address_line2);
                model.city = Set(input.city);
                model.state = Set(input.state);
                model.postal_code = Set(input.postal_code);
                model.country = Set(input.country);
                model.logo_url = Set(input.logo_url);
                model.updated_at = Set(chrono::Utc::now().into());

                Ok(model.update(&self.db).await?)
            }
            None => {
                if existing.is_some() {
                    return Err(RepoError::Invalid {
                        entity: "business profile",
                        reason: "a profile already exists for this user".to_string(),
                    });
                }

                let now = chrono::Utc::now().into();
                let model = business_profiles::ActiveModel {
                    id: Set(Uuid::new_v4()),
                    user_id: Set(user_id),
                    company_name: Set(input.company_name),
                    email: Set(input.email),
                    phone: Set(input.phone),
                    website: Set(input.website),
                    address_line1: Set(input.address_line1),
                    address_line2: Set(input.address_line2),
                    city: Set(input.city),
                    state: Set(input.state),
                    postal_code: Set(input.postal_code),
                    country: Set(input.country),
                    logo_url: Set(input.logo_url),
                    is_active: Set(true),
                    is_verified: Set(false),
                    created_at: Set(now),
                    updated_at: Set(now),
                };

                Ok(model.insert(&self.db).await?)
            }
        }
    }

    /// Soft-deletes the profile by clearing `is_active`.
    ///
    /// # Errors
    ///
    /// Returns an error if the database update fails.
    pub async fn deactivate(
        &self,
        profile_id: Uuid,
    ) -> Result<business_profiles::Model, RepoError> {
        self.set_active(profile_id, false).await
    }

    /// Re-activates a soft-deleted profile.
    ///
    /// # Errors
    ///
    /// Returns an error if the database update fails.
    pub async fn reactivate(
        &self,
        profile_id: Uuid,
    ) -> Result<business_profiles::Model, RepoError> {
        self.set_active(profile_id, true).await
    }

    async fn set_active(
        &self,
        profile_id: Uuid,
        active: bool,
    ) -> Result<business_profiles::Model, RepoError> {
        let profile = business_profiles::Entity::find_by_id(profile_id)
            .one(&self.db)
            .await?
            .ok_or_else(|| RepoError::not_found("business profile", profile_id))?;

        let mut model: business_profiles::ActiveModel = profile.into();
        model.is_active = Set(active);
        model.updated_at = Set(chrono::Utc::now().into());

        Ok(model.update(&self.db).await?)
    }

    /// Hard-deletes the profile; the schema cascades to every scoped table.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if there is no such profile.
    pub async fn delete(&self, profile_id: Uuid) -> Result<business_profiles::Model, RepoError> {
        let profile = business_profiles::Entity::find_by_id(profile_id)
            .one(&self.db)
            .await?
            .ok_or_else(|| RepoError::not_found("business profile", profile_id))?;

        business_profiles::Entity::delete_by_id(profile_id)
            .exec(&self.db)
            .await?;

        Ok(profile)
    }
}
