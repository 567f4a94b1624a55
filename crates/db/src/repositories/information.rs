//! Business information repository (1:1 with the profile).

use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
};
use uuid::Uuid;

use super::RepoError;
use crate::entities::business_information;

/// Fields accepted when upserting business information.
#[derive(Debug, Clone, Default)]
pub struct BusinessInformationInput {
    /// Tax identifier.
    pub tax_id: Option<String>,
    /// Company registration number.
    pub registration_number: Option<String>,
    /// ISO 4217 currency code.
    pub currency: String,
    /// BCP 47 locale tag, e.g. "en-US".
    pub locale: Option<String>,
    /// Month (1-12) the fiscal year starts in.
    pub fiscal_year_start_month: i16,
    /// Free-form compliance notes.
    pub compliance_notes: Option<String>,
}

/// Business information repository.
///
/// Keyed on the profile id rather than an optional row id: the table is 1:1
/// with the profile, so the upsert target is always unambiguous.
#[derive(Debug, Clone)]
pub struct BusinessInformationRepository {
    db: DatabaseConnection,
}

impl BusinessInformationRepository {
    /// Creates a new business information repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Fetches the information row for a profile, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn get(
        &self,
        profile_id: Uuid,
    ) -> Result<Option<business_information::Model>, DbErr> {
        business_information::Entity::find()
            .filter(business_information::Column::BusinessProfileId.eq(profile_id))
            .one(&self.db)
            .await
    }

    /// Creates or updates the information row for a profile.
    ///
    /// # Errors
    ///
    /// Returns `Invalid` for an out-of-range fiscal month, or a database
    /// error.
    pub async fn upsert(
        &self,
        profile_id: Uuid,
        input: BusinessInformationInput,
    ) -> Result<business_information::Model, RepoError> {
        if !(1..=12).contains(&input.fiscal_year_start_month) {
            return Err(RepoError::Invalid {
                entity: "business information",
                reason: format!(
                    "fiscal_year_start_month must be 1-12, got {}",
                    input.fiscal_year_start_month
                ),
            });
        }

        match self.get(profile_id).await? {
            Some(existing) => {
                let mut model: business_information::ActiveModel = existing.into();
                model.tax_id = Set(input.tax_id);
                model.registration_number = Set(input.registration_number);
                model.currency = Set(input.currency);
                model.locale = Set(input.locale);
                model.fiscal_year_start_month = Set(input.fiscal_year_start_month);
                model.compliance_notes = Set(input.compliance_notes);
                model.updated_at = Set(chrono::Utc::now().into());

                Ok(model.update(&self.db).await?)
            }
            None => {
                let now = chrono::Utc::now().into();
                let model = business_information::ActiveModel {
                    id: Set(Uuid::new_v4()),
                    business_profile_id: Set(profile_id),
                    tax_id: Set(input.tax_id),
                    registration_number: Set(input.registration_number),
                    currency: Set(input.currency),
                    locale: Set(input.locale),
                    fiscal_year_start_month: Set(input.fiscal_year_start_month),
                    compliance_notes: Set(input.compliance_notes),
                    created_at: Set(now),
                    updated_at: Set(now),
                };

                Ok(model.insert(&self.db).await?)
            }
        }
    }

    /// Deletes the information row for a profile.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the profile has no information row.
    pub async fn delete(&self, profile_id: Uuid) -> Result<business_information::Model, RepoError> {
        let existing = self
            .get(profile_id)
            .await?
            .ok_or_else(|| RepoError::not_found("business information", profile_id))?;

        business_information::Entity::delete_by_id(existing.id)
            .exec(&self.db)
            .await?;

        Ok(existing)
    }
}
