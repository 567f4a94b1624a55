//! Payment method repository.
//!
//! The `details` JSON is validated against
//! `fiscora_core::payment::PaymentDetails` before it is stored, and its
//! discriminant must agree with the `method_type` column.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set,
};
use uuid::Uuid;

use fiscora_core::payment::PaymentDetails;

use super::RepoError;
use crate::entities::{payment_methods, sea_orm_active_enums::PaymentMethodType};

/// Fields accepted when upserting a payment method.
#[derive(Debug, Clone)]
pub struct PaymentMethodInput {
    /// Present for updates.
    pub id: Option<Uuid>,
    /// Typed details; the discriminant decides `method_type`.
    pub details: PaymentDetails,
    /// Whether this method is active.
    pub is_active: bool,
}

fn method_type_for(details: &PaymentDetails) -> PaymentMethodType {
    match details {
        PaymentDetails::Bank { .. } => PaymentMethodType::Bank,
        PaymentDetails::Card { .. } => PaymentMethodType::Card,
        PaymentDetails::Wallet { .. } => PaymentMethodType::Wallet,
        PaymentDetails::Other { .. } => PaymentMethodType::Other,
    }
}

/// Payment method repository.
#[derive(Debug, Clone)]
pub struct PaymentMethodRepository {
    db: DatabaseConnection,
}

impl PaymentMethodRepository {
    /// Creates a new payment method repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates or updates a payment method.
    ///
    /// # Errors
    ///
    /// Returns `NotFound`/`TenantMismatch` for a bad `id`, or a database
    /// error.
    pub async fn upsert(
        &self,
        profile_id: Uuid,
        input: PaymentMethodInput,
    ) -> Result<payment_methods::Model, RepoError> {
        let method_type = method_type_for(&input.details);
        let details_json = input.details.to_json();

        match input.id {
            Some(id) => {
                let existing = payment_methods::Entity::find_by_id(id)
                    .one(&self.db)
                    .await?
                    .ok_or_else(|| RepoError::not_found("payment method", id))?;
                if existing.business_profile_id != profile_id {
                    return Err(RepoError::tenant_mismatch("payment method"));
                }

                let mut model: payment_methods::ActiveModel = existing.into();
                model.method_type = Set(method_type);
                model.details = Set(details_json);
                model.is_active = Set(input.is_active);
                model.updated_at = Set(chrono::Utc::now().into());

                Ok(model.update(&self.db).await?)
            }
            None => {
                let now = chrono::Utc::now().into();
                let model = payment_methods::ActiveModel {
                    id: Set(Uuid::new_v4()),
                    business_profile_id: Set(profile_id),
                    method_type: Set(method_type),
                    details: Set(details_json),
                    is_active: Set(input.is_active),
                    created_at: Set(now),
                    updated_at: Set(now),
                };

                Ok(model.insert(&self.db).await?)
            }
        }
    }

    /// Lists all payment methods for a profile.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list(&self, profile_id: Uuid) -> Result<Vec<payment_methods::Model>, DbErr> {
        payment_methods::Entity::find()
            .filter(payment_methods::Column::BusinessProfileId.eq(profile_id))
            .order_by_asc(payment_methods::Column::CreatedAt)
            .all(&self.db)
            .await
    }

    /// Deletes a payment method after checking ownership.
    ///
    /// # Errors
    ///
    /// Returns `NotFound`/`TenantMismatch` for a bad `id`.
    pub async fn delete(
        &self,
        profile_id: Uuid,
        id: Uuid,
    ) -> Result<payment_methods::Model, RepoError> {
        let existing = payment_methods::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| RepoError::not_found("payment method", id))?;
        if existing.business_profile_id != profile_id {
            return Err(RepoError::tenant_mismatch("payment method"));
        }

        payment_methods::Entity::delete_by_id(id)
            .exec(&self.db)
            .await?;

        Ok(existing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn method_type_follows_details_variant() {
        let bank = PaymentDetails::Bank {
            bank_name: "First National".into(),
            account_number: "12345678".into(),
            routing_number: None,
        };
        assert_eq!(method_type_for(&bank), PaymentMethodType::Bank);

        let wallet = PaymentDetails::Wallet {
            provider: "paypal".into(),
            handle: "biz@example.com".into(),
        };
        assert_eq!(method_type_for(&wallet), PaymentMethodType::Wallet);
    }
}
