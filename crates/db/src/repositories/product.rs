//! Product repository.

use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set,
};
use uuid::Uuid;

use super::RepoError;
use crate::entities::{
    products,
    sea_orm_active_enums::{ProductType, RecordStatus},
};

/// Fields accepted when upserting a product.
#[derive(Debug, Clone)]
pub struct ProductInput {
    /// Present for updates.
    pub id: Option<Uuid>,
    /// Product name.
    pub name: String,
    /// Physical, digital, or service.
    pub product_type: ProductType,
    /// Sale price.
    pub price: Decimal,
    /// Free-form grouping label.
    pub category: Option<String>,
    /// Lifecycle status.
    pub status: RecordStatus,
}

/// Product repository.
#[derive(Debug, Clone)]
pub struct ProductRepository {
    db: DatabaseConnection,
}

impl ProductRepository {
    /// Creates a new product repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates or updates a product.
    ///
    /// # Errors
    ///
    /// Returns `NotFound`/`TenantMismatch` for a bad `id`, or a database
    /// error.
    pub async fn upsert(
        &self,
        profile_id: Uuid,
        input: ProductInput,
    ) -> Result<products::Model, RepoError> {
        match input.id {
            Some(id) => {
                let existing = products::Entity::find_by_id(id)
                    .one(&self.db)
                    .await?
                    .ok_or_else(|| RepoError::not_found("product", id))?;
                if existing.business_profile_id != profile_id {
                    return Err(RepoError::tenant_mismatch("product"));
                }

                let mut model: products::ActiveModel = existing.into();
                model.name = Set(input.name);
                model.product_type = Set(input.product_type);
                model.price = Set(input.price);
                model.category = Set(input.category);
                model.status = Set(input.status);
                model.updated_at = Set(chrono::Utc::now().into());

                Ok(model.update(&self.db).await?)
            }
            None => {
                let now = chrono::Utc::now().into();
                let model = products::ActiveModel {
                    id: Set(Uuid::new_v4()),
                    business_profile_id: Set(profile_id),
                    name: Set(input.name),
                    product_type: Set(input.product_type),
                    price: Set(input.price),
                    category: Set(input.category),
                    status: Set(input.status),
                    created_at: Set(now),
                    updated_at: Set(now),
                };

                Ok(model.insert(&self.db).await?)
            }
        }
    }

    /// Lists all products for a profile by name.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list(&self, profile_id: Uuid) -> Result<Vec<products::Model>, DbErr> {
        products::Entity::find()
            .filter(products::Column::BusinessProfileId.eq(profile_id))
            .order_by_asc(products::Column::Name)
            .all(&self.db)
            .await
    }

    /// Deletes a product after checking ownership.
    ///
    /// # Errors
    ///
    /// Returns `NotFound`/`TenantMismatch` for a bad `id`.
    pub async fn delete(&self, profile_id: Uuid, id: Uuid) -> Result<products::Model, RepoError> {
        let existing = products::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| RepoError::not_found("product", id))?;
        if existing.business_profile_id != profile_id {
            return Err(RepoError::tenant_mismatch("product"));
        }

        products::Entity::delete_by_id(id).exec(&self.db).await?;

        Ok(existing)
    }
}
