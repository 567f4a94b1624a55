//! Inventory repository.

use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set,
};
use uuid::Uuid;

use super::RepoError;
use crate::entities::{inventory_items, products};

/// Fields accepted when upserting an inventory item.
#[derive(Debug, Clone)]
pub struct InventoryItemInput {
    /// Present for updates.
    pub id: Option<Uuid>,
    /// Tracked product; must belong to the caller's profile.
    pub product_id: Uuid,
    /// Units on hand.
    pub quantity: i32,
    /// Reorder threshold.
    pub min_stock: i32,
    /// Optional stock ceiling.
    pub max_stock: Option<i32>,
    /// Cost per unit.
    pub unit_cost: Decimal,
    /// Storage location label.
    pub location: Option<String>,
}

/// An inventory item with its product row for display.
#[derive(Debug, Clone)]
pub struct InventoryWithProduct {
    /// The inventory item.
    pub item: inventory_items::Model,
    /// The tracked product.
    pub product: products::Model,
}

/// Inventory repository.
#[derive(Debug, Clone)]
pub struct InventoryRepository {
    db: DatabaseConnection,
}

impl InventoryRepository {
    /// Creates a new inventory repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates or updates an inventory item.
    ///
    /// The referenced product must belong to the caller's profile.
    ///
    /// # Errors
    ///
    /// Returns `NotFound`/`TenantMismatch` for a bad item or product id,
    /// `Invalid` for negative stock numbers, or a database error.
    pub async fn upsert(
        &self,
        profile_id: Uuid,
        input: InventoryItemInput,
    ) -> Result<inventory_items::Model, RepoError> {
        if input.quantity < 0 || input.min_stock < 0 {
            return Err(RepoError::Invalid {
                entity: "inventory item",
                reason: "stock numbers cannot be negative".to_string(),
            });
        }

        let product = products::Entity::find_by_id(input.product_id)
            .one(&self.db)
            .await?
            .ok_or_else(|| RepoError::not_found("product", input.product_id))?;
        if product.business_profile_id != profile_id {
            return Err(RepoError::tenant_mismatch("product"));
        }

        match input.id {
            Some(id) => {
                let existing = inventory_items::Entity::find_by_id(id)
                    .one(&self.db)
                    .await?
                    .ok_or_else(|| RepoError::not_found("inventory item", id))?;
                if existing.business_profile_id != profile_id {
                    return Err(RepoError::tenant_mismatch("inventory item"));
                }

                let mut model: inventory_items::ActiveModel = existing.into();
                model.product_id = Set(input.product_id);
                model.quantity = Set(input.quantity);
                model.min_stock = Set(input.min_stock);
                model.max_stock = Set(input.max_stock);
                model.unit_cost = Set(input.unit_cost);
                model.location = Set(input.location);
                model.updated_at = Set(chrono::Utc::now().into());

                Ok(model.update(&self.db).await?)
            }
            None => {
                let now = chrono::Utc::now().into();
                let model = inventory_items::ActiveModel {
                    id: Set(Uuid::new_v4()),
                    business_profile_id: Set(profile_id),
                    product_id: Set(input.product_id),
                    quantity: Set(input.quantity),
                    min_stock: Set(input.min_stock),
                    max_stock: Set(input.max_stock),
                    unit_cost: Set(input.unit_cost),
                    location: Set(input.location),
                    created_at: Set(now),
                    updated_at: Set(now),
                };

                Ok(model.insert(&self.db).await?)
            }
        }
    }

    /// Lists all inventory items for a profile joined to their products.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list(&self, profile_id: Uuid) -> Result<Vec<InventoryWithProduct>, DbErr> {
        let rows = inventory_items::Entity::find()
            .find_also_related(products::Entity)
            .filter(inventory_items::Column::BusinessProfileId.eq(profile_id))
            .order_by_asc(products::Column::Name)
            .all(&self.db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(item, product)| {
                product.map(|product| InventoryWithProduct { item, product })
            })
            .collect())
    }

    /// Deletes an inventory item after checking ownership.
    ///
    /// # Errors
    ///
    /// Returns `NotFound`/`TenantMismatch` for a bad `id`.
    pub async fn delete(
        &self,
        profile_id: Uuid,
        id: Uuid,
    ) -> Result<inventory_items::Model, RepoError> {
        let existing = inventory_items::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| RepoError::not_found("inventory item", id))?;
        if existing.business_profile_id != profile_id {
            return Err(RepoError::tenant_mismatch("inventory item"));
        }

        inventory_items::Entity::delete_by_id(id)
            .exec(&self.db)
            .await?;

        Ok(existing)
    }
}
