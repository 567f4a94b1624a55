//! Purchase order repository.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set,
};
use uuid::Uuid;

use super::RepoError;
use crate::entities::{purchase_orders, sea_orm_active_enums::PurchaseOrderStatus, suppliers};

/// Fields accepted when upserting a purchase order.
#[derive(Debug, Clone)]
pub struct PurchaseOrderInput {
    /// Present for updates.
    pub id: Option<Uuid>,
    /// Supplier; must belong to the caller's profile.
    pub supplier_id: Uuid,
    /// Order number as shared with the supplier.
    pub order_number: String,
    /// Total order value.
    pub total_amount: Decimal,
    /// Lifecycle status.
    pub status: PurchaseOrderStatus,
    /// Date the order was placed.
    pub order_date: NaiveDate,
    /// Expected delivery date.
    pub expected_delivery_date: Option<NaiveDate>,
}

/// A purchase order with its supplier row for display.
#[derive(Debug, Clone)]
pub struct PurchaseOrderWithSupplier {
    /// The purchase order.
    pub order: purchase_orders::Model,
    /// The supplier it was placed with.
    pub supplier: suppliers::Model,
}

/// Purchase order repository.
#[derive(Debug, Clone)]
pub struct PurchaseOrderRepository {
    db: DatabaseConnection,
}

impl PurchaseOrderRepository {
    /// Creates a new purchase order repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates or updates a purchase order.
    ///
    /// The referenced supplier must belong to the caller's profile.
    ///
    /// # Errors
    ///
    /// Returns `NotFound`/`TenantMismatch` for a bad order or supplier id,
    /// or a database error.
    pub async fn upsert(
        &self,
        profile_id: Uuid,
        input: PurchaseOrderInput,
    ) -> Result<purchase_orders::Model, RepoError> {
        let supplier = suppliers::Entity::find_by_id(input.supplier_id)
            .one(&self.db)
            .await?
            .ok_or_else(|| RepoError::not_found("supplier", input.supplier_id))?;
        if supplier.business_profile_id != profile_id {
            return Err(RepoError::tenant_mismatch("supplier"));
        }

        match input.id {
            Some(id) => {
                let existing = purchase_orders::Entity::find_by_id(id)
                    .one(&self.db)
                    .await?
                    .ok_or_else(|| RepoError::not_found("purchase order", id))?;
                if existing.business_profile_id != profile_id {
                    return Err(RepoError::tenant_mismatch("purchase order"));
                }

                let mut model: purchase_orders::ActiveModel = existing.into();
                model.supplier_id = Set(input.supplier_id);
                model.order_number = Set(input.order_number);
                model.total_amount = Set(input.total_amount);
                model.status = Set(input.status);
                model.order_date = Set(input.order_date);
                model.expected_delivery_date = Set(input.expected_delivery_date);
                model.updated_at = Set(chrono::Utc::now().into());

                Ok(model.update(&self.db).await?)
            }
            None => {
                let now = chrono::Utc::now().into();
                let model = purchase_orders::ActiveModel {
                    id: Set(Uuid::new_v4()),
                    business_profile_id: Set(profile_id),
                    supplier_id: Set(input.supplier_id),
                    order_number: Set(input.order_number),
                    total_amount: Set(input.total_amount),
                    status: Set(input.status),
                    order_date: Set(input.order_date),
                    expected_delivery_date: Set(input.expected_delivery_date),
                    created_at: Set(now),
                    updated_at: Set(now),
                };

                Ok(model.insert(&self.db).await?)
            }
        }
    }

    /// Lists all purchase orders for a profile joined to their suppliers,
    /// newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list(&self, profile_id: Uuid) -> Result<Vec<PurchaseOrderWithSupplier>, DbErr> {
        let rows = purchase_orders::Entity::find()
            .find_also_related(suppliers::Entity)
            .filter(purchase_orders::Column::BusinessProfileId.eq(profile_id))
            .order_by_desc(purchase_orders::Column::OrderDate)
            .all(&self.db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(order, supplier)| {
                supplier.map(|supplier| PurchaseOrderWithSupplier { order, supplier })
            })
            .collect())
    }

    /// Deletes a purchase order after checking ownership.
    ///
    /// # Errors
    ///
    /// Returns `NotFound`/`TenantMismatch` for a bad `id`.
    pub async fn delete(
        &self,
        profile_id: Uuid,
        id: Uuid,
    ) -> Result<purchase_orders::Model, RepoError> {
        let existing = purchase_orders::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| RepoError::not_found("purchase order", id))?;
        if existing.business_profile_id != profile_id {
            return Err(RepoError::tenant_mismatch("purchase order"));
        }

        purchase_orders::Entity::delete_by_id(id)
            .exec(&self.db)
            .await?;

        Ok(existing)
    }
}
