//! Invoice repository.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set,
};
use uuid::Uuid;

use super::RepoError;
use crate::entities::{invoices, sea_orm_active_enums::InvoiceStatus};

/// Fields accepted when upserting an invoice.
#[derive(Debug, Clone)]
pub struct InvoiceInput {
    /// Present for updates.
    pub id: Option<Uuid>,
    /// Invoice number as shown to the customer.
    pub invoice_number: String,
    /// Customer name.
    pub customer_name: String,
    /// Invoiced amount.
    pub amount: Decimal,
    /// Lifecycle status.
    pub status: InvoiceStatus,
    /// Issue date.
    pub issue_date: NaiveDate,
    /// Optional due date.
    pub due_date: Option<NaiveDate>,
}

/// Invoice repository.
#[derive(Debug, Clone)]
pub struct InvoiceRepository {
    db: DatabaseConnection,
}

impl InvoiceRepository {
    /// Creates a new invoice repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates or updates an invoice.
    ///
    /// # Errors
    ///
    /// Returns `NotFound`/`TenantMismatch` for a bad `id`, or a database
    /// error.
    pub async fn upsert(
        &self,
        profile_id: Uuid,
        input: InvoiceInput,
    ) -> Result<invoices::Model, RepoError> {
        match input.id {
            Some(id) => {
                let existing = invoices::Entity::find_by_id(id)
                    .one(&self.db)
                    .await?
                    .ok_or_else(|| RepoError::not_found("invoice", id))?;
                if existing.business_profile_id != profile_id {
                    return Err(RepoError::tenant_mismatch("invoice"));
                }

                let mut model: invoices::ActiveModel = existing.into();
                model.invoice_number = Set(input.invoice_number);
                model.customer_name = Set(input.customer_name);
                model.amount = Set(input.amount);
                model.status = Set(input.status);
                model.issue_date = Set(input.issue_date);
                model.due_date = Set(input.due_date);
                model.updated_at = Set(chrono::Utc::now().into());

                Ok(model.update(&self.db).await?)
            }
            None => {
                let now = chrono::Utc::now().into();
                let model = invoices::ActiveModel {
                    id: Set(Uuid::new_v4()),
                    business_profile_id: Set(profile_id),
                    invoice_number: Set(input.invoice_number),
                    customer_name: Set(input.customer_name),
                    amount: Set(input.amount),
                    status: Set(input.status),
                    issue_date: Set(input.issue_date),
                    due_date: Set(input.due_date),
                    created_at: Set(now),
                    updated_at: Set(now),
                };

                Ok(model.insert(&self.db).await?)
            }
        }
    }

    /// Lists all invoices for a profile, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list(&self, profile_id: Uuid) -> Result<Vec<invoices::Model>, DbErr> {
        invoices::Entity::find()
            .filter(invoices::Column::BusinessProfileId.eq(profile_id))
            .order_by_desc(invoices::Column::IssueDate)
            .all(&self.db)
            .await
    }

    /// Deletes an invoice after checking ownership.
    ///
    /// # Errors
    ///
    /// Returns `NotFound`/`TenantMismatch` for a bad `id`.
    pub async fn delete(&self, profile_id: Uuid, id: Uuid) -> Result<invoices::Model, RepoError> {
        let existing = invoices::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| RepoError::not_found("invoice", id))?;
        if existing.business_profile_id != profile_id {
            return Err(RepoError::tenant_mismatch("invoice"));
        }

        invoices::Entity::delete_by_id(id).exec(&self.db).await?;

        Ok(existing)
    }
}
