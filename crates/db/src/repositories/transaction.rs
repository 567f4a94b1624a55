//! Transaction repository.
//!
//! A transaction and its cash flow are one unit here: the cash flow row is
//! written, rewritten, and removed inside the same database transaction as
//! the transaction row, with its direction derived from the transaction
//! type. The original client-side two-call pairing cannot leave a
//! half-written pair behind.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DatabaseTransaction, DbErr, EntityTrait,
    QueryFilter, QueryOrder, Set, TransactionTrait,
};
use uuid::Uuid;

use super::RepoError;
use crate::entities::{
    cash_flows, expense_categories, payment_methods,
    sea_orm_active_enums::{FlowDirection, TransactionType},
    transactions,
};

/// Derives the cash flow direction for a transaction type.
///
/// Money received (PAYMENT) flows in; money paid out (PAYOUT) flows out.
#[must_use]
pub const fn derive_flow_direction(transaction_type: &TransactionType) -> FlowDirection {
    match transaction_type {
        TransactionType::Payment => FlowDirection::Incoming,
        TransactionType::Payout => FlowDirection::Outgoing,
    }
}

/// Fields accepted when upserting a transaction.
#[derive(Debug, Clone)]
pub struct TransactionInput {
    /// Present for updates.
    pub id: Option<Uuid>,
    /// Optional payment method; must belong to the caller's profile.
    pub payment_method_id: Option<Uuid>,
    /// Optional expense category; must belong to the caller's profile.
    pub expense_category_id: Option<Uuid>,
    /// PAYMENT or PAYOUT.
    pub transaction_type: TransactionType,
    /// Monetary amount, non-negative.
    pub amount: Decimal,
    /// Date the transaction occurred.
    pub transaction_date: NaiveDate,
    /// External reference, e.g. a receipt number.
    pub reference: Option<String>,
    /// Free-form description.
    pub description: Option<String>,
}

/// Filter options for listing transactions.
#[derive(Debug, Clone, Default)]
pub struct TransactionFilter {
    /// Start of the date range (inclusive).
    pub from: Option<NaiveDate>,
    /// End of the date range (inclusive).
    pub to: Option<NaiveDate>,
    /// Restrict to one transaction type.
    pub transaction_type: Option<TransactionType>,
}

/// Transaction repository.
#[derive(Debug, Clone)]
pub struct TransactionRepository {
    db: DatabaseConnection,
}

impl TransactionRepository {
    /// Creates a new transaction repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates or updates a transaction together with its cash flow.
    ///
    /// # Errors
    ///
    /// Returns `Invalid` for a negative amount, `NotFound`/`TenantMismatch`
    /// for bad ids (the transaction itself or a referenced payment method /
    /// expense category), or a database error.
    pub async fn upsert(
        &self,
        profile_id: Uuid,
        input: TransactionInput,
    ) -> Result<transactions::Model, RepoError> {
        if input.amount < Decimal::ZERO {
            return Err(RepoError::Invalid {
                entity: "transaction",
                reason: "amount cannot be negative".to_string(),
            });
        }

        self.check_references(profile_id, &input).await?;

        let txn = self.db.begin().await?;

        let written = match input.id {
            Some(id) => {
                let existing = transactions::Entity::find_by_id(id)
                    .one(&txn)
                    .await?
                    .ok_or_else(|| RepoError::not_found("transaction", id))?;
                if existing.business_profile_id != profile_id {
                    return Err(RepoError::tenant_mismatch("transaction"));
                }

                let mut model: transactions::ActiveModel = existing.into();
                model.payment_method_id = Set(input.payment_method_id);
                model.expense_category_id = Set(input.expense_category_id);
                model.transaction_type = Set(input.transaction_type.clone());
                model.amount = Set(input.amount);
                model.transaction_date = Set(input.transaction_date);
                model.reference = Set(input.reference.clone());
                model.description = Set(input.description.clone());
                model.updated_at = Set(chrono::Utc::now().into());

                model.update(&txn).await?
            }
            None => {
                let now = chrono::Utc::now().into();
                let model = transactions::ActiveModel {
                    id: Set(Uuid::new_v4()),
                    business_profile_id: Set(profile_id),
                    payment_method_id: Set(input.payment_method_id),
                    expense_category_id: Set(input.expense_category_id),
                    transaction_type: Set(input.transaction_type.clone()),
                    amount: Set(input.amount),
                    transaction_date: Set(input.transaction_date),
                    reference: Set(input.reference.clone()),
                    description: Set(input.description.clone()),
                    created_at: Set(now),
                    updated_at: Set(now),
                };

                model.insert(&txn).await?
            }
        };

        Self::write_cash_flow(&txn, &written).await?;

        txn.commit().await?;

        Ok(written)
    }

    /// Lists transactions for a profile, newest first, with optional
    /// date-range and type filters.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list(
        &self,
        profile_id: Uuid,
        filter: &TransactionFilter,
    ) -> Result<Vec<transactions::Model>, DbErr> {
        let mut query = transactions::Entity::find()
            .filter(transactions::Column::BusinessProfileId.eq(profile_id));

        if let Some(from) = filter.from {
            query = query.filter(transactions::Column::TransactionDate.gte(from));
        }
        if let Some(to) = filter.to {
            query = query.filter(transactions::Column::TransactionDate.lte(to));
        }
        if let Some(transaction_type) = &filter.transaction_type {
            query = query
                .filter(transactions::Column::TransactionType.eq(transaction_type.clone()));
        }

        query
            .order_by_desc(transactions::Column::TransactionDate)
            .all(&self.db)
            .await
    }

    /// Deletes a transaction and its cash flow in one database transaction.
    ///
    /// # Errors
    ///
    /// Returns `NotFound`/`TenantMismatch` for a bad `id`.
    pub async fn delete(
        &self,
        profile_id: Uuid,
        id: Uuid,
    ) -> Result<transactions::Model, RepoError> {
        let existing = transactions::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| RepoError::not_found("transaction", id))?;
        if existing.business_profile_id != profile_id {
            return Err(RepoError::tenant_mismatch("transaction"));
        }

        let txn = self.db.begin().await?;

        cash_flows::Entity::delete_many()
            .filter(cash_flows::Column::TransactionId.eq(id))
            .exec(&txn)
            .await?;
        transactions::Entity::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;

        Ok(existing)
    }

    /// Lists cash flows for a profile, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list_cash_flows(&self, profile_id: Uuid) -> Result<Vec<cash_flows::Model>, DbErr> {
        cash_flows::Entity::find()
            .filter(cash_flows::Column::BusinessProfileId.eq(profile_id))
            .order_by_desc(cash_flows::Column::FlowDate)
            .all(&self.db)
            .await
    }

    /// Inserts or rewrites the cash flow row mirroring a transaction.
    async fn write_cash_flow(
        txn: &DatabaseTransaction,
        transaction: &transactions::Model,
    ) -> Result<(), RepoError> {
        let direction = derive_flow_direction(&transaction.transaction_type);
        let now: chrono::DateTime<chrono::FixedOffset> = chrono::Utc::now().into();

        let existing = cash_flows::Entity::find()
            .filter(cash_flows::Column::TransactionId.eq(transaction.id))
            .one(txn)
            .await?;

        match existing {
            Some(flow) => {
                let mut model: cash_flows::ActiveModel = flow.into();
                model.direction = Set(direction);
                model.amount = Set(transaction.amount);
                model.flow_date = Set(transaction.transaction_date);
                model.updated_at = Set(now);
                model.update(txn).await?;
            }
            None => {
                let model = cash_flows::ActiveModel {
                    id: Set(Uuid::new_v4()),
                    business_profile_id: Set(transaction.business_profile_id),
                    transaction_id: Set(transaction.id),
                    direction: Set(direction),
                    amount: Set(transaction.amount),
                    flow_date: Set(transaction.transaction_date),
                    created_at: Set(now),
                    updated_at: Set(now),
                };
                model.insert(txn).await?;
            }
        }

        Ok(())
    }

    /// Checks that referenced rows belong to the caller's profile.
    async fn check_references(
        &self,
        profile_id: Uuid,
        input: &TransactionInput,
    ) -> Result<(), RepoError> {
        if let Some(pm_id) = input.payment_method_id {
            let method = payment_methods::Entity::find_by_id(pm_id)
                .one(&self.db)
                .await?
                .ok_or_else(|| RepoError::not_found("payment method", pm_id))?;
            if method.business_profile_id != profile_id {
                return Err(RepoError::tenant_mismatch("payment method"));
            }
        }

        if let Some(cat_id) = input.expense_category_id {
            let category = expense_categories::Entity::find_by_id(cat_id)
                .one(&self.db)
                .await?
                .ok_or_else(|| RepoError::not_found("expense category", cat_id))?;
            if category.business_profile_id != profile_id {
                return Err(RepoError::tenant_mismatch("expense category"));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payment_flows_in() {
        assert_eq!(
            derive_flow_direction(&TransactionType::Payment),
            FlowDirection::Incoming
        );
    }

    #[test]
    fn payout_flows_out() {
        assert_eq!(
            derive_flow_direction(&TransactionType::Payout),
            FlowDirection::Outgoing
        );
    }
}
