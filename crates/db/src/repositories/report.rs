//! Report repository.
//!
//! Fetches the raw transaction rows and hands the set-union/summation to
//! `fiscora_core::report`, which is where the math is tested.

use chrono::{Datelike, NaiveDate, Utc};
use sea_orm::{ActiveEnum, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};
use uuid::Uuid;

use fiscora_core::report::{MoneyFlow, ProfitLossReport, TransactionSlice, profit_loss};

use crate::entities::{
    expense_categories, sea_orm_active_enums::TransactionType, transactions,
};

/// Report repository.
#[derive(Debug, Clone)]
pub struct ReportRepository {
    db: DatabaseConnection,
}

impl ReportRepository {
    /// Creates a new report repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Builds the profit/loss report for a profile.
    ///
    /// Defaults to calendar-year-to-date when no range is given.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn profit_loss(
        &self,
        profile_id: Uuid,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> Result<ProfitLossReport, DbErr> {
        let today = Utc::now().date_naive();
        let from = from.unwrap_or_else(|| {
            NaiveDate::from_ymd_opt(today.year(), 1, 1).unwrap_or(today)
        });
        let to = to.unwrap_or(today);

        let rows = transactions::Entity::find()
            .find_also_related(expense_categories::Entity)
            .filter(transactions::Column::BusinessProfileId.eq(profile_id))
            .filter(transactions::Column::TransactionDate.gte(from))
            .filter(transactions::Column::TransactionDate.lte(to))
            .all(&self.db)
            .await?;

        let slices: Vec<TransactionSlice> = rows
            .into_iter()
            .map(|(transaction, category)| TransactionSlice {
                category: category.map(|c| c.name.to_value()),
                flow: match transaction.transaction_type {
                    TransactionType::Payment => MoneyFlow::Revenue,
                    TransactionType::Payout => MoneyFlow::Expense,
                },
                amount: transaction.amount,
            })
            .collect();

        Ok(profit_loss(&slices))
    }
}
