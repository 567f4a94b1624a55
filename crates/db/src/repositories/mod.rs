//! Repository abstractions for data access.
//!
//! Every entity repository implements the same contract:
//! - `upsert`: create when `id` is absent, ownership-checked update when
//!   present
//! - `list`: all rows scoped to the caller's business profile
//! - `delete`: fetch-then-compare the tenant before removing
//!
//! The tenant (business profile id) always comes from the caller's resolved
//! profile, never from request data.

pub mod balance_sheet;
pub mod budget;
pub mod contact;
pub mod expense;
pub mod goal;
pub mod information;
pub mod inventory;
pub mod invoice;
pub mod location;
pub mod payment_method;
pub mod product;
pub mod profile;
pub mod purchase_order;
pub mod report;
pub mod session;
pub mod supplier;
pub mod transaction;
pub mod user;

pub use balance_sheet::{BalanceSheetItemInput, BalanceSheetRepository};
pub use budget::{BudgetInput, BudgetRepository};
pub use contact::{ContactInput, ContactRepository};
pub use expense::{
    ExpenseCategoryInput, ExpenseInput, ExpenseRepository, ExpenseWithCategory,
};
pub use goal::{GoalInput, GoalRepository};
pub use information::{BusinessInformationInput, BusinessInformationRepository};
pub use inventory::{InventoryItemInput, InventoryRepository, InventoryWithProduct};
pub use invoice::{InvoiceInput, InvoiceRepository};
pub use location::{LocationInput, LocationRepository};
pub use payment_method::{PaymentMethodInput, PaymentMethodRepository};
pub use product::{ProductInput, ProductRepository};
pub use profile::{BusinessProfileInput, BusinessProfileRepository};
pub use purchase_order::{
    PurchaseOrderInput, PurchaseOrderRepository, PurchaseOrderWithSupplier,
};
pub use report::ReportRepository;
pub use session::SessionRepository;
pub use supplier::{SupplierInput, SupplierRepository};
pub use transaction::{TransactionFilter, TransactionInput, TransactionRepository};
pub use user::UserRepository;

use sea_orm::DbErr;
use thiserror::Error;
use uuid::Uuid;

/// Error type shared by every repository.
#[derive(Debug, Error)]
pub enum RepoError {
    /// No row with this id.
    #[error("{entity} not found: {id}")]
    NotFound {
        /// Entity name for the message.
        entity: &'static str,
        /// The id that was looked up.
        id: Uuid,
    },

    /// The row exists but belongs to a different business profile.
    #[error("{entity} does not belong to your business profile")]
    TenantMismatch {
        /// Entity name for the message.
        entity: &'static str,
    },

    /// The input is structurally wrong (e.g., payment details that do not
    /// match the method type).
    #[error("invalid {entity}: {reason}")]
    Invalid {
        /// Entity name for the message.
        entity: &'static str,
        /// What was wrong.
        reason: String,
    },

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

impl RepoError {
    /// Shorthand for `NotFound`.
    #[must_use]
    pub const fn not_found(entity: &'static str, id: Uuid) -> Self {
        Self::NotFound { entity, id }
    }

    /// Shorthand for `TenantMismatch`.
    #[must_use]
    pub const fn tenant_mismatch(entity: &'static str) -> Self {
        Self::TenantMismatch { entity }
    }
}
