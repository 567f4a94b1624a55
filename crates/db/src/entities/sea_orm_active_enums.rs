//! Active enums mapped to PostgreSQL enum types.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Whether money came in or went out.
#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "transaction_type")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionType {
    /// Money received by the business.
    #[sea_orm(string_value = "PAYMENT")]
    Payment,
    /// Money paid out by the business.
    #[sea_orm(string_value = "PAYOUT")]
    Payout,
}

/// Direction of a cash flow, derived from its transaction's type.
#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "flow_direction")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FlowDirection {
    /// Cash entering the business.
    #[sea_orm(string_value = "INCOMING")]
    Incoming,
    /// Cash leaving the business.
    #[sea_orm(string_value = "OUTGOING")]
    Outgoing,
}

/// The fixed set of spending categories, shared by expense categories
/// and budgets.
#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "spending_category")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SpendingCategory {
    /// Rent and leases.
    #[sea_orm(string_value = "RENT")]
    Rent,
    /// Electricity, water, internet.
    #[sea_orm(string_value = "UTILITIES")]
    Utilities,
    /// Salaries and wages.
    #[sea_orm(string_value = "PAYROLL")]
    Payroll,
    /// Advertising and promotion.
    #[sea_orm(string_value = "MARKETING")]
    Marketing,
    /// Business travel.
    #[sea_orm(string_value = "TRAVEL")]
    Travel,
    /// Office and operating supplies.
    #[sea_orm(string_value = "SUPPLIES")]
    Supplies,
    /// Insurance premiums.
    #[sea_orm(string_value = "INSURANCE")]
    Insurance,
    /// Repairs and upkeep.
    #[sea_orm(string_value = "MAINTENANCE")]
    Maintenance,
    /// Software subscriptions.
    #[sea_orm(string_value = "SOFTWARE")]
    Software,
    /// Everything else.
    #[sea_orm(string_value = "OTHER")]
    Other,
}

/// How often a recurring expense occurs.
#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "expense_frequency")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExpenseFrequency {
    /// A single occurrence.
    #[sea_orm(string_value = "ONE_TIME")]
    OneTime,
    /// Every day.
    #[sea_orm(string_value = "DAILY")]
    Daily,
    /// Every week.
    #[sea_orm(string_value = "WEEKLY")]
    Weekly,
    /// Every month.
    #[sea_orm(string_value = "MONTHLY")]
    Monthly,
    /// Every quarter.
    #[sea_orm(string_value = "QUARTERLY")]
    Quarterly,
    /// Every year.
    #[sea_orm(string_value = "YEARLY")]
    Yearly,
}

/// Generic record status used by categories, expenses, products,
/// and suppliers.
#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "record_status")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RecordStatus {
    /// In active use.
    #[sea_orm(string_value = "ACTIVE")]
    Active,
    /// Hidden from pickers but kept for history.
    #[sea_orm(string_value = "INACTIVE")]
    Inactive,
    /// Kept only for old records.
    #[sea_orm(string_value = "ARCHIVED")]
    Archived,
}

/// Lifecycle of a financial goal.
#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "goal_status")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GoalStatus {
    /// Still being worked toward.
    #[sea_orm(string_value = "IN_PROGRESS")]
    InProgress,
    /// Target reached.
    #[sea_orm(string_value = "ACHIEVED")]
    Achieved,
    /// Given up.
    #[sea_orm(string_value = "ABANDONED")]
    Abandoned,
}

/// Lifecycle of an invoice.
#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "invoice_status")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InvoiceStatus {
    /// Not yet sent to the customer.
    #[sea_orm(string_value = "DRAFT")]
    Draft,
    /// Sent, awaiting payment.
    #[sea_orm(string_value = "SENT")]
    Sent,
    /// Paid in full.
    #[sea_orm(string_value = "PAID")]
    Paid,
    /// Past its due date.
    #[sea_orm(string_value = "OVERDUE")]
    Overdue,
    /// Cancelled before payment.
    #[sea_orm(string_value = "CANCELLED")]
    Cancelled,
}

/// What kind of thing a product is.
#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "product_type")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductType {
    /// A physical good.
    #[sea_orm(string_value = "PHYSICAL")]
    Physical,
    /// A digital good.
    #[sea_orm(string_value = "DIGITAL")]
    Digital,
    /// A service.
    #[sea_orm(string_value = "SERVICE")]
    Service,
}

/// Lifecycle of a purchase order.
#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "purchase_order_status")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PurchaseOrderStatus {
    /// Created, not yet confirmed by the supplier.
    #[sea_orm(string_value = "PENDING")]
    Pending,
    /// Confirmed by the supplier.
    #[sea_orm(string_value = "CONFIRMED")]
    Confirmed,
    /// In transit.
    #[sea_orm(string_value = "SHIPPED")]
    Shipped,
    /// Received.
    #[sea_orm(string_value = "DELIVERED")]
    Delivered,
    /// Cancelled.
    #[sea_orm(string_value = "CANCELLED")]
    Cancelled,
}

/// Discriminant for the payment method `details` JSON.
#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "payment_method_type")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethodType {
    /// Bank account.
    #[sea_orm(string_value = "BANK")]
    Bank,
    /// Credit or debit card.
    #[sea_orm(string_value = "CARD")]
    Card,
    /// Digital wallet.
    #[sea_orm(string_value = "WALLET")]
    Wallet,
    /// Anything else.
    #[sea_orm(string_value = "OTHER")]
    Other,
}

/// Side of the balance sheet an item belongs to.
#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "balance_item_type")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BalanceItemType {
    /// Something the business owns.
    #[sea_orm(string_value = "ASSET")]
    Asset,
    /// Something the business owes.
    #[sea_orm(string_value = "LIABILITY")]
    Liability,
    /// Owner's stake.
    #[sea_orm(string_value = "EQUITY")]
    Equity,
}
