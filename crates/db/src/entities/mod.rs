//! `SeaORM` entity definitions.

pub mod balance_sheet_items;
pub mod budgets;
pub mod business_contacts;
pub mod business_information;
pub mod business_locations;
pub mod business_profiles;
pub mod cash_flows;
pub mod expense_categories;
pub mod expenses;
pub mod goals;
pub mod inventory_items;
pub mod invoices;
pub mod payment_methods;
pub mod products;
pub mod purchase_orders;
pub mod sea_orm_active_enums;
pub mod sessions;
pub mod suppliers;
pub mod transactions;
pub mod users;
