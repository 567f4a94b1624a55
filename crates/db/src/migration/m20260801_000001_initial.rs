//! Initial database migration.
//!
//! Creates enums, all business tables, tenant indexes, and the
//! `updated_at` trigger.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        db.execute_unprepared(ENUMS_SQL).await?;

        db.execute_unprepared(USERS_SQL).await?;
        db.execute_unprepared(BUSINESS_PROFILES_SQL).await?;
        db.execute_unprepared(BUSINESS_INFORMATION_SQL).await?;
        db.execute_unprepared(BUSINESS_CONTACTS_SQL).await?;
        db.execute_unprepared(BUSINESS_LOCATIONS_SQL).await?;

        db.execute_unprepared(EXPENSE_CATEGORIES_SQL).await?;
        db.execute_unprepared(EXPENSES_SQL).await?;

        db.execute_unprepared(PAYMENT_METHODS_SQL).await?;
        db.execute_unprepared(TRANSACTIONS_SQL).await?;
        db.execute_unprepared(CASH_FLOWS_SQL).await?;

        db.execute_unprepared(BUDGETS_SQL).await?;
        db.execute_unprepared(GOALS_SQL).await?;
        db.execute_unprepared(INVOICES_SQL).await?;

        db.execute_unprepared(PRODUCTS_SQL).await?;
        db.execute_unprepared(SUPPLIERS_SQL).await?;
        db.execute_unprepared(INVENTORY_ITEMS_SQL).await?;
        db.execute_unprepared(PURCHASE_ORDERS_SQL).await?;

        db.execute_unprepared(BALANCE_SHEET_ITEMS_SQL).await?;

        db.execute_unprepared(TRIGGERS_SQL).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(DROP_ALL_SQL).await?;
        Ok(())
    }
}

// ============================================================
// SQL CONSTANTS
// ============================================================

const ENUMS_SQL: &str = r"
CREATE TYPE transaction_type AS ENUM ('PAYMENT', 'PAYOUT');

CREATE TYPE flow_direction AS ENUM ('INCOMING', 'OUTGOING');

CREATE TYPE spending_category AS ENUM (
    'RENT',
    'UTILITIES',
    'PAYROLL',
    'MARKETING',
    'TRAVEL',
    'SUPPLIES',
    'INSURANCE',
    'MAINTENANCE',
    'SOFTWARE',
    'OTHER'
);

CREATE TYPE expense_frequency AS ENUM (
    'ONE_TIME',
    'DAILY',
    'WEEKLY',
    'MONTHLY',
    'QUARTERLY',
    'YEARLY'
);

CREATE TYPE record_status AS ENUM ('ACTIVE', 'INACTIVE', 'ARCHIVED');

CREATE TYPE goal_status AS ENUM ('IN_PROGRESS', 'ACHIEVED', 'ABANDONED');

CREATE TYPE invoice_status AS ENUM ('DRAFT', 'SENT', 'PAID', 'OVERDUE', 'CANCELLED');

CREATE TYPE product_type AS ENUM ('PHYSICAL', 'DIGITAL', 'SERVICE');

CREATE TYPE purchase_order_status AS ENUM (
    'PENDING',
    'CONFIRMED',
    'SHIPPED',
    'DELIVERED',
    'CANCELLED'
);

CREATE TYPE payment_method_type AS ENUM ('BANK', 'CARD', 'WALLET', 'OTHER');

CREATE TYPE balance_item_type AS ENUM ('ASSET', 'LIABILITY', 'EQUITY');
";

const USERS_SQL: &str = r"
CREATE TABLE users (
    id UUID PRIMARY KEY,
    email VARCHAR(255) NOT NULL UNIQUE,
    password_hash VARCHAR(255) NOT NULL,
    full_name VARCHAR(255) NOT NULL,
    is_active BOOLEAN NOT NULL DEFAULT TRUE,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
);
";

const BUSINESS_PROFILES_SQL: &str = r"
CREATE TABLE business_profiles (
    id UUID PRIMARY KEY,
    user_id UUID NOT NULL REFERENCES users(id) ON DELETE CASCADE,
    company_name VARCHAR(255) NOT NULL,
    email VARCHAR(255),
    phone VARCHAR(50),
    website VARCHAR(255),
    address_line1 VARCHAR(255),
    address_line2 VARCHAR(255),
    city VARCHAR(100),
    state VARCHAR(100),
    postal_code VARCHAR(20),
    country VARCHAR(100),
    logo_url VARCHAR(512),
    is_active BOOLEAN NOT NULL DEFAULT TRUE,
    is_verified BOOLEAN NOT NULL DEFAULT FALSE,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
);

-- One tenant per user; the lazy-create race falls back to a re-read.
CREATE UNIQUE INDEX idx_business_profiles_user ON business_profiles(user_id);
";

const BUSINESS_INFORMATION_SQL: &str = r"
CREATE TABLE business_information (
    id UUID PRIMARY KEY,
    business_profile_id UUID NOT NULL UNIQUE
        REFERENCES business_profiles(id) ON DELETE CASCADE,
    tax_id VARCHAR(100),
    registration_number VARCHAR(100),
    currency VARCHAR(3) NOT NULL DEFAULT 'USD',
    locale VARCHAR(20),
    fiscal_year_start_month SMALLINT NOT NULL DEFAULT 1
        CHECK (fiscal_year_start_month BETWEEN 1 AND 12),
    compliance_notes TEXT,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
);
";

const BUSINESS_CONTACTS_SQL: &str = r"
CREATE TABLE business_contacts (
    id UUID PRIMARY KEY,
    business_profile_id UUID NOT NULL
        REFERENCES business_profiles(id) ON DELETE CASCADE,
    name VARCHAR(255) NOT NULL,
    role VARCHAR(100),
    email VARCHAR(255),
    phone VARCHAR(50),
    is_primary BOOLEAN NOT NULL DEFAULT FALSE,
    is_active BOOLEAN NOT NULL DEFAULT TRUE,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
);

CREATE INDEX idx_business_contacts_profile ON business_contacts(business_profile_id);
";

const BUSINESS_LOCATIONS_SQL: &str = r"
CREATE TABLE business_locations (
    id UUID PRIMARY KEY,
    business_profile_id UUID NOT NULL
        REFERENCES business_profiles(id) ON DELETE CASCADE,
    label VARCHAR(100),
    address_line1 VARCHAR(255) NOT NULL,
    address_line2 VARCHAR(255),
    city VARCHAR(100) NOT NULL,
    state VARCHAR(100),
    postal_code VARCHAR(20),
    country VARCHAR(100) NOT NULL,
    latitude NUMERIC(9, 6),
    longitude NUMERIC(9, 6),
    is_headquarters BOOLEAN NOT NULL DEFAULT FALSE,
    is_active BOOLEAN NOT NULL DEFAULT TRUE,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
);

CREATE INDEX idx_business_locations_profile ON business_locations(business_profile_id);
";

const EXPENSE_CATEGORIES_SQL: &str = r"
CREATE TABLE expense_categories (
    id UUID PRIMARY KEY,
    business_profile_id UUID NOT NULL
        REFERENCES business_profiles(id) ON DELETE CASCADE,
    name spending_category NOT NULL,
    status record_status NOT NULL DEFAULT 'ACTIVE',
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
);

CREATE INDEX idx_expense_categories_profile ON expense_categories(business_profile_id);
";

const EXPENSES_SQL: &str = r"
CREATE TABLE expenses (
    id UUID PRIMARY KEY,
    expense_category_id UUID NOT NULL
        REFERENCES expense_categories(id) ON DELETE CASCADE,
    name VARCHAR(255) NOT NULL,
    frequency expense_frequency NOT NULL DEFAULT 'ONE_TIME',
    status record_status NOT NULL DEFAULT 'ACTIVE',
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
);

CREATE INDEX idx_expenses_category ON expenses(expense_category_id);
";

const PAYMENT_METHODS_SQL: &str = r"
CREATE TABLE payment_methods (
    id UUID PRIMARY KEY,
    business_profile_id UUID NOT NULL
        REFERENCES business_profiles(id) ON DELETE CASCADE,
    method_type payment_method_type NOT NULL,
    details JSONB NOT NULL DEFAULT '{}',
    is_active BOOLEAN NOT NULL DEFAULT TRUE,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
);

CREATE INDEX idx_payment_methods_profile ON payment_methods(business_profile_id);
";

const TRANSACTIONS_SQL: &str = r"
CREATE TABLE transactions (
    id UUID PRIMARY KEY,
    business_profile_id UUID NOT NULL
        REFERENCES business_profiles(id) ON DELETE CASCADE,
    payment_method_id UUID REFERENCES payment_methods(id) ON DELETE SET NULL,
    expense_category_id UUID REFERENCES expense_categories(id) ON DELETE SET NULL,
    transaction_type transaction_type NOT NULL,
    amount NUMERIC(19, 4) NOT NULL CHECK (amount >= 0),
    transaction_date DATE NOT NULL,
    reference VARCHAR(255),
    description TEXT,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
);

CREATE INDEX idx_transactions_profile ON transactions(business_profile_id);
CREATE INDEX idx_transactions_date ON transactions(business_profile_id, transaction_date);
";

const CASH_FLOWS_SQL: &str = r"
CREATE TABLE cash_flows (
    id UUID PRIMARY KEY,
    business_profile_id UUID NOT NULL
        REFERENCES business_profiles(id) ON DELETE CASCADE,
    transaction_id UUID NOT NULL UNIQUE
        REFERENCES transactions(id) ON DELETE CASCADE,
    direction flow_direction NOT NULL,
    amount NUMERIC(19, 4) NOT NULL CHECK (amount >= 0),
    flow_date DATE NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
);

CREATE INDEX idx_cash_flows_profile ON cash_flows(business_profile_id);
";

const BUDGETS_SQL: &str = r"
CREATE TABLE budgets (
    id UUID PRIMARY KEY,
    business_profile_id UUID NOT NULL
        REFERENCES business_profiles(id) ON DELETE CASCADE,
    category spending_category NOT NULL,
    allocated_amount NUMERIC(19, 4) NOT NULL CHECK (allocated_amount >= 0),
    spent_amount NUMERIC(19, 4) NOT NULL DEFAULT 0 CHECK (spent_amount >= 0),
    period_start DATE NOT NULL,
    period_end DATE NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    CHECK (period_end >= period_start)
);

CREATE INDEX idx_budgets_profile ON budgets(business_profile_id);
";

const GOALS_SQL: &str = r"
CREATE TABLE goals (
    id UUID PRIMARY KEY,
    business_profile_id UUID NOT NULL
        REFERENCES business_profiles(id) ON DELETE CASCADE,
    title VARCHAR(255) NOT NULL,
    target_amount NUMERIC(19, 4) NOT NULL CHECK (target_amount >= 0),
    current_amount NUMERIC(19, 4) NOT NULL DEFAULT 0,
    deadline DATE,
    status goal_status NOT NULL DEFAULT 'IN_PROGRESS',
    category VARCHAR(100),
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
);

CREATE INDEX idx_goals_profile ON goals(business_profile_id);
";

const INVOICES_SQL: &str = r"
CREATE TABLE invoices (
    id UUID PRIMARY KEY,
    business_profile_id UUID NOT NULL
        REFERENCES business_profiles(id) ON DELETE CASCADE,
    invoice_number VARCHAR(100) NOT NULL,
    customer_name VARCHAR(255) NOT NULL,
    amount NUMERIC(19, 4) NOT NULL CHECK (amount >= 0),
    status invoice_status NOT NULL DEFAULT 'DRAFT',
    issue_date DATE NOT NULL,
    due_date DATE,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
);

CREATE INDEX idx_invoices_profile ON invoices(business_profile_id);
";

const PRODUCTS_SQL: &str = r"
CREATE TABLE products (
    id UUID PRIMARY KEY,
    business_profile_id UUID NOT NULL
        REFERENCES business_profiles(id) ON DELETE CASCADE,
    name VARCHAR(255) NOT NULL,
    product_type product_type NOT NULL DEFAULT 'PHYSICAL',
    price NUMERIC(19, 4) NOT NULL CHECK (price >= 0),
    category VARCHAR(100),
    status record_status NOT NULL DEFAULT 'ACTIVE',
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
);

CREATE INDEX idx_products_profile ON products(business_profile_id);
";

const SUPPLIERS_SQL: &str = r"
CREATE TABLE suppliers (
    id UUID PRIMARY KEY,
    business_profile_id UUID NOT NULL
        REFERENCES business_profiles(id) ON DELETE CASCADE,
    name VARCHAR(255) NOT NULL,
    contact_name VARCHAR(255),
    email VARCHAR(255),
    phone VARCHAR(50),
    status record_status NOT NULL DEFAULT 'ACTIVE',
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
);

CREATE INDEX idx_suppliers_profile ON suppliers(business_profile_id);
";

const INVENTORY_ITEMS_SQL: &str = r"
CREATE TABLE inventory_items (
    id UUID PRIMARY KEY,
    business_profile_id UUID NOT NULL
        REFERENCES business_profiles(id) ON DELETE CASCADE,
    product_id UUID NOT NULL REFERENCES products(id) ON DELETE CASCADE,
    quantity INTEGER NOT NULL DEFAULT 0 CHECK (quantity >= 0),
    min_stock INTEGER NOT NULL DEFAULT 0 CHECK (min_stock >= 0),
    max_stock INTEGER CHECK (max_stock IS NULL OR max_stock >= min_stock),
    unit_cost NUMERIC(19, 4) NOT NULL CHECK (unit_cost >= 0),
    location VARCHAR(255),
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
);

CREATE INDEX idx_inventory_items_profile ON inventory_items(business_profile_id);
CREATE INDEX idx_inventory_items_product ON inventory_items(product_id);
";

const PURCHASE_ORDERS_SQL: &str = r"
CREATE TABLE purchase_orders (
    id UUID PRIMARY KEY,
    business_profile_id UUID NOT NULL
        REFERENCES business_profiles(id) ON DELETE CASCADE,
    supplier_id UUID NOT NULL REFERENCES suppliers(id) ON DELETE CASCADE,
    order_number VARCHAR(100) NOT NULL,
    total_amount NUMERIC(19, 4) NOT NULL CHECK (total_amount >= 0),
    status purchase_order_status NOT NULL DEFAULT 'PENDING',
    order_date DATE NOT NULL,
    expected_delivery_date DATE,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
);

CREATE INDEX idx_purchase_orders_profile ON purchase_orders(business_profile_id);
CREATE INDEX idx_purchase_orders_supplier ON purchase_orders(supplier_id);
";

const BALANCE_SHEET_ITEMS_SQL: &str = r"
CREATE TABLE balance_sheet_items (
    id UUID PRIMARY KEY,
    business_profile_id UUID NOT NULL
        REFERENCES business_profiles(id) ON DELETE CASCADE,
    title VARCHAR(255) NOT NULL,
    description TEXT,
    amount NUMERIC(19, 4) NOT NULL,
    item_type balance_item_type NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
);

CREATE INDEX idx_balance_sheet_items_profile ON balance_sheet_items(business_profile_id);
";

const TRIGGERS_SQL: &str = r"
CREATE OR REPLACE FUNCTION set_updated_at()
RETURNS TRIGGER AS $$
BEGIN
    NEW.updated_at = NOW();
    RETURN NEW;
END;
$$ LANGUAGE plpgsql;

DO $$
DECLARE
    t TEXT;
BEGIN
    FOR t IN
        SELECT table_name FROM information_schema.columns
        WHERE column_name = 'updated_at' AND table_schema = 'public'
        GROUP BY table_name
    LOOP
        EXECUTE format(
            'CREATE TRIGGER trg_%I_updated_at BEFORE UPDATE ON %I
             FOR EACH ROW EXECUTE FUNCTION set_updated_at()',
            t, t
        );
    END LOOP;
END;
$$;
";

const DROP_ALL_SQL: &str = r"
DROP TABLE IF EXISTS balance_sheet_items CASCADE;
DROP TABLE IF EXISTS purchase_orders CASCADE;
DROP TABLE IF EXISTS inventory_items CASCADE;
DROP TABLE IF EXISTS suppliers CASCADE;
DROP TABLE IF EXISTS products CASCADE;
DROP TABLE IF EXISTS invoices CASCADE;
DROP TABLE IF EXISTS goals CASCADE;
DROP TABLE IF EXISTS budgets CASCADE;
DROP TABLE IF EXISTS cash_flows CASCADE;
DROP TABLE IF EXISTS transactions CASCADE;
DROP TABLE IF EXISTS payment_methods CASCADE;
DROP TABLE IF EXISTS expenses CASCADE;
DROP TABLE IF EXISTS expense_categories CASCADE;
DROP TABLE IF EXISTS business_locations CASCADE;
DROP TABLE IF EXISTS business_contacts CASCADE;
DROP TABLE IF EXISTS business_information CASCADE;
DROP TABLE IF EXISTS business_profiles CASCADE;
DROP TABLE IF EXISTS users CASCADE;

DROP FUNCTION IF EXISTS set_updated_at CASCADE;

DROP TYPE IF EXISTS balance_item_type;
DROP TYPE IF EXISTS payment_method_type;
DROP TYPE IF EXISTS purchase_order_status;
DROP TYPE IF EXISTS product_type;
DROP TYPE IF EXISTS invoice_status;
DROP TYPE IF EXISTS goal_status;
DROP TYPE IF EXISTS record_status;
DROP TYPE IF EXISTS expense_frequency;
DROP TYPE IF EXISTS spending_category;
DROP TYPE IF EXISTS flow_direction;
DROP TYPE IF EXISTS transaction_type;
";
