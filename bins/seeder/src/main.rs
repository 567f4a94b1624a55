//! Database seeder for Fiscora development and testing.
//!
//! Populates a migrated database with a demo account and a spread of
//! fabricated business data. Idempotent: re-running detects the demo user
//! and exits.
//!
//! Usage: cargo run --bin seeder

use chrono::{Datelike, NaiveDate, Utc};
use fake::Fake;
use fake::faker::company::en::CompanyName;
use fake::faker::name::en::Name;
use rust_decimal::Decimal;
use uuid::Uuid;

use fiscora_core::auth::hash_password;
use fiscora_core::payment::PaymentDetails;
use fiscora_db::entities::sea_orm_active_enums::{
    BalanceItemType, ExpenseFrequency, GoalStatus, InvoiceStatus, ProductType,
    PurchaseOrderStatus, RecordStatus, SpendingCategory, TransactionType,
};
use fiscora_db::repositories::{
    BalanceSheetItemInput, BalanceSheetRepository, BudgetInput, BudgetRepository, ContactInput,
    ContactRepository, ExpenseCategoryInput, ExpenseInput, ExpenseRepository, GoalInput,
    GoalRepository, InventoryItemInput, InventoryRepository, InvoiceInput, InvoiceRepository,
    PaymentMethodInput, PaymentMethodRepository, ProductInput, ProductRepository,
    PurchaseOrderInput, PurchaseOrderRepository, SupplierInput, SupplierRepository,
    TransactionInput, TransactionRepository,
};
use fiscora_db::{BusinessProfileRepository, UserRepository};

const DEMO_EMAIL: &str = "demo@fiscora.dev";
const DEMO_PASSWORD: &str = "demo-password";

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let database_url =
        std::env::var("DATABASE_URL").expect("DATABASE_URL must be set in environment");

    println!("Connecting to database...");
    let db = fiscora_db::connect(&database_url)
        .await
        .expect("Failed to connect to database");

    let users = UserRepository::new(db.clone());
    if users
        .find_by_email(DEMO_EMAIL)
        .await
        .expect("Failed to query users")
        .is_some()
    {
        println!("Demo user already exists, nothing to do.");
        return;
    }

    println!("Seeding demo user...");
    let password_hash = hash_password(DEMO_PASSWORD).expect("Failed to hash password");
    let user = users
        .create(DEMO_EMAIL, &password_hash, "Demo Owner")
        .await
        .expect("Failed to create demo user");
    println!("  {DEMO_EMAIL} / {DEMO_PASSWORD}");

    println!("Seeding business profile...");
    let profile = BusinessProfileRepository::new(db.clone())
        .find_or_create_for_user(user.id)
        .await
        .expect("Failed to create profile");
    let profile_id = profile.id;

    println!("Seeding contacts...");
    let contacts = ContactRepository::new(db.clone());
    contacts
        .upsert(
            profile_id,
            ContactInput {
                id: None,
                name: Name().fake(),
                role: Some("Accountant".to_string()),
                email: Some("books@example.com".to_string()),
                phone: None,
                is_primary: true,
                is_active: true,
            },
        )
        .await
        .expect("Failed to seed contact");

    println!("Seeding expense categories...");
    let expenses = ExpenseRepository::new(db.clone());
    let mut category_ids = Vec::new();
    for name in [
        SpendingCategory::Rent,
        SpendingCategory::Utilities,
        SpendingCategory::Marketing,
        SpendingCategory::Supplies,
    ] {
        let category = expenses
            .upsert_category(
                profile_id,
                ExpenseCategoryInput {
                    id: None,
                    name,
                    status: RecordStatus::Active,
                },
            )
            .await
            .expect("Failed to seed category");
        category_ids.push(category.id);
    }

    expenses
        .upsert_expense(
            profile_id,
            ExpenseInput {
                id: None,
                expense_category_id: category_ids[0],
                name: "Office lease".to_string(),
                frequency: ExpenseFrequency::Monthly,
                status: RecordStatus::Active,
            },
        )
        .await
        .expect("Failed to seed expense");

    println!("Seeding payment method...");
    let method = PaymentMethodRepository::new(db.clone())
        .upsert(
            profile_id,
            PaymentMethodInput {
                id: None,
                details: PaymentDetails::Bank {
                    bank_name: "First National".to_string(),
                    account_number: "000123456789".to_string(),
                    routing_number: Some("021000021".to_string()),
                },
                is_active: true,
            },
        )
        .await
        .expect("Failed to seed payment method");

    println!("Seeding transactions...");
    let transactions = TransactionRepository::new(db.clone());
    let year = Utc::now().year();
    for month in 1..=6u32 {
        let date = NaiveDate::from_ymd_opt(year, month, 15).expect("valid date");
        let category = category_ids[(month as usize - 1) % category_ids.len()];

        transactions
            .upsert(
                profile_id,
                TransactionInput {
                    id: None,
                    payment_method_id: Some(method.id),
                    expense_category_id: Some(category),
                    transaction_type: TransactionType::Payment,
                    amount: Decimal::new(150_000 + i64::from(month) * 12_500, 2),
                    transaction_date: date,
                    reference: Some(format!("RCPT-{year}{month:02}")),
                    description: Some("Monthly sales".to_string()),
                },
            )
            .await
            .expect("Failed to seed payment");

        transactions
            .upsert(
                profile_id,
                TransactionInput {
                    id: None,
                    payment_method_id: Some(method.id),
                    expense_category_id: Some(category),
                    transaction_type: TransactionType::Payout,
                    amount: Decimal::new(40_000 + i64::from(month) * 3_000, 2),
                    transaction_date: date,
                    reference: None,
                    description: Some("Operating costs".to_string()),
                },
            )
            .await
            .expect("Failed to seed payout");
    }

    println!("Seeding budgets and goals...");
    BudgetRepository::new(db.clone())
        .upsert(
            profile_id,
            BudgetInput {
                id: None,
                category: SpendingCategory::Marketing,
                allocated_amount: Decimal::new(600_000, 2),
                spent_amount: Decimal::new(212_500, 2),
                period_start: NaiveDate::from_ymd_opt(year, 1, 1).expect("valid date"),
                period_end: NaiveDate::from_ymd_opt(year, 12, 31).expect("valid date"),
            },
        )
        .await
        .expect("Failed to seed budget");

    GoalRepository::new(db.clone())
        .upsert(
            profile_id,
            GoalInput {
                id: None,
                title: "Six months of runway".to_string(),
                target_amount: Decimal::new(5_000_000, 2),
                current_amount: Decimal::new(1_750_000, 2),
                deadline: NaiveDate::from_ymd_opt(year, 12, 31),
                status: GoalStatus::InProgress,
                category: Some("savings".to_string()),
            },
        )
        .await
        .expect("Failed to seed goal");

    println!("Seeding invoices...");
    let invoices = InvoiceRepository::new(db.clone());
    for (n, status) in [
        (1u32, InvoiceStatus::Paid),
        (2, InvoiceStatus::Sent),
        (3, InvoiceStatus::Draft),
    ] {
        invoices
            .upsert(
                profile_id,
                InvoiceInput {
                    id: None,
                    invoice_number: format!("INV-{year}-{n:04}"),
                    customer_name: CompanyName().fake(),
                    amount: Decimal::new(85_000 * i64::from(n), 2),
                    status,
                    issue_date: NaiveDate::from_ymd_opt(year, n, 1).expect("valid date"),
                    due_date: NaiveDate::from_ymd_opt(year, n + 1, 1),
                },
            )
            .await
            .expect("Failed to seed invoice");
    }

    println!("Seeding products and inventory...");
    let products = ProductRepository::new(db.clone());
    let inventory = InventoryRepository::new(db.clone());
    for (name, cents) in [("Starter Kit", 49_99i64), ("Pro Kit", 149_99), ("Refill", 9_99)] {
        let product = products
            .upsert(
                profile_id,
                ProductInput {
                    id: None,
                    name: name.to_string(),
                    product_type: ProductType::Physical,
                    price: Decimal::new(cents, 2),
                    category: Some("kits".to_string()),
                    status: RecordStatus::Active,
                },
            )
            .await
            .expect("Failed to seed product");

        inventory
            .upsert(
                profile_id,
                InventoryItemInput {
                    id: None,
                    product_id: product.id,
                    quantity: 120,
                    min_stock: 20,
                    max_stock: Some(500),
                    unit_cost: Decimal::new(cents / 2, 2),
                    location: Some("Main warehouse".to_string()),
                },
            )
            .await
            .expect("Failed to seed inventory");
    }

    println!("Seeding supplier and purchase order...");
    let supplier = SupplierRepository::new(db.clone())
        .upsert(
            profile_id,
            SupplierInput {
                id: None,
                name: CompanyName().fake(),
                contact_name: Some(Name().fake()),
                email: Some("orders@supplier.example".to_string()),
                phone: None,
                status: RecordStatus::Active,
            },
        )
        .await
        .expect("Failed to seed supplier");

    PurchaseOrderRepository::new(db.clone())
        .upsert(
            profile_id,
            PurchaseOrderInput {
                id: None,
                supplier_id: supplier.id,
                order_number: format!("PO-{}", Uuid::new_v4().simple()),
                total_amount: Decimal::new(425_000, 2),
                status: PurchaseOrderStatus::Confirmed,
                order_date: NaiveDate::from_ymd_opt(year, 5, 20).expect("valid date"),
                expected_delivery_date: NaiveDate::from_ymd_opt(year, 6, 20),
            },
        )
        .await
        .expect("Failed to seed purchase order");

    println!("Seeding balance sheet...");
    let balance = BalanceSheetRepository::new(db.clone());
    for (title, cents, item_type) in [
        ("Business checking", 3_250_000i64, BalanceItemType::Asset),
        ("Equipment loan", 1_100_000, BalanceItemType::Liability),
        ("Owner capital", 2_000_000, BalanceItemType::Equity),
    ] {
        balance
            .upsert(
                profile_id,
                BalanceSheetItemInput {
                    id: None,
                    title: title.to_string(),
                    description: None,
                    amount: Decimal::new(cents, 2),
                    item_type,
                },
            )
            .await
            .expect("Failed to seed balance sheet item");
    }

    println!("Seeding complete!");
}
