//! Integration tests for the profit/loss report.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sea_orm::{ActiveEnum, Database, DatabaseConnection};
use uuid::Uuid;

use fiscora_db::entities::sea_orm_active_enums::{
    RecordStatus, SpendingCategory, TransactionType,
};
use fiscora_db::repositories::expense::{ExpenseCategoryInput, ExpenseRepository};
use fiscora_db::repositories::report::ReportRepository;
use fiscora_db::repositories::transaction::{TransactionInput, TransactionRepository};
use fiscora_db::{BusinessProfileRepository, UserRepository};

async fn test_db() -> Option<DatabaseConnection> {
    let Ok(url) = std::env::var("DATABASE_URL") else {
        eprintln!("DATABASE_URL not set, skipping integration test");
        return None;
    };
    Some(
        Database::connect(&url)
            .await
            .expect("Failed to connect to database"),
    )
}

async fn new_tenant(db: &DatabaseConnection) -> Uuid {
    let email = format!("test-{}@example.com", Uuid::new_v4());
    let user = UserRepository::new(db.clone())
        .create(&email, "$argon2id$test_hash", "Test User")
        .await
        .expect("Failed to create user");
    BusinessProfileRepository::new(db.clone())
        .find_or_create_for_user(user.id)
        .await
        .expect("Failed to resolve profile")
        .id
}

#[tokio::test]
async fn profit_loss_groups_by_category_and_sums_sides() {
    let Some(db) = test_db().await else { return };
    let profile_id = new_tenant(&db).await;

    let expenses = ExpenseRepository::new(db.clone());
    let rent = expenses
        .upsert_category(
            profile_id,
            ExpenseCategoryInput {
                id: None,
                name: SpendingCategory::Rent,
                status: RecordStatus::Active,
            },
        )
        .await
        .unwrap();
    let travel = expenses
        .upsert_category(
            profile_id,
            ExpenseCategoryInput {
                id: None,
                name: SpendingCategory::Travel,
                status: RecordStatus::Active,
            },
        )
        .await
        .unwrap();

    let transactions = TransactionRepository::new(db.clone());
    let date = NaiveDate::from_ymd_opt(2026, 2, 10).unwrap();
    let tx = |category: Option<Uuid>, tx_type: TransactionType, cents: i64| TransactionInput {
        id: None,
        payment_method_id: None,
        expense_category_id: category,
        transaction_type: tx_type,
        amount: Decimal::new(cents, 2),
        transaction_date: date,
        reference: None,
        description: None,
    };

    // Rent: 100 revenue, 40 expense. Travel: 50 revenue. Uncategorized: 7 expense.
    transactions
        .upsert(profile_id, tx(Some(rent.id), TransactionType::Payment, 10_000))
        .await
        .unwrap();
    transactions
        .upsert(profile_id, tx(Some(rent.id), TransactionType::Payout, 4_000))
        .await
        .unwrap();
    transactions
        .upsert(
            profile_id,
            tx(Some(travel.id), TransactionType::Payment, 5_000),
        )
        .await
        .unwrap();
    transactions
        .upsert(profile_id, tx(None, TransactionType::Payout, 700))
        .await
        .unwrap();

    let report = ReportRepository::new(db.clone())
        .profit_loss(
            profile_id,
            NaiveDate::from_ymd_opt(2026, 1, 1),
            NaiveDate::from_ymd_opt(2026, 12, 31),
        )
        .await
        .expect("report");

    let rent_row = report
        .categories
        .iter()
        .find(|c| c.category.as_deref() == Some(SpendingCategory::Rent.to_value().as_str()))
        .expect("rent row");
    assert_eq!(rent_row.revenue, Decimal::new(10_000, 2));
    assert_eq!(rent_row.expenses, Decimal::new(4_000, 2));

    let travel_row = report
        .categories
        .iter()
        .find(|c| c.category.as_deref() == Some(SpendingCategory::Travel.to_value().as_str()))
        .expect("travel row");
    assert_eq!(travel_row.revenue, Decimal::new(5_000, 2));
    assert_eq!(travel_row.expenses, Decimal::ZERO);

    let uncategorized = report
        .categories
        .iter()
        .find(|c| c.category.is_none())
        .expect("uncategorized bucket");
    assert_eq!(uncategorized.expenses, Decimal::new(700, 2));

    assert_eq!(report.summary.total_revenue, Decimal::new(15_000, 2));
    assert_eq!(report.summary.total_expenses, Decimal::new(4_700, 2));
    assert_eq!(report.summary.net_profit, Decimal::new(10_300, 2));
}

#[tokio::test]
async fn profit_loss_excludes_out_of_range_transactions() {
    let Some(db) = test_db().await else { return };
    let profile_id = new_tenant(&db).await;
    let transactions = TransactionRepository::new(db.clone());

    transactions
        .upsert(
            profile_id,
            TransactionInput {
                id: None,
                payment_method_id: None,
                expense_category_id: None,
                transaction_type: TransactionType::Payment,
                amount: Decimal::ONE_HUNDRED,
                transaction_date: NaiveDate::from_ymd_opt(2025, 11, 30).unwrap(),
                reference: None,
                description: None,
            },
        )
        .await
        .unwrap();

    let report = ReportRepository::new(db.clone())
        .profit_loss(
            profile_id,
            NaiveDate::from_ymd_opt(2026, 1, 1),
            NaiveDate::from_ymd_opt(2026, 12, 31),
        )
        .await
        .unwrap();

    assert_eq!(report.summary.total_revenue, Decimal::ZERO);
    assert!(report.categories.is_empty());
}
