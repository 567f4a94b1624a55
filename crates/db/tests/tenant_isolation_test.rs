//! Integration tests for tenant scoping across entity repositories.
//!
//! Every repository must refuse to update or delete another tenant's rows
//! and must never list them.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sea_orm::{Database, DatabaseConnection};
use uuid::Uuid;

use fiscora_db::entities::sea_orm_active_enums::{
    InvoiceStatus, ProductType, RecordStatus, SpendingCategory,
};
use fiscora_db::repositories::{
    BudgetInput, BudgetRepository, InvoiceInput, InvoiceRepository, ProductInput,
    ProductRepository,
};
use fiscora_db::{BusinessProfileRepository, RepoError, UserRepository};

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

fn budget_input() -> BudgetInput {
    BudgetInput {
        id: None,
        category: SpendingCategory::Marketing,
        allocated_amount: Decimal::new(50_000, 2),
        spent_amount: Decimal::ZERO,
        period_start: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
        period_end: NaiveDate::from_ymd_opt(2026, 12, 31).unwrap(),
    }
}

#[tokio::test]
async fn budget_list_never_leaks_other_tenants() {
    let Some(db) = test_db().await else { return };
    let repo = BudgetRepository::new(db.clone());
    let mine = new_tenant(&db).await;
    let theirs = new_tenant(&db).await;

    let own = repo.upsert(mine, budget_input()).await.unwrap();
    repo.upsert(theirs, budget_input()).await.unwrap();

    let listed = repo.list(mine).await.unwrap();
    assert!(listed.iter().any(|b| b.id == own.id));
    assert!(
        listed.iter().all(|b| b.business_profile_id == mine),
        "list must only contain the caller's rows"
    );
}

#[tokio::test]
async fn budget_cross_tenant_write_and_delete_fail() {
    let Some(db) = test_db().await else { return };
    let repo = BudgetRepository::new(db.clone());
    let owner = new_tenant(&db).await;
    let intruder = new_tenant(&db).await;

    let owned = repo.upsert(owner, budget_input()).await.unwrap();

    let update = repo
        .upsert(
            intruder,
            BudgetInput {
                id: Some(owned.id),
                ..budget_input()
            },
        )
        .await;
    assert!(matches!(update, Err(RepoError::TenantMismatch { .. })));

    let delete = repo.delete(intruder, owned.id).await;
    assert!(matches!(delete, Err(RepoError::TenantMismatch { .. })));
}

#[tokio::test]
async fn budget_upsert_with_same_id_is_idempotent() {
    let Some(db) = test_db().await else { return };
    let repo = BudgetRepository::new(db.clone());
    let tenant = new_tenant(&db).await;

    let created = repo.upsert(tenant, budget_input()).await.unwrap();

    let resubmitted = BudgetInput {
        id: Some(created.id),
        ..budget_input()
    };
    let updated = repo.upsert(tenant, resubmitted).await.unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.allocated_amount, created.allocated_amount);

    let listed = repo.list(tenant).await.unwrap();
    assert_eq!(
        listed.iter().filter(|b| b.id == created.id).count(),
        1,
        "upsert must not create a second row"
    );
}

#[tokio::test]
async fn invoice_cross_tenant_delete_fails() {
    let Some(db) = test_db().await else { return };
    let repo = InvoiceRepository::new(db.clone());
    let owner = new_tenant(&db).await;
    let intruder = new_tenant(&db).await;

    let invoice = repo
        .upsert(
            owner,
            InvoiceInput {
                id: None,
                invoice_number: "INV-0001".to_string(),
                customer_name: "Globex".to_string(),
                amount: Decimal::new(120_000, 2),
                status: InvoiceStatus::Sent,
                issue_date: NaiveDate::from_ymd_opt(2026, 4, 1).unwrap(),
                due_date: NaiveDate::from_ymd_opt(2026, 5, 1),
            },
        )
        .await
        .unwrap();

    let delete = repo.delete(intruder, invoice.id).await;
    assert!(matches!(delete, Err(RepoError::TenantMismatch { .. })));

    // The owner still can.
    repo.delete(owner, invoice.id).await.expect("owner delete");
}

#[tokio::test]
async fn product_cross_tenant_update_fails() {
    let Some(db) = test_db().await else { return };
    let repo = ProductRepository::new(db.clone());
    let owner = new_tenant(&db).await;
    let intruder = new_tenant(&db).await;

    let input = ProductInput {
        id: None,
        name: "Widget".to_string(),
        product_type: ProductType::Physical,
        price: Decimal::new(999, 2),
        category: None,
        status: RecordStatus::Active,
    };

    let product = repo.upsert(owner, input.clone()).await.unwrap();

    let update = repo
        .upsert(
            intruder,
            ProductInput {
                id: Some(product.id),
                ..input
            },
        )
        .await;
    assert!(matches!(update, Err(RepoError::TenantMismatch { .. })));
}
