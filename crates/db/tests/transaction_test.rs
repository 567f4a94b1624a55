//! Integration tests for the transaction + cash flow pairing.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sea_orm::{Database, DatabaseConnection};
use uuid::Uuid;

use fiscora_db::entities::sea_orm_active_enums::{FlowDirection, TransactionType};
use fiscora_db::repositories::transaction::{
    TransactionFilter, TransactionInput, TransactionRepository,
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

fn payment(amount: Decimal, date: NaiveDate) -> TransactionInput {
    TransactionInput {
        id: None,
        payment_method_id: None,
        expense_category_id: None,
        transaction_type: TransactionType::Payment,
        amount,
        transaction_date: date,
        reference: None,
        description: None,
    }
}

#[tokio::test]
async fn create_writes_cash_flow_with_derived_direction() {
    let Some(db) = test_db().await else { return };
    let repo = TransactionRepository::new(db.clone());
    let profile_id = new_tenant(&db).await;
    let date = NaiveDate::from_ymd_opt(2026, 3, 14).unwrap();

    let tx = repo
        .upsert(profile_id, payment(Decimal::new(12_500, 2), date))
        .await
        .expect("create transaction");

    let flows = repo.list_cash_flows(profile_id).await.expect("list flows");
    let flow = flows
        .iter()
        .find(|f| f.transaction_id == tx.id)
        .expect("cash flow must exist alongside the transaction");

    assert_eq!(flow.direction, FlowDirection::Incoming);
    assert_eq!(flow.amount, tx.amount);
    assert_eq!(flow.flow_date, date);
}

#[tokio::test]
async fn update_rewrites_cash_flow_not_duplicates() {
    let Some(db) = test_db().await else { return };
    let repo = TransactionRepository::new(db.clone());
    let profile_id = new_tenant(&db).await;
    let date = NaiveDate::from_ymd_opt(2026, 5, 1).unwrap();

    let tx = repo
        .upsert(profile_id, payment(Decimal::new(5_000, 2), date))
        .await
        .unwrap();

    // Flip the type; the flow direction must follow.
    let updated = repo
        .upsert(
            profile_id,
            TransactionInput {
                id: Some(tx.id),
                transaction_type: TransactionType::Payout,
                ..payment(Decimal::new(5_000, 2), date)
            },
        )
        .await
        .expect("update transaction");
    assert_eq!(updated.id, tx.id);

    let flows: Vec<_> = repo
        .list_cash_flows(profile_id)
        .await
        .unwrap()
        .into_iter()
        .filter(|f| f.transaction_id == tx.id)
        .collect();

    assert_eq!(flows.len(), 1, "update must not create a second flow");
    assert_eq!(flows[0].direction, FlowDirection::Outgoing);
}

#[tokio::test]
async fn delete_removes_transaction_and_flow_together() {
    let Some(db) = test_db().await else { return };
    let repo = TransactionRepository::new(db.clone());
    let profile_id = new_tenant(&db).await;
    let date = NaiveDate::from_ymd_opt(2026, 6, 2).unwrap();

    let tx = repo
        .upsert(profile_id, payment(Decimal::ONE_HUNDRED, date))
        .await
        .unwrap();

    repo.delete(profile_id, tx.id).await.expect("delete");

    let listed = repo
        .list(profile_id, &TransactionFilter::default())
        .await
        .unwrap();
    assert!(listed.iter().all(|t| t.id != tx.id));

    let flows = repo.list_cash_flows(profile_id).await.unwrap();
    assert!(flows.iter().all(|f| f.transaction_id != tx.id));
}

#[tokio::test]
async fn cross_tenant_update_and_delete_are_rejected() {
    let Some(db) = test_db().await else { return };
    let repo = TransactionRepository::new(db.clone());
    let owner = new_tenant(&db).await;
    let intruder = new_tenant(&db).await;
    let date = NaiveDate::from_ymd_opt(2026, 7, 9).unwrap();

    let tx = repo
        .upsert(owner, payment(Decimal::TEN, date))
        .await
        .unwrap();

    let update = repo
        .upsert(
            intruder,
            TransactionInput {
                id: Some(tx.id),
                ..payment(Decimal::TEN, date)
            },
        )
        .await;
    assert!(matches!(update, Err(RepoError::TenantMismatch { .. })));

    let delete = repo.delete(intruder, tx.id).await;
    assert!(matches!(delete, Err(RepoError::TenantMismatch { .. })));
}

#[tokio::test]
async fn list_respects_date_and_type_filters() {
    let Some(db) = test_db().await else { return };
    let repo = TransactionRepository::new(db.clone());
    let profile_id = new_tenant(&db).await;

    let january = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
    let august = NaiveDate::from_ymd_opt(2026, 8, 15).unwrap();

    repo.upsert(profile_id, payment(Decimal::ONE, january))
        .await
        .unwrap();
    repo.upsert(
        profile_id,
        TransactionInput {
            transaction_type: TransactionType::Payout,
            ..payment(Decimal::TWO, august)
        },
    )
    .await
    .unwrap();

    let summer = repo
        .list(
            profile_id,
            &TransactionFilter {
                from: NaiveDate::from_ymd_opt(2026, 6, 1),
                to: None,
                transaction_type: None,
            },
        )
        .await
        .unwrap();
    assert_eq!(summer.len(), 1);
    assert_eq!(summer[0].transaction_date, august);

    let payouts = repo
        .list(
            profile_id,
            &TransactionFilter {
                from: None,
                to: None,
                transaction_type: Some(TransactionType::Payout),
            },
        )
        .await
        .unwrap();
    assert_eq!(payouts.len(), 1);
    assert_eq!(payouts[0].transaction_type, TransactionType::Payout);
}
