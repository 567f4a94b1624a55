//! Integration tests for business profile resolution.
//!
//! These run against a migrated database named by `DATABASE_URL` and skip
//! when it is not set.

use sea_orm::{Database, DatabaseConnection};
use uuid::Uuid;

use fiscora_db::repositories::profile::{BusinessProfileInput, BusinessProfileRepository};
use fiscora_db::{RepoError, UserRepository};

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

async fn new_user(db: &DatabaseConnection) -> Uuid {
    let email = format!("test-{}@example.com", Uuid::new_v4());
    UserRepository::new(db.clone())
        .create(&email, "$argon2id$test_hash", "Test User")
        .await
        .expect("Failed to create user")
        .id
}

#[tokio::test]
async fn first_resolution_creates_exactly_one_profile() {
    let Some(db) = test_db().await else { return };
    let repo = BusinessProfileRepository::new(db.clone());
    let user_id = new_user(&db).await;

    let first = repo
        .find_or_create_for_user(user_id)
        .await
        .expect("first resolution");
    assert_eq!(first.user_id, user_id);
    assert!(first.is_active);
    assert!(first.company_name.is_empty());

    let second = repo
        .find_or_create_for_user(user_id)
        .await
        .expect("second resolution");
    assert_eq!(second.id, first.id, "second call must return the same row");
}

#[tokio::test]
async fn upsert_updates_own_profile_in_place() {
    let Some(db) = test_db().await else { return };
    let repo = BusinessProfileRepository::new(db.clone());
    let user_id = new_user(&db).await;

    let profile = repo.find_or_create_for_user(user_id).await.unwrap();

    let updated = repo
        .upsert(
            user_id,
            BusinessProfileInput {
                id: Some(profile.id),
                company_name: "Acme Widgets".to_string(),
                city: Some("Springfield".to_string()),
                ..Default::default()
            },
        )
        .await
        .expect("upsert");

    assert_eq!(updated.id, profile.id);
    assert_eq!(updated.company_name, "Acme Widgets");

    // Idempotent: same id + same fields leaves one row in the same state.
    let again = repo
        .upsert(
            user_id,
            BusinessProfileInput {
                id: Some(profile.id),
                company_name: "Acme Widgets".to_string(),
                city: Some("Springfield".to_string()),
                ..Default::default()
            },
        )
        .await
        .expect("second upsert");
    assert_eq!(again.id, updated.id);
    assert_eq!(again.company_name, updated.company_name);
}

#[tokio::test]
async fn upsert_rejects_someone_elses_profile_id() {
    let Some(db) = test_db().await else { return };
    let repo = BusinessProfileRepository::new(db.clone());

    let owner = new_user(&db).await;
    let intruder = new_user(&db).await;

    let owned = repo.find_or_create_for_user(owner).await.unwrap();
    repo.find_or_create_for_user(intruder).await.unwrap();

    let result = repo
        .upsert(
            intruder,
            BusinessProfileInput {
                id: Some(owned.id),
                company_name: "Hijacked".to_string(),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(result, Err(RepoError::TenantMismatch { .. })));
}
