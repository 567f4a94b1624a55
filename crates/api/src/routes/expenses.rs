//! Expense category and expense routes.

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{delete, get, post},
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::resolve_profile;
use crate::{AppState, error::ApiError, middleware::AuthUser};
use fiscora_db::entities::{
    expense_categories, expenses,
    sea_orm_active_enums::{ExpenseFrequency, RecordStatus, SpendingCategory},
};
use fiscora_db::repositories::expense::{
    ExpenseCategoryInput, ExpenseInput, ExpenseRepository,
};

/// Creates the expense routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/expense-categories", get(list_categories))
        .route("/expense-categories", post(upsert_category))
        .route("/expense-categories/{id}", delete(delete_category))
        .route("/expenses", get(list_expenses))
        .route("/expenses", post(upsert_expense))
        .route("/expenses/{id}", delete(delete_expense))
}

fn default_status() -> RecordStatus {
    RecordStatus::Active
}

/// Request body for upserting an expense category.
#[derive(Debug, Deserialize)]
pub struct UpsertCategoryRequest {
    /// Present for updates.
    pub id: Option<Uuid>,
    /// One of the fixed spending categories.
    pub name: SpendingCategory,
    /// Lifecycle status.
    #[serde(default = "default_status")]
    pub status: RecordStatus,
}

/// Request body for upserting an expense.
#[derive(Debug, Deserialize)]
pub struct UpsertExpenseRequest {
    /// Present for updates.
    pub id: Option<Uuid>,
    /// Owning category id.
    pub expense_category_id: Uuid,
    /// Expense name.
    pub name: String,
    /// Recurrence.
    pub frequency: ExpenseFrequency,
    /// Lifecycle status.
    #[serde(default = "default_status")]
    pub status: RecordStatus,
}

/// An expense enriched with its category name for display.
#[derive(Debug, Serialize)]
pub struct ExpenseResponse {
    /// The expense row.
    #[serde(flatten)]
    pub expense: expenses::Model,
    /// The owning category's name.
    pub category_name: SpendingCategory,
}

/// GET /expense-categories - List the caller's categories.
async fn list_categories(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Vec<expense_categories::Model>>, ApiError> {
    let profile = resolve_profile(&state, auth.user_id()).await?;
    let repo = ExpenseRepository::new((*state.db).clone());
    Ok(Json(repo.list_categories(profile.id).await?))
}

/// POST /expense-categories - Create or update a category.
async fn upsert_category(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(payload): Json<UpsertCategoryRequest>,
) -> Result<Json<expense_categories::Model>, ApiError> {
    let profile = resolve_profile(&state, auth.user_id()).await?;
    let repo = ExpenseRepository::new((*state.db).clone());

    let category = repo
        .upsert_category(
            profile.id,
            ExpenseCategoryInput {
                id: payload.id,
                name: payload.name,
                status: payload.status,
            },
        )
        .await?;

    Ok(Json(category))
}

/// DELETE /expense-categories/{id} - Delete a category and its expenses.
async fn delete_category(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<expense_categories::Model>, ApiError> {
    let profile = resolve_profile(&state, auth.user_id()).await?;
    let repo = ExpenseRepository::new((*state.db).clone());
    Ok(Json(repo.delete_category(profile.id, id).await?))
}

/// GET /expenses - List the caller's expenses with category names.
async fn list_expenses(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Vec<ExpenseResponse>>, ApiError> {
    let profile = resolve_profile(&state, auth.user_id()).await?;
    let repo = ExpenseRepository::new((*state.db).clone());

    let rows = repo.list_expenses(profile.id).await?;
    let response = rows
        .into_iter()
        .map(|row| ExpenseResponse {
            expense: row.expense,
            category_name: row.category.name,
        })
        .collect();

    Ok(Json(response))
}

/// POST /expenses - Create or update an expense.
async fn upsert_expense(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(payload): Json<UpsertExpenseRequest>,
) -> Result<Json<expenses::Model>, ApiError> {
    let profile = resolve_profile(&state, auth.user_id()).await?;
    let repo = ExpenseRepository::new((*state.db).clone());

    let expense = repo
        .upsert_expense(
            profile.id,
            ExpenseInput {
                id: payload.id,
                expense_category_id: payload.expense_category_id,
                name: payload.name,
                frequency: payload.frequency,
                status: payload.status,
            },
        )
        .await?;

    Ok(Json(expense))
}

/// DELETE /expenses/{id} - Delete an expense.
async fn delete_expense(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<expenses::Model>, ApiError> {
    let profile = resolve_profile(&state, auth.user_id()).await?;
    let repo = ExpenseRepository::new((*state.db).clone());
    Ok(Json(repo.delete_expense(profile.id, id).await?))
}
