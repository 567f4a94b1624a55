//! Budget routes.

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{delete, get, post},
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use uuid::Uuid;

use super::resolve_profile;
use crate::{AppState, error::ApiError, middleware::AuthUser};
use fiscora_db::entities::{budgets, sea_orm_active_enums::SpendingCategory};
use fiscora_db::repositories::budget::{BudgetInput, BudgetRepository};

/// Creates the budget routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/budgets", get(list_budgets))
        .route("/budgets", post(upsert_budget))
        .route("/budgets/{id}", delete(delete_budget))
}

/// Request body for upserting a budget.
#[derive(Debug, Deserialize)]
pub struct UpsertBudgetRequest {
    /// Present for updates.
    pub id: Option<Uuid>,
    /// Spending category.
    pub category: SpendingCategory,
    /// Allocated amount as a decimal string.
    pub allocated_amount: Decimal,
    /// Spent amount as a decimal string.
    #[serde(default)]
    pub spent_amount: Decimal,
    /// Period start.
    pub period_start: NaiveDate,
    /// Period end (inclusive).
    pub period_end: NaiveDate,
}

/// GET /budgets - List the caller's budgets.
async fn list_budgets(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Vec<budgets::Model>>, ApiError> {
    let profile = resolve_profile(&state, auth.user_id()).await?;
    let repo = BudgetRepository::new((*state.db).clone());
    Ok(Json(repo.list(profile.id).await?))
}

/// POST /budgets - Create or update a budget.
async fn upsert_budget(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(payload): Json<UpsertBudgetRequest>,
) -> Result<Json<budgets::Model>, ApiError> {
    let profile = resolve_profile(&state, auth.user_id()).await?;
    let repo = BudgetRepository::new((*state.db).clone());

    let budget = repo
        .upsert(
            profile.id,
            BudgetInput {
                id: payload.id,
                category: payload.category,
                allocated_amount: payload.allocated_amount,
                spent_amount: payload.spent_amount,
                period_start: payload.period_start,
                period_end: payload.period_end,
            },
        )
        .await?;

    Ok(Json(budget))
}

/// DELETE /budgets/{id} - Delete a budget.
async fn delete_budget(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<budgets::Model>, ApiError> {
    let profile = resolve_profile(&state, auth.user_id()).await?;
    let repo = BudgetRepository::new((*state.db).clone());
    Ok(Json(repo.delete(profile.id, id).await?))
}
