//! Goal routes.

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
use fiscora_db::entities::{goals, sea_orm_active_enums::GoalStatus};
use fiscora_db::repositories::goal::{GoalInput, GoalRepository};

/// Creates the goal routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/goals", get(list_goals))
        .route("/goals", post(upsert_goal))
        .route("/goals/{id}", delete(delete_goal))
}

fn default_status() -> GoalStatus {
    GoalStatus::InProgress
}

/// Request body for upserting a goal.
#[derive(Debug, Deserialize)]
pub struct UpsertGoalRequest {
    /// Present for updates.
    pub id: Option<Uuid>,
    /// Goal title.
    pub title: String,
    /// Target amount as a decimal string.
    pub target_amount: Decimal,
    /// Progress so far as a decimal string.
    #[serde(default)]
    pub current_amount: Decimal,
    /// Optional deadline.
    pub deadline: Option<NaiveDate>,
    /// Lifecycle status.
    #[serde(default = "default_status")]
    pub status: GoalStatus,
    /// Free-form grouping label.
    pub category: Option<String>,
}

/// GET /goals - List the caller's goals.
async fn list_goals(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Vec<goals::Model>>, ApiError> {
    let profile = resolve_profile(&state, auth.user_id()).await?;
    let repo = GoalRepository::new((*state.db).clone());
    Ok(Json(repo.list(profile.id).await?))
}

/// POST /goals - Create or update a goal.
async fn upsert_goal(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(payload): Json<UpsertGoalRequest>,
) -> Result<Json<goals::Model>, ApiError> {
    let profile = resolve_profile(&state, auth.user_id()).await?;
    let repo = GoalRepository::new((*state.db).clone());

    let goal = repo
        .upsert(
            profile.id,
            GoalInput {
                id: payload.id,
                title: payload.title,
                target_amount: payload.target_amount,
                current_amount: payload.current_amount,
                deadline: payload.deadline,
                status: payload.status,
                category: payload.category,
            },
        )
        .await?;

    Ok(Json(goal))
}

/// DELETE /goals/{id} - Delete a goal.
async fn delete_goal(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<goals::Model>, ApiError> {
    let profile = resolve_profile(&state, auth.user_id()).await?;
    let repo = GoalRepository::new((*state.db).clone());
    Ok(Json(repo.delete(profile.id, id).await?))
}
