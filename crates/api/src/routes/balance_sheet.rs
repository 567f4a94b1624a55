//! Balance sheet item routes.

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{delete, get, post},
};
use rust_decimal::Decimal;
use serde::Deserialize;
use uuid::Uuid;

use super::resolve_profile;
use crate::{AppState, error::ApiError, middleware::AuthUser};
use fiscora_db::entities::{balance_sheet_items, sea_orm_active_enums::BalanceItemType};
use fiscora_db::repositories::balance_sheet::{BalanceSheetItemInput, BalanceSheetRepository};

/// Creates the balance sheet routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/balance-sheet", get(list_items))
        .route("/balance-sheet", post(upsert_item))
        .route("/balance-sheet/{id}", delete(delete_item))
}

/// Request body for upserting a balance sheet item.
#[derive(Debug, Deserialize)]
pub struct UpsertBalanceSheetItemRequest {
    /// Present for updates.
    pub id: Option<Uuid>,
    /// Item title.
    pub title: String,
    /// Longer description.
    pub description: Option<String>,
    /// Amount as a decimal string.
    pub amount: Decimal,
    /// ASSET, LIABILITY, or EQUITY.
    #[serde(rename = "type")]
    pub item_type: BalanceItemType,
}

/// GET /balance-sheet - List the caller's balance sheet items.
async fn list_items(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Vec<balance_sheet_items::Model>>, ApiError> {
    let profile = resolve_profile(&state, auth.user_id()).await?;
    let repo = BalanceSheetRepository::new((*state.db).clone());
    Ok(Json(repo.list(profile.id).await?))
}

/// POST /balance-sheet - Create or update a balance sheet item.
async fn upsert_item(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(payload): Json<UpsertBalanceSheetItemRequest>,
) -> Result<Json<balance_sheet_items::Model>, ApiError> {
    let profile = resolve_profile(&state, auth.user_id()).await?;
    let repo = BalanceSheetRepository::new((*state.db).clone());

    let item = repo
        .upsert(
            profile.id,
            BalanceSheetItemInput {
                id: payload.id,
                title: payload.title,
                description: payload.description,
                amount: payload.amount,
                item_type: payload.item_type,
            },
        )
        .await?;

    Ok(Json(item))
}

/// DELETE /balance-sheet/{id} - Delete a balance sheet item.
async fn delete_item(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<balance_sheet_items::Model>, ApiError> {
    let profile = resolve_profile(&state, auth.user_id()).await?;
    let repo = BalanceSheetRepository::new((*state.db).clone());
    Ok(Json(repo.delete(profile.id, id).await?))
}
