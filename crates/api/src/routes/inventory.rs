//! Inventory routes.

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{delete, get, post},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::resolve_profile;
use crate::{AppState, error::ApiError, middleware::AuthUser};
use fiscora_db::entities::inventory_items;
use fiscora_db::repositories::inventory::{InventoryItemInput, InventoryRepository};

/// Creates the inventory routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/inventory", get(list_inventory))
        .route("/inventory", post(upsert_item))
        .route("/inventory/{id}", delete(delete_item))
}

/// Request body for upserting an inventory item.
#[derive(Debug, Deserialize)]
pub struct UpsertInventoryRequest {
    /// Present for updates.
    pub id: Option<Uuid>,
    /// Tracked product id.
    pub product_id: Uuid,
    /// Units on hand.
    pub quantity: i32,
    /// Reorder threshold.
    #[serde(default)]
    pub min_stock: i32,
    /// Optional stock ceiling.
    pub max_stock: Option<i32>,
    /// Cost per unit as a decimal string.
    pub unit_cost: Decimal,
    /// Storage location label.
    pub location: Option<String>,
}

/// An inventory item enriched with product display fields.
#[derive(Debug, Serialize)]
pub struct InventoryResponse {
    /// The inventory row.
    #[serde(flatten)]
    pub item: inventory_items::Model,
    /// The tracked product's name.
    pub product_name: String,
    /// The tracked product's sale price.
    pub product_price: Decimal,
}

/// GET /inventory - List the caller's inventory with product names.
async fn list_inventory(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Vec<InventoryResponse>>, ApiError> {
    let profile = resolve_profile(&state, auth.user_id()).await?;
    let repo = InventoryRepository::new((*state.db).clone());

    let rows = repo.list(profile.id).await?;
    let response = rows
        .into_iter()
        .map(|row| InventoryResponse {
            item: row.item,
            product_name: row.product.name,
            product_price: row.product.price,
        })
        .collect();

    Ok(Json(response))
}

/// POST /inventory - Create or update an inventory item.
async fn upsert_item(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(payload): Json<UpsertInventoryRequest>,
) -> Result<Json<inventory_items::Model>, ApiError> {
    let profile = resolve_profile(&state, auth.user_id()).await?;
    let repo = InventoryRepository::new((*state.db).clone());

    let item = repo
        .upsert(
            profile.id,
            InventoryItemInput {
                id: payload.id,
                product_id: payload.product_id,
                quantity: payload.quantity,
                min_stock: payload.min_stock,
                max_stock: payload.max_stock,
                unit_cost: payload.unit_cost,
                location: payload.location,
            },
        )
        .await?;

    Ok(Json(item))
}

/// DELETE /inventory/{id} - Delete an inventory item.
async fn delete_item(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<inventory_items::Model>, ApiError> {
    let profile = resolve_profile(&state, auth.user_id()).await?;
    let repo = InventoryRepository::new((*state.db).clone());
    Ok(Json(repo.delete(profile.id, id).await?))
}
