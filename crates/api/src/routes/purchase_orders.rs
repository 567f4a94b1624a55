//! Purchase order routes.

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{delete, get, post},
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::resolve_profile;
use crate::{AppState, error::ApiError, middleware::AuthUser};
use fiscora_db::entities::{purchase_orders, sea_orm_active_enums::PurchaseOrderStatus};
use fiscora_db::repositories::purchase_order::{PurchaseOrderInput, PurchaseOrderRepository};

/// Creates the purchase order routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/purchase-orders", get(list_orders))
        .route("/purchase-orders", post(upsert_order))
        .route("/purchase-orders/{id}", delete(delete_order))
}

fn default_status() -> PurchaseOrderStatus {
    PurchaseOrderStatus::Pending
}

/// Request body for upserting a purchase order.
#[derive(Debug, Deserialize)]
pub struct UpsertPurchaseOrderRequest {
    /// Present for updates.
    pub id: Option<Uuid>,
    /// Supplier id.
    pub supplier_id: Uuid,
    /// Order number as shared with the supplier.
    pub order_number: String,
    /// Total order value as a decimal string.
    pub total_amount: Decimal,
    /// Lifecycle status.
    #[serde(default = "default_status")]
    pub status: PurchaseOrderStatus,
    /// Date the order was placed.
    pub order_date: NaiveDate,
    /// Expected delivery date.
    pub expected_delivery_date: Option<NaiveDate>,
}

/// A purchase order enriched with supplier display fields.
#[derive(Debug, Serialize)]
pub struct PurchaseOrderResponse {
    /// The purchase order row.
    #[serde(flatten)]
    pub order: purchase_orders::Model,
    /// The supplier's name.
    pub supplier_name: String,
}

/// GET /purchase-orders - List the caller's orders with supplier names.
async fn list_orders(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Vec<PurchaseOrderResponse>>, ApiError> {
    let profile = resolve_profile(&state, auth.user_id()).await?;
    let repo = PurchaseOrderRepository::new((*state.db).clone());

    let rows = repo.list(profile.id).await?;
    let response = rows
        .into_iter()
        .map(|row| PurchaseOrderResponse {
            order: row.order,
            supplier_name: row.supplier.name,
        })
        .collect();

    Ok(Json(response))
}

/// POST /purchase-orders - Create or update a purchase order.
async fn upsert_order(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(payload): Json<UpsertPurchaseOrderRequest>,
) -> Result<Json<purchase_orders::Model>, ApiError> {
    let profile = resolve_profile(&state, auth.user_id()).await?;
    let repo = PurchaseOrderRepository::new((*state.db).clone());

    let order = repo
        .upsert(
            profile.id,
            PurchaseOrderInput {
                id: payload.id,
                supplier_id: payload.supplier_id,
                order_number: payload.order_number,
                total_amount: payload.total_amount,
                status: payload.status,
                order_date: payload.order_date,
                expected_delivery_date: payload.expected_delivery_date,
            },
        )
        .await?;

    Ok(Json(order))
}

/// DELETE /purchase-orders/{id} - Delete a purchase order.
async fn delete_order(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<purchase_orders::Model>, ApiError> {
    let profile = resolve_profile(&state, auth.user_id()).await?;
    let repo = PurchaseOrderRepository::new((*state.db).clone());
    Ok(Json(repo.delete(profile.id, id).await?))
}
