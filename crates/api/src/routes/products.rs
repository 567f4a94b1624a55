//! Product routes.

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
use fiscora_db::entities::{
    products,
    sea_orm_active_enums::{ProductType, RecordStatus},
};
use fiscora_db::repositories::product::{ProductInput, ProductRepository};

/// Creates the product routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/products", get(list_products))
        .route("/products", post(upsert_product))
        .route("/products/{id}", delete(delete_product))
}

fn default_status() -> RecordStatus {
    RecordStatus::Active
}

/// Request body for upserting a product.
#[derive(Debug, Deserialize)]
pub struct UpsertProductRequest {
    /// Present for updates.
    pub id: Option<Uuid>,
    /// Product name.
    pub name: String,
    /// Physical, digital, or service.
    pub product_type: ProductType,
    /// Sale price as a decimal string.
    pub price: Decimal,
    /// Free-form grouping label.
    pub category: Option<String>,
    /// Lifecycle status.
    #[serde(default = "default_status")]
    pub status: RecordStatus,
}

/// GET /products - List the caller's products.
async fn list_products(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Vec<products::Model>>, ApiError> {
    let profile = resolve_profile(&state, auth.user_id()).await?;
    let repo = ProductRepository::new((*state.db).clone());
    Ok(Json(repo.list(profile.id).await?))
}

/// POST /products - Create or update a product.
async fn upsert_product(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(payload): Json<UpsertProductRequest>,
) -> Result<Json<products::Model>, ApiError> {
    let profile = resolve_profile(&state, auth.user_id()).await?;
    let repo = ProductRepository::new((*state.db).clone());

    let product = repo
        .upsert(
            profile.id,
            ProductInput {
                id: payload.id,
                name: payload.name,
                product_type: payload.product_type,
                price: payload.price,
                category: payload.category,
                status: payload.status,
            },
        )
        .await?;

    Ok(Json(product))
}

/// DELETE /products/{id} - Delete a product.
async fn delete_product(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<products::Model>, ApiError> {
    let profile = resolve_profile(&state, auth.user_id()).await?;
    let repo = ProductRepository::new((*state.db).clone());
    Ok(Json(repo.delete(profile.id, id).await?))
}
