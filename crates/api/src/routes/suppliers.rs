//! Supplier routes.

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{delete, get, post},
};
use serde::Deserialize;
use uuid::Uuid;

use super::resolve_profile;
use crate::{AppState, error::ApiError, middleware::AuthUser};
use fiscora_db::entities::{sea_orm_active_enums::RecordStatus, suppliers};
use fiscora_db::repositories::supplier::{SupplierInput, SupplierRepository};

/// Creates the supplier routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/suppliers", get(list_suppliers))
        .route("/suppliers", post(upsert_supplier))
        .route("/suppliers/{id}", delete(delete_supplier))
}

fn default_status() -> RecordStatus {
    RecordStatus::Active
}

/// Request body for upserting a supplier.
#[derive(Debug, Deserialize)]
pub struct UpsertSupplierRequest {
    /// Present for updates.
    pub id: Option<Uuid>,
    /// Supplier company name.
    pub name: String,
    /// Contact person.
    pub contact_name: Option<String>,
    /// Email address.
    pub email: Option<String>,
    /// Phone number.
    pub phone: Option<String>,
    /// Lifecycle status.
    #[serde(default = "default_status")]
    pub status: RecordStatus,
}

/// GET /suppliers - List the caller's suppliers.
async fn list_suppliers(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Vec<suppliers::Model>>, ApiError> {
    let profile = resolve_profile(&state, auth.user_id()).await?;
    let repo = SupplierRepository::new((*state.db).clone());
    Ok(Json(repo.list(profile.id).await?))
}

/// POST /suppliers - Create or update a supplier.
async fn upsert_supplier(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(payload): Json<UpsertSupplierRequest>,
) -> Result<Json<suppliers::Model>, ApiError> {
    let profile = resolve_profile(&state, auth.user_id()).await?;
    let repo = SupplierRepository::new((*state.db).clone());

    let supplier = repo
        .upsert(
            profile.id,
            SupplierInput {
                id: payload.id,
                name: payload.name,
                contact_name: payload.contact_name,
                email: payload.email,
                phone: payload.phone,
                status: payload.status,
            },
        )
        .await?;

    Ok(Json(supplier))
}

/// DELETE /suppliers/{id} - Delete a supplier.
async fn delete_supplier(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<suppliers::Model>, ApiError> {
    let profile = resolve_profile(&state, auth.user_id()).await?;
    let repo = SupplierRepository::new((*state.db).clone());
    Ok(Json(repo.delete(profile.id, id).await?))
}
