//! Payment method routes.

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{delete, get, post},
};
use serde::Deserialize;
use uuid::Uuid;

use super::resolve_profile;
use crate::{AppState, error::ApiError, middleware::AuthUser};
use fiscora_core::payment::PaymentDetails;
use fiscora_db::entities::payment_methods;
use fiscora_db::repositories::payment_method::{PaymentMethodInput, PaymentMethodRepository};

/// Creates the payment method routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/payment-methods", get(list_methods))
        .route("/payment-methods", post(upsert_method))
        .route("/payment-methods/{id}", delete(delete_method))
}

fn default_true() -> bool {
    true
}

/// Request body for upserting a payment method.
///
/// `details` is the tagged union; its `type` discriminant decides the stored
/// method type, so a card payload with bank fields is rejected at
/// deserialization.
#[derive(Debug, Deserialize)]
pub struct UpsertPaymentMethodRequest {
    /// Present for updates.
    pub id: Option<Uuid>,
    /// Typed details.
    pub details: PaymentDetails,
    /// Whether this method is active.
    #[serde(default = "default_true")]
    pub is_active: bool,
}

/// GET /payment-methods - List the caller's payment methods.
async fn list_methods(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Vec<payment_methods::Model>>, ApiError> {
    let profile = resolve_profile(&state, auth.user_id()).await?;
    let repo = PaymentMethodRepository::new((*state.db).clone());
    Ok(Json(repo.list(profile.id).await?))
}

/// POST /payment-methods - Create or update a payment method.
async fn upsert_method(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(payload): Json<UpsertPaymentMethodRequest>,
) -> Result<Json<payment_methods::Model>, ApiError> {
    let profile = resolve_profile(&state, auth.user_id()).await?;
    let repo = PaymentMethodRepository::new((*state.db).clone());

    let method = repo
        .upsert(
            profile.id,
            PaymentMethodInput {
                id: payload.id,
                details: payload.details,
                is_active: payload.is_active,
            },
        )
        .await?;

    Ok(Json(method))
}

/// DELETE /payment-methods/{id} - Delete a payment method.
async fn delete_method(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<payment_methods::Model>, ApiError> {
    let profile = resolve_profile(&state, auth.user_id()).await?;
    let repo = PaymentMethodRepository::new((*state.db).clone());
    Ok(Json(repo.delete(profile.id, id).await?))
}
