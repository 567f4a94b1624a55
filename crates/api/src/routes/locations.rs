//! Business location routes.

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
use fiscora_db::entities::business_locations;
use fiscora_db::repositories::location::{LocationInput, LocationRepository};

/// Creates the location routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/locations", get(list_locations))
        .route("/locations", post(upsert_location))
        .route("/locations/{id}", delete(delete_location))
        .route("/locations/{id}/deactivate", post(deactivate_location))
        .route("/locations/{id}/reactivate", post(reactivate_location))
}

/// Request body for upserting a location.
#[derive(Debug, Deserialize)]
pub struct UpsertLocationRequest {
    /// Present for updates.
    pub id: Option<Uuid>,
    /// Display label.
    pub label: Option<String>,
    /// Address line 1.
    pub address_line1: String,
    /// Address line 2.
    pub address_line2: Option<String>,
    /// City.
    pub city: String,
    /// State or province.
    pub state: Option<String>,
    /// Postal code.
    pub postal_code: Option<String>,
    /// Country.
    pub country: String,
    /// Latitude in decimal degrees.
    pub latitude: Option<Decimal>,
    /// Longitude in decimal degrees.
    pub longitude: Option<Decimal>,
    /// Whether this is the headquarters.
    #[serde(default)]
    pub is_headquarters: bool,
}

/// GET /locations - List the caller's locations.
async fn list_locations(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Vec<business_locations::Model>>, ApiError> {
    let profile = resolve_profile(&state, auth.user_id()).await?;
    let repo = LocationRepository::new((*state.db).clone());
    Ok(Json(repo.list(profile.id).await?))
}

/// POST /locations - Create or update a location.
async fn upsert_location(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(payload): Json<UpsertLocationRequest>,
) -> Result<Json<business_locations::Model>, ApiError> {
    let profile = resolve_profile(&state, auth.user_id()).await?;
    let repo = LocationRepository::new((*state.db).clone());

    let location = repo
        .upsert(
            profile.id,
            LocationInput {
                id: payload.id,
                label: payload.label,
                address_line1: payload.address_line1,
                address_line2: payload.address_line2,
                city: payload.city,
                state: payload.state,
                postal_code: payload.postal_code,
                country: payload.country,
                latitude: payload.latitude,
                longitude: payload.longitude,
                is_headquarters: payload.is_headquarters,
            },
        )
        .await?;

    Ok(Json(location))
}

/// POST /locations/{id}/deactivate - Soft-delete a location.
async fn deactivate_location(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<business_locations::Model>, ApiError> {
    let profile = resolve_profile(&state, auth.user_id()).await?;
    let repo = LocationRepository::new((*state.db).clone());
    Ok(Json(repo.deactivate(profile.id, id).await?))
}

/// POST /locations/{id}/reactivate - Undo a soft delete.
async fn reactivate_location(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<business_locations::Model>, ApiError> {
    let profile = resolve_profile(&state, auth.user_id()).await?;
    let repo = LocationRepository::new((*state.db).clone());
    Ok(Json(repo.reactivate(profile.id, id).await?))
}

/// DELETE /locations/{id} - Hard-delete a location.
async fn delete_location(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<business_locations::Model>, ApiError> {
    let profile = resolve_profile(&state, auth.user_id()).await?;
    let repo = LocationRepository::new((*state.db).clone());
    Ok(Json(repo.delete(profile.id, id).await?))
}
