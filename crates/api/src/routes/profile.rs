//! Business profile routes.

use axum::{
    Json, Router,
    extract::State,
    routing::{delete, get, post},
};
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use super::resolve_profile;
use crate::{AppState, error::ApiError, middleware::AuthUser};
use fiscora_db::BusinessProfileRepository;
use fiscora_db::entities::business_profiles;
use fiscora_db::repositories::profile::BusinessProfileInput;

/// Creates the business profile routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/business-profile", get(get_profile))
        .route("/business-profile", post(upsert_profile))
        .route("/business-profile", delete(delete_profile))
        .route("/business-profile/deactivate", post(deactivate_profile))
        .route("/business-profile/reactivate", post(reactivate_profile))
}

/// Request body for upserting the business profile.
#[derive(Debug, Deserialize)]
pub struct UpsertProfileRequest {
    /// Present for updates; must be the caller's own profile id.
    pub id: Option<Uuid>,
    /// Company display name.
    pub company_name: String,
    /// Contact email.
    pub email: Option<String>,
    /// Contact phone.
    pub phone: Option<String>,
    /// Public website.
    pub website: Option<String>,
    /// Address line 1.
    pub address_line1: Option<String>,
    /// Address line 2.
    pub address_line2: Option<String>,
    /// City.
    pub city: Option<String>,
    /// State or province.
    pub state: Option<String>,
    /// Postal code.
    pub postal_code: Option<String>,
    /// Country.
    pub country: Option<String>,
    /// Branding logo URL.
    pub logo_url: Option<String>,
}

/// GET /business-profile - Resolve the caller's profile, creating it on
/// first access.
async fn get_profile(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<business_profiles::Model>, ApiError> {
    let profile = resolve_profile(&state, auth.user_id()).await?;
    Ok(Json(profile))
}

/// POST /business-profile - Create or update the caller's profile.
async fn upsert_profile(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(payload): Json<UpsertProfileRequest>,
) -> Result<Json<business_profiles::Model>, ApiError> {
    let repo = BusinessProfileRepository::new((*state.db).clone());

    let profile = repo
        .upsert(
            auth.user_id(),
            BusinessProfileInput {
                id: payload.id,
                company_name: payload.company_name,
                email: payload.email,
                phone: payload.phone,
                website: payload.website,
                address_line1: payload.address_line1,
                address_line2: payload.address_line2,
                city: payload.city,
                state: payload.state,
                postal_code: payload.postal_code,
                country: payload.country,
                logo_url: payload.logo_url,
            },
        )
        .await?;

    info!(profile_id = %profile.id, "Business profile upserted");
    Ok(Json(profile))
}

/// POST /business-profile/deactivate - Soft-delete the caller's profile.
async fn deactivate_profile(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<business_profiles::Model>, ApiError> {
    let profile = resolve_profile(&state, auth.user_id()).await?;
    let repo = BusinessProfileRepository::new((*state.db).clone());
    Ok(Json(repo.deactivate(profile.id).await?))
}

/// POST /business-profile/reactivate - Undo a soft delete.
async fn reactivate_profile(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<business_profiles::Model>, ApiError> {
    let profile = resolve_profile(&state, auth.user_id()).await?;
    let repo = BusinessProfileRepository::new((*state.db).clone());
    Ok(Json(repo.reactivate(profile.id).await?))
}

/// DELETE /business-profile - Hard-delete the caller's profile and all of
/// its scoped data.
async fn delete_profile(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<business_profiles::Model>, ApiError> {
    let profile = resolve_profile(&state, auth.user_id()).await?;
    let repo = BusinessProfileRepository::new((*state.db).clone());
    let deleted = repo.delete(profile.id).await?;

    info!(profile_id = %deleted.id, "Business profile deleted");
    Ok(Json(deleted))
}
