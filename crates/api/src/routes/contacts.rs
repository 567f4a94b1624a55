//! Business contact routes.

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{delete, get, post},
};
use serde::Deserialize;
use uuid::Uuid;

use super::resolve_profile;
use crate::{AppState, error::ApiError, middleware::AuthUser};
use fiscora_db::entities::business_contacts;
use fiscora_db::repositories::contact::{ContactInput, ContactRepository};

/// Creates the contact routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/contacts", get(list_contacts))
        .route("/contacts", post(upsert_contact))
        .route("/contacts/{id}", delete(delete_contact))
}

fn default_true() -> bool {
    true
}

/// Request body for upserting a contact.
#[derive(Debug, Deserialize)]
pub struct UpsertContactRequest {
    /// Present for updates.
    pub id: Option<Uuid>,
    /// Contact name.
    pub name: String,
    /// Role at the business.
    pub role: Option<String>,
    /// Email address.
    pub email: Option<String>,
    /// Phone number.
    pub phone: Option<String>,
    /// Whether this is the primary contact.
    #[serde(default)]
    pub is_primary: bool,
    /// Whether this contact is active.
    #[serde(default = "default_true")]
    pub is_active: bool,
}

/// GET /contacts - List the caller's contacts.
async fn list_contacts(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Vec<business_contacts::Model>>, ApiError> {
    let profile = resolve_profile(&state, auth.user_id()).await?;
    let repo = ContactRepository::new((*state.db).clone());
    Ok(Json(repo.list(profile.id).await?))
}

/// POST /contacts - Create or update a contact.
async fn upsert_contact(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(payload): Json<UpsertContactRequest>,
) -> Result<Json<business_contacts::Model>, ApiError> {
    let profile = resolve_profile(&state, auth.user_id()).await?;
    let repo = ContactRepository::new((*state.db).clone());

    let contact = repo
        .upsert(
            profile.id,
            ContactInput {
                id: payload.id,
                name: payload.name,
                role: payload.role,
                email: payload.email,
                phone: payload.phone,
                is_primary: payload.is_primary,
                is_active: payload.is_active,
            },
        )
        .await?;

    Ok(Json(contact))
}

/// DELETE /contacts/{id} - Delete a contact.
async fn delete_contact(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<business_contacts::Model>, ApiError> {
    let profile = resolve_profile(&state, auth.user_id()).await?;
    let repo = ContactRepository::new((*state.db).clone());
    Ok(Json(repo.delete(profile.id, id).await?))
}
