//! Business information routes (1:1 with the profile).

use axum::{
    Json, Router,
    extract::State,
    routing::{delete, get, post},
};
use serde::Deserialize;

use super::resolve_profile;
use crate::{AppState, error::ApiError, middleware::AuthUser};
use fiscora_db::entities::business_information;
use fiscora_db::repositories::information::{
    BusinessInformationInput, BusinessInformationRepository,
};
use fiscora_shared::AppError;

/// Creates the business information routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/business-information", get(get_information))
        .route("/business-information", post(upsert_information))
        .route("/business-information", delete(delete_information))
}

fn default_currency() -> String {
    "USD".to_string()
}

fn default_fiscal_month() -> i16 {
    1
}

/// Request body for upserting business information.
#[derive(Debug, Deserialize)]
pub struct UpsertInformationRequest {
    /// Tax identifier.
    pub tax_id: Option<String>,
    /// Company registration number.
    pub registration_number: Option<String>,
    /// ISO 4217 currency code.
    #[serde(default = "default_currency")]
    pub currency: String,
    /// BCP 47 locale tag.
    pub locale: Option<String>,
    /// Month (1-12) the fiscal year starts in.
    #[serde(default = "default_fiscal_month")]
    pub fiscal_year_start_month: i16,
    /// Free-form compliance notes.
    pub compliance_notes: Option<String>,
}

/// GET /business-information - Fetch the caller's information row.
async fn get_information(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Option<business_information::Model>>, ApiError> {
    let profile = resolve_profile(&state, auth.user_id()).await?;
    let repo = BusinessInformationRepository::new((*state.db).clone());
    Ok(Json(repo.get(profile.id).await?))
}

/// POST /business-information - Create or update the caller's information.
async fn upsert_information(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(payload): Json<UpsertInformationRequest>,
) -> Result<Json<business_information::Model>, ApiError> {
    if payload.currency.len() != 3 {
        return Err(
            AppError::Validation("currency must be a 3-letter ISO 4217 code".to_string()).into(),
        );
    }

    let profile = resolve_profile(&state, auth.user_id()).await?;
    let repo = BusinessInformationRepository::new((*state.db).clone());

    let row = repo
        .upsert(
            profile.id,
            BusinessInformationInput {
                tax_id: payload.tax_id,
                registration_number: payload.registration_number,
                currency: payload.currency.to_uppercase(),
                locale: payload.locale,
                fiscal_year_start_month: payload.fiscal_year_start_month,
                compliance_notes: payload.compliance_notes,
            },
        )
        .await?;

    Ok(Json(row))
}

/// DELETE /business-information - Remove the caller's information row.
async fn delete_information(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<business_information::Model>, ApiError> {
    let profile = resolve_profile(&state, auth.user_id()).await?;
    let repo = BusinessInformationRepository::new((*state.db).clone());
    Ok(Json(repo.delete(profile.id).await?))
}
