//! Report routes.

use axum::{
    Json, Router,
    extract::{Query, State},
    routing::get,
};
use chrono::NaiveDate;
use serde::Deserialize;

use super::resolve_profile;
use crate::{AppState, error::ApiError, middleware::AuthUser};
use fiscora_core::report::ProfitLossReport;
use fiscora_db::repositories::report::ReportRepository;
use fiscora_shared::AppError;

/// Creates the report routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/reports/profit-loss", get(profit_loss))
}

/// Query parameters for the profit/loss report.
#[derive(Debug, Deserialize, Default)]
pub struct ProfitLossQuery {
    /// Start of the range (inclusive); defaults to January 1st of this year.
    pub from: Option<NaiveDate>,
    /// End of the range (inclusive); defaults to today.
    pub to: Option<NaiveDate>,
}

/// GET /reports/profit-loss - Per-category revenue/expense rows + summary.
async fn profit_loss(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<ProfitLossQuery>,
) -> Result<Json<ProfitLossReport>, ApiError> {
    if let (Some(from), Some(to)) = (query.from, query.to)
        && from > to
    {
        return Err(AppError::Validation(format!(
            "invalid date range: {from} is after {to}"
        ))
        .into());
    }

    let profile = resolve_profile(&state, auth.user_id()).await?;
    let report = ReportRepository::new((*state.db).clone())
        .profit_loss(profile.id, query.from, query.to)
        .await?;

    Ok(Json(report))
}
