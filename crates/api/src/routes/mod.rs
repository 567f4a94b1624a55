//! API route definitions.

use axum::{Router, middleware};
use uuid::Uuid;

use crate::error::ApiError;
use crate::{AppState, middleware::auth::auth_middleware};
use fiscora_db::BusinessProfileRepository;
use fiscora_db::entities::business_profiles;

pub mod auth;
pub mod balance_sheet;
pub mod budgets;
pub mod contacts;
pub mod expenses;
pub mod goals;
pub mod health;
pub mod information;
pub mod inventory;
pub mod invoices;
pub mod locations;
pub mod payment_methods;
pub mod products;
pub mod profile;
pub mod purchase_orders;
pub mod reports;
pub mod suppliers;
pub mod transactions;

/// Creates the API router: public routes plus the protected surface behind
/// the auth middleware.
#[allow(clippy::needless_pass_by_value)]
pub fn api_routes(state: AppState) -> Router<AppState> {
    let protected = Router::new()
        .merge(profile::routes())
        .merge(information::routes())
        .merge(contacts::routes())
        .merge(locations::routes())
        .merge(expenses::routes())
        .merge(transactions::routes())
        .merge(budgets::routes())
        .merge(goals::routes())
        .merge(invoices::routes())
        .merge(products::routes())
        .merge(suppliers::routes())
        .merge(inventory::routes())
        .merge(purchase_orders::routes())
        .merge(payment_methods::routes())
        .merge(balance_sheet::routes())
        .merge(reports::routes())
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    Router::new()
        .merge(health::routes())
        .merge(auth::routes())
        .merge(protected)
}

/// Resolves the caller's business profile, creating one on first access.
///
/// This is the only way handlers obtain a tenant id; nothing tenant-related
/// is ever read from the request itself.
pub(crate) async fn resolve_profile(
    state: &AppState,
    user_id: Uuid,
) -> Result<business_profiles::Model, ApiError> {
    Ok(BusinessProfileRepository::new((*state.db).clone())
        .find_or_create_for_user(user_id)
        .await?)
}
