//! Transaction and cash flow routes.
//!
//! Writing a transaction also writes its cash flow (one database
//! transaction, direction derived from the type); cash flows themselves are
//! read-only.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::{delete, get, post},
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use super::resolve_profile;
use crate::{AppState, error::ApiError, middleware::AuthUser};
use fiscora_db::entities::{cash_flows, sea_orm_active_enums::TransactionType, transactions};
use fiscora_db::repositories::transaction::{
    TransactionFilter, TransactionInput, TransactionRepository,
};

/// Creates the transaction routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/transactions", get(list_transactions))
        .route("/transactions", post(upsert_transaction))
        .route("/transactions/{id}", delete(delete_transaction))
        .route("/cash-flows", get(list_cash_flows))
}

/// Request body for upserting a transaction.
#[derive(Debug, Deserialize)]
pub struct UpsertTransactionRequest {
    /// Present for updates.
    pub id: Option<Uuid>,
    /// Optional payment method id.
    pub payment_method_id: Option<Uuid>,
    /// Optional expense category id.
    pub expense_category_id: Option<Uuid>,
    /// PAYMENT or PAYOUT.
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    /// Amount as a decimal string.
    pub amount: Decimal,
    /// Date the transaction occurred.
    pub transaction_date: NaiveDate,
    /// External reference.
    pub reference: Option<String>,
    /// Free-form description.
    pub description: Option<String>,
}

/// Query parameters for listing transactions.
#[derive(Debug, Deserialize, Default)]
pub struct ListTransactionsQuery {
    /// Start of the date range (inclusive).
    pub from: Option<NaiveDate>,
    /// End of the date range (inclusive).
    pub to: Option<NaiveDate>,
    /// Restrict to one transaction type.
    #[serde(rename = "type")]
    pub transaction_type: Option<TransactionType>,
}

/// GET /transactions - List the caller's transactions with optional filters.
async fn list_transactions(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<ListTransactionsQuery>,
) -> Result<Json<Vec<transactions::Model>>, ApiError> {
    let profile = resolve_profile(&state, auth.user_id()).await?;
    let repo = TransactionRepository::new((*state.db).clone());

    let filter = TransactionFilter {
        from: query.from,
        to: query.to,
        transaction_type: query.transaction_type,
    };

    Ok(Json(repo.list(profile.id, &filter).await?))
}

/// POST /transactions - Create or update a transaction (and its cash flow).
async fn upsert_transaction(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(payload): Json<UpsertTransactionRequest>,
) -> Result<Json<transactions::Model>, ApiError> {
    let profile = resolve_profile(&state, auth.user_id()).await?;
    let repo = TransactionRepository::new((*state.db).clone());

    let transaction = repo
        .upsert(
            profile.id,
            TransactionInput {
                id: payload.id,
                payment_method_id: payload.payment_method_id,
                expense_category_id: payload.expense_category_id,
                transaction_type: payload.transaction_type,
                amount: payload.amount,
                transaction_date: payload.transaction_date,
                reference: payload.reference,
                description: payload.description,
            },
        )
        .await?;

    info!(transaction_id = %transaction.id, "Transaction upserted");
    Ok(Json(transaction))
}

/// DELETE /transactions/{id} - Delete a transaction and its cash flow.
async fn delete_transaction(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<transactions::Model>, ApiError> {
    let profile = resolve_profile(&state, auth.user_id()).await?;
    let repo = TransactionRepository::new((*state.db).clone());
    Ok(Json(repo.delete(profile.id, id).await?))
}

/// GET /cash-flows - List the caller's cash flows.
async fn list_cash_flows(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Vec<cash_flows::Model>>, ApiError> {
    let profile = resolve_profile(&state, auth.user_id()).await?;
    let repo = TransactionRepository::new((*state.db).clone());
    Ok(Json(repo.list_cash_flows(profile.id).await?))
}
