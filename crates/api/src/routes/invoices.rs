//! Invoice routes.

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{delete, get, post},
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use uuid::Uuid;

use super::resolve_profile;
use crate::{AppState, error::ApiError, middleware::AuthUser};
use fiscora_db::entities::{invoices, sea_orm_active_enums::InvoiceStatus};
use fiscora_db::repositories::invoice::{InvoiceInput, InvoiceRepository};

/// Creates the invoice routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/invoices", get(list_invoices))
        .route("/invoices", post(upsert_invoice))
        .route("/invoices/{id}", delete(delete_invoice))
}

fn default_status() -> InvoiceStatus {
    InvoiceStatus::Draft
}

/// Request body for upserting an invoice.
#[derive(Debug, Deserialize)]
pub struct UpsertInvoiceRequest {
    /// Present for updates.
    pub id: Option<Uuid>,
    /// Invoice number as shown to the customer.
    pub invoice_number: String,
    /// Customer name.
    pub customer_name: String,
    /// Invoiced amount as a decimal string.
    pub amount: Decimal,
    /// Lifecycle status.
    #[serde(default = "default_status")]
    pub status: InvoiceStatus,
    /// Issue date.
    pub issue_date: NaiveDate,
    /// Optional due date.
    pub due_date: Option<NaiveDate>,
}

/// GET /invoices - List the caller's invoices.
async fn list_invoices(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Vec<invoices::Model>>, ApiError> {
    let profile = resolve_profile(&state, auth.user_id()).await?;
    let repo = InvoiceRepository::new((*state.db).clone());
    Ok(Json(repo.list(profile.id).await?))
}

/// POST /invoices - Create or update an invoice.
async fn upsert_invoice(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(payload): Json<UpsertInvoiceRequest>,
) -> Result<Json<invoices::Model>, ApiError> {
    let profile = resolve_profile(&state, auth.user_id()).await?;
    let repo = InvoiceRepository::new((*state.db).clone());

    let invoice = repo
        .upsert(
            profile.id,
            InvoiceInput {
                id: payload.id,
                invoice_number: payload.invoice_number,
                customer_name: payload.customer_name,
                amount: payload.amount,
                status: payload.status,
                issue_date: payload.issue_date,
                due_date: payload.due_date,
            },
        )
        .await?;

    Ok(Json(invoice))
}

/// DELETE /invoices/{id} - Delete an invoice.
async fn delete_invoice(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<invoices::Model>, ApiError> {
    let profile = resolve_profile(&state, auth.user_id()).await?;
    let repo = InvoiceRepository::new((*state.db).clone());
    Ok(Json(repo.delete(profile.id, id).await?))
}
