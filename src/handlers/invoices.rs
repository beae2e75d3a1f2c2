//! Invoice resource
//!
//! - `GET    /invoices`      → `{invoices: [{id, comp_code}]}`
//! - `GET    /invoices/{id}` → `{invoice: {id, amt, paid, add_date, paid_date, company}}`
//! - `POST   /invoices`      → `{invoice: {id, comp_code, amt, paid, add_date, paid_date}}` (201)
//! - `PUT    /invoices/{id}` → `{invoice: {...}}`
//! - `DELETE /invoices/{id}` → `{message: "deleted"}`

use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{AppState, DeletedResponse};
use crate::core::amount::parse_amount;
use crate::core::{
    AppError, AppJson, AppResult, Invoice, InvoiceDetail, InvoiceSummary, ResultExt, StoreError,
};

const NOT_FOUND: &str = "Invoice not found.";
const MISSING_COMPANY: &str = "Must enter company code.";
const INVALID_AMOUNT: &str = "Invalid amount.";
const INVALID_COMPANY: &str = "Invalid company code.";
const INVALID_ID: &str = "Invalid invoice ID.";

#[derive(Debug, Serialize)]
pub struct InvoiceListResponse {
    pub invoices: Vec<InvoiceSummary>,
}

#[derive(Debug, Serialize)]
pub struct InvoiceResponse<T> {
    pub invoice: T,
}

/// Request body for creating an invoice
///
/// `amt` is kept as raw JSON so numeric strings can be coerced.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CreateInvoiceRequest {
    pub comp_code: Option<String>,
    pub amt: Option<Value>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct UpdateInvoiceRequest {
    pub amt: Option<Value>,
}

/// Invoice ids are integers; anything else is a key the store cannot use.
fn parse_id(raw: &str) -> Result<i32, StoreError> {
    raw.parse::<i32>()
        .map_err(|_| StoreError::InvalidKey(raw.to_string()))
}

fn validated_amount(amt: Option<&Value>) -> AppResult<f64> {
    parse_amount(amt).ok_or_else(|| AppError::validation(INVALID_AMOUNT))
}

pub async fn list_invoices(
    State(state): State<AppState>,
) -> AppResult<AppJson<InvoiceListResponse>> {
    let invoices = state.store.list_invoices().await?;
    Ok(AppJson(InvoiceListResponse { invoices }))
}

pub async fn get_invoice(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<AppJson<InvoiceResponse<InvoiceDetail>>> {
    let Ok(id) = parse_id(&raw_id) else {
        return Err(AppError::not_found(NOT_FOUND));
    };

    let invoice = state
        .store
        .get_invoice(id)
        .await?
        .ok_or_else(|| AppError::not_found(NOT_FOUND))?;

    let company = state.store.get_company(&invoice.comp_code).await?;

    Ok(AppJson(InvoiceResponse {
        invoice: invoice.into_detail(company),
    }))
}

pub async fn create_invoice(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateInvoiceRequest>,
) -> AppResult<(StatusCode, AppJson<InvoiceResponse<Invoice>>)> {
    let invoice = insert_invoice(&state, payload)
        .await
        .remap_unexpected(AppError::validation(INVALID_COMPANY))?;

    tracing::debug!(id = invoice.id, comp_code = %invoice.comp_code, "invoice created");

    Ok((StatusCode::CREATED, AppJson(InvoiceResponse { invoice })))
}

async fn insert_invoice(state: &AppState, payload: CreateInvoiceRequest) -> AppResult<Invoice> {
    let comp_code = payload
        .comp_code
        .filter(|code| !code.is_empty())
        .ok_or_else(|| AppError::validation(MISSING_COMPANY))?;
    let amt = validated_amount(payload.amt.as_ref())?;

    Ok(state.store.insert_invoice(&comp_code, amt).await?)
}

pub async fn update_invoice(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    AppJson(payload): AppJson<UpdateInvoiceRequest>,
) -> AppResult<AppJson<InvoiceResponse<Invoice>>> {
    let invoice = apply_amount(&state, &raw_id, payload)
        .await
        .remap_unexpected(AppError::conflict(INVALID_ID))?;

    tracing::debug!(id = invoice.id, amt = invoice.amt, "invoice updated");

    Ok(AppJson(InvoiceResponse { invoice }))
}

/// Only `amt` is written; the paid flag and date never change here.
async fn apply_amount(
    state: &AppState,
    raw_id: &str,
    payload: UpdateInvoiceRequest,
) -> AppResult<Invoice> {
    let amt = validated_amount(payload.amt.as_ref())?;
    let id = parse_id(raw_id)?;

    state
        .store
        .update_invoice_amount(id, amt)
        .await?
        .ok_or_else(|| AppError::not_found(NOT_FOUND))
}

pub async fn delete_invoice(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<AppJson<DeletedResponse>> {
    remove_invoice(&state, &raw_id)
        .await
        .remap_unexpected(AppError::conflict(INVALID_ID))?;

    tracing::debug!(id = %raw_id, "invoice deleted");

    Ok(AppJson(DeletedResponse::default()))
}

async fn remove_invoice(state: &AppState, raw_id: &str) -> AppResult<()> {
    let id = parse_id(raw_id)?;
    let affected = state.store.delete_invoice(id).await?;
    if affected == 0 {
        return Err(AppError::validation(INVALID_ID));
    }
    Ok(())
}
