//! Company resource
//!
//! - `GET    /companies`        → `{companies: [{code, name}]}`
//! - `GET    /companies/{code}` → `{company: {code, name, description, invoices}}`
//! - `POST   /companies`        → `{company: {code, name, description}}` (201)
//! - `PUT    /companies/{code}` → `{company: {code, name, description}}`
//! - `DELETE /companies/{code}` → `{message: "deleted"}`

use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{AppState, DeletedResponse};
use crate::core::{
    AppError, AppJson, AppResult, Company, CompanyDetail, CompanySummary, ResultExt,
};

const NOT_FOUND: &str = "Company not found.";
const INVALID_INPUT: &str = "Invalid Input.";
const CODE_TAKEN: &str = "Code taken.";
const INVALID_UPDATE: &str = "Invalid Code.";
const INVALID_DELETE: &str = "Invalid code.";

#[derive(Debug, Serialize)]
pub struct CompanyListResponse {
    pub companies: Vec<CompanySummary>,
}

#[derive(Debug, Serialize)]
pub struct CompanyResponse<T> {
    pub company: T,
}

/// Request body for creating a company; missing fields count as empty
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CreateCompanyRequest {
    pub code: String,
    pub name: String,
    pub description: Option<String>,
}

/// Request body for updating a company; absent fields keep their stored value
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct UpdateCompanyRequest {
    pub name: Option<String>,
    pub description: Option<String>,
}

pub async fn list_companies(
    State(state): State<AppState>,
) -> AppResult<AppJson<CompanyListResponse>> {
    let companies = state.store.list_companies().await?;
    Ok(AppJson(CompanyListResponse { companies }))
}

/// The company lookup and the invoice lookup are two separate statements;
/// the second only runs once the first has found the company.
pub async fn get_company(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> AppResult<AppJson<CompanyResponse<CompanyDetail>>> {
    let company = state
        .store
        .get_company(&code)
        .await?
        .ok_or_else(|| AppError::not_found(NOT_FOUND))?;

    let invoices = state.store.invoices_for_company(&company.code).await?;

    Ok(AppJson(CompanyResponse {
        company: CompanyDetail { company, invoices },
    }))
}

pub async fn create_company(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateCompanyRequest>,
) -> AppResult<(StatusCode, AppJson<CompanyResponse<Company>>)> {
    let company = insert_company(&state, payload)
        .await
        .remap_unexpected(AppError::conflict(CODE_TAKEN))?;

    tracing::debug!(code = %company.code, "company created");

    Ok((StatusCode::CREATED, AppJson(CompanyResponse { company })))
}

async fn insert_company(state: &AppState, payload: CreateCompanyRequest) -> AppResult<Company> {
    let company = Company::new(payload.code, payload.name, payload.description);
    company
        .validate()
        .map_err(|_| AppError::validation(INVALID_INPUT))?;

    Ok(state.store.insert_company(company).await?)
}

pub async fn update_company(
    State(state): State<AppState>,
    Path(code): Path<String>,
    AppJson(payload): AppJson<UpdateCompanyRequest>,
) -> AppResult<AppJson<CompanyResponse<Company>>> {
    let company = apply_update(&state, code, payload)
        .await
        .remap_unexpected(AppError::conflict(INVALID_UPDATE))?;

    tracing::debug!(code = %company.code, "company updated");

    Ok(AppJson(CompanyResponse { company }))
}

/// Merge the request over the stored row, then validate the merged row.
///
/// A supplied empty `name` is kept and fails validation. An empty
/// `description` counts as absent and keeps the stored one.
async fn apply_update(
    state: &AppState,
    code: String,
    payload: UpdateCompanyRequest,
) -> AppResult<Company> {
    let current = state
        .store
        .get_company(&code)
        .await?
        .ok_or_else(|| AppError::not_found(NOT_FOUND))?;

    let merged = Company::new(
        code,
        payload.name.unwrap_or(current.name),
        payload
            .description
            .filter(|d| !d.is_empty())
            .or(current.description),
    );
    merged
        .validate()
        .map_err(|_| AppError::validation(INVALID_INPUT))?;

    state
        .store
        .update_company(merged)
        .await?
        .ok_or_else(|| AppError::not_found(NOT_FOUND))
}

/// Deleting a missing company answers 400, unlike the 404 of a lookup.
pub async fn delete_company(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> AppResult<AppJson<DeletedResponse>> {
    let affected = state.store.delete_company(&code).await?;
    if affected == 0 {
        return Err(AppError::validation(INVALID_DELETE));
    }

    tracing::debug!(%code, "company deleted");

    Ok(AppJson(DeletedResponse::default()))
}
