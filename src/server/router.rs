//! Router builder utilities for the resource routes

use crate::handlers::AppState;
use crate::handlers::companies::{
    create_company, delete_company, get_company, list_companies, update_company,
};
use crate::handlers::invoices::{
    create_invoice, delete_invoice, get_invoice, list_invoices, update_invoice,
};
use axum::{Json, Router, routing::get};
use serde_json::{Value, json};

/// Build company routes
///
/// - GET/POST /companies
/// - GET/PUT/DELETE /companies/{code}
pub fn build_company_routes(state: AppState) -> Router {
    Router::new()
        .route("/companies", get(list_companies).post(create_company))
        .route(
            "/companies/{code}",
            get(get_company).put(update_company).delete(delete_company),
        )
        .with_state(state)
}

/// Build invoice routes
///
/// - GET/POST /invoices
/// - GET/PUT/DELETE /invoices/{id}
pub fn build_invoice_routes(state: AppState) -> Router {
    Router::new()
        .route("/invoices", get(list_invoices).post(create_invoice))
        .route(
            "/invoices/{id}",
            get(get_invoice).put(update_invoice).delete(delete_invoice),
        )
        .with_state(state)
}

/// Build health check routes
pub fn build_health_routes() -> Router {
    Router::new().route("/health", get(health_check))
}

async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "biztime"
    }))
}
