//! HTTP handlers for the company and invoice resources

pub mod companies;
pub mod invoices;

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::core::Store;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Store>,
}

impl AppState {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }
}

/// Body returned by successful deletes: `{"message": "deleted"}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeletedResponse {
    pub message: String,
}

impl Default for DeletedResponse {
    fn default() -> Self {
        Self {
            message: "deleted".to_string(),
        }
    }
}
