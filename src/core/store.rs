//! Store trait shared by every storage backend
//!
//! Each method maps to a single statement against the relational store.
//! Handlers never see backend-specific errors: implementations translate
//! constraint failures into [`StoreError`] variants.

use async_trait::async_trait;
use thiserror::Error;

use crate::core::model::{Company, CompanySummary, Invoice, InvoiceSummary};

/// Failures raised by a store
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StoreError {
    /// A unique or primary key constraint rejected the write
    #[error("unique constraint violated: {0}")]
    UniqueViolation(String),

    /// A referenced row does not exist
    #[error("foreign key constraint violated: {0}")]
    ForeignKeyViolation(String),

    /// A check constraint rejected the row
    #[error("check constraint violated: {0}")]
    CheckViolation(String),

    /// A key could not be interpreted by the store
    #[error("invalid key: {0}")]
    InvalidKey(String),

    /// Connection, protocol or any other backend failure
    #[error("storage backend error: {0}")]
    Backend(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Data access for companies and invoices
///
/// Lookups return `None` for missing rows, deletes return the number of
/// affected rows, and updates return `None` when no row matched.
#[async_trait]
pub trait Store: Send + Sync {
    /// All companies projected to `{code, name}`
    async fn list_companies(&self) -> StoreResult<Vec<CompanySummary>>;

    async fn get_company(&self, code: &str) -> StoreResult<Option<Company>>;

    /// Insert a company, failing on a duplicate code or name
    async fn insert_company(&self, company: Company) -> StoreResult<Company>;

    /// Overwrite `name` and `description` of the company with `company.code`
    async fn update_company(&self, company: Company) -> StoreResult<Option<Company>>;

    /// Delete a company and, through the cascade, its invoices
    async fn delete_company(&self, code: &str) -> StoreResult<u64>;

    /// All invoices projected to `{id, comp_code}`
    async fn list_invoices(&self) -> StoreResult<Vec<InvoiceSummary>>;

    async fn get_invoice(&self, id: i32) -> StoreResult<Option<Invoice>>;

    async fn invoices_for_company(&self, code: &str) -> StoreResult<Vec<Invoice>>;

    /// Insert an unpaid invoice dated today
    async fn insert_invoice(&self, comp_code: &str, amt: f64) -> StoreResult<Invoice>;

    /// Set `amt` only; `paid` and `paid_date` are left alone
    async fn update_invoice_amount(&self, id: i32, amt: f64) -> StoreResult<Option<Invoice>>;

    async fn delete_invoice(&self, id: i32) -> StoreResult<u64>;
}
