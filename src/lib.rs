//! # biztime
//!
//! A small REST API over two related tables: companies and their invoices.
//!
//! ## Features
//!
//! - **Classified errors**: every failure renders as
//!   `{"error": {"message", "status"}}` with a 400, 404, 409 or 500 status
//! - **Nested resources**: a company embeds its invoices, an invoice embeds its company
//! - **Pluggable store**: in-memory for tests and development, PostgreSQL behind
//!   the `postgres` feature
//! - **Configuration**: YAML file plus environment overrides
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use biztime::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     ServerBuilder::new()
//!         .with_store(InMemoryStore::new())
//!         .serve("127.0.0.1:3000")
//!         .await
//! }
//! ```

pub mod config;
pub mod core;
pub mod handlers;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        AppError, AppJson, AppResult, Company, CompanyDetail, CompanySummary, ErrorKind,
        ErrorResponse, Invoice, InvoiceDetail, InvoiceSummary, ResultExt, Store, StoreError,
        StoreResult,
    };

    // === Handlers ===
    pub use crate::handlers::{AppState, DeletedResponse};

    // === Storage ===
    pub use crate::storage::InMemoryStore;
    #[cfg(feature = "postgres")]
    pub use crate::storage::{PostgresStore, ensure_schema};

    // === Config ===
    pub use crate::config::AppConfig;

    // === Server ===
    pub use crate::server::ServerBuilder;

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
}
