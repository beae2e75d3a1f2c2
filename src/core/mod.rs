//! Core module containing the records, the store contract and error types

pub mod amount;
pub mod error;
pub mod extractors;
pub mod model;
pub mod store;

pub use error::{AppError, AppResult, ErrorKind, ErrorResponse, ResultExt};
pub use extractors::AppJson;
pub use model::{Company, CompanyDetail, CompanySummary, Invoice, InvoiceDetail, InvoiceSummary};
pub use store::{Store, StoreError, StoreResult};
