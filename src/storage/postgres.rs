//! PostgreSQL storage backend using sqlx.
//!
//! Provides `PostgresStore`, backed by a `sqlx::PgPool`.
//!
//! # Feature flag
//!
//! This module is gated behind the `postgres` feature flag:
//! ```toml
//! [dependencies]
//! biztime = { version = "0.1", features = ["postgres"] }
//! ```
//!
//! # Schema
//!
//! `companies` keys on `code` and keeps `name` unique. `invoices` references
//! `companies` with `ON DELETE CASCADE` and checks `amt > 0`.

use crate::core::model::{Company, CompanySummary, Invoice, InvoiceSummary};
use crate::core::store::{Store, StoreError, StoreResult};
use anyhow::{Result, anyhow};
use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::error::ErrorKind;
use sqlx::postgres::PgPoolOptions;

// ---------------------------------------------------------------------------
// Schema management
// ---------------------------------------------------------------------------

/// Apply the required tables (idempotent).
///
/// Safe to call on every startup.
pub async fn ensure_schema(pool: &PgPool) -> Result<()> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS companies (
            code text PRIMARY KEY,
            name text NOT NULL UNIQUE,
            description text
        )",
    )
    .execute(pool)
    .await
    .map_err(|e| anyhow!("Failed to create companies table: {}", e))?;

    sqlx::query(
        "CREATE TABLE IF NOT EXISTS invoices (
            id serial PRIMARY KEY,
            comp_code text NOT NULL REFERENCES companies ON DELETE CASCADE,
            amt double precision NOT NULL,
            paid boolean DEFAULT false NOT NULL,
            add_date date DEFAULT CURRENT_DATE NOT NULL,
            paid_date date,
            CONSTRAINT invoices_amt_check CHECK (amt > 0)
        )",
    )
    .execute(pool)
    .await
    .map_err(|e| anyhow!("Failed to create invoices table: {}", e))?;

    Ok(())
}

// ---------------------------------------------------------------------------
// Error translation
// ---------------------------------------------------------------------------

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db) = &err {
            let message = db.message().to_string();
            match db.kind() {
                ErrorKind::UniqueViolation => return StoreError::UniqueViolation(message),
                ErrorKind::ForeignKeyViolation => return StoreError::ForeignKeyViolation(message),
                ErrorKind::CheckViolation => return StoreError::CheckViolation(message),
                _ => {}
            }
        }
        StoreError::Backend(err.to_string())
    }
}

// ---------------------------------------------------------------------------
// PostgresStore
// ---------------------------------------------------------------------------

const INVOICE_COLUMNS: &str = "id, comp_code, amt, paid, add_date, paid_date";

/// Store backed by PostgreSQL.
///
/// # Example
///
/// ```rust,ignore
/// let store = PostgresStore::connect("postgres://localhost/biztime", 5).await?;
/// ensure_schema(store.pool()).await?;
/// let companies = store.list_companies().await?;
/// ```
#[derive(Clone, Debug)]
pub struct PostgresStore {
    pool: PgPool,
}

impl PostgresStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Open a pool against `url`
    pub async fn connect(url: &str, max_connections: u32) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(url)
            .await
            .map_err(|e| anyhow!("Failed to connect to PostgreSQL: {}", e))?;
        Ok(Self::new(pool))
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl Store for PostgresStore {
    async fn list_companies(&self) -> StoreResult<Vec<CompanySummary>> {
        let rows = sqlx::query_as::<_, CompanySummary>("SELECT code, name FROM companies")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn get_company(&self, code: &str) -> StoreResult<Option<Company>> {
        let row = sqlx::query_as::<_, Company>(
            "SELECT code, name, description FROM companies WHERE code = $1",
        )
        .bind(code)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn insert_company(&self, company: Company) -> StoreResult<Company> {
        let row = sqlx::query_as::<_, Company>(
            "INSERT INTO companies (code, name, description) VALUES ($1, $2, $3) \
             RETURNING code, name, description",
        )
        .bind(&company.code)
        .bind(&company.name)
        .bind(&company.description)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn update_company(&self, company: Company) -> StoreResult<Option<Company>> {
        let row = sqlx::query_as::<_, Company>(
            "UPDATE companies SET name = $1, description = $2 WHERE code = $3 \
             RETURNING code, name, description",
        )
        .bind(&company.name)
        .bind(&company.description)
        .bind(&company.code)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn delete_company(&self, code: &str) -> StoreResult<u64> {
        let result = sqlx::query("DELETE FROM companies WHERE code = $1")
            .bind(code)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn list_invoices(&self) -> StoreResult<Vec<InvoiceSummary>> {
        let rows =
            sqlx::query_as::<_, InvoiceSummary>("SELECT id, comp_code FROM invoices ORDER BY id")
                .fetch_all(&self.pool)
                .await?;
        Ok(rows)
    }

    async fn get_invoice(&self, id: i32) -> StoreResult<Option<Invoice>> {
        let row = sqlx::query_as::<_, Invoice>(&format!(
            "SELECT {} FROM invoices WHERE id = $1",
            INVOICE_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn invoices_for_company(&self, code: &str) -> StoreResult<Vec<Invoice>> {
        let rows = sqlx::query_as::<_, Invoice>(&format!(
            "SELECT {} FROM invoices WHERE comp_code = $1 ORDER BY id",
            INVOICE_COLUMNS
        ))
        .bind(code)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn insert_invoice(&self, comp_code: &str, amt: f64) -> StoreResult<Invoice> {
        let row = sqlx::query_as::<_, Invoice>(&format!(
            "INSERT INTO invoices (comp_code, amt) VALUES ($1, $2) RETURNING {}",
            INVOICE_COLUMNS
        ))
        .bind(comp_code)
        .bind(amt)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn update_invoice_amount(&self, id: i32, amt: f64) -> StoreResult<Option<Invoice>> {
        let row = sqlx::query_as::<_, Invoice>(&format!(
            "UPDATE invoices SET amt = $1 WHERE id = $2 RETURNING {}",
            INVOICE_COLUMNS
        ))
        .bind(amt)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn delete_invoice(&self, id: i32) -> StoreResult<u64> {
        let result = sqlx::query("DELETE FROM invoices WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
