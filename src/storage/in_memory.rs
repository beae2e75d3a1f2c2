//! In-memory implementation of Store for testing and development
//!
//! Enforces the same constraints as the PostgreSQL schema: unique company
//! code and name, invoice foreign key with delete cascade, and `amt > 0`.

use crate::core::model::{Company, CompanySummary, Invoice, InvoiceSummary};
use crate::core::store::{Store, StoreError, StoreResult};
use async_trait::async_trait;
use chrono::Utc;
use indexmap::IndexMap;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

#[derive(Default)]
struct Tables {
    /// Keyed by code, kept in insertion order
    companies: IndexMap<String, Company>,
    invoices: BTreeMap<i32, Invoice>,
    last_invoice_id: i32,
}

/// In-memory store implementation
///
/// Uses RwLock for thread-safe access. Clones share the same tables.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryStore {
    /// Create a new, empty in-memory store
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> StoreResult<RwLockReadGuard<'_, Tables>> {
        self.tables
            .read()
            .map_err(|e| StoreError::Backend(format!("Failed to acquire read lock: {}", e)))
    }

    fn write(&self) -> StoreResult<RwLockWriteGuard<'_, Tables>> {
        self.tables
            .write()
            .map_err(|e| StoreError::Backend(format!("Failed to acquire write lock: {}", e)))
    }
}

fn check_amount(amt: f64) -> StoreResult<()> {
    if amt > 0.0 {
        Ok(())
    } else {
        Err(StoreError::CheckViolation(format!(
            "invoices_amt_check: amt must be positive (got {})",
            amt
        )))
    }
}

#[async_trait]
impl Store for InMemoryStore {
    async fn list_companies(&self) -> StoreResult<Vec<CompanySummary>> {
        let tables = self.read()?;
        Ok(tables.companies.values().map(CompanySummary::from).collect())
    }

    async fn get_company(&self, code: &str) -> StoreResult<Option<Company>> {
        let tables = self.read()?;
        Ok(tables.companies.get(code).cloned())
    }

    async fn insert_company(&self, company: Company) -> StoreResult<Company> {
        let mut tables = self.write()?;

        if tables.companies.contains_key(&company.code) {
            return Err(StoreError::UniqueViolation(format!(
                "companies_pkey: code '{}' already exists",
                company.code
            )));
        }
        if tables.companies.values().any(|c| c.name == company.name) {
            return Err(StoreError::UniqueViolation(format!(
                "companies_name_key: name '{}' already exists",
                company.name
            )));
        }

        tables
            .companies
            .insert(company.code.clone(), company.clone());

        Ok(company)
    }

    async fn update_company(&self, company: Company) -> StoreResult<Option<Company>> {
        let mut tables = self.write()?;

        if !tables.companies.contains_key(&company.code) {
            return Ok(None);
        }
        if tables
            .companies
            .values()
            .any(|c| c.code != company.code && c.name == company.name)
        {
            return Err(StoreError::UniqueViolation(format!(
                "companies_name_key: name '{}' already exists",
                company.name
            )));
        }

        tables
            .companies
            .insert(company.code.clone(), company.clone());

        Ok(Some(company))
    }

    async fn delete_company(&self, code: &str) -> StoreResult<u64> {
        let mut tables = self.write()?;

        if tables.companies.shift_remove(code).is_none() {
            return Ok(0);
        }
        tables.invoices.retain(|_, invoice| invoice.comp_code != code);

        Ok(1)
    }

    async fn list_invoices(&self) -> StoreResult<Vec<InvoiceSummary>> {
        let tables = self.read()?;
        Ok(tables.invoices.values().map(InvoiceSummary::from).collect())
    }

    async fn get_invoice(&self, id: i32) -> StoreResult<Option<Invoice>> {
        let tables = self.read()?;
        Ok(tables.invoices.get(&id).cloned())
    }

    async fn invoices_for_company(&self, code: &str) -> StoreResult<Vec<Invoice>> {
        let tables = self.read()?;
        Ok(tables
            .invoices
            .values()
            .filter(|invoice| invoice.comp_code == code)
            .cloned()
            .collect())
    }

    async fn insert_invoice(&self, comp_code: &str, amt: f64) -> StoreResult<Invoice> {
        let mut tables = self.write()?;

        check_amount(amt)?;
        if !tables.companies.contains_key(comp_code) {
            return Err(StoreError::ForeignKeyViolation(format!(
                "invoices_comp_code_fkey: company '{}' does not exist",
                comp_code
            )));
        }

        tables.last_invoice_id += 1;
        let invoice = Invoice {
            id: tables.last_invoice_id,
            comp_code: comp_code.to_string(),
            amt,
            paid: false,
            add_date: Utc::now().date_naive(),
            paid_date: None,
        };
        tables.invoices.insert(invoice.id, invoice.clone());

        Ok(invoice)
    }

    async fn update_invoice_amount(&self, id: i32, amt: f64) -> StoreResult<Option<Invoice>> {
        let mut tables = self.write()?;

        let Some(invoice) = tables.invoices.get_mut(&id) else {
            return Ok(None);
        };
        check_amount(amt)?;
        invoice.amt = amt;

        Ok(Some(invoice.clone()))
    }

    async fn delete_invoice(&self, id: i32) -> StoreResult<u64> {
        let mut tables = self.write()?;
        Ok(u64::from(tables.invoices.remove(&id).is_some()))
    }
}
