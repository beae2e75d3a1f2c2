//! Shared test harness for storage backend testing
//!
//! Provides the seed data used across suites and the two contract macros:
//! `store_contract_tests!` (direct `Store` calls) and `rest_contract_tests!`
//! (full HTTP round-trips through the router).
//!
//! # Usage
//!
//! From any integration test file in `tests/`:
//! ```rust,ignore
//! #[macro_use]
//! mod storage_harness;
//! use storage_harness::*;
//!
//! store_contract_tests!(InMemoryStore::new());
//! rest_contract_tests!(InMemoryStore::new());
//! ```

#![allow(dead_code)]

#[macro_use]
pub mod store_tests;


use biztime::core::{Company, Invoice, Store};

/// The company every suite starts from
pub fn apple() -> Company {
    Company::new(
        "apple",
        "Apple",
        Some("fruit producing company".to_string()),
    )
}

pub fn ibm() -> Company {
    Company::new("ibm", "IBM", Some("Big blue.".to_string()))
}

/// Insert `apple` and one invoice of 0.75 for it
pub async fn seed_apple(store: &dyn Store) -> (Company, Invoice) {
    let company = store.insert_company(apple()).await.unwrap();
    let invoice = store.insert_invoice("apple", 0.75).await.unwrap();
    (company, invoice)
}
