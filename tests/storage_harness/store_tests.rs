//! Macro-generated test suite for `Store` contract validation.
//!
//! Every backend must report constraint failures through the same
//! `StoreError` variants, since handlers classify errors from them.
//!
//! # Generated Tests
//!
//! ## Companies
//! - `test_insert_and_get_company`, `test_get_missing_company`
//! - `test_list_companies_projection`
//! - `test_duplicate_code_rejected`, `test_duplicate_name_rejected`
//! - `test_update_company`, `test_update_missing_company`
//! - `test_delete_company`, `test_delete_company_cascades_invoices`
//!
//! ## Invoices
//! - `test_insert_invoice_defaults`, `test_insert_invoice_unknown_company`
//! - `test_insert_invoice_non_positive_amount`
//! - `test_invoices_for_company`, `test_list_invoices_projection`
//! - `test_update_invoice_amount`, `test_update_missing_invoice`
//! - `test_update_invoice_negative_amount`, `test_delete_invoice`

/// Generate a full `Store` conformance test suite.
///
/// `$factory` must evaluate to a fresh, empty store implementing `Store`.
/// It is re-evaluated for each test to ensure isolation.
#[macro_export]
macro_rules! store_contract_tests {
    ($factory:expr) => {
        mod store_contract_tests {
            use super::*;
            use biztime::core::{Company, Store, StoreError};

            // ==================================================================
            // Companies
            // ==================================================================

            #[tokio::test]
            async fn test_insert_and_get_company() {
                let store = $factory;

                let created = store.insert_company(apple()).await.unwrap();
                assert_eq!(created, apple());

                let fetched = store.get_company("apple").await.unwrap();
                assert_eq!(fetched, Some(apple()));
            }

            #[tokio::test]
            async fn test_get_missing_company() {
                let store = $factory;

                assert_eq!(store.get_company("nope").await.unwrap(), None);
            }

            #[tokio::test]
            async fn test_list_companies_projection() {
                let store = $factory;
                store.insert_company(apple()).await.unwrap();
                store.insert_company(ibm()).await.unwrap();

                let mut codes: Vec<(String, String)> = store
                    .list_companies()
                    .await
                    .unwrap()
                    .into_iter()
                    .map(|c| (c.code, c.name))
                    .collect();
                codes.sort();

                assert_eq!(
                    codes,
                    vec![
                        ("apple".to_string(), "Apple".to_string()),
                        ("ibm".to_string(), "IBM".to_string()),
                    ]
                );
            }

            #[tokio::test]
            async fn test_duplicate_code_rejected() {
                let store = $factory;
                store.insert_company(apple()).await.unwrap();

                let err = store
                    .insert_company(Company::new("apple", "Other Apple", None))
                    .await
                    .unwrap_err();
                assert!(matches!(err, StoreError::UniqueViolation(_)), "got {:?}", err);
            }

            #[tokio::test]
            async fn test_duplicate_name_rejected() {
                let store = $factory;
                store.insert_company(apple()).await.unwrap();

                let err = store
                    .insert_company(Company::new("apple2", "Apple", None))
                    .await
                    .unwrap_err();
                assert!(matches!(err, StoreError::UniqueViolation(_)), "got {:?}", err);
            }

            #[tokio::test]
            async fn test_update_company() {
                let store = $factory;
                store.insert_company(apple()).await.unwrap();

                let updated = store
                    .update_company(Company::new("apple", "Apple Inc.", None))
                    .await
                    .unwrap()
                    .expect("row should match");
                assert_eq!(updated.name, "Apple Inc.");
                assert_eq!(updated.description, None);

                let fetched = store.get_company("apple").await.unwrap().unwrap();
                assert_eq!(fetched, updated);
            }

            #[tokio::test]
            async fn test_update_missing_company() {
                let store = $factory;

                let result = store
                    .update_company(Company::new("ghost", "Ghost", None))
                    .await
                    .unwrap();
                assert_eq!(result, None);
            }

            #[tokio::test]
            async fn test_delete_company() {
                let store = $factory;
                store.insert_company(apple()).await.unwrap();

                assert_eq!(store.delete_company("apple").await.unwrap(), 1);
                assert_eq!(store.delete_company("apple").await.unwrap(), 0);
                assert_eq!(store.get_company("apple").await.unwrap(), None);
            }

            #[tokio::test]
            async fn test_delete_company_cascades_invoices() {
                let store = $factory;
                let (_, invoice) = seed_apple(&store).await;
                store.insert_company(ibm()).await.unwrap();
                let kept = store.insert_invoice("ibm", 400.0).await.unwrap();

                store.delete_company("apple").await.unwrap();

                assert_eq!(store.get_invoice(invoice.id).await.unwrap(), None);
                assert_eq!(store.get_invoice(kept.id).await.unwrap(), Some(kept));
            }

            // ==================================================================
            // Invoices
            // ==================================================================

            #[tokio::test]
            async fn test_insert_invoice_defaults() {
                let store = $factory;
                store.insert_company(apple()).await.unwrap();

                let invoice = store.insert_invoice("apple", 300.0).await.unwrap();

                assert_eq!(invoice.comp_code, "apple");
                assert_eq!(invoice.amt, 300.0);
                assert!(!invoice.paid);
                assert_eq!(invoice.paid_date, None);
                assert_eq!(invoice.add_date, chrono::Utc::now().date_naive());

                let fetched = store.get_invoice(invoice.id).await.unwrap();
                assert_eq!(fetched, Some(invoice));
            }

            #[tokio::test]
            async fn test_insert_invoice_unknown_company() {
                let store = $factory;

                let err = store.insert_invoice("nope", 10.0).await.unwrap_err();
                assert!(matches!(err, StoreError::ForeignKeyViolation(_)), "got {:?}", err);
            }

            #[tokio::test]
            async fn test_insert_invoice_non_positive_amount() {
                let store = $factory;
                store.insert_company(apple()).await.unwrap();

                let err = store.insert_invoice("apple", -5.0).await.unwrap_err();
                assert!(matches!(err, StoreError::CheckViolation(_)), "got {:?}", err);
            }

            #[tokio::test]
            async fn test_invoices_for_company() {
                let store = $factory;
                let (_, first) = seed_apple(&store).await;
                let second = store.insert_invoice("apple", 12.0).await.unwrap();
                store.insert_company(ibm()).await.unwrap();
                store.insert_invoice("ibm", 99.0).await.unwrap();

                let invoices = store.invoices_for_company("apple").await.unwrap();
                assert_eq!(invoices, vec![first, second]);

                assert!(store.invoices_for_company("nope").await.unwrap().is_empty());
            }

            #[tokio::test]
            async fn test_list_invoices_projection() {
                let store = $factory;
                let (_, invoice) = seed_apple(&store).await;

                let invoices = store.list_invoices().await.unwrap();
                assert_eq!(invoices.len(), 1);
                assert_eq!(invoices[0].id, invoice.id);
                assert_eq!(invoices[0].comp_code, "apple");
            }

            #[tokio::test]
            async fn test_update_invoice_amount() {
                let store = $factory;
                let (_, invoice) = seed_apple(&store).await;

                let updated = store
                    .update_invoice_amount(invoice.id, 42.5)
                    .await
                    .unwrap()
                    .expect("row should match");

                assert_eq!(updated.amt, 42.5);
                assert_eq!(updated.paid, invoice.paid);
                assert_eq!(updated.paid_date, invoice.paid_date);
                assert_eq!(updated.add_date, invoice.add_date);
            }

            #[tokio::test]
            async fn test_update_missing_invoice() {
                let store = $factory;

                assert_eq!(store.update_invoice_amount(9999, 1.0).await.unwrap(), None);
            }

            #[tokio::test]
            async fn test_update_invoice_negative_amount() {
                let store = $factory;
                let (_, invoice) = seed_apple(&store).await;

                let err = store
                    .update_invoice_amount(invoice.id, -1.0)
                    .await
                    .unwrap_err();
                assert!(matches!(err, StoreError::CheckViolation(_)), "got {:?}", err);
            }

            #[tokio::test]
            async fn test_delete_invoice() {
                let store = $factory;
                let (_, invoice) = seed_apple(&store).await;

                assert_eq!(store.delete_invoice(invoice.id).await.unwrap(), 1);
                assert_eq!(store.delete_invoice(invoice.id).await.unwrap(), 0);
                assert_eq!(store.get_invoice(invoice.id).await.unwrap(), None);
            }
        }
    };
}
