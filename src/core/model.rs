//! Company and invoice records, and the shapes they take in responses

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A company row
///
/// `code` and `name` must be non-empty whenever a company is written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "postgres", derive(sqlx::FromRow))]
pub struct Company {
    #[validate(length(min = 1))]
    pub code: String,

    #[validate(length(min = 1))]
    pub name: String,

    pub description: Option<String>,
}

impl Company {
    /// Build a company, storing an empty description as `None`
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        description: Option<String>,
    ) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            description: description.filter(|d| !d.is_empty()),
        }
    }
}

/// `{code, name}` projection used by the company listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "postgres", derive(sqlx::FromRow))]
pub struct CompanySummary {
    pub code: String,
    pub name: String,
}

impl From<&Company> for CompanySummary {
    fn from(company: &Company) -> Self {
        Self {
            code: company.code.clone(),
            name: company.name.clone(),
        }
    }
}

/// A company together with all of its invoices
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompanyDetail {
    #[serde(flatten)]
    pub company: Company,
    pub invoices: Vec<Invoice>,
}

/// An invoice row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "postgres", derive(sqlx::FromRow))]
pub struct Invoice {
    pub id: i32,
    pub comp_code: String,
    pub amt: f64,
    pub paid: bool,
    pub add_date: NaiveDate,
    pub paid_date: Option<NaiveDate>,
}

impl Invoice {
    /// Replace the `comp_code` reference with the referenced company
    pub fn into_detail(self, company: Option<Company>) -> InvoiceDetail {
        InvoiceDetail {
            id: self.id,
            amt: self.amt,
            paid: self.paid,
            add_date: self.add_date,
            paid_date: self.paid_date,
            company,
        }
    }
}

/// `{id, comp_code}` projection used by the invoice listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "postgres", derive(sqlx::FromRow))]
pub struct InvoiceSummary {
    pub id: i32,
    pub comp_code: String,
}

impl From<&Invoice> for InvoiceSummary {
    fn from(invoice: &Invoice) -> Self {
        Self {
            id: invoice.id,
            comp_code: invoice.comp_code.clone(),
        }
    }
}

/// An invoice with its company nested in place of `comp_code`
///
/// `company` is `None` when the company vanished between the two lookups.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvoiceDetail {
    pub id: i32,
    pub amt: f64,
    pub paid: bool,
    pub add_date: NaiveDate,
    pub paid_date: Option<NaiveDate>,
    pub company: Option<Company>,
}
