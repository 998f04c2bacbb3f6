//! Contract models for the dashboard data service
//!
//! These models are transport-agnostic and shared by the native client and
//! the REST layer. NO serde derives - wire shapes live in `api::rest::dto`.

use chrono::NaiveDate;
use std::fmt;
use std::str::FromStr;

/// Monthly revenue figure (whole dollars)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Revenue {
    /// Short month name, e.g. "Jan"
    pub month: String,
    pub revenue: i32,
}

/// Invoice payment state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InvoiceStatus {
    Pending,
    Paid,
}

impl InvoiceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Paid => "paid",
        }
    }
}

impl fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InvoiceStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "paid" => Ok(Self::Paid),
            other => Err(format!("unknown invoice status '{}'", other)),
        }
    }
}

/// Dashboard user account
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    /// Plain text in fixtures, bcrypt hash once stored
    pub password: String,
}

/// Customer record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub email: String,
    pub image_url: String,
}

/// Invoice record, amount in cents
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invoice {
    pub id: String,
    pub customer_id: String,
    pub amount: i32,
    pub status: InvoiceStatus,
    pub date: NaiveDate,
}

/// Row of the "latest invoices" widget
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LatestInvoice {
    pub id: String,
    pub name: String,
    pub email: String,
    pub image_url: String,
    /// Formatted currency, e.g. "$157.95"
    pub amount: String,
}

/// Latest invoice as read from storage, before formatting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LatestInvoiceRecord {
    pub id: String,
    pub name: String,
    pub email: String,
    pub image_url: String,
    pub amount: i64,
}

/// Summary cards shown at the top of the dashboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardData {
    pub number_of_customers: u64,
    pub number_of_invoices: u64,
    pub total_paid_invoices: String,
    pub total_pending_invoices: String,
}

/// Row of the paginated invoices table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvoiceTableRow {
    pub id: String,
    pub customer_id: String,
    pub name: String,
    pub email: String,
    pub image_url: String,
    /// Cents
    pub amount: i64,
    pub date: NaiveDate,
    pub status: InvoiceStatus,
}

/// Invoice as loaded into the edit form
#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceForm {
    pub id: String,
    pub customer_id: String,
    /// Dollars
    pub amount: f64,
    pub status: InvoiceStatus,
}

/// Customer option for select inputs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerField {
    pub id: String,
    pub name: String,
}

/// Pending invoice listed under a customer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingInvoice {
    pub id: String,
    pub amount: i64,
    pub date: NaiveDate,
}

/// Customer together with all of their invoices, as read from storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerWithInvoices {
    pub customer: Customer,
    pub invoices: Vec<Invoice>,
}

/// Row of the customers table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerTableRow {
    pub id: String,
    pub name: String,
    pub email: String,
    pub image_url: String,
    pub total_invoices: u64,
    pub total_pending: String,
    pub total_paid: String,
    pub pending_invoices: Vec<PendingInvoice>,
}

/// Invoice search criteria shared by the table and page-count queries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvoiceSearch {
    /// Case-insensitive substring; empty matches everything
    pub query: String,
    pub limit: u64,
    pub offset: u64,
}

/// Rows written per table by one seeding run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub users: u64,
    pub customers: u64,
    pub invoices: u64,
    pub revenue: u64,
}
