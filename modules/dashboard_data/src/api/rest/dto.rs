//! REST DTOs with serde derives for HTTP API

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ===== Revenue =====

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RevenueDto {
    pub month: String,
    pub revenue: i32,
}

// ===== Invoices =====

/// Latest invoices widget row
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LatestInvoiceDto {
    pub id: String,
    pub name: String,
    pub email: String,
    pub image_url: String,
    /// Formatted currency
    pub amount: String,
}

/// Dashboard summary cards
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardDataDto {
    pub number_of_customers: u64,
    pub number_of_invoices: u64,
    pub total_paid_invoices: String,
    pub total_pending_invoices: String,
}

/// Invoices table row
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvoiceTableRowDto {
    pub id: String,
    pub customer_id: String,
    pub name: String,
    pub email: String,
    pub image_url: String,
    /// Cents
    pub amount: i64,
    pub date: NaiveDate,
    /// "pending" or "paid"
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvoicePagesResponse {
    pub total_pages: u64,
}

/// Invoice edit form
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvoiceFormDto {
    pub id: String,
    pub customer_id: String,
    /// Dollars
    pub amount: f64,
    pub status: String,
}

/// Query parameters of the invoices table
#[derive(Debug, Clone, Deserialize)]
pub struct InvoicesQuery {
    #[serde(default)]
    pub query: String,

    #[serde(default = "default_page")]
    pub page: u64,
}

fn default_page() -> u64 {
    1
}

/// Free-text search query
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub query: String,
}

// ===== Customers =====

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerFieldDto {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PendingInvoiceDto {
    pub id: String,
    pub amount: i64,
    pub date: NaiveDate,
}

/// Customers table row
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerTableRowDto {
    pub id: String,
    pub name: String,
    pub email: String,
    pub image_url: String,
    pub total_invoices: u64,
    pub total_pending: String,
    pub total_paid: String,
    pub invoices: Vec<PendingInvoiceDto>,
}

// ===== Seeding =====

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

// Note: conversions live in mapper.rs
