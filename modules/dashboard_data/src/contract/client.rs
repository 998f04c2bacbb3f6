//! Native client trait for in-process consumers
//!
//! Page renderers call these operations directly. NO HTTP.

use super::{
    error::DashboardError,
    model::{
        CardData, CustomerField, CustomerTableRow, InvoiceForm, InvoiceTableRow, LatestInvoice,
        Revenue, SeedSummary,
    },
};
use async_trait::async_trait;

/// Dashboard data API
#[async_trait]
pub trait DashboardApi: Send + Sync {
    /// All monthly revenue figures
    async fn fetch_revenue(&self) -> Result<Vec<Revenue>, DashboardError>;

    /// Most recent invoices with formatted amounts
    async fn fetch_latest_invoices(&self) -> Result<Vec<LatestInvoice>, DashboardError>;

    /// Counts and paid/pending totals
    async fn fetch_card_data(&self) -> Result<CardData, DashboardError>;

    /// One page of invoices matching `query`
    async fn fetch_filtered_invoices(
        &self,
        query: &str,
        current_page: u64,
    ) -> Result<Vec<InvoiceTableRow>, DashboardError>;

    /// Number of pages of invoices matching `query`
    async fn fetch_invoices_pages(&self, query: &str) -> Result<u64, DashboardError>;

    /// Invoice for the edit form, amount in dollars
    async fn fetch_invoice_by_id(&self, id: &str) -> Result<Option<InvoiceForm>, DashboardError>;

    /// Every customer's id and name
    async fn fetch_customers(&self) -> Result<Vec<CustomerField>, DashboardError>;

    /// Customers matching `query` with their invoice totals
    async fn fetch_filtered_customers(
        &self,
        query: &str,
    ) -> Result<Vec<CustomerTableRow>, DashboardError>;

    /// Populate the database with fixture data
    async fn seed(&self) -> Result<SeedSummary, DashboardError>;
}
