//! Repository traits for data access
//!
//! These traits define the interface for data access operations.
//! Implementations are in infra/storage/repositories.rs

use crate::contract::{
    CustomerField, CustomerWithInvoices, Invoice, InvoiceSearch, InvoiceStatus, InvoiceTableRow,
    LatestInvoiceRecord, Revenue, SeedSummary,
};
use crate::domain::seed::SeedData;
use anyhow::Result;
use async_trait::async_trait;

/// Repository for monthly revenue
#[async_trait]
pub trait RevenueRepository: Send + Sync {
    /// List every revenue row
    async fn list_all(&self) -> Result<Vec<Revenue>>;
}

/// Repository for invoices
#[async_trait]
pub trait InvoiceRepository: Send + Sync {
    /// Most recent invoices joined with their customer, newest first
    async fn latest(&self, limit: u64) -> Result<Vec<LatestInvoiceRecord>>;

    /// Count all invoices
    async fn count(&self) -> Result<u64>;

    /// Sum of amounts (cents) over invoices with the given status
    async fn sum_by_status(&self, status: InvoiceStatus) -> Result<i64>;

    /// One window of invoices matching the search query, newest first
    async fn search(&self, search: &InvoiceSearch) -> Result<Vec<InvoiceTableRow>>;

    /// Count invoices matching the search query
    async fn count_matching(&self, query: &str) -> Result<u64>;

    /// Find an invoice by primary key
    async fn find_by_id(&self, id: &str) -> Result<Option<Invoice>>;
}

/// Repository for customers
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// Count all customers
    async fn count(&self) -> Result<u64>;

    /// Id and name of every customer, by name
    async fn list_fields(&self) -> Result<Vec<CustomerField>>;

    /// Customers whose name or email matches, each with all of their invoices
    async fn search_with_invoices(&self, query: &str) -> Result<Vec<CustomerWithInvoices>>;
}

/// Repository that writes fixture data
#[async_trait]
pub trait SeedRepository: Send + Sync {
    /// Write all fixture rows in a single transaction
    ///
    /// Users, customers and revenue are upserted by primary key; invoices are
    /// plain inserts.
    async fn seed(&self, data: &SeedData) -> Result<SeedSummary>;
}
