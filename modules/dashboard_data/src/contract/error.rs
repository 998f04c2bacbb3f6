//! Contract error types for the dashboard data service
//!
//! Each variant names the operation that failed and renders a fixed message.
//! The underlying database error is logged where it happens and never carried
//! across this boundary.

use thiserror::Error;

/// Dashboard data errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DashboardError {
    #[error("Failed to fetch revenue data.")]
    FetchRevenue,

    #[error("Failed to fetch the latest invoices.")]
    FetchLatestInvoices,

    #[error("Failed to fetch card data.")]
    FetchCardData,

    #[error("Failed to fetch invoices.")]
    FetchInvoices,

    #[error("Failed to fetch total number of invoices.")]
    FetchInvoicePages,

    #[error("Failed to fetch invoice.")]
    FetchInvoice,

    #[error("Failed to fetch all customers.")]
    FetchCustomers,

    #[error("Failed to fetch customer table.")]
    FetchCustomerTable,

    #[error("Failed to seed the database")]
    Seed,
}
