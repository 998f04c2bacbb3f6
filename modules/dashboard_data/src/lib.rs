//! Dashboard Data Module
//!
//! Invoice, customer and revenue queries backing the dashboard pages, plus
//! the one-shot database seeding operation.

// Public exports
pub mod contract;
pub use contract::{
    client::DashboardApi, error::DashboardError, CardData, CustomerField, CustomerTableRow,
    InvoiceForm, InvoiceStatus, InvoiceTableRow, LatestInvoice, Revenue, SeedSummary,
};

pub mod module;
pub use module::{connect, DashboardModule};

pub mod config;

// Internal modules (hidden from public API)
#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
