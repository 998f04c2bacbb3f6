//! Contract layer - public API for in-process consumers
//!
//! Transport-agnostic models, the error type and the native client trait.

pub mod client;
pub mod error;
pub mod model;

pub use client::DashboardApi;
pub use error::DashboardError;
pub use model::{
    CardData, Customer, CustomerField, CustomerTableRow, CustomerWithInvoices, Invoice,
    InvoiceForm, InvoiceSearch, InvoiceStatus, InvoiceTableRow, LatestInvoice,
    LatestInvoiceRecord, PendingInvoice, Revenue, SeedSummary, User,
};
