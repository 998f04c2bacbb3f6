//! Domain layer - dashboard queries, seeding and formatting helpers

pub mod currency;
pub mod fixtures;
pub mod pagination;
pub mod repository;
pub mod seed;
pub mod service;

pub use repository::{CustomerRepository, InvoiceRepository, RevenueRepository, SeedRepository};
pub use seed::{SeedData, Seeder};
pub use service::Service;
