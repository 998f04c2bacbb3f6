//! Route registration

use super::handlers;
use crate::domain::{Seeder, Service};
use axum::{routing::get, Extension, Router};
use std::sync::Arc;

/// Register all REST routes on `router`
pub fn register_routes(router: Router, service: Arc<Service>, seeder: Arc<Seeder>) -> Router {
    router
        // Seeding
        .route("/seed", get(handlers::seed))
        // Dashboard widgets
        .route("/dashboard/revenue", get(handlers::revenue))
        .route("/dashboard/latest-invoices", get(handlers::latest_invoices))
        .route("/dashboard/cards", get(handlers::card_data))
        // Invoices
        .route("/invoices", get(handlers::list_invoices))
        .route("/invoices/pages", get(handlers::invoice_pages))
        .route("/invoices/{id}", get(handlers::get_invoice))
        // Customers
        .route("/customers", get(handlers::list_customers))
        .route("/customers/table", get(handlers::customer_table))
        .fallback(handlers::not_found)
        .layer(Extension(service))
        .layer(Extension(seeder))
}
