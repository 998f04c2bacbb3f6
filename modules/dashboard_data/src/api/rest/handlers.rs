//! HTTP request handlers - thin layer that delegates to domain service

use super::{dto::*, error::ApiError};
use crate::domain::{Seeder, Service};
use axum::{
    extract::{Path, Query},
    http::StatusCode,
    Extension, Json,
};
use std::sync::Arc;

// ===== Seeding =====

/// Seed the database with placeholder data
pub async fn seed(
    Extension(seeder): Extension<Arc<Seeder>>,
) -> Result<Json<MessageResponse>, ApiError> {
    seeder.seed().await?;

    Ok(Json(MessageResponse {
        message: "Database seeded successfully".to_string(),
    }))
}

// ===== Dashboard =====

/// Monthly revenue
pub async fn revenue(
    Extension(service): Extension<Arc<Service>>,
) -> Result<Json<Vec<RevenueDto>>, ApiError> {
    let revenue = service.fetch_revenue().await?;

    Ok(Json(revenue.into_iter().map(Into::into).collect()))
}

/// Latest invoices widget
pub async fn latest_invoices(
    Extension(service): Extension<Arc<Service>>,
) -> Result<Json<Vec<LatestInvoiceDto>>, ApiError> {
    let invoices = service.fetch_latest_invoices().await?;

    Ok(Json(invoices.into_iter().map(Into::into).collect()))
}

/// Summary cards
pub async fn card_data(
    Extension(service): Extension<Arc<Service>>,
) -> Result<Json<CardDataDto>, ApiError> {
    let cards = service.fetch_card_data().await?;

    Ok(Json(cards.into()))
}

// ===== Invoices =====

/// One page of the invoices table
pub async fn list_invoices(
    Extension(service): Extension<Arc<Service>>,
    Query(params): Query<InvoicesQuery>,
) -> Result<Json<Vec<InvoiceTableRowDto>>, ApiError> {
    let rows = service
        .fetch_filtered_invoices(&params.query, params.page)
        .await?;

    Ok(Json(rows.into_iter().map(Into::into).collect()))
}

/// Page count of the invoices table
pub async fn invoice_pages(
    Extension(service): Extension<Arc<Service>>,
    Query(params): Query<SearchQuery>,
) -> Result<Json<InvoicePagesResponse>, ApiError> {
    let total_pages = service.fetch_invoices_pages(&params.query).await?;

    Ok(Json(InvoicePagesResponse { total_pages }))
}

/// Invoice edit form
pub async fn get_invoice(
    Extension(service): Extension<Arc<Service>>,
    Path(id): Path<String>,
) -> Result<Json<InvoiceFormDto>, ApiError> {
    service
        .fetch_invoice_by_id(&id)
        .await?
        .map(|form| Json(form.into()))
        .ok_or_else(ApiError::invoice_not_found)
}

// ===== Customers =====

/// Customer select options
pub async fn list_customers(
    Extension(service): Extension<Arc<Service>>,
) -> Result<Json<Vec<CustomerFieldDto>>, ApiError> {
    let customers = service.fetch_customers().await?;

    Ok(Json(customers.into_iter().map(Into::into).collect()))
}

/// Customers table
pub async fn customer_table(
    Extension(service): Extension<Arc<Service>>,
    Query(params): Query<SearchQuery>,
) -> Result<Json<Vec<CustomerTableRowDto>>, ApiError> {
    let rows = service.fetch_filtered_customers(&params.query).await?;

    Ok(Json(rows.into_iter().map(Into::into).collect()))
}

/// Fallback for unknown paths under the dashboard router
pub async fn not_found() -> ApiError {
    ApiError::new(StatusCode::NOT_FOUND, "Not found.")
}
