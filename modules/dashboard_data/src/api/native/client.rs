//! Native client implementation - wraps domain service for in-process calls

use crate::contract::{
    CardData, CustomerField, CustomerTableRow, DashboardApi, DashboardError, InvoiceForm,
    InvoiceTableRow, LatestInvoice, Revenue, SeedSummary,
};
use crate::domain::{Seeder, Service};
use async_trait::async_trait;
use std::sync::Arc;

/// Native client implementation that directly calls the domain service
///
/// Used by page renderers running in the same process, without HTTP overhead.
#[derive(Clone)]
pub struct NativeClient {
    service: Arc<Service>,
    seeder: Arc<Seeder>,
}

impl NativeClient {
    /// Create a new native client
    pub fn new(service: Arc<Service>, seeder: Arc<Seeder>) -> Self {
        Self { service, seeder }
    }
}

#[async_trait]
impl DashboardApi for NativeClient {
    async fn fetch_revenue(&self) -> Result<Vec<Revenue>, DashboardError> {
        self.service.fetch_revenue().await
    }

    async fn fetch_latest_invoices(&self) -> Result<Vec<LatestInvoice>, DashboardError> {
        self.service.fetch_latest_invoices().await
    }

    async fn fetch_card_data(&self) -> Result<CardData, DashboardError> {
        self.service.fetch_card_data().await
    }

    async fn fetch_filtered_invoices(
        &self,
        query: &str,
        current_page: u64,
    ) -> Result<Vec<InvoiceTableRow>, DashboardError> {
        self.service
            .fetch_filtered_invoices(query, current_page)
            .await
    }

    async fn fetch_invoices_pages(&self, query: &str) -> Result<u64, DashboardError> {
        self.service.fetch_invoices_pages(query).await
    }

    async fn fetch_invoice_by_id(&self, id: &str) -> Result<Option<InvoiceForm>, DashboardError> {
        self.service.fetch_invoice_by_id(id).await
    }

    async fn fetch_customers(&self) -> Result<Vec<CustomerField>, DashboardError> {
        self.service.fetch_customers().await
    }

    async fn fetch_filtered_customers(
        &self,
        query: &str,
    ) -> Result<Vec<CustomerTableRow>, DashboardError> {
        self.service.fetch_filtered_customers(query).await
    }

    async fn seed(&self) -> Result<SeedSummary, DashboardError> {
        self.seeder.seed().await
    }
}
