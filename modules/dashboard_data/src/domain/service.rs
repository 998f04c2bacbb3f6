//! Domain service - dashboard queries and result shaping

use super::currency::format_currency;
use super::pagination::{page_offset, total_pages};
use super::repository::{CustomerRepository, InvoiceRepository, RevenueRepository};
use crate::config::Config;
use crate::contract::{
    CardData, CustomerField, CustomerTableRow, CustomerWithInvoices, DashboardError, InvoiceForm,
    InvoiceSearch, InvoiceStatus, InvoiceTableRow, LatestInvoice, PendingInvoice, Revenue,
};
use std::sync::Arc;

/// Domain service for dashboard reads
pub struct Service {
    revenue_repo: Arc<dyn RevenueRepository>,
    invoice_repo: Arc<dyn InvoiceRepository>,
    customer_repo: Arc<dyn CustomerRepository>,
    config: Config,
}

impl Service {
    /// Create a new service instance
    pub fn new(
        revenue_repo: Arc<dyn RevenueRepository>,
        invoice_repo: Arc<dyn InvoiceRepository>,
        customer_repo: Arc<dyn CustomerRepository>,
        config: Config,
    ) -> Self {
        Self {
            revenue_repo,
            invoice_repo,
            customer_repo,
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    // ===== Revenue =====

    /// All monthly revenue figures
    pub async fn fetch_revenue(&self) -> Result<Vec<Revenue>, DashboardError> {
        self.revenue_repo
            .list_all()
            .await
            .map_err(database_error(DashboardError::FetchRevenue))
    }

    // ===== Invoices =====

    /// Newest invoices with their customer and a formatted amount
    pub async fn fetch_latest_invoices(&self) -> Result<Vec<LatestInvoice>, DashboardError> {
        let records = self
            .invoice_repo
            .latest(self.config.latest_invoices_limit)
            .await
            .map_err(database_error(DashboardError::FetchLatestInvoices))?;

        Ok(records
            .into_iter()
            .map(|record| LatestInvoice {
                id: record.id,
                name: record.name,
                email: record.email,
                image_url: record.image_url,
                amount: format_currency(record.amount),
            })
            .collect())
    }

    /// Counts and paid/pending totals; the four queries run concurrently
    pub async fn fetch_card_data(&self) -> Result<CardData, DashboardError> {
        let (number_of_invoices, number_of_customers, total_paid, total_pending) = tokio::try_join!(
            self.invoice_repo.count(),
            self.customer_repo.count(),
            self.invoice_repo.sum_by_status(InvoiceStatus::Paid),
            self.invoice_repo.sum_by_status(InvoiceStatus::Pending),
        )
        .map_err(database_error(DashboardError::FetchCardData))?;

        Ok(CardData {
            number_of_customers,
            number_of_invoices,
            total_paid_invoices: format_currency(total_paid),
            total_pending_invoices: format_currency(total_pending),
        })
    }

    /// One page of invoices whose customer, amount, date or status matches `query`
    pub async fn fetch_filtered_invoices(
        &self,
        query: &str,
        current_page: u64,
    ) -> Result<Vec<InvoiceTableRow>, DashboardError> {
        let search = InvoiceSearch {
            query: query.to_string(),
            limit: self.config.items_per_page,
            offset: page_offset(current_page, self.config.items_per_page),
        };

        tracing::debug!(query, current_page, offset = search.offset, "Searching invoices");

        self.invoice_repo
            .search(&search)
            .await
            .map_err(database_error(DashboardError::FetchInvoices))
    }

    /// Number of invoice pages matching `query`
    pub async fn fetch_invoices_pages(&self, query: &str) -> Result<u64, DashboardError> {
        let count = self
            .invoice_repo
            .count_matching(query)
            .await
            .map_err(database_error(DashboardError::FetchInvoicePages))?;

        Ok(total_pages(count, self.config.items_per_page))
    }

    /// Invoice for the edit form with the amount converted to dollars
    pub async fn fetch_invoice_by_id(
        &self,
        id: &str,
    ) -> Result<Option<InvoiceForm>, DashboardError> {
        let invoice = self
            .invoice_repo
            .find_by_id(id)
            .await
            .map_err(database_error(DashboardError::FetchInvoice))?;

        Ok(invoice.map(|invoice| InvoiceForm {
            id: invoice.id,
            customer_id: invoice.customer_id,
            amount: f64::from(invoice.amount) / 100.0,
            status: invoice.status,
        }))
    }

    // ===== Customers =====

    /// Id and name of every customer, sorted by name
    pub async fn fetch_customers(&self) -> Result<Vec<CustomerField>, DashboardError> {
        self.customer_repo
            .list_fields()
            .await
            .map_err(database_error(DashboardError::FetchCustomers))
    }

    /// Customers whose name or email matches `query`, with invoice totals
    pub async fn fetch_filtered_customers(
        &self,
        query: &str,
    ) -> Result<Vec<CustomerTableRow>, DashboardError> {
        let customers = self
            .customer_repo
            .search_with_invoices(query)
            .await
            .map_err(database_error(DashboardError::FetchCustomerTable))?;

        Ok(customers.into_iter().map(customer_table_row).collect())
    }
}

fn customer_table_row(entry: CustomerWithInvoices) -> CustomerTableRow {
    let CustomerWithInvoices { customer, invoices } = entry;

    let mut total_pending = 0i64;
    let mut total_paid = 0i64;
    let mut pending_invoices = Vec::new();

    for invoice in &invoices {
        let amount = i64::from(invoice.amount);
        match invoice.status {
            InvoiceStatus::Pending => {
                total_pending += amount;
                pending_invoices.push(PendingInvoice {
                    id: invoice.id.clone(),
                    amount,
                    date: invoice.date,
                });
            }
            InvoiceStatus::Paid => total_paid += amount,
        }
    }

    CustomerTableRow {
        id: customer.id,
        name: customer.name,
        email: customer.email,
        image_url: customer.image_url,
        total_invoices: invoices.len() as u64,
        total_pending: format_currency(total_pending),
        total_paid: format_currency(total_paid),
        pending_invoices,
    }
}

/// Log the underlying failure and replace it with the operation's fixed error
pub(crate) fn database_error(kind: DashboardError) -> impl FnOnce(anyhow::Error) -> DashboardError {
    move |error| {
        tracing::error!(error = ?error, operation = %kind, "Database Error");
        kind
    }
}
