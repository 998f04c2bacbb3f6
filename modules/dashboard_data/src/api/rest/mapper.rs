//! Mapper implementations for converting contract models into DTOs

use super::dto::*;
use crate::contract;

impl From<contract::Revenue> for RevenueDto {
    fn from(revenue: contract::Revenue) -> Self {
        Self {
            month: revenue.month,
            revenue: revenue.revenue,
        }
    }
}

impl From<contract::LatestInvoice> for LatestInvoiceDto {
    fn from(invoice: contract::LatestInvoice) -> Self {
        Self {
            id: invoice.id,
            name: invoice.name,
            email: invoice.email,
            image_url: invoice.image_url,
            amount: invoice.amount,
        }
    }
}

impl From<contract::CardData> for CardDataDto {
    fn from(cards: contract::CardData) -> Self {
        Self {
            number_of_customers: cards.number_of_customers,
            number_of_invoices: cards.number_of_invoices,
            total_paid_invoices: cards.total_paid_invoices,
            total_pending_invoices: cards.total_pending_invoices,
        }
    }
}

impl From<contract::InvoiceTableRow> for InvoiceTableRowDto {
    fn from(row: contract::InvoiceTableRow) -> Self {
        Self {
            id: row.id,
            customer_id: row.customer_id,
            name: row.name,
            email: row.email,
            image_url: row.image_url,
            amount: row.amount,
            date: row.date,
            status: row.status.to_string(),
        }
    }
}

impl From<contract::InvoiceForm> for InvoiceFormDto {
    fn from(form: contract::InvoiceForm) -> Self {
        Self {
            id: form.id,
            customer_id: form.customer_id,
            amount: form.amount,
            status: form.status.to_string(),
        }
    }
}

impl From<contract::CustomerField> for CustomerFieldDto {
    fn from(field: contract::CustomerField) -> Self {
        Self {
            id: field.id,
            name: field.name,
        }
    }
}

impl From<contract::CustomerTableRow> for CustomerTableRowDto {
    fn from(row: contract::CustomerTableRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            email: row.email,
            image_url: row.image_url,
            total_invoices: row.total_invoices,
            total_pending: row.total_pending,
            total_paid: row.total_paid,
            invoices: row
                .pending_invoices
                .into_iter()
                .map(|invoice| PendingInvoiceDto {
                    id: invoice.id,
                    amount: invoice.amount,
                    date: invoice.date,
                })
                .collect(),
        }
    }
}
