//! Entity to model mappers
//!
//! Conversions between SeaORM entities and contract models

use super::entity;
use crate::contract::{Customer, Invoice, InvoiceStatus, Revenue, User};
use sea_orm::ActiveValue::Set;

// ===== Revenue =====

impl From<entity::revenue::Model> for Revenue {
    fn from(entity: entity::revenue::Model) -> Self {
        Self {
            month: entity.month,
            revenue: entity.revenue,
        }
    }
}

impl From<&Revenue> for entity::revenue::ActiveModel {
    fn from(model: &Revenue) -> Self {
        Self {
            month: Set(model.month.clone()),
            revenue: Set(model.revenue),
        }
    }
}

// ===== Users =====

impl From<&User> for entity::user::ActiveModel {
    fn from(model: &User) -> Self {
        Self {
            id: Set(model.id.clone()),
            name: Set(model.name.clone()),
            email: Set(model.email.clone()),
            password: Set(model.password.clone()),
        }
    }
}

// ===== Customers =====

impl From<entity::customer::Model> for Customer {
    fn from(entity: entity::customer::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            image_url: entity.image_url,
        }
    }
}

impl From<&Customer> for entity::customer::ActiveModel {
    fn from(model: &Customer) -> Self {
        Self {
            id: Set(model.id.clone()),
            name: Set(model.name.clone()),
            email: Set(model.email.clone()),
            image_url: Set(model.image_url.clone()),
        }
    }
}

// ===== Invoices =====

impl TryFrom<entity::invoice::Model> for Invoice {
    type Error = anyhow::Error;

    fn try_from(entity: entity::invoice::Model) -> Result<Self, Self::Error> {
        Ok(Self {
            status: parse_status(&entity.status)?,
            id: entity.id,
            customer_id: entity.customer_id,
            amount: entity.amount,
            date: entity.date,
        })
    }
}

impl From<&Invoice> for entity::invoice::ActiveModel {
    fn from(model: &Invoice) -> Self {
        Self {
            id: Set(model.id.clone()),
            customer_id: Set(model.customer_id.clone()),
            amount: Set(model.amount),
            status: Set(model.status.as_str().to_string()),
            date: Set(model.date),
        }
    }
}

pub(crate) fn parse_status(status: &str) -> anyhow::Result<InvoiceStatus> {
    status.parse().map_err(anyhow::Error::msg)
}
