//! SeaORM repository implementations

use crate::contract::{
    Customer, CustomerField, CustomerWithInvoices, Invoice, InvoiceSearch, InvoiceStatus,
    InvoiceTableRow, LatestInvoiceRecord, Revenue, SeedSummary,
};
use crate::domain::repository::{
    CustomerRepository, InvoiceRepository, RevenueRepository, SeedRepository,
};
use crate::domain::seed::SeedData;
use anyhow::Result;
use async_trait::async_trait;
use sea_orm::{
    prelude::Date,
    sea_query::{Alias, Condition, Expr, Func, LikeExpr, OnConflict, SimpleExpr},
    ColumnTrait, ConnectionTrait, DatabaseBackend, DatabaseConnection, EntityTrait,
    FromQueryResult, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, TransactionTrait,
};
use std::sync::Arc;

use super::entity::{customer, invoice, revenue, user};
use super::mapper::parse_status;

// ===== Query helpers =====

/// Type name for casting to text; MySQL has no `CAST(.. AS TEXT)`
fn text_type(backend: DatabaseBackend) -> Alias {
    match backend {
        DatabaseBackend::MySql => Alias::new("CHAR"),
        _ => Alias::new("TEXT"),
    }
}

/// Type name for casting to a 64-bit integer
fn integer_type(backend: DatabaseBackend) -> Alias {
    match backend {
        DatabaseBackend::MySql => Alias::new("SIGNED"),
        _ => Alias::new("BIGINT"),
    }
}

const LIKE_ESCAPE: char = '\\';

/// `%needle%` with LIKE metacharacters in `needle` taken literally
fn like_pattern(needle: &str) -> String {
    let mut pattern = String::with_capacity(needle.len() + 2);
    pattern.push('%');
    for c in needle.to_lowercase().chars() {
        if matches!(c, '%' | '_' | LIKE_ESCAPE) {
            pattern.push(LIKE_ESCAPE);
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

/// Case-insensitive substring match
fn contains(expr: SimpleExpr, needle: &str) -> SimpleExpr {
    Expr::expr(Func::lower(expr)).like(LikeExpr::new(like_pattern(needle)).escape(LIKE_ESCAPE))
}

/// Invoice search over customer name/email, amount, date and status.
/// Requires the customers join.
fn invoice_search(backend: DatabaseBackend, query: &str) -> Condition {
    let as_text = |col: invoice::Column| -> SimpleExpr {
        Func::cast_as(Expr::col((invoice::Entity, col)), text_type(backend)).into()
    };

    Condition::any()
        .add(contains(
            Expr::col((customer::Entity, customer::Column::Name)).into(),
            query,
        ))
        .add(contains(
            Expr::col((customer::Entity, customer::Column::Email)).into(),
            query,
        ))
        .add(contains(as_text(invoice::Column::Amount), query))
        .add(contains(as_text(invoice::Column::Date), query))
        .add(contains(
            Expr::col((invoice::Entity, invoice::Column::Status)).into(),
            query,
        ))
}

fn customer_search(query: &str) -> Condition {
    Condition::any()
        .add(contains(
            Expr::col((customer::Entity, customer::Column::Name)).into(),
            query,
        ))
        .add(contains(
            Expr::col((customer::Entity, customer::Column::Email)).into(),
            query,
        ))
}

// ===== Revenue Repository =====

pub struct SeaOrmRevenueRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmRevenueRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl RevenueRepository for SeaOrmRevenueRepository {
    async fn list_all(&self) -> Result<Vec<Revenue>> {
        let results = revenue::Entity::find().all(&*self.db).await?;

        Ok(results.into_iter().map(|e| e.into()).collect())
    }
}

// ===== Invoice Repository =====

#[derive(Debug, FromQueryResult)]
struct LatestInvoiceQueryRow {
    id: String,
    name: String,
    email: String,
    image_url: String,
    amount: i32,
}

#[derive(Debug, FromQueryResult)]
struct InvoiceTableQueryRow {
    id: String,
    customer_id: String,
    name: String,
    email: String,
    image_url: String,
    amount: i32,
    date: Date,
    status: String,
}

impl TryFrom<InvoiceTableQueryRow> for InvoiceTableRow {
    type Error = anyhow::Error;

    fn try_from(row: InvoiceTableQueryRow) -> Result<Self, Self::Error> {
        Ok(Self {
            status: parse_status(&row.status)?,
            id: row.id,
            customer_id: row.customer_id,
            name: row.name,
            email: row.email,
            image_url: row.image_url,
            amount: i64::from(row.amount),
            date: row.date,
        })
    }
}

pub struct SeaOrmInvoiceRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmInvoiceRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl InvoiceRepository for SeaOrmInvoiceRepository {
    async fn latest(&self, limit: u64) -> Result<Vec<LatestInvoiceRecord>> {
        let rows = invoice::Entity::find()
            .select_only()
            .column(invoice::Column::Id)
            .column(customer::Column::Name)
            .column(customer::Column::Email)
            .column(customer::Column::ImageUrl)
            .column(invoice::Column::Amount)
            .inner_join(customer::Entity)
            .order_by_desc(invoice::Column::Date)
            .order_by_asc(invoice::Column::Id)
            .limit(limit)
            .into_model::<LatestInvoiceQueryRow>()
            .all(&*self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|row| LatestInvoiceRecord {
                id: row.id,
                name: row.name,
                email: row.email,
                image_url: row.image_url,
                amount: i64::from(row.amount),
            })
            .collect())
    }

    async fn count(&self) -> Result<u64> {
        Ok(invoice::Entity::find().count(&*self.db).await?)
    }

    async fn sum_by_status(&self, status: InvoiceStatus) -> Result<i64> {
        let backend = self.db.get_database_backend();
        let total: SimpleExpr = Func::cast_as(
            Func::coalesce([Expr::col(invoice::Column::Amount).sum(), Expr::val(0).into()]),
            integer_type(backend),
        )
        .into();

        let sum = invoice::Entity::find()
            .select_only()
            .column_as(total, "total")
            .filter(invoice::Column::Status.eq(status.as_str()))
            .into_tuple::<i64>()
            .one(&*self.db)
            .await?;

        Ok(sum.unwrap_or(0))
    }

    async fn search(&self, search: &InvoiceSearch) -> Result<Vec<InvoiceTableRow>> {
        let backend = self.db.get_database_backend();

        let rows = invoice::Entity::find()
            .select_only()
            .column(invoice::Column::Id)
            .column(invoice::Column::CustomerId)
            .column(customer::Column::Name)
            .column(customer::Column::Email)
            .column(customer::Column::ImageUrl)
            .column(invoice::Column::Amount)
            .column(invoice::Column::Date)
            .column(invoice::Column::Status)
            .inner_join(customer::Entity)
            .filter(invoice_search(backend, &search.query))
            .order_by_desc(invoice::Column::Date)
            .order_by_asc(invoice::Column::Id)
            .limit(search.limit)
            .offset(search.offset)
            .into_model::<InvoiceTableQueryRow>()
            .all(&*self.db)
            .await?;

        rows.into_iter()
            .map(InvoiceTableRow::try_from)
            .collect::<Result<Vec<_>>>()
    }

    async fn count_matching(&self, query: &str) -> Result<u64> {
        let backend = self.db.get_database_backend();

        let count = invoice::Entity::find()
            .inner_join(customer::Entity)
            .filter(invoice_search(backend, query))
            .count(&*self.db)
            .await?;

        Ok(count)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Invoice>> {
        let result = invoice::Entity::find_by_id(id.to_string())
            .one(&*self.db)
            .await?;

        match result {
            Some(entity) => Ok(Some(entity.try_into()?)),
            None => Ok(None),
        }
    }
}

// ===== Customer Repository =====

#[derive(Debug, FromQueryResult)]
struct CustomerFieldQueryRow {
    id: String,
    name: String,
}

pub struct SeaOrmCustomerRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmCustomerRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CustomerRepository for SeaOrmCustomerRepository {
    async fn count(&self) -> Result<u64> {
        Ok(customer::Entity::find().count(&*self.db).await?)
    }

    async fn list_fields(&self) -> Result<Vec<CustomerField>> {
        let rows = customer::Entity::find()
            .select_only()
            .column(customer::Column::Id)
            .column(customer::Column::Name)
            .order_by_asc(customer::Column::Name)
            .into_model::<CustomerFieldQueryRow>()
            .all(&*self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|row| CustomerField {
                id: row.id,
                name: row.name,
            })
            .collect())
    }

    async fn search_with_invoices(&self, query: &str) -> Result<Vec<CustomerWithInvoices>> {
        let results = customer::Entity::find()
            .filter(customer_search(query))
            .order_by_asc(customer::Column::Name)
            .find_with_related(invoice::Entity)
            .all(&*self.db)
            .await?;

        results
            .into_iter()
            .map(|(customer, invoices)| {
                Ok::<_, anyhow::Error>(CustomerWithInvoices {
                    customer: Customer::from(customer),
                    invoices: invoices
                        .into_iter()
                        .map(Invoice::try_from)
                        .collect::<Result<Vec<_>>>()?,
                })
            })
            .collect()
    }
}

// ===== Seed Repository =====

pub struct SeaOrmSeedRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmSeedRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SeedRepository for SeaOrmSeedRepository {
    async fn seed(&self, data: &SeedData) -> Result<SeedSummary> {
        // Dropping the transaction without commit rolls it back
        let txn = self.db.begin().await?;

        let users = if data.users.is_empty() {
            0
        } else {
            user::Entity::insert_many(data.users.iter().map(user::ActiveModel::from))
                .on_conflict(OnConflict::column(user::Column::Id).do_nothing().to_owned())
                .exec_without_returning(&txn)
                .await?
        };
        tracing::debug!(rows = users, "Seeded users");

        let customers = if data.customers.is_empty() {
            0
        } else {
            customer::Entity::insert_many(data.customers.iter().map(customer::ActiveModel::from))
                .on_conflict(OnConflict::column(customer::Column::Id).do_nothing().to_owned())
                .exec_without_returning(&txn)
                .await?
        };
        tracing::debug!(rows = customers, "Seeded customers");

        // Plain insert: every run appends a fresh copy of the invoices
        let invoices = if data.invoices.is_empty() {
            0
        } else {
            invoice::Entity::insert_many(data.invoices.iter().map(invoice::ActiveModel::from))
                .exec_without_returning(&txn)
                .await?
        };
        tracing::debug!(rows = invoices, "Seeded invoices");

        let revenue = if data.revenue.is_empty() {
            0
        } else {
            revenue::Entity::insert_many(data.revenue.iter().map(revenue::ActiveModel::from))
                .on_conflict(OnConflict::column(revenue::Column::Month).do_nothing().to_owned())
                .exec_without_returning(&txn)
                .await?
        };
        tracing::debug!(rows = revenue, "Seeded revenue");

        txn.commit().await?;

        Ok(SeedSummary {
            users,
            customers,
            invoices,
            revenue,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn like_pattern_wraps_lowercased_needle() {
        assert_eq!(like_pattern("Evil"), "%evil%");
        assert_eq!(like_pattern(""), "%%");
    }

    #[test]
    fn like_pattern_escapes_metacharacters() {
        assert_eq!(like_pattern("%"), "%\\%%");
        assert_eq!(like_pattern("a_b"), "%a\\_b%");
        assert_eq!(like_pattern("\\"), "%\\\\%");
    }
}
