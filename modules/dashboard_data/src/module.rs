//! Module wiring: connection, repositories, service, routes and native client

use crate::api::native::NativeClient;
use crate::config::Config;
use crate::contract::DashboardApi;
use crate::domain::{Seeder, Service};
use crate::infra::storage::migrations::Migrator;
use crate::infra::storage::repositories::{
    SeaOrmCustomerRepository, SeaOrmInvoiceRepository, SeaOrmRevenueRepository,
    SeaOrmSeedRepository,
};
use anyhow::Result;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;
use std::sync::Arc;

/// Open a pooled database connection.
pub async fn connect(database_url: &str, max_connections: u32) -> Result<DatabaseConnection> {
    let mut options = ConnectOptions::new(database_url.to_owned());
    options.max_connections(max_connections);

    let db = Database::connect(options).await?;
    tracing::info!(backend = ?db.get_database_backend(), "Database connection established");
    Ok(db)
}

/// Dashboard data module
pub struct DashboardModule {
    db: Arc<DatabaseConnection>,
    service: Arc<Service>,
    seeder: Arc<Seeder>,
}

impl DashboardModule {
    /// Build repositories, the domain service and the seeder over `db`
    pub fn new(db: DatabaseConnection, config: Config) -> Self {
        let db = Arc::new(db);

        let revenue_repo = Arc::new(SeaOrmRevenueRepository::new(db.clone()));
        let invoice_repo = Arc::new(SeaOrmInvoiceRepository::new(db.clone()));
        let customer_repo = Arc::new(SeaOrmCustomerRepository::new(db.clone()));
        let seed_repo = Arc::new(SeaOrmSeedRepository::new(db.clone()));

        let seeder = Arc::new(Seeder::new(seed_repo, config.password_hash_cost));
        let service = Arc::new(Service::new(
            revenue_repo,
            invoice_repo,
            customer_repo,
            config,
        ));

        tracing::info!("Dashboard data module initialized");
        Self {
            db,
            service,
            seeder,
        }
    }

    /// Apply pending migrations
    pub async fn migrate(&self) -> Result<()> {
        Migrator::up(&*self.db, None).await?;
        tracing::info!("Dashboard data migrations completed");
        Ok(())
    }

    /// Register REST routes on `router`
    pub fn register_rest(&self, router: axum::Router) -> axum::Router {
        tracing::info!("Registering dashboard data REST routes");
        crate::api::rest::routes::register_routes(router, self.service.clone(), self.seeder.clone())
    }

    /// Standalone router with every REST route
    pub fn router(&self) -> axum::Router {
        self.register_rest(axum::Router::new())
    }

    /// In-process client for page renderers
    pub fn client(&self) -> Arc<dyn DashboardApi> {
        Arc::new(NativeClient::new(self.service.clone(), self.seeder.clone()))
    }

    pub fn service(&self) -> Arc<Service> {
        self.service.clone()
    }

    pub fn seeder(&self) -> Arc<Seeder> {
        self.seeder.clone()
    }

    pub fn connection(&self) -> Arc<DatabaseConnection> {
        self.db.clone()
    }
}
