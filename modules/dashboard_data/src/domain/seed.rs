//! Database seeding: password hashing and the transactional fixture write

use super::fixtures;
use super::repository::SeedRepository;
use super::service::database_error;
use crate::contract::{Customer, DashboardError, Invoice, Revenue, SeedSummary, User};
use futures::future::try_join_all;
use std::sync::Arc;

/// Rows to write in one seeding run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedData {
    pub users: Vec<User>,
    pub customers: Vec<Customer>,
    pub invoices: Vec<Invoice>,
    pub revenue: Vec<Revenue>,
}

/// Writes the placeholder data set
pub struct Seeder {
    repo: Arc<dyn SeedRepository>,
    password_hash_cost: u32,
}

impl Seeder {
    pub fn new(repo: Arc<dyn SeedRepository>, password_hash_cost: u32) -> Self {
        Self {
            repo,
            password_hash_cost,
        }
    }

    /// Seed the placeholder data set
    pub async fn seed(&self) -> Result<SeedSummary, DashboardError> {
        let data = fixtures::placeholder_data().map_err(database_error(DashboardError::Seed))?;
        self.seed_with(data).await
    }

    /// Hash user passwords, then write `data` in one transaction
    pub async fn seed_with(&self, data: SeedData) -> Result<SeedSummary, DashboardError> {
        let data = self
            .hash_passwords(data)
            .await
            .map_err(database_error(DashboardError::Seed))?;

        let summary = self
            .repo
            .seed(&data)
            .await
            .map_err(database_error(DashboardError::Seed))?;

        tracing::info!(
            users = summary.users,
            customers = summary.customers,
            invoices = summary.invoices,
            revenue = summary.revenue,
            "Database seeded successfully"
        );
        Ok(summary)
    }

    async fn hash_passwords(&self, mut data: SeedData) -> anyhow::Result<SeedData> {
        let cost = self.password_hash_cost;

        let hashes = try_join_all(data.users.iter().map(|user| {
            let password = user.password.clone();
            async move {
                let hash = tokio::task::spawn_blocking(move || bcrypt::hash(password, cost)).await??;
                Ok::<_, anyhow::Error>(hash)
            }
        }))
        .await?;

        for (user, hash) in data.users.iter_mut().zip(hashes) {
            user.password = hash;
        }
        Ok(data)
    }
}
