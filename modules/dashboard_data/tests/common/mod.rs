//! Common test utilities: in-memory database setup and placeholder totals
#![allow(dead_code)]

use dashboard_data::config::Config;
use dashboard_data::DashboardModule;

/// Invoices in the placeholder data set
pub const FIXTURE_INVOICES: u64 = 13;
/// Customers in the placeholder data set
pub const FIXTURE_CUSTOMERS: u64 = 6;
/// Revenue months in the placeholder data set
pub const FIXTURE_MONTHS: usize = 12;

pub const EVIL_RABBIT_ID: &str = "d6e15727-9fe1-4961-8c5b-ea44a9bd81aa";
pub const SEED_USER_ID: &str = "410544b2-4001-4271-9855-fec4b6a6442a";

/// Lowest cost bcrypt accepts; keeps hashing fast in tests
pub const TEST_HASH_COST: u32 = 4;

/// Module config with the cheapest bcrypt cost
pub fn test_config() -> Config {
    Config {
        password_hash_cost: TEST_HASH_COST,
        ..Config::default()
    }
}

/// Module over a fresh in-memory SQLite database, schema not created
pub async fn unmigrated_module() -> DashboardModule {
    // One connection keeps every query on the same in-memory database
    let db = dashboard_data::connect("sqlite::memory:", 1)
        .await
        .expect("Failed to open in-memory database");
    DashboardModule::new(db, test_config())
}

/// Module over a fresh in-memory SQLite database with migrations applied
pub async fn migrated_module() -> DashboardModule {
    let module = unmigrated_module().await;
    module.migrate().await.expect("Failed to run migrations");
    module
}

/// Migrated module with the placeholder data seeded once
pub async fn seeded_module() -> DashboardModule {
    let module = migrated_module().await;
    module.seeder().seed().await.expect("Failed to seed");
    module
}

pub fn print_test_header(test_name: &str, purpose: &[&str]) {
    println!("\n🧪 TEST: {}", test_name);
    if let Some(first) = purpose.first() {
        println!("📋 PURPOSE: {}", first);
    }
    for line in purpose.iter().skip(1) {
        println!("   {}", line);
    }
}
