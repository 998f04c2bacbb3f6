//! Configuration for the dashboard data module

use crate::domain::pagination::ITEMS_PER_PAGE;
use serde::{Deserialize, Serialize};

/// Dashboard data configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Rows per invoices table page
    #[serde(default = "default_items_per_page")]
    pub items_per_page: u64,

    /// Rows shown in the latest invoices widget
    #[serde(default = "default_latest_invoices_limit")]
    pub latest_invoices_limit: u64,

    /// bcrypt cost used when seeding user passwords
    #[serde(default = "default_password_hash_cost")]
    pub password_hash_cost: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            items_per_page: default_items_per_page(),
            latest_invoices_limit: default_latest_invoices_limit(),
            password_hash_cost: default_password_hash_cost(),
        }
    }
}

fn default_items_per_page() -> u64 {
    ITEMS_PER_PAGE
}

fn default_latest_invoices_limit() -> u64 {
    5
}

fn default_password_hash_cost() -> u32 {
    10
}
