//! Server configuration: defaults, optional YAML file, then `DASHBOARD__*` env vars

use anyhow::{Context, Result};
use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable prefix; `__` separates nested keys
pub const ENV_PREFIX: &str = "DASHBOARD__";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
    pub dashboard: dashboard_data::config::Config,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    pub bind_addr: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:3000".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DatabaseConfig {
    /// Any sea-orm URL: `postgres://`, `mysql://` or `sqlite://`
    pub url: String,
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite://dashboard.db?mode=rwc".to_string(),
            max_connections: 10,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// Default `EnvFilter` directive; `RUST_LOG` wins when set
    pub level: String,
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

impl AppConfig {
    /// Layer defaults, the optional YAML file and the environment
    pub fn load(file: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(AppConfig::default()));
        if let Some(path) = file {
            figment = figment.merge(Yaml::file_exact(path));
        }
        figment
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .context("Invalid configuration")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn defaults_without_sources() {
        Jail::expect_with(|_jail| {
            let config = AppConfig::load(None).map_err(|e| e.to_string())?;
            assert_eq!(config, AppConfig::default());
            assert_eq!(config.dashboard.items_per_page, 6);
            Ok(())
        });
    }

    #[test]
    fn yaml_file_overrides_defaults() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "dashboard.yaml",
                r#"
server:
  bind_addr: "0.0.0.0:8080"
database:
  url: "postgres://localhost/dashboard"
dashboard:
  password_hash_cost: 4
"#,
            )?;

            let config =
                AppConfig::load(Some(Path::new("dashboard.yaml"))).map_err(|e| e.to_string())?;

            assert_eq!(config.server.bind_addr, "0.0.0.0:8080");
            assert_eq!(config.database.url, "postgres://localhost/dashboard");
            assert_eq!(config.database.max_connections, 10);
            assert_eq!(config.dashboard.password_hash_cost, 4);
            assert_eq!(config.dashboard.latest_invoices_limit, 5);
            Ok(())
        });
    }

    #[test]
    fn env_overrides_file() {
        Jail::expect_with(|jail| {
            jail.create_file("dashboard.yaml", "logging:\n  level: debug\n")?;
            jail.set_env("DASHBOARD__LOGGING__LEVEL", "warn");
            jail.set_env("DASHBOARD__LOGGING__JSON", "true");
            jail.set_env("DASHBOARD__DATABASE__MAX_CONNECTIONS", "3");

            let config =
                AppConfig::load(Some(Path::new("dashboard.yaml"))).map_err(|e| e.to_string())?;

            assert_eq!(config.logging.level, "warn");
            assert!(config.logging.json);
            assert_eq!(config.database.max_connections, 3);
            Ok(())
        });
    }

    #[test]
    fn missing_file_is_an_error() {
        Jail::expect_with(|_jail| {
            assert!(AppConfig::load(Some(Path::new("missing.yaml"))).is_err());
            Ok(())
        });
    }

    #[test]
    fn unknown_keys_are_rejected() {
        Jail::expect_with(|jail| {
            jail.create_file("dashboard.yaml", "dashboard:\n  page_size: 10\n")?;
            assert!(AppConfig::load(Some(Path::new("dashboard.yaml"))).is_err());
            Ok(())
        });
    }
}
