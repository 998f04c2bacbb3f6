//! Dashboard data server
//!
//! Serves the dashboard REST routes, applies migrations or seeds the database.

mod config;
mod logging;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use config::AppConfig;
use dashboard_data::DashboardModule;
use std::path::PathBuf;
use tower_http::trace::TraceLayer;
use tracing::info;

#[derive(Parser)]
#[command(name = "dashboard-server")]
#[command(about = "Invoices dashboard data service")]
#[command(version)]
struct Cli {
    /// YAML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Apply migrations and serve the REST routes
    Serve,
    /// Apply migrations and exit
    Migrate,
    /// Apply migrations, write the placeholder data and exit
    Seed,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref())?;
    logging::init_logging(&config.logging)?;

    let db = dashboard_data::connect(&config.database.url, config.database.max_connections)
        .await
        .context("Failed to connect to the database")?;
    let module = DashboardModule::new(db, config.dashboard.clone());
    module.migrate().await?;

    match cli.command {
        Command::Serve => serve(&module, &config.server.bind_addr).await,
        Command::Migrate => Ok(()),
        Command::Seed => seed(&module).await,
    }
}

async fn serve(module: &DashboardModule, bind_addr: &str) -> Result<()> {
    let app = module.router().layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", bind_addr))?;
    info!(addr = %bind_addr, "Dashboard server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("Dashboard server stopped");
    Ok(())
}

/// Seed once, then close the pool whatever the outcome
async fn seed(module: &DashboardModule) -> Result<()> {
    let outcome = module.seeder().seed().await;

    let db = module.connection();
    if let Err(error) = (*db).clone().close().await {
        tracing::warn!(error = %error, "Failed to close database connection");
    }

    let summary = outcome?;
    info!(
        users = summary.users,
        customers = summary.customers,
        invoices = summary.invoices,
        revenue = summary.revenue,
        "Seed finished"
    );
    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %error, "Failed to listen for shutdown signal");
    }
}
