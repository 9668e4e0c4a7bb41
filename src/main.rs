//! Contacts API - Main entry point
//!
//! This is the main executable for the contacts API, a REST service exposing
//! CRUD operations over contact records.

use anyhow::Result;
use contacts_api::repositories::{ContactRepository, InMemoryContactRepository};
use contacts_api::Config;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging, defaulting to info when RUST_LOG is unset
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();

    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // Initialize the repository all handlers share
    let repository = Arc::new(InMemoryContactRepository::new()) as Arc<dyn ContactRepository>;

    info!("Starting contacts API on {}", config.bind_addr());

    // Run the server (this will block until the server exits)
    contacts_api::server::run_server(&config.bind_addr(), repository).await?;

    info!("Contacts API shutdown complete");
    Ok(())
}
