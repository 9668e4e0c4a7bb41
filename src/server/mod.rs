//! HTTP server for the contacts API.
//!
//! This module wires the contact endpoints into an axum router and runs
//! the listener until the process is stopped.

pub mod handlers;

pub use handlers::AppState;

use crate::repositories::ContactRepository;
use anyhow::{Context, Result};
use axum::routing::get;
use axum::Router;
use std::sync::Arc;

/// Build the HTTP API router over the given repository.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/contacts",
            get(handlers::list_contacts).post(handlers::create_contact),
        )
        .route(
            "/contacts/{id}",
            get(handlers::get_contact)
                .put(handlers::update_contact)
                .delete(handlers::delete_contact),
        )
        .with_state(state)
}

/// Bind the listener and serve the contacts API until shutdown.
///
/// # Arguments
/// * `addr` - host:port string to bind, e.g. "127.0.0.1:8080"
/// * `repository` - contact storage shared by all handlers
///
/// # Returns
/// An error if the address cannot be bound or the server fails while running
pub async fn run_server(addr: &str, repository: Arc<dyn ContactRepository>) -> Result<()> {
    let app = build_router(AppState::new(repository));

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    tracing::info!("listening on {}", addr);

    axum::serve(listener, app).await.context("server failed")?;

    Ok(())
}
