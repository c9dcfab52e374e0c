// ABOUTME: Server resources container, router assembly, and the HTTP serve loop
// ABOUTME: Wires config, store, and service together once and shares them across handlers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Booking Server
//!
//! [`ServerResources`] is created once at startup and shared with every
//! handler through an `Arc`. Nothing in it is mutated after construction; the
//! connection pool inside the store is the only shared runtime state.

use crate::config::environment::ServerConfig;
use crate::database::{open_store, AppointmentStore};
use crate::middleware::{setup_cors, with_request_tracing};
use crate::routes::{AppointmentRoutes, HealthRoutes};
use crate::services::AppointmentService;
use anyhow::{Context, Result};
use axum::Router;
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};

/// Shared, immutable server state
pub struct ServerResources {
    /// Server configuration
    pub config: Arc<ServerConfig>,
    /// Appointment business logic over the store
    pub appointments: AppointmentService,
}

impl ServerResources {
    /// Assemble resources from an already opened store
    #[must_use]
    pub fn new(config: ServerConfig, store: Arc<dyn AppointmentStore>) -> Self {
        let appointments = AppointmentService::new(store, config.booking.clone());
        Self {
            config: Arc::new(config),
            appointments,
        }
    }

    /// Open the configured store, run migrations, and assemble resources
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be opened or migrated
    pub async fn from_config(config: ServerConfig) -> Result<Self> {
        let store = open_store(&config.database)
            .await
            .with_context(|| format!("Failed to open appointment store at {}", config.database))?;
        Ok(Self::new(config, store))
    }
}

/// Build the full application router with tracing and CORS layers
pub fn build_router(resources: Arc<ServerResources>) -> Router {
    let cors = setup_cors(&resources.config.cors);

    let app = Router::new()
        .merge(HealthRoutes::routes())
        .merge(AppointmentRoutes::routes(resources));

    with_request_tracing(app).layer(cors)
}

/// Serve `resources` on an already bound listener until `shutdown` resolves
///
/// # Errors
///
/// Returns an error if the listener fails while serving
pub async fn serve<F>(listener: TcpListener, resources: Arc<ServerResources>, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener.local_addr().context("Failed to read listener address")?;
    let app = build_router(resources);

    info!(%addr, "Booking API listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .context("HTTP server error")?;
    info!("Booking API stopped");
    Ok(())
}

/// Bind the configured address and serve until Ctrl+C
///
/// # Errors
///
/// Returns an error if binding or serving fails
pub async fn run(resources: Arc<ServerResources>) -> Result<()> {
    let bind = resources.config.bind_address();
    let listener = TcpListener::bind(bind.as_str())
        .await
        .with_context(|| format!("Failed to bind {bind}"))?;

    serve(listener, resources, shutdown_signal()).await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
