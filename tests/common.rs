// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet logging, in-memory stores, server resources, and a live test server
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `barbershop_booking`

use anyhow::Result;
use barbershop_booking::{
    config::environment::{DatabaseUrl, Environment, ServerConfig},
    database::{open_store, AppointmentStore},
    models::AppointmentRequest,
    server::{self, ServerResources},
};
use std::sync::{Arc, Once};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

static INIT_LOGGER: Once = Once::new();

/// A date far enough ahead that it is never in the past
pub const FUTURE_DATE: &str = "2999-01-10";

/// A date that is always in the past
pub const PAST_DATE: &str = "2000-01-10";

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        // Another test binary may have installed a subscriber already
        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Configuration pointing at a private in-memory store
pub fn test_config() -> ServerConfig {
    ServerConfig {
        http_port: 0,
        database: DatabaseUrl::Memory,
        environment: Environment::Testing,
        ..ServerConfig::default()
    }
}

/// Fresh, migrated in-memory store
pub async fn create_test_store() -> Result<Arc<dyn AppointmentStore>> {
    init_test_logging();
    Ok(open_store(&DatabaseUrl::Memory).await?)
}

/// Server resources over a fresh in-memory store
pub async fn create_test_resources() -> Result<Arc<ServerResources>> {
    let store = create_test_store().await?;
    Ok(Arc::new(ServerResources::new(test_config(), store)))
}

/// A complete create body
pub fn booking(client: &str, date: &str, slot: &str) -> AppointmentRequest {
    AppointmentRequest::new(client, "Haircut", date, slot)
}

/// A real HTTP server on an ephemeral local port, stopped on drop
pub struct TestServer {
    pub base_url: String,
    shutdown: Option<oneshot::Sender<()>>,
}

impl TestServer {
    pub async fn start() -> Result<Self> {
        let resources = create_test_resources().await?;
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let (tx, rx) = oneshot::channel::<()>();

        tokio::spawn(async move {
            let shutdown = async {
                let _ = rx.await;
            };
            if let Err(e) = server::serve(listener, resources, shutdown).await {
                tracing::error!("Test server failed: {e:#}");
            }
        });

        Ok(Self {
            base_url: format!("http://{addr}"),
            shutdown: Some(tx),
        })
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
    }
}
