// ABOUTME: Main library entry point for the barbershop booking service and client
// ABOUTME: Provides the appointment REST API, its SQLite store, and a typed client
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Barbershop Booking
//!
//! Appointment booking for a barbershop: clients pick a service, a day, and a
//! half-hour slot. Each (date, slot) pair can be held by at most one
//! appointment.
//!
//! ## Architecture
//!
//! - **Store** (`database`): persistent appointments with a UNIQUE index on (date, slot)
//! - **Service** (`services`): validation, conflict pre-check, and error mapping
//! - **Routes** (`routes`): thin axum handlers under `/api`
//! - **Client** (`client`): HTTP client, state container, and controller
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use barbershop_booking::config::environment::ServerConfig;
//! use barbershop_booking::server::{self, ServerResources};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     let resources = ServerResources::from_config(config).await?;
//!     server::run(Arc::new(resources)).await
//! }
//! ```

/// Booking client: HTTP client, state container, controller
pub mod client;

/// Configuration management
pub mod config;

/// Application constants and environment accessors
pub mod constants;

/// Appointment store
pub mod database;

/// Unified error handling
pub mod errors;

/// Structured logging setup
pub mod logging;

/// HTTP middleware
pub mod middleware;

/// HTTP routes
pub mod routes;

/// Server resources and serve loop
pub mod server;

/// Domain services
pub mod services;

/// Re-exported domain models
pub use barbershop_core::models;
