// ABOUTME: Environment configuration management for the booking server
// ABOUTME: Parses ports, store location, CORS origins, and the booking catalog from env vars
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration management

use crate::constants::{catalog::SLOT_MINUTES, env_config};
use anyhow::{bail, Context, Result};
use barbershop_core::models::BookingOptions;
use chrono::{NaiveTime, Timelike};
use std::fmt;
use std::path::PathBuf;
use tracing::{info, warn};

/// Deployment environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Type-safe store location
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseUrl {
    /// `SQLite` database file
    SQLite {
        /// Path of the database file
        path: PathBuf,
    },
    /// In-memory `SQLite` (for testing)
    Memory,
}

impl DatabaseUrl {
    /// Parse a connection string; bare paths are treated as `SQLite` files
    ///
    /// # Errors
    ///
    /// Returns an error for empty input or a non-`SQLite` scheme
    pub fn parse_url(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            bail!("DATABASE_URL must not be empty");
        }
        if let Some(path) = trimmed.strip_prefix("sqlite:") {
            let path = path.trim_start_matches("//");
            if path == ":memory:" || path.is_empty() {
                return Ok(Self::Memory);
            }
            return Ok(Self::SQLite {
                path: PathBuf::from(path),
            });
        }
        if trimmed.contains("://") {
            bail!("Unsupported database scheme in DATABASE_URL: {trimmed}");
        }
        Ok(Self::SQLite {
            path: PathBuf::from(trimmed),
        })
    }

    /// Convert to a `sqlx` connection string
    #[must_use]
    pub fn to_connection_string(&self) -> String {
        match self {
            Self::SQLite { path } => format!("sqlite:{}", path.display()),
            Self::Memory => "sqlite::memory:".to_owned(),
        }
    }

    /// Check if this is an in-memory database
    #[must_use]
    pub const fn is_memory(&self) -> bool {
        matches!(self, Self::Memory)
    }
}

impl Default for DatabaseUrl {
    fn default() -> Self {
        Self::SQLite {
            path: PathBuf::from("./data/appointments.db"),
        }
    }
}

impl fmt::Display for DatabaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_connection_string())
    }
}

/// Cross-origin settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorsConfig {
    /// Comma-separated origins, or `*`
    pub allowed_origins: String,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: "*".to_owned(),
        }
    }
}

/// Complete server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// HTTP listening port
    pub http_port: u16,
    /// Bind address
    pub host: String,
    /// Store location
    pub database: DatabaseUrl,
    /// CORS settings
    pub cors: CorsConfig,
    /// Service types and time slots offered for booking
    pub booking: BookingOptions,
    /// Deployment environment
    pub environment: Environment,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_port: crate::constants::ports::DEFAULT_HTTP_PORT,
            host: crate::constants::defaults::DEFAULT_HOST.to_owned(),
            database: DatabaseUrl::default(),
            cors: CorsConfig::default(),
            booking: BookingOptions::default(),
            environment: Environment::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if the store location or the booking catalog is invalid
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        if let Err(e) = dotenvy::dotenv() {
            warn!("No .env file found or failed to load: {}", e);
        }

        let mut booking = BookingOptions::default();
        if let Some(raw) = env_config::service_types_override() {
            booking.service_types =
                parse_service_types(&raw).context("Invalid BOOKING_SERVICE_TYPES value")?;
        }
        if let Some(raw) = env_config::time_slots_override() {
            booking.time_slots =
                parse_time_slots(&raw).context("Invalid BOOKING_TIME_SLOTS value")?;
        }

        let config = Self {
            http_port: env_config::http_port(),
            host: env_config::host(),
            database: DatabaseUrl::parse_url(&env_config::database_url())
                .context("Invalid DATABASE_URL value")?,
            cors: CorsConfig {
                allowed_origins: env_config::cors_allowed_origins(),
            },
            booking,
            environment: Environment::from_str_or_default(&env_config::environment()),
        };

        config.validate()?;
        info!("Configuration loaded successfully");
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error if either catalog list is empty
    pub fn validate(&self) -> Result<()> {
        if self.booking.service_types.is_empty() {
            bail!("At least one service type must be configured");
        }
        if self.booking.time_slots.is_empty() {
            bail!("At least one time slot must be configured");
        }
        if self.environment.is_production() && self.database.is_memory() {
            warn!("In-memory store configured in production; appointments will not persist");
        }
        Ok(())
    }

    /// `host:port` to bind
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.http_port)
    }

    /// Get a summary of the configuration for logging
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Barbershop Booking Configuration:\n\
             - Address: {}\n\
             - Database: {}\n\
             - CORS Origins: {}\n\
             - Service Types: {}\n\
             - Time Slots: {}\n\
             - Environment: {}",
            self.bind_address(),
            self.database,
            self.cors.allowed_origins,
            self.booking.service_types.join(", "),
            self.booking.time_slots.len(),
            self.environment
        )
    }
}

/// Parse a comma-separated list of service labels
///
/// # Errors
///
/// Returns an error when no non-empty label remains
pub fn parse_service_types(raw: &str) -> Result<Vec<String>> {
    let types: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect();
    if types.is_empty() {
        bail!("service type list is empty");
    }
    Ok(types)
}

/// Parse a comma-separated list of `HH:MM` slots on half-hour boundaries
///
/// Order is preserved; duplicates are rejected.
///
/// # Errors
///
/// Returns an error on an empty list, a malformed label, an off-boundary time,
/// or a repeated slot
pub fn parse_time_slots(raw: &str) -> Result<Vec<String>> {
    let mut slots: Vec<String> = Vec::new();
    for label in raw.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        if label.len() != 5 {
            bail!("time slot '{label}' must be formatted as HH:MM");
        }
        let time = NaiveTime::parse_from_str(label, "%H:%M")
            .with_context(|| format!("time slot '{label}' must be formatted as HH:MM"))?;
        if time.minute() % SLOT_MINUTES != 0 {
            bail!("time slot '{label}' is not on a {SLOT_MINUTES}-minute boundary");
        }
        if slots.iter().any(|s| s == label) {
            bail!("time slot '{label}' is listed twice");
        }
        slots.push(label.to_owned());
    }
    if slots.is_empty() {
        bail!("time slot list is empty");
    }
    Ok(slots)
}
