// ABOUTME: System-wide constants and environment-based defaults for the booking server
// ABOUTME: Contains service names, ports, route paths, and environment variable accessors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Constants Module
//!
//! Application constants and environment-based configuration values.
//! Catalog defaults (service types, time slots) live in `barbershop_core::constants`.

use std::env;

pub use barbershop_core::constants::{catalog, formats, messages};

/// Service identity used in logs
pub mod service_names {
    /// Server binary
    pub const BARBERSHOP_SERVER: &str = "barbershop-server";
    /// Terminal client binary
    pub const BARBERSHOP_CLI: &str = "barbershop-cli";
}

/// Network ports
pub mod ports {
    /// Default HTTP port
    pub const DEFAULT_HTTP_PORT: u16 = 4000;
}

/// Default values for configuration
pub mod defaults {
    /// Default bind address
    pub const DEFAULT_HOST: &str = "127.0.0.1";
    /// Default store location
    pub const DEFAULT_DATABASE_URL: &str = "sqlite:./data/appointments.db";
    /// Default base URL used by the client
    pub const DEFAULT_API_URL: &str = "http://localhost:4000";
    /// Default allowed CORS origins
    pub const DEFAULT_CORS_ORIGINS: &str = "*";
}

/// API routes
pub mod routes {
    /// Health check
    pub const HEALTH: &str = "/api/health";
    /// Appointment collection
    pub const APPOINTMENTS: &str = "/api/appointments";
    /// Booking options
    pub const APPOINTMENT_OPTIONS: &str = "/api/appointments/options";
    /// Booking options, legacy path kept for older clients
    pub const APPOINTMENT_OPTIONS_LEGACY: &str = "/api/appointments/meta/options";
    /// Single appointment
    pub const APPOINTMENT_BY_ID: &str = "/api/appointments/:id";
}

/// Header names
pub mod headers {
    /// Request correlation header
    pub const REQUEST_ID: &str = "x-request-id";
}

/// Environment variable accessors with defaults
pub mod env_config {
    use super::{defaults, env, ports};

    /// Get `HTTP` port from `HTTP_PORT`, then `PORT`, then the default
    #[must_use]
    pub fn http_port() -> u16 {
        env::var("HTTP_PORT")
            .or_else(|_| env::var("PORT"))
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(ports::DEFAULT_HTTP_PORT)
    }

    /// Get bind host from environment or default
    #[must_use]
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| defaults::DEFAULT_HOST.to_owned())
    }

    /// Get database `URL` from environment or default
    #[must_use]
    pub fn database_url() -> String {
        env::var("DATABASE_URL").unwrap_or_else(|_| defaults::DEFAULT_DATABASE_URL.to_owned())
    }

    /// Get allowed CORS origins from environment or default
    #[must_use]
    pub fn cors_allowed_origins() -> String {
        env::var("CORS_ALLOWED_ORIGINS")
            .unwrap_or_else(|_| defaults::DEFAULT_CORS_ORIGINS.to_owned())
    }

    /// Get the service type override, if any
    #[must_use]
    pub fn service_types_override() -> Option<String> {
        env::var("BOOKING_SERVICE_TYPES").ok()
    }

    /// Get the time slot override, if any
    #[must_use]
    pub fn time_slots_override() -> Option<String> {
        env::var("BOOKING_TIME_SLOTS").ok()
    }

    /// Get deployment environment name
    #[must_use]
    pub fn environment() -> String {
        env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_owned())
    }

    /// Get base `URL` of the booking API for clients
    #[must_use]
    pub fn api_url() -> String {
        env::var("BARBERSHOP_API_URL").unwrap_or_else(|_| defaults::DEFAULT_API_URL.to_owned())
    }
}

/// Messages shown by the booking client
pub mod client_messages {
    /// A form field is empty
    pub const FILL_ALL_FIELDS: &str = "Please fill in all fields";
    /// The form date is not a real `YYYY-MM-DD` date
    pub const INVALID_DATE: &str = "Invalid date";
    /// The form date lies before today
    pub const PAST_DAY: &str = "Booking on past days is not allowed";
    /// The server answered 409
    pub const SLOT_UNAVAILABLE: &str = "Time slot unavailable";
    /// Any other failed create/update
    pub const SAVE_FAILED: &str = "Failed to save appointment";
    /// A failed delete
    pub const REMOVE_FAILED: &str = "Failed to remove appointment";
    /// A failed day listing
    pub const LOAD_FAILED: &str = "Failed to load appointments";
    /// Delete confirmation prompt
    pub const CONFIRM_REMOVE: &str = "Remove this appointment?";
}
