// ABOUTME: Core types and constants for the barbershop booking service
// ABOUTME: Foundation crate with error handling, appointment models, and catalog constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Barbershop Core
//!
//! Foundation crate providing shared types and constants for the barbershop
//! booking service. Both the server and the client depend on it, so it stays
//! free of any HTTP server or database runtime unless the matching feature is
//! enabled.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `DatabaseError`
//! - **constants**: Default service catalog, time slots, and user-facing messages
//! - **models**: Appointment, booking options, and list filters

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Default catalog values and user-facing messages
pub mod constants;

/// Core data models (Appointment, `BookingOptions`, `ListFilter`)
pub mod models;
