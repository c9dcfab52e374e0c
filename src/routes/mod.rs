// ABOUTME: Route module organization for the booking HTTP endpoints
// ABOUTME: Each domain module holds route definitions and thin handlers over the service layer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! HTTP routes, organized by domain

/// Appointment CRUD and booking options routes
pub mod appointments;
/// Health check route
pub mod health;

pub use appointments::{AppointmentRoutes, ListAppointmentsQuery};
pub use health::HealthRoutes;
