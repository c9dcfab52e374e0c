// ABOUTME: Domain service layer for business logic extracted from route handlers
// ABOUTME: Provides protocol-agnostic appointment operations and input validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Domain service layer
//!
//! Route handlers stay thin: they extract path, query, and body values and
//! hand them to [`AppointmentService`], which owns the booking rules.

/// Appointment CRUD with conflict detection
pub mod appointments;

/// Field, filter, and identifier validation
pub mod validation;

pub use appointments::{local_today, AppointmentService, TodayFn};
