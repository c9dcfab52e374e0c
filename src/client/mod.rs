// ABOUTME: Booking client: typed HTTP client, UI state container, and controller
// ABOUTME: Front-ends (the terminal CLI, tests) drive BookingController and render ScheduleState
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Booking Client
//!
//! - [`BookingClient`]: one async method per REST endpoint
//! - [`ScheduleState`]: plain data for the form, lists, and calendar
//! - [`BookingController`]: runs requests and applies results to the state

/// HTTP client
pub mod api;
/// Month grid
pub mod calendar;
/// Controller and confirmation seam
pub mod controller;
/// Client error type
pub mod errors;
/// State container
pub mod state;

pub use api::{BookingClient, HealthStatus};
pub use calendar::{calendar_cells, calendar_days, CalendarCell};
pub use controller::{AlwaysConfirm, BookingController, Confirm, DeleteOutcome};
pub use errors::{ClientError, ClientResult};
pub use state::{AppointmentForm, FormField, ScheduleState, SlotChoice, View};
