// ABOUTME: Core data models for the barbershop booking service
// ABOUTME: Re-exports Appointment, request/draft types, booking options, and list filters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Wire types are shared by the server and the client so both sides agree on
//! the JSON shape (camelCase field names, `YYYY-MM-DD` dates, RFC 3339
//! timestamps).

mod appointment;
mod filter;
mod options;

pub use appointment::{
    Appointment, AppointmentDraft, AppointmentId, AppointmentRequest, DeleteResponse,
};
pub use filter::{ListFilter, MonthKey};
pub use options::BookingOptions;
