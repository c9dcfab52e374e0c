// ABOUTME: Constants module for the booking catalog and error messages
// ABOUTME: Pure data constants shared by the server, the client, and tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped by domain. The catalog values are defaults only; the
//! server may override them through configuration at startup.

/// Default booking catalog
pub mod catalog {
    /// Service types offered when no override is configured
    pub const DEFAULT_SERVICE_TYPES: &[&str] =
        &["Haircut", "Haircut+Beard", "Haircut+Beard+Eyebrows"];

    /// Bookable half-hour slots, with a lunch gap between 12:00 and 13:00
    pub const DEFAULT_TIME_SLOTS: &[&str] = &[
        "09:00", "09:30", "10:00", "10:30", "11:00", "11:30", "13:00", "13:30", "14:00", "14:30",
        "15:00", "15:30", "16:00", "16:30", "17:00", "17:30",
    ];

    /// Slot granularity in minutes
    pub const SLOT_MINUTES: u32 = 30;
}

/// Wire formats
pub mod formats {
    /// `chrono` format for calendar dates
    pub const DATE_FORMAT: &str = "%Y-%m-%d";

    /// First day used for the lexicographic month range
    pub const MONTH_RANGE_START_DAY: &str = "01";

    /// Last day used for the lexicographic month range
    pub const MONTH_RANGE_END_DAY: &str = "31";
}

/// Short error messages returned in HTTP error bodies
pub mod messages {
    /// One or more of the four appointment fields is empty
    pub const MISSING_FIELDS: &str = "Missing required fields";
    /// Service type is not part of the catalog
    pub const INVALID_SERVICE_TYPE: &str = "Invalid service type";
    /// Time slot is not part of the catalog
    pub const INVALID_TIME_SLOT: &str = "Invalid time slot";
    /// Date is not a `YYYY-MM-DD` calendar date
    pub const INVALID_DATE: &str = "Invalid date";
    /// Month is not `YYYY-MM`
    pub const INVALID_MONTH: &str = "Invalid month";
    /// Date lies before today
    pub const PAST_DATE: &str = "Past dates not allowed";
    /// Another appointment holds the same date and slot
    pub const SLOT_UNAVAILABLE: &str = "Time slot unavailable";
    /// Identifier cannot be parsed
    pub const INVALID_ID: &str = "Invalid appointment id";
    /// Body could not be decoded
    pub const INVALID_DATA: &str = "Invalid appointment data";
    /// Query string could not be decoded
    pub const INVALID_QUERY: &str = "Invalid query parameters";
    /// Identifier does not resolve to a record
    pub const NOT_FOUND: &str = "Appointment not found";
    /// Listing failed in the store
    pub const FETCH_FAILED: &str = "Failed to fetch appointments";
}
