// ABOUTME: Booking options exposed to clients for form population
// ABOUTME: Holds the configured service types and ordered time slots
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::catalog::{DEFAULT_SERVICE_TYPES, DEFAULT_TIME_SLOTS};
use serde::{Deserialize, Serialize};

/// The server-configured catalog of service types and time slots
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingOptions {
    /// Closed set of service labels
    pub service_types: Vec<String>,
    /// Ordered set of `HH:MM` slot labels
    pub time_slots: Vec<String>,
}

impl BookingOptions {
    /// Whether `value` is a configured service type
    #[must_use]
    pub fn has_service_type(&self, value: &str) -> bool {
        self.service_types.iter().any(|s| s == value)
    }

    /// Whether `value` is a configured time slot
    #[must_use]
    pub fn has_time_slot(&self, value: &str) -> bool {
        self.time_slots.iter().any(|s| s == value)
    }
}

impl Default for BookingOptions {
    fn default() -> Self {
        Self {
            service_types: DEFAULT_SERVICE_TYPES.iter().map(|s| (*s).to_owned()).collect(),
            time_slots: DEFAULT_TIME_SLOTS.iter().map(|s| (*s).to_owned()).collect(),
        }
    }
}
