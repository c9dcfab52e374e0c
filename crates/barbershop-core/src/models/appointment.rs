// ABOUTME: Appointment entity, identifier newtype, and request/draft payloads
// ABOUTME: Defines the JSON contract for appointment records exchanged over HTTP
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Type-safe wrapper for appointment identifiers
///
/// Assigned by the store on creation and never changed afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AppointmentId(pub Uuid);

impl AppointmentId {
    /// Create a new random `AppointmentId`
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for AppointmentId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for AppointmentId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl fmt::Display for AppointmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for AppointmentId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// A booked appointment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    /// Store-assigned identifier
    pub id: AppointmentId,
    /// Client name, trimmed
    pub client_name: String,
    /// One of the configured service types
    pub service_type: String,
    /// Calendar day of the booking
    pub date: NaiveDate,
    /// One of the configured half-hour slots
    pub time_slot: String,
    /// Set by the store on insert
    pub created_at: DateTime<Utc>,
    /// Set by the store on every write
    pub updated_at: DateTime<Utc>,
}

/// Create/update body as received over HTTP
///
/// Every field is optional on the wire; absent and empty are both reported
/// as missing by validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppointmentRequest {
    /// Client name
    pub client_name: Option<String>,
    /// Service type label
    pub service_type: Option<String>,
    /// `YYYY-MM-DD`
    pub date: Option<String>,
    /// `HH:MM`
    pub time_slot: Option<String>,
}

impl AppointmentRequest {
    /// Build a request with all four fields set
    pub fn new(
        client_name: impl Into<String>,
        service_type: impl Into<String>,
        date: impl Into<String>,
        time_slot: impl Into<String>,
    ) -> Self {
        Self {
            client_name: Some(client_name.into()),
            service_type: Some(service_type.into()),
            date: Some(date.into()),
            time_slot: Some(time_slot.into()),
        }
    }
}

/// Validated appointment fields ready to be written to the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppointmentDraft {
    /// Client name, trimmed and non-empty
    pub client_name: String,
    /// Member of the service type catalog
    pub service_type: String,
    /// Not earlier than today at validation time
    pub date: NaiveDate,
    /// Member of the time slot catalog
    pub time_slot: String,
}

/// Body returned by a successful delete
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteResponse {
    /// Always true on success
    pub ok: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_appointment_serializes_camel_case() {
        let now = Utc::now();
        let appointment = Appointment {
            id: AppointmentId::new(),
            client_name: "Ana".to_owned(),
            service_type: "Haircut".to_owned(),
            date: NaiveDate::from_ymd_opt(2999, 1, 10).unwrap(),
            time_slot: "09:00".to_owned(),
            created_at: now,
            updated_at: now,
        };

        let json = serde_json::to_value(&appointment).unwrap();
        assert_eq!(json["clientName"], "Ana");
        assert_eq!(json["serviceType"], "Haircut");
        assert_eq!(json["date"], "2999-01-10");
        assert_eq!(json["timeSlot"], "09:00");
        assert!(json["createdAt"].is_string());
        assert_eq!(json["id"], appointment.id.to_string());
    }

    #[test]
    fn test_request_tolerates_missing_and_null_fields() {
        let request: AppointmentRequest =
            serde_json::from_str(r#"{"clientName": "Ana", "date": null}"#).unwrap();

        assert_eq!(request.client_name.as_deref(), Some("Ana"));
        assert!(request.service_type.is_none());
        assert!(request.date.is_none());
    }

    #[test]
    fn test_id_rejects_non_uuid() {
        assert!("65a1f0c2e4b0a1b2c3d4e5f6".parse::<AppointmentId>().is_err());
        let id = AppointmentId::new();
        assert_eq!(id.to_string().parse::<AppointmentId>().unwrap(), id);
    }
}
