// ABOUTME: Typed HTTP client for the booking REST API built on reqwest
// ABOUTME: One method per endpoint; non-success statuses become ClientError values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::errors::{ClientError, ClientResult};
use crate::constants::{env_config, formats::DATE_FORMAT, routes};
use barbershop_core::errors::ErrorResponse;
use barbershop_core::models::{
    Appointment, AppointmentId, AppointmentRequest, BookingOptions, DeleteResponse, MonthKey,
};
use chrono::NaiveDate;
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Body of `GET /api/health`
#[derive(Debug, Clone, Deserialize)]
pub struct HealthStatus {
    /// `"ok"` when the server is up
    pub status: String,
    /// Server time, RFC 3339
    pub time: String,
}

/// HTTP client for the booking API
#[derive(Debug, Clone)]
pub struct BookingClient {
    http: reqwest::Client,
    base_url: String,
}

impl BookingClient {
    /// Create a client for `base_url`; a trailing slash is ignored
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_default();
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }

    /// Create a client from `BARBERSHOP_API_URL`
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(&env_config::api_url())
    }

    /// Base URL without trailing slash
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn appointment_url(&self, id: AppointmentId) -> String {
        format!("{}{}/{id}", self.base_url, routes::APPOINTMENTS)
    }

    /// `GET /api/health`
    ///
    /// # Errors
    ///
    /// Returns an error if the server is unreachable or unhealthy
    pub async fn health(&self) -> ClientResult<HealthStatus> {
        let response = self.http.get(self.url(routes::HEALTH)).send().await?;
        decode(response).await
    }

    /// `GET /api/appointments/options`
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails
    pub async fn options(&self) -> ClientResult<BookingOptions> {
        let response = self
            .http
            .get(self.url(routes::APPOINTMENT_OPTIONS))
            .send()
            .await?;
        decode(response).await
    }

    /// `GET /api/appointments`
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails
    pub async fn list_all(&self) -> ClientResult<Vec<Appointment>> {
        self.list(&[]).await
    }

    /// `GET /api/appointments?date=YYYY-MM-DD`
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails
    pub async fn list_by_date(&self, date: NaiveDate) -> ClientResult<Vec<Appointment>> {
        let date = date.format(DATE_FORMAT).to_string();
        self.list(&[("date", date.as_str())]).await
    }

    /// `GET /api/appointments?month=YYYY-MM`
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails
    pub async fn list_by_month(&self, month: MonthKey) -> ClientResult<Vec<Appointment>> {
        let month = month.to_string();
        self.list(&[("month", month.as_str())]).await
    }

    async fn list(&self, query: &[(&str, &str)]) -> ClientResult<Vec<Appointment>> {
        let response = self
            .http
            .get(self.url(routes::APPOINTMENTS))
            .query(query)
            .send()
            .await?;
        decode(response).await
    }

    /// `GET /api/appointments/{id}`
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the appointment does not exist
    pub async fn get(&self, id: AppointmentId) -> ClientResult<Appointment> {
        let response = self.http.get(self.appointment_url(id)).send().await?;
        decode(response).await
    }

    /// `POST /api/appointments`
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::SlotUnavailable`] on conflict, or another error if the request fails
    pub async fn create(&self, request: &AppointmentRequest) -> ClientResult<Appointment> {
        debug!(date = ?request.date, time_slot = ?request.time_slot, "Creating appointment");
        let response = self
            .http
            .post(self.url(routes::APPOINTMENTS))
            .json(request)
            .send()
            .await?;
        decode(response).await
    }

    /// `PUT /api/appointments/{id}`
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::SlotUnavailable`] on conflict, or another error if the request fails
    pub async fn update(
        &self,
        id: AppointmentId,
        request: &AppointmentRequest,
    ) -> ClientResult<Appointment> {
        debug!(appointment.id = %id, "Updating appointment");
        let response = self
            .http
            .put(self.appointment_url(id))
            .json(request)
            .send()
            .await?;
        decode(response).await
    }

    /// `DELETE /api/appointments/{id}`
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the appointment does not exist
    pub async fn delete(&self, id: AppointmentId) -> ClientResult<DeleteResponse> {
        debug!(appointment.id = %id, "Deleting appointment");
        let response = self.http.delete(self.appointment_url(id)).send().await?;
        decode(response).await
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> ClientResult<T> {
    let status = response.status();
    if status == StatusCode::CONFLICT {
        return Err(ClientError::SlotUnavailable);
    }
    if !status.is_success() {
        let message = match response.json::<ErrorResponse>().await {
            Ok(body) => body.error,
            Err(_) => status
                .canonical_reason()
                .unwrap_or("Unexpected status")
                .to_owned(),
        };
        return Err(ClientError::Status {
            status: status.as_u16(),
            message,
        });
    }
    response
        .json::<T>()
        .await
        .map_err(|e| ClientError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_stripped() {
        let client = BookingClient::new("http://localhost:4000/");
        assert_eq!(client.base_url(), "http://localhost:4000");

        let id = AppointmentId::new();
        assert_eq!(
            client.appointment_url(id),
            format!("http://localhost:4000/api/appointments/{id}")
        );
    }
}
