// ABOUTME: Appointment business logic shared by the HTTP handlers
// ABOUTME: Validates writes, runs the slot conflict pre-check, and maps store outcomes to AppError
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::validation::{parse_id, parse_list_filter, validate_request};
use crate::constants::messages;
use crate::database::AppointmentStore;
use crate::errors::{AppError, AppResult};
use barbershop_core::models::{
    Appointment, AppointmentDraft, AppointmentId, AppointmentRequest, BookingOptions,
    DeleteResponse,
};
use chrono::{Local, NaiveDate};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Source of "today" for the past-date rule
pub type TodayFn = fn() -> NaiveDate;

/// Server local calendar date
#[must_use]
pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Stateless appointment operations over a shared store and immutable catalog
#[derive(Clone)]
pub struct AppointmentService {
    store: Arc<dyn AppointmentStore>,
    options: Arc<BookingOptions>,
    today: TodayFn,
}

impl AppointmentService {
    /// Create a service using the server's local clock
    #[must_use]
    pub fn new(store: Arc<dyn AppointmentStore>, options: BookingOptions) -> Self {
        Self {
            store,
            options: Arc::new(options),
            today: local_today,
        }
    }

    /// Replace the clock used for the past-date rule
    #[must_use]
    pub fn with_today(mut self, today: TodayFn) -> Self {
        self.today = today;
        self
    }

    /// Configured service types and time slots
    #[must_use]
    pub fn options(&self) -> &BookingOptions {
        &self.options
    }

    /// List appointments by optional `date` or `month` query value
    ///
    /// # Errors
    ///
    /// Returns a validation error for a malformed filter, or a database error
    pub async fn list(&self, date: Option<&str>, month: Option<&str>) -> AppResult<Vec<Appointment>> {
        let filter = parse_list_filter(date, month)?;
        self.store.list(filter).await.map_err(|e| {
            warn!(error = %e, "Listing appointments failed");
            AppError::database(messages::FETCH_FAILED).with_source(e)
        })
    }

    /// Fetch one appointment by its raw path id
    ///
    /// # Errors
    ///
    /// Returns a validation error for a malformed id, not-found when absent
    pub async fn get(&self, raw_id: &str) -> AppResult<Appointment> {
        let id = parse_id(raw_id)?;
        self.store
            .get(id)
            .await?
            .ok_or_else(|| AppError::not_found(messages::NOT_FOUND))
    }

    /// Validate and book a new appointment
    ///
    /// # Errors
    ///
    /// Returns a validation error, a conflict when the slot is taken, or a database error
    pub async fn create(&self, request: &AppointmentRequest) -> AppResult<Appointment> {
        let draft = validate_request(&self.options, request, (self.today)())?;
        self.ensure_slot_free(&draft, None).await?;

        let appointment = self.store.insert(&draft).await?;
        info!(
            appointment.id = %appointment.id,
            date = %appointment.date,
            time_slot = %appointment.time_slot,
            "Booked appointment"
        );
        Ok(appointment)
    }

    /// Validate and rewrite an existing appointment
    ///
    /// # Errors
    ///
    /// Returns a validation error, not-found, a conflict with another record, or a database error
    pub async fn update(
        &self,
        raw_id: &str,
        request: &AppointmentRequest,
    ) -> AppResult<Appointment> {
        let id = parse_id(raw_id)?;
        let draft = validate_request(&self.options, request, (self.today)())?;
        self.ensure_slot_free(&draft, Some(id)).await?;

        self.store
            .update(id, &draft)
            .await?
            .ok_or_else(|| AppError::not_found(messages::NOT_FOUND))
    }

    /// Remove an appointment
    ///
    /// # Errors
    ///
    /// Returns a validation error for a malformed id, not-found when absent
    pub async fn delete(&self, raw_id: &str) -> AppResult<DeleteResponse> {
        let id = parse_id(raw_id)?;
        if self.store.delete(id).await? {
            Ok(DeleteResponse { ok: true })
        } else {
            Err(AppError::not_found(messages::NOT_FOUND))
        }
    }

    async fn ensure_slot_free(
        &self,
        draft: &AppointmentDraft,
        exclude: Option<AppointmentId>,
    ) -> AppResult<()> {
        let existing = self
            .store
            .find_by_slot(draft.date, &draft.time_slot, exclude)
            .await?;
        if let Some(holder) = existing {
            debug!(
                holder = %holder.id,
                date = %draft.date,
                time_slot = %draft.time_slot,
                "Slot already booked"
            );
            return Err(AppError::conflict(messages::SLOT_UNAVAILABLE));
        }
        Ok(())
    }
}
