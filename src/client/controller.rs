// ABOUTME: Booking controller wiring the HTTP client to the client state container
// ABOUTME: Implements fetch-on-select, submit, edit, and confirmed delete flows
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::api::BookingClient;
use super::errors::ClientError;
use super::state::{FormField, ScheduleState};
use crate::constants::client_messages;
use crate::services::{local_today, TodayFn};
use barbershop_core::models::{Appointment, AppointmentId, MonthKey};
use chrono::NaiveDate;
use tracing::{debug, warn};

/// Asks the user to confirm a destructive action
pub trait Confirm {
    /// Return `true` to proceed
    fn confirm(&self, prompt: &str) -> bool;
}

/// Confirms everything; for scripted use
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysConfirm;

impl Confirm for AlwaysConfirm {
    fn confirm(&self, _prompt: &str) -> bool {
        true
    }
}

impl<F: Fn(&str) -> bool> Confirm for F {
    fn confirm(&self, prompt: &str) -> bool {
        self(prompt)
    }
}

/// What happened to a delete request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The server removed the appointment
    Removed,
    /// The user declined the confirmation; nothing was sent
    Cancelled,
    /// The request failed; the error message is set
    Failed,
}

/// Drives [`ScheduleState`] through [`BookingClient`] calls
///
/// Requests run one at a time. Failures are recorded in `state.error` and
/// never discard previously loaded data, except the month list, which is
/// cleared when its fetch fails.
#[derive(Debug, Clone)]
pub struct BookingController {
    client: BookingClient,
    state: ScheduleState,
    today: TodayFn,
}

impl BookingController {
    /// Create a controller using the local clock
    #[must_use]
    pub fn new(client: BookingClient) -> Self {
        Self::with_today(client, local_today)
    }

    /// Create a controller with an explicit clock
    #[must_use]
    pub fn with_today(client: BookingClient, today: TodayFn) -> Self {
        Self {
            client,
            state: ScheduleState::new(today()),
            today,
        }
    }

    /// Current state
    #[must_use]
    pub const fn state(&self) -> &ScheduleState {
        &self.state
    }

    /// Mutable state, for form edits that need no request
    pub fn state_mut(&mut self) -> &mut ScheduleState {
        &mut self.state
    }

    /// Underlying HTTP client
    #[must_use]
    pub const fn client(&self) -> &BookingClient {
        &self.client
    }

    /// Load options, the selected day, and the selected month
    pub async fn init(&mut self) {
        self.load_options().await;
        self.load_day().await;
        self.load_month().await;
    }

    /// Fetch booking options; on failure the lists are left empty
    pub async fn load_options(&mut self) {
        match self.client.options().await {
            Ok(options) => self.state.options = options,
            Err(e) => {
                warn!(error = %e, "Failed to load booking options");
                self.state.options.service_types.clear();
                self.state.options.time_slots.clear();
            }
        }
    }

    /// Fetch appointments for the selected date
    pub async fn load_day(&mut self) {
        self.state.loading = true;
        self.state.error = None;
        match self.client.list_by_date(self.state.selected_date).await {
            Ok(appointments) => self.state.appointments = appointments,
            Err(e) => {
                warn!(error = %e, "Failed to load appointments");
                self.state.error = Some(client_messages::LOAD_FAILED.to_owned());
            }
        }
        self.state.loading = false;
    }

    /// Fetch appointments for the selected month; cleared on failure
    pub async fn load_month(&mut self) {
        match self.client.list_by_month(self.state.month).await {
            Ok(appointments) => self.state.month_appointments = appointments,
            Err(e) => {
                debug!(error = %e, "Failed to load month");
                self.state.month_appointments.clear();
            }
        }
    }

    /// Select a day and re-fetch its appointments
    pub async fn select_date(&mut self, date: NaiveDate) {
        self.state.select_date(date);
        self.load_day().await;
    }

    /// Select a month and re-fetch its appointments
    pub async fn select_month(&mut self, month: MonthKey) {
        self.state.select_month(month);
        self.load_month().await;
    }

    /// Set a form field, re-fetching the day when the date field changes it
    pub async fn update_field(&mut self, field: FormField, value: &str) {
        if self.state.update_field(field, value) {
            self.load_day().await;
        }
    }

    /// Load an appointment into the form and fetch its day
    pub async fn start_edit(&mut self, appointment: &Appointment) {
        self.state.start_edit(appointment);
        self.load_day().await;
    }

    /// Leave edit mode and return to today
    pub async fn cancel_edit(&mut self) {
        self.state.reset_form((self.today)());
        self.load_day().await;
    }

    /// Validate and send the form as a create or an update
    ///
    /// On success the form resets and both the saved day and its month are
    /// re-fetched. Returns the saved appointment.
    pub async fn submit(&mut self) -> Option<Appointment> {
        self.state.error = None;
        let request = match self.state.prepare_submission((self.today)()) {
            Ok(request) => request,
            Err(message) => {
                self.state.error = Some(message.to_owned());
                return None;
            }
        };

        let result = match self.state.editing_id {
            Some(id) => self.client.update(id, &request).await,
            None => self.client.create(&request).await,
        };

        match result {
            Ok(saved) => {
                self.state.reset_form((self.today)());
                self.state.select_date(saved.date);
                self.state.select_month(MonthKey::of(saved.date));
                self.load_day().await;
                self.load_month().await;
                Some(saved)
            }
            Err(ClientError::SlotUnavailable) => {
                self.state.error = Some(client_messages::SLOT_UNAVAILABLE.to_owned());
                None
            }
            Err(e) => {
                warn!(error = %e, "Failed to save appointment");
                self.state.error = Some(client_messages::SAVE_FAILED.to_owned());
                None
            }
        }
    }

    /// Delete after confirmation, then re-fetch the selected day and month
    pub async fn delete(&mut self, id: AppointmentId, confirm: &dyn Confirm) -> DeleteOutcome {
        if !confirm.confirm(client_messages::CONFIRM_REMOVE) {
            return DeleteOutcome::Cancelled;
        }
        self.state.error = None;

        match self.client.delete(id).await {
            Ok(_) => {
                self.load_day().await;
                self.load_month().await;
                DeleteOutcome::Removed
            }
            Err(e) => {
                warn!(error = %e, appointment.id = %id, "Failed to remove appointment");
                self.state.error = Some(client_messages::REMOVE_FAILED.to_owned());
                DeleteOutcome::Failed
            }
        }
    }
}
