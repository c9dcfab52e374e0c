// ABOUTME: Plain state container for the booking client
// ABOUTME: Holds the form, selected day and month, loaded lists, and derived slot availability
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Client state
//!
//! Every mutation is synchronous and side-effect free; the controller performs
//! the HTTP calls and feeds results back in.

use super::calendar::{calendar_cells, CalendarCell};
use crate::constants::{client_messages, formats::DATE_FORMAT};
use crate::services::validation::parse_date;
use barbershop_core::models::{
    Appointment, AppointmentId, AppointmentRequest, BookingOptions, MonthKey,
};
use chrono::NaiveDate;
use std::collections::HashSet;

/// Which screen the client shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Booking form and day list
    #[default]
    Schedule,
    /// Month calendar overview
    Dashboard,
}

/// Editable form fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    /// Client name
    ClientName,
    /// Service type
    ServiceType,
    /// `YYYY-MM-DD`; also moves the selected date when it is a valid date
    Date,
    /// Time slot
    TimeSlot,
}

/// Booking form contents as typed by the user
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppointmentForm {
    /// Client name
    pub client_name: String,
    /// Service type
    pub service_type: String,
    /// `YYYY-MM-DD`
    pub date: String,
    /// Time slot
    pub time_slot: String,
}

impl AppointmentForm {
    /// Empty form with the date set to `date`
    #[must_use]
    pub fn for_date(date: NaiveDate) -> Self {
        Self {
            date: date.format(DATE_FORMAT).to_string(),
            ..Self::default()
        }
    }
}

/// One entry of the slot picker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotChoice {
    /// `HH:MM`
    pub label: String,
    /// Booked by an appointment other than the one in the form
    pub disabled: bool,
}

/// All client-side state
#[derive(Debug, Clone)]
pub struct ScheduleState {
    /// Appointments on the selected date
    pub appointments: Vec<Appointment>,
    /// Appointments in the selected month, used for the calendar only
    pub month_appointments: Vec<Appointment>,
    /// Form contents
    pub form: AppointmentForm,
    /// Appointment being edited, if any
    pub editing_id: Option<AppointmentId>,
    /// Day whose appointments are listed
    pub selected_date: NaiveDate,
    /// Month shown in the calendar
    pub month: MonthKey,
    /// Service types and time slots from the server
    pub options: BookingOptions,
    /// A day fetch is in flight
    pub loading: bool,
    /// Last user-facing error
    pub error: Option<String>,
    /// Current screen
    pub view: View,
}

impl ScheduleState {
    /// Fresh state centered on `today`, with empty option lists until loaded
    #[must_use]
    pub fn new(today: NaiveDate) -> Self {
        Self {
            appointments: Vec::new(),
            month_appointments: Vec::new(),
            form: AppointmentForm::for_date(today),
            editing_id: None,
            selected_date: today,
            month: MonthKey::of(today),
            options: BookingOptions {
                service_types: Vec::new(),
                time_slots: Vec::new(),
            },
            loading: false,
            error: None,
            view: View::Schedule,
        }
    }

    /// Whether the form edits an existing appointment
    #[must_use]
    pub const fn is_editing(&self) -> bool {
        self.editing_id.is_some()
    }

    /// Select a day and keep the form's date in sync
    pub fn select_date(&mut self, date: NaiveDate) {
        self.selected_date = date;
        self.form.date = date.format(DATE_FORMAT).to_string();
    }

    /// Select the calendar month
    pub fn select_month(&mut self, month: MonthKey) {
        self.month = month;
    }

    /// Set one form field; returns `true` when the selected date changed
    pub fn update_field(&mut self, field: FormField, value: &str) -> bool {
        match field {
            FormField::ClientName => value.clone_into(&mut self.form.client_name),
            FormField::ServiceType => value.clone_into(&mut self.form.service_type),
            FormField::TimeSlot => value.clone_into(&mut self.form.time_slot),
            FormField::Date => {
                value.clone_into(&mut self.form.date);
                if let Ok(date) = parse_date(value) {
                    let changed = date != self.selected_date;
                    self.selected_date = date;
                    return changed;
                }
            }
        }
        false
    }

    /// Load `appointment` into the form and switch to its date
    pub fn start_edit(&mut self, appointment: &Appointment) {
        self.editing_id = Some(appointment.id);
        self.form = AppointmentForm {
            client_name: appointment.client_name.clone(),
            service_type: appointment.service_type.clone(),
            date: appointment.date.format(DATE_FORMAT).to_string(),
            time_slot: appointment.time_slot.clone(),
        };
        self.selected_date = appointment.date;
    }

    /// Leave edit mode with an empty form dated `today`
    pub fn reset_form(&mut self, today: NaiveDate) {
        self.editing_id = None;
        self.form = AppointmentForm::for_date(today);
        self.selected_date = today;
    }

    /// Build the request body, applying the same checks the server runs first
    ///
    /// The submitted date is the form's date field; it must be a valid date
    /// and agree with the selected date.
    ///
    /// # Errors
    ///
    /// Returns the message to display when a field is empty, the date is
    /// invalid, or the date is past
    pub fn prepare_submission(&self, today: NaiveDate) -> Result<AppointmentRequest, &'static str> {
        let client_name = self.form.client_name.trim();
        if client_name.is_empty()
            || self.form.service_type.is_empty()
            || self.form.date.is_empty()
            || self.form.time_slot.is_empty()
        {
            return Err(client_messages::FILL_ALL_FIELDS);
        }
        let date = match parse_date(&self.form.date) {
            Ok(date) if date == self.selected_date => date,
            _ => return Err(client_messages::INVALID_DATE),
        };
        if date < today {
            return Err(client_messages::PAST_DAY);
        }
        Ok(AppointmentRequest::new(
            client_name,
            self.form.service_type.as_str(),
            self.form.date.as_str(),
            self.form.time_slot.as_str(),
        ))
    }

    /// Slots booked on the selected date
    #[must_use]
    pub fn booked_slots(&self) -> HashSet<&str> {
        self.appointments
            .iter()
            .map(|a| a.time_slot.as_str())
            .collect()
    }

    /// Slot picker entries; booked slots are disabled unless the form holds them
    #[must_use]
    pub fn slot_choices(&self) -> Vec<SlotChoice> {
        let booked = self.booked_slots();
        self.options
            .time_slots
            .iter()
            .map(|slot| SlotChoice {
                label: slot.clone(),
                disabled: booked.contains(slot.as_str()) && *slot != self.form.time_slot,
            })
            .collect()
    }

    /// Calendar grid for the selected month
    #[must_use]
    pub fn calendar(&self) -> Vec<CalendarCell> {
        calendar_cells(self.month, &self.month_appointments)
    }

    /// Switch between schedule and dashboard
    pub fn toggle_view(&mut self) {
        self.view = match self.view {
            View::Schedule => View::Dashboard,
            View::Dashboard => View::Schedule,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, d).unwrap()
    }

    fn appointment(date: NaiveDate, slot: &str) -> Appointment {
        Appointment {
            id: AppointmentId::new(),
            client_name: "Ana".to_owned(),
            service_type: "Haircut".to_owned(),
            date,
            time_slot: slot.to_owned(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn loaded_state() -> ScheduleState {
        let mut state = ScheduleState::new(day(15));
        state.options = BookingOptions::default();
        state
    }

    #[test]
    fn test_new_state_defaults_to_today() {
        let state = ScheduleState::new(day(15));
        assert_eq!(state.form.date, "2025-06-15");
        assert_eq!(state.month, MonthKey::new(2025, 6).unwrap());
        assert!(!state.is_editing());
        assert!(state.options.time_slots.is_empty());
    }

    #[test]
    fn test_date_field_moves_selected_date() {
        let mut state = loaded_state();
        assert!(state.update_field(FormField::Date, "2025-06-20"));
        assert_eq!(state.selected_date, day(20));
        assert!(!state.update_field(FormField::Date, "2025-06-2"));
        assert_eq!(state.selected_date, day(20));
    }

    #[test]
    fn test_submission_checks() {
        let mut state = loaded_state();
        assert_eq!(
            state.prepare_submission(day(15)).unwrap_err(),
            client_messages::FILL_ALL_FIELDS
        );

        state.update_field(FormField::ClientName, "  Ana ");
        state.update_field(FormField::ServiceType, "Haircut");
        state.update_field(FormField::TimeSlot, "09:00");
        state.select_date(day(14));
        assert_eq!(
            state.prepare_submission(day(15)).unwrap_err(),
            client_messages::PAST_DAY
        );

        state.select_date(day(16));
        let request = state.prepare_submission(day(15)).unwrap();
        assert_eq!(request.client_name.as_deref(), Some("Ana"));
        assert_eq!(request.date.as_deref(), Some("2025-06-16"));
    }

    #[test]
    fn test_invalid_date_field_blocks_submission() {
        let mut state = loaded_state();
        state.update_field(FormField::ClientName, "Ana");
        state.update_field(FormField::ServiceType, "Haircut");
        state.update_field(FormField::TimeSlot, "09:00");

        for raw in ["2025-06-31", "2025-6-20", "20/06/2025"] {
            assert!(!state.update_field(FormField::Date, raw));
            assert_eq!(state.selected_date, day(15));
            assert_eq!(
                state.prepare_submission(day(15)).unwrap_err(),
                client_messages::INVALID_DATE,
                "date field: {raw}"
            );
        }

        state.update_field(FormField::Date, "");
        assert_eq!(
            state.prepare_submission(day(15)).unwrap_err(),
            client_messages::FILL_ALL_FIELDS
        );

        state.update_field(FormField::Date, "2025-06-15");
        let request = state.prepare_submission(day(15)).unwrap();
        assert_eq!(request.date.as_deref(), Some("2025-06-15"));
    }

    #[test]
    fn test_booked_slot_disabled_unless_held_by_form() {
        let mut state = loaded_state();
        let held = appointment(day(15), "09:00");
        state.appointments = vec![held.clone(), appointment(day(15), "09:30")];

        let disabled = |state: &ScheduleState, label: &str| {
            state
                .slot_choices()
                .into_iter()
                .find(|c| c.label == label)
                .unwrap()
                .disabled
        };

        assert!(disabled(&state, "09:00"));
        assert!(disabled(&state, "09:30"));
        assert!(!disabled(&state, "10:00"));

        state.start_edit(&held);
        assert!(!disabled(&state, "09:00"));
        assert!(disabled(&state, "09:30"));
    }

    #[test]
    fn test_edit_then_cancel() {
        let mut state = loaded_state();
        let target = appointment(day(20), "13:00");
        state.start_edit(&target);
        assert_eq!(state.editing_id, Some(target.id));
        assert_eq!(state.selected_date, day(20));
        assert_eq!(state.form.time_slot, "13:00");

        state.reset_form(day(15));
        assert!(!state.is_editing());
        assert_eq!(state.form, AppointmentForm::for_date(day(15)));
        assert_eq!(state.selected_date, day(15));
    }

    #[test]
    fn test_toggle_view() {
        let mut state = loaded_state();
        state.toggle_view();
        assert_eq!(state.view, View::Dashboard);
        state.toggle_view();
        assert_eq!(state.view, View::Schedule);
    }
}
