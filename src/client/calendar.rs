// ABOUTME: Month calendar grid for the booking client
// ABOUTME: Sunday-first layout with leading blanks and a booking count per day
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use barbershop_core::models::{Appointment, MonthKey};
use chrono::{Datelike, NaiveDate};
use std::collections::BTreeMap;
use std::fmt;

/// One cell of the month grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarCell {
    /// Padding before the first day of the month
    Blank,
    /// A real day and how many appointments it holds
    Day {
        /// Calendar date of the cell
        date: NaiveDate,
        /// Appointments booked on that date
        bookings: usize,
    },
}

impl fmt::Display for CalendarCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Blank => Ok(()),
            Self::Day { bookings: 0, .. } => write!(f, "free"),
            Self::Day { bookings: 1, .. } => write!(f, "1 booked"),
            Self::Day { bookings, .. } => write!(f, "{bookings} booked"),
        }
    }
}

/// Days of `month` preceded by `None` for each weekday before the 1st
#[must_use]
pub fn calendar_days(month: MonthKey) -> Vec<Option<NaiveDate>> {
    let Some(first) = month.first_day() else {
        return Vec::new();
    };
    let offset = first.weekday().num_days_from_sunday() as usize;

    let mut days = vec![None; offset];
    days.extend(
        (1..=month.days_in_month()).filter_map(|day| first.with_day(day).map(Some)),
    );
    days
}

/// Count appointments per date
#[must_use]
pub fn bookings_by_date(appointments: &[Appointment]) -> BTreeMap<NaiveDate, usize> {
    appointments.iter().fold(BTreeMap::new(), |mut acc, a| {
        *acc.entry(a.date).or_insert(0) += 1;
        acc
    })
}

/// Full month grid annotated with booking counts from `appointments`
#[must_use]
pub fn calendar_cells(month: MonthKey, appointments: &[Appointment]) -> Vec<CalendarCell> {
    let counts = bookings_by_date(appointments);
    calendar_days(month)
        .into_iter()
        .map(|day| match day {
            None => CalendarCell::Blank,
            Some(date) => CalendarCell::Day {
                date,
                bookings: counts.get(&date).copied().unwrap_or(0),
            },
        })
        .collect()
}
