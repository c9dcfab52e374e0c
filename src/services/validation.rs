// ABOUTME: Input validation for appointment writes, list filters, and identifiers
// ABOUTME: Checks run in a fixed order and report the first failure with a short message
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::{formats::DATE_FORMAT, messages};
use crate::errors::{AppError, AppResult};
use barbershop_core::models::{
    AppointmentDraft, AppointmentId, AppointmentRequest, BookingOptions, ListFilter, MonthKey,
};
use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;

static DATE_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").ok());

/// Parse a `YYYY-MM-DD` string that must also name a real calendar day
///
/// # Errors
///
/// Returns `INVALID_FORMAT` with "Invalid date" otherwise
pub fn parse_date(value: &str) -> AppResult<NaiveDate> {
    let shaped = DATE_PATTERN
        .as_ref()
        .is_some_and(|pattern| pattern.is_match(value));
    if !shaped {
        return Err(AppError::invalid_format(messages::INVALID_DATE));
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map_err(|_| AppError::invalid_format(messages::INVALID_DATE))
}

/// Parse a path identifier
///
/// # Errors
///
/// Returns `INVALID_INPUT` with "Invalid appointment id" when `raw` is not a UUID
pub fn parse_id(raw: &str) -> AppResult<AppointmentId> {
    raw.parse()
        .map_err(|_| AppError::invalid_input(messages::INVALID_ID))
}

/// Build a list filter from optional `date` and `month` query values
///
/// Empty strings count as absent. When both are present the month wins and
/// the date is not inspected.
///
/// # Errors
///
/// Returns "Invalid month" or "Invalid date" for a malformed value
pub fn parse_list_filter(date: Option<&str>, month: Option<&str>) -> AppResult<ListFilter> {
    let date = date.filter(|v| !v.is_empty());
    let month = month.filter(|v| !v.is_empty());

    if let Some(raw) = month {
        return MonthKey::parse(raw)
            .map(ListFilter::Month)
            .ok_or_else(|| AppError::invalid_format(messages::INVALID_MONTH));
    }
    match date {
        Some(raw) => parse_date(raw).map(ListFilter::Date),
        None => Ok(ListFilter::All),
    }
}

/// Validate a create/update body against the catalog and `today`
///
/// Order: missing fields, service type, time slot, date shape, past date.
///
/// # Errors
///
/// Returns the first failing check as a 400-class `AppError`
pub fn validate_request(
    options: &BookingOptions,
    request: &AppointmentRequest,
    today: NaiveDate,
) -> AppResult<AppointmentDraft> {
    let client_name = request.client_name.as_deref().map_or("", str::trim);
    let service_type = request.service_type.as_deref().unwrap_or_default();
    let date = request.date.as_deref().unwrap_or_default();
    let time_slot = request.time_slot.as_deref().unwrap_or_default();

    if client_name.is_empty() || service_type.is_empty() || date.is_empty() || time_slot.is_empty()
    {
        return Err(AppError::missing_field(messages::MISSING_FIELDS));
    }
    if !options.has_service_type(service_type) {
        return Err(AppError::invalid_input(messages::INVALID_SERVICE_TYPE));
    }
    if !options.has_time_slot(time_slot) {
        return Err(AppError::invalid_input(messages::INVALID_TIME_SLOT));
    }
    let date = parse_date(date)?;
    if date < today {
        return Err(AppError::out_of_range(messages::PAST_DATE));
    }

    Ok(AppointmentDraft {
        client_name: client_name.to_owned(),
        service_type: service_type.to_owned(),
        date,
        time_slot: time_slot.to_owned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    fn request(date: &str) -> AppointmentRequest {
        AppointmentRequest::new("  Ana  ", "Haircut", date, "09:00")
    }

    fn message(result: AppResult<AppointmentDraft>) -> String {
        result.unwrap_err().message
    }

    #[test]
    fn test_valid_request_trims_client_name() {
        let draft = validate_request(&BookingOptions::default(), &request("2025-06-15"), today())
            .unwrap();
        assert_eq!(draft.client_name, "Ana");
        assert_eq!(draft.date, today());
    }

    #[test]
    fn test_blank_name_is_missing_field() {
        let mut req = request("2025-06-20");
        req.client_name = Some("   ".to_owned());
        let err = validate_request(&BookingOptions::default(), &req, today()).unwrap_err();
        assert_eq!(err.code, ErrorCode::MissingRequiredField);
        assert_eq!(err.message, messages::MISSING_FIELDS);
    }

    #[test]
    fn test_checks_run_in_order() {
        let options = BookingOptions::default();

        // unknown service and slot: service reported first
        let req = AppointmentRequest::new("Ana", "Shave", "2025-06-20", "12:00");
        assert_eq!(
            message(validate_request(&options, &req, today())),
            messages::INVALID_SERVICE_TYPE
        );

        // unknown slot and bad date: slot reported first
        let req = AppointmentRequest::new("Ana", "Haircut", "20-06-2025", "12:00");
        assert_eq!(
            message(validate_request(&options, &req, today())),
            messages::INVALID_TIME_SLOT
        );

        let req = AppointmentRequest::new("Ana", "Haircut", "20-06-2025", "09:00");
        assert_eq!(
            message(validate_request(&options, &req, today())),
            messages::INVALID_DATE
        );

        let req = AppointmentRequest::new("Ana", "Haircut", "2025-06-14", "09:00");
        assert_eq!(
            message(validate_request(&options, &req, today())),
            messages::PAST_DATE
        );
    }

    #[test]
    fn test_impossible_calendar_date_is_invalid() {
        assert!(parse_date("2025-02-30").is_err());
        assert!(parse_date("2025-2-3").is_err());
        assert!(parse_date("2024-02-29").is_ok());
    }

    #[test]
    fn test_list_filter_month_wins() {
        assert_eq!(
            parse_list_filter(Some("2024-02-10"), Some("2024-03")).unwrap(),
            ListFilter::Month(MonthKey::new(2024, 3).unwrap())
        );
        assert_eq!(
            parse_list_filter(Some(""), Some("")).unwrap(),
            ListFilter::All
        );
        assert_eq!(
            parse_list_filter(Some("2024-02-10"), None).unwrap(),
            ListFilter::Date(NaiveDate::from_ymd_opt(2024, 2, 10).unwrap())
        );
        assert_eq!(
            parse_list_filter(None, Some("2024-3")).unwrap_err().message,
            messages::INVALID_MONTH
        );
        assert_eq!(
            parse_list_filter(Some("tomorrow"), None).unwrap_err().message,
            messages::INVALID_DATE
        );
    }

    #[test]
    fn test_parse_id() {
        assert!(parse_id("not-an-id").is_err());
        let id = AppointmentId::new();
        assert_eq!(parse_id(&id.to_string()).unwrap(), id);
    }
}
