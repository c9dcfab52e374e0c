// ABOUTME: Calendar command for barbershop-cli
// ABOUTME: Fetches one month of appointments and prints the Sunday-first grid
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::helpers::display::display_calendar;
use anyhow::{anyhow, Result};
use barbershop_booking::client::BookingController;
use barbershop_booking::models::MonthKey;

pub async fn show(controller: &mut BookingController, month: Option<&str>) -> Result<()> {
    match month {
        Some(raw) => {
            let month = MonthKey::parse(raw).ok_or_else(|| anyhow!("Invalid month '{raw}'"))?;
            controller.select_month(month).await;
        }
        None => controller.load_month().await,
    }
    display_calendar(controller.state());
    Ok(())
}
