// ABOUTME: Appointment commands for barbershop-cli
// ABOUTME: Schedule view, booking, editing, and cancellation through BookingController
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::helpers::display::{display_appointment, display_options, display_schedule};
use crate::helpers::prompt::StdinConfirm;
use anyhow::{anyhow, bail, Context, Result};
use barbershop_booking::client::{AlwaysConfirm, BookingController, DeleteOutcome, FormField};
use barbershop_booking::models::AppointmentId;
use barbershop_booking::services::validation::parse_date;

/// Form values supplied on the command line
pub struct Fields {
    pub name: Option<String>,
    pub service: Option<String>,
    pub date: Option<String>,
    pub slot: Option<String>,
}

pub async fn health(controller: &BookingController) -> Result<()> {
    let status = controller
        .client()
        .health()
        .await
        .with_context(|| format!("Server at {} is unreachable", controller.client().base_url()))?;
    println!("Server status: {} ({})", status.status, status.time);
    Ok(())
}

pub async fn options(controller: &mut BookingController) -> Result<()> {
    controller.load_options().await;
    display_options(&controller.state().options);
    Ok(())
}

pub async fn schedule(controller: &mut BookingController, date: Option<&str>) -> Result<()> {
    controller.load_options().await;
    match date {
        Some(raw) => {
            let date = parse_date(raw).map_err(|e| anyhow!(e.message))?;
            controller.select_date(date).await;
        }
        None => controller.load_day().await,
    }
    fail_on_error(controller)?;
    display_schedule(controller.state());
    Ok(())
}

pub async fn book(controller: &mut BookingController, fields: Fields) -> Result<()> {
    controller.load_options().await;
    apply_fields(controller, fields).await;
    save(controller).await
}

pub async fn edit(controller: &mut BookingController, raw_id: &str, fields: Fields) -> Result<()> {
    let id = parse_id(raw_id)?;
    let existing = controller
        .client()
        .get(id)
        .await
        .with_context(|| format!("Could not load appointment {id}"))?;

    controller.load_options().await;
    controller.start_edit(&existing).await;
    apply_fields(controller, fields).await;
    save(controller).await
}

pub async fn cancel(controller: &mut BookingController, raw_id: &str, yes: bool) -> Result<()> {
    let id = parse_id(raw_id)?;
    let outcome = if yes {
        controller.delete(id, &AlwaysConfirm).await
    } else {
        controller.delete(id, &StdinConfirm).await
    };

    match outcome {
        DeleteOutcome::Removed => {
            println!("Appointment {id} removed");
            Ok(())
        }
        DeleteOutcome::Cancelled => {
            println!("Nothing removed");
            Ok(())
        }
        DeleteOutcome::Failed => fail_on_error(controller),
    }
}

async fn apply_fields(controller: &mut BookingController, fields: Fields) {
    let updates = [
        (FormField::ClientName, fields.name),
        (FormField::ServiceType, fields.service),
        (FormField::Date, fields.date),
        (FormField::TimeSlot, fields.slot),
    ];
    for (field, value) in updates {
        if let Some(value) = value {
            controller.update_field(field, &value).await;
        }
    }
}

async fn save(controller: &mut BookingController) -> Result<()> {
    match controller.submit().await {
        Some(saved) => {
            println!("Saved:");
            display_appointment(&saved);
            Ok(())
        }
        None => {
            fail_on_error(controller)?;
            bail!("Appointment was not saved")
        }
    }
}

fn parse_id(raw: &str) -> Result<AppointmentId> {
    raw.parse()
        .with_context(|| format!("'{raw}' is not a valid appointment id"))
}

fn fail_on_error(controller: &BookingController) -> Result<()> {
    match &controller.state().error {
        Some(message) => bail!("{message}"),
        None => Ok(()),
    }
}
