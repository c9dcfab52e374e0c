// ABOUTME: Barbershop CLI - terminal client for the booking API
// ABOUTME: Lists, books, edits, and cancels appointments through the booking controller
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Show today's schedule with slot availability
//! barbershop-cli schedule
//!
//! # Show the month calendar
//! barbershop-cli calendar --month 2025-07
//!
//! # Book a slot
//! barbershop-cli book --name Ana --service Haircut --date 2025-07-10 --slot 09:00
//!
//! # Move an appointment to another slot
//! barbershop-cli edit 0b6f... --slot 09:30
//!
//! # Cancel an appointment (asks for confirmation unless --yes)
//! barbershop-cli cancel 0b6f...
//! ```

mod commands;
mod helpers;

use anyhow::Result;
use barbershop_booking::{
    client::{BookingClient, BookingController},
    constants::defaults,
    logging::LoggingConfig,
};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "barbershop-cli",
    about = "Barbershop booking terminal client",
    long_about = "Terminal client for the barbershop booking API: browse the schedule, book, edit, and cancel appointments."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Base URL of the booking API
    #[arg(long, global = true, env = "BARBERSHOP_API_URL", default_value = defaults::DEFAULT_API_URL)]
    api_url: String,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Check that the server is reachable
    Health,

    /// Show the configured service types and time slots
    Options,

    /// Show appointments and slot availability for one day
    Schedule {
        /// Day to show, `YYYY-MM-DD` (defaults to today)
        #[arg(long)]
        date: Option<String>,
    },

    /// Show the month calendar with booking counts
    Calendar {
        /// Month to show, `YYYY-MM` (defaults to the current month)
        #[arg(long)]
        month: Option<String>,
    },

    /// Book a new appointment
    Book {
        /// Client name
        #[arg(long)]
        name: String,

        /// Service type
        #[arg(long)]
        service: String,

        /// Day, `YYYY-MM-DD`
        #[arg(long)]
        date: String,

        /// Time slot, `HH:MM`
        #[arg(long)]
        slot: String,
    },

    /// Change an existing appointment; omitted fields keep their value
    Edit {
        /// Appointment id
        id: String,

        /// New client name
        #[arg(long)]
        name: Option<String>,

        /// New service type
        #[arg(long)]
        service: Option<String>,

        /// New day, `YYYY-MM-DD`
        #[arg(long)]
        date: Option<String>,

        /// New time slot, `HH:MM`
        #[arg(long)]
        slot: Option<String>,
    },

    /// Cancel an appointment
    Cancel {
        /// Appointment id
        id: String,

        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    LoggingConfig::for_cli(cli.verbose).init()?;

    let client = BookingClient::new(&cli.api_url);
    let mut controller = BookingController::new(client);

    match cli.command {
        Command::Health => commands::appointments::health(&controller).await,
        Command::Options => commands::appointments::options(&mut controller).await,
        Command::Schedule { date } => {
            commands::appointments::schedule(&mut controller, date.as_deref()).await
        }
        Command::Calendar { month } => {
            commands::calendar::show(&mut controller, month.as_deref()).await
        }
        Command::Book {
            name,
            service,
            date,
            slot,
        } => {
            let fields = commands::appointments::Fields {
                name: Some(name),
                service: Some(service),
                date: Some(date),
                slot: Some(slot),
            };
            commands::appointments::book(&mut controller, fields).await
        }
        Command::Edit {
            id,
            name,
            service,
            date,
            slot,
        } => {
            let fields = commands::appointments::Fields {
                name,
                service,
                date,
                slot,
            };
            commands::appointments::edit(&mut controller, &id, fields).await
        }
        Command::Cancel { id, yes } => {
            commands::appointments::cancel(&mut controller, &id, yes).await
        }
    }
}
