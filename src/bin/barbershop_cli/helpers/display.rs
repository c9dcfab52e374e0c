// ABOUTME: Output formatting helpers for barbershop-cli
// ABOUTME: Renders appointments, slot availability, options, and the month calendar
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use barbershop_booking::client::{CalendarCell, ScheduleState};
use barbershop_booking::models::{Appointment, BookingOptions};
use chrono::Datelike;

const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
const CELL_WIDTH: usize = 10;

pub fn display_appointment(appointment: &Appointment) {
    println!(
        "   {}  {}  {:<24} {}",
        appointment.date, appointment.time_slot, appointment.client_name, appointment.service_type
    );
    println!("   id: {}", appointment.id);
}

pub fn display_options(options: &BookingOptions) {
    println!("Service types:");
    for service in &options.service_types {
        println!("   {service}");
    }
    println!("Time slots:");
    println!("   {}", options.time_slots.join(" "));
}

pub fn display_schedule(state: &ScheduleState) {
    println!("\nSchedule for {}", state.selected_date);
    println!("{}", "=".repeat(60));

    if state.appointments.is_empty() {
        println!("   No appointments");
    }
    for appointment in &state.appointments {
        display_appointment(appointment);
    }

    println!("\nSlots ({} booked):", state.appointments.len());
    for choice in state.slot_choices() {
        let marker = if choice.disabled { "booked" } else { "open" };
        println!("   {}  {marker}", choice.label);
    }
}

pub fn display_calendar(state: &ScheduleState) {
    println!("\n{}", state.month);
    println!("{}", "=".repeat(CELL_WIDTH * 7));
    for name in WEEKDAYS {
        print!("{name:<CELL_WIDTH$}");
    }
    println!();

    for week in state.calendar().chunks(7) {
        for cell in week {
            match cell {
                CalendarCell::Blank => print!("{:<CELL_WIDTH$}", ""),
                CalendarCell::Day { date, .. } => print!("{:<CELL_WIDTH$}", date.day()),
            }
        }
        println!();
        for cell in week {
            print!("{:<CELL_WIDTH$}", cell.to_string());
        }
        println!();
    }
}
