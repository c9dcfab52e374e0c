// ABOUTME: Interactive confirmation for barbershop-cli
// ABOUTME: Reads a y/N answer from stdin before destructive actions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use barbershop_booking::client::Confirm;
use std::io::{self, BufRead, Write};

/// Asks on stdout and reads the answer from stdin; anything but `y`/`yes` declines
pub struct StdinConfirm;

impl Confirm for StdinConfirm {
    fn confirm(&self, prompt: &str) -> bool {
        print!("{prompt} [y/N] ");
        if io::stdout().flush().is_err() {
            return false;
        }
        let mut answer = String::new();
        if io::stdin().lock().read_line(&mut answer).is_err() {
            return false;
        }
        matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
    }
}
