// ABOUTME: Re-exports command modules for barbershop-cli
// ABOUTME: Provides appointment and calendar commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod appointments;
pub mod calendar;
