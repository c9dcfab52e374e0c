// ABOUTME: Re-exports helper modules for barbershop-cli
// ABOUTME: Provides display formatting and the stdin confirmation prompt
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod display;
pub mod prompt;
