// ABOUTME: Unified error handling re-exported from barbershop-core
// ABOUTME: Keeps `crate::errors::*` paths stable for handlers, services, and the store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use barbershop_core::errors::*;
