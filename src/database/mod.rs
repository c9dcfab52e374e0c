// ABOUTME: Appointment store abstraction with a SQLite implementation
// ABOUTME: Store trait plus a factory that opens the configured backend and runs migrations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Appointment Store
//!
//! Persistent collection of appointment records. The (date, time slot) pair is
//! unique across all records; the backend enforces this with a UNIQUE index so
//! that concurrent writers cannot double-book a slot even when the service's
//! pre-check races.

/// `SQLite` backend
pub mod sqlite;

pub use sqlite::SqliteAppointmentStore;

use crate::config::environment::DatabaseUrl;
use async_trait::async_trait;
use barbershop_core::errors::DatabaseError;
use barbershop_core::models::{Appointment, AppointmentDraft, AppointmentId, ListFilter};
use chrono::NaiveDate;
use std::sync::Arc;

/// Result alias for store operations
pub type StoreResult<T> = Result<T, DatabaseError>;

/// Core store abstraction
///
/// Implementations assign ids and timestamps, keep results ordered by date
/// then time slot, and reject writes that would duplicate a (date, slot) pair
/// with [`DatabaseError::UniqueViolation`].
#[async_trait]
pub trait AppointmentStore: Send + Sync {
    /// Create the schema if it does not exist yet
    async fn migrate(&self) -> StoreResult<()>;

    /// Persist a new appointment and return it with id and timestamps
    async fn insert(&self, draft: &AppointmentDraft) -> StoreResult<Appointment>;

    /// Look up one appointment
    async fn get(&self, id: AppointmentId) -> StoreResult<Option<Appointment>>;

    /// Find the appointment holding `(date, time_slot)`, ignoring `exclude`
    async fn find_by_slot(
        &self,
        date: NaiveDate,
        time_slot: &str,
        exclude: Option<AppointmentId>,
    ) -> StoreResult<Option<Appointment>>;

    /// List appointments matching `filter`, ordered by date then time slot
    async fn list(&self, filter: ListFilter) -> StoreResult<Vec<Appointment>>;

    /// Replace every mutable field; `None` when `id` does not exist
    async fn update(
        &self,
        id: AppointmentId,
        draft: &AppointmentDraft,
    ) -> StoreResult<Option<Appointment>>;

    /// Remove an appointment; `false` when `id` does not exist
    async fn delete(&self, id: AppointmentId) -> StoreResult<bool>;
}

/// Open the store at `url` and run migrations
///
/// # Errors
///
/// Returns an error if the store cannot be opened or migrated
pub async fn open_store(url: &DatabaseUrl) -> StoreResult<Arc<dyn AppointmentStore>> {
    let store = SqliteAppointmentStore::connect(url).await?;
    store.migrate().await?;
    Ok(Arc::new(store))
}
