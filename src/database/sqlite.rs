// ABOUTME: SQLite implementation of the appointment store
// ABOUTME: Stores dates as zero-padded text so month ranges compare lexicographically
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{AppointmentStore, StoreResult};
use crate::config::environment::DatabaseUrl;
use crate::constants::formats::DATE_FORMAT;
use async_trait::async_trait;
use barbershop_core::errors::DatabaseError;
use barbershop_core::models::{Appointment, AppointmentDraft, AppointmentId, ListFilter};
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions, SqliteRow};
use sqlx::{Row, SqlitePool};
use std::str::FromStr;
use tracing::{debug, info};

const TABLE: &str = "appointments";

const SELECT_COLUMNS: &str =
    "SELECT id, client_name, service_type, date, time_slot, created_at, updated_at FROM appointments";

/// Appointment store backed by a `SQLite` pool
#[derive(Clone)]
pub struct SqliteAppointmentStore {
    pool: SqlitePool,
}

impl SqliteAppointmentStore {
    /// Open a pool for `url`, creating the database file (and its directory) if missing
    ///
    /// In-memory databases are private to a single connection, so the pool is
    /// capped at one connection that is never recycled.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created or the connection fails
    pub async fn connect(url: &DatabaseUrl) -> StoreResult<Self> {
        if let DatabaseUrl::SQLite { path } = url {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent).map_err(|e| {
                    DatabaseError::Connection(format!(
                        "Failed to create database directory {}: {e}",
                        parent.display()
                    ))
                })?;
            }
        }

        let options = SqliteConnectOptions::from_str(&url.to_connection_string())?
            .create_if_missing(true);
        let mut pool_options = SqlitePoolOptions::new().max_connections(5);
        if url.is_memory() {
            pool_options = pool_options
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None);
        }

        let pool = pool_options.connect_with(options).await?;

        info!(database = %url, "Connected to appointment store");
        Ok(Self { pool })
    }
}

#[async_trait]
impl AppointmentStore for SqliteAppointmentStore {
    async fn migrate(&self) -> StoreResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS appointments (
                id TEXT PRIMARY KEY,
                client_name TEXT NOT NULL,
                service_type TEXT NOT NULL,
                date TEXT NOT NULL,
                time_slot TEXT NOT NULL,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| DatabaseError::Migration(e.to_string()))?;

        sqlx::query(
            "CREATE UNIQUE INDEX IF NOT EXISTS idx_appointments_slot ON appointments(date, time_slot)",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| DatabaseError::Migration(e.to_string()))?;

        debug!("Appointment schema ready");
        Ok(())
    }

    async fn insert(&self, draft: &AppointmentDraft) -> StoreResult<Appointment> {
        let now = Utc::now();
        let id = AppointmentId::new();

        sqlx::query(
            r"
            INSERT INTO appointments (id, client_name, service_type, date, time_slot, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $6)
            ",
        )
        .bind(id.to_string())
        .bind(&draft.client_name)
        .bind(&draft.service_type)
        .bind(format_date(draft.date))
        .bind(&draft.time_slot)
        .bind(now.to_rfc3339())
        .execute(&self.pool)
        .await?;

        info!(
            appointment.id = %id,
            date = %draft.date,
            time_slot = %draft.time_slot,
            "Appointment created"
        );

        Ok(Appointment {
            id,
            client_name: draft.client_name.clone(),
            service_type: draft.service_type.clone(),
            date: draft.date,
            time_slot: draft.time_slot.clone(),
            created_at: now,
            updated_at: now,
        })
    }

    async fn get(&self, id: AppointmentId) -> StoreResult<Option<Appointment>> {
        let row = sqlx::query(&format!("{SELECT_COLUMNS} WHERE id = $1"))
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        row.map(|r| row_to_appointment(&r)).transpose()
    }

    async fn find_by_slot(
        &self,
        date: NaiveDate,
        time_slot: &str,
        exclude: Option<AppointmentId>,
    ) -> StoreResult<Option<Appointment>> {
        let row = sqlx::query(&format!(
            "{SELECT_COLUMNS} WHERE date = $1 AND time_slot = $2 AND ($3 IS NULL OR id != $3) LIMIT 1"
        ))
        .bind(format_date(date))
        .bind(time_slot)
        .bind(exclude.map(|id| id.to_string()))
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| row_to_appointment(&r)).transpose()
    }

    async fn list(&self, filter: ListFilter) -> StoreResult<Vec<Appointment>> {
        const ORDER: &str = "ORDER BY date ASC, time_slot ASC";

        let rows = match filter {
            ListFilter::All => {
                sqlx::query(&format!("{SELECT_COLUMNS} {ORDER}"))
                    .fetch_all(&self.pool)
                    .await?
            }
            ListFilter::Date(date) => {
                sqlx::query(&format!("{SELECT_COLUMNS} WHERE date = $1 {ORDER}"))
                    .bind(format_date(date))
                    .fetch_all(&self.pool)
                    .await?
            }
            ListFilter::Month(month) => {
                let (start, end) = month.date_range();
                sqlx::query(&format!(
                    "{SELECT_COLUMNS} WHERE date >= $1 AND date <= $2 {ORDER}"
                ))
                .bind(start)
                .bind(end)
                .fetch_all(&self.pool)
                .await?
            }
        };

        debug!(filter = ?filter, count = rows.len(), "Listed appointments");
        rows.iter().map(row_to_appointment).collect()
    }

    async fn update(
        &self,
        id: AppointmentId,
        draft: &AppointmentDraft,
    ) -> StoreResult<Option<Appointment>> {
        let now = Utc::now();

        let result = sqlx::query(
            r"
            UPDATE appointments
            SET client_name = $1, service_type = $2, date = $3, time_slot = $4, updated_at = $5
            WHERE id = $6
            ",
        )
        .bind(&draft.client_name)
        .bind(&draft.service_type)
        .bind(format_date(draft.date))
        .bind(&draft.time_slot)
        .bind(now.to_rfc3339())
        .bind(id.to_string())
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        info!(
            appointment.id = %id,
            date = %draft.date,
            time_slot = %draft.time_slot,
            "Appointment updated"
        );
        self.get(id).await
    }

    async fn delete(&self, id: AppointmentId) -> StoreResult<bool> {
        let result = sqlx::query("DELETE FROM appointments WHERE id = $1")
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        let deleted = result.rows_affected() > 0;
        if deleted {
            info!(appointment.id = %id, "Appointment deleted");
        }
        Ok(deleted)
    }
}

fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

fn corrupt(reason: String) -> DatabaseError {
    DatabaseError::CorruptRow {
        table: TABLE,
        reason,
    }
}

fn parse_timestamp(value: &str) -> StoreResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| corrupt(format!("timestamp '{value}': {e}")))
}

fn row_to_appointment(row: &SqliteRow) -> StoreResult<Appointment> {
    let id_str: String = row.try_get("id")?;
    let date_str: String = row.try_get("date")?;
    let created_at_str: String = row.try_get("created_at")?;
    let updated_at_str: String = row.try_get("updated_at")?;

    let id = id_str
        .parse::<AppointmentId>()
        .map_err(|e| corrupt(format!("id '{id_str}': {e}")))?;
    let date = NaiveDate::parse_from_str(&date_str, DATE_FORMAT)
        .map_err(|e| corrupt(format!("date '{date_str}': {e}")))?;

    Ok(Appointment {
        id,
        client_name: row.try_get("client_name")?,
        service_type: row.try_get("service_type")?,
        date,
        time_slot: row.try_get("time_slot")?,
        created_at: parse_timestamp(&created_at_str)?,
        updated_at: parse_timestamp(&updated_at_str)?,
    })
}
