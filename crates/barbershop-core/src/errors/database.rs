// ABOUTME: Structured error types for appointment store operations
// ABOUTME: Distinguishes uniqueness violations from connection, schema, and query failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::AppError;
use crate::constants::messages;

/// Errors raised by the appointment store
#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    /// A write would break a UNIQUE constraint
    #[error("Unique constraint violated: {constraint}")]
    UniqueViolation {
        /// Name or description of the violated constraint
        constraint: String,
    },

    /// Schema creation failed
    #[error("Migration failed: {0}")]
    Migration(String),

    /// Connecting to the store failed
    #[error("Connection failed: {0}")]
    Connection(String),

    /// Any other query failure
    #[error("Query failed: {0}")]
    Query(String),

    /// A stored row could not be converted back into a model
    #[error("Corrupt row in {table}: {reason}")]
    CorruptRow {
        /// Table the row came from
        table: &'static str,
        /// What failed to decode
        reason: String,
    },
}

impl DatabaseError {
    /// Whether this error is a uniqueness violation
    #[must_use]
    pub const fn is_unique_violation(&self) -> bool {
        matches!(self, Self::UniqueViolation { .. })
    }
}

impl From<DatabaseError> for AppError {
    fn from(error: DatabaseError) -> Self {
        match error {
            DatabaseError::UniqueViolation { .. } => Self::conflict(messages::SLOT_UNAVAILABLE),
            other => Self::database(other.to_string()).with_source(other),
        }
    }
}

#[cfg(feature = "database-errors")]
impl From<sqlx::Error> for DatabaseError {
    fn from(error: sqlx::Error) -> Self {
        match error {
            sqlx::Error::Database(db_error) if db_error.is_unique_violation() => {
                Self::UniqueViolation {
                    constraint: db_error
                        .constraint()
                        .map_or_else(|| db_error.message().to_owned(), ToOwned::to_owned),
                }
            }
            e @ (sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_)) => {
                Self::Connection(e.to_string())
            }
            other => Self::Query(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;

    #[test]
    fn test_unique_violation_maps_to_conflict() {
        let error: AppError = DatabaseError::UniqueViolation {
            constraint: "idx_appointments_slot".to_owned(),
        }
        .into();

        assert_eq!(error.code, ErrorCode::ResourceAlreadyExists);
        assert_eq!(error.message, messages::SLOT_UNAVAILABLE);
    }

    #[test]
    fn test_every_other_store_failure_is_a_server_error() {
        let failures = [
            DatabaseError::Migration("no such table".to_owned()),
            DatabaseError::Connection("pool timed out".to_owned()),
            DatabaseError::CorruptRow {
                table: "appointments",
                reason: "date '2999-13-01'".to_owned(),
            },
        ];

        for failure in failures {
            let error: AppError = failure.into();
            assert_eq!(error.code, ErrorCode::DatabaseError);
            assert_eq!(error.http_status(), 500);
            assert!(error.source.is_some());
        }
    }

    #[test]
    fn test_query_failure_maps_to_database_error() {
        let error: AppError = DatabaseError::Query("disk I/O error".to_owned()).into();

        assert_eq!(error.http_status(), 500);
        assert!(error.message.contains("disk I/O error"));
    }
}
