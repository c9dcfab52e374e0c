// ABOUTME: Error type for the booking HTTP client
// ABOUTME: Separates slot conflicts from other status failures, transport errors, and bad payloads
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Errors returned by [`super::BookingClient`]
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The server answered 409: another appointment holds the slot
    #[error("Time slot unavailable")]
    SlotUnavailable,

    /// Any other non-success status
    #[error("HTTP {status}: {message}")]
    Status {
        /// HTTP status code
        status: u16,
        /// `error` field of the response body, or the status reason
        message: String,
    },

    /// The request never produced a response
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body did not match the expected shape
    #[error("Invalid response body: {0}")]
    Decode(String),
}

impl ClientError {
    /// HTTP status carried by this error, if any
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::SlotUnavailable => Some(409),
            Self::Status { status, .. } => Some(*status),
            Self::Transport(_) | Self::Decode(_) => None,
        }
    }

    /// Whether the server reported the record as missing
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::Status { status: 404, .. })
    }
}

/// Result alias for client calls
pub type ClientResult<T> = Result<T, ClientError>;
