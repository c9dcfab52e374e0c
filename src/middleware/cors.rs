// ABOUTME: CORS middleware configuration for the booking API
// ABOUTME: Lets the browser or desktop client call the API from another origin
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::environment::CorsConfig;
use crate::constants::headers;
use http::{header::HeaderName, HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Configure CORS settings for the booking API
///
/// `CORS_ALLOWED_ORIGINS` is either `*` (any origin, the default) or a
/// comma-separated list of origins. Entries that are not valid header values
/// are skipped; if none survive, any origin is allowed.
///
/// ```bash
/// export CORS_ALLOWED_ORIGINS="https://book.example.com,http://localhost:5173"
/// ```
#[must_use]
pub fn setup_cors(config: &CorsConfig) -> CorsLayer {
    let raw = config.allowed_origins.trim();
    let allow_origin = if raw.is_empty() || raw == "*" {
        AllowOrigin::any()
    } else {
        let origins: Vec<HeaderValue> = raw
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .filter_map(|s| HeaderValue::from_str(s).ok())
            .collect();

        if origins.is_empty() {
            AllowOrigin::any()
        } else {
            AllowOrigin::list(origins)
        }
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_headers([
            HeaderName::from_static("content-type"),
            HeaderName::from_static("accept"),
            HeaderName::from_static("origin"),
            HeaderName::from_static(headers::REQUEST_ID),
        ])
        .expose_headers([HeaderName::from_static(headers::REQUEST_ID)])
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
}
