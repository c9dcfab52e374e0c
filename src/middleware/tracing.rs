// ABOUTME: Request tracing middleware for correlation and structured logging
// ABOUTME: Assigns x-request-id to every request and records it on the HTTP span
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::headers;
use axum::{body::Body, Router};
use http::{header::HeaderName, Request};
use tower_http::request_id::{
    MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};
use tower_http::trace::TraceLayer;
use tracing::Span;
use uuid::Uuid;

/// Generates `req_<uuid>` identifiers for requests that arrive without one
#[derive(Debug, Clone, Copy, Default)]
pub struct MakeRequestUuid;

impl MakeRequestId for MakeRequestUuid {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        format!("req_{}", Uuid::new_v4().simple())
            .parse()
            .ok()
            .map(RequestId::new)
    }
}

/// Create the HTTP span for a request, tagged with its request id
pub fn create_request_span(request: &Request<Body>) -> Span {
    let request_id = request
        .headers()
        .get(headers::REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown");

    tracing::info_span!(
        "http_request",
        method = %request.method(),
        uri = %request.uri(),
        request_id = %request_id,
    )
}

/// Wrap `router` with request id assignment, propagation, and request tracing
///
/// Layers run outside-in: the id is set first, so the trace span can read it,
/// and is copied onto the response last.
pub fn with_request_tracing(router: Router) -> Router {
    let header = HeaderName::from_static(headers::REQUEST_ID);

    router
        .layer(PropagateRequestIdLayer::new(header.clone()))
        .layer(TraceLayer::new_for_http().make_span_with(create_request_span))
        .layer(SetRequestIdLayer::new(header, MakeRequestUuid))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_request_ids_are_prefixed() {
        let request = Request::builder().body(()).unwrap();
        let id = MakeRequestUuid.make_request_id(&request).unwrap();
        let value = id.header_value().to_str().unwrap();
        assert!(value.starts_with("req_"));
        assert_eq!(value.len(), "req_".len() + 32);
    }
}
