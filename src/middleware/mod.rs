// ABOUTME: HTTP middleware for request tracing and cross-origin access
// ABOUTME: Provides request ID generation, span creation, and the CORS layer

/// CORS configuration
pub mod cors;
/// Request id assignment and HTTP tracing
pub mod tracing;

pub use cors::setup_cors;
pub use self::tracing::{create_request_span, with_request_tracing, MakeRequestUuid};
