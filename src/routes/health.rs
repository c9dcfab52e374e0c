// ABOUTME: Health check route handler for service monitoring
// ABOUTME: Reports liveness together with the current server time
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::routes;

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create the health check route
    pub fn routes() -> axum::Router {
        use axum::{routing::get, Json, Router};

        async fn health_handler() -> Json<serde_json::Value> {
            Json(serde_json::json!({
                "status": "ok",
                "time": chrono::Utc::now().to_rfc3339()
            }))
        }

        Router::new().route(routes::HEALTH, get(health_handler))
    }
}
