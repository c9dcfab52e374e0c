// ABOUTME: Appointment route handlers for the booking REST API
// ABOUTME: Thin axum handlers that delegate to AppointmentService and shape HTTP responses
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Appointment routes
//!
//! CRUD endpoints under `/api/appointments` plus the booking options used to
//! populate client forms.

use crate::constants::{messages, routes};
use crate::errors::AppError;
use crate::server::ServerResources;
use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use barbershop_core::models::AppointmentRequest;
use serde::Deserialize;
use std::sync::Arc;
use tracing::debug;

/// Query parameters for listing appointments
#[derive(Debug, Default, Deserialize)]
pub struct ListAppointmentsQuery {
    /// Exact day, `YYYY-MM-DD`
    pub date: Option<String>,
    /// Calendar month, `YYYY-MM`
    pub month: Option<String>,
}

/// Appointment routes
pub struct AppointmentRoutes;

impl AppointmentRoutes {
    /// Create all appointment routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                routes::APPOINTMENTS,
                get(Self::handle_list).post(Self::handle_create),
            )
            .route(routes::APPOINTMENT_OPTIONS, get(Self::handle_options))
            .route(routes::APPOINTMENT_OPTIONS_LEGACY, get(Self::handle_options))
            .route(
                routes::APPOINTMENT_BY_ID,
                get(Self::handle_get)
                    .put(Self::handle_update)
                    .delete(Self::handle_delete),
            )
            .with_state(resources)
    }

    /// Handle GET /api/appointments
    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
        query: Result<Query<ListAppointmentsQuery>, QueryRejection>,
    ) -> Result<Response, AppError> {
        let Query(query) = query.map_err(invalid_query)?;
        let appointments = resources
            .appointments
            .list(query.date.as_deref(), query.month.as_deref())
            .await?;
        Ok((StatusCode::OK, Json(appointments)).into_response())
    }

    /// Handle GET /api/appointments/options
    async fn handle_options(State(resources): State<Arc<ServerResources>>) -> Response {
        Json(resources.appointments.options().clone()).into_response()
    }

    /// Handle GET /api/appointments/:id
    async fn handle_get(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<String>,
    ) -> Result<Response, AppError> {
        let appointment = resources.appointments.get(&id).await?;
        Ok((StatusCode::OK, Json(appointment)).into_response())
    }

    /// Handle POST /api/appointments
    async fn handle_create(
        State(resources): State<Arc<ServerResources>>,
        body: Result<Json<AppointmentRequest>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let Json(request) = body.map_err(invalid_body)?;
        let appointment = resources.appointments.create(&request).await?;
        Ok((StatusCode::CREATED, Json(appointment)).into_response())
    }

    /// Handle PUT /api/appointments/:id
    async fn handle_update(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<String>,
        body: Result<Json<AppointmentRequest>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let Json(request) = body.map_err(invalid_body)?;
        let appointment = resources.appointments.update(&id, &request).await?;
        Ok((StatusCode::OK, Json(appointment)).into_response())
    }

    /// Handle DELETE /api/appointments/:id
    async fn handle_delete(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<String>,
    ) -> Result<Response, AppError> {
        let deleted = resources.appointments.delete(&id).await?;
        Ok((StatusCode::OK, Json(deleted)).into_response())
    }
}

fn invalid_query(rejection: QueryRejection) -> AppError {
    debug!(reason = %rejection.body_text(), "Rejected appointment query");
    AppError::invalid_input(messages::INVALID_QUERY)
}

fn invalid_body(rejection: JsonRejection) -> AppError {
    debug!(reason = %rejection.body_text(), "Rejected appointment body");
    AppError::invalid_input(messages::INVALID_DATA)
}
