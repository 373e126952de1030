// SPDX-FileCopyrightText: 2025 Hyperpolymath
// SPDX-License-Identifier: PMPL-1.0-or-later

//! HTTP handlers for the CPF validation service.
//!
//! The request body is decoded into [`ValidationRequest`] and only a present
//! `cpf` reaches the checksum validator. Raw document numbers are never
//! logged.

use crate::config::{Config, HEALTH_PATHS};
use crate::error::{ApiError, StartupError};
use crate::metrics::{Outcome, ValidationMetrics};
use crate::validator;
use axum::{
    body::Bytes,
    extract::{DefaultBodyLimit, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing::{debug, error, info};

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub metrics: ValidationMetrics,
}

/// Validation request body.
#[derive(Debug, Default, Deserialize)]
pub struct ValidationRequest {
    #[serde(default)]
    pub cpf: Option<String>,
}

/// Successful validation response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ValidationResponse {
    pub valid: bool,
    pub message: String,
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
}

/// Build the service router from shared state.
///
/// Fails if the configured paths cannot be routed.
pub fn router(state: Arc<AppState>) -> Result<Router, StartupError> {
    state.config.validate()?;

    let mut app = HEALTH_PATHS
        .iter()
        .fold(Router::<Arc<AppState>>::new(), |app, path| {
            app.route(path, get(health))
        })
        .route(&state.config.route, post(validate));

    if state.config.metrics.enabled {
        app = app.route(&state.config.metrics.path, get(metrics));
    }

    let app = app
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(DefaultBodyLimit::max(state.config.max_body_bytes)),
        )
        .with_state(state);

    Ok(app)
}

/// Health check endpoint.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: "cpf-validator",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Validate the CPF carried in a JSON body.
///
/// The body is decoded regardless of the `Content-Type` header.
pub async fn validate(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<ValidationResponse>, ApiError> {
    debug!(body_len = body.len(), "Processing CPF validation");

    let cpf = match parse_request(&body) {
        Ok(request) => request.cpf,
        Err(err) => {
            state.metrics.record(Outcome::Malformed);
            info!(code = err.code(), "Rejected request body");
            return Err(err);
        }
    };

    let Some(cpf) = cpf else {
        state.metrics.record(Outcome::Missing);
        info!(code = ApiError::MissingCpf.code(), "CPF not provided");
        return Err(ApiError::MissingCpf);
    };

    if !validator::is_valid(&cpf) {
        state.metrics.record(Outcome::Invalid);
        info!(valid = false, "CPF validated");
        return Err(ApiError::InvalidCpf);
    }

    state.metrics.record(Outcome::Valid);
    info!(valid = true, "CPF validated");
    Ok(Json(ValidationResponse {
        valid: true,
        message: "O CPF é válido.".to_string(),
    }))
}

/// Prometheus metrics endpoint.
pub async fn metrics(State(state): State<Arc<AppState>>) -> Response {
    match state.metrics.render() {
        Ok(body) => (
            [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
            body,
        )
            .into_response(),
        Err(err) => {
            error!(error = %err, "Failed to encode metrics");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// Decode a request body.
///
/// An empty body or a JSON `null` is treated as a request without a `cpf`.
fn parse_request(body: &[u8]) -> Result<ValidationRequest, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(ValidationRequest::default());
    }

    serde_json::from_slice::<Option<ValidationRequest>>(body)
        .map(Option::unwrap_or_default)
        .map_err(|err| {
            debug!(error = %describe_decode_error(&err), "Undecodable request body");
            ApiError::MalformedBody
        })
}

/// Describe a decode failure by category and position only.
///
/// serde_json's `Display` quotes the offending value, which may be a CPF.
fn describe_decode_error(err: &serde_json::Error) -> String {
    format!(
        "{:?} error at line {} column {}",
        err.classify(),
        err.line(),
        err.column()
    )
}
