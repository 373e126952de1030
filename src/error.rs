// SPDX-FileCopyrightText: 2025 Hyperpolymath
// SPDX-License-Identifier: PMPL-1.0-or-later

//! Error types for the CPF validation service.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::net::AddrParseError;
use thiserror::Error;

/// Client-facing errors returned by the validation endpoint.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ApiError {
    /// Body is not a JSON object with a string `cpf`.
    #[error("É necessário fornecer um CPF válido.")]
    MalformedBody,

    #[error("É necessário fornecer um CPF válido.")]
    MissingCpf,

    #[error("O CPF informado é inválido.")]
    InvalidCpf,
}

impl ApiError {
    /// Stable machine-readable code for this error.
    pub fn code(&self) -> &'static str {
        match self {
            Self::MalformedBody => "INVALID_BODY",
            Self::MissingCpf => "MISSING_CPF",
            Self::InvalidCpf => "INVALID_CPF",
        }
    }

    pub fn status(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }
}

/// Error response body.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

impl From<ApiError> for ErrorResponse {
    fn from(err: ApiError) -> Self {
        Self {
            error: err.to_string(),
            code: err.code().to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(ErrorResponse::from(self))).into_response()
    }
}

/// Failures that prevent the service from starting.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("Invalid bind address {addr}: {source}")]
    InvalidBindAddr {
        addr: String,
        #[source]
        source: AddrParseError,
    },

    #[error("Metrics registry error: {0}")]
    Metrics(#[from] prometheus::Error),

    #[error("Invalid {name} path {path:?}: must start with '/'")]
    InvalidPath { name: &'static str, path: String },

    #[error("Metrics path {0} is already served by the health check")]
    PathConflict(String),
}
