// SPDX-FileCopyrightText: 2025 Hyperpolymath
// SPDX-License-Identifier: PMPL-1.0-or-later

//! CPF Validator
//!
//! This crate validates Brazilian taxpayer numbers (CPF) against their
//! modulo-11 check digits and exposes the check over HTTP:
//!
//! - Non-digit characters are ignored (`529.982.247-25`)
//! - Wrong length and repeated-digit sequences are rejected
//! - Both verification digits must match
//! - Prometheus counters per validation outcome

pub mod config;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod validator;

pub use config::Config;
pub use error::{ApiError, StartupError};
pub use handlers::{router, AppState};
pub use metrics::ValidationMetrics;
pub use validator::is_valid;
