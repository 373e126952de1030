// SPDX-FileCopyrightText: 2025 Hyperpolymath
// SPDX-License-Identifier: PMPL-1.0-or-later

//! Configuration for the CPF validation service.
//!
//! Every field has a default, so an empty environment yields a working
//! service listening on `0.0.0.0:8080`.

use crate::error::StartupError;
use serde::{Deserialize, Serialize};

/// Paths answered by the health check.
pub const HEALTH_PATHS: [&str; 2] = ["/health", "/healthz"];

/// Configuration for the CPF validation service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Server bind address (default: 0.0.0.0:8080)
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// Path of the validation endpoint (default: /api/ValidarCPF)
    #[serde(default = "default_route")]
    pub route: String,

    /// Maximum accepted request body size in bytes (default: 16384)
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,

    /// Metrics configuration
    #[serde(default)]
    pub metrics: MetricsConfig,
}

/// Metrics configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricsConfig {
    /// Enable Prometheus metrics endpoint (default: true)
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Metrics endpoint path (default: /metrics)
    #[serde(default = "default_metrics_path")]
    pub path: String,
}

// Default value functions
fn default_bind_addr() -> String {
    "0.0.0.0:8080".to_string()
}

fn default_route() -> String {
    "/api/ValidarCPF".to_string()
}

fn default_max_body_bytes() -> usize {
    16 * 1024
}

fn default_true() -> bool {
    true
}

fn default_metrics_path() -> String {
    "/metrics".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            route: default_route(),
            max_body_bytes: default_max_body_bytes(),
            metrics: MetricsConfig::default(),
        }
    }
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            path: default_metrics_path(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// - `BIND_ADDR`: Server bind address
    /// - `VALIDATE_ROUTE`: Path of the validation endpoint
    /// - `MAX_BODY_BYTES`: Request body limit
    /// - `METRICS_ENABLED`: `true`/`false`
    /// - `METRICS_PATH`: Metrics endpoint path
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// Unset or unparsable values fall back to their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            bind_addr: lookup("BIND_ADDR").unwrap_or(defaults.bind_addr),
            route: lookup("VALIDATE_ROUTE")
                .filter(|r| r.starts_with('/'))
                .unwrap_or(defaults.route),
            max_body_bytes: lookup("MAX_BODY_BYTES")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.max_body_bytes),
            metrics: MetricsConfig {
                enabled: lookup("METRICS_ENABLED")
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.metrics.enabled),
                path: lookup("METRICS_PATH")
                    .filter(|p| p.starts_with('/') && !HEALTH_PATHS.contains(&p.as_str()))
                    .unwrap_or(defaults.metrics.path),
            },
        }
    }

    /// Check that the configured paths can be routed.
    pub fn validate(&self) -> Result<(), StartupError> {
        if !self.route.starts_with('/') {
            return Err(StartupError::InvalidPath {
                name: "validation",
                path: self.route.clone(),
            });
        }

        if self.metrics.enabled {
            if !self.metrics.path.starts_with('/') {
                return Err(StartupError::InvalidPath {
                    name: "metrics",
                    path: self.metrics.path.clone(),
                });
            }
            if HEALTH_PATHS.contains(&self.metrics.path.as_str()) {
                return Err(StartupError::PathConflict(self.metrics.path.clone()));
            }
        }

        Ok(())
    }
}
