// SPDX-FileCopyrightText: 2025 Hyperpolymath
// SPDX-License-Identifier: PMPL-1.0-or-later

//! Prometheus counters for validation outcomes.

use prometheus::{Encoder, IntCounterVec, Opts, Registry, TextEncoder};

/// Outcome label recorded for each request to the validation endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Valid,
    Invalid,
    Missing,
    Malformed,
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Valid => "valid",
            Self::Invalid => "invalid",
            Self::Missing => "missing",
            Self::Malformed => "malformed",
        }
    }
}

/// Validation counters backed by a private registry.
#[derive(Clone)]
pub struct ValidationMetrics {
    registry: Registry,
    validations: IntCounterVec,
}

impl ValidationMetrics {
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();
        let validations = IntCounterVec::new(
            Opts::new("cpf_validations_total", "CPF validation requests by outcome"),
            &["outcome"],
        )?;
        registry.register(Box::new(validations.clone()))?;

        Ok(Self {
            registry,
            validations,
        })
    }

    pub fn record(&self, outcome: Outcome) {
        self.validations
            .with_label_values(&[outcome.as_str()])
            .inc();
    }

    /// Current count for an outcome.
    pub fn count(&self, outcome: Outcome) -> u64 {
        self.validations
            .with_label_values(&[outcome.as_str()])
            .get()
    }

    /// Render all counters in the Prometheus text format.
    pub fn render(&self) -> Result<String, prometheus::Error> {
        let mut buffer = Vec::new();
        TextEncoder::new().encode(&self.registry.gather(), &mut buffer)?;
        String::from_utf8(buffer).map_err(|e| prometheus::Error::Msg(e.to_string()))
    }
}
