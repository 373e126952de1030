// SPDX-FileCopyrightText: 2025 Hyperpolymath
// SPDX-License-Identifier: PMPL-1.0-or-later

//! CPF Validator Service
//!
//! Accepts `POST /api/ValidarCPF` with a body such as
//! `{"cpf": "529.982.247-25"}` and answers `200` for a checksum-correct
//! document, `400` otherwise.
//!
//! ## Configuration
//!
//! Configuration is loaded from environment variables:
//!
//! - `BIND_ADDR`: Server bind address (default: 0.0.0.0:8080)
//! - `VALIDATE_ROUTE`: Validation endpoint path (default: /api/ValidarCPF)
//! - `MAX_BODY_BYTES`: Request body limit (default: 16384)
//! - `METRICS_ENABLED`: Expose Prometheus metrics (default: true)
//! - `METRICS_PATH`: Metrics endpoint path (default: /metrics)

use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cpf_validator::{
    config::Config,
    error::StartupError,
    handlers::{router, AppState},
    metrics::ValidationMetrics,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer().json())
        .with(
            EnvFilter::builder()
                .with_default_directive(Level::INFO.into())
                .from_env_lossy(),
        )
        .init();

    let config = Config::from_env();
    info!(
        bind_addr = %config.bind_addr,
        route = %config.route,
        max_body_bytes = config.max_body_bytes,
        metrics_enabled = config.metrics.enabled,
        "Starting CPF validator"
    );

    let addr = config
        .bind_addr
        .parse::<SocketAddr>()
        .map_err(|source| StartupError::InvalidBindAddr {
            addr: config.bind_addr.clone(),
            source,
        })?;

    let state = Arc::new(AppState {
        metrics: ValidationMetrics::new().map_err(StartupError::from)?,
        config,
    });

    let app = router(state)?;

    let listener = TcpListener::bind(addr).await?;
    info!(addr = %addr, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

/// Resolve on Ctrl-C.
async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
