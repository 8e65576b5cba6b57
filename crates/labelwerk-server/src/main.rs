// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Labelwerk — HTTP gateway for ZPL label printers
//
// Entry point. Initialises logging, loads configuration, seeds the printer
// directory, pulls the ERP inventory once and serves the API until Ctrl-C.

use std::sync::Arc;

use anyhow::{Context, Result};

use labelwerk_core::GatewayConfig;
use labelwerk_print::inventory;
use labelwerk_server::{AppState, router};

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env is normal in production.
    let dotenv = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Labelwerk starting");
    if let Ok(path) = dotenv {
        tracing::debug!(path = %path.display(), "loaded .env");
    }

    let config_path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("LABELWERK_CONFIG").ok());
    let config = match &config_path {
        Some(path) => GatewayConfig::load(path)
            .with_context(|| format!("Failed to load config from {path}"))?,
        None => GatewayConfig::from_env(),
    };
    config.validate().context("Refusing to start")?;

    let state = Arc::new(AppState::from_config(&config).context("Failed to set up services")?);
    tracing::info!(printers = state.directory().len(), "printer directory seeded");

    // Static table is already installed; a failed fetch leaves it in place.
    if let Some(source) = &state.inventory {
        let outcome = inventory::refresh(source, state.directory().as_ref()).await;
        tracing::info!(
            url = source.url(),
            updated = outcome.updated,
            printers = outcome.count,
            "startup inventory refresh"
        );
    }

    let app = router(Arc::clone(&state));

    let listener = tokio::net::TcpListener::bind(&config.server.listen)
        .await
        .with_context(|| format!("Failed to bind to {}", config.server.listen))?;
    tracing::info!("API listening on {}", config.server.listen);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    tracing::info!("Labelwerk stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown requested");
}
