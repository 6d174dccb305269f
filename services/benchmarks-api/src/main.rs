// Copyright 2026 Benchbook Contributors
// SPDX-License-Identifier: Apache-2.0

//! Benchmarks API entry point.

use std::sync::Arc;

use anyhow::Context;
use benchmarks_api::config::{LogFormat, ServiceConfig};
use benchmarks_api::middleware::RequestContextConfig;
use benchmarks_api::{app, build_store, AppState, SERVICE_NAME};
use metrics_exporter_prometheus::PrometheusBuilder;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    match format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.init(),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServiceConfig::load().context("loading configuration")?;
    init_tracing(config.log_format);

    let store = build_store(&config).await?;
    let mut state = AppState::new(store);
    if !config.trust_request_id {
        state = state.with_request_context(RequestContextConfig::generate_only(SERVICE_NAME));
    }
    if config.metrics {
        match PrometheusBuilder::new().install_recorder() {
            Ok(handle) => state = state.with_metrics(handle),
            Err(e) => warn!(error = %e, "Prometheus recorder not installed"),
        }
    }

    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {}", addr))?;
    info!(
        addr = %addr,
        store = ?config.store,
        metrics = config.metrics,
        version = env!("CARGO_PKG_VERSION"),
        "Benchmarks API listening"
    );

    axum::serve(listener, app(Arc::new(state)))
        .await
        .context("server error")?;
    Ok(())
}
