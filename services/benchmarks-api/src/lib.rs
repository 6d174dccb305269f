// Copyright 2026 Benchbook Contributors
// SPDX-License-Identifier: Apache-2.0

//! Benchmarks API service.
//!
//! A REST surface over a [`RecordStore`]:
//!
//! | Method | Path | |
//! |---|---|---|
//! | GET | `/api/benchmarks` | every row, by benchmark name |
//! | POST | `/api/benchmarks` | create, `201` |
//! | PUT | `/api/benchmarks/:id` | replace all fields |
//! | DELETE | `/api/benchmarks/:id` | delete, returns the row |
//! | GET | `/health` | liveness |
//! | GET | `/metrics` | Prometheus exposition |
//!
//! Every response carries permissive CORS headers.

#![warn(rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;

use std::sync::Arc;

use axum::http::{header, HeaderName, Method};
use axum::Router;
use benchbook_core::vocab::sample_records;
use benchbook_storage::{LocalStore, PgStore, RecordStore};
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::{ServiceConfig, StoreKind};
use crate::middleware::{request_context_middleware, RequestContextConfig};

/// Name reported on request spans.
pub const SERVICE_NAME: &str = "benchmarks-api";

/// Shared handler state.
pub struct AppState {
    pub store: Arc<dyn RecordStore>,
    /// Set when the Prometheus recorder is installed.
    pub metrics: Option<PrometheusHandle>,
    pub request_context: RequestContextConfig,
}

impl AppState {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self {
            store,
            metrics: None,
            request_context: RequestContextConfig::new(SERVICE_NAME),
        }
    }

    pub fn with_metrics(mut self, handle: PrometheusHandle) -> Self {
        self.metrics = Some(handle);
        self
    }

    pub fn with_request_context(mut self, config: RequestContextConfig) -> Self {
        self.request_context = config;
        self
    }
}

fn cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::OPTIONS,
            Method::PATCH,
            Method::DELETE,
            Method::POST,
            Method::PUT,
        ])
        .allow_headers([
            HeaderName::from_static("x-csrf-token"),
            HeaderName::from_static("x-requested-with"),
            header::ACCEPT,
            HeaderName::from_static("accept-version"),
            header::CONTENT_LENGTH,
            HeaderName::from_static("content-md5"),
            header::CONTENT_TYPE,
            header::DATE,
            HeaderName::from_static("x-api-version"),
            middleware::X_REQUEST_ID,
        ])
        .expose_headers([middleware::X_REQUEST_ID])
}

/// Build the service router.
pub fn app(state: Arc<AppState>) -> Router {
    let context = state.request_context.clone();
    Router::new()
        .merge(routes::benchmarks::routes())
        .merge(routes::health::routes())
        .layer(axum::middleware::from_fn(move |req, next| {
            request_context_middleware(context.clone(), req, next)
        }))
        .layer(TraceLayer::new_for_http())
        .layer(cors())
        .with_state(state)
}

/// Open the record store selected by `config`.
pub async fn build_store(config: &ServiceConfig) -> anyhow::Result<Arc<dyn RecordStore>> {
    let store: Arc<dyn RecordStore> = match config.store {
        StoreKind::Memory if config.seed_sample_data => {
            Arc::new(LocalStore::with_records(sample_records())?)
        }
        StoreKind::Memory => Arc::new(LocalStore::in_memory()),
        StoreKind::File if config.seed_sample_data => {
            Arc::new(LocalStore::open_or_seed(&config.data_file, sample_records).await?)
        }
        StoreKind::File => Arc::new(LocalStore::open(&config.data_file).await?),
        StoreKind::Postgres => {
            let url = config
                .database_url
                .as_deref()
                .ok_or_else(|| anyhow::anyhow!("database_url is not set"))?;
            let store = PgStore::connect(url, config.max_connections).await?;
            store.init_schema().await?;
            if config.seed_sample_data && store.list().await?.is_empty() {
                for record in sample_records() {
                    store.create(record.fields).await?;
                }
                info!("Seeded empty benchmarks table with sample data");
            }
            Arc::new(store)
        }
    };
    info!(backend = store.backend(), "Record store ready");
    Ok(store)
}
