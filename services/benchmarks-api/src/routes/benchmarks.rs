// Copyright 2026 Benchbook Contributors
// SPDX-License-Identifier: Apache-2.0

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use benchbook_core::wire::parse_id;
use benchbook_core::{BenchmarkFields, BenchmarkPayload, BenchmarkResult, StoredRow};
use std::sync::Arc;
use tracing::info;

use crate::error::ApiError;
use crate::middleware::ReqContext;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/api/benchmarks",
            get(list_benchmarks)
                .post(create_benchmark)
                .options(preflight),
        )
        .route(
            "/api/benchmarks/:id",
            put(update_benchmark)
                .delete(delete_benchmark)
                .options(preflight),
        )
}

fn count(operation: &'static str) {
    metrics::counter!("benchbook_requests_total", "operation" => operation).increment(1);
}

fn to_row(record: &BenchmarkResult) -> Result<StoredRow, ApiError> {
    Ok(StoredRow::from_record(record)?)
}

fn parse_body(
    payload: Result<Json<BenchmarkPayload>, JsonRejection>,
) -> Result<BenchmarkFields, ApiError> {
    let Json(payload) = payload?;
    Ok(BenchmarkFields::try_from(payload)?)
}

async fn list_benchmarks(
    State(state): State<Arc<AppState>>,
    ctx: ReqContext,
) -> Result<Json<Vec<StoredRow>>, ApiError> {
    count("list");
    let records = state.store.list().await?;
    let rows = records.iter().map(to_row).collect::<Result<Vec<_>, _>>()?;
    info!(request_id = %ctx.request_id, count = rows.len(), "Benchmarks listed");
    Ok(Json(rows))
}

async fn create_benchmark(
    State(state): State<Arc<AppState>>,
    ctx: ReqContext,
    payload: Result<Json<BenchmarkPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<StoredRow>), ApiError> {
    count("create");
    let fields = parse_body(payload)?;
    let created = state.store.create(fields).await?;
    info!(
        request_id = %ctx.request_id,
        id = %created.id,
        benchmark = %created.fields.benchmark,
        gpu = %created.fields.gpu,
        "Benchmark created"
    );
    Ok((StatusCode::CREATED, Json(to_row(&created)?)))
}

async fn update_benchmark(
    State(state): State<Arc<AppState>>,
    ctx: ReqContext,
    Path(id): Path<String>,
    payload: Result<Json<BenchmarkPayload>, JsonRejection>,
) -> Result<Json<StoredRow>, ApiError> {
    count("update");
    parse_id(&id)?;
    let fields = parse_body(payload)?;
    let updated = state.store.update(&id, fields).await?;
    info!(request_id = %ctx.request_id, id = %updated.id, "Benchmark updated");
    Ok(Json(to_row(&updated)?))
}

async fn delete_benchmark(
    State(state): State<Arc<AppState>>,
    ctx: ReqContext,
    Path(id): Path<String>,
) -> Result<Json<StoredRow>, ApiError> {
    count("delete");
    parse_id(&id)?;
    let removed = state.store.remove(&id).await?;
    info!(request_id = %ctx.request_id, id = %removed.id, "Benchmark deleted");
    Ok(Json(to_row(&removed)?))
}

/// Explicit 200 for OPTIONS requests that are not CORS preflights.
async fn preflight() -> StatusCode {
    StatusCode::OK
}
