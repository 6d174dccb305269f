// Copyright 2026 Benchbook Contributors
// SPDX-License-Identifier: Apache-2.0

//! PostgreSQL-backed record store.
//!
//! One row per benchmark result in the `benchmarks` table. `result` is a
//! `DECIMAL(10, 2)` column; it is read back as text and parsed through the
//! wire conversion so the decimal never passes through a lossy driver type.

use async_trait::async_trait;
use benchbook_core::wire::parse_id;
use benchbook_core::{BenchmarkFields, BenchmarkResult, Error, Result, StoredRow};
use sqlx::postgres::{PgPool, PgPoolOptions, PgRow};
use sqlx::Row;
use tracing::{debug, info, instrument, warn};

use crate::RecordStore;

/// Creates the `benchmarks` table if absent.
pub const CREATE_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS benchmarks (
        id SERIAL PRIMARY KEY,
        benchmark VARCHAR(255) NOT NULL,
        gpu VARCHAR(255) NOT NULL,
        cpu VARCHAR(255) NOT NULL,
        resolution VARCHAR(100) NOT NULL,
        quality VARCHAR(100) NOT NULL,
        ray_tracing VARCHAR(100) NOT NULL,
        upscaling VARCHAR(100) NOT NULL,
        anti_aliasing VARCHAR(100) NOT NULL,
        result DECIMAL(10, 2) NOT NULL,
        tip VARCHAR(100) NOT NULL,
        direction INTEGER NOT NULL,
        created_at TIMESTAMPTZ DEFAULT CURRENT_TIMESTAMP
    )
"#;

macro_rules! row_columns {
    () => {
        "id, benchmark, gpu, cpu, resolution, quality, ray_tracing, upscaling, \
         anti_aliasing, result::text AS result, tip, direction, created_at"
    };
}

const SELECT_ALL: &str = concat!(
    "SELECT ",
    row_columns!(),
    " FROM benchmarks \
     ORDER BY lower(benchmark) COLLATE \"C\" ASC, benchmark COLLATE \"C\" ASC, id ASC"
);

const INSERT: &str = concat!(
    "INSERT INTO benchmarks (benchmark, gpu, cpu, resolution, quality, ray_tracing, \
     upscaling, anti_aliasing, result, tip, direction) \
     VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11) RETURNING ",
    row_columns!()
);

const UPDATE: &str = concat!(
    "UPDATE benchmarks SET benchmark = $1, gpu = $2, cpu = $3, resolution = $4, \
     quality = $5, ray_tracing = $6, upscaling = $7, anti_aliasing = $8, result = $9, \
     tip = $10, direction = $11 WHERE id = $12 RETURNING ",
    row_columns!()
);

const DELETE: &str = concat!(
    "DELETE FROM benchmarks WHERE id = $1 RETURNING ",
    row_columns!()
);

/// Record store over a PostgreSQL connection pool.
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    /// Wrap an existing pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connect to `database_url` with up to `max_connections` connections.
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await
            .map_err(Error::store)?;
        info!(max_connections, "Connected to PostgreSQL");
        Ok(Self::new(pool))
    }

    /// Create the `benchmarks` table if it does not exist yet.
    pub async fn init_schema(&self) -> Result<()> {
        sqlx::query(CREATE_TABLE)
            .execute(&self.pool)
            .await
            .map_err(Error::store)?;
        info!("Benchmarks table ready");
        Ok(())
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

/// Convert a database row to a `BenchmarkResult`.
fn row_to_record(row: &PgRow) -> Result<BenchmarkResult> {
    let stored = StoredRow {
        id: i64::from(row.try_get::<i32, _>("id").map_err(Error::store)?),
        benchmark: row.try_get("benchmark").map_err(Error::store)?,
        gpu: row.try_get("gpu").map_err(Error::store)?,
        cpu: row.try_get("cpu").map_err(Error::store)?,
        resolution: row.try_get("resolution").map_err(Error::store)?,
        quality: row.try_get("quality").map_err(Error::store)?,
        ray_tracing: row.try_get("ray_tracing").map_err(Error::store)?,
        upscaling: row.try_get("upscaling").map_err(Error::store)?,
        anti_aliasing: row.try_get("anti_aliasing").map_err(Error::store)?,
        result: row.try_get("result").map_err(Error::store)?,
        tip: row.try_get("tip").map_err(Error::store)?,
        direction: row.try_get("direction").map_err(Error::store)?,
        created_at: row.try_get("created_at").map_err(Error::store)?,
    };
    stored.into_record()
}

/// Narrow an identifier to the `SERIAL` key range. Out-of-range ids cannot
/// exist in the table.
fn key(id: &str) -> Result<i32> {
    let wide = parse_id(id)?;
    i32::try_from(wide).map_err(|_| Error::not_found(id))
}

fn bind_fields<'q>(
    query: sqlx::query::Query<'q, sqlx::Postgres, sqlx::postgres::PgArguments>,
    fields: &'q BenchmarkFields,
) -> sqlx::query::Query<'q, sqlx::Postgres, sqlx::postgres::PgArguments> {
    query
        .bind(&fields.benchmark)
        .bind(&fields.gpu)
        .bind(&fields.cpu)
        .bind(&fields.resolution)
        .bind(&fields.quality)
        .bind(&fields.ray_tracing)
        .bind(&fields.upscaling)
        .bind(&fields.anti_aliasing)
        .bind(fields.result)
        .bind(&fields.tip)
        .bind(fields.direction.as_i32())
}

#[async_trait]
impl RecordStore for PgStore {
    #[instrument(skip(self))]
    async fn list(&self) -> Result<Vec<BenchmarkResult>> {
        let rows = sqlx::query(SELECT_ALL)
            .fetch_all(&self.pool)
            .await
            .map_err(Error::store)?;
        debug!(count = rows.len(), "Fetched benchmark rows");
        rows.iter().map(row_to_record).collect()
    }

    #[instrument(skip(self, fields))]
    async fn create(&self, fields: BenchmarkFields) -> Result<BenchmarkResult> {
        fields.validate()?;
        let row = bind_fields(sqlx::query(INSERT), &fields)
            .fetch_one(&self.pool)
            .await
            .map_err(Error::store)?;
        let record = row_to_record(&row)?;
        debug!(id = %record.id, "Inserted benchmark row");
        Ok(record)
    }

    #[instrument(skip(self, fields))]
    async fn update(&self, id: &str, fields: BenchmarkFields) -> Result<BenchmarkResult> {
        let key = key(id)?;
        fields.validate()?;
        let row = bind_fields(sqlx::query(UPDATE), &fields)
            .bind(key)
            .fetch_optional(&self.pool)
            .await
            .map_err(Error::store)?;
        match row {
            Some(row) => row_to_record(&row),
            None => {
                warn!(id, "Update targeted a missing row");
                Err(Error::not_found(id))
            }
        }
    }

    #[instrument(skip(self))]
    async fn remove(&self, id: &str) -> Result<BenchmarkResult> {
        let key = key(id)?;
        let row = sqlx::query(DELETE)
            .bind(key)
            .fetch_optional(&self.pool)
            .await
            .map_err(Error::store)?;
        match row {
            Some(row) => row_to_record(&row),
            None => {
                warn!(id, "Delete targeted a missing row");
                Err(Error::not_found(id))
            }
        }
    }

    fn backend(&self) -> &'static str {
        "postgres"
    }
}
