// Copyright 2026 Benchbook Contributors
// SPDX-License-Identifier: Apache-2.0

//! Record stores for Benchbook.
//!
//! Every persistence backend implements [`RecordStore`], so the HTTP service,
//! the CLI and the client-side workbench pick one at composition time:
//!
//! - [`LocalStore`] - in-memory map, optionally mirrored to a JSON file
//! - [`PgStore`] - the `benchmarks` table in PostgreSQL
//!
//! The remote REST client in `benchbook-sdk` is a third implementation.

#![warn(rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod file;
pub mod local;
pub mod postgres;

use std::sync::Arc;

use async_trait::async_trait;
use benchbook_core::{BenchmarkFields, BenchmarkResult, Result};

pub use local::LocalStore;
pub use postgres::PgStore;

/// Create/read/update/delete of benchmark results by identifier.
///
/// Each call is atomic at single-record granularity. Implementations assign
/// `id` and `created_at` on create; neither is ever replaced by update.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Every stored record, ordered by benchmark name then id.
    async fn list(&self) -> Result<Vec<BenchmarkResult>>;

    /// Store a new record.
    async fn create(&self, fields: BenchmarkFields) -> Result<BenchmarkResult>;

    /// Replace every field of record `id`.
    ///
    /// # Errors
    ///
    /// `NotFound` if `id` is absent, `Validation` if it is not numeric.
    async fn update(&self, id: &str, fields: BenchmarkFields) -> Result<BenchmarkResult>;

    /// Delete record `id` and return it.
    ///
    /// # Errors
    ///
    /// `NotFound` if `id` is absent, `Validation` if it is not numeric.
    async fn remove(&self, id: &str) -> Result<BenchmarkResult>;

    /// Short backend name for logs.
    fn backend(&self) -> &'static str;
}

#[async_trait]
impl<S> RecordStore for Arc<S>
where
    S: RecordStore + ?Sized,
{
    async fn list(&self) -> Result<Vec<BenchmarkResult>> {
        (**self).list().await
    }

    async fn create(&self, fields: BenchmarkFields) -> Result<BenchmarkResult> {
        (**self).create(fields).await
    }

    async fn update(&self, id: &str, fields: BenchmarkFields) -> Result<BenchmarkResult> {
        (**self).update(id, fields).await
    }

    async fn remove(&self, id: &str) -> Result<BenchmarkResult> {
        (**self).remove(id).await
    }

    fn backend(&self) -> &'static str {
        (**self).backend()
    }
}
