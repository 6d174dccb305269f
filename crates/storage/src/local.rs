// Copyright 2026 Benchbook Contributors
// SPDX-License-Identifier: Apache-2.0

//! In-process record store, optionally mirrored to a JSON file.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use benchbook_core::registry::option_cmp;
use benchbook_core::wire::{parse_id, round_result};
use benchbook_core::{BenchmarkFields, BenchmarkResult, Error, Result};
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::{debug, info, instrument};

use crate::file::{self, DataFile};
use crate::RecordStore;

#[derive(Debug, Clone, Default)]
struct Rows {
    by_id: BTreeMap<i64, BenchmarkResult>,
    next_id: i64,
}

impl Rows {
    /// `next_id` is a persisted counter; it never drops below max id + 1.
    fn from_records(records: Vec<BenchmarkResult>, next_id: Option<i64>) -> Result<Self> {
        let mut by_id = BTreeMap::new();
        for record in records {
            let id = parse_id(&record.id)?;
            if by_id.insert(id, record).is_some() {
                return Err(Error::validation(format!("duplicate id {}", id)));
            }
        }
        let after_max = by_id.keys().next_back().map_or(1, |max| max + 1);
        Ok(Self {
            by_id,
            next_id: next_id.map_or(after_max, |stored| stored.max(after_max)),
        })
    }

    fn sorted(&self) -> Vec<BenchmarkResult> {
        let mut records: Vec<BenchmarkResult> = self.by_id.values().cloned().collect();
        // by_id iterates in id order, so a stable sort by name keeps ids ascending
        records.sort_by(|a, b| option_cmp(&a.fields.benchmark, &b.fields.benchmark));
        records
    }

    fn to_data(&self) -> DataFile {
        DataFile {
            next_id: Some(self.next_id),
            records: self.sorted(),
        }
    }
}

/// Record store held in memory.
///
/// Identifiers are sequential integers rendered as strings and, like a
/// `SERIAL` column, are never handed out twice: the counter is kept in the
/// data file. Listing orders by benchmark name case-insensitively, matching
/// the PostgreSQL store. With a backing file every mutation rewrites the
/// file before it is committed in memory, so a failed write leaves the store
/// unchanged.
#[derive(Debug)]
pub struct LocalStore {
    rows: RwLock<Rows>,
    path: Option<PathBuf>,
}

impl LocalStore {
    /// An empty, memory-only store.
    pub fn in_memory() -> Self {
        Self {
            rows: RwLock::new(Rows {
                by_id: BTreeMap::new(),
                next_id: 1,
            }),
            path: None,
        }
    }

    /// A memory-only store pre-filled with `records`.
    ///
    /// # Errors
    ///
    /// Fails if an id is not numeric or appears twice.
    pub fn with_records(records: Vec<BenchmarkResult>) -> Result<Self> {
        Ok(Self {
            rows: RwLock::new(Rows::from_records(records, None)?),
            path: None,
        })
    }

    /// Open a store backed by `path`, loading it if it exists.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let data = file::read_data(&path).await?;
        info!(path = %path.display(), count = data.records.len(), "Local store opened");
        Ok(Self {
            rows: RwLock::new(Rows::from_records(data.records, data.next_id)?),
            path: Some(path),
        })
    }

    /// Open a store backed by `path`, writing `seed` to it when the file holds
    /// no records yet.
    pub async fn open_or_seed(
        path: impl AsRef<Path>,
        seed: impl FnOnce() -> Vec<BenchmarkResult>,
    ) -> Result<Self> {
        let store = Self::open(path).await?;
        if store.len().await == 0 {
            let rows = Rows::from_records(seed(), None)?;
            store.commit(&mut *store.rows.write().await, rows).await?;
        }
        Ok(store)
    }

    /// Backing file, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Number of stored records.
    pub async fn len(&self) -> usize {
        self.rows.read().await.by_id.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Persist `next` (when file-backed) and then make it current.
    async fn commit(&self, current: &mut Rows, next: Rows) -> Result<()> {
        if let Some(path) = &self.path {
            file::write_data(path, &next.to_data()).await?;
        }
        *current = next;
        Ok(())
    }
}

impl Default for LocalStore {
    fn default() -> Self {
        Self::in_memory()
    }
}

fn normalize(mut fields: BenchmarkFields) -> Result<BenchmarkFields> {
    fields.validate()?;
    fields.result = round_result(fields.result);
    Ok(fields)
}

#[async_trait]
impl RecordStore for LocalStore {
    #[instrument(skip(self))]
    async fn list(&self) -> Result<Vec<BenchmarkResult>> {
        let records = self.rows.read().await.sorted();
        debug!(count = records.len(), "Listed records");
        Ok(records)
    }

    #[instrument(skip(self, fields))]
    async fn create(&self, fields: BenchmarkFields) -> Result<BenchmarkResult> {
        let fields = normalize(fields)?;
        let mut rows = self.rows.write().await;

        let mut next = rows.clone();
        let id = next.next_id;
        let record = BenchmarkResult::new(id.to_string(), fields, Some(Utc::now()));
        next.by_id.insert(id, record.clone());
        next.next_id = id + 1;

        self.commit(&mut rows, next).await?;
        debug!(id, "Record created");
        Ok(record)
    }

    #[instrument(skip(self, fields))]
    async fn update(&self, id: &str, fields: BenchmarkFields) -> Result<BenchmarkResult> {
        let key = parse_id(id)?;
        let fields = normalize(fields)?;
        let mut rows = self.rows.write().await;

        let created_at = rows
            .by_id
            .get(&key)
            .ok_or_else(|| Error::not_found(id))?
            .created_at;
        let record = BenchmarkResult::new(key.to_string(), fields, created_at);
        let mut next = rows.clone();
        next.by_id.insert(key, record.clone());

        self.commit(&mut rows, next).await?;
        debug!(id = key, "Record updated");
        Ok(record)
    }

    #[instrument(skip(self))]
    async fn remove(&self, id: &str) -> Result<BenchmarkResult> {
        let key = parse_id(id)?;
        let mut rows = self.rows.write().await;

        let mut next = rows.clone();
        let removed = next.by_id.remove(&key).ok_or_else(|| Error::not_found(id))?;

        self.commit(&mut rows, next).await?;
        debug!(id = key, "Record removed");
        Ok(removed)
    }

    fn backend(&self) -> &'static str {
        if self.path.is_some() {
            "file"
        } else {
            "memory"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use benchbook_core::vocab::sample_records;
    use benchbook_core::Direction;

    fn fields(benchmark: &str, gpu: &str, result: f64) -> BenchmarkFields {
        BenchmarkFields {
            benchmark: benchmark.to_string(),
            gpu: gpu.to_string(),
            cpu: "AMD Ryzen 7 7800X3D".to_string(),
            resolution: "2560x1440 (QHD)".to_string(),
            quality: "High".to_string(),
            ray_tracing: "Off".to_string(),
            upscaling: "Off".to_string(),
            anti_aliasing: "TAA".to_string(),
            result,
            tip: "Avg. FPS".to_string(),
            direction: Direction::HigherIsBetter,
        }
    }

    #[tokio::test]
    async fn test_create_assigns_sequential_ids() {
        let store = LocalStore::in_memory();
        let a = store.create(fields("Starfield", "RTX 4070", 61.0)).await.unwrap();
        let b = store.create(fields("Starfield", "RTX 4080", 78.0)).await.unwrap();
        assert_eq!(a.id, "1");
        assert_eq!(b.id, "2");
        assert!(a.created_at.is_some());
        assert_eq!(store.backend(), "memory");
    }

    #[tokio::test]
    async fn test_list_orders_by_benchmark_then_id() {
        let store = LocalStore::in_memory();
        store.create(fields("Starfield", "RTX 4070", 61.0)).await.unwrap();
        store.create(fields("Alan Wake 2", "RTX 4070", 44.0)).await.unwrap();
        store.create(fields("Starfield", "RTX 4090", 97.0)).await.unwrap();

        let ids: Vec<_> = store.list().await.unwrap().into_iter().map(|r| r.id).collect();
        assert_eq!(ids, vec!["2", "1", "3"]);
    }

    #[tokio::test]
    async fn test_update_then_list_round_trip() {
        let store = LocalStore::with_records(sample_records()).unwrap();
        let replacement = fields("Cyberpunk 2077", "NVIDIA RTX 5090", 151.25);

        let updated = store.update("1", replacement.clone()).await.unwrap();
        assert_eq!(updated.id, "1");

        let listed = store.list().await.unwrap();
        let stored = listed.iter().find(|r| r.id == "1").unwrap();
        assert_eq!(stored.fields, replacement);
        // creation time is kept
        assert_eq!(stored.created_at, sample_records()[0].created_at);
    }

    #[tokio::test]
    async fn test_update_missing_id() {
        let store = LocalStore::in_memory();
        let err = store.update("7", fields("A", "B", 1.0)).await.unwrap_err();
        assert!(err.is_not_found());

        let err = store.update("seven", fields("A", "B", 1.0)).await.unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[tokio::test]
    async fn test_remove_twice_is_not_found() {
        let store = LocalStore::with_records(sample_records()).unwrap();
        let removed = store.remove("3").await.unwrap();
        assert_eq!(removed.fields.gpu, "NVIDIA RTX 4080");

        let listed = store.list().await.unwrap();
        assert!(listed.iter().all(|r| r.id != "3"));
        assert_eq!(listed.len(), 9);

        assert!(store.remove("3").await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_ids_continue_after_existing_records() {
        let store = LocalStore::with_records(sample_records()).unwrap();
        let created = store.create(fields("Hogwarts Legacy", "RTX 4070", 72.0)).await.unwrap();
        assert_eq!(created.id, "11");
    }

    #[tokio::test]
    async fn test_rejects_invalid_fields() {
        let store = LocalStore::in_memory();
        let err = store.create(fields("", "RTX 4070", 1.0)).await.unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_result_rounded_like_decimal_column() {
        let store = LocalStore::in_memory();
        let created = store.create(fields("Starfield", "RTX 4070", 61.456)).await.unwrap();
        assert_eq!(created.fields.result, 61.46);
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let mut records = sample_records();
        records.push(records[0].clone());
        assert!(LocalStore::with_records(records).is_err());
    }

    #[tokio::test]
    async fn test_file_backed_store_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("benchmarks.json");
        {
            let store = LocalStore::open(&path).await.unwrap();
            assert_eq!(store.backend(), "file");
            store.create(fields("Starfield", "RTX 4070", 61.0)).await.unwrap();
            store.create(fields("Starfield", "RTX 4080", 78.0)).await.unwrap();
            store.remove("1").await.unwrap();
        }

        let reopened = LocalStore::open(&path).await.unwrap();
        let records = reopened.list().await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, "2");

        let created = reopened.create(fields("Starfield", "RTX 4090", 97.0)).await.unwrap();
        assert_eq!(created.id, "3");
    }

    #[tokio::test]
    async fn test_removed_highest_id_not_reused_after_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("benchmarks.json");
        {
            let store = LocalStore::open(&path).await.unwrap();
            store.create(fields("Starfield", "RTX 4070", 61.0)).await.unwrap();
            store.create(fields("Starfield", "RTX 4080", 78.0)).await.unwrap();
            store.remove("2").await.unwrap();
        }

        let reopened = LocalStore::open(&path).await.unwrap();
        let created = reopened.create(fields("Starfield", "RTX 4090", 97.0)).await.unwrap();
        assert_eq!(created.id, "3");
    }

    #[tokio::test]
    async fn test_out_of_range_result_leaves_file_readable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("benchmarks.json");
        let store = LocalStore::open(&path).await.unwrap();
        store.create(fields("Starfield", "RTX 4070", 61.0)).await.unwrap();

        let err = store.create(fields("Starfield", "RTX 4080", 1e307)).await.unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
        let err = store.update("1", fields("Starfield", "RTX 4080", 1e9)).await.unwrap_err();
        assert!(matches!(err, Error::Validation(_)));

        let reopened = LocalStore::open(&path).await.unwrap();
        let records = reopened.list().await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].fields.result, 61.0);
    }

    #[tokio::test]
    async fn test_list_ignores_case_of_benchmark_names() {
        let store = LocalStore::in_memory();
        store.create(fields("cinebench R23", "N/A", 1800.0)).await.unwrap();
        store.create(fields("Alan Wake 2", "RTX 4070", 44.0)).await.unwrap();
        store.create(fields("Cyberpunk 2077", "RTX 4070", 70.0)).await.unwrap();

        let names: Vec<_> = store
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.fields.benchmark)
            .collect();
        assert_eq!(names, vec!["Alan Wake 2", "cinebench R23", "Cyberpunk 2077"]);
    }

    #[tokio::test]
    async fn test_open_or_seed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("benchmarks.json");
        let store = LocalStore::open_or_seed(&path, sample_records).await.unwrap();
        assert_eq!(store.len().await, 10);

        // an existing file is not reseeded
        store.remove("10").await.unwrap();
        let reopened = LocalStore::open_or_seed(&path, sample_records).await.unwrap();
        assert_eq!(reopened.len().await, 9);
    }
}
