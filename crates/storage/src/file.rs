// Copyright 2026 Benchbook Contributors
// SPDX-License-Identifier: Apache-2.0

//! JSON file I/O for benchmark records.
//!
//! A data file is a pretty-printed JSON document holding the next identifier
//! to assign and the records in their in-memory (camelCase) form. A bare
//! array of records is read too, with no stored identifier counter. Writes
//! go to a sibling temporary file that is then renamed over the target, so a
//! crash never leaves a half-written data file.

use std::path::{Path, PathBuf};

use benchbook_core::{BenchmarkResult, Error, Result};
use serde::{Deserialize, Serialize};
use tokio::fs;
use tracing::debug;

/// Default data file for the local store.
pub const DEFAULT_DATA_FILE: &str = "benchmarks.json";

/// Contents of a data file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataFile {
    /// Next identifier to assign. Deleted identifiers stay below it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_id: Option<i64>,
    pub records: Vec<BenchmarkResult>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Layout {
    Document(DataFile),
    Records(Vec<BenchmarkResult>),
}

impl From<Layout> for DataFile {
    fn from(layout: Layout) -> Self {
        match layout {
            Layout::Document(data) => data,
            Layout::Records(records) => DataFile {
                next_id: None,
                records,
            },
        }
    }
}

/// Read a data file. A missing or blank file reads as empty.
pub async fn read_data(path: impl AsRef<Path>) -> Result<DataFile> {
    let path = path.as_ref();
    let content = match fs::read_to_string(path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "Data file not found, starting empty");
            return Ok(DataFile::default());
        }
        Err(err) => return Err(Error::store(format!("reading {}: {}", path.display(), err))),
    };
    if content.trim().is_empty() {
        return Ok(DataFile::default());
    }
    let layout: Layout = serde_json::from_str(&content)?;
    Ok(layout.into())
}

/// Write a data file, creating parent directories.
pub async fn write_data(path: impl AsRef<Path>, data: &DataFile) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .await
            .map_err(|e| Error::store(format!("creating {}: {}", parent.display(), e)))?;
    }

    let json = serde_json::to_string_pretty(data)?;
    let tmp = temp_path(path);
    fs::write(&tmp, json)
        .await
        .map_err(|e| Error::store(format!("writing {}: {}", tmp.display(), e)))?;
    fs::rename(&tmp, path)
        .await
        .map_err(|e| Error::store(format!("replacing {}: {}", path.display(), e)))?;

    debug!(path = %path.display(), count = data.records.len(), "Records written");
    Ok(())
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
