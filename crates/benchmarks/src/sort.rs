// Copyright 2026 Benchbook Contributors
// SPDX-License-Identifier: Apache-2.0

//! Table ordering.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use benchbook_core::{BenchmarkResult, Error, Result};
use serde::{Deserialize, Serialize};

/// Sortable table columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    Benchmark,
    Gpu,
    Cpu,
    Result,
}

impl FromStr for SortKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "benchmark" => Ok(Self::Benchmark),
            "gpu" => Ok(Self::Gpu),
            "cpu" => Ok(Self::Cpu),
            "result" => Ok(Self::Result),
            other => Err(Error::validation(format!("cannot sort by '{}'", other))),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Benchmark => "benchmark",
            Self::Gpu => "gpu",
            Self::Cpu => "cpu",
            Self::Result => "result",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Ascending,
    Descending,
}

/// Column and order of the table. Defaults to best results first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub key: SortKey,
    pub order: SortOrder,
}

impl Default for SortSpec {
    fn default() -> Self {
        Self {
            key: SortKey::Result,
            order: SortOrder::Descending,
        }
    }
}

impl SortSpec {
    pub fn new(key: SortKey, order: SortOrder) -> Self {
        Self { key, order }
    }

    /// Header-click behaviour: the same column while ascending flips to
    /// descending, anything else sorts ascending.
    pub fn toggle(self, key: SortKey) -> Self {
        let order = if self.key == key && self.order == SortOrder::Ascending {
            SortOrder::Descending
        } else {
            SortOrder::Ascending
        };
        Self { key, order }
    }

    fn compare(&self, a: &BenchmarkResult, b: &BenchmarkResult) -> Ordering {
        let ordering = match self.key {
            SortKey::Benchmark => a.fields.benchmark.cmp(&b.fields.benchmark),
            SortKey::Gpu => a.fields.gpu.cmp(&b.fields.gpu),
            SortKey::Cpu => a.fields.cpu.cmp(&b.fields.cpu),
            SortKey::Result => a.fields.result.total_cmp(&b.fields.result),
        };
        match self.order {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    }
}

/// Stable sort of a view by `spec`.
pub fn sort_records(records: &mut [&BenchmarkResult], spec: SortSpec) {
    records.sort_by(|a, b| spec.compare(a, b));
}
