// Copyright 2026 Benchbook Contributors
// SPDX-License-Identifier: Apache-2.0

//! Summary statistics for charting.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use benchbook_core::{BenchmarkResult, Field};
use serde::{Deserialize, Serialize};

/// Mean result of the records sharing one key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupMean {
    pub key: String,
    pub mean: f64,
    pub count: usize,
}

/// Aggregates over a record subset.
///
/// Every value is zero and both rankings are empty for an empty subset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub count: usize,
    pub mean: f64,
    pub max: f64,
    pub min: f64,
    /// Per-GPU mean, highest first.
    pub gpu_comparison: Vec<GroupMean>,
    /// Per-benchmark mean, highest first.
    pub benchmark_comparison: Vec<GroupMean>,
}

/// Compute the [`Summary`] of a subset.
pub fn aggregate<'a, I>(records: I) -> Summary
where
    I: IntoIterator<Item = &'a BenchmarkResult>,
{
    let records: Vec<&BenchmarkResult> = records.into_iter().collect();
    if records.is_empty() {
        return Summary::default();
    }

    let values = records.iter().map(|record| record.fields.result);
    let total: f64 = values.clone().sum();
    let max = values.clone().fold(f64::NEG_INFINITY, f64::max);
    let min = values.fold(f64::INFINITY, f64::min);

    Summary {
        count: records.len(),
        mean: total / records.len() as f64,
        max,
        min,
        gpu_comparison: group_means(&records, Field::Gpu),
        benchmark_comparison: group_means(&records, Field::Benchmark),
    }
}

/// Mean result per exact value of `field`, sorted by mean descending.
///
/// Equal means are ordered by key so the ranking is deterministic.
pub fn group_means(records: &[&BenchmarkResult], field: Field) -> Vec<GroupMean> {
    let mut groups: BTreeMap<&str, (f64, usize)> = BTreeMap::new();
    for record in records {
        let entry = groups.entry(record.get(field)).or_insert((0.0, 0));
        entry.0 += record.fields.result;
        entry.1 += 1;
    }

    let mut means: Vec<GroupMean> = groups
        .into_iter()
        .map(|(key, (sum, count))| GroupMean {
            key: key.to_string(),
            mean: sum / count as f64,
            count,
        })
        .collect();
    means.sort_by(|a, b| match b.mean.total_cmp(&a.mean) {
        Ordering::Equal => a.key.cmp(&b.key),
        other => other,
    });
    means
}
