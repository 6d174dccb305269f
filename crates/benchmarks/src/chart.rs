// Copyright 2026 Benchbook Contributors
// SPDX-License-Identifier: Apache-2.0

//! Bar-chart series for a chart renderer.
//!
//! Lower-is-better results are negated so that every bar points the "better"
//! way; renderers show [`ChartBar::magnitude`] on axes and tooltips.

use benchbook_core::{BenchmarkResult, Direction};
use serde::{Deserialize, Serialize};

/// Number of bars shown when nothing is selected for comparison.
pub const DEFAULT_CHART_LIMIT: usize = 10;

/// One bar of the results chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartBar {
    pub id: String,
    /// `"<gpu> - <benchmark>"`.
    pub label: String,
    /// `"<resolution>, <quality>"`.
    pub settings: String,
    /// Signed by direction.
    pub value: f64,
    pub magnitude: f64,
    pub tip: String,
    pub unit: String,
    pub direction: Direction,
}

impl ChartBar {
    pub fn from_record(record: &BenchmarkResult) -> Self {
        let fields = &record.fields;
        let value = if fields.direction.higher_is_better() {
            fields.result
        } else {
            -fields.result
        };
        Self {
            id: record.id.clone(),
            label: format!("{} - {}", fields.gpu, fields.benchmark),
            settings: format!("{}, {}", fields.resolution, fields.quality),
            value,
            magnitude: fields.result.abs(),
            tip: fields.tip.clone(),
            unit: record.unit().to_string(),
            direction: fields.direction,
        }
    }

    /// Tooltip lines for the bar.
    pub fn tooltip(&self, record: &BenchmarkResult) -> Vec<String> {
        let polarity = if self.direction.higher_is_better() {
            "higher is better"
        } else {
            "lower is better"
        };
        let fields = &record.fields;
        vec![
            format!("{}: {} {} ({})", self.tip, self.magnitude, self.unit, polarity),
            format!("CPU: {}", fields.cpu),
            format!("Resolution: {}", fields.resolution),
            format!("Quality: {}", fields.quality),
            format!("Ray Tracing: {}", fields.ray_tracing),
            format!("Upscaling: {}", fields.upscaling),
            format!("Anti-Aliasing: {}", fields.anti_aliasing),
        ]
    }
}

/// Bars for the first [`DEFAULT_CHART_LIMIT`] records of a view.
pub fn chart_series<'a, I>(records: I) -> Vec<ChartBar>
where
    I: IntoIterator<Item = &'a BenchmarkResult>,
{
    records
        .into_iter()
        .take(DEFAULT_CHART_LIMIT)
        .map(ChartBar::from_record)
        .collect()
}

/// Bars for every given record, e.g. a resolved comparison in selection order.
pub fn comparison_series<'a, I>(records: I) -> Vec<ChartBar>
where
    I: IntoIterator<Item = &'a BenchmarkResult>,
{
    records.into_iter().map(ChartBar::from_record).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use benchbook_core::vocab::sample_records;

    #[test]
    fn test_default_series_is_capped() {
        let mut records = sample_records();
        records.extend(sample_records());
        assert_eq!(chart_series(&records).len(), DEFAULT_CHART_LIMIT);
    }

    #[test]
    fn test_lower_is_better_is_negated() {
        let records = sample_records();
        let bars = chart_series(&records);
        let boot = bars.iter().find(|bar| bar.id == "10").unwrap();
        assert_eq!(boot.value, -12.3);
        assert_eq!(boot.magnitude, 12.3);
        assert_eq!(boot.unit, "s");

        let cyberpunk = &bars[0];
        assert_eq!(cyberpunk.value, 118.5);
        assert_eq!(cyberpunk.label, "NVIDIA RTX 4090 - Cyberpunk 2077");
        assert_eq!(cyberpunk.settings, "3840x2160 (4K), Ultra");
    }

    #[test]
    fn test_comparison_series_keeps_order() {
        let records = sample_records();
        let picked = [&records[4], &records[0]];
        let bars = comparison_series(picked);
        assert_eq!(bars.len(), 2);
        assert_eq!(bars[0].id, "5");
        assert_eq!(bars[1].id, "1");
    }

    #[test]
    fn test_tooltip() {
        let records = sample_records();
        let bar = ChartBar::from_record(&records[9]);
        let lines = bar.tooltip(&records[9]);
        assert_eq!(lines[0], "Seconds: 12.3 s (lower is better)");
        assert_eq!(lines.len(), 7);
    }
}
