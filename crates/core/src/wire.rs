// Copyright 2026 Benchbook Contributors
// SPDX-License-Identifier: Apache-2.0

//! Wire and storage representation of benchmark results.
//!
//! The HTTP API and the `benchmarks` table use separate-word keys
//! (`ray_tracing`, `anti_aliasing`, `created_at`), a numeric identifier, and
//! render `result` as a decimal string with two fractional digits. The
//! in-memory [`BenchmarkResult`] uses compact camelCase names, a string
//! identifier and an `f64` result. Everything crossing that boundary goes
//! through the conversions in this module.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{Error, Result};
use crate::record::{BenchmarkFields, BenchmarkResult, Direction};

/// A row as stored in the `benchmarks` table and returned by the HTTP API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredRow {
    pub id: i64,
    pub benchmark: String,
    pub gpu: String,
    pub cpu: String,
    pub resolution: String,
    pub quality: String,
    pub ray_tracing: String,
    pub upscaling: String,
    pub anti_aliasing: String,
    /// Decimal string, e.g. `"118.50"`.
    pub result: String,
    pub tip: String,
    pub direction: i32,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl StoredRow {
    /// Shape an in-memory record for the wire.
    pub fn from_record(record: &BenchmarkResult) -> Result<Self> {
        let fields = &record.fields;
        Ok(Self {
            id: parse_id(&record.id)?,
            benchmark: fields.benchmark.clone(),
            gpu: fields.gpu.clone(),
            cpu: fields.cpu.clone(),
            resolution: fields.resolution.clone(),
            quality: fields.quality.clone(),
            ray_tracing: fields.ray_tracing.clone(),
            upscaling: fields.upscaling.clone(),
            anti_aliasing: fields.anti_aliasing.clone(),
            result: format_result(fields.result),
            tip: fields.tip.clone(),
            direction: fields.direction.as_i32(),
            created_at: record.created_at,
        })
    }

    /// Convert into the in-memory representation, parsing `result`.
    pub fn into_record(self) -> Result<BenchmarkResult> {
        let result = parse_result(&self.result)?;
        let direction = Direction::try_from(self.direction)
            .map_err(|_| Error::wire(format!("row {} has direction {}", self.id, self.direction)))?;

        Ok(BenchmarkResult {
            id: self.id.to_string(),
            fields: BenchmarkFields {
                benchmark: self.benchmark,
                gpu: self.gpu,
                cpu: self.cpu,
                resolution: self.resolution,
                quality: self.quality,
                ray_tracing: self.ray_tracing,
                upscaling: self.upscaling,
                anti_aliasing: self.anti_aliasing,
                result,
                tip: self.tip,
                direction,
            },
            created_at: self.created_at,
        })
    }
}

impl TryFrom<StoredRow> for BenchmarkResult {
    type Error = Error;

    fn try_from(row: StoredRow) -> Result<Self> {
        row.into_record()
    }
}

/// Request body for create and update: a row without `id` and `created_at`.
///
/// Keys are snake_case; the camelCase spellings are accepted as aliases, and
/// `result` may be sent either as a JSON number or as a numeric string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkPayload {
    pub benchmark: String,
    pub gpu: String,
    pub cpu: String,
    pub resolution: String,
    pub quality: String,
    #[serde(alias = "rayTracing")]
    pub ray_tracing: String,
    pub upscaling: String,
    #[serde(alias = "antiAliasing")]
    pub anti_aliasing: String,
    #[serde(deserialize_with = "deserialize_result")]
    pub result: f64,
    pub tip: String,
    pub direction: i32,
}

impl From<&BenchmarkFields> for BenchmarkPayload {
    fn from(fields: &BenchmarkFields) -> Self {
        Self {
            benchmark: fields.benchmark.clone(),
            gpu: fields.gpu.clone(),
            cpu: fields.cpu.clone(),
            resolution: fields.resolution.clone(),
            quality: fields.quality.clone(),
            ray_tracing: fields.ray_tracing.clone(),
            upscaling: fields.upscaling.clone(),
            anti_aliasing: fields.anti_aliasing.clone(),
            result: fields.result,
            tip: fields.tip.clone(),
            direction: fields.direction.as_i32(),
        }
    }
}

impl TryFrom<BenchmarkPayload> for BenchmarkFields {
    type Error = Error;

    /// Converts and validates a request body.
    fn try_from(payload: BenchmarkPayload) -> Result<Self> {
        let fields = BenchmarkFields {
            benchmark: payload.benchmark,
            gpu: payload.gpu,
            cpu: payload.cpu,
            resolution: payload.resolution,
            quality: payload.quality,
            ray_tracing: payload.ray_tracing,
            upscaling: payload.upscaling,
            anti_aliasing: payload.anti_aliasing,
            result: payload.result,
            tip: payload.tip,
            direction: Direction::try_from(payload.direction)?,
        };
        fields.validate()?;
        Ok(fields)
    }
}

/// Parse a record identifier into the numeric key used by the stores.
pub fn parse_id(id: &str) -> Result<i64> {
    id.trim()
        .parse::<i64>()
        .map_err(|_| Error::validation(format!("ID must be a number, got '{}'", id)))
}

/// Render a result the way a `DECIMAL(10, 2)` column does.
pub fn format_result(value: f64) -> String {
    format!("{:.2}", value)
}

/// Parse the decimal string form of a result.
pub fn parse_result(text: &str) -> Result<f64> {
    let value = text
        .trim()
        .parse::<f64>()
        .map_err(|_| Error::wire(format!("result '{}' is not a number", text)))?;
    if !value.is_finite() {
        return Err(Error::wire(format!("result '{}' is not finite", text)));
    }
    Ok(value)
}

/// Round to the two fractional digits the store keeps.
pub fn round_result(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn deserialize_result<'de, D>(deserializer: D) -> std::result::Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrText {
        Number(f64),
        Text(String),
    }

    match NumberOrText::deserialize(deserializer)? {
        NumberOrText::Number(value) => Ok(value),
        NumberOrText::Text(text) => parse_result(&text).map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row() -> StoredRow {
        StoredRow {
            id: 7,
            benchmark: "Cyberpunk 2077".to_string(),
            gpu: "RTX 4090".to_string(),
            cpu: "Intel Core i9-13900K".to_string(),
            resolution: "3840x2160 (4K)".to_string(),
            quality: "Ultra".to_string(),
            ray_tracing: "Psycho".to_string(),
            upscaling: "DLSS Quality".to_string(),
            anti_aliasing: "TAA".to_string(),
            result: "118.50".to_string(),
            tip: "Avg. FPS".to_string(),
            direction: 1,
            created_at: None,
        }
    }

    #[test]
    fn test_row_to_record_renames_and_parses() {
        let record = row().into_record().unwrap();
        assert_eq!(record.id, "7");
        assert_eq!(record.fields.ray_tracing, "Psycho");
        assert_eq!(record.fields.anti_aliasing, "TAA");
        assert_eq!(record.fields.result, 118.5);
        assert_eq!(record.fields.direction, Direction::HigherIsBetter);
    }

    #[test]
    fn test_record_to_row_formats_result() {
        let record = row().into_record().unwrap();
        let back = StoredRow::from_record(&record).unwrap();
        assert_eq!(back.result, "118.50");
        assert_eq!(back, row());
    }

    #[test]
    fn test_row_json_uses_separate_word_keys() {
        let value = serde_json::to_value(row()).unwrap();
        assert_eq!(value["ray_tracing"], "Psycho");
        assert_eq!(value["anti_aliasing"], "TAA");
        assert_eq!(value["result"], "118.50");
        assert!(value.get("rayTracing").is_none());
    }

    #[test]
    fn test_row_with_bad_result_is_rejected() {
        let mut bad = row();
        bad.result = "fast".to_string();
        assert!(matches!(bad.into_record(), Err(Error::Wire(_))));

        let mut bad_direction = row();
        bad_direction.direction = 0;
        assert!(matches!(bad_direction.into_record(), Err(Error::Wire(_))));
    }

    #[test]
    fn test_payload_accepts_camel_case_and_string_result() {
        let payload: BenchmarkPayload = serde_json::from_value(json!({
            "benchmark": "Windows boot time",
            "gpu": "N/A",
            "cpu": "AMD Ryzen 9 7950X",
            "resolution": "N/A",
            "quality": "N/A",
            "rayTracing": "N/A",
            "upscaling": "N/A",
            "antiAliasing": "N/A",
            "result": "12.30",
            "tip": "Seconds",
            "direction": -1
        }))
        .unwrap();
        assert_eq!(payload.ray_tracing, "N/A");
        assert_eq!(payload.result, 12.3);

        let fields = BenchmarkFields::try_from(payload).unwrap();
        assert_eq!(fields.direction, Direction::LowerIsBetter);
    }

    #[test]
    fn test_payload_validation() {
        let record = row().into_record().unwrap();
        let mut payload = BenchmarkPayload::from(&record.fields);
        payload.direction = 3;
        assert!(matches!(
            BenchmarkFields::try_from(payload.clone()),
            Err(Error::Validation(_))
        ));

        payload.direction = 1;
        payload.benchmark = String::new();
        assert!(BenchmarkFields::try_from(payload).is_err());
    }

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("42").unwrap(), 42);
        assert!(matches!(parse_id("abc"), Err(Error::Validation(_))));
        assert!(parse_id("").is_err());
    }

    #[test]
    fn test_round_result() {
        assert_eq!(round_result(118.456), 118.46);
        assert_eq!(round_result(12.3), 12.3);
    }
}
