// Copyright 2026 Benchbook Contributors
// SPDX-License-Identifier: Apache-2.0

//! The benchmark result entity.
//!
//! [`BenchmarkResult`] is the in-memory representation clients work with. The
//! replaceable part of a record (everything except its identifier and creation
//! time) is split out as [`BenchmarkFields`], which is what create and update
//! operations take.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Sentinel used for attributes that do not apply to a measurement
/// (e.g. the GPU of a CPU-only benchmark).
pub const NOT_AVAILABLE: &str = "N/A";

/// Largest result a `DECIMAL(10, 2)` column holds.
pub const MAX_RESULT: f64 = 99_999_999.99;

/// Polarity of a measurement: whether a higher or a lower value is better.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub enum Direction {
    /// Higher results are better (FPS, scores). Encoded as `1`.
    HigherIsBetter,
    /// Lower results are better (load times). Encoded as `-1`.
    LowerIsBetter,
}

impl Direction {
    /// Integer encoding used on the wire and in storage.
    pub fn as_i32(self) -> i32 {
        match self {
            Self::HigherIsBetter => 1,
            Self::LowerIsBetter => -1,
        }
    }

    /// Whether a higher result is better.
    pub fn higher_is_better(self) -> bool {
        self == Self::HigherIsBetter
    }
}

impl Default for Direction {
    fn default() -> Self {
        Direction::HigherIsBetter
    }
}

impl TryFrom<i32> for Direction {
    type Error = Error;

    fn try_from(value: i32) -> Result<Self> {
        match value {
            1 => Ok(Self::HigherIsBetter),
            -1 => Ok(Self::LowerIsBetter),
            other => Err(Error::validation(format!(
                "direction must be 1 or -1, got {}",
                other
            ))),
        }
    }
}

impl From<Direction> for i32 {
    fn from(direction: Direction) -> Self {
        direction.as_i32()
    }
}

/// The replaceable attributes of a benchmark result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BenchmarkFields {
    /// Name of the game or test.
    pub benchmark: String,
    /// Graphics card, or [`NOT_AVAILABLE`].
    pub gpu: String,
    /// Processor, or [`NOT_AVAILABLE`].
    pub cpu: String,
    pub resolution: String,
    pub quality: String,
    pub ray_tracing: String,
    pub upscaling: String,
    pub anti_aliasing: String,
    /// Measured value.
    pub result: f64,
    /// Measurement kind label, e.g. "Avg. FPS" or "Seconds".
    pub tip: String,
    pub direction: Direction,
}

impl BenchmarkFields {
    /// Check the invariants a stored record must satisfy.
    ///
    /// Only presence of the benchmark name and the numeric range of the result
    /// are enforced. Controlled-vocabulary membership is advisory.
    pub fn validate(&self) -> Result<()> {
        if self.benchmark.trim().is_empty() {
            return Err(Error::validation("benchmark name is required"));
        }
        if !self.result.is_finite() {
            return Err(Error::validation("result must be a finite number"));
        }
        if self.result < 0.0 {
            return Err(Error::validation(format!(
                "result must not be negative, got {}",
                self.result
            )));
        }
        if self.result > MAX_RESULT {
            return Err(Error::validation(format!(
                "result must be at most {}, got {}",
                MAX_RESULT, self.result
            )));
        }
        Ok(())
    }

    /// Value of a textual field.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Benchmark => &self.benchmark,
            Field::Gpu => &self.gpu,
            Field::Cpu => &self.cpu,
            Field::Resolution => &self.resolution,
            Field::Quality => &self.quality,
            Field::RayTracing => &self.ray_tracing,
            Field::Upscaling => &self.upscaling,
            Field::AntiAliasing => &self.anti_aliasing,
        }
    }

    /// Decimal rendering of the result: `118.5`, `40012`.
    pub fn result_text(&self) -> String {
        self.result.to_string()
    }
}

/// A stored benchmark result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BenchmarkResult {
    /// Store-assigned identifier. Immutable.
    pub id: String,
    #[serde(flatten)]
    pub fields: BenchmarkFields,
    /// Set by the store on creation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl BenchmarkResult {
    /// Assemble a record from its parts.
    pub fn new(
        id: impl Into<String>,
        fields: BenchmarkFields,
        created_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id: id.into(),
            fields,
            created_at,
        }
    }

    /// Value of a textual field.
    pub fn get(&self, field: Field) -> &str {
        self.fields.get(field)
    }

    /// Unit shown next to the result in tables and tooltips.
    pub fn unit(&self) -> &'static str {
        if self.fields.tip.contains("FPS") {
            "FPS"
        } else {
            "s"
        }
    }
}

/// The textual, filterable fields of a benchmark result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Benchmark,
    Gpu,
    Cpu,
    Resolution,
    Quality,
    RayTracing,
    Upscaling,
    AntiAliasing,
}

impl Field {
    /// Every filterable field, in form order.
    pub const ALL: [Field; 8] = [
        Field::Benchmark,
        Field::Gpu,
        Field::Cpu,
        Field::Resolution,
        Field::Quality,
        Field::RayTracing,
        Field::Upscaling,
        Field::AntiAliasing,
    ];

    /// In-memory (camelCase) name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Benchmark => "benchmark",
            Self::Gpu => "gpu",
            Self::Cpu => "cpu",
            Self::Resolution => "resolution",
            Self::Quality => "quality",
            Self::RayTracing => "rayTracing",
            Self::Upscaling => "upscaling",
            Self::AntiAliasing => "antiAliasing",
        }
    }

    /// Wire and column (snake_case) name.
    pub fn wire_name(self) -> &'static str {
        match self {
            Self::RayTracing => "ray_tracing",
            Self::AntiAliasing => "anti_aliasing",
            other => other.name(),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Field {
    type Err = Error;

    /// Accepts both the camelCase and the snake_case spelling.
    fn from_str(s: &str) -> Result<Self> {
        Field::ALL
            .into_iter()
            .find(|field| field.name() == s || field.wire_name() == s)
            .ok_or_else(|| Error::validation(format!("unknown field '{}'", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cyberpunk() -> BenchmarkFields {
        BenchmarkFields {
            benchmark: "Cyberpunk 2077".to_string(),
            gpu: "RTX 4090".to_string(),
            cpu: "Intel Core i9-13900K".to_string(),
            resolution: "3840x2160 (4K)".to_string(),
            quality: "Ultra".to_string(),
            ray_tracing: "Ultra".to_string(),
            upscaling: "DLSS Quality".to_string(),
            anti_aliasing: "TAA".to_string(),
            result: 118.5,
            tip: "Avg. FPS".to_string(),
            direction: Direction::HigherIsBetter,
        }
    }

    #[test]
    fn test_direction_encoding() {
        assert_eq!(Direction::try_from(1).unwrap(), Direction::HigherIsBetter);
        assert_eq!(Direction::try_from(-1).unwrap(), Direction::LowerIsBetter);
        assert!(Direction::try_from(0).is_err());
        assert_eq!(i32::from(Direction::LowerIsBetter), -1);
    }

    #[test]
    fn test_direction_rejects_other_integers_in_json() {
        let err = serde_json::from_str::<Direction>("2");
        assert!(err.is_err());
        let ok: Direction = serde_json::from_str("-1").unwrap();
        assert_eq!(ok, Direction::LowerIsBetter);
    }

    #[test]
    fn test_validate() {
        assert!(cyberpunk().validate().is_ok());

        let mut blank = cyberpunk();
        blank.benchmark = "   ".to_string();
        assert!(matches!(blank.validate(), Err(Error::Validation(_))));

        let mut negative = cyberpunk();
        negative.result = -1.0;
        assert!(negative.validate().is_err());

        let mut nan = cyberpunk();
        nan.result = f64::NAN;
        assert!(nan.validate().is_err());

        let mut widest = cyberpunk();
        widest.result = MAX_RESULT;
        assert!(widest.validate().is_ok());

        let mut huge = cyberpunk();
        huge.result = 1e307;
        assert!(matches!(huge.validate(), Err(Error::Validation(_))));
    }

    #[test]
    fn test_record_serializes_camel_case() {
        let record = BenchmarkResult::new("1", cyberpunk(), None);
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["id"], "1");
        assert_eq!(json["rayTracing"], "Ultra");
        assert_eq!(json["antiAliasing"], "TAA");
        assert_eq!(json["direction"], 1);
        assert!(json.get("createdAt").is_none());
    }

    #[test]
    fn test_result_text() {
        assert_eq!(cyberpunk().result_text(), "118.5");
        let mut score = cyberpunk();
        score.result = 40012.0;
        assert_eq!(score.result_text(), "40012");
    }

    #[test]
    fn test_field_names() {
        assert_eq!("rayTracing".parse::<Field>().unwrap(), Field::RayTracing);
        assert_eq!("anti_aliasing".parse::<Field>().unwrap(), Field::AntiAliasing);
        assert!("price".parse::<Field>().is_err());
        assert_eq!(cyberpunk().get(Field::Gpu), "RTX 4090");
    }

    #[test]
    fn test_unit() {
        let mut record = BenchmarkResult::new("1", cyberpunk(), None);
        assert_eq!(record.unit(), "FPS");
        record.fields.tip = "Seconds".to_string();
        assert_eq!(record.unit(), "s");
    }
}
