// Copyright 2026 Benchbook Contributors
// SPDX-License-Identifier: Apache-2.0

//! Seed vocabularies and the sample dataset.
//!
//! The vocabularies are the defaults an [`OptionRegistry`](crate::OptionRegistry)
//! starts with. They are not an enum enforced by any store: users may enter
//! values outside these lists and the registry grows to include them.

use chrono::{TimeZone, Utc};

use crate::record::{BenchmarkFields, BenchmarkResult, Direction, Field, NOT_AVAILABLE};

pub const RESOLUTIONS: &[&str] = &[
    "1920x1080 (FHD)",
    "2560x1440 (QHD)",
    "3440x1440 (UW-QHD)",
    "3840x2160 (4K)",
    NOT_AVAILABLE,
];

pub const QUALITIES: &[&str] = &["Low", "Medium", "High", "Ultra", "Extreme", NOT_AVAILABLE];

pub const RAY_TRACING: &[&str] = &[
    "Off",
    "Low",
    "Medium",
    "High",
    "Ultra",
    "Psycho",
    NOT_AVAILABLE,
];

pub const UPSCALING: &[&str] = &[
    "Off",
    "DLSS Quality",
    "DLSS Balanced",
    "DLSS Performance",
    "DLSS Ultra Performance",
    "DLSS 3 Frame Generation",
    "DLSS 4 Multi Frame Generation 2x",
    "DLSS 4 Multi Frame Generation 3x",
    "DLSS 4 Multi Frame Generation 4x",
    "FSR 1.0 Quality",
    "FSR 1.0 Balanced",
    "FSR 1.0 Performance",
    "FSR 2.1 Quality",
    "FSR 2.1 Balanced",
    "FSR 2.1 Performance",
    "FSR 2.1 Ultra Performance",
    "FSR 3.0 Quality",
    "FSR 3.0 Balanced",
    "FSR 3.0 Performance",
    "FSR 3.0 Frame Generation",
    "FSR 4 Quality",
    "FSR 4 Balanced",
    "FSR 4 Performance",
    "FSR 4 Ultra Performance",
    "FSR 4 Frame Generation",
    "XeSS Quality",
    "XeSS Balanced",
    "XeSS Performance",
    "XeSS Ultra Performance",
    NOT_AVAILABLE,
];

pub const ANTI_ALIASING: &[&str] = &[
    "Off",
    "FXAA",
    "SMAA",
    "TAA",
    "MSAA 2x",
    "MSAA 4x",
    "MSAA 8x",
    NOT_AVAILABLE,
];

/// Seed list for a field. Benchmark names, GPUs and CPUs have none: those
/// sets are derived from the stored records.
pub fn seed_values(field: Field) -> &'static [&'static str] {
    match field {
        Field::Resolution => RESOLUTIONS,
        Field::Quality => QUALITIES,
        Field::RayTracing => RAY_TRACING,
        Field::Upscaling => UPSCALING,
        Field::AntiAliasing => ANTI_ALIASING,
        Field::Benchmark | Field::Gpu | Field::Cpu => &[],
    }
}

/// Ten sample results for a fresh local store.
pub fn sample_records() -> Vec<BenchmarkResult> {
    #[allow(clippy::too_many_arguments)]
    fn sample(
        id: u32,
        benchmark: &str,
        gpu: &str,
        cpu: &str,
        settings: [&str; 5],
        result: f64,
        tip: &str,
        direction: Direction,
        day: u32,
    ) -> BenchmarkResult {
        let [resolution, quality, ray_tracing, upscaling, anti_aliasing] = settings;
        BenchmarkResult::new(
            id.to_string(),
            BenchmarkFields {
                benchmark: benchmark.to_string(),
                gpu: gpu.to_string(),
                cpu: cpu.to_string(),
                resolution: resolution.to_string(),
                quality: quality.to_string(),
                ray_tracing: ray_tracing.to_string(),
                upscaling: upscaling.to_string(),
                anti_aliasing: anti_aliasing.to_string(),
                result,
                tip: tip.to_string(),
                direction,
            },
            Utc.with_ymd_and_hms(2023, 10, day, 12, 0, 0).single(),
        )
    }

    const FPS: &str = "Avg. FPS";
    const NA: [&str; 5] = [NOT_AVAILABLE; 5];
    let up = Direction::HigherIsBetter;

    vec![
        sample(1, "Cyberpunk 2077", "NVIDIA RTX 4090", "Intel Core i9-13900K",
            ["3840x2160 (4K)", "Ultra", "Ultra", "DLSS Quality", "TAA"], 118.5, FPS, up, 15),
        sample(2, "Cyberpunk 2077", "AMD Radeon RX 7900 XTX", "AMD Ryzen 9 7950X",
            ["3840x2160 (4K)", "Ultra", "Ultra", "FSR 2.1 Quality", "TAA"], 89.2, FPS, up, 15),
        sample(3, "Cyberpunk 2077", "NVIDIA RTX 4080", "Intel Core i7-13700K",
            ["3840x2160 (4K)", "Ultra", "Ultra", "DLSS Quality", "TAA"], 92.7, FPS, up, 16),
        sample(4, "Red Dead Redemption 2", "NVIDIA RTX 4090", "Intel Core i9-13900K",
            ["3840x2160 (4K)", "Ultra", "Off", "Off", "TAA"], 142.3, FPS, up, 17),
        sample(5, "Red Dead Redemption 2", "AMD Radeon RX 7900 XTX", "AMD Ryzen 9 7950X",
            ["3840x2160 (4K)", "Ultra", "Off", "Off", "TAA"], 128.6, FPS, up, 18),
        sample(6, "Forza Horizon 5", "NVIDIA RTX 4090", "Intel Core i9-13900K",
            ["3840x2160 (4K)", "Extreme", "High", "DLSS Quality", "TAA"], 165.8, FPS, up, 19),
        sample(7, "Forza Horizon 5", "AMD Radeon RX 7900 XTX", "AMD Ryzen 9 7950X",
            ["3840x2160 (4K)", "Extreme", "High", "FSR 2.1 Quality", "TAA"], 152.4, FPS, up, 20),
        sample(8, "Cinebench R23", NOT_AVAILABLE, "Intel Core i9-13900K",
            NA, 40012.0, "Multi-core score", up, 21),
        sample(9, "Cinebench R23", NOT_AVAILABLE, "AMD Ryzen 9 7950X",
            NA, 38764.0, "Multi-core score", up, 22),
        sample(10, "Windows boot time", "NVIDIA RTX 4090", "Intel Core i9-13900K",
            NA, 12.3, "Seconds", Direction::LowerIsBetter, 23),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_lists_include_sentinel() {
        for field in [Field::Resolution, Field::Quality, Field::RayTracing, Field::Upscaling, Field::AntiAliasing] {
            assert!(seed_values(field).contains(&NOT_AVAILABLE), "{field} lacks N/A");
        }
        assert!(seed_values(Field::Gpu).is_empty());
    }

    #[test]
    fn test_sample_records_are_valid() {
        let records = sample_records();
        assert_eq!(records.len(), 10);
        for record in &records {
            assert!(record.fields.validate().is_ok());
            assert!(record.created_at.is_some());
        }
        assert_eq!(records[9].fields.direction, Direction::LowerIsBetter);
    }
}
