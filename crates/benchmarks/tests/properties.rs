// Copyright 2026 Benchbook Contributors
// SPDX-License-Identifier: Apache-2.0

//! Property tests for filtering, search, aggregation and sorting over
//! generated record sets.

use std::collections::BTreeMap;

use benchbook_benchmarks::{
    aggregate, filter, search, sort_records, FilterSpec, SortKey, SortOrder, SortSpec,
};
use benchbook_core::{BenchmarkFields, BenchmarkResult, Direction, Field};
use proptest::prelude::*;

const BENCHMARKS: [&str; 4] = ["Cyberpunk 2077", "Cinebench R23", "Alan Wake 2", "alan wake 2"];
const GPUS: [&str; 4] = ["NVIDIA RTX 4090", "NVIDIA RTX 4080", "AMD RX 7900 XTX", "N/A"];
const QUALITIES: [&str; 3] = ["High", "Ultra", "Medium"];

fn arb_fields() -> impl Strategy<Value = BenchmarkFields> {
    (
        prop::sample::select(BENCHMARKS.to_vec()),
        prop::sample::select(GPUS.to_vec()),
        prop::sample::select(QUALITIES.to_vec()),
        0u32..10_000_000,
        any::<bool>(),
    )
        .prop_map(|(benchmark, gpu, quality, cents, higher)| BenchmarkFields {
            benchmark: benchmark.to_string(),
            gpu: gpu.to_string(),
            cpu: "AMD Ryzen 7 7800X3D".to_string(),
            resolution: "3840x2160 (4K)".to_string(),
            quality: quality.to_string(),
            ray_tracing: "Off".to_string(),
            upscaling: "DLSS Quality".to_string(),
            anti_aliasing: "TAA".to_string(),
            result: f64::from(cents) / 100.0,
            tip: if higher { "Avg. FPS" } else { "Seconds" }.to_string(),
            direction: if higher {
                Direction::HigherIsBetter
            } else {
                Direction::LowerIsBetter
            },
        })
}

fn arb_records() -> impl Strategy<Value = Vec<BenchmarkResult>> {
    prop::collection::vec(arb_fields(), 0..24).prop_map(|fields| {
        fields
            .into_iter()
            .enumerate()
            .map(|(i, fields)| BenchmarkResult::new((i + 1).to_string(), fields, None))
            .collect()
    })
}

/// Raw constraint maps, including empty desired values.
fn arb_constraints() -> impl Strategy<Value = BTreeMap<Field, String>> {
    prop::collection::btree_map(
        prop::sample::select(vec![Field::Benchmark, Field::Gpu, Field::Quality, Field::Cpu]),
        prop::sample::select(vec![
            "",
            "High",
            "Ultra",
            "NVIDIA RTX 4090",
            "N/A",
            "Alan Wake 2",
            "Cyberpunk 2077",
            "AMD Ryzen 7 7800X3D",
        ]),
        0..4,
    )
    .prop_map(|constraints| {
        constraints
            .into_iter()
            .map(|(field, value)| (field, value.to_string()))
            .collect()
    })
}

fn arb_term() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "", "  ", "rtx", "4090", "CYBER", "alan", " wake ", "n/a", "fps", "seconds", "xtx", "4k",
        ".5", "zzz",
    ])
    .prop_map(str::to_string)
}

fn ids(records: &[&BenchmarkResult]) -> Vec<String> {
    records.iter().map(|record| record.id.clone()).collect()
}

fn searchable(record: &BenchmarkResult) -> Vec<String> {
    let f = &record.fields;
    [
        &f.benchmark,
        &f.gpu,
        &f.cpu,
        &f.resolution,
        &f.quality,
        &f.ray_tracing,
        &f.upscaling,
        &f.anti_aliasing,
        &f.tip,
    ]
    .iter()
    .map(|text| text.to_lowercase())
    .chain(std::iter::once(f.result.to_string()))
    .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn filter_keeps_exactly_the_matching_records(
        records in arb_records(),
        constraints in arb_constraints(),
    ) {
        let json = serde_json::to_value(&constraints).unwrap();
        let spec: FilterSpec = serde_json::from_value(json).unwrap();

        let expected: Vec<String> = records
            .iter()
            .filter(|record| {
                constraints
                    .iter()
                    .all(|(field, value)| value.is_empty() || record.get(*field) == value)
            })
            .map(|record| record.id.clone())
            .collect();

        let hits = filter(&records, &spec);
        prop_assert_eq!(ids(&hits), expected);
        for hit in &hits {
            for (field, value) in spec.constraints() {
                prop_assert_eq!(hit.get(field), value);
            }
        }
    }

    #[test]
    fn empty_filter_returns_everything(records in arb_records()) {
        let hits = filter(&records, &FilterSpec::new());
        prop_assert_eq!(hits.len(), records.len());
        prop_assert!(hits.iter().zip(&records).all(|(hit, record)| hit.id == record.id));
    }

    #[test]
    fn search_hits_contain_the_term(records in arb_records(), term in arb_term()) {
        let needle = term.trim().to_lowercase();
        let expected: Vec<String> = records
            .iter()
            .filter(|record| {
                needle.is_empty() || searchable(record).iter().any(|text| text.contains(&needle))
            })
            .map(|record| record.id.clone())
            .collect();

        prop_assert_eq!(ids(&search(&records, &term)), expected);
    }

    #[test]
    fn aggregate_is_bounded(records in arb_records()) {
        let summary = aggregate(&records);
        prop_assert_eq!(summary.count, records.len());
        if records.is_empty() {
            prop_assert_eq!(summary.mean, 0.0);
            prop_assert!(summary.gpu_comparison.is_empty());
        } else {
            prop_assert!(summary.min <= summary.mean + 1e-6);
            prop_assert!(summary.mean <= summary.max + 1e-6);
        }

        for ranking in [&summary.gpu_comparison, &summary.benchmark_comparison] {
            prop_assert_eq!(ranking.iter().map(|group| group.count).sum::<usize>(), records.len());
            prop_assert!(ranking.windows(2).all(|pair| pair[0].mean >= pair[1].mean));
        }
    }

    #[test]
    fn sort_is_a_permutation(records in arb_records()) {
        let mut view: Vec<&BenchmarkResult> = records.iter().collect();
        sort_records(&mut view, SortSpec::new(SortKey::Result, SortOrder::Descending));

        prop_assert_eq!(view.len(), records.len());
        prop_assert!(view.windows(2).all(|pair| pair[0].fields.result >= pair[1].fields.result));
        let mut sorted_ids = ids(&view);
        sorted_ids.sort();
        let mut base_ids: Vec<String> = records.iter().map(|record| record.id.clone()).collect();
        base_ids.sort();
        prop_assert_eq!(sorted_ids, base_ids);
    }
}
