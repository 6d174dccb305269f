// Copyright 2026 Benchbook Contributors
// SPDX-License-Identifier: Apache-2.0

//! Markdown output generation for benchmark results.
//!
//! This module renders a result view, its statistics and comparisons as
//! Markdown documents, e.g. for pasting into an issue or a forum post.

use benchbook_core::BenchmarkResult;

use crate::stats::{GroupMean, Summary};

/// Generate a markdown summary of a view and its statistics.
pub fn generate_summary(results: &[&BenchmarkResult], summary: &Summary) -> String {
    let mut lines = vec![
        "# Benchmark Summary".to_string(),
        String::new(),
        format!("Generated: {}", chrono::Utc::now().to_rfc3339()),
        String::new(),
        "## Results".to_string(),
        String::new(),
        "| Benchmark | GPU | CPU | Settings | Result | Better |".to_string(),
        "|-----------|-----|-----|----------|--------|--------|".to_string(),
    ];

    for result in results {
        let fields = &result.fields;
        lines.push(format!(
            "| {} | {} | {} | {} | {} {} | {} |",
            cell(&fields.benchmark),
            cell(&fields.gpu),
            cell(&fields.cpu),
            cell(&format!(
                "{}, {}, RT {}, {}, {}",
                fields.resolution,
                fields.quality,
                fields.ray_tracing,
                fields.upscaling,
                fields.anti_aliasing
            )),
            fields.result,
            result.unit(),
            if fields.direction.higher_is_better() { "higher" } else { "lower" },
        ));
    }

    lines.push(String::new());
    lines.push("## Statistics".to_string());
    lines.push(String::new());
    lines.push(format!("- Results: {}", summary.count));
    lines.push(format!("- Mean: {:.2}", summary.mean));
    lines.push(format!("- Max: {:.2}", summary.max));
    lines.push(format!("- Min: {:.2}", summary.min));

    push_ranking(&mut lines, "GPU Averages", "GPU", &summary.gpu_comparison);
    push_ranking(
        &mut lines,
        "Benchmark Averages",
        "Benchmark",
        &summary.benchmark_comparison,
    );

    lines.push(String::new());
    lines.push("---".to_string());
    lines.push(format!("Total results: {}", results.len()));
    lines.push(String::new());

    lines.join("\n")
}

/// Generate a side-by-side comparison table, one column per record.
pub fn generate_comparison(results: &[&BenchmarkResult]) -> String {
    let mut lines = vec!["# Benchmark Comparison".to_string(), String::new()];

    let mut header = "| Attribute |".to_string();
    let mut rule = "|-----------|".to_string();
    for result in results {
        header.push_str(&format!(
            " {} |",
            cell(&format!("{} - {}", result.fields.gpu, result.fields.benchmark))
        ));
        rule.push_str("------|");
    }
    lines.push(header);
    lines.push(rule);

    let rows: [(&str, fn(&BenchmarkResult) -> String); 11] = [
        ("Benchmark", |r| r.fields.benchmark.clone()),
        ("GPU", |r| r.fields.gpu.clone()),
        ("CPU", |r| r.fields.cpu.clone()),
        ("Resolution", |r| r.fields.resolution.clone()),
        ("Quality", |r| r.fields.quality.clone()),
        ("Ray Tracing", |r| r.fields.ray_tracing.clone()),
        ("Upscaling", |r| r.fields.upscaling.clone()),
        ("Anti-Aliasing", |r| r.fields.anti_aliasing.clone()),
        ("Result", |r| format!("{} {}", r.fields.result, r.unit())),
        ("Measurement", |r| r.fields.tip.clone()),
        ("Better", |r| {
            if r.fields.direction.higher_is_better() {
                "higher".to_string()
            } else {
                "lower".to_string()
            }
        }),
    ];

    for (name, value) in rows {
        let mut line = format!("| {} |", name);
        for result in results {
            line.push_str(&format!(" {} |", cell(&value(result))));
        }
        lines.push(line);
    }
    lines.push(String::new());

    lines.join("\n")
}

fn push_ranking(lines: &mut Vec<String>, title: &str, column: &str, ranking: &[GroupMean]) {
    lines.push(String::new());
    lines.push(format!("## {}", title));
    lines.push(String::new());
    if ranking.is_empty() {
        lines.push("No data.".to_string());
        return;
    }
    lines.push(format!("| {} | Mean | Results |", column));
    lines.push("|------|------|---------|".to_string());
    for group in ranking {
        lines.push(format!(
            "| {} | {:.2} | {} |",
            cell(&group.key),
            group.mean,
            group.count
        ));
    }
}

/// Escape pipes so a value cannot break the table.
fn cell(text: &str) -> String {
    text.replace('|', "\\|")
}
