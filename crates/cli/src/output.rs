// Copyright 2026 Benchbook Contributors
// SPDX-License-Identifier: Apache-2.0

//! Terminal rendering for CLI commands.

use benchbook_benchmarks::{ChartBar, GroupMean, Summary};
use benchbook_core::{BenchmarkResult, OptionRegistry};
use colored::Colorize;
use comfy_table::{CellAlignment, ContentArrangement, Table};

const HEADERS: [&str; 6] = ["ID", "Benchmark", "GPU", "CPU", "Settings", "Result"];
const BAR_WIDTH: usize = 40;

/// Result cell, e.g. `118.5 FPS ↑`.
pub fn result_cell(record: &BenchmarkResult) -> String {
    let arrow = if record.fields.direction.higher_is_better() {
        "↑"
    } else {
        "↓"
    };
    format!("{} {} {}", record.fields.result, record.unit(), arrow)
}

/// Results table, one row per record.
pub fn results_table(records: &[&BenchmarkResult]) -> Table {
    let mut table = Table::new();
    table
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(HEADERS);
    for record in records {
        let fields = &record.fields;
        table.add_row([
            record.id.clone(),
            fields.benchmark.clone(),
            fields.gpu.clone(),
            fields.cpu.clone(),
            format!("{}, {}", fields.resolution, fields.quality),
            result_cell(record),
        ]);
    }
    if let Some(column) = table.column_mut(HEADERS.len() - 1) {
        column.set_cell_alignment(CellAlignment::Right);
    }
    table
}

pub fn print_table(records: &[&BenchmarkResult]) {
    if records.is_empty() {
        println!("{}", "No benchmark results match.".yellow());
        return;
    }
    println!("{}", results_table(records));
    println!("{} result(s)", records.len().to_string().cyan());
}

fn print_ranking(title: &str, groups: &[GroupMean]) {
    if groups.is_empty() {
        return;
    }
    println!();
    println!("{}", title.bold().underline());
    for (rank, group) in groups.iter().enumerate() {
        println!(
            "  {}. {}  {:.2} ({} run{})",
            rank + 1,
            group.key,
            group.mean,
            group.count,
            if group.count == 1 { "" } else { "s" }
        );
    }
}

pub fn print_summary(summary: &Summary) {
    println!("{}", "Benchmark Summary".bold().underline());
    println!("{}  {}", "Results:".cyan(), summary.count);
    println!("{}  {:.2}", "Average:".cyan(), summary.mean);
    println!("{}  {:.2}", "Highest:".cyan(), summary.max);
    println!("{}  {:.2}", "Lowest: ".cyan(), summary.min);
    print_ranking("By GPU", &summary.gpu_comparison);
    print_ranking("By Benchmark", &summary.benchmark_comparison);
}

/// One text bar per chart entry, scaled to the largest magnitude.
pub fn bar_lines(bars: &[ChartBar]) -> Vec<String> {
    let largest = bars.iter().map(|bar| bar.magnitude).fold(0.0, f64::max);
    let label_width = bars
        .iter()
        .map(|bar| bar.label.chars().count())
        .max()
        .unwrap_or(0);

    bars.iter()
        .map(|bar| {
            let length = if largest > 0.0 {
                ((bar.magnitude / largest) * BAR_WIDTH as f64).round() as usize
            } else {
                0
            };
            format!(
                "{:<width$}  {} {} {}",
                bar.label,
                "#".repeat(length.max(1)),
                bar.magnitude,
                bar.unit,
                width = label_width
            )
        })
        .collect()
}

pub fn print_comparison(records: &[&BenchmarkResult], bars: &[ChartBar]) {
    println!("{}", "Comparison".bold().underline());
    for (record, bar) in records.iter().zip(bars) {
        println!();
        println!("{}", bar.label.bold());
        for line in bar.tooltip(record) {
            println!("  {}", line);
        }
    }
    println!();
    for line in bar_lines(bars) {
        println!("{}", line);
    }
}

pub fn print_options(registry: &OptionRegistry) {
    for (field, values) in registry.iter() {
        println!("{}", field.to_string().bold());
        for value in values {
            println!("  {}", value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use benchbook_benchmarks::chart_series;
    use benchbook_core::vocab::sample_records;

    #[test]
    fn test_results_table_rows() {
        let records = sample_records();
        let view: Vec<&BenchmarkResult> = records.iter().take(3).collect();
        let lines: Vec<String> = results_table(&view).lines().collect();

        let header = lines.iter().position(|line| line.contains("Benchmark")).unwrap();
        assert!(lines[header].contains("Result"));
        let rows: Vec<&String> = lines.iter().filter(|line| line.contains("FPS ↑")).collect();
        assert_eq!(rows.len(), 3);
        assert!(rows[0].contains("118.5 FPS ↑"));
        assert!(rows[0].contains("3840x2160 (4K), Ultra"));
        assert!(rows.iter().all(|row| row.contains("Cyberpunk 2077")));
    }

    #[test]
    fn test_result_cell_marks_direction() {
        let records = sample_records();
        let boot = records.iter().find(|r| r.id == "10").unwrap();
        assert_eq!(result_cell(boot), "12.3 s ↓");
    }

    #[test]
    fn test_bars_scale_to_largest() {
        let records = sample_records();
        let bars = chart_series(records.iter().take(3));
        let lines = bar_lines(&bars);
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains(&"#".repeat(BAR_WIDTH)));
        assert!(!lines[1].contains(&"#".repeat(BAR_WIDTH)));
    }
}
