// Copyright 2026 Benchbook Contributors
// SPDX-License-Identifier: Apache-2.0

//! CLI for Benchbook.
//!
//! Works against a running benchmarks API (`--api-url`) or, without one, a
//! local JSON data file (`--data-file`). Either way the commands go through
//! the same [`Workbench`], so listing, filtering, statistics and comparison
//! behave identically for both stores.

#![warn(rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod output;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context};
use benchbook_benchmarks::{
    comparison_series, markdown, FilterSpec, SortKey, SortOrder, SortSpec,
};
use benchbook_core::vocab::sample_records;
use benchbook_core::{
    BenchmarkFields, BenchmarkResult, Direction, Field, StoredRow, NOT_AVAILABLE,
};
use benchbook_sdk::{ApiClient, Workbench};
use benchbook_storage::file::DEFAULT_DATA_FILE;
use benchbook_storage::{LocalStore, RecordStore};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use tracing::debug;

/// Benchbook CLI.
#[derive(Parser, Debug)]
#[command(name = "benchbook")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Base URL of a benchmarks API; takes precedence over --data-file.
    #[arg(long, env = "BENCHBOOK_API_URL", global = true)]
    pub api_url: Option<String>,

    /// Local JSON data file.
    #[arg(long, env = "BENCHBOOK_DATA_FILE", default_value = DEFAULT_DATA_FILE, global = true)]
    pub data_file: PathBuf,

    /// Seed an empty local data file with the sample results.
    #[arg(long, global = true)]
    pub sample_data: bool,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Commands,
}

/// Which records a command looks at.
#[derive(Args, Debug, Clone, Default)]
pub struct ViewArgs {
    /// Exact-match constraint, repeatable: `--where gpu="NVIDIA RTX 4090"`.
    #[arg(short = 'w', long = "where", value_name = "FIELD=VALUE")]
    pub constraints: Vec<String>,

    /// Case-insensitive free-text search; replaces --where.
    #[arg(short, long)]
    pub search: Option<String>,
}

/// Field values of a benchmark result.
#[derive(Args, Debug, Clone)]
pub struct RecordArgs {
    #[arg(long)]
    pub benchmark: String,
    #[arg(long, default_value = NOT_AVAILABLE)]
    pub gpu: String,
    #[arg(long, default_value = NOT_AVAILABLE)]
    pub cpu: String,
    #[arg(long, default_value = NOT_AVAILABLE)]
    pub resolution: String,
    #[arg(long, default_value = NOT_AVAILABLE)]
    pub quality: String,
    #[arg(long, default_value = NOT_AVAILABLE)]
    pub ray_tracing: String,
    #[arg(long, default_value = NOT_AVAILABLE)]
    pub upscaling: String,
    #[arg(long, default_value = NOT_AVAILABLE)]
    pub anti_aliasing: String,
    /// Measured value.
    #[arg(long)]
    pub result: f64,
    /// What the result measures.
    #[arg(long, default_value = "Avg. FPS")]
    pub tip: String,
    /// Smaller results are better (times, latencies).
    #[arg(long)]
    pub lower_is_better: bool,
}

impl From<RecordArgs> for BenchmarkFields {
    fn from(args: RecordArgs) -> Self {
        Self {
            benchmark: args.benchmark,
            gpu: args.gpu,
            cpu: args.cpu,
            resolution: args.resolution,
            quality: args.quality,
            ray_tracing: args.ray_tracing,
            upscaling: args.upscaling,
            anti_aliasing: args.anti_aliasing,
            result: args.result,
            tip: args.tip,
            direction: if args.lower_is_better {
                Direction::LowerIsBetter
            } else {
                Direction::HigherIsBetter
            },
        }
    }
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List benchmark results.
    List {
        #[command(flatten)]
        view: ViewArgs,

        /// Column to sort by: benchmark, gpu, cpu or result.
        #[arg(long, default_value = "result")]
        sort: SortKey,

        /// Sort ascending instead of descending.
        #[arg(long)]
        ascending: bool,

        /// Print the rows as JSON instead of a table.
        #[arg(long)]
        json: bool,
    },

    /// Record a new benchmark result.
    Add(RecordArgs),

    /// Replace every field of an existing result.
    Update {
        /// Result identifier.
        id: String,

        #[command(flatten)]
        record: RecordArgs,
    },

    /// Delete a result.
    Delete {
        /// Result identifier.
        id: String,
    },

    /// Show mean/max/min and rankings for the selected results.
    Stats {
        #[command(flatten)]
        view: ViewArgs,
    },

    /// Compare two or three results side by side.
    Compare {
        /// Result identifiers, in display order.
        #[arg(num_args = 2..=3, required = true)]
        ids: Vec<String>,
    },

    /// Write a Markdown report of the selected results.
    Report {
        #[command(flatten)]
        view: ViewArgs,

        /// Compare these results instead of summarizing the view.
        #[arg(long, num_args = 2..=3)]
        compare: Vec<String>,

        /// Output file (stdout when omitted).
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show the values offered for each field.
    Options {
        /// Only this field.
        #[arg(long)]
        field: Option<Field>,

        /// Values present in the stored results instead of the entry-form list.
        #[arg(long)]
        present: bool,
    },

    /// Dump every result as a JSON array of rows.
    Export {
        /// Output file (stdout when omitted).
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Open the store selected by the global flags.
pub async fn open_store(cli: &Cli) -> anyhow::Result<Arc<dyn RecordStore>> {
    if let Some(url) = &cli.api_url {
        debug!(url, "Using remote store");
        return Ok(Arc::new(ApiClient::new(url.as_str())?));
    }

    let store = if cli.sample_data {
        LocalStore::open_or_seed(&cli.data_file, sample_records).await
    } else {
        LocalStore::open(&cli.data_file).await
    }
    .with_context(|| format!("opening {}", cli.data_file.display()))?;
    Ok(Arc::new(store))
}

fn apply_view<S: RecordStore>(bench: &mut Workbench<S>, view: &ViewArgs) -> anyhow::Result<()> {
    bench.apply_filter(FilterSpec::from_expressions(&view.constraints)?);
    if let Some(term) = &view.search {
        bench.apply_search(term);
    }
    Ok(())
}

fn select_for_comparison<S: RecordStore>(
    bench: &mut Workbench<S>,
    ids: &[String],
) -> anyhow::Result<()> {
    bench.clear_selection();
    for id in ids {
        if !bench.records().iter().any(|record| &record.id == id) {
            bail!("no benchmark result with id {}", id);
        }
        bench.toggle_selection(id);
    }
    Ok(())
}

fn write_output(output: Option<&PathBuf>, content: &str) -> anyhow::Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("writing {}", path.display()))?;
            println!("{} {}", "Wrote".green(), path.display());
        }
        None => println!("{}", content),
    }
    Ok(())
}

fn rows(records: &[&BenchmarkResult]) -> anyhow::Result<Vec<StoredRow>> {
    Ok(records
        .iter()
        .map(|record| StoredRow::from_record(record))
        .collect::<Result<_, _>>()?)
}

/// Run the CLI with the given arguments.
///
/// # Returns
///
/// Returns `Ok(())` on success, or an error if the command fails.
pub async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let store = open_store(&cli).await?;
    let mut bench = Workbench::new(store);
    bench
        .load()
        .await
        .with_context(|| format!("loading benchmarks from the {} store", bench.store().backend()))?;

    match cli.command {
        Commands::List {
            view,
            sort,
            ascending,
            json,
        } => {
            apply_view(&mut bench, &view)?;
            let order = if ascending {
                SortOrder::Ascending
            } else {
                SortOrder::Descending
            };
            bench.set_sort(SortSpec::new(sort, order));
            let visible = bench.visible();
            if json {
                println!("{}", serde_json::to_string_pretty(&rows(&visible)?)?);
            } else {
                output::print_table(&visible);
            }
        }
        Commands::Add(record) => {
            let created = bench.create(record.into()).await?;
            println!("{} result {}", "Created".green(), created.id.bold());
        }
        Commands::Update { id, record } => {
            let updated = bench.update(&id, record.into()).await?;
            println!("{} result {}", "Updated".green(), updated.id.bold());
        }
        Commands::Delete { id } => {
            let removed = bench.remove(&id).await?;
            println!(
                "{} result {} ({} on {})",
                "Deleted".green(),
                removed.id.bold(),
                removed.fields.benchmark,
                removed.fields.gpu
            );
        }
        Commands::Stats { view } => {
            apply_view(&mut bench, &view)?;
            output::print_summary(&bench.summary());
        }
        Commands::Compare { ids } => {
            select_for_comparison(&mut bench, &ids)?;
            let records = bench.comparison()?;
            output::print_comparison(&records, &comparison_series(records.iter().copied()));
        }
        Commands::Report {
            view,
            compare,
            output,
        } => {
            let report = if compare.is_empty() {
                apply_view(&mut bench, &view)?;
                markdown::generate_summary(&bench.visible(), &bench.summary())
            } else {
                select_for_comparison(&mut bench, &compare)?;
                markdown::generate_comparison(&bench.comparison()?)
            };
            write_output(output.as_ref(), &report)?;
        }
        Commands::Options { field, present } => {
            let registry = if present {
                bench.filter_options()
            } else {
                bench.registry().clone()
            };
            match field {
                Some(field) => {
                    for value in registry.options(field) {
                        println!("{}", value);
                    }
                }
                None => output::print_options(&registry),
            }
        }
        Commands::Export { output } => {
            let all: Vec<&BenchmarkResult> = bench.records().iter().collect();
            let json = serde_json::to_string_pretty(&rows(&all)?)?;
            write_output(output.as_ref(), &json)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_list_with_constraints() {
        let cli = Cli::try_parse_from([
            "benchbook",
            "--data-file",
            "/tmp/bench.json",
            "list",
            "--where",
            "gpu=NVIDIA RTX 4090",
            "-w",
            "resolution=3840x2160 (4K)",
            "--sort",
            "gpu",
        ])
        .unwrap();

        assert_eq!(cli.data_file, PathBuf::from("/tmp/bench.json"));
        match cli.command {
            Commands::List { view, sort, .. } => {
                assert_eq!(view.constraints.len(), 2);
                assert_eq!(sort, SortKey::Gpu);
                let spec = FilterSpec::from_expressions(&view.constraints).unwrap();
                assert_eq!(spec.get(Field::Gpu), Some("NVIDIA RTX 4090"));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_parse_add_defaults() {
        let cli = Cli::try_parse_from([
            "benchbook",
            "add",
            "--benchmark",
            "Windows boot time",
            "--result",
            "11.8",
            "--tip",
            "Seconds",
            "--lower-is-better",
        ])
        .unwrap();

        match cli.command {
            Commands::Add(record) => {
                let fields = BenchmarkFields::from(record);
                assert_eq!(fields.gpu, NOT_AVAILABLE);
                assert_eq!(fields.direction, Direction::LowerIsBetter);
                assert!(fields.validate().is_ok());
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_compare_needs_two_ids() {
        assert!(Cli::try_parse_from(["benchbook", "compare", "1"]).is_err());
        assert!(Cli::try_parse_from(["benchbook", "compare", "1", "2", "3", "4"]).is_err());
        assert!(Cli::try_parse_from(["benchbook", "compare", "1", "2"]).is_ok());
    }

    #[tokio::test]
    async fn test_view_args_drive_workbench() {
        let store = LocalStore::with_records(sample_records()).unwrap();
        let mut bench = Workbench::new(store);
        bench.load().await.unwrap();

        let view = ViewArgs {
            constraints: vec!["benchmark=Cinebench R23".to_string()],
            search: None,
        };
        apply_view(&mut bench, &view).unwrap();
        assert_eq!(bench.visible().len(), 2);

        let bad = ViewArgs {
            constraints: vec!["fps=100".to_string()],
            search: None,
        };
        assert!(apply_view(&mut bench, &bad).is_err());
    }

    #[tokio::test]
    async fn test_select_for_comparison_rejects_unknown_ids() {
        let store = LocalStore::with_records(sample_records()).unwrap();
        let mut bench = Workbench::new(store);
        bench.load().await.unwrap();

        select_for_comparison(&mut bench, &["1".to_string(), "2".to_string()]).unwrap();
        assert_eq!(bench.comparison().unwrap().len(), 2);
        assert!(select_for_comparison(&mut bench, &["1".to_string(), "99".to_string()]).is_err());
    }
}
