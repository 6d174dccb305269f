// Copyright 2026 Benchbook Contributors
// SPDX-License-Identifier: Apache-2.0

//! Query engine for Benchbook benchmark results.
//!
//! Every operation here is a synchronous, pure function over an in-memory
//! record set: nothing suspends and nothing mutates the base set.
//!
//! # Quick Start
//!
//! ```
//! use benchbook_benchmarks::{aggregate, filter, FilterSpec};
//! use benchbook_core::{vocab::sample_records, Field};
//!
//! let records = sample_records();
//! let spec = FilterSpec::new().with(Field::Gpu, "NVIDIA RTX 4090");
//! let view = filter(&records, &spec);
//! let summary = aggregate(view.iter().copied());
//!
//! assert_eq!(summary.count, 4);
//! ```
//!
//! # Modules
//!
//! - [`query`] - exact-match filtering, free-text search, view state
//! - [`stats`] - mean/max/min and per-GPU / per-benchmark rankings
//! - [`comparison`] - the bounded comparison selection
//! - [`sort`] - table ordering
//! - [`chart`] - bar-chart series
//! - [`markdown`] - Markdown report generation

#![warn(rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod chart;
pub mod comparison;
pub mod markdown;
pub mod query;
pub mod sort;
pub mod stats;

pub use chart::{chart_series, comparison_series, ChartBar};
pub use comparison::{ComparisonSelection, MAX_SELECTION, MIN_COMPARISON};
pub use query::{filter, search, FilterSpec, View, ViewState};
pub use sort::{sort_records, SortKey, SortOrder, SortSpec};
pub use stats::{aggregate, GroupMean, Summary};
