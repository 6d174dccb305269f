// Copyright 2026 Benchbook Contributors
// SPDX-License-Identifier: Apache-2.0

//! Filtering and free-text search over the full record set.
//!
//! Both operations borrow the base set and return the matching subset in the
//! base order. They never mutate their input. Filter and search are two
//! mutually exclusive views over the same base set; [`ViewState`] tracks which
//! one is active.

use std::collections::BTreeMap;

use benchbook_core::{BenchmarkResult, Error, Field, Result};
use serde::{Deserialize, Serialize};

/// Exact-match constraints keyed by field.
///
/// A field that is absent, or whose desired value is empty, matches anything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    from = "BTreeMap<Field, String>",
    into = "BTreeMap<Field, String>"
)]
pub struct FilterSpec {
    constraints: BTreeMap<Field, String>,
}

impl From<BTreeMap<Field, String>> for FilterSpec {
    fn from(constraints: BTreeMap<Field, String>) -> Self {
        let mut spec = Self::new();
        for (field, value) in constraints {
            spec.set(field, value);
        }
        spec
    }
}

impl From<FilterSpec> for BTreeMap<Field, String> {
    fn from(spec: FilterSpec) -> Self {
        spec.constraints
    }
}

impl FilterSpec {
    /// A spec that matches every record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`FilterSpec::set`].
    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Constrain `field` to `value`. An empty value clears the constraint.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        if value.is_empty() {
            self.constraints.remove(&field);
        } else {
            self.constraints.insert(field, value);
        }
    }

    /// Desired value for `field`, if constrained.
    pub fn get(&self, field: Field) -> Option<&str> {
        self.constraints.get(&field).map(String::as_str)
    }

    /// Whether the spec has no constraints.
    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }

    /// Iterate over the active constraints.
    pub fn constraints(&self) -> impl Iterator<Item = (Field, &str)> {
        self.constraints
            .iter()
            .map(|(field, value)| (*field, value.as_str()))
    }

    /// Whether `record` satisfies every constraint (case-sensitive equality).
    pub fn matches(&self, record: &BenchmarkResult) -> bool {
        self.constraints
            .iter()
            .all(|(field, value)| record.get(*field) == value)
    }

    /// Build a spec from `field=value` expressions.
    pub fn from_expressions<I, S>(expressions: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut spec = Self::new();
        for expression in expressions {
            let (field, value) = parse_constraint(expression.as_ref())?;
            spec.set(field, value);
        }
        Ok(spec)
    }
}

/// Parse a `field=value` expression, e.g. `gpu=NVIDIA RTX 4090`.
pub fn parse_constraint(expression: &str) -> Result<(Field, String)> {
    let (field, value) = expression.split_once('=').ok_or_else(|| {
        Error::validation(format!("expected field=value, got '{}'", expression))
    })?;
    Ok((field.trim().parse()?, value.to_string()))
}

/// Records satisfying every constraint of `spec`. An empty spec returns the
/// whole set.
pub fn filter<'a>(records: &'a [BenchmarkResult], spec: &FilterSpec) -> Vec<&'a BenchmarkResult> {
    records.iter().filter(|record| spec.matches(record)).collect()
}

/// Records containing `term` (case-insensitive) in any searchable field.
///
/// Searched: the eight textual fields, the measurement label, and the decimal
/// rendering of the result. The term is trimmed first; an empty term matches
/// every record.
pub fn search<'a>(records: &'a [BenchmarkResult], term: &str) -> Vec<&'a BenchmarkResult> {
    let needle = term.trim().to_lowercase();
    records
        .iter()
        .filter(|record| contains_term(record, &needle))
        .collect()
}

/// Whether `record` contains the already-lowercased `needle`.
pub fn contains_term(record: &BenchmarkResult, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    Field::ALL
        .into_iter()
        .map(|field| record.get(field))
        .chain(std::iter::once(record.fields.tip.as_str()))
        .any(|text| text.to_lowercase().contains(needle))
        || record.fields.result_text().contains(needle)
}

/// The active view over the base set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", content = "value", rename_all = "snake_case")]
pub enum View {
    /// Exact-match filter.
    Filter(FilterSpec),
    /// Free-text search with a non-blank term.
    Search(String),
}

impl Default for View {
    fn default() -> Self {
        View::Filter(FilterSpec::default())
    }
}

impl View {
    /// Apply this view to the base set.
    pub fn apply<'a>(&self, records: &'a [BenchmarkResult]) -> Vec<&'a BenchmarkResult> {
        match self {
            View::Filter(spec) => filter(records, spec),
            View::Search(term) => search(records, term),
        }
    }
}

/// Tracks the last filter and whether a search replaces it.
///
/// A blank search falls back to re-applying the last filter; filter and
/// search never compose.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    last_filter: FilterSpec,
    search: Option<String>,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Switch to filter mode with `spec`, remembering it.
    pub fn apply_filter(&mut self, spec: FilterSpec) {
        self.last_filter = spec;
        self.search = None;
    }

    /// Clear the filter and any search.
    pub fn reset(&mut self) {
        self.apply_filter(FilterSpec::new());
    }

    /// Switch to search mode, or back to the last filter for a blank term.
    pub fn apply_search(&mut self, term: &str) {
        let term = term.trim();
        self.search = if term.is_empty() {
            None
        } else {
            Some(term.to_string())
        };
    }

    pub fn last_filter(&self) -> &FilterSpec {
        &self.last_filter
    }

    /// The view currently in effect.
    pub fn view(&self) -> View {
        match &self.search {
            Some(term) => View::Search(term.clone()),
            None => View::Filter(self.last_filter.clone()),
        }
    }

    /// Apply the current view to the base set.
    pub fn select<'a>(&self, records: &'a [BenchmarkResult]) -> Vec<&'a BenchmarkResult> {
        match &self.search {
            Some(term) => search(records, term),
            None => filter(records, &self.last_filter),
        }
    }
}
