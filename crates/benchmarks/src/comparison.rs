// Copyright 2026 Benchbook Contributors
// SPDX-License-Identifier: Apache-2.0

//! Side-by-side comparison selection.

use benchbook_core::{BenchmarkResult, Error, Result};
use serde::{Deserialize, Serialize};

/// Maximum number of records compared at once.
pub const MAX_SELECTION: usize = 3;

/// Minimum number of selected records needed to run a comparison.
pub const MIN_COMPARISON: usize = 2;

/// Up to [`MAX_SELECTION`] record identifiers, in selection order.
///
/// Independent of the filter/search state: a selected record stays selected
/// when it drops out of the current view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComparisonSelection {
    ids: Vec<String>,
}

impl ComparisonSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select `id`. Returns `false` when it was already selected or the
    /// selection is full; a full selection is left as is.
    pub fn select(&mut self, id: &str) -> bool {
        if self.contains(id) || self.ids.len() >= MAX_SELECTION {
            return false;
        }
        self.ids.push(id.to_string());
        true
    }

    /// Deselect `id`. Returns whether it was selected.
    pub fn deselect(&mut self, id: &str) -> bool {
        let before = self.ids.len();
        self.ids.retain(|selected| selected != id);
        self.ids.len() != before
    }

    /// Deselect `id` if selected, otherwise try to select it. Returns whether
    /// `id` is selected afterwards.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.deselect(id) {
            false
        } else {
            self.select(id)
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|selected| selected == id)
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.ids.len() >= MAX_SELECTION
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Whether enough records are selected to compare.
    pub fn can_compare(&self) -> bool {
        self.ids.len() >= MIN_COMPARISON
    }

    /// Resolve the selection against `records`, preserving selection order.
    ///
    /// Identifiers that no longer resolve are skipped.
    ///
    /// # Errors
    ///
    /// Returns a validation error when fewer than [`MIN_COMPARISON`]
    /// identifiers are selected.
    pub fn resolve<'a>(&self, records: &'a [BenchmarkResult]) -> Result<Vec<&'a BenchmarkResult>> {
        if !self.can_compare() {
            return Err(Error::validation(format!(
                "select at least {} results to compare, {} selected",
                MIN_COMPARISON,
                self.ids.len()
            )));
        }
        Ok(self
            .ids
            .iter()
            .filter_map(|id| records.iter().find(|record| &record.id == id))
            .collect())
    }
}

impl<S: Into<String>> FromIterator<S> for ComparisonSelection {
    /// Select each identifier in turn; anything past [`MAX_SELECTION`] is ignored.
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        let mut selection = Self::new();
        for id in iter {
            let id: String = id.into();
            selection.select(&id);
        }
        selection
    }
}
