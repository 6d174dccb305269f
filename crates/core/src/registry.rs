// Copyright 2026 Benchbook Contributors
// SPDX-License-Identifier: Apache-2.0

//! Option Registry: the selectable values for each controlled field.
//!
//! A registry is an owned value. Whoever composes the entry form (or the API)
//! holds one and passes it by reference; there is no process-wide list. Each
//! set is kept sorted and only ever grows through [`OptionRegistry::add_option`].

use std::cmp::Ordering;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::record::{BenchmarkFields, BenchmarkResult, Field, NOT_AVAILABLE};
use crate::vocab;

/// Ordered option sets keyed by field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionRegistry {
    sets: BTreeMap<Field, Vec<String>>,
}

impl OptionRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding the seed vocabularies.
    pub fn seeded() -> Self {
        let mut registry = Self::new();
        for field in Field::ALL {
            for value in vocab::seed_values(field) {
                registry.insert(field, value);
            }
        }
        registry
    }

    /// Replace `field`'s set with `values`, sorted and deduplicated.
    pub fn with_options<I, S>(mut self, field: Field, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sets.remove(&field);
        for value in values {
            let value: String = value.into();
            self.insert(field, &value);
        }
        self
    }

    /// Return to the seeded state.
    pub fn reset(&mut self) {
        *self = Self::seeded();
    }

    /// Current options for `field`.
    pub fn options(&self, field: Field) -> &[String] {
        self.sets.get(&field).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether `value` is already offered for `field`.
    pub fn contains(&self, field: Field, value: &str) -> bool {
        self.options(field).iter().any(|v| v == value)
    }

    /// Add `value` to `field`'s set if absent and return the updated set.
    ///
    /// Idempotent. Blank values are ignored.
    pub fn add_option(&mut self, field: Field, value: &str) -> &[String] {
        self.insert(field, value);
        self.options(field)
    }

    /// Add every controlled value of a newly entered record.
    ///
    /// The `N/A` sentinel is not offered as a GPU or CPU.
    pub fn observe(&mut self, fields: &BenchmarkFields) {
        for field in Field::ALL {
            let value = fields.get(field);
            if matches!(field, Field::Gpu | Field::Cpu) && value == NOT_AVAILABLE {
                continue;
            }
            self.insert(field, value);
        }
    }

    /// Union `other` into this registry.
    pub fn merge(&mut self, other: &OptionRegistry) {
        for (field, values) in &other.sets {
            for value in values {
                self.insert(*field, value);
            }
        }
    }

    /// Iterate over every non-empty set.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &[String])> {
        self.sets.iter().map(|(field, values)| (*field, values.as_slice()))
    }

    fn insert(&mut self, field: Field, value: &str) {
        if value.trim().is_empty() {
            return;
        }
        let set = self.sets.entry(field).or_default();
        if let Err(position) = set.binary_search_by(|option| option_cmp(option, value)) {
            set.insert(position, value.to_string());
        }
    }
}

/// Filter-form option lists derived from the current record set.
///
/// Distinct values per field, sorted; `N/A` is left out of the GPU and CPU
/// lists. Recompute on every load instead of storing the result.
pub fn derive_options<'a, I>(records: I) -> OptionRegistry
where
    I: IntoIterator<Item = &'a BenchmarkResult>,
{
    let mut registry = OptionRegistry::new();
    for record in records {
        registry.observe(&record.fields);
    }
    registry
}

/// Case-insensitive ordering with a byte-order tiebreak.
///
/// Stands in for locale collation: "amd" and "AMD" sort together, and the
/// order is total so binary search stays valid.
pub fn option_cmp(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}
