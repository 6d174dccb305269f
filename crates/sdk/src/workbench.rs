// Copyright 2026 Benchbook Contributors
// SPDX-License-Identifier: Apache-2.0

//! Client-side workbench state over a [`RecordStore`].
//!
//! The workbench holds what a results UI shows: the full record set, the
//! option registry that feeds the entry form, the current filter or search,
//! the table ordering and the comparison selection. Store calls happen first;
//! local state changes only once a call has succeeded.

use benchbook_benchmarks::{
    aggregate, chart_series, comparison_series, sort_records, ChartBar, ComparisonSelection,
    FilterSpec, SortKey, SortSpec, Summary, View, ViewState,
};
use benchbook_core::{
    derive_options, BenchmarkFields, BenchmarkResult, Field, OptionRegistry, Result,
};
use benchbook_storage::RecordStore;
use tracing::{debug, info};

/// Records, options, view and selection over one store.
#[derive(Debug)]
pub struct Workbench<S> {
    store: S,
    records: Vec<BenchmarkResult>,
    registry: OptionRegistry,
    view: ViewState,
    sort: SortSpec,
    selection: ComparisonSelection,
    loading: bool,
}

impl<S: RecordStore> Workbench<S> {
    /// Empty workbench with the seeded option registry.
    pub fn new(store: S) -> Self {
        Self::with_registry(store, OptionRegistry::seeded())
    }

    pub fn with_registry(store: S, registry: OptionRegistry) -> Self {
        Self {
            store,
            records: Vec::new(),
            registry,
            view: ViewState::new(),
            sort: SortSpec::default(),
            selection: ComparisonSelection::new(),
            loading: false,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Full record set, in store order.
    pub fn records(&self) -> &[BenchmarkResult] {
        &self.records
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Replace the record set with the store's contents.
    ///
    /// Values found in the loaded records are merged into the registry, and
    /// selected ids that no longer exist are dropped. Returns the record count.
    pub async fn load(&mut self) -> Result<usize> {
        self.loading = true;
        let listed = self.store.list().await;
        self.loading = false;

        let records = listed?;
        self.registry.merge(&derive_options(&records));
        let stale: Vec<String> = self
            .selection
            .ids()
            .iter()
            .filter(|id| !records.iter().any(|record| &record.id == *id))
            .cloned()
            .collect();
        for id in &stale {
            self.selection.deselect(id);
        }

        self.records = records;
        info!(
            backend = self.store.backend(),
            count = self.records.len(),
            "Benchmarks loaded"
        );
        Ok(self.records.len())
    }

    /// Store a new record and append it.
    pub async fn create(&mut self, fields: BenchmarkFields) -> Result<BenchmarkResult> {
        let created = self.store.create(fields).await?;
        self.registry.observe(&created.fields);
        self.records.push(created.clone());
        info!(id = %created.id, benchmark = %created.fields.benchmark, "Benchmark created");
        Ok(created)
    }

    /// Replace record `id` in the store and in place.
    pub async fn update(&mut self, id: &str, fields: BenchmarkFields) -> Result<BenchmarkResult> {
        let updated = self.store.update(id, fields).await?;
        self.registry.observe(&updated.fields);
        match self.records.iter_mut().find(|record| record.id == updated.id) {
            Some(slot) => *slot = updated.clone(),
            None => self.records.push(updated.clone()),
        }
        info!(id = %updated.id, "Benchmark updated");
        Ok(updated)
    }

    /// Delete record `id`, dropping it from the set and the selection.
    pub async fn remove(&mut self, id: &str) -> Result<BenchmarkResult> {
        let removed = self.store.remove(id).await?;
        self.records.retain(|record| record.id != removed.id);
        self.selection.deselect(&removed.id);
        info!(id = %removed.id, "Benchmark removed");
        Ok(removed)
    }

    /// Show the records matching `spec`, replacing any search.
    pub fn apply_filter(&mut self, spec: FilterSpec) {
        debug!(constraints = spec.constraints().count(), "Filter applied");
        self.view.apply_filter(spec);
    }

    pub fn reset_filter(&mut self) {
        self.view.reset();
    }

    /// Show the records containing `term`; a blank term restores the last filter.
    pub fn apply_search(&mut self, term: &str) {
        self.view.apply_search(term);
    }

    pub fn view(&self) -> View {
        self.view.view()
    }

    pub fn sort(&self) -> SortSpec {
        self.sort
    }

    pub fn set_sort(&mut self, sort: SortSpec) {
        self.sort = sort;
    }

    /// Header click on `key`.
    pub fn toggle_sort(&mut self, key: SortKey) {
        self.sort = self.sort.toggle(key);
    }

    /// The current view, ordered by the sort spec.
    pub fn visible(&self) -> Vec<&BenchmarkResult> {
        let mut visible = self.view.select(&self.records);
        sort_records(&mut visible, self.sort);
        visible
    }

    /// Aggregates of the current view.
    pub fn summary(&self) -> Summary {
        aggregate(self.visible())
    }

    /// Bars for the selected records in selection order, or for the head of
    /// the current view when nothing is selected.
    pub fn chart(&self) -> Vec<ChartBar> {
        if self.selection.is_empty() {
            return chart_series(self.visible());
        }
        comparison_series(
            self.selection
                .ids()
                .iter()
                .filter_map(|id| self.records.iter().find(|record| &record.id == id)),
        )
    }

    /// Toggle `id` in the comparison selection. Returns whether it is selected.
    pub fn toggle_selection(&mut self, id: &str) -> bool {
        self.selection.toggle(id)
    }

    pub fn selection(&self) -> &ComparisonSelection {
        &self.selection
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Selected records in selection order.
    ///
    /// # Errors
    ///
    /// Validation error when fewer than two records are selected.
    pub fn comparison(&self) -> Result<Vec<&BenchmarkResult>> {
        self.selection.resolve(&self.records)
    }

    /// Filter-form options: distinct values of the loaded records.
    pub fn filter_options(&self) -> OptionRegistry {
        derive_options(&self.records)
    }

    /// Entry-form options.
    pub fn registry(&self) -> &OptionRegistry {
        &self.registry
    }

    /// Offer `value` for `field` in the entry form.
    pub fn add_option(&mut self, field: Field, value: &str) -> &[String] {
        self.registry.add_option(field, value)
    }
}
