use super::{Action, Applied};
use crate::filter::{apply_filters, FilterConfig, FilterPatch};
use crate::model::{NewRecord, Record};
use crate::sort::{sort_records, SortConfig, SortDirection, SortField};
use std::collections::HashMap;
use tracing::{debug, info};
use uuid::Uuid;

/// Owned dashboard state. See the [module docs](super) for the mutation model.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<Record>,
    filters: FilterConfig,
    search_query: String,
    sort: SortConfig,
    visible: Vec<Record>,
    selection: Vec<String>,
}

impl RecordStore {
    /// Creates a store over an initial record set with default view settings.
    pub fn new(records: Vec<Record>) -> Self {
        let mut store = Self {
            records,
            ..Self::default()
        };
        store.refresh();
        store
    }

    // --- Read access ---

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn visible(&self) -> &[Record] {
        &self.visible
    }

    pub fn filters(&self) -> &FilterConfig {
        &self.filters
    }

    pub fn sort(&self) -> &SortConfig {
        &self.sort
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    /// Selected ids, in the order they were selected.
    pub fn selection(&self) -> &[String] {
        &self.selection
    }

    pub fn selected_count(&self) -> usize {
        self.selection.len()
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selection.iter().any(|s| s == id)
    }

    pub fn get(&self, id: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.id == id)
    }

    // --- Mutations ---

    /// The single mutation entry point. The named methods below are the same
    /// operations with typed return values.
    pub fn apply(&mut self, action: Action) -> Applied {
        match action {
            Action::Add(candidate) => Applied::Added(self.add_record(candidate)),
            Action::Delete(id) => Applied::Deleted(self.delete_record(&id)),
            Action::DeleteSelected => Applied::DeletedSelected(self.delete_selected()),
            Action::ToggleSelection(id) => {
                let selected = self.toggle_selection(&id);
                Applied::SelectionToggled { id, selected }
            }
            Action::SetSearch(query) => {
                self.set_search_query(query);
                Applied::ViewChanged
            }
            Action::SetSort { field, direction } => {
                self.set_sort(field, direction);
                Applied::ViewChanged
            }
            Action::ToggleSort(field) => {
                self.toggle_sort(field);
                Applied::ViewChanged
            }
            Action::SetFilters(patch) => {
                self.set_filters(patch);
                Applied::ViewChanged
            }
            Action::ResetFilters => {
                self.reset_filters();
                Applied::ViewChanged
            }
        }
    }

    /// Appends the candidate under a fresh id. Returns the stored record.
    pub fn add_record(&mut self, candidate: NewRecord) -> Record {
        let record = Record::new(self.next_id(), candidate);
        info!(id = %record.id, name = %record.name, "record added");
        self.records.push(record.clone());
        self.refresh();
        record
    }

    /// Removes the record with `id`, if any, and drops it from the selection.
    pub fn delete_record(&mut self, id: &str) -> Option<Record> {
        let Some(pos) = self.records.iter().position(|r| r.id == id) else {
            debug!(id, "delete ignored, no such record");
            return None;
        };
        let removed = self.records.remove(pos);
        self.selection.retain(|s| s != id);
        info!(id = %removed.id, "record deleted");
        self.refresh();
        Some(removed)
    }

    /// Removes every selected record and clears the selection.
    pub fn delete_selected(&mut self) -> Vec<Record> {
        let selection = std::mem::take(&mut self.selection);
        let (removed, kept): (Vec<Record>, Vec<Record>) = std::mem::take(&mut self.records)
            .into_iter()
            .partition(|r| selection.contains(&r.id));
        self.records = kept;
        info!(count = removed.len(), "selected records deleted");
        self.refresh();
        removed
    }

    /// Returns whether the id is selected after the toggle.
    pub fn toggle_selection(&mut self, id: &str) -> bool {
        match self.selection.iter().position(|s| s == id) {
            Some(pos) => {
                self.selection.remove(pos);
                false
            }
            None => {
                self.selection.push(id.to_string());
                true
            }
        }
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
        self.refresh();
    }

    pub fn set_sort(&mut self, field: SortField, direction: SortDirection) {
        self.resort(SortConfig::by(field, direction));
    }

    pub fn toggle_sort(&mut self, field: SortField) {
        let next = self.sort.toggled(field);
        self.resort(next);
    }

    pub fn set_filters(&mut self, patch: FilterPatch) {
        self.filters.merge(patch);
        self.refresh();
    }

    pub fn reset_filters(&mut self) {
        self.filters = FilterConfig::default();
        self.refresh();
    }

    // --- Derivation ---

    /// Re-derives the visible list from the full set.
    fn refresh(&mut self) {
        let filtered = apply_filters(&self.records, &self.filters, &self.search_query);
        self.visible = sort_records(&filtered, &self.sort);
        debug!(
            total = self.records.len(),
            visible = self.visible.len(),
            "visible records recomputed"
        );
    }

    /// Re-sorts the current visible list without re-filtering.
    ///
    /// Ties fall back to position in the full set, so the result matches what
    /// `refresh` would produce whatever order the visible list was in.
    fn resort(&mut self, sort: SortConfig) {
        self.sort = sort;
        let positions: HashMap<&str, usize> = self
            .records
            .iter()
            .enumerate()
            .map(|(pos, r)| (r.id.as_str(), pos))
            .collect();
        let mut in_store_order = std::mem::take(&mut self.visible);
        in_store_order.sort_by_key(|r| positions.get(r.id.as_str()).copied());
        self.visible = sort_records(&in_store_order, &self.sort);
        debug!(
            field = ?self.sort.field,
            direction = %self.sort.direction,
            visible = self.visible.len(),
            "visible records re-sorted"
        );
    }

    fn next_id(&self) -> String {
        loop {
            let id = format!("item-{}", Uuid::new_v4().simple());
            if self.get(&id).is_none() {
                return id;
            }
        }
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::Category;

    pub struct StoreFixture {
        records: Vec<Record>,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                records: Vec::new(),
            }
        }

        /// Adds a record with id `item-<n>` where n is its position.
        pub fn with_record(mut self, name: &str, value: f64, category: Category, date: &str) -> Self {
            let id = format!("item-{}", self.records.len());
            self.records
                .push(Record::new(id, NewRecord::new(name, value, category, date)));
            self
        }

        pub fn with_categories(mut self, categories: &[Category]) -> Self {
            for category in categories {
                let n = self.records.len();
                self = self.with_record(&format!("Product {}", n + 1), 100.0, *category, "2021-01-01");
            }
            self
        }

        pub fn with_values(mut self, values: &[f64]) -> Self {
            for value in values {
                let n = self.records.len();
                self = self.with_record(&format!("Product {}", n + 1), *value, Category::Food, "2021-01-01");
            }
            self
        }

        pub fn build(self) -> RecordStore {
            RecordStore::new(self.records)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::StoreFixture;
    use super::*;
    use crate::model::Category;

    fn ids(records: &[Record]) -> Vec<&str> {
        records.iter().map(|r| r.id.as_str()).collect()
    }

    fn values(records: &[Record]) -> Vec<f64> {
        records.iter().map(|r| r.value).collect()
    }

    #[test]
    fn starts_with_everything_visible() {
        let store = StoreFixture::new().with_values(&[1.0, 2.0, 3.0]).build();
        assert_eq!(store.visible().len(), 3);
        assert_eq!(store.search_query(), "");
        assert_eq!(store.sort(), &SortConfig::default());
        assert!(!store.filters().is_active());
    }

    #[test]
    fn category_filter_keeps_original_order() {
        let mut store = StoreFixture::new()
            .with_categories(&[Category::Electronics, Category::Food, Category::Electronics])
            .build();

        store.set_filters(FilterPatch::categories([Category::Electronics]));

        assert_eq!(ids(store.visible()), vec!["item-0", "item-2"]);
        assert_eq!(store.records().len(), 3);
    }

    #[test]
    fn sort_then_flip_direction() {
        let mut store = StoreFixture::new()
            .with_values(&[300.0, 100.0, 200.0])
            .build();

        store.set_sort(SortField::Value, SortDirection::Ascending);
        assert_eq!(values(store.visible()), vec![100.0, 200.0, 300.0]);

        store.set_sort(SortField::Value, SortDirection::Descending);
        assert_eq!(values(store.visible()), vec![300.0, 200.0, 100.0]);
    }

    #[test]
    fn unmatched_search_empties_view_only() {
        let mut store = StoreFixture::new().with_values(&[1.0, 2.0]).build();
        store.set_search_query("foo");
        assert!(store.visible().is_empty());
        assert_eq!(store.records().len(), 2);
    }

    #[test]
    fn reset_filters_keeps_search() {
        let mut store = StoreFixture::new()
            .with_record("Desk", 100.0, Category::Furniture, "2020-01-01")
            .with_record("Desk lamp", 40.0, Category::Electronics, "2023-01-01")
            .with_record("Bread", 3.0, Category::Food, "2021-06-01")
            .build();

        store.set_search_query("desk");
        store.set_filters(FilterPatch::categories([Category::Furniture]));
        store.set_filters(FilterPatch::date_range(
            Some("2019-01-01".into()),
            Some("2020-12-31".into()),
        ));
        assert_eq!(ids(store.visible()), vec!["item-0"]);

        store.reset_filters();
        assert_eq!(store.filters(), &FilterConfig::default());
        assert_eq!(ids(store.visible()), vec!["item-0", "item-1"]);
    }

    #[test]
    fn sort_change_preserves_filtered_results() {
        let mut store = StoreFixture::new()
            .with_record("Phone", 500.0, Category::Electronics, "2021-01-01")
            .with_record("Apple", 2.0, Category::Food, "2021-01-02")
            .with_record("Radio", 50.0, Category::Electronics, "2021-01-03")
            .build();
        store.set_filters(FilterPatch::categories([Category::Electronics]));
        let before = store.visible().len();

        store.set_sort(SortField::Value, SortDirection::Ascending);

        assert_eq!(store.visible().len(), before);
        assert_eq!(ids(store.visible()), vec!["item-2", "item-0"]);
    }

    #[test]
    fn toggle_sort_cycles_direction() {
        let mut store = StoreFixture::new().with_values(&[2.0, 1.0, 3.0]).build();

        store.toggle_sort(SortField::Value);
        assert_eq!(values(store.visible()), vec![1.0, 2.0, 3.0]);

        store.toggle_sort(SortField::Value);
        assert_eq!(values(store.visible()), vec![3.0, 2.0, 1.0]);
        assert_eq!(store.sort().direction, SortDirection::Descending);
    }

    #[test]
    fn add_assigns_unique_id_and_respects_filters() {
        let mut store = StoreFixture::new().with_values(&[1.0]).build();
        store.set_filters(FilterPatch::categories([Category::Toys]));

        let hidden = store.add_record(NewRecord::new("Bread", 3.0, Category::Food, "2021-01-01"));
        let shown = store.add_record(NewRecord::new("Kite", 9.0, Category::Toys, "2021-01-01"));

        assert_eq!(store.records().len(), 3);
        assert_ne!(hidden.id, shown.id);
        assert!(hidden.id.starts_with("item-"));
        assert_eq!(ids(store.visible()), vec![shown.id.as_str()]);
    }

    #[test]
    fn added_record_is_sorted_into_place() {
        let mut store = StoreFixture::new().with_values(&[10.0, 30.0]).build();
        store.set_sort(SortField::Value, SortDirection::Ascending);

        store.add_record(NewRecord::new("Mid", 20.0, Category::Food, "2021-01-01"));

        assert_eq!(values(store.visible()), vec![10.0, 20.0, 30.0]);
    }

    #[test]
    fn delete_prunes_selection() {
        let mut store = StoreFixture::new().with_values(&[1.0, 2.0]).build();
        assert!(store.toggle_selection("item-0"));

        let removed = store.delete_record("item-0");

        assert_eq!(removed.map(|r| r.id), Some("item-0".to_string()));
        assert!(!store.is_selected("item-0"));
        assert_eq!(ids(store.records()), vec!["item-1"]);
        assert_eq!(ids(store.visible()), vec!["item-1"]);
    }

    #[test]
    fn delete_missing_id_is_a_noop() {
        let mut store = StoreFixture::new().with_values(&[1.0, 2.0]).build();
        store.toggle_selection("item-1");

        assert!(store.delete_record("item-9").is_none());

        assert_eq!(store.records().len(), 2);
        assert_eq!(store.visible().len(), 2);
        assert!(store.is_selected("item-1"));
    }

    #[test]
    fn delete_missing_id_keeps_visible_order() {
        let mut store = StoreFixture::new()
            .with_record("b", 1.0, Category::Food, "2021-01-01")
            .with_record("a", 1.0, Category::Food, "2021-01-01")
            .build();
        store.set_sort(SortField::Name, SortDirection::Ascending);
        store.set_sort(SortField::Value, SortDirection::Ascending);
        let before: Vec<String> = store.visible().iter().map(|r| r.id.clone()).collect();

        assert!(store.delete_record("nope").is_none());

        assert_eq!(ids(store.visible()), before);
    }

    #[test]
    fn resort_ties_follow_store_order() {
        let mut store = StoreFixture::new()
            .with_record("b", 1.0, Category::Food, "2021-01-01")
            .with_record("a", 1.0, Category::Food, "2021-01-01")
            .with_record("c", 1.0, Category::Food, "2021-01-01")
            .build();
        store.set_sort(SortField::Name, SortDirection::Descending);
        store.set_sort(SortField::Value, SortDirection::Ascending);
        assert_eq!(ids(store.visible()), vec!["item-0", "item-1", "item-2"]);

        store.set_sort(SortField::Value, SortDirection::Descending);
        assert_eq!(ids(store.visible()), vec!["item-0", "item-1", "item-2"]);
    }

    #[test]
    fn delete_selected_clears_selection() {
        let mut store = StoreFixture::new().with_values(&[1.0, 2.0, 3.0]).build();
        store.toggle_selection("item-0");
        store.toggle_selection("item-2");

        let removed = store.delete_selected();

        assert_eq!(ids(&removed), vec!["item-0", "item-2"]);
        assert!(!store.is_selected("item-0"));
        assert!(!store.is_selected("item-2"));
        assert_eq!(store.selected_count(), 0);
        assert_eq!(ids(store.visible()), vec!["item-1"]);
    }

    #[test]
    fn toggle_selection_twice_deselects() {
        let mut store = StoreFixture::new().with_values(&[1.0]).build();
        assert!(store.toggle_selection("item-0"));
        assert!(!store.toggle_selection("item-0"));
        assert!(store.selection().is_empty());
    }

    #[test]
    fn apply_reports_outcomes() {
        let mut store = StoreFixture::new().with_values(&[1.0]).build();
        assert_eq!(
            store.apply(Action::ToggleSelection("item-0".into())),
            Applied::SelectionToggled {
                id: "item-0".into(),
                selected: true
            }
        );
        assert_eq!(store.apply(Action::ResetFilters), Applied::ViewChanged);
        assert_eq!(store.apply(Action::Delete("nope".into())), Applied::Deleted(None));
    }
}
