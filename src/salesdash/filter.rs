//! # Filter Predicate
//!
//! [`matches`] is the single inclusion test for the visible list. It checks, in
//! order: category membership, date range, value range, then the free-text search.
//! Any failed criterion rejects the record immediately.
//!
//! The search step is the last word: when the query is non-empty a record that
//! passed every range check is kept only if the query occurs in its name,
//! category, value text or date. When the query is empty the range checks alone
//! decide.
//!
//! Dates are compared as strings. Record dates are fixed-width `YYYY-MM-DD`, so
//! string order equals calendar order.

use crate::model::{Category, Record};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Inclusive date bounds; either side may be open.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: Option<String>,
    pub end: Option<String>,
}

impl DateRange {
    pub fn new(start: Option<String>, end: Option<String>) -> Self {
        Self { start, end }
    }

    pub fn is_open(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }
}

/// Inclusive value bounds; either side may be open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ValueRange {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl ValueRange {
    pub fn new(min: Option<f64>, max: Option<f64>) -> Self {
        Self { min, max }
    }

    pub fn is_open(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }
}

/// Current filter criteria. The default restricts nothing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Allowed categories. Empty means every category is allowed.
    pub categories: BTreeSet<Category>,
    pub date_range: DateRange,
    pub value_range: ValueRange,
}

impl FilterConfig {
    /// True when any criterion is set.
    pub fn is_active(&self) -> bool {
        !self.categories.is_empty() || !self.date_range.is_open() || !self.value_range.is_open()
    }

    /// Overwrites each criterion the patch carries and leaves the others alone.
    pub fn merge(&mut self, patch: FilterPatch) {
        if let Some(categories) = patch.categories {
            self.categories = categories;
        }
        if let Some(date_range) = patch.date_range {
            self.date_range = date_range;
        }
        if let Some(value_range) = patch.value_range {
            self.value_range = value_range;
        }
    }
}

/// A partial [`FilterConfig`]. `None` fields are left untouched on merge.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterPatch {
    pub categories: Option<BTreeSet<Category>>,
    pub date_range: Option<DateRange>,
    pub value_range: Option<ValueRange>,
}

impl FilterPatch {
    pub fn categories<I: IntoIterator<Item = Category>>(categories: I) -> Self {
        Self {
            categories: Some(categories.into_iter().collect()),
            ..Self::default()
        }
    }

    pub fn date_range(start: Option<String>, end: Option<String>) -> Self {
        Self {
            date_range: Some(DateRange::new(start, end)),
            ..Self::default()
        }
    }

    pub fn value_range(min: Option<f64>, max: Option<f64>) -> Self {
        Self {
            value_range: Some(ValueRange::new(min, max)),
            ..Self::default()
        }
    }
}

/// Decides whether `record` belongs in the visible list.
pub fn matches(record: &Record, filter: &FilterConfig, search_query: &str) -> bool {
    if !filter.categories.is_empty() && !filter.categories.contains(&record.category) {
        return false;
    }

    if let Some(start) = &filter.date_range.start {
        if record.date.as_str() < start.as_str() {
            return false;
        }
    }
    if let Some(end) = &filter.date_range.end {
        if record.date.as_str() > end.as_str() {
            return false;
        }
    }

    if let Some(min) = filter.value_range.min {
        if record.value < min {
            return false;
        }
    }
    if let Some(max) = filter.value_range.max {
        if record.value > max {
            return false;
        }
    }

    if search_query.is_empty() {
        return true;
    }

    let query = search_query.to_lowercase();
    record.name.to_lowercase().contains(&query)
        || record.category.label().to_lowercase().contains(&query)
        || record.value_text().contains(&query)
        || record.date.contains(&query)
}

/// Keeps the records that [`matches`] accepts, in their original order.
pub fn apply_filters(records: &[Record], filter: &FilterConfig, search_query: &str) -> Vec<Record> {
    records
        .iter()
        .filter(|record| matches(record, filter, search_query))
        .cloned()
        .collect()
}
