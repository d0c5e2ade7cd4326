//! # Record Store
//!
//! The store is the single authoritative holder of the dashboard's data state:
//!
//! - the full record set (source of truth, store order = insertion order)
//! - the filter criteria, search query and sort config
//! - the derived visible list
//! - the selection used by bulk actions
//!
//! ## Mutation Model
//!
//! Every user gesture becomes one [`Action`] and goes through
//! [`RecordStore::apply`]. The named methods (`add_record`, `set_filters`, ...) are
//! thin wrappers over it. Each action runs to completion and replaces the visible
//! list in one step, so no caller ever sees a half-updated view.
//!
//! Changes to the records, filters or search re-derive the visible list from the
//! full set (`filter -> sort`). A sort change re-sorts the current visible list
//! instead, which keeps the active filter and search results intact.
//!
//! ## Selection
//!
//! The selection holds record ids. Toggling does not check that the id exists (the
//! client only offers rendered rows), but deletion always prunes the ids it
//! removes, so a selection never outlives its records through the store's own
//! operations.

use crate::filter::FilterPatch;
use crate::model::{NewRecord, Record};
use crate::sort::{SortDirection, SortField};

mod state;

pub use state::RecordStore;

#[cfg(any(test, feature = "test_utils"))]
pub use state::fixtures;

/// One discrete user action against the store.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Add(NewRecord),
    Delete(String),
    DeleteSelected,
    ToggleSelection(String),
    SetSearch(String),
    SetSort {
        field: SortField,
        direction: SortDirection,
    },
    /// Column-header click: ascending first, descending on a repeat click.
    ToggleSort(SortField),
    SetFilters(FilterPatch),
    ResetFilters,
}

/// What an [`Action`] did, for callers that want to report it.
#[derive(Debug, Clone, PartialEq)]
pub enum Applied {
    Added(Record),
    /// `None` when no record had the id.
    Deleted(Option<Record>),
    DeletedSelected(Vec<Record>),
    SelectionToggled { id: String, selected: bool },
    ViewChanged,
}
