//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single entry
//! point for UI clients.
//!
//! The facade:
//! - **Owns** the [`RecordStore`] for the session
//! - **Normalizes inputs**: raw strings (sort fields, directions, category labels)
//!   are parsed here, drafts and filter input are validated by the commands
//! - **Returns structured types** (`Result<CmdResult>`), never text
//!
//! Business logic lives in `commands/*.rs`; derivation lives in the store.

use crate::commands;
use crate::error::Result;
use crate::model::{Record, RecordDraft};
use crate::sort::{SortDirection, SortField};
use crate::store::RecordStore;

/// The main API facade for dashboard operations.
pub struct DashboardApi {
    store: RecordStore,
}

impl DashboardApi {
    pub fn new(records: Vec<Record>) -> Self {
        Self::with_store(RecordStore::new(records))
    }

    pub fn with_store(store: RecordStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn add_record(&mut self, draft: &RecordDraft) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, draft)
    }

    pub fn delete_records<I: AsRef<str>>(&mut self, ids: &[I]) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.store, ids)
    }

    pub fn toggle_selection<I: AsRef<str>>(&mut self, ids: &[I]) -> Result<commands::CmdResult> {
        commands::select::toggle(&mut self.store, ids)
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.store.is_selected(id)
    }

    pub fn delete_selected(&mut self) -> Result<commands::CmdResult> {
        commands::select::delete_selected(&mut self.store)
    }

    pub fn search(&mut self, query: &str) -> Result<commands::CmdResult> {
        commands::search::run(&mut self.store, query)
    }

    /// Sorts by `field`; the direction defaults to ascending.
    pub fn sort(&mut self, field: &str, direction: Option<&str>) -> Result<commands::CmdResult> {
        let field: SortField = field.parse()?;
        let direction = direction
            .map(str::parse::<SortDirection>)
            .transpose()?
            .unwrap_or_default();
        commands::sort::run(&mut self.store, field, direction)
    }

    pub fn toggle_sort(&mut self, field: &str) -> Result<commands::CmdResult> {
        let field: SortField = field.parse()?;
        commands::sort::toggle(&mut self.store, field)
    }

    pub fn filter(&mut self, input: &FilterInput) -> Result<commands::CmdResult> {
        commands::filter::run(&mut self.store, input)
    }

    pub fn toggle_category(&mut self, label: &str) -> Result<commands::CmdResult> {
        commands::filter::toggle_category(&mut self.store, label)
    }

    pub fn reset_filters(&mut self) -> Result<commands::CmdResult> {
        commands::filter::reset(&mut self.store)
    }

    /// One page of the visible list; `page` is zero-based.
    pub fn view(&self, page: usize, size: usize) -> Result<commands::CmdResult> {
        commands::view::run(&self.store, page, size)
    }

    pub fn chart(&self) -> Result<commands::CmdResult> {
        commands::chart::run(&self.store)
    }
}

pub use commands::filter::FilterInput;
pub use commands::{CmdMessage, CmdResult, MessageLevel};
