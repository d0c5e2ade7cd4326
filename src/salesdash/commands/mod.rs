//! # Command Layer
//!
//! Business logic for each user-facing operation. Every command takes the
//! [`RecordStore`](crate::store::RecordStore) plus typed or raw arguments and
//! returns a [`CmdResult`]: the records it touched, the rows to list and
//! user-facing messages. Commands never print.

use crate::chart::CategoryTotal;
use crate::model::Record;
use crate::page::PageInfo;
use crate::store::RecordStore;

pub mod add;
pub mod chart;
pub mod delete;
pub mod filter;
pub mod search;
pub mod select;
pub mod sort;
pub mod view;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_records: Vec<Record>,
    pub listed_records: Vec<Record>,
    pub page: Option<PageInfo>,
    pub chart: Vec<CategoryTotal>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_records(mut self, records: Vec<Record>) -> Self {
        self.affected_records = records;
        self
    }

    pub fn with_listed_records(mut self, records: Vec<Record>, page: PageInfo) -> Self {
        self.listed_records = records;
        self.page = Some(page);
        self
    }

    pub fn with_chart(mut self, totals: Vec<CategoryTotal>) -> Self {
        self.chart = totals;
        self
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }
}

/// "Showing 3 of 25 records" summary after a view change.
pub(crate) fn visible_summary(store: &RecordStore) -> CmdMessage {
    CmdMessage::info(format!(
        "Showing {} of {} records",
        store.visible().len(),
        store.records().len()
    ))
}
