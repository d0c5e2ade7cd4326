//! # Sort Comparator
//!
//! Orders records by one field. Text fields (`name`, `category`, `date`) compare
//! lexicographically, `value` numerically. The sort is stable in both directions:
//! descending reverses the comparison, not the output, so records with equal keys
//! keep their input order either way.

use crate::error::{DashError, Result};
use crate::model::Record;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    Name,
    Value,
    Category,
    Date,
}

impl SortField {
    pub const ALL: [SortField; 4] = [
        SortField::Name,
        SortField::Value,
        SortField::Category,
        SortField::Date,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Name => "name",
            SortField::Value => "value",
            SortField::Category => "category",
            SortField::Date => "date",
        }
    }

    fn compare(&self, a: &Record, b: &Record) -> Ordering {
        match self {
            SortField::Name => a.name.cmp(&b.name),
            SortField::Value => a.value.total_cmp(&b.value),
            SortField::Category => a.category.label().cmp(b.category.label()),
            SortField::Date => a.date.cmp(&b.date),
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortField {
    type Err = DashError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_lowercase();
        SortField::ALL
            .iter()
            .find(|f| f.as_str() == wanted)
            .copied()
            .ok_or_else(|| DashError::invalid("sort field", format!("'{}' is not sortable", s)))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortDirection {
    type Err = DashError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Ascending),
            "desc" | "descending" => Ok(SortDirection::Descending),
            other => Err(DashError::invalid(
                "sort direction",
                format!("'{}' is neither asc nor desc", other),
            )),
        }
    }
}

/// Current ordering. No field means store order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortConfig {
    pub field: Option<SortField>,
    pub direction: SortDirection,
}

impl SortConfig {
    pub fn by(field: SortField, direction: SortDirection) -> Self {
        Self {
            field: Some(field),
            direction,
        }
    }

    /// The config a column-header click produces: ascending on a new field,
    /// flipping to descending on a second click.
    pub fn toggled(&self, field: SortField) -> Self {
        let direction = if self.field == Some(field) && self.direction == SortDirection::Ascending
        {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        };
        Self::by(field, direction)
    }
}

/// Returns a sorted copy of `records`. The input is never reordered.
pub fn sort_records(records: &[Record], config: &SortConfig) -> Vec<Record> {
    let mut sorted = records.to_vec();
    if let Some(field) = config.field {
        sorted.sort_by(|a, b| match config.direction {
            SortDirection::Ascending => field.compare(a, b),
            SortDirection::Descending => field.compare(b, a),
        });
    }
    sorted
}
