//! Per-category aggregation behind the chart panel.
//!
//! The chart plots the total `value` of each category present in the records it
//! is given, in order of first appearance. How those totals are drawn (bars, a
//! line, pie slices) is up to the client; this module only knows the chart kinds
//! by name.

use crate::error::{DashError, Result};
use crate::model::{Category, Record};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
    #[default]
    Bar,
    Line,
    Pie,
}

impl ChartType {
    pub const ALL: [ChartType; 3] = [ChartType::Bar, ChartType::Line, ChartType::Pie];

    pub fn as_str(&self) -> &'static str {
        match self {
            ChartType::Bar => "bar",
            ChartType::Line => "line",
            ChartType::Pie => "pie",
        }
    }
}

impl fmt::Display for ChartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChartType {
    type Err = DashError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_lowercase();
        ChartType::ALL
            .iter()
            .find(|t| t.as_str() == wanted)
            .copied()
            .ok_or_else(|| DashError::invalid("chart type", format!("'{}' (use bar, line or pie)", s)))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTotal {
    pub category: Category,
    pub total: f64,
    /// Share of the grand total, 0.0..=1.0. Zero when the grand total is zero.
    pub share: f64,
}

/// Sums `value` per category, in order of first appearance.
pub fn category_totals(records: &[Record]) -> Vec<CategoryTotal> {
    let mut totals: Vec<CategoryTotal> = Vec::new();
    for record in records {
        match totals.iter_mut().find(|t| t.category == record.category) {
            Some(entry) => entry.total += record.value,
            None => totals.push(CategoryTotal {
                category: record.category,
                total: record.value,
                share: 0.0,
            }),
        }
    }

    let grand_total: f64 = totals.iter().map(|t| t.total).sum();
    if grand_total > 0.0 {
        for entry in &mut totals {
            entry.share = entry.total / grand_total;
        }
    }
    totals
}

/// Pie slice label, e.g. `Food: 1200 (35%)`.
pub fn slice_label(entry: &CategoryTotal) -> String {
    format!(
        "{}: {} ({:.0}%)",
        entry.category,
        entry.total,
        entry.share * 100.0
    )
}
