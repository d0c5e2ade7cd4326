//! Filter commands. Raw user input is validated here into a [`FilterPatch`]
//! before it reaches the store.

use crate::commands::{visible_summary, CmdResult};
use crate::error::{DashError, Result};
use crate::filter::{DateRange, FilterPatch, ValueRange};
use crate::model::{parse_date, parse_value, Category};
use crate::store::{Action, RecordStore};

/// Filter changes as typed by a user. `None` leaves a criterion alone; inside a
/// range, an empty bound or `-` means open.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterInput {
    pub categories: Option<Vec<String>>,
    pub dates: Option<(String, String)>,
    pub values: Option<(String, String)>,
}

impl FilterInput {
    pub fn to_patch(&self) -> Result<FilterPatch> {
        let mut patch = FilterPatch::default();

        if let Some(labels) = &self.categories {
            let categories = labels
                .iter()
                .map(|label| label.parse::<Category>())
                .collect::<Result<Vec<_>>>()?;
            patch.categories = Some(categories.into_iter().collect());
        }

        if let Some((start, end)) = &self.dates {
            let start = open_bound(start).map(|s| parse_date("start date", s)).transpose()?;
            let end = open_bound(end).map(|s| parse_date("end date", s)).transpose()?;
            if let (Some(start), Some(end)) = (&start, &end) {
                if start > end {
                    return Err(DashError::invalid(
                        "date range",
                        format!("start {} is after end {}", start, end),
                    ));
                }
            }
            patch.date_range = Some(DateRange::new(start, end));
        }

        if let Some((min, max)) = &self.values {
            let min = open_bound(min).map(|s| parse_value("min value", s)).transpose()?;
            let max = open_bound(max).map(|s| parse_value("max value", s)).transpose()?;
            if let (Some(min), Some(max)) = (min, max) {
                if min > max {
                    return Err(DashError::invalid(
                        "value range",
                        format!("min {} is above max {}", min, max),
                    ));
                }
            }
            patch.value_range = Some(ValueRange::new(min, max));
        }

        Ok(patch)
    }
}

fn open_bound(raw: &str) -> Option<&str> {
    match raw.trim() {
        "" | "-" => None,
        bound => Some(bound),
    }
}

pub fn run(store: &mut RecordStore, input: &FilterInput) -> Result<CmdResult> {
    let patch = input.to_patch()?;
    store.apply(Action::SetFilters(patch));
    Ok(CmdResult::default().with_message(visible_summary(store)))
}

/// Adds the category to the filter set, or removes it if already there.
pub fn toggle_category(store: &mut RecordStore, label: &str) -> Result<CmdResult> {
    let category: Category = label.parse()?;
    let mut categories = store.filters().categories.clone();
    if !categories.remove(&category) {
        categories.insert(category);
    }
    store.apply(Action::SetFilters(FilterPatch::categories(categories)));
    Ok(CmdResult::default().with_message(visible_summary(store)))
}

pub fn reset(store: &mut RecordStore) -> Result<CmdResult> {
    store.apply(Action::ResetFilters);
    Ok(CmdResult::default().with_message(visible_summary(store)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::fixtures::StoreFixture;

    fn store() -> RecordStore {
        StoreFixture::new()
            .with_record("Phone", 500.0, Category::Electronics, "2021-02-01")
            .with_record("Bread", 3.0, Category::Food, "2022-07-14")
            .with_record("Robot", 80.0, Category::Toys, "2023-11-30")
            .build()
    }

    #[test]
    fn builds_patch_from_raw_input() {
        let input = FilterInput {
            categories: Some(vec!["food".into(), "Toys".into()]),
            dates: Some(("2022-01-01".into(), "-".into())),
            values: Some(("".into(), "100".into())),
        };
        let patch = input.to_patch().unwrap();

        assert_eq!(patch.categories.unwrap().len(), 2);
        let dates = patch.date_range.unwrap();
        assert_eq!(dates.start.as_deref(), Some("2022-01-01"));
        assert_eq!(dates.end, None);
        let values = patch.value_range.unwrap();
        assert_eq!(values.min, None);
        assert_eq!(values.max, Some(100.0));
    }

    #[test]
    fn rejects_inverted_ranges_and_bad_labels() {
        let input = FilterInput {
            dates: Some(("2023-01-01".into(), "2022-01-01".into())),
            ..FilterInput::default()
        };
        assert!(input.to_patch().is_err());

        let input = FilterInput {
            values: Some(("10".into(), "5".into())),
            ..FilterInput::default()
        };
        assert!(input.to_patch().is_err());

        let input = FilterInput {
            categories: Some(vec!["Garden".into()]),
            ..FilterInput::default()
        };
        assert!(matches!(input.to_patch(), Err(DashError::UnknownCategory(_))));
    }

    #[test]
    fn run_applies_and_reset_clears() {
        let mut store = store();
        let input = FilterInput {
            values: Some(("50".into(), "-".into())),
            ..FilterInput::default()
        };
        let result = run(&mut store, &input).unwrap();
        assert_eq!(result.messages[0].content, "Showing 2 of 3 records");

        reset(&mut store).unwrap();
        assert_eq!(store.visible().len(), 3);
    }

    #[test]
    fn toggle_category_adds_then_removes() {
        let mut store = store();

        toggle_category(&mut store, "toys").unwrap();
        assert_eq!(store.visible().len(), 1);

        toggle_category(&mut store, "Food").unwrap();
        assert_eq!(store.visible().len(), 2);

        toggle_category(&mut store, "Toys").unwrap();
        toggle_category(&mut store, "Food").unwrap();
        assert!(store.filters().categories.is_empty());
        assert_eq!(store.visible().len(), 3);
    }
}
