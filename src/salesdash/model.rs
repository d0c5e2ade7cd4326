use crate::error::{DashError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Date format for record dates. Fixed width, so string order is date order.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Electronics,
    Clothing,
    Food,
    Furniture,
    Toys,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Electronics,
        Category::Clothing,
        Category::Food,
        Category::Furniture,
        Category::Toys,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Electronics => "Electronics",
            Category::Clothing => "Clothing",
            Category::Food => "Food",
            Category::Furniture => "Furniture",
            Category::Toys => "Toys",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = DashError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        Category::ALL
            .iter()
            .find(|c| c.label().eq_ignore_ascii_case(wanted))
            .copied()
            .ok_or_else(|| DashError::UnknownCategory(wanted.to_string()))
    }
}

/// One sales entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: String,
    pub name: String,
    pub value: f64,
    pub category: Category,
    /// ISO `YYYY-MM-DD`.
    pub date: String,
}

impl Record {
    pub fn new(id: impl Into<String>, fields: NewRecord) -> Self {
        Self {
            id: id.into(),
            name: fields.name,
            value: fields.value,
            category: fields.category,
            date: fields.date,
        }
    }

    /// The value as it appears in search and in the table.
    pub fn value_text(&self) -> String {
        self.value.to_string()
    }
}

/// A record that has not been given an id yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewRecord {
    pub name: String,
    pub value: f64,
    pub category: Category,
    pub date: String,
}

impl NewRecord {
    pub fn new(
        name: impl Into<String>,
        value: f64,
        category: Category,
        date: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            value,
            category,
            date: date.into(),
        }
    }
}

/// A new row exactly as the user typed it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordDraft {
    pub name: String,
    pub value: String,
    pub category: String,
    pub date: String,
}

impl RecordDraft {
    pub fn new(
        name: impl Into<String>,
        value: impl Into<String>,
        category: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            category: category.into(),
            date: date.into(),
        }
    }

    /// Checks every field and produces a typed record.
    ///
    /// All four fields must be non-blank. The value must be a finite,
    /// non-negative number, the category one of [`Category::ALL`], and the date a
    /// real calendar day written as `YYYY-MM-DD`.
    pub fn validate(&self) -> Result<NewRecord> {
        let name = require("name", &self.name)?;
        let value = parse_value("value", require("value", &self.value)?)?;
        let category = require("category", &self.category)?.parse()?;
        let date = parse_date("date", require("date", &self.date)?)?;

        Ok(NewRecord {
            name: name.to_string(),
            value,
            category,
            date,
        })
    }
}

fn require<'a>(field: &'static str, raw: &'a str) -> Result<&'a str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(DashError::invalid(field, "must not be empty"));
    }
    Ok(trimmed)
}

/// Parses a non-negative, finite number.
pub fn parse_value(field: &'static str, raw: &str) -> Result<f64> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| DashError::invalid(field, format!("'{}' is not a number", raw.trim())))?;
    if !value.is_finite() {
        return Err(DashError::invalid(field, "must be a finite number"));
    }
    if value < 0.0 {
        return Err(DashError::invalid(field, "must not be negative"));
    }
    Ok(value)
}

/// Parses a `YYYY-MM-DD` date and returns it in canonical form.
pub fn parse_date(field: &'static str, raw: &str) -> Result<String> {
    let raw = raw.trim();
    let date = NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .map_err(|_| DashError::invalid(field, format!("'{}' is not a YYYY-MM-DD date", raw)))?;
    let canonical = date.format(DATE_FORMAT).to_string();
    // chrono accepts unpadded months and days; string comparison needs the padded form.
    if canonical != raw {
        return Err(DashError::invalid(
            field,
            format!("'{}' must be written as {}", raw, canonical),
        ));
    }
    Ok(canonical)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_parses_case_insensitively() {
        assert_eq!("food".parse::<Category>().unwrap(), Category::Food);
        assert_eq!(" TOYS ".parse::<Category>().unwrap(), Category::Toys);
        assert!(matches!(
            "Garden".parse::<Category>(),
            Err(DashError::UnknownCategory(_))
        ));
    }

    #[test]
    fn value_text_drops_trailing_zero() {
        let record = Record::new(
            "item-0",
            NewRecord::new("Lamp", 300.0, Category::Furniture, "2021-03-04"),
        );
        assert_eq!(record.value_text(), "300");

        let record = Record::new(
            "item-1",
            NewRecord::new("Lamp", 12.5, Category::Furniture, "2021-03-04"),
        );
        assert_eq!(record.value_text(), "12.5");
    }

    #[test]
    fn draft_validates_into_record() {
        let draft = RecordDraft::new(" Desk ", "450", "furniture", "2022-11-30");
        let record = draft.validate().unwrap();
        assert_eq!(record.name, "Desk");
        assert_eq!(record.value, 450.0);
        assert_eq!(record.category, Category::Furniture);
        assert_eq!(record.date, "2022-11-30");
    }

    #[test]
    fn draft_rejects_blank_fields() {
        let draft = RecordDraft::new("", "1", "Food", "2022-01-01");
        assert!(matches!(
            draft.validate(),
            Err(DashError::InvalidField { field: "name", .. })
        ));

        let draft = RecordDraft::new("Bread", "  ", "Food", "2022-01-01");
        assert!(matches!(
            draft.validate(),
            Err(DashError::InvalidField { field: "value", .. })
        ));
    }

    #[test]
    fn draft_rejects_bad_values() {
        for value in ["abc", "-3", "NaN", "inf"] {
            let draft = RecordDraft::new("Bread", value, "Food", "2022-01-01");
            assert!(
                matches!(
                    draft.validate(),
                    Err(DashError::InvalidField { field: "value", .. })
                ),
                "value {value} should be rejected"
            );
        }
    }

    #[test]
    fn draft_rejects_bad_dates() {
        for date in ["2022-02-30", "22-01-01", "2022-1-5", "yesterday"] {
            let draft = RecordDraft::new("Bread", "3", "Food", date);
            assert!(
                matches!(
                    draft.validate(),
                    Err(DashError::InvalidField { field: "date", .. })
                ),
                "date {date} should be rejected"
            );
        }
    }
}
