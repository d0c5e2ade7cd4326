//! # Rendering Module
//!
//! Turns `CmdResult` data into terminal text. Layout math (column widths,
//! truncation, bar lengths) is done on plain strings with Unicode-aware widths;
//! styles are applied to the already padded cells so escape codes never skew the
//! alignment. `console` drops the styles when colors are disabled or stdout is not
//! a terminal.

use super::styles::Palette;
use colored::Colorize;
use salesdash::api::{CmdMessage, MessageLevel};
use salesdash::chart::{slice_label, CategoryTotal, ChartType};
use salesdash::error::Result;
use salesdash::filter::FilterConfig;
use salesdash::model::Record;
use salesdash::page::PageInfo;
use salesdash::sort::{SortDirection, SortField};
use salesdash::store::RecordStore;
use serde::Serialize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const NAME_MAX_WIDTH: usize = 24;
pub const VALUE_WIDTH: usize = 9;
pub const CATEGORY_WIDTH: usize = 11;
pub const DATE_WIDTH: usize = 10;
pub const BAR_WIDTH: usize = 40;
const SEPARATOR: &str = "  ";
const SELECTED_MARKER: &str = "[x]";
const UNSELECTED_MARKER: &str = "[ ]";

pub fn print_messages(messages: &[CmdMessage]) {
    print!("{}", render_messages(messages));
}

pub fn render_messages(messages: &[CmdMessage]) -> String {
    let mut out = String::new();
    for message in messages {
        let line = match message.level {
            MessageLevel::Info => message.content.dimmed(),
            MessageLevel::Success => message.content.green(),
            MessageLevel::Warning => message.content.yellow(),
        };
        out.push_str(&format!("{}\n", line));
    }
    out
}

/// Renders one page of the table, with a status line for active search/filters
/// and a paging footer.
pub fn render_table(
    rows: &[Record],
    page: &PageInfo,
    store: &RecordStore,
    palette: &Palette,
) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", palette.title.apply_to("Sales Data Table")));

    if let Some(status) = describe_view(store.search_query(), store.filters()) {
        out.push_str(&format!("{}\n", palette.muted.apply_to(status)));
    }

    if rows.is_empty() {
        out.push_str(&format!("{}\n", palette.muted.apply_to("No records found.")));
        out.push_str(&format!(
            "{}\n",
            palette.muted.apply_to(footer(page, store.selected_count()))
        ));
        return out;
    }

    let id_width = rows
        .iter()
        .map(|r| r.id.width())
        .max()
        .unwrap_or(0)
        .max("ID".len());
    let name_width = rows
        .iter()
        .map(|r| r.name.width())
        .max()
        .unwrap_or(0)
        .clamp("Name".len(), NAME_MAX_WIDTH);

    let sort_field = store.sort().field;
    let sort_direction = store.sort().direction;
    let header = |label: &str, field: SortField, width: usize, right: bool| {
        let marked = if sort_field == Some(field) {
            match sort_direction {
                SortDirection::Ascending => format!("{} ▲", label),
                SortDirection::Descending => format!("{} ▼", label),
            }
        } else {
            label.to_string()
        };
        let cell = pad(&marked, width, right);
        if sort_field == Some(field) {
            palette.sorted_header.apply_to(cell).to_string()
        } else {
            palette.header.apply_to(cell).to_string()
        }
    };

    let header_line = [
        palette.header.apply_to(pad("", 3, false)).to_string(),
        palette.header.apply_to(pad("ID", id_width, false)).to_string(),
        header("Name", SortField::Name, name_width, false),
        header("Value", SortField::Value, VALUE_WIDTH, true),
        header("Category", SortField::Category, CATEGORY_WIDTH, false),
        header("Date", SortField::Date, DATE_WIDTH, false),
    ]
    .join(SEPARATOR);
    out.push_str(header_line.trim_end());
    out.push('\n');

    for record in rows {
        let selected = store.is_selected(&record.id);
        let marker = if selected {
            SELECTED_MARKER
        } else {
            UNSELECTED_MARKER
        };
        let cells = [
            marker.to_string(),
            palette.id.apply_to(pad(&record.id, id_width, false)).to_string(),
            pad(&truncate_to_width(&record.name, name_width), name_width, false),
            palette
                .value
                .apply_to(pad(&record.value_text(), VALUE_WIDTH, true))
                .to_string(),
            palette
                .category(record.category)
                .apply_to(pad(record.category.label(), CATEGORY_WIDTH, false))
                .to_string(),
            pad(&record.date, DATE_WIDTH, false),
        ];
        let line = cells.join(SEPARATOR);
        if selected {
            out.push_str(&palette.selected.apply_to(line).to_string());
        } else {
            out.push_str(&line);
        }
        out.push('\n');
    }

    out.push_str(&format!(
        "{}\n",
        palette.muted.apply_to(footer(page, store.selected_count()))
    ));
    out
}

fn footer(page: &PageInfo, selected: usize) -> String {
    let mut parts = vec![format!("Rows {}-{} of {}", page.first, page.last, page.total)];
    if page.pages > 0 {
        parts.push(format!("Page {}/{}", page.page + 1, page.pages));
    }
    if selected > 0 {
        parts.push(format!("{} selected", selected));
    }
    parts.join(" · ")
}

/// One-line summary of the active search and filters, if any.
pub fn describe_view(search_query: &str, filters: &FilterConfig) -> Option<String> {
    let mut parts = Vec::new();
    if !search_query.is_empty() {
        parts.push(format!("Search: \"{}\"", search_query));
    }
    if !filters.categories.is_empty() {
        let labels: Vec<&str> = filters.categories.iter().map(|c| c.label()).collect();
        parts.push(format!("Categories: {}", labels.join(", ")));
    }
    if !filters.date_range.is_open() {
        parts.push(format!(
            "Dates: {}..{}",
            filters.date_range.start.as_deref().unwrap_or("*"),
            filters.date_range.end.as_deref().unwrap_or("*")
        ));
    }
    if !filters.value_range.is_open() {
        let bound = |b: Option<f64>| b.map(|v| v.to_string()).unwrap_or_else(|| "*".to_string());
        parts.push(format!(
            "Values: {}..{}",
            bound(filters.value_range.min),
            bound(filters.value_range.max)
        ));
    }
    if parts.is_empty() {
        None
    } else {
        Some(parts.join(" · "))
    }
}

/// Renders category totals as a bar, line or pie chart.
pub fn render_chart(totals: &[CategoryTotal], chart_type: ChartType, palette: &Palette) -> String {
    let mut out = format!(
        "{}\n",
        palette
            .title
            .apply_to(format!("Sales Data Visualization ({})", chart_type))
    );
    if totals.is_empty() {
        out.push_str(&format!("{}\n", palette.muted.apply_to("No data available")));
        return out;
    }

    let max = totals.iter().map(|t| t.total).fold(0.0_f64, f64::max);
    let scaled = |amount: f64| -> usize {
        if max <= 0.0 {
            0
        } else {
            ((amount / max) * BAR_WIDTH as f64).round() as usize
        }
    };

    for entry in totals {
        let style = palette.category(entry.category);
        let label = pad(entry.category.label(), CATEGORY_WIDTH, false);
        let line = match chart_type {
            ChartType::Bar => {
                let bar = "█".repeat(scaled(entry.total));
                format!(
                    "{}{}{} {}",
                    label,
                    SEPARATOR,
                    style.apply_to(bar),
                    entry.total
                )
            }
            ChartType::Line => {
                let pos = scaled(entry.total);
                let track = "·".repeat(pos.saturating_sub(1));
                format!(
                    "{}{}{}{} {}",
                    label,
                    SEPARATOR,
                    palette.muted.apply_to(track),
                    style.apply_to("●"),
                    entry.total
                )
            }
            ChartType::Pie => {
                let wedge = ((entry.share * BAR_WIDTH as f64).round() as usize).max(1);
                format!(
                    "{}{}{} {}",
                    label,
                    SEPARATOR,
                    style.apply_to("▒".repeat(wedge)),
                    slice_label(entry)
                )
            }
        };
        out.push_str(&line);
        out.push('\n');
    }
    out
}

#[derive(Serialize)]
struct JsonPage<'a> {
    page: &'a PageInfo,
    records: &'a [Record],
}

pub fn render_json(rows: &[Record], page: &PageInfo) -> Result<String> {
    let mut json = serde_json::to_string_pretty(&JsonPage {
        page,
        records: rows,
    })?;
    json.push('\n');
    Ok(json)
}

fn pad(text: &str, width: usize, right_align: bool) -> String {
    let fill = " ".repeat(width.saturating_sub(text.width()));
    if right_align {
        format!("{}{}", fill, text)
    } else {
        format!("{}{}", text, fill)
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}
