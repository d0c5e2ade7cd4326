//! # Sessions
//!
//! `salesdash session` keeps one store alive and reads actions from stdin, one
//! per line. Each line is split shell-style (double quotes group words, `\` escapes
//! inside quotes) and parsed by a multicall clap parser, so the first word is the
//! action name. A bad line prints an error and the loop moves on; only I/O
//! failures end the session early.
//!
//! Paging, theme and chart type are presentation state held by [`AppContext`];
//! changing the page size or the visible set sends the table back to page 1.

use super::commands::AppContext;
use super::render::render_messages;
use clap::error::ErrorKind;
use clap::{Parser, Subcommand};
use colored::Colorize;
use salesdash::api::{CmdMessage, CmdResult, FilterInput};
use salesdash::chart::ChartType;
use salesdash::config::validate_page_size;
use salesdash::error::{DashError, Result};
use salesdash::model::RecordDraft;
use std::io::{BufRead, Write};
use tracing::debug;

const SESSION_HELP: &str = "\
Actions:
  add <name> <value> <category> <date>   Add a record (date as YYYY-MM-DD)
  delete <id>...                         Delete records by id
  select <id>...                         Toggle selection of records
  delete-selected                        Delete every selected record
  search [text]                          Search name, category, value and date
  sort <field> [asc|desc]                Sort by name, value, category or date
  sort-toggle <field>                    Sort ascending, or flip if already sorted
  filter category [name]...              Only show these categories (none clears)
  filter dates <start|-> <end|->         Date range, - for an open bound
  filter values <min|-> <max|->          Value range, - for an open bound
  filter toggle <name>                   Add or remove one category filter
  reset                                  Clear category, date and value filters
  page <n>                               Jump to page n
  page-size <n>                          Rows per page: 5, 10, 25 or 50
  chart [bar|line|pie]                   Chart category totals
  theme                                  Switch between light and dark
  show                                   Show the current table page
  help                                   Show this list
  quit                                   End the session
";

#[derive(Parser, Debug)]
#[command(multicall = true, disable_help_subcommand = true)]
struct SessionLine {
    #[command(subcommand)]
    action: SessionAction,
}

#[derive(Subcommand, Debug)]
enum SessionAction {
    Add {
        name: String,
        value: String,
        category: String,
        date: String,
    },
    Delete {
        #[arg(required = true)]
        ids: Vec<String>,
    },
    Select {
        #[arg(required = true)]
        ids: Vec<String>,
    },
    DeleteSelected,
    Search {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        words: Vec<String>,
    },
    Sort {
        field: String,
        direction: Option<String>,
    },
    SortToggle {
        field: String,
    },
    Filter {
        #[command(subcommand)]
        filter: FilterAction,
    },
    Reset,
    Page {
        number: usize,
    },
    PageSize {
        size: usize,
    },
    Chart {
        chart_type: Option<ChartType>,
    },
    Theme,
    Show,
    Help,
    #[command(alias = "exit")]
    Quit,
}

#[derive(Subcommand, Debug)]
enum FilterAction {
    Category { names: Vec<String> },
    Dates { start: String, end: String },
    Values { min: String, max: String },
    Toggle { name: String },
}

enum Step {
    Output(String),
    Quit,
}

pub(super) fn run<R: BufRead, W: Write>(ctx: &mut AppContext, input: R, out: &mut W) -> Result<()> {
    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        match execute(ctx, line) {
            Ok(Step::Output(text)) => out.write_all(text.as_bytes())?,
            Ok(Step::Quit) => break,
            Err(e) => writeln!(out, "{}", format!("Error: {}", e).red())?,
        }
        out.flush()?;
    }
    Ok(())
}

fn execute(ctx: &mut AppContext, line: &str) -> Result<Step> {
    let tokens = split_line(line)?;
    let parsed = match SessionLine::try_parse_from(&tokens) {
        Ok(parsed) => parsed,
        Err(err) if is_help(err.kind()) => return Ok(Step::Output(err.render().to_string())),
        Err(err) => return Err(DashError::InvalidCommand(clap_reason(&err))),
    };
    debug!(action = ?parsed.action, "session action");

    let text = match parsed.action {
        SessionAction::Add {
            name,
            value,
            category,
            date,
        } => {
            let result = ctx.api.add_record(&RecordDraft::new(name, value, category, date))?;
            messages(result)
        }
        SessionAction::Delete { ids } => messages(ctx.api.delete_records(&ids)?),
        SessionAction::Select { ids } => messages(ctx.api.toggle_selection(&ids)?),
        SessionAction::DeleteSelected => messages(ctx.api.delete_selected()?),
        SessionAction::Search { words } => {
            let result = ctx.api.search(&words.join(" "))?;
            ctx.page = 0;
            messages(result)
        }
        SessionAction::Sort { field, direction } => {
            messages(ctx.api.sort(&field, direction.as_deref())?)
        }
        SessionAction::SortToggle { field } => messages(ctx.api.toggle_sort(&field)?),
        SessionAction::Filter { filter } => {
            let result = match filter {
                FilterAction::Category { names } => ctx.api.filter(&FilterInput {
                    categories: Some(names),
                    ..FilterInput::default()
                })?,
                FilterAction::Dates { start, end } => ctx.api.filter(&FilterInput {
                    dates: Some((start, end)),
                    ..FilterInput::default()
                })?,
                FilterAction::Values { min, max } => ctx.api.filter(&FilterInput {
                    values: Some((min, max)),
                    ..FilterInput::default()
                })?,
                FilterAction::Toggle { name } => ctx.api.toggle_category(&name)?,
            };
            ctx.page = 0;
            messages(result)
        }
        SessionAction::Reset => {
            let result = ctx.api.reset_filters()?;
            ctx.page = 0;
            messages(result)
        }
        SessionAction::Page { number } => {
            if number == 0 {
                return Err(DashError::InvalidCommand(
                    "Page numbers start at 1".to_string(),
                ));
            }
            ctx.page = number - 1;
            ctx.table_text()?
        }
        SessionAction::PageSize { size } => {
            ctx.page_size = validate_page_size(size)?;
            ctx.page = 0;
            ctx.table_text()?
        }
        SessionAction::Chart { chart_type } => {
            if let Some(chart_type) = chart_type {
                ctx.chart_type = chart_type;
            }
            ctx.chart_text()?
        }
        SessionAction::Theme => {
            ctx.theme.toggle();
            render_messages(&[CmdMessage::info(format!("Theme: {}", ctx.theme))])
        }
        SessionAction::Show => ctx.table_text()?,
        SessionAction::Help => SESSION_HELP.to_string(),
        SessionAction::Quit => return Ok(Step::Quit),
    };

    Ok(Step::Output(text))
}

fn messages(result: CmdResult) -> String {
    render_messages(&result.messages)
}

fn is_help(kind: ErrorKind) -> bool {
    matches!(
        kind,
        ErrorKind::DisplayHelp
            | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
            | ErrorKind::DisplayVersion
    )
}

/// First line of a clap error, without the `error: ` prefix.
fn clap_reason(err: &clap::Error) -> String {
    let text = err.to_string();
    let first = text.lines().next().unwrap_or_default();
    first.strip_prefix("error: ").unwrap_or(first).trim().to_string()
}

/// Splits a line into words. Double quotes group words (an empty pair is an
/// empty word); inside quotes, `\` escapes the next character.
pub fn split_line(line: &str) -> Result<Vec<String>> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut quoted = false;
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        match c {
            '"' => {
                quoted = !quoted;
                in_token = true;
            }
            '\\' if quoted => {
                if let Some(next) = chars.next() {
                    current.push(next);
                }
            }
            c if c.is_whitespace() && !quoted => {
                if in_token {
                    tokens.push(std::mem::take(&mut current));
                    in_token = false;
                }
            }
            c => {
                current.push(c);
                in_token = true;
            }
        }
    }

    if quoted {
        return Err(DashError::InvalidCommand("Unterminated quote".to_string()));
    }
    if in_token {
        tokens.push(current);
    }
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;
    use salesdash::api::DashboardApi;
    use salesdash::model::{Category, NewRecord, Record};
    use salesdash::theme::Theme;

    fn ctx() -> AppContext {
        let records = vec![
            Record::new(
                "item-0",
                NewRecord::new("Phone", 500.0, Category::Electronics, "2021-02-01"),
            ),
            Record::new(
                "item-1",
                NewRecord::new("Bread", 3.0, Category::Food, "2022-07-14"),
            ),
            Record::new(
                "item-2",
                NewRecord::new("Laptop", 900.0, Category::Electronics, "2023-05-30"),
            ),
        ];
        AppContext {
            api: DashboardApi::new(records),
            theme: Theme::Light,
            chart_type: ChartType::Bar,
            page: 0,
            page_size: 10,
        }
    }

    fn session(ctx: &mut AppContext, script: &str) -> String {
        console::set_colors_enabled(false);
        colored::control::set_override(false);
        let mut out = Vec::new();
        run(ctx, script.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn splits_quoted_words() {
        assert_eq!(
            split_line(r#"add "Desk lamp" 40 Furniture 2021-01-01"#).unwrap(),
            vec!["add", "Desk lamp", "40", "Furniture", "2021-01-01"]
        );
        assert_eq!(split_line(r#"search """#).unwrap(), vec!["search", ""]);
        assert_eq!(
            split_line(r#"add "say \"hi\"""#).unwrap(),
            vec!["add", "say \"hi\""]
        );
        assert!(split_line(r#"add "open"#).is_err());
        assert!(split_line("   ").unwrap().is_empty());
    }

    #[test]
    fn add_then_filter_and_show() {
        let mut ctx = ctx();
        let out = session(
            &mut ctx,
            "add \"Desk lamp\" 40 Furniture 2021-01-01\nfilter category furniture\nshow\n",
        );

        assert!(out.contains("Record added"));
        assert!(out.contains("Showing 1 of 4 records"));
        assert!(out.contains("Desk lamp"));
        assert!(!out.contains("Laptop"));
        assert_eq!(ctx.api.store().records().len(), 4);
    }

    #[test]
    fn bad_lines_do_not_end_the_session() {
        let mut ctx = ctx();
        let out = session(
            &mut ctx,
            "frobnicate\nadd Pie 12 Food 2021-02-30\npage 0\nsort price\ndelete item-0\n",
        );

        assert_eq!(out.matches("Error: ").count(), 4);
        assert!(out.contains("Record deleted"));
        assert_eq!(ctx.api.store().records().len(), 2);
    }

    #[test]
    fn comments_blank_lines_and_quit() {
        let mut ctx = ctx();
        let out = session(&mut ctx, "# setup\n\ndelete item-1\nquit\ndelete item-0\n");

        assert!(out.contains("Record deleted"));
        assert_eq!(ctx.api.store().records().len(), 2);
        assert!(ctx.api.store().get("item-0").is_some());
    }

    #[test]
    fn select_and_delete_selected() {
        let mut ctx = ctx();
        let out = session(&mut ctx, "select item-0 item-2\ndelete-selected\n");

        assert!(out.contains("Deleted 2 selected records"));
        let ids: Vec<_> = ctx.api.store().records().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["item-1"]);
        assert_eq!(ctx.api.store().selected_count(), 0);
    }

    #[test]
    fn sort_toggle_flips_direction() {
        let mut ctx = ctx();
        session(&mut ctx, "sort-toggle value\nsort-toggle value\n");
        let values: Vec<f64> = ctx.api.store().visible().iter().map(|r| r.value).collect();
        assert_eq!(values, vec![900.0, 500.0, 3.0]);
    }

    #[test]
    fn page_size_resets_page() {
        let mut ctx = ctx();
        session(&mut ctx, "page 3\n");
        assert_eq!(ctx.page, 2);

        let out = session(&mut ctx, "page-size 5\n");
        assert_eq!(ctx.page, 0);
        assert_eq!(ctx.page_size, 5);
        assert!(out.contains("Rows 1-3 of 3"));

        let out = session(&mut ctx, "page-size 7\n");
        assert!(out.contains("Error: "));
        assert_eq!(ctx.page_size, 5);
    }

    #[test]
    fn theme_and_chart_update_presentation_state() {
        let mut ctx = ctx();
        let out = session(&mut ctx, "theme\nchart pie\n");

        assert_eq!(ctx.theme, Theme::Dark);
        assert_eq!(ctx.chart_type, ChartType::Pie);
        assert!(out.contains("Theme: dark"));
        assert!(out.contains("Electronics: 1400"));
    }

    #[test]
    fn search_with_several_words() {
        let mut ctx = ctx();
        let out = session(&mut ctx, "search 2021-02 \n");
        assert!(out.contains("Showing 1 of 3 records"));
        assert_eq!(ctx.api.store().search_query(), "2021-02");
    }

    #[test]
    fn help_lists_actions() {
        let mut ctx = ctx();
        let out = session(&mut ctx, "help\n");
        assert!(out.contains("delete-selected"));
        assert!(out.contains("page-size <n>"));
    }
}
