//! # CLI Dispatch
//!
//! - `run()`: parses arguments and dispatches (called by `main.rs`)
//! - `init_context()`: builds `AppContext` from config and global flags
//! - `handle_*()`: per-command handlers that call the API and print the output
//!
//! Command-line flags win over `config.json`, which wins over built-in defaults.

use super::render::{print_messages, render_chart, render_json, render_table};
use super::session;
use super::setup::{Cli, Commands, TableArgs};
use super::styles::palette;
use clap::Parser;
use directories::ProjectDirs;
use salesdash::api::{CmdMessage, DashboardApi, FilterInput};
use salesdash::chart::ChartType;
use salesdash::config::{validate_page_size, DashConfig, CONFIG_KEYS};
use salesdash::error::{DashError, Result};
use salesdash::generator::{generate_random, generate_seeded};
use salesdash::page::{PageInfo, DEFAULT_PAGE_SIZE};
use salesdash::sort::SortDirection;
use salesdash::theme::Theme;
use std::io;
use std::path::PathBuf;
use tracing::{debug, warn};

const HOME_ENV: &str = "SALESDASH_HOME";

pub(super) struct AppContext {
    pub api: DashboardApi,
    pub theme: Theme,
    pub chart_type: ChartType,
    /// Zero-based page of the table.
    pub page: usize,
    pub page_size: usize,
}

impl AppContext {
    /// The current table page, rendered.
    pub fn table_text(&self) -> Result<String> {
        let result = self.api.view(self.page, self.page_size)?;
        let page = result.page.unwrap_or_else(|| {
            PageInfo::new(self.page, self.page_size, self.api.store().visible().len())
        });
        Ok(render_table(
            &result.listed_records,
            &page,
            self.api.store(),
            palette(self.theme),
        ))
    }

    /// Category totals of the full record set, rendered.
    pub fn chart_text(&self) -> Result<String> {
        let result = self.api.chart()?;
        Ok(render_chart(&result.chart, self.chart_type, palette(self.theme)))
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.no_color {
        console::set_colors_enabled(false);
        colored::control::set_override(false);
    }

    // Config doesn't need records
    if let Some(Commands::Config { key, value }) = &cli.command {
        return handle_config(key.as_deref(), value.as_deref());
    }

    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Table(args)) => handle_table(&mut ctx, args),
        Some(Commands::Chart { chart_type }) => handle_chart(&mut ctx, chart_type),
        Some(Commands::Session) => handle_session(&mut ctx),
        Some(Commands::Config { .. }) => Ok(()),
        None => handle_table(&mut ctx, TableArgs::default()),
    }
}

fn config_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "salesdash", "salesdash")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| DashError::Config("Could not determine config dir".into()))
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let config = match config_dir().and_then(DashConfig::load) {
        Ok(config) => config,
        Err(e) => {
            warn!(error = %e, "ignoring unreadable config");
            DashConfig::default()
        }
    };

    let page_size = validate_page_size(config.page_size).unwrap_or_else(|e| {
        warn!(error = %e, "falling back to default page size");
        DEFAULT_PAGE_SIZE
    });

    let count = cli.count.unwrap_or(config.record_count);
    let records = match cli.seed.or(config.seed) {
        Some(seed) => generate_seeded(count, seed),
        None => generate_random(count),
    };
    debug!(count, "generated records");

    Ok(AppContext {
        api: DashboardApi::new(records),
        theme: cli.theme.unwrap_or(config.theme),
        chart_type: config.chart_type,
        page: 0,
        page_size,
    })
}

fn handle_table(ctx: &mut AppContext, args: TableArgs) -> Result<()> {
    if let Some(query) = &args.search {
        ctx.api.search(query)?;
    }

    let input = table_filter_input(&args);
    if input != FilterInput::default() {
        ctx.api.filter(&input)?;
    }

    if let Some(field) = args.sort {
        let direction = if args.desc {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        };
        ctx.api.sort(field.as_str(), Some(direction.as_str()))?;
    }

    if let Some(size) = args.page_size {
        ctx.page_size = validate_page_size(size)?;
    }
    ctx.page = match args.page {
        Some(0) => {
            return Err(DashError::InvalidCommand(
                "Page numbers start at 1".to_string(),
            ))
        }
        Some(page) => page - 1,
        None => 0,
    };

    if args.json {
        let result = ctx.api.view(ctx.page, ctx.page_size)?;
        let page = result.page.unwrap_or_else(|| {
            PageInfo::new(ctx.page, ctx.page_size, ctx.api.store().visible().len())
        });
        print!("{}", render_json(&result.listed_records, &page)?);
        return Ok(());
    }

    print!("{}", ctx.table_text()?);
    Ok(())
}

fn table_filter_input(args: &TableArgs) -> FilterInput {
    let range = |low: &Option<String>, high: &Option<String>| {
        if low.is_none() && high.is_none() {
            None
        } else {
            Some((
                low.clone().unwrap_or_default(),
                high.clone().unwrap_or_default(),
            ))
        }
    };

    FilterInput {
        categories: (!args.categories.is_empty()).then(|| args.categories.clone()),
        dates: range(&args.from, &args.to),
        values: range(&args.min, &args.max),
    }
}

fn handle_chart(ctx: &mut AppContext, chart_type: Option<ChartType>) -> Result<()> {
    if let Some(chart_type) = chart_type {
        ctx.chart_type = chart_type;
    }
    print!("{}", ctx.chart_text()?);
    Ok(())
}

fn handle_session(ctx: &mut AppContext) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    session::run(ctx, stdin.lock(), &mut stdout.lock())
}

fn handle_config(key: Option<&str>, value: Option<&str>) -> Result<()> {
    let dir = config_dir()?;
    let mut config = DashConfig::load(&dir)?;

    match (key, value) {
        (None, _) => {
            for key in CONFIG_KEYS {
                println!("{} = {}", key, config.get(key)?);
            }
        }
        (Some(key), None) => println!("{} = {}", key, config.get(key)?),
        (Some(key), Some(value)) => {
            config.set(key, value)?;
            config.save(&dir)?;
            print_messages(&[CmdMessage::success(format!(
                "{} = {}",
                key,
                config.get(key)?
            ))]);
        }
    }
    Ok(())
}
