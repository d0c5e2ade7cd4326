use clap::{Args, Parser, Subcommand};
use salesdash::chart::ChartType;
use salesdash::sort::SortField;
use salesdash::theme::Theme;

#[derive(Parser, Debug)]
#[command(name = "salesdash", bin_name = "salesdash", version)]
#[command(about = "Sales records dashboard for the terminal", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Seed for the generated records (overrides config)
    #[arg(long, global = true, help_heading = "Options")]
    pub seed: Option<u64>,

    /// Number of records to generate (overrides config)
    #[arg(long, global = true, help_heading = "Options")]
    pub count: Option<usize>,

    /// Color theme: light or dark (overrides config)
    #[arg(long, global = true, help_heading = "Options")]
    pub theme: Option<Theme>,

    /// Disable colored output
    #[arg(long, global = true, help_heading = "Options")]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show one page of the records table
    #[command(alias = "t", display_order = 1)]
    Table(TableArgs),

    /// Chart per-category totals
    #[command(alias = "c", display_order = 2)]
    Chart {
        /// Chart kind: bar, line or pie
        #[arg(long = "type", short = 't')]
        chart_type: Option<ChartType>,
    },

    /// Read actions from stdin, one per line
    #[command(alias = "s", display_order = 3)]
    Session,

    /// Get or set configuration
    #[command(display_order = 4)]
    Config {
        /// Configuration key (record-count, page-size, chart-type, theme, seed)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

#[derive(Args, Debug, Default)]
pub struct TableArgs {
    /// Free-text search over name, category, value and date
    #[arg(short, long)]
    pub search: Option<String>,

    /// Only show these categories (repeatable)
    #[arg(short, long = "category")]
    pub categories: Vec<String>,

    /// Earliest date, YYYY-MM-DD
    #[arg(long)]
    pub from: Option<String>,

    /// Latest date, YYYY-MM-DD
    #[arg(long)]
    pub to: Option<String>,

    /// Smallest value
    #[arg(long)]
    pub min: Option<String>,

    /// Largest value
    #[arg(long)]
    pub max: Option<String>,

    /// Sort column: name, value, category or date
    #[arg(long)]
    pub sort: Option<SortField>,

    /// Sort descending
    #[arg(long, requires = "sort")]
    pub desc: bool,

    /// Page number, starting at 1
    #[arg(short, long)]
    pub page: Option<usize>,

    /// Rows per page: 5, 10, 25 or 50 (overrides config)
    #[arg(long)]
    pub page_size: Option<usize>,

    /// Print the page as JSON
    #[arg(long)]
    pub json: bool,
}
