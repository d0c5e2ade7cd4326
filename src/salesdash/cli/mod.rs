//! # CLI Behavior
//!
//! This is **one possible UI client** for the dashboard, not the application itself.
//! The CLI is the only place that knows about terminal I/O, exit codes, and output formatting.
//!
//! ## Naked Execution (`salesdash`)
//!
//! Running `salesdash` with no arguments shows the first page of the table.
//!
//! ## Data Lifetime
//!
//! Records are generated at startup (seeded by `--seed` or the `seed` config key)
//! and live only for the process. One-shot commands (`table`, `chart`) derive a
//! single view; `session` keeps the store alive across stdin lines so adds,
//! deletes and selections accumulate.
//!
//! ## Module Structure
//!
//! - `commands`: Context setup and per-command handlers
//! - `render`: Output formatting (table, charts, messages)
//! - `session`: Line parser and loop for interactive sessions
//! - `setup`: Argument parsing via clap
//! - `styles`: Per-theme terminal styles

mod commands;
mod render;
mod session;
pub mod setup;
mod styles;

pub use commands::run;
