//! # Salesdash Architecture
//!
//! Salesdash is a **UI-agnostic data-view library** for a small sales dashboard. The
//! terminal binary is one client of it; the same core could sit behind a browser
//! front-end or a TUI without changes.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments and session lines, renders tables/charts│
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs, commands/)                              │
//! │  - Validates raw user input (drafts, filter values)         │
//! │  - Dispatches one Action at a time into the store           │
//! │  - Returns structured CmdResult values                      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Store (store/)                                             │
//! │  - Full record set, filter/search/sort config, selection    │
//! │  - Recomputes the derived visible list on every mutation    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Pipeline (filter.rs, sort.rs, page.rs)                     │
//! │  - Pure functions: inclusion test, ordering, windowing      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Derivation Pipeline
//!
//! The store keeps the full record set as the source of truth. Any change to the
//! records, the filters or the search query re-runs `filter -> sort` over the full
//! set and replaces the visible list. A change to the sort alone re-sorts the
//! current visible list instead. Pagination is never stored: the client asks for a
//! page of the visible list at render time.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes regular Rust arguments, returns regular Rust
//! types and never prints. Diagnostics go through `tracing`; the binary decides
//! where they end up.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Result and message types returned by the API
//! - [`store`]: The record store and its `Action` messages
//! - [`filter`], [`sort`], [`page`]: The derivation pipeline
//! - [`model`]: Core data types (`Record`, `Category`, `RecordDraft`)
//! - [`chart`]: Per-category aggregation for the chart panel
//! - [`generator`]: Mock record generation
//! - [`theme`]: Light/dark theme state
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod chart;
pub mod commands;
pub mod config;
pub mod error;
pub mod filter;
pub mod generator;
pub mod model;
pub mod page;
pub mod sort;
pub mod store;
pub mod theme;
