//! costsplit - Business expense distribution from the command line
//!
//! This library provides the core functionality for the costsplit tool. It
//! recovers the monthly per-project baseline split from a loosely-structured
//! distribution spreadsheet, rescales it proportionally to a new target
//! total, and records expense entries into append-only CSV ledgers.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration, reference lists, and path management
//! - `error`: Custom error types
//! - `models`: Core data models (money, periods, baselines, entries)
//! - `source`: Tabular input boundary (CSV files, in-memory tables)
//! - `sink`: Append-only ledger output boundary
//! - `services`: Business logic layer
//! - `display`: Terminal table rendering
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use costsplit::config::{paths::CostsplitPaths, settings::Settings};
//!
//! let paths = CostsplitPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod sink;
pub mod source;

pub use error::CostsplitError;
