//! covfilter core library.
//!
//! This crate normalizes Coverity static-analysis reports into canonical,
//! MISRA-classified, filtered and deterministically ordered defect records.
//!
//! High-level modules:
//! - `classify`: MISRA C:2012 rule tables and checker classification.
//! - `policy`: Ignored directories, excluded rules, and baseline display.
//! - `models`: Canonical records, totals, and the raw report schemas.
//! - `adapter`: Per-generation group filtering and record emission.
//! - `stream`: Report loading and the traversal producing records + totals.
//! - `key`: Sort key for deterministic output order.
//! - `render`: Text, HTML and totals renderings.
//! - `output`: Human/JSON printers.
//! - `run`: The `report` command pipeline and exit codes.
//! - `config`: Discovery and effective configuration resolution.
//! - `cli`: CLI argument parsing (binary uses this).
//! - `error`: Crate error type.
//! - `utils`: Terminal prefixes and logging setup.
pub mod adapter;
pub mod classify;
pub mod cli;
pub mod config;
pub mod error;
pub mod key;
pub mod models;
pub mod output;
pub mod policy;
pub mod render;
pub mod run;
pub mod stream;
pub mod utils;

pub use error::{Error, Result};
