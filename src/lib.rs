//! filecheck core library.
//!
//! This crate walks a directory, probes each file for readability, counts
//! bytes and lines, and reports the results on the console and as JSON.
//!
//! High-level modules:
//! - `cli`: CLI argument parsing (binary uses this).
//! - `config`: Discovery and effective configuration resolution.
//! - `scan`: Directory enumeration with extension and exclude filters.
//! - `probe`: Per-file readability, size and line count.
//! - `aggregate`: Builds the run summary from probe results.
//! - `output`: Human/JSON console printers and the JSON report writer.
//! - `runner`: Wires the pipeline together.
//! - `models`: Report data models.
//! - `error`: Fatal and per-file error types.
//! - `utils`: Supporting helpers.
pub mod aggregate;
pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod probe;
pub mod runner;
pub mod scan;
pub mod utils;
