//! lintdigest core library.
//!
//! Reads an ESLint-style JSON report and renders the error-level diagnostics
//! as a plain-text digest grouped by file.
//!
//! High-level modules:
//! - `cli`: CLI argument parsing (binary uses this).
//! - `config`: Discovery of `lintdigest.toml|yaml` and effective settings.
//! - `models`: Report, file result, and diagnostic structs.
//! - `report`: Loading and BOM-tolerant parsing of the report file.
//! - `output`: Digest and error-line printers.
//! - `error`: `ReportLoadError`.
//! - `utils`: Supporting helpers.
pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod report;
pub mod utils;

use std::path::Path;

pub use error::ReportLoadError;

/// Load the report at `input` and print its digest to stdout.
///
/// Nothing is printed when loading fails; the caller decides how to report
/// the error.
pub fn run(input: &Path) -> error::Result<()> {
    let report = report::load_report(input)?;
    if let Err(e) = output::print_digest(&report) {
        // stdout closed (e.g. piped into `head`); nothing left to print
        tracing::debug!(error = %e, "stdout write failed");
    }
    Ok(())
}
