//! Report loading: read the file, drop a BOM, deserialize.
//!
//! Parsing is all-or-nothing; a report that fails anywhere yields a single
//! [`ReportLoadError`] and no partial result.

use crate::error::{ReportLoadError, Result};
use crate::models::Report;
use crate::utils::strip_bom;
use std::fs;
use std::path::Path;

/// Default report location, relative to the working directory.
pub const DEFAULT_INPUT: &str = "lint_pages.json";

/// Read and parse the report at `path`.
pub fn load_report(path: &Path) -> Result<Report> {
    let bytes = fs::read(path).map_err(|source| ReportLoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "read report");
    let text = String::from_utf8(bytes).map_err(|source| ReportLoadError::Encoding {
        path: path.to_path_buf(),
        source,
    })?;
    parse_report(&text)
}

/// Parse report text, tolerating a leading byte-order mark.
pub fn parse_report(text: &str) -> Result<Report> {
    let body = strip_bom(text);
    if body.len() != text.len() {
        tracing::debug!("stripped byte-order mark");
    }
    let report: Report = serde_json::from_str(body)?;
    tracing::debug!(files = report.len(), "parsed report");
    Ok(report)
}
