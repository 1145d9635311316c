//! Output rendering for the error digest.
//!
//! Plain text only. Rendering targets any `io::Write` so the exact bytes can
//! be checked in tests; the `print_*` helpers write to stdout.

use crate::error::ReportLoadError;
use crate::models::{Diagnostic, FileResult, Report};
use crate::utils::basename;
use std::fmt::Display;
use std::io::{self, Write};

/// Separator printed after each file block.
pub const SEPARATOR: &str = "--------------------";

/// Placeholder for a diagnostic field missing from the report.
pub const MISSING: &str = "None";

/// Render every file that has at least one error, in report order.
pub fn render_digest<W: Write>(report: &Report, w: &mut W) -> io::Result<()> {
    for fr in report.iter().filter(|fr| fr.has_errors()) {
        render_file(fr, w)?;
    }
    Ok(())
}

fn render_file<W: Write>(fr: &FileResult, w: &mut W) -> io::Result<()> {
    writeln!(w, "File: {}", basename(&fr.file_path))?;
    for d in fr.errors() {
        render_error(d, w)?;
    }
    writeln!(w, "{}", SEPARATOR)
}

fn render_error<W: Write>(d: &Diagnostic, w: &mut W) -> io::Result<()> {
    writeln!(
        w,
        "  Line {}: {} ({})",
        or_missing(d.line.as_ref()),
        or_missing(d.message.as_ref()),
        or_missing(d.rule_id.as_ref())
    )
}

fn or_missing<T: Display>(v: Option<&T>) -> String {
    v.map(|x| x.to_string()).unwrap_or_else(|| MISSING.to_string())
}

/// Print the digest to stdout.
pub fn print_digest(report: &Report) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    render_digest(report, &mut out)?;
    out.flush()
}

/// Compose the one-line load failure message.
pub fn compose_load_error(err: &ReportLoadError) -> String {
    format!("Error parsing JSON: {}", err)
}

/// Write the load failure line to `w`.
pub fn write_load_error<W: Write>(err: &ReportLoadError, w: &mut W) -> io::Result<()> {
    writeln!(w, "{}", compose_load_error(err))?;
    w.flush()
}

/// Print a load failure to stdout. A closed stdout is logged, not fatal.
pub fn print_load_error(err: &ReportLoadError) {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = write_load_error(err, &mut out) {
        tracing::debug!(error = %e, "stdout write failed");
    }
}
