//! CLI argument parsing via `clap`.

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "lintdigest",
    version,
    about = "Summarize error-level diagnostics from an ESLint JSON report",
    long_about = "lintdigest reads an ESLint-style JSON report and prints every error-severity (2) diagnostic, grouped by file.\n\nReport path precedence: INPUT > lintdigest.toml > lint_pages.json.",
    after_help = "Examples:\n  eslint -f json src > lint_pages.json && lintdigest\n  lintdigest reports/eslint.json"
)]
/// Top-level CLI options.
pub struct Cli {
    /// Path to the JSON lint report (default: lint_pages.json)
    pub input: Option<String>,
    #[arg(long, action = clap::ArgAction::SetTrue, help = "Enable debug logging on stderr")]
    pub debug: bool,
}
