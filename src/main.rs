//! lintdigest CLI binary entry point.
//! Resolves the report path, prints the digest, and reports load failures.

use clap::Parser;
use lintdigest::cli::Cli;
use lintdigest::{config, output};
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize tracing on stderr.
///
/// `--debug` forces debug level; otherwise `RUST_LOG` applies, falling back
/// to info. Logs go to stderr so stdout carries nothing but the digest.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("lintdigest=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("lintdigest=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.debug);
    tracing::debug!("lintdigest starting with args: {:?}", cli);

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let eff = config::resolve_effective(cli.input.as_deref(), &cwd);

    // Load failures are reported on stdout and still exit 0
    if let Err(e) = lintdigest::run(&eff.input) {
        tracing::debug!(error = ?e, "report load failed");
        output::print_load_error(&e);
    }
}
