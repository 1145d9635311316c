//! Error type for loading a lint report.
//!
//! Every way the load step can fail maps to one [`ReportLoadError`]; the
//! binary prints it once and exits normally.

use std::path::PathBuf;
use thiserror::Error;

/// Failure to read, decode, or deserialize a lint report.
#[derive(Debug, Error)]
pub enum ReportLoadError {
    /// File missing, unreadable, or a directory.
    #[error("{source}: '{}'", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File contents are not UTF-8.
    #[error("'{}' is not valid UTF-8: {source}", .path.display())]
    Encoding {
        path: PathBuf,
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// Malformed JSON, or JSON that is not an array of file results.
    #[error(transparent)]
    Parse(#[from] serde_json::Error),
}

/// Result type alias for report loading.
pub type Result<T> = std::result::Result<T, ReportLoadError>;
