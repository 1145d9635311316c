//! Data models for the lint report consumed by the digest.
//!
//! Field names follow the ESLint JSON formatter (`filePath`, `ruleId`, ...).
//! Every field is optional in the source data; `null` and absence are treated
//! the same way.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Severity levels used by ESLint-style reports.
pub mod severity {
    pub const OFF: i64 = 0;
    pub const WARNING: i64 = 1;
    pub const ERROR: i64 = 2;
}

/// Top-level report: one entry per linted file, in report order.
pub type Report = Vec<FileResult>;

#[derive(Debug, Default, Deserialize, Clone, PartialEq)]
/// Lint results for a single file.
pub struct FileResult {
    #[serde(default, rename = "filePath", deserialize_with = "null_as_default")]
    pub file_path: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub messages: Vec<Diagnostic>,
}

#[derive(Debug, Default, Deserialize, Clone, PartialEq)]
/// A single lint finding.
///
/// Display fields hold their rendered text: strings as-is, any other JSON
/// value in its JSON form. An off-type value never rejects the report.
pub struct Diagnostic {
    #[serde(default, deserialize_with = "loose_text")]
    pub line: Option<String>,
    #[serde(default, deserialize_with = "loose_text")]
    pub message: Option<String>,
    #[serde(default, rename = "ruleId", deserialize_with = "loose_text")]
    pub rule_id: Option<String>,
    #[serde(default, deserialize_with = "loose_severity")]
    pub severity: Option<i64>,
}

impl Diagnostic {
    pub fn is_error(&self) -> bool {
        self.severity == Some(severity::ERROR)
    }
}

impl FileResult {
    /// Error-level diagnostics, in their original order.
    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.messages.iter().filter(|m| m.is_error())
    }

    pub fn has_errors(&self) -> bool {
        self.errors().next().is_some()
    }
}

// `null` is treated as absent on purpose: a file with `"messages": null`
// simply has nothing to report.
fn null_as_default<'de, D, T>(de: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(de)?.unwrap_or_default())
}

fn loose_text<'de, D>(de: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(de)? {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    })
}

/// Integral numbers only (`2` and `2.0` alike); anything else has no level.
fn loose_severity<'de, D>(de: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(de)? {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && f.is_finite())
                .map(|f| f as i64)
        }),
        _ => None,
    })
}
