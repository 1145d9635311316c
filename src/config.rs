//! Configuration discovery and effective settings resolution.
//!
//! lintdigest reads `lintdigest.toml|yaml|yml` from the working directory (or
//! closest ancestor) and merges it with the CLI argument. The only setting is
//! the report location:
//! - `input`: path to the lint report; relative paths resolve against the
//!   directory holding the config file
//!
//! Overrides precedence: CLI > config file > `lint_pages.json`.

use crate::report::DEFAULT_INPUT;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_NAMES: [&str; 3] = ["lintdigest.toml", "lintdigest.yaml", "lintdigest.yml"];

#[derive(Debug, Default, Deserialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
/// Root configuration loaded from `lintdigest.toml|yaml`.
pub struct DigestConfig {
    pub input: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
/// Fully-resolved settings after applying precedence.
pub struct Effective {
    pub input: PathBuf,
    /// Config file that contributed, if any.
    pub config_path: Option<PathBuf>,
}

/// Walk upward from `start` to find the directory holding a config file.
///
/// Stops at the first directory with a config file, or at a `.git`
/// directory (which bounds the search to the current repository).
pub fn detect_config_dir(start: &Path) -> Option<PathBuf> {
    let mut cur = start;
    loop {
        if CONFIG_NAMES.iter().any(|n| cur.join(n).is_file()) {
            return Some(cur.to_path_buf());
        }
        if cur.join(".git").exists() {
            return None;
        }
        cur = cur.parent()?;
    }
}

/// Load `DigestConfig` from `dir`, returning the file it came from.
///
/// A config file that cannot be read or parsed is reported and skipped.
pub fn load_config(dir: &Path) -> Option<(PathBuf, DigestConfig)> {
    for name in CONFIG_NAMES {
        let p = dir.join(name);
        if !p.is_file() {
            continue;
        }
        let s = match fs::read_to_string(&p) {
            Ok(s) => s,
            Err(e) => {
                tracing::warn!(path = %p.display(), error = %e, "cannot read config; using defaults");
                return None;
            }
        };
        let parsed = if name.ends_with(".toml") {
            toml::from_str::<DigestConfig>(&s).map_err(|e| e.to_string())
        } else {
            serde_yaml::from_str::<DigestConfig>(&s).map_err(|e| e.to_string())
        };
        return match parsed {
            Ok(cfg) => Some((p, cfg)),
            Err(e) => {
                tracing::warn!(path = %p.display(), error = %e, "invalid config; using defaults");
                None
            }
        };
    }
    None
}

/// Resolve `Effective` by merging the CLI argument, discovered config, and
/// the default input path.
pub fn resolve_effective(cli_input: Option<&str>, cwd: &Path) -> Effective {
    let found = detect_config_dir(cwd).and_then(|dir| load_config(&dir).map(|c| (dir, c)));
    let config_path = found.as_ref().map(|(_, (p, _))| p.clone());
    if let Some(p) = &config_path {
        tracing::debug!(config = %p.display(), "loaded config");
    }

    let input = match (cli_input, found) {
        (Some(s), _) => PathBuf::from(s),
        (None, Some((dir, (cfg_path, cfg)))) => match cfg.input {
            Some(s) => {
                let p = dir.join(s);
                tracing::info!(
                    config = %cfg_path.display(),
                    input = %p.display(),
                    "using report path from config"
                );
                p
            }
            None => PathBuf::from(DEFAULT_INPUT),
        },
        (None, None) => PathBuf::from(DEFAULT_INPUT),
    };
    tracing::debug!(input = %input.display(), "resolved report path");

    Effective { input, config_path }
}
