//! Integration tests for the lintdigest binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const APP_REPORT: &str = r#"[{"filePath":"/x/y/App.js","messages":[{"severity":2,"line":10,"message":"unused var","ruleId":"no-unused-vars"},{"severity":1,"line":20,"message":"style","ruleId":"quotes"}]}]"#;

const APP_DIGEST: &str = "File: App.js\n  Line 10: unused var (no-unused-vars)\n--------------------\n";

/// Temp working dir bounded by `.git` so no ancestor config leaks in.
fn setup_workdir() -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join(".git")).unwrap();
    temp
}

fn digest_cmd(temp: &TempDir) -> Command {
    let mut cmd = Command::new(cargo_bin("lintdigest"));
    cmd.current_dir(temp.path()).env_remove("RUST_LOG");
    cmd
}

#[test]
fn cli_reads_default_report() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_workdir();
    fs::write(temp.path().join("lint_pages.json"), APP_REPORT)?;
    digest_cmd(&temp)
        .assert()
        .success()
        .stdout(APP_DIGEST)
        .stderr(predicate::str::is_empty());
    Ok(())
}

#[test]
fn cli_accepts_bom_prefixed_report() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_workdir();
    let mut bytes = b"\xEF\xBB\xBF".to_vec();
    bytes.extend_from_slice(APP_REPORT.as_bytes());
    fs::write(temp.path().join("lint_pages.json"), bytes)?;
    digest_cmd(&temp)
        .assert()
        .success()
        .stdout(APP_DIGEST);
    Ok(())
}

#[test]
fn cli_empty_report_prints_nothing() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_workdir();
    fs::write(temp.path().join("lint_pages.json"), "[]")?;
    digest_cmd(&temp)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
    Ok(())
}

#[test]
fn cli_malformed_report_prints_one_error_line() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_workdir();
    fs::write(temp.path().join("lint_pages.json"), "not json")?;
    let out = digest_cmd(&temp).assert().success().get_output().clone();
    let stdout = String::from_utf8(out.stdout)?;
    let lines: Vec<_> = stdout.lines().collect();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with("Error parsing JSON:"));
    Ok(())
}

#[test]
fn cli_missing_report_exits_zero() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_workdir();
    digest_cmd(&temp)
        .assert()
        .code(0)
        .stdout(predicate::str::starts_with("Error parsing JSON:"))
        .stdout(predicate::str::contains("lint_pages.json"));
    Ok(())
}

#[test]
fn cli_wrong_shape_is_load_error() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_workdir();
    fs::write(temp.path().join("lint_pages.json"), r#"{"filePath":"a.js"}"#)?;
    digest_cmd(&temp)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Error parsing JSON:"));
    Ok(())
}

#[test]
fn cli_positional_input_overrides_config() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_workdir();
    fs::write(temp.path().join("lintdigest.toml"), "input = \"missing.json\"\n")?;
    fs::write(temp.path().join("eslint.json"), APP_REPORT)?;
    digest_cmd(&temp)
        .arg("eslint.json")
        .assert()
        .success()
        .stdout(APP_DIGEST);
    Ok(())
}

#[test]
fn cli_uses_config_input() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_workdir();
    fs::create_dir(temp.path().join("reports"))?;
    fs::write(temp.path().join("reports/eslint.json"), APP_REPORT)?;
    fs::write(
        temp.path().join("lintdigest.toml"),
        "input = \"reports/eslint.json\"\n",
    )?;
    digest_cmd(&temp)
        .assert()
        .success()
        .stdout(APP_DIGEST)
        .stderr(predicate::str::contains("using report path from config"));
    Ok(())
}

#[test]
fn cli_lenient_fields_still_print() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_workdir();
    fs::write(
        temp.path().join("lint_pages.json"),
        r#"[{"filePath":"/a/A.js","messages":[{"severity":2,"line":"7","message":"m","ruleId":"r"},{"severity":1.0,"line":2,"message":"w","ruleId":"q"}]}]"#,
    )?;
    digest_cmd(&temp)
        .assert()
        .success()
        .stdout("File: A.js\n  Line 7: m (r)\n--------------------\n");
    Ok(())
}

#[test]
fn cli_debug_logs_to_stderr_only() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_workdir();
    fs::write(temp.path().join("lint_pages.json"), APP_REPORT)?;
    digest_cmd(&temp)
        .arg("--debug")
        .assert()
        .success()
        .stdout(APP_DIGEST)
        .stderr(predicate::str::contains("resolved report path"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_workdir();
    digest_cmd(&temp)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}
