//! CLI integration tests for the `styl plan` command.
//!
//! Verifies that the printed plan lists entry points in load order and
//! post-processors in execution order.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Get the path to the styl binary.
fn styl_binary() -> PathBuf {
    let release = Path::new("target/release/styl");
    if release.exists() {
        return release.to_path_buf();
    }
    let debug = Path::new("target/debug/styl");
    if debug.exists() {
        return debug.to_path_buf();
    }
    panic!("styl binary not found. Run 'cargo build' first.");
}

/// Run styl plan with the given arguments and return (stdout, stderr, success).
fn run_plan(args: &[&str]) -> (String, String, bool) {
    let output = Command::new(styl_binary())
        .arg("plan")
        .args(args)
        .output()
        .expect("Failed to execute styl");
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    (stdout, stderr, output.status.success())
}

#[test]
fn test_plan_lists_entries_and_steps_in_order() {
    let temp = TempDir::new().unwrap();
    let config_path = temp.path().join("styl.toml");
    fs::write(
        &config_path,
        r#"
css = ["base.css", "theme.css"]

[postcss.plugins.cssnano]
"#,
    )
    .unwrap();

    let (stdout, stderr, success) = run_plan(&["--config", config_path.to_str().unwrap()]);

    assert!(success, "plan failed: {}", stderr);
    assert!(stdout.contains("Entry points:"));
    assert!(stdout.contains("1. base.css"));
    assert!(stdout.contains("2. theme.css"));
    assert!(stdout.contains("Post-processors:"));
    assert!(stdout.contains("1. tailwindcss"));
    assert!(stdout.contains("2. autoprefixer"));
    assert!(stdout.contains("3. cssnano"));
    assert!(stdout.contains("2 entry point(s), 3 post-processor(s)"));
}

#[test]
fn test_plan_shows_overridden_options() {
    let temp = TempDir::new().unwrap();
    let config_path = temp.path().join("styl.json5");
    fs::write(
        &config_path,
        r#"{ postcss: { plugins: { tailwindcss: { mode: 'jit' } } } }"#,
    )
    .unwrap();

    let (stdout, _, success) = run_plan(&["--config", config_path.to_str().unwrap()]);

    assert!(success);
    assert!(stdout.contains(r#"tailwindcss {"mode":"jit"}"#));
    // Default options stay implicit
    assert!(!stdout.contains("autoprefixer {"));
}

#[test]
fn test_plan_without_entries() {
    let temp = TempDir::new().unwrap();
    let config_path = temp.path().join("styl.toml");
    fs::write(&config_path, "css = []").unwrap();

    let (stdout, _, success) = run_plan(&["--config", config_path.to_str().unwrap()]);

    assert!(success);
    assert!(stdout.contains("Entry points: none"));
    assert!(stdout.contains("0 entry point(s), 2 post-processor(s)"));
}

#[test]
fn test_plan_invalid_config_fails() {
    let temp = TempDir::new().unwrap();
    let config_path = temp.path().join("styl.toml");
    fs::write(&config_path, r#"css = "nope""#).unwrap();

    let (_, stderr, success) = run_plan(&["--config", config_path.to_str().unwrap()]);

    assert!(!success);
    assert!(stderr.contains("Error loading config"));
}
