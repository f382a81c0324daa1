//! Integration tests for CLI output behavior
//!
//! The default behavior is quiet (errors only). Use -v/--verbose to enable
//! info-level JSON logs on stderr. stdout only carries command output.

use std::path::Path;
use std::process::Command;

fn run_show(home: &Path, verbose: bool) -> std::process::Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_vpnode"));
    if verbose {
        cmd.arg("-v");
    }
    cmd.arg("--home")
        .arg(home)
        .args(["config", "show"])
        .output()
        .expect("Failed to execute 'vpnode config show'")
}

fn init_home(home: &Path) {
    let output = Command::new(env!("CARGO_BIN_EXE_vpnode"))
        .arg("--home")
        .arg(home)
        .args(["config", "init"])
        .output()
        .expect("Failed to execute 'vpnode config init'");
    assert!(
        output.status.success(),
        "init failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

/// Verify that stdout contains only rendered config lines (no JSON logs)
#[test]
fn test_show_stdout_is_clean() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    init_home(temp_dir.path());

    let output = run_show(temp_dir.path(), true);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    for line in stdout.lines().filter(|l| !l.trim().is_empty()) {
        assert!(
            !line.trim().starts_with('{'),
            "stdout contains JSON line: {}",
            line
        );
        assert!(line.contains(": "), "unexpected stdout line: {}", line);
    }
}

/// Verify that default mode suppresses INFO-level logs
#[test]
fn test_default_mode_suppresses_info_logs() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    init_home(temp_dir.path());

    let output = run_show(temp_dir.path(), false);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(
        !stderr.contains(r#""level":"INFO""#),
        "Default mode should suppress INFO logs, but stderr contains: {}",
        stderr
    );
}

/// Verify that verbose mode emits structured INFO events on stderr
#[test]
fn test_verbose_mode_emits_json_events() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    init_home(temp_dir.path());

    let output = run_show(temp_dir.path(), true);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(
        stderr.contains(r#""level":"INFO""#),
        "Verbose mode should emit INFO logs, got: {}",
        stderr
    );
    assert!(
        stderr.contains("cli.config_show_completed"),
        "Expected show completion event, got: {}",
        stderr
    );
}

/// Verify that errors are reported as a readable message, not a debug dump
#[test]
fn test_error_message_is_human_readable() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");

    let output = run_show(temp_dir.path(), false);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(
        stderr.contains("Error: Config file not found at"),
        "got: {}",
        stderr
    );
    assert!(!stderr.contains("NotFound {"), "got: {}", stderr);
}

/// Verify that a failing command logs its error code in verbose mode
#[test]
fn test_verbose_error_event_carries_code() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");

    let output = run_show(temp_dir.path(), true);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(
        stderr.contains("core.app.error_occurred"),
        "Expected app error event, got: {}",
        stderr
    );
    assert!(stderr.contains("CONFIG_NOT_FOUND"), "got: {}", stderr);
    assert!(stderr.contains(r#""level":"WARN""#), "got: {}", stderr);
}
