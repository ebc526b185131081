//! Basic CLI E2E tests.
//!
//! Tests drive the built `studyblocks` binary with piped stdin and an
//! isolated HOME so no real config file is read or written.

use std::io::Write;
use std::process::{Command, Stdio};

/// Run a CLI command with `input` on stdin and return (stdout, stderr, code).
fn run_cli_with_home(
    home: &std::path::Path,
    args: &[&str],
    input: &str,
) -> (String, String, i32) {
    let mut child = Command::new(env!("CARGO_BIN_EXE_studyblocks"))
        .args(args)
        .env("HOME", home)
        .env_remove("STUDYBLOCKS_ENV")
        .env_remove("STUDYBLOCKS_LOG")
        .env("NO_COLOR", "1")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to execute CLI command");

    // The child may exit before reading anything, closing the pipe early.
    let _ = child
        .stdin
        .take()
        .expect("stdin piped")
        .write_all(input.as_bytes());

    let output = child.wait_with_output().expect("Failed to wait on CLI");
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

fn run_cli(args: &[&str], input: &str) -> (String, String, i32) {
    let home = tempfile::tempdir().unwrap();
    run_cli_with_home(home.path(), args, input)
}

#[test]
fn test_default_run_exit() {
    let (stdout, _, code) = run_cli(&[], "2\n");
    assert_eq!(code, 0, "Default run failed");
    assert!(stdout.contains("[Study (15m)] → Break (5m)"));
    assert!(stdout.contains("Current Block: 1/7"));
    assert!(stdout.contains("Total Time Remaining: 75 minutes"));
    assert!(stdout.contains("Enter your choice (1-2): "));
}

#[test]
fn test_run_skip_then_exit() {
    let (stdout, _, code) = run_cli(&["run"], "1\n2\n");
    assert_eq!(code, 0, "Run skip failed");
    assert!(stdout.contains("Current Block: 2/7"));
    assert!(stdout.contains("[Break (5m)] → Study (15m)"));
}

#[test]
fn test_run_invalid_choice() {
    let (stdout, _, code) = run_cli(&["run"], "9\n2\n");
    assert_eq!(code, 0, "Run invalid failed");
    assert!(stdout.contains("Invalid choice. Please try again."));
    assert_eq!(stdout.matches("Current Block: 1/7").count(), 2);
}

#[test]
fn test_run_exhausts_schedule() {
    let (stdout, _, code) = run_cli(&["run"], &"1\n".repeat(8));
    assert_eq!(code, 0, "Run exhaust failed");
    assert!(stdout.contains("No more blocks to skip!"));
}

#[test]
fn test_run_end_of_input() {
    let (_, _, code) = run_cli(&["run"], "");
    assert_eq!(code, 0, "Run EOF failed");
}

#[test]
fn test_run_overrides() {
    let (stdout, _, code) = run_cli(
        &["run", "--study", "25", "--break", "10", "--sessions", "2"],
        "2\n",
    );
    assert_eq!(code, 0, "Run overrides failed");
    assert!(stdout.contains("[Study (25m)] → Break (10m) → Study (25m)"));
    assert!(stdout.contains("Total Time Remaining: 60 minutes"));
}

#[test]
fn test_run_rejects_zero_sessions() {
    let (_, _, code) = run_cli(&["run", "--sessions", "0"], "2\n");
    assert_ne!(code, 0, "Zero sessions unexpectedly accepted");
}

#[test]
fn test_run_rejects_too_many_sessions() {
    let (_, _, code) = run_cli(&["run", "--sessions", "4000000000"], "2\n");
    assert_ne!(code, 0, "Oversized session count unexpectedly accepted");
}

#[test]
fn test_show_color_always() {
    let (stdout, _, code) = run_cli(&["show", "--color", "always"], "");
    assert_eq!(code, 0, "Show with color failed");
    assert!(stdout.contains("\u{1b}[34m[Study (15m)]\u{1b}[0m"));
    assert!(stdout.contains("\u{1b}[32mBreak (5m)\u{1b}[0m"));
}

#[test]
fn test_show_plain() {
    let (stdout, _, code) = run_cli(&["show", "--skip", "1", "--color", "never"], "");
    assert_eq!(code, 0, "Show failed");
    assert!(stdout.contains("Current Block: 2/7"));
    assert!(stdout.lines().any(|l| l.starts_with("[Break (5m)] → Study (15m)")));
    assert!(!stdout.contains('\u{1b}'));
}

#[test]
fn test_show_json() {
    let (stdout, _, code) = run_cli(&["show", "--json", "--skip", "7"], "");
    assert_eq!(code, 0, "Show JSON failed");
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["len"], 7);
    assert_eq!(parsed["cursor"], 7);
    assert_eq!(parsed["total_time"], 75);
    assert_eq!(parsed["finished"], true);
    assert_eq!(parsed["blocks"][0]["kind"], "study");
}

#[test]
fn test_config_set_then_run() {
    let home = tempfile::tempdir().unwrap();
    let (_, _, code) = run_cli_with_home(
        home.path(),
        &["config", "set", "schedule.session_count", "2"],
        "",
    );
    assert_eq!(code, 0, "Config set failed");

    let (stdout, _, code) = run_cli_with_home(
        home.path(),
        &["config", "get", "schedule.session_count"],
        "",
    );
    assert_eq!(code, 0, "Config get failed");
    assert_eq!(stdout.trim(), "2");

    let (stdout, _, code) = run_cli_with_home(home.path(), &["run"], "2\n");
    assert_eq!(code, 0, "Run after config failed");
    assert!(stdout.contains("Current Block: 1/3"));
}

#[test]
fn test_config_get_unknown() {
    let (_, stderr, code) = run_cli(&["config", "get", "schedule.nope"], "");
    assert_ne!(code, 0);
    assert_eq!(stderr, "error: unknown key: schedule.nope\n");
    assert_eq!(stderr.matches("unknown key").count(), 1);
}

#[test]
fn test_config_set_color_any_case() {
    let home = tempfile::tempdir().unwrap();
    let (_, _, code) =
        run_cli_with_home(home.path(), &["config", "set", "display.color", "ALWAYS"], "");
    assert_eq!(code, 0, "Config set color failed");

    let (stdout, _, code) =
        run_cli_with_home(home.path(), &["config", "get", "display.color"], "");
    assert_eq!(code, 0, "Config get color failed");
    assert_eq!(stdout.trim(), "always");
}

#[test]
fn test_config_list() {
    let (stdout, _, code) = run_cli(&["config", "list"], "");
    assert_eq!(code, 0, "Config list failed");
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["schedule"]["study_duration"], 15);
    assert_eq!(parsed["display"]["color"], "auto");
}

#[test]
fn test_completions() {
    let (stdout, _, code) = run_cli(&["completions", "bash"], "");
    assert_eq!(code, 0, "Completions failed");
    assert!(stdout.contains("studyblocks"));
}
