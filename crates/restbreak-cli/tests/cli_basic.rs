//! Basic CLI E2E tests.
//!
//! Tests invoke the built binary with an isolated config directory and
//! verify outputs.

use std::path::Path;
use std::process::Command;

/// Run a CLI command against `home` and return (stdout, stderr, code).
fn run_cli(home: &Path, args: &[&str]) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_restbreak-cli"))
        .env("RESTBREAK_HOME", home)
        .env_remove("RESTBREAK_LOG")
        .args(args)
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

fn write_events(dir: &Path, json: &str) -> String {
    let path = dir.join("events.json");
    std::fs::write(&path, json).unwrap();
    path.to_string_lossy().into_owned()
}

const EVENTS: &str = r#"[
    {"type": "tick"},
    {"type": "tick"},
    {"type": "tick"},
    {"type": "idle", "secs": 1},
    {"type": "tiny_break_taken"},
    {"type": "tiny_break_skipped"}
]"#;

#[test]
fn test_stats_replay_table() {
    let home = tempfile::tempdir().unwrap();
    let file = write_events(home.path(), EVENTS);

    let (stdout, stderr, code) =
        run_cli(home.path(), &["stats", "replay", &file, "--at", "10:30:00"]);

    assert_eq!(code, 0, "stderr: {stderr}");
    assert!(stdout.contains("Total recorded time"));
    assert!(stdout.contains("0:00:04"));
    assert!(stdout.contains("75.0% (#bf2800)"));
    assert!(stdout.contains("10:30:00"));
}

#[test]
fn test_stats_replay_json() {
    let home = tempfile::tempdir().unwrap();
    let file = write_events(home.path(), EVENTS);

    let (stdout, stderr, code) =
        run_cli(home.path(), &["stats", "replay", &file, "--json", "--at", "10:30:00"]);
    assert_eq!(code, 0, "stderr: {stderr}");

    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let metrics = parsed.as_array().unwrap();
    assert_eq!(metrics.len(), 14);
    assert_eq!(metrics[0]["id"], "total_time");
    assert_eq!(metrics[0]["value"]["value"], 4);
    assert_eq!(metrics[13]["id"], "pause_score");
    assert_eq!(metrics[13]["text"], "0.0%");
    assert_eq!(metrics[6]["text"], "10:30:00");
}

#[test]
fn test_stats_replay_rejects_bad_events() {
    let home = tempfile::tempdir().unwrap();
    let file = write_events(home.path(), r#"[{"type": "nap"}]"#);

    let (_, stderr, code) = run_cli(home.path(), &["stats", "replay", &file]);
    assert_eq!(code, 1);
    assert!(stderr.contains("error:"));
}

#[test]
fn test_stats_replay_rejects_oversized_idle_run() {
    let home = tempfile::tempdir().unwrap();
    let file = write_events(
        home.path(),
        r#"[{"type": "tick"}, {"type": "idle", "secs": 18446744073709551615}]"#,
    );

    let (stdout, stderr, code) = run_cli(home.path(), &["stats", "replay", &file]);
    assert_eq!(code, 1);
    assert!(stdout.is_empty());
    assert!(stderr.contains("exceeds the 604800s limit"), "stderr: {stderr}");
}

#[test]
fn test_stats_describe() {
    let home = tempfile::tempdir().unwrap();
    let (stdout, _, code) = run_cli(home.path(), &["stats", "describe"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("PauseScore: Pause score"));
    assert_eq!(stdout.lines().count(), 28);
}

#[test]
fn test_config_set_changes_replay_output() {
    let home = tempfile::tempdir().unwrap();
    let file = write_events(home.path(), EVENTS);

    let (stdout, _, code) = run_cli(home.path(), &["config", "set", "display.duration_style", "words"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "ok");

    let (stdout, _, code) = run_cli(home.path(), &["config", "get", "display.duration_style"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "words");

    let (stdout, _, code) = run_cli(home.path(), &["stats", "replay", &file, "--at", "10:30:00"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("4s"));
}

#[test]
fn test_config_rejects_unknown_key() {
    let home = tempfile::tempdir().unwrap();
    let (_, stderr, code) = run_cli(home.path(), &["config", "set", "display.colour", "red"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("Unknown configuration key"));
}
