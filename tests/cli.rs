//! Integration tests for the stx command line.
//!
//! Each test feeds a text line plus pattern lines to the binary, either on
//! stdin or through a file, and checks the exact output.

use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};
use tempfile::tempdir;

/// Run stx with `input` on stdin
///
/// Stdout is a pipe, so `--color auto` never colors.
fn run_stx(args: &[&str], input: &[u8]) -> (String, String, bool) {
    let mut child = Command::new(env!("CARGO_BIN_EXE_stx"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to run stx");

    // stx may exit before reading stdin on bad arguments
    if let Some(mut stdin) = child.stdin.take() {
        let _ = stdin.write_all(input);
    }

    let output = child.wait_with_output().expect("Failed to wait for stx");
    (
        String::from_utf8_lossy(&output.stdout).to_string(),
        String::from_utf8_lossy(&output.stderr).to_string(),
        output.status.success(),
    )
}

/// Run stx on a file argument
fn run_stx_file(args: &[&str], path: &Path) -> (String, String, bool) {
    let output = Command::new(env!("CARGO_BIN_EXE_stx"))
        .args(args)
        .arg(path)
        .stdin(Stdio::null())
        .output()
        .expect("Failed to run stx");

    (
        String::from_utf8_lossy(&output.stdout).to_string(),
        String::from_utf8_lossy(&output.stderr).to_string(),
        output.status.success(),
    )
}

#[test]
fn test_banana_queries() {
    let (stdout, stderr, ok) = run_stx(&[], b"banana\nana\nna\nxyz\nbanana\n");

    assert!(ok, "stx failed: {}", stderr);
    assert_eq!(stdout, "1: 2, 4\n2: 3, 5\n4: 1\n");
}

#[test]
fn test_explicit_search_subcommand() {
    let (stdout, _, ok) = run_stx(&["search"], b"banana\nana\n");

    assert!(ok);
    assert_eq!(stdout, "1: 2, 4\n");
}

#[test]
fn test_zero_based_positions() {
    let (stdout, _, ok) = run_stx(&["--zero-based"], b"banana\nana\nb\n");

    assert!(ok);
    assert_eq!(stdout, "1: 1, 3\n2: 0\n");
}

#[test]
fn test_overlapping_occurrences() {
    let (stdout, _, ok) = run_stx(&[], b"aaaa\naa\naaaa\naaaaa\n");

    assert!(ok);
    assert_eq!(stdout, "1: 1, 2, 3\n2: 1\n");
}

#[test]
fn test_blank_line_ends_patterns() {
    let (stdout, _, ok) = run_stx(&[], b"abcabc\nbc\n\nab\n");

    assert!(ok);
    assert_eq!(stdout, "1: 2, 5\n");
}

#[test]
fn test_crlf_input() {
    let (stdout, _, ok) = run_stx(&[], b"abcabc\r\nbc\r\nca\r\n");

    assert!(ok);
    assert_eq!(stdout, "1: 2, 5\n2: 3\n");
}

#[test]
fn test_text_without_patterns() {
    let (stdout, _, ok) = run_stx(&[], b"banana");

    assert!(ok);
    assert!(stdout.is_empty());
}

#[test]
fn test_json_output() {
    let (stdout, _, ok) = run_stx(&["--format", "json"], b"banana\nana\nxyz\n");

    assert!(ok);
    let lines: Vec<serde_json::Value> = stdout
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();

    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0]["pattern"], 1);
    assert_eq!(lines[0]["positions"], serde_json::json!([2, 4]));
    assert_eq!(lines[1]["pattern"], 2);
    assert_eq!(lines[1]["positions"], serde_json::json!([]));
}

#[test]
fn test_timing_lines() {
    let (stdout, _, ok) = run_stx(&["--timing"], b"banana\nana\nxyz\n");

    assert!(ok);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "1: 2, 4");
    assert!(lines[1].starts_with("time: ") && lines[1].ends_with("ms"));
    assert!(lines[2].starts_with("time: "));
}

#[test]
fn test_input_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("input.txt");
    fs::write(&path, b"mississippi\nissi\nss\n").unwrap();

    let (stdout, stderr, ok) = run_stx_file(&["--color=never"], &path);

    assert!(ok, "stx failed: {}", stderr);
    assert_eq!(stdout, "1: 2, 5\n2: 3, 6\n");
}

#[test]
fn test_config_file() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("stx.json");
    fs::write(&config, r#"{"one_based": false, "format": "json"}"#).unwrap();

    let (stdout, _, ok) = run_stx(&["--config", config.to_str().unwrap()], b"banana\nna\n");

    assert!(ok);
    assert_eq!(stdout, "{\"pattern\":1,\"positions\":[2,4]}\n");
}

#[test]
fn test_flags_override_config() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("stx.json");
    fs::write(&config, r#"{"format": "json"}"#).unwrap();

    let (stdout, _, ok) = run_stx(
        &["--config", config.to_str().unwrap(), "--format", "text"],
        b"banana\nna\n",
    );

    assert!(ok);
    assert_eq!(stdout, "1: 3, 5\n");
}

#[test]
fn test_missing_input_file() {
    let (_, stderr, ok) = run_stx_file(&[], Path::new("/nonexistent/input.txt"));

    assert!(!ok);
    assert!(stderr.contains("/nonexistent/input.txt"));
}

#[test]
fn test_bad_config_file() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("stx.json");
    fs::write(&config, "{ not json").unwrap();

    let (_, stderr, ok) = run_stx(&["--config", config.to_str().unwrap()], b"banana\n");

    assert!(!ok);
    assert!(stderr.contains("stx.json"));
}

#[test]
fn test_stats_subcommand() {
    let (stdout, _, ok) = run_stx(&["stats"], b"banana\nignored\n");

    assert!(ok);
    assert!(stdout.contains("Suffix Tree Statistics"));
    assert!(stdout.contains("Text size:        7 bytes"));
    assert!(stdout.contains("Leaves:           7"));
}

#[test]
fn test_stats_json() {
    let (stdout, _, ok) = run_stx(&["stats", "--format", "json"], b"banana\n");

    assert!(ok);
    let value: serde_json::Value = serde_json::from_str(stdout.trim()).unwrap();
    assert_eq!(value["text_len"], 7);
    assert_eq!(value["internal_count"], 3);
    assert_eq!(value["leaf_count"], 7);
}

#[test]
fn test_dump_subcommand() {
    let (stdout, _, ok) = run_stx(&["dump"], b"banana\n");

    assert!(ok);
    assert_eq!(
        stdout,
        "\
ROOT
--$ [6]
--a
----$ [5]
----na
------$ [3]
------na$ [1]
--banana$ [0]
--na
----$ [4]
----na$ [2]
"
    );
}
