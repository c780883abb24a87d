//! Integration tests for the tabmd CLI

use std::io::Write;
use std::process::{Command, Stdio};

fn run_tabmd(args: &[&str], stdin: &str) -> (String, String, bool) {
    let mut cmd_args = vec!["run", "-p", "tabmd", "--"];
    cmd_args.extend(args);

    let mut child = Command::new("cargo")
        .args(&cmd_args)
        .current_dir(env!("CARGO_MANIFEST_DIR").to_string() + "/..")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn command");

    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(stdin.as_bytes())
        .expect("Failed to write stdin");

    let output = child.wait_with_output().expect("Failed to wait for command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let success = output.status.success();

    (stdout, stderr, success)
}

#[test]
fn test_cli_help() {
    let (stdout, _, success) = run_tabmd(&["--help"], "");

    assert!(success);
    assert!(stdout.contains("tabmd"));
    assert!(stdout.contains("--input"));
    assert!(stdout.contains("--output"));
    assert!(stdout.contains("--separator"));
    assert!(stdout.contains("--mini"));
    assert!(stdout.contains("--escape"));
}

#[test]
fn test_cli_version() {
    let (stdout, _, success) = run_tabmd(&["--version"], "");

    assert!(success);
    assert!(stdout.contains("tabmd"));
}

#[test]
fn test_csv_to_md_default() {
    let (stdout, _, success) = run_tabmd(&[], "a;bb;ccc\nx;y;z\n");

    assert!(success);
    assert_eq!(stdout, "| a | bb | ccc |\n|---|----|-----|\n| x | y  | z   |\n");
}

#[test]
fn test_csv_to_md_mini() {
    let (stdout, _, success) = run_tabmd(&["--mini"], "a;bb;ccc\nx;y;z\n");

    assert!(success);
    assert_eq!(stdout, "|a|bb|ccc|\n|---|---|---|\n|x|y|z|\n");
}

#[test]
fn test_md_to_csv() {
    let (stdout, _, success) = run_tabmd(
        &["--input", "md", "--output", "csv", "--separator", ","],
        "| a | b |\n|---|---|\n| 1 | 2 |\n",
    );

    assert!(success);
    assert_eq!(stdout, "a,b\n1,2\n");
}

#[test]
fn test_escape_flag() {
    let (stdout, _, success) = run_tabmd(&["--escape"], "style;note\n*bold*;ok\n");

    assert!(success);
    assert!(stdout.contains("\\*bold\\*"));
    assert!(!stdout.contains("\\\\"));
}

#[test]
fn test_tab_separator_token() {
    let (stdout, _, success) = run_tabmd(&["--separator", "tab"], "a\tbb\nx\ty\n");

    assert!(success);
    assert_eq!(stdout, "| a | bb |\n|---|----|\n| x | y  |\n");
}

#[test]
fn test_round_trip_through_cli() {
    let original = "name;qty\nspam;12\neggs;3\n";

    let (markdown, _, success) = run_tabmd(&[], original);
    assert!(success);

    let (csv, _, success) = run_tabmd(&["--input", "md", "--output", "csv"], &markdown);
    assert!(success);
    assert_eq!(csv, original);
}

#[test]
fn test_empty_input_fails() {
    let (stdout, stderr, success) = run_tabmd(&[], "");

    assert!(!success);
    assert!(stdout.is_empty());
    assert!(stderr.contains("empty input"));
}

#[test]
fn test_invalid_input_format_fails() {
    // Fails fast, before stdin is read
    let (_, stderr, success) = run_tabmd(&["--input", "xml"], "");

    assert!(!success);
    assert!(stderr.contains("csv or md expected"));
}

#[test]
fn test_invalid_output_format_fails() {
    let (_, stderr, success) = run_tabmd(&["--output", "html"], "");

    assert!(!success);
    assert!(stderr.contains("csv or md expected"));
}

#[test]
fn test_short_row_fails() {
    let (stdout, stderr, success) = run_tabmd(&[], "a;b;c\nx;y\n");

    assert!(!success);
    assert!(stdout.is_empty());
    assert!(stderr.contains("expected 3"));
}

#[test]
fn test_markdown_without_separator_row_fails() {
    let (_, stderr, success) = run_tabmd(&["--input", "md"], "| a | b |\n");

    assert!(!success);
    assert!(stderr.contains("separator row"));
}
