//! Integration tests for bddtable CLI

use std::fs;
use std::path::Path;
use std::process::Command;

use tempfile::tempdir;

fn run_bddtable(args: &[&str]) -> (String, String, i32) {
    run_bddtable_with_log(args, None)
}

fn run_bddtable_with_log(args: &[&str], rust_log: Option<&str>) -> (String, String, i32) {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_bddtable"));
    cmd.args(args);
    match rust_log {
        Some(filter) => cmd.env("RUST_LOG", filter),
        None => cmd.env_remove("RUST_LOG"),
    };
    let output = cmd.output().expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

fn write_input(dir: &Path, name: &str, content: &str) -> String {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path.to_string_lossy().to_string()
}

#[test]
fn test_cli_help() {
    let (stdout, _, code) = run_bddtable(&["--help"]);

    assert_eq!(code, 0);
    assert!(stdout.contains("bddtable"));
    assert!(stdout.contains("--marker"));
    assert!(stdout.contains("--no-error-column"));
}

#[test]
fn test_cli_version() {
    let (stdout, _, code) = run_bddtable(&["--version"]);

    assert_eq!(code, 0);
    assert!(stdout.contains("bddtable"));
}

#[test]
fn test_no_arguments_prints_usage() {
    let (stdout, stderr, code) = run_bddtable(&[]);

    assert_eq!(code, 1);
    assert!(stdout.is_empty());
    assert!(stderr.contains("Usage"));
}

#[test]
fn test_negative_rows_to_stdout() {
    let dir = tempdir().unwrap();
    let input = write_input(dir.path(), "cases.tsv", "Name\tAge\nAlice\t30\n~Bob\t-5\n");

    let (stdout, _, code) = run_bddtable(&[&input]);

    assert_eq!(code, 0);
    assert_eq!(
        stdout,
        "| Name  | Age | IS_ERROR |\n\
         | Alice | 30  | FALSE    |\n\
         | Bob   | -5  | TRUE     |\n"
    );
}

#[test]
fn test_no_markers_no_error_column() {
    let dir = tempdir().unwrap();
    let input = write_input(dir.path(), "cases.tsv", "A\tB\n1\t2\n");

    let (stdout, _, code) = run_bddtable(&[&input]);

    assert_eq!(code, 0);
    assert_eq!(stdout, "| A | B |\n| 1 | 2 |\n");
    assert!(!stdout.contains("IS_ERROR"));
}

#[test]
fn test_output_file() {
    let dir = tempdir().unwrap();
    let input = write_input(dir.path(), "cases.tsv", "\nA\tB\n\n~1\t2\n  \n");
    let output = dir.path().join("cases.table");

    let (stdout, _, code) = run_bddtable(&[&input, &output.to_string_lossy()]);

    assert_eq!(code, 0);
    assert!(stdout.is_empty());
    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "| A | B | IS_ERROR |\n| 1 | 2 | TRUE     |\n"
    );
}

#[test]
fn test_custom_marker() {
    let dir = tempdir().unwrap();
    let input = write_input(dir.path(), "cases.tsv", "A\n!x\n");

    let (stdout, _, code) = run_bddtable(&[&input, "--marker", "!"]);

    assert_eq!(code, 0);
    assert_eq!(stdout, "| A | IS_ERROR |\n| x | TRUE     |\n");
}

#[test]
fn test_no_error_column_flag() {
    let dir = tempdir().unwrap();
    let input = write_input(dir.path(), "cases.tsv", "A\n~x\n");

    let (stdout, _, code) = run_bddtable(&[&input, "--no-error-column"]);

    assert_eq!(code, 0);
    assert_eq!(stdout, "| A |\n| x |\n");
}

#[test]
fn test_blank_input_fails() {
    let dir = tempdir().unwrap();
    let input = write_input(dir.path(), "blank.tsv", "  \n\t\n\n");

    let (stdout, stderr, code) = run_bddtable(&[&input]);

    assert_eq!(code, 1);
    assert!(stdout.is_empty());
    assert!(stderr.contains("no data"));
}

#[test]
fn test_missing_input_fails() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("missing.tsv");

    let (stdout, stderr, code) = run_bddtable(&[&missing.to_string_lossy()]);

    assert_eq!(code, 1);
    assert!(stdout.is_empty());
    assert!(stderr.contains("cannot open input file"));
}

#[test]
fn test_wide_row_fails() {
    let dir = tempdir().unwrap();
    let input = write_input(dir.path(), "wide.tsv", "A\n1\t2\n");

    let (stdout, stderr, code) = run_bddtable(&[&input]);

    assert_eq!(code, 1);
    assert!(stdout.is_empty());
    assert!(stderr.contains("line 2"));
}

#[test]
fn test_trailing_empty_field() {
    let dir = tempdir().unwrap();
    let input = write_input(dir.path(), "cases.tsv", "A\tB\n1\t\n");

    let (stdout, _, code) = run_bddtable(&[&input]);

    assert_eq!(code, 0);
    assert_eq!(stdout, "| A | B |\n| 1 |   |\n");
}

#[test]
fn test_error_reported_with_logging_off() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("missing.tsv");

    for filter in ["off", "bddtablelib=debug"] {
        let (_, stderr, code) = run_bddtable_with_log(&[&missing.to_string_lossy()], Some(filter));

        assert_eq!(code, 1);
        assert!(
            stderr.contains("Error:") && stderr.contains("missing.tsv"),
            "RUST_LOG={filter}: stderr was {stderr:?}"
        );
    }
}
