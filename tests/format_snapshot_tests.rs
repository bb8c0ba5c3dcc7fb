//! Golden snapshot tests for the formatter
//!
//! Each `.nsl` file under `tests/format_snapshots/` is formatted and compared against its stored snapshot.
//!
//! Run with: `cargo test --test format_snapshot_tests`
//! Review changes: `cargo insta review`

use std::fs;

use nsl::{FormatError, check_formatted, format_source};

/// Load a template from the format_snapshots directory
fn load_test_file(name: &str) -> String {
    let path = format!("tests/format_snapshots/{}.nsl", name);
    fs::read_to_string(&path).unwrap_or_else(|_| panic!("Failed to read test file: {}", path))
}

/// Format a fixture and check that formatting it again is a no-op.
fn format_fixture(name: &str) -> String {
    let source = load_test_file(name);
    let formatted = format_source(&source).expect("fixture should parse");
    let again = format_source(&formatted).expect("formatted output should parse");
    assert_eq!(formatted, again, "formatting {name} is not idempotent");
    formatted
}

#[test]
fn test_control_flow_format() {
    let formatted = format_fixture("control_flow");
    insta::assert_snapshot!("control_flow", formatted);
}

#[test]
fn test_loops_format() {
    let formatted = format_fixture("loops");
    insta::assert_snapshot!("loops", formatted);
}

#[test]
fn test_expressions_format() {
    let formatted = format_fixture("expressions");
    insta::assert_snapshot!("expressions", formatted);
}

#[test]
fn test_blocks_and_text_format() {
    let formatted = format_fixture("blocks_and_text");
    insta::assert_snapshot!("blocks_and_text", formatted);
}

#[test]
fn test_formatted_fixtures_pass_check() {
    for name in ["control_flow", "loops", "expressions", "blocks_and_text"] {
        let formatted = format_fixture(name);
        assert_eq!(check_formatted(&formatted).ok(), Some(true), "{name}");
    }
}

#[test]
fn test_syntax_errors_are_not_formatted() {
    let err = format_source("{% set = 1 %}").unwrap_err();
    let FormatError::Syntax(errors) = &err;
    assert!(!errors.is_empty());
    assert!(err.to_string().starts_with("cannot format a template with syntax errors: "));
}
