//! End-to-end lint behaviour through the public API.

use std::fs;
use std::path::{Path, PathBuf};

use nsl::diagnostics::{Diagnostic, Severity};
use nsl::{LintOptions, collect_templates, lint_file, lint_paths, lint_source};

fn lint(source: &str, params: Option<&[&str]>) -> Vec<Diagnostic> {
    let owned: Option<Vec<String>> = params.map(|p| p.iter().map(|s| s.to_string()).collect());
    lint_source(Path::new("skill.nsl"), source, owned.as_deref())
}

fn messages(diagnostics: &[Diagnostic]) -> Vec<&str> {
    diagnostics.iter().map(|d| d.message.as_str()).collect()
}

/// Fresh scratch directory under the system temp dir.
fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("nsl-lint-tests-{}-{name}", std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn test_single_unclosed_output_is_one_balance_error() {
    let diags = lint("Hello {{ name", None);
    assert_eq!(diags.len(), 1);
    assert_eq!(diags[0].severity, Severity::Error);
    assert_eq!(diags[0].line, 1);
    assert_eq!(diags[0].message, "unbalanced delimiters: found 1 '{{' and 0 '}}'");
}

#[test]
fn test_mismatched_closer_is_reported() {
    let diags = lint("{% if true %}{% endfor %}", None);
    assert_eq!(
        messages(&diags),
        vec!["mismatched closing tag: expected 'endif' to close 'if', found 'endfor'"]
    );
}

#[test]
fn test_unclosed_block_is_reported() {
    let diags = lint("{% if true %}", None);
    assert_eq!(messages(&diags), vec!["unclosed block(s): if"]);
}

#[test]
fn test_empty_params_flag_every_free_variable() {
    let diags = lint("{{ a }} and {{ b }}", Some(&[]));
    assert_eq!(diags.len(), 2);
    assert!(diags.iter().all(|d| d.severity == Severity::Error));
    assert!(diags[0].message.contains("'a'"));
    assert!(diags[1].message.contains("'b'"));
}

#[test]
fn test_unknown_params_skip_scope_analysis() {
    assert!(lint("{{ a }} and {{ b }}", None).is_empty());
}

#[test]
fn test_loop_variable_is_scoped_to_the_loop() {
    let inside = lint("{% for x in xs %}{{ x }}{% endfor %}", Some(&["xs"]));
    assert!(inside.is_empty());

    let after = lint("{% for x in xs %}{{ x }}{% endfor %}\n{{ x }}", Some(&["xs"]));
    assert_eq!(after.len(), 1);
    assert_eq!(after[0].line, 2);
    assert_eq!(after[0].snippet.as_deref(), Some("{{ x }}"));
}

#[test]
fn test_syntax_errors_suppress_scope_analysis_without_diagnostics() {
    assert!(lint("{% set = 1 %}{{ missing }}", Some(&[])).is_empty());
}

#[test]
fn test_warnings_do_not_stop_the_pipeline() {
    let diags = lint("{# note #}\n{{ missing }}", Some(&[]));
    assert_eq!(diags.len(), 2);
    assert_eq!(diags[0].severity, Severity::Warning);
    assert_eq!(diags[1].severity, Severity::Error);
    assert_eq!(diags[1].line, 2);
}

#[test]
fn test_structural_errors_stop_before_parsing() {
    let diags = lint("{% for x in xs %}{{ x }}\n{{ y", Some(&[]));
    assert!(diags.iter().all(|d| d.line == 1));
    assert!(messages(&diags).iter().all(|m| !m.starts_with("undefined variable")));
}

#[test]
fn test_missing_file_is_a_single_diagnostic() {
    let diags = lint_file(Path::new("/definitely/not/here.nsl"), None);
    assert_eq!(diags.len(), 1);
    assert_eq!(diags[0].line, 1);
    assert!(diags[0].message.starts_with("failed to read file:"));
}

#[test]
fn test_collect_templates_finds_nested_nsl_files_sorted() {
    let dir = scratch_dir("collect");
    fs::create_dir_all(dir.join("nested")).unwrap();
    fs::create_dir_all(dir.join(".hidden")).unwrap();
    fs::write(dir.join("b.nsl"), "{{ b }}").unwrap();
    fs::write(dir.join("nested/a.nsl"), "{{ a }}").unwrap();
    fs::write(dir.join(".hidden/c.nsl"), "{{ c }}").unwrap();
    fs::write(dir.join("notes.txt"), "{{ d }}").unwrap();

    let found = collect_templates(&dir);
    assert_eq!(found, vec![dir.join("b.nsl"), dir.join("nested/a.nsl")]);

    let _ = fs::remove_dir_all(&dir);
}

#[tokio::test]
async fn test_lint_paths_merges_and_sorts_by_file_then_line() {
    let dir = scratch_dir("paths");
    fs::write(dir.join("b.nsl"), "{{ one }}\n{{ two }}").unwrap();
    fs::write(dir.join("a.nsl"), "\n\n{{ three }}").unwrap();

    let files = vec![dir.join("b.nsl"), dir.join("a.nsl")];
    let diags = lint_paths(files, LintOptions::new().with_params(Vec::new())).await;

    let order: Vec<(PathBuf, usize)> = diags.iter().map(|d| (d.file.clone(), d.line)).collect();
    assert_eq!(
        order,
        vec![(dir.join("a.nsl"), 3), (dir.join("b.nsl"), 1), (dir.join("b.nsl"), 2)]
    );

    let _ = fs::remove_dir_all(&dir);
}

#[tokio::test]
async fn test_lint_paths_reads_params_sidecars() {
    let dir = scratch_dir("sidecar");
    fs::write(dir.join("greet.nsl"), "{{ user }} {{ extra }}").unwrap();
    fs::write(dir.join("greet.params.json"), r#"["user"]"#).unwrap();
    fs::write(dir.join("plain.nsl"), "{{ anything }}").unwrap();

    let files = collect_templates(&dir);
    let diags = lint_paths(files, LintOptions::new()).await;

    assert_eq!(diags.len(), 1);
    assert_eq!(diags[0].file, dir.join("greet.nsl"));
    assert!(diags[0].message.contains("'extra'"));

    let _ = fs::remove_dir_all(&dir);
}

#[tokio::test]
async fn test_broken_sidecar_is_reported_and_scope_analysis_skipped() {
    let dir = scratch_dir("broken");
    fs::write(dir.join("page.nsl"), "{{ anything }}").unwrap();
    fs::write(dir.join("page.params.json"), "{not json").unwrap();

    let diags = lint_paths(vec![dir.join("page.nsl")], LintOptions::new()).await;

    assert_eq!(diags.len(), 1);
    assert!(diags[0].is_error());
    assert!(diags[0].message.starts_with("invalid parameters file"));

    let _ = fs::remove_dir_all(&dir);
}

#[tokio::test]
async fn test_lint_paths_on_nothing_is_empty() {
    assert!(lint_paths(Vec::new(), LintOptions::new()).await.is_empty());
}
