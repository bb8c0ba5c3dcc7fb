//! Layering guardrails for the workspace crates.
//!
//! `nsl_core` is a pure vocabulary crate and `nsl_syntax` only builds on it. Neither may pull in the runtime stack
//! (async, filesystem config, CLI, regex checks) that belongs to the `nsl` crate. These tests scan the member
//! manifests and fail if a forbidden crate appears in `[dependencies]`.

const RUNTIME_CRATES: &[&str] = &["tokio", "clap", "serde_json", "regex", "once_cell", "miette", "tracing-subscriber"];

/// Names listed in the `[dependencies]` table of a manifest.
fn dependency_names(manifest: &str) -> Vec<String> {
    let mut in_dependencies = false;
    let mut names = Vec::new();

    for raw_line in manifest.lines() {
        let line = raw_line.trim();
        // Track when we enter/exit the `[dependencies]` table.
        if line.starts_with('[') {
            in_dependencies = line == "[dependencies]";
            continue;
        }

        if !in_dependencies || line.is_empty() || line.starts_with('#') {
            continue;
        }

        // Strip inline comments for robustness.
        let line_no_comment = line.split('#').next().unwrap_or("").trim();
        if let Some((name, _)) = line_no_comment.split_once('=') {
            names.push(name.trim().to_string());
        }
    }
    names
}

fn assert_no_runtime_dependencies(crate_name: &str, manifest: &str) {
    for name in dependency_names(manifest) {
        assert!(
            !RUNTIME_CRATES.contains(&name.as_str()),
            "`{name}` must not appear in {crate_name}'s [dependencies]; keep it in the `nsl` crate"
        );
    }
}

#[test]
fn core_has_no_runtime_dependencies() {
    assert_no_runtime_dependencies("nsl_core", include_str!("../crates/nsl_core/Cargo.toml"));
}

#[test]
fn syntax_has_no_runtime_dependencies() {
    let manifest = include_str!("../crates/nsl_syntax/Cargo.toml");
    assert_no_runtime_dependencies("nsl_syntax", manifest);
    assert!(dependency_names(manifest).iter().any(|name| name == "nsl_core"));
}

#[test]
fn syntax_does_not_depend_on_the_driver_crate() {
    let names = dependency_names(include_str!("../crates/nsl_syntax/Cargo.toml"));
    assert!(!names.iter().any(|name| name == "nsl"));
}
