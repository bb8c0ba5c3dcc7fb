//! Pre-parse structural checks.
//!
//! These run on raw text, before lexing, and catch the mistakes that would otherwise surface as a cascade of
//! parser errors: foreign scripts, comments, unbalanced delimiters and mismatched block tags.

use std::path::Path;

use nsl_core::lang::tags;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::frontend::diagnostics::Diagnostic;

/// First Cyrillic character on a line.
static CYRILLIC: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\p{Cyrillic}").expect("INVARIANT: Cyrillic pattern is a valid regex"));

/// Tag name right after `{%`.
static TAG_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{%\s*([A-Za-z_][A-Za-z0-9_]*)").expect("INVARIANT: tag pattern is a valid regex"));

/// Run every structural check, in order, and collect their findings.
pub(super) fn check(file: &Path, source: &str) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    non_latin_characters(file, source, &mut diagnostics);
    comments(file, source, &mut diagnostics);
    delimiter_balance(file, source, &mut diagnostics);
    diagnostics.extend(block_tags(file, source));
    diagnostics
}

fn non_latin_characters(file: &Path, source: &str, out: &mut Vec<Diagnostic>) {
    for (index, line) in source.lines().enumerate() {
        if let Some(found) = CYRILLIC.find(line) {
            out.push(
                Diagnostic::warning(
                    file,
                    index + 1,
                    format!(
                        "disallowed non-Latin character '{}' found; templates must be written in English",
                        found.as_str()
                    ),
                )
                .with_snippet(line),
            );
        }
    }
}

fn comments(file: &Path, source: &str, out: &mut Vec<Diagnostic>) {
    for (index, line) in source.lines().enumerate() {
        if line.contains(tags::COMMENT_OPEN) || line.contains(tags::COMMENT_CLOSE) {
            out.push(
                Diagnostic::warning(file, index + 1, "comments ({# ... #}) are not allowed in NSL templates")
                    .with_snippet(line),
            );
        }
    }
}

/// Each delimiter pair is counted independently over the whole file.
fn delimiter_balance(file: &Path, source: &str, out: &mut Vec<Diagnostic>) {
    for (open, close) in tags::DELIMITER_PAIRS {
        let opened = source.matches(open).count();
        let closed = source.matches(close).count();
        if opened != closed {
            out.push(Diagnostic::error(
                file,
                1,
                format!("unbalanced delimiters: found {opened} '{open}' and {closed} '{close}'"),
            ));
        }
    }
}

/// Match block openers against closers with a stack. Only the first failure is reported.
fn block_tags(file: &Path, source: &str) -> Option<Diagnostic> {
    let mut open_blocks: Vec<&str> = Vec::new();

    for captures in TAG_NAME.captures_iter(source) {
        let Some(tag) = captures.get(1).map(|m| m.as_str()) else {
            continue;
        };

        if tags::is_opener(tag) {
            open_blocks.push(tag);
            continue;
        }
        if !tags::is_closer(tag) {
            continue;
        }

        match open_blocks.pop() {
            None => {
                return Some(Diagnostic::error(
                    file,
                    1,
                    format!("unexpected closing tag '{tag}' with no open block"),
                ));
            }
            Some(open) => {
                let expected = tags::closer_for(open).unwrap_or_default();
                if expected != tag {
                    return Some(Diagnostic::error(
                        file,
                        1,
                        format!("mismatched closing tag: expected '{expected}' to close '{open}', found '{tag}'"),
                    ));
                }
            }
        }
    }

    if open_blocks.is_empty() {
        None
    } else {
        Some(Diagnostic::error(
            file,
            1,
            format!("unclosed block(s): {}", open_blocks.join(", ")),
        ))
    }
}
