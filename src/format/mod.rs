//! NSL Template Formatter
//!
//! This module prints templates in canonical form:
//! - 4-space indentation inside `if`/`elif`/`else`/`for` bodies (`block` bodies stay flat unless `indent_blocks` is set)
//! - One statement per line, every line terminated by `\n`
//! - Double quotes for strings
//! - Parentheses only where precedence requires them
//!
//! Formatting is idempotent: formatting already-formatted output returns it unchanged.

mod config;
mod formatter;
mod writer;

pub use config::FormatConfig;
pub use formatter::Formatter;

use std::fmt::Write as _;

use thiserror::Error;

use crate::frontend::ast::Program;
use crate::frontend::diagnostics::SyntaxError;
use crate::frontend::parser;

/// Errors from formatting template source.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// The source did not parse cleanly; nothing is printed for a partial AST.
    #[error("cannot format a template with syntax errors: {}", join_errors(.0))]
    Syntax(Vec<SyntaxError>),
}

fn join_errors(errors: &[SyntaxError]) -> String {
    errors.iter().map(ToString::to_string).collect::<Vec<_>>().join("; ")
}

/// Print an already-parsed program with default settings
pub fn format_program(program: &Program) -> String {
    Formatter::new(FormatConfig::default()).format(program)
}

/// Format NSL template source with default settings
pub fn format_source(source: &str) -> Result<String, FormatError> {
    format_source_with_config(source, FormatConfig::default())
}

/// Format NSL template source with custom configuration
pub fn format_source_with_config(source: &str, config: FormatConfig) -> Result<String, FormatError> {
    let program = parser::parse_source(source).into_result().map_err(FormatError::Syntax)?;
    Ok(Formatter::new(config).format(&program))
}

/// Check if source is already formatted
pub fn check_formatted(source: &str) -> Result<bool, FormatError> {
    let formatted = format_source(source)?;
    Ok(source == formatted)
}

/// Line-by-line diff against the canonical form, or `None` if `source` is already canonical.
///
/// Lines are compared by position: `-   3 | old` / `+   3 | new`. Blank lines on either side are not listed.
pub fn format_diff(source: &str) -> Result<Option<String>, FormatError> {
    let formatted = format_source(source)?;
    if source == formatted {
        return Ok(None);
    }

    let mut before = source.lines();
    let mut after = formatted.lines();
    let mut diff = String::new();
    for number in 1.. {
        let (old, new) = match (before.next(), after.next()) {
            (None, None) => break,
            (old, new) => (old.unwrap_or(""), new.unwrap_or("")),
        };
        if old == new {
            continue;
        }
        if !old.is_empty() {
            let _ = writeln!(diff, "-{number:4} | {old}");
        }
        if !new.is_empty() {
            let _ = writeln!(diff, "+{number:4} | {new}");
        }
    }
    Ok(Some(diff))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_source_set_and_output() {
        let result = format_source("{%set x=1%}{{x}}");
        assert_eq!(result.unwrap(), "{% set x = 1 %}\n{{ x }}\n");
    }

    #[test]
    fn test_format_source_invalid_syntax() {
        let err = format_source("{% set %}").unwrap_err();
        let FormatError::Syntax(errors) = &err;
        assert_eq!(errors.len(), 1);
        assert_eq!(
            err.to_string(),
            "cannot format a template with syntax errors: 1:8: expected next token to be IDENT, got %} instead"
        );
    }

    #[test]
    fn test_format_source_empty() {
        assert_eq!(format_source("").unwrap(), "");
    }

    #[test]
    fn test_format_source_with_custom_config() {
        let config = FormatConfig::new().with_indent_width(2);
        let result = format_source_with_config("{% if a %}{{ b }}{% endif %}", config);
        assert_eq!(result.unwrap(), "{% if a %}\n  {{ b }}\n{% endif %}\n");
    }

    #[test]
    fn test_check_formatted() {
        assert_eq!(check_formatted("{{ a }}\n"), Ok(true));
        assert_eq!(check_formatted("{{a}}"), Ok(false));
        assert!(check_formatted("{{").is_err());
    }

    #[test]
    fn test_format_diff_no_changes() {
        assert_eq!(format_diff("{{ a }}\n"), Ok(None));
    }

    #[test]
    fn test_format_diff_returns_diff() {
        let diff = format_diff("{{a}}\n").unwrap().unwrap();
        assert_eq!(diff, "-   1 | {{a}}\n+   1 | {{ a }}\n");
    }

    #[test]
    fn test_format_diff_lists_added_lines() {
        let diff = format_diff("{% if a %}{{ b }}{% endif %}").unwrap().unwrap();
        assert_eq!(
            diff,
            "-   1 | {% if a %}{{ b }}{% endif %}\n+   1 | {% if a %}\n+   2 |     {{ b }}\n+   3 | {% endif %}\n"
        );
    }

    #[test]
    fn test_format_diff_invalid_syntax() {
        assert!(format_diff("{% endif %}").is_err());
    }
}
