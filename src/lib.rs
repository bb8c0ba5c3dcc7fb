#![forbid(unsafe_code)]
//! NSL template front end
//!
//! NSL is a small template language with `{{ output }}` tags and `{% set %}`, `{% if %}`, `{% for %}` and
//! `{% block %}` statements. This crate provides the linter and formatter built on the shared syntax crate:
//! frontend (lexer, parser, scope analysis), formatter, lint orchestration and the `nsl` driver.
//!
//! ## Panic Policy
//!
//! This codebase follows explicit error handling:
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! - **True invariants**: If a panic represents a bug (logic error), use `.expect("INVARIANT: reason")` with a
//!   clear explanation.

pub mod cli;
pub mod format;
pub mod frontend;
pub mod lint;

pub use frontend::ast;
pub use frontend::diagnostics;
pub use frontend::lexer;
pub use frontend::parser;
pub use frontend::scope;

pub use format::{
    FormatConfig, FormatError, check_formatted, format_diff, format_program, format_source, format_source_with_config,
};
pub use lint::{LintError, LintOptions, collect_templates, lint_file, lint_paths, lint_source};
