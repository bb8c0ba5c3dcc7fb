//! Shared syntax frontend for NSL templates: lexer, parser, AST, syntax errors.
//!
//! This crate is dependency-light and intended for reuse by the formatter, the linter and any tooling that wants
//! "best effort" feedback on a template.
//!
//! ## Notes
//! - This crate is intentionally “syntax-only”: it does not resolve names. Scope analysis lives in the `nsl` crate.
//! - Vocabulary identity (keywords/operators/delimiters) comes from `nsl_core::lang` registries.
//! - Neither lexing nor parsing ever fails outright: unknown characters become `Illegal` tokens and grammar
//!   violations are collected next to a partial [`ast::Program`].
//!
//! ## Examples
//! ```rust
//! use nsl_syntax::{lexer, parser};
//!
//! let tokens = lexer::lex("{% set greeting = 'hi' %}{{ greeting }}");
//! let output = parser::parse(&tokens);
//! assert!(output.errors.is_empty());
//! assert_eq!(output.program.statements.len(), 2);
//! ```

pub mod ast;
pub mod diagnostics;
pub mod lexer;
pub mod parser;
pub mod token_helpers;
