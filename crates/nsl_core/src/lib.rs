//! Provide the canonical NSL vocabulary shared by the lexer, parser, formatter and linter.
//!
//! This crate is intentionally small and dependency-free. It contains `const` registries only:
//! reserved words, operators (with precedence), structural delimiters, built-in global names and block tag
//! pairs.
//!
//! ## Notes
//!
//! - This is a “vocabulary core” crate: **no IO**, no global mutable state, and no AST types.
//! - Every table is immutable after process start and safe to read from concurrent lint pipelines.

pub mod lang;
