//! NSL language vocabulary registries.
//!
//! This module is the “front door” for language-level vocabulary: reserved keywords, operators, structural
//! delimiters, built-in globals and block tags.
//!
//! The design goal is to avoid stringly-typed checks scattered across the front end. Callers work with **stable
//! IDs** (e.g. `KeywordId`, `OperatorId`) and look up spellings/metadata via registry tables.
//!
//! ## Notes
//! - Registries are intentionally **pure**: no AST types, no IO, no side effects.
//! - The lexer/parser enforce syntax; registries provide spellings and metadata for shared use (diagnostics,
//!   formatting, linting).
//!
//! ## Examples
//! ```rust
//! use nsl_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("endif"), Some(KeywordId::EndIf));
//! assert_eq!(keywords::as_str(KeywordId::EndIf), "endif");
//! ```

pub mod builtins;
pub mod keywords;
pub mod operators;
pub mod punctuation;
pub mod tags;
