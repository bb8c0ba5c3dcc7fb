//! NSL Frontend
//!
//! This module contains all frontend components:
//! - `lexer`: tokenization of template text
//! - `parser`: parsing tokens into an AST plus recoverable syntax errors
//! - `ast`: abstract syntax tree definitions
//! - `scope`: undefined-variable analysis over nested scopes
//! - `diagnostics`: the lint diagnostic record and its rendering

// Syntax components are provided by the shared nsl_syntax crate.
pub use nsl_syntax::{ast, lexer, parser};

// Linter-specific pieces remain local.
pub mod diagnostics;
pub mod scope;
