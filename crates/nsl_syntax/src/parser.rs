//! Parser for NSL templates
//!
//! Converts a token stream into an AST using recursive descent for tags and precedence climbing for expressions.
//! Parsing never aborts: every grammar violation is recorded as a [`SyntaxError`] and the parser synchronizes at the
//! next delimiter boundary, so a partial [`Program`] is always returned alongside the errors.
//!
//! ## Examples
//!
//! ```rust
//! use nsl_syntax::{lexer, parser};
//!
//! let source = "{% for item in items %}{{ item.name | upper }}{% endfor %}";
//! let tokens = lexer::lex(source);
//! let output = parser::parse(&tokens);
//! assert!(output.is_ok());
//! assert_eq!(output.program.statements.len(), 1);
//! ```

use crate::ast::*;
use crate::diagnostics::SyntaxError;
use crate::lexer::{self, Token, TokenKind};
use nsl_core::lang::keywords::{self, KeywordId};
use nsl_core::lang::operators::{self, OperatorId, Precedence};
use nsl_core::lang::punctuation::PunctuationId;

// NOTE: This module is split across multiple files using `include!` to keep all parser
// methods in the same Rust module (preserving privacy + call patterns) while avoiding
// a single large source file.

include!("parser/core.rs");
include!("parser/helpers.rs");
include!("parser/stmts.rs");
include!("parser/expr.rs");
include!("parser/api.rs");
include!("parser/tests.rs");
