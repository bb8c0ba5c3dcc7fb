//! Syntax errors produced by the parser.

use crate::ast::Span;
use thiserror::Error;

/// A recoverable grammar violation with the position of the offending token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{line}:{column}: {message}")]
pub struct SyntaxError {
    pub message: String,
    pub line: usize,
    pub column: usize,
}

impl SyntaxError {
    pub fn new(message: impl Into<String>, span: Span) -> Self {
        Self {
            message: message.into(),
            line: span.line,
            column: span.column,
        }
    }

    /// `expected next token to be X, got Y instead`
    pub fn expected(expected: impl std::fmt::Display, found: impl std::fmt::Display, span: Span) -> Self {
        Self::new(format!("expected next token to be {expected}, got {found} instead"), span)
    }

    pub fn span(&self) -> Span {
        Span::new(self.line, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expected_message_shape() {
        let err = SyntaxError::expected("%}", "IDENT", Span::new(3, 7));
        assert_eq!(err.message, "expected next token to be %}, got IDENT instead");
        assert_eq!(err.to_string(), "3:7: expected next token to be %}, got IDENT instead");
        assert_eq!(err.span(), Span::new(3, 7));
    }
}
