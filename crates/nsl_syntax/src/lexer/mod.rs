//! Lexer for NSL templates
//!
//! Handles tokenization including:
//! - Structural delimiters (`{{`, `}}`, `{%`, `%}`)
//! - Keywords (set, if, elif, else, endif, for, in, endfor, block, endblock, true, false, null)
//! - Identifiers and literals (integer, single- or double-quoted string)
//! - Operators (`= + - ! * / . | < > == != <= >=`) and grouping parentheses
//! - Comments (`{# ... #}`), which are skipped
//!
//! The lexer never fails. Characters it cannot place become [`TokenKind::Illegal`] tokens and are reported later by
//! the parser. Line and column advance on every consumed character, including inside literals and comments.
//!
//! ## Module Structure
//!
//! - `tokens` - Token types (TokenKind, Token)
//! - `strings` - String literal scanning

mod strings;
pub mod tokens;

pub use tokens::{Token, TokenKind, keyword_id};

use nsl_core::lang::operators::OperatorId;
use nsl_core::lang::punctuation::PunctuationId;

// ============================================================================
// LEXER STATE
// ----------------------------------------------------------------------------
// The template is lexed uniformly: text outside tags produces the same token
// kinds as text inside them. Whitespace (including newlines) only separates
// tokens.
// ============================================================================

/// Lexer for NSL source text.
///
/// `Lexer` is an [`Iterator`] over [`Token`]s: tokens are produced on demand and the sequence ends with exactly one
/// [`TokenKind::Eof`] token. To scan again, create a new lexer.
pub struct Lexer<'a> {
    chars: std::iter::Peekable<std::str::Chars<'a>>,
    /// Position of the next character to be consumed.
    line: usize,
    column: usize,
    finished: bool,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given source text.
    pub fn new(source: &'a str) -> Self {
        Self {
            chars: source.chars().peekable(),
            line: 1,
            column: 1,
            finished: false,
        }
    }

    // ========================================================================
    // Core character handling
    // ========================================================================

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().copied()
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.chars.next()?;
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    fn match_char(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.advance();
        }
    }

    // ========================================================================
    // Main scanning dispatch
    // ========================================================================

    /// Scan the next token. Returns `Eof` once input is exhausted.
    pub fn next_token(&mut self) -> Token {
        loop {
            self.skip_whitespace();
            let (line, column) = (self.line, self.column);

            let Some(c) = self.advance() else {
                return Token::new(TokenKind::Eof, "", line, column);
            };

            let kind = match c {
                '{' => {
                    if self.match_char('{') {
                        TokenKind::Punctuation(PunctuationId::OutputOpen)
                    } else if self.match_char('%') {
                        TokenKind::Punctuation(PunctuationId::TagOpen)
                    } else if self.match_char('#') {
                        self.skip_comment();
                        continue;
                    } else {
                        TokenKind::Illegal
                    }
                }
                '}' => self.pair('}', TokenKind::Punctuation(PunctuationId::OutputClose)),
                '%' => self.pair('}', TokenKind::Punctuation(PunctuationId::TagClose)),
                '(' => TokenKind::Punctuation(PunctuationId::LParen),
                ')' => TokenKind::Punctuation(PunctuationId::RParen),

                '=' => self.operator(OperatorId::Assign, OperatorId::EqEq),
                '!' => self.operator(OperatorId::Bang, OperatorId::NotEq),
                '<' => self.operator(OperatorId::Lt, OperatorId::LtEq),
                '>' => self.operator(OperatorId::Gt, OperatorId::GtEq),
                '+' => TokenKind::Operator(OperatorId::Plus),
                '-' => TokenKind::Operator(OperatorId::Minus),
                '*' => TokenKind::Operator(OperatorId::Star),
                '/' => TokenKind::Operator(OperatorId::Slash),
                '.' => TokenKind::Operator(OperatorId::Dot),
                '|' => TokenKind::Operator(OperatorId::Pipe),

                '"' | '\'' => return self.scan_string(c, line, column),
                '0'..='9' => return self.scan_number(c, line, column),
                _ if is_ident_start(c) => return self.scan_identifier(c, line, column),

                _ => TokenKind::Illegal,
            };

            let literal = match kind {
                TokenKind::Illegal => c.to_string(),
                _ => kind.to_string(),
            };
            return Token::new(kind, literal, line, column);
        }
    }

    /// Two-character token if `second` follows, otherwise the first character is illegal on its own.
    fn pair(&mut self, second: char, kind: TokenKind) -> TokenKind {
        if self.match_char(second) { kind } else { TokenKind::Illegal }
    }

    /// `simple`, or `compound` when followed by `=`.
    fn operator(&mut self, simple: OperatorId, compound: OperatorId) -> TokenKind {
        if self.match_char('=') {
            TokenKind::Operator(compound)
        } else {
            TokenKind::Operator(simple)
        }
    }

    /// Skip the body of a `{# ... #}` comment. An unterminated comment runs to end of input.
    fn skip_comment(&mut self) {
        while let Some(c) = self.advance() {
            if c == '#' && self.match_char('}') {
                return;
            }
        }
    }

    // ========================================================================
    // Identifier / number scanning
    // ========================================================================

    fn scan_identifier(&mut self, first: char, line: usize, column: usize) -> Token {
        let mut spelling = String::from(first);
        while let Some(c) = self.peek() {
            if !is_ident_continue(c) {
                break;
            }
            spelling.push(c);
            self.advance();
        }

        match keyword_id(&spelling) {
            Some(id) => Token::new(TokenKind::Keyword(id), spelling, line, column),
            None => Token::new(TokenKind::Ident, spelling, line, column),
        }
    }

    fn scan_number(&mut self, first: char, line: usize, column: usize) -> Token {
        let mut digits = String::from(first);
        while let Some(c) = self.peek() {
            if !c.is_ascii_digit() {
                break;
            }
            digits.push(c);
            self.advance();
        }
        Token::new(TokenKind::Int, digits, line, column)
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }
        let token = self.next_token();
        if token.kind == TokenKind::Eof {
            self.finished = true;
        }
        Some(token)
    }
}

// ============================================================================
// Helper functions
// ============================================================================

/// Check if a character can start an identifier (ASCII-only).
fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Check if a character can continue an identifier (ASCII-only).
fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Convenience function to lex a source string.
///
/// This is a shorthand for `Lexer::new(source).collect()`. The result always ends with an `Eof` token.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn lex(source: &str) -> Vec<Token> {
    Lexer::new(source).collect()
}

// ============================================================================
// TESTS
// ============================================================================
