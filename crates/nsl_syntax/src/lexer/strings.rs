//! String literal scanning.
//!
//! Strings may use single or double quotes. The token literal holds the unescaped contents without quotes.
//! Recognised escapes are `\\`, `\"`, `\'`, `\n`, `\t` and `\r`; any other backslash is kept as written.
//! A string that reaches end of input without its closing quote becomes a single `Illegal` token whose literal is
//! the raw remainder of the input, opening quote included.

use super::Lexer;
use super::tokens::{Token, TokenKind};

impl Lexer<'_> {
    pub(super) fn scan_string(&mut self, quote: char, line: usize, column: usize) -> Token {
        let mut value = String::new();
        let mut raw = String::from(quote);

        loop {
            let Some(c) = self.advance() else {
                return Token::new(TokenKind::Illegal, raw, line, column);
            };
            raw.push(c);

            if c == quote {
                return Token::new(TokenKind::String, value, line, column);
            }
            if c != '\\' {
                value.push(c);
                continue;
            }

            let Some(escaped) = self.advance() else {
                return Token::new(TokenKind::Illegal, raw, line, column);
            };
            raw.push(escaped);
            match unescape(escaped) {
                Some(ch) => value.push(ch),
                None => {
                    value.push('\\');
                    value.push(escaped);
                }
            }
        }
    }
}

fn unescape(c: char) -> Option<char> {
    match c {
        '\\' => Some('\\'),
        '"' => Some('"'),
        '\'' => Some('\''),
        'n' => Some('\n'),
        't' => Some('\t'),
        'r' => Some('\r'),
        _ => None,
    }
}
