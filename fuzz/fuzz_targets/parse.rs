#![no_main]

use libfuzzer_sys::fuzz_target;
use nsl::frontend::{lexer, parser};
use std::path::Path;

fuzz_target!(|data: &[u8]| {
    // Convert bytes to UTF-8 string (ignore invalid UTF-8)
    if let Ok(s) = std::str::from_utf8(data) {
        let tokens = lexer::lex(s);
        assert!(tokens.last().is_some_and(|t| t.kind == lexer::TokenKind::Eof));

        // Parsing must terminate on any token stream; clean parses must also lint without panicking.
        let output = parser::parse(&tokens);
        if output.is_ok() {
            let no_params: &[String] = &[];
            let _ = nsl::lint_source(Path::new("fuzz.nsl"), s, Some(no_params));
        }
    }
});
