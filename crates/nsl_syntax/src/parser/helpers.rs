/// Token-stream helpers and error recovery.
///
/// This chunk contains the low-level primitives used throughout parsing:
/// - Peeking/consuming tokens (`peek`, `advance`)
/// - Checking / expecting keywords, operators, and punctuation
/// - Tag lookahead (`at_tag`, `at_block_terminator`)
/// - Error recovery (`synchronize`)

/// Returned for reads past the end of a token slice that lacks its own `Eof`.
static EOF: Token = Token {
    kind: TokenKind::Eof,
    literal: String::new(),
    line: 1,
    column: 1,
};

impl<'a> Parser<'a> {
    // ========================================================================
    // Helpers
    // ========================================================================

    /// Return `true` if the current token is [`TokenKind::Eof`].
    fn is_at_end(&self) -> bool {
        matches!(self.peek().kind, TokenKind::Eof)
    }

    /// Return the current token without consuming it.
    fn peek(&self) -> &'a Token {
        self.tokens.get(self.pos).unwrap_or(&EOF)
    }

    /// Return the token after the current token without consuming it.
    fn peek_next(&self) -> &'a Token {
        self.tokens.get(self.pos + 1).unwrap_or(&EOF)
    }

    /// Advance to the next token and return the token we just consumed.
    ///
    /// At end of input this returns the `Eof` token and does not move.
    fn advance(&mut self) -> &'a Token {
        let token = self.peek();
        if !self.is_at_end() {
            self.pos += 1;
        }
        token
    }

    fn check_keyword(&self, id: KeywordId) -> bool {
        self.peek().kind.is_keyword(id)
    }

    fn check_punct(&self, id: PunctuationId) -> bool {
        self.peek().kind.is_punctuation(id)
    }

    /// Consume the current token if it is exactly `kind`, otherwise report what was found instead.
    fn expect(&mut self, kind: TokenKind) -> Result<&'a Token, SyntaxError> {
        if self.peek().kind == kind {
            Ok(self.advance())
        } else {
            Err(self.expected(kind))
        }
    }

    fn expect_ident(&mut self) -> Result<Spanned<Ident>, SyntaxError> {
        let token = self.expect(TokenKind::Ident)?;
        Ok(Spanned::new(token.literal.clone(), token.span()))
    }

    fn expect_keyword(&mut self, id: KeywordId) -> Result<&'a Token, SyntaxError> {
        self.expect(TokenKind::Keyword(id))
    }

    fn expect_punct(&mut self, id: PunctuationId) -> Result<&'a Token, SyntaxError> {
        self.expect(TokenKind::Punctuation(id))
    }

    fn expect_op(&mut self, id: OperatorId) -> Result<&'a Token, SyntaxError> {
        self.expect(TokenKind::Operator(id))
    }

    /// `expected next token to be X, got Y instead`, positioned at the current token.
    fn expected(&self, expected: impl std::fmt::Display) -> SyntaxError {
        let found = self.peek();
        SyntaxError::expected(expected, found.kind, found.span())
    }

    /// Return `true` if the upcoming tokens are `{%` followed by keyword `id`.
    fn at_tag(&self, id: KeywordId) -> bool {
        self.check_punct(PunctuationId::TagOpen) && self.peek_next().kind.is_keyword(id)
    }

    /// Return `true` if the upcoming tag closes or branches the enclosing block
    /// (`else`, `elif`, `endif`, `endfor`, `endblock`).
    fn at_block_terminator(&self) -> bool {
        self.check_punct(PunctuationId::TagOpen)
            && self.peek_next().keyword_id().is_some_and(keywords::is_block_terminator)
    }

    /// Skip ahead to a safe point after a statement failed.
    ///
    /// If the failed statement consumed nothing, one token is consumed first so the caller always makes progress.
    /// Then tokens are skipped until one of:
    /// - `{%` or `{{` (left in place, the next statement starts there)
    /// - `%}` or `}}` (consumed, it closed the broken tag)
    /// - end of input
    fn synchronize(&mut self, start: usize) {
        if self.pos == start && self.advance().kind.is_closing_delimiter() {
            return;
        }
        while !self.is_at_end() {
            let kind = self.peek().kind;
            if kind.is_opening_delimiter() {
                return;
            }
            self.advance();
            if kind.is_closing_delimiter() {
                return;
            }
        }
    }
}
