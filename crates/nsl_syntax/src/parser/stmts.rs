/// Statement parsing methods.
///
/// This chunk implements the tag grammar (`set`, `if`/`elif`/`else`, `for`, `block`), output tags and bare
/// expression statements, plus block bodies and their closing tags.
///
/// ## Notes
/// - Statements are spanned at their opening delimiter (`{%` / `{{`); bare expressions at their own span.
/// - A block body ends at `{%` followed by `else`, `elif`, `endif`, `endfor` or `endblock`. The enclosing
///   construct decides whether that tag is the one it expects.
impl<'a> Parser<'a> {
    // ========================================================================
    // Statements
    // ========================================================================

    fn statement(&mut self) -> Result<Spanned<Statement>, SyntaxError> {
        if self.check_punct(PunctuationId::TagOpen) {
            self.tag_statement()
        } else if self.check_punct(PunctuationId::OutputOpen) {
            self.output_statement()
        } else {
            let expr = self.expression(Precedence::Lowest)?;
            let span = expr.span;
            Ok(Spanned::new(Statement::Expr(expr), span))
        }
    }

    /// Dispatch on the keyword following `{%`.
    fn tag_statement(&mut self) -> Result<Spanned<Statement>, SyntaxError> {
        let open = self.advance();
        let span = open.span();
        let keyword = self.peek();

        let statement = match keyword.kind {
            TokenKind::Keyword(KeywordId::Set) => self.set_statement()?,
            TokenKind::Keyword(KeywordId::If) => self.if_statement()?,
            TokenKind::Keyword(KeywordId::For) => self.for_statement()?,
            TokenKind::Keyword(KeywordId::Block) => self.block_statement()?,
            TokenKind::Keyword(id) if keywords::is_block_terminator(id) => {
                return Err(SyntaxError::new(
                    format!("unexpected '{}' tag with no open block", keywords::as_str(id)),
                    keyword.span(),
                ));
            }
            kind => {
                return Err(SyntaxError::new(
                    format!("unknown tag: expected a statement keyword, got {kind} instead"),
                    keyword.span(),
                ));
            }
        };

        Ok(Spanned::new(statement, span))
    }

    /// `set <ident> = <expr> %}`
    fn set_statement(&mut self) -> Result<Statement, SyntaxError> {
        self.expect_keyword(KeywordId::Set)?;
        let name = self.expect_ident()?;
        self.expect_op(OperatorId::Assign)?;
        let value = self.expression(Precedence::Lowest)?;
        self.expect_punct(PunctuationId::TagClose)?;
        Ok(Statement::Set(SetStmt { name, value }))
    }

    /// `if <expr> %} ... ({% elif <expr> %} ...)* ({% else %} ...)? {% endif %}`
    fn if_statement(&mut self) -> Result<Statement, SyntaxError> {
        self.expect_keyword(KeywordId::If)?;
        let condition = self.expression(Precedence::Lowest)?;
        self.expect_punct(PunctuationId::TagClose)?;
        let consequence = self.block();

        let mut elseifs = Vec::new();
        while self.at_tag(KeywordId::Elif) {
            self.advance(); // {%
            self.advance(); // elif
            let condition = self.expression(Precedence::Lowest)?;
            self.expect_punct(PunctuationId::TagClose)?;
            let consequence = self.block();
            elseifs.push(ElseIf { condition, consequence });
        }

        let alternative = if self.at_tag(KeywordId::Else) {
            self.advance(); // {%
            self.advance(); // else
            self.expect_punct(PunctuationId::TagClose)?;
            Some(self.block())
        } else {
            None
        };

        self.expect_end_tag(KeywordId::EndIf)?;
        Ok(Statement::If(IfStmt {
            condition,
            consequence,
            elseifs,
            alternative,
        }))
    }

    /// `for <ident> in <expr> %} ... {% endfor %}`
    fn for_statement(&mut self) -> Result<Statement, SyntaxError> {
        self.expect_keyword(KeywordId::For)?;
        let iterator = self.expect_ident()?;
        self.expect_keyword(KeywordId::In)?;
        let sequence = self.expression(Precedence::Lowest)?;
        self.expect_punct(PunctuationId::TagClose)?;
        let body = self.block();
        self.expect_end_tag(KeywordId::EndFor)?;
        Ok(Statement::For(ForStmt { iterator, sequence, body }))
    }

    /// `block <ident>? %} ... {% endblock %}`
    fn block_statement(&mut self) -> Result<Statement, SyntaxError> {
        self.expect_keyword(KeywordId::Block)?;
        let name = if self.peek().kind == TokenKind::Ident {
            Some(self.expect_ident()?)
        } else {
            None
        };
        self.expect_punct(PunctuationId::TagClose)?;
        let body = self.block();
        self.expect_end_tag(KeywordId::EndBlock)?;
        Ok(Statement::Block(BlockStmt { name, body }))
    }

    /// `{{ <expr> }}`
    fn output_statement(&mut self) -> Result<Spanned<Statement>, SyntaxError> {
        let span = self.expect_punct(PunctuationId::OutputOpen)?.span();
        let expr = self.expression(Precedence::Lowest)?;
        self.expect_punct(PunctuationId::OutputClose)?;
        Ok(Spanned::new(Statement::Output(expr), span))
    }

    // ========================================================================
    // Blocks
    // ========================================================================

    /// Parse statements until a block terminator tag or end of input.
    ///
    /// Errors inside the body are recorded and recovered from one statement at a time, so later siblings still
    /// parse. The terminator itself is left for the caller.
    fn block(&mut self) -> Block {
        let mut statements = Vec::new();
        while !self.is_at_end() && !self.at_block_terminator() {
            if let Some(statement) = self.recovering_statement() {
                statements.push(statement);
            }
        }
        Block { statements }
    }

    /// `{% <end> %}`
    fn expect_end_tag(&mut self, end: KeywordId) -> Result<(), SyntaxError> {
        self.expect_punct(PunctuationId::TagOpen)?;
        self.expect_keyword(end)?;
        self.expect_punct(PunctuationId::TagClose)?;
        Ok(())
    }
}
