/// Expression parsing methods.
///
/// This chunk implements precedence climbing over the operator registry:
/// `==`/`!=` → `<`/`>`/`<=`/`>=` → `+`/`-` → `*`/`/` → `|` → `.` → prefix `!`/`-`.
///
/// ## Notes
/// - Binding power comes from `nsl_core::lang::operators::infix_precedence`; every infix operator is
///   left-associative.
/// - Prefix operands are parsed at [`Precedence::Prefix`], so `-a.b` groups as `(-a).b`.
/// - Infix nodes are spanned at their operator token, atoms at their own token.
impl<'a> Parser<'a> {
    // ========================================================================
    // Expressions
    // ========================================================================

    /// Parse an expression whose operators all bind tighter than `precedence`.
    fn expression(&mut self, precedence: Precedence) -> Result<Spanned<Expr>, SyntaxError> {
        let mut left = self.prefix()?;

        loop {
            let token = self.peek();
            let Some(id) = token.operator_id() else {
                break;
            };
            let Some(next) = operators::infix_precedence(id) else {
                break;
            };
            if next <= precedence {
                break;
            }
            self.advance();
            left = self.infix(left, id, next, token.span())?;
        }

        Ok(left)
    }

    /// Parse the expression starting at the current token.
    fn prefix(&mut self) -> Result<Spanned<Expr>, SyntaxError> {
        let token = self.peek();
        let span = token.span();

        let expr = match token.kind {
            TokenKind::Ident => Expr::Ident(token.literal.clone()),
            TokenKind::Int => Expr::Int(integer_literal(token)?),
            TokenKind::String => Expr::Str(token.literal.clone()),
            TokenKind::Keyword(KeywordId::True) => Expr::Bool(true),
            TokenKind::Keyword(KeywordId::False) => Expr::Bool(false),
            TokenKind::Keyword(KeywordId::Null) => Expr::Null,
            TokenKind::Operator(id) if operators::is_prefix(id) => {
                let Some(op) = PrefixOp::from_operator(id) else {
                    return Err(no_prefix_parse(token));
                };
                self.advance();
                let operand = self.expression(Precedence::Prefix)?;
                return Ok(Spanned::new(Expr::Prefix(op, Box::new(operand)), span));
            }
            TokenKind::Punctuation(PunctuationId::LParen) => {
                self.advance();
                let inner = self.expression(Precedence::Lowest)?;
                self.expect_punct(PunctuationId::RParen)?;
                return Ok(inner);
            }
            _ => return Err(no_prefix_parse(token)),
        };

        self.advance();
        Ok(Spanned::new(expr, span))
    }

    /// Parse the right-hand side of an infix operator that has already been consumed.
    fn infix(
        &mut self,
        left: Spanned<Expr>,
        id: OperatorId,
        precedence: Precedence,
        span: Span,
    ) -> Result<Spanned<Expr>, SyntaxError> {
        let left = Box::new(left);
        let expr = match id {
            OperatorId::Dot => Expr::Attribute(left, self.expect_ident()?.node),
            OperatorId::Pipe => Expr::Filter(left, self.expect_ident()?.node),
            _ => match InfixOp::from_operator(id) {
                Some(op) => {
                    let right = self.expression(precedence)?;
                    Expr::Infix(left, op, Box::new(right))
                }
                None => {
                    return Err(SyntaxError::new(
                        format!("no infix parse function for {} found", operators::as_str(id)),
                        span,
                    ));
                }
            },
        };
        Ok(Spanned::new(expr, span))
    }
}

fn integer_literal(token: &Token) -> Result<i64, SyntaxError> {
    token
        .literal
        .parse::<i64>()
        .map_err(|_| SyntaxError::new(format!("could not parse \"{}\" as integer", token.literal), token.span()))
}

fn no_prefix_parse(token: &Token) -> SyntaxError {
    SyntaxError::new(format!("no prefix parse function for {} found", token.kind), token.span())
}
