/// Parse a token stream into an AST [`Program`] plus any syntax errors.
///
/// This is the main public entrypoint for parsing. It never fails: check [`ParseOutput::errors`].
///
/// ## Parameters
/// - `tokens`: Token stream produced by `nsl_syntax::lexer`.
#[tracing::instrument(skip_all, fields(token_count = tokens.len()))]
pub fn parse(tokens: &[Token]) -> ParseOutput {
    let output = Parser::new(tokens).parse();
    tracing::trace!(
        statements = output.program.statements.len(),
        errors = output.errors.len(),
        "parsed token stream"
    );
    output
}

/// Lex and parse `source` in one step.
pub fn parse_source(source: &str) -> ParseOutput {
    parse(&lexer::lex(source))
}
