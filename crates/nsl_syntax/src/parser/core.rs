/// Parser core types and entrypoint.
///
/// This chunk defines the [`Parser`] type, its top-level `parse()` loop and the [`ParseOutput`] it produces.
///
/// ## Notes
/// - This file is `include!`'d into `crate::parser` to keep all parser methods in a
///   single module while avoiding a single “god file”.

/// Everything the parser produced for one token stream.
///
/// `program` holds every statement that parsed successfully, in source order, even when `errors` is non-empty.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParseOutput {
    pub program: Program,
    pub errors: Vec<SyntaxError>,
}

impl ParseOutput {
    /// Return `true` when no syntax errors were recorded.
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// Collapse into a `Result`, discarding the partial program when there are errors.
    pub fn into_result(self) -> Result<Program, Vec<SyntaxError>> {
        if self.errors.is_empty() {
            Ok(self.program)
        } else {
            Err(self.errors)
        }
    }
}

/// Parser state.
///
/// ## Notes
/// - The parser is single-pass and recovers from errors by synchronizing at delimiter boundaries
///   (see `synchronize`).
/// - A token slice without a trailing `Eof` is accepted; reads past the end see a synthetic `Eof`.
pub struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
    errors: Vec<SyntaxError>,
}

impl<'a> Parser<'a> {
    /// Create a new parser for a token stream.
    ///
    /// ## Parameters
    /// - `tokens`: Token stream produced by `nsl_syntax::lexer`.
    pub fn new(tokens: &'a [Token]) -> Self {
        Self {
            tokens,
            pos: 0,
            errors: Vec::new(),
        }
    }

    /// Parse the entire token stream into a [`ParseOutput`].
    pub fn parse(mut self) -> ParseOutput {
        let mut statements = Vec::new();

        while !self.is_at_end() {
            if let Some(statement) = self.recovering_statement() {
                statements.push(statement);
            }
        }

        ParseOutput {
            program: Program { statements },
            errors: self.errors,
        }
    }

    /// Parse one statement; on failure record the error, synchronize and return `None`.
    fn recovering_statement(&mut self) -> Option<Spanned<Statement>> {
        let start = self.pos;
        match self.statement() {
            Ok(statement) => Some(statement),
            Err(e) => {
                self.errors.push(e);
                self.synchronize(start);
                None
            }
        }
    }
}
