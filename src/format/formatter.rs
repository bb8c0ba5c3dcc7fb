//! Core formatting logic for NSL templates
//!
//! Walks the AST and emits canonical template text: one statement per line, tags with a single inner space,
//! indented `if`/`for` bodies, and only the parentheses that operator precedence requires.

use super::config::FormatConfig;
use super::writer::FormatWriter;
use crate::frontend::ast::*;
use nsl_core::lang::keywords::KeywordId;
use nsl_core::lang::operators::Precedence;

/// Formatter that transforms an AST back to formatted template text
pub struct Formatter {
    writer: FormatWriter,
    indent_blocks: bool,
}

impl Formatter {
    /// Create a new formatter with the given config
    pub fn new(config: FormatConfig) -> Self {
        Self {
            writer: FormatWriter::new(&config),
            indent_blocks: config.indent_blocks,
        }
    }

    /// Format a program and return the formatted text
    pub fn format(mut self, program: &Program) -> String {
        self.statements(&program.statements);
        self.writer.finish()
    }

    // ========================================================================
    // Statements
    // ========================================================================

    fn statements(&mut self, statements: &[Spanned<Statement>]) {
        let mut after_bare = false;
        for stmt in statements {
            match &stmt.node {
                Statement::Expr(expr) => {
                    self.bare_expr(&expr.node, after_bare);
                    after_bare = true;
                }
                other => {
                    self.statement(other);
                    after_bare = false;
                }
            }
        }
    }

    /// Bare text on its own line.
    ///
    /// A leading `-` right after another bare expression would re-parse as a binary minus joining the two lines,
    /// so that expression keeps its parentheses.
    fn bare_expr(&mut self, expr: &Expr, after_bare: bool) {
        if after_bare && leads_with_minus(expr) {
            self.writer.write("(");
            self.format_expr(expr);
            self.writer.write(")");
        } else {
            self.format_expr(expr);
        }
        self.writer.end_line();
    }

    fn statement(&mut self, stmt: &Statement) {
        match stmt {
            Statement::Set(set) => {
                self.writer.open_tag(KeywordId::Set);
                self.writer.write(" ");
                self.writer.write(&set.name.node);
                self.writer.write(" = ");
                self.format_expr(&set.value.node);
                self.writer.close_tag();
            }
            Statement::If(if_stmt) => self.format_if(if_stmt),
            Statement::For(for_stmt) => self.format_for(for_stmt),
            Statement::Output(expr) => {
                self.writer.open_output();
                self.format_expr(&expr.node);
                self.writer.close_output();
            }
            Statement::Block(block) => self.format_named_block(block),
            Statement::Expr(expr) => self.bare_expr(&expr.node, false),
        }
    }

    fn format_if(&mut self, if_stmt: &IfStmt) {
        self.condition_tag(KeywordId::If, &if_stmt.condition.node);
        self.body(&if_stmt.consequence, true);

        for branch in &if_stmt.elseifs {
            self.condition_tag(KeywordId::Elif, &branch.condition.node);
            self.body(&branch.consequence, true);
        }

        if let Some(alternative) = &if_stmt.alternative {
            self.writer.bare_tag(KeywordId::Else);
            self.body(alternative, true);
        }

        self.writer.bare_tag(KeywordId::EndIf);
    }

    fn format_for(&mut self, for_stmt: &ForStmt) {
        self.writer.open_tag(KeywordId::For);
        self.writer.write(" ");
        self.writer.write(&for_stmt.iterator.node);
        self.writer.write(" in ");
        self.format_expr(&for_stmt.sequence.node);
        self.writer.close_tag();
        self.body(&for_stmt.body, true);
        self.writer.bare_tag(KeywordId::EndFor);
    }

    fn format_named_block(&mut self, block: &BlockStmt) {
        self.writer.open_tag(KeywordId::Block);
        if let Some(name) = &block.name {
            self.writer.write(" ");
            self.writer.write(&name.node);
        }
        self.writer.close_tag();
        self.body(&block.body, self.indent_blocks);
        self.writer.bare_tag(KeywordId::EndBlock);
    }

    /// `{% if cond %}` / `{% elif cond %}`
    fn condition_tag(&mut self, keyword: KeywordId, condition: &Expr) {
        self.writer.open_tag(keyword);
        self.writer.write(" ");
        self.format_expr(condition);
        self.writer.close_tag();
    }

    fn body(&mut self, block: &Block, indented: bool) {
        if indented {
            self.writer.indent();
        }
        self.statements(&block.statements);
        if indented {
            self.writer.dedent();
        }
    }

    // ========================================================================
    // Expressions
    // ========================================================================

    fn format_expr(&mut self, expr: &Expr) {
        match expr {
            Expr::Ident(name) => self.writer.write(name),
            Expr::Int(n) => self.writer.write(&n.to_string()),
            Expr::Str(s) => self.writer.write(&escape_string(s)),
            Expr::Bool(b) => self.writer.write(if *b { "true" } else { "false" }),
            Expr::Null => self.writer.write("null"),
            Expr::Prefix(op, operand) => {
                self.writer.write(&op.to_string());
                self.format_operand(&operand.node, Precedence::Prefix, Side::Left);
            }
            Expr::Infix(left, op, right) => {
                let precedence = op.precedence();
                self.format_operand(&left.node, precedence, Side::Left);
                self.writer.write(" ");
                self.writer.write(&op.to_string());
                self.writer.write(" ");
                self.format_operand(&right.node, precedence, Side::Right);
            }
            Expr::Attribute(object, attribute) => {
                self.format_operand(&object.node, Precedence::Attribute, Side::Left);
                self.writer.write(".");
                self.writer.write(attribute);
            }
            Expr::Filter(input, filter) => {
                self.format_operand(&input.node, Precedence::Filter, Side::Left);
                self.writer.write(" | ");
                self.writer.write(filter);
            }
        }
    }

    /// Write a child expression, parenthesised when it binds looser than its parent.
    ///
    /// Operators are left-associative, so a right operand of equal precedence also needs parentheses.
    fn format_operand(&mut self, expr: &Expr, parent: Precedence, side: Side) {
        let child = expr.precedence();
        let needs_parens = match side {
            Side::Left => child < parent,
            Side::Right => child <= parent,
        };

        if needs_parens {
            self.writer.write("(");
            self.format_expr(expr);
            self.writer.write(")");
        } else {
            self.format_expr(expr);
        }
    }
}

/// Whether the printed form of `expr` starts with a prefix `-`.
fn leads_with_minus(expr: &Expr) -> bool {
    // The leftmost operand is printed bare unless it binds looser than its parent (see `format_operand`).
    let leftmost = |child: &Expr, parent: Precedence| child.precedence() >= parent && leads_with_minus(child);
    match expr {
        Expr::Prefix(PrefixOp::Neg, _) => true,
        Expr::Infix(left, op, _) => leftmost(&left.node, op.precedence()),
        Expr::Attribute(object, _) => leftmost(&object.node, Precedence::Attribute),
        Expr::Filter(input, _) => leftmost(&input.node, Precedence::Filter),
        _ => false,
    }
}

#[derive(Clone, Copy)]
enum Side {
    Left,
    Right,
}

/// Double-quote a string, escaping what the lexer unescapes.
fn escape_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}
