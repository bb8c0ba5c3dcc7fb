//! Undefined-variable analysis for NSL templates
//!
//! Walks the AST with a stack of scope frames and reports every identifier reference that no frame defines.
//!
//! ## Scoping rules
//!
//! - The root frame holds the declared parameters. Built-in globals are defined everywhere.
//! - `set` evaluates its value first, then binds the name in the innermost frame.
//! - `for` evaluates its sequence in the enclosing frame, then pushes a frame holding the iterator for the body.
//!   Nothing bound inside the loop survives `{% endfor %}`.
//! - `if`/`elif`/`else` and `block` bodies share the enclosing frame, so a `set` inside a branch is visible
//!   afterwards.
//! - Attribute names and filter names are not variable references; only the object / input side is checked.

use std::collections::HashSet;
use std::path::Path;

use nsl_core::lang::builtins;

use super::ast::*;
use super::diagnostics::Diagnostic;

/// Scope analyzer state for one program.
pub struct ScopeAnalyzer<'a> {
    file: &'a Path,
    /// Innermost frame last.
    frames: Vec<HashSet<String>>,
    diagnostics: Vec<Diagnostic>,
}

impl<'a> ScopeAnalyzer<'a> {
    /// Create an analyzer whose root frame holds `params`.
    pub fn new(file: &'a Path, params: &[String]) -> Self {
        Self {
            file,
            frames: vec![params.iter().cloned().collect()],
            diagnostics: Vec::new(),
        }
    }

    /// Analyze the program and return one diagnostic per undefined reference, in traversal order.
    pub fn analyze(mut self, program: &Program) -> Vec<Diagnostic> {
        self.statements(&program.statements);
        self.diagnostics
    }

    // ========================================================================
    // Scope chain
    // ========================================================================

    fn push_frame(&mut self) {
        self.frames.push(HashSet::new());
    }

    fn pop_frame(&mut self) {
        // The root frame is never popped.
        if self.frames.len() > 1 {
            self.frames.pop();
        }
    }

    fn declare(&mut self, name: &str) {
        if let Some(frame) = self.frames.last_mut() {
            frame.insert(name.to_string());
        }
    }

    fn is_defined(&self, name: &str) -> bool {
        builtins::is_builtin(name) || self.frames.iter().rev().any(|frame| frame.contains(name))
    }

    // ========================================================================
    // Traversal
    // ========================================================================

    fn statements(&mut self, statements: &[Spanned<Statement>]) {
        for stmt in statements {
            self.statement(&stmt.node);
        }
    }

    fn statement(&mut self, stmt: &Statement) {
        match stmt {
            Statement::Set(set) => {
                self.expr(&set.value);
                self.declare(&set.name.node);
            }
            Statement::If(if_stmt) => {
                self.expr(&if_stmt.condition);
                self.statements(&if_stmt.consequence.statements);
                for branch in &if_stmt.elseifs {
                    self.expr(&branch.condition);
                    self.statements(&branch.consequence.statements);
                }
                if let Some(alternative) = &if_stmt.alternative {
                    self.statements(&alternative.statements);
                }
            }
            Statement::For(for_stmt) => {
                self.expr(&for_stmt.sequence);
                self.push_frame();
                self.declare(&for_stmt.iterator.node);
                self.statements(&for_stmt.body.statements);
                self.pop_frame();
            }
            Statement::Block(block) => self.statements(&block.body.statements),
            Statement::Output(expr) | Statement::Expr(expr) => self.expr(expr),
        }
    }

    fn expr(&mut self, expr: &Spanned<Expr>) {
        match &expr.node {
            Expr::Ident(name) => {
                if !self.is_defined(name) {
                    self.report_undefined(name, expr.span);
                }
            }
            Expr::Int(_) | Expr::Str(_) | Expr::Bool(_) | Expr::Null => {}
            Expr::Prefix(_, operand) => self.expr(operand),
            Expr::Infix(left, _, right) => {
                self.expr(left);
                self.expr(right);
            }
            Expr::Attribute(object, _) => self.expr(object),
            Expr::Filter(input, _) => self.expr(input),
        }
    }

    fn report_undefined(&mut self, name: &str, span: Span) {
        let line = span.line.max(1);
        self.diagnostics.push(Diagnostic::error(
            self.file,
            line,
            format!("undefined variable: '{name}' is used but not defined in parameters or in the skill"),
        ));
    }
}

/// Report undefined variable references in `program`, given the declared parameter names.
#[tracing::instrument(skip_all, fields(file = %file.display(), params = params.len()))]
pub fn analyze(file: &Path, program: &Program, params: &[String]) -> Vec<Diagnostic> {
    let diagnostics = ScopeAnalyzer::new(file, params).analyze(program);
    tracing::debug!(undefined = diagnostics.len(), "scope analysis finished");
    diagnostics
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontend::parser;

    fn undefined(source: &str, params: &[&str]) -> Vec<(usize, String)> {
        let program = parser::parse_source(source).into_result().unwrap();
        let params: Vec<String> = params.iter().map(|p| p.to_string()).collect();
        analyze(Path::new("t.nsl"), &program, &params)
            .into_iter()
            .map(|d| (d.line, d.message))
            .collect()
    }

    fn names(source: &str, params: &[&str]) -> Vec<String> {
        undefined(source, params)
            .into_iter()
            .filter_map(|(_, msg)| msg.split('\'').nth(1).map(str::to_string))
            .collect()
    }

    #[test]
    fn test_message_shape_and_line() {
        assert_eq!(
            undefined("\n\n{{ missing }}", &[]),
            vec![(
                3,
                "undefined variable: 'missing' is used but not defined in parameters or in the skill".to_string()
            )]
        );
    }

    #[test]
    fn test_params_and_builtins_are_defined() {
        assert!(names("{{ user }}{{ range }}{{ lipsum }}{% if x %}{{ namespace }}{% endif %}", &["user", "x"]).is_empty());
    }

    #[test]
    fn test_loop_iterator_does_not_leak() {
        let source = "{% for item in items %}{{ item }}{% endfor %}{{ item }}";
        assert_eq!(names(source, &["items"]), vec!["item"]);
    }

    #[test]
    fn test_sequence_is_checked_in_enclosing_scope() {
        assert_eq!(names("{% for x in x %}{% endfor %}", &[]), vec!["x"]);
    }

    #[test]
    fn test_set_inside_loop_does_not_leak() {
        let source = "{% for i in xs %}{% set inner = i %}{{ inner }}{% endfor %}{{ inner }}";
        assert_eq!(names(source, &["xs"]), vec!["inner"]);
    }

    #[test]
    fn test_set_inside_if_is_visible_afterwards() {
        let source = "{% if flag %}{% set title = 'a' %}{% else %}{% set title = 'b' %}{% endif %}{{ title }}";
        assert!(names(source, &["flag"]).is_empty());
    }

    #[test]
    fn test_set_value_is_evaluated_before_binding() {
        assert_eq!(names("{% set total = total + 1 %}{{ total }}", &[]), vec!["total"]);
    }

    #[test]
    fn test_attribute_and_filter_names_are_not_references() {
        assert_eq!(names("{{ user.name | upper }}", &[]), vec!["user"]);
        assert!(names("{{ user.name | upper }}", &["user"]).is_empty());
    }

    #[test]
    fn test_nested_loops_see_outer_iterators() {
        let source = "{% for row in rows %}{% for cell in row.cells %}{{ row.id + cell }}{% endfor %}{{ cell }}{% endfor %}";
        assert_eq!(names(source, &["rows"]), vec!["cell"]);
    }

    #[test]
    fn test_block_bodies_share_the_enclosing_scope() {
        assert!(names("{% block body %}{% set x = 1 %}{% endblock %}{{ x }}", &[]).is_empty());
    }

    #[test]
    fn test_every_reference_is_reported() {
        assert_eq!(names("{{ a }}{{ a + b }}", &[]), vec!["a", "a", "b"]);
    }

    #[test]
    fn test_literals_produce_nothing() {
        assert!(names("{{ 1 }}{{ 'x' }}{{ true }}{{ null }}{{ -1 * 2 }}", &[]).is_empty());
    }
}
