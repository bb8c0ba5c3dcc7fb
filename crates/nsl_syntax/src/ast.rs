//! Abstract Syntax Tree definitions for NSL
//!
//! Statements and expressions are closed enums; every traversal (formatter, scope analyzer) matches them
//! exhaustively so a new variant cannot be silently ignored. Nodes own their children and carry the line/column of
//! the token they were parsed from.

use std::fmt;

use nsl_core::lang::operators::{self, OperatorId, Precedence};

/// Source position of a node's originating token (1-based line and column).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub line: usize,
    pub column: usize,
}

impl Span {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// A node with source location
#[derive(Debug, Clone, PartialEq)]
pub struct Spanned<T> {
    pub node: T,
    pub span: Span,
}

impl<T> Spanned<T> {
    pub fn new(node: T, span: Span) -> Self {
        Self { node, span }
    }
}

pub type Ident = String;

/// A template is a flat sequence of statements.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub statements: Vec<Spanned<Statement>>,
}

// ============================================================================
// Statements
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `{% set name = value %}`
    Set(SetStmt),
    /// `{% if %} ... {% elif %} ... {% else %} ... {% endif %}`
    If(IfStmt),
    /// `{% for x in xs %} ... {% endfor %}`
    For(ForStmt),
    /// `{{ expr }}`
    Output(Spanned<Expr>),
    /// `{% block name %} ... {% endblock %}`
    Block(BlockStmt),
    /// A bare expression outside any delimiter.
    Expr(Spanned<Expr>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct SetStmt {
    pub name: Spanned<Ident>,
    pub value: Spanned<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IfStmt {
    pub condition: Spanned<Expr>,
    pub consequence: Block,
    pub elseifs: Vec<ElseIf>,
    pub alternative: Option<Block>,
}

/// One `{% elif cond %}` branch.
#[derive(Debug, Clone, PartialEq)]
pub struct ElseIf {
    pub condition: Spanned<Expr>,
    pub consequence: Block,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ForStmt {
    pub iterator: Spanned<Ident>,
    pub sequence: Spanned<Expr>,
    pub body: Block,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BlockStmt {
    pub name: Option<Spanned<Ident>>,
    pub body: Block,
}

/// Statement list of a body. Present (possibly empty) on every `if`/`for`/`block`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Block {
    pub statements: Vec<Spanned<Statement>>,
}

impl Block {
    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

// ============================================================================
// Expressions
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Ident(Ident),
    Int(i64),
    Str(String),
    Bool(bool),
    Null,
    Prefix(PrefixOp, Box<Spanned<Expr>>),
    Infix(Box<Spanned<Expr>>, InfixOp, Box<Spanned<Expr>>),
    /// `object.attribute`; the attribute is a name, never a variable reference.
    Attribute(Box<Spanned<Expr>>, Ident),
    /// `input | filter`; the filter is a name from the implicit filter namespace.
    Filter(Box<Spanned<Expr>>, Ident),
}

impl Expr {
    /// How tightly this node binds when it appears as an operand.
    ///
    /// Atoms report [`Precedence::Prefix`], the top of the ladder, so they never need parentheses.
    pub fn precedence(&self) -> Precedence {
        match self {
            Expr::Ident(_) | Expr::Int(_) | Expr::Str(_) | Expr::Bool(_) | Expr::Null => Precedence::Prefix,
            Expr::Prefix(..) => Precedence::Prefix,
            Expr::Infix(_, op, _) => op.precedence(),
            Expr::Attribute(..) => Precedence::Attribute,
            Expr::Filter(..) => Precedence::Filter,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrefixOp {
    /// `!`
    Not,
    /// `-`
    Neg,
}

impl PrefixOp {
    pub fn from_operator(id: OperatorId) -> Option<Self> {
        match id {
            OperatorId::Bang => Some(PrefixOp::Not),
            OperatorId::Minus => Some(PrefixOp::Neg),
            _ => None,
        }
    }

    pub fn operator_id(self) -> OperatorId {
        match self {
            PrefixOp::Not => OperatorId::Bang,
            PrefixOp::Neg => OperatorId::Minus,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfixOp {
    Add,
    Sub,
    Mul,
    Div,
    Eq,
    NotEq,
    Lt,
    Gt,
    LtEq,
    GtEq,
}

impl InfixOp {
    /// Map an operator token to an arithmetic/comparison operator.
    ///
    /// `.` and `|` are infix in the grammar but build dedicated nodes, so they map to `None`.
    pub fn from_operator(id: OperatorId) -> Option<Self> {
        Some(match id {
            OperatorId::Plus => InfixOp::Add,
            OperatorId::Minus => InfixOp::Sub,
            OperatorId::Star => InfixOp::Mul,
            OperatorId::Slash => InfixOp::Div,
            OperatorId::EqEq => InfixOp::Eq,
            OperatorId::NotEq => InfixOp::NotEq,
            OperatorId::Lt => InfixOp::Lt,
            OperatorId::Gt => InfixOp::Gt,
            OperatorId::LtEq => InfixOp::LtEq,
            OperatorId::GtEq => InfixOp::GtEq,
            OperatorId::Assign | OperatorId::Bang | OperatorId::Dot | OperatorId::Pipe => return None,
        })
    }

    pub fn operator_id(self) -> OperatorId {
        match self {
            InfixOp::Add => OperatorId::Plus,
            InfixOp::Sub => OperatorId::Minus,
            InfixOp::Mul => OperatorId::Star,
            InfixOp::Div => OperatorId::Slash,
            InfixOp::Eq => OperatorId::EqEq,
            InfixOp::NotEq => OperatorId::NotEq,
            InfixOp::Lt => OperatorId::Lt,
            InfixOp::Gt => OperatorId::Gt,
            InfixOp::LtEq => OperatorId::LtEq,
            InfixOp::GtEq => OperatorId::GtEq,
        }
    }

    pub fn precedence(self) -> Precedence {
        operators::infix_precedence(self.operator_id()).unwrap_or(Precedence::Lowest)
    }
}

impl fmt::Display for PrefixOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(operators::as_str(self.operator_id()))
    }
}

impl fmt::Display for InfixOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(operators::as_str(self.operator_id()))
    }
}

/// Fully parenthesised rendering, used to inspect how an expression was grouped.
///
/// `a + b * c` renders as `(a + (b * c))`. For canonical template output use the formatter instead.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Ident(name) => write!(f, "{name}"),
            Expr::Int(n) => write!(f, "{n}"),
            Expr::Str(s) => write!(f, "{s:?}"),
            Expr::Bool(b) => write!(f, "{b}"),
            Expr::Null => write!(f, "null"),
            Expr::Prefix(op, operand) => write!(f, "({op}{})", operand.node),
            Expr::Infix(left, op, right) => write!(f, "({} {op} {})", left.node, right.node),
            Expr::Attribute(object, attr) => write!(f, "{}.{attr}", object.node),
            Expr::Filter(input, filter) => write!(f, "({} | {filter})", input.node),
        }
    }
}
