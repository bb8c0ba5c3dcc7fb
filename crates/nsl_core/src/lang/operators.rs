//! Operator vocabulary.
//!
//! This module defines the canonical operator set along with the binding power used by the parser's precedence
//! climbing and by the formatter when deciding where parentheses are required.
//!
//! ## Notes
//! - Every infix operator is left-associative.
//! - `.` (attribute access) and `|` (filter application) are modeled as infix operators so chains like
//!   `a.b.c | f` fall out of the same precedence loop.
//! - `-` is both a prefix and an infix operator; `!` is prefix only; `=` only appears in `set` statements.
//!
//! ## Examples
//! ```rust
//! use nsl_core::lang::operators::{self, OperatorId, Precedence};
//!
//! assert_eq!(operators::from_str("|"), Some(OperatorId::Pipe));
//! assert_eq!(operators::infix_precedence(OperatorId::Star), Some(Precedence::Product));
//! assert!(Precedence::Filter < Precedence::Attribute);
//! ```

/// Binding power, ascending. Derived `Ord` follows declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Precedence {
    Lowest,
    /// `==`, `!=`
    Equals,
    /// `<`, `>`, `<=`, `>=`
    Comparison,
    /// `+`, `-`
    Sum,
    /// `*`, `/`
    Product,
    /// `|`
    Filter,
    /// `.`
    Attribute,
    /// unary `!`, `-`
    Prefix,
}

/// Stable identifier for every operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorId {
    Assign,
    Plus,
    Minus,
    Bang,
    Star,
    Slash,
    Dot,
    Pipe,
    Lt,
    Gt,
    EqEq,
    NotEq,
    LtEq,
    GtEq,
}

/// Metadata for an operator.
///
/// ## Notes
/// - `precedence` is `None` for operators that never appear in infix position.
#[derive(Debug, Clone, Copy)]
pub struct OperatorInfo {
    pub id: OperatorId,
    pub spelling: &'static str,
    pub precedence: Option<Precedence>,
    pub is_prefix: bool,
}

/// Registry of all operators.
pub const OPERATORS: &[OperatorInfo] = &[
    op(OperatorId::Assign, "=", None, false),
    op(OperatorId::Plus, "+", Some(Precedence::Sum), false),
    op(OperatorId::Minus, "-", Some(Precedence::Sum), true),
    op(OperatorId::Bang, "!", None, true),
    op(OperatorId::Star, "*", Some(Precedence::Product), false),
    op(OperatorId::Slash, "/", Some(Precedence::Product), false),
    op(OperatorId::Dot, ".", Some(Precedence::Attribute), false),
    op(OperatorId::Pipe, "|", Some(Precedence::Filter), false),
    op(OperatorId::Lt, "<", Some(Precedence::Comparison), false),
    op(OperatorId::Gt, ">", Some(Precedence::Comparison), false),
    op(OperatorId::EqEq, "==", Some(Precedence::Equals), false),
    op(OperatorId::NotEq, "!=", Some(Precedence::Equals), false),
    op(OperatorId::LtEq, "<=", Some(Precedence::Comparison), false),
    op(OperatorId::GtEq, ">=", Some(Precedence::Comparison), false),
];

/// Canonical spelling.
pub fn as_str(id: OperatorId) -> &'static str {
    info_for(id).spelling
}

/// Infix binding power, if `id` can appear between two operands.
pub fn infix_precedence(id: OperatorId) -> Option<Precedence> {
    info_for(id).precedence
}

/// Return `true` if `id` can start a prefix expression.
pub fn is_prefix(id: OperatorId) -> bool {
    info_for(id).is_prefix
}

/// Return the full metadata entry for an operator.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: OperatorId) -> &'static OperatorInfo {
    OPERATORS.iter().find(|o| o.id == id).expect("operator info missing")
}

/// Resolve an operator spelling to its identifier.
pub fn from_str(spelling: &str) -> Option<OperatorId> {
    OPERATORS.iter().find(|o| o.spelling == spelling).map(|o| o.id)
}

// --- helpers -----------------------------------------------------------------

const fn op(id: OperatorId, spelling: &'static str, precedence: Option<Precedence>, is_prefix: bool) -> OperatorInfo {
    OperatorInfo {
        id,
        spelling,
        precedence,
        is_prefix,
    }
}
