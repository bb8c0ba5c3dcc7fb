//! Define the reserved keyword vocabulary for NSL.
//!
//! This module is the single source of truth for reserved words: a stable identifier ([`KeywordId`]) plus a const
//! metadata table ([`KEYWORDS`]) that records canonical spellings and categories.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive** (`If` is an identifier, not a keyword).
//! - `true`, `false` and `null` are keywords at the lexical level but literals in expressions.
//!
//! ## Examples
//! ```rust
//! use nsl_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("for"), Some(KeywordId::For));
//! assert_eq!(keywords::from_str("For"), None);
//! assert!(keywords::is_block_terminator(KeywordId::Elif));
//! ```

/// Stable identifier for every reserved keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordId {
    // Statements
    If,
    Elif,
    Else,
    EndIf,
    For,
    In,
    EndFor,
    Set,
    Block,
    EndBlock,

    // Literals
    True,
    False,
    Null,
}

/// High-level grouping used by the parser and tooling.
///
/// ## Notes
/// - [`KeywordCategory::BlockBranch`] and [`KeywordCategory::BlockEnd`] keywords terminate a block body when they
///   follow `{%`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordCategory {
    /// Opens a statement (`set`, `if`, `for`, `block`).
    Statement,
    /// Continues an open conditional (`elif`, `else`).
    BlockBranch,
    /// Closes an open block (`endif`, `endfor`, `endblock`).
    BlockEnd,
    /// Clause keyword inside a statement header (`in`).
    Clause,
    /// Literal value (`true`, `false`, `null`).
    Literal,
}

/// Metadata for a keyword.
#[derive(Debug, Clone, Copy)]
pub struct KeywordInfo {
    pub id: KeywordId,
    pub canonical: &'static str,
    pub category: KeywordCategory,
}

/// Registry of all keywords.
///
/// ## Notes
/// - The ordering is not semantically meaningful, but is grouped for readability.
pub const KEYWORDS: &[KeywordInfo] = &[
    info(KeywordId::If, "if", KeywordCategory::Statement),
    info(KeywordId::Elif, "elif", KeywordCategory::BlockBranch),
    info(KeywordId::Else, "else", KeywordCategory::BlockBranch),
    info(KeywordId::EndIf, "endif", KeywordCategory::BlockEnd),
    info(KeywordId::For, "for", KeywordCategory::Statement),
    info(KeywordId::In, "in", KeywordCategory::Clause),
    info(KeywordId::EndFor, "endfor", KeywordCategory::BlockEnd),
    info(KeywordId::Set, "set", KeywordCategory::Statement),
    info(KeywordId::Block, "block", KeywordCategory::Statement),
    info(KeywordId::EndBlock, "endblock", KeywordCategory::BlockEnd),
    info(KeywordId::True, "true", KeywordCategory::Literal),
    info(KeywordId::False, "false", KeywordCategory::Literal),
    info(KeywordId::Null, "null", KeywordCategory::Literal),
];

/// Canonical spelling.
pub fn as_str(id: KeywordId) -> &'static str {
    info_for(id).canonical
}

/// Category.
pub fn category(id: KeywordId) -> KeywordCategory {
    info_for(id).category
}

/// Return `true` if `{% <id>` ends the block body currently being parsed.
pub fn is_block_terminator(id: KeywordId) -> bool {
    matches!(category(id), KeywordCategory::BlockBranch | KeywordCategory::BlockEnd)
}

/// Full metadata.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: KeywordId) -> &'static KeywordInfo {
    KEYWORDS.iter().find(|k| k.id == id).expect("keyword info missing")
}

/// Lookup by spelling.
///
/// ## Returns
/// - `Some(KeywordId)` if `s` is a reserved word, `None` otherwise.
pub fn from_str(s: &str) -> Option<KeywordId> {
    KEYWORDS.iter().find(|k| k.canonical == s).map(|k| k.id)
}

// --- helpers -----------------------------------------------------------------

const fn info(id: KeywordId, canonical: &'static str, category: KeywordCategory) -> KeywordInfo {
    KeywordInfo { id, canonical, category }
}
