//! Punctuation vocabulary.
//!
//! This module defines the structural delimiters that switch between template text and tag contents (`{{ }}`,
//! `{% %}`) plus the grouping parentheses used inside expressions.
//!
//! ## Notes
//! - Comment delimiters (`{#`, `#}`) are not tokens: the lexer skips comments, and only the linter counts them.
//!   See [`crate::lang::tags::DELIMITER_PAIRS`].
//!
//! ## Examples
//! ```rust
//! use nsl_core::lang::punctuation::{self, PunctuationId};
//!
//! assert_eq!(punctuation::from_str("{%"), Some(PunctuationId::TagOpen));
//! assert_eq!(punctuation::as_str(PunctuationId::OutputClose), "}}");
//! ```

/// Broad syntactic grouping for punctuation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PunctuationCategory {
    /// Opens a tag (`{{`, `{%`).
    Opener,
    /// Closes a tag (`}}`, `%}`).
    Closer,
    /// Expression grouping (`(`, `)`).
    Grouping,
}

/// Stable identifier for punctuation tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PunctuationId {
    OutputOpen,
    OutputClose,
    TagOpen,
    TagClose,
    LParen,
    RParen,
}

/// Metadata for a punctuation token.
#[derive(Debug, Clone, Copy)]
pub struct PunctuationInfo {
    pub id: PunctuationId,
    pub canonical: &'static str,
    pub category: PunctuationCategory,
}

/// Registry of all punctuation tokens.
pub const PUNCTUATION: &[PunctuationInfo] = &[
    info(PunctuationId::OutputOpen, "{{", PunctuationCategory::Opener),
    info(PunctuationId::OutputClose, "}}", PunctuationCategory::Closer),
    info(PunctuationId::TagOpen, "{%", PunctuationCategory::Opener),
    info(PunctuationId::TagClose, "%}", PunctuationCategory::Closer),
    info(PunctuationId::LParen, "(", PunctuationCategory::Grouping),
    info(PunctuationId::RParen, ")", PunctuationCategory::Grouping),
];

/// Canonical spelling.
pub fn as_str(id: PunctuationId) -> &'static str {
    info_for(id).canonical
}

/// Category.
pub fn category(id: PunctuationId) -> PunctuationCategory {
    info_for(id).category
}

/// Full metadata.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: PunctuationId) -> &'static PunctuationInfo {
    PUNCTUATION.iter().find(|p| p.id == id).expect("punctuation info missing")
}

/// Lookup by spelling.
pub fn from_str(s: &str) -> Option<PunctuationId> {
    PUNCTUATION.iter().find(|p| p.canonical == s).map(|p| p.id)
}

// --- helpers -----------------------------------------------------------------

const fn info(id: PunctuationId, canonical: &'static str, category: PunctuationCategory) -> PunctuationInfo {
    PunctuationInfo { id, canonical, category }
}
