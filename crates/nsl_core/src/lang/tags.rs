//! Block tag and delimiter pairing tables used by structural checks.
//!
//! These are the lightweight, regex/stack level views of the grammar: which tag names open a block, which close it,
//! and which delimiter spellings must balance. The parser does not consult them; it has the full grammar.
//!
//! ## Examples
//! ```rust
//! use nsl_core::lang::tags;
//!
//! assert_eq!(tags::closer_for("for"), Some("endfor"));
//! assert_eq!(tags::opener_for("endblock"), Some("block"));
//! assert!(!tags::is_opener("set"));
//! ```

/// `(opener, closer)` tag names for every block construct.
pub const BLOCK_PAIRS: &[(&str, &str)] = &[("if", "endif"), ("for", "endfor"), ("block", "endblock")];

/// `(open, close)` delimiter spellings that must occur equally often in a file.
pub const DELIMITER_PAIRS: &[(&str, &str)] = &[("{{", "}}"), ("{%", "%}"), ("{#", "#}")];

/// Comment delimiters (comments are tolerated by the lexer but rejected by the linter).
pub const COMMENT_OPEN: &str = "{#";
pub const COMMENT_CLOSE: &str = "#}";

/// Return `true` if `tag` opens a block.
pub fn is_opener(tag: &str) -> bool {
    closer_for(tag).is_some()
}

/// Return `true` if `tag` closes a block.
pub fn is_closer(tag: &str) -> bool {
    opener_for(tag).is_some()
}

/// The closing tag expected for `opener`.
pub fn closer_for(opener: &str) -> Option<&'static str> {
    BLOCK_PAIRS.iter().find(|(o, _)| *o == opener).map(|(_, c)| *c)
}

/// The opening tag that `closer` terminates.
pub fn opener_for(closer: &str) -> Option<&'static str> {
    BLOCK_PAIRS.iter().find(|(_, c)| *c == closer).map(|(o, _)| *o)
}
