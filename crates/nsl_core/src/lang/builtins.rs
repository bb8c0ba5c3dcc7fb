//! Built-in global names.
//!
//! Names in [`BUILTIN_GLOBALS`] resolve in every template regardless of the declared parameter set. The list mirrors
//! the globals and test/operator words of the Jinja-style runtime that renders NSL, so prose words such as `and` or
//! `in` lexed outside tags never show up as undefined variables.
//!
//! ## Examples
//! ```rust
//! use nsl_core::lang::builtins;
//!
//! assert!(builtins::is_builtin("range"));
//! assert!(!builtins::is_builtin("user_name"));
//! ```

/// Every name that is always defined.
pub const BUILTIN_GLOBALS: &[&str] = &[
    "true",
    "false",
    "null",
    "None",
    "range",
    "dict",
    "lipsum",
    "cycler",
    "joiner",
    "namespace",
    "in",
    "is",
    "not",
    "and",
    "or",
    "defined",
    "undefined",
    "callable",
    "divisible",
    "by",
    "eq",
    "equalto",
    "even",
    "ne",
    "odd",
];

/// Return `true` if `name` is a built-in global.
pub fn is_builtin(name: &str) -> bool {
    BUILTIN_GLOBALS.contains(&name)
}
