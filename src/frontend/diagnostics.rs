//! Diagnostics reported by the linter.
//!
//! A [`Diagnostic`] is a plain value: the file it belongs to, a 1-based line, a severity, a message and optionally
//! the text of the offending line. `Display` renders the one-line form `path:line: severity: message`; the
//! [`miette::Diagnostic`] impl lets the driver render the snippet with a label.

use std::fmt;
use std::path::{Path, PathBuf};

use thiserror::Error;

pub use nsl_syntax::diagnostics::SyntaxError;

/// Diagnostic code shared by every lint finding.
pub const LINT_CODE: &str = "nsl::lint";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// One lint finding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}:{line}: {severity}: {message}", .file.display())]
pub struct Diagnostic {
    pub file: PathBuf,
    pub line: usize,
    pub severity: Severity,
    pub message: String,
    pub snippet: Option<String>,
}

impl Diagnostic {
    pub fn new(file: &Path, line: usize, severity: Severity, message: impl Into<String>) -> Self {
        Self {
            file: file.to_path_buf(),
            line,
            severity,
            message: message.into(),
            snippet: None,
        }
    }

    pub fn error(file: &Path, line: usize, message: impl Into<String>) -> Self {
        Self::new(file, line, Severity::Error, message)
    }

    pub fn warning(file: &Path, line: usize, message: impl Into<String>) -> Self {
        Self::new(file, line, Severity::Warning, message)
    }

    pub fn with_snippet(mut self, snippet: impl Into<String>) -> Self {
        self.snippet = Some(snippet.into());
        self
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl miette::Diagnostic for Diagnostic {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(LINT_CODE))
    }

    fn severity(&self) -> Option<miette::Severity> {
        Some(match self.severity {
            Severity::Error => miette::Severity::Error,
            Severity::Warning => miette::Severity::Warning,
        })
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        self.snippet.as_ref().map(|s| s as &dyn miette::SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = miette::LabeledSpan> + '_>> {
        let snippet = self.snippet.as_ref()?;
        let label = miette::LabeledSpan::new(Some(format!("line {}", self.line)), 0, snippet.len());
        Some(Box::new(std::iter::once(label)))
    }
}

/// Count diagnostics by severity: `(errors, warnings)`.
pub fn tally(diagnostics: &[Diagnostic]) -> (usize, usize) {
    let errors = diagnostics.iter().filter(|d| d.is_error()).count();
    (errors, diagnostics.len() - errors)
}
