//! NSL template linter
//!
//! Runs the per-file pipeline and fans it out over many files.
//!
//! ## Pipeline
//!
//! For one file, in order:
//! 1. Structural checks on the raw text (non-Latin characters, comments, delimiter balance, block tags)
//! 2. If none of those produced an error: parse
//! 3. If parsing was clean and a declared-parameter source exists: scope analysis
//!
//! Syntax errors do not become lint diagnostics; they only stop the semantic pass. A file whose parameters are
//! unknown (`None`) is never checked for undefined variables.
//!
//! ## Modules
//!
//! - `params` - Declared-parameter sidecar loading
//! - `structural` - Pre-parse text checks

pub mod params;
mod structural;

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use thiserror::Error;
use tokio::task::JoinSet;

use crate::frontend::diagnostics::Diagnostic;
use crate::frontend::{parser, scope};

/// Errors raised while gathering lint inputs.
#[derive(Debug, Error)]
pub enum LintError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid parameters file {}: {message}", .path.display())]
    Params { path: PathBuf, message: String },
}

/// Options shared by every file in a lint run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LintOptions {
    /// Declared parameters for every file. When `None`, each template's sidecar is consulted instead.
    pub params: Option<Vec<String>>,
}

impl LintOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use the same declared parameters for every file, ignoring sidecars.
    pub fn with_params(mut self, params: Vec<String>) -> Self {
        self.params = Some(params);
        self
    }
}

/// Lint one template's text.
///
/// `params` is the declared-parameter source: `None` skips scope analysis entirely, `Some(&[])` flags every
/// identifier that is not a built-in global.
#[tracing::instrument(skip_all, fields(file = %path.display(), source_len = source.len()))]
pub fn lint_source(path: &Path, source: &str, params: Option<&[String]>) -> Vec<Diagnostic> {
    let mut diagnostics = structural::check(path, source);
    if diagnostics.iter().any(Diagnostic::is_error) {
        tracing::debug!("structural errors found, skipping parse");
        return diagnostics;
    }

    let output = parser::parse_source(source);
    if !output.errors.is_empty() {
        for error in &output.errors {
            tracing::debug!(%error, "syntax error");
        }
        return diagnostics;
    }

    let Some(params) = params else {
        tracing::debug!("no declared parameters, skipping scope analysis");
        return diagnostics;
    };

    let lines: Vec<&str> = source.lines().collect();
    diagnostics.extend(scope::analyze(path, &output.program, params).into_iter().map(|diag| {
        match lines.get(diag.line.saturating_sub(1)) {
            Some(line) => diag.with_snippet(*line),
            None => diag,
        }
    }));
    diagnostics
}

/// Read and lint one template file.
///
/// A read failure is reported as a single error diagnostic on line 1 instead of failing the run.
pub fn lint_file(path: &Path, params: Option<&[String]>) -> Vec<Diagnostic> {
    match fs::read_to_string(path) {
        Ok(source) => lint_source(path, &source, params),
        Err(e) => vec![Diagnostic::error(path, 1, format!("failed to read file: {e}"))],
    }
}

/// Lint one file, resolving its declared parameters from `options` or from its sidecar.
fn lint_with_options(path: &Path, options: &LintOptions) -> Vec<Diagnostic> {
    if let Some(params) = &options.params {
        return lint_file(path, Some(params.as_slice()));
    }

    let sidecar = params::sidecar_path(path);
    match params::load_params(&sidecar) {
        Ok(params) => lint_file(path, params.as_deref()),
        Err(e) => {
            tracing::warn!(file = %path.display(), error = %e, "ignoring broken parameters sidecar");
            let mut diagnostics = vec![Diagnostic::error(path, 1, e.to_string())];
            diagnostics.extend(lint_file(path, None));
            diagnostics
        }
    }
}

/// Lint many files concurrently on the blocking pool.
///
/// Each file runs the full pipeline independently. The merged result is sorted by `(file, line)`; diagnostics on
/// the same line keep their pipeline order.
#[tracing::instrument(skip_all, fields(files = paths.len()))]
pub async fn lint_paths(paths: Vec<PathBuf>, options: LintOptions) -> Vec<Diagnostic> {
    let options = Arc::new(options);
    let mut workers = JoinSet::new();

    for path in paths {
        let options = Arc::clone(&options);
        workers.spawn_blocking(move || lint_with_options(&path, &options));
    }

    let mut diagnostics = Vec::new();
    while let Some(joined) = workers.join_next().await {
        match joined {
            Ok(found) => diagnostics.extend(found),
            Err(e) => tracing::error!(error = %e, "lint worker failed"),
        }
    }

    diagnostics.sort_by(|a, b| a.file.cmp(&b.file).then(a.line.cmp(&b.line)));
    diagnostics
}

/// Collect `*.nsl` templates under `path`, sorted.
///
/// A file path is returned as-is when it has the `.nsl` extension. Hidden directories and `target` are skipped.
pub fn collect_templates(path: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    collect_into(path, &mut files);
    files.sort();
    files
}

fn collect_into(path: &Path, files: &mut Vec<PathBuf>) {
    if path.is_file() {
        if is_template(path) {
            files.push(path.to_path_buf());
        }
        return;
    }

    let Ok(entries) = fs::read_dir(path) else {
        return;
    };
    for entry in entries.flatten() {
        let entry_path = entry.path();
        if entry_path.is_dir() {
            let name = entry_path.file_name().and_then(|n| n.to_str()).unwrap_or("");
            if !name.starts_with('.') && name != "target" {
                collect_into(&entry_path, files);
            }
        } else if is_template(&entry_path) {
            files.push(entry_path);
        }
    }
}

fn is_template(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "nsl")
}
