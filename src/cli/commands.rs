//! Implementations behind each `nsl` subcommand and debug flag.

use std::fs;
use std::path::Path;

use crate::format::{format_diff, format_source};
use crate::frontend::diagnostics::{self, Diagnostic, SyntaxError};
use crate::frontend::{lexer, parser};
use crate::lint::{self, LintOptions, params};

use super::{CliError, CliResult};

/// Maximum template file size (10 MB)
const MAX_SOURCE_SIZE: u64 = 10 * 1024 * 1024;

/// Read a template file, refusing anything over `MAX_SOURCE_SIZE`.
pub fn read_source(file_path: &Path) -> CliResult<String> {
    let metadata = fs::metadata(file_path)
        .map_err(|e| CliError::failure(format!("Cannot access file '{}': {}", file_path.display(), e)))?;

    let size = metadata.len();
    if size > MAX_SOURCE_SIZE {
        return Err(CliError::failure(format!(
            "Template '{}' is too large ({size} bytes, max {MAX_SOURCE_SIZE} bytes)",
            file_path.display()
        )));
    }

    fs::read_to_string(file_path)
        .map_err(|e| CliError::failure(format!("Error reading file '{}': {}", file_path.display(), e)))
}

/// `--lex`: one token per line in `Debug` form.
pub fn lex_file(file_path: &Path) -> CliResult {
    let source = read_source(file_path)?;
    for token in lexer::lex(&source) {
        println!("{token:?}");
    }
    Ok(())
}

/// Parse and display AST, then any syntax errors.
pub fn parse_file(file_path: &Path) -> CliResult {
    let source = read_source(file_path)?;
    let output = parser::parse_source(&source);
    println!("{:#?}", output.program);

    for err in &output.errors {
        eprintln!("{}", format_syntax_error(file_path, &source, err));
    }
    match output.errors.len() {
        0 => Ok(()),
        count => Err(CliError::Findings { count }),
    }
}

/// Render a syntax error with its source line and a caret under the column.
fn format_syntax_error(file_path: &Path, source: &str, error: &SyntaxError) -> String {
    let line_text = source.lines().nth(error.line.saturating_sub(1)).unwrap_or("");
    let gutter = error.line.to_string().len();
    format!(
        "syntax error: {message}\n  --> {file}:{line}:{col}\n{pad} |\n{line:>gutter$} | {line_text}\n{pad} | {caret:>col$}",
        message = error.message,
        file = file_path.display(),
        line = error.line,
        col = error.column,
        pad = " ".repeat(gutter),
        caret = "^",
    )
}

/// Resolve `--param` / `--params-file` into lint options.
///
/// With neither flag, every template falls back to its own sidecar file.
pub fn lint_options(names: Vec<String>, params_file: Option<&Path>) -> CliResult<LintOptions> {
    let mut declared = names;
    let mut explicit = !declared.is_empty();

    if let Some(path) = params_file {
        match params::load_params(path) {
            Ok(Some(loaded)) => {
                declared.extend(loaded);
                explicit = true;
            }
            Ok(None) => {
                tracing::warn!(path = %path.display(), "parameters file not found, falling back to sidecars");
            }
            Err(e) => {
                tracing::warn!(error = %e, "broken parameters file");
                return Err(e.into());
            }
        }
    }

    let options = LintOptions::new();
    Ok(if explicit { options.with_params(declared) } else { options })
}

/// Lint a template file or every template under a directory.
pub fn lint_path(path: &Path, options: LintOptions) -> CliResult {
    let files = lint::collect_templates(path);
    if files.is_empty() {
        return Err(CliError::failure(format!("No .nsl files found in {}", path.display())));
    }

    let runtime = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::failure(format!("Cannot start worker runtime: {e}")))?;
    let file_count = files.len();
    let found = runtime.block_on(lint::lint_paths(files, options));

    report_diagnostics(&found);
    let (errors, warnings) = diagnostics::tally(&found);
    println!("{file_count} file(s) checked: {errors} error(s), {warnings} warning(s)");

    match errors {
        0 => Ok(()),
        count => Err(CliError::Findings { count }),
    }
}

fn report_diagnostics(found: &[Diagnostic]) {
    for diagnostic in found {
        eprintln!("{:?}", miette::Report::new(diagnostic.clone()));
    }
}

/// What `fmt` did with one file.
#[derive(Debug, PartialEq, Eq)]
enum FmtOutcome {
    Unchanged,
    /// Differs from canonical form (check/diff mode: reported, not written).
    Stale,
    Rewritten,
}

/// Format template files in place, or only report / diff them.
pub fn format_files(path: &Path, check_mode: bool, diff_mode: bool) -> CliResult {
    let files = lint::collect_templates(path);
    if files.is_empty() {
        return Err(CliError::failure(format!("No .nsl files found in {}", path.display())));
    }

    let write = !(check_mode || diff_mode);
    let mut stale = 0;
    let mut rewritten = 0;
    let mut failed = 0;

    for file_path in &files {
        match format_one(file_path, write, diff_mode) {
            Ok(FmtOutcome::Unchanged) => {}
            Ok(FmtOutcome::Stale) => stale += 1,
            Ok(FmtOutcome::Rewritten) => rewritten += 1,
            Err(e) => {
                eprintln!("{e}");
                failed += 1;
            }
        }
    }

    if write {
        println!("{rewritten} of {} file(s) reformatted, {failed} error(s)", files.len());
    } else if stale == 0 && failed == 0 {
        println!("{} file(s) already formatted", files.len());
    } else {
        println!("{stale} of {} file(s) need formatting", files.len());
    }

    match stale + failed {
        0 => Ok(()),
        count => Err(CliError::Findings { count }),
    }
}

fn format_one(file_path: &Path, write: bool, show_diff: bool) -> CliResult<FmtOutcome> {
    let source = read_source(file_path)?;
    let formatted = format_source(&source)
        .map_err(|e| CliError::failure(format!("{}: {e}", file_path.display())))?;
    if source == formatted {
        return Ok(FmtOutcome::Unchanged);
    }

    if !write {
        if show_diff {
            println!("--- {}", file_path.display());
            if let Ok(Some(diff)) = format_diff(&source) {
                print!("{diff}");
            }
        } else {
            println!("Would reformat: {}", file_path.display());
        }
        return Ok(FmtOutcome::Stale);
    }

    fs::write(file_path, &formatted)
        .map_err(|e| CliError::failure(format!("Error writing {}: {e}", file_path.display())))?;
    println!("Formatted: {}", file_path.display());
    Ok(FmtOutcome::Rewritten)
}
