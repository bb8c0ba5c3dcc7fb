//! `nsl` command-line driver
//!
//! ```text
//! nsl lint [PATH] [--param NAME]... [--params-file FILE]
//! nsl fmt  [PATH] [--check] [--diff]
//! nsl --lex FILE | --parse FILE
//! ```
//!
//! Commands return [`CliResult`]; only [`run`] prints the final error and exits the process.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use thiserror::Error;

use crate::lint::LintError;

/// Why a driver run did not finish cleanly.
#[derive(Debug, Error)]
pub enum CliError {
    /// Bad invocation or unusable input, with a user-facing message.
    #[error("{0}")]
    Failure(String),
    /// An explicit parameters file exists but cannot be used.
    #[error(transparent)]
    Params(#[from] LintError),
    /// The run finished and already printed what it found.
    #[error("{count} problem(s) found")]
    Findings { count: usize },
}

impl CliError {
    pub fn failure(message: impl Into<String>) -> Self {
        CliError::Failure(message.into())
    }

    /// Process exit status for this outcome.
    pub fn exit_code(&self) -> i32 {
        1
    }

    /// Findings were reported as they were produced; repeating them adds nothing.
    fn is_reported(&self) -> bool {
        matches!(self, CliError::Findings { .. })
    }
}

pub type CliResult<T = ()> = Result<T, CliError>;

/// Lint and format NSL templates
#[derive(Parser, Debug)]
#[command(name = "nsl", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Print the token stream of FILE and exit
    #[arg(long = "lex", value_name = "FILE", conflicts_with = "parse_file")]
    pub lex_file: Option<PathBuf>,

    /// Print the syntax tree of FILE and exit
    #[arg(long = "parse", value_name = "FILE")]
    pub parse_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check templates for structural problems and undefined variables
    Lint {
        /// Template file or directory
        #[arg(value_name = "PATH", default_value = ".")]
        path: PathBuf,
        /// Declared parameter name (repeatable); disables sidecar lookup
        #[arg(long = "param", value_name = "NAME")]
        params: Vec<String>,
        /// JSON file declaring parameters for every template; disables sidecar lookup
        #[arg(long = "params-file", value_name = "FILE")]
        params_file: Option<PathBuf>,
    },

    /// Rewrite templates in canonical form
    Fmt {
        /// Template file or directory
        #[arg(value_name = "PATH", default_value = ".")]
        path: PathBuf,
        /// Report files that would change, without writing
        #[arg(long)]
        check: bool,
        /// Print a line diff of the changes, without writing
        #[arg(long)]
        diff: bool,
    },
}

/// Parse arguments, dispatch, and exit non-zero on any failure.
pub fn run() {
    let cli = Cli::parse();

    if let Err(e) = execute(cli) {
        if !e.is_reported() {
            eprintln!("{e}");
        }
        process::exit(e.exit_code());
    }
}

fn execute(cli: Cli) -> CliResult {
    if let Some(file) = cli.lex_file {
        return commands::lex_file(&file);
    }
    if let Some(file) = cli.parse_file {
        return commands::parse_file(&file);
    }

    match cli.command {
        Some(Command::Lint {
            path,
            params,
            params_file,
        }) => {
            let options = commands::lint_options(params, params_file.as_deref())?;
            commands::lint_path(&path, options)
        }
        Some(Command::Fmt { path, check, diff }) => commands::format_files(&path, check, diff),
        None => Err(CliError::failure("No command given; run `nsl --help` for usage")),
    }
}
