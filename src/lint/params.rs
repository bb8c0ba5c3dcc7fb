//! Declared-parameter sidecar files.
//!
//! A sidecar is JSON in one of two shapes:
//!
//! ```json
//! ["user", "items"]
//! ```
//!
//! ```json
//! { "parameters": ["user", { "name": "items", "description": "..." }] }
//! ```
//!
//! Templates look for `<stem>.params.json` next to themselves unless parameters are given explicitly.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde_json::Value;

use super::LintError;

/// Sidecar suffix appended to a template's file stem.
pub const SIDECAR_SUFFIX: &str = "params.json";

/// Path of the sidecar that belongs to `template`: `dir/intro.nsl` → `dir/intro.params.json`.
pub fn sidecar_path(template: &Path) -> PathBuf {
    template.with_extension(SIDECAR_SUFFIX)
}

/// Load declared parameter names from a JSON file.
///
/// ## Returns
/// - `Ok(None)` if the file does not exist (no declared-parameter source)
/// - `Ok(Some(names))` for a well-formed file, names in file order
///
/// ## Errors
/// - [`LintError::Io`] for any other read failure
/// - [`LintError::Params`] for invalid JSON or an unexpected shape
pub fn load_params(path: &Path) -> Result<Option<Vec<String>>, LintError> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(LintError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };
    parse_params(&text)
        .map(Some)
        .map_err(|message| LintError::Params {
            path: path.to_path_buf(),
            message,
        })
}

/// Parse sidecar JSON text into parameter names.
pub fn parse_params(text: &str) -> Result<Vec<String>, String> {
    let value: Value = serde_json::from_str(text).map_err(|e| e.to_string())?;
    let entries = match &value {
        Value::Array(entries) => entries,
        Value::Object(map) => match map.get("parameters") {
            Some(Value::Array(entries)) => entries,
            Some(_) => return Err("'parameters' must be an array".to_string()),
            None => return Err("expected a 'parameters' array".to_string()),
        },
        _ => return Err("expected an array of names or an object with a 'parameters' array".to_string()),
    };

    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| match entry {
            Value::String(name) => Ok(name.clone()),
            Value::Object(obj) => match obj.get("name") {
                Some(Value::String(name)) => Ok(name.clone()),
                _ => Err(format!("parameter #{index} has no string 'name'")),
            },
            _ => Err(format!("parameter #{index} must be a string or an object with a 'name'")),
        })
        .collect()
}
