//! Raw input collection from CLI fields and JSON files

use casewise_domain::RawInput;
use serde_json::Value;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InputError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path} is not valid JSON: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{path} must contain a JSON object of answers")]
    NotAnObject { path: PathBuf },

    #[error("Field '{field}' in {path} must be a string, number or boolean")]
    NestedValue { path: PathBuf, field: String },
}

/// clap value parser for `key=value`
pub fn parse_field(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{}'", s))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("empty field name in '{}'", s));
    }
    Ok((key.to_string(), value.to_string()))
}

/// Merge a JSON answer file (if any) with explicit fields; fields win.
pub fn collect_raw_input(
    fields: &[(String, String)],
    input_file: Option<&Path>,
) -> Result<RawInput, InputError> {
    let mut raw = match input_file {
        Some(path) => read_json_input(path)?,
        None => RawInput::new(),
    };
    for (key, value) in fields {
        raw.insert(key.clone(), value.clone());
    }
    Ok(raw)
}

/// Read a flat JSON object as raw answers.
///
/// Numbers become their decimal text and booleans become `Yes`/`No`, the
/// way a form would have submitted them. `null` means "not answered".
pub fn read_json_input(path: &Path) -> Result<RawInput, InputError> {
    let text = std::fs::read_to_string(path).map_err(|source| InputError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let value: Value = serde_json::from_str(&text).map_err(|source| InputError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    let Value::Object(map) = value else {
        return Err(InputError::NotAnObject {
            path: path.to_path_buf(),
        });
    };

    let mut raw = RawInput::new();
    for (key, value) in map {
        let text = match value {
            Value::Null => continue,
            Value::String(s) => s,
            Value::Number(n) => n.to_string(),
            Value::Bool(true) => "Yes".to_string(),
            Value::Bool(false) => "No".to_string(),
            Value::Array(_) | Value::Object(_) => {
                return Err(InputError::NestedValue {
                    path: path.to_path_buf(),
                    field: key,
                });
            }
        };
        raw.insert(key, text);
    }
    Ok(raw)
}
