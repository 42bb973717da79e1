//! Authoritative default settings tree.
//!
//! Every array in the default tree holds exactly one template element and
//! every object lists each key that must resolve to a value.

use std::path::Path;

use serde_json::{Value, json};

use super::errors::SettingsError;
use super::loading::parse_settings_text;
use crate::files;

/// Returns the built-in default settings tree.
pub fn builtin_default_tree() -> Value {
    json!({
        "data_directory": "data",
        "engine_options_directory": "engine_options",
        "engines": [
            {
                "nickname": "",
                "path": ""
            }
        ]
    })
}

/// Load the default settings tree from a file.
///
/// An empty file yields an empty object.
pub fn load_default_tree(path: &Path) -> Result<Value, SettingsError> {
    let content = files::read_text(path).map_err(|source| SettingsError::IoError {
        path: path.display().to_string(),
        source,
    })?;
    parse_settings_text(&content, path)
}
