//! Settings file loading and reconciliation.
//!
//! The settings file is merged twice against the default tree:
//! 1. **Shape only** (`fill_defaults = false`) - the canonical form of the user's
//!    file. When it differs from what is on disk the file is rewritten, so newly
//!    introduced keys appear (blank) for the user to edit.
//! 2. **Resolved** (`fill_defaults = true`) - the tree handed back to callers,
//!    where every unset value falls back to its default.

use std::path::Path;

use serde::Serialize;
use serde_json::Value;
use serde_json::ser::PrettyFormatter;
use tracing::{debug, info};

use super::errors::SettingsError;
use super::merge::merge_settings;
use crate::files;

/// Parse settings file content. Empty (or whitespace-only) content is an empty object.
pub(crate) fn parse_settings_text(content: &str, path: &Path) -> Result<Value, SettingsError> {
    if content.trim().is_empty() {
        return Ok(Value::Object(Default::default()));
    }
    serde_json::from_str(content).map_err(|e| SettingsError::ParseFailed {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

/// Serialize a settings tree the way it is stored on disk: keys sorted, four-space indent.
pub fn settings_to_string(tree: &Value) -> Result<String, SettingsError> {
    let mut buffer = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    tree.serialize(&mut serializer)
        .map_err(|e| SettingsError::InvalidSettings {
            message: format!("Failed to serialize settings: {}", e),
        })?;
    // serde_json only ever emits valid UTF-8.
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

/// Load the settings file at `path`, reconciling it against `default_tree`.
///
/// The file (and its parent directories) is created if missing. If the
/// file's canonical shape differs from its content, the canonical shape is
/// written back. Returns the fully resolved settings tree.
///
/// # Errors
///
/// Returns an error if the file cannot be created, read or written, or if it
/// does not contain valid JSON.
pub fn load_settings(path: &Path, default_tree: &Value) -> Result<Value, SettingsError> {
    let io_error = |source| SettingsError::IoError {
        path: path.display().to_string(),
        source,
    };

    files::ensure_file_exists(path).map_err(io_error)?;
    let content = files::read_text(path).map_err(io_error)?;
    let on_disk = parse_settings_text(&content, path)?;

    let shaped = merge_settings(default_tree, Some(on_disk.clone()), false);
    if shaped != on_disk {
        let mut serialized = settings_to_string(&shaped)?;
        serialized.push('\n');
        files::write_text(path, &serialized).map_err(io_error)?;
        info!(
            event = "core.settings.rewritten",
            path = %path.display()
        );
    } else {
        debug!(
            event = "core.settings.unchanged",
            path = %path.display()
        );
    }

    let resolved = merge_settings(default_tree, Some(shaped), true);
    info!(event = "core.settings.loaded", path = %path.display());
    Ok(resolved)
}
