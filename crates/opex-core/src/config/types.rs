use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::debug;

use crate::settings::{self, SettingsError, builtin_default_tree, load_default_tree};

/// Settings file used when nothing else is configured.
pub const DEFAULT_SETTINGS_FILE_NAME: &str = "opex-settings.json";
/// Environment variable overriding the settings file path.
pub const SETTINGS_FILE_ENV: &str = "OPEX_SETTINGS_FILE";
/// Environment variable pointing at a JSON file that replaces the built-in default tree.
pub const DEFAULT_SETTINGS_FILE_ENV: &str = "OPEX_DEFAULT_SETTINGS_FILE";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpexConfig {
    pub settings_file: PathBuf,
    /// When `None` the built-in default tree is used.
    pub default_settings_file: Option<PathBuf>,
}

impl Default for OpexConfig {
    fn default() -> Self {
        Self {
            settings_file: PathBuf::from(DEFAULT_SETTINGS_FILE_NAME),
            default_settings_file: None,
        }
    }
}

impl OpexConfig {
    /// Build the configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable lookup.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str| lookup(key).filter(|value| !value.is_empty());
        let config = Self {
            settings_file: var(SETTINGS_FILE_ENV)
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_SETTINGS_FILE_NAME)),
            default_settings_file: var(DEFAULT_SETTINGS_FILE_ENV).map(PathBuf::from),
        };
        debug!(
            event = "core.config.resolved",
            settings_file = %config.settings_file.display(),
            default_settings_file = ?config.default_settings_file
        );
        config
    }

    pub fn with_settings_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.settings_file = path.into();
        self
    }

    pub fn with_default_settings_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.default_settings_file = Some(path.into());
        self
    }

    /// The default tree the settings file is reconciled against.
    pub fn default_tree(&self) -> Result<Value, SettingsError> {
        match &self.default_settings_file {
            Some(path) => load_default_tree(path),
            None => Ok(builtin_default_tree()),
        }
    }

    /// Reconcile the configured settings file and return the resolved tree.
    pub fn load_settings(&self) -> Result<Value, SettingsError> {
        settings::load_settings(self.settings_path(), &self.default_tree()?)
    }

    pub fn settings_path(&self) -> &Path {
        &self.settings_file
    }
}
