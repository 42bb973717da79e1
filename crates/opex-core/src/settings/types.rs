//! Typed view of a resolved settings tree.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::errors::SettingsError;
use super::validation::check_engine_settings;

/// One configured analysis engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineSettings {
    /// Unique name used for the engine's option file
    pub nickname: String,
    /// Path to the engine executable
    pub path: String,
}

/// Resolved application settings.
///
/// Built from the fully merged settings tree; keys the application does not
/// know about stay in the tree and are ignored here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Directory holding the position database
    pub data_directory: String,
    /// Directory holding one `<nickname>.uci` option file per engine
    pub engine_options_directory: String,
    /// Configured engines
    pub engines: Vec<EngineSettings>,
}

impl Settings {
    /// Check the engine list of a resolved tree and extract the typed settings.
    pub fn from_tree(tree: &Value) -> Result<Self, SettingsError> {
        let engines = tree
            .get("engines")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or_default();
        check_engine_settings(engines)?;

        serde_json::from_value(tree.clone()).map_err(|e| SettingsError::InvalidSettings {
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_tree() {
        let tree = json!({
            "data_directory": "data",
            "engine_options_directory": "engine_options",
            "engines": [{"nickname": "sf", "path": "/usr/bin/stockfish"}],
            "unrelated": {"kept": true}
        });

        let settings = Settings::from_tree(&tree).unwrap();
        assert_eq!(settings.data_directory, "data");
        assert_eq!(
            settings.engines,
            vec![EngineSettings {
                nickname: "sf".to_string(),
                path: "/usr/bin/stockfish".to_string(),
            }]
        );
    }

    #[test]
    fn test_from_tree_runs_engine_check() {
        let tree = json!({
            "data_directory": "data",
            "engine_options_directory": "engine_options",
            "engines": [{"nickname": "", "path": "/bin/engine"}]
        });

        let err = Settings::from_tree(&tree).unwrap_err();
        assert_eq!(err.to_string(), "Engine[0] missing value for 'nickname'");
    }

    #[test]
    fn test_from_tree_missing_engines_is_empty_list() {
        let tree = json!({"data_directory": "data"});
        let err = Settings::from_tree(&tree).unwrap_err();
        assert!(matches!(err, SettingsError::EngineListEmpty));
    }

    #[test]
    fn test_from_tree_wrong_type() {
        let tree = json!({
            "data_directory": 5,
            "engine_options_directory": "engine_options",
            "engines": [{"nickname": "sf", "path": "/bin/sf"}]
        });
        let err = Settings::from_tree(&tree).unwrap_err();
        assert!(matches!(err, SettingsError::InvalidSettings { .. }));
    }
}
