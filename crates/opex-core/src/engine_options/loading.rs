use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use tracing::{debug, info};

use super::errors::EngineOptionsError;
use crate::engine::EngineLauncher;
use crate::files;
use crate::options::{
    OptionCatalog, OverrideMapping, expand_with_defaults, normalize_to_catalog, parse_options,
    reduce_to_diff, render_options, validate_options,
};
use crate::settings::Settings;

/// File extension of per-engine option files.
pub const OPTION_FILE_EXTENSION: &str = "uci";

/// Path of the option file for `nickname` inside `directory`.
pub fn option_file_path(directory: &Path, nickname: &str) -> PathBuf {
    directory.join(format!("{}.{}", nickname, OPTION_FILE_EXTENSION))
}

/// Reconcile the option file at `path` against `catalog` and return its overrides.
///
/// The file is created if missing. When its entries differ from the full set
/// of configurable options it is rewritten with every option listed, so the
/// user can see what is available. Only values that differ from the engine's
/// defaults are returned.
///
/// # Errors
///
/// Returns an error if the file cannot be read or written, does not parse, or
/// sets options the engine rejects.
pub fn load_engine_options(
    path: &Path,
    catalog: &OptionCatalog,
) -> Result<OverrideMapping, EngineOptionsError> {
    let path_text = path.display().to_string();
    let io_error = |source| EngineOptionsError::IoError {
        path: path_text.clone(),
        source,
    };

    files::ensure_file_exists(path).map_err(io_error)?;
    let content = files::read_text(path).map_err(io_error)?;

    let parsed = parse_options(&content).map_err(|source| EngineOptionsError::Syntax {
        path: path_text.clone(),
        source,
    })?;
    let parsed = normalize_to_catalog(catalog, &parsed);
    validate_options(catalog, &parsed).map_err(|source| EngineOptionsError::Invalid {
        path: path_text.clone(),
        source,
    })?;

    let full = expand_with_defaults(catalog, &parsed);
    if parsed != full {
        files::write_text(path, &render_options(catalog, &full)).map_err(io_error)?;
        info!(
            event = "core.engine_options.rewritten",
            path = %path_text,
            option_count = full.len()
        );
    }

    let diff = reduce_to_diff(catalog, &full);
    debug!(
        event = "core.engine_options.loaded",
        path = %path_text,
        override_count = diff.len()
    );
    Ok(diff)
}

/// Reconcile the option file of every configured engine, one engine at a time.
///
/// Each engine is started through `launcher` to read its catalog, and its file
/// is `<engine_options_directory>/<nickname>.uci`. The first failure aborts the run.
pub fn load_all_engine_options(
    settings: &Settings,
    launcher: &impl EngineLauncher,
) -> Result<IndexMap<String, OverrideMapping>, EngineOptionsError> {
    let directory = Path::new(&settings.engine_options_directory);
    let mut engine_options = IndexMap::new();

    for engine in &settings.engines {
        info!(
            event = "core.engine_options.engine_started",
            nickname = %engine.nickname,
            path = %engine.path
        );

        let descriptors =
            launcher
                .list_options(engine)
                .map_err(|source| EngineOptionsError::Engine {
                    nickname: engine.nickname.clone(),
                    source,
                })?;
        let catalog =
            OptionCatalog::new(descriptors).map_err(|source| EngineOptionsError::Catalog {
                nickname: engine.nickname.clone(),
                source,
            })?;

        let path = option_file_path(directory, &engine.nickname);
        let overrides = load_engine_options(&path, &catalog)?;

        info!(
            event = "core.engine_options.engine_completed",
            nickname = %engine.nickname,
            override_count = overrides.len()
        );
        engine_options.insert(engine.nickname.clone(), overrides);
    }

    Ok(engine_options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::EngineError;
    use crate::options::test_support::{test_catalog, test_defaults};
    use crate::options::{OptionDescriptor, OptionError, ScalarValue};
    use crate::settings::EngineSettings;
    use std::fs;
    use tempfile::TempDir;

    const DEFAULT_FILE: &str = concat!(
        "string_none=                         # type=string\n",
        "string_blank=                        # type=string\n",
        "string_empty=<empty>                 # type=string\n",
        "string_something=something           # type=string\n",
        "spin=0                               # type=spin, min=-100, max=100\n",
        "combo=one                            # type=combo, var=['one', 'two', 'three']\n",
        "check_true=true                      # type=check\n",
        "check_false=false                    # type=check\n",
    );

    struct CatalogLauncher;

    impl EngineLauncher for CatalogLauncher {
        fn list_options(
            &self,
            engine: &EngineSettings,
        ) -> Result<Vec<OptionDescriptor>, EngineError> {
            match engine.path.as_str() {
                "duplicate" => Ok(vec![
                    OptionDescriptor::spin("Hash", 16, 1, 1024),
                    OptionDescriptor::spin("Hash", 16, 1, 1024),
                ]),
                "missing" => Err(EngineError::SpawnFailed {
                    path: engine.path.clone(),
                    source: std::io::Error::from(std::io::ErrorKind::NotFound),
                }),
                _ => Ok(test_catalog().iter().cloned().collect()),
            }
        }
    }

    fn settings(temp_dir: &TempDir, engines: &[(&str, &str)]) -> Settings {
        Settings {
            data_directory: "data".to_string(),
            engine_options_directory: temp_dir
                .path()
                .join("engine_options")
                .display()
                .to_string(),
            engines: engines
                .iter()
                .map(|(nickname, path)| EngineSettings {
                    nickname: nickname.to_string(),
                    path: path.to_string(),
                })
                .collect(),
        }
    }

    #[test]
    fn test_missing_file_is_written_with_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("engine_options").join("test.uci");

        let diff = load_engine_options(&path, &test_catalog()).unwrap();

        assert!(diff.is_empty());
        assert_eq!(fs::read_to_string(&path).unwrap(), DEFAULT_FILE);
    }

    #[test]
    fn test_default_file_reads_back_as_empty_diff() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.uci");
        fs::write(
            &path,
            render_options(&test_catalog(), &reduce_to_diff(&test_catalog(), &test_defaults())),
        )
        .unwrap();

        let diff = load_engine_options(&path, &test_catalog()).unwrap();
        assert!(diff.is_empty());
    }

    #[test]
    fn test_complete_file_is_left_untouched() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.uci");
        let content = "# my notes\nstring_none=\nstring_blank=\nstring_empty=<empty>\n\
                       string_something=something\nspin=50\ncombo=one\ncheck_true=true\n\
                       check_false=false\n";
        fs::write(&path, content).unwrap();

        let diff = load_engine_options(&path, &test_catalog()).unwrap();

        assert_eq!(diff.len(), 1);
        assert_eq!(diff["spin"], ScalarValue::Int(50));
        assert_eq!(fs::read_to_string(&path).unwrap(), content);
    }

    #[test]
    fn test_partial_file_is_completed_and_keeps_edits() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.uci");
        fs::write(&path, "combo=three\ncheck_false=True\n").unwrap();

        let diff = load_engine_options(&path, &test_catalog()).unwrap();

        let names: Vec<&str> = diff.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["combo", "check_false"]);

        let rewritten = fs::read_to_string(&path).unwrap();
        assert_eq!(rewritten.lines().count(), 8);
        assert!(rewritten.contains("combo=three "));
        assert!(rewritten.contains("check_false=true "));

        // Second run converges on the same file.
        assert_eq!(load_engine_options(&path, &test_catalog()).unwrap(), diff);
        assert_eq!(fs::read_to_string(&path).unwrap(), rewritten);
    }

    #[test]
    fn test_shorter_rewrite_leaves_no_stale_bytes() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.uci");
        let padding = "# ".repeat(2000);
        fs::write(&path, format!("{}\nspin=1\n", padding)).unwrap();

        load_engine_options(&path, &test_catalog()).unwrap();

        let rewritten = fs::read_to_string(&path).unwrap();
        assert!(rewritten.starts_with("string_none="));
        assert!(!rewritten.contains("# # #"));
    }

    #[test]
    fn test_numeric_text_at_string_default_is_not_an_override() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.uci");
        let catalog = OptionCatalog::new(vec![
            OptionDescriptor::string("Threads", Some("0")),
            OptionDescriptor::combo("Level", "1", ["1", "2"]),
        ])
        .unwrap();
        fs::write(&path, "Threads=0\nLevel=2\n").unwrap();

        let diff = load_engine_options(&path, &catalog).unwrap();

        assert_eq!(diff.len(), 1);
        assert_eq!(diff["Level"], ScalarValue::from("2"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "Threads=0\nLevel=2\n");
    }

    #[test]
    fn test_syntax_error_leaves_file_alone() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.uci");
        fs::write(&path, "=test  # type=string\n").unwrap();

        let err = load_engine_options(&path, &test_catalog()).unwrap_err();

        assert!(matches!(err, EngineOptionsError::Syntax { .. }));
        assert!(err.to_string().contains("Missing option name on line '=test  # type=string'"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "=test  # type=string\n");
    }

    #[test]
    fn test_invalid_value_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.uci");
        fs::write(&path, "spin=-101\n").unwrap();

        let err = load_engine_options(&path, &test_catalog()).unwrap_err();
        assert!(matches!(
            err,
            EngineOptionsError::Invalid {
                source: OptionError::InvalidValues { .. },
                ..
            }
        ));
        assert!(
            err.to_string()
                .contains("Value '-101' for 'spin' not in range [-100, 100]")
        );
    }

    #[test]
    fn test_load_all_reconciles_each_engine() {
        let temp_dir = TempDir::new().unwrap();
        let settings = settings(&temp_dir, &[("first", "engine"), ("second", "engine")]);
        let directory = Path::new(&settings.engine_options_directory);
        fs::create_dir_all(directory).unwrap();
        fs::write(directory.join("second.uci"), "spin=7\n").unwrap();

        let engine_options = load_all_engine_options(&settings, &CatalogLauncher).unwrap();

        let nicknames: Vec<&str> = engine_options.keys().map(String::as_str).collect();
        assert_eq!(nicknames, vec!["first", "second"]);
        assert!(engine_options["first"].is_empty());
        assert_eq!(engine_options["second"]["spin"], ScalarValue::Int(7));
        assert!(directory.join("first.uci").is_file());
    }

    #[test]
    fn test_load_all_stops_at_failing_engine() {
        let temp_dir = TempDir::new().unwrap();
        let settings = settings(&temp_dir, &[("broken", "missing"), ("ok", "engine")]);

        let err = load_all_engine_options(&settings, &CatalogLauncher).unwrap_err();

        assert!(matches!(err, EngineOptionsError::Engine { ref nickname, .. } if nickname == "broken"));
        assert!(
            !option_file_path(Path::new(&settings.engine_options_directory), "ok").exists()
        );
    }

    #[test]
    fn test_load_all_rejects_duplicate_descriptors() {
        let temp_dir = TempDir::new().unwrap();
        let settings = settings(&temp_dir, &[("dup", "duplicate")]);

        let err = load_all_engine_options(&settings, &CatalogLauncher).unwrap_err();
        assert!(matches!(err, EngineOptionsError::Catalog { .. }));
    }
}
