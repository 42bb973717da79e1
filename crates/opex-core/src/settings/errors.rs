use crate::errors::{OpexError, quoted_list};

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("Engine list was empty")]
    EngineListEmpty,

    #[error("Engine[{index}] missing '{key}'")]
    EngineFieldMissing { index: usize, key: String },

    #[error("Engine[{index}] missing value for '{key}'")]
    EngineFieldEmpty { index: usize, key: String },

    #[error("'nickname' not unique {}", quoted_list(.names))]
    DuplicateNickname { names: Vec<String> },

    #[error("Failed to parse settings file '{path}': {message}")]
    ParseFailed { path: String, message: String },

    #[error("Invalid settings: {message}")]
    InvalidSettings { message: String },

    #[error("Failed to access settings file '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl OpexError for SettingsError {
    fn error_code(&self) -> &'static str {
        match self {
            SettingsError::EngineListEmpty => "SETTINGS_ENGINE_LIST_EMPTY",
            SettingsError::EngineFieldMissing { .. } => "SETTINGS_ENGINE_FIELD_MISSING",
            SettingsError::EngineFieldEmpty { .. } => "SETTINGS_ENGINE_FIELD_EMPTY",
            SettingsError::DuplicateNickname { .. } => "SETTINGS_DUPLICATE_NICKNAME",
            SettingsError::ParseFailed { .. } => "SETTINGS_PARSE_FAILED",
            SettingsError::InvalidSettings { .. } => "SETTINGS_INVALID",
            SettingsError::IoError { .. } => "SETTINGS_IO_ERROR",
        }
    }

    fn is_user_error(&self) -> bool {
        match self {
            SettingsError::EngineListEmpty
            | SettingsError::EngineFieldMissing { .. }
            | SettingsError::EngineFieldEmpty { .. }
            | SettingsError::DuplicateNickname { .. }
            | SettingsError::ParseFailed { .. }
            | SettingsError::InvalidSettings { .. } => true,

            SettingsError::IoError { .. } => false,
        }
    }
}
