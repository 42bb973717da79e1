use crate::engine::EngineError;
use crate::errors::OpexError;
use crate::options::{OptionError, OptionFileError};

#[derive(Debug, thiserror::Error)]
pub enum EngineOptionsError {
    #[error("Engine '{nickname}': {source}")]
    Engine {
        nickname: String,
        #[source]
        source: EngineError,
    },

    #[error("Engine '{nickname}' reported invalid options: {source}")]
    Catalog {
        nickname: String,
        #[source]
        source: OptionError,
    },

    #[error("{path}: {source}")]
    Syntax {
        path: String,
        #[source]
        source: OptionFileError,
    },

    #[error("{path}: {source}")]
    Invalid {
        path: String,
        #[source]
        source: OptionError,
    },

    #[error("Failed to access engine options file '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl OpexError for EngineOptionsError {
    fn error_code(&self) -> &'static str {
        match self {
            EngineOptionsError::Engine { source, .. } => source.error_code(),
            EngineOptionsError::Catalog { source, .. } => source.error_code(),
            EngineOptionsError::Syntax { source, .. } => source.error_code(),
            EngineOptionsError::Invalid { source, .. } => source.error_code(),
            EngineOptionsError::IoError { .. } => "ENGINE_OPTIONS_IO_ERROR",
        }
    }

    fn is_user_error(&self) -> bool {
        match self {
            EngineOptionsError::Engine { source, .. } => source.is_user_error(),
            EngineOptionsError::Catalog { .. } => false,
            EngineOptionsError::Syntax { .. } | EngineOptionsError::Invalid { .. } => true,
            EngineOptionsError::IoError { .. } => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_syntax_error_names_file() {
        let error = EngineOptionsError::Syntax {
            path: "engine_options/sf.uci".to_string(),
            source: OptionFileError::MissingEquals {
                line: "Hash".to_string(),
            },
        };
        assert_eq!(
            error.to_string(),
            "engine_options/sf.uci: Missing '=' on line 'Hash'"
        );
        assert_eq!(error.error_code(), "OPTION_FILE_MISSING_EQUALS");
        assert!(error.is_user_error());
    }

    #[test]
    fn test_engine_error_delegates_code() {
        let error = EngineOptionsError::Engine {
            nickname: "sf".to_string(),
            source: EngineError::SpawnFailed {
                path: "/missing".to_string(),
                source: std::io::Error::from(std::io::ErrorKind::NotFound),
            },
        };
        assert_eq!(error.error_code(), "ENGINE_SPAWN_FAILED");
        assert!(error.is_user_error());
    }
}
