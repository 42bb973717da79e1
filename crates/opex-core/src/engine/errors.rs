use crate::errors::OpexError;

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("Failed to start engine '{path}': {source}")]
    SpawnFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Engine '{path}' I/O failed: {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Engine '{path}' closed its output before sending '{expected}'")]
    HandshakeIncomplete { path: String, expected: String },

    #[error("Invalid option line '{line}': {message}")]
    InvalidOptionLine { line: String, message: String },
}

impl OpexError for EngineError {
    fn error_code(&self) -> &'static str {
        match self {
            EngineError::SpawnFailed { .. } => "ENGINE_SPAWN_FAILED",
            EngineError::IoError { .. } => "ENGINE_IO_ERROR",
            EngineError::HandshakeIncomplete { .. } => "ENGINE_HANDSHAKE_INCOMPLETE",
            EngineError::InvalidOptionLine { .. } => "ENGINE_INVALID_OPTION_LINE",
        }
    }

    fn is_user_error(&self) -> bool {
        // A wrong engine path in the settings file is the only case the user can fix.
        matches!(self, EngineError::SpawnFailed { .. })
    }
}
