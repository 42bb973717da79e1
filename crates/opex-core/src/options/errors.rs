use crate::errors::{OpexError, quoted_list};

use super::types::ScalarValue;

/// Syntax errors in an option override file.
///
/// `MissingEquals` and `MissingOptionName` stop parsing at the offending line.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OptionFileError {
    #[error("Missing '=' on line '{line}'")]
    MissingEquals { line: String },

    #[error("Missing option name on line '{line}'")]
    MissingOptionName { line: String },

    #[error("Duplicate engine options {}", quoted_list(.names))]
    DuplicateOptionName { names: Vec<String> },
}

impl OpexError for OptionFileError {
    fn error_code(&self) -> &'static str {
        match self {
            OptionFileError::MissingEquals { .. } => "OPTION_FILE_MISSING_EQUALS",
            OptionFileError::MissingOptionName { .. } => "OPTION_FILE_MISSING_NAME",
            OptionFileError::DuplicateOptionName { .. } => "OPTION_FILE_DUPLICATE_NAME",
        }
    }

    fn is_user_error(&self) -> bool {
        true
    }
}

/// A single rejected option value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OptionValueError {
    #[error("Value '{value}' for '{name}' not {expected}")]
    TypeMismatch {
        name: String,
        value: ScalarValue,
        expected: &'static str,
    },

    #[error("Value '{value}' for '{name}' not in range [{min}, {max}]")]
    OutOfRange {
        name: String,
        value: i64,
        min: i64,
        max: i64,
    },

    #[error("Value '{value}' for '{name}' not in {}", quoted_list(.allowed))]
    NotInEnum {
        name: String,
        value: ScalarValue,
        allowed: Vec<String>,
    },
}

impl OptionValueError {
    pub fn name(&self) -> &str {
        match self {
            OptionValueError::TypeMismatch { name, .. }
            | OptionValueError::OutOfRange { name, .. }
            | OptionValueError::NotInEnum { name, .. } => name,
        }
    }
}

/// Semantic errors found when checking overrides against an engine's catalog.
///
/// Each variant carries every offending entry of its class.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OptionError {
    #[error("Cannot set managed options {}", quoted_list(.names))]
    ManagedOptionSet { names: Vec<String> },

    #[error("Cannot set button options {}", quoted_list(.names))]
    ButtonOptionSet { names: Vec<String> },

    #[error("{}", join_violations(.violations))]
    InvalidValues { violations: Vec<OptionValueError> },

    #[error("Unknown options {}", quoted_list(.names))]
    UnknownOption { names: Vec<String> },

    #[error("Engine reported option '{name}' more than once")]
    DuplicateDescriptor { name: String },
}

fn join_violations(violations: &[OptionValueError]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl OpexError for OptionError {
    fn error_code(&self) -> &'static str {
        match self {
            OptionError::ManagedOptionSet { .. } => "OPTION_MANAGED_SET",
            OptionError::ButtonOptionSet { .. } => "OPTION_BUTTON_SET",
            OptionError::InvalidValues { .. } => "OPTION_INVALID_VALUES",
            OptionError::UnknownOption { .. } => "OPTION_UNKNOWN",
            OptionError::DuplicateDescriptor { .. } => "OPTION_DUPLICATE_DESCRIPTOR",
        }
    }

    fn is_user_error(&self) -> bool {
        match self {
            OptionError::ManagedOptionSet { .. }
            | OptionError::ButtonOptionSet { .. }
            | OptionError::InvalidValues { .. }
            | OptionError::UnknownOption { .. } => true,

            OptionError::DuplicateDescriptor { .. } => false,
        }
    }
}
