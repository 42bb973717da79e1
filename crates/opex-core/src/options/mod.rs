//! # Engine options
//!
//! Reconciles the options an engine reports against a human-editable override
//! file. The file lists every configurable option with a comment describing its
//! type; only values that differ from the engine's defaults are handed on.
//!
//! Managed options (reserved by the engine protocol) and buttons never appear
//! in the file and are rejected if added by hand.

pub mod codec;
pub mod diff;
pub mod errors;
pub mod types;
pub mod validation;

pub use codec::{parse_options, render_options};
pub use diff::{
    EMPTY_DEFAULT_LITERAL, expand_with_defaults, is_default_value, normalize_to_catalog,
    reduce_to_diff,
};
pub use errors::{OptionError, OptionFileError, OptionValueError};
pub use types::{
    MANAGED_OPTION_NAMES, OptionCatalog, OptionDescriptor, OptionKind, OverrideMapping,
    ScalarValue, is_managed_name,
};
pub use validation::{check_value, validate_options};
