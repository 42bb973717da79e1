//! opex-core: settings and engine option reconciliation for the opex chess explorer
//!
//! Keeps two kinds of user-editable file in step with what the program expects:
//! the JSON settings file, merged against an authoritative default tree, and one
//! option override file per engine, checked against the options the engine reports.
//!
//! # Main Entry Points
//!
//! - [`settings`] - Load and reconcile the settings file
//! - [`engine_options`] - Reconcile every engine's option file
//! - [`options`] - Option catalog, file codec, validation and diffing
//! - [`engine`] - UCI engine processes
//! - [`config`] - Where the settings file and default tree come from

pub mod config;
pub mod engine;
pub mod engine_options;
pub mod errors;
pub mod events;
pub mod files;
pub mod logging;
pub mod options;
pub mod settings;

// Re-export commonly used types at crate root for convenience
pub use config::OpexConfig;
pub use engine::{EngineError, EngineLauncher, UciEngine, UciLauncher};
pub use engine_options::{EngineOptionsError, load_all_engine_options, load_engine_options};
pub use errors::{OpexError, OpexResult};
pub use options::{
    OptionCatalog, OptionDescriptor, OptionError, OptionFileError, OptionKind, OverrideMapping,
    ScalarValue,
};
pub use settings::{EngineSettings, Settings, SettingsError, load_settings};

// Re-export logging initialization
pub use logging::init_logging;
