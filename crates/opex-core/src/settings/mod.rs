//! # Settings
//!
//! JSON settings file reconciled against an authoritative default tree.
//!
//! ```json
//! {
//!     "data_directory": "data",
//!     "engine_options_directory": "engine_options",
//!     "engines": [
//!         {
//!             "nickname": "stockfish",
//!             "path": "/usr/local/bin/stockfish"
//!         }
//!     ]
//! }
//! ```
//!
//! An empty string at any scalar position means "unset, use the default".
//! Arrays in the default tree hold one template element which is applied to
//! every element of the user's array, so engines can be added freely.

pub mod defaults;
pub mod errors;
pub mod loading;
pub mod merge;
pub mod types;
pub mod validation;

pub use defaults::{builtin_default_tree, load_default_tree};
pub use errors::SettingsError;
pub use loading::{load_settings, settings_to_string};
pub use merge::merge_settings;
pub use types::{EngineSettings, Settings};
pub use validation::check_engine_settings;
