//! # Configuration
//!
//! Where the settings file and its default tree live.
//!
//! Resolved in order, later sources winning:
//! 1. **Built-in** - `opex-settings.json` in the working directory, built-in default tree
//! 2. **Environment** - `OPEX_SETTINGS_FILE`, `OPEX_DEFAULT_SETTINGS_FILE`
//! 3. **CLI arguments** - `--settings`, `--defaults`

pub mod types;

pub use types::{
    DEFAULT_SETTINGS_FILE_ENV, DEFAULT_SETTINGS_FILE_NAME, OpexConfig, SETTINGS_FILE_ENV,
};
