//! # Engine option files
//!
//! Per-engine override files, reconciled against the catalog each engine
//! reports when it starts.

pub mod errors;
pub mod loading;

pub use errors::EngineOptionsError;
pub use loading::{
    OPTION_FILE_EXTENSION, load_all_engine_options, load_engine_options, option_file_path,
};
