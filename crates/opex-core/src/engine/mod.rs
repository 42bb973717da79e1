//! # Engines
//!
//! Launching engine processes and reading the options they support.

pub mod errors;
pub mod traits;
pub mod uci;

pub use errors::EngineError;
pub use traits::EngineLauncher;
pub use uci::{UciEngine, UciLauncher, parse_option_line};
