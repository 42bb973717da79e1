//! Filesystem helpers shared by the settings and engine option loaders.

pub mod operations;

pub use operations::{ensure_file_exists, read_text, write_text};
