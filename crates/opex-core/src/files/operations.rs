use std::fs;
use std::io;
use std::path::Path;

use tracing::{debug, info};

/// Create `path` as an empty file, along with any missing parent directories.
///
/// Returns `true` when the file was created and `false` when it already existed.
pub fn ensure_file_exists(path: &Path) -> io::Result<bool> {
    if path.is_file() {
        return Ok(false);
    }

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.is_dir()
    {
        fs::create_dir_all(parent)?;
        debug!(
            event = "core.files.parent_created",
            path = %parent.display()
        );
    }

    fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map(|_| ())
        .or_else(|e| {
            // Lost a race with another writer; the file exists, which is all we need.
            if e.kind() == io::ErrorKind::AlreadyExists {
                Ok(())
            } else {
                Err(e)
            }
        })?;

    info!(event = "core.files.created", path = %path.display());
    Ok(true)
}

/// Read a whole file as UTF-8 text.
pub fn read_text(path: &Path) -> io::Result<String> {
    fs::read_to_string(path)
}

/// Replace the whole content of `path`.
pub fn write_text(path: &Path, content: &str) -> io::Result<()> {
    fs::write(path, content)?;
    debug!(
        event = "core.files.written",
        path = %path.display(),
        bytes = content.len()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_ensure_file_exists_creates_parents() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("a").join("b").join("engine.uci");

        assert!(ensure_file_exists(&path).unwrap());
        assert!(path.is_file());
        assert_eq!(read_text(&path).unwrap(), "");
    }

    #[test]
    fn test_ensure_file_exists_keeps_existing_content() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("settings.json");
        fs::write(&path, "{}").unwrap();

        assert!(!ensure_file_exists(&path).unwrap());
        assert_eq!(read_text(&path).unwrap(), "{}");
    }

    #[test]
    fn test_write_text_truncates() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("options.uci");
        fs::write(&path, "a much longer previous content\n").unwrap();

        write_text(&path, "short\n").unwrap();
        assert_eq!(read_text(&path).unwrap(), "short\n");
    }
}
