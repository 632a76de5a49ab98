use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Trait for the file system operations scaffolding needs.
pub trait FileSystem {
    fn read(&self, path: &Path) -> Result<String>;
    fn write(&self, path: &Path, content: &str) -> Result<()>;
    fn ensure_dir(&self, dir: &Path) -> Result<()>;
}

/// Local filesystem implementation
pub struct LocalFs;

impl LocalFs {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFs {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystem for LocalFs {
    fn read(&self, path: &Path) -> Result<String> {
        fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::internal_io(
                    format!("File not found: {}", path.display()),
                    Some("read file".to_string()),
                )
            } else {
                Error::internal_io(e.to_string(), Some(format!("read {}", path.display())))
            }
        })
    }

    /// Full replace of `path`, writing through symlinks and failing on
    /// read-only files.
    fn write(&self, path: &Path, content: &str) -> Result<()> {
        fs::write(path, content).map_err(|e| {
            Error::internal_io(e.to_string(), Some(format!("write {}", path.display())))
        })
    }

    /// Creates `dir` and any missing ancestors. Existing directories are left
    /// alone; an existing non-directory at `dir` is an error.
    fn ensure_dir(&self, dir: &Path) -> Result<()> {
        if dir.is_dir() {
            return Ok(());
        }
        fs::create_dir_all(dir).map_err(|e| {
            Error::internal_io(
                e.to_string(),
                Some(format!("create directory {}", dir.display())),
            )
        })
    }
}

/// Get a local filesystem instance.
pub fn local() -> LocalFs {
    LocalFs::new()
}
