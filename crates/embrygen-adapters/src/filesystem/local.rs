//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use embrygen_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{EmbrygenError, EmbrygenResult},
};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> EmbrygenResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> EmbrygenResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn remove_file(&self, path: &Path) -> EmbrygenResult<()> {
        std::fs::remove_file(path).map_err(|e| map_io_error(path, e, "remove file"))
    }

    fn remove_dir_all(&self, path: &Path) -> EmbrygenResult<()> {
        std::fs::remove_dir_all(path).map_err(|e| map_io_error(path, e, "remove directory"))
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> EmbrygenError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_into_missing_parent_is_a_write_error() {
        let dir = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        let err = fs
            .write_file(&dir.path().join("missing/go.mod"), "module x\n")
            .unwrap_err();
        assert!(err.is_write_error());
        assert!(err.to_string().contains("write file"));
    }

    #[test]
    fn remove_dir_all_clears_nested_content() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("demo");
        let fs = LocalFilesystem::new();

        fs.create_dir_all(&root.join("cmd/svc")).unwrap();
        fs.write_file(&root.join("cmd/svc/main.go"), "package main\n")
            .unwrap();
        assert!(fs.exists(&root));

        fs.remove_dir_all(&root).unwrap();
        assert!(!fs.exists(&root));
    }
}
