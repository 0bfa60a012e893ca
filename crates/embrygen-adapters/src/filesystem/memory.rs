//! In-memory filesystem adapter for testing and dry runs.

use std::{
    collections::{BTreeMap, BTreeSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use embrygen_core::{
    application::{ApplicationError, ports::Filesystem},
    error::EmbrygenResult,
};

/// In-memory filesystem.
///
/// Clones share the same storage, so a test can hand one clone to the
/// engine and inspect the other afterwards.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: BTreeMap<PathBuf, String>,
    directories: BTreeSet<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    /// All files, sorted.
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.files.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// All directories (including implicit ancestors), sorted.
    pub fn list_dirs(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.directories.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Clear all contents.
    pub fn clear(&self) -> EmbrygenResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;
        inner.files.clear();
        inner.directories.clear();
        Ok(())
    }
}

impl Filesystem for MemoryFilesystem {
    fn create_dir_all(&self, path: &Path) -> EmbrygenResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;

        if inner.files.contains_key(path) {
            return Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "A file exists at this path".into(),
            }
            .into());
        }

        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            inner.directories.insert(current.clone());
        }

        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> EmbrygenResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;

        // Parent must exist, like a real filesystem.
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(ApplicationError::FilesystemError {
                    path: path.to_path_buf(),
                    reason: "Parent directory does not exist".into(),
                }
                .into());
            }
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.files.contains_key(path) || inner.directories.contains(path))
            .unwrap_or(false)
    }

    fn remove_file(&self, path: &Path) -> EmbrygenResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;

        match inner.files.remove(path) {
            Some(_) => Ok(()),
            None => Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "No such file".into(),
            }
            .into()),
        }
    }

    fn remove_dir_all(&self, path: &Path) -> EmbrygenResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;

        inner.directories.retain(|p| !p.starts_with(path));
        inner.files.retain(|p, _| !p.starts_with(path));

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_storage() {
        let fs = MemoryFilesystem::new();
        let view = fs.clone();

        fs.create_dir_all(Path::new("demo/cmd/svc")).unwrap();
        fs.write_file(Path::new("demo/cmd/svc/main.go"), "package main\n")
            .unwrap();

        assert_eq!(
            view.read_file(Path::new("demo/cmd/svc/main.go")).as_deref(),
            Some("package main\n")
        );
        assert!(view.exists(Path::new("demo/cmd")));
    }

    #[test]
    fn write_requires_parent() {
        let fs = MemoryFilesystem::new();
        let err = fs
            .write_file(Path::new("demo/go.mod"), "module x\n")
            .unwrap_err();
        assert!(err.is_write_error());
    }

    #[test]
    fn remove_dir_all_drops_subtree_only() {
        let fs = MemoryFilesystem::new();
        fs.create_dir_all(Path::new("out/demo/webroot")).unwrap();
        fs.create_dir_all(Path::new("out/other")).unwrap();
        fs.write_file(Path::new("out/demo/webroot/x"), "").unwrap();

        fs.remove_dir_all(Path::new("out/demo")).unwrap();

        assert!(!fs.exists(Path::new("out/demo")));
        assert!(!fs.exists(Path::new("out/demo/webroot/x")));
        assert!(fs.exists(Path::new("out/other")));
    }

    #[test]
    fn remove_missing_file_fails() {
        let fs = MemoryFilesystem::new();
        assert!(fs.remove_file(Path::new("nope")).is_err());
    }
}
