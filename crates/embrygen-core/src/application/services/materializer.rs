//! File materializer - turns planned paths into directories and files.

use std::path::Path;

use tracing::{debug, info};

use crate::{
    application::ports::{Filesystem, ScaffoldObserver},
    domain::RelativePath,
    error::EmbrygenResult,
};

/// Writes beneath a project root, reporting every creation to an observer.
///
/// Writes overwrite unconditionally; the conflict guard has already cleared
/// or confirmed the root.
pub struct FileMaterializer<'a> {
    filesystem: &'a dyn Filesystem,
    observer: &'a dyn ScaffoldObserver,
    root: &'a Path,
}

impl<'a> FileMaterializer<'a> {
    pub fn new(
        filesystem: &'a dyn Filesystem,
        observer: &'a dyn ScaffoldObserver,
        root: &'a Path,
    ) -> Self {
        Self {
            filesystem,
            observer,
            root,
        }
    }

    pub fn create_root(&self) -> EmbrygenResult<()> {
        self.filesystem.create_dir_all(self.root)?;
        info!(path = %self.root.display(), "Created root directory");
        self.observer.directory_created(self.root);
        Ok(())
    }

    pub fn create_dir(&self, dir: &RelativePath) -> EmbrygenResult<()> {
        let path = self.root.join(dir);
        self.filesystem.create_dir_all(&path)?;
        debug!(path = %path.display(), "Created directory");
        self.observer.directory_created(&path);
        Ok(())
    }

    /// Ensure ancestors exist, then write `content` to `file`.
    pub fn write(&self, file: &RelativePath, content: &str) -> EmbrygenResult<()> {
        let path = self.root.join(file);
        if let Some(parent) = path.parent() {
            self.filesystem.create_dir_all(parent)?;
        }
        self.filesystem.write_file(&path, content)?;
        info!(path = %path.display(), bytes = content.len(), "Created file");
        self.observer.file_created(&path);
        Ok(())
    }

    pub fn remove(&self, file: &RelativePath) -> EmbrygenResult<()> {
        let path = self.root.join(file);
        self.filesystem.remove_file(&path)?;
        debug!(path = %path.display(), "Removed placeholder");
        self.observer.placeholder_removed(&path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{MockFilesystem, NoopObserver};
    use crate::application::ApplicationError;
    use mockall::{Sequence, predicate::*};
    use std::path::PathBuf;

    #[test]
    fn write_creates_parent_before_file() {
        let mut seq = Sequence::new();
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all()
            .with(eq(PathBuf::from("out/demo/cmd/svc")))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));
        fs.expect_write_file()
            .with(eq(PathBuf::from("out/demo/cmd/svc/main.go")), eq("package main\n"))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(()));

        let m = FileMaterializer::new(&fs, &NoopObserver, Path::new("out/demo"));
        m.write(&RelativePath::new("cmd/svc/main.go"), "package main\n")
            .unwrap();
    }

    #[test]
    fn write_failure_is_fatal() {
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file().returning(|p, _| {
            Err(ApplicationError::FilesystemError {
                path: p.to_path_buf(),
                reason: "No space left on device".into(),
            }
            .into())
        });

        let m = FileMaterializer::new(&fs, &NoopObserver, Path::new("out/demo"));
        let err = m.write(&RelativePath::new("go.mod"), "module x\n").unwrap_err();
        assert!(err.is_write_error());
    }
}
