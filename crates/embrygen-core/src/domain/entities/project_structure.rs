use std::collections::HashSet;
use std::path::PathBuf;

use crate::domain::{
    entities::{common::RelativePath, plan::DirectoryPlan},
    error::DomainError,
};

/// A template after substitution: final path and final content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFile {
    pub path: RelativePath,
    pub content: String,
}

/// Final project structure ready for materialization.
///
/// This is the output of planning + rendering. It contains no business
/// logic, only data, and is built before anything touches the disk.
#[derive(Debug, Clone)]
pub struct ProjectStructure {
    pub(crate) root: PathBuf,
    pub(crate) template: String,
    pub(crate) directories: DirectoryPlan,
    pub(crate) files: Vec<RenderedFile>,
}

impl ProjectStructure {
    pub fn new(
        root: impl Into<PathBuf>,
        template: impl Into<String>,
        directories: DirectoryPlan,
    ) -> Self {
        Self {
            root: root.into(),
            template: template.into(),
            directories,
            files: Vec::new(),
        }
    }

    pub fn add_file(&mut self, file: RenderedFile) {
        self.files.push(file);
    }

    pub fn with_file(mut self, path: RelativePath, content: impl Into<String>) -> Self {
        self.add_file(RenderedFile {
            path,
            content: content.into(),
        });
        self
    }

    pub fn root(&self) -> &PathBuf {
        &self.root
    }

    /// `id@version` of the template set the files came from.
    pub fn template(&self) -> &str {
        &self.template
    }

    pub fn directories(&self) -> &DirectoryPlan {
        &self.directories
    }

    pub fn files(&self) -> impl Iterator<Item = &RenderedFile> {
        self.files.iter()
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// `true` if some file will be written somewhere beneath `dir`.
    pub fn has_content_under(&self, dir: &RelativePath) -> bool {
        self.files.iter().any(|f| f.path.is_under(dir))
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.files.is_empty() {
            return Err(DomainError::InvalidTemplate(
                "Project structure has no files".into(),
            ));
        }

        let mut seen = HashSet::new();
        for file in &self.files {
            if !seen.insert(&file.path) {
                return Err(DomainError::DuplicatePath {
                    path: file.path.to_string(),
                });
            }
            if self.directories.contains(&file.path) {
                return Err(DomainError::DuplicatePath {
                    path: file.path.to_string(),
                });
            }
        }

        // Placeholders are pruned once content lands, so a file may not
        // occupy one.
        for dir in self.directories.placeholders() {
            let placeholder = dir.placeholder_path()?;
            if seen.contains(&placeholder) {
                return Err(DomainError::DuplicatePath {
                    path: placeholder.to_string(),
                });
            }
        }

        Ok(())
    }
}
