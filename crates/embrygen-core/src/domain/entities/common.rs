use super::DomainError;
use std::fmt;
use std::path::{Component, Path, PathBuf};

/// A filesystem path guaranteed to be relative to the project root.
///
/// Invariant: never absolute, never empty, never contains `..`. Enforced at
/// construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RelativePath(PathBuf);

impl RelativePath {
    /// Create a new relative path.
    ///
    /// # Panics
    /// Panics if the path breaks the invariant (use `try_new` for fallible).
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        match Self::try_new(path.clone()) {
            Ok(p) => p,
            Err(e) => panic!("invalid RelativePath {:?}: {}", path, e),
        }
    }

    /// Fallible constructor.
    ///
    /// Accepts forward-slash separated strings on every platform; `.`
    /// components are dropped.
    pub fn try_new(path: impl Into<PathBuf>) -> Result<Self, DomainError> {
        let path = path.into();
        if path.is_absolute() || path.has_root() {
            return Err(DomainError::AbsolutePathNotAllowed {
                path: path.display().to_string(),
            });
        }

        let mut normalized = PathBuf::new();
        for component in path.components() {
            match component {
                Component::Normal(part) => normalized.push(part),
                Component::CurDir => {}
                Component::ParentDir => {
                    return Err(DomainError::PathTraversal {
                        path: path.display().to_string(),
                    });
                }
                Component::RootDir | Component::Prefix(_) => {
                    return Err(DomainError::AbsolutePathNotAllowed {
                        path: path.display().to_string(),
                    });
                }
            }
        }

        if normalized.as_os_str().is_empty() {
            return Err(DomainError::EmptyPath);
        }

        Ok(Self(normalized))
    }

    /// Join a segment, maintaining the relative invariant.
    pub fn join(&self, segment: impl AsRef<Path>) -> Result<Self, DomainError> {
        Self::try_new(self.0.join(segment.as_ref()))
    }

    /// `true` if `self` lies strictly beneath `ancestor`.
    pub fn is_under(&self, ancestor: &RelativePath) -> bool {
        self.0 != ancestor.0 && self.0.starts_with(&ancestor.0)
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }

    /// Forward-slash rendering, independent of the host separator.
    pub fn to_slash_string(&self) -> String {
        self.0
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/")
    }

    pub fn into_path_buf(self) -> PathBuf {
        self.0
    }
}

impl AsRef<Path> for RelativePath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl TryFrom<&str> for RelativePath {
    type Error = DomainError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::try_new(s)
    }
}

impl fmt::Display for RelativePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_slash_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_nested_relative_paths() {
        let p = RelativePath::try_new("internal/handlers/api").unwrap();
        assert_eq!(p.to_slash_string(), "internal/handlers/api");
    }

    #[test]
    fn drops_current_dir_components() {
        let p = RelativePath::try_new("./tools/./input.css").unwrap();
        assert_eq!(p.to_string(), "tools/input.css");
    }

    #[test]
    fn rejects_absolute() {
        assert!(matches!(
            RelativePath::try_new("/etc/passwd"),
            Err(DomainError::AbsolutePathNotAllowed { .. })
        ));
    }

    #[test]
    fn rejects_parent_traversal() {
        assert!(matches!(
            RelativePath::try_new("cmd/../../escape"),
            Err(DomainError::PathTraversal { .. })
        ));
    }

    #[test]
    fn rejects_empty() {
        assert_eq!(RelativePath::try_new(""), Err(DomainError::EmptyPath));
        assert_eq!(RelativePath::try_new("."), Err(DomainError::EmptyPath));
    }

    #[test]
    fn is_under_is_strict() {
        let services = RelativePath::new("internal/services");
        let welcome = RelativePath::new("internal/services/welcome/service.go");
        let sibling = RelativePath::new("internal/servicesx/a.go");

        assert!(welcome.is_under(&services));
        assert!(!services.is_under(&services));
        assert!(!sibling.is_under(&services));
    }
}
