//! Directory planning.
//!
//! The layout of an EmbryGo project is fixed; only two segments depend on
//! the `GenerationSpec` (`cmd/<app>` and `tools/<venv>`). The planner turns a
//! [`GenerationSpec`] into an ordered [`DirectoryPlan`].

use crate::domain::{
    entities::{common::RelativePath, spec::GenerationSpec},
    error::DomainError,
};

/// Name of the empty marker file that keeps otherwise-empty directories
/// visible to version control.
pub const PLACEHOLDER_FILE_NAME: &str = ".gitkeep";

/// Directory layout, in creation order. `{app}` and `{venv}` are expanded by
/// the planner.
const LAYOUT: &[&str] = &[
    "cmd/{app}",
    "internal/config",
    "internal/database",
    "internal/handlers/api",
    "internal/handlers/web",
    "internal/middleware",
    "internal/models",
    "internal/router",
    "internal/services/welcome",
    "internal/services",
    "pkg/helpers",
    "pkg/translations",
    "tools",
    "tools/{venv}",
    "webroot/cache",
    "webroot/sources",
    "webroot/statics",
    "webroot/www",
    "webroot/views/components/heroicons",
    "webroot/views/layouts",
    "webroot/views/pages",
];

/// Directories that may start out empty and get a placeholder.
///
/// Only leaves: a flagged directory holds nothing but its placeholder once
/// the directory phase ends, so `internal/services` (parent of `welcome`)
/// is not flagged.
const PLACEHOLDER_DIRS: &[&str] = &[
    "internal/database",
    "internal/handlers/api",
    "internal/middleware",
    "internal/models",
    "internal/router",
    "internal/services/welcome",
    "webroot/www",
    "webroot/cache",
    "webroot/sources",
];

/// A directory to create, relative to the project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub path: RelativePath,
    pub needs_placeholder: bool,
}

impl DirEntry {
    /// Path of this directory's placeholder file.
    pub fn placeholder_path(&self) -> Result<RelativePath, DomainError> {
        self.path.join(PLACEHOLDER_FILE_NAME)
    }
}

/// Ordered directories for one scaffold.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DirectoryPlan {
    entries: Vec<DirEntry>,
}

impl DirectoryPlan {
    /// Every directory, in creation order.
    pub fn directories(&self) -> impl Iterator<Item = &DirEntry> {
        self.entries.iter()
    }

    /// The subset flagged for a placeholder, in creation order.
    pub fn placeholders(&self) -> impl Iterator<Item = &DirEntry> {
        self.entries.iter().filter(|e| e.needs_placeholder)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, path: &RelativePath) -> bool {
        self.entries.iter().any(|e| &e.path == path)
    }
}

/// Produces the directory plan for a spec.
pub struct DirectoryPlanner;

impl DirectoryPlanner {
    /// Deterministic for a given spec.
    pub fn plan(spec: &GenerationSpec) -> Result<DirectoryPlan, DomainError> {
        let mut entries = Vec::with_capacity(LAYOUT.len());

        for pattern in LAYOUT {
            let expanded = pattern
                .replace("{app}", spec.app_name())
                .replace("{venv}", spec.venv_dir_name());
            let path = RelativePath::try_new(expanded)?;
            let needs_placeholder = PLACEHOLDER_DIRS.contains(pattern);
            entries.push(DirEntry {
                path,
                needs_placeholder,
            });
        }

        Ok(DirectoryPlan { entries })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(app: &str, venv: &str) -> GenerationSpec {
        GenerationSpec::builder()
            .root_name("demo")
            .module_id("example.com/demo")
            .app_name(app)
            .venv_dir_name(venv)
            .build()
            .unwrap()
    }

    fn paths(plan: &DirectoryPlan) -> Vec<String> {
        plan.directories().map(|d| d.path.to_string()).collect()
    }

    #[test]
    fn derives_command_and_venv_dirs() {
        let plan = DirectoryPlanner::plan(&spec("svc", ".env-tools")).unwrap();
        let all = paths(&plan);
        assert_eq!(all[0], "cmd/svc");
        assert!(all.contains(&"tools/.env-tools".to_string()));
    }

    #[test]
    fn plan_is_deterministic() {
        let a = DirectoryPlanner::plan(&spec("svc", ".venv")).unwrap();
        let b = DirectoryPlanner::plan(&spec("svc", ".venv")).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), LAYOUT.len());
    }

    #[test]
    fn every_placeholder_dir_is_planned() {
        let plan = DirectoryPlanner::plan(&spec("svc", ".venv")).unwrap();
        let flagged: Vec<String> = plan.placeholders().map(|d| d.path.to_string()).collect();
        assert_eq!(flagged.len(), PLACEHOLDER_DIRS.len());
        for dir in PLACEHOLDER_DIRS {
            assert!(flagged.contains(&dir.to_string()), "{dir} not flagged");
        }
    }

    #[test]
    fn parents_of_tools_venv_come_first() {
        let plan = DirectoryPlanner::plan(&spec("svc", ".venv")).unwrap();
        let all = paths(&plan);
        let tools = all.iter().position(|p| p == "tools").unwrap();
        let venv = all.iter().position(|p| p == "tools/.venv").unwrap();
        assert!(tools < venv);
    }

    #[test]
    fn placeholder_dirs_are_leaves() {
        let plan = DirectoryPlanner::plan(&spec("svc", ".venv")).unwrap();
        for flagged in plan.placeholders() {
            let nested = plan
                .directories()
                .find(|d| d.path.is_under(&flagged.path));
            assert!(nested.is_none(), "{} has subdirectory {:?}", flagged.path, nested);
        }
    }

    #[test]
    fn placeholder_path_is_inside_dir() {
        let plan = DirectoryPlanner::plan(&spec("svc", ".venv")).unwrap();
        let www = plan
            .placeholders()
            .find(|d| d.path.to_string() == "webroot/www")
            .unwrap();
        assert_eq!(
            www.placeholder_path().unwrap().to_string(),
            "webroot/www/.gitkeep"
        );
    }
}
