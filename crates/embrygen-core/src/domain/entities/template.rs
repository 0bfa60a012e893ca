//! Template domain model.
//!
//! ## Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  TemplateSet (Aggregate)                                    │
//! │  ├── id / version                                           │
//! │  ├── TemplateMetadata (display information)                 │
//! │  └── FileEntry*                                             │
//! │       ├── target: path pattern, e.g. cmd/{{APP_NAME}}/main.go│
//! │       └── body: TemplateSource (Static | Owned)             │
//! ├─────────────────────────────────────────────────────────────┤
//! │  RenderContext (Value Object)                               │
//! │  └── Variable substitution: {{MODULE_ID}} -> "example.com/x"│
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Marker grammar
//!
//! A marker is `{{NAME}}` where `NAME` matches `[A-Z_][A-Z0-9_]*`. Nothing
//! else is interpreted: `{{.ChangedFileExt}}` (Go templates), `{ data.Title }`
//! (Templ) and stray braces pass through byte for byte. `\{{` writes a
//! literal `{{` and suppresses marker parsing at that position.
//!
//! Unknown marker names are an error, never silently emitted.

use std::collections::{HashMap, HashSet};
use std::fmt;

use crate::domain::{
    entities::{common::RelativePath, spec::GenerationSpec},
    error::DomainError,
};

const OPEN: &str = "{{";
const CLOSE: &str = "}}";
const ESCAPE: char = '\\';

/// Template body storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSource {
    /// Compile-time string literal (e.g., `include_str!("Makefile")`)
    Static(&'static str),

    /// Runtime-owned string (loaded from disk)
    Owned(String),
}

impl From<&'static str> for TemplateSource {
    fn from(s: &'static str) -> Self {
        Self::Static(s)
    }
}

impl From<String> for TemplateSource {
    fn from(s: String) -> Self {
        Self::Owned(s)
    }
}

impl TemplateSource {
    /// Get string slice regardless of storage type.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Static(s) => s,
            Self::Owned(s) => s,
        }
    }

    /// Quick heuristic: does the body contain anything marker-shaped?
    pub fn contains_marker(&self) -> bool {
        !scan_markers(self.as_str()).is_empty()
    }
}

/// One file of a template set: where it goes and what goes in it.
///
/// Both fields may contain markers. Built in memory from static
/// definitions, rendered once, written once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub target: String,
    pub body: TemplateSource,
}

impl FileEntry {
    pub fn new(target: impl Into<String>, body: impl Into<TemplateSource>) -> Self {
        Self {
            target: target.into(),
            body: body.into(),
        }
    }
}

/// Human-facing information about a template set.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TemplateMetadata {
    /// Short display name (e.g., "EmbryGo")
    pub name: String,

    /// Longer description for help text
    pub description: String,
}

impl TemplateMetadata {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
        }
    }

    pub fn description(mut self, desc: impl Into<String>) -> Self {
        self.description = desc.into();
        self
    }
}

/// A named, versioned set of file templates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateSet {
    pub id: String,
    pub version: String,
    pub metadata: TemplateMetadata,
    pub files: Vec<FileEntry>,
}

impl TemplateSet {
    pub fn new(id: impl Into<String>, version: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            metadata: TemplateMetadata::new(id.clone()),
            id,
            version: version.into(),
            files: Vec::new(),
        }
    }

    pub fn with_metadata(mut self, metadata: TemplateMetadata) -> Self {
        self.metadata = metadata;
        self
    }

    pub fn with_file(mut self, entry: FileEntry) -> Self {
        self.files.push(entry);
        self
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// Structural checks: non-empty, no duplicate target patterns.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.id.trim().is_empty() {
            return Err(DomainError::InvalidTemplate("template id is empty".into()));
        }
        if self.files.is_empty() {
            return Err(DomainError::EmptyTemplate {
                template_id: self.id.clone(),
            });
        }

        let mut seen = HashSet::new();
        for file in &self.files {
            if !seen.insert(file.target.as_str()) {
                return Err(DomainError::DuplicatePath {
                    path: file.target.clone(),
                });
            }
        }
        Ok(())
    }
}

impl fmt::Display for TemplateSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.id, self.version)
    }
}

/// Context for template rendering.
///
/// A value object holding the marker table. Built from a
/// [`GenerationSpec`]; immutable afterwards except through
/// [`RenderContext::with_variable`], which consumes and returns.
///
/// ## Built-in Variables
///
/// | Variable | Example |
/// |----------|---------|
/// | `ROOT_NAME` | "embrygo-project" |
/// | `MODULE_ID` | "github.com/r-via/embrygo" |
/// | `APP_NAME` | "service-app" |
/// | `VENV_DIR_NAME` | ".venv" |
#[derive(Debug, Clone)]
pub struct RenderContext {
    variables: HashMap<String, String>,
}

impl RenderContext {
    pub fn from_spec(spec: &GenerationSpec) -> Self {
        let variables = spec
            .variables()
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Self { variables }
    }

    /// Add or override a variable.
    pub fn with_variable(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(String::as_str)
    }

    /// Substitute every marker in `template`.
    ///
    /// `name` only labels errors.
    ///
    /// # Errors
    ///
    /// [`DomainError::UnresolvedMarker`] for a well-formed marker whose name
    /// is not in the table.
    pub fn render(&self, name: &str, template: &str) -> Result<String, DomainError> {
        let mut out = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(pos) = rest.find(OPEN) {
            let (before, from_open) = rest.split_at(pos);

            if before.ends_with(ESCAPE) {
                out.push_str(&before[..before.len() - ESCAPE.len_utf8()]);
                out.push_str(OPEN);
                rest = &from_open[OPEN.len()..];
                continue;
            }

            out.push_str(before);
            match parse_marker(from_open) {
                Some((marker, consumed)) => {
                    let value = self.get(marker).ok_or_else(|| DomainError::UnresolvedMarker {
                        marker: marker.to_string(),
                        template: name.to_string(),
                    })?;
                    out.push_str(value);
                    rest = &from_open[consumed..];
                }
                None => {
                    // Not a marker: keep one brace and rescan, so `{{{X}}}`
                    // still finds the inner `{{X}}`.
                    out.push('{');
                    rest = &from_open[1..];
                }
            }
        }

        out.push_str(rest);
        Ok(out)
    }

    /// Render a target path pattern and validate the result.
    pub fn render_path(&self, pattern: &str) -> Result<RelativePath, DomainError> {
        let rendered = self.render(pattern, pattern)?;
        RelativePath::try_new(rendered)
    }
}

/// `s` starts with `{{`. Returns the marker name and the byte length of the
/// whole `{{NAME}}` token.
fn parse_marker(s: &str) -> Option<(&str, usize)> {
    let inner = &s[OPEN.len()..];
    let end = inner.find(CLOSE)?;
    let name = &inner[..end];

    let mut chars = name.chars();
    let first = chars.next()?;
    if !(first.is_ascii_uppercase() || first == '_') {
        return None;
    }
    if !chars.all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_') {
        return None;
    }

    Some((name, OPEN.len() + end + CLOSE.len()))
}

/// All marker names in `template`, in order of appearance (escapes skipped).
pub fn scan_markers(template: &str) -> Vec<&str> {
    let mut found = Vec::new();
    let mut rest = template;

    while let Some(pos) = rest.find(OPEN) {
        let (before, from_open) = rest.split_at(pos);
        if before.ends_with(ESCAPE) {
            rest = &from_open[OPEN.len()..];
            continue;
        }
        match parse_marker(from_open) {
            Some((marker, consumed)) => {
                found.push(marker);
                rest = &from_open[consumed..];
            }
            None => rest = &from_open[1..],
        }
    }

    found
}
