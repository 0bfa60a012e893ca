//! Generation parameters.
//!
//! [`GenerationSpec`] is the single immutable parameter bundle threaded
//! through every stage of a run. It is built once (builder or
//! [`GenerationSpec::default_embrygo`]) and only ever borrowed afterwards.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::error::DomainError;

/// Marker names bound to the `GenerationSpec` fields.
pub const MARKER_ROOT_NAME: &str = "ROOT_NAME";
pub const MARKER_MODULE_ID: &str = "MODULE_ID";
pub const MARKER_APP_NAME: &str = "APP_NAME";
pub const MARKER_VENV_DIR_NAME: &str = "VENV_DIR_NAME";

/// Built-in defaults used when nothing overrides them.
pub const DEFAULT_ROOT_NAME: &str = "embrygo-project";
pub const DEFAULT_BASE_DIR: &str = "tests";
pub const DEFAULT_MODULE_ID: &str = "github.com/r-via/embrygo";
pub const DEFAULT_APP_NAME: &str = "service-app";
pub const DEFAULT_VENV_DIR_NAME: &str = ".venv";

/// Immutable generation parameters.
///
/// Invariant: every string field has passed validation, so it can be pasted
/// verbatim into generated source and into paths.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationSpec {
    root_name: String,
    base_dir: PathBuf,
    module_id: String,
    app_name: String,
    venv_dir_name: String,
}

impl GenerationSpec {
    pub fn builder() -> GenerationSpecBuilder {
        GenerationSpecBuilder::default()
    }

    /// The EmbryGo defaults.
    pub fn default_embrygo() -> Self {
        Self {
            root_name: DEFAULT_ROOT_NAME.into(),
            base_dir: PathBuf::from(DEFAULT_BASE_DIR),
            module_id: DEFAULT_MODULE_ID.into(),
            app_name: DEFAULT_APP_NAME.into(),
            venv_dir_name: DEFAULT_VENV_DIR_NAME.into(),
        }
    }

    pub fn root_name(&self) -> &str {
        &self.root_name
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn module_id(&self) -> &str {
        &self.module_id
    }

    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    pub fn venv_dir_name(&self) -> &str {
        &self.venv_dir_name
    }

    /// `base_dir / root_name`. Derived on every call, never stored.
    pub fn project_root(&self) -> PathBuf {
        self.base_dir.join(&self.root_name)
    }

    /// Marker table: `(marker name, value)` pairs in a fixed order.
    pub fn variables(&self) -> [(&'static str, &str); 4] {
        [
            (MARKER_ROOT_NAME, self.root_name.as_str()),
            (MARKER_MODULE_ID, self.module_id.as_str()),
            (MARKER_APP_NAME, self.app_name.as_str()),
            (MARKER_VENV_DIR_NAME, self.venv_dir_name.as_str()),
        ]
    }

    /// Re-run the field checks. Always `Ok` for specs built by this module.
    pub fn validate(&self) -> Result<(), DomainError> {
        validate_path_segment("root_name", &self.root_name)?;
        validate_module_id(&self.module_id)?;
        validate_path_segment("app_name", &self.app_name)?;
        validate_path_segment("venv_dir_name", &self.venv_dir_name)?;
        Ok(())
    }
}

impl fmt::Display for GenerationSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}, app {})",
            self.project_root().display(),
            self.module_id,
            self.app_name
        )
    }
}

/// Builder for [`GenerationSpec`].
///
/// `base_dir` defaults to the current directory (`.`); every other field is
/// required.
#[derive(Debug, Default, Clone)]
pub struct GenerationSpecBuilder {
    root_name: Option<String>,
    base_dir: Option<PathBuf>,
    module_id: Option<String>,
    app_name: Option<String>,
    venv_dir_name: Option<String>,
}

impl GenerationSpecBuilder {
    pub fn root_name(mut self, value: impl Into<String>) -> Self {
        self.root_name = Some(value.into());
        self
    }

    pub fn base_dir(mut self, value: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(value.into());
        self
    }

    pub fn module_id(mut self, value: impl Into<String>) -> Self {
        self.module_id = Some(value.into());
        self
    }

    pub fn app_name(mut self, value: impl Into<String>) -> Self {
        self.app_name = Some(value.into());
        self
    }

    pub fn venv_dir_name(mut self, value: impl Into<String>) -> Self {
        self.venv_dir_name = Some(value.into());
        self
    }

    pub fn build(self) -> Result<GenerationSpec, DomainError> {
        let spec = GenerationSpec {
            root_name: self.root_name.ok_or(DomainError::MissingRequiredField {
                field: "root_name",
            })?,
            base_dir: self.base_dir.unwrap_or_else(|| PathBuf::from(".")),
            module_id: self.module_id.ok_or(DomainError::MissingRequiredField {
                field: "module_id",
            })?,
            app_name: self.app_name.ok_or(DomainError::MissingRequiredField {
                field: "app_name",
            })?,
            venv_dir_name: self.venv_dir_name.ok_or(DomainError::MissingRequiredField {
                field: "venv_dir_name",
            })?,
        };
        spec.validate()?;
        Ok(spec)
    }
}

// ── field checks ──────────────────────────────────────────────────────────────

fn invalid(field: &'static str, reason: impl Into<String>) -> DomainError {
    DomainError::InvalidParameter {
        field,
        reason: reason.into(),
    }
}

fn validate_common(field: &'static str, value: &str) -> Result<(), DomainError> {
    if value.is_empty() {
        return Err(invalid(field, "must not be empty"));
    }
    if value.chars().any(|c| c.is_control()) {
        return Err(invalid(field, "must not contain control characters"));
    }
    if value.contains("{{") {
        return Err(invalid(field, "must not contain '{{'"));
    }
    Ok(())
}

fn validate_path_segment(field: &'static str, value: &str) -> Result<(), DomainError> {
    validate_common(field, value)?;
    if value.contains('/') || value.contains('\\') {
        return Err(invalid(field, "must not contain path separators"));
    }
    if value == "." || value == ".." {
        return Err(invalid(field, "must not be '.' or '..'"));
    }
    if value.chars().any(char::is_whitespace) {
        return Err(invalid(field, "must not contain whitespace"));
    }
    Ok(())
}

/// Go import paths may contain `/`, but not leading/trailing ones or `\`.
fn validate_module_id(value: &str) -> Result<(), DomainError> {
    const FIELD: &str = "module_id";
    validate_common(FIELD, value)?;
    if value.starts_with('/') || value.ends_with('/') {
        return Err(invalid(FIELD, "must not start or end with '/'"));
    }
    if value.contains('\\') {
        return Err(invalid(FIELD, "must not contain '\\'"));
    }
    if value.chars().any(char::is_whitespace) {
        return Err(invalid(FIELD, "must not contain whitespace"));
    }
    if value.split('/').any(|seg| seg.is_empty() || seg == "." || seg == "..") {
        return Err(invalid(FIELD, "contains an empty, '.' or '..' path element"));
    }
    Ok(())
}
