// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (reported once, logged more than once)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Configuration Errors
    // ========================================================================
    #[error("Invalid generation parameter '{field}': {reason}")]
    InvalidParameter { field: &'static str, reason: String },

    #[error("Required field missing: {field}")]
    MissingRequiredField { field: &'static str },

    // ========================================================================
    // Template Errors
    // ========================================================================
    #[error("Unresolved marker '{{{{{marker}}}}}' in template '{template}'")]
    UnresolvedMarker { marker: String, template: String },

    #[error("Invalid template: {0}")]
    InvalidTemplate(String),

    #[error("Template set '{template_id}' has no files")]
    EmptyTemplate { template_id: String },

    // ========================================================================
    // Path Errors
    // ========================================================================
    #[error("Duplicate path in scaffold: {path}")]
    DuplicatePath { path: String },

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },

    #[error("Path escapes the project root: {path}")]
    PathTraversal { path: String },

    #[error("Path is empty")]
    EmptyPath,
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidParameter { field, reason } => vec![
                format!("Parameter '{}' was rejected: {}", field, reason),
                "Names must be non-empty and must not contain path separators".into(),
                "Check the [generation] section of your config or the matching flag".into(),
            ],
            Self::MissingRequiredField { field } => vec![
                format!("'{}' must be set before generating", field),
                "Run: embrygen config list to see the effective values".into(),
            ],
            Self::UnresolvedMarker { marker, template } => vec![
                format!("Template '{}' uses an unknown marker '{}'", template, marker),
                "Known markers: ROOT_NAME, MODULE_ID, APP_NAME, VENV_DIR_NAME".into(),
                "Escape a literal '{{' in template text as '\\{{'".into(),
            ],
            Self::EmptyTemplate { template_id } => vec![
                format!("Template set '{}' is empty or corrupted", template_id),
                "Check the [[files]] entries of its template.toml".into(),
            ],
            Self::PathTraversal { .. } | Self::AbsolutePathNotAllowed { .. } => vec![
                "Template target paths must stay inside the project root".into(),
            ],
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidParameter { .. } | Self::MissingRequiredField { .. } => {
                ErrorCategory::Configuration
            }
            Self::UnresolvedMarker { .. }
            | Self::InvalidTemplate(_)
            | Self::EmptyTemplate { .. }
            | Self::DuplicatePath { .. }
            | Self::AbsolutePathNotAllowed { .. }
            | Self::PathTraversal { .. }
            | Self::EmptyPath => ErrorCategory::Template,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Template,
}
