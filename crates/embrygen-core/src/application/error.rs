//! Application layer errors.
//!
//! These errors represent failures in orchestration and I/O, not generation
//! logic. Spec and template errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Filesystem operation failed (permissions, disk space, invalid path).
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// The template source could not produce a template set.
    #[error("Template source unavailable: {reason}")]
    TemplateSourceUnavailable { reason: String },

    /// The confirmation capability could not obtain an answer.
    #[error("Confirmation failed: {reason}")]
    ConfirmationFailed { reason: String },

    /// Shared adapter state is unusable (lock poisoned).
    #[error("Adapter state lock poisoned")]
    StoreLockError,

    /// The engine attempted a transition its state machine forbids.
    #[error("Illegal scaffold transition: {from} -> {to}")]
    IllegalTransition {
        from: &'static str,
        to: &'static str,
    },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Check available disk space".into(),
                "A partial tree may remain; re-run and accept removal to regenerate".into(),
            ],
            Self::TemplateSourceUnavailable { reason } => vec![
                format!("Loading templates failed: {}", reason),
                "Check --templates-dir / EMBRYGEN_TEMPLATES_DIR".into(),
                "Unset it to use the built-in templates".into(),
            ],
            Self::ConfirmationFailed { .. } => vec![
                "Could not read an answer from the terminal".into(),
                "Pass --yes to overwrite without prompting".into(),
            ],
            Self::StoreLockError => vec![
                "Internal adapter state is corrupted".into(),
                "Try again".into(),
            ],
            Self::IllegalTransition { .. } => vec!["This is a bug, please report it".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::FilesystemError { .. } => ErrorCategory::Filesystem,
            Self::TemplateSourceUnavailable { .. } => ErrorCategory::Template,
            Self::ConfirmationFailed { .. } => ErrorCategory::Internal,
            Self::StoreLockError | Self::IllegalTransition { .. } => ErrorCategory::Internal,
        }
    }
}
