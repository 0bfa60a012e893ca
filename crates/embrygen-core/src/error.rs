//! Unified error handling for embrygen-core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with rich context and user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for embrygen-core operations.
///
/// Every variant is fatal to a run; nothing is retried.
#[derive(Debug, Error, Clone)]
pub enum EmbrygenError {
    /// Errors from the domain layer (invalid parameters, template defects).
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (I/O, orchestration).
    #[error("{0}")]
    Application(#[from] ApplicationError),
}

impl EmbrygenError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Configuration => ErrorCategory::Configuration,
                crate::domain::ErrorCategory::Template => ErrorCategory::Template,
            },
            Self::Application(e) => e.category(),
        }
    }

    /// `true` for the WriteError class: the run may have left a partial tree.
    pub fn is_write_error(&self) -> bool {
        matches!(
            self,
            Self::Application(ApplicationError::FilesystemError { .. })
        )
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Invalid generation parameter.
    Configuration,
    /// Unresolved marker or malformed template set.
    Template,
    /// Filesystem write failure.
    Filesystem,
    Internal,
}

/// Convenient result type alias.
pub type EmbrygenResult<T> = Result<T, EmbrygenError>;
