//! Application layer for embrygen.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ScaffoldEngine, ConflictGuard, FileMaterializer)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! generation rules itself. Those live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{
    ConflictGuard, FileMaterializer, GuardDecision, ScaffoldEngine, ScaffoldOutcome,
    ScaffoldState, ScaffoldSummary, is_affirmative, overwrite_prompt,
};

// Re-export port traits (for adapter implementation)
pub use ports::{
    Confirmation, Filesystem, NoopObserver, ScaffoldObserver, TemplateRenderer, TemplateStore,
};

pub use error::ApplicationError;
