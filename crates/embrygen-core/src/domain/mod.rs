// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for embrygen.
//!
//! This module contains pure generation logic with ZERO I/O. Filesystem
//! access, template loading and user interaction are handled via ports
//! (traits) defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or terminal calls
//! - **Immutable values**: `GenerationSpec` is built once and only borrowed
//! - **Strict rendering**: unknown markers are errors, not literal output
//!
// Public API - what the world sees
pub mod entities;
pub mod error;

// Private implementation details - not visible outside domain
mod validation;

// Re-exports for convenience
pub use entities::{
    common::RelativePath,
    plan::{DirEntry, DirectoryPlan, DirectoryPlanner, PLACEHOLDER_FILE_NAME},
    project_structure::{ProjectStructure, RenderedFile},
    spec::{
        DEFAULT_APP_NAME, DEFAULT_BASE_DIR, DEFAULT_MODULE_ID, DEFAULT_ROOT_NAME,
        DEFAULT_VENV_DIR_NAME, GenerationSpec, GenerationSpecBuilder,
    },
    template::{
        FileEntry, RenderContext, TemplateMetadata, TemplateSet, TemplateSource, scan_markers,
    },
};

pub use error::{DomainError, ErrorCategory};

pub use validation::DomainValidator;
