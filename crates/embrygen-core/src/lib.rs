//! embrygen core - hexagonal architecture implementation
//!
//! This crate provides the domain and application layers for the embrygen
//! project generator, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          embrygen-cli (CLI)             │
//! │   (stdin confirmation, terminal output) │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │ (ScaffoldEngine, ConflictGuard,         │
//! │  FileMaterializer)                      │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Application Ports (Traits)        │
//! │ (Filesystem, TemplateStore, Renderer,   │
//! │  Confirmation, ScaffoldObserver)        │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    embrygen-adapters (Infrastructure)   │
//! │ (LocalFilesystem, EmbeddedTemplates...) │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │ (GenerationSpec, DirectoryPlanner,      │
//! │  RenderContext, TemplateSet)            │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use embrygen_core::prelude::*;
//!
//! let spec = GenerationSpec::builder()
//!     .root_name("demo")
//!     .base_dir("out")
//!     .module_id("example.com/demo")
//!     .app_name("svc")
//!     .build()?;
//!
//! let engine = ScaffoldEngine::new(store, renderer, filesystem, confirmation);
//! match engine.run(&spec)? {
//!     ScaffoldOutcome::Completed(summary) => println!("{}", summary.project_root.display()),
//!     ScaffoldOutcome::Aborted { .. } => println!("Aborted."),
//! }
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ScaffoldEngine, ScaffoldOutcome, ScaffoldSummary,
        ports::{Confirmation, Filesystem, ScaffoldObserver, TemplateRenderer, TemplateStore},
    };
    pub use crate::domain::{
        FileEntry, GenerationSpec, GenerationSpecBuilder, RelativePath, RenderContext,
        RenderedFile, TemplateMetadata, TemplateSet,
    };
    pub use crate::error::{EmbrygenError, EmbrygenResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
