//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `embrygen-adapters` implement
//! these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: File operations
//!   - `TemplateStore`: Template set retrieval
//!   - `TemplateRenderer`: Template rendering
//!   - `Confirmation`: Yes/no gate before destructive removal
//!   - `ScaffoldObserver`: Progress reporting

pub mod output;

pub use output::{
    Confirmation, Filesystem, NoopObserver, ScaffoldObserver, TemplateRenderer, TemplateStore,
};

#[cfg(test)]
pub use output::{MockConfirmation, MockFilesystem, MockTemplateRenderer, MockTemplateStore};
