//! Template pack sources.
//!
//! A pack is a `template.toml` manifest plus the asset bodies it names.
//! [`EmbeddedTemplates`] ships the EmbryGo pack inside the binary;
//! [`FilesystemTemplateLoader`] reads a pack from a directory.

mod embedded;
mod loader;
pub mod manifest;

pub use embedded::EmbeddedTemplates;
pub use loader::{ASSETS_DIR, FilesystemTemplateLoader, MANIFEST_FILE};
pub use manifest::TemplateManifest;
