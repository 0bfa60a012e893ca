pub mod common;
pub mod plan;
pub mod project_structure;
pub mod spec;
pub mod template;

pub use crate::domain::DomainError;
pub use plan::{DirEntry, DirectoryPlan, DirectoryPlanner};
pub use project_structure::{ProjectStructure, RenderedFile};
pub use spec::{GenerationSpec, GenerationSpecBuilder};
pub use template::{FileEntry, RenderContext, TemplateSet};
