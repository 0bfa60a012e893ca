use crate::domain::{
    entities::{GenerationSpec, ProjectStructure, TemplateSet},
    error::DomainError,
};

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across entities.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_spec(spec: &GenerationSpec) -> Result<(), DomainError> {
        spec.validate()
    }

    pub fn validate_template_set(set: &TemplateSet) -> Result<(), DomainError> {
        set.validate()
    }

    pub fn validate_project_structure(structure: &ProjectStructure) -> Result<(), DomainError> {
        structure.validate()
    }
}
