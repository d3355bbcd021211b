use crate::domain::{entities::OutputLayout, error::DomainError};

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across callers.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_layout(layout: &OutputLayout) -> Result<(), DomainError> {
        layout.validate()?;
        if layout.config_root() == layout.cache_root() {
            return Err(DomainError::InvalidLayout(format!(
                "config and cache roots are both '{}'",
                layout.config_root().display()
            )));
        }
        Ok(())
    }
}
