//! Error types for the housing forms service.

use thiserror::Error;

/// A single rule a submitted form failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Name of the offending form field (camelCase, as submitted).
    pub field: String,
    pub message: String,
}

impl Violation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum HousingError {
    #[error("Failed to load model tenancy template: {0}")]
    TemplateLoad(String),

    #[error("Validation failed with {} violation(s)", violations.len())]
    Validation { violations: Vec<Violation> },

    #[error("Document generation failed: {0}")]
    DocumentGeneration(String),

    /// The request body could not be read as a tenancy.
    #[error("Malformed request body: {0}")]
    MalformedRequest(String),
}

pub type HousingResult<T> = Result<T, HousingError>;
