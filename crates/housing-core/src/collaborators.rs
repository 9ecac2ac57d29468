//! Collaborator trait definitions.
//!
//! The HTTP resource and the document generation service are written
//! against these traits so that validation rules, template sources and
//! rendering back-ends can be swapped without touching them. All
//! operations are synchronous and in-memory.

use crate::error::HousingResult;
use crate::fields::Fields;

/// Flattens a form model into template placeholder values.
///
/// Implementations are total: malformed or missing optional data degrades
/// to empty or placeholder values instead of failing.
pub trait FieldExtractor<T>: Send + Sync {
    fn extract_fields(&self, model: &T) -> Fields;
}

/// Validates a submitted form model as a whole.
///
/// Returns `HousingError::Validation` listing every violation found.
pub trait Validator<T>: Send + Sync {
    fn validate(&self, model: &T) -> HousingResult<()>;
}

/// Supplies the blank form structure served to clients.
pub trait TemplateLoader<T>: Send + Sync {
    fn load_template(&self) -> HousingResult<T>;
}

/// A rendered document ready to be returned as a download.
#[derive(Debug, Clone)]
pub struct RenderedDocument {
    pub bytes: Vec<u8>,
    /// MIME type, e.g. `text/plain; charset=utf-8`.
    pub content_type: &'static str,
    /// File extension without the dot.
    pub extension: &'static str,
}

/// Substitutes extracted fields into a document template.
pub trait DocumentRenderer: Send + Sync {
    fn render(&self, fields: &Fields) -> HousingResult<RenderedDocument>;
}
