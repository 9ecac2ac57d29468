//! Housing Forms: field extraction, validation and document generation
//! for the model tenancy agreement.

pub mod choices;
pub mod config;
pub mod deposit_schemes;
pub mod error;
pub mod extractor;
pub mod format;
pub mod render;
pub mod service;
pub mod template;
pub mod validation;

pub use config::FormsConfig;
pub use error::FormsError;
pub use extractor::ModelTenancyFieldExtractor;
pub use render::TeraDocumentRenderer;
pub use service::{DocumentGenerationService, GeneratedDocument};
pub use template::JsonTemplateLoader;
pub use validation::ModelTenancyValidator;
