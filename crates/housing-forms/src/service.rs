//! Document generation: extract fields from a validated tenancy and
//! render them into the agreement.

use housing_core::collaborators::{DocumentRenderer, FieldExtractor};
use housing_core::error::HousingResult;
use housing_core::models::tenancy::Tenancy;
use tracing::{info, info_span};
use uuid::Uuid;

use crate::config::FormsConfig;

/// A generated agreement ready to be sent as a download.
#[derive(Debug, Clone)]
pub struct GeneratedDocument {
    /// `<stem>.<extension>`, e.g. `your-tenancy-agreement.txt`.
    pub filename: String,
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

/// Generates agreements from submitted tenancies.
///
/// Generic over the extractor and renderer so that the template back-end
/// can change without touching the extraction rules.
pub struct DocumentGenerationService<E: FieldExtractor<Tenancy>, R: DocumentRenderer> {
    extractor: E,
    renderer: R,
    config: FormsConfig,
}

impl<E: FieldExtractor<Tenancy>, R: DocumentRenderer> DocumentGenerationService<E, R> {
    pub fn new(extractor: E, renderer: R, config: FormsConfig) -> Self {
        Self {
            extractor,
            renderer,
            config,
        }
    }

    /// Render the agreement for an already validated tenancy.
    pub fn generate(&self, tenancy: &Tenancy) -> HousingResult<GeneratedDocument> {
        let request_id = Uuid::new_v4();
        let _span = info_span!("generate_document", %request_id).entered();

        let fields = self.extractor.extract_fields(tenancy);
        let document = self.renderer.render(&fields)?;

        info!(
            fields = fields.len(),
            bytes = document.bytes.len(),
            "Generated model tenancy document"
        );

        Ok(GeneratedDocument {
            filename: format!("{}.{}", self.config.filename_stem, document.extension),
            content_type: document.content_type,
            bytes: document.bytes,
        })
    }
}
