//! Renders the agreement by substituting extracted fields into a Tera
//! template.

use std::path::Path;

use housing_core::collaborators::{DocumentRenderer, RenderedDocument};
use housing_core::error::HousingResult;
use housing_core::fields::Fields;
use tera::{Context, Tera};

use crate::error::FormsError;

const TEMPLATE_NAME: &str = "model-tenancy.txt";
const BUILT_IN_TEMPLATE: &str = include_str!("../resources/model-tenancy.txt.tera");

/// Plain-text renderer backed by a single pre-compiled Tera template.
///
/// Show/hide fields are used directly in `{% if %}` blocks: the empty
/// string is falsy, a single space is truthy.
pub struct TeraDocumentRenderer {
    tera: Tera,
}

impl TeraDocumentRenderer {
    /// Compile the built-in agreement template.
    pub fn built_in() -> Result<Self, FormsError> {
        Self::from_source(BUILT_IN_TEMPLATE)
    }

    pub fn from_path(path: &Path) -> Result<Self, FormsError> {
        let source = std::fs::read_to_string(path).map_err(|source| FormsError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_source(&source)
    }

    pub fn from_source(source: &str) -> Result<Self, FormsError> {
        let mut tera = Tera::default();
        tera.add_raw_template(TEMPLATE_NAME, source)?;
        Ok(Self { tera })
    }

    fn render_text(&self, fields: &Fields) -> Result<String, FormsError> {
        let context = Context::from_serialize(fields)?;
        Ok(self.tera.render(TEMPLATE_NAME, &context)?)
    }
}

impl DocumentRenderer for TeraDocumentRenderer {
    fn render(&self, fields: &Fields) -> HousingResult<RenderedDocument> {
        let text = self.render_text(fields)?;
        Ok(RenderedDocument {
            bytes: text.into_bytes(),
            content_type: "text/plain; charset=utf-8",
            extension: "txt",
        })
    }
}
