//! Forms-layer error types and conversions.

use std::error::Error as _;

use housing_core::error::HousingError;

#[derive(Debug, thiserror::Error)]
pub enum FormsError {
    #[error("template JSON is malformed: {0}")]
    TemplateParse(#[from] serde_json::Error),

    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("render error: {0}")]
    Render(#[from] tera::Error),
}

impl From<FormsError> for HousingError {
    fn from(err: FormsError) -> Self {
        match err {
            FormsError::Render(e) => HousingError::DocumentGeneration(render_chain(&e)),
            other => HousingError::TemplateLoad(other.to_string()),
        }
    }
}

/// Tera nests the useful message in the source chain.
fn render_chain(err: &tera::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
