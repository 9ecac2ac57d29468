//! Loads the blank model tenancy served to the form front end.

use std::path::PathBuf;

use housing_core::collaborators::TemplateLoader;
use housing_core::error::HousingResult;
use housing_core::models::tenancy::Tenancy;
use tracing::error;

use crate::error::FormsError;

const BUILT_IN_TEMPLATE: &str = include_str!("../resources/model-tenancy-template.json");

/// Reads the blank tenancy from JSON, either the built-in resource or a
/// file on disk. The file is re-read on every call so edits are picked up
/// without a restart.
#[derive(Debug, Clone, Default)]
pub struct JsonTemplateLoader {
    path: Option<PathBuf>,
}

impl JsonTemplateLoader {
    pub fn built_in() -> Self {
        Self { path: None }
    }

    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    fn read(&self) -> Result<Tenancy, FormsError> {
        let tenancy = match &self.path {
            Some(path) => {
                let json = std::fs::read_to_string(path).map_err(|source| FormsError::Io {
                    path: path.display().to_string(),
                    source,
                })?;
                serde_json::from_str(&json)?
            }
            None => serde_json::from_str(BUILT_IN_TEMPLATE)?,
        };
        Ok(tenancy)
    }
}

impl TemplateLoader<Tenancy> for JsonTemplateLoader {
    fn load_template(&self) -> HousingResult<Tenancy> {
        self.read().map_err(|e| {
            error!(error = %e, "Failed to load model tenancy template");
            e.into()
        })
    }
}
