use std::sync::Arc;

use housing_core::collaborators::{TemplateLoader, Validator};
use housing_core::models::tenancy::Tenancy;
use housing_forms::{
    DocumentGenerationService, FormsConfig, FormsError, JsonTemplateLoader,
    ModelTenancyFieldExtractor, ModelTenancyValidator, TeraDocumentRenderer,
};

pub type ModelTenancyGenerator =
    DocumentGenerationService<ModelTenancyFieldExtractor, TeraDocumentRenderer>;

/// Read-only collaborators shared by every request.
#[derive(Clone)]
pub struct AppState {
    pub template_loader: Arc<dyn TemplateLoader<Tenancy>>,
    pub validator: Arc<dyn Validator<Tenancy>>,
    pub generator: Arc<ModelTenancyGenerator>,
}

impl AppState {
    pub fn new(
        template_loader: Arc<dyn TemplateLoader<Tenancy>>,
        validator: Arc<dyn Validator<Tenancy>>,
        generator: Arc<ModelTenancyGenerator>,
    ) -> Self {
        Self {
            template_loader,
            validator,
            generator,
        }
    }

    /// Wire the default collaborators. Compiles the agreement template
    /// up front so a broken template fails start-up rather than requests.
    pub fn from_config(config: FormsConfig) -> Result<Self, FormsError> {
        let template_loader = match &config.template_json_path {
            Some(path) => JsonTemplateLoader::from_path(path),
            None => JsonTemplateLoader::built_in(),
        };
        let renderer = match &config.document_template_path {
            Some(path) => TeraDocumentRenderer::from_path(path)?,
            None => TeraDocumentRenderer::built_in()?,
        };
        let generator =
            DocumentGenerationService::new(ModelTenancyFieldExtractor::new(), renderer, config);

        Ok(Self::new(
            Arc::new(template_loader),
            Arc::new(ModelTenancyValidator::new()),
            Arc::new(generator),
        ))
    }
}
