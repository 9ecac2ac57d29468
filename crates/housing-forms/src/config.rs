//! Document generation configuration.

use std::path::PathBuf;

/// Configuration for the forms layer.
#[derive(Debug, Clone)]
pub struct FormsConfig {
    /// Download filename without extension (default: `your-tenancy-agreement`).
    pub filename_stem: String,
    /// Blank tenancy JSON served to clients. `None` uses the built-in one.
    pub template_json_path: Option<PathBuf>,
    /// Tera template for the agreement. `None` uses the built-in one.
    pub document_template_path: Option<PathBuf>,
}

impl Default for FormsConfig {
    fn default() -> Self {
        Self {
            filename_stem: "your-tenancy-agreement".into(),
            template_json_path: None,
            document_template_path: None,
        }
    }
}
