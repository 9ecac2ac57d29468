use std::path::PathBuf;

use housing_forms::FormsConfig;

#[derive(clap::Parser, Debug, Clone)]
#[command(name = "housing-server", about = "Model tenancy agreement service")]
pub struct ServeArgs {
    #[arg(
        long,
        short,
        default_value = "0.0.0.0:8080",
        env = "HOUSING_LISTEN",
        help = "The address to listen on"
    )]
    pub listen: String,

    #[arg(
        long,
        env = "HOUSING_TEMPLATE_JSON",
        help = "Blank tenancy JSON to serve instead of the built-in one"
    )]
    pub template_json: Option<PathBuf>,

    #[arg(
        long,
        env = "HOUSING_DOCUMENT_TEMPLATE",
        help = "Tera agreement template to render instead of the built-in one"
    )]
    pub document_template: Option<PathBuf>,

    #[arg(
        long,
        default_value = "your-tenancy-agreement",
        env = "HOUSING_FILENAME_STEM",
        help = "Download filename, without extension"
    )]
    pub filename_stem: String,
}

impl ServeArgs {
    pub fn forms_config(&self) -> FormsConfig {
        FormsConfig {
            filename_stem: self.filename_stem.clone(),
            template_json_path: self.template_json.clone(),
            document_template_path: self.document_template.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn defaults_match_forms_config() {
        let args = ServeArgs::try_parse_from(["housing-server"]).unwrap();
        assert_eq!(args.listen, "0.0.0.0:8080");

        let config = args.forms_config();
        let default = FormsConfig::default();
        assert_eq!(config.filename_stem, default.filename_stem);
        assert!(config.template_json_path.is_none());
        assert!(config.document_template_path.is_none());
    }

    #[test]
    fn paths_are_passed_through() {
        let args = ServeArgs::try_parse_from([
            "housing-server",
            "--template-json",
            "/etc/housing/template.json",
            "--filename-stem",
            "agreement",
        ])
        .unwrap();

        let config = args.forms_config();
        assert_eq!(
            config.template_json_path,
            Some(PathBuf::from("/etc/housing/template.json"))
        );
        assert_eq!(config.filename_stem, "agreement");
    }
}
