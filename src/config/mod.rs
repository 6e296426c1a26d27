pub mod cli;
pub mod customize;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_lang_code, validate_non_empty_string, validate_path, Validate,
};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "tab2opf")]
#[command(about = "Convert a tab-delimited word list into a Kindle dictionary package")]
pub struct CliConfig {
    /// Input tab file, one `term<TAB>definition` per line
    pub file: String,

    #[arg(long, help = "Title of the dictionary")]
    pub title: String,

    #[arg(long, default_value = "en", help = "Source language code (e.g. en, fr, de)")]
    pub source: String,

    #[arg(long, default_value = "en", help = "Target language code (e.g. en, fr, de)")]
    pub target: String,

    #[arg(
        long,
        help = "TOML customization module providing mapping, key and def transforms"
    )]
    pub module: Option<String>,

    #[arg(long, default_value = ".", help = "Directory the dictionary files are written to")]
    pub output_path: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn input_file(&self) -> &str {
        &self.file
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn source_lang(&self) -> &str {
        &self.source
    }

    fn target_lang(&self) -> &str {
        &self.target
    }

    fn verbose(&self) -> bool {
        self.verbose
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("file", &self.file)?;
        validate_non_empty_string("title", &self.title)?;
        validate_lang_code("source", &self.source)?;
        validate_lang_code("target", &self.target)?;
        validate_path("output_path", &self.output_path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> CliConfig {
        CliConfig {
            file: "words.tab".to_string(),
            title: "Test Dictionary".to_string(),
            source: "en".to_string(),
            target: "fr".to_string(),
            module: None,
            output_path: ".".to_string(),
            verbose: false,
        }
    }

    #[test]
    fn test_valid_config() {
        assert!(config().validate().is_ok());
    }

    #[test]
    fn test_empty_title_rejected() {
        let mut c = config();
        c.title = "  ".to_string();
        assert!(c.validate().is_err());
    }

    #[test]
    fn test_bad_lang_code_rejected() {
        let mut c = config();
        c.source = "en US".to_string();
        assert!(c.validate().is_err());
    }
}
