use thiserror::Error;

#[derive(Error, Debug)]
pub enum DictError {
    #[error("Bad line: '{line}'")]
    BadLine { line: String },

    #[error("Missing key for term '{term}'")]
    MissingKey { term: String },

    #[error("Missing definition for term '{term}'")]
    MissingDefinition { term: String },

    #[error("Customization module '{path}': {reason}")]
    ModuleError { path: String, reason: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Module parse error: {0}")]
    TomlError(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, DictError>;
