use crate::utils::error::{DictError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(DictError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(DictError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(DictError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_lang_code(field_name: &str, code: &str) -> Result<()> {
    if code.is_empty() {
        return Err(DictError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: code.to_string(),
            reason: "Language code cannot be empty".to_string(),
        });
    }

    if !code.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
        return Err(DictError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: code.to_string(),
            reason: "Language code may only contain ASCII letters, digits and '-'".to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("title", "My Dictionary").is_ok());
        assert!(validate_non_empty_string("title", "").is_err());
        assert!(validate_non_empty_string("title", "   ").is_err());
    }

    #[test]
    fn test_validate_path() {
        assert!(validate_path("output_path", ".").is_ok());
        assert!(validate_path("output_path", "").is_err());
        assert!(validate_path("output_path", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_lang_code() {
        assert!(validate_lang_code("source", "en").is_ok());
        assert!(validate_lang_code("source", "pt-BR").is_ok());
        assert!(validate_lang_code("source", "").is_err());
        assert!(validate_lang_code("source", "en_US").is_err());
    }
}
