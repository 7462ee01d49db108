//! Field validation shared by every entity.
use crate::errors::ModelError;

pub const CODE_MAX_LEN: usize = 32;

pub fn require_text(field: &str, value: &str) -> Result<(), ModelError> {
    if value.trim().is_empty() {
        return Err(ModelError::Validation(format!("{} is required", field)));
    }
    Ok(())
}

pub fn validate_max_len(field: &str, value: &str, max: usize) -> Result<(), ModelError> {
    if value.chars().count() > max {
        return Err(ModelError::Validation(format!("{} must be at most {} characters", field, max)));
    }
    Ok(())
}

/// Codes are short identifiers: letters, digits, `-` and `_`.
pub fn validate_code(value: &str) -> Result<(), ModelError> {
    require_text("code", value)?;
    validate_max_len("code", value, CODE_MAX_LEN)?;
    if !value.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_') {
        return Err(ModelError::Validation("code may only contain letters, digits, '-' and '_'".into()));
    }
    Ok(())
}

pub fn validate_name(value: &str) -> Result<(), ModelError> {
    require_text("name", value)?;
    validate_max_len("name", value, 128)
}

pub fn validate_email(value: Option<&str>) -> Result<(), ModelError> {
    match value {
        Some(email) if !email.contains('@') => Err(ModelError::Validation("invalid email".into())),
        _ => Ok(()),
    }
}

/// ISO 3166 alpha-2 or alpha-3.
pub fn validate_country_code(value: Option<&str>) -> Result<(), ModelError> {
    match value {
        Some(code) if !(2..=3).contains(&code.len()) || !code.chars().all(|c| c.is_ascii_uppercase()) => {
            Err(ModelError::Validation("countryCode must be 2 or 3 uppercase letters".into()))
        }
        _ => Ok(()),
    }
}
