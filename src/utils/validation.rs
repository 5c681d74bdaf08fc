use crate::utils::error::{CodegenError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(CodegenError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(CodegenError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CodegenError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Checks that a file name template carries its substitution placeholder,
/// e.g. `ELP{index}.txt` must contain `{index}`.
pub fn validate_template(field_name: &str, template: &str, placeholder: &str) -> Result<()> {
    validate_path(field_name, template)?;

    if !template.contains(placeholder) {
        return Err(CodegenError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: template.to_string(),
            reason: format!("Template must contain the {} placeholder", placeholder),
        });
    }

    if template.contains('/') || template.contains('\\') {
        return Err(CodegenError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: template.to_string(),
            reason: "Template must be a bare file name, not a path".to_string(),
        });
    }

    Ok(())
}

pub fn is_rust_identifier(value: &str) -> bool {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) if first == '_' || first.is_ascii_alphabetic() => {
            value != "_" && chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
        }
        _ => false,
    }
}

pub fn validate_rust_identifier(field_name: &str, value: &str) -> Result<()> {
    if !is_rust_identifier(value) {
        return Err(CodegenError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value must be a Rust identifier".to_string(),
        });
    }
    Ok(())
}

/// Accepts module paths such as `super::elp_types` or `crate::ephemeris::moon`.
pub fn validate_rust_path(field_name: &str, value: &str) -> Result<()> {
    validate_non_empty_string(field_name, value)?;

    if !value.split("::").all(is_rust_identifier) {
        return Err(CodegenError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value must be a '::'-separated Rust module path".to_string(),
        });
    }
    Ok(())
}
