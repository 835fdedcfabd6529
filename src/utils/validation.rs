use crate::utils::error::{FormError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// 以 Unicode 字元數計算長度
pub fn char_length(value: &str) -> usize {
    value.chars().count()
}

pub fn has_min_length(value: &str, min_length: usize) -> bool {
    char_length(value) >= min_length
}

/// 每個片段都必須出現在字串中，位置不限
pub fn contains_all(value: &str, fragments: &[String]) -> bool {
    fragments.iter().all(|fragment| value.contains(fragment.as_str()))
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(FormError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(FormError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty".to_string(),
        });
    }
    Ok(())
}
