use crate::utils::error::{FormError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_positive_number, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_MIN_PASSWORD_LENGTH: usize = 6;

/// 表單驗證規則，可由 TOML 檔案覆蓋
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ValidationRules {
    pub password: PasswordRules,
    pub email: EmailRules,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PasswordRules {
    pub min_length: usize,
}

impl Default for PasswordRules {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_PASSWORD_LENGTH,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmailRules {
    /// Substrings that must each appear somewhere in the address.
    pub required: Vec<String>,
}

impl Default for EmailRules {
    fn default() -> Self {
        Self {
            required: vec!["@".to_string(), ".".to_string()],
        }
    }
}

impl ValidationRules {
    /// 從 TOML 檔案載入規則
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(FormError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析規則並驗證
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let rules: Self = toml::from_str(content).map_err(|e| FormError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })?;
        rules.validate()?;
        Ok(rules)
    }
}

impl Validate for ValidationRules {
    fn validate(&self) -> Result<()> {
        validate_positive_number("password.min_length", self.password.min_length, 1)?;
        for fragment in &self.email.required {
            validate_non_empty_string("email.required", fragment)?;
        }
        Ok(())
    }
}
