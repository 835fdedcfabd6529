use thiserror::Error;

/// 錯誤分類，用於決定 CLI 的退出碼
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Input,
    Config,
}

#[derive(Error, Debug)]
pub enum FormError {
    #[error("Please enter a valid email")]
    InvalidEmail,

    #[error("Password must be at least {min_length} characters long")]
    PasswordTooShort { min_length: usize },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid input: {message}")]
    InputError { message: String },
}

impl FormError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            FormError::InvalidEmail | FormError::PasswordTooShort { .. } => {
                ErrorCategory::Validation
            }
            FormError::ConfigError { .. } | FormError::InvalidConfigValueError { .. } => {
                ErrorCategory::Config
            }
            FormError::IoError(_)
            | FormError::CsvError(_)
            | FormError::JsonError(_)
            | FormError::InputError { .. } => ErrorCategory::Input,
        }
    }

    /// 表單驗證失敗 (相對於輸入或配置錯誤)
    pub fn is_validation_failure(&self) -> bool {
        self.category() == ErrorCategory::Validation
    }

    /// 給終端使用者看的訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            FormError::InvalidEmail | FormError::PasswordTooShort { .. } => self.to_string(),
            FormError::IoError(e) => format!("Could not read input: {}", e),
            FormError::CsvError(e) => format!("Could not parse CSV input: {}", e),
            FormError::JsonError(e) => format!("Could not parse JSON input: {}", e),
            FormError::ConfigError { message } => format!("Invalid rules file: {}", message),
            FormError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid rules file: {} {}", field, reason.to_lowercase())
            }
            FormError::InputError { message } => message.clone(),
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Validation => 1,
            ErrorCategory::Input | ErrorCategory::Config => 2,
        }
    }
}

pub type Result<T> = std::result::Result<T, FormError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_messages_match_form_alerts() {
        assert_eq!(FormError::InvalidEmail.to_string(), "Please enter a valid email");
        assert_eq!(
            FormError::PasswordTooShort { min_length: 6 }.to_string(),
            "Password must be at least 6 characters long"
        );
    }

    #[test]
    fn test_exit_codes_by_category() {
        assert_eq!(FormError::InvalidEmail.exit_code(), 1);
        assert!(FormError::InvalidEmail.is_validation_failure());

        let err = FormError::InputError {
            message: "no numbers given".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Input);
        assert_eq!(err.exit_code(), 2);
        assert!(!err.is_validation_failure());

        let err = FormError::ConfigError {
            message: "bad".to_string(),
        };
        assert_eq!(err.exit_code(), 2);
    }
}
