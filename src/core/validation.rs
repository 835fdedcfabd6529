//! Signup and login form validators.
//!
//! Each check returns the message the form would show to the user as a
//! [`FormError`]. The boolean variants are for callers that only need
//! pass/fail.

use crate::config::rules::ValidationRules;
use crate::domain::model::{Credentials, SignupForm};
use crate::utils::error::{FormError, Result};
use crate::utils::validation::{char_length, contains_all, has_min_length};

/// Password must have at least `rules.password.min_length` characters.
pub fn validate_signup_with(rules: &ValidationRules, password: &str) -> Result<()> {
    tracing::debug!("Validating signup password ({} chars)", char_length(password));
    check_password(rules, password)
}

pub fn validate_signup(password: &str) -> Result<()> {
    validate_signup_with(&ValidationRules::default(), password)
}

pub fn is_valid_signup(password: &str) -> bool {
    validate_signup(password).is_ok()
}

/// Email is checked first; only the first failure is reported.
pub fn validate_login_with(rules: &ValidationRules, email: &str, password: &str) -> Result<()> {
    tracing::debug!("Validating login for email: {}", email);

    if !contains_all(email, &rules.email.required) {
        tracing::warn!("⚠️ Login rejected: email '{}' is missing a required character", email);
        return Err(FormError::InvalidEmail);
    }

    check_password(rules, password)
}

pub fn validate_login(email: &str, password: &str) -> Result<()> {
    validate_login_with(&ValidationRules::default(), email, password)
}

pub fn is_valid_login(email: &str, password: &str) -> bool {
    validate_login(email, password).is_ok()
}

pub fn check_signup_form(rules: &ValidationRules, form: &SignupForm) -> Result<()> {
    validate_signup_with(rules, &form.password)
}

pub fn check_credentials(rules: &ValidationRules, credentials: &Credentials) -> Result<()> {
    validate_login_with(rules, &credentials.email, &credentials.password)
}

fn check_password(rules: &ValidationRules, password: &str) -> Result<()> {
    let min_length = rules.password.min_length;
    if !has_min_length(password, min_length) {
        tracing::warn!("⚠️ Password rejected: shorter than {} characters", min_length);
        return Err(FormError::PasswordTooShort { min_length });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signup_password_length_boundary() {
        assert!(!is_valid_signup(""));
        assert!(!is_valid_signup("abcde"));
        assert!(is_valid_signup("abcdef"));
        assert!(is_valid_signup("a much longer password"));
    }

    #[test]
    fn test_signup_failure_message() {
        let err = validate_signup("abc").unwrap_err();
        assert_eq!(err.to_string(), "Password must be at least 6 characters long");
    }

    #[test]
    fn test_login_examples() {
        assert!(is_valid_login("a@b.com", "abcdef"));
        assert!(!is_valid_login("abc", "abcdef"));
        assert!(!is_valid_login("a@b.com", "abc"));
    }

    #[test]
    fn test_login_email_check_is_position_independent() {
        // 只檢查字元是否存在，不檢查格式
        assert!(is_valid_login(".@", "abcdef"));
        assert!(is_valid_login("x.y@z", "abcdef"));
        assert!(!is_valid_login("a@bcom", "abcdef"));
        assert!(!is_valid_login("a.b.com", "abcdef"));
    }

    #[test]
    fn test_login_reports_email_before_password() {
        let err = validate_login("abc", "x").unwrap_err();
        assert!(matches!(err, FormError::InvalidEmail));

        let err = validate_login("a@b.com", "x").unwrap_err();
        assert!(matches!(err, FormError::PasswordTooShort { min_length: 6 }));
    }

    #[test]
    fn test_custom_rules() {
        let mut rules = ValidationRules::default();
        rules.password.min_length = 8;
        rules.email.required = vec!["@".to_string()];

        assert!(validate_signup_with(&rules, "abcdefg").is_err());
        assert!(validate_signup_with(&rules, "abcdefgh").is_ok());
        assert!(validate_login_with(&rules, "user@localhost", "abcdefgh").is_ok());

        let err = validate_signup_with(&rules, "short").unwrap_err();
        assert_eq!(err.to_string(), "Password must be at least 8 characters long");
    }

    #[test]
    fn test_form_wrappers() {
        let rules = ValidationRules::default();
        let form = SignupForm::new("Anirudha", "not-an-email", "abcdef");
        // 註冊只檢查密碼
        assert!(check_signup_form(&rules, &form).is_ok());

        let creds = Credentials::new("not-an-email", "abcdef");
        assert!(matches!(
            check_credentials(&rules, &creds),
            Err(FormError::InvalidEmail)
        ));
    }
}
