use serde::{Deserialize, Serialize};
use std::fmt;

/// 任意欄位名稱到值的映射，保留插入順序
pub type Record = serde_json::Map<String, serde_json::Value>;

/// 登入表單輸入
#[derive(Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// 註冊表單輸入
#[derive(Clone, Serialize, Deserialize)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl SignupForm {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
        }
    }
}

// 密碼不得出現在日誌中
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl fmt::Debug for SignupForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignupForm")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_output_redacts_password() {
        let creds = Credentials::new("a@b.com", "hunter22");
        let debug = format!("{:?}", creds);
        assert!(debug.contains("a@b.com"));
        assert!(!debug.contains("hunter22"));

        let form = SignupForm::new("Anirudha", "a@b.com", "hunter22");
        let debug = format!("{:?}", form);
        assert!(debug.contains("Anirudha"));
        assert!(!debug.contains("hunter22"));
    }

    #[test]
    fn test_credentials_deserialize() {
        let creds: Credentials =
            serde_json::from_str(r#"{"email":"a@b.com","password":"abcdef"}"#).unwrap();
        assert_eq!(creds.email, "a@b.com");
        assert_eq!(creds.password, "abcdef");
    }
}
