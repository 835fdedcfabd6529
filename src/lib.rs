#[cfg(feature = "cli")]
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::{CliConfig, Command};
pub use crate::config::ValidationRules;

pub use crate::core::keys::{keys_of, keys_of_value};
pub use crate::core::sort::bubble_sort;
pub use crate::core::validation::{
    is_valid_login, is_valid_signup, validate_login, validate_login_with, validate_signup,
    validate_signup_with,
};
pub use crate::domain::model::{Credentials, Record, SignupForm};
pub use crate::utils::error::{FormError, Result};
