//! Runs a parsed CLI command against the library.

use crate::config::rules::ValidationRules;
use crate::config::Command;
use crate::core::keys::keys_of_value;
use crate::core::sort::bubble_sort;
use crate::core::validation::{check_credentials, check_signup_form};
use crate::domain::model::{Credentials, SignupForm};
use crate::utils::error::{FormError, Result};
use crate::utils::input::{parse_json, read_json_file, read_numbers_csv};
use std::io::Write;

/// Executes `command`, writing its result to `out`.
///
/// Validation failures come back as `Err` so the caller can pick the exit
/// code; nothing is written for them.
pub fn run_command<W: Write>(command: &Command, rules: &ValidationRules, out: &mut W) -> Result<()> {
    match command {
        Command::Signup {
            name,
            email,
            password,
        } => {
            let form = SignupForm::new(name.as_str(), email.as_str(), password.as_str());
            tracing::debug!("Signup form: {:?}", form);
            check_signup_form(rules, &form)?;
            tracing::info!("✅ Signup form accepted");
            writeln!(out, "Signup form is valid")?;
        }
        Command::Login { email, password } => {
            let credentials = Credentials::new(email.as_str(), password.as_str());
            tracing::debug!("Login form: {:?}", credentials);
            check_credentials(rules, &credentials)?;
            tracing::info!("✅ Login form accepted");
            writeln!(out, "Login form is valid")?;
        }
        Command::Sort { values, input } => {
            let mut numbers = match input {
                Some(path) => {
                    tracing::info!("📁 Reading numbers from: {}", path);
                    read_numbers_csv(path)?
                }
                None => values.clone(),
            };
            if numbers.is_empty() {
                return Err(FormError::InputError {
                    message: "no numbers to sort".to_string(),
                });
            }
            bubble_sort(&mut numbers);
            let line: Vec<String> = numbers.iter().map(|n| n.to_string()).collect();
            writeln!(out, "{}", line.join(" "))?;
        }
        Command::Keys { json, input } => {
            let value = match (json, input) {
                (Some(content), _) => parse_json(content)?,
                (None, Some(path)) => {
                    tracing::info!("📁 Reading JSON from: {}", path);
                    read_json_file(path)?
                }
                (None, None) => {
                    return Err(FormError::InputError {
                        message: "provide --json or --input".to_string(),
                    })
                }
            };
            for key in keys_of_value(&value) {
                writeln!(out, "{}", key)?;
            }
        }
    }
    Ok(())
}

pub fn load_rules(path: Option<&str>) -> Result<ValidationRules> {
    match path {
        Some(path) => {
            tracing::info!("📁 Loading validation rules from: {}", path);
            ValidationRules::from_file(path)
        }
        None => Ok(ValidationRules::default()),
    }
}
