pub mod keys;
pub mod sort;
pub mod validation;

pub use crate::domain::model::{Credentials, Record, SignupForm};
pub use crate::utils::error::Result;
