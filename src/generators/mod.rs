// src/generators/mod.rs
use thiserror::Error;

mod password;
mod strength;

pub use password::{PasswordGenerator, generate_password};
pub use strength::check_strength;

/// Longest password a single request may ask for.
pub const MAX_PASSWORD_LENGTH: usize = 100_000;

/// Invalid-argument conditions raised before any password is drawn.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("Length must be greater than 0!")]
    NonPositiveLength(i64),

    #[error("Please enter a valid number!")]
    InvalidNumber(String),

    #[error("Length must be at most {max}!")]
    LengthTooLarge { length: i64, max: usize },
}
