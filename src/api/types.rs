// src/api/types.rs
use serde::Deserialize;
use utoipa::ToSchema;

use crate::models::StrengthLabel;

/// Value browsers send for a ticked checkbox
pub const CHECKBOX_ON: &str = "on";

// Generator form submission
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct GenerateForm {
    /// Password length (default: 12)
    pub length: Option<String>,
    /// `on` to include digits
    pub include_numbers: Option<String>,
    /// `on` to include punctuation
    pub include_symbols: Option<String>,
    /// `on` to append the password to the passwords file
    pub save_to_file: Option<String>,
}

impl GenerateForm {
    fn is_checked(field: &Option<String>) -> bool {
        field.as_deref() == Some(CHECKBOX_ON)
    }

    pub fn include_numbers(&self) -> bool {
        Self::is_checked(&self.include_numbers)
    }

    pub fn include_symbols(&self) -> bool {
        Self::is_checked(&self.include_symbols)
    }

    pub fn save_to_file(&self) -> bool {
        Self::is_checked(&self.save_to_file)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashCategory {
    Success,
    Error,
}

impl FlashCategory {
    pub fn css_class(&self) -> &'static str {
        match self {
            FlashCategory::Success => "success",
            FlashCategory::Error => "error",
        }
    }
}

/// One-shot notice shown above the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flash {
    pub category: FlashCategory,
    pub message: String,
}

impl Flash {
    pub fn success(message: impl Into<String>) -> Self {
        Self { category: FlashCategory::Success, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { category: FlashCategory::Error, message: message.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPassword {
    pub password: String,
    pub strength: StrengthLabel,
    pub saved: bool,
}

/// Everything the index page needs to render
#[derive(Debug, Clone)]
pub struct IndexPage {
    pub default_length: usize,
    pub flashes: Vec<Flash>,
    pub result: Option<GeneratedPassword>,
}
