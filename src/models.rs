// src/models.rs
use std::fmt;

use chrono::NaiveDate;
use serde::{Serialize, Deserialize};
use utoipa::ToSchema;

use crate::generators::{GeneratorError, MAX_PASSWORD_LENGTH};

/// Length used by the web form when the field is left out.
pub const DEFAULT_FORM_LENGTH: usize = 12;

// Password generation options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationRequest {
    length: usize,
    pub include_numbers: bool,
    pub include_symbols: bool,
}

impl GenerationRequest {
    /// Build a request, rejecting non-positive lengths and lengths above
    /// `MAX_PASSWORD_LENGTH`.
    pub fn new(length: i64, include_numbers: bool, include_symbols: bool) -> Result<Self, GeneratorError> {
        if length <= 0 {
            return Err(GeneratorError::NonPositiveLength(length));
        }

        let too_large = GeneratorError::LengthTooLarge { length, max: MAX_PASSWORD_LENGTH };
        let length = match usize::try_from(length) {
            Ok(length) if length <= MAX_PASSWORD_LENGTH => length,
            _ => return Err(too_large),
        };

        Ok(Self {
            length,
            include_numbers,
            include_symbols,
        })
    }

    /// Build a request from raw user text (prompt input or a form field).
    pub fn parse(raw_length: &str, include_numbers: bool, include_symbols: bool) -> Result<Self, GeneratorError> {
        let trimmed = raw_length.trim();
        let length: i64 = trimmed
            .parse()
            .map_err(|_| GeneratorError::InvalidNumber(trimmed.to_string()))?;

        Self::new(length, include_numbers, include_symbols)
    }

    pub fn length(&self) -> usize {
        self.length
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum StrengthLabel {
    Weak,
    Medium,
    Strong,
}

impl fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrengthLabel::Weak => write!(f, "Weak"),
            StrengthLabel::Medium => write!(f, "Medium"),
            StrengthLabel::Strong => write!(f, "Strong"),
        }
    }
}

/// Contents of the stats file. Both fields are optional on read so that
/// hand-edited or partial files still load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u64>,
}

impl StatsRecord {
    pub fn for_day(date: NaiveDate, count: u64) -> Self {
        Self {
            date: Some(date),
            count: Some(count),
        }
    }
}

/// Downloadable view of the stats file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct StatsSnapshot {
    /// Day the stored count belongs to (YYYY-MM-DD)
    #[schema(value_type = String, example = "2024-01-31")]
    pub date: NaiveDate,
    /// Generations recorded for `date`
    pub count: u64,
    /// Server's current day (YYYY-MM-DD)
    #[schema(value_type = String, example = "2024-01-31")]
    pub current_date: NaiveDate,
}
