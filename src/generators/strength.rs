use crate::models::StrengthLabel;

const MEDIUM_MIN_LENGTH: usize = 6;
const STRONG_MIN_LENGTH: usize = 10;

/// Classify a password by its character count alone.
pub fn check_strength(password: &str) -> StrengthLabel {
    let length = password.chars().count();

    if length < MEDIUM_MIN_LENGTH {
        StrengthLabel::Weak
    } else if length < STRONG_MIN_LENGTH {
        StrengthLabel::Medium
    } else {
        StrengthLabel::Strong
    }
}
