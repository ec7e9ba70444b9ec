use thiserror::Error;

use super::activity::Activity;

/// Validation errors for activity drafts and form input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("activity name cannot be blank")]
    BlankName,
    #[error("calories must be greater than zero")]
    ZeroCalories,
    #[error("not a number: {0}")]
    NotANumber(String),
}

/// Validates an activity: the trimmed name must be non-empty and calories positive.
///
/// The category is not checked.
pub fn validate_activity(activity: &Activity) -> Result<(), ValidationError> {
    if activity.name.trim().is_empty() {
        return Err(ValidationError::BlankName);
    }
    if activity.calories == 0 {
        return Err(ValidationError::ZeroCalories);
    }
    Ok(())
}

/// Parses numeric input text. Surrounding whitespace is ignored and blank input is zero.
pub fn parse_number(raw: &str) -> Result<u32, ValidationError> {
    match raw.trim() {
        "" => Ok(0),
        s => s
            .parse()
            .map_err(|_| ValidationError::NotANumber(raw.to_string())),
    }
}
