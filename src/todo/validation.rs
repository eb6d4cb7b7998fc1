use thiserror::Error;

/// Minimum number of characters in a description, not counting surrounding whitespace.
pub const MIN_DESCRIPTION_LEN: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("description is required")]
    Missing,
    #[error("description must not be blank")]
    Blank,
    #[error("description must be at least {min} characters (got {length})")]
    TooShort { length: usize, min: usize },
}

/// Check a candidate description. `None` models a payload without one.
///
/// Returns the text unchanged when it is acceptable.
pub fn validate_description(raw: Option<&str>) -> Result<&str, ValidationError> {
    let text = raw.ok_or(ValidationError::Missing)?;
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Blank);
    }

    let length = trimmed.chars().count();
    if length < MIN_DESCRIPTION_LEN {
        return Err(ValidationError::TooShort {
            length,
            min: MIN_DESCRIPTION_LEN,
        });
    }

    Ok(text)
}
