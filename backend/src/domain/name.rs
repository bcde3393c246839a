//! Person name value object.

use std::fmt;

/// Maximum length of each name part.
pub const NAME_MAX: usize = 255;

/// Validation errors returned by [`PersonName::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersonNameValidationError {
    /// A name part was empty or exceeded [`NAME_MAX`] characters.
    InvalidLength {
        /// Offending part, `first name` or `last name`.
        field: &'static str,
    },
}

impl fmt::Display for PersonNameValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength { field } => {
                write!(f, "{field} must be 1 to {NAME_MAX} characters")
            }
        }
    }
}

impl std::error::Error for PersonNameValidationError {}

/// Given and family name pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonName {
    first: String,
    last: String,
}

impl PersonName {
    /// Validate and construct a person name.
    pub fn new(
        first: impl Into<String>,
        last: impl Into<String>,
    ) -> Result<Self, PersonNameValidationError> {
        let first = validate_part(first.into(), "first name")?;
        let last = validate_part(last.into(), "last name")?;
        Ok(Self { first, last })
    }

    /// Given name.
    pub fn first(&self) -> &str {
        self.first.as_str()
    }

    /// Family name.
    pub fn last(&self) -> &str {
        self.last.as_str()
    }
}

fn validate_part(
    value: String,
    field: &'static str,
) -> Result<String, PersonNameValidationError> {
    let length = value.chars().count();
    if length == 0 || length > NAME_MAX || value.trim().is_empty() {
        return Err(PersonNameValidationError::InvalidLength { field });
    }
    Ok(value)
}
