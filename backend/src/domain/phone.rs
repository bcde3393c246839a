//! Phone number value object.

use std::fmt;

/// Validation errors returned by [`PhoneNumber::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhoneValidationError {
    /// A segment was empty or contained a non-digit character.
    InvalidSegment {
        /// Offending segment name.
        segment: &'static str,
    },
}

impl fmt::Display for PhoneValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSegment { segment } => {
                write!(f, "phone {segment} must be one or more digits")
            }
        }
    }
}

impl std::error::Error for PhoneValidationError {}

/// Phone number split into its dialling segments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneNumber {
    area_code: String,
    local_code: String,
    subscriber_number: String,
}

impl PhoneNumber {
    /// Validate and construct a phone number.
    pub fn new(
        area_code: impl Into<String>,
        local_code: impl Into<String>,
        subscriber_number: impl Into<String>,
    ) -> Result<Self, PhoneValidationError> {
        let area_code = validate_segment(area_code.into(), "area code")?;
        let local_code = validate_segment(local_code.into(), "local code")?;
        let subscriber_number = validate_segment(subscriber_number.into(), "subscriber number")?;
        Ok(Self {
            area_code,
            local_code,
            subscriber_number,
        })
    }

    /// Area code segment.
    pub fn area_code(&self) -> &str {
        self.area_code.as_str()
    }

    /// Local exchange segment.
    pub fn local_code(&self) -> &str {
        self.local_code.as_str()
    }

    /// Subscriber segment.
    pub fn subscriber_number(&self) -> &str {
        self.subscriber_number.as_str()
    }
}

fn validate_segment(
    value: String,
    segment: &'static str,
) -> Result<String, PhoneValidationError> {
    if value.is_empty() || !value.chars().all(|ch| ch.is_ascii_digit()) {
        return Err(PhoneValidationError::InvalidSegment { segment });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn accepts_numeric_segments() {
        let phone = PhoneNumber::new("03", "1234", "5678").expect("valid phone");
        assert_eq!(phone.area_code(), "03");
        assert_eq!(phone.local_code(), "1234");
        assert_eq!(phone.subscriber_number(), "5678");
    }

    #[rstest]
    #[case("", "1234", "5678", "area code")]
    #[case("03", "12a4", "5678", "local code")]
    #[case("03", "1234", "56 78", "subscriber number")]
    fn rejects_non_numeric_segments(
        #[case] area: &str,
        #[case] local: &str,
        #[case] subscriber: &str,
        #[case] segment: &str,
    ) {
        let err = PhoneNumber::new(area, local, subscriber).expect_err("bad segment should fail");
        assert!(matches!(
            err,
            PhoneValidationError::InvalidSegment { segment: s } if s == segment
        ));
    }
}
