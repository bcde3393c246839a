//! Postal address value objects.
//!
//! Addresses follow the Japanese postal layout: a two-segment postal code
//! (three then four digits), prefecture, city, street, and an optional
//! building line. Equality recurses into the embedded postal code.

use std::fmt;

/// Validation errors returned by [`PostalCode::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostalCodeValidationError {
    /// The leading segment was not exactly three digits.
    InvalidFirst,
    /// The trailing segment was not exactly four digits.
    InvalidSecond,
}

impl fmt::Display for PostalCodeValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFirst => {
                write!(f, "postal code first segment must be exactly 3 digits")
            }
            Self::InvalidSecond => {
                write!(f, "postal code second segment must be exactly 4 digits")
            }
        }
    }
}

impl std::error::Error for PostalCodeValidationError {}

/// Two-segment postal code, `NNN-NNNN` without the hyphen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostalCode {
    first: String,
    second: String,
}

impl PostalCode {
    /// Validate and construct a postal code.
    pub fn new(
        first: impl Into<String>,
        second: impl Into<String>,
    ) -> Result<Self, PostalCodeValidationError> {
        let first = first.into();
        let second = second.into();
        if !is_digits(&first, 3) {
            return Err(PostalCodeValidationError::InvalidFirst);
        }
        if !is_digits(&second, 4) {
            return Err(PostalCodeValidationError::InvalidSecond);
        }
        Ok(Self { first, second })
    }

    /// Leading three-digit segment.
    pub fn first(&self) -> &str {
        self.first.as_str()
    }

    /// Trailing four-digit segment.
    pub fn second(&self) -> &str {
        self.second.as_str()
    }
}

fn is_digits(value: &str, length: usize) -> bool {
    value.len() == length && value.chars().all(|ch| ch.is_ascii_digit())
}

/// Validation errors returned by [`Address::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddressValidationError {
    /// A required address line was empty.
    EmptyField {
        /// Offending line.
        field: &'static str,
    },
    /// The embedded postal code was invalid.
    PostalCode(PostalCodeValidationError),
}

impl fmt::Display for AddressValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyField { field } => write!(f, "address {field} must not be empty"),
            Self::PostalCode(inner) => inner.fmt(f),
        }
    }
}

impl std::error::Error for AddressValidationError {}

impl From<PostalCodeValidationError> for AddressValidationError {
    fn from(value: PostalCodeValidationError) -> Self {
        Self::PostalCode(value)
    }
}

/// Postal address of a customer, user, or cemetery plot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    postal_code: PostalCode,
    prefecture: String,
    city: String,
    street: String,
    building: Option<String>,
}

impl Address {
    /// Validate and construct an address from an already valid postal code.
    pub fn new(
        postal_code: PostalCode,
        prefecture: impl Into<String>,
        city: impl Into<String>,
        street: impl Into<String>,
        building: Option<String>,
    ) -> Result<Self, AddressValidationError> {
        let prefecture = non_empty(prefecture.into(), "prefecture")?;
        let city = non_empty(city.into(), "city")?;
        let street = non_empty(street.into(), "street")?;
        let building = match building {
            None => None,
            Some(line) => Some(non_empty(line, "building")?),
        };
        Ok(Self {
            postal_code,
            prefecture,
            city,
            street,
            building,
        })
    }

    /// Postal code.
    pub fn postal_code(&self) -> &PostalCode {
        &self.postal_code
    }

    /// Prefecture line.
    pub fn prefecture(&self) -> &str {
        self.prefecture.as_str()
    }

    /// City line.
    pub fn city(&self) -> &str {
        self.city.as_str()
    }

    /// Street line.
    pub fn street(&self) -> &str {
        self.street.as_str()
    }

    /// Optional building line.
    pub fn building(&self) -> Option<&str> {
        self.building.as_deref()
    }
}

fn non_empty(value: String, field: &'static str) -> Result<String, AddressValidationError> {
    if value.trim().is_empty() {
        return Err(AddressValidationError::EmptyField { field });
    }
    Ok(value)
}
