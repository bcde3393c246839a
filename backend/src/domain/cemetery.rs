//! Cemetery plot aggregate.

use std::fmt;

use super::address::Address;
use super::enums::CemeteryType;
use super::identifier::{CemeteryId, CustomerId};

/// Maximum length of a cemetery plot name.
pub const CEMETERY_NAME_MAX: usize = 255;

/// Validation errors returned by [`Cemetery::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CemeteryValidationError {
    /// The plot name was empty or exceeded [`CEMETERY_NAME_MAX`] characters.
    InvalidNameLength,
}

impl fmt::Display for CemeteryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidNameLength => {
                write!(f, "cemetery name must be 1 to {CEMETERY_NAME_MAX} characters")
            }
        }
    }
}

impl std::error::Error for CemeteryValidationError {}

/// A cemetery plot held by a customer.
///
/// ## Invariants
/// - `name` is non-empty and at most [`CEMETERY_NAME_MAX`] characters.
/// - Identifiers, type, and address are validated by their own constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cemetery {
    id: CemeteryId,
    customer_id: CustomerId,
    cemetery_type: CemeteryType,
    name: String,
    address: Address,
    note: Option<String>,
}

impl Cemetery {
    /// Validate and construct a cemetery plot from validated components.
    pub fn new(
        id: CemeteryId,
        customer_id: CustomerId,
        cemetery_type: CemeteryType,
        name: impl Into<String>,
        address: Address,
        note: Option<String>,
    ) -> Result<Self, CemeteryValidationError> {
        let name = name.into();
        let length = name.chars().count();
        if length == 0 || length > CEMETERY_NAME_MAX || name.trim().is_empty() {
            return Err(CemeteryValidationError::InvalidNameLength);
        }
        Ok(Self {
            id,
            customer_id,
            cemetery_type,
            name,
            address,
            note,
        })
    }

    /// Plot identifier.
    pub fn id(&self) -> &CemeteryId {
        &self.id
    }

    /// Holding customer.
    pub fn customer_id(&self) -> &CustomerId {
        &self.customer_id
    }

    /// Kind of plot.
    pub fn cemetery_type(&self) -> CemeteryType {
        self.cemetery_type
    }

    /// Plot name.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Plot address.
    pub fn address(&self) -> &Address {
        &self.address
    }

    /// Free-form note, if any.
    pub fn note(&self) -> Option<&str> {
        self.note.as_deref()
    }
}
