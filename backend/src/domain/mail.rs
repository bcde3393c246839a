//! Mail address value object.
//!
//! The wire form is a single `local@domain` string; the domain form keeps the
//! two halves apart. Parsing splits once on the first `@`, so a domain half
//! containing further `@` characters is preserved verbatim.

use std::fmt;

/// Validation errors returned by [`MailAddress::parse`] and [`MailAddress::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MailAddressValidationError {
    /// No `@` separator was present.
    MissingSeparator,
    /// The local half before the separator was empty.
    EmptyLocal,
    /// The domain half after the separator was empty.
    EmptyDomain,
}

impl fmt::Display for MailAddressValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingSeparator => {
                write!(f, "mail address must contain an `@` separator")
            }
            Self::EmptyLocal => write!(f, "mail address local part must not be empty"),
            Self::EmptyDomain => write!(f, "mail address domain part must not be empty"),
        }
    }
}

impl std::error::Error for MailAddressValidationError {}

/// Mail address split into local and domain halves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailAddress {
    local: String,
    domain: String,
}

impl MailAddress {
    /// Validate and construct a mail address from separate halves.
    pub fn new(
        local: impl Into<String>,
        domain: impl Into<String>,
    ) -> Result<Self, MailAddressValidationError> {
        let local = local.into();
        let domain = domain.into();
        if local.is_empty() {
            return Err(MailAddressValidationError::EmptyLocal);
        }
        if domain.is_empty() {
            return Err(MailAddressValidationError::EmptyDomain);
        }
        Ok(Self { local, domain })
    }

    /// Parse the encoded `local@domain` wire form, splitting on the first `@`.
    pub fn parse(encoded: &str) -> Result<Self, MailAddressValidationError> {
        let Some((local, domain)) = encoded.split_once('@') else {
            return Err(MailAddressValidationError::MissingSeparator);
        };
        Self::new(local, domain)
    }

    /// Local half before the separator.
    pub fn local(&self) -> &str {
        self.local.as_str()
    }

    /// Domain half after the separator.
    pub fn domain(&self) -> &str {
        self.domain.as_str()
    }

    /// Re-encode the `local@domain` wire form.
    pub fn encode(&self) -> String {
        format!("{}@{}", self.local, self.domain)
    }
}

impl fmt::Display for MailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.local, self.domain)
    }
}
