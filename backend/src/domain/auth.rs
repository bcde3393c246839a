//! Authentication value objects.
//!
//! The authentication protocol itself lives upstream; this module only
//! models the token and credential values crossing the boundary.

use std::fmt;

use chrono::{DateTime, Utc};

use super::enums::TokenType;
use super::mail::MailAddress;
use super::password::Password;

/// Validation errors returned by [`AuthToken::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthTokenValidationError {
    /// The token value was empty.
    EmptyValue,
}

impl fmt::Display for AuthTokenValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyValue => write!(f, "token value must not be empty"),
        }
    }
}

impl std::error::Error for AuthTokenValidationError {}

/// Bearer token issued by the upstream service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthToken {
    token_type: TokenType,
    value: String,
    expires_at: DateTime<Utc>,
}

impl AuthToken {
    /// Validate and construct a token.
    pub fn new(
        token_type: TokenType,
        value: impl Into<String>,
        expires_at: DateTime<Utc>,
    ) -> Result<Self, AuthTokenValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(AuthTokenValidationError::EmptyValue);
        }
        Ok(Self {
            token_type,
            value,
            expires_at,
        })
    }

    /// Access or refresh.
    pub fn token_type(&self) -> TokenType {
        self.token_type
    }

    /// Opaque token value.
    pub fn value(&self) -> &str {
        self.value.as_str()
    }

    /// Expiry instant.
    pub fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }
}

/// Sign-in credentials supplied by a caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    mail_address: MailAddress,
    password: Password,
}

impl Credentials {
    /// Assemble credentials from validated components.
    pub fn new(mail_address: MailAddress, password: Password) -> Self {
        Self {
            mail_address,
            password,
        }
    }

    /// Sign-in mail address.
    pub fn mail_address(&self) -> &MailAddress {
        &self.mail_address
    }

    /// Sign-in password.
    pub fn password(&self) -> &Password {
        &self.password
    }
}
