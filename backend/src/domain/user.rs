//! User aggregate.

use super::address::Address;
use super::enums::UserRole;
use super::identifier::UserId;
use super::mail::MailAddress;
use super::name::PersonName;
use super::phone::PhoneNumber;

/// A staff or member account on the consumer side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: UserId,
    name: PersonName,
    address: Address,
    phone: PhoneNumber,
    mail_address: MailAddress,
    role: UserRole,
}

impl User {
    /// Assemble a user from validated components.
    pub fn new(
        id: UserId,
        name: PersonName,
        address: Address,
        phone: PhoneNumber,
        mail_address: MailAddress,
        role: UserRole,
    ) -> Self {
        Self {
            id,
            name,
            address,
            phone,
            mail_address,
            role,
        }
    }

    /// User identifier.
    pub fn id(&self) -> &UserId {
        &self.id
    }

    /// User name.
    pub fn name(&self) -> &PersonName {
        &self.name
    }

    /// Registered address.
    pub fn address(&self) -> &Address {
        &self.address
    }

    /// Contact phone number.
    pub fn phone(&self) -> &PhoneNumber {
        &self.phone
    }

    /// Sign-in mail address.
    pub fn mail_address(&self) -> &MailAddress {
        &self.mail_address
    }

    /// Granted role.
    pub fn role(&self) -> UserRole {
        self.role
    }
}
