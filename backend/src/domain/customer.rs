//! Customer aggregate.

use super::address::Address;
use super::enums::CustomerStatus;
use super::identifier::{CemeteryId, CustomerId};
use super::mail::MailAddress;
use super::name::PersonName;
use super::phone::PhoneNumber;

/// A customer holding one or more cemetery plots.
///
/// Every component is validated by its own constructor, so assembling a
/// customer from them cannot fail. Equality is structural and recurses into
/// the embedded value objects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    id: CustomerId,
    name: PersonName,
    address: Address,
    phone: PhoneNumber,
    mail_address: Option<MailAddress>,
    status: CustomerStatus,
    cemetery_ids: Vec<CemeteryId>,
}

impl Customer {
    /// Assemble a customer from validated components.
    pub fn new(
        id: CustomerId,
        name: PersonName,
        address: Address,
        phone: PhoneNumber,
        mail_address: Option<MailAddress>,
        status: CustomerStatus,
        cemetery_ids: Vec<CemeteryId>,
    ) -> Self {
        Self {
            id,
            name,
            address,
            phone,
            mail_address,
            status,
            cemetery_ids,
        }
    }

    /// Customer identifier.
    pub fn id(&self) -> &CustomerId {
        &self.id
    }

    /// Customer name.
    pub fn name(&self) -> &PersonName {
        &self.name
    }

    /// Billing address.
    pub fn address(&self) -> &Address {
        &self.address
    }

    /// Contact phone number.
    pub fn phone(&self) -> &PhoneNumber {
        &self.phone
    }

    /// Optional contact mail address.
    pub fn mail_address(&self) -> Option<&MailAddress> {
        self.mail_address.as_ref()
    }

    /// Account status.
    pub fn status(&self) -> CustomerStatus {
        self.status
    }

    /// Plots held by this customer, in upstream order.
    pub fn cemetery_ids(&self) -> &[CemeteryId] {
        self.cemetery_ids.as_slice()
    }
}
