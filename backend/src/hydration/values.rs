//! Hydrators for the value-object kernel.
//!
//! These are the building blocks every aggregate hydrator composes. Shared
//! conversions (timestamps, the encoded mail form) live here as free
//! functions and small hydrator structs so each aggregate delegates instead
//! of inheriting or re-implementing them.

use std::marker::PhantomData;

use chrono::{DateTime, SecondsFormat, Utc};

use super::payload::{
    AddressPayload, CredentialsPayload, DateTimeRangePayload, IdentifierPayload, NamePayload,
    PagerPayload, PasswordPayload, PhonePayload, PostalCodePayload,
};
use super::{Hydrator, HydrationError, registry, schema::Schema};
use crate::domain::{
    Address, Credentials, DateTimeRange, EntityId, MailAddress, Pager, Password, PersonName,
    PhoneNumber, PostalCode, Range,
};

/// Parse an ISO-8601 wire timestamp into a UTC instant.
pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, HydrationError> {
    DateTime::parse_from_rfc3339(raw)
        .map(|parsed| parsed.with_timezone(&Utc))
        .map_err(|_| HydrationError::InvalidTimestamp {
            value: raw.to_owned(),
        })
}

/// Serialise a UTC instant into its ISO-8601 wire form.
pub fn format_timestamp(value: &DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

/// Hydrator for one identifier subtype, chosen at construction time.
///
/// The subtype parameter doubles as the payload brand, so a customer
/// identifier hydrator only accepts customer identifier payloads.
#[derive(Debug)]
pub struct IdentifierHydrator<I> {
    marker: PhantomData<fn() -> I>,
}

impl<I> IdentifierHydrator<I> {
    /// Construct a hydrator for the identifier subtype `I`.
    pub fn new() -> Self {
        Self {
            marker: PhantomData,
        }
    }
}

impl<I> Default for IdentifierHydrator<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I> Clone for IdentifierHydrator<I> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<I: EntityId> Hydrator for IdentifierHydrator<I> {
    type Domain = I;
    type Payload = IdentifierPayload<I>;

    fn schema(&self) -> &'static Schema {
        registry::identifier()
    }

    fn hydrate(&self, payload: &Self::Payload) -> Result<Self::Domain, HydrationError> {
        I::parse(&payload.value).map_err(HydrationError::invariant)
    }

    fn dehydrate(&self, domain: &Self::Domain) -> Self::Payload {
        IdentifierPayload::new(domain.as_str())
    }
}

/// Hydrator for [`PersonName`].
#[derive(Debug, Default, Clone, Copy)]
pub struct NameHydrator;

impl Hydrator for NameHydrator {
    type Domain = PersonName;
    type Payload = NamePayload;

    fn schema(&self) -> &'static Schema {
        registry::person_name()
    }

    fn hydrate(&self, payload: &Self::Payload) -> Result<Self::Domain, HydrationError> {
        PersonName::new(&payload.first, &payload.last).map_err(HydrationError::invariant)
    }

    fn dehydrate(&self, domain: &Self::Domain) -> Self::Payload {
        NamePayload {
            first: domain.first().to_owned(),
            last: domain.last().to_owned(),
        }
    }
}

/// Hydrator for [`PostalCode`].
#[derive(Debug, Default, Clone, Copy)]
pub struct PostalCodeHydrator;

impl Hydrator for PostalCodeHydrator {
    type Domain = PostalCode;
    type Payload = PostalCodePayload;

    fn schema(&self) -> &'static Schema {
        registry::postal_code()
    }

    fn hydrate(&self, payload: &Self::Payload) -> Result<Self::Domain, HydrationError> {
        PostalCode::new(&payload.first, &payload.second).map_err(HydrationError::invariant)
    }

    fn dehydrate(&self, domain: &Self::Domain) -> Self::Payload {
        PostalCodePayload {
            first: domain.first().to_owned(),
            second: domain.second().to_owned(),
        }
    }
}

/// Hydrator for [`Address`], delegating the postal code.
#[derive(Debug, Default, Clone, Copy)]
pub struct AddressHydrator {
    postal_code: PostalCodeHydrator,
}

impl Hydrator for AddressHydrator {
    type Domain = Address;
    type Payload = AddressPayload;

    fn schema(&self) -> &'static Schema {
        registry::address()
    }

    fn hydrate(&self, payload: &Self::Payload) -> Result<Self::Domain, HydrationError> {
        let postal_code = self.postal_code.hydrate(&payload.postal_code)?;
        Address::new(
            postal_code,
            &payload.prefecture,
            &payload.city,
            &payload.street,
            payload.building.clone(),
        )
        .map_err(HydrationError::invariant)
    }

    fn dehydrate(&self, domain: &Self::Domain) -> Self::Payload {
        AddressPayload {
            postal_code: self.postal_code.dehydrate(domain.postal_code()),
            prefecture: domain.prefecture().to_owned(),
            city: domain.city().to_owned(),
            street: domain.street().to_owned(),
            building: domain.building().map(str::to_owned),
        }
    }
}

/// Hydrator for [`PhoneNumber`].
#[derive(Debug, Default, Clone, Copy)]
pub struct PhoneHydrator;

impl Hydrator for PhoneHydrator {
    type Domain = PhoneNumber;
    type Payload = PhonePayload;

    fn schema(&self) -> &'static Schema {
        registry::phone()
    }

    fn hydrate(&self, payload: &Self::Payload) -> Result<Self::Domain, HydrationError> {
        PhoneNumber::new(
            &payload.area_code,
            &payload.local_code,
            &payload.subscriber_number,
        )
        .map_err(HydrationError::invariant)
    }

    fn dehydrate(&self, domain: &Self::Domain) -> Self::Payload {
        PhonePayload {
            area_code: domain.area_code().to_owned(),
            local_code: domain.local_code().to_owned(),
            subscriber_number: domain.subscriber_number().to_owned(),
        }
    }
}

/// Hydrator for [`MailAddress`]; the wire form is one encoded string.
#[derive(Debug, Default, Clone, Copy)]
pub struct MailAddressHydrator;

impl Hydrator for MailAddressHydrator {
    type Domain = MailAddress;
    type Payload = String;

    fn schema(&self) -> &'static Schema {
        registry::mail()
    }

    fn hydrate(&self, payload: &Self::Payload) -> Result<Self::Domain, HydrationError> {
        MailAddress::parse(payload).map_err(HydrationError::invariant)
    }

    fn dehydrate(&self, domain: &Self::Domain) -> Self::Payload {
        domain.encode()
    }
}

/// Hydrator for [`Pager`].
#[derive(Debug, Default, Clone, Copy)]
pub struct PagerHydrator;

impl Hydrator for PagerHydrator {
    type Domain = Pager;
    type Payload = PagerPayload;

    fn schema(&self) -> &'static Schema {
        registry::pager()
    }

    fn hydrate(&self, payload: &Self::Payload) -> Result<Self::Domain, HydrationError> {
        Pager::new(payload.total, payload.items, payload.current)
            .map_err(HydrationError::invariant)
    }

    fn dehydrate(&self, domain: &Self::Domain) -> Self::Payload {
        PagerPayload {
            total: domain.total(),
            items: domain.items(),
            current: domain.current(),
        }
    }
}

/// Hydrator for [`DateTimeRange`].
#[derive(Debug, Default, Clone, Copy)]
pub struct DateTimeRangeHydrator;

impl Hydrator for DateTimeRangeHydrator {
    type Domain = DateTimeRange;
    type Payload = DateTimeRangePayload;

    fn schema(&self) -> &'static Schema {
        registry::date_time_range()
    }

    fn hydrate(&self, payload: &Self::Payload) -> Result<Self::Domain, HydrationError> {
        let min = payload.min.as_deref().map(parse_timestamp).transpose()?;
        let max = payload.max.as_deref().map(parse_timestamp).transpose()?;
        Range::new(min, max).map_err(HydrationError::invariant)
    }

    fn dehydrate(&self, domain: &Self::Domain) -> Self::Payload {
        DateTimeRangePayload {
            min: domain.min().map(format_timestamp),
            max: domain.max().map(format_timestamp),
        }
    }
}

/// Hydrator for [`Password`].
#[derive(Debug, Default, Clone, Copy)]
pub struct PasswordHydrator;

impl Hydrator for PasswordHydrator {
    type Domain = Password;
    type Payload = PasswordPayload;

    fn schema(&self) -> &'static Schema {
        registry::password()
    }

    fn hydrate(&self, payload: &Self::Payload) -> Result<Self::Domain, HydrationError> {
        Password::new(payload.value.as_str()).map_err(HydrationError::invariant)
    }

    fn dehydrate(&self, domain: &Self::Domain) -> Self::Payload {
        PasswordPayload {
            value: domain.as_str().to_owned(),
        }
    }
}

/// Hydrator for sign-in [`Credentials`].
#[derive(Debug, Default, Clone, Copy)]
pub struct CredentialsHydrator {
    mail_address: MailAddressHydrator,
}

impl Hydrator for CredentialsHydrator {
    type Domain = Credentials;
    type Payload = CredentialsPayload;

    fn schema(&self) -> &'static Schema {
        registry::credentials()
    }

    fn hydrate(&self, payload: &Self::Payload) -> Result<Self::Domain, HydrationError> {
        let mail_address = self.mail_address.hydrate(&payload.mail_address)?;
        let password = Password::new(payload.password.as_str()).map_err(HydrationError::invariant)?;
        Ok(Credentials::new(mail_address, password))
    }

    fn dehydrate(&self, domain: &Self::Domain) -> Self::Payload {
        CredentialsPayload {
            mail_address: self.mail_address.dehydrate(domain.mail_address()),
            password: domain.password().as_str().to_owned(),
        }
    }
}
