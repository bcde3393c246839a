//! Bidirectional conversion between wire payloads and domain objects.
//!
//! Each pair of domain type and payload type gets a [`Hydrator`]:
//! `hydrate` builds the domain object from an already-validated payload,
//! `dehydrate` walks a domain object back to its payload, and the provided
//! `as_payload` gate validates untrusted input against the payload's schema
//! before any field is trusted. Aggregate hydrators are composed from the
//! hydrators of their fields, never by inlining nested conversion logic, so
//! fixing a conversion in one place fixes every aggregate embedding it.
//!
//! Two error tiers cross this boundary and stay distinct: [`SchemaError`]
//! aggregates every structural violation and is recoverable by the caller;
//! [`HydrationError`] is the fail-fast domain tier raised when a constructor
//! rejects a value the schema could not judge.

pub mod entities;
pub mod payload;
pub mod registry;
pub mod schema;
pub mod values;

use serde::de::DeserializeOwned;
use serde_json::Value;

pub use self::schema::{Field, Schema, SchemaError, SchemaViolation, ViolationKind};
pub use crate::domain::enums::{as_member, coerce_member};

/// Fail-fast conversion failure raised while hydrating a payload.
///
/// Domain constructors remain the final authority: a payload that satisfies
/// its schema can still be rejected here, and when that happens downstream
/// of a successful `as_payload` it points at drifted invariants, not at bad
/// caller input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HydrationError {
    /// A domain constructor rejected the value.
    #[error("{message}")]
    Invariant {
        /// Constructor-supplied description of the violated invariant.
        message: String,
    },
    /// A string matched no member of a closed enumeration.
    #[error("unknown value: `{value}`")]
    UnknownValue {
        /// The offending input.
        value: String,
    },
    /// A date field did not parse as an ISO-8601 instant.
    #[error("timestamp `{value}` is not a valid ISO-8601 date-time")]
    InvalidTimestamp {
        /// The offending input.
        value: String,
    },
}

impl HydrationError {
    /// Wrap a domain validation error.
    pub(crate) fn invariant(err: impl std::fmt::Display) -> Self {
        Self::Invariant {
            message: err.to_string(),
        }
    }
}

impl From<crate::domain::UnknownValueError> for HydrationError {
    fn from(err: crate::domain::UnknownValueError) -> Self {
        Self::UnknownValue { value: err.value }
    }
}

/// Bidirectional converter for one domain/payload pair.
pub trait Hydrator {
    /// Domain type produced by [`Hydrator::hydrate`].
    type Domain;
    /// Wire payload type paired with the domain type.
    type Payload: DeserializeOwned;

    /// Schema judging the payload's wire shape.
    fn schema(&self) -> &'static Schema;

    /// Convert a validated payload into a domain object.
    ///
    /// Assumes the payload already satisfies [`Hydrator::schema`]; domain
    /// constructors still re-check their own invariants and win on conflict.
    fn hydrate(&self, payload: &Self::Payload) -> Result<Self::Domain, HydrationError>;

    /// Convert a domain object back into its payload. Total: a valid domain
    /// object always has a representable payload.
    fn dehydrate(&self, domain: &Self::Domain) -> Self::Payload;

    /// Gate for untrusted input: validate `raw` against the schema and
    /// decode it into the typed payload.
    fn as_payload(&self, raw: &Value) -> Result<Self::Payload, SchemaError> {
        self.schema().validate(raw)?;
        serde_json::from_value(raw.clone()).map_err(SchemaError::undecodable)
    }
}

/// Lifts any hydrator over a nullable field.
///
/// `hydrate(None)` is `None`, anything else delegates to the inner hydrator;
/// `dehydrate` is symmetric. The inner hydrator keeps whatever construction
/// parameters it was built with, so identifier hydrators (parameterised by
/// their identifier subtype) lift unchanged.
#[derive(Debug, Default, Clone, Copy)]
pub struct OptionalHydrator<H> {
    inner: H,
}

impl<H: Hydrator> OptionalHydrator<H> {
    /// Wrap an inner hydrator.
    pub fn new(inner: H) -> Self {
        Self { inner }
    }

    /// Hydrate a nullable payload field.
    pub fn hydrate(
        &self,
        payload: Option<&H::Payload>,
    ) -> Result<Option<H::Domain>, HydrationError> {
        payload.map(|present| self.inner.hydrate(present)).transpose()
    }

    /// Dehydrate a nullable domain field.
    pub fn dehydrate(&self, domain: Option<&H::Domain>) -> Option<H::Payload> {
        domain.map(|present| self.inner.dehydrate(present))
    }
}

/// Lifts any hydrator over an ordered collection, preserving input order.
#[derive(Debug, Default, Clone, Copy)]
pub struct ListHydrator<H> {
    inner: H,
}

impl<H: Hydrator> ListHydrator<H> {
    /// Wrap an inner hydrator.
    pub fn new(inner: H) -> Self {
        Self { inner }
    }

    /// Hydrate every entry, failing on the first rejected one.
    pub fn hydrate(&self, payloads: &[H::Payload]) -> Result<Vec<H::Domain>, HydrationError> {
        payloads
            .iter()
            .map(|payload| self.inner.hydrate(payload))
            .collect()
    }

    /// Dehydrate every entry.
    pub fn dehydrate(&self, domains: &[H::Domain]) -> Vec<H::Payload> {
        domains
            .iter()
            .map(|domain| self.inner.dehydrate(domain))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    //! Coverage for the combinators over a representative inner hydrator.

    use super::values::MailAddressHydrator;
    use super::*;
    use crate::domain::MailAddress;
    use rstest::rstest;

    #[rstest]
    fn optional_hydrator_passes_null_through_unchanged() {
        let hydrator = OptionalHydrator::new(MailAddressHydrator::default());
        assert_eq!(hydrator.hydrate(None).expect("null passes"), None);
        assert_eq!(hydrator.dehydrate(None), None);
    }

    #[rstest]
    fn optional_hydrator_delegates_present_values() {
        let hydrator = OptionalHydrator::new(MailAddressHydrator::default());
        let encoded = "hanako@example.jp".to_owned();
        let mail = hydrator
            .hydrate(Some(&encoded))
            .expect("valid mail address")
            .expect("present value stays present");
        assert_eq!(mail, MailAddress::parse("hanako@example.jp").expect("valid"));
        assert_eq!(hydrator.dehydrate(Some(&mail)), Some(encoded));
    }

    #[rstest]
    fn optional_hydrator_propagates_inner_failures() {
        let hydrator = OptionalHydrator::new(MailAddressHydrator::default());
        let bad = "no-separator".to_owned();
        let err = hydrator
            .hydrate(Some(&bad))
            .expect_err("invalid mail address should fail");
        assert!(matches!(err, HydrationError::Invariant { .. }));
    }

    #[rstest]
    fn list_hydrator_preserves_entry_order() {
        let hydrator = ListHydrator::new(MailAddressHydrator::default());
        let entries = vec!["a@x.jp".to_owned(), "b@y.jp".to_owned(), "c@z.jp".to_owned()];
        let hydrated = hydrator.hydrate(&entries).expect("valid entries");
        assert_eq!(hydrated.len(), 3);
        assert_eq!(hydrated[1].local(), "b");
        assert_eq!(hydrator.dehydrate(&hydrated), entries);
    }
}
