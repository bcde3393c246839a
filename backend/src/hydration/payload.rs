//! Typed wire payloads.
//!
//! Payloads are plain data: camelCase on the wire, no behaviour, every field
//! public. They only come into existence through a hydrator's `as_payload`
//! gate (untrusted input) or `dehydrate` (domain output), so holding one
//! means the shape has been judged.
//!
//! [`IdentifierPayload`] is branded by the identifier type it carries.
//! `IdentifierPayload<CustomerId>` and `IdentifierPayload<UserId>` share a
//! shape and a schema but do not unify, which keeps structurally identical
//! payloads for different aggregates apart at compile time. The brand is a
//! zero-sized marker with no runtime behaviour.

use std::marker::PhantomData;

use serde::{Deserialize, Serialize};

use crate::domain::{
    CemeteryId, CustomerId, FeedbackId, ScheduleId, TransactionId, UserId, VisitId,
};

/// Branded payload wrapping one identifier string.
///
/// Serialises transparently as the bare string value; the `value` field and
/// the zero-sized brand exist only on the typed side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
#[serde(bound(serialize = "", deserialize = ""))]
pub struct IdentifierPayload<I> {
    /// Raw identifier string.
    pub value: String,
    #[serde(skip)]
    brand: PhantomData<fn() -> I>,
}

impl<I> IdentifierPayload<I> {
    /// Wrap a raw identifier string.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            brand: PhantomData,
        }
    }
}

/// `{ first, last }` person name payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct NamePayload {
    /// Given name.
    pub first: String,
    /// Family name.
    pub last: String,
}

/// `{ first, second }` postal code payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct PostalCodePayload {
    /// Leading three-digit segment.
    pub first: String,
    /// Trailing four-digit segment.
    pub second: String,
}

/// Address payload with a nested postal code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct AddressPayload {
    /// Nested postal code.
    pub postal_code: PostalCodePayload,
    /// Prefecture line.
    pub prefecture: String,
    /// City line.
    pub city: String,
    /// Street line.
    pub street: String,
    /// Optional building line.
    pub building: Option<String>,
}

/// Phone payload split into dialling segments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct PhonePayload {
    /// Area code segment.
    pub area_code: String,
    /// Local exchange segment.
    pub local_code: String,
    /// Subscriber segment.
    pub subscriber_number: String,
}

/// Page window payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct PagerPayload {
    /// Total number of entries.
    pub total: u32,
    /// Entries per page.
    pub items: u32,
    /// Requested page, starting at one.
    pub current: u32,
}

/// Date-time window payload; absent bounds are `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct DateTimeRangePayload {
    /// Inclusive lower bound as an ISO-8601 string.
    pub min: Option<String>,
    /// Inclusive upper bound as an ISO-8601 string.
    pub max: Option<String>,
}

/// `{ value }` password payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct PasswordPayload {
    /// Raw password.
    pub value: String,
}

/// Sign-in credentials payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct CredentialsPayload {
    /// Encoded `local@domain` mail address.
    pub mail_address: String,
    /// Raw password.
    pub password: String,
}

/// Cemetery entry payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct CemeteryPayload {
    /// Plot identifier.
    pub identifier: IdentifierPayload<CemeteryId>,
    /// Holding customer.
    pub customer_identifier: IdentifierPayload<CustomerId>,
    /// Kind of plot, as a wire literal.
    pub cemetery_type: String,
    /// Plot name.
    pub name: String,
    /// Plot address.
    pub address: AddressPayload,
    /// Free-form note.
    pub note: Option<String>,
}

/// Customer entry payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct CustomerPayload {
    /// Customer identifier.
    pub identifier: IdentifierPayload<CustomerId>,
    /// Customer name.
    pub name: NamePayload,
    /// Billing address.
    pub address: AddressPayload,
    /// Contact phone number.
    pub phone: PhonePayload,
    /// Optional encoded mail address.
    pub mail_address: Option<String>,
    /// Account status, as a wire literal.
    pub status: String,
    /// Held plots, in upstream order.
    pub cemetery_identifiers: Vec<IdentifierPayload<CemeteryId>>,
}

/// User entry payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct UserPayload {
    /// User identifier.
    pub identifier: IdentifierPayload<UserId>,
    /// User name.
    pub name: NamePayload,
    /// Registered address.
    pub address: AddressPayload,
    /// Contact phone number.
    pub phone: PhonePayload,
    /// Encoded mail address.
    pub mail_address: String,
    /// Granted role, as a wire literal.
    pub role: String,
}

/// Visit entry payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct VisitPayload {
    /// Visit identifier.
    pub identifier: IdentifierPayload<VisitId>,
    /// Visiting customer.
    pub customer_identifier: IdentifierPayload<CustomerId>,
    /// Visited plot.
    pub cemetery_identifier: IdentifierPayload<CemeteryId>,
    /// When the visit took place, as an ISO-8601 string.
    pub visited_at: String,
    /// Free-form note.
    pub note: Option<String>,
}

/// Schedule entry payload; `sub_schedules` nests this same shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct SchedulePayload {
    /// Schedule identifier.
    pub identifier: IdentifierPayload<ScheduleId>,
    /// Owning customer.
    pub customer_identifier: IdentifierPayload<CustomerId>,
    /// Recurrence, as a wire literal.
    pub frequency_type: String,
    /// First occurrence, as an ISO-8601 string.
    pub starts_at: String,
    /// Nested sub-schedules.
    pub sub_schedules: Option<Vec<SchedulePayload>>,
}

/// Feedback entry payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct FeedbackPayload {
    /// Feedback identifier.
    pub identifier: IdentifierPayload<FeedbackId>,
    /// Posting customer.
    pub customer_identifier: IdentifierPayload<CustomerId>,
    /// Message body.
    pub message: String,
    /// When the feedback was posted, as an ISO-8601 string.
    pub posted_at: String,
}

/// Transaction-history entry payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct TransactionPayload {
    /// Entry identifier.
    pub identifier: IdentifierPayload<TransactionId>,
    /// Settling customer.
    pub customer_identifier: IdentifierPayload<CustomerId>,
    /// Payment or refund, as a wire literal.
    pub transaction_type: String,
    /// Settled amount in yen.
    pub amount: i64,
    /// When the entry was recorded, as an ISO-8601 string.
    pub recorded_at: String,
}

/// Auth token payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct AuthTokenPayload {
    /// Token kind, as a wire literal.
    pub token_type: String,
    /// Opaque token value.
    pub value: String,
    /// Expiry instant, as an ISO-8601 string.
    pub expires_at: String,
}

/// Upstream cemetery listing envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct CemeteryListPayload {
    /// Ordered cemetery entries.
    pub cemeteries: Vec<CemeteryPayload>,
}

/// Upstream customer listing envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct CustomerListPayload {
    /// Ordered customer entries.
    pub customers: Vec<CustomerPayload>,
}

/// Upstream user listing envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct UserListPayload {
    /// Ordered user entries.
    pub users: Vec<UserPayload>,
}

/// Upstream visit listing envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct VisitListPayload {
    /// Ordered visit entries.
    pub visits: Vec<VisitPayload>,
}

/// Upstream schedule listing envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct ScheduleListPayload {
    /// Ordered schedule entries.
    pub schedules: Vec<SchedulePayload>,
}

/// Upstream feedback listing envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct FeedbackListPayload {
    /// Ordered feedback entries.
    pub feedbacks: Vec<FeedbackPayload>,
}

/// Upstream transaction listing envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct TransactionListPayload {
    /// Ordered transaction entries.
    pub transactions: Vec<TransactionPayload>,
}
