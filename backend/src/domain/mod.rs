//! Domain value objects and aggregates.
//!
//! Every type here is immutable, compared structurally, and validated by its
//! constructor; there is no way to hold an invalid instance. Constructors
//! fail fast on the first violated invariant with a per-type validation
//! error, unlike the schema layer which aggregates violations.

pub mod address;
pub mod auth;
pub mod cemetery;
pub mod customer;
pub mod enums;
pub mod feedback;
pub mod identifier;
pub mod mail;
pub mod name;
pub mod pager;
pub mod password;
pub mod phone;
pub mod ports;
pub mod range;
pub mod schedule;
pub mod transaction;
pub mod user;
pub mod visit;

pub use self::address::{Address, AddressValidationError, PostalCode, PostalCodeValidationError};
pub use self::auth::{AuthToken, AuthTokenValidationError, Credentials};
pub use self::cemetery::{Cemetery, CemeteryValidationError};
pub use self::customer::Customer;
pub use self::enums::{
    CemeteryType, ClosedEnum, CustomerStatus, FrequencyType, SortOrder, TokenType,
    TransactionType, UnknownValueError, UserRole, as_member, coerce_member, decode_literal,
};
pub use self::feedback::{Feedback, FeedbackValidationError};
pub use self::identifier::{
    CemeteryId, CustomerId, EntityId, FeedbackId, IdentifierValidationError, ScheduleId,
    TransactionId, UserId, VisitId,
};
pub use self::mail::{MailAddress, MailAddressValidationError};
pub use self::name::{PersonName, PersonNameValidationError};
pub use self::pager::{Pager, PagerValidationError};
pub use self::password::{Password, PasswordValidationError};
pub use self::phone::{PhoneNumber, PhoneValidationError};
pub use self::ports::{
    JsonReader, JsonWriter, PayloadReader, PayloadWriter, PortError, Repository,
};
pub use self::range::{DateTimeRange, Range, RangeValidationError};
pub use self::schedule::Schedule;
pub use self::transaction::{TransactionHistory, TransactionValidationError};
pub use self::user::User;
pub use self::visit::Visit;
