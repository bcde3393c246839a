//! Strongly typed aggregate identifiers.
//!
//! Every aggregate gets its own newtype so a cemetery identifier cannot be
//! handed to a customer lookup by accident. All identifiers share the same
//! invariant: the raw value must be a canonical UUIDv7 string (lowercase
//! 8-4-4-4-12 hex groups, version nibble `7`, variant nibble `8`..`b`).

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use uuid::Uuid;

/// Canonical UUIDv7 shape accepted by every identifier constructor.
pub(crate) static UUID_V7_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = "^[0-9a-f]{8}-[0-9a-f]{4}-7[0-9a-f]{3}-[89ab][0-9a-f]{3}-[0-9a-f]{12}$";
    Regex::new(pattern)
        .unwrap_or_else(|error| panic!("uuid v7 pattern failed to compile: {error}"))
});

/// Validation errors returned by identifier constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdentifierValidationError {
    /// The raw value was empty.
    Empty {
        /// Identifier kind used in the message, for example `cemetery id`.
        kind: &'static str,
    },
    /// The raw value did not match the canonical UUIDv7 shape.
    Malformed {
        /// Identifier kind used in the message.
        kind: &'static str,
    },
}

impl fmt::Display for IdentifierValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { kind } => write!(f, "{kind} must not be empty"),
            Self::Malformed { kind } => {
                write!(f, "{kind} must be a canonical UUIDv7 string")
            }
        }
    }
}

impl std::error::Error for IdentifierValidationError {}

/// Common surface shared by every aggregate identifier newtype.
///
/// The hydration layer is generic over this trait so a single identifier
/// hydrator serves every aggregate without repeating conversion logic.
pub trait EntityId: Clone + PartialEq + fmt::Debug + Send + Sync + 'static {
    /// Identifier kind used in validation messages, for example `cemetery id`.
    const KIND: &'static str;

    /// Validate and construct an identifier from a raw string.
    fn parse(value: &str) -> Result<Self, IdentifierValidationError>;

    /// The canonical string form, exactly as supplied at construction.
    fn as_str(&self) -> &str;
}

macro_rules! define_identifier {
    ($(#[$meta:meta])* $name:ident, $kind:literal) => {
        $(#[$meta])*
        ///
        /// Stores both the parsed UUID and the raw string so the wire form is
        /// reproduced byte for byte on the way back out. Equality is on the
        /// raw value.
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name(Uuid, String);

        impl $name {
            /// Validate and construct an identifier from borrowed input.
            pub fn new(value: impl AsRef<str>) -> Result<Self, IdentifierValidationError> {
                Self::from_owned(value.as_ref().to_owned())
            }

            /// Generate a fresh random identifier.
            pub fn random() -> Self {
                let uuid = Uuid::now_v7();
                Self(uuid, uuid.to_string())
            }

            fn from_owned(value: String) -> Result<Self, IdentifierValidationError> {
                if value.is_empty() {
                    return Err(IdentifierValidationError::Empty { kind: $kind });
                }
                if !UUID_V7_PATTERN.is_match(&value) {
                    return Err(IdentifierValidationError::Malformed { kind: $kind });
                }
                let parsed = Uuid::parse_str(&value)
                    .map_err(|_| IdentifierValidationError::Malformed { kind: $kind })?;
                Ok(Self(parsed, value))
            }

            /// Access the underlying UUID.
            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl EntityId for $name {
            const KIND: &'static str = $kind;

            fn parse(value: &str) -> Result<Self, IdentifierValidationError> {
                Self::new(value)
            }

            fn as_str(&self) -> &str {
                self.1.as_str()
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.1.as_str()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_ref())
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.1
            }
        }

        impl TryFrom<String> for $name {
            type Error = IdentifierValidationError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::from_owned(value)
            }
        }

        impl std::str::FromStr for $name {
            type Err = IdentifierValidationError;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                Self::new(value)
            }
        }
    };
}

define_identifier!(
    /// Identifier of a cemetery plot.
    CemeteryId,
    "cemetery id"
);
define_identifier!(
    /// Identifier of a customer.
    CustomerId,
    "customer id"
);
define_identifier!(
    /// Identifier of a staff or member user.
    UserId,
    "user id"
);
define_identifier!(
    /// Identifier of a recorded visit.
    VisitId,
    "visit id"
);
define_identifier!(
    /// Identifier of a visit schedule.
    ScheduleId,
    "schedule id"
);
define_identifier!(
    /// Identifier of a feedback entry.
    FeedbackId,
    "feedback id"
);
define_identifier!(
    /// Identifier of a transaction-history entry.
    TransactionId,
    "transaction id"
);
