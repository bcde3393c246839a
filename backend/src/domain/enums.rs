//! Closed string enumerations shared across the domain.
//!
//! Every enumeration is a finite set of wire literals. Conversion from a raw
//! string is an exhaustive match with a failing default branch, so an
//! unrecognised literal always surfaces as [`UnknownValueError`] naming the
//! offending input. Upstream responses occasionally double-encode literals
//! (`"\"ACTIVE\""`); [`coerce_member`] unwraps that form before matching.

use std::borrow::Cow;
use std::fmt;

/// Error raised when a string matches no member of a closed enumeration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownValueError {
    /// The unrecognised input value.
    pub value: String,
}

impl UnknownValueError {
    pub(crate) fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

impl fmt::Display for UnknownValueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown value: `{}`", self.value)
    }
}

impl std::error::Error for UnknownValueError {}

/// Common surface of a closed string enumeration.
pub trait ClosedEnum: Copy + Sized + 'static {
    /// Every wire literal, in declaration order.
    const LITERALS: &'static [&'static str];

    /// Map a raw literal to the matching member.
    fn from_literal(raw: &str) -> Result<Self, UnknownValueError>;

    /// The wire literal for this member.
    fn as_str(self) -> &'static str;
}

/// Unwrap a JSON-double-encoded literal, falling back to the raw string.
///
/// `"\"ACTIVE\""` decodes to `ACTIVE`; anything that is not a JSON string is
/// returned unchanged for the member match to judge.
pub fn decode_literal(raw: &str) -> Cow<'_, str> {
    serde_json::from_str::<String>(raw).map_or(Cow::Borrowed(raw), Cow::Owned)
}

/// Convert an already-decoded string into a member of `E`.
pub fn as_member<E: ClosedEnum>(raw: &str) -> Result<E, UnknownValueError> {
    E::from_literal(raw)
}

/// Convert a possibly double-encoded string into a member of `E`.
pub fn coerce_member<E: ClosedEnum>(raw: &str) -> Result<E, UnknownValueError> {
    E::from_literal(decode_literal(raw).as_ref())
}

macro_rules! closed_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$variant_meta:meta])* $variant:ident => $literal:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$variant_meta])* $variant, )+
        }

        impl $name {
            /// The wire literal for this member.
            pub fn as_str(self) -> &'static str {
                match self {
                    $( Self::$variant => $literal, )+
                }
            }

            /// Map a raw literal to the matching member.
            pub fn from_literal(raw: &str) -> Result<Self, UnknownValueError> {
                match raw {
                    $( $literal => Ok(Self::$variant), )+
                    other => Err(UnknownValueError::new(other)),
                }
            }
        }

        impl ClosedEnum for $name {
            const LITERALS: &'static [&'static str] = &[ $( $literal, )+ ];

            fn from_literal(raw: &str) -> Result<Self, UnknownValueError> {
                Self::from_literal(raw)
            }

            fn as_str(self) -> &'static str {
                Self::as_str(self)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = UnknownValueError;

            fn from_str(raw: &str) -> Result<Self, Self::Err> {
                Self::from_literal(raw)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = UnknownValueError;

            fn try_from(raw: &str) -> Result<Self, Self::Error> {
                Self::from_literal(raw)
            }
        }
    };
}

closed_enum! {
    /// Kind of cemetery plot.
    CemeteryType {
        /// Single-occupant plot.
        Individual => "INDIVIDUAL",
        /// Family grave shared across generations.
        Family => "FAMILY",
        /// Communal plot managed by the operator.
        Community => "COMMUNITY",
        /// Plot held by a company or association.
        Business => "BUSINESS",
    }
}

closed_enum! {
    /// Lifecycle state of a customer account.
    CustomerStatus {
        /// The account is in regular use.
        Active => "ACTIVE",
        /// The account is dormant but retained.
        Inactive => "INACTIVE",
        /// The customer has cancelled their contract.
        Withdrawn => "WITHDRAWN",
    }
}

closed_enum! {
    /// Recurrence of a visit schedule.
    FrequencyType {
        Daily => "DAILY",
        Weekly => "WEEKLY",
        Monthly => "MONTHLY",
        Yearly => "YEARLY",
    }
}

closed_enum! {
    /// Kind of authentication token.
    TokenType {
        /// Short-lived token attached to requests.
        Access => "ACCESS",
        /// Long-lived token used to mint access tokens.
        Refresh => "REFRESH",
    }
}

closed_enum! {
    /// Direction of a transaction-history entry.
    TransactionType {
        Payment => "PAYMENT",
        Refund => "REFUND",
    }
}

closed_enum! {
    /// Role granted to a user account.
    UserRole {
        Admin => "ADMIN",
        Staff => "STAFF",
        Member => "MEMBER",
    }
}

closed_enum! {
    /// Sort direction for listing requests.
    SortOrder {
        Asc => "ASC",
        Desc => "DESC",
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for closed-enumeration conversion.

    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("INDIVIDUAL", CemeteryType::Individual)]
    #[case("FAMILY", CemeteryType::Family)]
    #[case("COMMUNITY", CemeteryType::Community)]
    #[case("BUSINESS", CemeteryType::Business)]
    fn maps_every_declared_cemetery_literal(#[case] raw: &str, #[case] expected: CemeteryType) {
        assert_eq!(CemeteryType::from_literal(raw).expect("known literal"), expected);
        assert_eq!(expected.as_str(), raw);
    }

    #[rstest]
    fn unknown_literal_names_the_offending_input() {
        let err = CustomerStatus::from_literal("BOGUS").expect_err("unknown literal should fail");
        assert_eq!(err.value, "BOGUS");
        assert_eq!(err.to_string(), "unknown value: `BOGUS`");
    }

    #[rstest]
    fn raw_and_double_encoded_literals_coerce_to_the_same_member() {
        let plain: CustomerStatus = coerce_member("ACTIVE").expect("raw literal");
        let wrapped: CustomerStatus = coerce_member("\"ACTIVE\"").expect("double-encoded literal");
        assert_eq!(plain, wrapped);
        assert_eq!(plain, CustomerStatus::Active);
    }

    #[rstest]
    fn coercion_still_rejects_unknown_members() {
        let plain = coerce_member::<CustomerStatus>("BOGUS").expect_err("unknown literal");
        let wrapped = coerce_member::<CustomerStatus>("\"BOGUS\"").expect_err("unknown literal");
        assert_eq!(plain.value, "BOGUS");
        assert_eq!(wrapped.value, "BOGUS");
    }

    #[rstest]
    fn decode_literal_leaves_non_json_input_untouched() {
        assert_eq!(decode_literal("ACTIVE"), "ACTIVE");
        assert_eq!(decode_literal("\"ACTIVE\""), "ACTIVE");
        // A JSON number is not a JSON string; the raw form falls through.
        assert_eq!(decode_literal("123"), "123");
    }

    #[rstest]
    fn literals_table_matches_declaration_order() {
        assert_eq!(
            FrequencyType::LITERALS,
            ["DAILY", "WEEKLY", "MONTHLY", "YEARLY"]
        );
        assert_eq!(SortOrder::LITERALS, ["ASC", "DESC"]);
    }

    #[rstest]
    fn from_str_parses_roles() {
        let role: UserRole = "STAFF".parse().expect("known literal");
        assert_eq!(role, UserRole::Staff);
        assert!("OWNER".parse::<UserRole>().is_err());
    }
}
