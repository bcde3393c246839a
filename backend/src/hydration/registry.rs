//! Read-only table of payload schemas.
//!
//! Every accessor builds its schema once behind a `OnceLock` and hands out
//! the same shared reference afterwards, so concurrent hydrators read the
//! table without coordination. Nothing here mutates after first use.
//!
//! Two payload types that share a shape deliberately share a schema: the
//! nominal distinction between, say, customer and user identifier payloads
//! lives in the payload type's brand parameter, and branding is a runtime
//! no-op.

use std::sync::{LazyLock, OnceLock};

use regex::Regex;

use super::schema::{Field, Schema};
use crate::domain::enums::{
    CemeteryType, ClosedEnum, CustomerStatus, FrequencyType, TokenType, TransactionType, UserRole,
};
use crate::domain::feedback::FEEDBACK_MESSAGE_MAX;
use crate::domain::identifier::UUID_V7_PATTERN;
use crate::domain::name::NAME_MAX;
use crate::domain::password::{PASSWORD_MAX, PASSWORD_MIN};

static ISO_8601_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = r"^\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}(?:\.\d+)?(?:Z|[+-]\d{2}:\d{2})$";
    Regex::new(pattern)
        .unwrap_or_else(|error| panic!("iso-8601 pattern failed to compile: {error}"))
});

static MAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new("^[^@]+@.+$")
        .unwrap_or_else(|error| panic!("mail pattern failed to compile: {error}"))
});

static DIGITS_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new("^[0-9]+$")
        .unwrap_or_else(|error| panic!("digits pattern failed to compile: {error}"))
});

static POSTAL_FIRST_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new("^[0-9]{3}$")
        .unwrap_or_else(|error| panic!("postal pattern failed to compile: {error}"))
});

static POSTAL_SECOND_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new("^[0-9]{4}$")
        .unwrap_or_else(|error| panic!("postal pattern failed to compile: {error}"))
});

macro_rules! cached_schema {
    ($(#[$meta:meta])* $name:ident, $builder:expr) => {
        $(#[$meta])*
        pub fn $name() -> &'static Schema {
            static SCHEMA: OnceLock<Schema> = OnceLock::new();
            SCHEMA.get_or_init($builder)
        }
    };
}

fn identifier_schema() -> Schema {
    Schema::pattern(&UUID_V7_PATTERN)
}

fn name_schema() -> Schema {
    Schema::object(vec![
        Field::required("first", Schema::length(1, NAME_MAX)),
        Field::required("last", Schema::length(1, NAME_MAX)),
    ])
}

fn postal_code_schema() -> Schema {
    Schema::object(vec![
        Field::required("first", Schema::pattern(&POSTAL_FIRST_PATTERN)),
        Field::required("second", Schema::pattern(&POSTAL_SECOND_PATTERN)),
    ])
}

fn address_schema() -> Schema {
    Schema::object(vec![
        Field::required("postalCode", postal_code_schema()),
        Field::required("prefecture", Schema::non_empty()),
        Field::required("city", Schema::non_empty()),
        Field::required("street", Schema::non_empty()),
        Field::nullable("building", Schema::non_empty()),
    ])
}

fn phone_schema() -> Schema {
    Schema::object(vec![
        Field::required("areaCode", Schema::pattern(&DIGITS_PATTERN)),
        Field::required("localCode", Schema::pattern(&DIGITS_PATTERN)),
        Field::required("subscriberNumber", Schema::pattern(&DIGITS_PATTERN)),
    ])
}

fn timestamp_schema() -> Schema {
    Schema::pattern(&ISO_8601_PATTERN)
}

fn mail_schema() -> Schema {
    Schema::pattern(&MAIL_PATTERN)
}

cached_schema!(
    /// Branded identifier payload, a bare UUIDv7 string on the wire.
    identifier,
    identifier_schema
);

cached_schema!(
    /// Person name payload, `{ first, last }`.
    person_name,
    name_schema
);

cached_schema!(
    /// Postal code payload, `{ first, second }`.
    postal_code,
    postal_code_schema
);

cached_schema!(
    /// Address payload with a nested postal code.
    address,
    address_schema
);

cached_schema!(
    /// Phone payload, `{ areaCode, localCode, subscriberNumber }`.
    phone,
    phone_schema
);

cached_schema!(
    /// Encoded mail address, a bare `local@domain` string.
    mail,
    mail_schema
);

cached_schema!(
    /// Page window payload.
    pager,
    || {
        Schema::object(vec![
            Field::required("total", Schema::integer_min(0)),
            Field::required("items", Schema::integer_min(1)),
            Field::required("current", Schema::integer_min(1)),
        ])
    }
);

cached_schema!(
    /// Date-time window with optionally absent bounds.
    date_time_range,
    || {
        Schema::object(vec![
            Field::nullable("min", timestamp_schema()),
            Field::nullable("max", timestamp_schema()),
        ])
    }
);

cached_schema!(
    /// Password payload, `{ value }`; character classes are judged by the
    /// domain constructor, only length is structural.
    password,
    || {
        Schema::object(vec![Field::required(
            "value",
            Schema::length(PASSWORD_MIN, PASSWORD_MAX),
        )])
    }
);

cached_schema!(
    /// Sign-in credentials payload.
    credentials,
    || {
        Schema::object(vec![
            Field::required("mailAddress", mail_schema()),
            Field::required("password", Schema::length(PASSWORD_MIN, PASSWORD_MAX)),
        ])
    }
);

cached_schema!(
    /// Cemetery entry payload.
    cemetery,
    || {
        Schema::object(vec![
            Field::required("identifier", identifier_schema()),
            Field::required("customerIdentifier", identifier_schema()),
            Field::required("cemeteryType", Schema::members(CemeteryType::LITERALS)),
            Field::required("name", Schema::length(1, NAME_MAX)),
            Field::required("address", address_schema()),
            Field::nullable("note", Schema::non_empty()),
        ])
    }
);

cached_schema!(
    /// Customer entry payload.
    customer,
    || {
        Schema::object(vec![
            Field::required("identifier", identifier_schema()),
            Field::required("name", name_schema()),
            Field::required("address", address_schema()),
            Field::required("phone", phone_schema()),
            Field::nullable("mailAddress", mail_schema()),
            Field::required("status", Schema::members(CustomerStatus::LITERALS)),
            Field::required(
                "cemeteryIdentifiers",
                Schema::array(Schema::lazy(identifier)),
            ),
        ])
    }
);

cached_schema!(
    /// User entry payload.
    user,
    || {
        Schema::object(vec![
            Field::required("identifier", identifier_schema()),
            Field::required("name", name_schema()),
            Field::required("address", address_schema()),
            Field::required("phone", phone_schema()),
            Field::required("mailAddress", mail_schema()),
            Field::required("role", Schema::members(UserRole::LITERALS)),
        ])
    }
);

cached_schema!(
    /// Visit entry payload.
    visit,
    || {
        Schema::object(vec![
            Field::required("identifier", identifier_schema()),
            Field::required("customerIdentifier", identifier_schema()),
            Field::required("cemeteryIdentifier", identifier_schema()),
            Field::required("visitedAt", timestamp_schema()),
            Field::nullable("note", Schema::non_empty()),
        ])
    }
);

cached_schema!(
    /// Schedule entry payload; `subSchedules` nests this same schema,
    /// resolved lazily so the definition never recurses eagerly.
    schedule,
    || {
        Schema::object(vec![
            Field::required("identifier", identifier_schema()),
            Field::required("customerIdentifier", identifier_schema()),
            Field::required("frequencyType", Schema::members(FrequencyType::LITERALS)),
            Field::required("startsAt", timestamp_schema()),
            Field::nullable("subSchedules", Schema::array(Schema::lazy(schedule))),
        ])
    }
);

cached_schema!(
    /// Feedback entry payload.
    feedback,
    || {
        Schema::object(vec![
            Field::required("identifier", identifier_schema()),
            Field::required("customerIdentifier", identifier_schema()),
            Field::required("message", Schema::length(1, FEEDBACK_MESSAGE_MAX)),
            Field::required("postedAt", timestamp_schema()),
        ])
    }
);

cached_schema!(
    /// Transaction-history entry payload.
    transaction,
    || {
        Schema::object(vec![
            Field::required("identifier", identifier_schema()),
            Field::required("customerIdentifier", identifier_schema()),
            Field::required(
                "transactionType",
                Schema::members(TransactionType::LITERALS),
            ),
            Field::required("amount", Schema::integer_min(0)),
            Field::required("recordedAt", timestamp_schema()),
        ])
    }
);

cached_schema!(
    /// Auth token payload.
    auth_token,
    || {
        Schema::object(vec![
            Field::required("tokenType", Schema::members(TokenType::LITERALS)),
            Field::required("value", Schema::non_empty()),
            Field::required("expiresAt", timestamp_schema()),
        ])
    }
);

cached_schema!(
    /// Upstream cemetery listing envelope.
    cemetery_list,
    || {
        Schema::object(vec![Field::required(
            "cemeteries",
            Schema::array(Schema::lazy(cemetery)),
        )])
    }
);

cached_schema!(
    /// Upstream customer listing envelope.
    customer_list,
    || {
        Schema::object(vec![Field::required(
            "customers",
            Schema::array(Schema::lazy(customer)),
        )])
    }
);

cached_schema!(
    /// Upstream user listing envelope.
    user_list,
    || {
        Schema::object(vec![Field::required(
            "users",
            Schema::array(Schema::lazy(user)),
        )])
    }
);

cached_schema!(
    /// Upstream visit listing envelope.
    visit_list,
    || {
        Schema::object(vec![Field::required(
            "visits",
            Schema::array(Schema::lazy(visit)),
        )])
    }
);

cached_schema!(
    /// Upstream schedule listing envelope.
    schedule_list,
    || {
        Schema::object(vec![Field::required(
            "schedules",
            Schema::array(Schema::lazy(schedule)),
        )])
    }
);

cached_schema!(
    /// Upstream feedback listing envelope.
    feedback_list,
    || {
        Schema::object(vec![Field::required(
            "feedbacks",
            Schema::array(Schema::lazy(feedback)),
        )])
    }
);

cached_schema!(
    /// Upstream transaction listing envelope.
    transaction_list,
    || {
        Schema::object(vec![Field::required(
            "transactions",
            Schema::array(Schema::lazy(transaction)),
        )])
    }
);

#[cfg(test)]
mod tests {
    //! Unit tests for the schema table.

    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    fn accessors_hand_out_the_same_schema() {
        let first: *const Schema = customer();
        let second: *const Schema = customer();
        assert!(std::ptr::eq(first, second));
    }

    #[rstest]
    fn schedule_schema_validates_nested_levels_lazily() {
        let payload = json!({
            "identifier": "01890a5d-ac96-774b-bcce-b302099a8057",
            "customerIdentifier": "01890a5d-ac96-774b-bcce-b302099a8058",
            "frequencyType": "MONTHLY",
            "startsAt": "2026-03-01T09:00:00Z",
            "subSchedules": [{
                "identifier": "01890a5d-ac96-774b-bcce-b302099a8059",
                "customerIdentifier": "01890a5d-ac96-774b-bcce-b302099a8058",
                "frequencyType": "WEEKLY",
                "startsAt": "2026-03-08T09:00:00Z",
                "subSchedules": null
            }]
        });
        assert!(schedule().validate(&payload).is_ok());
    }

    #[rstest]
    fn schedule_schema_reports_nested_violations_with_full_paths() {
        let payload = json!({
            "identifier": "01890a5d-ac96-774b-bcce-b302099a8057",
            "customerIdentifier": "01890a5d-ac96-774b-bcce-b302099a8058",
            "frequencyType": "MONTHLY",
            "startsAt": "2026-03-01T09:00:00Z",
            "subSchedules": [{
                "identifier": "not-a-uuid",
                "customerIdentifier": "01890a5d-ac96-774b-bcce-b302099a8058",
                "frequencyType": "SOMETIMES",
                "startsAt": "2026-03-08T09:00:00Z"
            }]
        });
        let err = schedule()
            .validate(&payload)
            .expect_err("nested violations expected");
        let paths: Vec<&str> = err
            .violations()
            .iter()
            .map(|violation| violation.path.as_str())
            .collect();
        assert_eq!(
            paths,
            [
                "subSchedules[0].identifier",
                "subSchedules[0].frequencyType"
            ]
        );
    }

    #[rstest]
    fn customer_schema_accepts_a_double_encoded_status() {
        let payload = json!({
            "identifier": "01890a5d-ac96-774b-bcce-b302099a8057",
            "name": {"first": "Hanako", "last": "Sato"},
            "address": {
                "postalCode": {"first": "150", "second": "0041"},
                "prefecture": "Tokyo",
                "city": "Shibuya",
                "street": "1-2-3 Jinnan",
                "building": null
            },
            "phone": {"areaCode": "03", "localCode": "1234", "subscriberNumber": "5678"},
            "mailAddress": "hanako@example.jp",
            "status": "\"ACTIVE\"",
            "cemeteryIdentifiers": ["01890a5d-ac96-774b-bcce-b302099a8059"]
        });
        assert!(customer().validate(&payload).is_ok());
    }

    #[rstest]
    fn pager_schema_rejects_negative_and_zero_windows() {
        let err = pager()
            .validate(&json!({"total": -1, "items": 0, "current": 1}))
            .expect_err("invalid pager payload should fail");
        assert_eq!(err.violations().len(), 2);
    }

    #[rstest]
    fn timestamp_fields_must_look_like_iso_8601() {
        let err = visit()
            .validate(&json!({
                "identifier": "01890a5d-ac96-774b-bcce-b302099a8057",
                "customerIdentifier": "01890a5d-ac96-774b-bcce-b302099a8058",
                "cemeteryIdentifier": "01890a5d-ac96-774b-bcce-b302099a8059",
                "visitedAt": "15 March 2026",
                "note": null
            }))
            .expect_err("non-iso timestamp should fail");
        assert_eq!(err.violations()[0].path, "visitedAt");
    }
}
