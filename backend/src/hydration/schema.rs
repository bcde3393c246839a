//! Declarative payload schemas and structural validation.
//!
//! A [`Schema`] describes the exact shape a wire payload must have before it
//! may be decoded into a typed payload struct. Validation walks the whole
//! value and aggregates every violation with its dotted field path; this is
//! the recoverable, caller-facing error tier, in contrast to the fail-fast
//! domain constructors.
//!
//! Self-referential shapes (a schedule nesting sub-schedules) are expressed
//! with [`Schema::lazy`], which defers resolution of the referenced schema to
//! validation time so definitions never recurse eagerly.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use crate::domain::enums::decode_literal;

/// One field of an object schema.
#[derive(Debug, Clone)]
pub struct Field {
    name: &'static str,
    schema: Schema,
    nullable: bool,
}

impl Field {
    /// Field that must be present and non-null.
    pub fn required(name: &'static str, schema: Schema) -> Self {
        Self {
            name,
            schema,
            nullable: false,
        }
    }

    /// Field that may be `null` or absent.
    pub fn nullable(name: &'static str, schema: Schema) -> Self {
        Self {
            name,
            schema,
            nullable: true,
        }
    }
}

/// Declarative description of a payload shape.
#[derive(Debug, Clone)]
pub enum Schema {
    /// A JSON boolean.
    Boolean,
    /// A JSON integer within optional bounds.
    Integer {
        /// Inclusive lower bound.
        min: Option<i64>,
        /// Inclusive upper bound.
        max: Option<i64>,
    },
    /// A JSON string within length bounds, optionally pattern-checked.
    String {
        /// Minimum length in characters.
        min_len: usize,
        /// Maximum length in characters, unbounded when absent.
        max_len: Option<usize>,
        /// Full-match pattern, if any.
        pattern: Option<&'static LazyLock<Regex>>,
    },
    /// A member of a closed enumeration, tolerating double-encoded literals.
    Members {
        /// Accepted wire literals.
        literals: &'static [&'static str],
    },
    /// A JSON array whose elements all match `items`.
    Array {
        /// Element schema.
        items: Box<Schema>,
    },
    /// A JSON object with a fixed field set.
    Object {
        /// Declared fields; anything else is a violation.
        fields: Vec<Field>,
    },
    /// A reference resolved on first use, for self-referential shapes.
    Lazy(fn() -> &'static Schema),
}

impl Schema {
    /// Boolean schema.
    pub fn boolean() -> Self {
        Self::Boolean
    }

    /// Integer schema without bounds.
    pub fn integer() -> Self {
        Self::Integer {
            min: None,
            max: None,
        }
    }

    /// Integer schema with an inclusive lower bound.
    pub fn integer_min(min: i64) -> Self {
        Self::Integer {
            min: Some(min),
            max: None,
        }
    }

    /// Free-form string schema, empty allowed.
    pub fn text() -> Self {
        Self::String {
            min_len: 0,
            max_len: None,
            pattern: None,
        }
    }

    /// String schema requiring at least one character.
    pub fn non_empty() -> Self {
        Self::String {
            min_len: 1,
            max_len: None,
            pattern: None,
        }
    }

    /// String schema with inclusive character-length bounds.
    pub fn length(min_len: usize, max_len: usize) -> Self {
        Self::String {
            min_len,
            max_len: Some(max_len),
            pattern: None,
        }
    }

    /// String schema that must fully match `pattern`.
    pub fn pattern(pattern: &'static LazyLock<Regex>) -> Self {
        Self::String {
            min_len: 0,
            max_len: None,
            pattern: Some(pattern),
        }
    }

    /// Closed-enumeration schema over the given literals.
    pub fn members(literals: &'static [&'static str]) -> Self {
        Self::Members { literals }
    }

    /// Array schema over `items`.
    pub fn array(items: Schema) -> Self {
        Self::Array {
            items: Box::new(items),
        }
    }

    /// Object schema over the declared fields.
    pub fn object(fields: Vec<Field>) -> Self {
        Self::Object { fields }
    }

    /// Lazily resolved reference to another schema.
    pub fn lazy(resolve: fn() -> &'static Schema) -> Self {
        Self::Lazy(resolve)
    }

    /// Validate `value`, aggregating every violation with its field path.
    pub fn validate(&self, value: &Value) -> Result<(), SchemaError> {
        let mut violations = Vec::new();
        self.check(value, "", &mut violations);
        if violations.is_empty() {
            Ok(())
        } else {
            Err(SchemaError { violations })
        }
    }

    fn check(&self, value: &Value, path: &str, violations: &mut Vec<SchemaViolation>) {
        match self {
            Self::Boolean => {
                if !value.is_boolean() {
                    violations.push(SchemaViolation::at(path, ViolationKind::ExpectedBoolean));
                }
            }
            Self::Integer { min, max } => check_integer(value, *min, *max, path, violations),
            Self::String {
                min_len,
                max_len,
                pattern,
            } => check_string(value, *min_len, *max_len, *pattern, path, violations),
            Self::Members { literals } => check_members(value, literals, path, violations),
            Self::Array { items } => match value.as_array() {
                Some(entries) => {
                    for (index, entry) in entries.iter().enumerate() {
                        items.check(entry, &format!("{path}[{index}]"), violations);
                    }
                }
                None => {
                    violations.push(SchemaViolation::at(path, ViolationKind::ExpectedArray));
                }
            },
            Self::Object { fields } => check_object(value, fields, path, violations),
            Self::Lazy(resolve) => resolve().check(value, path, violations),
        }
    }
}

fn check_integer(
    value: &Value,
    min: Option<i64>,
    max: Option<i64>,
    path: &str,
    violations: &mut Vec<SchemaViolation>,
) {
    let Some(number) = value.as_i64() else {
        violations.push(SchemaViolation::at(path, ViolationKind::ExpectedInteger));
        return;
    };
    let below = min.is_some_and(|bound| number < bound);
    let above = max.is_some_and(|bound| number > bound);
    if below || above {
        violations.push(SchemaViolation::at(
            path,
            ViolationKind::OutOfBounds { min, max },
        ));
    }
}

fn check_string(
    value: &Value,
    min_len: usize,
    max_len: Option<usize>,
    pattern: Option<&'static LazyLock<Regex>>,
    path: &str,
    violations: &mut Vec<SchemaViolation>,
) {
    let Some(text) = value.as_str() else {
        violations.push(SchemaViolation::at(path, ViolationKind::ExpectedString));
        return;
    };
    let length = text.chars().count();
    if length < min_len || max_len.is_some_and(|bound| length > bound) {
        violations.push(SchemaViolation::at(
            path,
            ViolationKind::LengthOutOfRange {
                min: min_len,
                max: max_len,
            },
        ));
    }
    if let Some(pattern) = pattern {
        if !pattern.is_match(text) {
            violations.push(SchemaViolation::at(path, ViolationKind::PatternMismatch));
        }
    }
}

fn check_members(
    value: &Value,
    literals: &[&'static str],
    path: &str,
    violations: &mut Vec<SchemaViolation>,
) {
    // A non-string is rejected before any coercion is attempted.
    let Some(raw) = value.as_str() else {
        violations.push(SchemaViolation::at(path, ViolationKind::ExpectedString));
        return;
    };
    let literal = decode_literal(raw);
    if !literals.contains(&literal.as_ref()) {
        violations.push(SchemaViolation::at(
            path,
            ViolationKind::UnknownMember {
                value: literal.into_owned(),
            },
        ));
    }
}

fn check_object(
    value: &Value,
    fields: &[Field],
    path: &str,
    violations: &mut Vec<SchemaViolation>,
) {
    let Some(map) = value.as_object() else {
        violations.push(SchemaViolation::at(path, ViolationKind::ExpectedObject));
        return;
    };
    for field in fields {
        let child = join_path(path, field.name);
        match map.get(field.name) {
            None => {
                if !field.nullable {
                    violations.push(SchemaViolation::at(&child, ViolationKind::MissingField));
                }
            }
            Some(Value::Null) => {
                if !field.nullable {
                    violations.push(SchemaViolation::at(&child, ViolationKind::MissingField));
                }
            }
            Some(present) => field.schema.check(present, &child, violations),
        }
    }
    for key in map.keys() {
        if !fields.iter().any(|field| field.name == key.as_str()) {
            violations.push(SchemaViolation::at(
                &join_path(path, key),
                ViolationKind::UnexpectedField,
            ));
        }
    }
}

fn join_path(path: &str, name: &str) -> String {
    if path.is_empty() {
        name.to_owned()
    } else {
        format!("{path}.{name}")
    }
}

/// A single violated constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViolationKind {
    /// The value was not a boolean.
    ExpectedBoolean,
    /// The value was not an integer.
    ExpectedInteger,
    /// The value was not a string.
    ExpectedString,
    /// The value was not an array.
    ExpectedArray,
    /// The value was not an object.
    ExpectedObject,
    /// A required field was absent or null.
    MissingField,
    /// A field outside the declared set was present.
    UnexpectedField,
    /// A string length fell outside the declared bounds.
    LengthOutOfRange {
        /// Minimum length in characters.
        min: usize,
        /// Maximum length in characters, unbounded when absent.
        max: Option<usize>,
    },
    /// A string did not match the declared pattern.
    PatternMismatch,
    /// An integer fell outside the declared bounds.
    OutOfBounds {
        /// Inclusive lower bound.
        min: Option<i64>,
        /// Inclusive upper bound.
        max: Option<i64>,
    },
    /// A string matched no member of the closed enumeration.
    UnknownMember {
        /// The offending literal after coercion.
        value: String,
    },
    /// The value passed structural checks but did not decode into the
    /// typed payload; schema and payload type have drifted apart.
    Undecodable {
        /// Decoder-supplied detail.
        message: String,
    },
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExpectedBoolean => write!(f, "expected a boolean"),
            Self::ExpectedInteger => write!(f, "expected an integer"),
            Self::ExpectedString => write!(f, "expected a string"),
            Self::ExpectedArray => write!(f, "expected an array"),
            Self::ExpectedObject => write!(f, "expected an object"),
            Self::MissingField => write!(f, "required field is missing"),
            Self::UnexpectedField => write!(f, "field is not part of the schema"),
            Self::LengthOutOfRange { min, max } => match max {
                Some(max) => write!(f, "length must be between {min} and {max} characters"),
                None => write!(f, "length must be at least {min} characters"),
            },
            Self::PatternMismatch => write!(f, "value does not match the expected pattern"),
            Self::OutOfBounds { min, max } => match (min, max) {
                (Some(min), Some(max)) => {
                    write!(f, "number must be between {min} and {max}")
                }
                (Some(min), None) => write!(f, "number must be at least {min}"),
                (None, Some(max)) => write!(f, "number must be at most {max}"),
                (None, None) => write!(f, "number is out of bounds"),
            },
            Self::UnknownMember { value } => write!(f, "unknown value: `{value}`"),
            Self::Undecodable { message } => {
                write!(f, "payload did not decode: {message}")
            }
        }
    }
}

/// One violation at one field path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaViolation {
    /// Dotted path from the payload root; `$` is the root itself.
    pub path: String,
    /// The violated constraint.
    pub kind: ViolationKind,
}

impl SchemaViolation {
    fn at(path: &str, kind: ViolationKind) -> Self {
        let path = if path.is_empty() {
            "$".to_owned()
        } else {
            path.to_owned()
        };
        Self { path, kind }
    }
}

impl fmt::Display for SchemaViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.kind)
    }
}

/// Aggregate structural validation failure.
///
/// Carries every violation found in one pass so callers can report them all
/// at once; this error is recoverable and maps to a caller-facing rejection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaError {
    violations: Vec<SchemaViolation>,
}

impl SchemaError {
    /// Every violation found, in walk order.
    pub fn violations(&self) -> &[SchemaViolation] {
        self.violations.as_slice()
    }

    /// Wrap a typed-decode failure after structural checks passed.
    pub(crate) fn undecodable(err: serde_json::Error) -> Self {
        Self {
            violations: vec![SchemaViolation::at(
                "",
                ViolationKind::Undecodable {
                    message: err.to_string(),
                },
            )],
        }
    }
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "payload failed schema validation: ")?;
        for (index, violation) in self.violations.iter().enumerate() {
            if index > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{violation}")?;
        }
        Ok(())
    }
}

impl std::error::Error for SchemaError {}

#[cfg(test)]
mod tests {
    //! Unit tests for structural validation and violation aggregation.

    use super::*;
    use rstest::rstest;
    use serde_json::json;

    fn contact_schema() -> Schema {
        Schema::object(vec![
            Field::required("name", Schema::length(1, 32)),
            Field::required("age", Schema::integer_min(0)),
            Field::nullable("note", Schema::non_empty()),
            Field::required(
                "status",
                Schema::members(&["ACTIVE", "INACTIVE"]),
            ),
            Field::required(
                "tags",
                Schema::array(Schema::non_empty()),
            ),
        ])
    }

    #[rstest]
    fn accepts_a_conforming_payload() {
        let payload = json!({
            "name": "Hanako",
            "age": 41,
            "note": null,
            "status": "ACTIVE",
            "tags": ["priority"]
        });
        assert!(contact_schema().validate(&payload).is_ok());
    }

    #[rstest]
    fn aggregates_every_violation_with_its_path() {
        let payload = json!({
            "name": "",
            "age": -3,
            "status": "BOGUS",
            "tags": ["ok", ""],
            "extra": true
        });
        let err = contact_schema()
            .validate(&payload)
            .expect_err("violations expected");
        let paths: Vec<&str> = err
            .violations()
            .iter()
            .map(|violation| violation.path.as_str())
            .collect();
        assert_eq!(paths, ["name", "age", "status", "tags[1]", "extra"]);
        assert!(matches!(
            err.violations()[2].kind,
            ViolationKind::UnknownMember { ref value } if value == "BOGUS"
        ));
    }

    #[rstest]
    fn nullable_fields_accept_null_and_absence() {
        let absent = json!({
            "name": "Hanako",
            "age": 41,
            "status": "ACTIVE",
            "tags": []
        });
        assert!(contact_schema().validate(&absent).is_ok());
    }

    #[rstest]
    fn required_fields_reject_null_and_absence() {
        let err = contact_schema()
            .validate(&json!({
                "name": null,
                "age": 41,
                "status": "ACTIVE",
                "tags": []
            }))
            .expect_err("null required field should fail");
        assert_eq!(
            err.violations(),
            [SchemaViolation {
                path: "name".to_owned(),
                kind: ViolationKind::MissingField
            }]
        );
    }

    #[rstest]
    fn member_fields_unwrap_double_encoded_literals() {
        let payload = json!({
            "name": "Hanako",
            "age": 41,
            "status": "\"INACTIVE\"",
            "tags": []
        });
        assert!(contact_schema().validate(&payload).is_ok());
    }

    #[rstest]
    fn member_fields_reject_non_strings_outright() {
        let err = contact_schema()
            .validate(&json!({
                "name": "Hanako",
                "age": 41,
                "status": 7,
                "tags": []
            }))
            .expect_err("non-string member should fail");
        assert_eq!(
            err.violations(),
            [SchemaViolation {
                path: "status".to_owned(),
                kind: ViolationKind::ExpectedString
            }]
        );
    }

    #[rstest]
    fn root_type_mismatch_reports_the_root_path() {
        let err = contact_schema()
            .validate(&json!(["not", "an", "object"]))
            .expect_err("non-object payload should fail");
        assert_eq!(err.violations()[0].path, "$");
        assert_eq!(err.violations()[0].kind, ViolationKind::ExpectedObject);
    }

    #[rstest]
    fn nested_paths_use_dotted_segments() {
        let schema = Schema::object(vec![Field::required(
            "address",
            Schema::object(vec![Field::required(
                "postalCode",
                Schema::object(vec![Field::required("first", Schema::length(3, 3))]),
            )]),
        )]);
        let err = schema
            .validate(&json!({"address": {"postalCode": {"first": "15"}}}))
            .expect_err("short postal segment should fail");
        assert_eq!(err.violations()[0].path, "address.postalCode.first");
    }
}
